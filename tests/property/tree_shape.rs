//! Structural invariants of the tree generators.

use casegen_rs::gen::{random_tree, random_tree_variant, star_tree, GenRng, Tree};
use proptest::prelude::*;

/// Union-find connectivity and acyclicity check.
fn assert_is_tree(tree: &Tree) -> Result<(), TestCaseError> {
    let n = tree.n() as usize;
    prop_assert_eq!(tree.edges().len(), n - 1);
    prop_assert!(tree.root() >= 1 && tree.root() <= tree.n());

    let mut parent: Vec<usize> = (0..=n).collect();
    fn find(parent: &mut [usize], mut x: usize) -> usize {
        while parent[x] != x {
            parent[x] = parent[parent[x]];
            x = parent[x];
        }
        x
    }

    for &(a, b) in tree.edges() {
        prop_assert!(a >= 1 && a <= tree.n());
        prop_assert!(b >= 1 && b <= tree.n());
        prop_assert_ne!(a, b);
        let (ra, rb) = (find(&mut parent, a as usize), find(&mut parent, b as usize));
        prop_assert_ne!(ra, rb, "cycle through edge ({}, {})", a, b);
        parent[ra] = rb;
    }
    let root = find(&mut parent, 1);
    for v in 2..=n {
        prop_assert_eq!(find(&mut parent, v), root, "node {} disconnected", v);
    }
    Ok(())
}

proptest! {
    /// Any valid parameter combination yields a connected acyclic graph on
    /// nodes `1..=n` containing the root.
    #[test]
    fn random_tree_is_always_a_tree(
        seed in any::<u64>(),
        n in 1u32..300,
        dist in 1u32..400,
        root_offset in 0u32..300,
    ) {
        let root = 1 + root_offset % n;
        let mut rng = GenRng::new(seed);
        let tree = random_tree(&mut rng, n, dist, root).unwrap();
        prop_assert_eq!(tree.root(), root);
        assert_is_tree(&tree)?;
    }

    /// Star trees keep every node adjacent to the root.
    #[test]
    fn star_tree_depth_is_one(seed in any::<u64>(), n in 1u32..200, root_offset in 0u32..200) {
        let root = 1 + root_offset % n;
        let mut rng = GenRng::new(seed);
        let tree = star_tree(&mut rng, n, root).unwrap();
        assert_is_tree(&tree)?;
        prop_assert!(tree.edges().iter().all(|&(a, b)| a == root || b == root));
    }

    /// The variant picker never produces a malformed tree, whatever band
    /// the unit draw lands in.
    #[test]
    fn variant_is_always_a_tree(seed in any::<u64>(), n in 1u32..300) {
        let mut rng = GenRng::new(seed);
        let tree = random_tree_variant(&mut rng, n).unwrap();
        assert_is_tree(&tree)?;
    }
}
