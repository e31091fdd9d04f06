//! Random tree generation with bounded ancestor distance.
//!
//! Construction invariant: nodes are placed in a random order starting at
//! the root, and each later node picks its parent from a window of recently
//! placed nodes. The window width is what shapes the tree: width 1 is a
//! path, width `n` is an unconstrained random tree, and narrow windows
//! produce long, deep trees that stress depth-sensitive solutions.

use serde::{Deserialize, Serialize};

use crate::gen::error::GenError;
use crate::gen::rng::GenRng;

/// An undirected tree on nodes `1..=n` with a designated root.
///
/// Holds exactly `n - 1` edges forming a connected acyclic graph; edge pair
/// orientation and list order carry no meaning and are randomized at
/// generation time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    n: u32,
    root: u32,
    edges: Vec<(u32, u32)>,
}

impl Tree {
    /// Node count.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Designated root, in `[1, n]`.
    pub fn root(&self) -> u32 {
        self.root
    }

    /// Undirected edges, `n - 1` of them.
    pub fn edges(&self) -> &[(u32, u32)] {
        &self.edges
    }
}

/// Generate a random tree on `n` nodes rooted at `root`.
///
/// Non-root nodes are placed in a shuffled order after the root; the node at
/// position `i` picks its parent uniformly from the previous
/// `max_parent_distance` positions (window clamped to the start). Stored
/// edge orientation is randomized and the edge list is shuffled.
pub fn random_tree(
    rng: &mut GenRng,
    n: u32,
    max_parent_distance: u32,
    root: u32,
) -> Result<Tree, GenError> {
    if n < 1 {
        return Err(GenError::EmptyTree);
    }
    if root < 1 || root > n {
        return Err(GenError::RootOutOfRange { root, n });
    }
    if max_parent_distance == 0 {
        return Err(GenError::ZeroParentDistance);
    }

    let mut order = Vec::with_capacity(n as usize);
    order.push(root);
    order.extend((1..=n).filter(|&v| v != root));
    rng.shuffle(&mut order[1..]);

    let mut edges = Vec::with_capacity(n as usize - 1);
    for i in 1..n as usize {
        let window_start = i.saturating_sub(max_parent_distance as usize);
        let parent_pos = window_start + rng.gen_index(i - window_start);
        let (a, b) = (order[parent_pos], order[i]);
        edges.push(if rng.gen_bool() { (a, b) } else { (b, a) });
    }
    rng.shuffle(&mut edges);

    Ok(Tree { n, root, edges })
}

/// Path graph rooted at `root` (parent distance 1).
pub fn chain_tree(rng: &mut GenRng, n: u32, root: u32) -> Result<Tree, GenError> {
    random_tree(rng, n, 1, root)
}

/// Star: every non-root node is a direct child of `root`.
pub fn star_tree(rng: &mut GenRng, n: u32, root: u32) -> Result<Tree, GenError> {
    if n < 1 {
        return Err(GenError::EmptyTree);
    }
    if root < 1 || root > n {
        return Err(GenError::RootOutOfRange { root, n });
    }
    let mut edges = Vec::with_capacity(n as usize - 1);
    for v in (1..=n).filter(|&v| v != root) {
        edges.push(if rng.gen_bool() { (root, v) } else { (v, root) });
    }
    rng.shuffle(&mut edges);
    Ok(Tree { n, root, edges })
}

/// Pick a tree shape at random: chain, star, or windowed random trees of
/// increasing parent distance, via fixed probability bands over one uniform
/// draw. The root is uniform in `[1, n]`.
pub fn random_tree_variant(rng: &mut GenRng, n: u32) -> Result<Tree, GenError> {
    if n < 1 {
        return Err(GenError::EmptyTree);
    }
    let root = rng.gen_u64(1, u64::from(n)) as u32;
    let band = rng.next_unit_f64();
    if band < 0.2 {
        chain_tree(rng, n, root)
    } else if band < 0.4 {
        star_tree(rng, n, root)
    } else if band < 0.6 {
        random_tree(rng, n, 5, root)
    } else if band < 0.7 {
        random_tree(rng, n, 10, root)
    } else if band < 0.8 {
        random_tree(rng, n, 100, root)
    } else if band < 0.9 {
        random_tree(rng, n, 1000, root)
    } else {
        random_tree(rng, n, n, root)
    }
}
