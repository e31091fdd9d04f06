//! End-to-end testcase pipeline.
//!
//! Pipeline: prepare `input/` and `output/` -> generate the suite -> write
//! input files -> optionally compile and run the reference solver per input
//! -> write `manifest.json` -> package everything into `testcases.zip`.
//!
//! Determinism: the seed fully determines file contents; with a
//! deterministic solver the archive bytes are reproducible as well.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::harness::generator::{generate_suite, NamedCase, SuiteGenConfig};
use crate::harness::package::{write_archive, ArchiveEntry};
use crate::harness::solver::{SolverError, SolverSpec};

const INPUT_DIR: &str = "input";
const OUTPUT_DIR: &str = "output";
const MANIFEST_NAME: &str = "manifest.json";
const ARCHIVE_NAME: &str = "testcases.zip";

/// Harness configuration: where to work and which solver to drive.
#[derive(Clone, Debug)]
pub struct HarnessConfig {
    /// Directory receiving `input/`, `output/`, the manifest, and the archive.
    pub work_dir: PathBuf,
    /// Reference solver; `None` packages inputs only.
    pub solver: Option<SolverSpec>,
}

/// Summary of a completed harness run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessReport {
    pub case_count: usize,
    pub outputs_written: bool,
    pub archive_path: PathBuf,
}

/// Per-case manifest metadata.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseMeta {
    pub name: String,
    pub input_file: String,
    pub value_count: usize,
}

/// Repro manifest embedded in the archive.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SuiteManifest {
    pub schema_version: u32,
    pub seed: u64,
    pub cases: Vec<CaseMeta>,
}

/// Harness pipeline failures.
#[derive(Debug)]
#[non_exhaustive]
pub enum HarnessError {
    /// Filesystem operation failed.
    Io(io::Error),
    /// Suite generation or constraint validation failed.
    Generate(String),
    /// Solver compile or run failed.
    Solver(SolverError),
    /// Archive packaging failed.
    Package(String),
    /// Manifest serialization failed.
    Manifest(serde_json::Error),
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Generate(msg) => write!(f, "suite generation failed: {msg}"),
            Self::Solver(err) => write!(f, "solver failed: {err}"),
            Self::Package(msg) => write!(f, "archive packaging failed: {msg}"),
            Self::Manifest(err) => write!(f, "manifest serialization failed: {err}"),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Solver(err) => Some(err),
            Self::Manifest(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for HarnessError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<SolverError> for HarnessError {
    fn from(err: SolverError) -> Self {
        Self::Solver(err)
    }
}

/// Orchestrates one generation run over a work directory.
pub struct TestcaseHarness {
    cfg: HarnessConfig,
}

impl TestcaseHarness {
    pub fn new(cfg: HarnessConfig) -> Self {
        Self { cfg }
    }

    /// Execute the full pipeline for one seed.
    pub fn run(&self, seed: u64, suite_cfg: &SuiteGenConfig) -> Result<HarnessReport, HarnessError> {
        let input_dir = self.cfg.work_dir.join(INPUT_DIR);
        let output_dir = self.cfg.work_dir.join(OUTPUT_DIR);
        prepare_dir(&input_dir)?;
        prepare_dir(&output_dir)?;

        let cases = generate_suite(seed, suite_cfg).map_err(HarnessError::Generate)?;

        let mut inputs = Vec::with_capacity(cases.len());
        let mut metas = Vec::with_capacity(cases.len());
        for (idx, case) in cases.iter().enumerate() {
            let file_name = format!("input_{idx}.txt");
            let text = case.input.render();
            fs::write(input_dir.join(&file_name), &text)?;
            metas.push(case_meta(case, &file_name));
            inputs.push((file_name, text.into_bytes()));
        }

        let mut outputs = Vec::new();
        if let Some(solver) = &self.cfg.solver {
            solver.compile()?;
            for (idx, (file_name, _)) in inputs.iter().enumerate() {
                let stdout = solver.run_on_file(&input_dir.join(file_name))?;
                let out_name = format!("output_{idx}.txt");
                fs::write(output_dir.join(&out_name), &stdout)?;
                outputs.push((out_name, stdout));
            }
        }

        let manifest = SuiteManifest {
            schema_version: suite_cfg.schema_version,
            seed,
            cases: metas,
        };
        let manifest_bytes =
            serde_json::to_vec_pretty(&manifest).map_err(HarnessError::Manifest)?;
        fs::write(self.cfg.work_dir.join(MANIFEST_NAME), &manifest_bytes)?;

        let mut entries = Vec::with_capacity(inputs.len() + outputs.len() + 1);
        for (name, bytes) in &inputs {
            entries.push(ArchiveEntry {
                name: format!("{INPUT_DIR}/{name}"),
                bytes: bytes.clone(),
            });
        }
        for (name, bytes) in &outputs {
            entries.push(ArchiveEntry {
                name: format!("{OUTPUT_DIR}/{name}"),
                bytes: bytes.clone(),
            });
        }
        entries.push(ArchiveEntry {
            name: MANIFEST_NAME.to_string(),
            bytes: manifest_bytes,
        });

        let archive_path = self.cfg.work_dir.join(ARCHIVE_NAME);
        write_archive(&archive_path, &entries).map_err(HarnessError::Package)?;

        Ok(HarnessReport {
            case_count: inputs.len(),
            outputs_written: !outputs.is_empty(),
            archive_path,
        })
    }
}

fn case_meta(case: &NamedCase, input_file: &str) -> CaseMeta {
    CaseMeta {
        name: case.name.clone(),
        input_file: input_file.to_string(),
        value_count: case.input.value_count(),
    }
}

/// Create the directory if missing and remove stale `.txt` files from
/// earlier runs so the archive never picks up leftovers.
fn prepare_dir(dir: &Path) -> Result<(), io::Error> {
    fs::create_dir_all(dir)?;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == "txt") {
            fs::remove_file(path)?;
        }
    }
    Ok(())
}
