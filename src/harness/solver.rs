//! Reference-solver invocation.
//!
//! The solver contract is language-agnostic: an optional one-shot compile
//! command, then a run command executed once per input file with stdin
//! redirected from the file and stdout captured as the expected output.
//! Redirecting stdin from the file (rather than piping it in) means no
//! writer thread is needed and large inputs cannot deadlock the pipe.

use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// External solver commands, argv-style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverSpec {
    /// One-shot compile step, e.g. `["g++", "sol.cpp", "-O2", "-o", "sol"]`.
    pub compile: Option<Vec<String>>,
    /// Per-input run step, e.g. `["./sol"]`.
    pub run: Vec<String>,
}

/// Solver pipeline failures.
#[derive(Debug)]
#[non_exhaustive]
pub enum SolverError {
    /// A command list was empty.
    EmptyCommand,
    /// The compile step exited non-zero.
    CompileFailed { code: Option<i32> },
    /// The run step exited non-zero for an input.
    RunFailed { input: String, code: Option<i32> },
    /// Spawning or waiting on a process failed.
    Io(io::Error),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCommand => write!(f, "solver command is empty"),
            Self::CompileFailed { code } => match code {
                Some(code) => write!(f, "solver compile step exited with code {code}"),
                None => write!(f, "solver compile step terminated by signal"),
            },
            Self::RunFailed { input, code } => match code {
                Some(code) => write!(f, "solver exited with code {code} on {input}"),
                None => write!(f, "solver terminated by signal on {input}"),
            },
            Self::Io(err) => write!(f, "solver process error: {err}"),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SolverError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl SolverSpec {
    /// Run step only, no compilation.
    pub fn run_only(run: Vec<String>) -> Self {
        Self { compile: None, run }
    }

    /// Run the compile step, if any. Stdout and stderr pass through so
    /// compiler diagnostics stay visible.
    pub fn compile(&self) -> Result<(), SolverError> {
        let Some(argv) = &self.compile else {
            return Ok(());
        };
        let (program, args) = argv.split_first().ok_or(SolverError::EmptyCommand)?;
        let status = Command::new(program).args(args).status()?;
        if !status.success() {
            return Err(SolverError::CompileFailed {
                code: status.code(),
            });
        }
        Ok(())
    }

    /// Run the solver on one input file, returning its stdout bytes.
    pub fn run_on_file(&self, input_path: &Path) -> Result<Vec<u8>, SolverError> {
        let (program, args) = self.run.split_first().ok_or(SolverError::EmptyCommand)?;
        let input = File::open(input_path)?;
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::from(input))
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()?;
        if !output.status.success() {
            return Err(SolverError::RunFailed {
                input: input_path.display().to_string(),
                code: output.status.code(),
            });
        }
        Ok(output.stdout)
    }
}
