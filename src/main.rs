//! Testcase Generator CLI
//!
//! Generates a deterministic testcase suite for a fixed seed, optionally
//! runs a reference solver over every input, and packages the results into
//! `testcases.zip` inside the work directory.
//!
//! # Output
//!
//! A stats line is written to stderr upon completion:
//! `cases=N outputs=<yes|no> archive=<path> elapsed_ms=N`
//!
//! # Exit Codes
//!
//! - `0`: Success
//! - `1`: Pipeline failure (generation, solver, or I/O)
//! - `2`: Invalid arguments

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use casegen_rs::harness::SolverSpec;
use casegen_rs::{HarnessConfig, SuiteGenConfig, TestcaseHarness};

fn print_usage(exe: &std::ffi::OsStr) {
    eprintln!(
        "usage: {} [OPTIONS]

OPTIONS:
    --seed=<N>          Suite seed (default: 0)
    --dir=<PATH>        Work directory (default: current directory)
    --run=<CMD>         Solver run command, space-separated argv
    --compile=<CMD>     Solver compile command, space-separated argv
    --help, -h          Show this help message",
        exe.to_string_lossy()
    );
}

fn split_argv(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}

fn main() {
    let mut args = env::args_os();
    let exe = args.next().unwrap_or_else(|| "casegen".into());

    let mut seed = 0u64;
    let mut work_dir = PathBuf::from(".");
    let mut run_cmd: Option<Vec<String>> = None;
    let mut compile_cmd: Option<Vec<String>> = None;

    for arg in args {
        let Some(flag) = arg.to_str() else {
            eprintln!("invalid argument: {}", arg.to_string_lossy());
            std::process::exit(2);
        };
        if let Some(value) = flag.strip_prefix("--seed=") {
            seed = value.parse().unwrap_or_else(|_| {
                eprintln!("invalid --seed value: {value}");
                std::process::exit(2);
            });
        } else if let Some(value) = flag.strip_prefix("--dir=") {
            work_dir = PathBuf::from(value);
        } else if let Some(value) = flag.strip_prefix("--run=") {
            let argv = split_argv(value);
            if argv.is_empty() {
                eprintln!("empty --run command");
                std::process::exit(2);
            }
            run_cmd = Some(argv);
        } else if let Some(value) = flag.strip_prefix("--compile=") {
            compile_cmd = Some(split_argv(value));
        } else if flag == "--help" || flag == "-h" {
            print_usage(&exe);
            return;
        } else {
            eprintln!("unknown argument: {flag}");
            print_usage(&exe);
            std::process::exit(2);
        }
    }

    if compile_cmd.is_some() && run_cmd.is_none() {
        eprintln!("--compile requires --run");
        std::process::exit(2);
    }

    let solver = run_cmd.map(|run| SolverSpec {
        compile: compile_cmd,
        run,
    });

    let harness = TestcaseHarness::new(HarnessConfig { work_dir, solver });
    let suite_cfg = SuiteGenConfig::default();

    let started = Instant::now();
    match harness.run(seed, &suite_cfg) {
        Ok(report) => {
            eprintln!(
                "cases={} outputs={} archive={} elapsed_ms={}",
                report.case_count,
                if report.outputs_written { "yes" } else { "no" },
                report.archive_path.display(),
                started.elapsed().as_millis()
            );
        }
        Err(err) => {
            eprintln!("casegen failed: {err}");
            std::process::exit(1);
        }
    }
}
