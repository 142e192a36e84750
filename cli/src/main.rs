extern crate polyrec_solver;

extern crate stderrlog;
extern crate structopt;

#[macro_use]
extern crate log;

use std::path::{Path, PathBuf};
use std::process;
use std::time::SystemTime;

use polyrec_solver::samples;
use polyrec_solver::{solve_case, solve_json, Case, Result, Selection, SelectionPolicy, SolverConfig};

use structopt::StructOpt;

/// Recovers the constant term of a polynomial from encoded sample points
#[derive(StructOpt, Debug)]
#[structopt(name = "polyrec")]
struct Opt {
    /// Verbose mode (-v, -vv, -vvv, etc)
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// Silence all log output
    #[structopt(short = "q", long = "quiet")]
    quiet: bool,

    /// Timestamp (sec, ms, us, ns, none)
    #[structopt(short = "t", long = "timestamp")]
    ts: Option<stderrlog::Timestamp>,

    /// Answer selection, first-integer or consensus
    #[structopt(short = "p", long = "policy", default_value = "first-integer")]
    policy: SelectionPolicy,

    /// Case files, the built-in samples run when none are given
    #[structopt(name = "FILE", parse(from_os_str))]
    files: Vec<PathBuf>,
}

fn solve_file(path: &Path, config: &SolverConfig) -> Result<Selection> {
    let case = Case::from_file(path)?;
    solve_case(&case, config)
}

fn run_samples(config: &SolverConfig) -> bool {
    let mut ok = true;
    for (label, json) in samples::builtin() {
        match solve_json(json, config) {
            Ok(selection) => println!("{}: c = {}", label, selection),
            Err(err) => {
                println!("{}: error: {}", label, err);
                ok = false;
            }
        }
    }
    ok
}

fn run_files(files: &[PathBuf], config: &SolverConfig) -> bool {
    let mut ok = true;
    for path in files {
        let start = SystemTime::now();
        match solve_file(path, config) {
            Ok(selection) => println!("{}: c = {}", path.display(), selection),
            Err(err) => {
                warn!("cannot solve {}: {:?}", path.display(), err);
                println!("{}: error: {}", path.display(), err);
                ok = false;
            }
        }
        if let Ok(elapsed) = start.elapsed() {
            info!("{} took {:?}", path.display(), elapsed);
        }
    }
    ok
}

fn main() {
    let opt = Opt::from_args();

    if let Err(err) = stderrlog::new()
        .quiet(opt.quiet)
        .verbosity(1 + opt.verbose)
        .timestamp(opt.ts.unwrap_or(stderrlog::Timestamp::Off))
        .init()
    {
        eprintln!("cannot initialize logging: {}", err);
    }

    let config = SolverConfig::with_policy(opt.policy);
    debug!("{:?}", config);

    let ok = if opt.files.is_empty() {
        run_samples(&config)
    } else {
        run_files(&opt.files, &config)
    };

    if !ok {
        process::exit(1);
    }
}
