use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// RBC model solver using value-function iteration.
#[derive(Parser)]
#[command(
    name = "rbc",
    version,
    about = "Solve the stochastic growth model by value-function iteration"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Solve the model and report the converged policy.
    Solve(SolveArgs),
    /// Print the deterministic steady state.
    SteadyState(SteadyStateArgs),
}

/// Arguments for the `solve` subcommand.
#[derive(clap::Args)]
pub struct SolveArgs {
    /// Path to TOML configuration file. Reference calibration if omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the sup-norm convergence tolerance.
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Override the iteration cap.
    #[arg(long = "max-iterations")]
    pub max_iterations: Option<usize>,

    /// Evaluate productivity columns in parallel.
    #[arg(long)]
    pub parallel: bool,

    /// Write a JSON run summary to this path.
    #[arg(short, long)]
    pub summary: Option<PathBuf>,
}

/// Arguments for the `steady-state` subcommand.
#[derive(clap::Args)]
pub struct SteadyStateArgs {
    /// Path to TOML configuration file. Reference calibration if omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_solve_overrides() {
        let cli = Cli::try_parse_from([
            "rbc",
            "-vv",
            "solve",
            "--tolerance",
            "1e-6",
            "--max-iterations",
            "500",
            "--parallel",
            "--summary",
            "out.json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Solve(args) = cli.command else {
            panic!("expected solve");
        };
        assert_eq!(args.tolerance, Some(1e-6));
        assert_eq!(args.max_iterations, Some(500));
        assert!(args.parallel);
        assert_eq!(args.summary, Some(PathBuf::from("out.json")));
        assert!(args.config.is_none());
    }

    #[test]
    fn parses_steady_state() {
        let cli = Cli::try_parse_from(["rbc", "steady-state", "-c", "model.toml"]).unwrap();
        let Command::SteadyState(args) = cli.command else {
            panic!("expected steady-state");
        };
        assert_eq!(args.config, Some(PathBuf::from("model.toml")));
    }
}
