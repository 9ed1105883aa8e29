use clap::Parser;
use clap::builder::TypedValueParser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::game_state::SolveRun;
use crate::simulation::{Simulation, TrialReport};
use crate::{DEFAULT_GAMES, MAX_ATTEMPTS, WORD_LENGTH, debug_log};

/// Estimate how often random guessing with letter elimination solves a Wordle
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The problem solution
    #[arg(long)]
    pub solution: String,

    /// Number of games to simulate
    #[arg(long, default_value_t = DEFAULT_GAMES)]
    pub games: usize,

    /// Guesses allowed per game
    #[arg(long, default_value_t = MAX_ATTEMPTS, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    pub attempts: usize,

    /// Seed for the random generator; drawn from the OS when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the full history of every game
    #[arg(short, long)]
    pub verbose: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

impl Cli {
    pub fn simulation(&self) -> Simulation {
        Simulation::new(self.solution.clone())
            .with_games(self.games)
            .with_max_attempts(self.attempts)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn looks_like_word(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_uppercase())
}

pub fn display_history(run: &SolveRun) {
    println!("Full history:");
    for attempt in run.history() {
        println!("{attempt}");
    }
}

pub fn display_report(report: &TrialReport) {
    println!("{report}");
}

/// Runs the simulation described by `cli` and prints the result.
pub fn run(cli: &Cli) -> TrialReport {
    if !looks_like_word(&cli.solution) {
        debug_log!(
            "solution {:?} is not {} uppercase letters; it can never be fully matched",
            cli.solution,
            WORD_LENGTH
        );
    }

    let mut rng = cli.rng();
    let simulation = cli.simulation();
    let report = if cli.verbose {
        simulation.run_with(&mut rng, |_, run| display_history(run))
    } else {
        simulation.run(&mut rng)
    };
    display_report(&report);
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_solution_only() {
        let cli = Cli::try_parse_from(["wordle-sim", "--solution", "CRANE"]).unwrap();
        assert_eq!(cli.solution, "CRANE");
        assert_eq!(cli.games, 100_000);
        assert_eq!(cli.attempts, 6);
        assert_eq!(cli.seed, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_missing_solution() {
        assert!(Cli::try_parse_from(["wordle-sim"]).is_err());
    }

    #[test]
    fn test_parse_all_options() {
        let cli = Cli::try_parse_from([
            "wordle-sim",
            "--solution",
            "ABCDE",
            "--games",
            "10",
            "--attempts",
            "12",
            "--seed",
            "7",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.games, 10);
        assert_eq!(cli.attempts, 12);
        assert_eq!(cli.seed, Some(7));
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_rejects_zero_attempts() {
        assert!(
            Cli::try_parse_from(["wordle-sim", "--solution", "ABCDE", "--attempts", "0"]).is_err()
        );
    }

    #[test]
    fn test_looks_like_word() {
        assert!(looks_like_word("CRANE"));
        assert!(!looks_like_word("crane"));
        assert!(!looks_like_word("CRAN"));
        assert!(!looks_like_word("CRANES"));
        assert!(!looks_like_word("CRAN3"));
    }

    #[test]
    fn test_simulation_from_cli() {
        let cli = Cli::try_parse_from(["wordle-sim", "--solution", "ABCDE", "--games", "3"]).unwrap();
        let sim = cli.simulation();
        assert_eq!(sim.solution, "ABCDE");
        assert_eq!(sim.games, 3);
        assert_eq!(sim.max_attempts, 6);
    }

    #[test]
    fn test_run_with_seed_is_repeatable() {
        let cli = Cli::try_parse_from([
            "wordle-sim",
            "--solution",
            "ABCDE",
            "--games",
            "200",
            "--seed",
            "5",
        ])
        .unwrap();
        assert_eq!(run(&cli), run(&cli));
    }
}
