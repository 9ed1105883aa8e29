use std::fmt;

use rand::Rng;

use crate::game_state::{SolveRun, solve_wordle};
use crate::{DEFAULT_GAMES, MAX_ATTEMPTS, info_log};

/// Repeats independent games against one solution and counts the wins.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub solution: String,
    pub games: usize,
    pub max_attempts: usize,
}

/// Tally of a finished simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialReport {
    pub games: usize,
    pub max_attempts: usize,
    pub successes: usize,
}

impl TrialReport {
    /// Fraction of games whose final guess equals the solution.
    pub fn rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.successes as f64 / self.games as f64
    }
}

impl fmt::Display for TrialReport {
    // The rate is printed as a fraction even though the line ends in '%'
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Success rate over {} games with {} attempts per game: {}%",
            self.games,
            self.max_attempts,
            self.rate()
        )
    }
}

impl Simulation {
    pub fn new(solution: impl Into<String>) -> Self {
        Self {
            solution: solution.into(),
            games: DEFAULT_GAMES,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> TrialReport {
        self.run_with(rng, |_, _| {})
    }

    /// Runs every game, handing each finished one to `observer` along with
    /// its zero-based index.
    pub fn run_with<R, F>(&self, rng: &mut R, mut observer: F) -> TrialReport
    where
        R: Rng + ?Sized,
        F: FnMut(usize, &SolveRun),
    {
        info_log!(
            "Simulating {} games of {} attempts against {}",
            self.games,
            self.max_attempts,
            self.solution
        );

        let mut successes = 0;
        for game in 0..self.games {
            let run = solve_wordle(&self.solution, self.max_attempts, rng);
            if run.is_success(&self.solution) {
                successes += 1;
            }
            observer(game, &run);
        }

        info_log!("{} of {} games solved", successes, self.games);
        TrialReport {
            games: self.games,
            max_attempts: self.max_attempts,
            successes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_defaults() {
        let sim = Simulation::new("CRANE");
        assert_eq!(sim.games, 100_000);
        assert_eq!(sim.max_attempts, 6);
    }

    #[test]
    fn test_report_line_format() {
        let report = TrialReport {
            games: 100_000,
            max_attempts: 6,
            successes: 1_234,
        };
        assert_eq!(
            report.to_string(),
            "Success rate over 100000 games with 6 attempts per game: 0.01234%"
        );
    }

    #[test]
    fn test_rate_with_no_games() {
        let report = TrialReport {
            games: 0,
            max_attempts: 6,
            successes: 0,
        };
        assert_eq!(report.rate(), 0.0);
    }

    #[test]
    fn test_observer_sees_every_game() {
        let mut rng = StdRng::seed_from_u64(8);
        let sim = Simulation::new("ABCDE").with_games(25);
        let mut seen = Vec::new();
        let report = sim.run_with(&mut rng, |game, run| {
            assert_eq!(run.history().len(), 6);
            seen.push(game);
        });
        assert_eq!(seen, (0..25).collect::<Vec<_>>());
        assert_eq!(report.games, 25);
        assert!(report.successes <= 25);
    }

    #[test]
    fn test_same_seed_same_report() {
        let sim = Simulation::new("ABCDE").with_games(500);
        let a = sim.run(&mut StdRng::seed_from_u64(99));
        let b = sim.run(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
