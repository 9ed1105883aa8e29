// Library interface for wordle-sim
// This allows integration tests to access internal modules

pub mod cli;
pub mod game_state;
pub mod logging;
pub mod simulation;
pub mod solver;

/// Number of characters in every guess and solution.
pub const WORD_LENGTH: usize = 5;

/// Rounds played per game unless overridden.
pub const MAX_ATTEMPTS: usize = 6;

/// Games played per simulation unless overridden.
pub const DEFAULT_GAMES: usize = 100_000;

// Re-export commonly used items for easier testing
pub use game_state::{SolveRun, solve_wordle};
pub use simulation::{Simulation, TrialReport};
pub use solver::{Attempt, ConstraintState, HintKind, evaluate_guess};
