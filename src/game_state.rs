use rand::Rng;

use crate::debug_log;
use crate::solver::{Attempt, ConstraintState};

enum GameState {
    Continue(Attempt),
    Exhausted,
}

/// The outcome of one game: every attempt in the order it was played.
#[derive(Debug, Clone)]
pub struct SolveRun {
    history: Vec<Attempt>,
    constraints: ConstraintState,
}

impl SolveRun {
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    pub fn constraints(&self) -> &ConstraintState {
        &self.constraints
    }

    /// The last attempt played, whether or not it matched.
    pub fn final_attempt(&self) -> Option<&Attempt> {
        self.history.last()
    }

    pub fn is_success(&self, solution: &str) -> bool {
        self.final_attempt().is_some_and(|a| a.word() == solution)
    }
}

/// Plays one game of `max_attempts` rounds against `solution`.
///
/// Every round generates a guess, scores it, records it and narrows the
/// constraints. A game never stops early on a match; it only ends before
/// `max_attempts` if the character pool runs dry.
pub fn solve_wordle<R: Rng + ?Sized>(solution: &str, max_attempts: usize, rng: &mut R) -> SolveRun {
    let mut constraints = ConstraintState::new();
    let mut history = Vec::with_capacity(max_attempts);

    for round in 0..max_attempts {
        match play_round(solution, &mut constraints, rng) {
            GameState::Continue(attempt) => {
                debug_log!("round {}: {}", round + 1, attempt);
                history.push(attempt);
            }
            GameState::Exhausted => {
                debug_log!("round {}: no characters left to guess with", round + 1);
                break;
            }
        }
    }

    SolveRun { history, constraints }
}

fn play_round<R: Rng + ?Sized>(
    solution: &str,
    constraints: &mut ConstraintState,
    rng: &mut R,
) -> GameState {
    let Some(guess) = constraints.generate_guess(rng) else {
        return GameState::Exhausted;
    };
    let attempt = Attempt::score(guess, solution);
    constraints.apply(&attempt);
    GameState::Continue(attempt)
}
