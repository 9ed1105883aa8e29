use std::collections::BTreeMap;
use std::fmt;

use rand::Rng;

use crate::WORD_LENGTH;
use crate::debug_log;

/// Evaluation of one character position in one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HintKind {
    #[default]
    Undetermined,
    NotInWord,
    WrongPosition,
    Correct,
}

impl HintKind {
    /// Single-character form, G=green, Y=yellow, X=gray, ?=undetermined
    pub fn to_char(self) -> char {
        match self {
            HintKind::Undetermined => '?',
            HintKind::NotInWord => 'X',
            HintKind::WrongPosition => 'Y',
            HintKind::Correct => 'G',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            '?' => Some(HintKind::Undetermined),
            'X' => Some(HintKind::NotInWord),
            'Y' => Some(HintKind::WrongPosition),
            'G' => Some(HintKind::Correct),
            _ => None,
        }
    }
}

/// One round of a game: the guessed word and the hint for each position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    word: String,
    hints: Vec<HintKind>,
}

impl Attempt {
    pub fn new(word: String, hints: Vec<HintKind>) -> Self {
        Self { word, hints }
    }

    /// Scores `word` against `solution` and records the result.
    pub fn score(word: String, solution: &str) -> Self {
        let hints = evaluate_guess(&word, solution);
        Self { word, hints }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn hints(&self) -> &[HintKind] {
        &self.hints
    }

    pub fn is_solved(&self) -> bool {
        !self.hints.is_empty() && self.hints.iter().all(|&h| h == HintKind::Correct)
    }
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hints: String = self.hints.iter().map(|h| h.to_char()).collect();
        write!(f, "{} {}", self.word, hints)
    }
}

/// Compares a guess with the solution, position by position.
///
/// Positions that match exactly are `Correct`. Every other position is
/// `WrongPosition` when its character occurs anywhere in the solution and
/// `NotInWord` otherwise. Letter counts are not taken into account, so a
/// repeated guess letter is marked `WrongPosition` as many times as it
/// appears. Comparison stops at the end of the shorter string.
pub fn evaluate_guess(guess: &str, solution: &str) -> Vec<HintKind> {
    // First pass: exact matches
    let mut hints: Vec<HintKind> = guess
        .chars()
        .zip(solution.chars())
        .map(|(g, s)| {
            if g == s {
                HintKind::Correct
            } else {
                HintKind::NotInWord
            }
        })
        .collect();

    // Second pass: present somewhere else
    for (hint, g) in hints.iter_mut().zip(guess.chars()) {
        if *hint == HintKind::NotInWord && solution.contains(g) {
            *hint = HintKind::WrongPosition;
        }
    }
    hints
}

/// What a single run has learned about the solution so far.
///
/// The allowed pool only ever shrinks and locked positions are never
/// released, so a guess produced later in a run is at least as constrained
/// as an earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintState {
    allowed: Vec<char>,
    locked: BTreeMap<usize, char>,
}

impl Default for ConstraintState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintState {
    /// Fresh state: the full `A..=Z` alphabet and no locked positions.
    pub fn new() -> Self {
        Self {
            allowed: ('A'..='Z').collect(),
            locked: BTreeMap::new(),
        }
    }

    pub fn allowed(&self) -> &[char] {
        &self.allowed
    }

    pub fn locked(&self) -> &BTreeMap<usize, char> {
        &self.locked
    }

    pub fn locked_at(&self, position: usize) -> Option<char> {
        self.locked.get(&position).copied()
    }

    /// Builds a guess that respects every locked position.
    ///
    /// Unlocked positions are filled with independent uniform draws from the
    /// allowed pool. Returns `None` when an unlocked position remains but
    /// the pool has been emptied.
    pub fn generate_guess<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String> {
        let mut word = String::with_capacity(WORD_LENGTH);
        for i in 0..WORD_LENGTH {
            let c = match self.locked_at(i) {
                Some(c) => c,
                None if self.allowed.is_empty() => return None,
                None => self.allowed[rng.gen_range(0..self.allowed.len())],
            };
            word.push(c);
        }
        Some(word)
    }

    /// Folds the hints of one attempt into the state.
    ///
    /// `NotInWord` removes the character from the pool and `Correct` locks
    /// the position. `WrongPosition` leaves everything as it is.
    pub fn apply(&mut self, attempt: &Attempt) {
        for (i, (c, hint)) in attempt.word().chars().zip(attempt.hints()).enumerate() {
            match hint {
                HintKind::NotInWord => {
                    if let Some(idx) = self.allowed.iter().position(|&a| a == c) {
                        self.allowed.remove(idx);
                        debug_log!("removed '{}', {} characters left", c, self.allowed.len());
                    }
                }
                HintKind::Correct => {
                    let locked = *self.locked.entry(i).or_insert(c);
                    debug_assert_eq!(locked, c, "position {i} already locked");
                }
                HintKind::WrongPosition | HintKind::Undetermined => {}
            }
        }
    }
}
