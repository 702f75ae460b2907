//! Wordle feedback calculation and representation
//!
//! Feedback is one symbol per letter of a guess:
//! - `Correct` (green): right letter, right slot
//! - `Present` (yellow): letter is in the word, elsewhere
//! - `Absent` (gray/black): no further occurrence of the letter
//!
//! `Feedback::compute` is the oracle the scorer simulates against.

use super::word::{WORD_LENGTH, Word, letter_index};
use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Correct,
    Present,
    Absent,
}

impl Symbol {
    /// All symbols, in map index order
    pub const ALL: [Self; 3] = [Self::Correct, Self::Present, Self::Absent];

    /// Index used by per-symbol tables
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Correct => 0,
            Self::Present => 1,
            Self::Absent => 2,
        }
    }

    /// Parse a single feedback character
    ///
    /// Accepts `g`/`G`/🟩, `y`/`Y`/🟨 and `b`/`B`/`-`/`_`/⬜/⬛.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'g' | 'G' | '🟩' => Some(Self::Correct),
            'y' | 'Y' | '🟨' => Some(Self::Present),
            'b' | 'B' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Canonical single-letter code (`g`, `y`, `b`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'g',
            Self::Present => 'y',
            Self::Absent => 'b',
        }
    }

    /// Emoji tile
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Error type for unparseable feedback strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidLength(usize),
    UnknownSymbol(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Feedback must be exactly 5 symbols, got {len}")
            }
            Self::UnknownSymbol(ch) => {
                write!(f, "Unknown feedback symbol '{ch}' (use g/y/b)")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Feedback for a whole guess, one symbol per slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Symbol; WORD_LENGTH]);

impl Feedback {
    /// All greens (solved)
    pub const ALL_CORRECT: Self = Self([Symbol::Correct; WORD_LENGTH]);

    /// Build feedback from explicit symbols
    #[must_use]
    pub const fn new(symbols: [Symbol; WORD_LENGTH]) -> Self {
        Self(symbols)
    }

    /// The per-slot symbols
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[Symbol; WORD_LENGTH] {
        &self.0
    }

    /// Symbol at slot `position`
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> Symbol {
        self.0[position]
    }

    /// Check if every slot is `Correct`
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::ALL_CORRECT
    }

    /// Number of slots carrying `symbol`
    #[must_use]
    pub fn count(&self, symbol: Symbol) -> usize {
        self.0.iter().filter(|&&s| s == symbol).count()
    }

    /// Calculate the feedback when `guess` is played and `solution` is the answer
    ///
    /// Duplicate letters follow the game's rules: greens are assigned first,
    /// then each remaining guess letter, left to right, takes a yellow only
    /// while unmatched copies of it remain in the solution.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Feedback, Word};
    ///
    /// let guess = Word::new("arise").unwrap();
    /// let solution = Word::new("raise").unwrap();
    ///
    /// assert_eq!(Feedback::compute(&guess, &solution).to_string(), "yyggg");
    /// ```
    #[must_use]
    pub fn compute(guess: &Word, solution: &Word) -> Self {
        let guess = guess.letters();
        let solution = solution.letters();

        let mut symbols = [Symbol::Absent; WORD_LENGTH];
        let mut pool = [0u8; 26];

        for i in 0..WORD_LENGTH {
            if guess[i] == solution[i] {
                symbols[i] = Symbol::Correct;
            } else {
                pool[letter_index(solution[i])] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if symbols[i] == Symbol::Correct {
                continue;
            }
            let remaining = &mut pool[letter_index(guess[i])];
            if *remaining > 0 {
                symbols[i] = Symbol::Present;
                *remaining -= 1;
            }
        }

        Self::new(symbols)
    }

    /// Parse feedback like `"bbygg"`, `"--YGG"` or `"⬜⬜🟨🟩🟩"`
    ///
    /// # Errors
    /// Returns `FeedbackError` if the input is not exactly five recognized symbols.
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let chars: Vec<char> = s.trim().chars().collect();

        if chars.len() != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength(chars.len()));
        }

        let mut symbols = [Symbol::Absent; WORD_LENGTH];
        for (slot, &ch) in symbols.iter_mut().zip(&chars) {
            *slot = Symbol::from_char(ch).ok_or(FeedbackError::UnknownSymbol(ch))?;
        }

        Ok(Self::new(symbols))
    }

    /// Convert feedback to an emoji string like "⬜⬜🟨🟩🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
