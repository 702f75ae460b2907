//! Accumulated per-symbol letter/slot index
//!
//! For each feedback symbol the map records, per letter, the set of slots where
//! that letter received that symbol in any guess so far.

use crate::core::{Feedback, Symbol, WORD_LENGTH, Word, letter_index};
use std::fmt;

/// A set of slot indices (0-4), stored as a 5-bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SlotSet(u8);

impl SlotSet {
    pub const EMPTY: Self = Self(0);
    pub const ALL: Self = Self((1 << WORD_LENGTH) - 1);

    /// Set containing exactly `slot`
    #[inline]
    #[must_use]
    pub const fn single(slot: usize) -> Self {
        Self(1 << slot)
    }

    #[inline]
    pub fn insert(&mut self, slot: usize) {
        self.0 |= 1 << slot;
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, slot: usize) -> bool {
        self.0 & (1 << slot) != 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Slots not in this set
    #[inline]
    #[must_use]
    pub const fn complement(self) -> Self {
        Self::ALL.difference(self)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Slot indices in ascending order
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..WORD_LENGTH).filter(move |&slot| self.contains(slot))
    }

    /// Number of slots in this set where `word` carries `letter`
    #[inline]
    #[must_use]
    pub fn count_in(self, word: &Word, letter: u8) -> usize {
        self.iter().filter(|&slot| word.letter_at(slot) == letter).count()
    }
}

impl FromIterator<usize> for SlotSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for slot in iter {
            set.insert(slot);
        }
        set
    }
}

impl fmt::Display for SlotSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots: Vec<String> = self.iter().map(|s| s.to_string()).collect();
        write!(f, "{{{}}}", slots.join(","))
    }
}

/// Cumulative record of every (symbol, letter, slot) observed in a session
///
/// The map is a monotone accumulator: recording only ever adds slots. It is
/// `Copy`, so a hypothetical "what if this feedback came back" copy costs a
/// memcpy and never touches the live session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorMap {
    slots: [[SlotSet; 26]; 3],
}

impl ColorMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add each slot of `guess` under its feedback symbol
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (slot, (&letter, &symbol)) in guess.letters().iter().zip(feedback.symbols()).enumerate() {
            self.slots[symbol.index()][letter_index(letter)].insert(slot);
        }
    }

    /// Slots where `letter` received `symbol`
    ///
    /// Letters are matched case-insensitively; a non-letter byte has no slots.
    #[inline]
    #[must_use]
    pub const fn slots(&self, symbol: Symbol, letter: u8) -> SlotSet {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            self.slots[symbol.index()][letter_index(letter)]
        } else {
            SlotSet::EMPTY
        }
    }

    /// Check whether `letter` ever received `symbol`
    #[inline]
    #[must_use]
    pub const fn has(&self, symbol: Symbol, letter: u8) -> bool {
        !self.slots(symbol, letter).is_empty()
    }

    /// Letters that received `symbol` at least once, with their slots
    pub fn letters(&self, symbol: Symbol) -> impl Iterator<Item = (u8, SlotSet)> + '_ {
        (b'a'..=b'z')
            .map(move |letter| (letter, self.slots(symbol, letter)))
            .filter(|(_, slots)| !slots.is_empty())
    }

    /// Slots where `letter` may still sit
    ///
    /// Excludes slots pinned `Correct` to any other letter and slots where
    /// `letter` itself was marked `Present` or `Absent`. A non-letter byte
    /// has no allowed slots.
    #[must_use]
    pub fn allowed_slots(&self, letter: u8) -> SlotSet {
        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return SlotSet::EMPTY;
        }

        let pinned_elsewhere = self
            .letters(Symbol::Correct)
            .filter(|&(other, _)| other != letter)
            .fold(SlotSet::EMPTY, |acc, (_, slots)| acc.union(slots));

        let ruled_out = self
            .slots(Symbol::Present, letter)
            .union(self.slots(Symbol::Absent, letter));

        SlotSet::ALL.difference(pinned_elsewhere).difference(ruled_out)
    }

    /// Check whether nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().flatten().all(|s| s.is_empty())
    }
}
