//! Candidate narrowing from one feedback observation
//!
//! Three passes run in order, each on the survivors of the previous one:
//! 1. Correct: pinned letters must sit in their slots
//! 2. Present: yellow letters must occur a bounded number of times in the
//!    slots still open to them
//! 3. Absent: letters with a gray mark may not occur outside the slots still
//!    open to them
//!
//! The passes are prepared once into a [`Narrowing`] so the scorer can count
//! survivors of a hypothetical observation without allocating.

use super::color_map::{ColorMap, SlotSet};
use crate::core::{Feedback, Symbol, WORD_LENGTH, Word};

/// Occurrence bound for a letter marked `Present` in the new feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PresentBound {
    letter: u8,
    /// Slots over which occurrences are counted
    counted: SlotSet,
    /// Slots where the letter was just marked yellow
    marked: SlotSet,
    min: usize,
    max: usize,
}

impl PresentBound {
    #[inline]
    fn admits(&self, word: &Word) -> bool {
        if self.marked.count_in(word, self.letter) > 0 {
            return false;
        }
        let count = self.counted.count_in(word, self.letter);
        (self.min..=self.max).contains(&count)
    }
}

/// Prepared passes for one (guess, feedback) observation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrowing {
    correct: Vec<(u8, SlotSet)>,
    present: Vec<PresentBound>,
    absent: Vec<(u8, SlotSet)>,
}

impl Narrowing {
    /// Prepare the passes for `guess`/`feedback`
    ///
    /// `colors` must already contain this observation (see [`ColorMap::record`]).
    #[must_use]
    pub fn prepare(colors: &ColorMap, guess: &Word, feedback: &Feedback) -> Self {
        let mut latest = ColorMap::new();
        latest.record(guess, feedback);

        let correct = colors.letters(Symbol::Correct).collect();

        let present: Vec<PresentBound> = latest
            .letters(Symbol::Present)
            .map(|(letter, marked)| {
                let min = marked.len();
                let max = if latest.has(Symbol::Absent, letter) {
                    min
                } else {
                    WORD_LENGTH
                };
                let counted = colors
                    .allowed_slots(letter)
                    .difference(latest.slots(Symbol::Correct, letter));
                PresentBound {
                    letter,
                    counted,
                    marked,
                    min,
                    max,
                }
            })
            .collect();

        let absent = colors
            .letters(Symbol::Absent)
            .map(|(letter, _)| {
                let mut permitted = colors.slots(Symbol::Correct, letter);
                if colors.has(Symbol::Present, letter) {
                    permitted = permitted.union(colors.allowed_slots(letter));
                }

                if latest.has(Symbol::Absent, letter) {
                    let mut latest_permitted = latest.slots(Symbol::Correct, letter);
                    if let Some(bound) = present.iter().find(|b| b.letter == letter) {
                        latest_permitted = latest_permitted.union(bound.counted);
                    }
                    permitted = permitted.intersection(latest_permitted);
                }

                (letter, permitted.complement())
            })
            .collect();

        Self {
            correct,
            present,
            absent,
        }
    }

    fn passes_correct(&self, word: &Word) -> bool {
        self.correct
            .iter()
            .all(|&(letter, slots)| slots.iter().all(|slot| word.letter_at(slot) == letter))
    }

    fn passes_present(&self, word: &Word) -> bool {
        self.present.iter().all(|bound| bound.admits(word))
    }

    fn passes_absent(&self, word: &Word) -> bool {
        self.absent
            .iter()
            .all(|&(letter, forbidden)| forbidden.count_in(word, letter) == 0)
    }

    /// Check a single word against all three passes
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        self.passes_correct(word) && self.passes_present(word) && self.passes_absent(word)
    }

    /// Narrow `candidates` pass by pass into a new set
    #[must_use]
    pub fn apply(&self, candidates: &[Word]) -> Vec<Word> {
        let mut survivors: Vec<Word> = candidates
            .iter()
            .filter(|w| self.passes_correct(w))
            .copied()
            .collect();

        if !survivors.is_empty() {
            survivors.retain(|w| self.passes_present(w));
        }
        if !survivors.is_empty() {
            survivors.retain(|w| self.passes_absent(w));
        }

        survivors
    }

    /// Count the candidates that would survive, without collecting them
    #[must_use]
    pub fn survivors(&self, candidates: &[Word]) -> usize {
        candidates.iter().filter(|w| self.admits(w)).count()
    }
}

/// Narrow `candidates` by one observation
///
/// `colors` is the session's accumulated map including this observation. The
/// input set is untouched; the caller replaces its set with the result.
///
/// # Examples
/// ```
/// use wordle_advisor::constraints::{ColorMap, apply};
/// use wordle_advisor::core::{Feedback, Word};
///
/// let candidates: Vec<Word> = ["raise", "arise", "tepid"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let guess = Word::new("tepid").unwrap();
/// let feedback = Feedback::parse("bbbbb").unwrap();
///
/// let mut colors = ColorMap::new();
/// colors.record(&guess, &feedback);
///
/// let left = apply(&candidates, &colors, &guess, &feedback);
/// assert_eq!(left.len(), 0); // both anagrams contain 'i' and 'e'
/// ```
#[must_use]
pub fn apply(candidates: &[Word], colors: &ColorMap, guess: &Word, feedback: &Feedback) -> Vec<Word> {
    Narrowing::prepare(colors, guess, feedback).apply(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn texts(list: &[Word]) -> Vec<String> {
        list.iter().map(Word::text).collect()
    }

    /// Apply a sequence of observations the way a session does
    fn narrow(candidates: &[Word], observations: &[(&str, &str)]) -> Vec<Word> {
        let mut colors = ColorMap::new();
        let mut current = candidates.to_vec();
        for &(guess, feedback) in observations {
            let guess = Word::new(guess).unwrap();
            let feedback = Feedback::parse(feedback).unwrap();
            colors.record(&guess, &feedback);
            current = apply(&current, &colors, &guess, &feedback);
        }
        current
    }

    /// Brute-force reference: keep words that reproduce every observation
    fn consistent(candidates: &[Word], observations: &[(Word, Feedback)]) -> Vec<Word> {
        candidates
            .iter()
            .filter(|w| {
                observations
                    .iter()
                    .all(|(g, f)| Feedback::compute(g, w) == *f)
            })
            .copied()
            .collect()
    }

    const POOL: &[&str] = &[
        "raise", "arise", "tepid", "silly", "sassy", "geese", "creep", "eerie", "speed",
        "erase", "robot", "floor", "llama", "crane", "slate", "trace", "react", "cater",
        "sissy", "essay", "asset", "tease", "setae", "lease", "easel", "sleep", "steel",
        "stele", "elope", "abbey", "aorta", "nanny", "mamma", "ninny", "puppy",
    ];

    fn pool() -> Vec<Word> {
        words(POOL)
    }

    #[test]
    fn all_absent_removes_words_sharing_letters() {
        let candidates = words(&["raise", "arise", "tepid", "crown", "churn"]);
        let left = narrow(&candidates, &[("tepid", "bbbbb")]);
        assert_eq!(texts(&left), vec!["crown", "churn"]);
    }

    #[test]
    fn all_absent_keeps_unrelated_anagrams() {
        // none of t/e/p/i/d appear in "sugar" or "gaurs"
        let candidates = words(&["sugar", "tepid", "gaurs"]);
        let left = narrow(&candidates, &[("tepid", "bbbbb")]);
        assert_eq!(texts(&left), vec!["sugar", "gaurs"]);
    }

    #[test]
    fn all_gray_tepid_removes_words_with_e_or_i() {
        // RAISE and ARISE both carry 'i' and 'e'
        let candidates = words(&["raise", "arise", "tepid"]);
        let left = narrow(&candidates, &[("tepid", "bbbbb")]);
        assert!(left.is_empty());
    }

    #[test]
    fn correct_pass_pins_letters() {
        let candidates = words(&["raise", "arise", "noise", "poise", "crane"]);
        let left = narrow(&candidates, &[("arise", "yyggg")]);
        assert_eq!(texts(&left), vec!["raise"]);
    }

    #[test]
    fn present_with_absent_caps_count() {
        // GEESE vs CREEP: exactly one E besides the pinned slot, never in slot 1 or 4
        let candidates = words(&["creep", "eerie", "elect", "sheen", "ebbed"]);
        let left = narrow(&candidates, &[("geese", "bygbb")]);
        assert_eq!(texts(&left), vec!["creep", "elect"]);
    }

    #[test]
    fn present_letter_never_at_its_yellow_slot() {
        // yellow 'a' in slot 0 rules out AORTA even though it has another 'a'
        let candidates = words(&["aorta", "panic"]);
        let left = narrow(&candidates, &[("abbey", "ybbbb")]);
        assert_eq!(texts(&left), vec!["panic"]);
    }

    #[test]
    fn earlier_green_counts_toward_later_yellow() {
        // S pinned in slot 0, later guess has S only in slot 3 -> yellow from slot 0
        let answer = Word::new("silly").unwrap();
        let first = Word::new("sassy").unwrap();
        let second = Word::new("pulse").unwrap();
        let observations = [
            ("sassy", Feedback::compute(&first, &answer).to_string()),
            ("pulse", Feedback::compute(&second, &answer).to_string()),
        ];
        let observations: Vec<(&str, &str)> =
            observations.iter().map(|(g, f)| (*g, f.as_str())).collect();

        let left = narrow(&pool(), &observations);
        assert!(left.contains(&answer));
    }

    #[test]
    fn empty_candidates_stay_empty() {
        let left = narrow(&[], &[("crane", "gybbb")]);
        assert!(left.is_empty());

        let mut colors = ColorMap::new();
        let guess = Word::new("crane").unwrap();
        let feedback = Feedback::ALL_CORRECT;
        colors.record(&guess, &feedback);
        assert_eq!(Narrowing::prepare(&colors, &guess, &feedback).survivors(&[]), 0);
    }

    #[test]
    fn inconsistent_feedback_empties_set() {
        let candidates = words(&["raise", "arise"]);
        let left = narrow(&candidates, &[("zzzzz", "ggggg")]);
        assert!(left.is_empty());
    }

    #[test]
    fn never_grows() {
        let candidates = pool();
        for guess in &candidates {
            for solution in &candidates {
                let feedback = Feedback::compute(guess, solution);
                let mut colors = ColorMap::new();
                colors.record(guess, &feedback);
                let left = apply(&candidates, &colors, guess, &feedback);
                assert!(left.len() <= candidates.len());
            }
        }
    }

    #[test]
    fn single_observation_matches_brute_force() {
        let candidates = pool();
        for guess in &candidates {
            for solution in &candidates {
                let feedback = Feedback::compute(guess, solution);
                let mut colors = ColorMap::new();
                colors.record(guess, &feedback);

                let narrowing = Narrowing::prepare(&colors, guess, &feedback);
                let left = narrowing.apply(&candidates);
                let expected = consistent(&candidates, &[(*guess, feedback)]);

                assert_eq!(left, expected, "guess {guess} solution {solution}");
                assert_eq!(narrowing.survivors(&candidates), expected.len());
            }
        }
    }

    #[test]
    fn truthful_games_keep_the_solution() {
        let candidates = pool();
        let openers = words(&["raise", "geese", "sassy", "llama"]);

        for solution in &candidates {
            for (first, second) in openers.iter().flat_map(|o| candidates.iter().map(move |c| (o, c))) {
                let mut colors = ColorMap::new();
                let mut current = candidates.clone();
                let mut observations = Vec::new();

                for guess in [*first, *second] {
                    let feedback = Feedback::compute(&guess, solution);
                    colors.record(&guess, &feedback);
                    current = apply(&current, &colors, &guess, &feedback);
                    observations.push((guess, feedback));

                    assert!(current.contains(solution), "{solution} dropped after {guess}");
                    assert_eq!(current, consistent(&candidates, &observations));
                }
            }
        }
    }
}
