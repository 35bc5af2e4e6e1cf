//! Keyboard letter status tracking
//!
//! Each key remembers the best feedback its letter has received. A key that
//! has been `Correct` is never downgraded, and `Absent` never overwrites a key
//! that already carries a status.

use super::LetterStatus;
use rustc_hash::FxHashMap;

/// On-screen keyboard layout, one string per row
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Letter → status updates produced by one guess
pub type KeyUpdates = FxHashMap<char, LetterStatus>;

/// Mapping from letter to its current keyboard status
///
/// Letters absent from the map are unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStatusMap(FxHashMap<char, LetterStatus>);

impl KeyStatusMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of a letter, `None` when unset
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterStatus> {
        self.0.get(&letter).copied()
    }

    /// Number of letters with a status
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the letters that carry a status
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        self.0.iter().map(|(&letter, &status)| (letter, status))
    }

    /// Merge `updates` into a copy of this map
    ///
    /// Rules per updated letter:
    /// - previously `Correct`: unchanged
    /// - new `Correct`: set
    /// - new `Present`: set
    /// - new `Absent`: set only when the letter was unset
    ///
    /// Letters not in `updates` carry over unchanged; `self` is not modified.
    ///
    /// # Examples
    /// ```
    /// use ttsla::core::{KeyStatusMap, KeyUpdates, LetterStatus};
    ///
    /// let prev = KeyStatusMap::from_iter([('K', LetterStatus::Correct)]);
    /// let updates = KeyUpdates::from_iter([('K', LetterStatus::Absent)]);
    /// assert_eq!(prev.merge(&updates).get('K'), Some(LetterStatus::Correct));
    /// ```
    #[must_use]
    pub fn merge(&self, updates: &KeyUpdates) -> Self {
        let mut next = self.0.clone();

        for (&letter, &value) in updates {
            let existing = next.get(&letter).copied();

            match (existing, value) {
                (Some(LetterStatus::Correct), _) => {}
                (_, LetterStatus::Correct | LetterStatus::Present) => {
                    next.insert(letter, value);
                }
                (None, LetterStatus::Absent) => {
                    next.insert(letter, LetterStatus::Absent);
                }
                (Some(_), LetterStatus::Absent) => {}
            }
        }

        Self(next)
    }

    /// Build the updates for one evaluated guess
    ///
    /// A letter repeated in the guess keeps its strongest status, so a
    /// duplicate marked `Absent` cannot hide a `Correct` copy.
    #[must_use]
    pub fn updates_from(guess: &str, statuses: &[LetterStatus]) -> KeyUpdates {
        let mut updates = KeyUpdates::default();
        for (letter, &status) in guess.chars().zip(statuses) {
            updates
                .entry(letter)
                .and_modify(|s| *s = (*s).max(status))
                .or_insert(status);
        }
        updates
    }
}

impl FromIterator<(char, LetterStatus)> for KeyStatusMap {
    fn from_iter<I: IntoIterator<Item = (char, LetterStatus)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    #[test]
    fn merge_never_downgrades_correct() {
        let prev = KeyStatusMap::from_iter([('K', Correct)]);

        for update in [Absent, Present] {
            let next = prev.merge(&KeyUpdates::from_iter([('K', update)]));
            assert_eq!(next.get('K'), Some(Correct));
        }
    }

    #[test]
    fn merge_mixed_example() {
        // P starts unset
        let prev = KeyStatusMap::from_iter([('K', Present), ('O', Absent)]);
        let updates = KeyUpdates::from_iter([('O', Correct), ('P', Present)]);

        let next = prev.merge(&updates);

        assert_eq!(next.get('K'), Some(Present));
        assert_eq!(next.get('O'), Some(Correct));
        assert_eq!(next.get('P'), Some(Present));
        assert_eq!(next.len(), 3);
    }

    #[test]
    fn merge_absent_does_not_overwrite_present() {
        let prev = KeyStatusMap::from_iter([('A', Present)]);
        let next = prev.merge(&KeyUpdates::from_iter([('A', Absent), ('B', Absent)]));

        assert_eq!(next.get('A'), Some(Present));
        assert_eq!(next.get('B'), Some(Absent));
    }

    #[test]
    fn merge_present_upgrades_absent() {
        let prev = KeyStatusMap::from_iter([('A', Absent)]);
        let next = prev.merge(&KeyUpdates::from_iter([('A', Present)]));
        assert_eq!(next.get('A'), Some(Present));
    }

    #[test]
    fn merge_is_pure() {
        let prev = KeyStatusMap::from_iter([('A', Absent)]);
        let _ = prev.merge(&KeyUpdates::from_iter([('A', Correct)]));
        assert_eq!(prev.get('A'), Some(Absent));
    }

    #[test]
    fn merge_empty_updates_is_identity() {
        let prev = KeyStatusMap::from_iter([('A', Present), ('Z', Absent)]);
        assert_eq!(prev.merge(&KeyUpdates::default()), prev);
    }

    #[test]
    fn updates_keep_strongest_duplicate() {
        // KOKO vs KOPI: first K and O are correct, the repeats are absent
        let updates =
            KeyStatusMap::updates_from("KOKO", &[Correct, Correct, Absent, Absent]);
        assert_eq!(updates.len(), 2);
        assert_eq!(updates.get(&'K'), Some(&Correct));
        assert_eq!(updates.get(&'O'), Some(&Correct));
    }

    #[test]
    fn keyboard_rows_cover_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|r| r.chars()).collect();
        letters.sort_unstable();
        let alphabet: Vec<char> = ('A'..='Z').collect();
        assert_eq!(letters, alphabet);
    }
}
