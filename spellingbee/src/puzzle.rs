use std::convert::Infallible;
use std::str::FromStr;

use crate::key::Key;

/// The letters of one game. The first letter is the mandatory one and must
/// appear in every answer; the others may be used any number of times.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Puzzle {
    letters: Key,
    mandatory: Key,
}

impl Puzzle {
    /// Builds a puzzle from `letters`, taking `letters[0]` as the mandatory
    /// letter. Empty or unkeyable input gives a puzzle that matches nothing.
    pub fn new(letters: &str) -> Self {
        let mandatory = match letters.chars().next() {
            Some(c) => Key::of(c.encode_utf8(&mut [0; 4])),
            None => Key::NONE,
        };

        Puzzle {
            letters: Key::of(letters),
            mandatory,
        }
    }

    pub fn letters(&self) -> Key {
        self.letters
    }

    pub fn mandatory(&self) -> Key {
        self.mandatory
    }

    /// A word key matches when the word uses only puzzle letters and
    /// includes the mandatory one.
    pub fn matches(&self, key: Key) -> bool {
        self.letters.contains(key) && key.contains(self.mandatory)
    }

    pub fn is_pangram(&self, word: &str) -> bool {
        !self.letters.is_none() && Key::of(word) == self.letters
    }
}

impl FromStr for Puzzle {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Puzzle::new(s))
    }
}
