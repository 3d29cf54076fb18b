use std::cmp::Ordering;

use crate::puzzle::Puzzle;

/// Presentation order for a puzzle's solutions.
///
/// Pangrams always rank above other words; within either group longer words
/// rank higher. [`Ranking::compare`] sorts ascending, weakest first, unless
/// `reverse` is set.
#[derive(Copy, Clone, Debug)]
pub struct Ranking {
    puzzle: Puzzle,
    reverse: bool,
}

impl Ranking {
    pub fn new(letters: &str, reverse: bool) -> Self {
        Ranking {
            puzzle: Puzzle::new(letters),
            reverse,
        }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let ord = self
            .puzzle
            .is_pangram(a)
            .cmp(&self.puzzle.is_pangram(b))
            .then_with(|| a.chars().count().cmp(&b.chars().count()));

        if self.reverse {
            ord.reverse()
        } else {
            ord
        }
    }

    pub fn sort<S: AsRef<str>>(&self, words: &mut [S]) {
        words.sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }
}

/// Comparator over solutions for `letters`, usable with `sort_by`.
pub fn cmp_fn(letters: &str, reverse: bool) -> impl Fn(&str, &str) -> Ordering {
    let ranking = Ranking::new(letters, reverse);
    move |a: &str, b: &str| ranking.compare(a, b)
}
