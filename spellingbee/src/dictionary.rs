use std::collections::HashMap;
use std::fmt;

use tracing::{debug, info};

use crate::key::Key;
use crate::puzzle::Puzzle;
use crate::stats::{NoStats, Stats};

/// Word list indexed by letter set.
///
/// Words sharing a [`Key`] are stored together, so a query tests each
/// distinct letter set once however many words it covers. The index is never
/// modified after construction and can be shared freely between threads.
pub struct Dictionary {
    classes: HashMap<Key, Vec<String>>,
    stats: Box<dyn Stats>,
}

impl Dictionary {
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::with_stats(words, NoStats)
    }

    /// Builds the index and reports its class count to `stats`, which then
    /// receives the size of every query's result.
    pub fn with_stats<I, S>(words: I, stats: S) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        S: Stats + 'static,
    {
        let mut classes: HashMap<Key, Vec<String>> = HashMap::new();
        let mut skipped = 0;

        for word in words {
            let word = word.as_ref().to_lowercase();
            let key = Key::of(&word);
            if key.is_none() {
                skipped += 1;
                continue;
            }
            classes.entry(key).or_default().push(word);
        }

        classes.values_mut().for_each(|class| {
            class.sort_unstable();
            class.dedup();
        });

        info!(classes = classes.len(), skipped, "built dictionary");
        stats.record_size(classes.len());

        Dictionary {
            classes,
            stats: Box::new(stats),
        }
    }

    /// Every word that uses only `letters` and contains `letters[0]`, in no
    /// particular order. Empty or unkeyable `letters` yield nothing.
    pub fn find_words(&self, letters: &str) -> Vec<&str> {
        let puzzle = Puzzle::new(letters);
        let soln = self.solve(&puzzle);
        debug!(
            letters,
            distinct = puzzle.letters().len(),
            solutions = soln.len(),
            "solved"
        );
        soln
    }

    pub fn solve(&self, puzzle: &Puzzle) -> Vec<&str> {
        let soln: Vec<&str> = self
            .classes
            .iter()
            .filter(|&(&key, _)| puzzle.matches(key))
            .flat_map(|(_, words)| words.iter().map(String::as_str))
            .collect();
        self.stats.record_solutions(soln.len());
        soln
    }

    /// Number of letter-set classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.classes.values().map(Vec::len).sum()
    }

    pub fn class(&self, key: Key) -> Option<&[String]> {
        self.classes.get(&key).map(Vec::as_slice)
    }

    pub fn classes(&self) -> impl Iterator<Item = (Key, &[String])> {
        self.classes.iter().map(|(&key, words)| (key, words.as_slice()))
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("classes", &self.classes.len())
            .field("words", &self.word_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    const WORDS: [&str; 8] = [
        "alpha",
        "beta",
        "gamma",
        "ply",
        "phalanx",
        "philistine",
        "alfalfa",
        "pharynx",
    ];

    fn sorted(mut words: Vec<&str>) -> Vec<&str> {
        words.sort_unstable();
        words
    }

    #[derive(Default)]
    struct Recorder {
        size: Mutex<Option<usize>>,
        solutions: Mutex<Vec<usize>>,
    }

    impl Stats for Recorder {
        fn record_size(&self, classes: usize) {
            *self.size.lock().unwrap() = Some(classes);
        }

        fn record_solutions(&self, count: usize) {
            self.solutions.lock().unwrap().push(count);
        }
    }

    #[test]
    fn unique_keys() {
        let dict = Dictionary::new(["foo", "bar", "baz"]);
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.class(Key::of("bar")), Some(&["bar".to_owned()][..]));
        assert_eq!(dict.class(Key::of("baz")), Some(&["baz".to_owned()][..]));
        assert_eq!(dict.class(Key::of("foo")), Some(&["foo".to_owned()][..]));
    }

    #[test]
    fn equivalent_keys() {
        let dict = Dictionary::new(["foobara", "foobar", "foobaroo"]);
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.word_count(), 3);
        let class = dict.class(Key::of("abfor")).unwrap();
        assert_eq!(class, ["foobar", "foobara", "foobaroo"]);
    }

    #[test]
    fn skips_unkeyable_words() {
        let dict = Dictionary::new(["it's", "", "naïve", "ok"]);
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.word_count(), 1);
    }

    #[test]
    fn lowercases_and_dedups() {
        let dict = Dictionary::new(["Alpha", "alpha", "ALPHA"]);
        assert_eq!(dict.word_count(), 1);
        assert_eq!(dict.class(Key::of("alpha")).unwrap(), ["alpha"]);
    }

    #[test]
    fn skips_padded_words() {
        let dict = Dictionary::new([" alpha", "alpha\r", "ph alanx", "beta\n"]);
        assert!(dict.is_empty());
        assert!(dict.find_words("alphynx").is_empty());
    }

    #[test]
    fn empty_input() {
        let dict = Dictionary::new(Vec::<String>::new());
        assert!(dict.is_empty());
        assert!(dict.find_words("alphynx").is_empty());
    }

    #[test]
    fn find_words() {
        let dict = Dictionary::new(WORDS);
        assert_eq!(sorted(dict.find_words("alphynx")), ["alpha", "phalanx"]);
        assert_eq!(sorted(dict.find_words("fla")), ["alfalfa"]);
        assert!(dict.find_words("").is_empty());
    }

    #[test]
    fn mandatory_letter_required() {
        let dict = Dictionary::new(WORDS);
        // "ply" fits the letters but lacks the leading "a".
        assert!(!dict.find_words("alphynx").contains(&"ply"));
        assert_eq!(dict.find_words("ylphanx"), ["ply"]);
    }

    #[test]
    fn records_stats() {
        let stats = Arc::new(Recorder::default());
        let dict = Dictionary::with_stats(WORDS, stats.clone());
        assert_eq!(*stats.size.lock().unwrap(), Some(8));
        assert!(stats.solutions.lock().unwrap().is_empty());

        assert_eq!(sorted(dict.find_words("alphynx")), ["alpha", "phalanx"]);
        assert_eq!(sorted(dict.find_words("agfml")), ["alfalfa", "gamma"]);
        assert_eq!(dict.find_words("plha"), ["alpha"]);
        assert!(dict.find_words("").is_empty());
        assert_eq!(*stats.solutions.lock().unwrap(), [2, 2, 1, 0]);
    }
}
