use std::fmt;

const ALPHABET: usize = 26;

static LETTER_BITS: [u32; ALPHABET] = letter_bits();

const fn letter_bits() -> [u32; ALPHABET] {
    let mut bits = [0; ALPHABET];
    let mut idx = 0;
    while idx < ALPHABET {
        bits[idx] = 1 << idx;
        idx += 1;
    }
    bits
}

fn bit(c: char) -> Option<u32> {
    match c {
        'a'..='z' => Some(LETTER_BITS[c as usize - 'a' as usize]),
        _ => None,
    }
}

/// Set of distinct letters in a word, one bit per letter `a` through `z`.
///
/// Anagrams share a key, as do words that differ only in how often a letter
/// repeats. The zero key is reserved for words that cannot be keyed (empty,
/// or containing anything other than `a`-`z` once lower-cased).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Key(u32);

impl Key {
    pub const NONE: Key = Key(0);

    pub fn of(word: &str) -> Key {
        let mut key = 0;
        for c in word.chars().flat_map(char::to_lowercase) {
            match bit(c) {
                Some(b) => key |= b,
                None => return Key::NONE,
            }
        }
        Key(key)
    }

    /// True if every letter of `needle` is also in `self`. The sentinel never
    /// contains and is never contained.
    pub fn contains(self, needle: Key) -> bool {
        if self.is_none() || needle.is_none() {
            return false;
        }
        self.0 & needle.0 == needle.0
    }

    pub fn is_none(self) -> bool {
        self == Key::NONE
    }

    /// Number of distinct letters.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn letters(self) -> impl Iterator<Item = char> {
        let value = self.0;
        (0..ALPHABET as u8)
            .filter(move |idx| value & LETTER_BITS[*idx as usize] != 0)
            .map(|idx| (b'a' + idx) as char)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "-");
        }
        self.letters().try_for_each(|c| write!(f, "{}", c))
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({:#09x} {})", self.bits(), self)
    }
}
