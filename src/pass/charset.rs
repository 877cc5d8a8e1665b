//! Character classes and pool building for password generation.

use std::fmt;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
const SYMBOLS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '_', '-', '+', '=', '?',
];

/// Visually confusable characters. Only entries that occur in some alphabet
/// are listed.
pub const AMBIGUOUS: &[char] = &['I', 'l', '1', 'O', '0', 'B', '8', 'S', '5', 'Z', '2'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    /// Base alphabet, in fixed order.
    pub fn alphabet(self) -> Vec<char> {
        match self {
            CharClass::Lowercase => LOWERCASE.chars().collect(),
            CharClass::Uppercase => UPPERCASE.chars().collect(),
            CharClass::Digits => DIGITS.to_vec(),
            CharClass::Symbols => SYMBOLS.to_vec(),
        }
    }

    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Digits => c.is_ascii_digit(),
            CharClass::Symbols => SYMBOLS.contains(&c),
        }
    }

    /// Filtered pool for this class.
    pub fn pool(self, exclude_ambiguous: bool) -> Vec<char> {
        filter(self.alphabet(), exclude_ambiguous)
    }

    fn bit(self) -> u8 {
        match self {
            CharClass::Lowercase => 1,
            CharClass::Uppercase => 1 << 1,
            CharClass::Digits => 1 << 2,
            CharClass::Symbols => 1 << 3,
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digits => "digits",
            CharClass::Symbols => "symbols",
        })
    }
}

pub fn is_ambiguous(c: char) -> bool {
    AMBIGUOUS.contains(&c)
}

fn filter(chars: Vec<char>, exclude_ambiguous: bool) -> Vec<char> {
    if !exclude_ambiguous {
        return chars;
    }
    chars.into_iter().filter(|&c| !is_ambiguous(c)).collect()
}

/// Selected classes. Iterates in [`CharClass::ALL`] order, never repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub fn all() -> Self {
        CharClass::ALL.into_iter().collect()
    }

    pub fn from_flags(lower: bool, upper: bool, digits: bool, symbols: bool) -> Self {
        let mut set = ClassSet::empty();
        set.set(CharClass::Lowercase, lower);
        set.set(CharClass::Uppercase, upper);
        set.set(CharClass::Digits, digits);
        set.set(CharClass::Symbols, symbols);
        set
    }

    pub fn set(&mut self, class: CharClass, on: bool) {
        if on {
            self.0 |= class.bit();
        } else {
            self.0 &= !class.bit();
        }
    }

    pub fn contains(&self, class: CharClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|c| self.contains(*c))
    }
}

impl FromIterator<CharClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.set(class, true);
        }
        set
    }
}

/// Concatenation of every pool. Duplicates across pools are kept.
pub fn combined(pools: &[Vec<char>]) -> Vec<char> {
    pools.iter().flatten().copied().collect()
}

/// Size of the combined alphabet for `classes` (for entropy reporting).
pub fn size(classes: &ClassSet, exclude_ambiguous: bool) -> usize {
    classes
        .iter()
        .map(|c| c.pool(exclude_ambiguous).len())
        .sum()
}
