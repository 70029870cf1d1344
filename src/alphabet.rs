//! The set of characters a password is drawn from.

use crate::Configuration;

pub static LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub static NUMBERS: &str = "0123456789";
pub static SYMBOLS: &str = "!@#$%^&*()_-+=[]{}|:;\"'<>,.?/";

/// The character classes that can make up an alphabet, in the order they are concatenated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CharClass {
    Letters,
    Numbers,
    Symbols,
}

impl CharClass {
    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Letters => LETTERS,
            CharClass::Numbers => NUMBERS,
            CharClass::Symbols => SYMBOLS,
        }
    }
}

/// An ordered list of the characters eligible for selection. Characters may repeat if the same
/// class is given twice; selection is over positions, not distinct characters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    /// Letters always; then digits and symbols if the configuration asks for them.
    pub fn for_config(config: &Configuration) -> Alphabet {
        let mut classes = vec![CharClass::Letters];
        if config.include_number {
            classes.push(CharClass::Numbers);
        }
        if config.include_character {
            classes.push(CharClass::Symbols);
        }
        Alphabet::from_classes(&classes)
    }

    /// Concatenate the given classes. An empty selection falls back to letters only, so the
    /// result is never empty.
    pub fn from_classes(classes: &[CharClass]) -> Alphabet {
        let mut abc = Vec::new();
        for class in classes {
            abc.extend(class.chars().chars());
        }
        if abc.is_empty() {
            abc.extend(LETTERS.chars());
        }
        Alphabet(abc)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.0.contains(&ch)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(include_number: bool, include_character: bool) -> Configuration {
        Configuration {
            length: 12,
            include_number,
            include_character,
        }
    }

    #[test]
    fn class_sizes() {
        assert_eq!(LETTERS.chars().count(), 52);
        assert_eq!(NUMBERS.chars().count(), 10);
        assert_eq!(SYMBOLS.chars().count(), 29);
    }

    #[test]
    fn sizes_per_config() {
        assert_eq!(Alphabet::for_config(&config(true, true)).len(), 91);
        assert_eq!(Alphabet::for_config(&config(true, false)).len(), 62);
        assert_eq!(Alphabet::for_config(&config(false, true)).len(), 81);
        assert_eq!(Alphabet::for_config(&config(false, false)).len(), 52);
    }

    #[test]
    fn letters_then_numbers_then_symbols() {
        let abc = Alphabet::for_config(&config(true, true));
        let s: String = abc.as_slice().iter().collect();
        assert_eq!(s, format!("{}{}{}", LETTERS, NUMBERS, SYMBOLS));
    }

    #[test]
    fn letters_only() {
        let abc = Alphabet::for_config(&config(false, false));
        assert!(abc.as_slice().iter().all(|c| c.is_ascii_alphabetic()));
        assert!(!abc.contains('0'));
        assert!(!abc.contains('!'));
    }

    #[test]
    fn empty_selection_falls_back_to_letters() {
        let abc = Alphabet::from_classes(&[]);
        assert_eq!(abc.len(), 52);
        assert_eq!(abc.as_slice()[0], 'A');
    }

    #[test]
    fn symbols_include_quotes() {
        let abc = Alphabet::from_classes(&[CharClass::Symbols]);
        assert!(abc.contains('"'));
        assert!(abc.contains('\''));
        assert!(abc.contains('/'));
        assert!(!abc.contains('~'));
    }
}
