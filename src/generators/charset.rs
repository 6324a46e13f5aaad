// src/generators/charset.rs
use crate::models::{CharacterClass, ClassSet};

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*(){}[]=<>/,.|~?";

/// Literal alphabet bound to a character class.
pub fn alphabet(class: CharacterClass) -> &'static [u8] {
    match class {
        CharacterClass::Upper => UPPERCASE,
        CharacterClass::Lower => LOWERCASE,
        CharacterClass::Digit => DIGITS,
        CharacterClass::Symbol => SYMBOLS,
    }
}

/// Concatenates the alphabets of the enabled classes in canonical order.
pub fn build(classes: &ClassSet) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(classes));
    for class in classes.iter() {
        chars.extend_from_slice(alphabet(class));
    }
    chars
}

pub fn size(classes: &ClassSet) -> usize {
    classes.iter().map(|class| alphabet(class).len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_sizes() {
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SYMBOLS.len(), 23);
        assert_eq!(size(&ClassSet::all()), 85);
    }

    #[test]
    fn build_follows_canonical_order() {
        let classes = ClassSet::empty()
            .with(CharacterClass::Symbol)
            .with(CharacterClass::Digit);
        let chars = build(&classes);
        assert_eq!(&chars[..10], DIGITS);
        assert_eq!(&chars[10..], SYMBOLS);
    }

    #[test]
    fn empty_selection_builds_empty_alphabet() {
        assert!(build(&ClassSet::empty()).is_empty());
    }
}
