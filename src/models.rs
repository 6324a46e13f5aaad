// src/models.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// All classes in canonical order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Upper,
        CharacterClass::Lower,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    fn index(self) -> usize {
        match self {
            CharacterClass::Upper => 0,
            CharacterClass::Lower => 1,
            CharacterClass::Digit => 2,
            CharacterClass::Symbol => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Upper => "upper",
            CharacterClass::Lower => "lower",
            CharacterClass::Digit => "digit",
            CharacterClass::Symbol => "symbol",
        }
    }

    /// Label used by the interactive menu checkboxes.
    pub fn describe(self) -> &'static str {
        match self {
            CharacterClass::Upper => "Include Uppercase Letters",
            CharacterClass::Lower => "Include Lowercase Letters",
            CharacterClass::Digit => "Include Numbers",
            CharacterClass::Symbol => "Include Symbols",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterClass {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upper" | "uppercase" => Ok(CharacterClass::Upper),
            "lower" | "lowercase" => Ok(CharacterClass::Lower),
            "digit" | "digits" | "number" | "numbers" => Ok(CharacterClass::Digit),
            "symbol" | "symbols" => Ok(CharacterClass::Symbol),
            other => Err(GeneratorError::UnknownClass(other.to_string())),
        }
    }
}

/// Set of enabled character classes. Iteration always follows canonical order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CharacterClass>", into = "Vec<CharacterClass>")]
pub struct ClassSet {
    enabled: [bool; 4],
}

impl ClassSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self { enabled: [true; 4] }
    }

    pub fn with(mut self, class: CharacterClass) -> Self {
        self.insert(class);
        self
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.enabled[class.index()] = true;
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.enabled[class.index()] = false;
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.enabled[class.index()]
    }

    pub fn len(&self) -> usize {
        self.enabled.iter().filter(|on| **on).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL.into_iter().filter(|c| self.contains(*c))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

impl From<Vec<CharacterClass>> for ClassSet {
    fn from(classes: Vec<CharacterClass>) -> Self {
        classes.into_iter().collect()
    }
}

impl From<ClassSet> for Vec<CharacterClass> {
    fn from(set: ClassSet) -> Self {
        set.iter().collect()
    }
}

impl FromStr for ClassSet {
    type Err = GeneratorError;

    /// Parses a comma separated list such as `upper,lower,numbers`.
    /// An empty string yields an empty set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .filter(|part| !part.trim().is_empty())
            .map(CharacterClass::from_str)
            .collect()
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(CharacterClass::name).collect();
        f.write_str(&names.join(","))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: ClassSet,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: ClassSet) -> Self {
        Self { length, classes }
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: 10,
            classes: ClassSet::all(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthLevel {
    TooWeak = 1,
    Weak = 2,
    Medium = 3,
    Strong = 4,
}

impl StrengthLevel {
    /// Maps a raw score onto a level. Scores outside 1..=4 saturate.
    pub fn from_score(score: usize) -> Self {
        match score {
            0 | 1 => StrengthLevel::TooWeak,
            2 => StrengthLevel::Weak,
            3 => StrengthLevel::Medium,
            _ => StrengthLevel::Strong,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::TooWeak => "TOO WEAK",
            StrengthLevel::Weak => "WEAK",
            StrengthLevel::Medium => "MEDIUM",
            StrengthLevel::Strong => "STRONG",
        }
    }

    pub fn color_tag(self) -> &'static str {
        match self {
            StrengthLevel::TooWeak => "red",
            StrengthLevel::Weak => "orange",
            StrengthLevel::Medium => "yellow",
            StrengthLevel::Strong => "green",
        }
    }

    /// Number of the four meter segments that are lit.
    pub fn segments_lit(self) -> u8 {
        self.value()
    }

    pub fn report(self) -> StrengthReport {
        StrengthReport {
            level: self.value(),
            label: self.label().to_string(),
            color_tag: self.color_tag().to_string(),
            segments_lit: self.segments_lit(),
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub level: u8,
    pub label: String,
    pub color_tag: String,
    pub segments_lit: u8,
}
