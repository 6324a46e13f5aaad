// src/cli/menu.rs
use inquire::{MultiSelect, Select, Text};

use crate::cli::handlers::EMPTY_SELECTION_PROMPT;
use crate::core::Config;
use crate::error::GeneratorError;
use crate::generators::PasswordPolicyEngine;
use crate::meter;
use crate::models::{CharacterClass, ClassSet, GenerationRequest};

const GENERATE_AGAIN: &str = "🔁  Generate again";
const CHANGE_SETTINGS: &str = "⚙️  Change length or character classes";
const EXIT: &str = "❌  Exit";

/// Parses the length prompt answer and clamps it to the configured range.
fn parse_length(input: &str, config: &Config) -> Option<usize> {
    input.trim().parse::<usize>().ok().map(|length| config.clamp_length(length))
}

fn classes_from_labels(selected: &[&str]) -> ClassSet {
    CharacterClass::ALL
        .into_iter()
        .filter(|c| selected.contains(&c.describe()))
        .collect()
}

/// Asks until a number is entered. Esc keeps the current length.
fn prompt_length(config: &Config, current: usize) -> anyhow::Result<usize> {
    let message = format!("Character length ({}-{}):", config.min_length, config.max_length);
    loop {
        let answer = Text::new(&message)
            .with_default(&current.to_string())
            .prompt_skippable()?;

        match answer {
            None => return Ok(current),
            Some(input) => match parse_length(&input, config) {
                Some(length) => return Ok(length),
                None => println!("❌ '{}' is not a number", input.trim()),
            },
        }
    }
}

/// Esc keeps the current selection.
fn prompt_classes(current: &ClassSet) -> anyhow::Result<ClassSet> {
    let options: Vec<&str> = CharacterClass::ALL.iter().map(|c| c.describe()).collect();
    let defaults: Vec<usize> = CharacterClass::ALL
        .iter()
        .enumerate()
        .filter(|(_, c)| current.contains(**c))
        .map(|(i, _)| i)
        .collect();

    let selected = MultiSelect::new("Character classes:", options)
        .with_default(&defaults)
        .prompt_skippable()?;

    Ok(match selected {
        Some(labels) => classes_from_labels(&labels),
        None => *current,
    })
}

/// Interactive loop. The last generated password is the only state kept.
pub fn run_menu(engine: &PasswordPolicyEngine, config: &Config, styled: bool) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║          🔐 PASSWORD GENERATOR        ║");
    println!("╚══════════════════════════════════════╝");

    let mut request = GenerationRequest::new(config.default_length, config.default_classes);

    let last = loop {
        let current = match engine.generate_with_report(&request) {
            Ok((password, report)) => {
                println!("\n{}", password);
                println!("{}\n", meter::render(&report, styled));
                Some(password)
            }
            Err(GeneratorError::EmptySelection) => {
                println!("\n{}\n", EMPTY_SELECTION_PROMPT);
                None
            }
            Err(e) => return Err(e.into()),
        };

        let choice = Select::new("What next?", vec![GENERATE_AGAIN, CHANGE_SETTINGS, EXIT])
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
            .prompt_skippable()?;

        match choice {
            Some(GENERATE_AGAIN) => {}
            Some(CHANGE_SETTINGS) => {
                request.length = prompt_length(config, request.length)?;
                request.classes = prompt_classes(&request.classes)?;
                log::debug!("Menu settings: length {}, classes [{}]", request.length, request.classes);
            }
            _ => break current,
        }
    };

    if let Some(password) = last {
        println!("Last password: {}", password);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_answer_is_parsed_and_clamped() {
        let config = Config::default();
        assert_eq!(parse_length(" 12 ", &config), Some(12));
        assert_eq!(parse_length("2", &config), Some(4));
        assert_eq!(parse_length("500", &config), Some(32));
    }

    #[test]
    fn non_numeric_length_answer_is_rejected() {
        let config = Config::default();
        assert_eq!(parse_length("twelve", &config), None);
        assert_eq!(parse_length("", &config), None);
        assert_eq!(parse_length("-3", &config), None);
    }

    #[test]
    fn selected_labels_map_back_to_classes() {
        let labels = [CharacterClass::Symbol.describe(), CharacterClass::Upper.describe()];
        let classes = classes_from_labels(&labels);
        assert_eq!(classes, ClassSet::empty().with(CharacterClass::Upper).with(CharacterClass::Symbol));
        assert!(classes_from_labels(&[]).is_empty());
    }
}
