// src/cli/handlers.rs
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::core::Config;
use crate::error::Result;
use crate::generators::PasswordPolicyEngine;
use crate::meter;
use crate::models::{ClassSet, GenerationRequest, StrengthReport};

/// Shown instead of a password when no class is enabled.
pub const EMPTY_SELECTION_PROMPT: &str = "Select options!";

#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    pub passwords: Vec<String>,
    pub length: usize,
    pub classes: ClassSet,
    pub strength: StrengthReport,
}

#[derive(Debug, Serialize)]
pub struct StrengthOutput {
    pub length: usize,
    pub classes: ClassSet,
    pub strength: StrengthReport,
}

#[derive(Debug, Serialize)]
struct ErrorOutput {
    error: String,
}

/// Resolves CLI options against the config, clamping the length.
pub fn build_request(config: &Config, length: Option<usize>, classes: Option<ClassSet>) -> GenerationRequest {
    let requested = length.unwrap_or(config.default_length);
    let length = config.clamp_length(requested);
    if length != requested {
        log::warn!(
            "Length {} outside {}..={}, using {}",
            requested,
            config.min_length,
            config.max_length,
            length
        );
    }
    GenerationRequest::new(length, classes.unwrap_or(config.default_classes))
}

pub fn handle_generate(
    engine: &PasswordPolicyEngine,
    request: &GenerationRequest,
    count: usize,
    seed: Option<u64>,
) -> Result<GenerateOutput> {
    let mut rng: Box<dyn RngCore> = match seed {
        Some(seed) => {
            log::info!("Using seeded generator ({})", seed);
            Box::new(ChaCha8Rng::seed_from_u64(seed))
        }
        None => Box::new(rand::thread_rng()),
    };

    let passwords = (0..count)
        .map(|_| engine.generate_with_rng(request, &mut *rng))
        .collect::<Result<Vec<_>>>()?;

    Ok(GenerateOutput {
        passwords,
        length: request.length,
        classes: request.classes,
        strength: engine.classify_strength(request.length, &request.classes).report(),
    })
}

pub fn handle_strength(engine: &PasswordPolicyEngine, length: usize, classes: ClassSet) -> StrengthOutput {
    StrengthOutput {
        length,
        classes,
        strength: engine.classify_strength(length, &classes).report(),
    }
}

pub fn print_generate(output: &GenerateOutput, json: bool, styled: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(output)?);
        return Ok(());
    }
    for password in &output.passwords {
        println!("{}", password);
    }
    println!("{}", meter::render(&output.strength, styled));
    Ok(())
}

pub fn print_strength(output: &StrengthOutput, json: bool, styled: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(output)?);
    } else {
        println!("{}", meter::render(&output.strength, styled));
    }
    Ok(())
}

pub fn print_error(message: &str, json: bool) -> anyhow::Result<()> {
    if json {
        let out = ErrorOutput { error: message.to_string() };
        println!("{}", serde_json::to_string(&out)?);
    } else {
        println!("{}", message);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneratorError;
    use crate::models::CharacterClass;

    #[test]
    fn request_uses_config_defaults() {
        let config = Config::default();
        let request = build_request(&config, None, None);
        assert_eq!(request.length, 10);
        assert_eq!(request.classes, ClassSet::all());
    }

    #[test]
    fn request_length_is_clamped() {
        let config = Config::default();
        assert_eq!(build_request(&config, Some(2), None).length, 4);
        assert_eq!(build_request(&config, Some(64), None).length, 32);
    }

    #[test]
    fn generate_prints_count_passwords_with_seed() {
        let engine = PasswordPolicyEngine::new();
        let request = GenerationRequest::new(16, ClassSet::empty().with(CharacterClass::Digit));
        let a = handle_generate(&engine, &request, 3, Some(9)).unwrap();
        let b = handle_generate(&engine, &request, 3, Some(9)).unwrap();
        assert_eq!(a.passwords.len(), 3);
        assert_eq!(a.passwords, b.passwords);
        assert!(a.passwords.iter().all(|p| p.len() == 16 && p.bytes().all(|c| c.is_ascii_digit())));
        assert_eq!(a.strength.label, "TOO WEAK");
    }

    #[test]
    fn generate_with_no_classes_fails() {
        let engine = PasswordPolicyEngine::new();
        let request = GenerationRequest::new(16, ClassSet::empty());
        let err = handle_generate(&engine, &request, 1, None).unwrap_err();
        assert_eq!(err, GeneratorError::EmptySelection);
    }

    #[test]
    fn generate_output_json_shape() {
        let engine = PasswordPolicyEngine::new();
        let request = GenerationRequest::new(20, ClassSet::all());
        let output = handle_generate(&engine, &request, 1, Some(1)).unwrap();
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["strength"]["label"], "STRONG");
        assert_eq!(value["strength"]["segments_lit"], 4);
        assert_eq!(value["classes"], serde_json::json!(["upper", "lower", "digit", "symbol"]));
    }

    #[test]
    fn strength_length_is_clamped_like_generate() {
        let engine = PasswordPolicyEngine::new();
        let config = Config::default();
        let request = build_request(&config, Some(0), None);
        let output = handle_strength(&engine, request.length, request.classes);
        assert_eq!(output.length, 4);
        let request = build_request(&config, Some(99), None);
        let output = handle_strength(&engine, request.length, request.classes);
        assert_eq!(output.length, 32);
        assert_eq!(output.strength.label, "STRONG");
    }

    #[test]
    fn strength_output_is_pure_classification() {
        let engine = PasswordPolicyEngine::new();
        let classes = ClassSet::empty().with(CharacterClass::Upper).with(CharacterClass::Lower);
        let output = handle_strength(&engine, 8, classes);
        assert_eq!(output.strength.level, 2);
        assert_eq!(output.strength.color_tag, "orange");
    }
}
