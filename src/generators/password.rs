// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::error::{GeneratorError, Result};
use crate::generators::charset;
use crate::models::{ClassSet, GenerationRequest, StrengthLevel, StrengthReport};

/// Stateless generation and strength policy.
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordPolicyEngine;

impl PasswordPolicyEngine {
    pub fn new() -> Self {
        PasswordPolicyEngine
    }

    pub fn generate(&self, request: &GenerationRequest) -> Result<String> {
        self.generate_with_rng(request, &mut rand::thread_rng())
    }

    /// Draws `request.length` characters uniformly, with replacement, from the
    /// union alphabet of the enabled classes. No class is guaranteed to appear.
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, request: &GenerationRequest, rng: &mut R) -> Result<String> {
        let chars = charset::build(&request.classes);
        if chars.is_empty() {
            log::debug!("generation refused: no character class enabled");
            return Err(GeneratorError::EmptySelection);
        }

        let dist = Uniform::from(0..chars.len());
        let password: String = (0..request.length)
            .map(|_| chars[dist.sample(rng)] as char)
            .collect();

        log::debug!(
            "generated password of length {} from {} symbols ({})",
            request.length,
            chars.len(),
            request.classes
        );
        Ok(password)
    }

    /// Class count, capped by length tier.
    pub fn classify_strength(&self, length: usize, classes: &ClassSet) -> StrengthLevel {
        let score = classes.len();
        let score = match length {
            0..=5 => 1,
            6..=9 => score.min(2),
            10..=13 => score.min(3),
            _ => score,
        };
        StrengthLevel::from_score(score)
    }

    /// One generate + classify pass.
    pub fn generate_with_report(&self, request: &GenerationRequest) -> Result<(String, StrengthReport)> {
        let password = self.generate(request)?;
        let report = self.classify_strength(request.length, &request.classes).report();
        Ok((password, report))
    }
}
