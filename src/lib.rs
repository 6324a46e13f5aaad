// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod logging;
pub mod meter;
pub mod models;

pub use crate::error::GeneratorError;
pub use crate::generators::PasswordPolicyEngine;
pub use crate::models::{CharacterClass, ClassSet, GenerationRequest, StrengthLevel, StrengthReport};
