//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check severity names against the level parser
//! - Detect empty and colliding sink names
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: Config → Result<(), Vec<ValidationError>>
//! - Runs before a config is accepted into the system

use tracing::level_filters::LevelFilter;

use crate::config::schema::{Config, SinkConfig};

/// One semantic problem found in a config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A sink has an empty name.
    EmptySinkName,
    /// Two sinks share a name; their records could not be told apart.
    DuplicateSinkName(String),
    /// Severity string not understood.
    UnknownLevel { sink: String, level: String },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptySinkName => write!(f, "sink name must not be empty"),
            ValidationError::DuplicateSinkName(name) => {
                write!(f, "duplicate sink name: {}", name)
            }
            ValidationError::UnknownLevel { sink, level } => {
                write!(f, "sink {}: unknown severity level: {}", sink, level)
            }
        }
    }
}

/// Validate a config, returning every problem found.
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for sink in [&config.simple, &config.detailed] {
        validate_sink(sink, &mut errors);
    }

    if config.simple.name == config.detailed.name {
        errors.push(ValidationError::DuplicateSinkName(
            config.simple.name.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_sink(sink: &SinkConfig, errors: &mut Vec<ValidationError>) {
    if sink.name.is_empty() {
        errors.push(ValidationError::EmptySinkName);
    }
    if sink.min_level.parse::<LevelFilter>().is_err() {
        errors.push(ValidationError::UnknownLevel {
            sink: sink.name.clone(),
            level: sink.min_level.clone(),
        });
    }
}
