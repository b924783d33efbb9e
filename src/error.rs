//! Error types for the Benefits Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration and
//! admitting employee records. The paycheck calculation itself is total and
//! never returns an error.

use thiserror::Error;

/// The main error type for the Benefits Engine.
///
/// # Example
///
/// ```
/// use benefits_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/benefits.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/benefits.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was outside its permitted range.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The configuration option that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// An employee record claimed both a spouse and a domestic partner.
    #[error("An employee cannot have both a spouse and a domestic partner.")]
    ConflictingRelationship {
        /// The ID of the offending employee.
        employee_id: i32,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee {employee_id} field '{field}': {message}")]
    InvalidEmployee {
        /// The ID of the offending employee.
        employee_id: i32,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Two employee records share the same ID.
    #[error("Duplicate employee id: {id}")]
    DuplicateEmployee {
        /// The repeated ID.
        id: i32,
    },

    /// Two dependent records share the same ID.
    #[error("Duplicate dependent id: {id}")]
    DuplicateDependent {
        /// The repeated ID.
        id: i32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/benefits.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/benefits.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "PaychecksPerYear".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value 'PaychecksPerYear': must be greater than zero"
        );
    }

    #[test]
    fn test_conflicting_relationship_message() {
        let error = EngineError::ConflictingRelationship { employee_id: 7 };
        assert_eq!(
            error.to_string(),
            "An employee cannot have both a spouse and a domestic partner."
        );
    }

    #[test]
    fn test_invalid_employee_displays_id_field_and_message() {
        let error = EngineError::InvalidEmployee {
            employee_id: 3,
            field: "salary".to_string(),
            message: "cannot be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid employee 3 field 'salary': cannot be negative"
        );
    }

    #[test]
    fn test_duplicate_ids_display() {
        assert_eq!(
            EngineError::DuplicateEmployee { id: 2 }.to_string(),
            "Duplicate employee id: 2"
        );
        assert_eq!(
            EngineError::DuplicateDependent { id: 4 }.to_string(),
            "Duplicate dependent id: 4"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_duplicate() -> EngineResult<()> {
            Err(EngineError::DuplicateEmployee { id: 1 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_duplicate()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
