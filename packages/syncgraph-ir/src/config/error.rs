//! Configuration error types

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Range validation error
    #[error("Invalid range for field '{field}': {value} not in {min}..={max}. {hint}")]
    Range {
        field: String,
        value: String,
        min: String,
        max: String,
        hint: String,
    },

    /// Unknown field in YAML
    #[error("Unknown field '{field}' in configuration file. {suggestion}")]
    UnknownField {
        field: String,
        suggestion: String,
        valid_fields: Vec<String>,
    },

    /// Missing version field in YAML
    #[error("Missing 'version' field in configuration file. Add 'version: 1' to the top of your YAML file.")]
    MissingVersion,

    /// Unsupported version
    #[error("Unsupported configuration version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create a range error with a hint
    pub fn range_with_hint(
        field: impl Into<String>,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
        hint: impl Into<String>,
    ) -> Self {
        Self::Range {
            field: field.into(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
            hint: hint.into(),
        }
    }

    /// Create an unknown field error with suggestion
    pub fn unknown_field_with_suggestion(field: impl Into<String>, valid_fields: Vec<String>) -> Self {
        let field = field.into();
        let suggestion = find_closest_match(&field, &valid_fields);

        Self::UnknownField {
            field,
            suggestion,
            valid_fields,
        }
    }
}

/// Find closest match using simple edit distance
fn find_closest_match(target: &str, candidates: &[String]) -> String {
    match candidates
        .iter()
        .min_by_key(|candidate| levenshtein_distance(target, candidate))
    {
        Some(closest) => format!("Did you mean '{}'?", closest),
        None => "No valid fields available".to_string(),
    }
}

/// Simple Levenshtein distance implementation
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();
    let mut previous: Vec<usize> = (0..=s2.len()).collect();

    for (i, c1) in s1.iter().enumerate() {
        let mut current = vec![i + 1; s2.len() + 1];
        for (j, c2) in s2.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            current[j + 1] = (previous[j + 1] + 1) // deletion
                .min(current[j] + 1) // insertion
                .min(previous[j] + cost); // substitution
        }
        previous = current;
    }

    previous[s2.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("indent", "indent"), 0);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
    }

    #[test]
    fn test_closest_match() {
        let valid_fields = vec![
            "include_helper_functions".to_string(),
            "output_path".to_string(),
            "indent".to_string(),
        ];

        let suggestion = find_closest_match("output_pth", &valid_fields);
        assert!(suggestion.contains("output_path"));
    }

    #[test]
    fn test_closest_match_empty_candidates() {
        let suggestion = find_closest_match("indent", &[]);
        assert!(suggestion.contains("No valid fields"));
    }

    #[test]
    fn test_error_formatting() {
        let err = ConfigError::range_with_hint("indent", 0, 1, 8, "Indent must be at least 1");

        let msg = err.to_string();
        assert!(msg.contains("indent"));
        assert!(msg.contains("1..=8"));
        assert!(msg.contains("at least 1"));
    }

    #[test]
    fn test_unsupported_version_error() {
        let err = ConfigError::UnsupportedVersion {
            found: 2,
            supported: vec![1],
        };

        let msg = err.to_string();
        assert!(msg.contains("version 2"));
        assert!(msg.contains("Supported versions: 1"));
    }

    #[test]
    fn test_missing_version_error() {
        let msg = ConfigError::MissingVersion.to_string();
        assert!(msg.contains("version: 1"));
    }
}
