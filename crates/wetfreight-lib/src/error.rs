use chrono::NaiveDate;
use thiserror::Error;

/// Convenient result alias for the wet freight library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a route code is absent from the constants store after normalization.
    #[error("unknown route code: {code}{}", format_suggestions(.suggestions))]
    UnknownRoute {
        code: String,
        suggestions: Vec<String>,
    },

    /// Raised when an observation row lacks a market input required by the calculation.
    #[error("observation {timestamp} is missing required field {field}")]
    MissingField {
        timestamp: NaiveDate,
        field: &'static str,
    },

    /// Raised when a market input is present but NaN or infinite.
    #[error("observation {timestamp} has non-finite {field}: {value}")]
    InvalidField {
        timestamp: NaiveDate,
        field: &'static str,
        value: f64,
    },

    /// Raised when the configured bunker premium is NaN or infinite.
    #[error("bunker premium must be finite, got {premium}")]
    InvalidPremium { premium: f64 },

    /// Raised when route constants yield zero total voyage days.
    #[error("route {code} has zero total voyage days; TCE is undefined")]
    DivisionByZero { code: String },

    /// Raised when an observation falls in a fuel regime the engine does not price.
    #[error("fuel regime {regime} (observation {date}) is not supported")]
    UnsupportedFuelRegime { regime: String, date: NaiveDate },

    /// Raised when a route constants entry violates a table invariant.
    #[error("invalid route constants for {code}: {message}")]
    RouteDataValidation { code: String, message: String },

    /// Raised when two table entries normalize to the same route code.
    #[error("duplicate route code encountered: {code}")]
    DuplicateRoute { code: String },

    /// Raised when an observation CSV row cannot be parsed.
    #[error("failed to parse observation row {row}: {message}")]
    ObservationParse { row: u64, message: String },

    /// Wrapper for JSON (de)serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_route_lists_single_suggestion() {
        let err = Error::UnknownRoute {
            code: "TC22".to_string(),
            suggestions: vec!["TC2_37".to_string()],
        };
        assert_eq!(err.to_string(), "unknown route code: TC22. Did you mean 'TC2_37'?");
    }

    #[test]
    fn invalid_field_names_field_and_value() {
        let err = Error::InvalidField {
            timestamp: NaiveDate::from_ymd_opt(2021, 10, 6).unwrap(),
            field: "VLSFO",
            value: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "observation 2021-10-06 has non-finite VLSFO: inf");
    }

    #[test]
    fn unknown_route_without_suggestions_is_bare() {
        let err = Error::UnknownRoute {
            code: "XX1".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown route code: XX1");
    }
}
