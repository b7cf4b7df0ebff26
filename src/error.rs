use std::num::ParseIntError;

use thiserror::Error;

/// Represents errors that can occur during snowflake operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnowflakeError {
    /// Input is not a valid unsigned 64-bit integer
    #[error("Snowflake {input:?} is not a valid unsigned 64-bit integer")]
    Parse {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn parse_error(input: &str) -> SnowflakeError {
        let source = input.parse::<u64>().unwrap_err();
        SnowflakeError::Parse {
            input: input.to_string(),
            source,
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            parse_error("abc").to_string(),
            "Snowflake \"abc\" is not a valid unsigned 64-bit integer"
        );
    }

    #[test]
    fn test_error_source() {
        let err = parse_error("");
        assert!(err.source().is_some());
        assert!(format!("{:?}", err).contains("Parse"));
    }

    #[test]
    fn test_error_clone() {
        let original = parse_error("12x");
        let cloned = original.clone();
        assert_eq!(original, cloned);
    }
}
