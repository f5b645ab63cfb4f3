use log::warn;
use std::fmt;

use crate::{MAX_GRID_SIZE, MIN_GRID_SIZE};

/// Custom error types for sketch operations
#[derive(Debug)]
pub enum SketchError {
    /// Grid side length outside the accepted range
    InvalidGridSize { size: i64, min: usize, max: usize },
    /// Resize input that does not start with a number
    NotANumber(String),
    /// Cell coordinates outside the current grid
    InvalidCoordinates { row: usize, col: usize, side: usize },
    /// Configuration errors
    ConfigError(String),
    /// Terminal setup, drawing or input errors
    TerminalError(String),
}

impl fmt::Display for SketchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SketchError::InvalidGridSize { size, min, max } => write!(
                f,
                "Invalid grid size {} - must be between {} and {}",
                size, min, max
            ),
            SketchError::NotANumber(input) => write!(f, "Not a number: {:?}", input),
            SketchError::InvalidCoordinates { row, col, side } => write!(
                f,
                "Invalid cell coordinates ({}, {}) - grid size is {}x{}",
                row, col, side, side
            ),
            SketchError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            SketchError::TerminalError(msg) => write!(f, "Terminal error: {}", msg),
        }
    }
}

impl std::error::Error for SketchError {}

impl From<std::io::Error> for SketchError {
    fn from(err: std::io::Error) -> Self {
        SketchError::TerminalError(err.to_string())
    }
}

impl From<serde_json::Error> for SketchError {
    fn from(err: serde_json::Error) -> Self {
        SketchError::ConfigError(err.to_string())
    }
}

/// Result type alias for sketch operations
pub type SketchResult<T> = Result<T, SketchError>;

impl SketchError {
    /// True for errors caused by what the user typed into the resize prompt
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            SketchError::InvalidGridSize { .. } | SketchError::NotANumber(_)
        )
    }
}

/// Validate a grid side length
pub fn validate_grid_size(size: usize) -> SketchResult<usize> {
    if (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(SketchError::InvalidGridSize {
            size: size as i64,
            min: MIN_GRID_SIZE,
            max: MAX_GRID_SIZE,
        })
    }
}

/// Parse user input for a new grid size.
///
/// Leading whitespace and an optional sign are accepted, then as many digits
/// as follow; anything after the digits is ignored (`"12px"` is 12,
/// `"3.7"` is 3). A `0x`/`0X` prefix switches to hexadecimal digits
/// (`"0x10"` is 16). Input without leading digits is not a number.
pub fn parse_grid_size(input: &str) -> SketchResult<usize> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits: &str = &rest[..rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len())];
    if digits.is_empty() {
        warn!("⚠️ Rejected grid size input {:?}: not a number", input);
        return Err(SketchError::NotANumber(input.to_string()));
    }

    // Anything longer than this is out of range anyway
    let value = i64::from_str_radix(digits, radix).unwrap_or(i64::MAX);
    let value = if negative { -value } else { value };

    if value < MIN_GRID_SIZE as i64 || value > MAX_GRID_SIZE as i64 {
        warn!("⚠️ Rejected grid size input {:?}: out of range", input);
        return Err(SketchError::InvalidGridSize {
            size: value,
            min: MIN_GRID_SIZE,
            max: MAX_GRID_SIZE,
        });
    }

    Ok(value as usize)
}

/// Validate cell coordinates against a grid side length
pub fn validate_cell_coordinates(row: usize, col: usize, side: usize) -> SketchResult<()> {
    if row >= side || col >= side {
        Err(SketchError::InvalidCoordinates { row, col, side })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_grid_size("1").unwrap(), 1);
        assert_eq!(parse_grid_size("50").unwrap(), 50);
        assert_eq!(parse_grid_size("100").unwrap(), 100);
        assert_eq!(parse_grid_size("  16").unwrap(), 16);
        assert_eq!(parse_grid_size("+8").unwrap(), 8);
    }

    #[test]
    fn test_parse_ignores_trailing_text() {
        assert_eq!(parse_grid_size("12px").unwrap(), 12);
        assert_eq!(parse_grid_size("3.7").unwrap(), 3);
        assert_eq!(parse_grid_size("20 ").unwrap(), 20);
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        for input in ["abc", "", "   ", "-", "x12", ".5"] {
            let err = parse_grid_size(input).unwrap_err();
            assert!(matches!(err, SketchError::NotANumber(_)), "{:?}", input);
            assert!(err.is_user_input());
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        for input in ["0", "101", "-5", "99999999999999999999999"] {
            let err = parse_grid_size(input).unwrap_err();
            assert!(
                matches!(err, SketchError::InvalidGridSize { .. }),
                "{:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_hex_prefix() {
        assert_eq!(parse_grid_size("0x10").unwrap(), 16);
        assert_eq!(parse_grid_size(" 0X1f ").unwrap(), 31);
        assert_eq!(parse_grid_size("0x64").unwrap(), 100);
        assert_eq!(parse_grid_size("0xAzz").unwrap(), 10);
        assert!(matches!(
            parse_grid_size("0x65"),
            Err(SketchError::InvalidGridSize { size: 101, .. })
        ));
        assert!(matches!(parse_grid_size("0x"), Err(SketchError::NotANumber(_))));
        assert!(matches!(parse_grid_size("0xg"), Err(SketchError::NotANumber(_))));
        assert!(parse_grid_size("-0x10").is_err());
    }

    #[test]
    fn test_validate_cell_coordinates() {
        assert!(validate_cell_coordinates(0, 0, 1).is_ok());
        assert!(validate_cell_coordinates(3, 4, 5).is_ok());
        assert!(validate_cell_coordinates(5, 0, 5).is_err());
        assert!(validate_cell_coordinates(0, 5, 5).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = SketchError::InvalidGridSize {
            size: 101,
            min: 1,
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "Invalid grid size 101 - must be between 1 and 100"
        );
    }
}
