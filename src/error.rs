use std::path::PathBuf;

/// Reasons a placement is rejected. Both are recoverable: the board is left
/// untouched and the same player may try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("position is outside the board")]
    OutOfBoardBounds,
}

/// Errors from parsing a board written as rows of `.`, `B` and `R`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell symbol {0:?}")]
    Symbol(char),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::ColumnFull { column: 3 }.to_string(),
            "column 3 is full"
        );
        assert_eq!(
            MoveError::OutOfBoardBounds.to_string(),
            "position is outside the board"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.drop_speed_ms must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.drop_speed_ms must be > 0"
        );
    }

    #[test]
    fn test_file_read_error_names_path() {
        let err = ConfigError::FileRead {
            path: PathBuf::from("connect_four.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("failed to read config file connect_four.toml"));
    }
}
