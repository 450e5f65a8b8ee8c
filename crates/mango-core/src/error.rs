use thiserror::Error;

#[derive(Debug, Error)]
pub enum MangoError {
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Degenerate range: every value equals {value}, cannot normalize")]
    DegenerateRange { value: f64 },

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Invalid color scale: {0}")]
    InvalidColorScale(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Display error: {0}")]
    Display(String),
}

pub type Result<T> = std::result::Result<T, MangoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_range_message() {
        let err = MangoError::DegenerateRange { value: -1.2 };
        assert_eq!(
            err.to_string(),
            "Degenerate range: every value equals -1.2, cannot normalize"
        );
    }

    #[test]
    fn test_io_error_converts() {
        fn open_missing() -> Result<std::fs::File> {
            Ok(std::fs::File::open("/definitely/not/here.html")?)
        }
        assert!(matches!(open_missing(), Err(MangoError::Io(_))));
    }
}
