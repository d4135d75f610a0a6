#[derive(Debug, thiserror::Error)]
pub enum ConfabError {
    #[error("Unsupported model: {0}")]
    UnsupportedModel(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ConfabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfabError::UnsupportedModel("GPT-9000".to_string());
        assert_eq!(err.to_string(), "Unsupported model: GPT-9000");

        let err = ConfabError::Model("connection reset".to_string());
        assert_eq!(err.to_string(), "Model error: connection reset");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ConfabError = io_err.into();
        assert!(matches!(err, ConfabError::Io(_)));
    }

    #[test]
    fn test_error_from_toml() {
        let parse_err = toml::from_str::<toml::Value>("not [ valid").unwrap_err();
        let err: ConfabError = parse_err.into();
        assert!(matches!(err, ConfabError::Parse(_)));
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert_eq!(ok_result.unwrap(), 42);

        let err_result: Result<i32> = Err(ConfabError::Config("empty catalog".to_string()));
        assert!(err_result.is_err());
    }
}
