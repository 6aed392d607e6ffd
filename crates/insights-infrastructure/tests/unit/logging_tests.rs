//! Tests for logging configuration helpers

#[cfg(test)]
mod tests {
    use insights_infrastructure::logging::parse_log_level;
    use tracing::Level;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
        assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
        assert!(parse_log_level("verbose").is_err());
    }
}
