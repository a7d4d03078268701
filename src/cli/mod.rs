//! CLI argument parsing and validation.

mod args;

pub use args::{Args, DEFAULT_OUTPUT_FILE, TextError, parse_text};

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use clap::error::ErrorKind;
    use std::path::PathBuf;

    // ===========================================
    // parse_text tests
    // ===========================================

    #[test]
    fn test_parse_text_valid() {
        let result = parse_text("Hello, World!");
        assert_eq!(result.unwrap(), "Hello, World!");
    }

    #[test]
    fn test_parse_text_empty() {
        assert_eq!(parse_text(""), Err(TextError::Empty));
    }

    #[test]
    fn test_parse_text_whitespace_only_is_accepted() {
        assert_eq!(parse_text(" ").unwrap(), " ");
    }

    #[test]
    fn test_parse_text_keeps_surrounding_whitespace() {
        let result = parse_text("  Hello  ");
        assert_eq!(result.unwrap(), "  Hello  ");
    }

    // ===========================================
    // Args tests
    // ===========================================

    #[test]
    fn test_args_output_file_default() {
        let args = Args::try_parse_from(["cloud-tts-rs", "--text", "Hello"]).unwrap();

        assert_eq!(args.text, "Hello");
        assert_eq!(args.output_file, PathBuf::from("output.raw"));
        assert_eq!(args.output_file, PathBuf::from(DEFAULT_OUTPUT_FILE));
    }

    #[test]
    fn test_args_output_file_override() {
        let args = Args::try_parse_from([
            "cloud-tts-rs",
            "--text",
            "Hello",
            "--output-file",
            "/tmp/greeting.raw",
        ])
        .unwrap();

        assert_eq!(args.output_file, PathBuf::from("/tmp/greeting.raw"));
    }

    #[test]
    fn test_args_missing_text_is_usage_error() {
        let result = Args::try_parse_from(["cloud-tts-rs"]);

        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_args_empty_text_is_usage_error() {
        let result = Args::try_parse_from(["cloud-tts-rs", "--text", ""]);

        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_args_rejects_unknown_flag() {
        let result = Args::try_parse_from(["cloud-tts-rs", "--text", "Hi", "--voice", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
