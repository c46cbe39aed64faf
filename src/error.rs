use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::sequence::NodeId;

/// Failures of the sequence mutator
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Cannot append to an empty sequence")]
    #[diagnostic(
        code(teleporting_turtle::empty_target),
        help("The target needs at least one node whose successor can be rewritten")
    )]
    EmptyTarget,

    #[error("Sequence starting at {head} has no tail node")]
    #[diagnostic(
        code(teleporting_turtle::no_tail_found),
        help("The sequence is already cyclic, so no node ends at the terminator")
    )]
    NoTailFound { head: NodeId },

    #[error("Node {node} does not belong to this arena ({len} nodes allocated)")]
    #[diagnostic(
        code(teleporting_turtle::unknown_node),
        help("Handles are only valid in the arena that allocated them")
    )]
    UnknownNode { node: NodeId, len: usize },
}

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(teleporting_turtle::toml_parse_error),
    help("Check the fixture syntax near the highlighted position")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum TurtleError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Sequence(#[from] SequenceError),

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(teleporting_turtle::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(teleporting_turtle::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(teleporting_turtle::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(teleporting_turtle::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(teleporting_turtle::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Graph error: {message}")]
    #[diagnostic(
        code(teleporting_turtle::graph_error),
        help("This may be an internal error with graph processing")
    )]
    GraphError { message: String },

    #[error("Loop position {position} is out of range for a sequence of {len} values")]
    #[diagnostic(
        code(teleporting_turtle::position_out_of_range),
        help("Positions are zero-based and must point at an existing node")
    )]
    PositionOutOfRange { position: usize, len: usize },

    #[error("Floyd reported {floyd} but Brent reported {brent} for the same sequence")]
    #[diagnostic(
        code(teleporting_turtle::detector_disagreement),
        help("This is an internal error in one of the detectors - please report it")
    )]
    DetectorDisagreement { floyd: bool, brent: bool },
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::{Diagnostic, NamedSource};

    use super::*;

    #[test]
    fn test_toml_parse_error_display() {
        let source_code = "values = [1, 2";
        let toml_err = toml::from_str::<toml::Value>(source_code).unwrap_err();

        let error = TomlParseError {
            file: "fixture.toml".to_string(),
            source_code: NamedSource::new("fixture.toml", source_code.to_string()),
            span: Some((9, 5).into()),
            source: toml_err,
        };

        assert_eq!(error.to_string(), "Invalid TOML syntax in 'fixture.toml'");
    }

    #[test]
    fn test_sequence_error_display() {
        assert_eq!(
            SequenceError::EmptyTarget.to_string(),
            "Cannot append to an empty sequence"
        );
        assert_eq!(
            SequenceError::NoTailFound {
                head: NodeId::new(0)
            }
            .to_string(),
            "Sequence starting at #0 has no tail node"
        );
    }

    #[test]
    fn test_sequence_error_is_transparent() {
        let error: TurtleError = SequenceError::EmptyTarget.into();

        assert_eq!(error.to_string(), "Cannot append to an empty sequence");
        assert_eq!(
            error.code().map(|c| c.to_string()).as_deref(),
            Some("teleporting_turtle::empty_target")
        );
    }

    #[test]
    fn test_position_out_of_range() {
        let error = TurtleError::PositionOutOfRange {
            position: 7,
            len: 3,
        };

        assert_eq!(
            error.to_string(),
            "Loop position 7 is out of range for a sequence of 3 values"
        );
        assert!(error.help().is_some());
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = TurtleError::FileReadError {
            path: PathBuf::from("/tmp/missing.toml"),
            source: io_err,
        };

        assert_eq!(error.to_string(), "Failed to read file '/tmp/missing.toml'");
        assert!(error.code().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let turtle_err: TurtleError = io::Error::other("some io error").into();

        match turtle_err {
            TurtleError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let turtle_err: TurtleError = json_err.into();

        match turtle_err {
            TurtleError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
