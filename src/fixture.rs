//! Sequence fixtures
//!
//! A fixture describes a sequence to build and, optionally, the position its
//! tail should be linked back to. Fixtures come from the command line or from
//! a TOML file:
//!
//! ```toml
//! values = ["a", "b", "c", "d"]
//! loop_to = 1
//! ```

use std::path::{Path, PathBuf};

use miette::{NamedSource, Result, SourceSpan};
use serde::Deserialize;

use crate::error::TurtleError;
use crate::sequence::{Sequence, SequenceArena};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fixture {
    pub values: Vec<String>,
    /// Zero-based position the tail is linked back to
    pub loop_to: Option<usize>,
}

impl Fixture {
    pub fn new(values: Vec<String>, loop_to: Option<usize>) -> Self {
        Self { values, loop_to }
    }

    pub fn parse_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| TurtleError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(Self::parse_str(&path.display().to_string(), &content)?)
    }

    pub fn parse_str(name: &str, content: &str) -> Result<Self, TurtleError> {
        toml::from_str(content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            TurtleError::TomlParseError(Box::new(crate::error::TomlParseError {
                file: name.to_string(),
                source_code: NamedSource::new(name, content.to_string()),
                span,
                source: e,
            }))
        })
    }

    /// Build the described sequence in a fresh arena
    ///
    /// # Errors
    ///
    /// [`TurtleError::PositionOutOfRange`] when `loop_to` does not name an
    /// existing node.
    pub fn materialize(&self) -> Result<(SequenceArena<String>, Sequence), TurtleError> {
        let mut arena = SequenceArena::with_capacity(self.values.len());
        let seq = arena.make_sequence(self.values.iter().cloned());

        if let Some(position) = self.loop_to {
            let target = arena
                .node_at(seq, position)
                .ok_or(TurtleError::PositionOutOfRange {
                    position,
                    len: self.values.len(),
                })?;
            arena.force_append(seq, target)?;
        }

        Ok((arena, seq))
    }
}

/// Where a command gets its sequence from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceSource {
    Inline(Fixture),
    File(PathBuf),
}

impl SequenceSource {
    pub fn load(&self) -> Result<Fixture> {
        match self {
            SequenceSource::Inline(fixture) => Ok(fixture.clone()),
            SequenceSource::File(path) => Fixture::parse_file(path),
        }
    }
}
