use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Location of a DSL call in the design source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl Location {
    /// Location of the caller. Functions that want to report their own
    /// call site must be `#[track_caller]` all the way up.
    #[track_caller]
    pub fn caller() -> Self {
        let caller = std::panic::Location::caller();
        Self {
            file: caller.file().to_string(),
            line: caller.line(),
            column: caller.column(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Error reported while evaluating a design.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("{location}: invalid use of {dsl} in {scope}")]
    IncompatibleContext {
        dsl: String,
        scope: String,
        location: Location,
    },

    #[error("{location}: {kind} {name:?} is already defined")]
    AlreadyDefined {
        kind: String,
        name: String,
        location: Location,
    },

    #[error("{location}: {dsl} exceeds the maximum nesting depth of {limit}")]
    NestingTooDeep {
        dsl: String,
        limit: usize,
        location: Location,
    },
}

impl EvalError {
    pub fn incompatible_context(
        dsl: impl Into<String>,
        scope: impl Into<String>,
        location: Location,
    ) -> Self {
        Self::IncompatibleContext {
            dsl: dsl.into(),
            scope: scope.into(),
            location,
        }
    }

    pub fn already_defined(
        kind: impl Into<String>,
        name: impl Into<String>,
        location: Location,
    ) -> Self {
        Self::AlreadyDefined {
            kind: kind.into(),
            name: name.into(),
            location,
        }
    }

    pub fn nesting_too_deep(dsl: impl Into<String>, limit: usize, location: Location) -> Self {
        Self::NestingTooDeep {
            dsl: dsl.into(),
            limit,
            location,
        }
    }

    pub fn location(&self) -> &Location {
        match self {
            Self::IncompatibleContext { location, .. }
            | Self::AlreadyDefined { location, .. }
            | Self::NestingTooDeep { location, .. } => location,
        }
    }
}

/// Collects errors reported during evaluation.
///
/// DSL functions never abort the evaluation: they report into the collector
/// and return, so every mistake in a design surfaces in one batch.
#[derive(Debug, Clone, Default)]
pub struct ErrorCollector {
    errors: Vec<EvalError>,
    suppressed: usize,
    limit: Option<usize>,
}

impl ErrorCollector {
    /// Creates a collector that keeps at most `limit` errors.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Adds an error, or counts it as suppressed once the limit is reached.
    pub fn add_error(&mut self, error: EvalError) {
        match self.limit {
            Some(limit) if self.errors.len() >= limit => self.suppressed += 1,
            _ => self.errors.push(error),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || self.suppressed > 0
    }

    /// Total number of reported errors, suppressed ones included.
    pub fn count(&self) -> usize {
        self.errors.len() + self.suppressed
    }

    pub fn errors(&self) -> &[EvalError] {
        &self.errors
    }

    /// Take all errors, leaving the collector empty.
    pub fn take(&mut self) -> EvalErrors {
        EvalErrors {
            errors: std::mem::take(&mut self.errors),
            suppressed: std::mem::take(&mut self.suppressed),
        }
    }
}

/// Batch of errors returned when a design fails to evaluate.
#[derive(Error, Debug, Clone, Default, PartialEq)]
pub struct EvalErrors {
    pub errors: Vec<EvalError>,
    pub suppressed: usize,
}

impl EvalErrors {
    pub fn len(&self) -> usize {
        self.errors.len() + self.suppressed
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &EvalError> {
        self.errors.iter()
    }
}

impl fmt::Display for EvalErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = self.errors.iter().map(ToString::to_string).collect::<Vec<_>>();
        if self.suppressed > 0 {
            lines.push(format!("... and {} more errors suppressed", self.suppressed));
        }
        write!(f, "{}", lines.join("\n"))
    }
}
