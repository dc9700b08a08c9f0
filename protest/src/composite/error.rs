//! Error taxonomy for the composite strategy algebra (spec.md §7).

use std::fmt;

use super::descriptor::Descriptor;

/// Errors raised by the composite `Strategy` contract.
#[derive(Debug, Clone)]
pub enum StrategyError {
    /// `from_basic` saw a basic tree whose shape doesn't match what this
    /// strategy expects. Recoverable: the caller may discard the candidate.
    InvalidData { expected: String, found: String },

    /// `simplify`, `reify`, or `to_basic` was called on a template that
    /// violates this strategy's invariants. A programmer error; the test
    /// run should abort with a diagnostic rather than silently recover.
    InvalidTemplate { reason: String },

    /// A child strategy raised one of the above during a compositional
    /// operation. Propagated unchanged, annotated with the child's
    /// descriptor to aid diagnosis.
    ChildFailure {
        child: Descriptor,
        source: Box<StrategyError>,
    },
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyError::InvalidData { expected, found } => {
                write!(f, "invalid basic data: expected {expected}, found {found}")
            }
            StrategyError::InvalidTemplate { reason } => {
                write!(f, "invalid template: {reason}")
            }
            StrategyError::ChildFailure { child, source } => {
                write!(
                    f,
                    "child strategy for {} failed: {}",
                    child.canonical_key(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for StrategyError {}

impl StrategyError {
    pub fn invalid_data(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::InvalidData {
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn invalid_template(reason: impl Into<String>) -> Self {
        Self::InvalidTemplate {
            reason: reason.into(),
        }
    }

    /// Annotate a child's error with the child's descriptor and re-raise.
    pub fn from_child(child: Descriptor, source: StrategyError) -> Self {
        Self::ChildFailure {
            child,
            source: Box::new(source),
        }
    }
}
