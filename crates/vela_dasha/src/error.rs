//! Error types for dasha computations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;

use crate::body::Body;

/// Errors from dasha subdivision and traversal.
///
/// Every error is local to one computation call: the engine is pure, so
/// retrying reproduces the same error. Nothing here is recoverable
/// internally; the caller decides what to surface.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DashaError {
    /// System identifier not present in the registry.
    UnknownSystem(String),
    /// Body not part of the active cycle definition.
    UnknownBody(Body),
    /// A period with non-positive duration cannot be subdivided.
    DegeneratePeriod(Decimal),
    /// Requested nesting depth outside the supported range.
    InvalidDepth { requested: usize, max: usize },
    /// The selection chain does not exist in the available data.
    /// `level` is 1-based.
    PathNotFound { level: usize, body: Body },
    /// Expansion would materialize more periods than the per-level cap.
    CapacityExceeded(&'static str),
}

impl Display for DashaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSystem(name) => write!(f, "unknown period system: {name}"),
            Self::UnknownBody(body) => {
                write!(f, "body {} not in cycle order", body.name())
            }
            Self::DegeneratePeriod(years) => {
                write!(f, "cannot subdivide period with duration {years} years")
            }
            Self::InvalidDepth { requested, max } => {
                write!(f, "invalid nesting depth {requested} (supported: 1..={max})")
            }
            Self::PathNotFound { level, body } => {
                write!(f, "no period for {} at level {level}", body.name())
            }
            Self::CapacityExceeded(msg) => write!(f, "capacity exceeded: {msg}"),
        }
    }
}

impl Error for DashaError {}
