//! Pre-traversal validation of selection paths and depths.
//!
//! Traversal failures deep in recursion are harder to attribute, so
//! bounds and membership are checked up front.

use crate::body::Body;
use crate::cycles::CycleDefinition;
use crate::error::DashaError;
use crate::types::MAX_DEPTH;

/// Check a selection path against a cycle definition.
///
/// The path must name between 1 and [`MAX_DEPTH`] bodies, and every body
/// must participate in the cycle.
pub fn validate_path(path: &[Body], def: &CycleDefinition) -> Result<(), DashaError> {
    if path.is_empty() || path.len() > MAX_DEPTH {
        return Err(DashaError::InvalidDepth {
            requested: path.len(),
            max: MAX_DEPTH,
        });
    }
    for &body in path {
        if !def.contains(body) {
            return Err(DashaError::UnknownBody(body));
        }
    }
    Ok(())
}

/// Check a requested nesting depth.
pub fn validate_depth(depth: usize) -> Result<(), DashaError> {
    if depth == 0 || depth > MAX_DEPTH {
        return Err(DashaError::InvalidDepth {
            requested: depth,
            max: MAX_DEPTH,
        });
    }
    Ok(())
}
