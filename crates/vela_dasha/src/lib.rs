//! Hierarchical dasha period subdivision.
//!
//! The surrounding service delegates chart computation to an upstream
//! provider that returns only the first level or two of a dasha period
//! tree. This crate resolves selection paths against whatever partial
//! tree was supplied and computes the deeper levels locally, with exact
//! fixed-point arithmetic and contiguous, drift-free boundaries.
//!
//! Everything here is a pure function over immutable values: no shared
//! state, safe to call from any number of threads.
//!
//! Modules:
//! - [`body`] / [`cycles`]: the period-ruling bodies and the per-system
//!   cycle definitions (total years, body order, proportional shares)
//! - [`rotation`]: cyclic body order starting at a parent's own body
//! - [`subdivide`]: proportional subdivision of one period by one level
//! - [`traverse`]: hybrid external-then-computed path resolution
//! - [`validate`]: fail-fast path and depth checks
//! - [`jd`]: the year-length convention and calendar helpers

pub mod body;
pub mod cycles;
pub mod error;
pub mod jd;
pub mod rotation;
pub mod subdivide;
pub mod traverse;
pub mod types;
pub mod validate;

pub use body::{ALL_BODIES, Body};
pub use cycles::{ALL_SYSTEMS, CycleDefinition, PeriodSystem, definition};
pub use error::DashaError;
pub use rotation::Rotation;
pub use subdivide::{compute_children, subdivide};
pub use traverse::{
    ResolvedChildren, ResolvedLevel, ResolvedPath, active_chain, expand_to_depth, resolve_path,
    resolve_path_with_children,
};
pub use types::{
    Children, DEFAULT_DEPTH, Level, MAX_DEPTH, MAX_PERIODS_PER_LEVEL, Period, PeriodSource,
};
pub use validate::{validate_depth, validate_path};
