//! Cyclic body-order rotation.
//!
//! Every subdivision starts from the parent's own body, not the cycle's
//! canonical first body. A [`Rotation`] is an index into the definition's
//! arrays plus modulo arithmetic; no per-rotation allocation.

use rust_decimal::Decimal;

use crate::body::Body;
use crate::cycles::CycleDefinition;
use crate::error::DashaError;

/// View of a cycle's body order rotated to begin at a given body.
#[derive(Debug, Clone, Copy)]
pub struct Rotation<'a> {
    def: &'a CycleDefinition,
    start: usize,
}

impl<'a> Rotation<'a> {
    /// Rotate `def`'s order to begin at `body`.
    pub fn starting_at(def: &'a CycleDefinition, body: Body) -> Result<Self, DashaError> {
        let start = def.position(body).ok_or(DashaError::UnknownBody(body))?;
        Ok(Self { def, start })
    }

    /// Number of bodies in the rotation.
    pub fn len(&self) -> usize {
        self.def.len()
    }

    /// True if the underlying definition is empty.
    pub fn is_empty(&self) -> bool {
        self.def.is_empty()
    }

    /// Body and full-cycle share at rotated position `i`.
    pub fn get(&self, i: usize) -> (Body, Decimal) {
        let idx = (self.start + i) % self.def.len();
        (self.def.order[idx], self.def.years[idx])
    }

    /// Iterate the rotated order, wrapping back to the body preceding the
    /// starting one.
    pub fn iter(&self) -> impl Iterator<Item = (Body, Decimal)> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }
}
