//! Proportional subdivision of one period into the next nesting level.
//!
//! Children are laid out by a running cursor so each start equals the
//! previous end exactly; the residual from the proportional division is
//! absorbed into the final child, whose end is snapped to the parent's.

use rust_decimal::Decimal;

use crate::cycles::{CycleDefinition, PeriodSystem, definition};
use crate::error::DashaError;
use crate::jd;
use crate::rotation::Rotation;
use crate::types::{Children, MAX_DEPTH, Period};

/// Compute the ordered child periods of `parent` for one more level.
///
/// The rotated order begins at the parent's own body. Child duration is
/// `parent.duration_years * share / total_years`; instants derive from
/// durations via the engine-wide year-length convention.
pub fn subdivide(parent: &Period, def: &CycleDefinition) -> Result<Vec<Period>, DashaError> {
    if parent.duration_years <= Decimal::ZERO {
        return Err(DashaError::DegeneratePeriod(parent.duration_years));
    }
    let child_level = parent
        .level
        .child_level()
        .ok_or(DashaError::InvalidDepth {
            requested: parent.level.depth() + 1,
            max: MAX_DEPTH,
        })?;
    let rotation = Rotation::starting_at(def, parent.body)?;

    let mut children = Vec::with_capacity(rotation.len());
    let mut cursor = parent.start_jd;
    for (body, share_years) in rotation.iter() {
        let years = parent.duration_years * share_years / def.total_years;
        let end = cursor + jd::years_to_days(years);
        children.push(Period {
            body,
            start_jd: cursor,
            end_jd: end,
            duration_years: years,
            level: child_level,
            children: Children::None,
        });
        cursor = end;
    }

    snap_last_child(&mut children, parent.end_jd);
    Ok(children)
}

/// Registry lookup plus subdivision, with the parent validated against the
/// system's cycle definition.
pub fn compute_children(parent: &Period, system: PeriodSystem) -> Result<Vec<Period>, DashaError> {
    let def = definition(system);
    subdivide(parent, &def)
}

/// Snap the last child's end to the parent's end, re-deriving its duration
/// from its boundaries so the two stay mutually consistent.
fn snap_last_child(children: &mut [Period], parent_end_jd: Decimal) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
        last.duration_years = jd::days_to_years(parent_end_jd - last.start_jd);
    }
}
