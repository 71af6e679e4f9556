//! Core period types shared across the engine.
//!
//! A [`Period`] is one node of a period tree. Trees arrive from the
//! upstream calculation service with unpredictable depth; nodes carry
//! their children in a single tagged [`Children`] variant so the
//! external/computed distinction is explicit and type-checked.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::jd;

/// Maximum nesting depth (5 levels, Mahadasha through Pranadasha).
pub const MAX_DEPTH: usize = 5;

/// Default depth for queries (keeps output manageable).
pub const DEFAULT_DEPTH: usize = 3;

/// Hard cap on periods per level when expanding whole trees.
pub const MAX_PERIODS_PER_LEVEL: usize = 100_000;

/// 5 hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Level {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
    Sookshmadasha = 3,
    Pranadasha = 4,
}

impl Level {
    /// Create from raw u8 value.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Mahadasha),
            1 => Some(Self::Antardasha),
            2 => Some(Self::Pratyantardasha),
            3 => Some(Self::Sookshmadasha),
            4 => Some(Self::Pranadasha),
            _ => None,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
            Self::Sookshmadasha => "Sookshmadasha",
            Self::Pranadasha => "Pranadasha",
        }
    }

    /// 1-based depth of this level.
    pub const fn depth(self) -> usize {
        self as usize + 1
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => Some(Self::Sookshmadasha),
            Self::Sookshmadasha => Some(Self::Pranadasha),
            Self::Pranadasha => None,
        }
    }
}

/// Where a period's boundaries came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodSource {
    /// Supplied by the upstream calculation service.
    External,
    /// Synthesized locally by the subdivision calculator.
    Computed,
}

/// Child periods attached to a period.
///
/// `None` is the serde default, so shallow trees from the upstream
/// service simply omit the field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Children {
    #[default]
    None,
    External(Vec<Period>),
    Computed(Vec<Period>),
}

impl Children {
    /// True if no child list is attached.
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The attached list and its provenance, if non-empty.
    pub fn supplied(&self) -> Option<(&[Period], PeriodSource)> {
        match self {
            Self::None => None,
            Self::External(kids) if !kids.is_empty() => {
                Some((kids.as_slice(), PeriodSource::External))
            }
            Self::Computed(kids) if !kids.is_empty() => {
                Some((kids.as_slice(), PeriodSource::Computed))
            }
            _ => None,
        }
    }
}

/// A single dasha period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    /// The body ruling this period.
    pub body: Body,
    /// JD UTC, inclusive.
    pub start_jd: Decimal,
    /// JD UTC, exclusive.
    pub end_jd: Decimal,
    /// Exact span in dasha years.
    pub duration_years: Decimal,
    /// Hierarchical level.
    pub level: Level,
    /// Child periods, if any.
    #[serde(default, skip_serializing_if = "Children::is_none")]
    pub children: Children,
}

impl Period {
    /// Build a period from its start and duration; the end instant is
    /// derived via the engine-wide year-length convention.
    pub fn new(body: Body, start_jd: Decimal, duration_years: Decimal, level: Level) -> Self {
        Self {
            body,
            start_jd,
            end_jd: start_jd + jd::years_to_days(duration_years),
            duration_years,
            level,
            children: Children::None,
        }
    }

    /// Duration of the period in days.
    pub fn duration_days(&self) -> Decimal {
        self.end_jd - self.start_jd
    }

    /// True if `jd` falls within [start, end).
    pub fn contains(&self, jd: Decimal) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }

    /// Copy of this period without its subtree.
    pub fn without_children(&self) -> Self {
        Self {
            body: self.body,
            start_jd: self.start_jd,
            end_jd: self.end_jd,
            duration_years: self.duration_years,
            level: self.level,
            children: Children::None,
        }
    }
}
