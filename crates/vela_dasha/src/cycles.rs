//! Cycle definitions for the supported period systems.
//!
//! Each system fixes a total cycle length, an ordered body sequence, and
//! each body's share of the cycle in whole years. Shares are carried as
//! exact decimals; `sum(years) == total_years` holds by construction.
//!
//! Data: BPHS dasha chapters.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::error::DashaError;

/// The 10 supported fixed-length period systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PeriodSystem {
    Vimshottari = 0,
    Ashtottari = 1,
    Shodsottari = 2,
    Dwadashottari = 3,
    Panchottari = 4,
    Shatabdika = 5,
    Chaturashiti = 6,
    DwisaptatiSama = 7,
    Shashtihayani = 8,
    ShatTrimshaSama = 9,
}

/// All supported systems in order.
pub const ALL_SYSTEMS: [PeriodSystem; 10] = [
    PeriodSystem::Vimshottari,
    PeriodSystem::Ashtottari,
    PeriodSystem::Shodsottari,
    PeriodSystem::Dwadashottari,
    PeriodSystem::Panchottari,
    PeriodSystem::Shatabdika,
    PeriodSystem::Chaturashiti,
    PeriodSystem::DwisaptatiSama,
    PeriodSystem::Shashtihayani,
    PeriodSystem::ShatTrimshaSama,
];

impl PeriodSystem {
    /// Create from repr(u8) value.
    pub fn from_u8(v: u8) -> Option<Self> {
        if (v as usize) < ALL_SYSTEMS.len() {
            Some(ALL_SYSTEMS[v as usize])
        } else {
            None
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vimshottari => "Vimshottari",
            Self::Ashtottari => "Ashtottari",
            Self::Shodsottari => "Shodsottari",
            Self::Dwadashottari => "Dwadashottari",
            Self::Panchottari => "Panchottari",
            Self::Shatabdika => "Shatabdika",
            Self::Chaturashiti => "Chaturashiti",
            Self::DwisaptatiSama => "Dwisaptati Sama",
            Self::Shashtihayani => "Shashtihayani",
            Self::ShatTrimshaSama => "Shat-Trimsha Sama",
        }
    }

    /// Parse a system name, case-insensitive, ignoring spaces and hyphens.
    ///
    /// This is the boundary where an unrecognized identifier from config
    /// or a request can occur.
    pub fn parse(s: &str) -> Result<Self, DashaError> {
        let wanted: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        ALL_SYSTEMS
            .into_iter()
            .find(|sys| {
                let canon: String = sys
                    .name()
                    .chars()
                    .filter(|c| !c.is_whitespace() && *c != '-')
                    .collect::<String>()
                    .to_ascii_lowercase();
                canon == wanted
            })
            .ok_or_else(|| DashaError::UnknownSystem(s.to_string()))
    }
}

/// A system's canonical body order and proportional year shares.
#[derive(Debug, Clone)]
pub struct CycleDefinition {
    /// Which system this definition is for.
    pub system: PeriodSystem,
    /// Bodies in canonical dasha order.
    pub order: Vec<Body>,
    /// Full-cycle share in years for each body in `order`.
    pub years: Vec<Decimal>,
    /// Total cycle length in years (sum of `years`).
    pub total_years: Decimal,
}

impl CycleDefinition {
    fn from_table(system: PeriodSystem, bodies: &[Body], years: &[u32]) -> Self {
        let years: Vec<Decimal> = years.iter().map(|&y| Decimal::from(y)).collect();
        let total_years = years.iter().copied().sum();
        Self {
            system,
            order: bodies.to_vec(),
            years,
            total_years,
        }
    }

    /// Number of bodies in the cycle.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if the definition has no bodies (never the case for registry
    /// definitions).
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Position of a body in the canonical order.
    pub fn position(&self, body: Body) -> Option<usize> {
        self.order.iter().position(|&b| b == body)
    }

    /// True if the body participates in this cycle.
    pub fn contains(&self, body: Body) -> bool {
        self.position(body).is_some()
    }

    /// A body's full-cycle share in years.
    pub fn share_years(&self, body: Body) -> Option<Decimal> {
        self.position(body).map(|i| self.years[i])
    }
}

// ---------------------------------------------------------------------------
// Vimshottari (120 years, 9 bodies)
// ---------------------------------------------------------------------------

const VIMSHOTTARI_BODIES: [Body; 9] = [
    Body::Ketu,
    Body::Shukra,
    Body::Surya,
    Body::Chandra,
    Body::Mangal,
    Body::Rahu,
    Body::Guru,
    Body::Shani,
    Body::Buddh,
];

const VIMSHOTTARI_YEARS: [u32; 9] = [7, 20, 6, 10, 7, 18, 16, 19, 17];

// ---------------------------------------------------------------------------
// Ashtottari (108 years, 8 bodies — no Ketu)
// ---------------------------------------------------------------------------

const ASHTOTTARI_BODIES: [Body; 8] = [
    Body::Surya,
    Body::Chandra,
    Body::Mangal,
    Body::Buddh,
    Body::Shani,
    Body::Guru,
    Body::Rahu,
    Body::Shukra,
];

const ASHTOTTARI_YEARS: [u32; 8] = [6, 15, 8, 17, 10, 19, 12, 21];

// ---------------------------------------------------------------------------
// Shodsottari (116 years, 8 bodies)
// ---------------------------------------------------------------------------

const SHODSOTTARI_BODIES: [Body; 8] = [
    Body::Surya,
    Body::Mangal,
    Body::Guru,
    Body::Shani,
    Body::Ketu,
    Body::Chandra,
    Body::Buddh,
    Body::Shukra,
];

const SHODSOTTARI_YEARS: [u32; 8] = [11, 12, 13, 14, 15, 16, 17, 18];

// ---------------------------------------------------------------------------
// Dwadashottari (112 years, 8 bodies)
// ---------------------------------------------------------------------------

const DWADASHOTTARI_BODIES: [Body; 8] = [
    Body::Surya,
    Body::Guru,
    Body::Ketu,
    Body::Buddh,
    Body::Rahu,
    Body::Mangal,
    Body::Shani,
    Body::Chandra,
];

const DWADASHOTTARI_YEARS: [u32; 8] = [7, 9, 11, 13, 15, 17, 19, 21];

// ---------------------------------------------------------------------------
// Panchottari (105 years, 7 bodies)
// ---------------------------------------------------------------------------

const PANCHOTTARI_BODIES: [Body; 7] = [
    Body::Surya,
    Body::Buddh,
    Body::Shani,
    Body::Mangal,
    Body::Shukra,
    Body::Chandra,
    Body::Guru,
];

const PANCHOTTARI_YEARS: [u32; 7] = [12, 13, 14, 15, 16, 17, 18];

// ---------------------------------------------------------------------------
// Shatabdika (100 years, 7 bodies)
// ---------------------------------------------------------------------------

const SHATABDIKA_BODIES: [Body; 7] = [
    Body::Surya,
    Body::Chandra,
    Body::Shukra,
    Body::Buddh,
    Body::Guru,
    Body::Mangal,
    Body::Shani,
];

const SHATABDIKA_YEARS: [u32; 7] = [5, 5, 10, 10, 20, 20, 30];

// ---------------------------------------------------------------------------
// Chaturashiti Sama (84 years, 7 bodies, equal 12y shares)
// ---------------------------------------------------------------------------

const CHATURASHITI_BODIES: [Body; 7] = [
    Body::Surya,
    Body::Chandra,
    Body::Mangal,
    Body::Buddh,
    Body::Guru,
    Body::Shukra,
    Body::Shani,
];

const CHATURASHITI_YEARS: [u32; 7] = [12, 12, 12, 12, 12, 12, 12];

// ---------------------------------------------------------------------------
// Dwisaptati Sama (72 years, 8 bodies, equal 9y shares)
// ---------------------------------------------------------------------------

const DWISAPTATI_BODIES: [Body; 8] = [
    Body::Surya,
    Body::Chandra,
    Body::Mangal,
    Body::Buddh,
    Body::Guru,
    Body::Shukra,
    Body::Shani,
    Body::Rahu,
];

const DWISAPTATI_YEARS: [u32; 8] = [9, 9, 9, 9, 9, 9, 9, 9];

// ---------------------------------------------------------------------------
// Shashtihayani (60 years, 8 bodies)
// ---------------------------------------------------------------------------

const SHASHTIHAYANI_BODIES: [Body; 8] = [
    Body::Guru,
    Body::Surya,
    Body::Mangal,
    Body::Chandra,
    Body::Buddh,
    Body::Shukra,
    Body::Shani,
    Body::Rahu,
];

const SHASHTIHAYANI_YEARS: [u32; 8] = [10, 10, 10, 6, 6, 6, 6, 6];

// ---------------------------------------------------------------------------
// Shat-Trimsha Sama (36 years, 8 bodies, arithmetic 1-8y shares)
// ---------------------------------------------------------------------------

const SHAT_TRIMSHA_BODIES: [Body; 8] = [
    Body::Chandra,
    Body::Surya,
    Body::Guru,
    Body::Mangal,
    Body::Buddh,
    Body::Shani,
    Body::Shukra,
    Body::Rahu,
];

const SHAT_TRIMSHA_YEARS: [u32; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

// ---------------------------------------------------------------------------
// Registry lookup
// ---------------------------------------------------------------------------

/// Get the cycle definition for a system.
pub fn definition(system: PeriodSystem) -> CycleDefinition {
    match system {
        PeriodSystem::Vimshottari => {
            CycleDefinition::from_table(system, &VIMSHOTTARI_BODIES, &VIMSHOTTARI_YEARS)
        }
        PeriodSystem::Ashtottari => {
            CycleDefinition::from_table(system, &ASHTOTTARI_BODIES, &ASHTOTTARI_YEARS)
        }
        PeriodSystem::Shodsottari => {
            CycleDefinition::from_table(system, &SHODSOTTARI_BODIES, &SHODSOTTARI_YEARS)
        }
        PeriodSystem::Dwadashottari => {
            CycleDefinition::from_table(system, &DWADASHOTTARI_BODIES, &DWADASHOTTARI_YEARS)
        }
        PeriodSystem::Panchottari => {
            CycleDefinition::from_table(system, &PANCHOTTARI_BODIES, &PANCHOTTARI_YEARS)
        }
        PeriodSystem::Shatabdika => {
            CycleDefinition::from_table(system, &SHATABDIKA_BODIES, &SHATABDIKA_YEARS)
        }
        PeriodSystem::Chaturashiti => {
            CycleDefinition::from_table(system, &CHATURASHITI_BODIES, &CHATURASHITI_YEARS)
        }
        PeriodSystem::DwisaptatiSama => {
            CycleDefinition::from_table(system, &DWISAPTATI_BODIES, &DWISAPTATI_YEARS)
        }
        PeriodSystem::Shashtihayani => {
            CycleDefinition::from_table(system, &SHASHTIHAYANI_BODIES, &SHASHTIHAYANI_YEARS)
        }
        PeriodSystem::ShatTrimshaSama => {
            CycleDefinition::from_table(system, &SHAT_TRIMSHA_BODIES, &SHAT_TRIMSHA_YEARS)
        }
    }
}
