//! Hybrid traversal: walk externally supplied children, then synthesize.
//!
//! The upstream calculation service returns period trees of unpredictable
//! depth, often just one or two levels. Traversal follows the supplied
//! tree as far as it goes and computes every level past that point. The
//! switch from supplied to computed data happens at most once per
//! resolution and never reverses: the external tree has no data below the
//! point where it first ran out.

use serde::{Deserialize, Serialize};

use rust_decimal::Decimal;
use tracing::debug;

use crate::body::Body;
use crate::cycles::{CycleDefinition, PeriodSystem, definition};
use crate::error::DashaError;
use crate::subdivide::subdivide;
use crate::types::{Children, MAX_DEPTH, MAX_PERIODS_PER_LEVEL, Period, PeriodSource};
use crate::validate::{validate_depth, validate_path};

/// One resolved level of a selection path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLevel {
    /// The period at this level. Ancestor entries are shallow (no
    /// subtree); the terminal entry keeps the supplied node's children.
    pub period: Period,
    /// Whether the boundaries came from the supplied tree or were
    /// computed locally.
    pub source: PeriodSource,
}

/// Result of resolving a selection path: one entry per path element,
/// outermost first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPath {
    /// The system the resolution ran under.
    pub system: PeriodSystem,
    /// Resolved levels, outermost first.
    pub levels: Vec<ResolvedLevel>,
}

impl ResolvedPath {
    /// The deepest resolved level.
    pub fn terminal(&self) -> Option<&ResolvedLevel> {
        self.levels.last()
    }

    /// All levels above the terminal one.
    pub fn ancestry(&self) -> &[ResolvedLevel] {
        match self.levels.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }

    /// Provenance of the terminal level.
    pub fn source(&self) -> Option<PeriodSource> {
        self.levels.last().map(|l| l.source)
    }

    /// Number of resolved levels.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }
}

/// The level-after-terminal list produced on request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedChildren {
    /// Ordered child periods of the terminal node.
    pub periods: Vec<Period>,
    /// Whether the list was supplied or computed.
    pub source: PeriodSource,
}

/// Resolve a selection path against a supplied tree, computing levels the
/// tree does not reach.
///
/// At each level the period whose body matches the path entry is
/// selected. While the matched period carries a non-empty
/// [`Children::External`] list, traversal descends into it; from the
/// first node without one, the remaining levels are synthesized with the
/// subdivision calculator. A body missing from a supplied list is
/// [`DashaError::PathNotFound`], never a fallback: present lists are
/// authoritative, however incomplete.
pub fn resolve_path(
    roots: &[Period],
    path: &[Body],
    system: PeriodSystem,
) -> Result<ResolvedPath, DashaError> {
    let def = definition(system);
    validate_path(path, &def)?;

    let mut levels: Vec<ResolvedLevel> = Vec::with_capacity(path.len());
    // Some while still reading the supplied tree; None once synthesizing.
    let mut supplied: Option<&[Period]> = Some(roots);

    for (level_idx, &want) in path.iter().enumerate() {
        let terminal = level_idx + 1 == path.len();
        let resolved = match supplied {
            Some(nodes) => {
                let found = nodes.iter().find(|p| p.body == want).ok_or(
                    DashaError::PathNotFound {
                        level: level_idx + 1,
                        body: want,
                    },
                )?;
                supplied = match &found.children {
                    Children::External(kids) if !kids.is_empty() => Some(kids.as_slice()),
                    _ => None,
                };
                if supplied.is_none() && !terminal {
                    debug!(
                        level = level_idx + 1,
                        body = found.body.name(),
                        "supplied tree exhausted, computing deeper levels"
                    );
                }
                let period = if terminal {
                    found.clone()
                } else {
                    found.without_children()
                };
                ResolvedLevel {
                    period,
                    source: PeriodSource::External,
                }
            }
            None => {
                let parent = &levels[level_idx - 1].period;
                let found = subdivide(parent, &def)?
                    .into_iter()
                    .find(|p| p.body == want)
                    .ok_or(DashaError::PathNotFound {
                        level: level_idx + 1,
                        body: want,
                    })?;
                ResolvedLevel {
                    period: found,
                    source: PeriodSource::Computed,
                }
            }
        };
        levels.push(resolved);
    }

    Ok(ResolvedPath { system, levels })
}

/// [`resolve_path`], plus the terminal node's own child list.
///
/// If the terminal node still carries supplied children those are
/// returned as-is; otherwise the subdivision calculator is applied once
/// more.
pub fn resolve_path_with_children(
    roots: &[Period],
    path: &[Body],
    system: PeriodSystem,
) -> Result<(ResolvedPath, ResolvedChildren), DashaError> {
    let resolved = resolve_path(roots, path, system)?;
    let def = definition(system);
    let terminal = resolved
        .terminal()
        .ok_or(DashaError::InvalidDepth {
            requested: 0,
            max: MAX_DEPTH,
        })?;

    let children = match terminal.period.children.supplied() {
        Some((kids, source)) => ResolvedChildren {
            periods: kids.iter().map(Period::without_children).collect(),
            source,
        },
        None => ResolvedChildren {
            periods: subdivide(&terminal.period, &def)?,
            source: PeriodSource::Computed,
        },
    };

    Ok((resolved, children))
}

/// Find the chain of periods containing `query_jd`, one per level down to
/// `depth`, using supplied data where present and computing beyond it.
///
/// If the instant falls outside the supplied periods at some level the
/// chain is returned truncated at that point.
pub fn active_chain(
    roots: &[Period],
    query_jd: Decimal,
    depth: usize,
    system: PeriodSystem,
) -> Result<ResolvedPath, DashaError> {
    validate_depth(depth)?;
    let def = definition(system);

    let mut levels: Vec<ResolvedLevel> = Vec::with_capacity(depth);
    let mut supplied: Option<&[Period]> = Some(roots);

    for level_idx in 0..depth {
        match supplied {
            Some(nodes) => {
                let Some(found) = nodes.iter().find(|p| p.contains(query_jd)) else {
                    debug!(
                        level = level_idx + 1,
                        "query instant outside supplied periods, chain truncated"
                    );
                    break;
                };
                supplied = match &found.children {
                    Children::External(kids) if !kids.is_empty() => Some(kids.as_slice()),
                    _ => None,
                };
                levels.push(ResolvedLevel {
                    period: found.without_children(),
                    source: PeriodSource::External,
                });
            }
            None => {
                let Some(found) = subdivide(&levels[level_idx - 1].period, &def)?
                    .into_iter()
                    .find(|p| p.contains(query_jd))
                else {
                    break;
                };
                levels.push(ResolvedLevel {
                    period: found,
                    source: PeriodSource::Computed,
                });
            }
        }
    }

    Ok(ResolvedPath { system, levels })
}

/// Return a copy of the tree in which every node down to `depth` carries
/// children, keeping supplied lists and computing the rest.
pub fn expand_to_depth(
    roots: &[Period],
    depth: usize,
    system: PeriodSystem,
) -> Result<Vec<Period>, DashaError> {
    validate_depth(depth)?;
    let def = definition(system);

    let widest = roots
        .len()
        .saturating_mul(def.len().saturating_pow((depth - 1) as u32));
    if widest > MAX_PERIODS_PER_LEVEL {
        return Err(DashaError::CapacityExceeded(
            "expansion would exceed MAX_PERIODS_PER_LEVEL",
        ));
    }

    roots
        .iter()
        .map(|p| expand_node(p, &def, depth - 1))
        .collect()
}

fn expand_node(
    period: &Period,
    def: &CycleDefinition,
    remaining: usize,
) -> Result<Period, DashaError> {
    let mut out = period.without_children();
    if remaining == 0 {
        return Ok(out);
    }

    let (kids, source) = match period.children.supplied() {
        Some((kids, source)) => (kids.to_vec(), source),
        None => (subdivide(period, def)?, PeriodSource::Computed),
    };
    let expanded: Vec<Period> = kids
        .iter()
        .map(|k| expand_node(k, def, remaining - 1))
        .collect::<Result<_, _>>()?;

    out.children = match source {
        PeriodSource::External => Children::External(expanded),
        PeriodSource::Computed => Children::Computed(expanded),
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Level;

    /// A full Vimshottari top level starting at J2000, as the upstream
    /// service would supply it.
    fn vimshottari_roots() -> Vec<Period> {
        let def = definition(PeriodSystem::Vimshottari);
        let mut cursor = Decimal::from(2_451_545u32);
        def.order
            .iter()
            .zip(def.years.iter())
            .map(|(&body, &years)| {
                let p = Period::new(body, cursor, years, Level::Mahadasha);
                cursor = p.end_jd;
                p
            })
            .collect()
    }

    #[test]
    fn single_level_path_resolves_externally() {
        let roots = vimshottari_roots();
        let resolved = resolve_path(&roots, &[Body::Shukra], PeriodSystem::Vimshottari).unwrap();
        assert_eq!(resolved.depth(), 1);
        let terminal = resolved.terminal().unwrap();
        assert_eq!(terminal.source, PeriodSource::External);
        assert_eq!(terminal.period.body, Body::Shukra);
    }

    #[test]
    fn deeper_levels_are_computed() {
        let roots = vimshottari_roots();
        let path = [Body::Shukra, Body::Shukra, Body::Buddh];
        let resolved = resolve_path(&roots, &path, PeriodSystem::Vimshottari).unwrap();
        let sources: Vec<PeriodSource> = resolved.levels.iter().map(|l| l.source).collect();
        assert_eq!(
            sources,
            [
                PeriodSource::External,
                PeriodSource::Computed,
                PeriodSource::Computed
            ]
        );
    }

    #[test]
    fn missing_root_body_is_path_not_found() {
        let roots = vec![vimshottari_roots().swap_remove(0)]; // only Ketu
        let err = resolve_path(&roots, &[Body::Shukra], PeriodSystem::Vimshottari).unwrap_err();
        assert_eq!(
            err,
            DashaError::PathNotFound {
                level: 1,
                body: Body::Shukra
            }
        );
    }

    #[test]
    fn expansion_counts_match_cycle_size() {
        let roots = vimshottari_roots();
        let tree = expand_to_depth(&roots, 3, PeriodSystem::Vimshottari).unwrap();
        assert_eq!(tree.len(), 9);
        for maha in &tree {
            let Children::Computed(antars) = &maha.children else {
                panic!("expected computed children");
            };
            assert_eq!(antars.len(), 9);
            for antar in antars {
                let Children::Computed(pratis) = &antar.children else {
                    panic!("expected computed grandchildren");
                };
                assert_eq!(pratis.len(), 9);
            }
        }
    }

    #[test]
    fn expansion_capacity_guard() {
        let roots = vimshottari_roots();
        // 9^5 = 59049 fits; widening the root set by 2 pushes depth 5 over.
        let mut wide = roots.clone();
        let mut more = roots.clone();
        for p in &mut more {
            p.start_jd += Decimal::from(100_000u32);
            p.end_jd += Decimal::from(100_000u32);
        }
        wide.extend(more);
        assert!(matches!(
            expand_to_depth(&wide, 5, PeriodSystem::Vimshottari),
            Err(DashaError::CapacityExceeded(_))
        ));
    }
}
