//! Sparse stepping strategies.
//!
//! Both strategies look only at living cells and their neighbourhoods, so a
//! step costs O(population) no matter how far apart the cells are. They are
//! interchangeable: for any living set and rule they produce the same next
//! generation.

use std::collections::{HashMap, HashSet};

use super::{Cell, NEIGHBOUR_OFFSETS, Rule, UniverseError};

/// Available evolution algorithms for demo comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Tally live-neighbour counts for every neighbour of a living cell
    #[default]
    CandidateTally,
    /// Evaluate living cells, then the dead frontier around them
    LiveFrontier,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::CandidateTally, Algorithm::LiveFrontier]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::CandidateTally => "Tally",
            Algorithm::LiveFrontier => "Frontier",
        }
    }

    /// Short description for tooltips/info
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::CandidateTally => "One hash-map tally over all neighbours",
            Algorithm::LiveFrontier => "Membership lookups for live cells and frontier",
        }
    }

    /// The algorithm after this one, wrapping around
    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|&a| a == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Compute the generation following `living`.
    /// `living` is only read; the result is a fresh set.
    pub fn evolve(
        self,
        living: &HashSet<Cell>,
        rule: &dyn Rule,
    ) -> Result<HashSet<Cell>, UniverseError> {
        match self {
            Algorithm::CandidateTally => evolve_tally(living, rule),
            Algorithm::LiveFrontier => evolve_frontier(living, rule),
        }
    }
}

fn evolve_tally(living: &HashSet<Cell>, rule: &dyn Rule) -> Result<HashSet<Cell>, UniverseError> {
    let mut counts: HashMap<Cell, u8> = HashMap::with_capacity(living.len() * 8);
    for &cell in living {
        for neighbour in cell.neighbours()? {
            *counts.entry(neighbour).or_insert(0) += 1;
        }
    }

    Ok(counts
        .into_iter()
        .filter(|(cell, n)| rule.next(living.contains(cell), *n))
        .map(|(cell, _)| cell)
        .collect())
}

fn evolve_frontier(
    living: &HashSet<Cell>,
    rule: &dyn Rule,
) -> Result<HashSet<Cell>, UniverseError> {
    let mut next = HashSet::with_capacity(living.len());
    let mut frontier = HashSet::new();

    for &cell in living {
        let neighbours = cell.neighbours()?;
        let alive = neighbours.iter().filter(|n| living.contains(n)).count() as u8;
        if rule.next(true, alive) {
            next.insert(cell);
        }
        frontier.extend(neighbours.into_iter().filter(|n| !living.contains(n)));
    }

    for cell in frontier {
        // Positions past the i64 edge cannot hold living cells.
        let alive = NEIGHBOUR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| cell.offset(dx, dy))
            .filter(|n| living.contains(n))
            .count() as u8;
        if rule.next(false, alive) {
            next.insert(cell);
        }
    }

    Ok(next)
}
