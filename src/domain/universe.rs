//! The universe engine: an unbounded board that stores only living cells.

use std::collections::HashSet;
use std::collections::hash_set;

use super::{Algorithm, Cell, Rule, UniverseError, default_rule};

/// Universe owns the set of living cells and the generation counter.
///
/// Nothing is allocated per board position: memory and step time scale with
/// the population, so cells may live anywhere in the `i64` plane.
pub struct Universe {
    living: HashSet<Cell>,
    generation: u64,
    rule: Box<dyn Rule>,
    algorithm: Algorithm,
}

impl Universe {
    /// Create an empty universe at generation 0
    pub fn new() -> Self {
        Self {
            living: HashSet::new(),
            generation: 0,
            rule: default_rule(),
            algorithm: Algorithm::default(),
        }
    }

    /// Create a universe seeded with `cells`; duplicates collapse
    pub fn from_cells<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let mut universe = Self::new();
        universe.extend(cells.into_iter().map(Into::into));
        universe
    }

    /// Replace the rule (builder pattern)
    pub fn with_rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.rule = rule;
        self
    }

    /// Replace the stepping algorithm (builder pattern)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn set_rule(&mut self, rule: Box<dyn Rule>) {
        self.rule = rule;
    }

    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Bring a cell to life. Adding a living cell does nothing.
    pub fn add(&mut self, cell: impl Into<Cell>) {
        self.living.insert(cell.into());
    }

    /// Kill a cell. Removing a dead cell does nothing.
    pub fn remove(&mut self, cell: impl Into<Cell>) {
        self.living.remove(&cell.into());
    }

    /// Kill every cell and return to generation 0
    pub fn reset(&mut self) {
        self.living.clear();
        self.generation = 0;
    }

    pub fn contains(&self, cell: impl Into<Cell>) -> bool {
        self.living.contains(&cell.into())
    }

    /// Number of living cells
    pub fn len(&self) -> usize {
        self.living.len()
    }

    pub fn is_empty(&self) -> bool {
        self.living.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Iterate over living cells in no particular order
    pub fn cells(&self) -> hash_set::Iter<'_, Cell> {
        self.living.iter()
    }

    /// Smallest and largest corner of the population, if any
    pub fn bounding_box(&self) -> Option<(Cell, Cell)> {
        let mut cells = self.living.iter();
        let first = *cells.next()?;
        Some(cells.fold((first, first), |(min, max), c| {
            (
                Cell::new(min.x.min(c.x), min.y.min(c.y)),
                Cell::new(max.x.max(c.x), max.y.max(c.y)),
            )
        }))
    }

    /// Advance one generation.
    ///
    /// The next population is computed from the current one alone and then
    /// swapped in. On error neither the cells nor the generation change.
    ///
    /// A single living cell on the edge of the `i64` range rejects the whole
    /// step, even if that cell would die anyway.
    pub fn step(&mut self) -> Result<(), UniverseError> {
        let next = self.algorithm.evolve(&self.living, self.rule.as_ref())?;
        self.living = next;
        self.generation += 1;

        log::trace!(
            "generation {} has {} living cells",
            self.generation,
            self.living.len()
        );
        Ok(())
    }

    /// Advance `n` generations, stopping at the first rejected step
    pub fn step_n(&mut self, n: u64) -> Result<(), UniverseError> {
        (0..n).try_for_each(|_| self.step())
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Universe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Universe")
            .field("generation", &self.generation)
            .field("population", &self.living.len())
            .field("rule", &self.rule.name())
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl Extend<Cell> for Universe {
    fn extend<T: IntoIterator<Item = Cell>>(&mut self, iter: T) {
        self.living.extend(iter);
    }
}

impl FromIterator<Cell> for Universe {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        Self::from_cells(iter)
    }
}

impl<'a> IntoIterator for &'a Universe {
    type Item = &'a Cell;
    type IntoIter = hash_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DayAndNightRule, HighLifeRule, SeedsRule};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    const GLIDER: [(i64, i64); 5] = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

    fn cells(coords: &[(i64, i64)]) -> HashSet<Cell> {
        coords.iter().map(|&c| Cell::from(c)).collect()
    }

    fn living(universe: &Universe) -> HashSet<Cell> {
        universe.cells().copied().collect()
    }

    fn translate(coords: &HashSet<Cell>, dx: i64, dy: i64) -> HashSet<Cell> {
        coords.iter().map(|c| Cell::new(c.x + dx, c.y + dy)).collect()
    }

    fn random_soup(seed: u64, extent: i64, density: f64) -> Vec<Cell> {
        let mut rng = StdRng::seed_from_u64(seed);
        (-extent..extent)
            .flat_map(|y| (-extent..extent).map(move |x| Cell::new(x, y)))
            .filter(|_| rng.random_bool(density))
            .collect()
    }

    #[test]
    fn test_new_is_empty() {
        let universe = Universe::new();
        assert!(universe.is_empty());
        assert_eq!(universe.len(), 0);
        assert_eq!(universe.generation(), 0);
    }

    #[test]
    fn test_from_cells_deduplicates() {
        let universe = Universe::from_cells([(0, 0), (1, 1), (0, 0)]);
        assert_eq!(universe.len(), 2);
        assert_eq!(universe.generation(), 0);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut once = Universe::new();
        once.add((4, -2));

        let mut twice = Universe::new();
        twice.add((4, -2));
        twice.add((4, -2));

        assert_eq!(living(&once), living(&twice));
        assert_eq!(twice.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut universe = Universe::from_cells([(0, 0)]);
        universe.remove((5, 5));
        assert_eq!(living(&universe), cells(&[(0, 0)]));

        universe.remove((0, 0));
        assert!(universe.is_empty());
        universe.remove((0, 0));
        assert!(universe.is_empty());
    }

    #[test]
    fn test_generation_counts_steps() {
        let mut universe = Universe::from_cells(GLIDER);
        for expected in 1..=7 {
            universe.step().unwrap();
            assert_eq!(universe.generation(), expected);
        }
        universe.step_n(10).unwrap();
        assert_eq!(universe.generation(), 17);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut universe = Universe::from_cells(GLIDER);
        universe.step_n(3).unwrap();
        universe.add((100, 100));
        universe.reset();

        assert!(universe.is_empty());
        assert_eq!(universe.generation(), 0);
    }

    #[test]
    fn test_empty_universe_steps() {
        let mut universe = Universe::new();
        universe.step().unwrap();
        assert!(universe.is_empty());
        assert_eq!(universe.generation(), 1);
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut universe = Universe::from_cells([(0, 0)]);
        universe.step().unwrap();
        assert!(universe.is_empty());
    }

    #[test]
    fn test_block_is_still_life() {
        let block = cells(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let mut universe: Universe = block.iter().copied().collect();
        universe.step().unwrap();

        assert_eq!(living(&universe), block);
        assert_eq!(universe.generation(), 1);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = cells(&[(0, 0), (1, 0), (2, 0)]);
        let vertical = cells(&[(1, -1), (1, 0), (1, 1)]);
        let mut universe: Universe = horizontal.iter().copied().collect();

        universe.step().unwrap();
        assert_eq!(living(&universe), vertical);
        universe.step().unwrap();
        assert_eq!(living(&universe), horizontal);
    }

    #[test]
    fn test_glider_translates() {
        let glider = cells(&GLIDER);
        for algorithm in Algorithm::all() {
            let mut universe = Universe::from_cells(GLIDER).with_algorithm(algorithm);
            universe.step_n(4).unwrap();
            assert_eq!(living(&universe), translate(&glider, 1, 1));
        }
    }

    #[test]
    fn test_far_apart_cells_are_cheap() {
        let mut universe = Universe::from_cells([
            (-4_000_000_000_000, 7),
            (-3_999_999_999_999, 7),
            (-3_999_999_999_998, 7),
            (9_000_000_000_000_000, -9_000_000_000_000_000),
        ]);
        universe.step().unwrap();

        assert_eq!(
            living(&universe),
            cells(&[
                (-3_999_999_999_999, 6),
                (-3_999_999_999_999, 7),
                (-3_999_999_999_999, 8)
            ])
        );
    }

    #[test]
    fn test_translation_invariance() {
        let soup = random_soup(7, 8, 0.35);
        let (dx, dy) = (1_000_003, -77_777);

        let mut here = Universe::from_cells(soup.iter().copied());
        let mut there = Universe::from_cells(soup.iter().map(|c| Cell::new(c.x + dx, c.y + dy)));
        here.step_n(20).unwrap();
        there.step_n(20).unwrap();

        assert_eq!(translate(&living(&here), dx, dy), living(&there));
    }

    #[test]
    fn test_algorithms_agree_on_soup() {
        for (seed, rule) in [(1, 0), (2, 1), (3, 2), (4, 3)] {
            let soup = random_soup(seed, 12, 0.4);
            let make = |algorithm| {
                let rule: Box<dyn Rule> = match rule {
                    0 => Box::new(crate::domain::ConwayRule),
                    1 => Box::new(HighLifeRule),
                    2 => Box::new(SeedsRule),
                    _ => Box::new(DayAndNightRule),
                };
                Universe::from_cells(soup.iter().copied())
                    .with_rule(rule)
                    .with_algorithm(algorithm)
            };
            let mut tally = make(Algorithm::CandidateTally);
            let mut frontier = make(Algorithm::LiveFrontier);

            for _ in 0..15 {
                tally.step().unwrap();
                frontier.step().unwrap();
                assert_eq!(living(&tally), living(&frontier));
            }
        }
    }

    #[test]
    fn test_overflow_rejects_step_atomically() {
        let mut universe = Universe::from_cells([(0, 0), (1, 0), (2, 0), (i64::MIN, 3)]);
        let before = living(&universe);

        let err = universe.step().unwrap_err();
        assert_eq!(err, UniverseError::CoordinateOverflow { cell: Cell::new(i64::MIN, 3) });
        assert_eq!(living(&universe), before);
        assert_eq!(universe.generation(), 0);
    }

    #[test]
    fn test_edge_cell_blocks_whole_step() {
        let mut universe = Universe::from_cells([(0, 0), (1, 0), (2, 0), (i64::MAX, 0)]);

        assert!(universe.step().is_err());
        assert_eq!(universe.generation(), 0);
        assert!(universe.contains((1, 0)) && universe.contains((i64::MAX, 0)));
        assert!(!universe.contains((1, 1)));
    }

    #[test]
    fn test_step_n_stops_at_error() {
        let mut universe = Universe::from_cells([(i64::MAX, i64::MAX)]);
        assert!(universe.step_n(5).is_err());
        assert_eq!(universe.generation(), 0);
    }

    #[test]
    fn test_bounding_box() {
        assert_eq!(Universe::new().bounding_box(), None);

        let universe = Universe::from_cells([(3, -1), (-2, 4), (0, 0)]);
        assert_eq!(
            universe.bounding_box(),
            Some((Cell::new(-2, -1), Cell::new(3, 4)))
        );
    }

    #[test]
    fn test_contains_and_iteration() {
        let universe = Universe::from_cells(GLIDER);
        assert!(universe.contains((1, 0)));
        assert!(!universe.contains((0, 0)));
        assert_eq!((&universe).into_iter().count(), 5);
        assert_eq!(universe.cells().count(), universe.cells().count());
    }

    #[test]
    fn test_rule_swap() {
        // A HighLife birth on 6 neighbours that Conway rejects.
        let ring = [(0, 0), (1, 0), (2, 0), (0, 2), (1, 2), (2, 2)];
        let mut conway = Universe::from_cells(ring);
        let mut highlife = Universe::from_cells(ring).with_rule(Box::new(HighLifeRule));

        conway.step().unwrap();
        highlife.step().unwrap();

        assert!(!conway.contains((1, 1)));
        assert!(highlife.contains((1, 1)));
        assert_eq!(highlife.rule().name(), "HighLife");
    }
}
