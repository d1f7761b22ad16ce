/// Trait for cellular automaton rules
/// Enables different rulesets beyond Conway's Game of Life.
///
/// The universe only evaluates cells with at least one living neighbour, so a
/// rule must never birth or keep a cell whose neighbour count is 0.
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Whether a cell is alive next generation
    fn next(&self, alive: bool, neighbours: u8) -> bool;
}

/// Conway's Game of Life (B3/S23)
/// The classic cellular automaton rules
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "Conway"
    }

    fn description(&self) -> &'static str {
        "B3/S23 - Classic"
    }

    fn next(&self, alive: bool, neighbours: u8) -> bool {
        neighbours == 3 || (alive && neighbours == 2)
    }
}

/// HighLife (B36/S23)
/// Like Conway's Life but cells with 6 neighbours are born
#[derive(Clone, Copy, Debug, Default)]
pub struct HighLifeRule;

impl Rule for HighLifeRule {
    fn name(&self) -> &'static str {
        "HighLife"
    }

    fn description(&self) -> &'static str {
        "B36/S23 - Replicators"
    }

    fn next(&self, alive: bool, neighbours: u8) -> bool {
        matches!((alive, neighbours), (true, 2 | 3) | (false, 3 | 6))
    }
}

/// Seeds (B2/S)
/// Every cell dies each generation
#[derive(Clone, Copy, Debug, Default)]
pub struct SeedsRule;

impl Rule for SeedsRule {
    fn name(&self) -> &'static str {
        "Seeds"
    }

    fn description(&self) -> &'static str {
        "B2/S - Exploding"
    }

    fn next(&self, alive: bool, neighbours: u8) -> bool {
        !alive && neighbours == 2
    }
}

/// Day & Night (B3678/S34678)
/// Symmetric rule - inverse of a pattern follows same rules
#[derive(Clone, Copy, Debug, Default)]
pub struct DayAndNightRule;

impl Rule for DayAndNightRule {
    fn name(&self) -> &'static str {
        "Day&Night"
    }

    fn description(&self) -> &'static str {
        "B3678/S34678"
    }

    fn next(&self, alive: bool, neighbours: u8) -> bool {
        matches!(
            (alive, neighbours),
            (true, 3 | 4 | 6 | 7 | 8) | (false, 3 | 6 | 7 | 8)
        )
    }
}

/// Get all available rules
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ConwayRule),
        Box::new(HighLifeRule),
        Box::new(SeedsRule),
        Box::new(DayAndNightRule),
    ]
}

/// Get default rule (Conway's Life)
pub fn default_rule() -> Box<dyn Rule> {
    Box::new(ConwayRule)
}
