mod cell;
mod error;
mod rules;
mod algorithm;
mod universe;

pub use cell::{Cell, NEIGHBOUR_OFFSETS};
pub use error::UniverseError;
pub use rules::{Rule, ConwayRule, HighLifeRule, SeedsRule, DayAndNightRule, all_rules, default_rule};
pub use algorithm::Algorithm;
pub use universe::Universe;
