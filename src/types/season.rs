//! Meteorological seasons and the month→season mapping used by the
//! seasonal aggregation views.

use polars::prelude::{col, lit, when, Expr};
use std::fmt;

/// Label assigned when a month number falls outside 1..=12. Defensive only;
/// temporal decomposition never produces such a month.
pub const UNDEFINED_SEASON: &str = "Unknown";

/// A meteorological season (northern-hemisphere convention).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// December, January, February.
    Winter,
    /// March, April, May.
    Spring,
    /// June, July, August.
    Summer,
    /// September, October, November.
    Autumn,
}

impl Season {
    /// All seasons, in the order the dashboard lists them.
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Autumn];

    /// Maps a month number (1..=12) to its season.
    ///
    /// Returns `None` for out-of-range months; every valid month maps to
    /// exactly one season.
    pub fn from_month(month: u32) -> Option<Season> {
        match month {
            12 | 1 | 2 => Some(Season::Winter),
            3..=5 => Some(Season::Spring),
            6..=8 => Some(Season::Summer),
            9..=11 => Some(Season::Autumn),
            _ => None,
        }
    }

    /// The months belonging to this season.
    pub fn months(self) -> [u32; 3] {
        match self {
            Season::Winter => [12, 1, 2],
            Season::Spring => [3, 4, 5],
            Season::Summer => [6, 7, 8],
            Season::Autumn => [9, 10, 11],
        }
    }

    /// Stable string label, used as the `season` column value and as the
    /// series label in seasonal views.
    pub fn label(self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Expression deriving a `season` label column from the integer `month`
/// column. The `otherwise` arm is the defensive sentinel; a frame produced
/// by the dataset loader never hits it.
pub fn season_expr() -> Expr {
    let month_in = |lo: i32, hi: i32| col("month").gt_eq(lit(lo)).and(col("month").lt_eq(lit(hi)));
    when(col("month").eq(lit(12)).or(month_in(1, 2)))
        .then(lit(Season::Winter.label()))
        .when(month_in(3, 5))
        .then(lit(Season::Spring.label()))
        .when(month_in(6, 8))
        .then(lit(Season::Summer.label()))
        .when(month_in(9, 11))
        .then(lit(Season::Autumn.label()))
        .otherwise(lit(UNDEFINED_SEASON))
}
