//! Selection of which global temperature measure(s) a query reads.

use std::fmt;

/// A measure column of the global dataset together with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Measure {
    column: &'static str,
    label: &'static str,
}

impl Measure {
    /// Land-surface average temperature.
    pub const LAND: Measure = Measure {
        column: "land_avg",
        label: "Land average",
    };
    /// Combined land and ocean average temperature.
    pub const LAND_OCEAN: Measure = Measure {
        column: "land_ocean_avg",
        label: "Land and ocean average",
    };

    /// Column name in the loaded global frame.
    pub fn column(self) -> &'static str {
        self.column
    }

    /// Series label shown to the user.
    pub fn label(self) -> &'static str {
        self.label
    }
}

/// Which temperature measure(s) to plot in the global time-series view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemperatureKind {
    /// Land-surface temperature only.
    Land,
    /// Combined land and ocean temperature only.
    LandAndOcean,
    /// Both measures, as two separate series.
    #[default]
    Both,
}

impl TemperatureKind {
    /// The measures selected by this kind, in series order.
    pub fn measures(self) -> &'static [Measure] {
        match self {
            TemperatureKind::Land => &[Measure::LAND],
            TemperatureKind::LandAndOcean => &[Measure::LAND_OCEAN],
            TemperatureKind::Both => &[Measure::LAND, Measure::LAND_OCEAN],
        }
    }
}

impl fmt::Display for TemperatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemperatureKind::Land => "land",
            TemperatureKind::LandAndOcean => "land-and-ocean",
            TemperatureKind::Both => "both",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_selects_two_distinct_measures() {
        let measures = TemperatureKind::Both.measures();
        assert_eq!(measures.len(), 2);
        assert_ne!(measures[0].column(), measures[1].column());
    }

    #[test]
    fn single_kinds_select_one_measure() {
        assert_eq!(TemperatureKind::Land.measures(), &[Measure::LAND]);
        assert_eq!(
            TemperatureKind::LandAndOcean.measures(),
            &[Measure::LAND_OCEAN]
        );
    }
}
