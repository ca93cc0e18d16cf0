//! Static country→continent classification.
//!
//! The table is process-wide, read-only configuration: every country name the
//! country dataset is expected to contain, grouped by continent. Names absent
//! from the table classify as [`Continent::Other`] so misclassification stays
//! visible instead of silently disappearing into a real continent.

use polars::df;
use polars::frame::DataFrame;
use polars::prelude::PolarsResult;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// A continent label assigned to a country, plus the `Other` fallback for
/// names the table does not cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Continent {
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Oceania,
    /// Fallback for country names absent from the classification table.
    Other,
}

impl Continent {
    /// All continents, fallback included, in display order.
    pub const ALL: [Continent; 7] = [
        Continent::Africa,
        Continent::Asia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::Oceania,
        Continent::Other,
    ];

    /// Stable string label, used as the `continent` column value and as the
    /// series label in continent views.
    pub fn label(self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Oceania => "Oceania",
            Continent::Other => "Other",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The raw classification table. A handful of transcontinental names appear
/// twice (e.g. Turkey under both Asia and Europe); the first-listed entry
/// wins when the lookup map is built.
const COUNTRY_CONTINENTS: &[(&str, Continent)] = &[
    // Africa
    ("Algeria", Continent::Africa),
    ("Angola", Continent::Africa),
    ("Benin", Continent::Africa),
    ("Botswana", Continent::Africa),
    ("Burkina Faso", Continent::Africa),
    ("Burundi", Continent::Africa),
    ("Cameroon", Continent::Africa),
    ("Cape Verde", Continent::Africa),
    ("Central African Republic", Continent::Africa),
    ("Chad", Continent::Africa),
    ("Comoros", Continent::Africa),
    ("Congo (Brazzaville)", Continent::Africa),
    ("Congo (Kinshasa)", Continent::Africa),
    ("Djibouti", Continent::Africa),
    ("Egypt", Continent::Africa),
    ("Equatorial Guinea", Continent::Africa),
    ("Eritrea", Continent::Africa),
    ("Eswatini", Continent::Africa),
    ("Ethiopia", Continent::Africa),
    ("Gabon", Continent::Africa),
    ("Gambia", Continent::Africa),
    ("Ghana", Continent::Africa),
    ("Guinea", Continent::Africa),
    ("Guinea-Bissau", Continent::Africa),
    ("Ivory Coast", Continent::Africa),
    ("Kenya", Continent::Africa),
    ("Lesotho", Continent::Africa),
    ("Liberia", Continent::Africa),
    ("Libya", Continent::Africa),
    ("Madagascar", Continent::Africa),
    ("Malawi", Continent::Africa),
    ("Mali", Continent::Africa),
    ("Mauritania", Continent::Africa),
    ("Mauritius", Continent::Africa),
    ("Morocco", Continent::Africa),
    ("Mozambique", Continent::Africa),
    ("Namibia", Continent::Africa),
    ("Niger", Continent::Africa),
    ("Nigeria", Continent::Africa),
    ("Rwanda", Continent::Africa),
    ("Sao Tome and Principe", Continent::Africa),
    ("Senegal", Continent::Africa),
    ("Seychelles", Continent::Africa),
    ("Sierra Leone", Continent::Africa),
    ("Somalia", Continent::Africa),
    ("South Africa", Continent::Africa),
    ("South Sudan", Continent::Africa),
    ("Sudan", Continent::Africa),
    ("Tanzania", Continent::Africa),
    ("Togo", Continent::Africa),
    ("Tunisia", Continent::Africa),
    ("Uganda", Continent::Africa),
    ("Zambia", Continent::Africa),
    ("Zimbabwe", Continent::Africa),
    // Asia
    ("Afghanistan", Continent::Asia),
    ("Armenia", Continent::Asia),
    ("Azerbaijan", Continent::Asia),
    ("Bahrain", Continent::Asia),
    ("Bangladesh", Continent::Asia),
    ("Bhutan", Continent::Asia),
    ("Brunei", Continent::Asia),
    ("Cambodia", Continent::Asia),
    ("China", Continent::Asia),
    ("Cyprus", Continent::Asia),
    ("Georgia", Continent::Asia),
    ("India", Continent::Asia),
    ("Indonesia", Continent::Asia),
    ("Iran", Continent::Asia),
    ("Iraq", Continent::Asia),
    ("Israel", Continent::Asia),
    ("Japan", Continent::Asia),
    ("Jordan", Continent::Asia),
    ("Kazakhstan", Continent::Asia),
    ("Kuwait", Continent::Asia),
    ("Kyrgyzstan", Continent::Asia),
    ("Laos", Continent::Asia),
    ("Lebanon", Continent::Asia),
    ("Malaysia", Continent::Asia),
    ("Maldives", Continent::Asia),
    ("Mongolia", Continent::Asia),
    ("Myanmar", Continent::Asia),
    ("Nepal", Continent::Asia),
    ("North Korea", Continent::Asia),
    ("Oman", Continent::Asia),
    ("Pakistan", Continent::Asia),
    ("Palestine", Continent::Asia),
    ("Philippines", Continent::Asia),
    ("Qatar", Continent::Asia),
    ("Saudi Arabia", Continent::Asia),
    ("Singapore", Continent::Asia),
    ("South Korea", Continent::Asia),
    ("Sri Lanka", Continent::Asia),
    ("Syria", Continent::Asia),
    ("Tajikistan", Continent::Asia),
    ("Thailand", Continent::Asia),
    ("Timor-Leste", Continent::Asia),
    ("Turkey", Continent::Asia),
    ("Turkmenistan", Continent::Asia),
    ("United Arab Emirates", Continent::Asia),
    ("Uzbekistan", Continent::Asia),
    ("Vietnam", Continent::Asia),
    ("Yemen", Continent::Asia),
    // Europe
    ("Albania", Continent::Europe),
    ("Andorra", Continent::Europe),
    ("Armenia", Continent::Europe),
    ("Austria", Continent::Europe),
    ("Azerbaijan", Continent::Europe),
    ("Belarus", Continent::Europe),
    ("Belgium", Continent::Europe),
    ("Bosnia and Herzegovina", Continent::Europe),
    ("Bulgaria", Continent::Europe),
    ("Croatia", Continent::Europe),
    ("Cyprus", Continent::Europe),
    ("Czech Republic", Continent::Europe),
    ("Denmark", Continent::Europe),
    ("Estonia", Continent::Europe),
    ("Finland", Continent::Europe),
    ("France", Continent::Europe),
    ("Georgia", Continent::Europe),
    ("Germany", Continent::Europe),
    ("Greece", Continent::Europe),
    ("Hungary", Continent::Europe),
    ("Iceland", Continent::Europe),
    ("Ireland", Continent::Europe),
    ("Italy", Continent::Europe),
    ("Kosovo", Continent::Europe),
    ("Latvia", Continent::Europe),
    ("Liechtenstein", Continent::Europe),
    ("Lithuania", Continent::Europe),
    ("Luxembourg", Continent::Europe),
    ("Malta", Continent::Europe),
    ("Moldova", Continent::Europe),
    ("Monaco", Continent::Europe),
    ("Montenegro", Continent::Europe),
    ("Netherlands", Continent::Europe),
    ("North Macedonia", Continent::Europe),
    ("Norway", Continent::Europe),
    ("Poland", Continent::Europe),
    ("Portugal", Continent::Europe),
    ("Romania", Continent::Europe),
    ("Russia", Continent::Europe),
    ("San Marino", Continent::Europe),
    ("Serbia", Continent::Europe),
    ("Slovakia", Continent::Europe),
    ("Slovenia", Continent::Europe),
    ("Spain", Continent::Europe),
    ("Sweden", Continent::Europe),
    ("Switzerland", Continent::Europe),
    ("Turkey", Continent::Europe),
    ("Ukraine", Continent::Europe),
    ("United Kingdom", Continent::Europe),
    ("Vatican City", Continent::Europe),
    // North America
    ("Antigua and Barbuda", Continent::NorthAmerica),
    ("Bahamas", Continent::NorthAmerica),
    ("Barbados", Continent::NorthAmerica),
    ("Belize", Continent::NorthAmerica),
    ("Canada", Continent::NorthAmerica),
    ("Costa Rica", Continent::NorthAmerica),
    ("Cuba", Continent::NorthAmerica),
    ("Dominica", Continent::NorthAmerica),
    ("Dominican Republic", Continent::NorthAmerica),
    ("El Salvador", Continent::NorthAmerica),
    ("Grenada", Continent::NorthAmerica),
    ("Guatemala", Continent::NorthAmerica),
    ("Haiti", Continent::NorthAmerica),
    ("Honduras", Continent::NorthAmerica),
    ("Jamaica", Continent::NorthAmerica),
    ("Mexico", Continent::NorthAmerica),
    ("Nicaragua", Continent::NorthAmerica),
    ("Panama", Continent::NorthAmerica),
    ("Saint Kitts and Nevis", Continent::NorthAmerica),
    ("Saint Lucia", Continent::NorthAmerica),
    ("Saint Vincent and the Grenadines", Continent::NorthAmerica),
    ("Trinidad and Tobago", Continent::NorthAmerica),
    ("United States", Continent::NorthAmerica),
    // South America
    ("Argentina", Continent::SouthAmerica),
    ("Bolivia", Continent::SouthAmerica),
    ("Brazil", Continent::SouthAmerica),
    ("Chile", Continent::SouthAmerica),
    ("Colombia", Continent::SouthAmerica),
    ("Ecuador", Continent::SouthAmerica),
    ("Guyana", Continent::SouthAmerica),
    ("Paraguay", Continent::SouthAmerica),
    ("Peru", Continent::SouthAmerica),
    ("Suriname", Continent::SouthAmerica),
    ("Uruguay", Continent::SouthAmerica),
    ("Venezuela", Continent::SouthAmerica),
    // Oceania
    ("Australia", Continent::Oceania),
    ("Fiji", Continent::Oceania),
    ("Kiribati", Continent::Oceania),
    ("Marshall Islands", Continent::Oceania),
    ("Micronesia", Continent::Oceania),
    ("Nauru", Continent::Oceania),
    ("New Zealand", Continent::Oceania),
    ("Palau", Continent::Oceania),
    ("Papua New Guinea", Continent::Oceania),
    ("Samoa", Continent::Oceania),
    ("Solomon Islands", Continent::Oceania),
    ("Tonga", Continent::Oceania),
    ("Tuvalu", Continent::Oceania),
    ("Vanuatu", Continent::Oceania),
];

/// Deduplicated lookup map; first-listed continent wins for duplicate names.
static LOOKUP: LazyLock<HashMap<&'static str, Continent>> = LazyLock::new(|| {
    let mut map = HashMap::with_capacity(COUNTRY_CONTINENTS.len());
    for (country, continent) in COUNTRY_CONTINENTS {
        map.entry(*country).or_insert(*continent);
    }
    map
});

/// Classifies a country name into a continent.
///
/// Pure and total: names absent from the table map to [`Continent::Other`].
pub fn classify(country: &str) -> Continent {
    LOOKUP.get(country).copied().unwrap_or(Continent::Other)
}

/// Builds a two-column (`country`, `continent`) DataFrame from the lookup
/// map, for left-joining onto the country dataset. One row per distinct
/// country name, so the join never multiplies rows.
pub fn lookup_frame() -> PolarsResult<DataFrame> {
    let mut countries = Vec::with_capacity(LOOKUP.len());
    let mut continents = Vec::with_capacity(LOOKUP.len());
    for (country, continent) in LOOKUP.iter() {
        countries.push(*country);
        continents.push(continent.label());
    }
    df!("country" => countries, "continent" => continents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_countries_classify_to_their_continent() {
        assert_eq!(classify("Kenya"), Continent::Africa);
        assert_eq!(classify("Japan"), Continent::Asia);
        assert_eq!(classify("Germany"), Continent::Europe);
        assert_eq!(classify("Mexico"), Continent::NorthAmerica);
        assert_eq!(classify("Brazil"), Continent::SouthAmerica);
        assert_eq!(classify("Fiji"), Continent::Oceania);
    }

    #[test]
    fn unknown_countries_fall_back_to_other() {
        assert_eq!(classify("Atlantis"), Continent::Other);
        assert_eq!(classify(""), Continent::Other);
    }

    #[test]
    fn every_table_entry_classifies_to_exactly_one_continent() {
        for (country, _) in COUNTRY_CONTINENTS {
            let continent = classify(country);
            assert_ne!(
                continent,
                Continent::Other,
                "table entry '{}' fell through to the fallback",
                country
            );
        }
    }

    #[test]
    fn duplicate_names_resolve_to_first_listed_continent() {
        // Listed under both Asia and Europe; Asia comes first in the table.
        assert_eq!(classify("Turkey"), Continent::Asia);
        assert_eq!(classify("Cyprus"), Continent::Asia);
        assert_eq!(classify("Georgia"), Continent::Asia);
    }

    #[test]
    fn lookup_frame_has_one_row_per_country() {
        let frame = lookup_frame().unwrap();
        assert_eq!(frame.height(), LOOKUP.len());
        assert_eq!(frame.width(), 2);
    }
}
