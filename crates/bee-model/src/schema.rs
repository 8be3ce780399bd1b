//! Canonical column schema for USDA honey-bee colony tables.

use std::collections::BTreeMap;

pub const STATE: &str = "State";
pub const PERIOD: &str = "Period";

pub const STARTING_COLONIES: &str = "Starting_Colonies";
pub const MAX_COLONIES: &str = "Max_Colonies";
pub const LOST_COLONIES: &str = "Lost_colonies";
pub const PERCENT_LOST: &str = "Percent_lost";
pub const ADDED_COLONIES: &str = "Added_colonies";
pub const RENOVATED_COLONIES: &str = "Renovated_colonies";
pub const PERCENT_RENOVATED: &str = "Percent_renovated";

pub const VARROA_MITES: &str = "Varroa_mites";
pub const OTHER_PESTS: &str = "Other_pests_and_parasites";
pub const DISEASES: &str = "Diseases";
pub const PESTICIDES: &str = "Pesticides";
pub const OTHER: &str = "Other";
pub const UNKNOWN: &str = "Unknown";

/// What values a canonical column holds, which decides the range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Row key (`State`, `Period`).
    Key,
    /// Colony count, must be >= 0.
    Count,
    /// Percentage in [0, 100].
    Percentage,
    /// Stressor percentage in [0, 100]; summed per row.
    Stressor,
}

impl ColumnKind {
    pub fn is_percentage(self) -> bool {
        matches!(self, Self::Percentage | Self::Stressor)
    }
}

pub const CANONICAL_COLUMNS: &[(&str, ColumnKind)] = &[
    (STATE, ColumnKind::Key),
    (PERIOD, ColumnKind::Key),
    (STARTING_COLONIES, ColumnKind::Count),
    (MAX_COLONIES, ColumnKind::Count),
    (LOST_COLONIES, ColumnKind::Count),
    (PERCENT_LOST, ColumnKind::Percentage),
    (ADDED_COLONIES, ColumnKind::Count),
    (RENOVATED_COLONIES, ColumnKind::Count),
    (PERCENT_RENOVATED, ColumnKind::Percentage),
    (VARROA_MITES, ColumnKind::Stressor),
    (OTHER_PESTS, ColumnKind::Stressor),
    (DISEASES, ColumnKind::Stressor),
    (PESTICIDES, ColumnKind::Stressor),
    (OTHER, ColumnKind::Stressor),
    (UNKNOWN, ColumnKind::Stressor),
];

pub const STRESSOR_COLUMNS: &[&str] = &[
    VARROA_MITES,
    OTHER_PESTS,
    DISEASES,
    PESTICIDES,
    OTHER,
    UNKNOWN,
];

pub const DEFAULT_REQUIRED_COLUMNS: &[&str] =
    &[STARTING_COLONIES, MAX_COLONIES, LOST_COLONIES, PERCENT_LOST];

/// USDA bookkeeping columns: table identifiers, the row-type marker and the
/// month column that duplicates `Period`.
pub const DEFAULT_EXCLUDED_COLUMNS: &[&str] = &["table", "table_id", "month", "col_1", "marker"];

/// Known USDA header variants, keyed by their underscore-normalized form.
const HEADER_VARIANTS: &[(&str, &str)] = &[
    ("date", PERIOD),
    ("time_period", PERIOD),
    ("quarter", PERIOD),
    ("state_name", STATE),
    ("colonies", STARTING_COLONIES),
    ("starting_colonies", STARTING_COLONIES),
    ("colonies_starting", STARTING_COLONIES),
    ("number_of_colonies", STARTING_COLONIES),
    ("maximum_colonies", MAX_COLONIES),
    ("maximum", MAX_COLONIES),
    ("max", MAX_COLONIES),
    ("colonies_lost", LOST_COLONIES),
    ("lost", LOST_COLONIES),
    ("percent_lost", PERCENT_LOST),
    ("lost_percent", PERCENT_LOST),
    ("pct_lost", PERCENT_LOST),
    ("percent_of_colonies_lost", PERCENT_LOST),
    ("colonies_added", ADDED_COLONIES),
    ("added", ADDED_COLONIES),
    ("colonies_renovated", RENOVATED_COLONIES),
    ("renovated", RENOVATED_COLONIES),
    ("renovated_percent", PERCENT_RENOVATED),
    ("pct_renovated", PERCENT_RENOVATED),
    ("percent_of_colonies_renovated", PERCENT_RENOVATED),
    ("varroa", VARROA_MITES),
    ("other_pests/parasites", OTHER_PESTS),
    ("other_pests", OTHER_PESTS),
    ("other_pests_and_parasites", OTHER_PESTS),
];

pub fn column_kind(name: &str) -> Option<ColumnKind> {
    CANONICAL_COLUMNS
        .iter()
        .find(|(canonical, _)| *canonical == name)
        .map(|(_, kind)| *kind)
}

/// Trims a header and joins its whitespace-separated words with `separator`.
///
/// Also strips a byte-order mark, which USDA exports sometimes carry on the
/// first header.
pub fn collapse_whitespace(raw: &str, separator: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(separator)
}

/// Trims a header and replaces each run of whitespace with one underscore.
pub fn underscore_normalize(raw: &str) -> String {
    collapse_whitespace(raw, "_")
}

/// Lowercases an underscore-normalized header for alias lookups.
pub fn alias_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Default alias table: every canonical name maps to itself, plus the known
/// USDA header variants.
pub fn default_aliases() -> BTreeMap<String, String> {
    let mut aliases = BTreeMap::new();
    for (canonical, _) in CANONICAL_COLUMNS {
        aliases.insert(alias_key(canonical), (*canonical).to_string());
    }
    for (variant, canonical) in HEADER_VARIANTS {
        aliases.insert(alias_key(variant), (*canonical).to_string());
    }
    aliases
}

const STATES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("DC", "District of Columbia"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

/// National and grouped rows published alongside the states.
const AGGREGATES: &[&str] = &["United States", "US", "U.S.", "Other States"];

/// True for the 50 states, DC, their postal codes and the USDA aggregates.
pub fn is_known_state(name: &str) -> bool {
    let name = name.trim();
    let is_state = STATES
        .iter()
        .any(|(code, full)| code.eq_ignore_ascii_case(name) || full.eq_ignore_ascii_case(name));
    is_state
        || AGGREGATES
            .iter()
            .any(|aggregate| aggregate.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_alias_to_themselves() {
        let aliases = default_aliases();
        for (canonical, _) in CANONICAL_COLUMNS {
            assert_eq!(
                aliases.get(&alias_key(canonical)).map(String::as_str),
                Some(*canonical)
            );
        }
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(underscore_normalize("  Lost   colonies "), "Lost_colonies");
        assert_eq!(underscore_normalize("Percent\tlost"), "Percent_lost");
        assert_eq!(underscore_normalize("\u{feff}State"), "State");
        assert_eq!(underscore_normalize("Lost_colonies"), "Lost_colonies");
        assert_eq!(collapse_whitespace(" Lost \t colonies", " "), "Lost colonies");
    }

    #[test]
    fn recognizes_states_and_aggregates() {
        assert!(is_known_state("Alabama"));
        assert!(is_known_state("al"));
        assert!(is_known_state("District of Columbia"));
        assert!(is_known_state("United States"));
        assert!(!is_known_state("Atlantis"));
        assert_eq!(STATES.len(), 51);
    }
}
