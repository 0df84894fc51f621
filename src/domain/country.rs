//! Read-only country table mapping ISO 3166-1 alpha-2 codes to dial codes.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Country list embedded at compile time.
static COUNTRIES_JSON: &str = include_str!("../../assets/countries.json");

static COUNTRY_TABLE: Lazy<CountryTable> = Lazy::new(|| {
    CountryTable::from_json(COUNTRIES_JSON).expect("Failed to parse embedded country table")
});

/// A single country record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code, upper case (e.g. "FR")
    pub code: String,

    /// International calling prefix including the `+` (e.g. "+33")
    pub dial_code: String,

    /// English display name
    pub name: String,
}

/// Immutable lookup from alpha-2 code to [`Country`].
///
/// There is no mutation API: the table is built once and only read afterwards.
#[derive(Debug, Clone)]
pub struct CountryTable {
    by_code: HashMap<String, Country>,
}

impl CountryTable {
    /// The table shipped with the binary.
    pub fn global() -> &'static CountryTable {
        &COUNTRY_TABLE
    }

    /// Build a table from a JSON array of `{code, dial_code, name}` records.
    ///
    /// Codes are upper-cased; a later duplicate replaces an earlier one.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let entries: Vec<Country> = serde_json::from_str(json)?;
        Ok(Self::from_countries(entries))
    }

    /// Build a table from already-parsed records.
    pub fn from_countries(countries: impl IntoIterator<Item = Country>) -> Self {
        let by_code = countries
            .into_iter()
            .map(|mut country| {
                country.code = country.code.to_ascii_uppercase();
                (country.code.clone(), country)
            })
            .collect();
        Self { by_code }
    }

    /// Look up a country by alpha-2 code, ignoring case and surrounding whitespace.
    pub fn get(&self, code: &str) -> Option<&Country> {
        self.by_code.get(&code.trim().to_ascii_uppercase())
    }

    /// Number of countries in the table.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// Iterate over all countries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.by_code.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_table_loads() {
        let table = CountryTable::from_json(COUNTRIES_JSON).unwrap();
        assert!(table.len() > 200);
        assert!(table
            .iter()
            .all(|c| c.code.len() == 2 && c.dial_code.starts_with('+')));
    }

    #[test]
    fn test_known_dial_codes() {
        let table = CountryTable::global();
        assert_eq!(table.get("FR").unwrap().dial_code, "+33");
        assert_eq!(table.get("US").unwrap().dial_code, "+1");
        assert_eq!(table.get("DE").unwrap().dial_code, "+49");
        assert_eq!(table.get("GB").unwrap().name, "United Kingdom");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = CountryTable::global();
        assert_eq!(table.get("fr"), table.get("FR"));
        assert_eq!(table.get(" Fr "), table.get("FR"));
    }

    #[test]
    fn test_unknown_code() {
        let table = CountryTable::global();
        assert!(table.get("ZZ").is_none());
        assert!(table.get("").is_none());
    }

    #[test]
    fn test_from_countries_normalizes_codes() {
        let table = CountryTable::from_countries(vec![Country {
            code: "fr".to_string(),
            dial_code: "+33".to_string(),
            name: "France".to_string(),
        }]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("FR").unwrap().code, "FR");
    }
}
