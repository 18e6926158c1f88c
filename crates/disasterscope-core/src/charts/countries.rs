//! "Number of disaster per country": choropleth input keyed by ISO code.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::dataset::DisasterRecord;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub struct CountryCount {
    /// Number of disasters.
    pub count: u64,
    /// Natural log of `count`, used for the color scale.
    pub log_count: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub struct DisastersByCountry {
    /// ISO code -> counts. Countries without matching rows are absent.
    pub countries: BTreeMap<String, CountryCount>,
}

pub fn disasters_by_country(rows: &[&DisasterRecord]) -> DisastersByCountry {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for r in rows {
        *counts.entry(r.iso.as_str()).or_default() += 1;
    }

    // ln(0) is undefined: only strictly positive counts are transformed.
    let countries = counts
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .map(|(iso, count)| {
            (
                iso.to_string(),
                CountryCount {
                    count,
                    log_count: (count as f64).ln(),
                },
            )
        })
        .collect();

    DisastersByCountry { countries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{ALL, Selection, YearRange};
    use crate::fixtures::sample_dataset;

    #[test]
    fn test_counts_and_log() {
        let ds = sample_dataset();
        let rows = ds.select(&Selection::everything(YearRange::new(1993, 2023)));
        let map = disasters_by_country(&rows).countries;

        assert_eq!(map.len(), 8);
        assert_eq!(map["USA"].count, 4);
        assert!((map["USA"].log_count - 4f64.ln()).abs() < 1e-12);
        assert_eq!(map["IND"].count, 2);
        assert!((map["IND"].log_count - 2f64.ln()).abs() < 1e-12);
        assert_eq!(map["JPN"].count, 1);
        assert_eq!(map["JPN"].log_count, 0.0);
    }

    #[test]
    fn test_only_positive_counts() {
        let ds = sample_dataset();
        let sel = Selection::from_values(ALL, "Technological", &[ALL], YearRange::new(1993, 2023))
            .unwrap();
        let map = disasters_by_country(&ds.select(&sel)).countries;

        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["IND", "USA"]);
        assert!(map.values().all(|c| c.count > 0 && c.log_count.is_finite()));
    }
}
