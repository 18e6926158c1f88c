//! "Damage & Reconstruction costs": grouped yearly cost bars plus a mean GDP
//! per capita line on the secondary axis.

use std::collections::BTreeMap;

use serde::Serialize;

use super::add_reported;
use crate::dataset::DisasterRecord;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub struct YearCosts {
    pub year: i32,
    /// Sum of adjusted reconstruction costs ('000 US$).
    pub reconstruction: f64,
    /// Sum of adjusted total damages ('000 US$).
    pub damages: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub struct YearGdp {
    pub year: i32,
    /// Mean of the reported GDP per capita values for the year.
    pub gdp_per_capita: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub struct Costs {
    pub costs: Vec<YearCosts>,
    /// Years without any reported GDP value have no point here.
    pub gdp: Vec<YearGdp>,
}

#[derive(Default)]
struct YearAcc {
    reconstruction: f64,
    damages: f64,
    gdp_sum: f64,
    gdp_reported: u32,
}

pub fn costs(rows: &[&DisasterRecord]) -> Costs {
    let mut years: BTreeMap<i32, YearAcc> = BTreeMap::new();
    for r in rows {
        let acc = years.entry(r.year).or_default();
        add_reported(&mut acc.reconstruction, r.reconstruction_costs);
        add_reported(&mut acc.damages, r.total_damages);
        if let Some(gdp) = r.gdp_per_capita {
            acc.gdp_sum += gdp;
            acc.gdp_reported += 1;
        }
    }

    let mut out = Costs {
        costs: Vec::with_capacity(years.len()),
        gdp: Vec::with_capacity(years.len()),
    };
    for (year, acc) in years {
        out.costs.push(YearCosts {
            year,
            reconstruction: acc.reconstruction,
            damages: acc.damages,
        });
        if acc.gdp_reported > 0 {
            out.gdp.push(YearGdp {
                year,
                gdp_per_capita: acc.gdp_sum / acc.gdp_reported as f64,
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{ALL, Selection, YearRange};
    use crate::fixtures::sample_dataset;

    #[test]
    fn test_yearly_costs() {
        let ds = sample_dataset();
        let rows = ds.select(&Selection::everything(YearRange::new(1993, 2023)));
        let chart = costs(&rows);

        let got: Vec<(i32, f64, f64)> = chart
            .costs
            .iter()
            .map(|c| (c.year, c.reconstruction, c.damages))
            .collect();
        assert_eq!(
            got,
            [
                (1993, 500.0, 10_000.0),
                (1995, 0.0, 150_000.0),
                (2004, 1000.0, 4500.0),
                (2010, 0.0, 8000.0),
                (2013, 0.0, 10_033.0),
                (2020, 0.0, 0.0),
                (2023, 0.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_gdp_is_mean_not_sum() {
        let ds = sample_dataset();
        let rows = ds.select(&Selection::everything(YearRange::new(1993, 2023)));
        let gdp: Vec<(i32, f64)> = costs(&rows)
            .gdp
            .iter()
            .map(|g| (g.year, g.gdp_per_capita))
            .collect();

        assert_eq!(gdp.len(), 7);
        assert_eq!(gdp[0].0, 1993);
        assert!((gdp[0].1 - 26_600.0 / 3.0).abs() < 1e-9);
        assert_eq!(gdp[1], (1995, 35_500.0));
        // Somalia 2010 has no GDP value; only Haiti counts.
        assert_eq!(gdp[3], (2010, 700.0));
        assert_eq!(gdp[4], (2013, 8950.0));
    }

    #[test]
    fn test_year_without_gdp_keeps_cost_point() {
        let ds = sample_dataset();
        let sel =
            Selection::from_values("Somalia", ALL, &[ALL], YearRange::new(1993, 2023)).unwrap();
        let chart = costs(&ds.select(&sel));
        assert_eq!(
            chart.costs,
            [YearCosts {
                year: 2010,
                reconstruction: 0.0,
                damages: 0.0,
            }]
        );
        assert!(chart.gdp.is_empty());
    }
}
