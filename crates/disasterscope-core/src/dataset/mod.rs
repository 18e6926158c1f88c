//! In-memory disaster dataset.
//!
//! The dataset is loaded once from CSV at startup and never mutated afterward.
//! Consumers only ever get shared references to it; filtering returns borrowed
//! rows instead of copies.

pub mod model;

pub use model::{DisasterGroup, DisasterRecord};

use std::collections::BTreeSet;
use std::fs::File;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::filter::{Selection, YearRange, filter_records};

/// Error type for dataset loading failures.
#[derive(Debug)]
pub enum LoadError {
    /// The CSV file could not be opened or read.
    Io(io::Error),
    /// A row could not be parsed (bad header, unknown group, non-numeric cell).
    Csv(csv::Error),
    /// The file parsed but contained no records.
    EmptyDataset,
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "I/O error: {}", e),
            LoadError::Csv(e) => write!(f, "CSV error: {}", e),
            LoadError::EmptyDataset => write!(f, "dataset contains no records"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        LoadError::Csv(e)
    }
}

/// Immutable table of disaster records plus metadata derived at load time.
#[derive(Debug)]
pub struct Dataset {
    records: Vec<DisasterRecord>,
    /// Distinct countries, sorted.
    countries: Vec<String>,
    /// Distinct disaster types, sorted.
    disaster_types: Vec<String>,
    /// Smallest and largest year present.
    years: YearRange,
}

impl Dataset {
    /// Loads a dataset from a CSV file.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        let dataset = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            records = dataset.len(),
            countries = dataset.countries.len(),
            disaster_types = dataset.disaster_types.len(),
            year_from = dataset.years.from,
            year_to = dataset.years.to,
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Loads a dataset from any CSV source with a header row.
    ///
    /// Columns are matched by header name; extra columns are ignored.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, LoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let records = rdr
            .deserialize::<DisasterRecord>()
            .collect::<Result<Vec<_>, _>>()?;
        debug!(records = records.len(), "parsed CSV rows");
        Self::from_records(records)
    }

    /// Builds a dataset from already parsed records.
    pub fn from_records(records: Vec<DisasterRecord>) -> Result<Self, LoadError> {
        let (Some(min), Some(max)) = (
            records.iter().map(|r| r.year).min(),
            records.iter().map(|r| r.year).max(),
        ) else {
            return Err(LoadError::EmptyDataset);
        };

        let countries: BTreeSet<&str> = records.iter().map(|r| r.country.as_str()).collect();
        let disaster_types: BTreeSet<&str> =
            records.iter().map(|r| r.disaster_type.as_str()).collect();

        Ok(Self {
            countries: countries.into_iter().map(String::from).collect(),
            disaster_types: disaster_types.into_iter().map(String::from).collect(),
            years: YearRange::new(min, max),
            records,
        })
    }

    pub fn records(&self) -> &[DisasterRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn disaster_types(&self) -> &[String] {
        &self.disaster_types
    }

    /// Year slider bounds: `[min year, max year]` over all records.
    pub fn year_bounds(&self) -> YearRange {
        self.years
    }

    /// Returns the records matching `selection`, in dataset order.
    pub fn select(&self, selection: &Selection) -> Vec<&DisasterRecord> {
        filter_records(&self.records, selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{SAMPLE_CSV, sample_dataset};
    use std::io::Write;

    #[test]
    fn test_load_sample() {
        let ds = sample_dataset();
        assert_eq!(ds.len(), 12);
        assert!(!ds.is_empty());
        assert_eq!(ds.year_bounds(), YearRange::new(1993, 2023));
        assert_eq!(ds.countries().len(), 8);
        assert_eq!(ds.countries()[0], "Haiti");
        assert_eq!(ds.countries()[7], "United States of America");
        assert_eq!(
            ds.disaster_types(),
            [
                "Drought",
                "Earthquake",
                "Epidemic",
                "Flood",
                "Impact",
                "Industrial accident",
                "Miscellaneous accident",
                "Storm",
                "Transport accident",
            ]
        );
    }

    #[test]
    fn test_missing_values_are_none() {
        let ds = sample_dataset();
        let first = &ds.records()[0];
        assert_eq!(first.dis_no, "1993-0001-IND");
        assert_eq!(first.group, DisasterGroup::Natural);
        assert_eq!(first.total_deaths, Some(120.0));
        assert_eq!(first.reconstruction_costs, None);
        assert_eq!(first.total_damages, Some(2000.0));

        let epidemic = &ds.records()[10];
        assert_eq!(epidemic.disaster_type, "Epidemic");
        assert_eq!(epidemic.total_deaths, None);
        assert_eq!(epidemic.no_affected, None);
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();
        let ds = Dataset::from_path(file.path()).unwrap();
        assert_eq!(ds.len(), 12);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dataset::from_path(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_header_only_is_empty() {
        let header = SAMPLE_CSV.lines().next().unwrap();
        let err = Dataset::from_reader(header.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::EmptyDataset));
    }

    #[test]
    fn test_unknown_group_fails() {
        let header = SAMPLE_CSV.lines().next().unwrap();
        let csv = format!(
            "{header}\n1993-0099-FRA,1993,France,FRA,Biological,Epidemic,Epidemic,1,1,,,40000\n"
        );
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
        assert!(err.to_string().starts_with("CSV error:"));
    }

    #[test]
    fn test_non_numeric_deaths_fails() {
        let header = SAMPLE_CSV.lines().next().unwrap();
        let csv = format!(
            "{header}\n1993-0099-FRA,1993,France,FRA,Natural,Hydrological,Flood,many,1,,,40000\n"
        );
        assert!(matches!(
            Dataset::from_reader(csv.as_bytes()),
            Err(LoadError::Csv(_))
        ));
    }
}
