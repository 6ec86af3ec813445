//! Row data for browsing
//! Loads rows from a text file or generates a deterministic sample set

use std::fs;
use std::path::PathBuf;

use crate::errors::{PagerError, Result};

/// Where a dataset's rows came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// One row per non-empty line of a text file
    File(PathBuf),

    /// Generated sample rows
    Sample(usize),
}

/// The rows behind one paginated view
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<String>,
    source: DataSource,
}

impl Dataset {
    /// Load rows from a text file, one per non-empty line
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let rows = read_rows(path)?;
        Ok(Self {
            rows,
            source: DataSource::File(path.clone()),
        })
    }

    /// Generate a deterministic inventory-style sample of `count` rows
    pub fn sample(count: usize) -> Self {
        Self {
            rows: sample_rows(count),
            source: DataSource::Sample(count),
        }
    }

    /// Total row count
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row provenance
    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Short human label for the source
    pub fn source_label(&self) -> String {
        match &self.source {
            DataSource::File(path) => path.display().to_string(),
            DataSource::Sample(count) => format!("generated sample ({} rows)", count),
        }
    }

    /// Re-read rows from the original source and return the new count
    ///
    /// The caller feeds the count back into its paging state so the view
    /// follows the data.
    pub fn reload(&mut self) -> Result<usize> {
        match &self.source {
            DataSource::File(path) => {
                self.rows = read_rows(path)?;
            }
            DataSource::Sample(count) => {
                self.rows = sample_rows(*count);
            }
        }
        Ok(self.rows.len())
    }

    /// Rows for a 1-indexed inclusive range
    ///
    /// Accepts the bounds produced by `visible_range`; an inverted or
    /// out-of-range request yields an empty slice.
    pub fn page_slice(&self, start: usize, end: usize) -> &[String] {
        if start == 0 || start > end || start > self.rows.len() {
            return &[];
        }
        let hi = end.min(self.rows.len());
        &self.rows[start - 1..hi]
    }
}

fn read_rows(path: &PathBuf) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| PagerError::DatasetError(format!("Failed to read {}: {}", path.display(), e)))?;

    Ok(contents
        .lines()
        .map(|line| line.trim_end())
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
        .collect())
}

fn sample_rows(count: usize) -> Vec<String> {
    const ITEMS: [&str; 8] = [
        "Hex bolt M8",
        "Flange nut M8",
        "Washer 8mm",
        "Wood screw 4x40",
        "Anchor plug 6mm",
        "Threaded rod M10",
        "Spring washer 10mm",
        "Machine screw M5",
    ];

    (1..=count)
        .map(|n| {
            let item = ITEMS[(n - 1) % ITEMS.len()];
            let stock = (n * 37) % 500;
            let aisle = (b'A' + ((n - 1) / 20 % 6) as u8) as char;
            let shelf = (n - 1) % 20 + 1;
            format!("SKU-{:04}  {:<18}  stock {:>3}  bin {}{:02}", n, item, stock, aisle, shelf)
        })
        .collect()
}
