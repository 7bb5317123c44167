use serde::Deserialize;

/// One exported headword and how often it is attested.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FrequencyRow {
    pub entry_name: String,
    pub total_count: u64,
}

impl FrequencyRow {
    pub fn new(entry_name: impl Into<String>, total_count: u64) -> Self {
        Self {
            entry_name: entry_name.into(),
            total_count,
        }
    }
}

/// Rows in file order. Built once by the loader and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    rows: Vec<FrequencyRow>,
}

impl FrequencyTable {
    pub fn from_rows(rows: Vec<FrequencyRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[FrequencyRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The `total_count` column.
    pub fn counts(&self) -> Vec<u64> {
        self.rows.iter().map(|r| r.total_count).collect()
    }

    /// The `entry_name` column.
    pub fn entry_names(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.entry_name.clone()).collect()
    }
}

impl FromIterator<FrequencyRow> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = FrequencyRow>>(iter: I) -> Self {
        Self::from_rows(iter.into_iter().collect())
    }
}
