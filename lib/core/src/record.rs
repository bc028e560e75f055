use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// A single employee row: column name to scalar value, in column order
pub type Record = Map<String, Value>;

/// A non-empty, ordered collection of employee records
///
/// A record's position is its identifier for selection and for reporting
/// neighbors.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Create a dataset, rejecting an empty record list
    pub fn new(records: Vec<Record>) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::EmptyDataset);
        }
        Ok(Self { records })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Column names of the first record, in its key order
    pub fn columns(&self) -> Vec<&str> {
        self.records
            .first()
            .map(|r| r.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Validate a caller-supplied index and bind it to this dataset
    pub fn select(&self, index: i64) -> Result<Selection<'_>> {
        let len = self.records.len();
        match usize::try_from(index) {
            Ok(i) if i < len => Ok(Selection { dataset: self, index: i }),
            _ => Err(Error::IndexOutOfRange { index, len }),
        }
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

/// A dataset together with a validated target index
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    dataset: &'a Dataset,
    index: usize,
}

impl<'a> Selection<'a> {
    #[inline]
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn target(&self) -> &'a Record {
        &self.dataset.records[self.index]
    }
}
