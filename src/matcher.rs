//! Canonical-name matcher.
//!
//! [`ProseCollection`] indexes externally supplied prose records by
//! canonical name and answers best-match lookups for the builder. Lookup
//! is a pure function of the symbol's canonical name and the collection's
//! contents: exact match first, then an ASCII case-insensitive fallback.
//! A miss is a `None`, never an error.
//!
//! The fallback folds ASCII letters only. Canonical names containing
//! non-ASCII identifier characters still match exactly; they simply get
//! no case leniency, which keeps the fold locale-independent and the
//! folded index byte-stable.
//!
//! When several records collide under case folding, the lookup returns a
//! single implementation-defined pick (currently the last record indexed).
//! That behavior is documented ambiguity, not a stable tie-break contract.

use std::collections::HashMap;

use crate::error::{DocError, Result};
use crate::model::prose::ProseRecord;

/// An indexed, validated collection of prose records.
#[derive(Debug, Clone, Default)]
pub struct ProseCollection {
    records: Vec<ProseRecord>,
    exact: HashMap<String, usize>,
    folded: HashMap<String, usize>,
}

impl ProseCollection {
    /// Build a collection from the loosely typed shape external doc
    /// parsers hand over.
    ///
    /// Fails with [`DocError::MissingInput`] when the sequence itself is
    /// absent and with [`DocError::NullEntry`] when it contains an absent
    /// element; both errors name the `records` argument.
    pub fn new(records: Option<Vec<Option<ProseRecord>>>) -> Result<Self> {
        let records = records.ok_or(DocError::MissingInput { name: "records" })?;
        let records = records
            .into_iter()
            .map(|r| r.ok_or(DocError::NullEntry { name: "records" }))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_records(records))
    }

    /// Build a collection from an already strictly typed record list.
    pub fn from_records(records: Vec<ProseRecord>) -> Self {
        let mut exact = HashMap::with_capacity(records.len());
        let mut folded = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            exact.insert(record.name.clone(), i);
            folded.insert(record.name.to_ascii_lowercase(), i);
        }
        ProseCollection {
            records,
            exact,
            folded,
        }
    }

    /// Best-match lookup by canonical name: exact, then case-insensitive.
    pub fn try_find(&self, canonical: &str) -> Option<&ProseRecord> {
        if let Some(&i) = self.exact.get(canonical) {
            return Some(&self.records[i]);
        }
        self.folded
            .get(&canonical.to_ascii_lowercase())
            .map(|&i| &self.records[i])
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[ProseRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
