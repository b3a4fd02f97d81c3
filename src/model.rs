//! Data model for the job-market API payloads.
//!
//! These types mirror the JSON returned by the backend:
//! - `GET /api/jobs` → `[JobRecord]`
//! - `GET /api/analysis` → `AnalysisSummary`

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One scraped job posting.
///
/// The API provides no identifier; the UI addresses rows by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub url: String,
}

impl JobRecord {
    /// Case-insensitive substring match on title or company.
    pub fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.company.to_lowercase().contains(&needle)
    }
}

/// Label → occurrence count mapping that keeps document order.
///
/// JSON object keys are yielded in the order they appear on the wire, so
/// the charts show bars in the order the backend ranked them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelCounts(Vec<(String, u64)>);

impl LabelCounts {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends an entry. A repeated label replaces the earlier count in place.
    pub fn insert(&mut self, label: impl Into<String>, count: u64) {
        let label = label.into();
        match self.0.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = count,
            None => self.0.push((label, count)),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.0.iter().find(|(l, _)| l == label).map(|(_, c)| *c)
    }

    /// Iterates entries in mapping order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(l, c)| (l.as_str(), *c))
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for LabelCounts {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut counts = LabelCounts::new();
        for (label, count) in iter {
            counts.insert(label, count);
        }
        counts
    }
}

impl Serialize for LabelCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, count) in &self.0 {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

struct LabelCountsVisitor;

impl<'de> Visitor<'de> for LabelCountsVisitor {
    type Value = LabelCounts;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping labels to non-negative integer counts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut counts = LabelCounts(Vec::with_capacity(access.size_hint().unwrap_or(0)));
        while let Some((label, count)) = access.next_entry::<String, u64>()? {
            counts.insert(label, count);
        }
        Ok(counts)
    }
}

impl<'de> Deserialize<'de> for LabelCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LabelCountsVisitor)
    }
}

/// Precomputed aggregate counts served by `/api/analysis`.
///
/// A mapping missing from the payload is treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    #[serde(default)]
    pub top_titles: LabelCounts,
    #[serde(default)]
    pub top_companies: LabelCounts,
}

/// A (label, count) pair ready for bar-chart rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartEntry {
    pub name: String,
    pub count: u64,
}
