use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One persisted month snapshot: the full per-day state mapping plus
/// the three aggregate counters, keyed by (identity, year-month).
///
/// Wire shape: `values` is an array of single-key objects, each mapping
/// one ISO calendar date to a day-state code, e.g.
/// `{ "2024-02-05": "O" }`. `TO`/`TH`/`TL` are the stored counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceMonth {
    /// Store-assigned identity; absent on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Identity key, `Name(EmpId)`.
    pub name: String,

    /// `YYYY-MM`.
    pub month: String,

    pub values: Vec<BTreeMap<String, String>>,

    #[serde(rename = "TO")]
    pub to: i32,

    #[serde(rename = "TH")]
    pub th: i32,

    #[serde(rename = "TL")]
    pub tl: i32,
}

impl AttendanceMonth {
    /// Flatten the single-key objects into (iso date, code) pairs,
    /// in stored order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .flat_map(|m| m.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}
