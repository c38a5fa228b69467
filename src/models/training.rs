use serde::{Deserialize, Serialize};

/// One training roster row as stored by the remote collection.
/// Field names follow the store's wire shape (PascalCase keys,
/// store-assigned numeric `id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRecord {
    /// Store-assigned identity; absent on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(rename = "Name")]
    pub name: String,

    /// Comma-separated list of training titles.
    #[serde(rename = "TrainingTitle")]
    pub training_title: String,

    #[serde(rename = "TrainingType")]
    pub training_type: String,

    #[serde(rename = "Mode")]
    pub mode: String,

    /// Dates are kept as the store's strings; the store owns the format.
    #[serde(rename = "PlannedDate")]
    pub planned_date: String,

    #[serde(rename = "StartDate")]
    pub start_date: String,

    #[serde(rename = "EndDate")]
    pub end_date: String,

    #[serde(rename = "Status", default)]
    pub status: String,
}

impl TrainingRecord {
    /// Individual titles, trimmed, from the comma-separated field.
    pub fn titles(&self) -> Vec<&str> {
        self.training_title
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// The eight displayed fields, in table column order.
    /// Used by search matching and table rendering.
    pub fn display_fields(&self) -> [&str; 8] {
        [
            self.name.as_str(),
            self.training_title.as_str(),
            self.training_type.as_str(),
            self.mode.as_str(),
            self.planned_date.as_str(),
            self.start_date.as_str(),
            self.end_date.as_str(),
            self.status.as_str(),
        ]
    }
}
