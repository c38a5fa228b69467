// src/export/model.rs

use crate::models::training::TrainingRecord;

/// Default download artifact name, as produced by the original surface.
pub const DEFAULT_EXPORT_FILE: &str = "training_data.xlsx";

/// Worksheet name of the single exported sheet.
pub(crate) const SHEET_NAME: &str = "Training Data";

/// Column headers, in wire field order.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "Name",
        "TrainingTitle",
        "TrainingType",
        "Mode",
        "PlannedDate",
        "StartDate",
        "EndDate",
        "Status",
    ]
}

/// One record as a row of cell strings, same order as the headers.
pub(crate) fn record_to_row(r: &TrainingRecord) -> Vec<String> {
    vec![
        r.id.map(|id| id.to_string()).unwrap_or_default(),
        r.name.clone(),
        r.training_title.clone(),
        r.training_type.clone(),
        r.mode.clone(),
        r.planned_date.clone(),
        r.start_date.clone(),
        r.end_date.clone(),
        r.status.clone(),
    ]
}
