//! Training roster view logic: the read-through record cache, free-text
//! search, pagination and the per-record details block.

use crate::models::training::TrainingRecord;

/// The full training record set, fetched wholesale from the store and
/// mutated locally only after a successful write echo.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<TrainingRecord>,
}

impl Roster {
    pub fn new(records: Vec<TrainingRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[TrainingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: i64) -> Option<&TrainingRecord> {
        self.records.iter().find(|r| r.id == Some(id))
    }

    /// Case-insensitive substring filter over every displayed field.
    /// A record matches if ANY of the eight fields contains the term;
    /// an empty term returns the full set.
    pub fn search(&self, term: &str) -> Vec<&TrainingRecord> {
        let needle = term.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.display_fields()
                    .iter()
                    .any(|f| f.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Replace the record matching the echo's id. Returns false when no
    /// record carries that id, leaving the set untouched.
    pub fn apply_update(&mut self, updated: TrainingRecord) -> bool {
        match self
            .records
            .iter_mut()
            .find(|r| r.id.is_some() && r.id == updated.id)
        {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    /// Append the store-returned record after a successful create.
    pub fn append(&mut self, record: TrainingRecord) {
        self.records.push(record);
    }
}

/// Slice of a filtered view for one page. Any non-positive page size
/// (`-1` by convention) means all rows, no paging; otherwise rows
/// `[page*size, page*size+size)` clipped to the view's length.
pub fn paginate<'a, 'r>(
    rows: &'a [&'r TrainingRecord],
    page: usize,
    page_size: i64,
) -> &'a [&'r TrainingRecord] {
    if page_size <= 0 {
        return rows;
    }

    let size = page_size as usize;
    let start = page.saturating_mul(size).min(rows.len());
    let end = (start + size).min(rows.len());
    &rows[start..end]
}

/// Human-readable multi-line details for one record, as produced by
/// the row-level copy operation. Titles are re-joined with ", ".
pub fn record_details(record: &TrainingRecord) -> String {
    format!(
        "Name: {}\n\
         Training Titles: {}\n\
         Training Type: {}\n\
         Mode: {}\n\
         Planned Date: {}\n\
         Start Date: {}\n\
         End Date: {}\n\
         Status: {}",
        record.name,
        record.titles().join(", "),
        record.training_type,
        record.mode,
        record.planned_date,
        record.start_date,
        record.end_date,
        record.status,
    )
}
