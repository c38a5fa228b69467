// src/export/mod.rs

mod fs_utils;
mod model;
mod xlsx;

pub use model::DEFAULT_EXPORT_FILE;
pub use xlsx::export_roster_xlsx;

use crate::ui::messages::success;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}
