use chrono::Weekday;

use crate::errors::{AppError, AppResult};

/// Office preference per working weekday (Mon..Fri).
/// Transient input: consumed once by the apply operation to derive a
/// full month mapping, never persisted on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WfoPreference {
    pub mon: bool,
    pub tue: bool,
    pub wed: bool,
    pub thu: bool,
    pub fri: bool,
}

impl WfoPreference {
    /// Parse a comma-separated weekday list, e.g. `mon,wed,fri`.
    /// Names are case-insensitive; Saturday/Sunday are rejected since
    /// weekends carry no preference.
    pub fn from_day_list(list: &str) -> AppResult<Self> {
        let mut prefs = WfoPreference::default();

        for raw in list.split(',') {
            let day = raw.trim();
            if day.is_empty() {
                continue;
            }
            match day.to_lowercase().as_str() {
                "mon" | "monday" => prefs.mon = true,
                "tue" | "tuesday" => prefs.tue = true,
                "wed" | "wednesday" => prefs.wed = true,
                "thu" | "thursday" => prefs.thu = true,
                "fri" | "friday" => prefs.fri = true,
                other => return Err(AppError::InvalidWeekday(other.to_string())),
            }
        }

        Ok(prefs)
    }

    /// Whether the given weekday is marked "prefers office".
    /// Weekends are never preferred.
    pub fn prefers(&self, weekday: Weekday) -> bool {
        match weekday {
            Weekday::Mon => self.mon,
            Weekday::Tue => self.tue,
            Weekday::Wed => self.wed,
            Weekday::Thu => self.thu,
            Weekday::Fri => self.fri,
            Weekday::Sat | Weekday::Sun => false,
        }
    }
}
