//! Month forecast grid: the per-day state mapping, the activation
//! cycle, the apply-preference pass and the counter recompute.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceMonth;
use crate::models::day_state::DayState;
use crate::models::preference::WfoPreference;
use crate::utils::date;

/// In-memory month snapshot for one (identity, year-month) pair.
///
/// Weekends are always `BH` regardless of the mapping; the counters
/// only ever describe weekday cells. After a local mutation the
/// counters are recomputed from the mapping; after a hydrate from the
/// store they are taken verbatim from the stored record.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    states: BTreeMap<u32, DayState>,
    pub to: i32,
    pub th: i32,
    pub tl: i32,
}

impl MonthGrid {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(AppError::InvalidMonth(date::month_key(year, month)));
        }
        Ok(Self {
            year,
            month,
            states: BTreeMap::new(),
            to: 0,
            th: 0,
            tl: 0,
        })
    }

    /// Build from a `YYYY-MM` selector.
    pub fn for_month(key: &str) -> AppResult<Self> {
        let (year, month) = date::parse_month(key)?;
        Self::new(year, month)
    }

    pub fn month_key(&self) -> String {
        date::month_key(self.year, self.month)
    }

    pub fn days_in_month(&self) -> u32 {
        date::days_in_month(self.year, self.month)
    }

    pub fn date_of(&self, day: u32) -> AppResult<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
            .ok_or_else(|| AppError::InvalidDay(day, self.month_key()))
    }

    pub fn is_weekend(&self, day: u32) -> AppResult<bool> {
        Ok(date::is_weekend(self.date_of(day)?))
    }

    /// Effective state of a cell. Weekends are `BH` whether or not the
    /// mapping carries an entry; weekdays with no entry are `None`.
    pub fn state(&self, day: u32) -> AppResult<Option<DayState>> {
        if self.is_weekend(day)? {
            return Ok(Some(DayState::Weekend));
        }
        Ok(self.states.get(&day).copied())
    }

    /// Recompute the entire mapping from a weekday preference set:
    /// preferred weekday → O, weekend → BH, otherwise H. Full
    /// overwrite; prior manual edits for the month are discarded.
    pub fn apply_preferences(&mut self, prefs: &WfoPreference) {
        let mut states = BTreeMap::new();

        for day in 1..=self.days_in_month() {
            // day is always in range here
            let d = self.date_of(day).unwrap();
            let state = if prefs.prefers(d.weekday()) {
                DayState::Office
            } else if date::is_weekend(d) {
                DayState::Weekend
            } else {
                DayState::Home
            };
            states.insert(day, state);
        }

        self.states = states;
        self.recompute_counts();
    }

    /// Step one weekday cell through the activation ring O → H → L → O
    /// and recompute the counters. A cell with no recorded state is
    /// left unchanged and `None` is returned. Weekend cells are not
    /// editable.
    pub fn cycle(&mut self, day: u32) -> AppResult<Option<DayState>> {
        if self.is_weekend(day)? {
            return Err(AppError::WeekendDay(self.date_of(day)?.to_string()));
        }

        let next = match self.states.get(&day) {
            Some(current) => {
                let next = current.cycled();
                self.states.insert(day, next);
                Some(next)
            }
            None => None,
        };

        self.recompute_counts();
        Ok(next)
    }

    /// Set one weekday cell directly. Weekend cells are not editable
    /// and `BH` cannot be assigned by hand.
    pub fn set_state(&mut self, day: u32, state: DayState) -> AppResult<()> {
        if self.is_weekend(day)? {
            return Err(AppError::WeekendDay(self.date_of(day)?.to_string()));
        }
        if state == DayState::Weekend {
            return Err(AppError::InvalidDayState("BH".to_string()));
        }

        self.states.insert(day, state);
        self.recompute_counts();
        Ok(())
    }

    /// Counters derived from the current mapping, weekday cells only.
    /// Weekends are re-excluded here even though the cycle cannot
    /// reach them with an O/H/L state.
    fn recompute_counts(&mut self) {
        let mut to = 0;
        let mut th = 0;
        let mut tl = 0;

        for day in 1..=self.days_in_month() {
            let d = self.date_of(day).unwrap();
            if date::is_weekend(d) {
                continue;
            }
            match self.states.get(&day) {
                Some(DayState::Office) => to += 1,
                Some(DayState::Home) => th += 1,
                Some(DayState::Leave) => tl += 1,
                _ => {}
            }
        }

        self.to = to;
        self.th = th;
        self.tl = tl;
    }

    /// Hydrate from a stored record. The mapping is rebuilt from the
    /// per-day entries; the counters are taken from the stored values,
    /// not recomputed (trust-the-store-on-read).
    pub fn hydrate(record: &AttendanceMonth) -> AppResult<Self> {
        let mut grid = Self::for_month(&record.month)?;

        for (iso, code) in record.entries() {
            let d = date::parse_date(iso).ok_or_else(|| AppError::InvalidDate(iso.to_string()))?;
            let state = DayState::from_code(code)
                .ok_or_else(|| AppError::InvalidDayState(code.to_string()))?;
            grid.states.insert(d.day(), state);
        }

        grid.to = record.to;
        grid.th = record.th;
        grid.tl = record.tl;
        Ok(grid)
    }

    /// Serialize the full mapping for persistence: every recorded day
    /// becomes one `{iso date: code}` entry, plus the counters and the
    /// identity/month key.
    pub fn to_record(&self, identity: &str) -> AttendanceMonth {
        let values = self
            .states
            .iter()
            .map(|(day, state)| {
                let iso = format!("{:04}-{:02}-{:02}", self.year, self.month, day);
                let mut entry = BTreeMap::new();
                entry.insert(iso, state.code().to_string());
                entry
            })
            .collect();

        AttendanceMonth {
            id: None,
            name: identity.to_string(),
            month: self.month_key(),
            values,
            to: self.to,
            th: self.th,
            tl: self.tl,
        }
    }

    /// Number of weekend days in the month.
    pub fn weekend_days(&self) -> u32 {
        (1..=self.days_in_month())
            .filter(|d| date::is_weekend(self.date_of(*d).unwrap()))
            .count() as u32
    }
}
