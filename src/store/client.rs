//! Remote record store, accessed as plain resource collections over
//! HTTP with JSON bodies. No retries, no request cancellation: a
//! failed call surfaces immediately and leaves local state alone.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceMonth;
use crate::models::identity::UserProfile;
use crate::models::training::TrainingRecord;

const HTTP_TIMEOUT_SECS: u64 = 30;

pub struct StoreClient {
    base_url: String,
    http: Client,
}

impl StoreClient {
    pub fn new(base_url: &str) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    // ---------------------------
    // Training roster collection
    // ---------------------------

    /// `GET /trainingData` → the full record set.
    pub fn fetch_training(&self) -> AppResult<Vec<TrainingRecord>> {
        let resp = self
            .http
            .get(self.url("trainingData"))
            .send()?
            .error_for_status()?;
        Ok(resp.json()?)
    }

    /// `PUT /trainingData/{id}` with the full body → the store echo.
    pub fn update_training(&self, id: i64, record: &TrainingRecord) -> AppResult<TrainingRecord> {
        let resp = self
            .http
            .put(self.url(&format!("trainingData/{id}")))
            .json(record)
            .send()?
            .error_for_status()?;
        Ok(resp.json()?)
    }

    /// `POST /trainingData` sans id → the created record with its
    /// store-assigned id.
    pub fn create_training(&self, record: &TrainingRecord) -> AppResult<TrainingRecord> {
        let resp = self
            .http
            .post(self.url("trainingData"))
            .json(record)
            .send()?
            .error_for_status()?;
        Ok(resp.json()?)
    }

    // ---------------------------
    // Users collection
    // ---------------------------

    /// `GET /users?email=...` → 0 or 1 profile.
    pub fn find_user(&self, email: &str) -> AppResult<Option<UserProfile>> {
        let resp = self
            .http
            .get(self.url("users"))
            .query(&[("email", email)])
            .send()?
            .error_for_status()?;
        let mut users: Vec<UserProfile> = resp.json()?;
        Ok(if users.is_empty() {
            None
        } else {
            Some(users.remove(0))
        })
    }

    /// Resolve the composite identity key for the configured email, or
    /// fail when the store knows no such user.
    pub fn resolve_identity(&self, email: &str) -> AppResult<UserProfile> {
        self.find_user(email)?
            .ok_or_else(|| AppError::UserNotFound(email.to_string()))
    }

    // ---------------------------
    // Attendance collection
    // ---------------------------

    /// `GET /employeeAttendances?name=..&month=..` → 0 or 1 snapshot.
    pub fn fetch_attendance(&self, name: &str, month: &str) -> AppResult<Option<AttendanceMonth>> {
        let resp = self
            .http
            .get(self.url("employeeAttendances"))
            .query(&[("name", name), ("month", month)])
            .send()?
            .error_for_status()?;
        let mut records: Vec<AttendanceMonth> = resp.json()?;
        Ok(if records.is_empty() {
            None
        } else {
            Some(records.remove(0))
        })
    }

    pub fn update_attendance(
        &self,
        id: i64,
        record: &AttendanceMonth,
    ) -> AppResult<AttendanceMonth> {
        let resp = self
            .http
            .put(self.url(&format!("employeeAttendances/{id}")))
            .json(record)
            .send()?
            .error_for_status()?;
        Ok(resp.json()?)
    }

    pub fn create_attendance(&self, record: &AttendanceMonth) -> AppResult<AttendanceMonth> {
        let resp = self
            .http
            .post(self.url("employeeAttendances"))
            .json(record)
            .send()?
            .error_for_status()?;
        Ok(resp.json()?)
    }
}
