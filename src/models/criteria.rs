use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Filter form fields exactly as submitted
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawFilterInput {
    pub client_id: Option<String>,
    pub company_name: Option<String>,
    pub client_email: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
}

/// Normalized criteria; `None` leaves that axis unconstrained
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub client_id: Option<i64>,
    /// Lowercased
    pub company_name: Option<String>,
    /// Lowercased
    pub client_email: Option<String>,
    /// Inclusive lower bound
    pub start_date: Option<NaiveDate>,
    /// Exclusive upper bound, one day after the requested end date
    pub end_before: Option<NaiveDate>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether any criterion reads the resolved client
    pub fn needs_client(&self) -> bool {
        self.company_name.is_some() || self.client_email.is_some()
    }
}

/// Status tab selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}
