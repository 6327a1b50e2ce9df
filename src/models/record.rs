use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

use crate::models::Client;

pub const DEFAULT_STATUS: &str = "pending";
pub const DEFAULT_CURRENCY: &str = "THB";
pub const UNKNOWN_CLIENT: &str = "Unknown Client";

/// Entity kinds sharing the billing record shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Invoice,
    Quotation,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Invoice => "invoice",
            RecordKind::Quotation => "quotation",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invoice or quotation
///
/// `record_date` is the issue date for invoices and the creation date for
/// quotations, always at day granularity.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct BillingRecord {
    pub id: i64,
    pub number: String,
    pub client_id: i64,
    pub record_date: NaiveDate,
    #[serde(default = "default_status")]
    pub status: String,
    pub total_amount: BigDecimal,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl BillingRecord {
    pub fn new(id: i64, number: &str, client_id: i64, record_date: NaiveDate) -> Self {
        Self {
            id,
            number: number.to_string(),
            client_id,
            record_date,
            status: default_status(),
            total_amount: BigDecimal::from(0),
            currency: default_currency(),
        }
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn with_total(mut self, total_amount: BigDecimal) -> Self {
        self.total_amount = total_amount;
        self
    }
}

/// Billing record with its resolved client attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub record: BillingRecord,
    pub client: Option<Client>,
}

impl EnrichedRecord {
    pub fn new(record: BillingRecord, client: Option<Client>) -> Self {
        Self { record, client }
    }

    pub fn client_id(&self) -> i64 {
        self.record.client_id
    }

    pub fn record_date(&self) -> NaiveDate {
        self.record.record_date
    }

    pub fn display_company(&self) -> &str {
        self.client
            .as_ref()
            .map(|c| c.company_name.as_str())
            .unwrap_or(UNKNOWN_CLIENT)
    }

    /// Amount with the currency symbol, e.g. `฿1500.00`
    pub fn display_amount(&self) -> String {
        let symbol = if self.record.currency == DEFAULT_CURRENCY { "฿" } else { "$" };
        format!("{}{}", symbol, self.record.total_amount)
    }
}
