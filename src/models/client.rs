use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Client record, read-only from the filtering side
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub company_name: String,
    pub email: String,
    #[serde(default)]
    pub contact_person: Option<String>,
}

impl Client {
    pub fn new(id: i64, company_name: &str, email: &str) -> Self {
        Self {
            id,
            company_name: company_name.to_string(),
            email: email.to_string(),
            contact_person: None,
        }
    }
}
