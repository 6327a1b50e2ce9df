use crate::models::{BillingRecord, Client};
use sqlx::PgPool;

/// All invoices, ordered by id
pub async fn list_invoices(pool: &PgPool) -> Result<Vec<BillingRecord>, sqlx::Error> {
    sqlx::query_as::<_, BillingRecord>(
        r#"
        SELECT invoice_id AS id,
               invoice_number AS number,
               client_id,
               issue_date AS record_date,
               COALESCE(NULLIF(status, ''), 'pending') AS status,
               total_amount::numeric AS total_amount,
               COALESCE(NULLIF(currency, ''), 'THB') AS currency
        FROM invoice
        ORDER BY invoice_id
        "#
    )
    .fetch_all(pool)
    .await
}

/// All quotations, ordered by id
///
/// `created_at` is a timestamp; it is cut to a calendar day here.
pub async fn list_quotations(pool: &PgPool) -> Result<Vec<BillingRecord>, sqlx::Error> {
    sqlx::query_as::<_, BillingRecord>(
        r#"
        SELECT quotation_id AS id,
               quotation_number AS number,
               client_id,
               created_at::date AS record_date,
               COALESCE(NULLIF(status, ''), 'pending') AS status,
               total_amount::numeric AS total_amount,
               COALESCE(NULLIF(currency, ''), 'THB') AS currency
        FROM quotation
        ORDER BY quotation_id
        "#
    )
    .fetch_all(pool)
    .await
}

/// All clients, ordered by id
pub async fn list_clients(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>(
        r#"
        SELECT client_id AS id, company_name, email, contact_person
        FROM client
        ORDER BY client_id
        "#
    )
    .fetch_all(pool)
    .await
}

/// Single client; `None` when the id does not exist
pub async fn get_client(pool: &PgPool, client_id: i64) -> Result<Option<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>(
        r#"
        SELECT client_id AS id, company_name, email, contact_person
        FROM client
        WHERE client_id = $1
        "#
    )
    .bind(client_id)
    .fetch_optional(pool)
    .await
}
