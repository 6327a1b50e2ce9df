use std::io::Write;

use crate::error::{RecordError, Result};
use crate::models::EnrichedRecord;

const HEADER: [&str; 10] = [
    "number",
    "date",
    "client_id",
    "company",
    "email",
    "contact_person",
    "status",
    "total_amount",
    "currency",
    "display_amount",
];

/// Write records as CSV, in the order given
pub fn export_to_csv<W: Write>(records: &[EnrichedRecord], output: W) -> Result<W> {
    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(HEADER)?;

    for enriched in records {
        let record = &enriched.record;
        let client = enriched.client.as_ref();
        writer.write_record([
            record.number.clone(),
            enriched.record_date().format("%Y-%m-%d").to_string(),
            enriched.client_id().to_string(),
            enriched.display_company().to_string(),
            client.map(|c| c.email.clone()).unwrap_or_default(),
            client.and_then(|c| c.contact_person.clone()).unwrap_or_default(),
            record.status.clone(),
            record.total_amount.to_string(),
            record.currency.clone(),
            enriched.display_amount(),
        ])?;
    }

    writer.flush()?;
    writer.into_inner().map_err(|e| RecordError::Io(e.into_error()))
}
