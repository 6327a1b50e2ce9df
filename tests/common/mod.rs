#![allow(dead_code)]

use bigdecimal::BigDecimal;
use billing_records::models::{BillingRecord, Client};
use billing_records::InMemorySource;
use chrono::NaiveDate;
use std::str::FromStr;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn clients() -> Vec<Client> {
    vec![
        Client::new(5, "Acme Trading", "billing@acme.test"),
        Client::new(6, "Siam Logistics", "ap@siamlogistics.test"),
        Client::new(7, "Chiang Mai Coffee", "owner@cmcoffee.test"),
    ]
}

pub fn invoices() -> Vec<BillingRecord> {
    vec![
        BillingRecord::new(1, "INV-2025-001", 5, day(2025, 10, 1))
            .with_status("Paid")
            .with_total(BigDecimal::from_str("12500.00").unwrap()),
        BillingRecord::new(2, "INV-2025-002", 6, day(2025, 10, 15)).with_status("Pending"),
        BillingRecord::new(3, "INV-2025-003", 5, day(2025, 10, 30)).with_status("Overdue"),
        BillingRecord::new(4, "INV-2025-004", 42, day(2025, 10, 30)).with_status("Paid"),
        BillingRecord::new(5, "INV-2025-005", 7, day(2025, 11, 3)).with_status("unpaid"),
        BillingRecord::new(6, "INV-2025-006", 6, day(2025, 11, 4)).with_status("paid"),
    ]
}

pub fn quotations() -> Vec<BillingRecord> {
    vec![
        BillingRecord::new(100, "QT-2025-001", 7, day(2025, 9, 20)),
        BillingRecord::new(101, "QT-2025-002", 5, day(2025, 10, 2)),
    ]
}

pub fn source() -> InMemorySource {
    InMemorySource::new(clients())
        .with_invoices(invoices())
        .with_quotations(quotations())
}
