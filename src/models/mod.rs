pub mod client;
pub mod criteria;
pub mod record;

pub use client::Client;
pub use criteria::{FilterCriteria, RawFilterInput, StatusFilter};
pub use record::{BillingRecord, EnrichedRecord, RecordKind, UNKNOWN_CLIENT};
