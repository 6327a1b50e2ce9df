pub mod cache;
pub mod enrich;
pub mod export;
pub mod filter;
pub mod normalize;
pub mod pass;

pub use cache::ClientCache;
pub use enrich::{attach_clients, enrich_bulk, enrich_incremental};
pub use export::export_to_csv;
pub use filter::{apply, apply_status, filter_incremental};
pub use normalize::{normalize, normalize_status, parse_calendar_date};
pub use pass::RecordFilterService;
