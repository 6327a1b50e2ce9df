pub mod memory;
pub mod pool;
pub mod queries;
pub mod source;

pub use memory::InMemorySource;
pub use pool::create_pool;
pub use source::{PgRecordSource, RecordSource};
