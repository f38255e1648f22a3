//! Helpers callers use around the store: ids, timestamps and pagination.

mod id;
mod pagination;
mod timestamp;

pub use id::generate_id;
pub use pagination::{paginate, Page, Pagination, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
pub use timestamp::{timestamp_now, with_timestamps, Timestamped, Timestamps};
