pub mod docket;
pub mod record;

pub use docket::{docket_from_title, find_docket_reference};
pub use record::{
    truncate_summary, DetailRecord, Party, SearchRecord, SUMMARY_MAX, SUMMARY_MAX_COMPACT,
    TRUNCATION_MARKER,
};
