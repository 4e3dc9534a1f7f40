pub mod cli;
pub mod client;
pub mod error;
pub mod fields;
pub mod models;
pub mod query;
pub mod report;
pub mod search;

pub use client::{Auth, JiraClient, JiraConfig};
pub use error::{Error, Result};
pub use models::*;

// Field extraction re-exports
pub use fields::{NOT_AVAILABLE, canonify, extract};

// Query builder re-exports
pub use query::{JqlFilter, KeyKind, classify_key};

// Paged search re-exports
pub use search::{DEFAULT_PAGE_SIZE, PagedSearch};

// Row emitter re-exports
pub use report::{ISSUE_HEADER, WORKLOG_HEADER, emit_issue_rows, emit_worklog_rows};
