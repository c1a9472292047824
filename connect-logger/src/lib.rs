//! Authenticated scraping sessions against a heating-system web dashboard
//!
//! This crate drives one login-to-logout session against a JavaScript-rendered
//! dashboard: it logs in, visits a fixed sequence of information pages, waits
//! for each page's client-side rendering with bounded fixed-interval polling,
//! extracts labeled measurement values, and forwards the records to a storage
//! collaborator. A session is all-or-nothing: either every phase completes
//! and every record is persisted, or the session fails and persists nothing.
//!
//! The browser backend and the storage backend are trait seams
//! ([`BrowserDriver`], [`RecordSink`]); the crate contains no webdriver or
//! database code of its own.

pub mod config;
pub mod driver;
pub mod errors;
pub mod extract;
pub mod page;
pub mod records;
pub mod selector;
pub mod session;
pub mod storage;
#[cfg(test)]
mod tests;
pub mod units;
pub mod wait;

pub use config::SessionConfig;
pub use driver::{BrowserDriver, ElementImpl, WebElement};
pub use errors::SessionError;
pub use page::PageId;
pub use records::MeasurementRecord;
pub use selector::Selector;
pub use session::{Phase, Session, SessionResult};
pub use storage::RecordSink;
