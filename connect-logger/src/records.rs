use serde::{Deserialize, Serialize};

use crate::page::PageId;

/// One normalized label/value/unit observation scraped from a page.
///
/// Immutable once built; owned by the session until it is handed to the
/// storage collaborator at logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Identifies the dashboard account the value belongs to.
    pub customer_id: String,
    /// Session start time; identical across all records of one session.
    pub timestamp: String,
    pub page_id: PageId,
    /// Page identifier plus the pair's ordinal position, e.g. `"Boiler03"`.
    /// Unique within a session for a given page.
    pub page_key: String,
    pub label: String,
    /// Numeric value kept as text, exactly as rendered.
    pub value: String,
    /// Technical unit symbol, empty when the value carried none.
    pub unit: String,
}

/// Page key for the `ordinal`-th value pair on a page, counted from 1.
/// Two-digit zero-padded; ordinals of three or more digits are unpadded.
pub fn page_key(page: PageId, ordinal: usize) -> String {
    format!("{page}{ordinal:02}")
}
