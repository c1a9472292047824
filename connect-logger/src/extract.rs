//! Pairing label and value elements of a rendered page into records.

use tracing::debug;

use crate::driver::BrowserDriver;
use crate::errors::SessionError;
use crate::page::PageId;
use crate::records::{page_key, MeasurementRecord};
use crate::units::split_value_unit;

/// Reads all label/value pairs from the currently rendered page.
///
/// Labels and values are queried as two separate element lists and paired
/// purely by position; the dashboard renders them in matching order. Lists of
/// different length mean the page rendered inconsistently and fail the
/// extraction rather than guessing at an alignment.
pub async fn extract_value_pairs(
    driver: &dyn BrowserDriver,
    page: PageId,
    customer_id: &str,
    timestamp: &str,
) -> Result<Vec<MeasurementRecord>, SessionError> {
    let keys = driver.find_elements(&page.key_selector()).await?;
    let values = driver.find_elements(&page.value_selector()).await?;
    if keys.len() != values.len() {
        return Err(SessionError::MalformedPage {
            page,
            keys: keys.len(),
            values: values.len(),
        });
    }

    let mut records = Vec::with_capacity(keys.len());
    for (idx, (key, value)) in keys.iter().zip(&values).enumerate() {
        let label = key.text().await?;
        let raw = value.text().await?;
        let (value, unit) = split_value_unit(&raw);
        records.push(MeasurementRecord {
            customer_id: customer_id.to_string(),
            timestamp: timestamp.to_string(),
            page_id: page,
            page_key: page_key(page, idx + 1),
            label,
            value,
            unit,
        });
    }
    debug!(page = %page, count = records.len(), "extracted value pairs");
    Ok(records)
}
