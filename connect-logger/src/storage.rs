use tracing::debug;

use crate::errors::SessionError;
use crate::records::MeasurementRecord;

/// The persistence collaborator a finished session hands its records to.
#[async_trait::async_trait]
pub trait RecordSink: Send + Sync {
    /// Persist one record. Records are never mutated by the sink.
    async fn append_record(&self, record: &MeasurementRecord) -> Result<(), SessionError>;
}

/// Forwards a session's accumulated records to the sink, one at a time in
/// extraction order, stopping at the first failure.
pub async fn forward_records(
    sink: &dyn RecordSink,
    records: &[MeasurementRecord],
) -> Result<(), SessionError> {
    for record in records {
        sink.append_record(record).await?;
    }
    debug!(count = records.len(), "records forwarded to storage");
    Ok(())
}
