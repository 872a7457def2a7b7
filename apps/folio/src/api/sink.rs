//! Default contact sink: write accepted submissions to the log.

use folio_core::{ContactSink, ContactSubmission, FolioError};

/// Logs each submission at INFO. No email is sent.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ContactSink for TracingSink {
    fn record(&self, submission: &ContactSubmission) -> Result<(), FolioError> {
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            body = %submission.message,
            timestamp = %submission.received_at.to_rfc3339(),
            "Contact form submission"
        );
        Ok(())
    }
}
