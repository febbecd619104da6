/// Errors that can be returned by compatibility resolution.
#[derive(Debug, thiserror::Error)]
pub enum RestoreError {
    /// Migration is required but no encoder capable of reading the previous
    /// data exists: the prior encoder is absent or a placeholder, and the
    /// new encoder supplied no converter. Terminal for this state field's
    /// restore attempt; any retry policy belongs to the caller.
    #[error(
        "state migration required for format {format_id}, but no encoder capable of reading previous data is available"
    )]
    MigrationUnavailable { format_id: String },
}
