use super::model::CredentialSummary;

/// Operator-facing progress of a credentials update, emitted in run order.
pub trait ProgressReporter: Send + Sync {
    fn descriptor_loaded(&self, summary: &CredentialSummary);
    fn env_backed_up(&self, backup_file: &str);
    fn env_update_started(&self);
    fn env_updated(&self);
    fn credential_copied(&self, file_name: &str);
    fn credential_saved(&self, file_name: &str);
}
