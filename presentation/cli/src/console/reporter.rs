use std::io::Write;
use std::sync::Mutex;

use business::domain::credentials::model::CredentialSummary;
use business::domain::credentials::reporter::ProgressReporter;
use business::domain::credentials::use_cases::update::{CredentialFileMode, UpdateReport};

use crate::config::follow_up_config::FollowUpConfig;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Prints update progress for the operator.
pub struct ConsoleReporter<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    fn lines(&self, lines: &[String]) {
        // Output is best effort: a closed stdout must not abort the update.
        if let Ok(mut out) = self.out.lock() {
            for line in lines {
                let _ = writeln!(out, "{}", line);
            }
            let _ = out.flush();
        }
    }

    /// Closing banner with the follow-up steps.
    pub fn completed(&self, follow_up: &FollowUpConfig, report: &UpdateReport) {
        let mut lines = vec![String::new(), RULE.to_string()];
        lines.push("✅ Firebase credentials updated!".to_string());
        if let Some(backup_file) = &report.backup_file {
            lines.push(format!("   Backup: {}", backup_file));
        }
        let how = match report.credential_mode {
            CredentialFileMode::Copied => "copied",
            CredentialFileMode::AlreadyInPlace => "already in place",
            CredentialFileMode::Serialized => "saved",
        };
        lines.push(format!("   Credentials: {} ({})", report.credential_file, how));
        if !report.verified {
            lines.push(
                "⚠️  .env did not read back as written, check it before restarting".to_string(),
            );
        }
        if !report.missing_keys.is_empty() {
            let names: Vec<&str> = report.missing_keys.iter().map(|key| key.name()).collect();
            lines.push(format!("⚠️  Not present in .env: {}", names.join(", ")));
        }
        lines.push(String::new());
        lines.push("📋 Next steps:".to_string());
        for step in follow_up.steps() {
            lines.push(format!("   {}", step));
        }
        lines.push(RULE.to_string());
        self.lines(&lines);
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> ProgressReporter for ConsoleReporter<W> {
    fn descriptor_loaded(&self, summary: &CredentialSummary) {
        self.lines(&[
            "✅ Service account loaded:".to_string(),
            format!("   Project ID: {}", summary.project_id),
            format!("   Client Email: {}", summary.client_email),
            format!("   Private Key: {} characters", summary.private_key_chars),
            String::new(),
        ]);
    }

    fn env_backed_up(&self, backup_file: &str) {
        self.lines(&[format!("💾 .env backed up: {}", backup_file)]);
    }

    fn env_update_started(&self) {
        self.lines(&["📝 Updating .env...".to_string()]);
    }

    fn env_updated(&self) {
        self.lines(&["✅ .env updated".to_string()]);
    }

    fn credential_copied(&self, file_name: &str) {
        self.lines(&[format!("✅ JSON file copied: {}", file_name)]);
    }

    fn credential_saved(&self, file_name: &str) {
        self.lines(&[format!("✅ JSON file saved: {}", file_name)]);
    }
}
