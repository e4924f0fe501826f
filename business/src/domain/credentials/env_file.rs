use chrono::{DateTime, Local};
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use super::model::ServiceAccountDescriptor;

pub const ENV_FILE_NAME: &str = ".env";
const BACKUP_PREFIX: &str = ".env.backup.";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

static PROJECT_ID_LINE: Lazy<Regex> = Lazy::new(|| line_pattern(EnvKey::ProjectId));
static CLIENT_EMAIL_LINE: Lazy<Regex> = Lazy::new(|| line_pattern(EnvKey::ClientEmail));
static PRIVATE_KEY_LINE: Lazy<Regex> = Lazy::new(|| line_pattern(EnvKey::PrivateKey));

/// The `.env` variables kept in sync with the service account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvKey {
    ProjectId,
    ClientEmail,
    PrivateKey,
}

impl EnvKey {
    /// Rewrite order.
    pub const ALL: [EnvKey; 3] = [EnvKey::ProjectId, EnvKey::ClientEmail, EnvKey::PrivateKey];

    pub fn name(&self) -> &'static str {
        match self {
            EnvKey::ProjectId => "FIREBASE_PROJECT_ID",
            EnvKey::ClientEmail => "FIREBASE_CLIENT_EMAIL",
            EnvKey::PrivateKey => "FIREBASE_PRIVATE_KEY",
        }
    }

    /// Unencoded value the variable should hold.
    pub fn value<'a>(&self, descriptor: &'a ServiceAccountDescriptor) -> &'a str {
        match self {
            EnvKey::ProjectId => &descriptor.project_id,
            EnvKey::ClientEmail => &descriptor.client_email,
            EnvKey::PrivateKey => &descriptor.private_key,
        }
    }

    /// Full `KEY=value` line as written to the file.
    pub fn render_line(&self, descriptor: &ServiceAccountDescriptor) -> String {
        match self {
            EnvKey::PrivateKey => format!(
                "{}={}",
                self.name(),
                escape_private_key(self.value(descriptor))
            ),
            _ => format!("{}={}", self.name(), self.value(descriptor)),
        }
    }

    fn line_regex(&self) -> &'static Regex {
        match self {
            EnvKey::ProjectId => &*PROJECT_ID_LINE,
            EnvKey::ClientEmail => &*CLIENT_EMAIL_LINE,
            EnvKey::PrivateKey => &*PRIVATE_KEY_LINE,
        }
    }
}

impl std::fmt::Display for EnvKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn line_pattern(key: EnvKey) -> Regex {
    Regex::new(&format!(r"(?m)^{}=.*$", regex::escape(key.name())))
        .expect("env line pattern is a valid regex")
}

/// Result of rewriting the env file text.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvRewrite {
    pub content: String,
    /// Keys with no line in the file. They are not appended.
    pub missing: Vec<EnvKey>,
}

/// Replaces the first `KEY=...` line of each recognized key.
///
/// Lines are matched anchored and case-sensitive. Replacement text is taken
/// literally, so `$` and `\` in credential values are never expanded.
pub fn rewrite_env(content: &str, descriptor: &ServiceAccountDescriptor) -> EnvRewrite {
    let mut content = content.to_string();
    let mut missing = Vec::new();

    for key in EnvKey::ALL {
        let regex = key.line_regex();
        if !regex.is_match(&content) {
            missing.push(key);
            continue;
        }
        let line = key.render_line(descriptor);
        content = regex.replacen(&content, 1, NoExpand(&line)).into_owned();
    }

    EnvRewrite { content, missing }
}

/// Quotes a PEM key for a single `.env` line.
///
/// Order matters: backslashes, then newlines, then double quotes.
pub fn escape_private_key(private_key: &str) -> String {
    let escaped = private_key
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// Inverse of [`escape_private_key`].
pub fn unescape_private_key(value: &str) -> String {
    let inner = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// `.env.backup.<YYYYMMDDHHMMSS>`
pub fn backup_file_name(at: &DateTime<Local>) -> String {
    format!("{}{}", BACKUP_PREFIX, at.format(BACKUP_TIMESTAMP_FORMAT))
}
