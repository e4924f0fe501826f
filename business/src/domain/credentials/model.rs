use serde_json::{Map, Value};

use super::errors::CredentialError;

const KEY_ID_PREFIX_LEN: usize = 12;
const DEFAULT_KEY_ID_PREFIX: &str = "new";

/// A parsed service-account JSON document.
///
/// Only the fields the updater needs are extracted; the whole document is
/// kept so it can be written back out unchanged.
#[derive(Debug, Clone)]
pub struct ServiceAccountDescriptor {
    pub project_id: String,
    pub client_email: String,
    pub private_key: String,
    pub private_key_id: Option<String>,
    document: Map<String, Value>,
}

/// What gets shown to the operator once the descriptor is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct CredentialSummary {
    pub project_id: String,
    pub client_email: String,
    pub private_key_chars: usize,
}

impl ServiceAccountDescriptor {
    /// Parses raw JSON text into a descriptor.
    ///
    /// # Errors
    /// - `InvalidJson` if the text is not JSON or not a JSON object
    /// - `MissingField` if `project_id`, `client_email` or `private_key` is absent
    /// - `InvalidField` if one of the read fields is not a string
    pub fn parse(raw: &str) -> Result<Self, CredentialError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| CredentialError::InvalidJson(e.to_string()))?;

        let Value::Object(document) = value else {
            return Err(CredentialError::InvalidJson(
                "expected a JSON object".to_string(),
            ));
        };

        let project_id = required_string(&document, "project_id")?;
        let client_email = required_string(&document, "client_email")?;
        let private_key = required_string(&document, "private_key")?;
        let private_key_id = match document.get("private_key_id") {
            None => None,
            Some(Value::String(id)) => Some(id.clone()),
            Some(_) => return Err(CredentialError::InvalidField("private_key_id".to_string())),
        };

        Ok(Self {
            project_id,
            client_email,
            private_key,
            private_key_id,
            document,
        })
    }

    pub fn summary(&self) -> CredentialSummary {
        CredentialSummary {
            project_id: self.project_id.clone(),
            client_email: self.client_email.clone(),
            private_key_chars: self.private_key.chars().count(),
        }
    }

    /// File name used when the descriptor came in as inline content:
    /// `<project_id>-firebase-adminsdk-<suffix>-<key_id_prefix>.json`.
    ///
    /// `suffix` is the last `-` segment of the email local part, `key_id_prefix`
    /// the first 12 characters of `private_key_id` (or `new`).
    pub fn persisted_file_name(&self) -> String {
        let local_part = self.client_email.split('@').next().unwrap_or_default();
        let suffix = local_part.rsplit('-').next().unwrap_or_default();
        let key_id_prefix: String = match &self.private_key_id {
            Some(id) => id.chars().take(KEY_ID_PREFIX_LEN).collect(),
            None => DEFAULT_KEY_ID_PREFIX.to_string(),
        };

        format!(
            "{}-firebase-adminsdk-{}-{}.json",
            self.project_id, suffix, key_id_prefix
        )
    }

    /// Serializes the full document with a 2-space indent, non-ASCII
    /// characters written as `\uXXXX` escapes.
    pub fn to_pretty_json(&self) -> Result<String, CredentialError> {
        let pretty = serde_json::to_string_pretty(&self.document)
            .map_err(|e| CredentialError::InvalidJson(e.to_string()))?;
        Ok(escape_non_ascii(&pretty))
    }
}

/// Non-ASCII only occurs inside JSON strings, so escaping the whole text is exact.
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
            continue;
        }
        for unit in c.encode_utf16(&mut units) {
            out.push_str(&format!("\\u{:04x}", unit));
        }
    }
    out
}

fn required_string(document: &Map<String, Value>, key: &str) -> Result<String, CredentialError> {
    match document.get(key) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(CredentialError::InvalidField(key.to_string())),
        None => Err(CredentialError::MissingField(key.to_string())),
    }
}
