use std::env;

const DEFAULT_RESTART_COMMAND: &str = "pm2 restart gig-core";
const DEFAULT_VERIFY_COMMAND: &str =
    "npx ts-node scripts/send-sample-notification-to-all-devices.ts";

/// Commands suggested to the operator once the credentials are in place.
#[derive(Debug, Clone)]
pub struct FollowUpConfig {
    pub restart_command: String,
    pub verify_command: String,
}

impl Default for FollowUpConfig {
    fn default() -> Self {
        Self {
            restart_command: DEFAULT_RESTART_COMMAND.to_string(),
            verify_command: DEFAULT_VERIFY_COMMAND.to_string(),
        }
    }
}

impl FollowUpConfig {
    /// Load follow-up commands from environment variables
    ///
    /// Environment variables:
    /// - RESTART_COMMAND: restarts the service (default: "pm2 restart gig-core")
    /// - VERIFY_COMMAND: exercises the new credentials
    ///   (default: "npx ts-node scripts/send-sample-notification-to-all-devices.ts")
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            restart_command: env::var("RESTART_COMMAND").unwrap_or(defaults.restart_command),
            verify_command: env::var("VERIFY_COMMAND").unwrap_or(defaults.verify_command),
        }
    }

    /// Numbered next-step lines, in the order they should be run.
    pub fn steps(&self) -> [String; 2] {
        [
            format!("1. Restart the server: {}", self.restart_command),
            format!("2. Run the test: {}", self.verify_command),
        ]
    }
}
