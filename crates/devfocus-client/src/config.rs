//! Client configuration loaded from environment variables.
//!
//! All settings have sensible defaults so the client can start with zero
//! configuration for local use.

use devfocus_shared::OwnerId;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Owner id supplied by the authentication collaborator.
    /// Env: `DEVFOCUS_OWNER`
    /// Default: `local`
    pub owner: OwnerId,

    /// Name shown next to the owner's chat messages.
    /// Env: `DEVFOCUS_OWNER_DISPLAY`
    /// Default: `you@example.com`
    pub owner_display: String,

    /// Buffer size of the change-event broadcast channel.
    /// Env: `DEVFOCUS_EVENT_CAPACITY`
    /// Default: `256`
    pub event_capacity: usize,

    /// Whether to populate the store with demo data on start.
    /// Env: `DEVFOCUS_SEED_DEMO` (true/false)
    /// Default: `true`
    pub seed_demo: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            owner: OwnerId::from("local"),
            owner_display: "you@example.com".to_string(),
            event_capacity: 256,
            seed_demo: true,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(owner) = lookup("DEVFOCUS_OWNER") {
            if owner.trim().is_empty() {
                tracing::warn!("Empty DEVFOCUS_OWNER, using default");
            } else {
                config.owner = OwnerId::new(owner.trim());
            }
        }

        if let Some(display) = lookup("DEVFOCUS_OWNER_DISPLAY") {
            config.owner_display = display;
        }

        if let Some(val) = lookup("DEVFOCUS_EVENT_CAPACITY") {
            match val.parse::<usize>() {
                Ok(n) if n > 0 => config.event_capacity = n,
                _ => {
                    tracing::warn!(value = %val, "Invalid DEVFOCUS_EVENT_CAPACITY, using default");
                }
            }
        }

        if let Some(val) = lookup("DEVFOCUS_SEED_DEMO") {
            config.seed_demo = val != "false" && val != "0";
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter,
        // so we do not store it here.

        config
    }
}
