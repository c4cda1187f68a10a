//! Configuration for token engines.

use uuid::Uuid;

/// Configuration for key derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwtConfig {
    /// Optional context ID mixed into key derivation (e.g., tenant or purpose).
    /// Tokens issued under one context never verify under another.
    pub context_id: Option<Uuid>,
}

impl SwtConfig {
    /// Create a config with no context binding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the context ID for key binding.
    pub fn with_context(mut self, context_id: Uuid) -> Self {
        self.context_id = Some(context_id);
        self
    }
}
