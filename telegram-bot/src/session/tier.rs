//! Model tiers exposed to users and their fixed remote model identifiers.

use std::fmt;

/// Quality/speed trade-off level. Each tier maps to one model identifier sent verbatim to the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelTier {
    Fast,
    #[default]
    Balanced,
    Powerful,
}

impl ModelTier {
    pub const ALL: [ModelTier; 3] = [ModelTier::Fast, ModelTier::Balanced, ModelTier::Powerful];

    /// Remote model identifier for this tier.
    pub fn model_id(&self) -> &'static str {
        match self {
            ModelTier::Fast => "Meta-Llama-3.1-8B-Instruct",
            ModelTier::Balanced => "Meta-Llama-3.1-70B-Instruct",
            ModelTier::Powerful => "Meta-Llama-3.1-405B-Instruct",
        }
    }

    /// Lowercase tier name, as used in button tokens.
    pub fn name(&self) -> &'static str {
        match self {
            ModelTier::Fast => "fast",
            ModelTier::Balanced => "balanced",
            ModelTier::Powerful => "powerful",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.name() == name)
    }
}

impl fmt::Display for ModelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
