//! Read-loop configuration.

/// Prompt written before each line is read.
pub const DEFAULT_PROMPT: &str = "➜ ";

/// Environment variable overriding the prompt.
pub const PROMPT_ENV_VAR: &str = "MONKEY_PROMPT";

/// Configuration for [`crate::repl::start`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    /// Text written (without newline) before reading each line.
    pub prompt: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl ReplConfig {
    /// Defaults, with the prompt taken from `MONKEY_PROMPT` when set.
    pub fn from_env() -> Self {
        Self::with_prompt_override(std::env::var(PROMPT_ENV_VAR).ok())
    }

    fn with_prompt_override(prompt: Option<String>) -> Self {
        match prompt {
            Some(prompt) => ReplConfig { prompt },
            None => ReplConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests;
