use std::env;

/// Environment variable that turns on debug echo when set to a truthy value.
pub const DEBUG_ENV_VAR: &str = "MLR_DEBUG";
/// Environment variable that selects [`SessionMode::Persistent`].
pub const PERSISTENT_ENV_VAR: &str = "MLR_PERSISTENT";

/// How many turns one player process handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    /// Read one line, answer it, stop.
    #[default]
    SingleTurn,
    /// Answer every line until the engine closes input.
    Persistent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// Echo the decoded input and encoded output as plain, unprefixed lines.
    pub debug: bool,
    pub mode: SessionMode,
}

impl SessionConfig {
    pub fn new(debug: bool, mode: SessionMode) -> Self {
        Self { debug, mode }
    }

    /// Defaults overridden by `MLR_DEBUG` and `MLR_PERSISTENT`.
    pub fn from_env() -> Self {
        let mode = if env_flag(PERSISTENT_ENV_VAR) {
            SessionMode::Persistent
        } else {
            SessionMode::SingleTurn
        };
        Self::new(env_flag(DEBUG_ENV_VAR), mode)
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name).map(|v| parse_flag(&v)).unwrap_or(false)
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
