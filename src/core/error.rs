use thiserror::Error;

#[derive(Error, Debug)]
pub enum WarError {
    #[error("Could not allocate storage for {count} territories")]
    Allocation { count: usize },

    #[error("Territory index {index} out of range (valid: 1-{count})")]
    InvalidIndex { index: usize, count: usize },

    #[error("Territory {index} cannot attack itself")]
    SelfAttack { index: usize },

    #[error("{name} (territory {index}) has no troops to attack with")]
    NoTroops { index: usize, name: String },

    #[error("Name '{value}' exceeds {max} characters")]
    NameTooLong { value: String, max: usize },

    #[error("Name must not be empty")]
    EmptyName,

    #[error("Die face {value} out of range (valid: 1-6)")]
    InvalidRoll { value: u8 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl WarError {
    /// True for errors the caller can recover from by picking another move
    pub fn is_rejected_move(&self) -> bool {
        matches!(
            self,
            WarError::InvalidIndex { .. } | WarError::SelfAttack { .. } | WarError::NoTroops { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, WarError>;
