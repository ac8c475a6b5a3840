use thiserror::Error;

#[derive(Error, Debug)]
pub enum PokedexError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Resource not found: {kind} '{name}'")]
    NotFound { kind: String, name: String },

    #[error("Upstream returned status {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    #[error("Translation provider error: {message}")]
    TranslationError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Upstream,
    Translation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PokedexError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PokedexError::HttpError(_)
            | PokedexError::SerializationError(_)
            | PokedexError::NotFound { .. }
            | PokedexError::UpstreamStatus { .. } => ErrorCategory::Upstream,
            PokedexError::TranslationError { .. } => ErrorCategory::Translation,
            PokedexError::ConfigError { .. }
            | PokedexError::InvalidConfigValueError { .. }
            | PokedexError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            PokedexError::IoError(_) | PokedexError::ServerError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PokedexError::NotFound { .. } => ErrorSeverity::Low,
            // 上游暫時性錯誤，重試可能成功
            PokedexError::HttpError(_)
            | PokedexError::UpstreamStatus { .. }
            | PokedexError::TranslationError { .. } => ErrorSeverity::Medium,
            PokedexError::SerializationError(_) => ErrorSeverity::High,
            PokedexError::ConfigError { .. }
            | PokedexError::InvalidConfigValueError { .. }
            | PokedexError::ConfigValidationError { .. } => ErrorSeverity::High,
            PokedexError::IoError(_) | PokedexError::ServerError { .. } => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for a failed run; never zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Upstream => format!("Upstream Pokémon service problem: {}", self),
            ErrorCategory::Translation => format!("Translation service problem: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PokedexError::NotFound { .. } => "Check the Pokémon name and try again",
            PokedexError::HttpError(_) | PokedexError::UpstreamStatus { .. } => {
                "Check network connectivity and the --pokeapi-url setting"
            }
            PokedexError::TranslationError { .. } => {
                "The translation API may be rate limited; wait and retry"
            }
            PokedexError::SerializationError(_) => "The upstream API may have changed its format",
            PokedexError::ConfigError { .. }
            | PokedexError::InvalidConfigValueError { .. }
            | PokedexError::ConfigValidationError { .. } => {
                "Fix the reported setting via CLI flags or the TOML config file"
            }
            PokedexError::IoError(_) => "Check file paths and permissions",
            PokedexError::ServerError { .. } => "Check that the bind address is free",
        }
    }
}

pub type Result<T> = std::result::Result<T, PokedexError>;
