use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Resource request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    TemplateError(#[from] minijinja::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Resource '{resource}' returned status {status}")]
    ResourceStatus { resource: String, status: u16 },

    #[error("Resource '{resource}' could not be decoded: {message}")]
    Decode { resource: String, message: String },

    #[error("Render target '#{target}' not found in page '{page}'")]
    MissingTarget { page: String, target: String },

    #[error("Missing data: {message}")]
    MissingData { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Fetch,
    Decode,
    Render,
    Interaction,
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

impl ErrorSeverity {
    /// Process exit code for a failed command. Low-severity errors are
    /// warnings and exit successfully.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::RequestError(_) | SiteError::ResourceStatus { .. } => ErrorCategory::Fetch,
            SiteError::SerializationError(_) | SiteError::Decode { .. } => ErrorCategory::Decode,
            SiteError::TemplateError(_) | SiteError::MissingTarget { .. } => ErrorCategory::Render,
            SiteError::MissingData { .. } => ErrorCategory::Interaction,
            SiteError::ConfigError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. }
            | SiteError::UrlError(_) => ErrorCategory::Configuration,
            SiteError::ZipError(_) | SiteError::IoError(_) => ErrorCategory::System,
        }
    }

    /// Missing targets and missing data never abort a build; they only skip
    /// the affected step.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Interaction => ErrorSeverity::Low,
            ErrorCategory::Render => match self {
                SiteError::MissingTarget { .. } => ErrorSeverity::Low,
                _ => ErrorSeverity::High,
            },
            ErrorCategory::Fetch => ErrorSeverity::Medium,
            ErrorCategory::Decode | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Fetch => format!("Could not fetch site data: {}", self),
            ErrorCategory::Decode => format!("Site data is not valid JSON: {}", self),
            ErrorCategory::Render => format!("Could not render page: {}", self),
            ErrorCategory::Interaction => self.to_string(),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Fetch => "Check that the source base URL or directory is reachable",
            ErrorCategory::Decode => "Validate the JSON resource files",
            ErrorCategory::Render => "Check that the page shells contain the expected element ids",
            ErrorCategory::Interaction => "Check the package id against `vpm-site search`",
            ErrorCategory::Configuration => "Review the TOML configuration and CLI flags",
            ErrorCategory::System => "Check output directory permissions and free disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
