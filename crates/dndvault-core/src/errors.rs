use dndvault_core_types::RequestId;
use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// The diff engine itself is total; these kinds cover the boundaries around
/// it (snapshot ingestion, settings, the CLI). Each kind maps to a stable code
/// usable in tests and user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    /// Snapshot bytes are not UTF-8 JSON, or the root is not an object
    InvalidSnapshot,
    /// A required snapshot field (e.g. `name`) is absent
    MissingField,
    /// Settings failed to load or violate their own constraints
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidSnapshot => "ERR_INVALID_SNAPSHOT",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus optional context
/// (operation, character, request) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    character_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            character_id: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add character ID context
    pub fn with_character_id(mut self, id: impl Into<String>) -> Self {
        self.character_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the character ID context, if any
    pub fn character_id(&self) -> Option<&str> {
        self.character_id.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(character_id) = &self.character_id {
            write!(f, " (character_id: {})", character_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain failures raised around the diff engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VaultError {
    /// Snapshot payload could not be decoded
    #[error("Invalid character snapshot: {reason}")]
    InvalidSnapshot { reason: String },

    /// A field the snapshot cannot do without is absent
    #[error("Character snapshot is missing required field `{field}`")]
    MissingField { field: String },

    /// Settings could not be loaded or are inconsistent
    #[error("Invalid report settings: {reason}")]
    InvalidConfig { reason: String },

    /// Reading a snapshot or settings file failed
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Serializing a report failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<VaultError> for ExError {
    fn from(err: VaultError) -> Self {
        let message = err.to_string();
        let kind = match &err {
            VaultError::InvalidSnapshot { .. } => ExErrorKind::InvalidSnapshot,
            VaultError::MissingField { .. } => ExErrorKind::MissingField,
            VaultError::InvalidConfig { .. } => ExErrorKind::InvalidConfig,
            VaultError::Io { .. } => ExErrorKind::Io,
            VaultError::Serialization { .. } => ExErrorKind::Serialization,
        };
        ExError::new(kind).with_message(message)
    }
}

impl From<serde_json::Error> for VaultError {
    fn from(err: serde_json::Error) -> Self {
        VaultError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for VaultError {
    fn from(err: std::io::Error) -> Self {
        VaultError::Io {
            message: err.to_string(),
        }
    }
}

impl From<config::ConfigError> for VaultError {
    fn from(err: config::ConfigError) -> Self {
        VaultError::InvalidConfig {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ExError {
    fn from(err: std::io::Error) -> Self {
        VaultError::from(err).into()
    }
}

impl From<serde_json::Error> for ExError {
    fn from(err: serde_json::Error) -> Self {
        VaultError::from(err).into()
    }
}
