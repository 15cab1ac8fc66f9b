use structeq_core_types::ComparisonId;
use thiserror::Error;

/// Result type alias using StructEqError
pub type Result<T> = std::result::Result<T, StructEqError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Structural mismatches are never errors: the comparer reports them as a
/// `false` outcome plus optional diagnostics. The kinds below cover the
/// exceptional paths only, each mapped to a stable code for programmatic
/// handling and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Member access
    MemberNotFound,
    MemberNotReadable,
    BorrowConflict,

    // Configuration
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::MemberNotFound => "ERR_MEMBER_NOT_FOUND",
            ExErrorKind::MemberNotReadable => "ERR_MEMBER_NOT_READABLE",
            ExErrorKind::BorrowConflict => "ERR_BORROW_CONFLICT",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus the comparison context (operation, type
/// and member being read, correlation id) for log events and callers that
/// want more than a message.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    type_name: Option<String>,
    member: Option<String>,
    comparison_id: Option<ComparisonId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            type_name: None,
            member: None,
            comparison_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the name of the type being inspected
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Add the name of the member being read
    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.member = Some(member.into());
        self
    }

    /// Add the id of the comparison run that failed
    pub fn with_comparison_id(mut self, id: ComparisonId) -> Self {
        self.comparison_id = Some(id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
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

    /// Get the type name context, if any
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// Get the member context, if any
    pub fn member(&self) -> Option<&str> {
        self.member.as_deref()
    }

    /// Get the comparison id, if any
    pub fn comparison_id(&self) -> Option<&ComparisonId> {
        self.comparison_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
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
        if let Some(type_name) = &self.type_name {
            write!(f, " (type: {})", type_name)?;
        }
        if let Some(member) = &self.member {
            write!(f, " (member: {})", member)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for structeq operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StructEqError {
    /// A member descriptor was used against a host that does not have it
    #[error("Type {type_name} has no member named {member}")]
    MemberNotFound { type_name: String, member: String },

    /// A write-only member was read
    #[error("Member {member} of type {type_name} is not readable")]
    MemberNotReadable { type_name: String, member: String },

    /// A `RefCell` in the object graph is mutably borrowed elsewhere
    #[error("Value of type {type_name} is mutably borrowed and cannot be inspected")]
    BorrowConflict { type_name: String },

    /// A comparison configuration could not be parsed
    #[error("Invalid comparison config: {reason}")]
    InvalidConfig { reason: String },

    /// Reading an input failed
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Input could not be (de)serialized
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Internal error (should never happen)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<StructEqError> for ExError {
    fn from(err: StructEqError) -> Self {
        let message = err.to_string();
        match err {
            StructEqError::MemberNotFound { type_name, member } => {
                ExError::new(ExErrorKind::MemberNotFound)
                    .with_type_name(type_name)
                    .with_member(member)
                    .with_message(message)
            }
            StructEqError::MemberNotReadable { type_name, member } => {
                ExError::new(ExErrorKind::MemberNotReadable)
                    .with_type_name(type_name)
                    .with_member(member)
                    .with_message(message)
            }
            StructEqError::BorrowConflict { type_name } => {
                ExError::new(ExErrorKind::BorrowConflict)
                    .with_type_name(type_name)
                    .with_message(message)
            }
            StructEqError::InvalidConfig { .. } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(message)
            }
            StructEqError::Io { .. } => ExError::new(ExErrorKind::Io).with_message(message),
            StructEqError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
            StructEqError::Internal { .. } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for StructEqError {
    fn from(err: serde_json::Error) -> Self {
        StructEqError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for StructEqError {
    fn from(err: toml::de::Error) -> Self {
        StructEqError::InvalidConfig {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for StructEqError {
    fn from(err: std::io::Error) -> Self {
        StructEqError::Io {
            message: err.to_string(),
        }
    }
}
