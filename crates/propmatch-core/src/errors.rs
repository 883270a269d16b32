use thiserror::Error;

/// Result type alias using MatchError
pub type Result<T> = std::result::Result<T, MatchError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Only configuration-time and conversion problems are errors. A comparison
/// that finds differences is a normal outcome and is reported through
/// `MatchReport`, never through this taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Configuration
    /// An exclusion selector does not name a direct member of the expected shape
    InvalidSelector,
    /// The expected value cannot drive this kind of matcher (e.g. a JSON subset
    /// matcher built from a non-object node)
    InvalidExpected,
    /// Match options failed to parse or validate
    InvalidConfig,

    // Conversion
    /// A host value could not be converted into a JSON node
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidSelector => "ERR_INVALID_SELECTOR",
            ExErrorKind::InvalidExpected => "ERR_INVALID_EXPECTED",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, member name, type name) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    member: Option<String>,
    type_name: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            member: None,
            type_name: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add member name context
    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.member = Some(member.into());
        self
    }

    /// Add the type name of the shape the error concerns
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
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

    /// Get the member name context, if any
    pub fn member(&self) -> Option<&str> {
        self.member.as_deref()
    }

    /// Get the type name context, if any
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
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
        if let Some(member) = &self.member {
            write!(f, " (member: {})", member)?;
        }
        if let Some(type_name) = &self.type_name {
            write!(f, " (type: {})", type_name)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for matcher configuration and input conversion
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    /// Selector does not denote a direct member of the expected type
    #[error("Member '{member}' is not a direct member of {type_name}")]
    InvalidSelector { type_name: String, member: String },

    /// Exclusions only make sense on composite expected values
    #[error("Cannot exclude member '{member}': expected value is {found}, not a composite")]
    SelectorOnNonComposite { member: String, found: String },

    /// Expected value has the wrong shape for the matcher
    #[error("Invalid expected value: {reason}")]
    InvalidExpected { reason: String },

    /// Match options failed to parse or validate
    #[error("Invalid match options: {reason}")]
    InvalidConfig { reason: String },

    /// Conversion to a JSON node failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<MatchError> for ExError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::InvalidSelector { type_name, member } => {
                ExError::new(ExErrorKind::InvalidSelector)
                    .with_op("ignore")
                    .with_member(member)
                    .with_type_name(type_name)
                    .with_message("Selector is not a direct member access")
            }

            MatchError::SelectorOnNonComposite { member, found } => {
                ExError::new(ExErrorKind::InvalidSelector)
                    .with_op("ignore")
                    .with_member(member)
                    .with_message(format!("Expected value is {}, not a composite", found))
            }

            MatchError::InvalidExpected { reason } => ExError::new(ExErrorKind::InvalidExpected)
                .with_message(format!("Invalid expected value: {}", reason)),

            MatchError::InvalidConfig { reason } => ExError::new(ExErrorKind::InvalidConfig)
                .with_op("load_options")
                .with_message(format!("Invalid match options: {}", reason)),

            MatchError::Serialization { message } => ExError::new(ExErrorKind::Serialization)
                .with_message(format!("Serialization error: {}", message)),
        }
    }
}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        MatchError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for MatchError {
    fn from(err: serde_yaml::Error) -> Self {
        MatchError::InvalidConfig {
            reason: err.to_string(),
        }
    }
}
