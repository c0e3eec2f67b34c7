use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every error raised by the catalog falls into one of these kinds. Each kind
/// maps to a stable code that callers (CLI, admin tooling, tests) can match on
/// without depending on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// A field value violates a max-length, required-ness or type constraint
    Validation,
    /// A deletion would orphan a protected reference
    ReferentialIntegrity,
    /// A lookup by key (or by the default category name) found nothing
    NotFound,

    // Integration/IO
    Persistence,
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Validation => "ERR_VALIDATION",
            ExErrorKind::ReferentialIntegrity => "ERR_REFERENTIAL_INTEGRITY",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus optional context about the operation and
/// the row involved. The store crate uses this as its error type directly.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity: Option<String>,
    entity_id: Option<i64>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity name context (e.g. "Missa")
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Add entity key context
    pub fn with_entity_id(mut self, id: i64) -> Self {
        self.entity_id = Some(id);
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

    /// Get the entity name context, if any
    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    /// Get the entity key context, if any
    pub fn entity_id(&self) -> Option<i64> {
        self.entity_id
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
        match (&self.entity, self.entity_id) {
            (Some(entity), Some(id)) => write!(f, " ({} {})", entity, id)?,
            (Some(entity), None) => write!(f, " ({})", entity)?,
            (None, Some(id)) => write!(f, " (id: {})", id)?,
            (None, None) => {}
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for catalog operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    // ===== Validation Errors =====
    /// A string field is longer than its column allows
    #[error("{entity}.{field} exceeds {max} characters (got {actual})")]
    FieldTooLong {
        entity: &'static str,
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// A required field was empty
    #[error("{entity}.{field} is required")]
    FieldRequired {
        entity: &'static str,
        field: &'static str,
    },

    /// A link field does not hold an absolute http(s) URL
    #[error("{entity}.{field} is not a valid URL: {reason}")]
    InvalidUrl {
        entity: &'static str,
        field: &'static str,
        reason: String,
    },

    /// Similarity does not fit four digits with two decimal places
    #[error("Similarity {value} does not fit 4 digits with 2 decimal places")]
    InvalidSimilarity { value: String },

    /// Membership order outside 1..=max
    #[error("Membership order must be between 1 and {max}, got {order}")]
    InvalidOrder { order: u16, max: u16 },

    /// Another membership of the same MissaType already uses this order
    #[error("MissaType {missa_type_id} already has a member at order {order}")]
    DuplicateOrder { missa_type_id: i64, order: u16 },

    /// The default MissaType may only be established through the resolver
    #[error("A MissaType named {name:?} already exists; resolve it instead of creating another")]
    DefaultMissaTypeExists { name: String },

    /// The default name is only ever assigned by default resolution
    #[error("MissaType name {name:?} is reserved; use resolve_default_missa_type")]
    ReservedMissaTypeName { name: String },

    // ===== Lookup Errors =====
    /// No row with this key
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// Strict default lookup found no row with the default name
    #[error("MissaType named {name:?} not found")]
    DefaultMissaTypeMissing { name: String },

    // ===== Referential Integrity Errors =====
    /// Deletion blocked by assignments still referencing the row
    #[error("{entity} {id} is referenced by {references} assignment(s) and cannot be deleted")]
    Protected {
        entity: &'static str,
        id: i64,
        references: usize,
    },

    // ===== Internal Errors =====
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CatalogError {
    /// Classify this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            CatalogError::FieldTooLong { .. }
            | CatalogError::FieldRequired { .. }
            | CatalogError::InvalidUrl { .. }
            | CatalogError::InvalidSimilarity { .. }
            | CatalogError::InvalidOrder { .. }
            | CatalogError::DuplicateOrder { .. }
            | CatalogError::DefaultMissaTypeExists { .. }
            | CatalogError::ReservedMissaTypeName { .. } => ExErrorKind::Validation,
            CatalogError::NotFound { .. } | CatalogError::DefaultMissaTypeMissing { .. } => {
                ExErrorKind::NotFound
            }
            CatalogError::Protected { .. } => ExErrorKind::ReferentialIntegrity,
            CatalogError::Internal { .. } => ExErrorKind::Internal,
        }
    }
}

impl From<CatalogError> for ExError {
    fn from(err: CatalogError) -> Self {
        let message = err.to_string();
        let ex = ExError::new(err.kind()).with_message(message);
        match err {
            CatalogError::FieldTooLong { entity, .. }
            | CatalogError::FieldRequired { entity, .. }
            | CatalogError::InvalidUrl { entity, .. } => ex.with_entity(entity),
            CatalogError::InvalidSimilarity { .. } => ex.with_entity("Suggestion"),
            CatalogError::InvalidOrder { .. } | CatalogError::DuplicateOrder { .. } => {
                ex.with_entity("MissaTypeAntiphonaType")
            }
            CatalogError::DefaultMissaTypeExists { .. }
            | CatalogError::ReservedMissaTypeName { .. }
            | CatalogError::DefaultMissaTypeMissing { .. } => ex.with_entity("MissaType"),
            CatalogError::NotFound { entity, id } => ex.with_entity(entity).with_entity_id(id),
            CatalogError::Protected { entity, id, .. } => ex
                .with_op("delete")
                .with_entity(entity)
                .with_entity_id(id),
            CatalogError::Internal { .. } => ex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes_are_stable() {
        assert_eq!(ExErrorKind::Validation.code(), "ERR_VALIDATION");
        assert_eq!(
            ExErrorKind::ReferentialIntegrity.code(),
            "ERR_REFERENTIAL_INTEGRITY"
        );
        assert_eq!(ExErrorKind::NotFound.code(), "ERR_NOT_FOUND");
        assert_eq!(ExErrorKind::Persistence.code(), "ERR_PERSISTENCE");
    }

    #[test]
    fn test_protected_maps_to_referential_integrity() {
        let err = CatalogError::Protected {
            entity: "Documentum",
            id: 3,
            references: 2,
        };
        let ex: ExError = err.into();
        assert_eq!(ex.kind(), ExErrorKind::ReferentialIntegrity);
        assert_eq!(ex.entity(), Some("Documentum"));
        assert_eq!(ex.entity_id(), Some(3));
        assert_eq!(ex.op(), Some("delete"));
    }

    #[test]
    fn test_not_found_display() {
        let ex: ExError = CatalogError::NotFound {
            entity: "Missa",
            id: 9,
        }
        .into();
        assert_eq!(
            ex.to_string(),
            "[ERR_NOT_FOUND]: Missa not found: 9 (Missa 9)"
        );
    }

    #[test]
    fn test_validation_kinds() {
        let too_long = CatalogError::FieldTooLong {
            entity: "Anno",
            field: "name",
            max: 2,
            actual: 3,
        };
        assert_eq!(too_long.kind(), ExErrorKind::Validation);
        assert_eq!(too_long.to_string(), "Anno.name exceeds 2 characters (got 3)");

        let dup = CatalogError::DuplicateOrder {
            missa_type_id: 1,
            order: 2,
        };
        assert_eq!(dup.kind(), ExErrorKind::Validation);
    }
}
