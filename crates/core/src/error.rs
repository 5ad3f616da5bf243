use crate::service::{Format, Service};

/// Errors raised by the entity, validation, and (de)serialization layers.
///
/// Every variant names the entity type involved so the caller can report
/// which record was rejected without inspecting the payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A value handed to a setter violates the field's declared kind or rules.
    #[error("invalid value '{value}' for {entity}.{field}: {reason}")]
    InvalidArgument {
        entity: String,
        field: String,
        value: String,
        reason: String,
    },

    /// An inbound tree is missing a required field or holds a value that
    /// cannot be coerced to the field's kind.
    #[error("cannot deserialize {entity}.{field}: {message}")]
    Deserialization {
        entity: String,
        field: String,
        message: String,
    },

    /// No descriptor set is registered under the requested type name.
    #[error("no entity type registered as '{entity}'")]
    EntityNotFound { entity: String },

    /// The entity cannot be exchanged with the service over this format.
    #[error("{entity} cannot be exchanged with {service} over {format}")]
    NotSupported {
        entity: String,
        service: Service,
        format: Format,
    },
}

impl Error {
    pub fn invalid(
        entity: &str,
        field: &str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidArgument {
            entity: entity.to_owned(),
            field: field.to_owned(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn deserialization(entity: &str, field: &str, message: impl Into<String>) -> Self {
        Error::Deserialization {
            entity: entity.to_owned(),
            field: field.to_owned(),
            message: message.into(),
        }
    }

    pub fn entity_not_found(entity: &str) -> Self {
        Error::EntityNotFound {
            entity: entity.to_owned(),
        }
    }

    /// The field the error refers to, when there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::InvalidArgument { field, .. } | Error::Deserialization { field, .. } => {
                Some(field)
            }
            Error::EntityNotFound { .. } | Error::NotSupported { .. } => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
