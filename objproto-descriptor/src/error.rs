//! Error types for descriptor conversion, validation and resolution.

use thiserror::Error;

/// Error type for descriptor operations.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// Binary descriptor decoding error.
    #[error("protobuf decode error: {0}")]
    Decode(#[from] prost::DecodeError),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on {element}")]
    MissingAttribute {
        /// Element kind (file, message, field...).
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Label code outside of `descriptor.proto`'s range.
    #[error("unknown label {value} on field '{field}'")]
    UnknownLabel {
        /// Field name.
        field: String,
        /// Raw label value.
        value: i32,
    },

    /// Type code outside of `descriptor.proto`'s range.
    #[error("unknown field type {value} on field '{field}'")]
    UnknownFieldType {
        /// Field name.
        field: String,
        /// Raw type value.
        value: i32,
    },

    /// Message or enum field without a type name.
    #[error("field '{field}' of type {field_type} has no type name")]
    MissingTypeName {
        /// Field name.
        field: String,
        /// Declared field type.
        field_type: String,
    },

    /// Type name that does not resolve to any known message or enum.
    #[error("unresolved type '{type_name}' referenced in field '{field}'")]
    UnresolvedType {
        /// Referenced type name.
        type_name: String,
        /// Field name.
        field: String,
    },

    /// Type name resolving to an enum where a message is expected, or the
    /// other way around.
    #[error("field '{field}' expects {expected} but '{type_name}' is not one")]
    TypeKindMismatch {
        /// Field name.
        field: String,
        /// Resolved type name.
        type_name: String,
        /// Expected kind.
        expected: String,
    },

    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (file, type, field...).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// Two fields of one message share a number.
    #[error("field number {number} used by both '{first}' and '{second}' in message '{message}'")]
    DuplicateFieldNumber {
        /// Message name.
        message: String,
        /// Shared field number.
        number: i32,
        /// First field using the number.
        first: String,
        /// Second field using the number.
        second: String,
    },

    /// Field number outside `1..=536870911`.
    #[error("invalid field number {number} for field '{field}'")]
    InvalidFieldNumber {
        /// Field name.
        field: String,
        /// Invalid number.
        number: i32,
    },

    /// Field number inside the range reserved for the protobuf implementation.
    #[error("field number {number} of field '{field}' is in the reserved range 19000-19999")]
    ReservedFieldNumber {
        /// Field name.
        field: String,
        /// Reserved number.
        number: i32,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl DescriptorError {
    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Creates an unresolved type error.
    pub fn unresolved(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnresolvedType {
            type_name: type_name.into(),
            field: field.into(),
        }
    }

    /// Creates a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
