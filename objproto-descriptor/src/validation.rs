//! Definition validation utilities.
//!
//! This module checks a [`FileDef`] for the structural mistakes that would
//! otherwise surface as broken generated code: clashing names and numbers,
//! out-of-range tags, and type references that are missing altogether.
//! Whether a type name actually resolves is checked by the pool.

use crate::defs::{EnumDef, FieldDef, FileDef, MessageDef};
use crate::error::DescriptorError;
use crate::types::{Label, Syntax};
use std::collections::{HashMap, HashSet};

/// Largest legal field number.
pub const MAX_FIELD_NUMBER: i32 = 536_870_911;

/// Field numbers reserved for the protobuf implementation.
pub const RESERVED_FIELD_NUMBERS: std::ops::RangeInclusive<i32> = 19_000..=19_999;

/// Validates a file definition for correctness.
///
/// # Arguments
/// * `file` - The file to validate
///
/// # Returns
/// Ok(()) if valid, or DescriptorError describing the issue.
///
/// # Errors
/// Returns `DescriptorError` if validation fails.
pub fn validate_file(file: &FileDef) -> Result<(), DescriptorError> {
    let scope = file.package.as_str();
    validate_type_names(scope, &file.messages, &file.enums)?;

    for message in &file.messages {
        validate_message(file.syntax, scope, message)?;
    }
    for enum_def in &file.enums {
        validate_enum(file.syntax, scope, enum_def)?;
    }
    Ok(())
}

/// Checks that sibling messages and enums have distinct names.
fn validate_type_names(
    scope: &str,
    messages: &[MessageDef],
    enums: &[EnumDef],
) -> Result<(), DescriptorError> {
    let mut seen = HashSet::new();
    let names = messages
        .iter()
        .map(|m| m.name.as_str())
        .chain(enums.iter().map(|e| e.name.as_str()));

    for name in names {
        if name.is_empty() {
            return Err(DescriptorError::missing_attr(
                format!("type in '{scope}'"),
                "name",
            ));
        }
        if !seen.insert(name) {
            return Err(DescriptorError::duplicate("type", qualify(scope, name)));
        }
    }
    Ok(())
}

/// Validates a message and everything nested in it.
fn validate_message(
    syntax: Syntax,
    scope: &str,
    message: &MessageDef,
) -> Result<(), DescriptorError> {
    let full_name = qualify(scope, &message.name);
    let mut names = HashSet::new();
    let mut numbers: HashMap<i32, &str> = HashMap::new();

    for field in &message.fields {
        let field_name = format!("{}.{}", full_name, field.name);
        if field.name.is_empty() {
            return Err(DescriptorError::missing_attr(
                format!("field of '{full_name}'"),
                "name",
            ));
        }
        if !names.insert(field.name.as_str()) {
            return Err(DescriptorError::duplicate("field", field_name));
        }
        if let Some(first) = numbers.insert(field.number, field.name.as_str()) {
            return Err(DescriptorError::DuplicateFieldNumber {
                message: full_name,
                number: field.number,
                first: first.to_string(),
                second: field.name.clone(),
            });
        }
        validate_field(syntax, &field_name, field)?;
    }

    validate_type_names(&full_name, &message.nested_messages, &message.nested_enums)?;
    for nested in &message.nested_messages {
        validate_message(syntax, &full_name, nested)?;
    }
    for enum_def in &message.nested_enums {
        validate_enum(syntax, &full_name, enum_def)?;
    }
    Ok(())
}

/// Validates a single field.
fn validate_field(
    syntax: Syntax,
    field_name: &str,
    field: &FieldDef,
) -> Result<(), DescriptorError> {
    if field.number < 1 || field.number > MAX_FIELD_NUMBER {
        return Err(DescriptorError::InvalidFieldNumber {
            field: field_name.to_string(),
            number: field.number,
        });
    }
    if RESERVED_FIELD_NUMBERS.contains(&field.number) {
        return Err(DescriptorError::ReservedFieldNumber {
            field: field_name.to_string(),
            number: field.number,
        });
    }

    let has_type_name = field.type_name.as_deref().is_some_and(|t| !t.is_empty());
    if field.field_type.references_type() && !has_type_name {
        return Err(DescriptorError::MissingTypeName {
            field: field_name.to_string(),
            field_type: field.field_type.proto_name().to_string(),
        });
    }

    if field.default_value.is_some() {
        if field.label == Label::Repeated {
            return Err(DescriptorError::validation(format!(
                "repeated field '{field_name}' cannot have a default value"
            )));
        }
        if syntax == Syntax::Proto3 {
            return Err(DescriptorError::validation(format!(
                "explicit default values are not allowed in proto3 (field '{field_name}')"
            )));
        }
    }

    if syntax == Syntax::Proto3 && field.label == Label::Required {
        return Err(DescriptorError::validation(format!(
            "required fields are not allowed in proto3 (field '{field_name}')"
        )));
    }
    Ok(())
}

/// Validates an enum definition.
fn validate_enum(syntax: Syntax, scope: &str, enum_def: &EnumDef) -> Result<(), DescriptorError> {
    let full_name = qualify(scope, &enum_def.name);

    if enum_def.values.is_empty() {
        return Err(DescriptorError::validation(format!(
            "enum '{full_name}' must declare at least one value"
        )));
    }
    if syntax == Syntax::Proto3 && enum_def.values[0].number != 0 {
        return Err(DescriptorError::validation(format!(
            "the first value of proto3 enum '{full_name}' must be zero"
        )));
    }

    let mut seen_names = HashSet::new();
    for value in &enum_def.values {
        if !seen_names.insert(&value.name) {
            return Err(DescriptorError::duplicate(
                "enum value",
                format!("{}.{}", full_name, value.name),
            ));
        }
    }
    Ok(())
}

/// Joins a scope and a name with a dot, skipping an empty scope.
pub(crate) fn qualify(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{scope}.{name}")
    }
}
