//! # objproto Bench
//!
//! Fixtures for objproto code generation benchmarks.

use objproto_descriptor::{
    DescriptorError, DescriptorPool, FieldDef, FieldType, FileDef, Label, MessageDef,
};

/// Field types cycled through by [`wide_file`].
const FIELD_TYPES: [FieldType; 6] = [
    FieldType::Int32,
    FieldType::Int64,
    FieldType::Double,
    FieldType::Bool,
    FieldType::String,
    FieldType::Bytes,
];

/// Builds a file with `messages` messages of `fields_per_message` fields.
///
/// Every third field is repeated and every fifth references the previous
/// message, so both generator variants and type resolution are exercised.
#[must_use]
pub fn wide_file(messages: usize, fields_per_message: usize) -> FileDef {
    let mut file = FileDef::new("bench/wide.proto", "bench")
        .with_java_package("com.example.bench")
        .with_java_multiple_files(true);

    for m in 0..messages {
        let mut message = MessageDef::new(format!("Message{m}"));
        for f in 0..fields_per_message {
            let number = i32::try_from(f + 1).unwrap_or(i32::MAX);
            let label = if f % 3 == 2 {
                Label::Repeated
            } else {
                Label::Optional
            };
            let name = format!("field_{f}");
            let field = if m > 0 && f % 5 == 4 {
                FieldDef::message(name, number, label, format!("Message{}", m - 1))
            } else {
                FieldDef::new(name, number, label, FIELD_TYPES[f % FIELD_TYPES.len()])
            };
            message.add_field(field);
        }
        file.add_message(message);
    }

    file
}

/// Resolves [`wide_file`] into a pool.
///
/// # Errors
/// Returns `DescriptorError` if resolution fails.
pub fn wide_pool(
    messages: usize,
    fields_per_message: usize,
) -> Result<DescriptorPool, DescriptorError> {
    DescriptorPool::new(&[wide_file(messages, fields_per_message)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_pool_resolves() {
        let pool = wide_pool(4, 12).expect("Failed to resolve");
        assert_eq!(pool.messages().count(), 4);

        let last = pool.message("bench.Message3").expect("message");
        assert_eq!(last.fields.len(), 12);
        assert!(last.fields[2].is_repeated());
        assert_eq!(
            last.fields[4].value_type.as_ref().map(|t| t.full_name.as_str()),
            Some("bench.Message2")
        );
    }
}
