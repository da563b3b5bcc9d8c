//! Objective-C names for generated classes and files.
//!
//! j2objc translates a Java class `com.example.Outer.Inner` into the
//! Objective-C class `ComExampleOuter_Inner`: the camel-cased package (or a
//! configured prefix) followed by the nesting path joined with underscores.

use crate::options::GeneratorOptions;
use objproto_descriptor::pool::{to_camel_case, to_pascal_case};
use objproto_descriptor::{FieldDescriptor, TypeRef};

/// Runtime class backing `bytes` fields.
pub const BYTE_STRING_CLASS: &str = "ComGoogleProtobufByteString";

/// Returns the class name prefix for a Java package.
#[must_use]
pub fn package_prefix(java_package: &str, options: &GeneratorOptions) -> String {
    match options.prefix_for(java_package) {
        Some(prefix) => prefix.to_string(),
        None => java_package
            .split('.')
            .filter(|segment| !segment.is_empty())
            .map(capitalize)
            .collect(),
    }
}

/// Returns the class name without its package prefix (e.g. `Outer_Inner`).
#[must_use]
pub fn local_class_name(type_ref: &TypeRef) -> String {
    let nested = type_ref.local_name().replace('.', "_");
    match &type_ref.outer_class {
        Some(outer) => format!("{outer}_{nested}"),
        None => nested,
    }
}

/// Returns the Objective-C class name of a message or enum.
#[must_use]
pub fn class_name(type_ref: &TypeRef, options: &GeneratorOptions) -> String {
    format!(
        "{}{}",
        package_prefix(&type_ref.java_package, options),
        local_class_name(type_ref)
    )
}

/// Returns the header generated for a type (e.g. `com/example/Outer_Inner.h`).
#[must_use]
pub fn header_path(type_ref: &TypeRef) -> String {
    format!("{}.h", path_stem(type_ref))
}

/// Returns the implementation file generated for a type.
#[must_use]
pub fn source_path(type_ref: &TypeRef) -> String {
    format!("{}.m", path_stem(type_ref))
}

/// Returns the header holding the `OrBuilder` protocol of a message.
#[must_use]
pub fn or_builder_header_path(type_ref: &TypeRef) -> String {
    format!("{}OrBuilder.h", path_stem(type_ref))
}

fn path_stem(type_ref: &TypeRef) -> String {
    let dir = type_ref.java_package.replace('.', "/");
    if dir.is_empty() {
        local_class_name(type_ref)
    } else {
        format!("{}/{}", dir, local_class_name(type_ref))
    }
}

/// Returns the lowerCamelCase accessor name of a field.
#[must_use]
pub fn field_camel_name(field: &FieldDescriptor) -> String {
    to_camel_case(&field.name)
}

/// Returns the capitalized accessor name of a field (`foo_bar` -> `FooBar`).
#[must_use]
pub fn field_capitalized_name(field: &FieldDescriptor) -> String {
    to_pascal_case(&field.name)
}

/// Upper-cases the first character.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
