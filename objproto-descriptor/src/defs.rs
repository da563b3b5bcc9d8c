//! Raw definitions for protocol buffer files.
//!
//! These structures mirror what `protoc` hands to a plugin: type names are
//! unresolved strings and nothing is cross-checked. They are turned into a
//! [`DescriptorPool`](crate::pool::DescriptorPool) before code generation.

use crate::types::{FieldType, Label, Syntax};

/// `.proto` file definition.
#[derive(Debug, Clone, Default)]
pub struct FileDef {
    /// File name relative to the import root (e.g. `foo/bar.proto`).
    pub name: String,
    /// Protobuf package.
    pub package: String,
    /// Declared syntax.
    pub syntax: Syntax,
    /// Java options relevant to class naming.
    pub options: FileOptionsDef,
    /// Imported file names.
    pub dependencies: Vec<String>,
    /// Top-level messages.
    pub messages: Vec<MessageDef>,
    /// Top-level enums.
    pub enums: Vec<EnumDef>,
}

impl FileDef {
    /// Creates a new, empty file definition.
    #[must_use]
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            ..Self::default()
        }
    }

    /// Sets the declared syntax.
    #[must_use]
    pub fn with_syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Sets the `java_package` option.
    #[must_use]
    pub fn with_java_package(mut self, java_package: impl Into<String>) -> Self {
        self.options.java_package = Some(java_package.into());
        self
    }

    /// Sets the `java_multiple_files` option.
    #[must_use]
    pub fn with_java_multiple_files(mut self, multiple_files: bool) -> Self {
        self.options.java_multiple_files = multiple_files;
        self
    }

    /// Adds a top-level message.
    pub fn add_message(&mut self, message: MessageDef) {
        self.messages.push(message);
    }

    /// Adds a top-level enum.
    pub fn add_enum(&mut self, enum_def: EnumDef) {
        self.enums.push(enum_def);
    }

    /// Returns the file name without directories and the `.proto` suffix.
    #[must_use]
    pub fn stem(&self) -> &str {
        let base = self.name.rsplit('/').next().unwrap_or(&self.name);
        base.strip_suffix(".proto").unwrap_or(base)
    }
}

/// File options that influence generated class names.
#[derive(Debug, Clone, Default)]
pub struct FileOptionsDef {
    /// `option java_package`.
    pub java_package: Option<String>,
    /// `option java_outer_classname`.
    pub java_outer_classname: Option<String>,
    /// `option java_multiple_files`.
    pub java_multiple_files: bool,
}

/// Message definition.
#[derive(Debug, Clone, Default)]
pub struct MessageDef {
    /// Message name (unqualified).
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
    /// Nested messages.
    pub nested_messages: Vec<MessageDef>,
    /// Nested enums.
    pub nested_enums: Vec<EnumDef>,
    /// True for the synthetic entry type of a `map<K, V>` field.
    pub map_entry: bool,
}

impl MessageDef {
    /// Creates a new message definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a field to the message.
    pub fn add_field(&mut self, field: FieldDef) {
        self.fields.push(field);
    }

    /// Adds a nested message.
    pub fn add_nested_message(&mut self, message: MessageDef) {
        self.nested_messages.push(message);
    }

    /// Adds a nested enum.
    pub fn add_nested_enum(&mut self, enum_def: EnumDef) {
        self.nested_enums.push(enum_def);
    }

    /// Returns true if the message declares any repeated field.
    #[must_use]
    pub fn has_repeated_fields(&self) -> bool {
        self.fields.iter().any(|f| f.label.is_repeated())
    }
}

/// Field definition within a message.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field name as written in the `.proto` file.
    pub name: String,
    /// Field number (tag).
    pub number: i32,
    /// Cardinality.
    pub label: Label,
    /// Declared type.
    pub field_type: FieldType,
    /// Referenced message or enum type, relative or fully qualified.
    pub type_name: Option<String>,
    /// Default value text (proto2 only).
    pub default_value: Option<String>,
    /// Explicit `[packed = ...]` option.
    pub packed: Option<bool>,
    /// Proto3 `optional` keyword.
    pub proto3_optional: bool,
}

impl FieldDef {
    /// Creates a new field definition of a scalar type.
    #[must_use]
    pub fn new(name: impl Into<String>, number: i32, label: Label, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            number,
            label,
            field_type,
            type_name: None,
            default_value: None,
            packed: None,
            proto3_optional: false,
        }
    }

    /// Creates a new message-typed field definition.
    #[must_use]
    pub fn message(
        name: impl Into<String>,
        number: i32,
        label: Label,
        type_name: impl Into<String>,
    ) -> Self {
        Self::new(name, number, label, FieldType::Message).with_type_name(type_name)
    }

    /// Creates a new enum-typed field definition.
    #[must_use]
    pub fn enumeration(
        name: impl Into<String>,
        number: i32,
        label: Label,
        type_name: impl Into<String>,
    ) -> Self {
        Self::new(name, number, label, FieldType::Enum).with_type_name(type_name)
    }

    /// Sets the referenced type name.
    #[must_use]
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Sets the default value text.
    #[must_use]
    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// Returns true if the field is repeated.
    #[must_use]
    pub fn is_repeated(&self) -> bool {
        self.label.is_repeated()
    }
}

/// Enum definition.
#[derive(Debug, Clone, Default)]
pub struct EnumDef {
    /// Enum name (unqualified).
    pub name: String,
    /// Declared values.
    pub values: Vec<EnumValueDef>,
}

impl EnumDef {
    /// Creates a new enum definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Adds a value to the enum.
    pub fn add_value(&mut self, name: impl Into<String>, number: i32) {
        self.values.push(EnumValueDef {
            name: name.into(),
            number,
        });
    }
}

/// Enum value definition.
#[derive(Debug, Clone)]
pub struct EnumValueDef {
    /// Value name.
    pub name: String,
    /// Value number.
    pub number: i32,
}
