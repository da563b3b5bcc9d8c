//! Protocol buffer type definitions.
//!
//! This module contains the enumerations shared by raw definitions and the
//! resolved pool: declared field types, labels, syntax levels and the Java
//! value types the j2objc runtime maps fields onto.

/// Declared type of a field.
///
/// Discriminants follow `FieldDescriptorProto.Type` in `descriptor.proto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// 64-bit floating point.
    Double,
    /// 32-bit floating point.
    Float,
    /// Signed 64-bit varint.
    Int64,
    /// Unsigned 64-bit varint.
    Uint64,
    /// Signed 32-bit varint.
    Int32,
    /// Unsigned 64-bit fixed width.
    Fixed64,
    /// Unsigned 32-bit fixed width.
    Fixed32,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    String,
    /// Proto2 group.
    Group,
    /// Embedded message.
    Message,
    /// Arbitrary bytes.
    Bytes,
    /// Unsigned 32-bit varint.
    Uint32,
    /// Enum value.
    Enum,
    /// Signed 32-bit fixed width.
    Sfixed32,
    /// Signed 64-bit fixed width.
    Sfixed64,
    /// Zigzag-encoded signed 32-bit varint.
    Sint32,
    /// Zigzag-encoded signed 64-bit varint.
    Sint64,
}

impl FieldType {
    /// Converts a `descriptor.proto` type code.
    #[must_use]
    pub const fn from_i32(value: i32) -> Option<Self> {
        match value {
            1 => Some(Self::Double),
            2 => Some(Self::Float),
            3 => Some(Self::Int64),
            4 => Some(Self::Uint64),
            5 => Some(Self::Int32),
            6 => Some(Self::Fixed64),
            7 => Some(Self::Fixed32),
            8 => Some(Self::Bool),
            9 => Some(Self::String),
            10 => Some(Self::Group),
            11 => Some(Self::Message),
            12 => Some(Self::Bytes),
            13 => Some(Self::Uint32),
            14 => Some(Self::Enum),
            15 => Some(Self::Sfixed32),
            16 => Some(Self::Sfixed64),
            17 => Some(Self::Sint32),
            18 => Some(Self::Sint64),
            _ => None,
        }
    }

    /// Returns the type keyword used in `.proto` sources.
    #[must_use]
    pub const fn proto_name(&self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::Float => "float",
            Self::Int64 => "int64",
            Self::Uint64 => "uint64",
            Self::Int32 => "int32",
            Self::Fixed64 => "fixed64",
            Self::Fixed32 => "fixed32",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Group => "group",
            Self::Message => "message",
            Self::Bytes => "bytes",
            Self::Uint32 => "uint32",
            Self::Enum => "enum",
            Self::Sfixed32 => "sfixed32",
            Self::Sfixed64 => "sfixed64",
            Self::Sint32 => "sint32",
            Self::Sint64 => "sint64",
        }
    }

    /// Parses a scalar type keyword.
    ///
    /// Message, group and enum types are named by their type name in
    /// `.proto` sources and are not recognized here.
    #[must_use]
    pub fn from_proto_name(name: &str) -> Option<Self> {
        match name {
            "double" => Some(Self::Double),
            "float" => Some(Self::Float),
            "int64" => Some(Self::Int64),
            "uint64" => Some(Self::Uint64),
            "int32" => Some(Self::Int32),
            "fixed64" => Some(Self::Fixed64),
            "fixed32" => Some(Self::Fixed32),
            "bool" => Some(Self::Bool),
            "string" => Some(Self::String),
            "bytes" => Some(Self::Bytes),
            "uint32" => Some(Self::Uint32),
            "sfixed32" => Some(Self::Sfixed32),
            "sfixed64" => Some(Self::Sfixed64),
            "sint32" => Some(Self::Sint32),
            "sint64" => Some(Self::Sint64),
            _ => None,
        }
    }

    /// Returns the upper-case name used by the runtime's field type enum.
    #[must_use]
    pub const fn descriptor_name(&self) -> &'static str {
        match self {
            Self::Double => "DOUBLE",
            Self::Float => "FLOAT",
            Self::Int64 => "INT64",
            Self::Uint64 => "UINT64",
            Self::Int32 => "INT32",
            Self::Fixed64 => "FIXED64",
            Self::Fixed32 => "FIXED32",
            Self::Bool => "BOOL",
            Self::String => "STRING",
            Self::Group => "GROUP",
            Self::Message => "MESSAGE",
            Self::Bytes => "BYTES",
            Self::Uint32 => "UINT32",
            Self::Enum => "ENUM",
            Self::Sfixed32 => "SFIXED32",
            Self::Sfixed64 => "SFIXED64",
            Self::Sint32 => "SINT32",
            Self::Sint64 => "SINT64",
        }
    }

    /// Returns the Java value type the field is exposed as.
    #[must_use]
    pub const fn java_type(&self) -> JavaType {
        match self {
            Self::Int32
            | Self::Uint32
            | Self::Sint32
            | Self::Fixed32
            | Self::Sfixed32 => JavaType::Int,
            Self::Int64
            | Self::Uint64
            | Self::Sint64
            | Self::Fixed64
            | Self::Sfixed64 => JavaType::Long,
            Self::Float => JavaType::Float,
            Self::Double => JavaType::Double,
            Self::Bool => JavaType::Boolean,
            Self::String => JavaType::String,
            Self::Bytes => JavaType::ByteString,
            Self::Enum => JavaType::Enum,
            Self::Message | Self::Group => JavaType::Message,
        }
    }

    /// Returns true if the field names another message or enum.
    #[must_use]
    pub const fn references_type(&self) -> bool {
        matches!(self, Self::Message | Self::Group | Self::Enum)
    }

    /// Returns true if repeated values of this type can use packed encoding.
    #[must_use]
    pub const fn is_packable(&self) -> bool {
        !matches!(
            self,
            Self::String | Self::Bytes | Self::Message | Self::Group
        )
    }
}

/// Java value type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JavaType {
    /// `int`.
    Int,
    /// `long`.
    Long,
    /// `float`.
    Float,
    /// `double`.
    Double,
    /// `boolean`.
    Boolean,
    /// `java.lang.String`.
    String,
    /// `com.google.protobuf.ByteString`.
    ByteString,
    /// Generated enum class.
    Enum,
    /// Generated message class.
    Message,
}

impl JavaType {
    /// Returns true for Java primitives.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::Int | Self::Long | Self::Float | Self::Double | Self::Boolean
        )
    }
}

/// Field cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Label {
    /// Zero or one value.
    #[default]
    Optional,
    /// Exactly one value (proto2 only).
    Required,
    /// Ordered collection of values.
    Repeated,
}

impl Label {
    /// Converts a `descriptor.proto` label code.
    #[must_use]
    pub const fn from_i32(value: i32) -> Option<Self> {
        match value {
            1 => Some(Self::Optional),
            2 => Some(Self::Required),
            3 => Some(Self::Repeated),
            _ => None,
        }
    }

    /// Returns true for repeated fields.
    #[must_use]
    pub const fn is_repeated(&self) -> bool {
        matches!(self, Self::Repeated)
    }
}

/// Syntax level declared by a `.proto` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Syntax {
    /// `syntax = "proto2"` (also the default when unspecified).
    #[default]
    Proto2,
    /// `syntax = "proto3"`.
    Proto3,
}

impl Syntax {
    /// Parses the `syntax` string of a file descriptor.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "" | "proto2" => Some(Self::Proto2),
            "proto3" => Some(Self::Proto3),
            _ => None,
        }
    }
}

/// Kind of a named type in the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Message type.
    Message,
    /// Enum type.
    Enum,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_from_i32() {
        assert_eq!(FieldType::from_i32(1), Some(FieldType::Double));
        assert_eq!(FieldType::from_i32(11), Some(FieldType::Message));
        assert_eq!(FieldType::from_i32(18), Some(FieldType::Sint64));
        assert_eq!(FieldType::from_i32(0), None);
        assert_eq!(FieldType::from_i32(19), None);
    }

    #[test]
    fn test_field_type_from_proto_name() {
        assert_eq!(FieldType::from_proto_name("int32"), Some(FieldType::Int32));
        assert_eq!(FieldType::from_proto_name("bytes"), Some(FieldType::Bytes));
        assert_eq!(FieldType::from_proto_name("message"), None);
        assert_eq!(FieldType::from_proto_name("Foo"), None);
    }

    #[test]
    fn test_field_type_java_type() {
        assert_eq!(FieldType::Sfixed32.java_type(), JavaType::Int);
        assert_eq!(FieldType::Uint64.java_type(), JavaType::Long);
        assert_eq!(FieldType::Group.java_type(), JavaType::Message);
        assert_eq!(FieldType::Bytes.java_type(), JavaType::ByteString);
        assert!(JavaType::Boolean.is_primitive());
        assert!(!JavaType::String.is_primitive());
    }

    #[test]
    fn test_field_type_packable() {
        assert!(FieldType::Int32.is_packable());
        assert!(FieldType::Enum.is_packable());
        assert!(!FieldType::String.is_packable());
        assert!(!FieldType::Message.is_packable());
    }

    #[test]
    fn test_label_from_i32() {
        assert_eq!(Label::from_i32(1), Some(Label::Optional));
        assert_eq!(Label::from_i32(3), Some(Label::Repeated));
        assert_eq!(Label::from_i32(4), None);
        assert!(Label::Repeated.is_repeated());
        assert!(!Label::Required.is_repeated());
    }

    #[test]
    fn test_syntax_parse() {
        assert_eq!(Syntax::parse(""), Some(Syntax::Proto2));
        assert_eq!(Syntax::parse("proto3"), Some(Syntax::Proto3));
        assert_eq!(Syntax::parse("editions"), None);
    }
}
