//! Conversion from `prost_types` descriptor protos.
//!
//! `protoc` describes its input as `FileDescriptorProto` messages, either
//! inside a plugin request or as a `FileDescriptorSet` written with
//! `--descriptor_set_out`. This module turns them into raw definitions.

use crate::defs::{EnumDef, FieldDef, FileDef, FileOptionsDef, MessageDef};
use crate::error::DescriptorError;
use crate::types::{FieldType, Label, Syntax};
use prost::Message;
use prost_types::{
    DescriptorProto, EnumDescriptorProto, FieldDescriptorProto, FileDescriptorProto,
    FileDescriptorSet,
};

/// Decodes a binary `FileDescriptorSet` into file definitions.
///
/// # Arguments
/// * `bytes` - Encoded `FileDescriptorSet`
///
/// # Returns
/// File definitions in the order they appear in the set.
///
/// # Errors
/// Returns `DescriptorError` if decoding fails or a file cannot be converted.
pub fn decode_descriptor_set(bytes: &[u8]) -> Result<Vec<FileDef>, DescriptorError> {
    let set = FileDescriptorSet::decode(bytes)?;
    set.file.iter().map(FileDef::try_from).collect()
}

impl TryFrom<&FileDescriptorProto> for FileDef {
    type Error = DescriptorError;

    fn try_from(proto: &FileDescriptorProto) -> Result<Self, Self::Error> {
        let name = proto
            .name
            .clone()
            .ok_or_else(|| DescriptorError::missing_attr("file", "name"))?;
        let syntax = Syntax::parse(proto.syntax()).ok_or_else(|| {
            DescriptorError::validation(format!(
                "unsupported syntax '{}' in file '{}'",
                proto.syntax(),
                name
            ))
        })?;

        let options = proto
            .options
            .as_ref()
            .map(|o| FileOptionsDef {
                java_package: o.java_package.clone(),
                java_outer_classname: o.java_outer_classname.clone(),
                java_multiple_files: o.java_multiple_files(),
            })
            .unwrap_or_default();

        Ok(Self {
            name,
            package: proto.package().to_string(),
            syntax,
            options,
            dependencies: proto.dependency.clone(),
            messages: proto
                .message_type
                .iter()
                .map(MessageDef::try_from)
                .collect::<Result<_, _>>()?,
            enums: proto
                .enum_type
                .iter()
                .map(EnumDef::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl TryFrom<&DescriptorProto> for MessageDef {
    type Error = DescriptorError;

    fn try_from(proto: &DescriptorProto) -> Result<Self, Self::Error> {
        let name = proto
            .name
            .clone()
            .ok_or_else(|| DescriptorError::missing_attr("message", "name"))?;

        Ok(Self {
            name,
            fields: proto
                .field
                .iter()
                .map(FieldDef::try_from)
                .collect::<Result<_, _>>()?,
            nested_messages: proto
                .nested_type
                .iter()
                .map(MessageDef::try_from)
                .collect::<Result<_, _>>()?,
            nested_enums: proto
                .enum_type
                .iter()
                .map(EnumDef::try_from)
                .collect::<Result<_, _>>()?,
            map_entry: proto.options.as_ref().is_some_and(|o| o.map_entry()),
        })
    }
}

impl TryFrom<&FieldDescriptorProto> for FieldDef {
    type Error = DescriptorError;

    fn try_from(proto: &FieldDescriptorProto) -> Result<Self, Self::Error> {
        let name = proto
            .name
            .clone()
            .ok_or_else(|| DescriptorError::missing_attr("field", "name"))?;
        let number = proto
            .number
            .ok_or_else(|| DescriptorError::missing_attr(format!("field '{name}'"), "number"))?;

        let raw_label = proto.label.unwrap_or(1);
        let label = Label::from_i32(raw_label).ok_or_else(|| DescriptorError::UnknownLabel {
            field: name.clone(),
            value: raw_label,
        })?;

        let raw_type = proto
            .r#type
            .ok_or_else(|| DescriptorError::missing_attr(format!("field '{name}'"), "type"))?;
        let field_type =
            FieldType::from_i32(raw_type).ok_or_else(|| DescriptorError::UnknownFieldType {
                field: name.clone(),
                value: raw_type,
            })?;

        Ok(Self {
            name,
            number,
            label,
            field_type,
            type_name: proto.type_name.clone().filter(|t| !t.is_empty()),
            default_value: proto.default_value.clone(),
            packed: proto.options.as_ref().and_then(|o| o.packed),
            proto3_optional: proto.proto3_optional(),
        })
    }
}

impl TryFrom<&EnumDescriptorProto> for EnumDef {
    type Error = DescriptorError;

    fn try_from(proto: &EnumDescriptorProto) -> Result<Self, Self::Error> {
        let name = proto
            .name
            .clone()
            .ok_or_else(|| DescriptorError::missing_attr("enum", "name"))?;

        let mut enum_def = EnumDef::new(name);
        for value in &proto.value {
            enum_def.add_value(value.name(), value.number());
        }
        Ok(enum_def)
    }
}
