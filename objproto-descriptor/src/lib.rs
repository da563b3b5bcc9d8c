//! # objproto Descriptor
//!
//! Protocol buffer descriptor model for the objproto code generator.
//!
//! This crate provides:
//! - Raw definitions for files, messages, fields and enums
//! - Conversion from `prost_types` descriptor protos
//! - Definition validation
//! - A resolved descriptor pool consumed by code generation

pub mod defs;
pub mod error;
pub mod pool;
pub mod proto;
pub mod types;
pub mod validation;

pub use defs::{EnumDef, EnumValueDef, FieldDef, FileDef, FileOptionsDef, MessageDef};
pub use error::DescriptorError;
pub use pool::{
    DescriptorPool, EnumDescriptor, FieldDescriptor, FileDescriptor, MessageDescriptor, TypeRef,
};
pub use proto::decode_descriptor_set;
pub use types::{FieldType, JavaType, Label, Syntax, TypeKind};
pub use validation::validate_file;
