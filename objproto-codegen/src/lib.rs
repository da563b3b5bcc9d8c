//! # objproto Codegen
//!
//! Objective-C code generation for protocol buffer messages translated by
//! j2objc.
//!
//! This crate provides:
//! - Per-field generators for singular and repeated fields
//! - A field generator map per message
//! - Message, enum and file drivers producing `.h` / `.m` sources
//! - Generator options parsed from the `protoc` plugin parameter

pub mod error;
pub mod generator;
pub mod objc;
pub mod options;
pub mod printer;

pub use error::CodegenError;
pub use generator::{GeneratedFile, Generator};
pub use objc::{
    EnumGenerator, FieldGenerator, FieldGeneratorMap, ForwardDeclaration, GenerateField,
    MessageGenerator, RepeatedFieldGenerator, SingularFieldGenerator,
};
pub use options::GeneratorOptions;
pub use printer::{Printer, StringPrinter, Variables};

use objproto_descriptor::{DescriptorPool, FileDef};

/// Generates Objective-C sources from file definitions.
///
/// # Arguments
/// * `files` - Every file needed to resolve type references
/// * `options` - Generator options
///
/// # Returns
/// Generated files, three per message and two per enum.
///
/// # Errors
/// Returns `CodegenError` if the definitions fail validation or resolution.
pub fn generate(
    files: &[FileDef],
    options: &GeneratorOptions,
) -> Result<Vec<GeneratedFile>, CodegenError> {
    let pool = DescriptorPool::new(files)?;
    Ok(Generator::new(&pool, options).generate())
}

/// Generates Objective-C sources from an encoded `FileDescriptorSet`.
///
/// # Errors
/// Returns `CodegenError` if decoding, resolution or generation fails.
pub fn generate_from_descriptor_set(
    bytes: &[u8],
    options: &GeneratorOptions,
) -> Result<Vec<GeneratedFile>, CodegenError> {
    let files = objproto_descriptor::decode_descriptor_set(bytes)?;
    generate(&files, options)
}

/// Generates Objective-C sources from a `FileDescriptorSet` file, as written
/// by `protoc --include_imports --descriptor_set_out=<path>`.
///
/// # Errors
/// Returns `CodegenError` if reading, decoding or generation fails.
pub fn generate_from_file(
    path: &std::path::Path,
    options: &GeneratorOptions,
) -> Result<Vec<GeneratedFile>, CodegenError> {
    let bytes = std::fs::read(path)?;
    generate_from_descriptor_set(&bytes, options)
}
