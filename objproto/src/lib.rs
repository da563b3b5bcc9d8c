//! # objproto
//!
//! Objective-C code generation for protocol buffer messages translated by
//! j2objc.
//!
//! ## Quick Start
//!
//! ```ignore
//! use objproto::prelude::*;
//!
//! let options = GeneratorOptions::parse("prefix=com.example.*=EX")?;
//! for file in generate_from_file(Path::new("trading.pb"), &options)? {
//!     std::fs::write(out_dir.join(&file.name), file.content)?;
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`descriptor`] - Descriptor definitions, validation and the resolved pool
//! - [`codegen`] - Field generators, message and file drivers

pub mod prelude;

/// Descriptor definitions, validation and resolution.
pub mod descriptor {
    pub use objproto_descriptor::*;
}

/// Objective-C code generation.
pub mod codegen {
    pub use objproto_codegen::*;
}

// Re-export commonly used items at the crate root
pub use objproto_codegen::{
    CodegenError, GeneratedFile, Generator, GeneratorOptions, generate,
    generate_from_descriptor_set, generate_from_file,
};
pub use objproto_descriptor::{DescriptorError, DescriptorPool};
