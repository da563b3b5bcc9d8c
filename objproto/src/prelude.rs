//! Prelude module for convenient imports.
//!
//! ```ignore
//! use objproto::prelude::*;
//! ```

// Descriptor types
pub use objproto_descriptor::{
    DescriptorError, DescriptorPool, EnumDef, FieldDef, FieldDescriptor, FieldType, FileDef,
    Label, MessageDef, MessageDescriptor, Syntax,
};

// Generation
pub use objproto_codegen::{
    CodegenError, EnumGenerator, FieldGenerator, FieldGeneratorMap, ForwardDeclaration,
    GenerateField, GeneratedFile, Generator, GeneratorOptions, MessageGenerator, Printer,
    StringPrinter, generate, generate_from_descriptor_set, generate_from_file,
};
