//! File-level generation driver.

use objproto_descriptor::{DescriptorPool, FileDescriptor};

use crate::error::CodegenError;
use crate::objc::{EnumGenerator, MessageGenerator};
use crate::options::GeneratorOptions;
use crate::printer::StringPrinter;

/// One generated output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the output directory.
    pub name: String,
    /// File content.
    pub content: String,
}

/// Generates Objective-C sources for the files of a descriptor pool.
pub struct Generator<'a> {
    pool: &'a DescriptorPool,
    options: &'a GeneratorOptions,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(pool: &'a DescriptorPool, options: &'a GeneratorOptions) -> Self {
        Self { pool, options }
    }

    /// Generates the output files of every file in the pool.
    #[must_use]
    pub fn generate(&self) -> Vec<GeneratedFile> {
        let output: Vec<_> = self
            .pool
            .files()
            .iter()
            .flat_map(|file| self.generate_file(file))
            .collect();
        tracing::debug!(
            "Generated {} files from {} proto files",
            output.len(),
            self.pool.files().len()
        );
        output
    }

    /// Generates the output files of one proto file, by name.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownFile` if the pool has no such file.
    pub fn generate_named(&self, name: &str) -> Result<Vec<GeneratedFile>, CodegenError> {
        let file = self
            .pool
            .file(name)
            .ok_or_else(|| CodegenError::UnknownFile {
                name: name.to_string(),
            })?;
        Ok(self.generate_file(file))
    }

    /// Generates the output files of one proto file.
    #[must_use]
    pub fn generate_file(&self, file: &FileDescriptor) -> Vec<GeneratedFile> {
        let mut output = Vec::with_capacity(file.messages.len() * 3 + file.enums.len() * 2);

        for message in &file.messages {
            let generator = MessageGenerator::new(message, self.options);
            tracing::trace!("Generating {} for {}", generator.class_name(), message.full_name);

            let mut printer = StringPrinter::new();
            generator.generate_or_builder_header(&mut printer);
            output.push(GeneratedFile {
                name: generator.or_builder_header_path(),
                content: printer.into_string(),
            });

            let mut printer = StringPrinter::new();
            generator.generate_header(&mut printer);
            output.push(GeneratedFile {
                name: generator.header_path(),
                content: printer.into_string(),
            });

            let mut printer = StringPrinter::new();
            generator.generate_source(&mut printer);
            output.push(GeneratedFile {
                name: generator.source_path(),
                content: printer.into_string(),
            });
        }

        for descriptor in &file.enums {
            let generator = EnumGenerator::new(descriptor, self.options);
            tracing::trace!(
                "Generating {} for {}",
                generator.class_name(),
                descriptor.type_ref.full_name
            );

            let mut printer = StringPrinter::new();
            generator.generate_header(&mut printer);
            output.push(GeneratedFile {
                name: generator.header_path(),
                content: printer.into_string(),
            });

            let mut printer = StringPrinter::new();
            generator.generate_source(&mut printer);
            output.push(GeneratedFile {
                name: generator.source_path(),
                content: printer.into_string(),
            });
        }

        output
    }
}
