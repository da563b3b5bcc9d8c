//! Field generators of one message, indexed by field.

use objproto_descriptor::{FieldDescriptor, MessageDescriptor};

use super::field::{FieldGenerator, GenerateField};
use crate::options::GeneratorOptions;

/// One [`FieldGenerator`] per field of a message, in declaration order.
///
/// Built once per message and read-only afterwards, so repeated lookups of
/// the same field return the same generator.
#[derive(Debug, Clone)]
pub struct FieldGeneratorMap<'a> {
    descriptor: &'a MessageDescriptor,
    generators: Vec<FieldGenerator<'a>>,
}

impl<'a> FieldGeneratorMap<'a> {
    /// Creates a generator for every field of `descriptor`.
    #[must_use]
    pub fn new(descriptor: &'a MessageDescriptor, options: &GeneratorOptions) -> Self {
        let generators: Vec<_> = descriptor
            .fields
            .iter()
            .map(|field| FieldGenerator::new(field, options))
            .collect();

        tracing::debug!(
            "Created {} field generators for {} ({} repeated)",
            generators.len(),
            descriptor.full_name,
            generators.iter().filter(|g| g.is_repeated()).count()
        );

        Self {
            descriptor,
            generators,
        }
    }

    /// Returns the generator for `field`.
    ///
    /// Fields are matched by identity: `field` must be the very descriptor
    /// the map was built from, not an equal one from another pool.
    ///
    /// # Panics
    /// Panics if `field` does not belong to this map's message. Asking for a
    /// foreign field is a bug in the caller.
    #[must_use]
    pub fn get(&self, field: &FieldDescriptor) -> &FieldGenerator<'a> {
        self.generators
            .get(field.index)
            .filter(|g| std::ptr::eq(g.descriptor(), field))
            .unwrap_or_else(|| {
                panic!(
                    "field {} does not belong to message {}",
                    field.full_name, self.descriptor.full_name
                )
            })
    }

    /// Returns the message the generators were built for.
    #[must_use]
    pub const fn descriptor(&self) -> &'a MessageDescriptor {
        self.descriptor
    }

    /// Returns the generators in field declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldGenerator<'a>> {
        self.generators.iter()
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Returns true if the message has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}
