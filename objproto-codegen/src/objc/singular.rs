//! Optional and required fields.

use std::collections::BTreeSet;

use objproto_descriptor::{FieldDescriptor, JavaType};

use super::field::{GenerateField, field_variables};
use super::names::{BYTE_STRING_CLASS, header_path};
use crate::options::GeneratorOptions;
use crate::printer::{Printer, Variables};

/// Generator for a field holding at most one value.
///
/// Value classes (including the byte string class behind string fields) and
/// the builders of message values are declared by the message generator
/// itself, so a singular field adds no forward declarations of its own.
#[derive(Debug, Clone)]
pub struct SingularFieldGenerator<'a> {
    descriptor: &'a FieldDescriptor,
    variables: Variables,
    import: Option<String>,
}

impl<'a> SingularFieldGenerator<'a> {
    /// Creates a generator for a non-repeated field.
    #[must_use]
    pub fn new(descriptor: &'a FieldDescriptor, options: &GeneratorOptions) -> Self {
        debug_assert!(!descriptor.is_repeated());

        Self {
            descriptor,
            variables: field_variables(descriptor, options),
            import: descriptor.value_type.as_ref().map(header_path),
        }
    }
}

impl GenerateField for SingularFieldGenerator<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.descriptor
    }

    fn variables(&self) -> &Variables {
        &self.variables
    }

    fn generate_field_builder_header(&self, printer: &mut dyn Printer) {
        printer.print(
            &self.variables,
            "- ($classname$_Builder *)set$capitalized_name$With$parameter_type$:($storage_type$)value;\n",
        );
        match self.descriptor.java_type() {
            JavaType::Message => printer.print(
                &self.variables,
                "- ($classname$_Builder *)set$capitalized_name$WithBuilder:($value_class$_Builder *)builderForValue;\n\
                 - ($classname$_Builder *)merge$capitalized_name$With$parameter_type$:($storage_type$)value;\n",
            ),
            JavaType::String => printer.print(
                &self.variables,
                &format!(
                    "- ($classname$_Builder *)set$capitalized_name$BytesWith{BYTE_STRING_CLASS}:({BYTE_STRING_CLASS} *)value;\n"
                ),
            ),
            _ => {}
        }
        printer.print(
            &self.variables,
            "- ($classname$_Builder *)clear$capitalized_name$;\n",
        );
    }

    fn generate_message_or_builder_protocol(&self, printer: &mut dyn Printer) {
        if self.descriptor.has_presence {
            printer.print(&self.variables, "- (jboolean)has$capitalized_name$;\n");
        }
        printer.print(&self.variables, "- ($storage_type$)get$capitalized_name$;\n");
        if self.descriptor.java_type() == JavaType::String {
            printer.print(
                &self.variables,
                &format!("- ({BYTE_STRING_CLASS} *)get$capitalized_name$Bytes;\n"),
            );
        }
    }

    fn generate_declaration(&self, printer: &mut dyn Printer) {
        printer.print(&self.variables, "$storage_decl$$camelcase_name$_;\n");
    }

    fn collect_source_imports(&self, imports: &mut BTreeSet<String>) {
        if let Some(import) = &self.import {
            imports.insert(import.clone());
        }
    }
}
