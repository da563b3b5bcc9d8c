//! Repeated fields, exposed as `JavaUtilList` values.

use std::collections::BTreeSet;

use objproto_descriptor::FieldDescriptor;

use super::field::{ForwardDeclaration, GenerateField, element_class, field_variables};
use crate::options::GeneratorOptions;
use crate::printer::{Printer, Variables};

const LIST_PROTOCOL: &str = "JavaUtilList";
const ITERABLE_PROTOCOL: &str = "JavaLangIterable";

/// Generator for a field holding a list of values.
#[derive(Debug, Clone)]
pub struct RepeatedFieldGenerator<'a> {
    descriptor: &'a FieldDescriptor,
    variables: Variables,
    element_class: Option<String>,
}

impl<'a> RepeatedFieldGenerator<'a> {
    /// Creates a generator for a repeated field.
    #[must_use]
    pub fn new(descriptor: &'a FieldDescriptor, options: &GeneratorOptions) -> Self {
        debug_assert!(descriptor.is_repeated());

        Self {
            descriptor,
            variables: field_variables(descriptor, options),
            element_class: element_class(descriptor, options),
        }
    }

    fn insert_element_class(&self, declarations: &mut BTreeSet<ForwardDeclaration>) {
        if let Some(class) = &self.element_class {
            declarations.insert(ForwardDeclaration::class(class.as_str()));
        }
    }
}

impl GenerateField for RepeatedFieldGenerator<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.descriptor
    }

    fn variables(&self) -> &Variables {
        &self.variables
    }

    fn generate_field_builder_header(&self, printer: &mut dyn Printer) {
        printer.print(
            &self.variables,
            "- ($classname$_Builder *)add$capitalized_name$With$parameter_type$:($storage_type$)value;\n\
             - ($classname$_Builder *)set$capitalized_name$WithInt:(jint)index\n\
             \x20   with$parameter_type$:($storage_type$)value;\n\
             - ($classname$_Builder *)addAll$capitalized_name$WithJavaLangIterable:(id<JavaLangIterable>)values;\n\
             - ($classname$_Builder *)clear$capitalized_name$;\n",
        );
    }

    fn generate_message_or_builder_protocol(&self, printer: &mut dyn Printer) {
        printer.print(
            &self.variables,
            "- (jint)get$capitalized_name$Count;\n\
             - (id<JavaUtilList>)get$capitalized_name$List;\n\
             - ($storage_type$)get$capitalized_name$WithInt:(jint)index;\n",
        );
    }

    fn generate_declaration(&self, printer: &mut dyn Printer) {
        printer.print(&self.variables, "id<JavaUtilList> $camelcase_name$_;\n");
    }

    fn collect_forward_declarations(&self, declarations: &mut BTreeSet<ForwardDeclaration>) {
        declarations.insert(ForwardDeclaration::protocol(ITERABLE_PROTOCOL));
        declarations.insert(ForwardDeclaration::protocol(LIST_PROTOCOL));
        self.insert_element_class(declarations);
    }

    fn collect_message_or_builder_forward_declarations(
        &self,
        declarations: &mut BTreeSet<ForwardDeclaration>,
    ) {
        declarations.insert(ForwardDeclaration::protocol(LIST_PROTOCOL));
        self.insert_element_class(declarations);
    }
}
