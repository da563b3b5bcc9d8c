//! Message class generation.
//!
//! Each message produces three files:
//! - `<Class>OrBuilder.h` with the read accessor protocol
//! - `<Class>.h` with the message and builder interfaces
//! - `<Class>.m` with the runtime field metadata
//!
//! Forward declarations and imports are collected from every field before
//! any text is printed, so each file lists them once, sorted.

use std::collections::BTreeSet;

use objproto_descriptor::{JavaType, MessageDescriptor};

use super::field::{FieldGenerator, ForwardDeclaration, GenerateField, element_class};
use super::field_map::FieldGeneratorMap;
use super::names::{
    BYTE_STRING_CLASS, class_name, header_path, or_builder_header_path, source_path,
};
use crate::options::GeneratorOptions;
use crate::printer::{Printer, Variables};

/// Generator for the Objective-C classes of one message.
#[derive(Debug, Clone)]
pub struct MessageGenerator<'a> {
    descriptor: &'a MessageDescriptor,
    fields: FieldGeneratorMap<'a>,
    variables: Variables,
    value_classes: BTreeSet<String>,
    builder_classes: BTreeSet<String>,
}

impl<'a> MessageGenerator<'a> {
    /// Creates a generator for `descriptor`.
    #[must_use]
    pub fn new(descriptor: &'a MessageDescriptor, options: &GeneratorOptions) -> Self {
        let fields = FieldGeneratorMap::new(descriptor, options);
        let classname = class_name(&descriptor.type_ref, options);

        // Singular fields name these classes in accessors and instance
        // variables; the field generators leave them to us. String fields
        // expose their UTF-8 bytes as a ByteString.
        let value_classes: BTreeSet<String> = descriptor
            .fields
            .iter()
            .filter(|field| !field.is_repeated())
            .filter_map(|field| match field.java_type() {
                JavaType::String => Some(BYTE_STRING_CLASS.to_string()),
                _ => element_class(field, options),
            })
            .collect();
        let builder_classes = descriptor
            .fields
            .iter()
            .filter(|field| !field.is_repeated() && field.java_type() == JavaType::Message)
            .filter_map(|field| element_class(field, options))
            .map(|class| format!("{class}_Builder"))
            .collect();

        let mut variables = Variables::new();
        variables.insert("classname", classname);
        variables.insert("proto_file", descriptor.type_ref.proto_file.clone());
        variables.insert("header", header_path(&descriptor.type_ref));
        variables.insert(
            "or_builder_header",
            or_builder_header_path(&descriptor.type_ref),
        );
        variables.insert("field_count", descriptor.fields.len().to_string());

        Self {
            descriptor,
            fields,
            variables,
            value_classes,
            builder_classes,
        }
    }

    /// Returns the generated class name.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.variables["classname"]
    }

    /// Returns the field generators.
    #[must_use]
    pub const fn fields(&self) -> &FieldGeneratorMap<'a> {
        &self.fields
    }

    /// Returns the path of the message header.
    #[must_use]
    pub fn header_path(&self) -> String {
        header_path(&self.descriptor.type_ref)
    }

    /// Returns the path of the `OrBuilder` protocol header.
    #[must_use]
    pub fn or_builder_header_path(&self) -> String {
        or_builder_header_path(&self.descriptor.type_ref)
    }

    /// Returns the path of the implementation file.
    #[must_use]
    pub fn source_path(&self) -> String {
        source_path(&self.descriptor.type_ref)
    }

    fn generators(&self) -> impl Iterator<Item = &FieldGenerator<'a>> {
        self.descriptor.fields.iter().map(|field| self.fields.get(field))
    }

    fn value_class_declarations(&self, declarations: &mut BTreeSet<ForwardDeclaration>) {
        for class in &self.value_classes {
            declarations.insert(ForwardDeclaration::class(class.as_str()));
        }
    }

    /// Returns the forward declarations of the message header.
    ///
    /// The message's own class is left out since its `@interface` precedes
    /// every use. Its builder is declared.
    #[must_use]
    pub fn forward_declarations(&self) -> BTreeSet<ForwardDeclaration> {
        let mut declarations = BTreeSet::new();
        for generator in self.generators() {
            generator.collect_forward_declarations(&mut declarations);
        }
        self.value_class_declarations(&mut declarations);
        for class in &self.builder_classes {
            declarations.insert(ForwardDeclaration::class(class.as_str()));
        }
        declarations.remove(&ForwardDeclaration::class(self.class_name()));
        declarations.insert(ForwardDeclaration::class(format!(
            "{}_Builder",
            self.class_name()
        )));
        declarations
    }

    /// Returns the forward declarations of the `OrBuilder` protocol header.
    ///
    /// The protocol header can be imported on its own, so a message whose
    /// fields refer to its own type declares itself here.
    #[must_use]
    pub fn or_builder_forward_declarations(&self) -> BTreeSet<ForwardDeclaration> {
        let mut declarations = BTreeSet::new();
        for generator in self.generators() {
            generator.collect_message_or_builder_forward_declarations(&mut declarations);
        }
        self.value_class_declarations(&mut declarations);
        declarations
    }

    /// Returns the headers imported by the implementation file.
    #[must_use]
    pub fn source_imports(&self) -> BTreeSet<String> {
        let mut imports = BTreeSet::new();
        for generator in self.generators() {
            generator.collect_source_imports(&mut imports);
        }
        imports.remove(&self.variables["header"]);
        imports
    }

    fn print_preamble(&self, printer: &mut dyn Printer) {
        printer.print(
            &self.variables,
            "// Generated by the protocol buffer compiler.  DO NOT EDIT!\n\
             // source: $proto_file$\n\
             \n",
        );
    }

    fn print_declarations(printer: &mut dyn Printer, declarations: &BTreeSet<ForwardDeclaration>) {
        if declarations.is_empty() {
            return;
        }
        for declaration in declarations {
            printer.print_raw(&format!("{declaration}\n"));
        }
        printer.print_raw("\n");
    }

    /// Emits `<Class>OrBuilder.h`.
    pub fn generate_or_builder_header(&self, printer: &mut dyn Printer) {
        self.print_preamble(printer);
        printer.print_raw(
            "#import \"JreEmulation.h\"\n\
             #import \"com/google/protobuf/MessageOrBuilder.h\"\n\
             \n",
        );
        Self::print_declarations(printer, &self.or_builder_forward_declarations());

        printer.print(
            &self.variables,
            "@protocol $classname$OrBuilder <ComGoogleProtobufMessageOrBuilder>\n\n",
        );
        for generator in self.generators() {
            generator.generate_message_or_builder_protocol(printer);
        }
        printer.print(
            &self.variables,
            "\n@end\n\
             \n\
             J2OBJC_EMPTY_STATIC_INIT($classname$OrBuilder)\n\
             \n\
             J2OBJC_TYPE_LITERAL_HEADER($classname$OrBuilder)\n",
        );
    }

    /// Emits `<Class>.h`.
    pub fn generate_header(&self, printer: &mut dyn Printer) {
        self.print_preamble(printer);
        printer.print(
            &self.variables,
            "#import \"JreEmulation.h\"\n\
             #import \"com/google/protobuf/GeneratedMessage.h\"\n\
             #import \"$or_builder_header$\"\n\
             \n",
        );
        Self::print_declarations(printer, &self.forward_declarations());

        printer.print(
            &self.variables,
            "@interface $classname$ : ComGoogleProtobufGeneratedMessage<$classname$OrBuilder> {\n\
             \x20@package\n",
        );
        printer.indent();
        for generator in self.generators() {
            generator.generate_declaration(printer);
        }
        printer.outdent();
        printer.print(
            &self.variables,
            "}\n\
             \n\
             + ($classname$ *)getDefaultInstance;\n\
             \n\
             + ($classname$_Builder *)newBuilder;\n\
             \n\
             - ($classname$_Builder *)toBuilder;\n\
             \n\
             @end\n\
             \n\
             J2OBJC_STATIC_INIT($classname$)\n",
        );
        for generator in self.generators() {
            generator.generate_field_header(printer);
        }
        printer.print(
            &self.variables,
            "\n\
             J2OBJC_TYPE_LITERAL_HEADER($classname$)\n\
             \n\
             @interface $classname$_Builder : ComGoogleProtobufGeneratedMessage_Builder<$classname$OrBuilder>\n\
             \n",
        );
        for generator in self.generators() {
            generator.generate_field_builder_header(printer);
        }
        printer.print(
            &self.variables,
            "- ($classname$ *)build;\n\
             - ($classname$ *)buildPartial;\n\
             \n\
             @end\n\
             \n\
             J2OBJC_TYPE_LITERAL_HEADER($classname$_Builder)\n",
        );
    }

    /// Emits `<Class>.m`.
    pub fn generate_source(&self, printer: &mut dyn Printer) {
        self.print_preamble(printer);
        printer.print(
            &self.variables,
            "#import \"$header$\"\n\
             #import \"com/google/protobuf/ProtocolBuffers.h\"\n",
        );
        for import in self.source_imports() {
            printer.print_raw(&format!("#import \"{import}\"\n"));
        }
        printer.print_raw("\n");

        if self.fields.is_empty() {
            printer.print(
                &self.variables,
                "static CGPFieldData *$classname$_FieldData = NULL;\n",
            );
        } else {
            printer.print(
                &self.variables,
                "static CGPFieldData $classname$_FieldData[] = {\n",
            );
            printer.indent();
            for generator in self.generators() {
                generator.generate_field_data(printer);
            }
            printer.outdent();
            printer.print_raw("};\n");
        }

        printer.print(
            &self.variables,
            "\n\
             @implementation $classname$\n\
             \n\
             + (void)initialize {\n\
             \x20 if (self == [$classname$ class]) {\n\
             \x20   CGPInitMessage(self, [$classname$_Builder class], $classname$_FieldData, $field_count$);\n\
             \x20 }\n\
             }\n\
             \n\
             @end\n\
             \n\
             @implementation $classname$_Builder\n\
             \n\
             @end\n\
             \n\
             J2OBJC_CLASS_TYPE_LITERAL_SOURCE($classname$)\n\
             J2OBJC_CLASS_TYPE_LITERAL_SOURCE($classname$_Builder)\n",
        );
    }
}
