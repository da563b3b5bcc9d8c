//! Per-field code generation contract.
//!
//! Every field of a message is handled by exactly one [`FieldGenerator`].
//! The message generator asks it for text fragments (accessor declarations,
//! instance variables, runtime metadata) and for the names it needs declared
//! or imported, and places those fragments into the generated files.
//!
//! Fragments a field kind does not customize come from the provided methods
//! of [`GenerateField`]; the two concrete generators override the rest.

use std::collections::BTreeSet;
use std::fmt;

use objproto_descriptor::{FieldDescriptor, FieldType, JavaType, Label};

use super::names::{BYTE_STRING_CLASS, class_name, field_camel_name, field_capitalized_name};
use super::repeated::RepeatedFieldGenerator;
use super::singular::SingularFieldGenerator;
use crate::options::GeneratorOptions;
use crate::printer::{Printer, Variables};

/// Name that must be declared before a generated header can mention it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ForwardDeclaration {
    /// `@class Name;`
    Class(String),
    /// `@protocol Name;`
    Protocol(String),
}

impl ForwardDeclaration {
    /// Creates a class declaration.
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(name.into())
    }

    /// Creates a protocol declaration.
    pub fn protocol(name: impl Into<String>) -> Self {
        Self::Protocol(name.into())
    }

    /// Returns the declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Class(name) | Self::Protocol(name) => name,
        }
    }
}

impl fmt::Display for ForwardDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(name) => write!(f, "@class {name};"),
            Self::Protocol(name) => write!(f, "@protocol {name};"),
        }
    }
}

const FIELD_HEADER: &str = "\
\n\
inline jint $classname$_get_$upper_name$_FIELD_NUMBER(void);\n\
#define $classname$_$upper_name$_FIELD_NUMBER $field_number$\n\
J2OBJC_STATIC_FIELD_CONSTANT($classname$, $upper_name$_FIELD_NUMBER, jint)\n";

const FIELD_DATA: &str = "\
{\n\
  .name = \"$camelcase_name$\",\n\
  .javaName = \"$capitalized_name$\",\n\
  .number = $field_number$,\n\
  .flags = $flags$,\n\
  .type = ComGoogleProtobufDescriptors_FieldDescriptor_Type_Enum_$field_type$,\n\
  .defaultValue.value$value_kind$ = $default_value$,\n\
  .className = $field_class_name$,\n\
},\n";

/// Code fragments a field contributes to its message's generated files.
///
/// The `generate_*` methods append to the printer and never fail. The
/// `collect_*` methods only insert into the given set; inserting a name that
/// is already present leaves the set unchanged.
pub trait GenerateField {
    /// Returns the field this generator was built for.
    fn descriptor(&self) -> &FieldDescriptor;

    /// Returns the template variables derived from the field.
    fn variables(&self) -> &Variables;

    /// Emits the field number constant declared in the message header.
    fn generate_field_header(&self, printer: &mut dyn Printer) {
        printer.print(self.variables(), FIELD_HEADER);
    }

    /// Emits the builder accessor declarations.
    fn generate_field_builder_header(&self, printer: &mut dyn Printer);

    /// Emits the read accessor declarations of the `OrBuilder` protocol.
    fn generate_message_or_builder_protocol(&self, printer: &mut dyn Printer);

    /// Emits the instance variable declaration.
    fn generate_declaration(&self, printer: &mut dyn Printer);

    /// Emits the runtime field metadata entry.
    fn generate_field_data(&self, printer: &mut dyn Printer) {
        printer.print(self.variables(), FIELD_DATA);
    }

    /// Adds forward declarations needed by the message header.
    fn collect_forward_declarations(&self, _declarations: &mut BTreeSet<ForwardDeclaration>) {}

    /// Adds forward declarations needed by the `OrBuilder` protocol header.
    fn collect_message_or_builder_forward_declarations(
        &self,
        _declarations: &mut BTreeSet<ForwardDeclaration>,
    ) {
    }

    /// Adds headers the message implementation file must import.
    fn collect_source_imports(&self, _imports: &mut BTreeSet<String>) {}
}

/// Generator for one field, chosen by the field's label.
#[derive(Debug, Clone)]
pub enum FieldGenerator<'a> {
    /// Optional or required field.
    Singular(SingularFieldGenerator<'a>),
    /// Repeated field, including map fields.
    Repeated(RepeatedFieldGenerator<'a>),
}

impl<'a> FieldGenerator<'a> {
    /// Creates the generator matching the field's label.
    #[must_use]
    pub fn new(descriptor: &'a FieldDescriptor, options: &GeneratorOptions) -> Self {
        match descriptor.label {
            Label::Repeated => Self::Repeated(RepeatedFieldGenerator::new(descriptor, options)),
            Label::Optional | Label::Required => {
                Self::Singular(SingularFieldGenerator::new(descriptor, options))
            }
        }
    }

    /// Returns true for the repeated variant.
    #[must_use]
    pub const fn is_repeated(&self) -> bool {
        matches!(self, Self::Repeated(_))
    }
}

impl GenerateField for FieldGenerator<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        match self {
            Self::Singular(g) => g.descriptor(),
            Self::Repeated(g) => g.descriptor(),
        }
    }

    fn variables(&self) -> &Variables {
        match self {
            Self::Singular(g) => g.variables(),
            Self::Repeated(g) => g.variables(),
        }
    }

    fn generate_field_header(&self, printer: &mut dyn Printer) {
        match self {
            Self::Singular(g) => g.generate_field_header(printer),
            Self::Repeated(g) => g.generate_field_header(printer),
        }
    }

    fn generate_field_builder_header(&self, printer: &mut dyn Printer) {
        match self {
            Self::Singular(g) => g.generate_field_builder_header(printer),
            Self::Repeated(g) => g.generate_field_builder_header(printer),
        }
    }

    fn generate_message_or_builder_protocol(&self, printer: &mut dyn Printer) {
        match self {
            Self::Singular(g) => g.generate_message_or_builder_protocol(printer),
            Self::Repeated(g) => g.generate_message_or_builder_protocol(printer),
        }
    }

    fn generate_declaration(&self, printer: &mut dyn Printer) {
        match self {
            Self::Singular(g) => g.generate_declaration(printer),
            Self::Repeated(g) => g.generate_declaration(printer),
        }
    }

    fn generate_field_data(&self, printer: &mut dyn Printer) {
        match self {
            Self::Singular(g) => g.generate_field_data(printer),
            Self::Repeated(g) => g.generate_field_data(printer),
        }
    }

    fn collect_forward_declarations(&self, declarations: &mut BTreeSet<ForwardDeclaration>) {
        match self {
            Self::Singular(g) => g.collect_forward_declarations(declarations),
            Self::Repeated(g) => g.collect_forward_declarations(declarations),
        }
    }

    fn collect_message_or_builder_forward_declarations(
        &self,
        declarations: &mut BTreeSet<ForwardDeclaration>,
    ) {
        match self {
            Self::Singular(g) => g.collect_message_or_builder_forward_declarations(declarations),
            Self::Repeated(g) => g.collect_message_or_builder_forward_declarations(declarations),
        }
    }

    fn collect_source_imports(&self, imports: &mut BTreeSet<String>) {
        match self {
            Self::Singular(g) => g.collect_source_imports(imports),
            Self::Repeated(g) => g.collect_source_imports(imports),
        }
    }
}

/// Objective-C type of a field value as stored and passed to accessors.
#[must_use]
pub fn storage_type(field: &FieldDescriptor, options: &GeneratorOptions) -> String {
    match field.java_type() {
        JavaType::Int => "jint".to_string(),
        JavaType::Long => "jlong".to_string(),
        JavaType::Float => "jfloat".to_string(),
        JavaType::Double => "jdouble".to_string(),
        JavaType::Boolean => "jboolean".to_string(),
        JavaType::String => "NSString *".to_string(),
        JavaType::ByteString => format!("{BYTE_STRING_CLASS} *"),
        JavaType::Enum | JavaType::Message => format!("{} *", value_class(field, options)),
    }
}

/// Class of the field's element value, for fields whose values are objects
/// other than `NSString`.
#[must_use]
pub fn element_class(field: &FieldDescriptor, options: &GeneratorOptions) -> Option<String> {
    match field.java_type() {
        JavaType::Enum | JavaType::Message => Some(value_class(field, options)),
        JavaType::ByteString => Some(BYTE_STRING_CLASS.to_string()),
        _ => None,
    }
}

fn value_class(field: &FieldDescriptor, options: &GeneratorOptions) -> String {
    field
        .value_type
        .as_ref()
        .map(|t| class_name(t, options))
        .unwrap_or_else(|| "id".to_string())
}

fn parameter_type(field: &FieldDescriptor, options: &GeneratorOptions) -> String {
    match field.java_type() {
        JavaType::Int => "Int".to_string(),
        JavaType::Long => "Long".to_string(),
        JavaType::Float => "Float".to_string(),
        JavaType::Double => "Double".to_string(),
        JavaType::Boolean => "Boolean".to_string(),
        JavaType::String => "NSString".to_string(),
        JavaType::ByteString => BYTE_STRING_CLASS.to_string(),
        JavaType::Enum | JavaType::Message => value_class(field, options),
    }
}

fn flags(field: &FieldDescriptor) -> String {
    let mut flags = Vec::new();
    if field.is_required() {
        flags.push("CGPFieldFlagRequired");
    }
    if field.is_repeated() {
        flags.push("CGPFieldFlagRepeated");
    }
    if field.packed {
        flags.push("CGPFieldFlagPacked");
    }
    if flags.is_empty() {
        "0".to_string()
    } else {
        flags.join(" | ")
    }
}

/// Returns the metadata default value kind and its Objective-C literal.
fn default_value(field: &FieldDescriptor) -> (&'static str, String) {
    let text = field.default_value.as_deref();
    match field.java_type() {
        JavaType::Int => ("Int", int_literal(field.field_type, text)),
        JavaType::Long => ("Long", long_literal(field.field_type, text)),
        JavaType::Float => ("Float", float_literal(text, "f")),
        JavaType::Double => ("Double", float_literal(text, "")),
        JavaType::Boolean => ("Bool", (text == Some("true")).to_string()),
        JavaType::String => ("Id", format!("@\"{}\"", escape_objc(text.unwrap_or("")))),
        JavaType::ByteString | JavaType::Enum | JavaType::Message => ("Id", "nil".to_string()),
    }
}

// Unsigned values are stored in Java's signed types with the same bits.
fn int_literal(field_type: FieldType, text: Option<&str>) -> String {
    let Some(text) = text else {
        return "0".to_string();
    };
    let value = match field_type {
        FieldType::Uint32 | FieldType::Fixed32 => text.parse::<u32>().ok().map(|v| v as i32),
        _ => text.parse::<i32>().ok(),
    };
    match value {
        Some(i32::MIN) => "INT32_MIN".to_string(),
        Some(value) => value.to_string(),
        None => text.to_string(),
    }
}

fn long_literal(field_type: FieldType, text: Option<&str>) -> String {
    let Some(text) = text else {
        return "0LL".to_string();
    };
    let value = match field_type {
        FieldType::Uint64 | FieldType::Fixed64 => text.parse::<u64>().ok().map(|v| v as i64),
        _ => text.parse::<i64>().ok(),
    };
    match value {
        Some(i64::MIN) => "LLONG_MIN".to_string(),
        Some(value) => format!("{value}LL"),
        None => format!("{text}LL"),
    }
}

fn float_literal(text: Option<&str>, suffix: &str) -> String {
    match text {
        None => format!("0.0{suffix}"),
        Some("inf") => "INFINITY".to_string(),
        Some("-inf") => "-INFINITY".to_string(),
        Some("nan") => "NAN".to_string(),
        Some(value) if value.contains(['.', 'e', 'E']) => format!("{value}{suffix}"),
        Some(value) => format!("{value}.0{suffix}"),
    }
}

fn escape_objc(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            // `??x` would otherwise read as a trigraph
            '?' => escaped.push_str("\\?"),
            c if c.is_ascii_control() => escaped.push_str(&format!("\\{:03o}", u32::from(c))),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Builds the variables shared by every field template.
pub(crate) fn field_variables(field: &FieldDescriptor, options: &GeneratorOptions) -> Variables {
    let storage = storage_type(field, options);
    let storage_decl = if storage.ends_with('*') {
        storage.clone()
    } else {
        format!("{storage} ")
    };
    let (value_kind, default_value) = default_value(field);

    let mut variables = Variables::new();
    variables.insert("classname", class_name(&field.containing_type, options));
    variables.insert("camelcase_name", field_camel_name(field));
    variables.insert("capitalized_name", field_capitalized_name(field));
    variables.insert("upper_name", field.name.to_ascii_uppercase());
    variables.insert("field_number", field.number.to_string());
    variables.insert("storage_type", storage);
    variables.insert("storage_decl", storage_decl);
    variables.insert("parameter_type", parameter_type(field, options));
    variables.insert("field_type", field.field_type.descriptor_name().to_string());
    variables.insert("flags", flags(field));
    variables.insert("value_kind", value_kind.to_string());
    variables.insert("default_value", default_value);
    match &field.value_type {
        Some(t) => {
            let value_class = class_name(t, options);
            variables.insert("field_class_name", format!("\"{value_class}\""));
            variables.insert("value_class", value_class);
        }
        None => {
            variables.insert("field_class_name", "NULL".to_string());
        }
    }
    variables
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::StringPrinter;
    use objproto_descriptor::{DescriptorPool, EnumDef, FieldDef, FileDef, MessageDef, Syntax};

    fn pool() -> DescriptorPool {
        let mut inner = MessageDef::new("Inner");
        inner.add_field(FieldDef::new("x", 1, Label::Optional, FieldType::Int32));

        let optional = |name: &str, number: i32, field_type: FieldType, default: &str| {
            FieldDef::new(name, number, Label::Optional, field_type).with_default(default)
        };

        let mut outer = MessageDef::new("Outer");
        outer.add_field(FieldDef::new("count", 1, Label::Required, FieldType::Int32));
        outer.add_field(optional("big_value", 2, FieldType::Int64, "-5"));
        outer.add_field(optional("ratio", 3, FieldType::Float, "1"));
        outer.add_field(optional("label", 4, FieldType::String, "say \"hi\""));
        outer.add_field(FieldDef::message("inner", 5, Label::Optional, "Inner"));
        outer.add_field(FieldDef::new("samples", 6, Label::Repeated, FieldType::Double));
        outer.add_field(optional("flag", 7, FieldType::Bool, "true"));
        outer.add_field(optional("min_long", 8, FieldType::Int64, "-9223372036854775808"));
        outer.add_field(optional("max_u64", 9, FieldType::Uint64, "18446744073709551615"));
        outer.add_field(optional("big_u32", 10, FieldType::Fixed32, "4294967295"));
        outer.add_field(optional("min_int", 11, FieldType::Sint32, "-2147483648"));
        outer.add_field(optional("odd_text", 12, FieldType::String, "a??=b\u{1}"));

        let mut file = FileDef::new("test/outer.proto", "test").with_java_package("com.example");
        file = file.with_java_multiple_files(true).with_syntax(Syntax::Proto2);
        file.add_message(inner);
        file.add_message(outer);
        DescriptorPool::new(&[file]).expect("Failed to resolve")
    }

    fn field<'p>(pool: &'p DescriptorPool, name: &str) -> &'p FieldDescriptor {
        pool.message("test.Outer")
            .and_then(|m| m.field(name))
            .expect("field")
    }

    #[test]
    fn test_forward_declaration_display_and_order() {
        let mut set = BTreeSet::new();
        set.insert(ForwardDeclaration::protocol("JavaUtilList"));
        set.insert(ForwardDeclaration::class("ComExampleInner"));
        set.insert(ForwardDeclaration::class("ComExampleInner"));

        let lines: Vec<String> = set.iter().map(ToString::to_string).collect();
        assert_eq!(lines, vec!["@class ComExampleInner;", "@protocol JavaUtilList;"]);
        assert_eq!(set.first().map(ForwardDeclaration::name), Some("ComExampleInner"));
    }

    #[test]
    fn test_generator_selection_by_label() {
        let pool = pool();
        let options = GeneratorOptions::new();

        assert!(!FieldGenerator::new(field(&pool, "count"), &options).is_repeated());
        assert!(!FieldGenerator::new(field(&pool, "inner"), &options).is_repeated());
        assert!(FieldGenerator::new(field(&pool, "samples"), &options).is_repeated());
    }

    #[test]
    fn test_storage_types() {
        let pool = pool();
        let options = GeneratorOptions::new();

        assert_eq!(storage_type(field(&pool, "count"), &options), "jint");
        assert_eq!(storage_type(field(&pool, "big_value"), &options), "jlong");
        assert_eq!(storage_type(field(&pool, "label"), &options), "NSString *");
        assert_eq!(storage_type(field(&pool, "inner"), &options), "ComExampleInner *");
        assert_eq!(
            element_class(field(&pool, "inner"), &options).as_deref(),
            Some("ComExampleInner")
        );
        assert_eq!(element_class(field(&pool, "label"), &options), None);
    }

    #[test]
    fn test_field_variables() {
        let pool = pool();
        let options = GeneratorOptions::new();

        let vars = field_variables(field(&pool, "big_value"), &options);
        assert_eq!(vars["classname"], "ComExampleOuter");
        assert_eq!(vars["camelcase_name"], "bigValue");
        assert_eq!(vars["capitalized_name"], "BigValue");
        assert_eq!(vars["upper_name"], "BIG_VALUE");
        assert_eq!(vars["field_type"], "INT64");
        assert_eq!(vars["default_value"], "-5LL");
        assert_eq!(vars["flags"], "0");
        assert_eq!(vars["field_class_name"], "NULL");

        let vars = field_variables(field(&pool, "count"), &options);
        assert_eq!(vars["flags"], "CGPFieldFlagRequired");
        assert_eq!(vars["storage_decl"], "jint ");

        let vars = field_variables(field(&pool, "inner"), &options);
        assert_eq!(vars["field_class_name"], "\"ComExampleInner\"");
        assert_eq!(vars["storage_decl"], "ComExampleInner *");
        assert_eq!(vars["value_kind"], "Id");
    }

    #[test]
    fn test_default_values() {
        let pool = pool();

        assert_eq!(default_value(field(&pool, "ratio")), ("Float", "1.0f".to_string()));
        assert_eq!(default_value(field(&pool, "flag")), ("Bool", "true".to_string()));
        assert_eq!(
            default_value(field(&pool, "label")),
            ("Id", "@\"say \\\"hi\\\"\"".to_string())
        );
        assert_eq!(default_value(field(&pool, "samples")), ("Double", "0.0".to_string()));

        assert_eq!(float_literal(Some("inf"), "f"), "INFINITY");
        assert_eq!(float_literal(Some("1e10"), ""), "1e10");
    }

    #[test]
    fn test_integer_defaults_at_the_limits() {
        let pool = pool();

        assert_eq!(default_value(field(&pool, "min_long")), ("Long", "LLONG_MIN".to_string()));
        assert_eq!(default_value(field(&pool, "max_u64")), ("Long", "-1LL".to_string()));
        assert_eq!(default_value(field(&pool, "big_u32")), ("Int", "-1".to_string()));
        assert_eq!(default_value(field(&pool, "min_int")), ("Int", "INT32_MIN".to_string()));
        assert_eq!(default_value(field(&pool, "count")), ("Int", "0".to_string()));
    }

    #[test]
    fn test_string_default_escaping() {
        let pool = pool();

        assert_eq!(
            default_value(field(&pool, "odd_text")),
            ("Id", "@\"a\\?\\?=b\\001\"".to_string())
        );
        assert_eq!(escape_objc("tab\there\u{7f}"), "tab\\there\\177");
    }

    #[test]
    fn test_default_field_header_and_data() {
        let pool = pool();
        let options = GeneratorOptions::new();
        let generator = FieldGenerator::new(field(&pool, "count"), &options);

        let mut printer = StringPrinter::new();
        generator.generate_field_header(&mut printer);
        let header = printer.into_string();
        assert!(header.contains("#define ComExampleOuter_COUNT_FIELD_NUMBER 1\n"));
        assert!(header.contains(
            "J2OBJC_STATIC_FIELD_CONSTANT(ComExampleOuter, COUNT_FIELD_NUMBER, jint)"
        ));

        let mut printer = StringPrinter::new();
        generator.generate_field_data(&mut printer);
        let data = printer.into_string();
        assert!(data.contains(".name = \"count\","));
        assert!(data.contains(".flags = CGPFieldFlagRequired,"));
        assert!(data.contains("Type_Enum_INT32,"));
        assert!(data.contains(".defaultValue.valueInt = 0,"));
    }

    #[test]
    fn test_repeated_declarations_cover_singular() {
        let mut side = EnumDef::new("Side");
        side.add_value("BUY", 0);
        let mut inner = MessageDef::new("Inner");
        inner.add_field(FieldDef::new("x", 1, Label::Optional, FieldType::Int32));

        let mut single = MessageDef::new("Single");
        let mut many = MessageDef::new("Many");
        let scalars = [
            ("count", FieldType::Int32),
            ("label", FieldType::String),
            ("blob", FieldType::Bytes),
        ];
        for (number, (name, field_type)) in (1..).zip(scalars) {
            single.add_field(FieldDef::new(name, number, Label::Optional, field_type));
            many.add_field(FieldDef::new(name, number, Label::Repeated, field_type));
        }
        single.add_field(FieldDef::message("inner", 4, Label::Optional, "Inner"));
        many.add_field(FieldDef::message("inner", 4, Label::Repeated, "Inner"));
        single.add_field(FieldDef::enumeration("side", 5, Label::Optional, "Side"));
        many.add_field(FieldDef::enumeration("side", 5, Label::Repeated, "Side"));

        let mut file = FileDef::new("test/pairs.proto", "test")
            .with_java_package("com.example")
            .with_java_multiple_files(true);
        file.add_enum(side);
        file.add_message(inner);
        file.add_message(single);
        file.add_message(many);
        let pool = DescriptorPool::new(&[file]).expect("Failed to resolve");
        let options = GeneratorOptions::new();

        let single = pool.message("test.Single").expect("Single");
        let many = pool.message("test.Many").expect("Many");
        for (one, list) in single.fields.iter().zip(&many.fields) {
            let one = FieldGenerator::new(one, &options);
            let list = FieldGenerator::new(list, &options);
            assert!(!one.is_repeated() && list.is_repeated());

            let (mut from_one, mut from_list) = (BTreeSet::new(), BTreeSet::new());
            one.collect_forward_declarations(&mut from_one);
            list.collect_forward_declarations(&mut from_list);
            assert!(from_one.is_subset(&from_list), "{}", list.descriptor().name);

            let (mut from_one, mut from_list) = (BTreeSet::new(), BTreeSet::new());
            one.collect_message_or_builder_forward_declarations(&mut from_one);
            list.collect_message_or_builder_forward_declarations(&mut from_list);
            assert!(from_one.is_subset(&from_list), "{}", list.descriptor().name);
            assert!(!from_list.is_empty());
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let pool = pool();
        let options = GeneratorOptions::new();
        let generator = FieldGenerator::new(field(&pool, "samples"), &options);

        let render = || {
            let mut printer = StringPrinter::new();
            generator.generate_field_header(&mut printer);
            generator.generate_field_builder_header(&mut printer);
            generator.generate_message_or_builder_protocol(&mut printer);
            generator.generate_declaration(&mut printer);
            generator.generate_field_data(&mut printer);
            printer.into_string()
        };
        assert_eq!(render(), render());
    }
}
