//! Resolved descriptor pool for code generation.
//!
//! This module provides a flattened, resolved representation of a set of
//! files: every type name is looked up, every message knows its Java
//! placement, and every field knows its containing message, its position and
//! its presence semantics. Code generation only ever reads from the pool.

use crate::defs::{EnumDef, EnumValueDef, FieldDef, FileDef, MessageDef};
use crate::error::DescriptorError;
use crate::types::{FieldType, JavaType, Label, Syntax, TypeKind};
use crate::validation::{qualify, validate_file};
use std::collections::{HashMap, HashSet};

/// Reference to a named message or enum, with the information needed to
/// derive its generated class name and header.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    /// Fully qualified protobuf name without a leading dot.
    pub full_name: String,
    /// Message or enum.
    pub kind: TypeKind,
    /// Protobuf package of the declaring file.
    pub package: String,
    /// Java package of the declaring file.
    pub java_package: String,
    /// Java outer class wrapping the type, unless `java_multiple_files` is set.
    pub outer_class: Option<String>,
    /// Name of the declaring `.proto` file.
    pub proto_file: String,
}

impl TypeRef {
    /// Returns the name relative to the package (e.g. `Outer.Inner`).
    #[must_use]
    pub fn local_name(&self) -> &str {
        if self.package.is_empty() {
            return &self.full_name;
        }
        self.full_name
            .strip_prefix(self.package.as_str())
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(&self.full_name)
    }

    /// Returns the unqualified name.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.full_name.rsplit('.').next().unwrap_or(&self.full_name)
    }

    /// Returns true if this references a message type.
    #[must_use]
    pub const fn is_message(&self) -> bool {
        matches!(self.kind, TypeKind::Message)
    }
}

/// Resolved set of files ready for code generation.
#[derive(Debug, Clone)]
pub struct DescriptorPool {
    files: Vec<FileDescriptor>,
    types: HashMap<String, TypeRef>,
}

impl DescriptorPool {
    /// Validates and resolves a set of file definitions.
    ///
    /// Types may reference any type declared in any of the given files.
    ///
    /// # Arguments
    /// * `files` - File definitions, typically a whole `FileDescriptorSet`
    ///
    /// # Errors
    /// Returns `DescriptorError` if a file is invalid, a name is defined
    /// twice, or a type name cannot be resolved.
    pub fn new(files: &[FileDef]) -> Result<Self, DescriptorError> {
        let mut types = HashMap::new();
        let mut file_names = HashSet::new();

        for file in files {
            if !file_names.insert(file.name.as_str()) {
                return Err(DescriptorError::duplicate("file", file.name.clone()));
            }
            validate_file(file)?;

            let placement = Placement::new(file);
            for message in &file.messages {
                index_message(&placement, &file.package, message, &mut types)?;
            }
            for enum_def in &file.enums {
                let full_name = qualify(&file.package, &enum_def.name);
                insert_type(&mut types, placement.type_ref(full_name, TypeKind::Enum))?;
            }
        }

        let resolved = files
            .iter()
            .map(|file| resolve_file(file, &types))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            "Descriptor pool built: {} files, {} types",
            resolved.len(),
            types.len()
        );

        Ok(Self {
            files: resolved,
            types,
        })
    }

    /// Returns all resolved files in input order.
    #[must_use]
    pub fn files(&self) -> &[FileDescriptor] {
        &self.files
    }

    /// Looks up a file by name.
    #[must_use]
    pub fn file(&self, name: &str) -> Option<&FileDescriptor> {
        self.files.iter().find(|f| f.name == name)
    }

    /// Looks up a type by its fully qualified name (leading dot optional).
    #[must_use]
    pub fn get_type(&self, full_name: &str) -> Option<&TypeRef> {
        self.types.get(full_name.strip_prefix('.').unwrap_or(full_name))
    }

    /// Looks up a message by its fully qualified name (leading dot optional).
    #[must_use]
    pub fn message(&self, full_name: &str) -> Option<&MessageDescriptor> {
        let full_name = full_name.strip_prefix('.').unwrap_or(full_name);
        self.messages().find(|m| m.full_name == full_name)
    }

    /// Iterates over every message of every file.
    pub fn messages(&self) -> impl Iterator<Item = &MessageDescriptor> {
        self.files.iter().flat_map(|f| f.messages.iter())
    }
}

/// Resolved `.proto` file.
#[derive(Debug, Clone)]
pub struct FileDescriptor {
    /// File name.
    pub name: String,
    /// Protobuf package.
    pub package: String,
    /// Declared syntax.
    pub syntax: Syntax,
    /// Effective Java package (`java_package` or the protobuf package).
    pub java_package: String,
    /// Java outer class, unless `java_multiple_files` is set.
    pub outer_class: Option<String>,
    /// Imported file names.
    pub dependencies: Vec<String>,
    /// All messages, nested ones included, parents before children.
    pub messages: Vec<MessageDescriptor>,
    /// All enums, top-level first, then nested ones in message order.
    pub enums: Vec<EnumDescriptor>,
}

/// Resolved enum.
#[derive(Debug, Clone)]
pub struct EnumDescriptor {
    /// Reference to this enum as a type.
    pub type_ref: TypeRef,
    /// Declared values, in declaration order.
    pub values: Vec<EnumValueDef>,
}

impl EnumDescriptor {
    /// Looks up a value by name.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&EnumValueDef> {
        self.values.iter().find(|v| v.name == name)
    }
}

/// Resolved message.
#[derive(Debug, Clone)]
pub struct MessageDescriptor {
    /// Unqualified name.
    pub name: String,
    /// Fully qualified name.
    pub full_name: String,
    /// Reference to this message as a type.
    pub type_ref: TypeRef,
    /// Syntax of the declaring file.
    pub syntax: Syntax,
    /// Full name of the enclosing message, for nested messages.
    pub parent: Option<String>,
    /// True for the synthetic entry type of a map field.
    pub map_entry: bool,
    /// Fields declared directly on this message, in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

impl MessageDescriptor {
    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Looks up a field by number.
    #[must_use]
    pub fn field_by_number(&self, number: i32) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.number == number)
    }
}

/// Resolved field.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Field name as written in the `.proto` file.
    pub name: String,
    /// Fully qualified name (`package.Message.field`).
    pub full_name: String,
    /// Field number.
    pub number: i32,
    /// Position in the containing message's declaration order.
    pub index: usize,
    /// Cardinality.
    pub label: Label,
    /// Declared type.
    pub field_type: FieldType,
    /// Message declaring this field.
    pub containing_type: TypeRef,
    /// Referenced message or enum, for message, group and enum fields.
    pub value_type: Option<TypeRef>,
    /// Default value text.
    pub default_value: Option<String>,
    /// True if repeated values use packed encoding.
    pub packed: bool,
    /// True if the field tracks whether it has been set.
    pub has_presence: bool,
}

impl FieldDescriptor {
    /// Returns true if the field is repeated.
    #[must_use]
    pub fn is_repeated(&self) -> bool {
        self.label.is_repeated()
    }

    /// Returns true if the field is required.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.label == Label::Required
    }

    /// Returns the Java value type of the field.
    #[must_use]
    pub fn java_type(&self) -> JavaType {
        self.field_type.java_type()
    }
}

/// Java placement shared by every type declared in one file.
struct Placement<'a> {
    package: &'a str,
    java_package: String,
    outer_class: Option<String>,
    proto_file: &'a str,
}

impl<'a> Placement<'a> {
    fn new(file: &'a FileDef) -> Self {
        Self {
            package: &file.package,
            java_package: file
                .options
                .java_package
                .clone()
                .unwrap_or_else(|| file.package.clone()),
            outer_class: if file.options.java_multiple_files {
                None
            } else {
                Some(outer_class_name(file))
            },
            proto_file: &file.name,
        }
    }

    fn type_ref(&self, full_name: String, kind: TypeKind) -> TypeRef {
        TypeRef {
            full_name,
            kind,
            package: self.package.to_string(),
            java_package: self.java_package.clone(),
            outer_class: self.outer_class.clone(),
            proto_file: self.proto_file.to_string(),
        }
    }
}

/// Returns the Java outer class name of a file.
///
/// Uses `java_outer_classname` when set, otherwise the camel-cased file stem,
/// suffixed with `OuterClass` if a top-level type already has that name.
#[must_use]
pub fn outer_class_name(file: &FileDef) -> String {
    if let Some(name) = &file.options.java_outer_classname {
        return name.clone();
    }

    let name = to_pascal_case(file.stem());
    let collides = file.messages.iter().any(|m| m.name == name)
        || file.enums.iter().any(|e| e.name == name);
    if collides {
        format!("{name}OuterClass")
    } else {
        name
    }
}

fn insert_type(
    types: &mut HashMap<String, TypeRef>,
    type_ref: TypeRef,
) -> Result<(), DescriptorError> {
    if types.contains_key(&type_ref.full_name) {
        return Err(DescriptorError::duplicate("type", type_ref.full_name));
    }
    types.insert(type_ref.full_name.clone(), type_ref);
    Ok(())
}

fn index_message(
    placement: &Placement<'_>,
    scope: &str,
    message: &MessageDef,
    types: &mut HashMap<String, TypeRef>,
) -> Result<(), DescriptorError> {
    let full_name = qualify(scope, &message.name);
    insert_type(types, placement.type_ref(full_name.clone(), TypeKind::Message))?;

    for nested in &message.nested_messages {
        index_message(placement, &full_name, nested, types)?;
    }
    for enum_def in &message.nested_enums {
        let enum_name = qualify(&full_name, &enum_def.name);
        insert_type(types, placement.type_ref(enum_name, TypeKind::Enum))?;
    }
    Ok(())
}

fn resolve_file(
    file: &FileDef,
    types: &HashMap<String, TypeRef>,
) -> Result<FileDescriptor, DescriptorError> {
    let placement = Placement::new(file);
    let mut messages = Vec::new();
    for message in &file.messages {
        resolve_message(
            file.syntax,
            &placement,
            &file.package,
            None,
            message,
            types,
            &mut messages,
        )?;
    }

    let mut enums = Vec::new();
    collect_enums(&placement, &file.package, &file.enums, &mut enums);
    for message in &file.messages {
        collect_nested_enums(&placement, &file.package, message, &mut enums);
    }

    Ok(FileDescriptor {
        name: file.name.clone(),
        package: file.package.clone(),
        syntax: file.syntax,
        java_package: placement.java_package.clone(),
        outer_class: placement.outer_class.clone(),
        dependencies: file.dependencies.clone(),
        messages,
        enums,
    })
}

fn collect_enums(
    placement: &Placement<'_>,
    scope: &str,
    defs: &[EnumDef],
    out: &mut Vec<EnumDescriptor>,
) {
    out.extend(defs.iter().map(|enum_def| EnumDescriptor {
        type_ref: placement.type_ref(qualify(scope, &enum_def.name), TypeKind::Enum),
        values: enum_def.values.clone(),
    }));
}

fn collect_nested_enums(
    placement: &Placement<'_>,
    scope: &str,
    message: &MessageDef,
    out: &mut Vec<EnumDescriptor>,
) {
    let full_name = qualify(scope, &message.name);
    collect_enums(placement, &full_name, &message.nested_enums, out);
    for nested in &message.nested_messages {
        collect_nested_enums(placement, &full_name, nested, out);
    }
}

fn resolve_message(
    syntax: Syntax,
    placement: &Placement<'_>,
    scope: &str,
    parent: Option<&str>,
    message: &MessageDef,
    types: &HashMap<String, TypeRef>,
    out: &mut Vec<MessageDescriptor>,
) -> Result<(), DescriptorError> {
    let full_name = qualify(scope, &message.name);
    let type_ref = placement.type_ref(full_name.clone(), TypeKind::Message);

    let fields = message
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| resolve_field(syntax, &type_ref, index, field, types))
        .collect::<Result<Vec<_>, _>>()?;

    out.push(MessageDescriptor {
        name: message.name.clone(),
        full_name: full_name.clone(),
        type_ref,
        syntax,
        parent: parent.map(str::to_string),
        map_entry: message.map_entry,
        fields,
    });

    for nested in &message.nested_messages {
        resolve_message(
            syntax,
            placement,
            &full_name,
            Some(full_name.as_str()),
            nested,
            types,
            out,
        )?;
    }
    Ok(())
}

fn resolve_field(
    syntax: Syntax,
    containing_type: &TypeRef,
    index: usize,
    field: &FieldDef,
    types: &HashMap<String, TypeRef>,
) -> Result<FieldDescriptor, DescriptorError> {
    let full_name = format!("{}.{}", containing_type.full_name, field.name);

    let value_type = if field.field_type.references_type() {
        let type_name = field.type_name.as_deref().unwrap_or_default();
        let resolved = lookup_type(types, &containing_type.full_name, type_name)
            .ok_or_else(|| DescriptorError::unresolved(type_name, full_name.clone()))?;

        let expected = if field.field_type == FieldType::Enum {
            TypeKind::Enum
        } else {
            TypeKind::Message
        };
        if resolved.kind != expected {
            return Err(DescriptorError::TypeKindMismatch {
                field: full_name,
                type_name: resolved.full_name.clone(),
                expected: format!("{expected:?}").to_lowercase(),
            });
        }
        Some(resolved.clone())
    } else {
        None
    };

    let repeated = field.label.is_repeated();
    let packable = repeated && field.field_type.is_packable();
    let packed = match field.packed {
        Some(packed) => packed && packable,
        None => packable && syntax == Syntax::Proto3,
    };
    let has_presence = !repeated
        && (field.field_type.java_type() == JavaType::Message
            || syntax == Syntax::Proto2
            || field.proto3_optional);

    Ok(FieldDescriptor {
        name: field.name.clone(),
        full_name,
        number: field.number,
        index,
        label: field.label,
        field_type: field.field_type,
        containing_type: containing_type.clone(),
        value_type,
        default_value: field.default_value.clone(),
        packed,
        has_presence,
    })
}

/// Resolves a type name the way `protoc` does: absolute names (leading dot)
/// are looked up directly, relative names are searched from the innermost
/// enclosing scope outwards.
fn lookup_type<'a>(
    types: &'a HashMap<String, TypeRef>,
    scope: &str,
    name: &str,
) -> Option<&'a TypeRef> {
    if let Some(absolute) = name.strip_prefix('.') {
        return types.get(absolute);
    }

    let mut scope = scope;
    loop {
        if let Some(found) = types.get(&qualify(scope, name)) {
            return Some(found);
        }
        if scope.is_empty() {
            return None;
        }
        scope = scope.rfind('.').map_or("", |pos| &scope[..pos]);
    }
}

/// Converts a string to lowerCamelCase using protobuf's rules: underscores
/// are dropped and the following letter is capitalized, as is any letter
/// following a digit.
#[must_use]
pub fn to_camel_case(s: &str) -> String {
    underscores_to_camel_case(s, false)
}

/// Converts a string to PascalCase using protobuf's rules.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    underscores_to_camel_case(s, true)
}

fn underscores_to_camel_case(s: &str, capitalize_first: bool) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = capitalize_first;

    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_lowercase() {
            if capitalize_next {
                result.push(c.to_ascii_uppercase());
            } else {
                result.push(c);
            }
            capitalize_next = false;
        } else if c.is_ascii_uppercase() {
            if i == 0 && !capitalize_first {
                result.push(c.to_ascii_lowercase());
            } else {
                result.push(c);
            }
            capitalize_next = false;
        } else if c.is_ascii_digit() {
            result.push(c);
            capitalize_next = true;
        } else {
            capitalize_next = true;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::EnumDef;

    fn order_file() -> FileDef {
        let mut side = EnumDef::new("Side");
        side.add_value("BUY", 0);
        side.add_value("SELL", 1);

        let mut leg = MessageDef::new("Leg");
        leg.add_field(FieldDef::new("qty", 1, Label::Optional, FieldType::Int32));
        leg.add_field(FieldDef::enumeration("side", 2, Label::Optional, "Side"));

        let mut order = MessageDef::new("Order");
        order.add_field(FieldDef::new("id", 1, Label::Required, FieldType::Int64));
        order.add_field(FieldDef::message("legs", 2, Label::Repeated, "Leg"));
        order.add_field(FieldDef::new("tags", 3, Label::Repeated, FieldType::Int32));
        order.add_field(FieldDef::message("parent", 4, Label::Optional, ".trading.Order"));
        order.add_nested_message(leg);

        let mut file = FileDef::new("trading/order_entry.proto", "trading")
            .with_java_package("com.example.trading");
        file.add_message(order);
        file.add_enum(side);
        file
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("foo_bar"), "fooBar");
        assert_eq!(to_camel_case("FooBar"), "fooBar");
        assert_eq!(to_camel_case("field1_name"), "field1Name");
        assert_eq!(to_camel_case("value2x"), "value2X");
        assert_eq!(to_camel_case("id"), "id");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("order_entry"), "OrderEntry");
        assert_eq!(to_pascal_case("side"), "Side");
        assert_eq!(to_pascal_case("order-type"), "OrderType");
        assert_eq!(to_pascal_case("foo_bar_2"), "FooBar2");
    }

    #[test]
    fn test_pool_from_files() {
        let pool = DescriptorPool::new(&[order_file()]).expect("Failed to resolve");

        assert_eq!(pool.files().len(), 1);
        let file = pool.file("trading/order_entry.proto").expect("file");
        assert_eq!(file.java_package, "com.example.trading");
        assert_eq!(file.outer_class.as_deref(), Some("OrderEntry"));
        assert_eq!(file.messages.len(), 2);
        assert_eq!(file.messages[0].full_name, "trading.Order");
        assert_eq!(file.messages[1].full_name, "trading.Order.Leg");
        assert_eq!(file.messages[1].parent.as_deref(), Some("trading.Order"));
        assert_eq!(file.enums.len(), 1);
        assert_eq!(file.enums[0].type_ref.full_name, "trading.Side");
        assert_eq!(file.enums[0].type_ref.outer_class.as_deref(), Some("OrderEntry"));
        assert_eq!(file.enums[0].value("SELL").map(|v| v.number), Some(1));
    }

    #[test]
    fn test_pool_nested_enums() {
        let mut status = EnumDef::new("Status");
        status.add_value("OPEN", 0);
        let mut order = MessageDef::new("Order");
        order.add_nested_enum(status);
        order.add_field(FieldDef::enumeration("status", 1, Label::Optional, "Status"));

        let mut side = EnumDef::new("Side");
        side.add_value("BUY", 0);
        let mut file = FileDef::new("test.proto", "test");
        file.add_message(order);
        file.add_enum(side);

        let pool = DescriptorPool::new(&[file]).expect("Failed to resolve");
        let names: Vec<&str> = pool.files()[0]
            .enums
            .iter()
            .map(|e| e.type_ref.full_name.as_str())
            .collect();
        assert_eq!(names, vec!["test.Side", "test.Order.Status"]);
    }

    #[test]
    fn test_pool_resolves_relative_names() {
        let pool = DescriptorPool::new(&[order_file()]).expect("Failed to resolve");

        let order = pool.message("trading.Order").expect("Order");
        let legs = order.field("legs").expect("legs");
        let leg_type = legs.value_type.as_ref().expect("value type");
        assert_eq!(leg_type.full_name, "trading.Order.Leg");
        assert_eq!(leg_type.local_name(), "Order.Leg");
        assert_eq!(leg_type.simple_name(), "Leg");

        let leg = pool.message(".trading.Order.Leg").expect("Leg");
        let side = leg.field("side").expect("side");
        let side_type = side.value_type.as_ref().expect("value type");
        assert_eq!(side_type.full_name, "trading.Side");
        assert_eq!(side_type.kind, TypeKind::Enum);
    }

    #[test]
    fn test_pool_field_metadata() {
        let pool = DescriptorPool::new(&[order_file()]).expect("Failed to resolve");
        let order = pool.message("trading.Order").expect("Order");

        let id = order.field_by_number(1).expect("id");
        assert_eq!(id.index, 0);
        assert_eq!(id.full_name, "trading.Order.id");
        assert!(id.is_required());
        assert!(id.has_presence);
        assert_eq!(id.containing_type.full_name, "trading.Order");

        let legs = order.field("legs").expect("legs");
        assert_eq!(legs.index, 1);
        assert!(legs.is_repeated());
        assert!(!legs.has_presence);
        assert!(!legs.packed);

        // proto2 repeated scalars are unpacked unless asked for
        assert!(!order.field("tags").expect("tags").packed);
    }

    #[test]
    fn test_pool_proto3_presence_and_packing() {
        let mut msg = MessageDef::new("Quote");
        msg.add_field(FieldDef::new("px", 1, Label::Optional, FieldType::Double));
        msg.add_field(FieldDef::new("sizes", 2, Label::Repeated, FieldType::Int64));
        let mut qty = FieldDef::new("qty", 3, Label::Optional, FieldType::Int32);
        qty.proto3_optional = true;
        msg.add_field(qty);
        let mut names = FieldDef::new("names", 4, Label::Repeated, FieldType::String);
        names.packed = Some(true);
        msg.add_field(names);

        let mut file = FileDef::new("quote.proto", "md").with_syntax(Syntax::Proto3);
        file.add_message(msg);

        let pool = DescriptorPool::new(&[file]).expect("Failed to resolve");
        let quote = pool.message("md.Quote").expect("Quote");
        assert!(!quote.field("px").expect("px").has_presence);
        assert!(quote.field("qty").expect("qty").has_presence);
        assert!(quote.field("sizes").expect("sizes").packed);
        assert!(!quote.field("names").expect("names").packed);
    }

    #[test]
    fn test_pool_unresolved_type() {
        let mut msg = MessageDef::new("Order");
        msg.add_field(FieldDef::message("leg", 1, Label::Optional, "Missing"));
        let mut file = FileDef::new("test.proto", "test");
        file.add_message(msg);

        let err = DescriptorPool::new(&[file]).unwrap_err();
        assert!(matches!(err, DescriptorError::UnresolvedType { .. }));
        assert!(err.to_string().contains("test.Order.leg"));
    }

    #[test]
    fn test_pool_kind_mismatch() {
        let mut side = EnumDef::new("Side");
        side.add_value("BUY", 0);
        let mut msg = MessageDef::new("Order");
        msg.add_field(FieldDef::message("side", 1, Label::Optional, "Side"));
        let mut file = FileDef::new("test.proto", "test");
        file.add_message(msg);
        file.add_enum(side);

        let err = DescriptorPool::new(&[file]).unwrap_err();
        assert!(matches!(err, DescriptorError::TypeKindMismatch { .. }));
    }

    #[test]
    fn test_pool_cross_file_reference() {
        let mut common = FileDef::new("common.proto", "common").with_java_multiple_files(true);
        common.add_message(MessageDef::new("Money"));

        let mut msg = MessageDef::new("Order");
        msg.add_field(FieldDef::message("price", 1, Label::Optional, ".common.Money"));
        let mut file = FileDef::new("order.proto", "trading");
        file.add_message(msg);

        let pool = DescriptorPool::new(&[common, file]).expect("Failed to resolve");
        let money = pool.get_type(".common.Money").expect("Money");
        assert_eq!(money.outer_class, None);
        assert_eq!(money.proto_file, "common.proto");

        let order = pool.message("trading.Order").expect("Order");
        let price = order.field("price").expect("price");
        assert_eq!(price.value_type.as_ref(), Some(money));
    }

    #[test]
    fn test_pool_duplicate_file_and_type() {
        let err = DescriptorPool::new(&[order_file(), order_file()]).unwrap_err();
        assert!(matches!(err, DescriptorError::DuplicateDefinition { .. }));

        let mut a = FileDef::new("a.proto", "pkg");
        a.add_message(MessageDef::new("Thing"));
        let mut b = FileDef::new("b.proto", "pkg");
        b.add_message(MessageDef::new("Thing"));
        let err = DescriptorPool::new(&[a, b]).unwrap_err();
        assert!(err.to_string().contains("pkg.Thing"));
    }

    #[test]
    fn test_outer_class_name() {
        let mut file = FileDef::new("dir/order.proto", "trading");
        assert_eq!(outer_class_name(&file), "Order");

        file.add_message(MessageDef::new("Order"));
        assert_eq!(outer_class_name(&file), "OrderOuterClass");

        file.options.java_outer_classname = Some("OrderProtos".to_string());
        assert_eq!(outer_class_name(&file), "OrderProtos");
    }
}
