//! Objective-C generation for j2objc-translated protobuf messages.

pub mod enumeration;
pub mod field;
pub mod field_map;
pub mod message;
pub mod names;
pub mod repeated;
pub mod singular;

pub use enumeration::EnumGenerator;
pub use field::{FieldGenerator, ForwardDeclaration, GenerateField};
pub use field_map::FieldGeneratorMap;
pub use message::MessageGenerator;
pub use repeated::RepeatedFieldGenerator;
pub use singular::SingularFieldGenerator;
