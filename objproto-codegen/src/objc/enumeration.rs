//! Enum class generation.
//!
//! Each enum produces `<Class>.h` and `<Class>.m`, so message sources that
//! import the header of an enum-typed field find it next to their own.

use objproto_descriptor::EnumDescriptor;

use super::names::{class_name, header_path, source_path};
use crate::options::GeneratorOptions;
use crate::printer::{Printer, Variables};

/// Generator for the Objective-C class of one enum.
#[derive(Debug, Clone)]
pub struct EnumGenerator<'a> {
    descriptor: &'a EnumDescriptor,
    variables: Variables,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a generator for `descriptor`.
    #[must_use]
    pub fn new(descriptor: &'a EnumDescriptor, options: &GeneratorOptions) -> Self {
        let mut variables = Variables::new();
        variables.insert("classname", class_name(&descriptor.type_ref, options));
        variables.insert("proto_file", descriptor.type_ref.proto_file.clone());
        variables.insert("header", header_path(&descriptor.type_ref));
        variables.insert("value_count", descriptor.values.len().to_string());

        Self {
            descriptor,
            variables,
        }
    }

    /// Returns the generated class name.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.variables["classname"]
    }

    /// Returns the path of the enum header.
    #[must_use]
    pub fn header_path(&self) -> String {
        header_path(&self.descriptor.type_ref)
    }

    /// Returns the path of the implementation file.
    #[must_use]
    pub fn source_path(&self) -> String {
        source_path(&self.descriptor.type_ref)
    }

    fn value_variables(&self) -> impl Iterator<Item = Variables> + '_ {
        self.descriptor
            .values
            .iter()
            .enumerate()
            .map(|(ordinal, value)| {
                let mut variables = self.variables.clone();
                variables.insert("value_name", value.name.clone());
                variables.insert("ordinal", ordinal.to_string());
                variables.insert("number", value.number.to_string());
                variables
            })
    }

    fn print_preamble(&self, printer: &mut dyn Printer) {
        printer.print(
            &self.variables,
            "// Generated by the protocol buffer compiler.  DO NOT EDIT!\n\
             // source: $proto_file$\n\
             \n",
        );
    }

    /// Emits `<Class>.h`.
    pub fn generate_header(&self, printer: &mut dyn Printer) {
        self.print_preamble(printer);
        printer.print_raw(
            "#import \"JreEmulation.h\"\n\
             #import \"com/google/protobuf/ProtocolMessageEnum.h\"\n\
             #import \"java/lang/Enum.h\"\n\
             \n",
        );

        printer.print(
            &self.variables,
            "typedef NS_ENUM(NSUInteger, $classname$_Enum) {\n",
        );
        printer.indent();
        for variables in self.value_variables() {
            printer.print(&variables, "$classname$_Enum_$value_name$ = $ordinal$,\n");
        }
        printer.outdent();
        printer.print(
            &self.variables,
            "};\n\
             \n\
             @interface $classname$ : JavaLangEnum <ComGoogleProtobufProtocolMessageEnum>\n\
             \n\
             + (IOSObjectArray *)values;\n\
             \n\
             + ($classname$ *)valueOfWithNSString:(NSString *)name;\n\
             \n\
             + ($classname$ *)valueOfWithInt:(jint)value;\n\
             \n\
             - (jint)getNumber;\n\
             \n\
             @end\n\
             \n\
             J2OBJC_STATIC_INIT($classname$)\n\
             \n\
             FOUNDATION_EXPORT $classname$ *$classname$_values_[];\n",
        );
        for variables in self.value_variables() {
            printer.print(
                &variables,
                "\n\
                 #define $classname$_$value_name$ $classname$_values_[$classname$_Enum_$value_name$]\n\
                 J2OBJC_ENUM_CONSTANT_GETTER($classname$, $value_name$)\n",
            );
        }
        printer.print(
            &self.variables,
            "\n\
             J2OBJC_TYPE_LITERAL_HEADER($classname$)\n",
        );
    }

    /// Emits `<Class>.m`.
    pub fn generate_source(&self, printer: &mut dyn Printer) {
        self.print_preamble(printer);
        printer.print(
            &self.variables,
            "#import \"$header$\"\n\
             #import \"com/google/protobuf/ProtocolBuffers.h\"\n\
             \n\
             $classname$ *$classname$_values_[$value_count$];\n\
             \n\
             static CGPEnumValueData $classname$_ValueData[] = {\n",
        );
        printer.indent();
        for variables in self.value_variables() {
            printer.print(&variables, "{ \"$value_name$\", $number$ },\n");
        }
        printer.outdent();
        printer.print(
            &self.variables,
            "};\n\
             \n\
             @implementation $classname$\n\
             \n\
             + (void)initialize {\n\
             \x20 if (self == [$classname$ class]) {\n\
             \x20   CGPInitEnum(self, $classname$_values_, $classname$_ValueData, $value_count$);\n\
             \x20 }\n\
             }\n\
             \n\
             @end\n\
             \n\
             J2OBJC_CLASS_TYPE_LITERAL_SOURCE($classname$)\n",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::StringPrinter;
    use objproto_descriptor::{DescriptorPool, EnumDef, FileDef, MessageDef};

    fn pool() -> DescriptorPool {
        let mut side = EnumDef::new("Side");
        side.add_value("BUY", 1);
        side.add_value("SELL", 2);

        let mut state = EnumDef::new("State");
        state.add_value("OPEN", 0);
        let mut order = MessageDef::new("Order");
        order.add_nested_enum(state);

        let mut file = FileDef::new("trading/order_entry.proto", "trading")
            .with_java_package("com.example.trading");
        file.add_enum(side);
        file.add_message(order);
        DescriptorPool::new(&[file]).expect("Failed to resolve")
    }

    fn render(f: impl FnOnce(&mut StringPrinter)) -> String {
        let mut printer = StringPrinter::new();
        f(&mut printer);
        printer.into_string()
    }

    #[test]
    fn test_enum_paths() {
        let pool = pool();
        let enums = &pool.files()[0].enums;
        let options = GeneratorOptions::new();

        let side = EnumGenerator::new(&enums[0], &options);
        assert_eq!(side.class_name(), "ComExampleTradingOrderEntry_Side");
        assert_eq!(side.header_path(), "com/example/trading/OrderEntry_Side.h");
        assert_eq!(side.source_path(), "com/example/trading/OrderEntry_Side.m");

        let state = EnumGenerator::new(&enums[1], &options);
        assert_eq!(state.class_name(), "ComExampleTradingOrderEntry_Order_State");
    }

    #[test]
    fn test_generate_header() {
        let pool = pool();
        let generator = EnumGenerator::new(&pool.files()[0].enums[0], &GeneratorOptions::new());
        let header = render(|p| generator.generate_header(p));

        assert!(header.contains("// source: trading/order_entry.proto\n"));
        assert!(header.contains(
            "typedef NS_ENUM(NSUInteger, ComExampleTradingOrderEntry_Side_Enum) {\n\
             \x20 ComExampleTradingOrderEntry_Side_Enum_BUY = 0,\n\
             \x20 ComExampleTradingOrderEntry_Side_Enum_SELL = 1,\n\
             };\n"
        ));
        assert!(header.contains(
            "@interface ComExampleTradingOrderEntry_Side : JavaLangEnum \
             <ComGoogleProtobufProtocolMessageEnum>\n"
        ));
        assert!(header.contains(
            "J2OBJC_ENUM_CONSTANT_GETTER(ComExampleTradingOrderEntry_Side, SELL)\n"
        ));
        assert!(header.ends_with("J2OBJC_TYPE_LITERAL_HEADER(ComExampleTradingOrderEntry_Side)\n"));
    }

    #[test]
    fn test_generate_source() {
        let pool = pool();
        let generator = EnumGenerator::new(&pool.files()[0].enums[0], &GeneratorOptions::new());
        let source = render(|p| generator.generate_source(p));

        assert!(source.contains("#import \"com/example/trading/OrderEntry_Side.h\"\n"));
        assert!(source.contains(
            "ComExampleTradingOrderEntry_Side *ComExampleTradingOrderEntry_Side_values_[2];\n"
        ));
        assert!(source.contains("  { \"BUY\", 1 },\n  { \"SELL\", 2 },\n"));
        assert!(source.contains(
            "CGPInitEnum(self, ComExampleTradingOrderEntry_Side_values_, \
             ComExampleTradingOrderEntry_Side_ValueData, 2);"
        ));
    }
}
