//! Objective-C generation from a descriptor set.
//!
//! Run with:
//!
//! ```text
//! protoc --include_imports --descriptor_set_out=trading.pb trading.proto
//! cargo run --example generate -- trading.pb out/ "prefix=com.example.*=EX"
//! ```
//!
//! Without arguments, generates a small built-in order schema and prints it.
//! Set `RUST_LOG=debug` to see the generator's progress.

use anyhow::Context;
use objproto::prelude::*;
use std::path::{Path, PathBuf};

fn demo_files() -> Vec<FileDef> {
    let mut side = EnumDef::new("Side");
    side.add_value("BUY", 0);
    side.add_value("SELL", 1);

    let mut fill = MessageDef::new("Fill");
    fill.add_field(FieldDef::new("price", 1, Label::Required, FieldType::Double));
    fill.add_field(FieldDef::new("qty", 2, Label::Required, FieldType::Int64));

    let mut order = MessageDef::new("Order");
    order.add_field(FieldDef::new("order_id", 1, Label::Required, FieldType::String));
    order.add_field(FieldDef::enumeration("side", 2, Label::Optional, "Side"));
    order.add_field(FieldDef::message("fills", 3, Label::Repeated, "Fill"));
    order.add_field(FieldDef::new("tags", 4, Label::Repeated, FieldType::String));

    let mut file = FileDef::new("trading/order.proto", "trading")
        .with_java_package("com.example.trading")
        .with_java_multiple_files(true);
    file.add_enum(side);
    file.add_message(fill);
    file.add_message(order);
    vec![file]
}

fn write_files(out_dir: &Path, files: &[GeneratedFile]) -> anyhow::Result<()> {
    for file in files {
        let path = out_dir.join(&file.name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(&path, &file.content)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(descriptor_set) = args.next().map(PathBuf::from) else {
        for file in generate(&demo_files(), &GeneratorOptions::new())? {
            println!("==> {} <==\n{}", file.name, file.content);
        }
        return Ok(());
    };

    let out_dir = args.next().map_or_else(|| PathBuf::from("."), PathBuf::from);
    let options = GeneratorOptions::parse(&args.next().unwrap_or_default())?;

    let files = generate_from_file(&descriptor_set, &options)
        .with_context(|| format!("generating from {}", descriptor_set.display()))?;
    write_files(&out_dir, &files)
}
