//! The command grammar of the consumer DBMS.
//!
//! A seed script is a sequence of newline-terminated commands:
//!
//! ```text
//! create <table>.dat
//! <attribute_name>
//! <type_code>
//! [<width>]          only for string attributes (type code 3)
//! ...
//! finish
//! open <table>.dat
//! <table> insert <id>,<v1>,<v2>,...
//! ...
//! exit
//! ```
//!
//! The consumer tokenizes insert payloads on commas, so rendered values must
//! never contain one; the populator validates pools before generating.

use seed_core::{FieldValue, Record, TableSpec};
use std::fmt::Write;

/// The command that terminates every script.
pub const EXIT_COMMAND: &str = "exit";

/// Render the create block for a table: `create` through `open`.
///
/// Attributes appear id-first in schema order, each as a name line followed
/// by its type-code line and, for string attributes, a width line.
pub fn render_create_block(table: &TableSpec) -> String {
    let mut block = String::new();

    // Infallible: fmt::Write on String cannot error
    let _ = writeln!(block, "create {}", table.data_file());

    render_attribute(
        &mut block,
        &table.id.name,
        table.id.id_type.type_code(),
        table.id.id_type.width(),
    );
    for field in &table.fields {
        render_attribute(
            &mut block,
            &field.name,
            field.field_type.type_code(),
            field.field_type.width(),
        );
    }

    let _ = writeln!(block, "finish");
    let _ = writeln!(block, "open {}", table.data_file());

    block
}

fn render_attribute(block: &mut String, name: &str, type_code: u8, width: Option<u16>) {
    let _ = writeln!(block, "{name}");
    let _ = writeln!(block, "{type_code}");
    if let Some(width) = width {
        let _ = writeln!(block, "{width}");
    }
}

/// Render one value as an insert-line token.
///
/// Integers and floats use Rust's default `Display` (floats get the shortest
/// round-trip representation), bools render as `true`/`false`, strings are
/// emitted verbatim, and null becomes the empty token.
pub fn render_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Int64(i) => i.to_string(),
        FieldValue::Float64(f) => f.to_string(),
        FieldValue::Bool(b) => b.to_string(),
        FieldValue::String(s) => s.clone(),
        FieldValue::Null => String::new(),
    }
}

/// Render one insert command line for a record.
///
/// The id token comes first, then each field in schema attribute order.
/// Missing fields render as the empty token.
pub fn render_insert_line(table: &TableSpec, record: &Record) -> String {
    let mut tokens = Vec::with_capacity(1 + table.fields.len());
    tokens.push(render_value(&record.id));

    for field in &table.fields {
        let value = record.get_field(&field.name).unwrap_or(&FieldValue::Null);
        tokens.push(render_value(value));
    }

    format!("{} insert {}", table.name, tokens.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use seed_core::SeedSchema;

    fn stores_table() -> TableSpec {
        let yaml = r#"
version: 1
tables:
  - name: stores
    id:
      name: store_id
      type: int
      generator:
        type: sequential
    fields:
      - name: first_name
        type:
          type: string
          width: 15
        generator:
          type: one_of
          values: [John]
      - name: last_name
        type:
          type: string
          width: 15
        generator:
          type: one_of
          values: [Smith]
      - name: location
        type:
          type: string
          width: 32
        generator:
          type: one_of
          values: [Boston]
      - name: profit
        type: float
        generator:
          type: float_range
          min: -10000.0
          max: 500000.0
"#;
        let schema = SeedSchema::from_yaml(yaml).unwrap();
        schema.get_table("stores").unwrap().clone()
    }

    #[test]
    fn test_render_create_block() {
        let table = stores_table();
        let block = render_create_block(&table);

        let expected = "create stores.dat\n\
                        store_id\n\
                        1\n\
                        first_name\n\
                        3\n\
                        15\n\
                        last_name\n\
                        3\n\
                        15\n\
                        location\n\
                        3\n\
                        32\n\
                        profit\n\
                        2\n\
                        finish\n\
                        open stores.dat\n";
        assert_eq!(block, expected);
    }

    #[test]
    fn test_render_value() {
        assert_eq!(render_value(&FieldValue::Int64(42)), "42");
        assert_eq!(render_value(&FieldValue::Bool(true)), "true");
        assert_eq!(render_value(&FieldValue::Bool(false)), "false");
        assert_eq!(
            render_value(&FieldValue::String("Salt Lake City".to_string())),
            "Salt Lake City"
        );
        assert_eq!(render_value(&FieldValue::Null), "");
    }

    #[test]
    fn test_render_float_roundtrips() {
        let rendered = render_value(&FieldValue::Float64(433.7));
        let parsed: f64 = rendered.parse().unwrap();
        assert_eq!(parsed, 433.7);
    }

    #[test]
    fn test_render_insert_line() {
        let table = stores_table();
        let record = Record::builder("stores", 0, FieldValue::Int64(0))
            .field("first_name", FieldValue::String("John".to_string()))
            .field("last_name", FieldValue::String("Smith".to_string()))
            .field("location", FieldValue::String("New York".to_string()))
            .field("profit", FieldValue::Float64(1234.5))
            .build();

        let line = render_insert_line(&table, &record);
        assert_eq!(line, "stores insert 0,John,Smith,New York,1234.5");
    }

    #[test]
    fn test_render_insert_line_missing_field_is_empty_token() {
        let table = stores_table();
        let record = Record::builder("stores", 3, FieldValue::Int64(3))
            .field("first_name", FieldValue::String("John".to_string()))
            .build();

        let line = render_insert_line(&table, &record);
        assert_eq!(line, "stores insert 3,John,,,");
    }
}
