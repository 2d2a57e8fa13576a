// Example: parse a document and walk the resulting value tree

use leptjson::{ParseError, Parser, ParserConfig, Value};

fn print_value(value: &Value, indent: usize) {
    let pad = "  ".repeat(indent);
    match value {
        Value::Null => println!("{pad}null"),
        Value::Bool(b) => println!("{pad}{b}"),
        Value::Number(n) => println!("{pad}{n}"),
        Value::String(bytes) => println!("{pad}{:?}", String::from_utf8_lossy(bytes)),
        Value::Array(items) => {
            println!("{pad}array ({} elements)", items.len());
            for item in items {
                print_value(item, indent + 1);
            }
        }
        Value::Object(members) => {
            println!("{pad}object ({} members)", members.len());
            for member in members {
                println!("{pad}  {:?}:", String::from_utf8_lossy(member.key()));
                print_value(member.value(), indent + 2);
            }
        }
    }
}

fn main() -> Result<(), ParseError> {
    let json = r#"
    {
        "title": "Hello\nWorld",
        "tags": ["json", "parser"],
        "version": 1.5e0,
        "stable": false,
        "extra": null
    }"#;

    let parser = Parser::with_config(ParserConfig {
        max_depth: Some(64),
        ..ParserConfig::default()
    });

    let value = parser.parse(json)?;
    print_value(&value, 0);

    for bad in ["[1, 2", r#"{"key" 1}"#, "1e400", "null x"] {
        match parser.parse(bad) {
            Ok(v) => println!("{bad:?} unexpectedly parsed as {v:?}"),
            Err(e) => println!("{bad:?} -> {e} (status {})", e.code()),
        }
    }
    Ok(())
}
