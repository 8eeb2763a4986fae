// tests/unit_shapes.rs
use tsdocgen_core::diagnostics::Diagnostics;
use tsdocgen_core::render::SoftBreak;
use tsdocgen_core::shapes::ShapeDictionary;
use tsdocgen_core::unit::SourceUnit;

fn build(units: &[&SourceUnit]) -> ShapeDictionary {
    let mut diagnostics = Diagnostics::new();
    ShapeDictionary::build(units, SoftBreak::Space, &mut diagnostics).unwrap()
}

#[test]
fn test_interface_fields_in_order() {
    let unit = SourceUnit::parse(
        "a.ts",
        "interface Size {\n  /** Width in px. */\n  w: number;\n  /** Height in px. */\n  h?: number;\n  label: string;\n}",
    )
    .unwrap();
    let dict = build(&[&unit]);
    let fields = dict.get("Size").unwrap();
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["w", "h", "label"]);
    assert_eq!(fields[0].description, "Width in px.");
    assert!(fields[0].required);
    assert!(!fields[1].required);
    assert_eq!(fields[2].description, "");
}

#[test]
fn test_object_type_alias_is_shape() {
    let unit = SourceUnit::parse("a.ts", "export type Opts = { /** Name. */ name: string };").unwrap();
    let dict = build(&[&unit]);
    assert_eq!(dict.get("Opts").unwrap()[0].description, "Name.");
}

#[test]
fn test_non_object_alias_and_empty_shapes_skipped() {
    let unit = SourceUnit::parse(
        "a.ts",
        "type Id = string;\ninterface Empty {}\ninterface OnlyMethods { run(): void; }",
    )
    .unwrap();
    let dict = build(&[&unit]);
    assert!(dict.is_empty());
}

#[test]
fn test_later_unit_wins() {
    let first = SourceUnit::parse("a.ts", "interface P { a: number }").unwrap();
    let second = SourceUnit::parse("b.ts", "interface P { b: string; c: string }").unwrap();
    let dict = build(&[&first, &second]);
    assert_eq!(dict.len(), 1);
    assert_eq!(dict.get("P").unwrap().len(), 2);
    assert_eq!(dict.fields_for("P")[0].name, "b");
}

#[test]
fn test_unknown_name_has_no_fields() {
    let unit = SourceUnit::parse("a.ts", "interface P { a: number }").unwrap();
    let dict = build(&[&unit]);
    assert!(dict.fields_for("Q").is_empty());
    assert_eq!(dict.names().collect::<Vec<_>>(), vec!["P"]);
}

#[test]
fn test_field_types_resolved() {
    let unit = SourceUnit::parse(
        "a.ts",
        "interface H { on: (e: Event) => void; tags: string[]; mode: 'a' | 'b' }",
    )
    .unwrap();
    let dict = build(&[&unit]);
    let types: Vec<&str> = dict.get("H").unwrap().iter().map(|f| f.type_name.as_str()).collect();
    assert_eq!(types, vec!["(e: Event) => void", "string[]", "'a' | 'b'"]);
}
