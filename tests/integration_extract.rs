// tests/integration_extract.rs
use std::fs;
use std::path::Path;
use tsdocgen_core::extract::{self, DocPolicy, ExtractOptions};
use tsdocgen_core::model::MethodRecord;
use tsdocgen_core::unit::SourceUnit;
use tsdocgen_core::DocgenError;

fn run(code: &str, options: &ExtractOptions) -> Vec<MethodRecord> {
    let unit = SourceUnit::parse("mem.ts", code).unwrap();
    extract::extract_unit(&unit, options).unwrap().records
}

fn run_default(code: &str) -> Vec<MethodRecord> {
    run(code, &ExtractOptions::default())
}

#[test]
fn test_foo_add_record() {
    let code = "class Foo { /** Adds two numbers.\n* @param a First\n* @param b Second\n* @returns Sum\n*/ add(a: number, b?: string): number {} }";
    let records = run_default(code);
    assert_eq!(records.len(), 1);

    let json = serde_json::to_value(&records[0]).unwrap();
    let expected = serde_json::json!({
        "methodName": "add",
        "description": "Adds two numbers.",
        "example": null,
        "parameters": [
            {"name": "a", "type": "number", "description": "First", "required": true, "parameters": []},
            {"name": "b", "type": "string", "description": "Second", "required": false, "parameters": []}
        ],
        "deprecated": null,
        "returns": {"type": "number", "description": "Sum"}
    });
    assert_eq!(json, expected);
}

#[test]
fn test_point_fields_nested() {
    let code = r"
interface Point { /** X coord */ x: number; /** Y coord */ y: number; }

class Canvas {
  /** Moves the pen. */
  moveTo(p: Point): void {}
}
";
    let records = run_default(code);
    assert_eq!(records.len(), 1);
    let nested = &records[0].parameters[0].parameters;
    assert_eq!(nested.len(), 2);
    assert_eq!(nested[0].name, "x");
    assert_eq!(nested[0].type_name, "number");
    assert_eq!(nested[0].description, "X coord");
    assert!(nested[0].required);
    assert_eq!(nested[1].name, "y");
    assert_eq!(nested[1].description, "Y coord");
    assert!(nested[1].required);
}

#[test]
fn test_example_block() {
    let code = "class A {\n  /**\n   * Runs.\n   * @example\n   * ```ts\n   * foo();\n   * ```\n   */\n  run() {}\n\n  /** No example. */\n  stop() {}\n}";
    let records = run_default(code);
    let example = records[0].example.as_ref().unwrap();
    assert_eq!(example.content, "foo();");
    assert_eq!(example.language, "ts");
    assert!(records[1].example.is_none());

    let json = serde_json::to_value(&records[1]).unwrap();
    assert!(json["example"].is_null());
}

#[test]
fn test_empty_module_is_empty_array() {
    let records = run_default("const x = 1;\n");
    assert!(records.is_empty());
    assert_eq!(serde_json::to_string(&records).unwrap(), "[]");
}

#[test]
fn test_undocumented_is_tolerated() {
    let records = run_default("class A { go(n: number) {} }");
    assert_eq!(records.len(), 1);
    let r = &records[0];
    assert_eq!(r.description, "");
    assert_eq!(r.parameters[0].description, "");
    assert_eq!(r.returns.type_name, "void");
    assert_eq!(r.returns.description, "");
}

#[test]
fn test_strict_rejects_undocumented() {
    let unit = SourceUnit::parse("mem.ts", "class A {\n  go() {}\n}").unwrap();
    let options = ExtractOptions {
        policy: DocPolicy::Strict,
        ..ExtractOptions::default()
    };
    let err = extract::extract_unit(&unit, &options).unwrap_err();
    match err {
        DocgenError::Undocumented { name, line, .. } => {
            assert_eq!(name, "go");
            assert_eq!(line, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_strict_accepts_documented() {
    let unit = SourceUnit::parse("mem.ts", "class A {\n  /** Goes. */\n  go() {}\n}").unwrap();
    let options = ExtractOptions {
        policy: DocPolicy::Strict,
        ..ExtractOptions::default()
    };
    assert_eq!(extract::extract_unit(&unit, &options).unwrap().records.len(), 1);
}

#[test]
fn test_deprecated_distinguishes_empty() {
    let code = "class A {\n  /** Old.\n   * @deprecated */\n  a() {}\n  /** Old.\n   * @deprecated Use b. */\n  b() {}\n  /** Fine. */\n  c() {}\n}";
    let records = run_default(code);
    assert_eq!(records[0].deprecated.as_deref(), Some(""));
    assert_eq!(records[1].deprecated.as_deref(), Some("Use b."));
    assert_eq!(records[2].deprecated, None);
}

#[test]
fn test_decorated_method_keeps_docs() {
    let code = "class Api {\n  /**\n   * Handles it.\n   * @param id - Record id.\n   * @returns The record.\n   */\n  @Get(':id')\n  @Auth()\n  handle(id: string): Rec {}\n}";
    let records = run_default(code);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].description, "Handles it.");
    assert_eq!(records[0].parameters[0].description, "Record id.");
    assert_eq!(records[0].returns.description, "The record.");
}

#[test]
fn test_return_type_is_source_text() {
    let code = "class Repo {\n  load(): Promise<User[]> {}\n  pair(): [number, string] {}\n  keys(): keyof Foo {}\n  isUser(x: unknown): x is User {}\n}";
    let unit = SourceUnit::parse("mem.ts", code).unwrap();
    let extraction = extract::extract_unit(&unit, &ExtractOptions::default()).unwrap();
    let returns: Vec<(&str, &str)> = extraction
        .records
        .iter()
        .map(|r| (r.method_name.as_str(), r.returns.type_name.as_str()))
        .collect();
    assert_eq!(
        returns,
        vec![
            ("load", "Promise<User[]>"),
            ("pair", "[number, string]"),
            ("keys", "keyof Foo"),
            ("isUser", "x is User"),
        ]
    );
    assert_eq!(extraction.diagnostics.warnings(), 0);
}

#[test]
fn test_multi_paragraph_blocks() {
    let code = "class A {\n  /**\n   * Summary.\n   * @param a - One.\n   *\n   * More on a.\n   * @returns First part.\n   *\n   * Second part.\n   */\n  f(a: number): number {}\n}";
    let records = run_default(code);
    assert_eq!(records[0].parameters[0].description, "One.\n\nMore on a.");
    assert_eq!(records[0].returns.description, "First part.\n\nSecond part.");
}

#[test]
fn test_hidden_members_and_nesting() {
    let code = r"
class A {
  private secret() {
    const helper = {
      /** Visible. */
      inner() {},
    };
  }
  protected guarded() {}
  open() {}
}
";
    let names: Vec<String> = run_default(code).into_iter().map(|r| r.method_name).collect();
    assert_eq!(names, vec!["inner", "open"]);
}

#[test]
fn test_class_filter_and_constructor() {
    let code = r"
class A {
  /** Builds an A. */
  constructor(x: number) {}
  a() {}
}
class B {
  b() {}
}
";
    let options = ExtractOptions {
        class_name: Some("A".to_string()),
        ..ExtractOptions::default()
    };
    let records = run(code, &options);
    let names: Vec<&str> = records.iter().map(|r| r.method_name.as_str()).collect();
    assert_eq!(names, vec!["constructor", "a"]);
    assert_eq!(records[0].description, "Builds an A.");
}

#[test]
fn test_rest_and_optional_parameters() {
    let code = "class A {\n  /**\n   * @param items - All items.\n   */\n  push(flag?: boolean, ...items: string[]) {}\n}";
    let records = run_default(code);
    let params = &records[0].parameters;
    assert_eq!(params[0].name, "flag");
    assert!(!params[0].required);
    assert_eq!(params[1].name, "items");
    assert_eq!(params[1].type_name, "string[]");
    assert_eq!(params[1].description, "All items.");
    assert!(params[1].required);
}

#[test]
fn test_inline_tag_fails_run() {
    let unit = SourceUnit::parse("mem.ts", "class A {\n  /** See {@link B}. */\n  a() {}\n}").unwrap();
    let err = extract::extract_unit(&unit, &ExtractOptions::default()).unwrap_err();
    assert!(matches!(err, DocgenError::UnsupportedNode { .. }));
}

#[test]
fn test_shapes_from_direct_import_only() {
    let d = tempfile::tempdir().unwrap();
    fs::write(
        d.path().join("main.ts"),
        "import { Opts } from './opts';\nimport { Deep } from './deep';\nclass A {\n  /** Configures. */\n  set(o: Opts, d: Deep) {}\n}\n",
    )
    .unwrap();
    fs::write(
        d.path().join("opts.ts"),
        "import { Far } from './far';\nexport interface Opts {\n  /** Verbose output. */\n  verbose?: boolean;\n}\n",
    )
    .unwrap();
    fs::write(d.path().join("deep.ts"), "export type Deep = { level: number };\n").unwrap();
    fs::write(d.path().join("far.ts"), "export interface Far { f: string }\n").unwrap();

    let extraction =
        extract::extract_file(&d.path().join("main.ts"), &ExtractOptions::default()).unwrap();
    assert_eq!(extraction.shape_count, 2);

    let params = &extraction.records[0].parameters;
    assert_eq!(params[0].parameters.len(), 1);
    assert_eq!(params[0].parameters[0].name, "verbose");
    assert_eq!(params[0].parameters[0].description, "Verbose output.");
    assert!(!params[0].parameters[0].required);
    assert_eq!(params[1].parameters[0].name, "level");
}

#[test]
fn test_import_depth_two_reaches_transitive() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join("main.ts"), "import './a';\nclass M { m(x: Far) {} }\n").unwrap();
    fs::write(d.path().join("a.ts"), "import './far';\n").unwrap();
    fs::write(d.path().join("far.ts"), "export interface Far { f: string }\n").unwrap();

    let main = d.path().join("main.ts");
    let shallow = extract::extract_file(&main, &ExtractOptions::default()).unwrap();
    assert!(shallow.records[0].parameters[0].parameters.is_empty());

    let options = ExtractOptions {
        import_depth: 2,
        ..ExtractOptions::default()
    };
    let deep = extract::extract_file(&main, &options).unwrap();
    assert_eq!(deep.records[0].parameters[0].parameters.len(), 1);
}

#[test]
fn test_missing_import_is_diagnostic() {
    let d = tempfile::tempdir().unwrap();
    let main = d.path().join("main.ts");
    fs::write(&main, "import { X } from './gone';\nclass A { a() {} }\n").unwrap();

    let extraction = extract::extract_file(&main, &ExtractOptions::default()).unwrap();
    assert_eq!(extraction.records.len(), 1);
    assert_eq!(extraction.diagnostics.warnings(), 1);
    let msg = &extraction.diagnostics.entries()[0].message;
    assert!(msg.starts_with("File in import ("));
    assert!(msg.ends_with("gone.ts) does not exist"));
}

#[test]
fn test_missing_primary_is_io_error() {
    let err = extract::extract_file(Path::new("/no/such/file.ts"), &ExtractOptions::default())
        .unwrap_err();
    assert!(matches!(err, DocgenError::Io { .. }));
}
