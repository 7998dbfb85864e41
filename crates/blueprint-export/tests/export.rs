//! Integration tests for writing a full blueprint build to disk.

use std::fs;

use blueprint_core::{Format, Manifest, Name, Session};
use blueprint_export::{LibraryIndex, OutputLayout, write_all, write_library_index, write_module};
use tempfile::TempDir;

const MANIFEST: &str = r#"{
    "config": {"inputRoot": "blueprint/src"},
    "constants": [
        {"name": "add", "typeDeps": ["Nat"], "valueDeps": ["Nat.rec"]},
        {"name": "zero_add", "typeDeps": ["add"], "valueDeps": ["add"]}
    ],
    "nodes": [
        {"name": "add", "statement": {"text": "Natural number *addition*."}},
        {"name": "zero_add", "statement": {"text": "Zero is a left identity."}, "proof": {"text": "By `simp`."}}
    ],
    "modules": [
        {
            "name": "Nat.Add",
            "entries": [
                {"position": {"line": 3, "column": 0}, "type": "node", "data": "add"},
                {"position": {"line": 7, "column": 0}, "type": "node", "data": "zero_add"}
            ]
        },
        {
            "name": "Nat.All",
            "entries": [
                {"position": {"line": 1, "column": 0}, "type": "includeModule", "data": "Nat.Add"},
                {"position": {"line": 2, "column": 0}, "type": "freeText", "data": "Closing remarks."}
            ]
        }
    ]
}"#;

fn session() -> Session {
    Session::from_manifest(Manifest::from_json(MANIFEST).expect("Failed to parse manifest"))
        .expect("Failed to build session")
}

#[test]
fn test_write_all_modules() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let layout = OutputLayout::new(temp.path());

    let written = write_all(&session(), &layout).expect("Failed to export");
    assert_eq!(written.len(), 4);
    for path in &written {
        assert!(path.exists(), "{} missing", path.display());
    }

    let add = fs::read_to_string(temp.path().join("module/Nat/Add.tex")).unwrap();
    assert!(add.contains("Natural number \\emph{addition}."));
    assert!(add.contains("\\begin{theorem}\\leanok{}\\uses{add}Zero is a left identity."));
    assert!(add.contains("\\begin{proof}\\leanok{}By \\texttt{simp}.\n\\end{proof}"));

    let all = fs::read_to_string(temp.path().join("module/Nat/All.tex")).unwrap();
    assert_eq!(
        all,
        "\\input{blueprint/src/module/Nat/Add.tex}\n\nClosing remarks.\n"
    );
}

#[test]
fn test_json_module_document() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let layout = OutputLayout::new(temp.path());

    let path = write_module(&session(), &layout, &Name::from("Nat.All"), Format::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(value[0]["type"], "includeModule");
    assert_eq!(value[0]["data"], "Nat.Add");
    assert_eq!(value[1]["type"], "moduleDoc");
}

#[test]
fn test_rewrite_is_identical() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let layout = OutputLayout::new(temp.path());
    let session = session();
    let module = Name::from("Nat.Add");

    let path = write_module(&session, &layout, &module, Format::Latex).unwrap();
    let first = fs::read_to_string(&path).unwrap();
    write_module(&session, &layout, &module, Format::Latex).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), first);
}

#[test]
fn test_library_index_files() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let layout = OutputLayout::new(temp.path());
    let session = session();
    let members = session.store.modules().to_vec();

    let tex = write_library_index(&session.config, &layout, &Name::from("Nat"), &members, Format::Latex)
        .unwrap();
    assert_eq!(tex, temp.path().join("library/Nat.tex"));
    assert_eq!(
        fs::read_to_string(tex).unwrap(),
        "\\input{blueprint/src/module/Nat/Add.tex}\n\n\\input{blueprint/src/module/Nat/All.tex}\n"
    );

    let json = write_library_index(&session.config, &layout, &Name::from("Nat"), &members, Format::Json)
        .unwrap();
    let index: LibraryIndex = serde_json::from_str(&fs::read_to_string(json).unwrap()).unwrap();
    assert_eq!(index.modules, vec!["module/Nat/Add.json", "module/Nat/All.json"]);
}
