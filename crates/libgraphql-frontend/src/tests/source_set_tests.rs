//! Tests for loading sources from disk and parsing them as a set.

use crate::FileSet;
use crate::LoadError;
use crate::ParseError;
use crate::ParserOptions;
use crate::SourceSet;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(path: &Path, text: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, text).unwrap();
}

/// Lays out a directory with two GraphQL files at the top, one nested, and
/// one non-GraphQL file.
fn populate(root: &Path) {
    write(&root.join("a.graphql"), "type A { id: ID }");
    write(&root.join("b.graphqls"), "type B { a: A }");
    write(&root.join("nested/c.graphql"), "scalar C");
    write(&root.join("notes.txt"), "not graphql");
}

fn file_names(sources: &SourceSet) -> Vec<String> {
    sources
        .sources()
        .iter()
        .map(|src| {
            Path::new(&src.name)
                .file_name()
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect()
}

#[test]
fn directory_loads_matching_files_in_order() {
    let dir = tempdir().unwrap();
    populate(dir.path());

    let sources = SourceSet::from_paths([dir.path()]).unwrap();
    assert_eq!(sources.len(), 3);
    assert_eq!(file_names(&sources), vec!["a.graphql", "b.graphqls", "c.graphql"]);
}

#[test]
fn schemas_share_one_file_set() {
    let dir = tempdir().unwrap();
    populate(dir.path());
    let sources = SourceSet::from_paths([dir.path()]).unwrap();

    let mut files = FileSet::new();
    let schemas = sources.parse_schemas(&mut files).unwrap();
    assert_eq!(schemas.len(), 3);
    assert_eq!(files.files().len(), 3);
    assert_eq!(schemas[0].types[0].name, "A");
    assert_eq!(schemas[2].scalars[0].name, "C");

    let c_pos = files.position(schemas[2].scalars[0].name.pos).unwrap();
    assert!(c_pos.filename.ends_with("c.graphql"), "{}", c_pos.filename);
    assert_eq!((c_pos.line, c_pos.column), (1, 8));
}

#[test]
fn explicit_file_is_loaded_despite_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("query.txt");
    write(&path, "{ me { id } }");

    let mut sources = SourceSet::new();
    sources.add_path(&path).unwrap();
    assert_eq!(sources.len(), 1);

    let mut files = FileSet::new();
    let docs = sources.parse_documents(&mut files).unwrap();
    assert_eq!(docs[0].operations().count(), 1);
}

#[test]
fn custom_extensions_replace_the_defaults() {
    let dir = tempdir().unwrap();
    populate(dir.path());

    let mut sources = SourceSet::new().with_extensions([".txt"]);
    sources.add_path(dir.path()).unwrap();
    assert_eq!(file_names(&sources), vec!["notes.txt"]);
}

#[test]
fn missing_path_is_a_walk_error() {
    let dir = tempdir().unwrap();
    let err = SourceSet::from_paths([dir.path().join("absent")]).unwrap_err();
    assert!(matches!(err, LoadError::Walk(_)), "{err:?}");
}

#[test]
fn parse_errors_carry_the_file_name() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("ok.graphql"), "{ a }");
    write(&dir.path().join("zz_broken.graphql"), "{ a(");
    let sources = SourceSet::from_paths([dir.path()]).unwrap();

    let mut files = FileSet::new();
    let err = sources.parse_documents(&mut files).unwrap_err();
    let LoadError::Parse(ParseError::Syntax(syntax)) = &err else {
        panic!("expected a syntax error, got {err:?}");
    };
    assert!(syntax.position.filename.ends_with("zz_broken.graphql"));
    assert!(err.to_string().ends_with("zz_broken.graphql:1:5: expecting NAME, found 'EOF'"));
}

#[test]
fn options_apply_to_every_source() {
    let mut sources = SourceSet::new().with_options(ParserOptions::new().max_depth(1));
    sources.add_source("flat.graphql", "{ a }");
    sources.add_source("deep.graphql", "{ a { b } }");

    let mut files = FileSet::new();
    let err = sources.parse_documents(&mut files).unwrap_err();
    assert!(
        matches!(err, LoadError::Parse(ParseError::NestingTooDeep { limit: 1, .. })),
        "{err:?}",
    );
}

#[test]
fn in_memory_sources_keep_their_names() {
    let mut sources = SourceSet::default();
    assert!(sources.is_empty());
    sources.add_source("inline", "{ a }");
    assert_eq!(sources.sources()[0].name, "inline");
    assert_eq!(sources.sources()[0].text, "{ a }");
}
