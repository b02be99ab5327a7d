//! Tests that node spans cover exactly the source text of each node.

use crate::ast::AstNode;
use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::Schema;
use crate::ast::Selection;
use crate::ast::Value;
use crate::parse_document;
use crate::parse_schema;
use crate::tests::utils::offset_of;
use crate::walker::walk;
use crate::walker::Node;
use crate::walker::Visitor;
use crate::FileSet;
use crate::Pos;

const QUERY: &str = r#"query Hero($episode: Episode = JEDI, $ids: [Int!]!) @cached {
  h: hero(episode: $episode, note: "a\"b") @include(if: true) {
    name
    ... on Droid { primaryFunction }
    ...Extra
  }
}

fragment Extra on Character { id, friends(first: [1, 2]) { name } }
"#;

const SDL: &str = r#"type Query implements Node @key(fields: "id") {
  search(text: String! = "x"): [SearchResult!]!
}

union SearchResult = | B | C

enum Color { RED GREEN @deprecated }

directive @tag(name: String) on FIELD | OBJECT
"#;

fn slice<'s>(files: &FileSet, source: &'s str, node: &impl AstNode) -> &'s str {
    &source[offset_of(files, node.pos())..offset_of(files, node.end())]
}

fn parse_query(files: &mut FileSet) -> Document<'static> {
    match parse_document(QUERY, Some("hero.graphql"), files) {
        Ok(doc) => doc,
        Err(err) => panic!("{err}"),
    }
}

fn parse_sdl(files: &mut FileSet) -> Schema<'static> {
    match parse_schema(SDL, Some("schema.graphqls"), files) {
        Ok(schema) => schema,
        Err(err) => panic!("{err}"),
    }
}

// =============================================================================
// Containment
// =============================================================================

/// Records each violation of `pos <= end` or of a child escaping its
/// parent's span.
#[derive(Default)]
struct SpanChecker {
    stack: Vec<(Pos, Pos)>,
    visited: usize,
    violations: Vec<String>,
}

impl<'a, 'src> Visitor<'a, 'src> for SpanChecker {
    fn enter(&mut self, node: Node<'a, 'src>) -> bool {
        self.visited += 1;
        let (pos, end) = (node.pos(), node.end());
        if !pos.is_valid() || pos > end {
            self.violations.push(format!("bad span {pos:?}..{end:?}: {node:?}"));
        }
        if let Some(&(parent_pos, parent_end)) = self.stack.last()
            && (pos < parent_pos || end > parent_end)
        {
            self.violations.push(format!(
                "{pos:?}..{end:?} escapes parent {parent_pos:?}..{parent_end:?}: {node:?}",
            ));
        }
        self.stack.push((pos, end));
        true
    }

    fn leave(&mut self, _node: Node<'a, 'src>) {
        self.stack.pop();
    }
}

#[test]
fn document_children_nest_within_parents() {
    let mut files = FileSet::new();
    let doc = parse_query(&mut files);
    let mut checker = SpanChecker::default();
    walk(&mut checker, &doc);
    assert!(checker.visited > 30);
    assert!(checker.violations.is_empty(), "{:#?}", checker.violations);
}

#[test]
fn schema_children_nest_within_parents() {
    let mut files = FileSet::new();
    let schema = parse_sdl(&mut files);
    let mut checker = SpanChecker::default();
    walk(&mut checker, &schema);
    assert!(checker.visited > 30);
    assert!(checker.violations.is_empty(), "{:#?}", checker.violations);
}

// =============================================================================
// Exact slices
// =============================================================================

#[test]
fn executable_node_slices() {
    let mut files = FileSet::new();
    let doc = parse_query(&mut files);
    let Definition::Operation(op) = &doc.definitions[0] else {
        panic!("expected operation");
    };

    assert!(slice(&files, QUERY, op).starts_with("query Hero("));
    assert!(slice(&files, QUERY, op).ends_with("...Extra\n  }\n}"));

    let vars = op.variable_definitions.as_ref().unwrap();
    assert_eq!(
        slice(&files, QUERY, vars),
        "($episode: Episode = JEDI, $ids: [Int!]!)",
    );
    assert_eq!(
        slice(&files, QUERY, &vars.definitions[0]),
        "$episode: Episode = JEDI",
    );
    assert_eq!(slice(&files, QUERY, &vars.definitions[1].var_type), "[Int!]!");
    assert_eq!(slice(&files, QUERY, op.directives.as_ref().unwrap()), "@cached");

    let Selection::Field(hero) = &op.selection_set.selections[0] else {
        panic!("expected field");
    };
    assert!(slice(&files, QUERY, hero).starts_with("h: hero("));
    assert!(slice(&files, QUERY, hero).ends_with("...Extra\n  }"));
    assert_eq!(slice(&files, QUERY, hero.alias.as_ref().unwrap()), "h:");
    assert_eq!(slice(&files, QUERY, &hero.name), "hero");

    let args = hero.arguments.as_ref().unwrap();
    assert_eq!(
        slice(&files, QUERY, args),
        r#"(episode: $episode, note: "a\"b")"#,
    );
    let note = args.get("note").unwrap();
    assert_eq!(slice(&files, QUERY, &note.value), r#""a\"b""#);
    let Value::Literal(literal) = &note.value else {
        panic!("expected string literal");
    };
    assert_eq!(literal.value, "a\"b");

    let directive = &hero.directives.as_ref().unwrap().directives[0];
    assert_eq!(slice(&files, QUERY, directive), "@include(if: true)");

    let selections = &hero.selection_set.as_ref().unwrap().selections;
    assert_eq!(
        slice(&files, QUERY, &selections[1]),
        "... on Droid { primaryFunction }",
    );
    assert_eq!(slice(&files, QUERY, &selections[2]), "...Extra");
}

#[test]
fn fragment_definition_slices() {
    let mut files = FileSet::new();
    let doc = parse_query(&mut files);
    let Definition::Fragment(extra) = &doc.definitions[1] else {
        panic!("expected fragment");
    };
    assert_eq!(
        slice(&files, QUERY, extra),
        "fragment Extra on Character { id, friends(first: [1, 2]) { name } }",
    );
    assert_eq!(slice(&files, QUERY, &extra.type_condition), "on Character");

    let Selection::Field(friends) = &extra.selection_set.selections[1] else {
        panic!("expected field");
    };
    let first = &friends.arguments.as_ref().unwrap().arguments[0];
    assert_eq!(slice(&files, QUERY, first), "first: [1, 2]");
    assert_eq!(slice(&files, QUERY, &first.value), "[1, 2]");

    assert_eq!(slice(&files, QUERY, &doc).len(), QUERY.trim_end().len());
}

#[test]
fn schema_node_slices() {
    let mut files = FileSet::new();
    let schema = parse_sdl(&mut files);

    let query = &schema.types[0];
    assert!(slice(&files, SDL, query).starts_with("type Query implements Node"));
    assert!(slice(&files, SDL, query).ends_with("[SearchResult!]!\n}"));
    assert_eq!(
        slice(&files, SDL, query.implements.as_ref().unwrap()),
        "implements Node",
    );

    let search = &query.fields.fields[0];
    assert_eq!(
        slice(&files, SDL, search),
        r#"search(text: String! = "x"): [SearchResult!]!"#,
    );
    let text = &search.arguments.as_ref().unwrap().arguments[0];
    assert_eq!(slice(&files, SDL, text), r#"text: String! = "x""#);
    assert_eq!(slice(&files, SDL, &text.value_type), "String!");

    let search_result = &schema.unions[0];
    assert_eq!(slice(&files, SDL, &search_result.members), "| B | C");
    assert_eq!(slice(&files, SDL, search_result), "union SearchResult = | B | C");

    let color = &schema.enums[0];
    assert_eq!(slice(&files, SDL, &color.values[1]), "GREEN @deprecated");

    let tag = &schema.directives[0];
    assert_eq!(slice(&files, SDL, &tag.locations), "FIELD | OBJECT");
    assert!(slice(&files, SDL, &schema).starts_with("type Query"));
    assert!(slice(&files, SDL, &schema).ends_with("on FIELD | OBJECT"));
}

/// Positions stay distinct across files registered in the same set.
#[test]
fn second_file_positions_follow_the_first() {
    let mut files = FileSet::new();
    let doc = parse_query(&mut files);
    let schema = parse_sdl(&mut files);
    assert!(doc.end() < schema.pos());
    assert_eq!(files.position(schema.pos()).unwrap().filename, "schema.graphqls");
    assert_eq!(files.position(doc.pos()).unwrap().filename, "hero.graphql");
}
