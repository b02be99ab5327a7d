//! Tests for schema-document parsing.

use crate::ast::LiteralKind;
use crate::ast::OperationKind;
use crate::ast::Type;
use crate::ast::Value;
use crate::tests::utils::parse_sdl;
use crate::tests::utils::parse_sdl_err;
use crate::Pos;

const STAR_WARS: &str = r#"
schema @entry { query: Query mutation: Mutation }

scalar DateTime @format(pattern: "iso8601")

type Query {
  hero(episode: Episode = JEDI, limit: Int = 10): Character
  search(text: String!): [SearchResult!]!
}

interface Character { id: ID! name: String }

union SearchResult = | Human | Droid | Starship

enum Episode { NEWHOPE EMPIRE JEDI @deprecated(reason: "not yet") }

input ReviewInput { stars: Int! = 5, commentary: String }

type Human implements Character, Node @key(fields: "id") {
  id: ID!
  name: String
}

extend type Query { reviews(episode: Episode!): [ReviewInput] }

directive @key(fields: String!) on OBJECT | INTERFACE

type Mutation { review(input: ReviewInput!): Boolean }
"#;

// =============================================================================
// Grouping by kind
// =============================================================================

#[test]
fn definitions_land_in_their_kind() {
    let schema = parse_sdl(STAR_WARS);
    assert_eq!(schema.definition_count(), 11);
    assert_eq!(schema.schemas.len(), 1);
    assert_eq!(schema.scalars.len(), 1);
    assert_eq!(schema.types.len(), 3);
    assert_eq!(schema.interfaces.len(), 1);
    assert_eq!(schema.unions.len(), 1);
    assert_eq!(schema.enums.len(), 1);
    assert_eq!(schema.input_objects.len(), 1);
    assert_eq!(schema.extends.len(), 1);
    assert_eq!(schema.directives.len(), 1);

    let type_names: Vec<&str> = schema.types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(type_names, vec!["Query", "Human", "Mutation"]);

    // Extensions are kept apart from the types they extend.
    assert!(schema.type_definition("Query").is_some());
    assert_eq!(schema.extends[0].definition.name, "Query");
    assert!(schema.type_definition("Character").is_none());
}

#[test]
fn schema_definition_operation_types() {
    let schema = parse_sdl(STAR_WARS);
    let def = &schema.schemas[0];
    assert!(def.directives.as_ref().unwrap().get("entry").is_some());

    let ops: Vec<(OperationKind, &str)> = def
        .operation_types
        .iter()
        .map(|op| (op.operation.kind, op.named_type.name.as_str()))
        .collect();
    assert_eq!(
        ops,
        vec![
            (OperationKind::Query, "Query"),
            (OperationKind::Mutation, "Mutation"),
        ],
    );
}

#[test]
fn field_arguments_and_defaults() {
    let schema = parse_sdl(STAR_WARS);
    let query = schema.type_definition("Query").unwrap();
    let hero = query.fields.get("hero").unwrap();
    let args = hero.arguments.as_ref().unwrap();
    assert_eq!(args.arguments.len(), 2);

    let episode = &args.arguments[0];
    assert_eq!(episode.name, "episode");
    let Some(default) = &episode.default_value else {
        panic!("episode has no default");
    };
    let Value::Name(jedi) = &default.value else {
        panic!("expected enum default, got {:?}", default.value);
    };
    assert!(jedi.is_enum());

    let limit = &args.arguments[1];
    let Some(Value::Literal(ten)) = limit.default_value.as_ref().map(|d| &d.value) else {
        panic!("limit has no literal default");
    };
    assert_eq!(ten.kind, LiteralKind::Int);
    assert_eq!(ten.parse_int(), Some(10));

    let search = query.fields.get("search").unwrap();
    let Type::List(list) = &search.field_type else {
        panic!("expected list type");
    };
    assert!(list.non_null.is_some());
    assert!(list.elem.is_non_null());
    assert_eq!(search.field_type.innermost_name(), "SearchResult");
}

#[test]
fn union_members_with_leading_pipe() {
    let schema = parse_sdl(STAR_WARS);
    let search_result = &schema.unions[0];
    assert_eq!(search_result.name, "SearchResult");
    assert!(search_result.members.leading_pipe.is_some());
    let members: Vec<&str> = search_result.members.members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(members, vec!["Human", "Droid", "Starship"]);

    let schema = parse_sdl("union U = A | B");
    assert!(schema.unions[0].members.leading_pipe.is_none());
    assert_eq!(schema.unions[0].members.members.len(), 2);
}

#[test]
fn enum_values_and_their_directives() {
    let schema = parse_sdl(STAR_WARS);
    let episode = &schema.enums[0];
    let values: Vec<&str> = episode.values.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(values, vec!["NEWHOPE", "EMPIRE", "JEDI"]);
    assert!(episode.values[0].directives.is_none());
    assert!(episode.values[2].directives.as_ref().unwrap().get("deprecated").is_some());
}

#[test]
fn input_object_fields() {
    let schema = parse_sdl(STAR_WARS);
    let input = &schema.input_objects[0];
    assert_eq!(input.name, "ReviewInput");
    assert_eq!(input.fields.fields.len(), 2);
    assert!(input.fields.fields[0].default_value.is_some());
    assert!(input.fields.fields[1].default_value.is_none());
}

#[test]
fn implements_accepts_commas_and_spaces() {
    let schema = parse_sdl(STAR_WARS);
    let human = schema.type_definition("Human").unwrap();
    let interfaces: Vec<&str> = human
        .implements
        .as_ref()
        .unwrap()
        .interfaces
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(interfaces, vec!["Character", "Node"]);
    assert!(human.directives.as_ref().unwrap().get("key").is_some());

    let schema = parse_sdl("type T implements A B { f: Int }");
    assert_eq!(schema.types[0].implements.as_ref().unwrap().interfaces.len(), 2);
}

#[test]
fn directive_definition_locations() {
    let schema = parse_sdl(STAR_WARS);
    let key = &schema.directives[0];
    assert_eq!(key.name, "key");
    assert!(key.locations.leading_pipe.is_none());
    assert!(key.locations.contains("OBJECT"));
    assert!(key.locations.contains("INTERFACE"));
    assert!(!key.locations.contains("FIELD"));

    let schema = parse_sdl("directive @skip(if: Boolean!) on | FIELD | INLINE_FRAGMENT");
    let skip = &schema.directives[0];
    assert!(skip.locations.leading_pipe.is_some());
    assert_eq!(skip.locations.locations.len(), 2);
    assert_eq!(skip.arguments.as_ref().unwrap().arguments[0].name, "if");
}

#[test]
fn reserved_words_are_names_in_sdl() {
    let schema = parse_sdl("type type { type: type input: String }");
    let ty = &schema.types[0];
    assert_eq!(ty.name, "type");
    assert_eq!(ty.fields.fields.len(), 2);
    assert_eq!(ty.fields.get("type").unwrap().field_type.innermost_name(), "type");
    assert!(ty.fields.get("input").is_some());
}

#[test]
fn empty_schema_has_no_span() {
    let schema = parse_sdl("  # nothing here\n");
    assert!(schema.is_empty());
    assert_eq!(schema.pos, Pos::NONE);
    assert_eq!(schema.end, Pos::NONE);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn variables_rejected_in_schema_constants() {
    let err = parse_sdl_err("type T { f(a: Int = $x): Int }");
    assert_eq!(err.as_syntax_error().unwrap().found, "$");

    let err = parse_sdl_err("scalar S @d(a: [$x])");
    assert_eq!(err.as_syntax_error().unwrap().found, "$");
}

#[test]
fn extend_covers_object_types_only() {
    let err = parse_sdl_err("extend scalar Foo");
    assert_eq!(err.to_string(), "1:8: expecting type, found 'scalar'");
}

#[test]
fn empty_fields_definition_is_rejected() {
    let err = parse_sdl_err("type T { }");
    assert_eq!(err.to_string(), "1:10: expecting NAME, found '}'");
}

#[test]
fn union_requires_a_member() {
    let err = parse_sdl_err("union U = ");
    assert_eq!(err.to_string(), "1:11: expecting NAME, found 'EOF'");
}
