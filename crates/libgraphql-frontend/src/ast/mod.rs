//! Typed syntax tree for GraphQL executable and schema documents.
//!
//! Node types are plain data records parameterized over the `'src` lifetime
//! of the source text: names and literals borrow from it via
//! [`Cow<'src, str>`](std::borrow::Cow). Every node records the [`Pos`] of
//! the tokens it owns (keywords, punctuators, names) and derives its span
//! from them and from its children through the [`AstNode`] trait.
//!
//! Trees are produced by the [`parser`](crate::parser), are immutable once
//! built, and own all their children. Nodes hold no parent references.
//!
//! [`Pos`]: crate::Pos

mod argument;
mod ast_node;
mod directive;
mod directive_definition;
mod document;
mod enum_definition;
mod extend_definition;
mod field;
mod fragment;
mod input_object_definition;
mod interface_definition;
mod name;
mod operation_definition;
mod scalar_definition;
mod schema;
mod schema_definition;
mod selection;
mod type_annotation;
mod type_definition;
mod union_definition;
mod value;
mod variable_definition;

pub use argument::Argument;
pub use argument::Arguments;
pub use ast_node::AstNode;
pub use directive::Directive;
pub use directive::Directives;
pub use directive_definition::DirectiveDefinition;
pub use directive_definition::Location;
pub use directive_definition::Locations;
pub use document::Definition;
pub use document::Document;
pub use enum_definition::EnumDefinition;
pub use enum_definition::EnumValue;
pub use extend_definition::ExtendDefinition;
pub use field::Alias;
pub use field::Field;
pub use fragment::FragmentDefinition;
pub use fragment::FragmentSpread;
pub use fragment::InlineFragment;
pub use fragment::TypeCondition;
pub use input_object_definition::InputFieldsDefinition;
pub use input_object_definition::InputObjectDefinition;
pub use interface_definition::InterfaceDefinition;
pub use name::Name;
pub use operation_definition::OperationDefinition;
pub use operation_definition::OperationKind;
pub use operation_definition::OperationType;
pub use scalar_definition::ScalarDefinition;
pub use schema::Schema;
pub use schema_definition::OperationTypeDefinition;
pub use schema_definition::SchemaDefinition;
pub use selection::Selection;
pub use selection::SelectionSet;
pub use type_annotation::ListType;
pub use type_annotation::NamedType;
pub use type_annotation::Type;
pub use type_definition::ArgumentsDefinition;
pub use type_definition::FieldDefinition;
pub use type_definition::FieldsDefinition;
pub use type_definition::ImplementsInterfaces;
pub use type_definition::InputValueDefinition;
pub use type_definition::TypeDefinition;
pub use union_definition::Member;
pub use union_definition::Members;
pub use union_definition::UnionDefinition;
pub use value::ListValue;
pub use value::LiteralKind;
pub use value::LiteralValue;
pub use value::NameValue;
pub use value::ObjectField;
pub use value::ObjectValue;
pub use value::Value;
pub use value::Variable;
pub use variable_definition::DefaultValue;
pub use variable_definition::VariableDefinition;
pub use variable_definition::VariableDefinitions;
