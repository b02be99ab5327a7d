//! Pre-order traversal over the syntax tree.
//!
//! [`walk()`] calls [`Visitor::enter()`] on a node; if that returns `true` it
//! walks each of the node's children in source order and then calls
//! [`Visitor::leave()`] on the node. Returning `false` from `enter()` prunes
//! the subtree, and `leave()` is not called for it.
//!
//! ```rust
//! use libgraphql_frontend::FileSet;
//! use libgraphql_frontend::parse_document;
//! use libgraphql_frontend::walker::Node;
//! use libgraphql_frontend::walker::inspect;
//!
//! let mut files = FileSet::new();
//! let doc = parse_document("{ a b { c } }", None, &mut files).unwrap();
//!
//! let mut fields = vec![];
//! inspect(&doc, |node| {
//!     if let Node::Field(field) = node {
//!         fields.push(field.name.as_str());
//!     }
//!     true
//! });
//! assert_eq!(fields, ["a", "b", "c"]);
//! ```

use crate::ast::Alias;
use crate::ast::Argument;
use crate::ast::Arguments;
use crate::ast::ArgumentsDefinition;
use crate::ast::AstNode;
use crate::ast::DefaultValue;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::Directives;
use crate::ast::Document;
use crate::ast::EnumDefinition;
use crate::ast::EnumValue;
use crate::ast::ExtendDefinition;
use crate::ast::Field;
use crate::ast::FieldDefinition;
use crate::ast::FieldsDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::ImplementsInterfaces;
use crate::ast::InlineFragment;
use crate::ast::InputFieldsDefinition;
use crate::ast::InputObjectDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::InterfaceDefinition;
use crate::ast::ListType;
use crate::ast::ListValue;
use crate::ast::LiteralValue;
use crate::ast::Location;
use crate::ast::Locations;
use crate::ast::Member;
use crate::ast::Members;
use crate::ast::Name;
use crate::ast::NameValue;
use crate::ast::NamedType;
use crate::ast::ObjectField;
use crate::ast::ObjectValue;
use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::OperationTypeDefinition;
use crate::ast::ScalarDefinition;
use crate::ast::Schema;
use crate::ast::SchemaDefinition;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::Type;
use crate::ast::TypeCondition;
use crate::ast::TypeDefinition;
use crate::ast::UnionDefinition;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::VariableDefinition;
use crate::ast::VariableDefinitions;
use crate::Pos;
use inherent::inherent;
use smallvec::SmallVec;

/// A borrowed reference to any node of a [`Document`] or [`Schema`] tree.
///
/// The sum types of the tree ([`Definition`], [`Selection`], [`Value`],
/// [`Type`]) have no variant here: converting one with `Node::from` yields
/// the node it wraps.
#[derive(Clone, Copy, Debug)]
pub enum Node<'a, 'src> {
    Document(&'a Document<'src>),
    OperationDefinition(&'a OperationDefinition<'src>),
    OperationType(&'a OperationType),
    VariableDefinitions(&'a VariableDefinitions<'src>),
    VariableDefinition(&'a VariableDefinition<'src>),
    DefaultValue(&'a DefaultValue<'src>),
    Variable(&'a Variable<'src>),
    SelectionSet(&'a SelectionSet<'src>),
    Field(&'a Field<'src>),
    Alias(&'a Alias<'src>),
    FragmentSpread(&'a FragmentSpread<'src>),
    InlineFragment(&'a InlineFragment<'src>),
    FragmentDefinition(&'a FragmentDefinition<'src>),
    TypeCondition(&'a TypeCondition<'src>),
    Arguments(&'a Arguments<'src>),
    Argument(&'a Argument<'src>),
    Directives(&'a Directives<'src>),
    Directive(&'a Directive<'src>),
    LiteralValue(&'a LiteralValue<'src>),
    NameValue(&'a NameValue<'src>),
    ListValue(&'a ListValue<'src>),
    ObjectValue(&'a ObjectValue<'src>),
    ObjectField(&'a ObjectField<'src>),
    NamedType(&'a NamedType<'src>),
    ListType(&'a ListType<'src>),
    Name(&'a Name<'src>),
    Schema(&'a Schema<'src>),
    SchemaDefinition(&'a SchemaDefinition<'src>),
    OperationTypeDefinition(&'a OperationTypeDefinition<'src>),
    ScalarDefinition(&'a ScalarDefinition<'src>),
    TypeDefinition(&'a TypeDefinition<'src>),
    ImplementsInterfaces(&'a ImplementsInterfaces<'src>),
    FieldsDefinition(&'a FieldsDefinition<'src>),
    FieldDefinition(&'a FieldDefinition<'src>),
    ArgumentsDefinition(&'a ArgumentsDefinition<'src>),
    InputValueDefinition(&'a InputValueDefinition<'src>),
    InterfaceDefinition(&'a InterfaceDefinition<'src>),
    UnionDefinition(&'a UnionDefinition<'src>),
    Members(&'a Members<'src>),
    Member(&'a Member<'src>),
    EnumDefinition(&'a EnumDefinition<'src>),
    EnumValue(&'a EnumValue<'src>),
    InputObjectDefinition(&'a InputObjectDefinition<'src>),
    InputFieldsDefinition(&'a InputFieldsDefinition<'src>),
    ExtendDefinition(&'a ExtendDefinition<'src>),
    DirectiveDefinition(&'a DirectiveDefinition<'src>),
    Locations(&'a Locations<'src>),
    Location(&'a Location<'src>),
}

/// Expands to a match binding the referenced node of every variant to `$n`.
macro_rules! each_node {
    ($node:expr, $n:ident => $body:expr) => {
        match $node {
            Node::Document($n) => $body,
            Node::OperationDefinition($n) => $body,
            Node::OperationType($n) => $body,
            Node::VariableDefinitions($n) => $body,
            Node::VariableDefinition($n) => $body,
            Node::DefaultValue($n) => $body,
            Node::Variable($n) => $body,
            Node::SelectionSet($n) => $body,
            Node::Field($n) => $body,
            Node::Alias($n) => $body,
            Node::FragmentSpread($n) => $body,
            Node::InlineFragment($n) => $body,
            Node::FragmentDefinition($n) => $body,
            Node::TypeCondition($n) => $body,
            Node::Arguments($n) => $body,
            Node::Argument($n) => $body,
            Node::Directives($n) => $body,
            Node::Directive($n) => $body,
            Node::LiteralValue($n) => $body,
            Node::NameValue($n) => $body,
            Node::ListValue($n) => $body,
            Node::ObjectValue($n) => $body,
            Node::ObjectField($n) => $body,
            Node::NamedType($n) => $body,
            Node::ListType($n) => $body,
            Node::Name($n) => $body,
            Node::Schema($n) => $body,
            Node::SchemaDefinition($n) => $body,
            Node::OperationTypeDefinition($n) => $body,
            Node::ScalarDefinition($n) => $body,
            Node::TypeDefinition($n) => $body,
            Node::ImplementsInterfaces($n) => $body,
            Node::FieldsDefinition($n) => $body,
            Node::FieldDefinition($n) => $body,
            Node::ArgumentsDefinition($n) => $body,
            Node::InputValueDefinition($n) => $body,
            Node::InterfaceDefinition($n) => $body,
            Node::UnionDefinition($n) => $body,
            Node::Members($n) => $body,
            Node::Member($n) => $body,
            Node::EnumDefinition($n) => $body,
            Node::EnumValue($n) => $body,
            Node::InputObjectDefinition($n) => $body,
            Node::InputFieldsDefinition($n) => $body,
            Node::ExtendDefinition($n) => $body,
            Node::DirectiveDefinition($n) => $body,
            Node::Locations($n) => $body,
            Node::Location($n) => $body,
        }
    };
}

#[inherent]
impl AstNode for Node<'_, '_> {
    pub fn pos(&self) -> Pos {
        each_node!(self, n => n.pos())
    }

    pub fn end(&self) -> Pos {
        each_node!(self, n => n.end())
    }
}

type Children<'a, 'src> = SmallVec<[Node<'a, 'src>; 4]>;

fn push_opt<'a, 'src, T>(out: &mut Children<'a, 'src>, node: &'a Option<T>)
where
    &'a T: Into<Node<'a, 'src>>,
{
    if let Some(node) = node {
        out.push(node.into());
    }
}

impl<'a, 'src> Node<'a, 'src> {
    /// Returns this node's direct children in source order. Absent optional
    /// children are skipped.
    pub fn children(self) -> Children<'a, 'src> {
        let mut out = Children::new();
        match self {
            Node::Document(n) => out.extend(n.definitions.iter().map(Node::from)),
            Node::OperationDefinition(n) => {
                push_opt(&mut out, &n.operation_type);
                push_opt(&mut out, &n.name);
                push_opt(&mut out, &n.variable_definitions);
                push_opt(&mut out, &n.directives);
                out.push(Node::from(&n.selection_set));
            },
            Node::OperationType(_) => {},
            Node::VariableDefinitions(n) => {
                out.extend(n.definitions.iter().map(Node::from));
            },
            Node::VariableDefinition(n) => {
                out.push(Node::from(&n.variable));
                out.push(Node::from(&n.var_type));
                push_opt(&mut out, &n.default_value);
            },
            Node::DefaultValue(n) => out.push(Node::from(&n.value)),
            Node::Variable(n) => out.push(Node::from(&n.name)),
            Node::SelectionSet(n) => out.extend(n.selections.iter().map(Node::from)),
            Node::Field(n) => {
                push_opt(&mut out, &n.alias);
                out.push(Node::from(&n.name));
                push_opt(&mut out, &n.arguments);
                push_opt(&mut out, &n.directives);
                push_opt(&mut out, &n.selection_set);
            },
            Node::Alias(n) => out.push(Node::from(&n.name)),
            Node::FragmentSpread(n) => {
                out.push(Node::from(&n.name));
                push_opt(&mut out, &n.directives);
            },
            Node::InlineFragment(n) => {
                push_opt(&mut out, &n.type_condition);
                push_opt(&mut out, &n.directives);
                out.push(Node::from(&n.selection_set));
            },
            Node::FragmentDefinition(n) => {
                out.push(Node::from(&n.name));
                out.push(Node::from(&n.type_condition));
                push_opt(&mut out, &n.directives);
                out.push(Node::from(&n.selection_set));
            },
            Node::TypeCondition(n) => out.push(Node::from(&n.named_type)),
            Node::Arguments(n) => out.extend(n.arguments.iter().map(Node::from)),
            Node::Argument(n) => {
                out.push(Node::from(&n.name));
                out.push(Node::from(&n.value));
            },
            Node::Directives(n) => out.extend(n.directives.iter().map(Node::from)),
            Node::Directive(n) => {
                out.push(Node::from(&n.name));
                push_opt(&mut out, &n.arguments);
            },
            Node::LiteralValue(_) => {},
            Node::NameValue(n) => out.push(Node::from(&n.name)),
            Node::ListValue(n) => out.extend(n.values.iter().map(Node::from)),
            Node::ObjectValue(n) => out.extend(n.fields.iter().map(Node::from)),
            Node::ObjectField(n) => {
                out.push(Node::from(&n.name));
                out.push(Node::from(&n.value));
            },
            Node::NamedType(n) => out.push(Node::from(&n.name)),
            Node::ListType(n) => out.push(Node::from(n.elem.as_ref())),
            Node::Name(_) => {},
            Node::Schema(n) => {
                out.extend(n.schemas.iter().map(Node::from));
                out.extend(n.scalars.iter().map(Node::from));
                out.extend(n.types.iter().map(Node::from));
                out.extend(n.interfaces.iter().map(Node::from));
                out.extend(n.unions.iter().map(Node::from));
                out.extend(n.enums.iter().map(Node::from));
                out.extend(n.input_objects.iter().map(Node::from));
                out.extend(n.extends.iter().map(Node::from));
                out.extend(n.directives.iter().map(Node::from));
                // Definitions are grouped by kind; restore source order.
                out.sort_by_key(|child| child.pos());
            },
            Node::SchemaDefinition(n) => {
                push_opt(&mut out, &n.directives);
                out.extend(n.operation_types.iter().map(Node::from));
            },
            Node::OperationTypeDefinition(n) => {
                out.push(Node::from(&n.operation));
                out.push(Node::from(&n.named_type));
            },
            Node::ScalarDefinition(n) => {
                out.push(Node::from(&n.name));
                push_opt(&mut out, &n.directives);
            },
            Node::TypeDefinition(n) => {
                out.push(Node::from(&n.name));
                push_opt(&mut out, &n.implements);
                push_opt(&mut out, &n.directives);
                out.push(Node::from(&n.fields));
            },
            Node::ImplementsInterfaces(n) => {
                out.extend(n.interfaces.iter().map(Node::from));
            },
            Node::FieldsDefinition(n) => out.extend(n.fields.iter().map(Node::from)),
            Node::FieldDefinition(n) => {
                out.push(Node::from(&n.name));
                push_opt(&mut out, &n.arguments);
                out.push(Node::from(&n.field_type));
                push_opt(&mut out, &n.directives);
            },
            Node::ArgumentsDefinition(n) => {
                out.extend(n.arguments.iter().map(Node::from));
            },
            Node::InputValueDefinition(n) => {
                out.push(Node::from(&n.name));
                out.push(Node::from(&n.value_type));
                push_opt(&mut out, &n.default_value);
                push_opt(&mut out, &n.directives);
            },
            Node::InterfaceDefinition(n) => {
                out.push(Node::from(&n.name));
                push_opt(&mut out, &n.directives);
                out.push(Node::from(&n.fields));
            },
            Node::UnionDefinition(n) => {
                out.push(Node::from(&n.name));
                push_opt(&mut out, &n.directives);
                out.push(Node::from(&n.members));
            },
            Node::Members(n) => out.extend(n.members.iter().map(Node::from)),
            Node::Member(n) => out.push(Node::from(&n.name)),
            Node::EnumDefinition(n) => {
                out.push(Node::from(&n.name));
                push_opt(&mut out, &n.directives);
                out.extend(n.values.iter().map(Node::from));
            },
            Node::EnumValue(n) => {
                out.push(Node::from(&n.name));
                push_opt(&mut out, &n.directives);
            },
            Node::InputObjectDefinition(n) => {
                out.push(Node::from(&n.name));
                push_opt(&mut out, &n.directives);
                out.push(Node::from(&n.fields));
            },
            Node::InputFieldsDefinition(n) => out.extend(n.fields.iter().map(Node::from)),
            Node::ExtendDefinition(n) => out.push(Node::from(&n.definition)),
            Node::DirectiveDefinition(n) => {
                out.push(Node::from(&n.name));
                push_opt(&mut out, &n.arguments);
                out.push(Node::from(&n.locations));
            },
            Node::Locations(n) => out.extend(n.locations.iter().map(Node::from)),
            Node::Location(n) => out.push(Node::from(&n.name)),
        }
        out
    }
}

macro_rules! impl_from_ref {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<'a, 'src> From<&'a $ty<'src>> for Node<'a, 'src> {
                fn from(node: &'a $ty<'src>) -> Self {
                    Node::$ty(node)
                }
            }
        )*
    };
}

impl_from_ref!(
    Document,
    OperationDefinition,
    VariableDefinitions,
    VariableDefinition,
    DefaultValue,
    Variable,
    SelectionSet,
    Field,
    Alias,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,
    TypeCondition,
    Arguments,
    Argument,
    Directives,
    Directive,
    LiteralValue,
    NameValue,
    ListValue,
    ObjectValue,
    ObjectField,
    NamedType,
    ListType,
    Name,
    Schema,
    SchemaDefinition,
    OperationTypeDefinition,
    ScalarDefinition,
    TypeDefinition,
    ImplementsInterfaces,
    FieldsDefinition,
    FieldDefinition,
    ArgumentsDefinition,
    InputValueDefinition,
    InterfaceDefinition,
    UnionDefinition,
    Members,
    Member,
    EnumDefinition,
    EnumValue,
    InputObjectDefinition,
    InputFieldsDefinition,
    ExtendDefinition,
    DirectiveDefinition,
    Locations,
    Location,
);

impl<'a> From<&'a OperationType> for Node<'a, '_> {
    fn from(node: &'a OperationType) -> Self {
        Node::OperationType(node)
    }
}

impl<'a, 'src> From<&'a Definition<'src>> for Node<'a, 'src> {
    fn from(node: &'a Definition<'src>) -> Self {
        match node {
            Definition::Operation(n) => Node::OperationDefinition(n),
            Definition::Fragment(n) => Node::FragmentDefinition(n),
        }
    }
}

impl<'a, 'src> From<&'a Selection<'src>> for Node<'a, 'src> {
    fn from(node: &'a Selection<'src>) -> Self {
        match node {
            Selection::Field(n) => Node::Field(n),
            Selection::FragmentSpread(n) => Node::FragmentSpread(n),
            Selection::InlineFragment(n) => Node::InlineFragment(n),
        }
    }
}

impl<'a, 'src> From<&'a Value<'src>> for Node<'a, 'src> {
    fn from(node: &'a Value<'src>) -> Self {
        match node {
            Value::Variable(n) => Node::Variable(n),
            Value::Literal(n) => Node::LiteralValue(n),
            Value::Name(n) => Node::NameValue(n),
            Value::List(n) => Node::ListValue(n),
            Value::Object(n) => Node::ObjectValue(n),
        }
    }
}

impl<'a, 'src> From<&'a Type<'src>> for Node<'a, 'src> {
    fn from(node: &'a Type<'src>) -> Self {
        match node {
            Type::Named(n) => Node::NamedType(n),
            Type::List(n) => Node::ListType(n),
        }
    }
}

/// Callbacks invoked by [`walk()`].
pub trait Visitor<'a, 'src> {
    /// Called before `node`'s children are walked. Return `false` to skip
    /// the children (and the matching `leave()` call).
    fn enter(&mut self, node: Node<'a, 'src>) -> bool;

    /// Called after all of `node`'s children have been walked.
    fn leave(&mut self, _node: Node<'a, 'src>) {}
}

/// Walks `node` and its descendants in pre-order.
pub fn walk<'a, 'src: 'a, V>(visitor: &mut V, node: impl Into<Node<'a, 'src>>)
where
    V: Visitor<'a, 'src> + ?Sized,
{
    let node = node.into();
    if !visitor.enter(node) {
        return;
    }
    for child in node.children() {
        walk(visitor, child);
    }
    visitor.leave(node);
}

/// Walks `node` in pre-order, calling `f` on each node. Descent into a
/// node's children continues only while `f` returns `true`.
pub fn inspect<'a, 'src: 'a, F>(node: impl Into<Node<'a, 'src>>, f: F)
where
    F: FnMut(Node<'a, 'src>) -> bool,
{
    walk(&mut Inspector(f), node);
}

struct Inspector<F>(F);

impl<'a, 'src: 'a, F> Visitor<'a, 'src> for Inspector<F>
where
    F: FnMut(Node<'a, 'src>) -> bool,
{
    fn enter(&mut self, node: Node<'a, 'src>) -> bool {
        (self.0)(node)
    }
}
