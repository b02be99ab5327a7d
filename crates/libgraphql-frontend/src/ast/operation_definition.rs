use crate::ast::AstNode;
use crate::ast::Directives;
use crate::ast::Name;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinitions;
use crate::token::Keyword;
use crate::Pos;
use inherent::inherent;
use std::fmt;

/// An operation: either the shorthand form `{ ... }` (where
/// `operation_type` is `None`) or
/// `query|mutation|subscription Name? VariableDefinitions? Directives? SelectionSet`.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition<'src> {
    pub operation_type: Option<OperationType>,
    pub name: Option<Name<'src>>,
    pub variable_definitions: Option<VariableDefinitions<'src>>,
    pub directives: Option<Directives<'src>>,
    pub selection_set: SelectionSet<'src>,
}

impl OperationDefinition<'_> {
    /// Returns the operation kind; the shorthand form is a query.
    pub fn kind(&self) -> OperationKind {
        self.operation_type
            .map_or(OperationKind::Query, |t| t.kind)
    }

    /// Returns `true` for the `{ ... }` shorthand form.
    pub fn is_shorthand(&self) -> bool {
        self.operation_type.is_none()
    }
}

#[inherent]
impl AstNode for OperationDefinition<'_> {
    pub fn pos(&self) -> Pos {
        self.operation_type
            .map_or_else(|| self.selection_set.pos(), |t| t.pos)
    }

    pub fn end(&self) -> Pos {
        self.selection_set.end()
    }
}

/// The `query`, `mutation`, or `subscription` keyword.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OperationType {
    pub kind: OperationKind,
    pub pos: Pos,
}

#[inherent]
impl AstNode for OperationType {
    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn end(&self) -> Pos {
        self.pos + self.kind.keyword().as_str().len()
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub fn from_keyword(kw: Keyword) -> Option<Self> {
        match kw {
            Keyword::Query => Some(OperationKind::Query),
            Keyword::Mutation => Some(OperationKind::Mutation),
            Keyword::Subscription => Some(OperationKind::Subscription),
            _ => None,
        }
    }

    pub fn keyword(self) -> Keyword {
        match self {
            OperationKind::Query => Keyword::Query,
            OperationKind::Mutation => Keyword::Mutation,
            OperationKind::Subscription => Keyword::Subscription,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword().as_str())
    }
}
