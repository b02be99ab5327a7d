use crate::ast::AstNode;
use crate::ast::Directives;
use crate::ast::NamedType;
use crate::ast::OperationType;
use crate::Pos;
use inherent::inherent;

/// `schema @directives { query: Query mutation: Mutation }`
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition<'src> {
    pub schema: Pos,
    pub directives: Option<Directives<'src>>,
    pub lbrace: Pos,
    pub operation_types: Vec<OperationTypeDefinition<'src>>,
    pub rbrace: Pos,
}

#[inherent]
impl AstNode for SchemaDefinition<'_> {
    pub fn pos(&self) -> Pos {
        self.schema
    }

    pub fn end(&self) -> Pos {
        self.rbrace + 1
    }
}

/// `query: Query`
#[derive(Clone, Debug, PartialEq)]
pub struct OperationTypeDefinition<'src> {
    pub operation: OperationType,
    pub colon: Pos,
    pub named_type: NamedType<'src>,
}

#[inherent]
impl AstNode for OperationTypeDefinition<'_> {
    pub fn pos(&self) -> Pos {
        self.operation.pos()
    }

    pub fn end(&self) -> Pos {
        self.named_type.end()
    }
}
