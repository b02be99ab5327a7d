use crate::ast::AstNode;
use crate::ast::TypeDefinition;
use crate::Pos;
use inherent::inherent;

/// `extend type ...`
#[derive(Clone, Debug, PartialEq)]
pub struct ExtendDefinition<'src> {
    pub extend: Pos,
    pub definition: TypeDefinition<'src>,
}

#[inherent]
impl AstNode for ExtendDefinition<'_> {
    pub fn pos(&self) -> Pos {
        self.extend
    }

    pub fn end(&self) -> Pos {
        self.definition.end()
    }
}
