use crate::ast::AstNode;
use crate::ast::Directives;
use crate::ast::Name;
use crate::Pos;
use inherent::inherent;

/// `scalar Name @directives`
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarDefinition<'src> {
    pub scalar: Pos,
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
}

#[inherent]
impl AstNode for ScalarDefinition<'_> {
    pub fn pos(&self) -> Pos {
        self.scalar
    }

    pub fn end(&self) -> Pos {
        match &self.directives {
            Some(directives) => directives.end(),
            None => self.name.end(),
        }
    }
}
