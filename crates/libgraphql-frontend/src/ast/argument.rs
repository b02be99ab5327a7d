use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::Value;
use crate::Pos;
use inherent::inherent;

/// `(name: value, ...)`
#[derive(Clone, Debug, PartialEq)]
pub struct Arguments<'src> {
    pub lparen: Pos,
    pub arguments: Vec<Argument<'src>>,
    pub rparen: Pos,
}

impl<'src> Arguments<'src> {
    /// Looks up an argument by name.
    pub fn get(&self, name: &str) -> Option<&Argument<'src>> {
        self.arguments.iter().find(|arg| arg.name == name)
    }
}

#[inherent]
impl AstNode for Arguments<'_> {
    pub fn pos(&self) -> Pos {
        self.lparen
    }

    pub fn end(&self) -> Pos {
        self.rparen + 1
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Argument<'src> {
    pub name: Name<'src>,
    pub colon: Pos,
    pub value: Value<'src>,
}

#[inherent]
impl AstNode for Argument<'_> {
    pub fn pos(&self) -> Pos {
        self.name.pos()
    }

    pub fn end(&self) -> Pos {
        self.value.end()
    }
}
