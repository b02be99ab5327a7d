use crate::ast::AstNode;
use crate::Pos;
use inherent::inherent;
use std::borrow::Cow;

/// An identifier, borrowed from the source text.
#[derive(Clone, Debug, PartialEq)]
pub struct Name<'src> {
    pub pos: Pos,
    pub value: Cow<'src, str>,
}

impl Name<'_> {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl PartialEq<str> for Name<'_> {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for Name<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

#[inherent]
impl AstNode for Name<'_> {
    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn end(&self) -> Pos {
        self.pos + self.value.len()
    }
}
