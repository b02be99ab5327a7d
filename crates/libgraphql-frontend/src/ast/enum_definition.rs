use crate::ast::AstNode;
use crate::ast::Directives;
use crate::ast::Name;
use crate::Pos;
use inherent::inherent;

/// `enum Name @directives { VALUE ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct EnumDefinition<'src> {
    pub enum_kw: Pos,
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub lbrace: Pos,
    pub values: Vec<EnumValue<'src>>,
    pub rbrace: Pos,
}

#[inherent]
impl AstNode for EnumDefinition<'_> {
    pub fn pos(&self) -> Pos {
        self.enum_kw
    }

    pub fn end(&self) -> Pos {
        self.rbrace + 1
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue<'src> {
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
}

#[inherent]
impl AstNode for EnumValue<'_> {
    pub fn pos(&self) -> Pos {
        self.name.pos()
    }

    pub fn end(&self) -> Pos {
        match &self.directives {
            Some(directives) => directives.end(),
            None => self.name.end(),
        }
    }
}
