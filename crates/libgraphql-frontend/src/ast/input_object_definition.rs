use crate::ast::AstNode;
use crate::ast::Directives;
use crate::ast::InputValueDefinition;
use crate::ast::Name;
use crate::Pos;
use inherent::inherent;

/// `input Name @directives { fields }`
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectDefinition<'src> {
    pub input: Pos,
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub fields: InputFieldsDefinition<'src>,
}

#[inherent]
impl AstNode for InputObjectDefinition<'_> {
    pub fn pos(&self) -> Pos {
        self.input
    }

    pub fn end(&self) -> Pos {
        self.fields.end()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputFieldsDefinition<'src> {
    pub lbrace: Pos,
    pub fields: Vec<InputValueDefinition<'src>>,
    pub rbrace: Pos,
}

#[inherent]
impl AstNode for InputFieldsDefinition<'_> {
    pub fn pos(&self) -> Pos {
        self.lbrace
    }

    pub fn end(&self) -> Pos {
        self.rbrace + 1
    }
}
