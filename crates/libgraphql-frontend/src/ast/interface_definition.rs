use crate::ast::AstNode;
use crate::ast::Directives;
use crate::ast::FieldsDefinition;
use crate::ast::Name;
use crate::Pos;
use inherent::inherent;

/// `interface Name @directives { fields }`
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceDefinition<'src> {
    pub interface: Pos,
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub fields: FieldsDefinition<'src>,
}

#[inherent]
impl AstNode for InterfaceDefinition<'_> {
    pub fn pos(&self) -> Pos {
        self.interface
    }

    pub fn end(&self) -> Pos {
        self.fields.end()
    }
}
