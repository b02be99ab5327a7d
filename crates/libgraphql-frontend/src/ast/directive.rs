use crate::ast::ast_node::seq_end;
use crate::ast::ast_node::seq_pos;
use crate::ast::Arguments;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::Pos;
use inherent::inherent;

/// One or more consecutive directive annotations. Has no delimiters, so its
/// span runs from the first directive to the last.
#[derive(Clone, Debug, PartialEq)]
pub struct Directives<'src> {
    pub directives: Vec<Directive<'src>>,
}

impl<'src> Directives<'src> {
    pub fn get(&self, name: &str) -> Option<&Directive<'src>> {
        self.directives.iter().find(|d| d.name == name)
    }
}

#[inherent]
impl AstNode for Directives<'_> {
    pub fn pos(&self) -> Pos {
        seq_pos(&self.directives)
    }

    pub fn end(&self) -> Pos {
        seq_end(&self.directives)
    }
}

/// `@name(arguments)`
#[derive(Clone, Debug, PartialEq)]
pub struct Directive<'src> {
    pub at: Pos,
    pub name: Name<'src>,
    pub arguments: Option<Arguments<'src>>,
}

#[inherent]
impl AstNode for Directive<'_> {
    pub fn pos(&self) -> Pos {
        self.at
    }

    pub fn end(&self) -> Pos {
        match &self.arguments {
            Some(arguments) => arguments.end(),
            None => self.name.end(),
        }
    }
}
