use crate::ast::AstNode;
use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::Pos;
use inherent::inherent;

/// A braced, non-empty list of selections.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet<'src> {
    pub lbrace: Pos,
    pub selections: Vec<Selection<'src>>,
    pub rbrace: Pos,
}

#[inherent]
impl AstNode for SelectionSet<'_> {
    pub fn pos(&self) -> Pos {
        self.lbrace
    }

    pub fn end(&self) -> Pos {
        self.rbrace + 1
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Selection<'src> {
    Field(Field<'src>),
    FragmentSpread(FragmentSpread<'src>),
    InlineFragment(InlineFragment<'src>),
}

#[inherent]
impl AstNode for Selection<'_> {
    pub fn pos(&self) -> Pos {
        match self {
            Selection::Field(s) => s.pos(),
            Selection::FragmentSpread(s) => s.pos(),
            Selection::InlineFragment(s) => s.pos(),
        }
    }

    pub fn end(&self) -> Pos {
        match self {
            Selection::Field(s) => s.end(),
            Selection::FragmentSpread(s) => s.end(),
            Selection::InlineFragment(s) => s.end(),
        }
    }
}
