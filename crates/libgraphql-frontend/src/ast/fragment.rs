use crate::ast::AstNode;
use crate::ast::Directives;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::SelectionSet;
use crate::Pos;
use inherent::inherent;

/// `fragment Name on Type @directives { ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition<'src> {
    pub fragment: Pos,
    pub name: Name<'src>,
    pub type_condition: TypeCondition<'src>,
    pub directives: Option<Directives<'src>>,
    pub selection_set: SelectionSet<'src>,
}

#[inherent]
impl AstNode for FragmentDefinition<'_> {
    pub fn pos(&self) -> Pos {
        self.fragment
    }

    pub fn end(&self) -> Pos {
        self.selection_set.end()
    }
}

/// `...Name @directives`
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread<'src> {
    pub ellipsis: Pos,
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
}

#[inherent]
impl AstNode for FragmentSpread<'_> {
    pub fn pos(&self) -> Pos {
        self.ellipsis
    }

    pub fn end(&self) -> Pos {
        match &self.directives {
            Some(directives) => directives.end(),
            None => self.name.end(),
        }
    }
}

/// `... on Type @directives { ... }`, where the type condition and
/// directives are both optional.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment<'src> {
    pub ellipsis: Pos,
    pub type_condition: Option<TypeCondition<'src>>,
    pub directives: Option<Directives<'src>>,
    pub selection_set: SelectionSet<'src>,
}

#[inherent]
impl AstNode for InlineFragment<'_> {
    pub fn pos(&self) -> Pos {
        self.ellipsis
    }

    pub fn end(&self) -> Pos {
        self.selection_set.end()
    }
}

/// `on Type`
#[derive(Clone, Debug, PartialEq)]
pub struct TypeCondition<'src> {
    pub on: Pos,
    pub named_type: NamedType<'src>,
}

#[inherent]
impl AstNode for TypeCondition<'_> {
    pub fn pos(&self) -> Pos {
        self.on
    }

    pub fn end(&self) -> Pos {
        self.named_type.end()
    }
}
