use crate::ast::AstNode;
use crate::ast::Name;
use crate::Pos;
use inherent::inherent;

/// A type reference such as `String`, `[Int!]`, or `[[ID]!]!`.
#[derive(Clone, Debug, PartialEq)]
pub enum Type<'src> {
    Named(NamedType<'src>),
    List(ListType<'src>),
}

impl<'src> Type<'src> {
    pub fn is_non_null(&self) -> bool {
        match self {
            Type::Named(t) => t.non_null.is_some(),
            Type::List(t) => t.non_null.is_some(),
        }
    }

    /// Strips every list wrapper, returning the underlying named type.
    pub fn innermost_name(&self) -> &Name<'src> {
        match self {
            Type::Named(t) => &t.name,
            Type::List(t) => t.elem.innermost_name(),
        }
    }
}

#[inherent]
impl AstNode for Type<'_> {
    pub fn pos(&self) -> Pos {
        match self {
            Type::Named(t) => t.pos(),
            Type::List(t) => t.pos(),
        }
    }

    pub fn end(&self) -> Pos {
        match self {
            Type::Named(t) => t.end(),
            Type::List(t) => t.end(),
        }
    }
}

/// A type name, with the position of its trailing `!` if non-null.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedType<'src> {
    pub name: Name<'src>,
    pub non_null: Option<Pos>,
}

#[inherent]
impl AstNode for NamedType<'_> {
    pub fn pos(&self) -> Pos {
        self.name.pos()
    }

    pub fn end(&self) -> Pos {
        match self.non_null {
            Some(bang) => bang + 1,
            None => self.name.end(),
        }
    }
}

/// `[elem]`, with the position of its trailing `!` if non-null.
#[derive(Clone, Debug, PartialEq)]
pub struct ListType<'src> {
    pub lbrack: Pos,
    pub elem: Box<Type<'src>>,
    pub rbrack: Pos,
    pub non_null: Option<Pos>,
}

#[inherent]
impl AstNode for ListType<'_> {
    pub fn pos(&self) -> Pos {
        self.lbrack
    }

    pub fn end(&self) -> Pos {
        match self.non_null {
            Some(bang) => bang + 1,
            None => self.rbrack + 1,
        }
    }
}
