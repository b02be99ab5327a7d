use crate::ast::AstNode;
use crate::ast::Directives;
use crate::ast::Name;
use crate::Pos;
use inherent::inherent;

/// `union Name @directives = A | B`
#[derive(Clone, Debug, PartialEq)]
pub struct UnionDefinition<'src> {
    pub union_kw: Pos,
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub equals: Pos,
    pub members: Members<'src>,
}

#[inherent]
impl AstNode for UnionDefinition<'_> {
    pub fn pos(&self) -> Pos {
        self.union_kw
    }

    pub fn end(&self) -> Pos {
        self.members.end()
    }
}

/// Pipe-delimited member type names, with an optional leading `|`.
#[derive(Clone, Debug, PartialEq)]
pub struct Members<'src> {
    pub leading_pipe: Option<Pos>,
    pub members: Vec<Member<'src>>,
}

#[inherent]
impl AstNode for Members<'_> {
    pub fn pos(&self) -> Pos {
        match (self.leading_pipe, self.members.first()) {
            (Some(pipe), _) => pipe,
            (None, Some(first)) => first.pos(),
            (None, None) => Pos::NONE,
        }
    }

    pub fn end(&self) -> Pos {
        self.members.last().map_or(Pos::NONE, Member::end)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Member<'src> {
    pub name: Name<'src>,
}

#[inherent]
impl AstNode for Member<'_> {
    pub fn pos(&self) -> Pos {
        self.name.pos()
    }

    pub fn end(&self) -> Pos {
        self.name.end()
    }
}
