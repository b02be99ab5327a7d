use crate::ast::AstNode;
use crate::ast::ArgumentsDefinition;
use crate::ast::Name;
use crate::Pos;
use inherent::inherent;

/// `directive @name(args) on LOCATION | LOCATION`
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition<'src> {
    pub directive: Pos,
    pub at: Pos,
    pub name: Name<'src>,
    pub arguments: Option<ArgumentsDefinition<'src>>,
    pub on: Pos,
    pub locations: Locations<'src>,
}

#[inherent]
impl AstNode for DirectiveDefinition<'_> {
    pub fn pos(&self) -> Pos {
        self.directive
    }

    pub fn end(&self) -> Pos {
        self.locations.end()
    }
}

/// Pipe-delimited location names, with an optional leading `|`.
#[derive(Clone, Debug, PartialEq)]
pub struct Locations<'src> {
    pub leading_pipe: Option<Pos>,
    pub locations: Vec<Location<'src>>,
}

impl Locations<'_> {
    pub fn contains(&self, name: &str) -> bool {
        self.locations.iter().any(|l| l.name == name)
    }
}

#[inherent]
impl AstNode for Locations<'_> {
    pub fn pos(&self) -> Pos {
        match (self.leading_pipe, self.locations.first()) {
            (Some(pipe), _) => pipe,
            (None, Some(first)) => first.pos(),
            (None, None) => Pos::NONE,
        }
    }

    pub fn end(&self) -> Pos {
        self.locations.last().map_or(Pos::NONE, Location::end)
    }
}

/// A directive location such as `FIELD` or `OBJECT`. Not validated against
/// the set of known locations.
#[derive(Clone, Debug, PartialEq)]
pub struct Location<'src> {
    pub name: Name<'src>,
}

#[inherent]
impl AstNode for Location<'_> {
    pub fn pos(&self) -> Pos {
        self.name.pos()
    }

    pub fn end(&self) -> Pos {
        self.name.end()
    }
}
