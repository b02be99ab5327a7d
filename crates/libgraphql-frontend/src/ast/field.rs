use crate::ast::Arguments;
use crate::ast::AstNode;
use crate::ast::Directives;
use crate::ast::Name;
use crate::ast::SelectionSet;
use crate::Pos;
use inherent::inherent;

/// A field selection, optionally aliased, with arguments, directives, and a
/// nested selection set.
///
/// See [Fields](https://spec.graphql.org/October2021/#sec-Language.Fields).
#[derive(Clone, Debug, PartialEq)]
pub struct Field<'src> {
    pub alias: Option<Alias<'src>>,
    pub name: Name<'src>,
    pub arguments: Option<Arguments<'src>>,
    pub directives: Option<Directives<'src>>,
    pub selection_set: Option<SelectionSet<'src>>,
}

impl Field<'_> {
    /// The key this field's result is returned under: the alias if present,
    /// otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias
            .as_ref()
            .map_or(self.name.as_str(), |alias| alias.name.as_str())
    }
}

#[inherent]
impl AstNode for Field<'_> {
    pub fn pos(&self) -> Pos {
        match &self.alias {
            Some(alias) => alias.pos(),
            None => self.name.pos(),
        }
    }

    pub fn end(&self) -> Pos {
        if let Some(selection_set) = &self.selection_set {
            return selection_set.end();
        }
        if let Some(directives) = &self.directives {
            return directives.end();
        }
        if let Some(arguments) = &self.arguments {
            return arguments.end();
        }
        self.name.end()
    }
}

/// `alias:` preceding a field name.
#[derive(Clone, Debug, PartialEq)]
pub struct Alias<'src> {
    pub name: Name<'src>,
    pub colon: Pos,
}

#[inherent]
impl AstNode for Alias<'_> {
    pub fn pos(&self) -> Pos {
        self.name.pos()
    }

    pub fn end(&self) -> Pos {
        self.colon + 1
    }
}
