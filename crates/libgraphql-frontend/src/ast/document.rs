use crate::ast::ast_node::seq_end;
use crate::ast::ast_node::seq_pos;
use crate::ast::AstNode;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::Pos;
use inherent::inherent;

/// Root node of an executable document: operations and fragments, in source
/// order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document<'src> {
    pub definitions: Vec<Definition<'src>>,
}

impl<'src> Document<'src> {
    /// Iterates over the operation definitions only.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition<'src>> {
        self.definitions.iter().filter_map(|d| match d {
            Definition::Operation(op) => Some(op),
            Definition::Fragment(_) => None,
        })
    }

    /// Iterates over the fragment definitions only.
    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition<'src>> {
        self.definitions.iter().filter_map(|d| match d {
            Definition::Fragment(frag) => Some(frag),
            Definition::Operation(_) => None,
        })
    }
}

#[inherent]
impl AstNode for Document<'_> {
    pub fn pos(&self) -> Pos {
        seq_pos(&self.definitions)
    }

    pub fn end(&self) -> Pos {
        seq_end(&self.definitions)
    }
}

/// A top-level definition of an executable document.
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum Definition<'src> {
    Operation(OperationDefinition<'src>),
    Fragment(FragmentDefinition<'src>),
}

#[inherent]
impl AstNode for Definition<'_> {
    pub fn pos(&self) -> Pos {
        match self {
            Definition::Operation(d) => d.pos(),
            Definition::Fragment(d) => d.pos(),
        }
    }

    pub fn end(&self) -> Pos {
        match self {
            Definition::Operation(d) => d.end(),
            Definition::Fragment(d) => d.end(),
        }
    }
}
