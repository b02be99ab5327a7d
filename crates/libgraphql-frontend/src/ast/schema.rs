use crate::ast::AstNode;
use crate::ast::DirectiveDefinition;
use crate::ast::EnumDefinition;
use crate::ast::ExtendDefinition;
use crate::ast::InputObjectDefinition;
use crate::ast::InterfaceDefinition;
use crate::ast::ScalarDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::TypeDefinition;
use crate::ast::UnionDefinition;
use crate::Pos;
use inherent::inherent;

/// Root node of a schema document.
///
/// Definitions are grouped by kind, each group in source order. Because the
/// groups interleave in the source, the span of the whole document cannot be
/// derived from any single group and is recorded by the parser instead.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schema<'src> {
    pub schemas: Vec<SchemaDefinition<'src>>,
    pub scalars: Vec<ScalarDefinition<'src>>,
    pub types: Vec<TypeDefinition<'src>>,
    pub interfaces: Vec<InterfaceDefinition<'src>>,
    pub unions: Vec<UnionDefinition<'src>>,
    pub enums: Vec<EnumDefinition<'src>>,
    pub input_objects: Vec<InputObjectDefinition<'src>>,
    pub extends: Vec<ExtendDefinition<'src>>,
    pub directives: Vec<DirectiveDefinition<'src>>,

    /// Start of the first definition, or `Pos::NONE` if there are none.
    pub pos: Pos,

    /// End of the last definition, or `Pos::NONE` if there are none.
    pub end: Pos,
}

impl<'src> Schema<'src> {
    /// Total number of top-level definitions across all kinds.
    pub fn definition_count(&self) -> usize {
        self.schemas.len()
            + self.scalars.len()
            + self.types.len()
            + self.interfaces.len()
            + self.unions.len()
            + self.enums.len()
            + self.input_objects.len()
            + self.extends.len()
            + self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definition_count() == 0
    }

    /// Looks up an object type definition (not an extension) by name.
    pub fn type_definition(&self, name: &str) -> Option<&TypeDefinition<'src>> {
        self.types.iter().find(|t| t.name == name)
    }
}

#[inherent]
impl AstNode for Schema<'_> {
    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn end(&self) -> Pos {
        self.end
    }
}
