use crate::ast::AstNode;
use crate::ast::DefaultValue;
use crate::ast::Directives;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::Type;
use crate::Pos;
use inherent::inherent;

/// `type Name implements A B @directives { fields }`
#[derive(Clone, Debug, PartialEq)]
pub struct TypeDefinition<'src> {
    pub type_kw: Pos,
    pub name: Name<'src>,
    pub implements: Option<ImplementsInterfaces<'src>>,
    pub directives: Option<Directives<'src>>,
    pub fields: FieldsDefinition<'src>,
}

#[inherent]
impl AstNode for TypeDefinition<'_> {
    pub fn pos(&self) -> Pos {
        self.type_kw
    }

    pub fn end(&self) -> Pos {
        self.fields.end()
    }
}

/// `implements A B`. Interface names are separated by whitespace or
/// (insignificant) commas.
#[derive(Clone, Debug, PartialEq)]
pub struct ImplementsInterfaces<'src> {
    pub implements: Pos,
    pub interfaces: Vec<NamedType<'src>>,
}

#[inherent]
impl AstNode for ImplementsInterfaces<'_> {
    pub fn pos(&self) -> Pos {
        self.implements
    }

    pub fn end(&self) -> Pos {
        self.interfaces
            .last()
            .map_or(self.implements + "implements".len(), NamedType::end)
    }
}

/// The braced field list of an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldsDefinition<'src> {
    pub lbrace: Pos,
    pub fields: Vec<FieldDefinition<'src>>,
    pub rbrace: Pos,
}

impl<'src> FieldsDefinition<'src> {
    pub fn get(&self, name: &str) -> Option<&FieldDefinition<'src>> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[inherent]
impl AstNode for FieldsDefinition<'_> {
    pub fn pos(&self) -> Pos {
        self.lbrace
    }

    pub fn end(&self) -> Pos {
        self.rbrace + 1
    }
}

/// `name(args): Type @directives`
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition<'src> {
    pub name: Name<'src>,
    pub arguments: Option<ArgumentsDefinition<'src>>,
    pub colon: Pos,
    pub field_type: Type<'src>,
    pub directives: Option<Directives<'src>>,
}

#[inherent]
impl AstNode for FieldDefinition<'_> {
    pub fn pos(&self) -> Pos {
        self.name.pos()
    }

    pub fn end(&self) -> Pos {
        match &self.directives {
            Some(directives) => directives.end(),
            None => self.field_type.end(),
        }
    }
}

/// `(name: Type = default, ...)` on a field or directive definition.
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentsDefinition<'src> {
    pub lparen: Pos,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub rparen: Pos,
}

#[inherent]
impl AstNode for ArgumentsDefinition<'_> {
    pub fn pos(&self) -> Pos {
        self.lparen
    }

    pub fn end(&self) -> Pos {
        self.rparen + 1
    }
}

/// `name: Type = default @directives`, used for arguments and input object
/// fields.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition<'src> {
    pub name: Name<'src>,
    pub colon: Pos,
    pub value_type: Type<'src>,
    pub default_value: Option<DefaultValue<'src>>,
    pub directives: Option<Directives<'src>>,
}

#[inherent]
impl AstNode for InputValueDefinition<'_> {
    pub fn pos(&self) -> Pos {
        self.name.pos()
    }

    pub fn end(&self) -> Pos {
        if let Some(directives) = &self.directives {
            return directives.end();
        }
        match &self.default_value {
            Some(default) => default.end(),
            None => self.value_type.end(),
        }
    }
}
