use crate::ast::AstNode;
use crate::ast::Type;
use crate::ast::Value;
use crate::ast::Variable;
use crate::Pos;
use inherent::inherent;

/// The parenthesized `($a: Int, $b: String = "x")` list of an operation.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinitions<'src> {
    pub lparen: Pos,
    pub definitions: Vec<VariableDefinition<'src>>,
    pub rparen: Pos,
}

#[inherent]
impl AstNode for VariableDefinitions<'_> {
    pub fn pos(&self) -> Pos {
        self.lparen
    }

    pub fn end(&self) -> Pos {
        self.rparen + 1
    }
}

/// `$name: Type = default`
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition<'src> {
    pub variable: Variable<'src>,
    pub colon: Pos,
    pub var_type: Type<'src>,
    pub default_value: Option<DefaultValue<'src>>,
}

#[inherent]
impl AstNode for VariableDefinition<'_> {
    pub fn pos(&self) -> Pos {
        self.variable.pos()
    }

    pub fn end(&self) -> Pos {
        match &self.default_value {
            Some(default) => default.end(),
            None => self.var_type.end(),
        }
    }
}

/// `= value`, where `value` is always constant (contains no variables).
#[derive(Clone, Debug, PartialEq)]
pub struct DefaultValue<'src> {
    pub equals: Pos,
    pub value: Value<'src>,
}

#[inherent]
impl AstNode for DefaultValue<'_> {
    pub fn pos(&self) -> Pos {
        self.equals
    }

    pub fn end(&self) -> Pos {
        self.value.end()
    }
}
