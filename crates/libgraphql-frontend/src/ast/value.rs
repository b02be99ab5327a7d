use crate::ast::AstNode;
use crate::ast::Name;
use crate::Pos;
use inherent::inherent;
use std::borrow::Cow;

/// An input value.
///
/// Values parsed in a constant context (default values, and arguments of
/// directives in schema definitions) never contain [`Value::Variable`],
/// at any depth.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'src> {
    Variable(Variable<'src>),
    Literal(LiteralValue<'src>),
    /// `true`, `false`, `null`, or an enum value.
    Name(NameValue<'src>),
    List(ListValue<'src>),
    Object(ObjectValue<'src>),
}

impl Value<'_> {
    /// Returns `true` if this value contains no variable reference at any
    /// depth.
    pub fn is_const(&self) -> bool {
        match self {
            Value::Variable(_) => false,
            Value::Literal(_) | Value::Name(_) => true,
            Value::List(list) => list.values.iter().all(Value::is_const),
            Value::Object(obj) => obj.fields.iter().all(|f| f.value.is_const()),
        }
    }
}

#[inherent]
impl AstNode for Value<'_> {
    pub fn pos(&self) -> Pos {
        match self {
            Value::Variable(v) => v.pos(),
            Value::Literal(v) => v.pos(),
            Value::Name(v) => v.pos(),
            Value::List(v) => v.pos(),
            Value::Object(v) => v.pos(),
        }
    }

    pub fn end(&self) -> Pos {
        match self {
            Value::Variable(v) => v.end(),
            Value::Literal(v) => v.end(),
            Value::Name(v) => v.end(),
            Value::List(v) => v.end(),
            Value::Object(v) => v.end(),
        }
    }
}

/// `$name`
#[derive(Clone, Debug, PartialEq)]
pub struct Variable<'src> {
    pub dollar: Pos,
    pub name: Name<'src>,
}

#[inherent]
impl AstNode for Variable<'_> {
    pub fn pos(&self) -> Pos {
        self.dollar
    }

    pub fn end(&self) -> Pos {
        self.name.end()
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LiteralKind {
    Int,
    Float,
    String,
}

/// An INT, FLOAT, or STRING literal.
///
/// `value` is the token text: the digits as written for numbers, the decoded
/// contents (without quotes) for strings. Since a decoded string may be
/// shorter than its source spelling, the end position is stored rather than
/// derived from `value`.
#[derive(Clone, Debug, PartialEq)]
pub struct LiteralValue<'src> {
    pub kind: LiteralKind,
    pub pos: Pos,
    pub value: Cow<'src, str>,
    pub end: Pos,
}

impl LiteralValue<'_> {
    /// Parses an INT literal. Returns `None` for other kinds or when the
    /// value does not fit in an `i64`.
    pub fn parse_int(&self) -> Option<i64> {
        match self.kind {
            LiteralKind::Int => self.value.parse().ok(),
            LiteralKind::Float | LiteralKind::String => None,
        }
    }

    /// Parses an INT or FLOAT literal as an `f64`.
    pub fn parse_float(&self) -> Option<f64> {
        match self.kind {
            LiteralKind::Int | LiteralKind::Float => self.value.parse().ok(),
            LiteralKind::String => None,
        }
    }
}

#[inherent]
impl AstNode for LiteralValue<'_> {
    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn end(&self) -> Pos {
        self.end
    }
}

/// A value spelled as a NAME: `true`, `false`, `null`, or an enum value.
#[derive(Clone, Debug, PartialEq)]
pub struct NameValue<'src> {
    pub name: Name<'src>,
}

impl NameValue<'_> {
    pub fn as_bool(&self) -> Option<bool> {
        match self.name.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        self.name == "null"
    }

    /// Returns `true` unless this is `true`, `false`, or `null`.
    pub fn is_enum(&self) -> bool {
        self.as_bool().is_none() && !self.is_null()
    }
}

#[inherent]
impl AstNode for NameValue<'_> {
    pub fn pos(&self) -> Pos {
        self.name.pos()
    }

    pub fn end(&self) -> Pos {
        self.name.end()
    }
}

/// `[value, ...]`. The only bracketed sequence allowed to be empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ListValue<'src> {
    pub lbrack: Pos,
    pub values: Vec<Value<'src>>,
    pub rbrack: Pos,
}

#[inherent]
impl AstNode for ListValue<'_> {
    pub fn pos(&self) -> Pos {
        self.lbrack
    }

    pub fn end(&self) -> Pos {
        self.rbrack + 1
    }
}

/// `{name: value, ...}`
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue<'src> {
    pub lbrace: Pos,
    pub fields: Vec<ObjectField<'src>>,
    pub rbrace: Pos,
}

impl<'src> ObjectValue<'src> {
    pub fn get(&self, name: &str) -> Option<&Value<'src>> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.value)
    }
}

#[inherent]
impl AstNode for ObjectValue<'_> {
    pub fn pos(&self) -> Pos {
        self.lbrace
    }

    pub fn end(&self) -> Pos {
        self.rbrace + 1
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField<'src> {
    pub name: Name<'src>,
    pub colon: Pos,
    pub value: Value<'src>,
}

#[inherent]
impl AstNode for ObjectField<'_> {
    pub fn pos(&self) -> Pos {
        self.name.pos()
    }

    pub fn end(&self) -> Pos {
        self.value.end()
    }
}
