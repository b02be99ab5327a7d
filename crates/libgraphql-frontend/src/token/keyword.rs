use std::fmt;

/// A reserved word of the query or schema definition language.
///
/// Reserved words lex as ordinary `Name` tokens. Whether a name acts as a
/// keyword is decided by the parser at each grammar slot, using
/// [`Keyword::lookup()`] as the single source of truth for spellings.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Keyword {
    Directive,
    Enum,
    Extend,
    Fragment,
    Implements,
    Input,
    Interface,
    Mutation,
    On,
    Query,
    Scalar,
    Schema,
    Subscription,
    Type,
    Union,
}

/// Spelling table shared by [`Keyword::lookup()`] and [`Keyword::as_str()`].
const KEYWORDS: [(&str, Keyword); 15] = [
    ("directive", Keyword::Directive),
    ("enum", Keyword::Enum),
    ("extend", Keyword::Extend),
    ("fragment", Keyword::Fragment),
    ("implements", Keyword::Implements),
    ("input", Keyword::Input),
    ("interface", Keyword::Interface),
    ("mutation", Keyword::Mutation),
    ("on", Keyword::On),
    ("query", Keyword::Query),
    ("scalar", Keyword::Scalar),
    ("schema", Keyword::Schema),
    ("subscription", Keyword::Subscription),
    ("type", Keyword::Type),
    ("union", Keyword::Union),
];

impl Keyword {
    /// Returns the keyword spelled exactly `text`, if any.
    pub fn lookup(text: &str) -> Option<Keyword> {
        KEYWORDS
            .iter()
            .find(|(spelling, _)| *spelling == text)
            .map(|(_, kw)| *kw)
    }

    /// Returns the source spelling of this keyword.
    pub fn as_str(self) -> &'static str {
        KEYWORDS
            .iter()
            .find(|(_, kw)| *kw == self)
            .map(|(spelling, _)| *spelling)
            .unwrap_or_default()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
