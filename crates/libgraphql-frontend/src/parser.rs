//! Recursive-descent parser for GraphQL executable and schema documents.
//!
//! The grammar is LL(2): every production is chosen from at most the next
//! two tokens, which the parser reads through a [`TokenStream`]. Reserved
//! words lex as ordinary `Name` tokens, so a keyword is only recognized
//! where the grammar asks for one and remains usable as a name everywhere
//! else (`query query { query }` is a valid document).
//!
//! Parsing is fail-fast: the first grammar violation aborts the parse and is
//! returned as the one [`ParseError`] of the call.
//!
//! # Usage
//!
//! ```rust
//! use libgraphql_frontend::FileSet;
//! use libgraphql_frontend::parse_document;
//!
//! let mut files = FileSet::new();
//! let doc = parse_document("{ hero { name } }", Some("hero.graphql"), &mut files)
//!     .unwrap();
//! assert_eq!(doc.definitions.len(), 1);
//!
//! let err = parse_document("{ hero(id: ) }", Some("broken.graphql"), &mut files)
//!     .unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "broken.graphql:1:12: expecting $ or INT or FLOAT or STRING or NAME or [ or {, found ')'",
//! );
//! ```

use crate::ast::Alias;
use crate::ast::Argument;
use crate::ast::Arguments;
use crate::ast::ArgumentsDefinition;
use crate::ast::AstNode;
use crate::ast::DefaultValue;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::Directives;
use crate::ast::Document;
use crate::ast::EnumDefinition;
use crate::ast::EnumValue;
use crate::ast::ExtendDefinition;
use crate::ast::Field;
use crate::ast::FieldDefinition;
use crate::ast::FieldsDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::ImplementsInterfaces;
use crate::ast::InlineFragment;
use crate::ast::InputFieldsDefinition;
use crate::ast::InputObjectDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::InterfaceDefinition;
use crate::ast::ListType;
use crate::ast::ListValue;
use crate::ast::LiteralKind;
use crate::ast::LiteralValue;
use crate::ast::Location;
use crate::ast::Locations;
use crate::ast::Member;
use crate::ast::Members;
use crate::ast::Name;
use crate::ast::NameValue;
use crate::ast::NamedType;
use crate::ast::ObjectField;
use crate::ast::ObjectValue;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::OperationType;
use crate::ast::OperationTypeDefinition;
use crate::ast::ScalarDefinition;
use crate::ast::Schema;
use crate::ast::SchemaDefinition;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::Type;
use crate::ast::TypeCondition;
use crate::ast::TypeDefinition;
use crate::ast::UnionDefinition;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::VariableDefinition;
use crate::ast::VariableDefinitions;
use crate::lexer::Lexer;
use crate::token::Keyword;
use crate::token::SpannedToken;
use crate::token::TokenKind;
use crate::token_stream::TokenStream;
use crate::File;
use crate::FileSet;
use crate::ParseError;
use crate::ParserOptions;
use crate::Pos;
use crate::Position;
use crate::SyntaxError;
use smallvec::SmallVec;

/// Leading keywords accepted at the top level of a schema document.
const SCHEMA_DEFINITION_KEYWORDS: &str =
    "schema or scalar or type or interface or union or enum or input or extend or directive";

/// Operation keywords, as listed in expectation messages.
const OPERATION_KEYWORDS: &str = "query or mutation or subscription";

/// Whether a value production may contain `$variable` references.
///
/// `Const` is used for default values and for directive arguments inside
/// schema definitions; it applies to every nested list and object value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ConstContext {
    AllowVariables,
    Const,
}

/// Parses a single source text into a [`Document`] or [`Schema`].
///
/// Constructing a parser registers the source as a new [`File`] in the
/// given [`FileSet`]. As tokens are read, the file's line table is filled
/// in, so once a parse has succeeded every [`Pos`] in the resulting tree can
/// be resolved through the `FileSet`.
///
/// A `Parser` is single-use: `parse_document` and `parse_schema` consume it.
pub struct Parser<'src, 'fs> {
    tokens: TokenStream<'src, &'fs mut File>,
    options: ParserOptions,

    /// Current nesting depth of selection sets, list/object values, and list
    /// types. Bounded by `options.max_depth`.
    depth: usize,
}

impl<'src, 'fs> Parser<'src, 'fs> {
    /// Creates a parser with default [`ParserOptions`].
    ///
    /// `filename` is used only in diagnostics; `None` registers the file
    /// with an empty name, and positions then render without a file prefix.
    pub fn new(source: &'src str, filename: Option<&str>, files: &'fs mut FileSet) -> Self {
        Self::with_options(source, filename, files, ParserOptions::default())
    }

    pub fn with_options(
        source: &'src str,
        filename: Option<&str>,
        files: &'fs mut FileSet,
        options: ParserOptions,
    ) -> Self {
        let file = files.add_file(filename.unwrap_or_default(), source.len());
        Self {
            tokens: TokenStream::new(Lexer::with_line_sink(source, file)),
            options,
            depth: 0,
        }
    }

    /// Parses an executable document: operations and fragments until end of
    /// input.
    pub fn parse_document(mut self) -> Result<Document<'src>, ParseError> {
        log::trace!("Parsing document {:?}.", self.file().name());
        let result = self.document();
        self.finish(result)
    }

    /// Parses a schema document: type system definitions until end of
    /// input, grouped by kind into a [`Schema`].
    pub fn parse_schema(mut self) -> Result<Schema<'src>, ParseError> {
        log::trace!("Parsing schema {:?}.", self.file().name());
        let result = self.schema();
        self.finish(result)
    }

    fn finish<T>(&self, result: Result<T, ParseError>) -> Result<T, ParseError> {
        match &result {
            Ok(_) => log::trace!("Finished parsing {:?}.", self.file().name()),
            Err(err) => log::debug!("Failed to parse {:?}: {err}", self.file().name()),
        }
        result
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn file(&self) -> &File {
        self.tokens.lexer().line_sink()
    }

    fn pos(&self, offset: usize) -> Pos {
        self.file().pos(offset)
    }

    fn position_at(&self, offset: usize) -> Position {
        let file = self.file();
        file.position(file.pos(offset))
    }

    fn peek_kind(&mut self) -> TokenKind {
        self.tokens.peek().token.kind
    }

    fn peek_is(&mut self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Keywords match by `Name` text, never by token kind.
    fn peek_is_keyword(&mut self, kw: Keyword) -> bool {
        self.tokens.peek().token.is_keyword(kw)
    }

    /// Consumes the next token unconditionally and returns its position.
    fn bump(&mut self) -> Pos {
        let token = self.tokens.consume();
        self.pos(token.start)
    }

    fn expect(&mut self, kind: TokenKind) -> Result<SpannedToken<'src>, ParseError> {
        if self.peek_is(kind) {
            Ok(self.tokens.consume())
        } else {
            Err(self.unexpected(kind.to_string()))
        }
    }

    fn expect_pos(&mut self, kind: TokenKind) -> Result<Pos, ParseError> {
        let token = self.expect(kind)?;
        Ok(self.pos(token.start))
    }

    fn expect_keyword(&mut self, kw: Keyword) -> Result<Pos, ParseError> {
        if self.peek_is_keyword(kw) {
            Ok(self.bump())
        } else {
            Err(self.unexpected(kw.as_str()))
        }
    }

    fn expect_name(&mut self) -> Result<Name<'src>, ParseError> {
        let token = self.expect(TokenKind::Name)?;
        Ok(Name {
            pos: self.pos(token.start),
            value: token.token.text,
        })
    }

    /// Builds a syntax error describing the next (unconsumed) token.
    fn unexpected(&mut self, expected: impl Into<String>) -> ParseError {
        let (offset, found) = {
            let next = self.tokens.peek();
            (next.start, next.token.describe().to_string())
        };
        ParseError::Syntax(SyntaxError {
            position: self.position_at(offset),
            expected: expected.into(),
            found,
        })
    }

    /// Parses `open item+ close`, the shape shared by every delimited
    /// sequence except list values (which may be empty).
    fn delimited<T>(
        &mut self,
        open: TokenKind,
        close: TokenKind,
        mut item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<(Pos, Vec<T>, Pos), ParseError> {
        let open_pos = self.expect_pos(open)?;
        let mut items = vec![item(self)?];
        while !self.peek_is(close) {
            items.push(item(self)?);
        }
        let close_pos = self.expect_pos(close)?;
        Ok((open_pos, items, close_pos))
    }

    // =========================================================================
    // Nesting depth
    // =========================================================================

    /// Increments the nesting depth, failing if the configured limit would
    /// be exceeded. Callers must pair a successful call with
    /// `exit_nesting()`.
    fn enter_nesting(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.options.max_depth {
            let offset = self.tokens.peek().start;
            return Err(ParseError::NestingTooDeep {
                position: self.position_at(offset),
                limit: self.options.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn exit_nesting(&mut self) {
        self.depth -= 1;
    }

    // =========================================================================
    // Executable documents
    // =========================================================================

    fn document(&mut self) -> Result<Document<'src>, ParseError> {
        let mut definitions = Vec::new();
        while !self.peek_is(TokenKind::Eof) {
            definitions.push(self.definition()?);
        }
        Ok(Document { definitions })
    }

    fn definition(&mut self) -> Result<Definition<'src>, ParseError> {
        if self.peek_is_keyword(Keyword::Fragment) {
            Ok(Definition::Fragment(self.fragment_definition()?))
        } else {
            Ok(Definition::Operation(self.operation_definition()?))
        }
    }

    fn operation_definition(&mut self) -> Result<OperationDefinition<'src>, ParseError> {
        if self.peek_is(TokenKind::BraceOpen) {
            return Ok(OperationDefinition {
                operation_type: None,
                name: None,
                variable_definitions: None,
                directives: None,
                selection_set: self.selection_set()?,
            });
        }

        if self.peek_operation_kind().is_none() {
            return Err(self.unexpected(format!("{{ or {OPERATION_KEYWORDS}")));
        }
        let operation_type = self.operation_type()?;
        let name = if self.peek_is(TokenKind::Name) {
            Some(self.expect_name()?)
        } else {
            None
        };
        let variable_definitions = if self.peek_is(TokenKind::ParenOpen) {
            Some(self.variable_definitions()?)
        } else {
            None
        };
        let directives = self.optional_directives(ConstContext::AllowVariables)?;
        let selection_set = self.selection_set()?;

        Ok(OperationDefinition {
            operation_type: Some(operation_type),
            name,
            variable_definitions,
            directives,
            selection_set,
        })
    }

    fn peek_operation_kind(&mut self) -> Option<OperationKind> {
        self.tokens
            .peek()
            .token
            .keyword()
            .and_then(OperationKind::from_keyword)
    }

    fn operation_type(&mut self) -> Result<OperationType, ParseError> {
        match self.peek_operation_kind() {
            Some(kind) => Ok(OperationType {
                kind,
                pos: self.bump(),
            }),
            None => Err(self.unexpected(OPERATION_KEYWORDS)),
        }
    }

    fn variable_definitions(&mut self) -> Result<VariableDefinitions<'src>, ParseError> {
        let (lparen, definitions, rparen) = self.delimited(
            TokenKind::ParenOpen,
            TokenKind::ParenClose,
            Self::variable_definition,
        )?;
        Ok(VariableDefinitions {
            lparen,
            definitions,
            rparen,
        })
    }

    fn variable_definition(&mut self) -> Result<VariableDefinition<'src>, ParseError> {
        let variable = self.variable()?;
        let colon = self.expect_pos(TokenKind::Colon)?;
        let var_type = self.type_annotation()?;
        let default_value = self.optional_default_value()?;
        Ok(VariableDefinition {
            variable,
            colon,
            var_type,
            default_value,
        })
    }

    fn optional_default_value(&mut self) -> Result<Option<DefaultValue<'src>>, ParseError> {
        if !self.peek_is(TokenKind::Equals) {
            return Ok(None);
        }
        let equals = self.bump();
        let value = self.value(ConstContext::Const)?;
        Ok(Some(DefaultValue { equals, value }))
    }

    fn variable(&mut self) -> Result<Variable<'src>, ParseError> {
        let dollar = self.expect_pos(TokenKind::Dollar)?;
        let name = self.expect_name()?;
        Ok(Variable { dollar, name })
    }

    fn selection_set(&mut self) -> Result<SelectionSet<'src>, ParseError> {
        self.enter_nesting()?;
        let result = self.delimited(
            TokenKind::BraceOpen,
            TokenKind::BraceClose,
            Self::selection,
        );
        self.exit_nesting();
        let (lbrace, selections, rbrace) = result?;
        Ok(SelectionSet {
            lbrace,
            selections,
            rbrace,
        })
    }

    /// `...Name` is a fragment spread unless the name is `on`, in which case
    /// it begins an inline fragment's type condition.
    fn selection(&mut self) -> Result<Selection<'src>, ParseError> {
        if !self.peek_is(TokenKind::Spread) {
            return Ok(Selection::Field(self.field()?));
        }
        let next = &self.tokens.peek_nth(1).token;
        if next.kind == TokenKind::Name && !next.is_keyword(Keyword::On) {
            Ok(Selection::FragmentSpread(self.fragment_spread()?))
        } else {
            Ok(Selection::InlineFragment(self.inline_fragment()?))
        }
    }

    fn field(&mut self) -> Result<Field<'src>, ParseError> {
        let alias = if self.peek_is(TokenKind::Name)
            && self.tokens.peek_nth(1).token.kind == TokenKind::Colon
        {
            let name = self.expect_name()?;
            let colon = self.bump();
            Some(Alias { name, colon })
        } else {
            None
        };
        let name = self.expect_name()?;
        let arguments = self.optional_arguments(ConstContext::AllowVariables)?;
        let directives = self.optional_directives(ConstContext::AllowVariables)?;
        let selection_set = if self.peek_is(TokenKind::BraceOpen) {
            Some(self.selection_set()?)
        } else {
            None
        };
        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
        })
    }

    fn fragment_spread(&mut self) -> Result<FragmentSpread<'src>, ParseError> {
        let ellipsis = self.expect_pos(TokenKind::Spread)?;
        let name = self.fragment_name()?;
        let directives = self.optional_directives(ConstContext::AllowVariables)?;
        Ok(FragmentSpread {
            ellipsis,
            name,
            directives,
        })
    }

    fn inline_fragment(&mut self) -> Result<InlineFragment<'src>, ParseError> {
        let ellipsis = self.expect_pos(TokenKind::Spread)?;
        let type_condition = if self.peek_is_keyword(Keyword::On) {
            Some(self.type_condition()?)
        } else {
            None
        };
        let directives = self.optional_directives(ConstContext::AllowVariables)?;
        let selection_set = self.selection_set()?;
        Ok(InlineFragment {
            ellipsis,
            type_condition,
            directives,
            selection_set,
        })
    }

    fn fragment_definition(&mut self) -> Result<FragmentDefinition<'src>, ParseError> {
        let fragment = self.expect_keyword(Keyword::Fragment)?;
        let name = self.fragment_name()?;
        let type_condition = self.type_condition()?;
        let directives = self.optional_directives(ConstContext::AllowVariables)?;
        let selection_set = self.selection_set()?;
        Ok(FragmentDefinition {
            fragment,
            name,
            type_condition,
            directives,
            selection_set,
        })
    }

    /// A fragment may be named anything except `on`.
    fn fragment_name(&mut self) -> Result<Name<'src>, ParseError> {
        if self.peek_is_keyword(Keyword::On) {
            return Err(self.unexpected("NAME but not *on*"));
        }
        self.expect_name()
    }

    fn type_condition(&mut self) -> Result<TypeCondition<'src>, ParseError> {
        let on = self.expect_keyword(Keyword::On)?;
        let named_type = self.named_type()?;
        Ok(TypeCondition { on, named_type })
    }

    // =========================================================================
    // Arguments and directives
    // =========================================================================

    fn optional_arguments(
        &mut self,
        context: ConstContext,
    ) -> Result<Option<Arguments<'src>>, ParseError> {
        if !self.peek_is(TokenKind::ParenOpen) {
            return Ok(None);
        }
        let (lparen, arguments, rparen) = self.delimited(
            TokenKind::ParenOpen,
            TokenKind::ParenClose,
            |parser| parser.argument(context),
        )?;
        Ok(Some(Arguments {
            lparen,
            arguments,
            rparen,
        }))
    }

    fn argument(&mut self, context: ConstContext) -> Result<Argument<'src>, ParseError> {
        let name = self.expect_name()?;
        let colon = self.expect_pos(TokenKind::Colon)?;
        let value = self.value(context)?;
        Ok(Argument { name, colon, value })
    }

    fn optional_directives(
        &mut self,
        context: ConstContext,
    ) -> Result<Option<Directives<'src>>, ParseError> {
        if !self.peek_is(TokenKind::At) {
            return Ok(None);
        }
        let mut directives = vec![self.directive(context)?];
        while self.peek_is(TokenKind::At) {
            directives.push(self.directive(context)?);
        }
        Ok(Some(Directives { directives }))
    }

    fn directive(&mut self, context: ConstContext) -> Result<Directive<'src>, ParseError> {
        let at = self.expect_pos(TokenKind::At)?;
        let name = self.expect_name()?;
        let arguments = self.optional_arguments(context)?;
        Ok(Directive {
            at,
            name,
            arguments,
        })
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn value(&mut self, context: ConstContext) -> Result<Value<'src>, ParseError> {
        match self.peek_kind() {
            TokenKind::Dollar if context == ConstContext::AllowVariables => {
                Ok(Value::Variable(self.variable()?))
            },
            TokenKind::Int => Ok(Value::Literal(self.literal(LiteralKind::Int))),
            TokenKind::Float => Ok(Value::Literal(self.literal(LiteralKind::Float))),
            TokenKind::String => Ok(Value::Literal(self.literal(LiteralKind::String))),
            TokenKind::Name => Ok(Value::Name(NameValue {
                name: self.expect_name()?,
            })),
            TokenKind::BracketOpen => Ok(Value::List(self.list_value(context)?)),
            TokenKind::BraceOpen => Ok(Value::Object(self.object_value(context)?)),
            _ => Err(self.unexpected(Self::value_expectation(context))),
        }
    }

    /// Alternatives a value may start with, e.g. `$ or INT or ... or {`.
    fn value_expectation(context: ConstContext) -> String {
        let mut expected: SmallVec<[&str; 8]> = SmallVec::new();
        if context == ConstContext::AllowVariables {
            expected.push("$");
        }
        expected.extend_from_slice(&["INT", "FLOAT", "STRING", "NAME", "[", "{"]);
        expected.join(" or ")
    }

    /// Consumes the literal token at the front of the stream, which the
    /// caller has already classified as `kind`.
    fn literal(&mut self, kind: LiteralKind) -> LiteralValue<'src> {
        let token = self.tokens.consume();
        LiteralValue {
            kind,
            pos: self.pos(token.start),
            value: token.token.text,
            end: self.pos(token.end),
        }
    }

    fn list_value(&mut self, context: ConstContext) -> Result<ListValue<'src>, ParseError> {
        self.enter_nesting()?;
        let result = self.list_value_impl(context);
        self.exit_nesting();
        result
    }

    fn list_value_impl(&mut self, context: ConstContext) -> Result<ListValue<'src>, ParseError> {
        let lbrack = self.expect_pos(TokenKind::BracketOpen)?;
        let mut values = Vec::new();
        while !self.peek_is(TokenKind::BracketClose) {
            values.push(self.value(context)?);
        }
        let rbrack = self.expect_pos(TokenKind::BracketClose)?;
        Ok(ListValue {
            lbrack,
            values,
            rbrack,
        })
    }

    fn object_value(&mut self, context: ConstContext) -> Result<ObjectValue<'src>, ParseError> {
        self.enter_nesting()?;
        let result = self.delimited(
            TokenKind::BraceOpen,
            TokenKind::BraceClose,
            |parser| parser.object_field(context),
        );
        self.exit_nesting();
        let (lbrace, fields, rbrace) = result?;
        Ok(ObjectValue {
            lbrace,
            fields,
            rbrace,
        })
    }

    fn object_field(&mut self, context: ConstContext) -> Result<ObjectField<'src>, ParseError> {
        let name = self.expect_name()?;
        let colon = self.expect_pos(TokenKind::Colon)?;
        let value = self.value(context)?;
        Ok(ObjectField { name, colon, value })
    }

    // =========================================================================
    // Types
    // =========================================================================

    fn type_annotation(&mut self) -> Result<Type<'src>, ParseError> {
        match self.peek_kind() {
            TokenKind::Name => {
                let name = self.expect_name()?;
                Ok(Type::Named(NamedType {
                    name,
                    non_null: self.optional_bang(),
                }))
            },
            TokenKind::BracketOpen => Ok(Type::List(self.list_type()?)),
            _ => Err(self.unexpected("NAME or [")),
        }
    }

    fn list_type(&mut self) -> Result<ListType<'src>, ParseError> {
        self.enter_nesting()?;
        let result = self.list_type_impl();
        self.exit_nesting();
        result
    }

    fn list_type_impl(&mut self) -> Result<ListType<'src>, ParseError> {
        let lbrack = self.expect_pos(TokenKind::BracketOpen)?;
        let elem = Box::new(self.type_annotation()?);
        let rbrack = self.expect_pos(TokenKind::BracketClose)?;
        Ok(ListType {
            lbrack,
            elem,
            rbrack,
            non_null: self.optional_bang(),
        })
    }

    fn optional_bang(&mut self) -> Option<Pos> {
        self.peek_is(TokenKind::Bang).then(|| self.bump())
    }

    /// A type name that cannot be marked non-null.
    fn named_type(&mut self) -> Result<NamedType<'src>, ParseError> {
        Ok(NamedType {
            name: self.expect_name()?,
            non_null: None,
        })
    }

    // =========================================================================
    // Schema documents
    // =========================================================================

    fn schema(&mut self) -> Result<Schema<'src>, ParseError> {
        let mut schema = Schema::default();
        while !self.peek_is(TokenKind::Eof) {
            let (pos, end) = match self.tokens.peek().token.keyword() {
                Some(Keyword::Schema) => push_spanned(&mut schema.schemas, self.schema_definition()?),
                Some(Keyword::Scalar) => push_spanned(&mut schema.scalars, self.scalar_definition()?),
                Some(Keyword::Type) => push_spanned(&mut schema.types, self.type_definition()?),
                Some(Keyword::Interface) => {
                    push_spanned(&mut schema.interfaces, self.interface_definition()?)
                },
                Some(Keyword::Union) => push_spanned(&mut schema.unions, self.union_definition()?),
                Some(Keyword::Enum) => push_spanned(&mut schema.enums, self.enum_definition()?),
                Some(Keyword::Input) => {
                    push_spanned(&mut schema.input_objects, self.input_object_definition()?)
                },
                Some(Keyword::Extend) => push_spanned(&mut schema.extends, self.extend_definition()?),
                Some(Keyword::Directive) => {
                    push_spanned(&mut schema.directives, self.directive_definition()?)
                },
                _ => return Err(self.unexpected(SCHEMA_DEFINITION_KEYWORDS)),
            };
            if !schema.pos.is_valid() {
                schema.pos = pos;
            }
            schema.end = end;
        }
        Ok(schema)
    }

    fn schema_definition(&mut self) -> Result<SchemaDefinition<'src>, ParseError> {
        let schema = self.expect_keyword(Keyword::Schema)?;
        let directives = self.optional_directives(ConstContext::Const)?;
        let (lbrace, operation_types, rbrace) = self.delimited(
            TokenKind::BraceOpen,
            TokenKind::BraceClose,
            Self::operation_type_definition,
        )?;
        Ok(SchemaDefinition {
            schema,
            directives,
            lbrace,
            operation_types,
            rbrace,
        })
    }

    fn operation_type_definition(&mut self) -> Result<OperationTypeDefinition<'src>, ParseError> {
        let operation = self.operation_type()?;
        let colon = self.expect_pos(TokenKind::Colon)?;
        let named_type = self.named_type()?;
        Ok(OperationTypeDefinition {
            operation,
            colon,
            named_type,
        })
    }

    fn scalar_definition(&mut self) -> Result<ScalarDefinition<'src>, ParseError> {
        let scalar = self.expect_keyword(Keyword::Scalar)?;
        let name = self.expect_name()?;
        let directives = self.optional_directives(ConstContext::Const)?;
        Ok(ScalarDefinition {
            scalar,
            name,
            directives,
        })
    }

    fn type_definition(&mut self) -> Result<TypeDefinition<'src>, ParseError> {
        let type_kw = self.expect_keyword(Keyword::Type)?;
        let name = self.expect_name()?;
        let implements = if self.peek_is_keyword(Keyword::Implements) {
            Some(self.implements_interfaces()?)
        } else {
            None
        };
        let directives = self.optional_directives(ConstContext::Const)?;
        let fields = self.fields_definition()?;
        Ok(TypeDefinition {
            type_kw,
            name,
            implements,
            directives,
            fields,
        })
    }

    fn implements_interfaces(&mut self) -> Result<ImplementsInterfaces<'src>, ParseError> {
        let implements = self.expect_keyword(Keyword::Implements)?;
        let mut interfaces = vec![self.named_type()?];
        while self.peek_is(TokenKind::Name) {
            interfaces.push(self.named_type()?);
        }
        Ok(ImplementsInterfaces {
            implements,
            interfaces,
        })
    }

    fn fields_definition(&mut self) -> Result<FieldsDefinition<'src>, ParseError> {
        let (lbrace, fields, rbrace) = self.delimited(
            TokenKind::BraceOpen,
            TokenKind::BraceClose,
            Self::field_definition,
        )?;
        Ok(FieldsDefinition {
            lbrace,
            fields,
            rbrace,
        })
    }

    fn field_definition(&mut self) -> Result<FieldDefinition<'src>, ParseError> {
        let name = self.expect_name()?;
        let arguments = self.optional_arguments_definition()?;
        let colon = self.expect_pos(TokenKind::Colon)?;
        let field_type = self.type_annotation()?;
        let directives = self.optional_directives(ConstContext::Const)?;
        Ok(FieldDefinition {
            name,
            arguments,
            colon,
            field_type,
            directives,
        })
    }

    fn optional_arguments_definition(
        &mut self,
    ) -> Result<Option<ArgumentsDefinition<'src>>, ParseError> {
        if !self.peek_is(TokenKind::ParenOpen) {
            return Ok(None);
        }
        let (lparen, arguments, rparen) = self.delimited(
            TokenKind::ParenOpen,
            TokenKind::ParenClose,
            Self::input_value_definition,
        )?;
        Ok(Some(ArgumentsDefinition {
            lparen,
            arguments,
            rparen,
        }))
    }

    fn input_value_definition(&mut self) -> Result<InputValueDefinition<'src>, ParseError> {
        let name = self.expect_name()?;
        let colon = self.expect_pos(TokenKind::Colon)?;
        let value_type = self.type_annotation()?;
        let default_value = self.optional_default_value()?;
        let directives = self.optional_directives(ConstContext::Const)?;
        Ok(InputValueDefinition {
            name,
            colon,
            value_type,
            default_value,
            directives,
        })
    }

    fn interface_definition(&mut self) -> Result<InterfaceDefinition<'src>, ParseError> {
        let interface = self.expect_keyword(Keyword::Interface)?;
        let name = self.expect_name()?;
        let directives = self.optional_directives(ConstContext::Const)?;
        let fields = self.fields_definition()?;
        Ok(InterfaceDefinition {
            interface,
            name,
            directives,
            fields,
        })
    }

    fn union_definition(&mut self) -> Result<UnionDefinition<'src>, ParseError> {
        let union_kw = self.expect_keyword(Keyword::Union)?;
        let name = self.expect_name()?;
        let directives = self.optional_directives(ConstContext::Const)?;
        let equals = self.expect_pos(TokenKind::Equals)?;
        let leading_pipe = self.optional_pipe();
        let mut members = vec![Member {
            name: self.expect_name()?,
        }];
        while self.optional_pipe().is_some() {
            members.push(Member {
                name: self.expect_name()?,
            });
        }
        Ok(UnionDefinition {
            union_kw,
            name,
            directives,
            equals,
            members: Members {
                leading_pipe,
                members,
            },
        })
    }

    fn optional_pipe(&mut self) -> Option<Pos> {
        self.peek_is(TokenKind::Pipe).then(|| self.bump())
    }

    fn enum_definition(&mut self) -> Result<EnumDefinition<'src>, ParseError> {
        let enum_kw = self.expect_keyword(Keyword::Enum)?;
        let name = self.expect_name()?;
        let directives = self.optional_directives(ConstContext::Const)?;
        let (lbrace, values, rbrace) = self.delimited(
            TokenKind::BraceOpen,
            TokenKind::BraceClose,
            Self::enum_value,
        )?;
        Ok(EnumDefinition {
            enum_kw,
            name,
            directives,
            lbrace,
            values,
            rbrace,
        })
    }

    fn enum_value(&mut self) -> Result<EnumValue<'src>, ParseError> {
        let name = self.expect_name()?;
        let directives = self.optional_directives(ConstContext::Const)?;
        Ok(EnumValue { name, directives })
    }

    fn input_object_definition(&mut self) -> Result<InputObjectDefinition<'src>, ParseError> {
        let input = self.expect_keyword(Keyword::Input)?;
        let name = self.expect_name()?;
        let directives = self.optional_directives(ConstContext::Const)?;
        let (lbrace, fields, rbrace) = self.delimited(
            TokenKind::BraceOpen,
            TokenKind::BraceClose,
            Self::input_value_definition,
        )?;
        Ok(InputObjectDefinition {
            input,
            name,
            directives,
            fields: InputFieldsDefinition {
                lbrace,
                fields,
                rbrace,
            },
        })
    }

    fn extend_definition(&mut self) -> Result<ExtendDefinition<'src>, ParseError> {
        let extend = self.expect_keyword(Keyword::Extend)?;
        let definition = self.type_definition()?;
        Ok(ExtendDefinition { extend, definition })
    }

    fn directive_definition(&mut self) -> Result<DirectiveDefinition<'src>, ParseError> {
        let directive = self.expect_keyword(Keyword::Directive)?;
        let at = self.expect_pos(TokenKind::At)?;
        let name = self.expect_name()?;
        let arguments = self.optional_arguments_definition()?;
        let on = self.expect_keyword(Keyword::On)?;
        let leading_pipe = self.optional_pipe();
        let mut locations = vec![Location {
            name: self.expect_name()?,
        }];
        while self.optional_pipe().is_some() {
            locations.push(Location {
                name: self.expect_name()?,
            });
        }
        Ok(DirectiveDefinition {
            directive,
            at,
            name,
            arguments,
            on,
            locations: Locations {
                leading_pipe,
                locations,
            },
        })
    }
}

/// Appends `def` to its per-kind list, returning its span.
fn push_spanned<T: AstNode>(list: &mut Vec<T>, def: T) -> (Pos, Pos) {
    let span = (def.pos(), def.end());
    list.push(def);
    span
}

// =============================================================================
// Convenience entry points
// =============================================================================

/// Parses `source` as an executable document, registering it in `files`.
pub fn parse_document<'src>(
    source: &'src str,
    filename: Option<&str>,
    files: &mut FileSet,
) -> Result<Document<'src>, ParseError> {
    Parser::new(source, filename, files).parse_document()
}

pub fn parse_document_with_options<'src>(
    source: &'src str,
    filename: Option<&str>,
    files: &mut FileSet,
    options: ParserOptions,
) -> Result<Document<'src>, ParseError> {
    Parser::with_options(source, filename, files, options).parse_document()
}

/// Parses `source` as a schema document, registering it in `files`.
pub fn parse_schema<'src>(
    source: &'src str,
    filename: Option<&str>,
    files: &mut FileSet,
) -> Result<Schema<'src>, ParseError> {
    Parser::new(source, filename, files).parse_schema()
}

pub fn parse_schema_with_options<'src>(
    source: &'src str,
    filename: Option<&str>,
    files: &mut FileSet,
    options: ParserOptions,
) -> Result<Schema<'src>, ParseError> {
    Parser::with_options(source, filename, files, options).parse_schema()
}
