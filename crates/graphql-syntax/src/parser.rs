//! Recursive descent parser for GraphQL documents (June 2018 draft).
//!
//! [`Parser`] is generic over any [`TokenSource`] and parses executable
//! definitions, type-system definitions, and type-system extensions in a
//! single document grammar.
//!
//! # Architecture
//!
//! Every grammar rule has a corresponding `parse_*` method returning
//! `Result<Node, SyntaxError>`. Parsing is fail-fast: the first syntactic
//! anomaly (including the first lexical error) propagates out through `?`
//! and aborts the parse. No partial tree is surfaced.
//!
//! Bracketed lists are parsed through exactly three combinators — `many`,
//! `optional_many`, and `any` — which differ in whether the opener is
//! required and whether the closing-token check happens before or after
//! each item (which is what decides whether the list may be empty).
//!
//! The grammar needs a single token of lookahead in one place only:
//! distinguishing a type-system definition's leading description string
//! from any other use of a string token. See
//! [`parse_type_system_definition`](Parser::parse_type_system_definition).

use crate::ast;
use crate::token::Token;
use crate::token::TokenKind;
use crate::token_source::Lexer;
use crate::token_source::TokenSource;
use crate::token_stream::TokenStream;
use crate::SourcePosition;
use crate::SourceSpan;
use crate::SyntaxError;
use crate::SyntaxErrorKind;
use std::borrow::Cow;

/// Dispatch target for a top-level definition, extracted from the current
/// token so the peek borrow is released before recursing.
enum DefinitionDispatch {
    Operation,
    Fragment,
    TypeSystem,
    Extension,
    Unexpected,
}

/// Dispatch target for a value literal, extracted the same way.
enum ValueDispatch {
    List,
    Object,
    Int,
    Float,
    String,
    Boolean(bool),
    Null,
    Enum,
    Variable,
    Unexpected,
}

/// A recursive descent parser for GraphQL documents.
///
/// Generic over the token source; [`Parser::new`] wires up the `&str` lexer,
/// and [`Parser::from_token_source`] accepts any iterator of [`Token`]s.
///
/// # Usage
///
/// ```
/// use graphql_syntax::ast;
/// use graphql_syntax::Parser;
///
/// let doc = Parser::new("{ hero { name } }").parse_document().unwrap();
/// assert!(matches!(doc.definitions[0], ast::Definition::Operation(_)));
/// ```
pub struct Parser<'src, TSource: TokenSource<'src>> {
    /// The source text, retained for error construction.
    source: &'src str,

    /// The underlying token stream with lookahead support.
    token_stream: TokenStream<'src, TSource>,

    /// Current nesting depth for the recursive value / selection-set / type
    /// productions. Bounds adversarial inputs like `[[[[...` that would
    /// otherwise overflow the stack.
    recursion_depth: usize,

    /// End position of the most recently consumed token; anchors node spans
    /// and EOF errors.
    last_end_position: Option<SourcePosition>,
}

impl<'src> Parser<'src, Lexer<'src>> {
    /// Creates a new parser lexing from a string slice.
    pub fn new(source: &'src str) -> Self {
        Self::from_token_source(source, Lexer::new(source))
    }
}

impl<'src, TSource: TokenSource<'src>> Parser<'src, TSource> {
    /// Maximum nesting depth for the recursive productions.
    ///
    /// Far beyond any realistic document (real-world nesting rarely exceeds
    /// 15 levels) while staying safe in debug builds where un-optimized
    /// frames can be several KB each.
    const MAX_RECURSION_DEPTH: usize = 64;

    /// Creates a parser from an explicit token source.
    ///
    /// `source` is the text the tokens were lexed from; it is only used to
    /// make errors self-contained.
    pub fn from_token_source(source: &'src str, token_source: TSource) -> Self {
        Self {
            source,
            token_stream: TokenStream::new(token_source),
            recursion_depth: 0,
            last_end_position: None,
        }
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    /// Parses a complete document: `Definition+` followed by end of input.
    ///
    /// An empty document is a syntax error.
    pub fn parse_document(mut self) -> Result<ast::Document<'src>, SyntaxError> {
        let start = self.current_start();
        let mut definitions = Vec::new();
        loop {
            definitions.push(self.parse_definition()?);
            if self.expect_optional_token(&TokenKind::Eof).is_some() {
                break;
            }
        }
        Ok(ast::Document {
            span: self.make_span(start),
            definitions,
        })
    }

    /// Parses a single non-const value literal followed by end of input.
    pub fn parse_value(mut self) -> Result<ast::Value<'src>, SyntaxError> {
        let value = self.parse_value_literal(false)?;
        self.expect_token(&TokenKind::Eof)?;
        Ok(value)
    }

    /// Parses a single type reference followed by end of input.
    pub fn parse_type(mut self) -> Result<ast::Type<'src>, SyntaxError> {
        let ty = self.parse_type_reference()?;
        self.expect_token(&TokenKind::Eof)?;
        Ok(ty)
    }

    // =========================================================================
    // Cursor predicates
    // =========================================================================

    /// The kind of the current token, if any.
    fn peek_kind(&mut self) -> Option<&TokenKind<'src>> {
        self.token_stream.peek().map(|t| &t.kind)
    }

    /// Checks whether the current token matches `kind`: by identity for
    /// punctuators and `Eof`, as a class for the payload-carrying variants.
    fn peek_is(&mut self, kind: &TokenKind<'_>) -> bool {
        match self.token_stream.peek() {
            Some(token) => token_kinds_match(&token.kind, kind),
            None => false,
        }
    }

    /// Checks whether the current token is a `Name` with the given text.
    fn peek_is_keyword(&mut self, word: &str) -> bool {
        matches!(self.peek_kind(), Some(TokenKind::Name(name)) if name.as_ref() == word)
    }

    /// Checks whether the current token is any `Name`.
    fn peek_is_name(&mut self) -> bool {
        matches!(self.peek_kind(), Some(TokenKind::Name(_)))
    }

    /// Checks whether the current token is any `StringValue`.
    fn peek_is_string(&mut self) -> bool {
        matches!(self.peek_kind(), Some(TokenKind::StringValue(_)))
    }

    // =========================================================================
    // Expectation layer
    // =========================================================================

    /// Consume and return the current token if it matches `kind`, otherwise
    /// a syntax error whose `expected` is `kind`.
    fn expect_token(&mut self, kind: &TokenKind<'_>) -> Result<Token<'src>, SyntaxError> {
        if self.peek_is(kind) {
            Ok(self.consume_token().unwrap())
        } else {
            Err(self.expected_err(expected_display(kind)))
        }
    }

    /// Consume and return the current token if it is a `Name` whose text is
    /// `word`, otherwise a syntax error whose `expected` is `word`.
    fn expect_keyword(&mut self, word: &str) -> Result<Token<'src>, SyntaxError> {
        if self.peek_is_keyword(word) {
            Ok(self.consume_token().unwrap())
        } else {
            Err(self.expected_err(word))
        }
    }

    /// Consume and return the current token if it matches `kind`; no
    /// consumption and no error otherwise.
    fn expect_optional_token(&mut self, kind: &TokenKind<'_>) -> Option<Token<'src>> {
        if self.peek_is(kind) {
            self.consume_token()
        } else {
            None
        }
    }

    /// Consume and return the current token if it is a `Name` whose text is
    /// `word`; no consumption and no error otherwise.
    fn expect_optional_keyword(&mut self, word: &str) -> Option<Token<'src>> {
        if self.peek_is_keyword(word) {
            self.consume_token()
        } else {
            None
        }
    }

    // =========================================================================
    // List combinators
    // =========================================================================

    /// `open Item+ close` — the opener is required and the list is
    /// non-empty: the closing token is only tried after each item.
    fn many<T>(
        &mut self,
        open: &TokenKind<'_>,
        parse_item: impl FnMut(&mut Self) -> Result<T, SyntaxError>,
        close: &TokenKind<'_>,
    ) -> Result<Vec<T>, SyntaxError> {
        self.expect_token(open)?;
        self.many_tail(parse_item, close)
    }

    /// `(open Item+ close)?` — like [`many`](Parser::many), but an absent
    /// opener yields an empty list without consuming anything.
    fn optional_many<T>(
        &mut self,
        open: &TokenKind<'_>,
        parse_item: impl FnMut(&mut Self) -> Result<T, SyntaxError>,
        close: &TokenKind<'_>,
    ) -> Result<Vec<T>, SyntaxError> {
        if self.expect_optional_token(open).is_none() {
            return Ok(Vec::new());
        }
        self.many_tail(parse_item, close)
    }

    /// `open Item* close` — the opener is required but the list may be
    /// empty: the closing token is tried before each item.
    fn any<T>(
        &mut self,
        open: &TokenKind<'_>,
        mut parse_item: impl FnMut(&mut Self) -> Result<T, SyntaxError>,
        close: &TokenKind<'_>,
    ) -> Result<Vec<T>, SyntaxError> {
        self.expect_token(open)?;
        let mut items = Vec::new();
        while self.expect_optional_token(close).is_none() {
            items.push(parse_item(self)?);
        }
        Ok(items)
    }

    /// Shared item loop for `many` / `optional_many` once the opener has
    /// been consumed.
    fn many_tail<T>(
        &mut self,
        mut parse_item: impl FnMut(&mut Self) -> Result<T, SyntaxError>,
        close: &TokenKind<'_>,
    ) -> Result<Vec<T>, SyntaxError> {
        let mut items = Vec::new();
        loop {
            items.push(parse_item(self)?);
            if self.expect_optional_token(close).is_some() {
                return Ok(items);
            }
        }
    }

    // =========================================================================
    // Position and error helpers
    // =========================================================================

    /// Consumes the next token, tracking its end position for span and EOF
    /// error anchoring.
    fn consume_token(&mut self) -> Option<Token<'src>> {
        let token = self.token_stream.consume();
        if let Some(ref t) = token {
            self.last_end_position = Some(t.span.end_exclusive);
        }
        token
    }

    /// Start position of the current token, falling back to the end of the
    /// last consumed token.
    fn current_start(&mut self) -> SourcePosition {
        match self.token_stream.peek() {
            Some(token) => token.span.start_inclusive,
            None => self.eof_position(),
        }
    }

    /// Position used to anchor EOF errors: the end of the last consumed
    /// token, or the document start.
    fn eof_position(&self) -> SourcePosition {
        self.last_end_position
            .unwrap_or_else(|| SourcePosition::new(0, 0, 0))
    }

    /// Builds a node span from a start position to the end of the last
    /// consumed token.
    fn make_span(&self, start: SourcePosition) -> SourceSpan {
        SourceSpan::new(start, self.last_end_position.unwrap_or(start))
    }

    /// Builds a syntax error at the nth token ahead. `expected` selects
    /// between the expectation-miss and no-expectation error kinds; a
    /// lexical error token takes precedence over either.
    fn syntax_error_at(&mut self, n: usize, expected: Option<String>) -> SyntaxError {
        let (span, kind) = match self.token_stream.peek_nth(n) {
            None => {
                let got = "<EOF>".to_string();
                (
                    SourceSpan::empty(self.eof_position()),
                    match expected {
                        Some(expected) => SyntaxErrorKind::Expected { expected, got },
                        None => SyntaxErrorKind::Unexpected { got },
                    },
                )
            }
            Some(token) => (
                token.span,
                match &token.kind {
                    TokenKind::Error { message } => SyntaxErrorKind::InvalidLiteral {
                        message: message.clone(),
                    },
                    kind => {
                        let got = token_kind_display(kind);
                        match expected {
                            Some(expected) => SyntaxErrorKind::Expected { expected, got },
                            None => SyntaxErrorKind::Unexpected { got },
                        }
                    }
                },
            ),
        };
        SyntaxError::new(self.source, span, kind)
    }

    /// A syntax error at the current token with a specific expectation.
    fn expected_err(&mut self, expected: impl Into<String>) -> SyntaxError {
        self.syntax_error_at(0, Some(expected.into()))
    }

    /// A syntax error at the current token with no specific expectation.
    fn unexpected_err(&mut self) -> SyntaxError {
        self.syntax_error_at(0, None)
    }

    /// An invalid-literal error anchored to a consumed token's span.
    fn invalid_literal(&self, span: SourceSpan, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(
            self.source,
            span,
            SyntaxErrorKind::InvalidLiteral {
                message: message.into(),
            },
        )
    }

    /// Bounds the recursive productions; the matching `exit_recursion` is
    /// called by the wrappers below.
    fn enter_recursion(&mut self) -> Result<(), SyntaxError> {
        self.recursion_depth += 1;
        if self.recursion_depth > Self::MAX_RECURSION_DEPTH {
            self.recursion_depth -= 1;
            let span = match self.token_stream.peek() {
                Some(token) => token.span,
                None => SourceSpan::empty(self.eof_position()),
            };
            return Err(self.invalid_literal(span, "maximum nesting depth exceeded"));
        }
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Parses any name, keywords included: `on`, `query`, `true`, and the
    /// rest are all valid names wherever a name is grammatically permitted.
    fn parse_name(&mut self) -> Result<ast::Name<'src>, SyntaxError> {
        if !self.peek_is_name() {
            return Err(self.expected_err("Name"));
        }
        let token = self.consume_token().unwrap();
        let value = match token.kind {
            TokenKind::Name(value) => value,
            _ => unreachable!("peek_is_name checked"),
        };
        Ok(ast::Name {
            span: token.span,
            value,
        })
    }

    /// Parses a fragment name: any name except `on`, which introduces a
    /// type condition and is rejected in name position.
    fn parse_fragment_name(&mut self) -> Result<ast::Name<'src>, SyntaxError> {
        if self.peek_is_keyword("on") {
            return Err(self.unexpected_err());
        }
        self.parse_name()
    }

    // =========================================================================
    // Document and definitions
    // =========================================================================

    /// Dispatches a single top-level definition on the current token.
    fn parse_definition(&mut self) -> Result<ast::Definition<'src>, SyntaxError> {
        let dispatch = match self.peek_kind() {
            Some(TokenKind::CurlyBraceOpen) => DefinitionDispatch::Operation,
            Some(TokenKind::StringValue(_)) => DefinitionDispatch::TypeSystem,
            Some(TokenKind::Name(name)) => match name.as_ref() {
                "query" | "mutation" | "subscription" => DefinitionDispatch::Operation,
                "fragment" => DefinitionDispatch::Fragment,
                "schema" | "scalar" | "type" | "interface" | "union" | "enum" | "input"
                | "directive" => DefinitionDispatch::TypeSystem,
                "extend" => DefinitionDispatch::Extension,
                _ => DefinitionDispatch::Unexpected,
            },
            _ => DefinitionDispatch::Unexpected,
        };

        match dispatch {
            DefinitionDispatch::Operation => self
                .parse_operation_definition()
                .map(ast::Definition::Operation),
            DefinitionDispatch::Fragment => self
                .parse_fragment_definition()
                .map(ast::Definition::Fragment),
            DefinitionDispatch::TypeSystem => self.parse_type_system_definition(),
            DefinitionDispatch::Extension => self.parse_type_system_extension(),
            DefinitionDispatch::Unexpected => Err(self.unexpected_err()),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Parses an operation definition, including the shorthand form (a bare
    /// selection set, which is a `query`).
    fn parse_operation_definition(
        &mut self,
    ) -> Result<ast::OperationDefinition<'src>, SyntaxError> {
        let start = self.current_start();

        if self.peek_is(&TokenKind::CurlyBraceOpen) {
            let selection_set = self.parse_selection_set()?;
            return Ok(ast::OperationDefinition {
                span: self.make_span(start),
                operation: ast::OperationKind::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set,
            });
        }

        let operation = self.parse_operation_kind()?;
        let name = if self.peek_is_name() {
            Some(self.parse_name()?)
        } else {
            None
        };
        let variable_definitions = self.optional_many(
            &TokenKind::ParenOpen,
            Self::parse_variable_definition,
            &TokenKind::ParenClose,
        )?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::OperationDefinition {
            span: self.make_span(start),
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
        })
    }

    /// Parses one of the three operation keywords.
    fn parse_operation_kind(&mut self) -> Result<ast::OperationKind, SyntaxError> {
        let kind = match self.peek_kind() {
            Some(TokenKind::Name(name)) => ast::OperationKind::from_keyword(name.as_ref()),
            _ => None,
        };
        match kind {
            Some(kind) => {
                self.consume_token();
                Ok(kind)
            }
            None => Err(self.unexpected_err()),
        }
    }

    /// Parses a variable definition:
    /// `$name: Type = default @directives`.
    fn parse_variable_definition(
        &mut self,
    ) -> Result<ast::VariableDefinition<'src>, SyntaxError> {
        let start = self.current_start();
        let variable = self.parse_variable()?;
        self.expect_token(&TokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let default_value = if self.expect_optional_token(&TokenKind::Equals).is_some() {
            Some(self.parse_value_literal(true)?)
        } else {
            None
        };
        let directives = self.parse_directives(true)?;
        Ok(ast::VariableDefinition {
            span: self.make_span(start),
            variable,
            ty,
            default_value,
            directives,
        })
    }

    /// Parses a variable reference: `$name`.
    fn parse_variable(&mut self) -> Result<ast::Variable<'src>, SyntaxError> {
        let start = self.current_start();
        self.expect_token(&TokenKind::Dollar)?;
        let name = self.parse_name()?;
        Ok(ast::Variable {
            span: self.make_span(start),
            name,
        })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    /// Parses a selection set: `{ Selection+ }`.
    fn parse_selection_set(&mut self) -> Result<ast::SelectionSet<'src>, SyntaxError> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_impl();
        self.exit_recursion();
        result
    }

    fn parse_selection_set_impl(&mut self) -> Result<ast::SelectionSet<'src>, SyntaxError> {
        let start = self.current_start();
        let selections = self.many(
            &TokenKind::CurlyBraceOpen,
            Self::parse_selection,
            &TokenKind::CurlyBraceClose,
        )?;
        Ok(ast::SelectionSet {
            span: self.make_span(start),
            selections,
        })
    }

    /// Parses a single selection: a fragment form if the current token is
    /// `...`, a field otherwise.
    fn parse_selection(&mut self) -> Result<ast::Selection<'src>, SyntaxError> {
        if self.peek_is(&TokenKind::Ellipsis) {
            self.parse_fragment_selection()
        } else {
            self.parse_field().map(ast::Selection::Field)
        }
    }

    /// Parses the selection forms starting with `...`:
    ///
    /// - `... on Type @directives { ... }` — inline fragment with a type
    ///   condition
    /// - `...FragmentName @directives` — fragment spread (the name is never
    ///   `on`, which was consumed by the previous case)
    /// - `... @directives { ... }` — inline fragment without a type
    ///   condition
    fn parse_fragment_selection(&mut self) -> Result<ast::Selection<'src>, SyntaxError> {
        let start = self.current_start();
        self.expect_token(&TokenKind::Ellipsis)?;

        if self.expect_optional_keyword("on").is_some() {
            let type_condition = self.parse_named_type()?;
            let directives = self.parse_directives(false)?;
            let selection_set = self.parse_selection_set()?;
            return Ok(ast::Selection::InlineFragment(ast::InlineFragment {
                span: self.make_span(start),
                type_condition: Some(type_condition),
                directives,
                selection_set,
            }));
        }

        if self.peek_is_name() {
            let name = self.parse_fragment_name()?;
            let directives = self.parse_directives(false)?;
            return Ok(ast::Selection::FragmentSpread(ast::FragmentSpread {
                span: self.make_span(start),
                name,
                directives,
            }));
        }

        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::Selection::InlineFragment(ast::InlineFragment {
            span: self.make_span(start),
            type_condition: None,
            directives,
            selection_set,
        }))
    }

    /// Parses a field: `alias: name(args) @directives { selections }`.
    ///
    /// The first name is the alias iff a `:` follows it.
    fn parse_field(&mut self) -> Result<ast::Field<'src>, SyntaxError> {
        let start = self.current_start();
        let first = self.parse_name()?;

        let (alias, name) = if self.expect_optional_token(&TokenKind::Colon).is_some() {
            (Some(first), self.parse_name()?)
        } else {
            (None, first)
        };

        let arguments = self.parse_arguments(false)?;
        let directives = self.parse_directives(false)?;
        let selection_set = if self.peek_is(&TokenKind::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(ast::Field {
            span: self.make_span(start),
            alias,
            name,
            arguments,
            directives,
            selection_set,
        })
    }

    // =========================================================================
    // Arguments and directives
    // =========================================================================

    /// Parses `(Argument+)` if present, an empty list otherwise. `is_const`
    /// threads through to the argument values.
    fn parse_arguments(
        &mut self,
        is_const: bool,
    ) -> Result<Vec<ast::Argument<'src>>, SyntaxError> {
        self.optional_many(
            &TokenKind::ParenOpen,
            |p| p.parse_argument(is_const),
            &TokenKind::ParenClose,
        )
    }

    /// Parses a single `name: value` argument.
    fn parse_argument(&mut self, is_const: bool) -> Result<ast::Argument<'src>, SyntaxError> {
        let start = self.current_start();
        let name = self.parse_name()?;
        self.expect_token(&TokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(ast::Argument {
            span: self.make_span(start),
            name,
            value,
        })
    }

    /// Parses zero or more directive annotations.
    fn parse_directives(
        &mut self,
        is_const: bool,
    ) -> Result<Vec<ast::Directive<'src>>, SyntaxError> {
        let mut directives = Vec::new();
        while self.peek_is(&TokenKind::At) {
            directives.push(self.parse_directive(is_const)?);
        }
        Ok(directives)
    }

    /// Parses `@name` or `@name(args)`.
    fn parse_directive(&mut self, is_const: bool) -> Result<ast::Directive<'src>, SyntaxError> {
        let start = self.current_start();
        self.expect_token(&TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments(is_const)?;
        Ok(ast::Directive {
            span: self.make_span(start),
            name,
            arguments,
        })
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Parses a value literal. When `is_const` is true, variable references
    /// are forbidden and `$` is a syntax error.
    fn parse_value_literal(&mut self, is_const: bool) -> Result<ast::Value<'src>, SyntaxError> {
        self.enter_recursion()?;
        let result = self.parse_value_literal_impl(is_const);
        self.exit_recursion();
        result
    }

    fn parse_value_literal_impl(
        &mut self,
        is_const: bool,
    ) -> Result<ast::Value<'src>, SyntaxError> {
        // Extract the dispatch target first so the peek borrow is released
        // before any production runs.
        let dispatch = match self.peek_kind() {
            Some(TokenKind::SquareBracketOpen) => ValueDispatch::List,
            Some(TokenKind::CurlyBraceOpen) => ValueDispatch::Object,
            Some(TokenKind::IntValue(_)) => ValueDispatch::Int,
            Some(TokenKind::FloatValue(_)) => ValueDispatch::Float,
            Some(TokenKind::StringValue(_)) => ValueDispatch::String,
            Some(TokenKind::Name(name)) => match name.as_ref() {
                "true" => ValueDispatch::Boolean(true),
                "false" => ValueDispatch::Boolean(false),
                "null" => ValueDispatch::Null,
                _ => ValueDispatch::Enum,
            },
            Some(TokenKind::Dollar) => ValueDispatch::Variable,
            _ => ValueDispatch::Unexpected,
        };

        match dispatch {
            ValueDispatch::List => self.parse_list_value(is_const),
            ValueDispatch::Object => self.parse_object_value(is_const),
            ValueDispatch::Int => self.parse_int_value(),
            ValueDispatch::Float => self.parse_float_value(),
            ValueDispatch::String => self.parse_string_token().map(ast::Value::String),
            ValueDispatch::Boolean(value) => {
                let token = self.consume_token().unwrap();
                Ok(ast::Value::Boolean(ast::BooleanValue {
                    span: token.span,
                    value,
                }))
            }
            ValueDispatch::Null => {
                let token = self.consume_token().unwrap();
                Ok(ast::Value::Null(ast::NullValue { span: token.span }))
            }
            ValueDispatch::Enum => {
                let token = self.consume_token().unwrap();
                let value = match token.kind {
                    TokenKind::Name(value) => value,
                    _ => unreachable!("peeked Name"),
                };
                Ok(ast::Value::Enum(ast::EnumValue {
                    span: token.span,
                    value,
                }))
            }
            ValueDispatch::Variable => {
                if is_const {
                    // Variables are forbidden in const contexts (default
                    // values, const directive arguments).
                    return Err(self.unexpected_err());
                }
                self.parse_variable().map(ast::Value::Variable)
            }
            ValueDispatch::Unexpected => Err(self.unexpected_err()),
        }
    }

    /// Parses `[value*]`; the list may be empty.
    fn parse_list_value(&mut self, is_const: bool) -> Result<ast::Value<'src>, SyntaxError> {
        let start = self.current_start();
        let values = self.any(
            &TokenKind::SquareBracketOpen,
            |p| p.parse_value_literal(is_const),
            &TokenKind::SquareBracketClose,
        )?;
        Ok(ast::Value::List(ast::ListValue {
            span: self.make_span(start),
            values,
        }))
    }

    /// Parses `{ name: value ... }`; the object may be empty.
    fn parse_object_value(&mut self, is_const: bool) -> Result<ast::Value<'src>, SyntaxError> {
        let start = self.current_start();
        let fields = self.any(
            &TokenKind::CurlyBraceOpen,
            |p| p.parse_object_field(is_const),
            &TokenKind::CurlyBraceClose,
        )?;
        Ok(ast::Value::Object(ast::ObjectValue {
            span: self.make_span(start),
            fields,
        }))
    }

    /// Parses a single `name: value` entry of an object value.
    fn parse_object_field(
        &mut self,
        is_const: bool,
    ) -> Result<ast::ObjectField<'src>, SyntaxError> {
        let start = self.current_start();
        let name = self.parse_name()?;
        self.expect_token(&TokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(ast::ObjectField {
            span: self.make_span(start),
            name,
            value,
        })
    }

    /// Converts the current `IntValue` token into an `i32` node. GraphQL
    /// Int is 32-bit; out-of-range literals are an error here.
    fn parse_int_value(&mut self) -> Result<ast::Value<'src>, SyntaxError> {
        let token = self.consume_token().unwrap();
        let raw = match &token.kind {
            TokenKind::IntValue(raw) => raw.clone().into_owned(),
            _ => unreachable!("peeked IntValue"),
        };
        match token.kind.parse_int_value() {
            Some(Ok(value)) => Ok(ast::Value::Int(ast::IntValue {
                span: token.span,
                value,
            })),
            _ => Err(self.invalid_literal(
                token.span,
                format!("integer `{raw}` does not fit in 32 bits"),
            )),
        }
    }

    /// Converts the current `FloatValue` token into an `f64` node.
    fn parse_float_value(&mut self) -> Result<ast::Value<'src>, SyntaxError> {
        let token = self.consume_token().unwrap();
        let raw = match &token.kind {
            TokenKind::FloatValue(raw) => raw.clone().into_owned(),
            _ => unreachable!("peeked FloatValue"),
        };
        match token.kind.parse_float_value() {
            Some(Ok(value)) if value.is_finite() => Ok(ast::Value::Float(ast::FloatValue {
                span: token.span,
                value,
            })),
            _ => Err(self.invalid_literal(
                token.span,
                format!("float `{raw}` is not a finite number"),
            )),
        }
    }

    /// Consumes the current `StringValue` token and resolves its content.
    /// The caller has already checked the token class.
    fn parse_string_token(&mut self) -> Result<ast::StringValue<'src>, SyntaxError> {
        let token = self.consume_token().unwrap();
        let is_block = matches!(
            &token.kind,
            TokenKind::StringValue(raw) if raw.starts_with("\"\"\"")
        );
        match token.kind.parse_string_value() {
            Some(Ok(value)) => Ok(ast::StringValue {
                span: token.span,
                value: Cow::Owned(value),
                is_block,
            }),
            Some(Err(error)) => Err(self.invalid_literal(token.span, error.to_string())),
            None => unreachable!("peeked StringValue"),
        }
    }

    // =========================================================================
    // Type references
    // =========================================================================

    /// Parses a type reference: `Name`, `[Type]`, with an optional trailing
    /// `!` wrapping the result exactly once.
    fn parse_type_reference(&mut self) -> Result<ast::Type<'src>, SyntaxError> {
        self.enter_recursion()?;
        let result = self.parse_type_reference_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_reference_impl(&mut self) -> Result<ast::Type<'src>, SyntaxError> {
        let start = self.current_start();

        let base = if self.expect_optional_token(&TokenKind::SquareBracketOpen).is_some() {
            let ty = self.parse_type_reference()?;
            self.expect_token(&TokenKind::SquareBracketClose)?;
            ast::Type::List(Box::new(ast::ListType {
                span: self.make_span(start),
                ty,
            }))
        } else {
            ast::Type::Named(self.parse_named_type()?)
        };

        if self.expect_optional_token(&TokenKind::Bang).is_some() {
            Ok(ast::Type::NonNull(Box::new(ast::NonNullType {
                span: self.make_span(start),
                ty: base,
            })))
        } else {
            Ok(base)
        }
    }

    /// Parses a named type: a bare name.
    fn parse_named_type(&mut self) -> Result<ast::NamedType<'src>, SyntaxError> {
        let name = self.parse_name()?;
        Ok(ast::NamedType {
            span: name.span,
            name,
        })
    }

    // =========================================================================
    // Fragment definitions
    // =========================================================================

    /// Parses `fragment Name on Type @directives { selections }`.
    fn parse_fragment_definition(
        &mut self,
    ) -> Result<ast::FragmentDefinition<'src>, SyntaxError> {
        let start = self.current_start();
        self.expect_keyword("fragment")?;
        let name = self.parse_fragment_name()?;
        self.expect_keyword("on")?;
        let type_condition = self.parse_named_type()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::FragmentDefinition {
            span: self.make_span(start),
            name,
            type_condition,
            directives,
            selection_set,
        })
    }

    // =========================================================================
    // Type system definitions
    // =========================================================================

    /// Dispatches a type-system definition.
    ///
    /// The definition may start with a description string, in which case
    /// the dispatch keyword is one token ahead — the grammar's only use of
    /// lookahead. The description itself is consumed by the sub-production.
    fn parse_type_system_definition(&mut self) -> Result<ast::Definition<'src>, SyntaxError> {
        let n = if self.peek_is_string() { 1 } else { 0 };
        let keyword = match self.token_stream.peek_nth(n) {
            Some(Token {
                kind: TokenKind::Name(name),
                ..
            }) => Some(name.clone().into_owned()),
            _ => None,
        };

        match keyword.as_deref() {
            Some("schema") => self.parse_schema_definition().map(ast::Definition::Schema),
            Some("scalar") => self
                .parse_scalar_type_definition()
                .map(|d| ast::Definition::Type(ast::TypeDefinition::Scalar(d))),
            Some("type") => self
                .parse_object_type_definition()
                .map(|d| ast::Definition::Type(ast::TypeDefinition::Object(d))),
            Some("interface") => self
                .parse_interface_type_definition()
                .map(|d| ast::Definition::Type(ast::TypeDefinition::Interface(d))),
            Some("union") => self
                .parse_union_type_definition()
                .map(|d| ast::Definition::Type(ast::TypeDefinition::Union(d))),
            Some("enum") => self
                .parse_enum_type_definition()
                .map(|d| ast::Definition::Type(ast::TypeDefinition::Enum(d))),
            Some("input") => self
                .parse_input_object_type_definition()
                .map(|d| ast::Definition::Type(ast::TypeDefinition::InputObject(d))),
            Some("directive") => self
                .parse_directive_definition()
                .map(ast::Definition::Directive),
            _ => Err(self.syntax_error_at(n, None)),
        }
    }

    /// Parses an optional leading description string.
    fn parse_description(&mut self) -> Result<Option<ast::StringValue<'src>>, SyntaxError> {
        if self.peek_is_string() {
            Ok(Some(self.parse_string_token()?))
        } else {
            Ok(None)
        }
    }

    /// Parses `schema @directives { operation: Type ... }`.
    fn parse_schema_definition(&mut self) -> Result<ast::SchemaDefinition<'src>, SyntaxError> {
        let start = self.current_start();
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(true)?;
        let operation_types = self.many(
            &TokenKind::CurlyBraceOpen,
            Self::parse_operation_type_definition,
            &TokenKind::CurlyBraceClose,
        )?;
        Ok(ast::SchemaDefinition {
            span: self.make_span(start),
            directives,
            operation_types,
        })
    }

    /// Parses a single `operation: NamedType` entry of a schema block.
    fn parse_operation_type_definition(
        &mut self,
    ) -> Result<ast::OperationTypeDefinition<'src>, SyntaxError> {
        let start = self.current_start();
        let operation = self.parse_operation_kind()?;
        self.expect_token(&TokenKind::Colon)?;
        let named_type = self.parse_named_type()?;
        Ok(ast::OperationTypeDefinition {
            span: self.make_span(start),
            operation,
            named_type,
        })
    }

    /// Parses `scalar Name @directives`.
    fn parse_scalar_type_definition(
        &mut self,
    ) -> Result<ast::ScalarTypeDefinition<'src>, SyntaxError> {
        let start = self.current_start();
        let description = self.parse_description()?;
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        Ok(ast::ScalarTypeDefinition {
            span: self.make_span(start),
            description,
            name,
            directives,
        })
    }

    /// Parses `type Name implements ... @directives { fields }`.
    fn parse_object_type_definition(
        &mut self,
    ) -> Result<ast::ObjectTypeDefinition<'src>, SyntaxError> {
        let start = self.current_start();
        let description = self.parse_description()?;
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;
        Ok(ast::ObjectTypeDefinition {
            span: self.make_span(start),
            description,
            name,
            interfaces,
            directives,
            fields,
        })
    }

    /// Parses `implements &? NamedType (& NamedType)*` if present.
    fn parse_implements_interfaces(
        &mut self,
    ) -> Result<Vec<ast::NamedType<'src>>, SyntaxError> {
        if self.expect_optional_keyword("implements").is_none() {
            return Ok(Vec::new());
        }
        // Optional leading `&`.
        self.expect_optional_token(&TokenKind::Ampersand);
        let mut interfaces = vec![self.parse_named_type()?];
        while self.expect_optional_token(&TokenKind::Ampersand).is_some() {
            interfaces.push(self.parse_named_type()?);
        }
        Ok(interfaces)
    }

    /// Parses `{ FieldDefinition+ }` if present.
    fn parse_fields_definition(
        &mut self,
    ) -> Result<Vec<ast::FieldDefinition<'src>>, SyntaxError> {
        self.optional_many(
            &TokenKind::CurlyBraceOpen,
            Self::parse_field_definition,
            &TokenKind::CurlyBraceClose,
        )
    }

    /// Parses `name(args): Type @directives` with an optional description.
    fn parse_field_definition(&mut self) -> Result<ast::FieldDefinition<'src>, SyntaxError> {
        let start = self.current_start();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments_definition()?;
        self.expect_token(&TokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let directives = self.parse_directives(true)?;
        Ok(ast::FieldDefinition {
            span: self.make_span(start),
            description,
            name,
            arguments,
            ty,
            directives,
        })
    }

    /// Parses `(InputValueDefinition+)` if present.
    fn parse_arguments_definition(
        &mut self,
    ) -> Result<Vec<ast::InputValueDefinition<'src>>, SyntaxError> {
        self.optional_many(
            &TokenKind::ParenOpen,
            Self::parse_input_value_definition,
            &TokenKind::ParenClose,
        )
    }

    /// Parses `name: Type = default @directives` with an optional
    /// description. The default value is a const context.
    fn parse_input_value_definition(
        &mut self,
    ) -> Result<ast::InputValueDefinition<'src>, SyntaxError> {
        let start = self.current_start();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        self.expect_token(&TokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let default_value = if self.expect_optional_token(&TokenKind::Equals).is_some() {
            Some(self.parse_value_literal(true)?)
        } else {
            None
        };
        let directives = self.parse_directives(true)?;
        Ok(ast::InputValueDefinition {
            span: self.make_span(start),
            description,
            name,
            ty,
            default_value,
            directives,
        })
    }

    /// Parses `interface Name @directives { fields }`.
    fn parse_interface_type_definition(
        &mut self,
    ) -> Result<ast::InterfaceTypeDefinition<'src>, SyntaxError> {
        let start = self.current_start();
        let description = self.parse_description()?;
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;
        Ok(ast::InterfaceTypeDefinition {
            span: self.make_span(start),
            description,
            name,
            directives,
            fields,
        })
    }

    /// Parses `union Name @directives = |? A | B`.
    fn parse_union_type_definition(
        &mut self,
    ) -> Result<ast::UnionTypeDefinition<'src>, SyntaxError> {
        let start = self.current_start();
        let description = self.parse_description()?;
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let types = self.parse_union_member_types()?;
        Ok(ast::UnionTypeDefinition {
            span: self.make_span(start),
            description,
            name,
            directives,
            types,
        })
    }

    /// Parses `= |? NamedType (| NamedType)*` if present.
    fn parse_union_member_types(&mut self) -> Result<Vec<ast::NamedType<'src>>, SyntaxError> {
        if self.expect_optional_token(&TokenKind::Equals).is_none() {
            return Ok(Vec::new());
        }
        // Optional leading `|`.
        self.expect_optional_token(&TokenKind::Pipe);
        let mut types = vec![self.parse_named_type()?];
        while self.expect_optional_token(&TokenKind::Pipe).is_some() {
            types.push(self.parse_named_type()?);
        }
        Ok(types)
    }

    /// Parses `enum Name @directives { EnumValueDefinition+ }`.
    fn parse_enum_type_definition(
        &mut self,
    ) -> Result<ast::EnumTypeDefinition<'src>, SyntaxError> {
        let start = self.current_start();
        let description = self.parse_description()?;
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let values = self.optional_many(
            &TokenKind::CurlyBraceOpen,
            Self::parse_enum_value_definition,
            &TokenKind::CurlyBraceClose,
        )?;
        Ok(ast::EnumTypeDefinition {
            span: self.make_span(start),
            description,
            name,
            directives,
            values,
        })
    }

    /// Parses a single enum value definition. The value name may not be
    /// `true`, `false`, or `null` — those are ambiguous with literals.
    fn parse_enum_value_definition(
        &mut self,
    ) -> Result<ast::EnumValueDefinition<'src>, SyntaxError> {
        let start = self.current_start();
        let description = self.parse_description()?;
        if self.peek_is_keyword("true")
            || self.peek_is_keyword("false")
            || self.peek_is_keyword("null")
        {
            return Err(self.unexpected_err());
        }
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        Ok(ast::EnumValueDefinition {
            span: self.make_span(start),
            description,
            name,
            directives,
        })
    }

    /// Parses `input Name @directives { InputValueDefinition+ }`.
    fn parse_input_object_type_definition(
        &mut self,
    ) -> Result<ast::InputObjectTypeDefinition<'src>, SyntaxError> {
        let start = self.current_start();
        let description = self.parse_description()?;
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let fields = self.optional_many(
            &TokenKind::CurlyBraceOpen,
            Self::parse_input_value_definition,
            &TokenKind::CurlyBraceClose,
        )?;
        Ok(ast::InputObjectTypeDefinition {
            span: self.make_span(start),
            description,
            name,
            directives,
            fields,
        })
    }

    /// Parses `directive @name(args) repeatable? on |? LOCATION (| ...)*`.
    fn parse_directive_definition(
        &mut self,
    ) -> Result<ast::DirectiveDefinition<'src>, SyntaxError> {
        let start = self.current_start();
        let description = self.parse_description()?;
        self.expect_keyword("directive")?;
        self.expect_token(&TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments_definition()?;
        let repeatable = self.expect_optional_keyword("repeatable").is_some();
        self.expect_keyword("on")?;
        let locations = self.parse_directive_locations()?;
        Ok(ast::DirectiveDefinition {
            span: self.make_span(start),
            description,
            name,
            arguments,
            repeatable,
            locations,
        })
    }

    /// Parses `|? LOCATION (| LOCATION)*`.
    fn parse_directive_locations(
        &mut self,
    ) -> Result<Vec<ast::DirectiveLocation>, SyntaxError> {
        // Optional leading `|`.
        self.expect_optional_token(&TokenKind::Pipe);
        let mut locations = vec![self.parse_directive_location()?];
        while self.expect_optional_token(&TokenKind::Pipe).is_some() {
            locations.push(self.parse_directive_location()?);
        }
        Ok(locations)
    }

    /// Parses a single directive location name. A name outside the fixed
    /// location set is a syntax error at its position.
    fn parse_directive_location(&mut self) -> Result<ast::DirectiveLocation, SyntaxError> {
        let location = match self.peek_kind() {
            Some(TokenKind::Name(name)) => ast::DirectiveLocation::from_name(name.as_ref()),
            _ => None,
        };
        match location {
            Some(location) => {
                self.consume_token();
                Ok(location)
            }
            None => Err(self.unexpected_err()),
        }
    }

    // =========================================================================
    // Type system extensions
    // =========================================================================

    /// Dispatches `extend <keyword> ...` on the keyword after `extend`.
    fn parse_type_system_extension(&mut self) -> Result<ast::Definition<'src>, SyntaxError> {
        let start = self.current_start();
        self.expect_keyword("extend")?;

        let keyword = match self.peek_kind() {
            Some(TokenKind::Name(name)) => Some(name.clone().into_owned()),
            _ => None,
        };

        match keyword.as_deref() {
            Some("schema") => self
                .parse_schema_extension(start)
                .map(ast::Definition::SchemaExtension),
            Some("scalar") => self
                .parse_scalar_type_extension(start)
                .map(|e| ast::Definition::TypeExtension(ast::TypeExtension::Scalar(e))),
            Some("type") => self
                .parse_object_type_extension(start)
                .map(|e| ast::Definition::TypeExtension(ast::TypeExtension::Object(e))),
            Some("interface") => self
                .parse_interface_type_extension(start)
                .map(|e| ast::Definition::TypeExtension(ast::TypeExtension::Interface(e))),
            Some("union") => self
                .parse_union_type_extension(start)
                .map(|e| ast::Definition::TypeExtension(ast::TypeExtension::Union(e))),
            Some("enum") => self
                .parse_enum_type_extension(start)
                .map(|e| ast::Definition::TypeExtension(ast::TypeExtension::Enum(e))),
            Some("input") => self
                .parse_input_object_type_extension(start)
                .map(|e| ast::Definition::TypeExtension(ast::TypeExtension::InputObject(e))),
            _ => Err(self.unexpected_err()),
        }
    }

    /// Parses `extend schema @directives { operation types }`. At least one
    /// extending clause is required.
    fn parse_schema_extension(
        &mut self,
        start: SourcePosition,
    ) -> Result<ast::SchemaExtension<'src>, SyntaxError> {
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(true)?;
        let operation_types = self.optional_many(
            &TokenKind::CurlyBraceOpen,
            Self::parse_operation_type_definition,
            &TokenKind::CurlyBraceClose,
        )?;
        if directives.is_empty() && operation_types.is_empty() {
            return Err(self.unexpected_err());
        }
        Ok(ast::SchemaExtension {
            span: self.make_span(start),
            directives,
            operation_types,
        })
    }

    /// Parses `extend scalar Name @directives`. The directive list is the
    /// only extending clause a scalar has, so it must be non-empty.
    fn parse_scalar_type_extension(
        &mut self,
        start: SourcePosition,
    ) -> Result<ast::ScalarTypeExtension<'src>, SyntaxError> {
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        if directives.is_empty() {
            return Err(self.unexpected_err());
        }
        Ok(ast::ScalarTypeExtension {
            span: self.make_span(start),
            name,
            directives,
        })
    }

    /// Parses `extend type Name implements? @directives? fields?` with at
    /// least one extending clause.
    fn parse_object_type_extension(
        &mut self,
        start: SourcePosition,
    ) -> Result<ast::ObjectTypeExtension<'src>, SyntaxError> {
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;
        if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
            return Err(self.unexpected_err());
        }
        Ok(ast::ObjectTypeExtension {
            span: self.make_span(start),
            name,
            interfaces,
            directives,
            fields,
        })
    }

    /// Parses `extend interface Name @directives? fields?` with at least
    /// one extending clause.
    fn parse_interface_type_extension(
        &mut self,
        start: SourcePosition,
    ) -> Result<ast::InterfaceTypeExtension<'src>, SyntaxError> {
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;
        if directives.is_empty() && fields.is_empty() {
            return Err(self.unexpected_err());
        }
        Ok(ast::InterfaceTypeExtension {
            span: self.make_span(start),
            name,
            directives,
            fields,
        })
    }

    /// Parses `extend union Name @directives? members?` with at least one
    /// extending clause.
    fn parse_union_type_extension(
        &mut self,
        start: SourcePosition,
    ) -> Result<ast::UnionTypeExtension<'src>, SyntaxError> {
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let types = self.parse_union_member_types()?;
        if directives.is_empty() && types.is_empty() {
            return Err(self.unexpected_err());
        }
        Ok(ast::UnionTypeExtension {
            span: self.make_span(start),
            name,
            directives,
            types,
        })
    }

    /// Parses `extend enum Name @directives? values?` with at least one
    /// extending clause.
    fn parse_enum_type_extension(
        &mut self,
        start: SourcePosition,
    ) -> Result<ast::EnumTypeExtension<'src>, SyntaxError> {
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let values = self.optional_many(
            &TokenKind::CurlyBraceOpen,
            Self::parse_enum_value_definition,
            &TokenKind::CurlyBraceClose,
        )?;
        if directives.is_empty() && values.is_empty() {
            return Err(self.unexpected_err());
        }
        Ok(ast::EnumTypeExtension {
            span: self.make_span(start),
            name,
            directives,
            values,
        })
    }

    /// Parses `extend input Name @directives? fields?` with at least one
    /// extending clause.
    fn parse_input_object_type_extension(
        &mut self,
        start: SourcePosition,
    ) -> Result<ast::InputObjectTypeExtension<'src>, SyntaxError> {
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let fields = self.optional_many(
            &TokenKind::CurlyBraceOpen,
            Self::parse_input_value_definition,
            &TokenKind::CurlyBraceClose,
        )?;
        if directives.is_empty() && fields.is_empty() {
            return Err(self.unexpected_err());
        }
        Ok(ast::InputObjectTypeExtension {
            span: self.make_span(start),
            name,
            directives,
            fields,
        })
    }
}

// =============================================================================
// Token matching
// =============================================================================

/// Compares token kinds: payload-carrying variants match as a class
/// (payload ignored), unit variants by identity.
///
/// Exhaustive on `actual` so a new `TokenKind` variant must be classified
/// here before the crate compiles.
fn token_kinds_match(actual: &TokenKind<'_>, expected: &TokenKind<'_>) -> bool {
    match actual {
        TokenKind::Name(_) => matches!(expected, TokenKind::Name(_)),
        TokenKind::IntValue(_) => matches!(expected, TokenKind::IntValue(_)),
        TokenKind::FloatValue(_) => matches!(expected, TokenKind::FloatValue(_)),
        TokenKind::StringValue(_) => matches!(expected, TokenKind::StringValue(_)),
        TokenKind::Error { .. } => matches!(expected, TokenKind::Error { .. }),
        TokenKind::Ampersand
        | TokenKind::At
        | TokenKind::Bang
        | TokenKind::Colon
        | TokenKind::CurlyBraceClose
        | TokenKind::CurlyBraceOpen
        | TokenKind::Dollar
        | TokenKind::Ellipsis
        | TokenKind::Equals
        | TokenKind::ParenClose
        | TokenKind::ParenOpen
        | TokenKind::Pipe
        | TokenKind::SquareBracketClose
        | TokenKind::SquareBracketOpen
        | TokenKind::Eof => actual == expected,
    }
}

/// Display string for a concrete token, used as the `got` of errors.
fn token_kind_display(kind: &TokenKind<'_>) -> String {
    match kind {
        TokenKind::Ampersand => "&".to_string(),
        TokenKind::At => "@".to_string(),
        TokenKind::Bang => "!".to_string(),
        TokenKind::Colon => ":".to_string(),
        TokenKind::CurlyBraceClose => "}".to_string(),
        TokenKind::CurlyBraceOpen => "{".to_string(),
        TokenKind::Dollar => "$".to_string(),
        TokenKind::Ellipsis => "...".to_string(),
        TokenKind::Equals => "=".to_string(),
        TokenKind::ParenClose => ")".to_string(),
        TokenKind::ParenOpen => "(".to_string(),
        TokenKind::Pipe => "|".to_string(),
        TokenKind::SquareBracketClose => "]".to_string(),
        TokenKind::SquareBracketOpen => "[".to_string(),
        TokenKind::Name(s) => s.to_string(),
        TokenKind::IntValue(s) => s.to_string(),
        TokenKind::FloatValue(s) => s.to_string(),
        TokenKind::StringValue(s) => s.to_string(),
        TokenKind::Eof => "<EOF>".to_string(),
        TokenKind::Error { message } => message.clone(),
    }
}

/// Display string for an expected kind, used as the `expected` of errors.
/// Payload classes display as their class name.
fn expected_display(kind: &TokenKind<'_>) -> String {
    match kind {
        TokenKind::Name(_) => "Name".to_string(),
        TokenKind::IntValue(_) => "Int".to_string(),
        TokenKind::FloatValue(_) => "Float".to_string(),
        TokenKind::StringValue(_) => "String".to_string(),
        other => token_kind_display(other),
    }
}
