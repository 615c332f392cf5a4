//! Declaration parser for the C# subset.
//!
//! Recursive descent over the token stream, tuned for one job: find every
//! namespace, class, constructor, and method signature, and structurally skip
//! everything else. The parser is lenient (input that is not C# at all
//! produces an empty file unit rather than an error) and only reports
//! `SyntaxError`s for declarations that start well but end badly (EOF inside
//! a class body or parameter list).

use crate::frontend::ast::{ClassDecl, Decl, FileUnit, NamespaceDecl, RawMethod, RawParam, Span};
use crate::frontend::diagnostics::SyntaxError;
use crate::frontend::lexer::{Token, TokenKind};

/// Member and type modifiers recognized (and collected) before declarations.
const MODIFIERS: &[&str] = &[
    "public", "private", "protected", "internal", "static", "virtual", "override", "abstract",
    "sealed", "async", "readonly", "unsafe", "extern", "new", "partial", "required", "file",
];

/// Parameter modifiers that are consumed and discarded.
const PARAM_MODIFIERS: &[&str] = &["ref", "out", "in", "params", "this", "scoped", "readonly"];

/// Parse a token stream into a file unit.
pub fn parse(tokens: &[Token]) -> Result<FileUnit, Vec<SyntaxError>> {
    if tokens.is_empty() {
        return Ok(FileUnit::default());
    }
    Parser::new(tokens).parse()
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    fn parse(mut self) -> Result<FileUnit, Vec<SyntaxError>> {
        let mut decls = Vec::new();
        while !self.at_eof() {
            self.container_item(&mut decls);
        }
        if self.errors.is_empty() {
            Ok(FileUnit { decls })
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Containers: file level and namespace bodies
    // ========================================================================

    /// One item at file or namespace level. Guarantees progress: every path
    /// consumes at least one token.
    fn container_item(&mut self, decls: &mut Vec<Decl>) {
        match self.peek() {
            TokenKind::Ident(id) if id == "using" => {
                self.advance();
                self.skip_to_semi();
            }
            TokenKind::Ident(id) if id == "namespace" => {
                self.advance();
                self.namespace_decl(decls);
            }
            TokenKind::LBracket => self.skip_balanced(&TokenKind::LBracket, &TokenKind::RBracket),
            TokenKind::Semi | TokenKind::RBrace => {
                self.advance();
            }
            _ => self.type_decl_or_junk(decls),
        }
    }

    fn namespace_decl(&mut self, decls: &mut Vec<Decl>) {
        let start = self.span().start;
        let name = self.qualified_name();
        if name.is_empty() {
            // `namespace` not followed by a name: treat as junk
            self.skip_to_semi();
            return;
        }
        let mut children = Vec::new();
        match self.peek() {
            TokenKind::LBrace => {
                self.advance();
                while !self.at_eof() && !matches!(self.peek(), TokenKind::RBrace) {
                    self.container_item(&mut children);
                }
                if matches!(self.peek(), TokenKind::RBrace) {
                    self.advance();
                } else {
                    self.errors.push(SyntaxError::new(
                        format!("unexpected end of file in namespace `{name}`"),
                        self.span(),
                    ));
                }
            }
            TokenKind::Semi => {
                // File-scoped namespace: the rest of the file belongs to it
                self.advance();
                while !self.at_eof() {
                    self.container_item(&mut children);
                }
            }
            _ => {
                self.skip_to_semi();
                return;
            }
        }
        decls.push(Decl::Namespace(NamespaceDecl {
            name,
            decls: children,
            span: Span::new(start, self.prev_end()),
        }));
    }

    /// Modifiers followed by a type declaration, or arbitrary junk.
    fn type_decl_or_junk(&mut self, decls: &mut Vec<Decl>) {
        let start = self.pos;
        let mods = self.modifiers();
        match self.peek() {
            TokenKind::Ident(id) if id == "class" => {
                self.advance();
                match self.class_decl(mods) {
                    Ok(class) => decls.push(Decl::Class(class)),
                    Err(e) => self.errors.push(e),
                }
            }
            TokenKind::Ident(id) if matches!(id.as_str(), "interface" | "struct" | "enum" | "record") => {
                self.advance();
                if self.ident_is("class") || self.ident_is("struct") {
                    self.advance();
                }
                self.skip_type_like_decl();
            }
            TokenKind::Ident(id) if id == "delegate" => {
                self.advance();
                self.skip_to_semi();
            }
            _ => {
                // Not a declaration we know. Consume something so the caller
                // always makes progress, then resynchronize on a semicolon.
                if self.pos == start {
                    self.advance();
                } else {
                    self.skip_to_semi();
                }
            }
        }
    }

    // ========================================================================
    // Classes and members
    // ========================================================================

    /// Parse a class declaration; the `class` keyword is already consumed.
    fn class_decl(&mut self, modifiers: Vec<String>) -> Result<ClassDecl, SyntaxError> {
        let start = self.span().start;
        let Some(name) = self.take_ident() else {
            return Err(SyntaxError::new("expected class name", self.span()));
        };
        let mut class = ClassDecl {
            name: name.clone(),
            modifiers,
            constructors: Vec::new(),
            methods: Vec::new(),
            nested: Vec::new(),
            span: Span::new(start, start),
        };

        if matches!(self.peek(), TokenKind::Lt) {
            self.skip_balanced(&TokenKind::Lt, &TokenKind::Gt);
        }
        // Primary constructor parameter list (class Point(int x, int y))
        if matches!(self.peek(), TokenKind::LParen) {
            let span = self.span();
            let params = self.param_list()?;
            class.constructors.push(RawMethod {
                name: name.clone(),
                modifiers: Vec::new(),
                return_type: None,
                params,
                span,
            });
        }
        // Base list and constraint clauses
        while !self.at_eof() && !matches!(self.peek(), TokenKind::LBrace | TokenKind::Semi) {
            self.advance();
        }
        match self.peek() {
            TokenKind::Semi => {
                // Bodyless `class Foo;` form
                self.advance();
                class.span = Span::new(start, self.prev_end());
                return Ok(class);
            }
            TokenKind::LBrace => {
                self.advance();
            }
            _ => {
                return Err(SyntaxError::new(
                    format!("unexpected end of file in declaration of class `{name}`"),
                    self.span(),
                ));
            }
        }

        while !self.at_eof() && !matches!(self.peek(), TokenKind::RBrace) {
            self.member(&mut class);
        }
        if matches!(self.peek(), TokenKind::RBrace) {
            self.advance();
        } else {
            return Err(SyntaxError::new(
                format!("unexpected end of file in body of class `{name}`"),
                self.span(),
            ));
        }
        class.span = Span::new(start, self.prev_end());
        Ok(class)
    }

    /// One class member. Records constructors and methods, skips everything
    /// else structurally. Guarantees progress.
    fn member(&mut self, class: &mut ClassDecl) {
        while matches!(self.peek(), TokenKind::LBracket) {
            self.skip_balanced(&TokenKind::LBracket, &TokenKind::RBracket);
        }
        let start = self.pos;
        let span = self.span();
        let mods = self.modifiers();

        match self.peek() {
            TokenKind::Ident(id) if id == "class" => {
                self.advance();
                match self.class_decl(mods) {
                    Ok(nested) => class.nested.push(nested),
                    Err(e) => self.errors.push(e),
                }
                return;
            }
            TokenKind::Ident(id) if matches!(id.as_str(), "interface" | "struct" | "enum" | "record") => {
                self.advance();
                if self.ident_is("class") || self.ident_is("struct") {
                    self.advance();
                }
                self.skip_type_like_decl();
                return;
            }
            TokenKind::Ident(id) if id == "delegate" => {
                self.advance();
                self.skip_to_semi();
                return;
            }
            TokenKind::Ident(id) if id == "event" => {
                self.advance();
                self.skip_member_tail();
                return;
            }
            // Destructor: ~Foo() { ... }
            TokenKind::Punct('~') => {
                self.advance();
                self.skip_member_tail();
                return;
            }
            _ => {}
        }

        // Constructor: the class's own name directly followed by `(`
        let at_constructor = matches!(self.peek(), TokenKind::Ident(id) if *id == class.name)
            && matches!(self.peek_nth(1), TokenKind::LParen);
        if at_constructor {
            self.advance();
            match self.param_list() {
                Ok(params) => {
                    self.skip_member_tail();
                    class.constructors.push(RawMethod {
                        name: class.name.clone(),
                        modifiers: mods,
                        return_type: None,
                        params,
                        span,
                    });
                }
                Err(e) => self.errors.push(e),
            }
            return;
        }

        // Everything else starts with a type
        let Some(ty) = self.type_text() else {
            if self.pos == start {
                self.advance();
            } else {
                self.skip_to_semi();
            }
            return;
        };
        if ty == "implicit" || ty == "explicit" {
            // Conversion operator
            self.skip_member_tail();
            return;
        }

        // Member name, possibly qualified for explicit interface
        // implementations (int IFoo.Bar(...)); keep the last segment.
        let Some(mut name) = self.take_ident() else {
            self.skip_to_semi();
            return;
        };
        while matches!(self.peek(), TokenKind::Dot) {
            self.advance();
            match self.take_ident() {
                Some(seg) => name = seg,
                None => break,
            }
        }

        if name == "operator" {
            self.skip_member_tail();
            return;
        }
        if name == "this" {
            // Indexer: this[...] { ... }
            if matches!(self.peek(), TokenKind::LBracket) {
                self.skip_balanced(&TokenKind::LBracket, &TokenKind::RBracket);
            }
            self.skip_member_tail();
            return;
        }

        match self.peek() {
            TokenKind::Lt | TokenKind::LParen => {
                if matches!(self.peek(), TokenKind::Lt) {
                    self.skip_balanced(&TokenKind::Lt, &TokenKind::Gt);
                }
                if !matches!(self.peek(), TokenKind::LParen) {
                    self.skip_to_semi();
                    return;
                }
                match self.param_list() {
                    Ok(params) => {
                        self.skip_member_tail();
                        class.methods.push(RawMethod {
                            name,
                            modifiers: mods,
                            return_type: Some(ty),
                            params,
                            span,
                        });
                    }
                    Err(e) => self.errors.push(e),
                }
            }
            TokenKind::LBrace => {
                // Property: skip the accessor block and a possible initializer
                self.skip_balanced(&TokenKind::LBrace, &TokenKind::RBrace);
                if matches!(self.peek(), TokenKind::Eq) {
                    self.skip_to_semi();
                }
            }
            TokenKind::Arrow => {
                // Expression-bodied property
                self.advance();
                self.skip_to_semi();
            }
            _ => {
                // Field (possibly with initializer or multiple declarators)
                self.skip_to_semi();
            }
        }
    }

    // ========================================================================
    // Types and parameters
    // ========================================================================

    /// Parse a type reference and return its canonical text, or `None` if the
    /// current token cannot start a type.
    fn type_text(&mut self) -> Option<String> {
        let mut text = match self.peek() {
            TokenKind::Ident(_) => match self.take_ident() {
                Some(s) => s,
                None => return None,
            },
            TokenKind::LParen => self.tuple_type_text(),
            _ => return None,
        };

        // Qualified path: A.B.C
        while matches!(self.peek(), TokenKind::Dot)
            && matches!(self.peek_nth(1), TokenKind::Ident(_))
        {
            self.advance();
            if let Some(seg) = self.take_ident() {
                text.push('.');
                text.push_str(&seg);
            }
        }

        if matches!(self.peek(), TokenKind::Lt) {
            let args = self.generic_args_text();
            text.push_str(&args);
        }

        loop {
            match self.peek() {
                TokenKind::Question => {
                    self.advance();
                    text.push('?');
                }
                TokenKind::LBracket => {
                    self.advance();
                    text.push('[');
                    while matches!(self.peek(), TokenKind::Comma) {
                        self.advance();
                        text.push(',');
                    }
                    if matches!(self.peek(), TokenKind::RBracket) {
                        self.advance();
                    }
                    text.push(']');
                }
                _ => break,
            }
        }
        Some(text)
    }

    /// `<T, U<V>>` rendered canonically; the leading `<` is current.
    fn generic_args_text(&mut self) -> String {
        self.advance();
        let mut parts: Vec<String> = Vec::new();
        loop {
            match self.peek() {
                TokenKind::Gt => {
                    self.advance();
                    break;
                }
                TokenKind::Comma => {
                    self.advance();
                }
                TokenKind::Eof => break,
                _ => match self.type_text() {
                    Some(t) => parts.push(t),
                    None => {
                        self.advance();
                    }
                },
            }
        }
        format!("<{}>", parts.join(", "))
    }

    /// Tuple type `(int a, string b)` rendered canonically; `(` is current.
    fn tuple_type_text(&mut self) -> String {
        self.advance();
        let mut parts: Vec<String> = Vec::new();
        loop {
            match self.peek() {
                TokenKind::RParen => {
                    self.advance();
                    break;
                }
                TokenKind::Comma => {
                    self.advance();
                }
                TokenKind::Eof => break,
                _ => match self.type_text() {
                    Some(mut t) => {
                        if let Some(element_name) = self.take_ident() {
                            t.push(' ');
                            t.push_str(&element_name);
                        }
                        parts.push(t);
                    }
                    None => {
                        self.advance();
                    }
                },
            }
        }
        format!("({})", parts.join(", "))
    }

    /// Parameter list; the `(` is current. Defaults are skipped, attributes
    /// and parameter modifiers are dropped.
    fn param_list(&mut self) -> Result<Vec<RawParam>, SyntaxError> {
        self.advance(); // LParen
        let mut params = Vec::new();
        loop {
            match self.peek() {
                TokenKind::RParen => {
                    self.advance();
                    return Ok(params);
                }
                TokenKind::Eof => {
                    return Err(SyntaxError::new(
                        "unexpected end of file in parameter list",
                        self.span(),
                    ));
                }
                TokenKind::Comma => {
                    self.advance();
                }
                TokenKind::LBracket => {
                    self.skip_balanced(&TokenKind::LBracket, &TokenKind::RBracket);
                }
                _ => {
                    while self.ident_in(PARAM_MODIFIERS) {
                        self.advance();
                    }
                    let before = self.pos;
                    let type_text = self.type_text().unwrap_or_default();
                    let name = self.take_ident().unwrap_or_default();
                    if matches!(self.peek(), TokenKind::Eq) {
                        self.skip_default_value();
                    }
                    params.push(RawParam { name, type_text });
                    // Malformed parameter: make sure the loop advances
                    if self.pos == before
                        && !matches!(self.peek(), TokenKind::Comma | TokenKind::RParen)
                    {
                        self.advance();
                    }
                }
            }
        }
    }

    /// Skip `= <default expression>` up to the next `,` or `)` at depth 0.
    fn skip_default_value(&mut self) {
        self.advance(); // Eq
        let mut depth = 0usize;
        loop {
            match self.peek() {
                TokenKind::Comma | TokenKind::RParen if depth == 0 => return,
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => {
                    depth += 1;
                    self.advance();
                }
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                    depth = depth.saturating_sub(1);
                    self.advance();
                }
                TokenKind::Eof => return,
                _ => {
                    self.advance();
                }
            }
        }
    }

    // ========================================================================
    // Structural skipping
    // ========================================================================

    /// After a member's parameter list: skip constructor initializers, base
    /// lists, and constraint clauses, then the body (`{...}`, `=> expr;`, or
    /// a bare `;`).
    fn skip_member_tail(&mut self) {
        loop {
            match self.peek() {
                TokenKind::LBrace => {
                    self.skip_balanced(&TokenKind::LBrace, &TokenKind::RBrace);
                    return;
                }
                TokenKind::Arrow => {
                    self.advance();
                    self.skip_to_semi();
                    return;
                }
                TokenKind::Semi => {
                    self.advance();
                    return;
                }
                TokenKind::LParen => {
                    self.skip_balanced(&TokenKind::LParen, &TokenKind::RParen);
                }
                TokenKind::Eof | TokenKind::RBrace => return,
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Skip an interface/struct/enum/record declaration we do not model.
    fn skip_type_like_decl(&mut self) {
        loop {
            match self.peek() {
                TokenKind::LBrace => {
                    self.skip_balanced(&TokenKind::LBrace, &TokenKind::RBrace);
                    if matches!(self.peek(), TokenKind::Semi) {
                        self.advance();
                    }
                    return;
                }
                TokenKind::LParen => {
                    self.skip_balanced(&TokenKind::LParen, &TokenKind::RParen);
                }
                TokenKind::Semi => {
                    self.advance();
                    return;
                }
                TokenKind::Eof => return,
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Consume tokens through the next `;` at delimiter depth 0. Stops
    /// without consuming at a closing delimiter that would unbalance the
    /// surrounding container, and at EOF.
    fn skip_to_semi(&mut self) {
        let mut depth = 0usize;
        loop {
            match self.peek() {
                TokenKind::Semi if depth == 0 => {
                    self.advance();
                    return;
                }
                TokenKind::LBrace | TokenKind::LParen | TokenKind::LBracket => {
                    depth += 1;
                    self.advance();
                }
                TokenKind::RBrace | TokenKind::RParen | TokenKind::RBracket => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                    self.advance();
                }
                TokenKind::Eof => return,
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Consume a balanced `open ... close` region; `open` is current.
    fn skip_balanced(&mut self, open: &TokenKind, close: &TokenKind) {
        let mut depth = 0usize;
        while !self.at_eof() {
            let kind = self.peek().clone();
            self.advance();
            if kind == *open {
                depth += 1;
            } else if kind == *close {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return;
                }
            }
        }
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    fn peek(&self) -> &TokenKind {
        &self.tokens[self.pos.min(self.tokens.len() - 1)].kind
    }

    fn peek_nth(&self, n: usize) -> &TokenKind {
        &self.tokens[(self.pos + n).min(self.tokens.len() - 1)].kind
    }

    fn span(&self) -> Span {
        self.tokens[self.pos.min(self.tokens.len() - 1)].span
    }

    fn prev_end(&self) -> usize {
        if self.pos == 0 {
            0
        } else {
            self.tokens[(self.pos - 1).min(self.tokens.len() - 1)].span.end
        }
    }

    fn at_eof(&self) -> bool {
        matches!(self.peek(), TokenKind::Eof)
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
    }

    fn take_ident(&mut self) -> Option<String> {
        if let TokenKind::Ident(s) = self.peek() {
            let s = s.clone();
            self.advance();
            Some(s)
        } else {
            None
        }
    }

    fn ident_is(&self, word: &str) -> bool {
        matches!(self.peek(), TokenKind::Ident(s) if s == word)
    }

    fn ident_in(&self, words: &[&str]) -> bool {
        matches!(self.peek(), TokenKind::Ident(s) if words.contains(&s.as_str()))
    }

    fn modifiers(&mut self) -> Vec<String> {
        let mut mods = Vec::new();
        while self.ident_in(MODIFIERS) {
            if let Some(m) = self.take_ident() {
                mods.push(m);
            }
        }
        mods
    }

    /// `A.B.C` as a single dotted string; empty if no identifier is current.
    fn qualified_name(&mut self) -> String {
        let mut name = match self.take_ident() {
            Some(s) => s,
            None => return String::new(),
        };
        while matches!(self.peek(), TokenKind::Dot)
            && matches!(self.peek_nth(1), TokenKind::Ident(_))
        {
            self.advance();
            if let Some(seg) = self.take_ident() {
                name.push('.');
                name.push_str(&seg);
            }
        }
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::lexer::lex;

    fn parse_ok(source: &str) -> FileUnit {
        parse(&lex(source)).expect("parse failed")
    }

    fn first_class(file: &FileUnit) -> &ClassDecl {
        for decl in &file.decls {
            match decl {
                Decl::Class(c) => return c,
                Decl::Namespace(ns) => {
                    for d in &ns.decls {
                        if let Decl::Class(c) = d {
                            return c;
                        }
                    }
                }
            }
        }
        panic!("no class found");
    }

    #[test]
    fn test_empty_file() {
        assert!(parse_ok("").decls.is_empty());
    }

    #[test]
    fn test_plain_text_is_not_an_error() {
        let file = parse_ok("hello world, this is not C# at all. 1 2 3;");
        assert!(file.decls.is_empty());
    }

    #[test]
    fn test_class_in_namespace() {
        let file = parse_ok("namespace A.B { public class Foo { } }");
        let Decl::Namespace(ns) = &file.decls[0] else {
            panic!("expected namespace");
        };
        assert_eq!(ns.name, "A.B");
        let Decl::Class(class) = &ns.decls[0] else {
            panic!("expected class");
        };
        assert_eq!(class.name, "Foo");
        assert!(class.has_modifier("public"));
    }

    #[test]
    fn test_file_scoped_namespace() {
        let file = parse_ok("namespace A.B;\npublic class Foo { }");
        let Decl::Namespace(ns) = &file.decls[0] else {
            panic!("expected namespace");
        };
        assert_eq!(ns.name, "A.B");
        assert_eq!(ns.decls.len(), 1);
    }

    #[test]
    fn test_constructor_and_method() {
        let source = r#"
            namespace N {
                public class Foo {
                    public Foo(int a, IDisposable d) { }
                    public int Bar(int x = 0) { return 0; }
                }
            }
        "#;
        let file = parse_ok(source);
        let class = first_class(&file);
        assert_eq!(class.constructors.len(), 1);
        let ctor = &class.constructors[0];
        assert_eq!(ctor.params.len(), 2);
        assert_eq!(ctor.params[0].type_text, "int");
        assert_eq!(ctor.params[0].name, "a");
        assert_eq!(ctor.params[1].type_text, "IDisposable");
        assert_eq!(ctor.params[1].name, "d");

        assert_eq!(class.methods.len(), 1);
        let method = &class.methods[0];
        assert_eq!(method.name, "Bar");
        assert_eq!(method.return_type.as_deref(), Some("int"));
        assert_eq!(method.params.len(), 1);
        assert!(method.has_modifier("public"));
    }

    #[test]
    fn test_properties_are_not_methods() {
        let source = r#"
            public class Foo {
                public string Name { get; }
                public int Age { get; set; } = 3;
                public int Sum => 1 + 2;
                public void Act() { }
            }
        "#;
        let class_file = parse_ok(source);
        let class = first_class(&class_file);
        assert_eq!(class.methods.len(), 1);
        assert_eq!(class.methods[0].name, "Act");
    }

    #[test]
    fn test_fields_are_skipped() {
        let source = r#"
            public class Foo {
                private int count = 0;
                private readonly Func<int, int> f = x => { return x; };
                public void Act() { }
            }
        "#;
        let file = parse_ok(source);
        let class = first_class(&file);
        assert_eq!(class.methods.len(), 1);
    }

    #[test]
    fn test_method_body_braces_do_not_leak() {
        let source = r#"
            public class Foo {
                public void A() { if (true) { var s = "}"; } }
                public void B() { }
            }
        "#;
        let file = parse_ok(source);
        let class = first_class(&file);
        assert_eq!(class.methods.len(), 2);
    }

    #[test]
    fn test_expression_bodied_method() {
        let file = parse_ok("public class Foo { public int Bar() => 42; }");
        let class = first_class(&file);
        assert_eq!(class.methods.len(), 1);
        assert_eq!(class.methods[0].name, "Bar");
    }

    #[test]
    fn test_void_return_type_is_textual() {
        let file = parse_ok("public class Foo { public void Bar() { } }");
        let class = first_class(&file);
        assert_eq!(class.methods[0].return_type.as_deref(), Some("void"));
    }

    #[test]
    fn test_generic_return_and_param_types() {
        let file =
            parse_ok("public class Foo { public Dictionary<string, int> Bar(List<int> xs) { } }");
        let class = first_class(&file);
        let m = &class.methods[0];
        assert_eq!(m.return_type.as_deref(), Some("Dictionary<string, int>"));
        assert_eq!(m.params[0].type_text, "List<int>");
    }

    #[test]
    fn test_only_first_constructor_is_not_enforced_by_parser() {
        // The parser records all constructors; the extractor picks the first.
        let source = r#"
            public class Foo {
                public Foo() { }
                public Foo(int a) { }
            }
        "#;
        let file = parse_ok(source);
        assert_eq!(first_class(&file).constructors.len(), 2);
    }

    #[test]
    fn test_constructor_with_initializer() {
        let file = parse_ok("public class Foo { public Foo(int a) : base(a) { } }");
        let class = first_class(&file);
        assert_eq!(class.constructors.len(), 1);
        assert!(class.methods.is_empty());
    }

    #[test]
    fn test_static_class_modifier() {
        let file = parse_ok("public static class Foo { }");
        assert!(first_class(&file).has_modifier("static"));
    }

    #[test]
    fn test_nested_class() {
        let file = parse_ok("public class Outer { public class Inner { public void A() { } } }");
        let class = first_class(&file);
        assert_eq!(class.nested.len(), 1);
        assert_eq!(class.nested[0].name, "Inner");
        assert_eq!(class.nested[0].methods.len(), 1);
    }

    #[test]
    fn test_multiple_namespaces_in_one_file() {
        let source = r#"
            namespace First { public class A { } }
            namespace Second { public class B { } }
        "#;
        let file = parse_ok(source);
        assert_eq!(file.decls.len(), 2);
    }

    #[test]
    fn test_interfaces_and_enums_are_skipped() {
        let source = r#"
            namespace N {
                public interface IThing { void Act(); }
                public enum Color { Red, Green }
                public class Foo { }
            }
        "#;
        let file = parse_ok(source);
        let Decl::Namespace(ns) = &file.decls[0] else {
            panic!("expected namespace");
        };
        assert_eq!(ns.decls.len(), 1);
    }

    #[test]
    fn test_attributes_are_skipped() {
        let source = r#"
            public class Foo {
                [Obsolete("old")]
                public void Act() { }
            }
        "#;
        let file = parse_ok(source);
        assert_eq!(first_class(&file).methods.len(), 1);
    }

    #[test]
    fn test_explicit_interface_impl_keeps_last_segment() {
        let file = parse_ok("public class Foo { int IThing.Count() { return 0; } }");
        let class = first_class(&file);
        assert_eq!(class.methods.len(), 1);
        assert_eq!(class.methods[0].name, "Count");
        assert!(!class.methods[0].has_modifier("public"));
    }

    #[test]
    fn test_indexer_is_skipped() {
        let file = parse_ok("public class Foo { public int this[int i] { get { return 0; } } }");
        assert!(first_class(&file).methods.is_empty());
    }

    #[test]
    fn test_unterminated_class_is_an_error() {
        assert!(parse(&lex("public class Foo {")).is_err());
    }

    #[test]
    fn test_using_directives_are_skipped() {
        let file = parse_ok("using System;\nusing System.Linq;\npublic class Foo { }");
        assert_eq!(file.decls.len(), 1);
    }
}
