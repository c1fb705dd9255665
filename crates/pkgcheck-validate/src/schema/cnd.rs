//! Compact node type definition (CND) parser
//!
//! Parses the textual schema notation into unresolved templates: names keep
//! the prefixes used in the document and default values stay raw strings.
//! Resolution against the repository happens in the importer.
//!
//! ```text
//! <acme = 'http://acme.example/1.0'>
//! // a page
//! [acme:Page] > nt:base, mix:title orderable
//!   - acme:layout (STRING) = 'wide' mandatory autocreated < 'wide', 'narrow'
//!   + acme:content (nt:base) = nt:unstructured sns
//! ```

use pkgcheck_domain::{Error, NamespaceMapping, PropertyType, Result};

/// Parsed document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CndDocument {
    pub namespaces: Vec<NamespaceMapping>,
    pub node_types: Vec<NodeTypeTemplate>,
}

/// Node type as written in the document
#[derive(Debug, Clone, PartialEq)]
pub struct NodeTypeTemplate {
    pub name: String,
    pub supertypes: Vec<String>,
    pub is_abstract: bool,
    pub is_mixin: bool,
    pub orderable: bool,
    pub primary_item: Option<String>,
    pub properties: Vec<PropertyTemplate>,
    pub child_nodes: Vec<ChildNodeTemplate>,
    /// Line of the opening bracket
    pub line: usize,
}

impl NodeTypeTemplate {
    fn new(name: String, line: usize) -> Self {
        Self {
            name,
            supertypes: Vec::new(),
            is_abstract: false,
            is_mixin: false,
            orderable: false,
            primary_item: None,
            properties: Vec::new(),
            child_nodes: Vec::new(),
            line,
        }
    }
}

/// Property definition as written in the document
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyTemplate {
    pub name: String,
    pub required_type: PropertyType,
    pub default_values: Vec<String>,
    pub value_constraints: Vec<String>,
    pub mandatory: bool,
    pub autocreated: bool,
    pub protected: bool,
    pub multiple: bool,
    pub primary: bool,
}

impl PropertyTemplate {
    fn new(name: String) -> Self {
        Self {
            name,
            required_type: PropertyType::String,
            default_values: Vec::new(),
            value_constraints: Vec::new(),
            mandatory: false,
            autocreated: false,
            protected: false,
            multiple: false,
            primary: false,
        }
    }
}

/// Child node definition as written in the document
#[derive(Debug, Clone, PartialEq)]
pub struct ChildNodeTemplate {
    pub name: String,
    pub required_types: Vec<String>,
    pub default_type: Option<String>,
    pub mandatory: bool,
    pub autocreated: bool,
    pub protected: bool,
    pub same_name_siblings: bool,
    pub primary: bool,
}

impl ChildNodeTemplate {
    fn new(name: String) -> Self {
        Self {
            name,
            required_types: Vec::new(),
            default_type: None,
            mandatory: false,
            autocreated: false,
            protected: false,
            same_name_siblings: false,
            primary: false,
        }
    }
}

/// Parse `input`, naming `document` in error messages
pub fn parse(document: &str, input: &str) -> Result<CndDocument> {
    let tokens = tokenize(document, input)?;
    Parser {
        document,
        tokens,
        pos: 0,
    }
    .parse_document()
}

// ============================================================================
// Lexer
// ============================================================================

/// Characters that always form a token of their own
const PUNCTUATION: &[char] = &['<', '>', '=', '[', ']', '(', ')', ',', '+', '!', '*'];

#[derive(Debug, Clone, PartialEq)]
enum TokenKind {
    Punct(char),
    Word(String),
    Quoted(String),
}

#[derive(Debug, Clone, PartialEq)]
struct Token {
    kind: TokenKind,
    line: usize,
}

fn tokenize(document: &str, input: &str) -> Result<Vec<Token>> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        if c == '\n' {
            line += 1;
            i += 1;
        } else if c.is_whitespace() {
            i += 1;
        } else if c == '/' && next == Some('/') {
            while i < chars.len() && chars[i] != '\n' {
                i += 1;
            }
        } else if c == '/' && next == Some('*') {
            let start_line = line;
            i += 2;
            loop {
                match chars.get(i) {
                    None => return Err(Error::parse(document, start_line, "unterminated comment")),
                    Some('*') if chars.get(i + 1) == Some(&'/') => {
                        i += 2;
                        break;
                    }
                    Some('\n') => line += 1,
                    Some(_) => {}
                }
                i += 1;
            }
        } else if c == '\'' || c == '"' {
            let start_line = line;
            let mut value = String::new();
            i += 1;
            loop {
                match chars.get(i) {
                    None => return Err(Error::parse(document, start_line, "unterminated string")),
                    Some(&q) if q == c => {
                        i += 1;
                        break;
                    }
                    Some('\\') => {
                        let Some(&escaped) = chars.get(i + 1) else {
                            return Err(Error::parse(document, line, "unterminated string"));
                        };
                        if escaped == '\n' {
                            line += 1;
                        }
                        value.push(escaped);
                        i += 2;
                        continue;
                    }
                    Some(&other) => {
                        if other == '\n' {
                            line += 1;
                        }
                        value.push(other);
                    }
                }
                i += 1;
            }
            tokens.push(Token {
                kind: TokenKind::Quoted(value),
                line: start_line,
            });
        } else if PUNCTUATION.contains(&c) || c == '-' {
            // '-' only opens a property definition at the start of a token
            tokens.push(Token {
                kind: TokenKind::Punct(c),
                line,
            });
            i += 1;
        } else {
            let start = i;
            while i < chars.len() {
                let ch = chars[i];
                let opens_comment = ch == '/' && matches!(chars.get(i + 1), Some('/' | '*'));
                if ch.is_whitespace()
                    || PUNCTUATION.contains(&ch)
                    || ch == '\''
                    || ch == '"'
                    || opens_comment
                {
                    break;
                }
                i += 1;
            }
            tokens.push(Token {
                kind: TokenKind::Word(chars[start..i].iter().collect()),
                line,
            });
        }
    }

    Ok(tokens)
}

// ============================================================================
// Parser
// ============================================================================

struct Parser<'a> {
    document: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser<'_> {
    fn parse_document(mut self) -> Result<CndDocument> {
        let mut parsed = CndDocument::default();
        while self.peek().is_some() {
            if self.is_punct('<') {
                parsed.namespaces.push(self.parse_namespace()?);
            } else if self.is_punct('[') {
                parsed.node_types.push(self.parse_node_type()?);
            } else {
                return Err(self.error(format!(
                    "expected namespace mapping or node type definition, found {}",
                    self.describe_current()
                )));
            }
        }
        Ok(parsed)
    }

    fn parse_namespace(&mut self) -> Result<NamespaceMapping> {
        self.expect_punct('<')?;
        let prefix = self.parse_name("namespace prefix")?;
        self.expect_punct('=')?;
        let uri = self.parse_name("namespace URI")?;
        self.expect_punct('>')?;
        if prefix.contains(':') {
            return Err(self.error(format!("invalid namespace prefix '{prefix}'")));
        }
        Ok(NamespaceMapping::new(prefix, uri))
    }

    fn parse_node_type(&mut self) -> Result<NodeTypeTemplate> {
        let line = self.line();
        self.expect_punct('[')?;
        let name = self.parse_name("node type name")?;
        self.expect_punct(']')?;
        let mut node_type = NodeTypeTemplate::new(name, line);

        if self.is_punct('>') {
            self.advance();
            node_type.supertypes = self.parse_name_list("supertype")?;
        }

        loop {
            if self.is_punct('!') {
                self.advance();
                node_type.primary_item = Some(self.parse_name("primary item name")?);
                continue;
            }
            match self.keyword().as_deref() {
                Some("orderable" | "ord" | "o") => node_type.orderable = true,
                Some("mixin" | "mix" | "m") => node_type.is_mixin = true,
                Some("abstract" | "abs" | "a") => node_type.is_abstract = true,
                Some("noquery" | "nq" | "query" | "q") => {}
                Some("primaryitem") => {
                    self.advance();
                    node_type.primary_item = Some(self.parse_name("primary item name")?);
                    continue;
                }
                _ => break,
            }
            self.advance();
        }

        loop {
            if self.is_punct('-') {
                let property = self.parse_property()?;
                node_type.properties.push(property);
            } else if self.is_punct('+') {
                let child = self.parse_child_node()?;
                node_type.child_nodes.push(child);
            } else {
                break;
            }
        }

        let primaries: Vec<String> = node_type
            .properties
            .iter()
            .filter(|p| p.primary)
            .map(|p| p.name.clone())
            .chain(
                node_type
                    .child_nodes
                    .iter()
                    .filter(|c| c.primary)
                    .map(|c| c.name.clone()),
            )
            .collect();
        let declared = node_type.primary_item.clone();
        match (primaries.as_slice(), declared) {
            ([], _) => {}
            ([only], None) => node_type.primary_item = Some(only.clone()),
            ([only], Some(declared)) if *only == declared => {}
            _ => {
                return Err(Error::parse(
                    self.document,
                    line,
                    format!("node type {} declares more than one primary item", node_type.name),
                ));
            }
        }

        Ok(node_type)
    }

    fn parse_property(&mut self) -> Result<PropertyTemplate> {
        self.expect_punct('-')?;
        let mut property = PropertyTemplate::new(self.parse_name("property name")?);

        if self.is_punct('(') {
            self.advance();
            let raw_type = self.parse_name("property type")?;
            property.required_type = raw_type
                .parse()
                .map_err(|_| self.error(format!("unknown property type '{raw_type}'")))?;
            self.expect_punct(')')?;
        }
        if self.is_punct('=') {
            self.advance();
            property.default_values = self.parse_value_list("default value")?;
        }

        loop {
            if self.is_punct('*') {
                property.multiple = true;
            } else if self.is_punct('!') {
                property.primary = true;
            } else if self.is_punct('<') && !self.starts_namespace() {
                self.advance();
                property.value_constraints = self.parse_value_list("value constraint")?;
                continue;
            } else {
                match self.keyword().as_deref() {
                    Some("mandatory" | "man" | "m") => property.mandatory = true,
                    Some("autocreated" | "aut" | "a") => property.autocreated = true,
                    Some("protected" | "pro" | "p") => property.protected = true,
                    Some("multiple" | "mul") => property.multiple = true,
                    Some("primary" | "pri") => property.primary = true,
                    Some(
                        "copy" | "version" | "initialize" | "compute" | "ignore" | "abort"
                        | "nofulltext" | "nof" | "noqueryorder" | "nqord",
                    ) => {}
                    Some("queryops" | "qop") => {
                        self.advance();
                        self.parse_name("query operators")?;
                        continue;
                    }
                    _ => break,
                }
            }
            self.advance();
        }

        Ok(property)
    }

    fn parse_child_node(&mut self) -> Result<ChildNodeTemplate> {
        self.expect_punct('+')?;
        let mut child = ChildNodeTemplate::new(self.parse_name("child node name")?);

        if self.is_punct('(') {
            self.advance();
            child.required_types = self.parse_name_list("required primary type")?;
            self.expect_punct(')')?;
        }
        if self.is_punct('=') {
            self.advance();
            child.default_type = Some(self.parse_name("default primary type")?);
        }

        loop {
            if self.is_punct('*') {
                child.same_name_siblings = true;
            } else if self.is_punct('!') {
                child.primary = true;
            } else {
                match self.keyword().as_deref() {
                    Some("mandatory" | "man" | "m") => child.mandatory = true,
                    Some("autocreated" | "aut" | "a") => child.autocreated = true,
                    Some("protected" | "pro" | "p") => child.protected = true,
                    Some("sns" | "multiple" | "mul") => child.same_name_siblings = true,
                    Some("primary" | "pri") => child.primary = true,
                    Some("copy" | "version" | "initialize" | "compute" | "ignore" | "abort") => {}
                    _ => break,
                }
            }
            self.advance();
        }

        Ok(child)
    }

    fn parse_name(&mut self, what: &str) -> Result<String> {
        let name = match self.peek().map(|t| &t.kind) {
            Some(TokenKind::Word(word)) => word.clone(),
            Some(TokenKind::Quoted(text)) => text.clone(),
            Some(TokenKind::Punct('*')) => "*".to_string(),
            _ => {
                return Err(self.error(format!(
                    "expected {what}, found {}",
                    self.describe_current()
                )));
            }
        };
        if name.is_empty() {
            return Err(self.error(format!("{what} must not be empty")));
        }
        self.advance();
        Ok(name)
    }

    fn parse_name_list(&mut self, what: &str) -> Result<Vec<String>> {
        let mut names = vec![self.parse_name(what)?];
        while self.is_punct(',') {
            self.advance();
            names.push(self.parse_name(what)?);
        }
        Ok(names)
    }

    fn parse_value_list(&mut self, what: &str) -> Result<Vec<String>> {
        let mut values = Vec::new();
        loop {
            let value = match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Word(value) | TokenKind::Quoted(value)) => value.clone(),
                _ => {
                    return Err(self.error(format!(
                        "expected {what}, found {}",
                        self.describe_current()
                    )));
                }
            };
            values.push(value);
            self.advance();
            if !self.is_punct(',') {
                return Ok(values);
            }
            self.advance();
        }
    }

    fn expect_punct(&mut self, expected: char) -> Result<()> {
        if self.is_punct(expected) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(format!(
                "expected '{expected}', found {}",
                self.describe_current()
            )))
        }
    }

    /// `<` followed by `name =` opens a namespace mapping, not a constraint
    fn starts_namespace(&self) -> bool {
        matches!(
            self.tokens.get(self.pos + 2).map(|t| &t.kind),
            Some(TokenKind::Punct('='))
        )
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn is_punct(&self, expected: char) -> bool {
        matches!(self.peek(), Some(Token { kind: TokenKind::Punct(c), .. }) if *c == expected)
    }

    /// Lowercased current word, if the current token is a word
    fn keyword(&self) -> Option<String> {
        match self.peek().map(|t| &t.kind) {
            Some(TokenKind::Word(word)) => Some(word.to_lowercase()),
            _ => None,
        }
    }

    fn line(&self) -> usize {
        self.peek()
            .or_else(|| self.tokens.last())
            .map_or(1, |t| t.line)
    }

    fn describe_current(&self) -> String {
        match self.peek().map(|t| &t.kind) {
            None => "end of document".to_string(),
            Some(TokenKind::Punct(c)) => format!("'{c}'"),
            Some(TokenKind::Word(word)) => format!("'{word}'"),
            Some(TokenKind::Quoted(text)) => format!("'{text}'"),
        }
    }

    fn error(&self, message: String) -> Error {
        Error::parse(self.document, self.line(), message)
    }
}
