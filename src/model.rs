//! Data model for declarations and edits, borrowed from the scanned line.

/// Declared flavour of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Enum,
}

impl TypeKind {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "class" => Some(Self::Class),
            "struct" => Some(Self::Struct),
            "interface" => Some(Self::Interface),
            "enum" => Some(Self::Enum),
            _ => None,
        }
    }
}

/// What a declaration documents. Also the key space of the override table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Type,
    Method,
    Constructor,
    Property,
}

impl MemberKind {
    /// Constructors share the method namespace for override lookups.
    pub fn lookup_kind(self) -> Self {
        match self {
            Self::Constructor => Self::Method,
            other => other,
        }
    }
}

/// `public static partial class Foo`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl<'a> {
    pub kind: TypeKind,
    pub name: &'a str,
}

/// `public async Task<int> LoadAsync(string path, CancellationToken ct = default)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl<'a> {
    pub name: &'a str,
    /// None when the signature has no return-type token (constructors).
    pub return_type: Option<&'a str>,
    /// Raw text between the parentheses.
    pub params: &'a str,
}

/// `public string Name { get; set; }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDecl<'a> {
    pub name: &'a str,
}

/// A recognized declaration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration<'a> {
    Type(TypeDecl<'a>),
    Method(MethodDecl<'a>),
    Property(PropertyDecl<'a>),
}

impl<'a> Declaration<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Declaration::Type(t) => t.name,
            Declaration::Method(m) => m.name,
            Declaration::Property(p) => p.name,
        }
    }
}

/// Inclusive line range of a `///` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    pub start: usize,
    pub end: usize,
}

/// One planned change to a file, expressed against the original line indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Replace lines `start..=end` with `lines`.
    ReplaceSpan {
        start: usize,
        end: usize,
        lines: Vec<String>,
    },
    /// Insert `lines` directly before line `pos`.
    InsertAt { pos: usize, lines: Vec<String> },
}

impl Edit {
    /// First original line the edit touches.
    pub fn anchor(&self) -> usize {
        match self {
            Edit::ReplaceSpan { start, .. } => *start,
            Edit::InsertAt { pos, .. } => *pos,
        }
    }
}
