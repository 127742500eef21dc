//! Declaration matcher. Classifies a single source line.
//!
//! Matchers run in a fixed order (type, method, property); the first one that
//! recognizes the line wins. Lines are passed without their terminator.

use crate::model::*;
use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

static RE_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\s*(?:public|internal)\s+(?:(?:static|partial|abstract|sealed)\s+)*",
        r"(class|struct|interface|enum)\s+([A-Za-z_][A-Za-z0-9_]*)\b"
    ))
    .unwrap()
});

// Return type is optional so constructors (`public Widget(int size)`) match too.
static RE_METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\s*(?:public|internal)\s+(?:(?:static|virtual|override|sealed|async|new)\s+)*",
        r"(?:([A-Za-z0-9_<>,\[\]\.\?]+)\s+)?([A-Za-z_][A-Za-z0-9_]*)\s*\(([^)]*)\)",
        r"\s*(?:\{|=>|where|:|$)"
    ))
    .unwrap()
});

static RE_PROPERTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\s*(?:public|internal)\s+(?:static\s+)?",
        r"[A-Za-z0-9_<>,\[\]\.\?]+\s+([A-Za-z_][A-Za-z0-9_]*)\s*\{"
    ))
    .unwrap()
});

static RE_PARAM_ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]").unwrap());

/// Parameter modifiers that never name the parameter.
const PARAM_MODIFIERS: &[&str] = &["ref", "out", "in", "params", "this"];

type Matcher = for<'a> fn(&'a str) -> Option<Declaration<'a>>;

/// Matchers in priority order.
const MATCHERS: &[Matcher] = &[match_type, match_method, match_property];

// -- Public API ---------------------------------------------------------------

/// Recognize a declaration on `line`, trying each matcher in order.
pub fn match_line(line: &str) -> Option<Declaration<'_>> {
    MATCHERS.iter().find_map(|m| m(line))
}

pub fn match_type(line: &str) -> Option<Declaration<'_>> {
    let caps = RE_TYPE.captures(line)?;
    let kind = TypeKind::from_keyword(caps.get(1)?.as_str())?;
    Some(Declaration::Type(TypeDecl {
        kind,
        name: caps.get(2)?.as_str(),
    }))
}

pub fn match_method(line: &str) -> Option<Declaration<'_>> {
    let caps = RE_METHOD.captures(line)?;
    Some(Declaration::Method(MethodDecl {
        name: caps.get(2)?.as_str(),
        return_type: caps.get(1).map(|m| m.as_str()),
        params: caps.get(3)?.as_str(),
    }))
}

pub fn match_property(line: &str) -> Option<Declaration<'_>> {
    // Methods share the property prefix; anything with a paren is not a property.
    if line.contains('(') {
        return None;
    }
    let caps = RE_PROPERTY.captures(line)?;
    Some(Declaration::Property(PropertyDecl {
        name: caps.get(1)?.as_str(),
    }))
}

/// Extract parameter names from a raw parameter list.
///
/// Attributes (`[NotNull]`) and default values (`= null`) are dropped, then
/// the last remaining non-modifier token is the name. Parameters with nothing
/// left are skipped.
pub fn parameter_names(params: &str) -> Vec<String> {
    if params.trim().is_empty() {
        return Vec::new();
    }

    split_top_level(params)
        .into_iter()
        .filter_map(|raw| {
            let raw = RE_PARAM_ATTRIBUTE.replace_all(raw, "");
            let left = raw.split('=').next().unwrap_or_default();
            left.split_whitespace()
                .filter(|tok| !PARAM_MODIFIERS.contains(tok))
                .last()
                .map(str::to_string)
        })
        .collect()
}

/// Split on commas outside `<>`, `()` and `[]`, so `Dictionary<string, int>`
/// and `[Range(1, 5)]` stay in one piece.
fn split_top_level(params: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, ch) in params.char_indices() {
        match ch {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&params[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&params[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_type_declarations() {
        assert_eq!(
            match_line("public static partial class ColorHelper"),
            Some(Declaration::Type(TypeDecl {
                kind: TypeKind::Class,
                name: "ColorHelper"
            }))
        );
        assert_eq!(
            match_line("    internal interface IUserService {"),
            Some(Declaration::Type(TypeDecl {
                kind: TypeKind::Interface,
                name: "IUserService"
            }))
        );
        assert!(matches!(
            match_line("public sealed class Foo : Bar"),
            Some(Declaration::Type(TypeDecl { kind: TypeKind::Class, .. }))
        ));
    }

    #[test]
    fn type_wins_over_property() {
        let decl = match_line("public enum Mode {").unwrap();
        assert!(matches!(decl, Declaration::Type(TypeDecl { kind: TypeKind::Enum, name: "Mode" })));
    }

    #[test]
    fn matches_method_with_modifiers() {
        let decl =
            match_line("        public static async Task<int> LoadAsync(string path) {").unwrap();
        assert_eq!(
            decl,
            Declaration::Method(MethodDecl {
                name: "LoadAsync",
                return_type: Some("Task<int>"),
                params: "string path",
            })
        );
    }

    #[test]
    fn matches_expression_bodied_and_bare_methods() {
        assert!(matches!(
            match_line("public override string ToString() => Name;"),
            Some(Declaration::Method(MethodDecl { name: "ToString", .. }))
        ));
        assert!(matches!(
            match_line("public int GetUserCount()"),
            Some(Declaration::Method(MethodDecl {
                name: "GetUserCount",
                return_type: Some("int"),
                params: ""
            }))
        ));
        assert!(matches!(
            match_line("public T Pick(T a) where T : class"),
            Some(Declaration::Method(MethodDecl { name: "Pick", .. }))
        ));
    }

    #[test]
    fn matches_constructor_without_return_type() {
        assert_eq!(
            match_line("    public Widget(int size)"),
            Some(Declaration::Method(MethodDecl {
                name: "Widget",
                return_type: None,
                params: "int size",
            }))
        );
        assert!(matches!(
            match_line("public Widget(int size) : base(size)"),
            Some(Declaration::Method(MethodDecl { name: "Widget", return_type: None, .. }))
        ));
    }

    #[test]
    fn method_call_statements_are_not_declarations() {
        assert_eq!(match_line("    return GetUserCount();"), None);
        assert_eq!(match_line("public void Foo(); // trailing"), None);
        assert_eq!(match_line("private void Hidden()"), None);
    }

    #[test]
    fn matches_property() {
        assert_eq!(
            match_line("    public string Name { get; set; }"),
            Some(Declaration::Property(PropertyDecl { name: "Name" }))
        );
        assert!(matches!(
            match_line("public static List<int> Values {"),
            Some(Declaration::Property(PropertyDecl { name: "Values" }))
        ));
    }

    #[test]
    fn property_with_paren_rejected() {
        assert_eq!(match_property("public int Count { get => Compute(); }"), None);
    }

    #[test]
    fn parameter_names_strip_noise() {
        assert_eq!(parameter_names(""), Vec::<String>::new());
        assert_eq!(parameter_names("string input, out int result"), vec!["input", "result"]);
        assert_eq!(
            parameter_names("this IList<T> collection, [NotNull] IEnumerable<T> items"),
            vec!["collection", "items"]
        );
        assert_eq!(
            parameter_names("CancellationToken ct = default, params object[] args"),
            vec!["ct", "args"]
        );
    }

    #[test]
    fn generic_and_attribute_commas_do_not_split() {
        assert_eq!(
            parameter_names("Dictionary<string, int> map, int x"),
            vec!["map", "x"]
        );
        assert_eq!(
            parameter_names("[Range(1, 5)] int level, (int, int) pair"),
            vec!["level", "pair"]
        );
    }

    #[test]
    fn empty_parameter_fragments_are_omitted() {
        assert_eq!(parameter_names("int a, , [Attr]"), vec!["a"]);
    }
}
