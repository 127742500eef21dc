//! Curated documentation overrides keyed by file, member kind and name.
//!
//! The table is built once in `main` and handed to the reconciler by
//! reference. An entry's summary replaces the heuristic sentence; its
//! parameter and return descriptions replace only the names they list.

use crate::model::MemberKind;
use std::collections::HashMap;
use std::path::Path;

/// Exact documentation for one member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideDoc {
    pub summary: String,
    pub params: HashMap<String, String>,
    pub returns: Option<String>,
}

impl OverrideDoc {
    pub fn new(summary: &str) -> Self {
        OverrideDoc {
            summary: summary.to_string(),
            ..Default::default()
        }
    }

    pub fn param(mut self, name: &str, description: &str) -> Self {
        self.params.insert(name.to_string(), description.to_string());
        self
    }

    pub fn returns(mut self, description: &str) -> Self {
        self.returns = Some(description.to_string());
        self
    }
}

#[derive(Debug, Clone)]
struct OverrideEntry {
    /// Relative path suffix such as `Helpers/ColorHelper.cs`.
    path: String,
    kind: MemberKind,
    name: String,
    doc: OverrideDoc,
}

/// Read-only override table. Entries keep insertion order for suffix lookups.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    entries: Vec<OverrideEntry>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry; later duplicates never shadow earlier ones.
    pub fn with(mut self, path: &str, kind: MemberKind, name: &str, doc: OverrideDoc) -> Self {
        self.entries.push(OverrideEntry {
            path: path.to_string(),
            kind,
            name: name.to_string(),
            doc,
        });
        self
    }

    /// The entries shipped with the tool.
    pub fn builtin() -> Self {
        Self::new()
            .with(
                "Helpers/CollectionHelper.cs",
                MemberKind::Method,
                "AddRange",
                OverrideDoc::new("지정한 항목들을 컬렉션에 순차적으로 추가합니다.")
                    .param("collection", "대상 컬렉션")
                    .param("items", "추가할 항목 시퀀스"),
            )
            .with(
                "Helpers/ColorHelper.cs",
                MemberKind::Method,
                "GetColorName",
                OverrideDoc::new(
                    "입력 색상과 일치하는 미리 정의된 색상 이름을 반환합니다. 없으면 색상 문자열을 반환합니다.",
                )
                .param("color", "색상 값")
                .returns("색상 이름 또는 색상 문자열"),
            )
            .with(
                "Helpers/ColorHelper.cs",
                MemberKind::Method,
                "ToColor",
                OverrideDoc::new("문자열 표현을 Color로 변환합니다. 실패 시 기본 색을 반환합니다.")
                    .param("str", "색상 문자열")
                    .param("defaultColor", "파싱 실패 시 반환할 기본 색")
                    .returns("변환된 색상 값"),
            )
            .with(
                "Helpers/ColorHelper.cs",
                MemberKind::Method,
                "TryConvertColor",
                OverrideDoc::new("문자열을 Color로 변환을 시도합니다.")
                    .param("str", "색상 문자열")
                    .param("color", "변환 성공 시 결과 색상")
                    .returns("성공하면 true, 실패하면 false"),
            )
            .with(
                "Helpers/DataTableHelper.cs",
                MemberKind::Method,
                "ToList",
                OverrideDoc::new("컬렉션의 항목을 목록(List)으로 변환합니다."),
            )
    }

    /// Find the override for a member of the file at `path`.
    ///
    /// Tried in order: the last two path segments as a key, the file name
    /// alone, then any key ending in the file name.
    pub fn resolve(&self, path: &Path, name: &str, kind: MemberKind) -> Option<&OverrideDoc> {
        let kind = kind.lookup_kind();
        let segments: Vec<String> = path
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        let relative = segments[segments.len().saturating_sub(2)..].join("/");
        let file_name = path.file_name()?.to_string_lossy();

        let member = |e: &&OverrideEntry| e.kind == kind && e.name == name;
        self.entries
            .iter()
            .filter(member)
            .find(|e| e.path == relative)
            .or_else(|| self.entries.iter().filter(member).find(|e| e.path == file_name))
            .or_else(|| {
                self.entries
                    .iter()
                    .filter(member)
                    .find(|e| e.path.ends_with(&*file_name))
            })
            .map(|e| &e.doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_by_last_two_segments() {
        let table = OverrideTable::builtin();
        let doc = table
            .resolve(Path::new("/repo/src/Helpers/ColorHelper.cs"), "ToColor", MemberKind::Method)
            .unwrap();
        assert_eq!(doc.returns.as_deref(), Some("변환된 색상 값"));
        assert_eq!(doc.params.get("str").map(String::as_str), Some("색상 문자열"));
    }

    #[test]
    fn resolves_by_file_name_suffix() {
        let table = OverrideTable::builtin();
        // Different parent directory still finds the entry through the file name.
        assert!(table
            .resolve(Path::new("Utils/ColorHelper.cs"), "GetColorName", MemberKind::Method)
            .is_some());
    }

    #[test]
    fn bare_file_name_key() {
        let table = OverrideTable::new()
            .with("Widget.cs", MemberKind::Property, "Size", OverrideDoc::new("크기"))
            .with("Other/Widget.cs", MemberKind::Property, "Size", OverrideDoc::new("다른 크기"));
        let doc = table
            .resolve(Path::new("a/b/Widget.cs"), "Size", MemberKind::Property)
            .unwrap();
        assert_eq!(doc.summary, "크기");
    }

    #[test]
    fn exact_key_beats_file_name() {
        let table = OverrideTable::new()
            .with("Widget.cs", MemberKind::Method, "Run", OverrideDoc::new("파일 이름"))
            .with("Ui/Widget.cs", MemberKind::Method, "Run", OverrideDoc::new("경로"));
        let doc = table.resolve(Path::new("src/Ui/Widget.cs"), "Run", MemberKind::Method).unwrap();
        assert_eq!(doc.summary, "경로");
    }

    #[test]
    fn kind_and_name_must_match() {
        let table = OverrideTable::builtin();
        let path = Path::new("Helpers/ColorHelper.cs");
        assert!(table.resolve(path, "ToColor", MemberKind::Property).is_none());
        assert!(table.resolve(path, "Missing", MemberKind::Method).is_none());
        assert!(table
            .resolve(Path::new("Helpers/Other.cs"), "ToColor", MemberKind::Method)
            .is_none());
    }

    #[test]
    fn constructors_use_method_entries() {
        let table = OverrideTable::new().with(
            "Widget.cs",
            MemberKind::Method,
            "Widget",
            OverrideDoc::new("생성자"),
        );
        assert!(table
            .resolve(Path::new("Widget.cs"), "Widget", MemberKind::Constructor)
            .is_some());
    }
}
