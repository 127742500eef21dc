//! Heuristic classifier: Korean summaries from identifier names.
//!
//! Type summaries are picked by an ordered check list (interface/enum, then
//! file-content cues, then name suffixes, then a generic sentence). Member
//! summaries walk [`MEMBER_RULES`] against the lower-cased name; the first
//! prefix hit wins, with the remaining fragments as the sentence object.

use crate::model::{MemberKind, TypeKind};
use crate::phrase::noun_phrase;
use crate::tokenize::split_identifier;

/// Content cues gathered once per file.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileContext {
    /// File defines WPF value converters (type-level cue).
    pub converter_module: bool,
    /// File lives in or references a helpers namespace.
    pub helper_module: bool,
    /// File implements `IValueConverter` members (member-level cue).
    pub value_converter: bool,
}

impl FileContext {
    pub fn from_text(text: &str) -> Self {
        FileContext {
            converter_module: text.contains("Converters") || text.contains("IValueConverter"),
            helper_module: text.contains("Helpers"),
            value_converter: text.contains("IValueConverter")
                || text.contains("System.Windows.Data"),
        }
    }
}

/// One verb rule: any of `prefixes` selects `template` (with `{}` replaced by
/// the object phrase) or `bare` when the name is only the verb.
struct PrefixRule {
    prefixes: &'static [&'static str],
    template: &'static str,
    bare: &'static str,
}

const fn rule(
    prefixes: &'static [&'static str],
    template: &'static str,
    bare: &'static str,
) -> PrefixRule {
    PrefixRule {
        prefixes,
        template,
        bare,
    }
}

/// Verb rules tested before the converter special case.
const MEMBER_RULES: &[PrefixRule] = &[
    rule(&["get"], "{}를(을) 가져옵니다.", "값을 가져옵니다."),
    rule(&["set"], "{}를(을) 설정합니다.", "값을 설정합니다."),
    rule(&["add"], "{}를(을) 추가합니다.", "항목을 추가합니다."),
    rule(&["remove"], "{}를(을) 제거합니다.", "항목을 제거합니다."),
    rule(&["update"], "{}를(을) 업데이트합니다.", "상태를 업데이트합니다."),
    rule(&["create", "build"], "{}를(을) 생성합니다.", "새 인스턴스를 생성합니다."),
    rule(&["delete"], "{}를(을) 삭제합니다.", "항목을 삭제합니다."),
    rule(&["find", "search"], "{}를(을) 찾습니다.", "항목을 찾습니다."),
    rule(&["load"], "{}를(을) 로드합니다.", "데이터를 로드합니다."),
    rule(&["save"], "{}를(을) 저장합니다.", "데이터를 저장합니다."),
    rule(&["parse"], "{}를(을) 구문 분석합니다.", "입력을 구문 분석합니다."),
];

/// Verb rules tested after the converter special case.
const LATE_MEMBER_RULES: &[PrefixRule] = &[
    rule(&["to", "convert"], "{}로 변환합니다.", "값을 변환합니다."),
    rule(&["try"], "{}를(을) 시도하고, 성공 여부를 반환합니다.", "작업을 시도하고, 성공 여부를 반환합니다."),
    rule(&["is"], "{}인지 여부를 확인합니다.", "조건을 만족하는지 여부를 확인합니다."),
    rule(&["has"], "{}를(을) 보유하는지 여부를 확인합니다.", "값을 보유하는지 여부를 확인합니다."),
];

/// Boolean predicates matched by exact name.
const PREDICATE_NAMES: &[(&str, &str)] = &[
    ("Contains", "포함 여부를 확인합니다."),
    ("StartsWith", "시작 여부를 확인합니다."),
    ("EndsWith", "끝나는지 여부를 확인합니다."),
];

pub const SUCCESS_RETURNS: &str = "성공하면 true를 반환합니다.";
pub const CONDITION_RETURNS: &str = "조건을 만족하면 true를 반환합니다.";
pub const CONVERSION_RETURNS: &str = "변환 결과를 반환합니다.";
pub const GENERIC_RETURNS: &str = "결과를 반환합니다.";

/// Summary sentence for a declaration.
///
/// `type_kind` is only consulted for [`MemberKind::Type`].
pub fn summarize(
    name: &str,
    kind: MemberKind,
    ctx: &FileContext,
    type_kind: Option<TypeKind>,
) -> String {
    let fragments = split_identifier(name);
    match kind {
        MemberKind::Type => summarize_type(name, &fragments, ctx, type_kind),
        MemberKind::Constructor => format!("새 {} 인스턴스를 초기화합니다.", noun_phrase(&fragments)),
        MemberKind::Method | MemberKind::Property => summarize_member(name, &fragments, kind, ctx),
    }
}

fn summarize_type(
    name: &str,
    fragments: &[String],
    ctx: &FileContext,
    type_kind: Option<TypeKind>,
) -> String {
    match type_kind {
        Some(TypeKind::Interface) => {
            return if name.starts_with('I') && fragments.len() > 1 {
                format!("{} 인터페이스를 정의합니다.", noun_phrase(&fragments[1..]))
            } else {
                "인터페이스를 정의합니다.".to_string()
            };
        }
        Some(TypeKind::Enum) => return "열거형을 정의합니다.".to_string(),
        _ => {}
    }

    if ctx.converter_module {
        "값 변환기를 제공합니다.".to_string()
    } else if ctx.helper_module {
        "유틸리티 메서드를 제공합니다.".to_string()
    } else if name.ends_with("Attribute") {
        "사용자 지정 특성을 정의합니다.".to_string()
    } else if name.ends_with("Extensions") || name.ends_with("Ext") {
        "확장 메서드를 제공합니다.".to_string()
    } else {
        format!("{}를(을) 제공합니다.", noun_phrase(fragments))
    }
}

fn summarize_member(
    name: &str,
    fragments: &[String],
    kind: MemberKind,
    ctx: &FileContext,
) -> String {
    let lower = name.to_lowercase();
    let object = fragments.get(1..).unwrap_or_default();

    if let Some(sentence) = apply_rules(MEMBER_RULES, &lower, object) {
        return sentence;
    }
    if ctx.value_converter {
        match name {
            "Convert" => return "값을 변환합니다.".to_string(),
            "ConvertBack" => return "대상 값을 원본으로 변환합니다.".to_string(),
            _ => {}
        }
    }
    if let Some(sentence) = apply_rules(LATE_MEMBER_RULES, &lower, object) {
        return sentence;
    }
    if let Some((_, sentence)) = PREDICATE_NAMES.iter().find(|(n, _)| *n == name) {
        return sentence.to_string();
    }

    match kind {
        MemberKind::Property => format!("{}를(을) 가져오거나 설정합니다.", noun_phrase(fragments)),
        _ => "동작을 수행합니다.".to_string(),
    }
}

fn apply_rules(rules: &[PrefixRule], lower: &str, object: &[String]) -> Option<String> {
    let rule = rules
        .iter()
        .find(|r| r.prefixes.iter().any(|p| lower.starts_with(p)))?;
    if object.is_empty() {
        Some(rule.bare.to_string())
    } else {
        Some(rule.template.replace("{}", &noun_phrase(object)))
    }
}

/// Return description hinted by the member name alone.
pub fn return_hint(name: &str) -> Option<&'static str> {
    if name.starts_with("Try") {
        Some(SUCCESS_RETURNS)
    } else if name.starts_with("Is")
        || name.starts_with("Has")
        || PREDICATE_NAMES.iter().any(|(n, _)| *n == name)
    {
        Some(CONDITION_RETURNS)
    } else {
        None
    }
}

/// Return description inferred from the wording of a generated summary.
pub fn returns_from_summary(summary: &str) -> &'static str {
    if summary.contains("여부") {
        if summary.contains("성공") {
            SUCCESS_RETURNS
        } else {
            CONDITION_RETURNS
        }
    } else if summary.contains("변환") {
        CONVERSION_RETURNS
    } else {
        GENERIC_RETURNS
    }
}
