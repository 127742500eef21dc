//! Phrase rendering for identifier fragments and parameter names.

/// Generic description used for parameters with no canned phrase.
pub const DEFAULT_PARAM_PHRASE: &str = "매개 변수";

/// Canned descriptions keyed by lower-cased parameter name.
const PARAM_PHRASES: &[(&str, &str)] = &[
    ("value", "입력 값"),
    ("targettype", "대상 형식"),
    ("param", "매개 변수"),
    ("parameter", "매개 변수"),
    ("culture", "문화권 정보"),
    ("target", "대상"),
    ("type", "형식"),
    ("name", "이름"),
    ("collection", "컬렉션"),
    ("items", "항목들"),
    ("str", "문자열"),
    ("color", "색"),
    ("attr", "특성"),
    ("actual", "실제값"),
    ("expect", "기대값"),
    ("op", "연산자"),
    ("obj", "대상"),
];

/// Join fragments into a noun phrase. Case is left as-is.
pub fn noun_phrase<S: AsRef<str>>(fragments: &[S]) -> String {
    fragments
        .iter()
        .map(|f| f.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Describe a parameter by its name, falling back to [`DEFAULT_PARAM_PHRASE`].
pub fn param_description(name: &str) -> &'static str {
    let key = name.to_lowercase();
    PARAM_PHRASES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, phrase)| *phrase)
        .unwrap_or(DEFAULT_PARAM_PHRASE)
}
