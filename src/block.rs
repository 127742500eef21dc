//! Builds `///` XML doc blocks. Lines are returned without indentation or
//! terminators; the reconciler adds both.

use crate::heuristic;
use crate::matcher::parameter_names;
use crate::overrides::OverrideDoc;
use crate::phrase::param_description;

/// Block with only a `<summary>` element.
pub fn summary_block(summary: &str) -> Vec<String> {
    vec![
        "/// <summary>".to_string(),
        format!("/// {}", summary),
        "/// </summary>".to_string(),
    ]
}

/// Block for a method or constructor.
///
/// `return_type` of `None` or `void` emits no `<returns>` line. Override
/// descriptions win per parameter and for the return value; everything else
/// falls back to the heuristics.
pub fn method_block(
    name: &str,
    summary: &str,
    return_type: Option<&str>,
    params: &str,
    overrides: Option<&OverrideDoc>,
) -> Vec<String> {
    let mut block = summary_block(summary);

    for param in parameter_names(params) {
        let desc = overrides
            .and_then(|o| o.params.get(&param))
            .map(String::as_str)
            .unwrap_or_else(|| param_description(&param));
        block.push(format!("/// <param name=\"{}\">{}</param>", param, desc));
    }

    if let Some(ret) = return_type.filter(|r| *r != "void") {
        let desc = overrides
            .and_then(|o| o.returns.as_deref())
            .or_else(|| heuristic::return_hint(name))
            .unwrap_or_else(|| heuristic::returns_from_summary(summary));
        tracing::trace!(name, ret, desc, "returns line");
        block.push(format!("/// <returns>{}</returns>", desc));
    }

    block
}
