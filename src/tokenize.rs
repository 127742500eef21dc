//! Identifier tokenizer. Splits `GetXMLValue2` into `Get`, `XML`, `Value`, `2`.
//!
//! A fragment is one of:
//! - an optional capital followed by lowercase letters (`Value`, `get`)
//! - an uppercase run not followed by a lowercase letter (`XML`, `A`)
//! - a run of digits
//!
//! Anything else (underscores, non-ASCII) separates fragments and is dropped.

/// Split an identifier into its word fragments, case preserved.
pub fn split_identifier(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut fragments = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_lowercase() {
            let end = run_end(&chars, i, |c| c.is_ascii_lowercase());
            fragments.push(chars[i..end].iter().collect());
            i = end;
        } else if c.is_ascii_uppercase() {
            let upper_end = run_end(&chars, i, |c| c.is_ascii_uppercase());
            let followed_by_lower = chars.get(upper_end).is_some_and(|c| c.is_ascii_lowercase());
            if !followed_by_lower {
                fragments.push(chars[i..upper_end].iter().collect());
                i = upper_end;
            } else if upper_end - i > 1 {
                // The last capital starts the next word: `XMLValue` -> `XML`, `Value`
                fragments.push(chars[i..upper_end - 1].iter().collect());
                i = upper_end - 1;
            } else {
                let end = run_end(&chars, upper_end, |c| c.is_ascii_lowercase());
                fragments.push(chars[i..end].iter().collect());
                i = end;
            }
        } else if c.is_ascii_digit() {
            let end = run_end(&chars, i, |c| c.is_ascii_digit());
            fragments.push(chars[i..end].iter().collect());
            i = end;
        } else {
            i += 1;
        }
    }

    fragments
}

fn run_end(chars: &[char], start: usize, pred: impl Fn(char) -> bool) -> usize {
    let mut end = start;
    while end < chars.len() && pred(chars[end]) {
        end += 1;
    }
    end
}
