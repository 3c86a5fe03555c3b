//! Decimal numeral syntax check

/// Check whether `text` looks like a decimal numeral
///
/// Accepted: an optional leading `+`/`-`, digits, and at most one `.`
/// anywhere. A lone sign or a lone `.` is rejected, while forms such as
/// `"1."`, `".5"` and `"-.5"` pass. No exponent or whitespace.
pub fn is_decimal_numeral(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    if !first.is_ascii_digit() && !matches!(first, '.' | '-' | '+') {
        return false;
    }
    if text.len() == 1 {
        return first.is_ascii_digit();
    }

    let mut dots = usize::from(first == '.');
    for ch in chars {
        match ch {
            '0'..='9' => {},
            '.' => {
                dots += 1;
                if dots > 1 {
                    return false;
                }
            },
            _ => return false,
        }
    }
    true
}
