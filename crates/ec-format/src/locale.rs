//! es-CL number rendering and lenient parsing.

const GROUP_SEP: char = '.';
const DECIMAL_SEP: char = ',';

/// Render `value` with `decimals` fraction digits, `.` for thousands and
/// `,` for decimals. Non-finite values use their `Display` form.
pub fn format_es_cl(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    // no "-0,00"
    if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push(DECIMAL_SEP);
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEP);
        }
        out.push(ch);
    }
    out
}

/// Parse a number written with either decimal convention.
///
/// - `1234.5` and `1234,5`: a single separator is the decimal one
/// - `1.234,50` and `1,234.50`: with both present, the last one is decimal
/// - `1.234.567`: a repeated separator is grouping
///
/// Grouped digits must come in threes. Returns `None` for anything else,
/// including non-finite results.
pub fn parse_locale_number(text: &str) -> Option<f64> {
    let t = text.trim();
    let (negative, body) = match t.as_bytes().first().copied()? {
        b'-' => (true, &t[1..]),
        b'+' => (false, &t[1..]),
        _ => (false, t),
    };

    if body.is_empty()
        || !body
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        || !body.chars().any(|c| c.is_ascii_digit())
    {
        return None;
    }

    let last_dot = body.rfind('.');
    let last_comma = body.rfind(',');
    let dots = body.matches('.').count();
    let commas = body.matches(',').count();

    let (group, decimal) = match (last_dot, last_comma) {
        (Some(d), Some(c)) if d > c => (Some(','), Some('.')),
        (Some(_), Some(_)) => (Some('.'), Some(',')),
        (Some(_), None) if dots == 1 => (None, Some('.')),
        (Some(_), None) => (Some('.'), None),
        (None, Some(_)) if commas == 1 => (None, Some(',')),
        (None, Some(_)) => (Some(','), None),
        (None, None) => (None, None),
    };

    let (int_raw, frac_raw) = match decimal {
        Some(sep) => {
            let (i, f) = body.rsplit_once(sep)?;
            if f.contains(['.', ',']) {
                return None;
            }
            (i, f)
        }
        None => (body, ""),
    };

    let int_digits = match group {
        Some(sep) => ungroup(int_raw, sep)?,
        None => {
            if int_raw.contains(['.', ',']) {
                return None;
            }
            int_raw.to_string()
        }
    };

    let mut normalized = String::with_capacity(int_digits.len() + frac_raw.len() + 3);
    if negative {
        normalized.push('-');
    }
    normalized.push_str(if int_digits.is_empty() { "0" } else { &int_digits });
    if !frac_raw.is_empty() {
        normalized.push('.');
        normalized.push_str(frac_raw);
    }

    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn ungroup(int_raw: &str, sep: char) -> Option<String> {
    let mut groups = int_raw.split(sep);
    let head = groups.next()?;
    if head.is_empty() || head.len() > 3 || !head.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let mut out = head.to_string();
    for g in groups {
        if g.len() != 3 || !g.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        out.push_str(g);
    }
    Some(out)
}
