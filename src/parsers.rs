use std::{fmt::Display, str::FromStr};

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a positive `usize` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, None)
}

/// Parse a chunk size in characters, with an optional `k`/`m` suffix
/// (binary multiples, e.g. `64k` = 65536).
///
/// # Errors
/// Returns an error for a malformed number, zero, or an overflowing product.
pub fn parse_chunk_size(s: &str) -> Result<usize, String> {
    let s = s.trim().replace('_', "");
    let lower = s.to_ascii_lowercase();
    let (num_str, multiplier) = split_suffix(&lower);
    let num = parse_positive_usize(num_str)?;
    num.checked_mul(multiplier)
        .ok_or_else(|| format!("chunk size too large: {s}"))
}

fn split_suffix(s: &str) -> (&str, usize) {
    const KI: usize = 1024;
    const MI: usize = KI * 1024;
    const SUFFIXES: &[(&[&str], usize)] = &[(&["mi", "m"], MI), (&["ki", "k"], KI)];
    for (suffixes, multiplier) in SUFFIXES {
        for suffix in *suffixes {
            if let Some(stripped) = s.strip_suffix(suffix) {
                return (stripped.trim(), *multiplier);
            }
        }
    }
    (s, 1)
}
