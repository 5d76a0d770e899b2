//! Turkish diacritic folding
//!
//! Words arrive from the URL path with Turkish letters. Before they are
//! placed into the upstream query, a fixed set of accented letters is folded
//! to its plain Latin counterpart:
//!
//! | in  | out | in  | out |
//! |-----|-----|-----|-----|
//! | ç   | c   | Ç   | C   |
//! | ğ   | g   |     |     |
//! | ı   | i   | İ   | I   |
//! | ö   | o   | Ö   | O   |
//! | ş   | s   | Ş   | S   |
//! | ü   | u   | Ü   | U   |
//!
//! The table is case-sensitive and exact. `Ğ` is deliberately absent and
//! passes through unchanged.

use std::borrow::Cow;

/// Map a single character through the substitution table
///
/// Returns `None` for characters outside the table.
pub fn fold_char(c: char) -> Option<char> {
    match c {
        'ç' => Some('c'),
        'ğ' => Some('g'),
        'ı' => Some('i'),
        'İ' => Some('I'),
        'ö' => Some('o'),
        'ş' => Some('s'),
        'ü' => Some('u'),
        'Ç' => Some('C'),
        'Ö' => Some('O'),
        'Ş' => Some('S'),
        'Ü' => Some('U'),
        _ => None,
    }
}

/// Fold the Turkish letters in `input` to plain Latin letters
///
/// Total and side-effect free. Input without any table character is
/// returned borrowed; otherwise a new string is built with one output
/// character per input character.
///
/// # Example
///
/// ```
/// use wordgate::normalize;
///
/// assert_eq!(normalize("çiçek"), "cicek");
/// assert_eq!(normalize("İstanbul"), "Istanbul");
/// ```
pub fn normalize(input: &str) -> Cow<'_, str> {
    let Some(first) = input.find(|c: char| fold_char(c).is_some()) else {
        return Cow::Borrowed(input);
    };

    let mut out = String::with_capacity(input.len());
    out.push_str(&input[..first]);
    out.extend(input[first..].chars().map(|c| fold_char(c).unwrap_or(c)));
    Cow::Owned(out)
}
