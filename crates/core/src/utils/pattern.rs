/// Escape character used with `LIKE ... ESCAPE`
pub const LIKE_ESCAPE: char = '\\';

/// Build a lower-cased `LIKE` pattern matching `text` anywhere in a value.
///
/// `%`, `_` and the escape character itself are escaped so user text only
/// ever matches literally.
pub fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');

    for c in text.to_lowercase().chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }

    pattern.push('%');
    pattern
}
