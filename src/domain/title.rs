/// Canonical form of a post title, used for equality checks only.
///
/// Trims, lowercases and folds the curly/angled single and double quote
/// families (including primes) to their ASCII counterparts. Nothing else is
/// touched: inner whitespace, punctuation and accents are kept as-is.
pub fn normalize_title(title: &str) -> String {
    title
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2032}' | '\u{2035}' => '\'',
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' | '\u{2033}' | '\u{2036}' => '"',
            _ => c,
        })
        .collect()
}
