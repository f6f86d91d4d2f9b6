//! Accent-insensitive text matching helpers for the character search.
//!
//! The two sides of a search comparison are folded differently: the user's
//! term is NFD-decomposed and stripped of combining diacritical marks
//! (below), while the stored column is folded at query time via SQL
//! `TRANSLATE` with the fixed table. No generic Unicode normalization inside
//! PostgreSQL is assumed.

use unicode_normalization::UnicodeNormalization;

/// Accented characters recognized by the column-side fold, in table order.
///
/// Covers the Latin-1 vowels (with grave, acute, circumflex, tilde, and
/// diaeresis), n-tilde, and c-cedilla, in both cases.
pub const ACCENTED: &str =
    "áàãâäéèêëíìîïóòõôöúùûüñçÁÀÃÂÄÉÈÊËÍÌÎÏÓÒÕÔÖÚÙÛÜÑÇ";

/// Unaccented replacements, positionally aligned with [`ACCENTED`].
pub const FOLDED: &str =
    "aaaaaeeeeiiiiooooouuuuncAAAAAEEEEIIIIOOOOOUUUUNC";

/// Combining diacritical marks block, dropped from decomposed terms.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Normalize a free-text search term: decompose to NFD, strip combining
/// diacritical marks, then lower-case.
///
/// Decomposition makes the fold independent of how the input was typed --
/// precomposed "é" and "e" + combining acute normalize identically -- and
/// covers diacritics beyond the Latin-1 block, such as the macron vowels
/// common in romanized names.
///
/// The result is suitable for wrapping in `%…%` and comparing against a
/// column folded with [`folded_column`].
///
/// # Examples
///
/// ```
/// use narutodex_core::text::normalize_term;
/// assert_eq!(normalize_term("Clã"), "cla");
/// assert_eq!(normalize_term("JIRAIYA"), "jiraiya");
/// assert_eq!(normalize_term("Mangekyō"), "mangekyo");
/// ```
pub fn normalize_term(term: &str) -> String {
    term.nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Build the SQL expression that folds and lower-cases a column so it can be
/// compared against a term produced by [`normalize_term`].
///
/// `expr` must be a trusted column reference, never user input.
pub fn folded_column(expr: &str) -> String {
    format!("LOWER(TRANSLATE({expr}, '{ACCENTED}', '{FOLDED}'))")
}

/// Wrap a normalized term for substring containment matching.
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", normalize_term(term))
}
