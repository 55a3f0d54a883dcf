//! Accented characters and their ASCII replacements.

/// Default substitutions: Spanish vowels with acute accent and eñe, both cases.
const CHAR_MAP: &[(char, char)] = &[
    ('á', 'a'),
    ('Á', 'A'),
    ('é', 'e'),
    ('É', 'E'),
    ('í', 'i'),
    ('Í', 'I'),
    ('ó', 'o'),
    ('Ó', 'O'),
    ('ú', 'u'),
    ('Ú', 'U'),
    ('ñ', 'n'),
    ('Ñ', 'N'),
];

/// ASCII replacement for `c`, if it has one.
pub fn replacement(c: char) -> Option<char> {
    CHAR_MAP
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}

/// Replacement for a whole regex match. Only single-character matches with a map entry
/// are substituted; anything else comes back unchanged.
pub fn replace_match(matched: &str) -> Option<char> {
    let mut chars = matched.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => replacement(c),
        _ => None,
    }
}

/// All (accented, ascii) pairs in the map.
pub fn entries() -> &'static [(char, char)] {
    CHAR_MAP
}
