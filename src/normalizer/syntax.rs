//! Rewrite caller patterns so shorthand classes match like browser regexes.
//!
//! `\s` is the ECMAScript whitespace set (no NEL, includes BOM). `\d`, `\w` and `\b`
//! are ASCII-only.

/// ECMAScript `\s` as a character class.
pub const WHITESPACE_CLASS: &str =
    r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

const NON_WHITESPACE_CLASS: &str =
    r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

const DIGIT_CLASS: &str = "[0-9]";
const NON_DIGIT_CLASS: &str = "[^0-9]";
const WORD_CLASS: &str = "[0-9A-Za-z_]";
const NON_WORD_CLASS: &str = "[^0-9A-Za-z_]";

/// Replacement for the escape `\c`, if it needs one. Classes nest inside `[...]`.
fn shorthand(c: char, in_class: bool) -> Option<&'static str> {
    match c {
        's' => Some(WHITESPACE_CLASS),
        'S' => Some(NON_WHITESPACE_CLASS),
        'd' => Some(DIGIT_CLASS),
        'D' => Some(NON_DIGIT_CLASS),
        'w' => Some(WORD_CLASS),
        'W' => Some(NON_WORD_CLASS),
        // Backspace inside a class.
        'b' if in_class => Some(r"\x08"),
        'b' => Some(r"(?-u:\b)"),
        'B' if !in_class => Some(r"(?-u:\B)"),
        _ => None,
    }
}

/// Rewrite `\s \S \d \D \w \W \b \B`; every other escape is kept as written.
pub fn translate(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut class_depth = 0usize;
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(next) => match shorthand(next, class_depth > 0) {
                    Some(rep) => out.push_str(rep),
                    None => {
                        out.push('\\');
                        out.push(next);
                    }
                },
                // Trailing backslash; let the regex parser report it.
                None => out.push('\\'),
            },
            '[' => {
                class_depth += 1;
                out.push(c);
            }
            ']' if class_depth > 0 => {
                class_depth -= 1;
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
