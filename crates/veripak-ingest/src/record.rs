//! Single-line record parsing for the VeriPak delimited dialect.
//!
//! The dialect is RFC4180-like (quote-wrap fields containing commas or
//! quotes, double embedded quotes) but deliberately lenient: fields are
//! trimmed of surrounding whitespace, an unterminated quote at end of line
//! degrades into literal text, and nothing here ever errors. Malformed
//! quoting produces a best-effort split, never a rejection.

/// Split one line into trimmed field values.
///
/// A single left-to-right scan with one quote-state boolean. Quotes only
/// control tokenization; characters between them pass through untouched.
/// The trailing accumulator is always emitted, so an empty line yields one
/// empty field.
pub fn parse_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    // Doubled quote inside a quoted field is a literal quote.
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Split raw text into non-blank logical lines.
pub fn tokenize_lines(raw: &str) -> Vec<&str> {
    raw.split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect()
}
