//! Utility macros.
//!
//! `MK_TOKEN!` builds a Token instance; it keeps the tokenizer's
//! construction sites short.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$span` - The token's byte range in the source
/// * `$line` - The 1-based line the token starts on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, Span { start: 0, end: 2 }, 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $span:expr, $line:expr) => {
        Token {
            kind: $kind,
            span: $span,
            line: $line,
        }
    };
}
