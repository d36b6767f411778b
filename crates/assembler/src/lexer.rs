//! Tokenizer for stacksim listing text.

use crate::error::AsmError;

/// A single token from a listing line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// An address marker `N:`, setting the load address of its line.
    Marker(usize),
    /// An identifier (opcode mnemonic). Always uppercase.
    Ident(String),
    /// A signed decimal literal.
    Number(i64),
}

/// Tokenize a single line of listing text.
///
/// Returns an empty Vec for blank lines and comment-only lines.
/// Comments start with `;` and extend to end of line.
pub(crate) fn tokenize_line(line: &str, line_num: usize) -> Result<Vec<Token>, AsmError> {
    // Strip comment
    let line = match line.find(';') {
        Some(pos) => &line[..pos],
        None => line,
    };

    let mut tokens = Vec::new();
    for word in line.split_whitespace() {
        let token = if let Some(prefix) = word.strip_suffix(':') {
            let addr: usize = prefix.parse().map_err(|_| AsmError::InvalidNumber {
                line: line_num,
                token: word.to_string(),
            })?;
            Token::Marker(addr)
        } else if word.starts_with('-')
            || word.as_bytes().first().is_some_and(|b| b.is_ascii_digit())
        {
            let value: i64 = word.parse().map_err(|_| AsmError::InvalidNumber {
                line: line_num,
                token: word.to_string(),
            })?;
            Token::Number(value)
        } else {
            Token::Ident(word.to_uppercase())
        };
        tokens.push(token);
    }

    Ok(tokens)
}
