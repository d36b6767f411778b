//! Parser for listing tokens → one program record per line.

use stacksim_common::Opcode;

use crate::error::AsmError;
use crate::lexer::Token;

/// One parsed listing line, before address resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedLine {
    /// Explicit load address, if the line carried an `N:` marker.
    pub(crate) address: Option<usize>,
    pub(crate) opcode: Opcode,
    pub(crate) operand: Option<i64>,
}

/// Parse the tokens of a single line.
///
/// Returns `Ok(None)` for blank lines (empty token list). Operand *range*
/// is not checked here; out-of-range values are the loader's call.
pub(crate) fn parse_line(
    tokens: &[Token],
    line_num: usize,
) -> Result<Option<ParsedLine>, AsmError> {
    if tokens.is_empty() {
        return Ok(None);
    }

    let (address, rest) = match tokens {
        [Token::Marker(addr), rest @ ..] => (Some(*addr), rest),
        _ => (None, tokens),
    };

    let (mnemonic, args) = match rest {
        [Token::Ident(s), args @ ..] => (s.as_str(), args),
        [token, ..] => {
            return Err(AsmError::UnexpectedToken {
                line: line_num,
                token: render(token),
            })
        }
        [] => {
            // A bare address marker with no instruction after it.
            return Err(AsmError::UnexpectedToken {
                line: line_num,
                token: render(&tokens[0]),
            });
        }
    };

    let opcode: Opcode = mnemonic.parse().map_err(|_| AsmError::UnknownOpcode {
        line: line_num,
        token: mnemonic.to_string(),
    })?;

    let operand = if opcode.requires_operand() {
        match args {
            [Token::Number(value), ..] => Some(*value),
            [token, ..] => {
                return Err(AsmError::UnexpectedToken {
                    line: line_num,
                    token: render(token),
                })
            }
            [] => {
                return Err(AsmError::MissingOperand {
                    line: line_num,
                    opcode: opcode.mnemonic(),
                })
            }
        }
    } else {
        None
    };

    let consumed = usize::from(operand.is_some());
    if let Some(extra) = args.get(consumed) {
        return Err(AsmError::UnexpectedToken {
            line: line_num,
            token: render(extra),
        });
    }

    Ok(Some(ParsedLine {
        address,
        opcode,
        operand,
    }))
}

/// Render a token the way it appeared in the source, for error messages.
fn render(token: &Token) -> String {
    match token {
        Token::Marker(addr) => format!("{addr}:"),
        Token::Ident(s) => s.clone(),
        Token::Number(n) => n.to_string(),
    }
}
