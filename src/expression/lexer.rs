//! Tokenizer for formulas.

use crate::root_finding::errors::EvaluationError;


#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Identifier(String),
    Plus, Minus, Star, Slash, Percent, Power,
    LParen, RParen, Comma,
}

/// A token and the byte offset it starts at.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Spanned {
    pub token:    Token,
    pub position: usize,
}


/// Splits `input` into tokens. `**` and `^` both become [`Token::Power`].
pub(crate) fn tokenize(input: &str) -> Result<Vec<Spanned>, EvaluationError> {
    let mut tokens = Vec::new();
    let mut chars  = input.char_indices().peekable();

    while let Some(&(position, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c.is_ascii_digit() || c == '.' {
            let mut num_str = String::new();
            while let Some(&(_, d)) = chars.peek() {
                if d.is_ascii_digit() || d == '.' {
                    num_str.push(d);
                    chars.next();
                } else {
                    break;
                }
            }

            // exponent: only if followed by a digit (optionally signed)
            if let Some(&(i, 'e' | 'E')) = chars.peek() {
                let rest = &input[i + 1..];
                let signed = rest.starts_with(['+', '-']);
                let digits = if signed { &rest[1..] } else { rest };
                if digits.starts_with(|d: char| d.is_ascii_digit()) {
                    num_str.push('e');
                    chars.next();
                    if signed {
                        if let Some((_, s)) = chars.next() {
                            num_str.push(s);
                        }
                    }
                    while let Some(&(_, d)) = chars.peek() {
                        if d.is_ascii_digit() {
                            num_str.push(d);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                }
            }

            let value = num_str.parse::<f64>().map_err(|_| EvaluationError::Syntax {
                position,
                message: format!("invalid number `{num_str}`"),
            })?;
            tokens.push(Spanned { token: Token::Number(value), position });
        } else if c.is_alphabetic() || c == '_' {
            let mut ident = String::new();
            while let Some(&(_, d)) = chars.peek() {
                if d.is_alphanumeric() || d == '_' || d == '.' {
                    ident.push(d);
                    chars.next();
                } else {
                    break;
                }
            }
            tokens.push(Spanned { token: Token::Identifier(ident), position });
        } else {
            chars.next();
            let token = match c {
                '+' => Token::Plus,
                '-' => Token::Minus,
                '*' => {
                    if let Some(&(_, '*')) = chars.peek() {
                        chars.next();
                        Token::Power
                    } else {
                        Token::Star
                    }
                }
                '/' => Token::Slash,
                '%' => Token::Percent,
                '^' => Token::Power,
                '(' => Token::LParen,
                ')' => Token::RParen,
                ',' => Token::Comma,
                _ => {
                    return Err(EvaluationError::Syntax {
                        position,
                        message: format!("unexpected character `{c}`"),
                    });
                }
            };
            tokens.push(Spanned { token, position });
        }
    }

    Ok(tokens)
}
