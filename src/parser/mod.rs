//! The clause parser.
//!
//! Turns a textual clause over `~`, `&`, `|`, `=>`, `<=>`, parentheses, and case-insensitive alphanumeric symbols into an [Expression] tree.
//!
//! Parsing runs in three passes:
//!
//! 1. Validation: every character must be a symbol character, an operator character, a parenthesis, or whitespace, and parentheses must balance.
//!    Whitespace is then stripped and symbols upper-cased, so `a b` reads as the single symbol `AB`.
//! 2. Implicit grouping: a rewrite of the character stream which brackets every bare infix application.
//!    Walking the stream with a parenthesis depth, an operator at depth zero wraps everything emitted so far in a fresh group, and the symbol run to the operator's right closes the innermost open group.
//!    The effect is that bare infix operators all bind with the same strength and fold strictly left to right, `~` binds the immediately following symbol run, and a written parenthesis opens a group --- though a written group containing more than one operator is closed early by the rewrite, with its tail spilling to the enclosing level.
//!    That spill is deliberate, long-standing behaviour which stored knowledge depends on, and the rewrite reproduces it exactly.
//! 3. A recursive descent over the grouped stream, folding operators left to right at each depth.
//!    The rewrite leaves some closing parentheses implicit at the end of the stream, so the descent treats end-of-input as closing every open group.
//!
//! Multi-character operators are matched greedily during the rewrite: a `=` not beginning `=>`, or a `<` not beginning `<=>`, is a syntax error, as is a stray `>`.

use crate::{
    misc::log::targets::{self},
    structures::expression::Expression,
    types::err::ParseError,
};

/// Parse a textual clause into an expression tree.
///
/// ```rust
/// # use clausal::parser::parse;
/// # use clausal::structures::expression::Expression;
/// let parsed = parse("~a | b").unwrap();
///
/// let by_hand = Expression::or(
///     Expression::not(Expression::literal("A")),
///     Expression::literal("B"),
/// );
/// assert_eq!(parsed, by_hand);
/// ```
pub fn parse(text: &str) -> Result<Expression, ParseError> {
    for character in text.chars() {
        let legal = character.is_whitespace()
            || character.is_ascii_alphanumeric()
            || "()|&~=><".contains(character);
        if !legal {
            return Err(ParseError::IllegalCharacter(character));
        }
    }

    let stripped: Vec<char> = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if stripped.is_empty() {
        return Err(ParseError::Empty);
    }

    check_balance(&stripped)?;

    let grouped = insert_implicit_groups(stripped)?;
    log::trace!(
        target: targets::PARSER,
        "implicit grouping of {text:?}: {:?}",
        grouped.iter().collect::<String>()
    );

    let tokens = tokenize(&grouped)?;

    let mut descent = Descent { tokens, index: 0 };
    let expression = descent.expression()?;

    match descent.tokens.get(descent.index) {
        None => Ok(expression),
        Some(Token::Close) => Err(ParseError::UnbalancedParenthesis),
        Some(token) => Err(ParseError::UnexpectedToken(token.to_string())),
    }
}

/// Characters which may begin an operator.
///
/// `>` is absent: it never begins an operator, and is rejected by the tokeniser when not consumed as part of `=>` or `<=>`.
fn is_operator_radix(c: char) -> bool {
    matches!(c, '|' | '&' | '~' | '=' | '<')
}

fn check_balance(stripped: &[char]) -> Result<(), ParseError> {
    let mut depth: usize = 0;
    for character in stripped {
        match character {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(decremented) => depth = decremented,
                None => return Err(ParseError::UnbalancedParenthesis),
            },
            _ => {}
        }
    }
    match depth {
        0 => Ok(()),
        _ => Err(ParseError::UnbalancedParenthesis),
    }
}

/// The implicit grouping rewrite (pass 2 above).
///
/// The output stream may omit closing parentheses at the very end; the descent tolerates this.
fn insert_implicit_groups(mut stream: Vec<char>) -> Result<Vec<char>, ParseError> {
    if stream.first() != Some(&'(') {
        stream.insert(0, '(');
    }

    let mut out: Vec<char> = Vec::with_capacity(stream.len() + 8);
    let mut depth: i32 = 0;
    let mut after_operator = false;

    let mut i = 0;
    while i < stream.len() {
        let c = stream[i];

        if c == '(' {
            depth += 1;
            after_operator = false;
        } else if c == ')' {
            depth -= 1;
            after_operator = false;
        } else if is_operator_radix(c) {
            // A bare operator at depth zero groups everything emitted so far as its left operand.
            if depth == 0 {
                out.insert(0, '(');
                depth += 1;
            }
            after_operator = true;

            if c == '<' {
                if stream.get(i + 1) != Some(&'=') || stream.get(i + 2) != Some(&'>') {
                    let fragment = stream[i..(i + 3).min(stream.len())].iter().collect();
                    return Err(ParseError::MalformedOperator(fragment));
                }
                out.extend(['<', '=', '>']);
                i += 3;
                continue;
            }
            if c == '=' {
                if stream.get(i + 1) != Some(&'>') {
                    let fragment = stream[i..(i + 2).min(stream.len())].iter().collect();
                    return Err(ParseError::MalformedOperator(fragment));
                }
                out.extend(['=', '>']);
                i += 2;
                continue;
            }
        } else if depth > 0 && after_operator {
            // The symbol run to the right of an operator closes the innermost open group.
            out.push(c);
            let run: Vec<char> = stream[i + 1..]
                .iter()
                .take_while(|&&r| !is_operator_radix(r) && r != '(' && r != ')')
                .copied()
                .collect();
            out.extend(run.iter().copied());
            out.push(')');
            depth -= 1;
            after_operator = false;
            i += 1 + run.len();
            continue;
        }

        // A written closer arriving just after a synthesised closer is redundant.
        if out.last() == Some(&')') && c == ')' {
            depth += 1;
            i += 1;
            continue;
        }

        out.push(c);
        i += 1;
    }

    Ok(out)
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Symbol(String),
    Not,
    And,
    Or,
    Imply,
    Iff,
    Open,
    Close,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Symbol(name) => write!(f, "{name}"),
            Token::Not => write!(f, "~"),
            Token::And => write!(f, "&"),
            Token::Or => write!(f, "|"),
            Token::Imply => write!(f, "=>"),
            Token::Iff => write!(f, "<=>"),
            Token::Open => write!(f, "("),
            Token::Close => write!(f, ")"),
        }
    }
}

fn tokenize(stream: &[char]) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();

    let mut i = 0;
    while i < stream.len() {
        match stream[i] {
            '(' => {
                tokens.push(Token::Open);
                i += 1;
            }
            ')' => {
                tokens.push(Token::Close);
                i += 1;
            }
            '~' => {
                tokens.push(Token::Not);
                i += 1;
            }
            '&' => {
                tokens.push(Token::And);
                i += 1;
            }
            '|' => {
                tokens.push(Token::Or);
                i += 1;
            }
            '=' => match stream.get(i + 1) {
                Some('>') => {
                    tokens.push(Token::Imply);
                    i += 2;
                }
                _ => return Err(ParseError::MalformedOperator("=".to_string())),
            },
            '<' => match (stream.get(i + 1), stream.get(i + 2)) {
                (Some('='), Some('>')) => {
                    tokens.push(Token::Iff);
                    i += 3;
                }
                _ => return Err(ParseError::MalformedOperator("<".to_string())),
            },
            c if c.is_ascii_alphanumeric() => {
                let mut name = String::new();
                while let Some(r) = stream.get(i) {
                    match r.is_ascii_alphanumeric() {
                        true => {
                            name.push(*r);
                            i += 1;
                        }
                        false => break,
                    }
                }
                tokens.push(Token::Symbol(name));
            }
            c => return Err(ParseError::MalformedOperator(c.to_string())),
        }
    }

    Ok(tokens)
}

struct Descent {
    tokens: Vec<Token>,
    index: usize,
}

impl Descent {
    /// A left fold of equal-strength infix applications at the current depth.
    ///
    /// Returns at a closing parenthesis without consuming it, or at the end of the stream.
    fn expression(&mut self) -> Result<Expression, ParseError> {
        let mut expression = self.operand("(")?;

        loop {
            match self.tokens.get(self.index) {
                None | Some(Token::Close) => return Ok(expression),

                Some(Token::And) => {
                    self.index += 1;
                    let right = self.operand("&")?;
                    expression = Expression::and(expression, right);
                }

                Some(Token::Or) => {
                    self.index += 1;
                    let right = self.operand("|")?;
                    expression = Expression::or(expression, right);
                }

                Some(Token::Imply) => {
                    self.index += 1;
                    let right = self.operand("=>")?;
                    expression = Expression::imply(expression, right);
                }

                Some(Token::Iff) => {
                    self.index += 1;
                    let right = self.operand("<=>")?;
                    expression = Expression::bi_conditional(expression, right);
                }

                Some(token) => return Err(ParseError::UnexpectedToken(token.to_string())),
            }
        }
    }

    /// A single operand: a symbol, a negation, or a parenthesised group.
    ///
    /// `after` names the construct awaiting the operand, for the error on a stream which ends too soon.
    fn operand(&mut self, after: &str) -> Result<Expression, ParseError> {
        match self.tokens.get(self.index) {
            None => Err(ParseError::DanglingOperator(after.to_string())),

            Some(Token::Symbol(name)) => {
                let literal = Expression::literal(name.clone());
                self.index += 1;
                Ok(literal)
            }

            Some(Token::Not) => {
                self.index += 1;
                Ok(Expression::not(self.operand("~")?))
            }

            Some(Token::Open) => {
                self.index += 1;
                let inner = self.expression()?;
                // The grouping rewrite leaves closers at the end of the stream implicit.
                if let Some(Token::Close) = self.tokens.get(self.index) {
                    self.index += 1;
                }
                Ok(inner)
            }

            Some(token) => Err(ParseError::UnexpectedToken(token.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illegal_characters_fail_before_parsing() {
        assert_eq!(parse("vcv|d@&fsg"), Err(ParseError::IllegalCharacter('@')));
        assert_eq!(
            parse("((A & B) & C] | D"),
            Err(ParseError::IllegalCharacter(']'))
        );
        assert!(parse("V&YU-&&&").is_err());
    }

    #[test]
    fn malformed_operators_fail() {
        assert!(matches!(
            parse("A = B"),
            Err(ParseError::MalformedOperator(_))
        ));
        assert!(matches!(
            parse("A <= B"),
            Err(ParseError::MalformedOperator(_))
        ));
        assert!(matches!(
            parse("A > B"),
            Err(ParseError::MalformedOperator(_))
        ));
    }

    #[test]
    fn unbalanced_parentheses_fail() {
        assert_eq!(parse("((A & B)"), Err(ParseError::UnbalancedParenthesis));
        assert_eq!(parse(")A("), Err(ParseError::UnbalancedParenthesis));
    }

    #[test]
    fn dangling_operators_fail() {
        assert_eq!(parse("A &"), Err(ParseError::DanglingOperator("&".to_string())));
        assert_eq!(parse("~"), Err(ParseError::DanglingOperator("~".to_string())));
    }

    #[test]
    fn empty_input_fails() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn whitespace_is_insignificant() {
        assert_eq!(parse("A 1 2"), Ok(Expression::literal("A12")));
        assert_eq!(parse(" ~x "), parse("~X"));
    }
}
