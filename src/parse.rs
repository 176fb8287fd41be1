// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Translating text to tokens. `next_token` takes exactly one token
//! off the front of a string and hands back the rest; `tokens` turns
//! a whole string into a token stream, skipping whitespace. The only
//! tokens that denote nesting are `Token::Open` and `Token::Close`.
//! See [read](../read/index.html) if interested in trees rather than
//! tokens.

use crate::number::read_integer;
use kstring::KString;
use thiserror::Error;
use genawaiter::rc::Gen;
use std::fmt::Write;

fn take_while_and_rest<'s>(
    s: &'s str, pred: impl Fn(char) -> bool
) -> (&'s str, &'s str) {
    if let Some(i) = s.find(|c| ! pred(c)) {
        (&s[0..i], &s[i..])
    } else {
        (s, "")
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    #[error("invalid token: -")]
    InvalidNumericToken,
    #[error("unexpected end of input in string delimited by '\"'")]
    UnterminatedString,
    #[error("integer literal out of range: {0}")]
    IntegerOutOfRange(KString),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Open,
    Close,
    Integer(i64),
    Text(KString),
    Symbol(KString),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        match self {
            Token::Open => f.write_char('('),
            Token::Close => f.write_char(')'),
            Token::Integer(n) => f.write_fmt(format_args!("{}", n)),
            Token::Text(s) => f.write_fmt(format_args!("\"{}\"", s)),
            Token::Symbol(s) => f.write_str(s),
        }
    }
}

pub fn maybe_open_close(c: char) -> Option<Token> {
    match c {
        '(' => Some(Token::Open),
        ')' => Some(Token::Close),
        _ => None
    }
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c == '(' || c == ')'
}

// The run up to the next delimiter, which must be all digits.
fn read_digits(s: &str) -> Result<(&str, &str), ParseError> {
    let (run, rest) = take_while_and_rest(s, |c| ! is_delimiter(c));
    if let Some(c) = run.chars().find(|c| ! c.is_ascii_digit()) {
        return Err(ParseError::UnexpectedCharacter(c))
    }
    Ok((run, rest))
}

fn read_integer_token(
    is_neg: bool, s: &str
) -> Result<(Token, &str), ParseError> {
    let (digits, rest) = read_digits(s)?;
    if digits.is_empty() {
        return Err(ParseError::InvalidNumericToken)
    }
    if let Some(n) = read_integer(is_neg, digits) {
        Ok((Token::Integer(n), rest))
    } else {
        let mut literal = String::new();
        if is_neg {
            literal.push('-');
        }
        literal.push_str(digits);
        Err(ParseError::IntegerOutOfRange(KString::from_string(literal)))
    }
}

/// Take one token off the front of `s`, returning it together with
/// the unconsumed rest, or None if `s` is empty. Leading whitespace
/// is not skipped (the caller has to strip it), and the rest may
/// start with whitespace.
///
/// A `-` starts a negative integer; whitespace between the `-` and
/// its digits is allowed. Integers end at a parenthesis, whitespace
/// or the end of input, and any other non-digit before that is an
/// error. Everything not starting with a parenthesis, `"`, `-` or a
/// digit is a symbol, running up to a parenthesis or whitespace.
pub fn next_token(s: &str) -> Result<Option<(Token, &str)>, ParseError> {
    let mut cs = s.chars();
    let c = if let Some(c) = cs.next() {
        c
    } else {
        return Ok(None)
    };
    let rest = cs.as_str();
    if let Some(t) = maybe_open_close(c) {
        Ok(Some((t, rest)))
    } else if c == '"' {
        if let Some(i) = rest.find('"') {
            Ok(Some((Token::Text(KString::from_ref(&rest[..i])),
                     &rest[i + 1..])))
        } else {
            Err(ParseError::UnterminatedString)
        }
    } else if c == '-' {
        read_integer_token(true, rest.trim_start()).map(Some)
    } else if c.is_ascii_digit() {
        read_integer_token(false, s).map(Some)
    } else {
        // c is part of the symbol even if it were a delimiter
        let (run, rest) = take_while_and_rest(rest, |c| ! is_delimiter(c));
        let name = &s[..c.len_utf8() + run.len()];
        Ok(Some((Token::Symbol(KString::from_ref(name)), rest)))
    }
}

/// All tokens of `s`, whitespace between them dropped. The stream
/// ends after the first error.
pub fn tokens<'s>(
    s: &'s str
) -> impl Iterator<Item = Result<Token, ParseError>> + 's
{
    Gen::new(|co| async move {
        let mut s = s;
        loop {
            s = s.trim_start();
            match next_token(s) {
                Err(e) => {
                    co.yield_(Err(e)).await;
                    return;
                }
                Ok(None) => return,
                Ok(Some((t, rest))) => {
                    co.yield_(Ok(t)).await;
                    s = rest;
                }
            }
        }
    }).into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(s: &str) -> (Token, &str) {
        next_token(s).unwrap().unwrap()
    }

    fn sym(s: &str) -> Token {
        Token::Symbol(KString::from_ref(s))
    }

    #[test]
    fn t_parens() {
        assert_eq!(tok("(a"), (Token::Open, "a"));
        assert_eq!(tok(") b"), (Token::Close, " b"));
        assert_eq!(next_token(""), Ok(None));
    }

    #[test]
    fn t_text() {
        assert_eq!(tok("\"hoge\")"),
                   (Token::Text(KString::from_ref("hoge")), ")"));
        assert_eq!(tok("\"a (b) -c\" x"),
                   (Token::Text(KString::from_ref("a (b) -c")), " x"));
        assert_eq!(tok("\"\""), (Token::Text(KString::from_ref("")), ""));
        assert_eq!(next_token("\"abc"), Err(ParseError::UnterminatedString));
    }

    #[test]
    fn t_integers() {
        assert_eq!(tok("123)"), (Token::Integer(123), ")"));
        assert_eq!(tok("0 1"), (Token::Integer(0), " 1"));
        assert_eq!(tok("-42"), (Token::Integer(-42), ""));
        assert_eq!(tok("- \n 7(x"), (Token::Integer(-7), "(x"));
        assert_eq!(tok("-0"), (Token::Integer(0), ""));
    }

    #[test]
    fn t_integer_errors() {
        assert_eq!(next_token("-"), Err(ParseError::InvalidNumericToken));
        assert_eq!(next_token("- )"), Err(ParseError::InvalidNumericToken));
        assert_eq!(next_token("-a"), Err(ParseError::UnexpectedCharacter('a')));
        assert_eq!(next_token("12x3"), Err(ParseError::UnexpectedCharacter('x')));
        assert_eq!(next_token("1\"a\""), Err(ParseError::UnexpectedCharacter('"')));
        assert_eq!(next_token("99999999999999999999"),
                   Err(ParseError::IntegerOutOfRange(
                       KString::from_ref("99999999999999999999"))));
        assert_eq!(ParseError::InvalidNumericToken.to_string(), "invalid token: -");
    }

    #[test]
    fn t_symbols() {
        assert_eq!(tok("Int 30"), (sym("Int"), " 30"));
        assert_eq!(tok("_Let)"), (sym("_Let"), ")"));
        assert_eq!(tok("a\"b\" c"), (sym("a\"b\""), " c"));
        assert_eq!(tok("x-1"), (sym("x-1"), ""));
        assert_eq!(tok("λx"), (sym("λx"), ""));
    }

    #[test]
    fn t_tokens() {
        let ts: Result<Vec<Token>, ParseError> =
            tokens("  (Sub (Int 30)\n\t(Var \"x\")) ").collect();
        assert_eq!(ts.unwrap(),
                   vec![Token::Open, sym("Sub"),
                        Token::Open, sym("Int"), Token::Integer(30), Token::Close,
                        Token::Open, sym("Var"), Token::Text(KString::from_ref("x")),
                        Token::Close,
                        Token::Close]);
        let mut ts = tokens("(a -b c");
        assert_eq!(ts.next(), Some(Ok(Token::Open)));
        assert_eq!(ts.next(), Some(Ok(sym("a"))));
        assert_eq!(ts.next(), Some(Err(ParseError::UnexpectedCharacter('b'))));
        assert_eq!(ts.next(), None);
    }

    #[test]
    fn t_token_display() {
        let s: Vec<String> = tokens("(Var \"x\" -3)")
            .map(|t| t.unwrap().to_string())
            .collect();
        assert_eq!(s, vec!["(", "Var", "\"x\"", "-3", ")"]);
    }
}
