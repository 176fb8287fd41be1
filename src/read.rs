// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Building trees from text. The result of a read is the root
//! `Node::Sequence`, whose children are the top-level forms; its
//! parentheses are implicit.

use crate::parse::{Token, ParseError, next_token, tokens};
use crate::settings::{Settings, Strategy, PERMISSIVE};
use crate::value::Node;
use std::io::Write;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    #[error("{0}")]
    PE(#[from] ParseError),
    #[error("nesting too deep")]
    NestingTooDeep,
    #[error("unexpected closing character ')'")]
    UnexpectedClosingParen,
    #[error("premature end of input while expecting closing character ')'")]
    PrematureEofExpectingClosingParen,
}

fn leaf(t: Token) -> Option<Node> {
    match t {
        Token::Integer(n) => Some(Node::Integer(n)),
        Token::Text(s) => Some(Node::Text(s)),
        Token::Symbol(s) => Some(Node::Symbol(s)),
        Token::Open | Token::Close => None,
    }
}

// At the end of input with sequences still open.
fn end_inside_sequence(
    settings: &Settings, depth: u32
) -> Result<(), ReadError> {
    if settings.strict_parens {
        return Err(ReadError::PrematureEofExpectingClosingParen)
    }
    debug!(depth, "closing sequences left open at end of input");
    Ok(())
}

// A ')' at the top level.
fn unmatched_close(settings: &Settings) -> Result<(), ReadError> {
    if settings.strict_parens {
        return Err(ReadError::UnexpectedClosingParen)
    }
    debug!("unmatched ')' ends the read, ignoring the rest");
    Ok(())
}

// Read and fill a vector of nodes up to the ')' closing the level at
// `depth` (0 being the top level), and return it together with the
// text after that ')'. At the end of input the vector is returned as
// it is, with an empty rest.
fn slurp<'s>(
    s: &'s str,
    settings: &Settings,
    depth: u32,
) -> Result<(Vec<Node>, &'s str), ReadError>
{
    let mut v = Vec::new();
    let mut s = s;
    loop {
        let (t, rest) = match next_token(s.trim_start())? {
            Some(tr) => tr,
            None => {
                if depth > 0 {
                    end_inside_sequence(settings, depth)?;
                }
                return Ok((v, ""))
            }
        };
        match t {
            Token::Open => {
                if depth >= settings.max_depth {
                    return Err(ReadError::NestingTooDeep)
                }
                trace!(depth = depth + 1, "open");
                let (child, rest) = slurp(rest, settings, depth + 1)?;
                v.push(Node::Sequence(child));
                s = rest;
            }
            Token::Close => {
                if depth == 0 {
                    unmatched_close(settings)?;
                } else {
                    trace!(depth, "close");
                }
                return Ok((v, rest))
            }
            t => {
                v.extend(leaf(t));
                s = rest;
            }
        }
    }
}

// Same as `slurp` at depth 0, but keeping the open sequences on an
// explicit stack.
fn slurp_iterative(
    s: &str,
    settings: &Settings,
) -> Result<Vec<Node>, ReadError>
{
    let mut stack: Vec<Vec<Node>> = Vec::new();
    let mut depth: u32 = 0;
    let mut v = Vec::new();
    for te in tokens(s) {
        match te? {
            Token::Open => {
                if depth >= settings.max_depth {
                    return Err(ReadError::NestingTooDeep)
                }
                depth += 1;
                trace!(depth, "open");
                stack.push(std::mem::take(&mut v));
            }
            Token::Close => {
                if let Some(parent) = stack.pop() {
                    trace!(depth, "close");
                    depth -= 1;
                    let child = std::mem::replace(&mut v, parent);
                    v.push(Node::Sequence(child));
                } else {
                    unmatched_close(settings)?;
                    return Ok(v)
                }
            }
            t => v.extend(leaf(t)),
        }
    }
    if depth > 0 {
        end_inside_sequence(settings, depth)?;
    }
    while let Some(parent) = stack.pop() {
        let child = std::mem::replace(&mut v, parent);
        v.push(Node::Sequence(child));
    }
    Ok(v)
}

/// The top-level forms in `s`.
pub fn read_forms_with(
    s: &str,
    settings: &Settings,
) -> Result<Vec<Node>, ReadError>
{
    let v = match settings.strategy {
        Strategy::Recursive => slurp(s, settings, 0)?.0,
        Strategy::Iterative => slurp_iterative(s, settings)?,
    };
    debug!(forms = v.len(), strategy = ?settings.strategy, "read complete");
    Ok(v)
}

pub fn read_forms(s: &str) -> Result<Vec<Node>, ReadError> {
    read_forms_with(s, &PERMISSIVE)
}

/// The program tree for `s`: a `Node::Sequence` holding the
/// top-level forms.
pub fn read_str_with(
    s: &str,
    settings: &Settings,
) -> Result<Node, ReadError>
{
    Ok(Node::Sequence(read_forms_with(s, settings)?))
}

/// `read_str_with` using `PERMISSIVE` settings.
pub fn read_str(s: &str) -> Result<Node, ReadError> {
    read_str_with(s, &PERMISSIVE)
}

/// Write each value in canonical form, on a line of its own.
pub fn write_all<'t>(
    out: impl Write,
    vals: impl IntoIterator<Item = &'t Node>
) -> Result<(), std::io::Error> {
    let mut out = out; // for `File`
    for v in vals.into_iter() {
        writeln!(out, "{}", v)?;
    }
    Ok(())
}

/// Source text that reads back to `root`. For a `Node::Sequence` these
/// are its children, one per line, as the root's own parentheses are
/// implicit; a leaf is just written.
pub fn to_source(root: &Node) -> String {
    if let Node::Sequence(vals) = root {
        let mut out = String::new();
        for v in vals {
            out.push_str(&v.to_string());
            out.push('\n');
        }
        out
    } else {
        root.to_string()
    }
}
