// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The tree produced by [read](../read/index.html).

//! A [Node](Node) is either a leaf (integer, text, symbol) or a
//! sequence of nodes, written in parentheses in the source. There
//! are no improper lists and no cycles. `Display` gives the canonical
//! source form, which reads back to an equal tree.

//! Trees can be nested far deeper than the native stack would allow
//! (see [DEEP](../settings/constant.DEEP.html)), so nothing here
//! recurses: printing, comparing, cloning and dropping all walk the
//! tree via [Events](Events).

use kstring::KString;
use std::fmt::Write;

pub enum Node {
    Integer(i64),
    /// The characters between two `"`, verbatim.
    Text(KString),
    Symbol(KString),
    Sequence(Vec<Node>),
}

/// One step of a walk through a tree in source order.
#[derive(Debug, Clone, Copy)]
pub enum Event<'t> {
    /// Never a `Node::Sequence`.
    Leaf(&'t Node),
    Open,
    /// Between two children of the same sequence.
    Separator,
    Close,
}

enum Step<'t> {
    Visit(&'t Node),
    Separator,
    Close,
}

pub struct Events<'t> {
    steps: Vec<Step<'t>>,
}

impl<'t> Iterator for Events<'t> {
    type Item = Event<'t>;

    fn next(&mut self) -> Option<Event<'t>> {
        match self.steps.pop()? {
            Step::Visit(Node::Sequence(vals)) => {
                self.steps.push(Step::Close);
                for (i, v) in vals.iter().enumerate().rev() {
                    self.steps.push(Step::Visit(v));
                    if i > 0 {
                        self.steps.push(Step::Separator);
                    }
                }
                Some(Event::Open)
            }
            Step::Visit(leaf) => Some(Event::Leaf(leaf)),
            Step::Separator => Some(Event::Separator),
            Step::Close => Some(Event::Close),
        }
    }
}

fn fmt_leaf(f: &mut std::fmt::Formatter<'_>, leaf: &Node)
            -> Result<(), std::fmt::Error> {
    match leaf {
        Node::Integer(n) => f.write_fmt(format_args!("{}", n)),
        Node::Text(s) => f.write_fmt(format_args!("\"{}\"", s)),
        Node::Symbol(s) => f.write_str(s),
        Node::Sequence(_) => f.write_str("()"),
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        for e in self.events() {
            match e {
                Event::Leaf(leaf) => fmt_leaf(f, leaf)?,
                Event::Open => f.write_char('(')?,
                Event::Separator => f.write_char(' ')?,
                Event::Close => f.write_char(')')?,
            }
        }
        Ok(())
    }
}

fn same_event(a: &Event, b: &Event) -> bool {
    match (a, b) {
        (Event::Leaf(Node::Integer(m)), Event::Leaf(Node::Integer(n))) => m == n,
        (Event::Leaf(Node::Text(s)), Event::Leaf(Node::Text(t))) => s == t,
        (Event::Leaf(Node::Symbol(s)), Event::Leaf(Node::Symbol(t))) => s == t,
        (Event::Open, Event::Open)
            | (Event::Separator, Event::Separator)
            | (Event::Close, Event::Close) => true,
        _ => false,
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Node) -> bool {
        let mut a = self.events();
        let mut b = other.events();
        loop {
            match (a.next(), b.next()) {
                (None, None) => return true,
                (Some(x), Some(y)) if same_event(&x, &y) => {}
                _ => return false,
            }
        }
    }
}

impl Eq for Node {}

impl Clone for Node {
    fn clone(&self) -> Node {
        // The open sequences, innermost last; the bottom one collects
        // the result.
        let mut stack: Vec<Vec<Node>> = vec![Vec::new()];
        for e in self.events() {
            match e {
                Event::Leaf(Node::Integer(n)) => stack_push(&mut stack, Node::Integer(*n)),
                Event::Leaf(Node::Text(s)) => stack_push(&mut stack, Node::Text(s.clone())),
                Event::Leaf(Node::Symbol(s)) => stack_push(&mut stack, Node::Symbol(s.clone())),
                Event::Leaf(Node::Sequence(_)) | Event::Separator => {}
                Event::Open => stack.push(Vec::new()),
                Event::Close => {
                    if let Some(vals) = stack.pop() {
                        stack_push(&mut stack, Node::Sequence(vals));
                    }
                }
            }
        }
        stack.pop()
            .and_then(|mut vals| vals.pop())
            .unwrap_or_else(|| Node::Sequence(Vec::new()))
    }
}

fn stack_push(stack: &mut [Vec<Node>], v: Node) {
    if let Some(top) = stack.last_mut() {
        top.push(v);
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        if let Node::Sequence(vals) = self {
            if vals.iter().all(Node::is_leaf) {
                return
            }
            let mut pending = std::mem::take(vals);
            while let Some(mut v) = pending.pop() {
                if let Node::Sequence(children) = &mut v {
                    pending.append(children);
                }
                // v is dropped here without children
            }
        }
    }
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        ! matches!(self, Node::Sequence(_))
    }

    /// Walk the tree without recursion.
    pub fn events(&self) -> Events<'_> {
        Events { steps: vec![Step::Visit(self)] }
    }

    pub fn as_integer(&self) -> Option<i64> {
        if let Node::Integer(n) = self { Some(*n) } else { None }
    }

    pub fn as_text(&self) -> Option<&str> {
        if let Node::Text(s) = self { Some(s.as_str()) } else { None }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        if let Node::Symbol(s) = self { Some(s.as_str()) } else { None }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        if let Node::Sequence(v) = self { Some(v) } else { None }
    }

    /// Split a tagged form like `(Sub (Int 1) (Int 2))` into its tag
    /// and its arguments. None for leaves, empty sequences, and
    /// sequences not starting with a symbol.
    pub fn head_symbol(&self) -> Option<(&str, &[Node])> {
        let (first, rest) = self.as_sequence()?.split_first()?;
        Some((first.as_symbol()?, rest))
    }
}

/// Easily create a symbol
pub fn symbol(s: &str) -> Node {
    Node::Symbol(KString::from_ref(s))
}

/// Easily create a text leaf
pub fn text(s: &str) -> Node {
    Node::Text(KString::from_ref(s))
}

/// Easily create a tagged form with one argument, like `(Int 30)`
pub fn tagged1(tag: &str, a: Node) -> Node {
    Node::Sequence(vec![symbol(tag), a])
}

/// Easily create a tagged form with two arguments, like `(App f x)`
pub fn tagged2(tag: &str, a: Node, b: Node) -> Node {
    Node::Sequence(vec![symbol(tag), a, b])
}
