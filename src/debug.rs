// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Utilities for debugging: a structural rendering of trees, in
//! which every symbol is tagged so that it can't be confused with
//! text, e.g. `[[Symbol("Int"), 30]]` for the source `(Int 30)`.

use crate::value::{Event, Node};

impl Node {
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for e in self.events() {
            match e {
                Event::Leaf(Node::Integer(n)) => out.push_str(&n.to_string()),
                Event::Leaf(Node::Text(s)) => out.push_str(&format!("{:?}", s.as_str())),
                Event::Leaf(Node::Symbol(s)) => {
                    out.push_str(&format!("Symbol({:?})", s.as_str()))
                }
                Event::Leaf(Node::Sequence(_)) => out.push_str("[]"),
                Event::Open => out.push('['),
                Event::Separator => out.push_str(", "),
                Event::Close => out.push(']'),
            }
        }
        out
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        f.write_str(&self.dump())
    }
}
