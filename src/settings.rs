// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Settings for reading text into trees.

/// How the tree builder keeps track of open sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One native stack frame per nesting level.
    Recursive,
    /// An explicit stack of open sequences, fed by the token stream;
    /// nesting depth is then only limited by `max_depth` and memory.
    Iterative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Report unmatched parentheses as errors. When false, a stray
    /// `)` ends the current level (at the top level: the whole
    /// read), and a missing `)` is supplied at the end of input.
    pub strict_parens: bool,
    /// Maximum nesting of sequences below the root. With
    /// `Strategy::Recursive` each level takes a native stack frame,
    /// so this has to stay well below what the calling thread's
    /// stack holds (a default Linux thread manages about 1000).
    pub max_depth: u32,
    pub strategy: Strategy,
}

pub const PERMISSIVE : Settings = Settings {
    strict_parens: false,
    max_depth: 500,
    strategy: Strategy::Recursive,
};

pub const STRICT : Settings = Settings {
    strict_parens: true,
    max_depth: 500,
    strategy: Strategy::Recursive,
};

pub const DEEP : Settings = Settings {
    strict_parens: false,
    max_depth: u32::MAX,
    strategy: Strategy::Iterative,
};

impl Default for Settings {
    fn default() -> Self {
        PERMISSIVE
    }
}
