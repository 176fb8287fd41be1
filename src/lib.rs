// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A small S-expression reader, meant as the front end of a toy
//! expression language (constants, variables, subtraction,
//! conditionals, one-argument functions and application), whose
//! programs are written as tagged forms like
//! `(Sub (Int 1) (Var "x"))`.
//! 
//! * `sexptree::parse` gives direct access to the tokenizer,
//!   `sexptree::read` builds an in-memory tree of
//!   [Node](value::Node)s from a string.
//! 
//! * The notation knows integers (optionally negative, base 10),
//!   texts in double quotes (no escapes), bare symbols, and
//!   parenthesized sequences. There are no comments and no floating
//!   point numbers.
//! 
//! * Unmatched parentheses are tolerated unless
//!   [STRICT](settings::STRICT) settings are used; arbitrarily deep
//!   nesting can be read with [DEEP](settings::DEEP) settings, which
//!   use an explicit stack instead of recursion.
//! 
//! Interpreting the tagged forms is left to the caller.

pub mod debug;
pub mod number;
pub mod parse;
pub mod read;
pub mod settings;
pub mod value;
