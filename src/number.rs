// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Integer literals. Magnitudes are accumulated without a size limit
//! and the sign is applied before narrowing, so that
//! `-9223372036854775808` is representable while anything outside of
//! `i64` is refused rather than wrapped or saturated.

use num::{BigInt, ToPrimitive};

/// No `i64` magnitude has more significant decimal digits.
const MAX_SIGNIFICANT_DIGITS: usize = 19;

/// `digits` must consist of ASCII decimal digits only. Returns None
/// if it doesn't, or if the signed value does not fit into `i64`.
/// Takes time linear in the length of `digits`.
pub fn read_integer(is_neg: bool, digits: &str) -> Option<i64> {
    let significant = digits.trim_start_matches('0');
    if significant.len() > MAX_SIGNIFICANT_DIGITS {
        return None
    }
    let mut n: BigInt = 0.into();
    for c in significant.chars() {
        if ! c.is_ascii_digit() {
            return None
        }
        n = n * 10 + c.to_digit(10)?;
    }
    let n = if is_neg { -n } else { n };
    n.to_i64()
}
