//! Property-based tests for reading
//!
//! - printing a tree and reading it back gives the same tree
//! - `-n` reads as the integer -n, with or without whitespace after
//!   the minus sign
//! - whitespace between tokens does not change the tree
//! - the recursive and the explicit-stack builder agree on any input

use proptest::prelude::*;
use sexptree::read::{read_forms, read_str, read_str_with, to_source};
use sexptree::settings::{Settings, Strategy as BuildStrategy, PERMISSIVE, STRICT};
use sexptree::value::{Node, symbol, text};
use std::iter::Cycle;
use std::slice::Iter;

fn leaf_strategy() -> impl Strategy<Value = Node> {
    prop_oneof![
        any::<i64>().prop_map(Node::Integer),
        // Text may hold anything but the quote character
        "[^\"]{0,8}".prop_map(|s| text(&s)),
        "[a-zA-Z_+*/<>=!?][a-zA-Z0-9_+*/<>=!?-]{0,6}".prop_map(|s| symbol(&s)),
    ]
}

fn node_strategy() -> impl Strategy<Value = Node> {
    leaf_strategy().prop_recursive(4, 48, 5, |inner| {
        prop::collection::vec(inner, 0..5).prop_map(Node::Sequence)
    })
}

fn forms_strategy() -> impl Strategy<Value = Vec<Node>> {
    prop::collection::vec(node_strategy(), 0..5)
}

/// Whitespace runs to use next to parentheses (possibly empty) and
/// between siblings (never empty).
struct Spacing<'t> {
    tight: Cycle<Iter<'t, String>>,
    loose: Cycle<Iter<'t, String>>,
}

impl<'t> Spacing<'t> {
    fn tight(&mut self) -> &'t str {
        self.tight.next().map(|s| s.as_str()).unwrap_or("")
    }
    fn loose(&mut self) -> &'t str {
        self.loose.next().map(|s| s.as_str()).unwrap_or(" ")
    }
}

fn render_items(vals: &[Node], sp: &mut Spacing, out: &mut String) {
    out.push_str(sp.tight());
    for (i, v) in vals.iter().enumerate() {
        if i > 0 {
            out.push_str(sp.loose());
        }
        render(v, sp, out);
    }
    out.push_str(sp.tight());
}

fn render(v: &Node, sp: &mut Spacing, out: &mut String) {
    if let Node::Sequence(vals) = v {
        out.push('(');
        render_items(vals, sp, out);
        out.push(')');
    } else {
        out.push_str(&v.to_string());
    }
}

proptest! {
    #[test]
    fn reads_back_printed_trees(vals in forms_strategy()) {
        let root = Node::Sequence(vals);
        let again = read_str(&to_source(&root)).unwrap();
        prop_assert_eq!(again, root);
    }

    #[test]
    fn negative_integers(n in 0..=i64::MAX, ws in "[ \t\n]{0,3}") {
        let forms = read_forms(&format!("-{}{}", ws, n)).unwrap();
        prop_assert_eq!(forms, vec![Node::Integer(-n)]);
        let forms = read_forms(&format!("(Int -{}{})", ws, n)).unwrap();
        prop_assert_eq!(forms, vec![Node::Sequence(vec![symbol("Int"), Node::Integer(-n)])]);
    }

    #[test]
    fn whitespace_is_insignificant(
        vals in forms_strategy(),
        tight in prop::collection::vec("[ \t\r\n]{0,3}", 1..6),
        loose in prop::collection::vec("[ \t\r\n]{1,3}", 1..6),
    ) {
        let mut sp = Spacing {
            tight: tight.iter().cycle(),
            loose: loose.iter().cycle(),
        };
        let mut out = String::new();
        render_items(&vals, &mut sp, &mut out);
        prop_assert_eq!(read_forms(&out).unwrap(), vals);
    }

    #[test]
    fn strategies_agree(s in "[()ab1\\- \"\n]{0,24}") {
        for settings in [PERMISSIVE, STRICT] {
            let iterative = Settings { strategy: BuildStrategy::Iterative, ..settings };
            prop_assert_eq!(read_str_with(&s, &settings),
                            read_str_with(&s, &iterative));
        }
    }
}
