use alloc::{
    boxed::Box,
    string::{String, ToString},
    vec::Vec,
};

use quickcheck::{Arbitrary, Gen};

use crate::IntSet;

/// Draws an element from a dense non-negative pool so that generated sets
/// overlap often, with an occasional full-range value for wide formatting.
/// Elements stay non-negative because the literal grammar has no sign.
fn element(g: &mut Gen) -> i32 {
    if usize::arbitrary(g) % 8 == 0 {
        i32::arbitrary(g).rem_euclid(i32::MAX)
    } else {
        i32::arbitrary(g).rem_euclid(300)
    }
}

impl Arbitrary for IntSet {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 24;
        (0..len).map(|_| element(g)).collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let elems: Vec<i32> = self.iter().collect();
        Box::new(elems.shrink().map(IntSet::from))
    }
}

/// A valid literal with randomized spacing, paired with the set it denotes.
#[derive(Debug, Clone)]
pub(crate) struct SpacedLiteral {
    pub(crate) text: String,
    pub(crate) set: IntSet,
}

impl Arbitrary for SpacedLiteral {
    fn arbitrary(g: &mut Gen) -> Self {
        let set = IntSet::arbitrary(g);
        let mut elems: Vec<i32> = set.iter().collect();
        // The parser canonicalizes, so render order is free.
        if bool::arbitrary(g) {
            elems.reverse();
        }

        // No space between a number and its comma: after a space-committed
        // number the consumed separator admits only a single following
        // digit.
        let mut text = String::new();
        pad(&mut text, g);
        text.push('{');
        let mut first = true;
        for v in elems {
            if !first {
                text.push(',');
            }
            first = false;
            pad(&mut text, g);
            text.push_str(&v.to_string());
        }
        pad(&mut text, g);
        text.push('}');
        pad(&mut text, g);

        Self { text, set }
    }
}

fn pad(text: &mut String, g: &mut Gen) {
    for _ in 0..usize::arbitrary(g) % 3 {
        text.push(' ');
    }
}
