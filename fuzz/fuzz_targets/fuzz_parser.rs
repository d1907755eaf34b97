#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use intset::IntSet;
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, SeedableRng};

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Bytes the grammar reacts to, plus a little junk to probe the rejection
/// paths (sign, letter, tab, a non-UTF-8 byte).
static ALPHABET: &[u8] = b"0123456789{}, \t-a\xFF";

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// A sketch of a literal drawn structurally from fuzzer bytes: the numbers
/// to render plus spacing decisions. Values above `i32::MAX` are kept so the
/// overflow rejection gets exercised too.
#[derive(Debug, Arbitrary)]
struct LiteralSketch {
    values: Vec<u32>,
    pads: Vec<u8>,
    trailing_space: bool,
}

impl LiteralSketch {
    fn render(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.push(b'{');
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                // Keep the comma against the number; a padded separator
                // only admits a single following digit.
                out.push(b',');
            }
            self.pad(i, &mut out);
            out.extend_from_slice(v.to_string().as_bytes());
        }
        self.pad(self.values.len(), &mut out);
        out.push(b'}');
        if self.trailing_space {
            out.push(b' ');
        }
        out
    }

    fn pad(&self, idx: usize, out: &mut Vec<u8>) {
        if self.pads.is_empty() {
            return;
        }
        let n = self.pads[idx % self.pads.len()] % 3;
        for _ in 0..n {
            out.push(b' ');
        }
    }
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    match seed % 10 {
        0 => structured(data, size, max_size),
        1 => sprinkle(data, size, max_size),
        _ => fuzzer_mutate(data, size, max_size),
    }
}

/// Replace the input with a freshly rendered literal sketch.
fn structured(data: &mut [u8], size: usize, max_size: usize) -> usize {
    let budget = with_rng(|rng| rng.random_range(8..=size.max(8) * 2).min(max_size.max(8)));
    let bytes: Vec<u8> = with_rng(|rng| (0..budget).map(|_| rng.random::<u8>()).collect());
    let rendered = match LiteralSketch::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
        Ok(sketch) => sketch.render(),
        Err(_) => return fuzzer_mutate(data, size, max_size),
    };

    let len = rendered.len().min(max_size);
    data[..len].copy_from_slice(&rendered[..len]);
    len
}

/// Overwrite a few positions with grammar-relevant bytes.
fn sprinkle(data: &mut [u8], size: usize, max_size: usize) -> usize {
    if size == 0 {
        return fuzzer_mutate(data, size, max_size);
    }
    with_rng(|rng| {
        let edits = rng.random_range(1..=4usize);
        for _ in 0..edits {
            let pos = rng.random_range(0..size);
            data[pos] = ALPHABET[rng.random_range(0..ALPHABET.len())];
        }
    });
    size
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

fn parser(data: &[u8]) {
    let text = String::from_utf8_lossy(data);
    let Ok(set) = text.parse::<IntSet>() else {
        return;
    };

    // Accepted inputs must canonicalize: strictly increasing elements, every
    // element findable, and the rendered form re-parses to an equal set.
    let elems = set.as_slice();
    assert!(elems.windows(2).all(|w| w[0] < w[1]));
    for &v in elems {
        assert!(set.contains(v));
    }
    let rendered = set.to_string();
    let reparsed: IntSet = rendered.parse().expect("canonical form must re-parse");
    assert_eq!(reparsed, set);
}

fuzz_target!(|data: &[u8]| parser(data));
