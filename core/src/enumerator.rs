//! Enumeration of a password space.
//!
//! A password is the representation of a counter in base `|alphabet|`,
//! least significant digit first: the first symbol of the password changes
//! at every step, the last one only every `|alphabet|^(length - 1)` steps.
//! Decoding a counter does not depend on any previous one, so any part of
//! the space can be enumerated independently.

use std::ops::Range;

use crate::ctx::PasswordSpec;

/// Creates the password for a counter.
/// `state` should be lower than the total of the space.
#[inline]
pub fn produce(state: u64, spec: &PasswordSpec) -> String {
    let mut password = String::with_capacity(spec.max_password_len());
    produce_into(state, spec, &mut password);

    password
}

/// Same as [`produce`], but writes the password into an existing buffer.
/// The buffer is cleared first.
#[inline]
pub fn produce_into(mut state: u64, spec: &PasswordSpec, password: &mut String) {
    debug_assert!(state < spec.total(), "state {state} is out of the space");

    let symbols = spec.alphabet().symbols();
    let base = spec.base();

    password.clear();
    for _ in 0..spec.length() {
        password.push_str(&symbols[(state % base) as usize]);
        state /= base;
    }
}

/// Splits `[0, total)` into `parts` disjoint contiguous ranges.
/// The first ranges are one element longer when `total` is not a multiple of `parts`.
pub fn partition(total: u64, parts: u64) -> Vec<Range<u64>> {
    let parts = parts.clamp(1, total.max(1));
    let size = total / parts;
    let remainder = total % parts;

    let mut start = 0;
    (0..parts)
        .map(|i| {
            let end = start + size + u64::from(i < remainder);
            let range = start..end;
            start = end;
            range
        })
        .collect()
}

/// A cursor over a password space.
/// `state` is the number of passwords already produced from the start of the space.
#[derive(Clone, Debug)]
pub struct EnumerationCursor<'a> {
    spec: &'a PasswordSpec,
    state: u64,
    end: u64,
}

impl<'a> EnumerationCursor<'a> {
    /// Creates a cursor at the start of the space.
    pub fn new(spec: &'a PasswordSpec) -> Self {
        Self {
            spec,
            state: 0,
            end: spec.total(),
        }
    }

    /// Creates a cursor over a part of the space.
    pub fn with_range(spec: &'a PasswordSpec, range: Range<u64>) -> Self {
        let end = range.end.min(spec.total());

        Self {
            spec,
            state: range.start.min(end),
            end,
        }
    }

    /// The number of passwords already produced, counted from the start of the space.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// True once the cursor reached the end of its range.
    pub fn is_exhausted(&self) -> bool {
        self.state == self.end
    }

    /// Writes the next password into `password`.
    /// Returns false, leaving the buffer untouched, when the cursor is exhausted.
    #[inline]
    pub fn next_into(&mut self, password: &mut String) -> bool {
        if self.is_exhausted() {
            return false;
        }

        produce_into(self.state, self.spec, password);
        self.state += 1;

        true
    }
}

impl Iterator for EnumerationCursor<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted() {
            return None;
        }

        let password = produce(self.state, self.spec);
        self.state += 1;

        Some(password)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.state).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.state = self.state.saturating_add(n as u64).min(self.end);
        self.next()
    }
}

impl ExactSizeIterator for EnumerationCursor<'_> {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use itertools::Itertools;

    use crate::{
        alphabet::Alphabet,
        ctx::{build_test_spec, PasswordSpecBuilder},
        enumerator::{partition, produce},
    };

    #[test]
    fn test_digit_order() {
        let spec = PasswordSpecBuilder::new()
            .alphabet(Alphabet::from_chars("ab").unwrap())
            .length(2)
            .build()
            .unwrap();

        let passwords = (0..4).map(|i| produce(i, &spec)).collect_vec();
        assert_eq!(vec!["aa", "ba", "ab", "bb"], passwords);
    }

    #[test]
    fn test_produce() {
        let spec = build_test_spec();

        let expected = [
            "aaa", "baa", "caa", "aba", "bba", "cba", "aca", "bca", "cca", "aab",
        ];

        assert!(expected.into_iter().eq((0..10).map(|i| produce(i, &spec))));
        assert_eq!("ccc", produce(spec.total() - 1, &spec));
    }

    #[test]
    fn test_bijection_and_coverage() {
        let spec = build_test_spec();

        let produced = spec.iter().collect_vec();
        assert_eq!(spec.total() as usize, produced.len());
        assert!(produced.iter().all(|password| password.len() == 3));

        // no collision
        let unique: HashSet<_> = produced.iter().cloned().collect();
        assert_eq!(produced.len(), unique.len());

        // every combination of the alphabet appears
        let product: HashSet<String> = (0..spec.length())
            .map(|_| spec.alphabet().iter())
            .multi_cartesian_product()
            .map(|symbols| symbols.concat())
            .collect();
        assert_eq!(product, unique);
    }

    #[test]
    fn test_multi_char_symbols() {
        let spec = PasswordSpecBuilder::new()
            .alphabet(Alphabet::new(["ab", "c", "xyz"]).unwrap())
            .length(2)
            .build()
            .unwrap();

        assert_eq!("abab", produce(0, &spec));
        assert_eq!("cab", produce(1, &spec));
        assert_eq!("abxyz", produce(6, &spec));
        assert_eq!("xyzxyz", produce(8, &spec));
    }

    #[test]
    fn test_cursor_is_restartable() {
        let spec = build_test_spec();

        let mut cursor = spec.iter();
        assert_eq!(27, cursor.len());
        assert_eq!(Some("aaa".to_owned()), cursor.next());
        assert_eq!(1, cursor.state());

        let first = spec.iter().collect_vec();
        let second = spec.iter().collect_vec();
        assert_eq!(first, second);

        // random access matches sequential order
        for (state, password) in first.iter().enumerate() {
            assert_eq!(password, &produce(state as u64, &spec));
        }
    }

    #[test]
    fn test_cursor_range() {
        let spec = build_test_spec();

        let mut cursor = spec.range(25..100);
        assert_eq!(2, cursor.len());

        let mut buf = String::new();
        assert!(cursor.next_into(&mut buf));
        assert_eq!("bcc", buf);
        assert!(cursor.next_into(&mut buf));
        assert_eq!("ccc", buf);
        assert!(!cursor.next_into(&mut buf));
        assert_eq!("ccc", buf);
        assert!(cursor.is_exhausted());
        assert_eq!(27, cursor.state());

        assert_eq!(0, spec.range(40..50).len());
        assert_eq!(Some("ccc".to_owned()), spec.iter().nth(26));
        assert_eq!(None, spec.iter().nth(27));
    }

    #[test]
    fn test_partition() {
        let ranges = partition(10, 3);
        assert_eq!(vec![0..4, 4..7, 7..10], ranges);

        // more parts than elements
        assert_eq!(vec![0..1, 1..2], partition(2, 8));
        assert_eq!(vec![0..5], partition(5, 0));

        let ranges = partition(1_000_003, 7);
        assert_eq!(1_000_003, ranges.iter().map(|r| r.end - r.start).sum::<u64>());
        assert!(ranges.iter().tuple_windows().all(|(a, b)| a.end == b.start));
    }
}
