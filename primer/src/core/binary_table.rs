//! Character to binary-string table, ordered by character.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Ordered mapping from character to the base-2 text of its code point.
pub type BinaryTable = BTreeMap<char, String>;

pub const DEFAULT_RANGE: RangeInclusive<char> = 'A'..='F';

/// Base-2 digits of `c`'s code point, most significant bit first, unpadded.
pub fn binary_repr(c: char) -> String {
    format!("{:b}", u32::from(c))
}

/// Build a table with one entry per character in the closed `range`.
///
/// A reversed range yields an empty table.
pub fn build_table(range: RangeInclusive<char>) -> BinaryTable {
    let mut table = BinaryTable::new();
    for c in range {
        table.insert(c, binary_repr(c));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_matches_known_codes() {
        let table = build_table(DEFAULT_RANGE);
        let expected = [
            ('A', "1000001"),
            ('B', "1000010"),
            ('C', "1000011"),
            ('D', "1000100"),
            ('E', "1000101"),
            ('F', "1000110"),
        ];
        for (letter, binary) in expected {
            assert_eq!(table.get(&letter).map(String::as_str), Some(binary));
        }
    }

    #[test]
    fn iterates_in_ascending_order() {
        let table = build_table(DEFAULT_RANGE);
        let keys: String = table.keys().collect();
        assert_eq!(keys, "ABCDEF");
    }

    #[test]
    fn contains_exactly_the_range() {
        let table = build_table(DEFAULT_RANGE);
        assert_eq!(table.len(), 6);
        assert!(table.keys().all(|c| DEFAULT_RANGE.contains(c)));
    }

    #[test]
    fn reversed_range_is_empty() {
        #[allow(clippy::reversed_empty_ranges)]
        let table = build_table('F'..='A');
        assert!(table.is_empty());
    }

    #[test]
    fn single_character_range_includes_both_ends() {
        let table = build_table('Z'..='Z');
        assert_eq!(table.len(), 1);
        assert_eq!(table[&'Z'], "1011010");
    }

    #[test]
    fn binary_repr_has_no_leading_zeros() {
        assert_eq!(binary_repr('\0'), "0");
        assert_eq!(binary_repr('\u{1}'), "1");
        assert_eq!(binary_repr('a'), "1100001");
    }
}
