use std::collections::HashMap;

/// Rightmost-occurrence shift table for the quick-search matcher.
///
/// A character at pattern index `i` shifts by `m - i`; later occurrences
/// overwrite earlier ones. Characters absent from the pattern shift by `m + 1`.
#[derive(Debug, Clone)]
pub struct ShiftTable {
    shifts: HashMap<char, usize>,
    default_shift: usize,
}

impl ShiftTable {
    pub fn new(pattern: &[char]) -> Self {
        let len = pattern.len();
        let mut shifts = HashMap::with_capacity(len);
        for (idx, ch) in pattern.iter().enumerate() {
            shifts.insert(*ch, len - idx);
        }
        Self {
            shifts,
            default_shift: len + 1,
        }
    }

    pub fn shift(&self, ch: char) -> usize {
        self.shifts.get(&ch).copied().unwrap_or(self.default_shift)
    }
}

/// A pattern compiled once and reused across every candidate of a scan.
#[derive(Debug, Clone)]
pub struct QuickSearch {
    pattern: Vec<char>,
    table: ShiftTable,
}

impl QuickSearch {
    pub fn new(pattern: &str) -> Self {
        let pattern: Vec<char> = pattern.chars().collect();
        let table = ShiftTable::new(&pattern);
        Self { pattern, table }
    }

    /// Compiles a lower-cased pattern for case-insensitive scans.
    pub fn ignore_case(pattern: &str) -> Self {
        Self::new(&pattern.to_lowercase())
    }

    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    pub fn find_in(&self, text: &[char]) -> Option<usize> {
        scan(&self.pattern, text, &self.table)
    }

    pub fn find(&self, text: &str) -> Option<usize> {
        let text: Vec<char> = text.chars().collect();
        self.find_in(&text)
    }

    /// Lower-cases `haystack` and reports whether the (already lower-cased)
    /// pattern occurs in it.
    pub fn matches_ignore_case(&self, haystack: &str) -> bool {
        let text: Vec<char> = haystack.to_lowercase().chars().collect();
        self.find_in(&text).is_some()
    }
}

/// Returns the char offset of the leftmost occurrence of `pattern` in `text`.
pub fn find(pattern: &[char], text: &[char]) -> Option<usize> {
    let table = ShiftTable::new(pattern);
    scan(pattern, text, &table)
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    QuickSearch::ignore_case(needle).matches_ignore_case(haystack)
}

fn scan(pattern: &[char], text: &[char], table: &ShiftTable) -> Option<usize> {
    let m = pattern.len();
    let n = text.len();
    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    let mut pos = 0usize;
    while pos + m <= n {
        if text[pos..pos + m] == *pattern {
            return Some(pos);
        }
        let next = text.get(pos + m)?;
        pos += table.shift(*next);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{QuickSearch, ShiftTable, contains_ignore_case, find};
    use proptest::prelude::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn shift_table_keeps_rightmost_occurrence() {
        let table = ShiftTable::new(&chars("abca"));
        assert_eq!(table.shift('a'), 1);
        assert_eq!(table.shift('b'), 3);
        assert_eq!(table.shift('c'), 2);
        assert_eq!(table.shift('z'), 5);
    }

    #[test]
    fn finds_leftmost_occurrence() {
        assert_eq!(find(&chars("shirt"), &chars("red shirt blue shirt")), Some(4));
        assert_eq!(find(&chars("red"), &chars("red shirt")), Some(0));
        assert_eq!(find(&chars("hat"), &chars("red hat")), Some(4));
    }

    #[test]
    fn empty_pattern_matches_at_start() {
        assert_eq!(find(&[], &chars("anything")), Some(0));
        assert_eq!(find(&[], &[]), Some(0));
    }

    #[test]
    fn pattern_longer_than_text_never_matches() {
        assert_eq!(find(&chars("longer"), &chars("long")), None);
    }

    #[test]
    fn lookahead_past_end_stops_scan() {
        assert_eq!(find(&chars("xyz"), &chars("abcd")), None);
        assert_eq!(find(&chars("cd"), &chars("abcd")), Some(2));
    }

    #[test]
    fn repeated_characters_do_not_skip_matches() {
        assert_eq!(find(&chars("aab"), &chars("aaaab")), Some(2));
        assert_eq!(find(&chars("abab"), &chars("abaabab")), Some(3));
    }

    #[test]
    fn case_insensitive_containment() {
        assert!(contains_ignore_case("Classic Wool Sweater", "WOOL"));
        assert!(contains_ignore_case("Ärmel Jacke", "ärm"));
        assert!(!contains_ignore_case("Denim Jacket", "wool"));
    }

    #[test]
    fn compiled_pattern_reports_char_offsets() {
        let search = QuickSearch::new("é");
        assert_eq!(search.find("café"), Some(3));
        assert_eq!(search.pattern_len(), 1);
    }

    proptest! {
        #[test]
        fn agrees_with_naive_containment(pattern in "[a-cA-C ]{0,4}", text in "[a-dA-D ]{0,24}") {
            let expected = text.to_lowercase().contains(&pattern.to_lowercase());
            prop_assert_eq!(contains_ignore_case(&text, &pattern), expected);
        }

        #[test]
        fn reports_same_position_as_naive_scan(pattern in "[ab]{1,3}", text in "[abc]{0,20}") {
            let p = chars(&pattern);
            let t = chars(&text);
            let naive = if p.len() > t.len() {
                None
            } else {
                (0..=t.len() - p.len()).find(|start| t[*start..*start + p.len()] == p[..])
            };
            prop_assert_eq!(find(&p, &t), naive);
        }
    }
}
