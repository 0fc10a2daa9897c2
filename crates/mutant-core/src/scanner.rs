//! Repeated-run scanning over linear sequences
//!
//! A sequence is a row, a column or a diagonal pulled out of a grid. The
//! scanner counts consecutive equal symbols in a single pass, which gives the
//! same answer as sliding a `min_run` window and comparing every element to
//! the first of the window.

/// A run of identical symbols inside a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<S> {
    /// Index of the first symbol of the run
    pub start: usize,
    /// Length of the maximal run starting at `start`
    pub len: usize,
    pub symbol: S,
}

/// True iff `seq` holds `min_run` consecutive identical symbols
///
/// Sequences shorter than `min_run` are never a match. A `min_run` of 0 or 1
/// matches any non-empty sequence.
pub fn has_repeated_run<S: PartialEq>(seq: &[S], min_run: usize) -> bool {
    first_run_start(seq, min_run).is_some()
}

/// First run of at least `min_run` identical symbols, if any
pub fn find_run<S: Copy + PartialEq>(seq: &[S], min_run: usize) -> Option<Run<S>> {
    let start = first_run_start(seq, min_run)?;
    Some(run_at(seq, start))
}

/// Longest run in the sequence; the earliest wins ties
pub fn longest_run<S: Copy + PartialEq>(seq: &[S]) -> Option<Run<S>> {
    let mut best: Option<Run<S>> = None;
    let mut start = 0;
    while start < seq.len() {
        let run = run_at(seq, start);
        if best.is_none_or(|b| run.len > b.len) {
            best = Some(run);
        }
        start += run.len;
    }
    best
}

fn first_run_start<S: PartialEq>(seq: &[S], min_run: usize) -> Option<usize> {
    if seq.is_empty() || seq.len() < min_run {
        return None;
    }
    if min_run <= 1 {
        return Some(0);
    }

    let mut start = 0;
    for i in 1..seq.len() {
        if seq[i] != seq[start] {
            start = i;
        }
        if i + 1 - start >= min_run {
            return Some(start);
        }
    }
    None
}

fn run_at<S: Copy + PartialEq>(seq: &[S], start: usize) -> Run<S> {
    let symbol = seq[start];
    let len = seq[start..].iter().take_while(|&&s| s == symbol).count();
    Run { start, len, symbol }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_run_of_four() {
        assert!(has_repeated_run(&chars("AAAACA"), 4));
        assert!(has_repeated_run(&chars("CAGGGG"), 4));
        assert!(has_repeated_run(&chars("TTTT"), 4));
    }

    #[test]
    fn test_run_of_three_is_not_enough() {
        assert!(!has_repeated_run(&chars("AAATAA"), 4));
        assert!(!has_repeated_run(&chars("AGATCA"), 4));
    }

    #[test]
    fn test_short_sequence_never_matches() {
        assert!(!has_repeated_run(&chars("AAA"), 4));
        assert!(!has_repeated_run::<char>(&[], 4));
        assert!(!has_repeated_run::<char>(&[], 0));
    }

    #[test]
    fn test_trivial_min_run() {
        assert!(has_repeated_run(&chars("A"), 1));
        assert!(has_repeated_run(&chars("AC"), 0));
    }

    #[test]
    fn test_find_run_reports_maximal_run() {
        let run = find_run(&chars("CAAAAAG"), 4).unwrap();
        assert_eq!(
            run,
            Run {
                start: 1,
                len: 5,
                symbol: 'A'
            }
        );
        assert_eq!(find_run(&chars("CAAAG"), 4), None);
    }

    #[test]
    fn test_longest_run() {
        let run = longest_run(&chars("AACCCGGG")).unwrap();
        assert_eq!(run.start, 2);
        assert_eq!(run.len, 3);
        assert_eq!(run.symbol, 'C');
        assert_eq!(longest_run::<char>(&[]), None);
    }
}
