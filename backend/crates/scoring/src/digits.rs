//! Digit and letter extraction shared by the rules.

/// Decimal digits of `plate` in their original order, as values `0..=9`.
/// Every other character is skipped.
pub fn digit_sequence(plate: &str) -> Vec<u8> {
    plate
        .chars()
        .filter(char::is_ascii_digit)
        .map(|c| c as u8 - b'0')
        .collect()
}

/// ASCII letters of `plate`, uppercased.
pub fn letters(plate: &str) -> impl Iterator<Item = char> + '_ {
    plate
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
}

pub fn count_digit(digits: &[u8], digit: u8) -> usize {
    digits.iter().filter(|&&d| d == digit).count()
}

/// A maximal run of consecutive digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub start: usize,
    pub len: usize,
}

/// Longest maximal run in which every adjacent pair satisfies `links`.
///
/// Ties go to the earliest run. Returns `None` for an empty sequence; a
/// non-empty sequence always has a run of at least length 1.
pub fn longest_run<F>(digits: &[u8], links: F) -> Option<Run>
where
    F: Fn(u8, u8) -> bool,
{
    if digits.is_empty() {
        return None;
    }

    let mut best = Run { start: 0, len: 1 };
    let mut start = 0;
    for i in 1..digits.len() {
        if !links(digits[i - 1], digits[i]) {
            start = i;
        }
        let len = i - start + 1;
        if len > best.len {
            best = Run { start, len };
        }
    }
    Some(best)
}

/// Lowercase English name of a digit, for readable reasons.
pub fn digit_name(digit: u8) -> &'static str {
    match digit {
        0 => "zero",
        1 => "one",
        2 => "two",
        3 => "three",
        4 => "four",
        5 => "five",
        6 => "six",
        7 => "seven",
        8 => "eight",
        _ => "nine",
    }
}

/// `"1 eight"`, `"3 eights"`, `"2 sixes"`.
pub fn count_phrase(count: usize, digit: u8) -> String {
    let name = digit_name(digit);
    match (count, digit) {
        (1, _) => format!("1 {name}"),
        (_, 6) => format!("{count} sixes"),
        _ => format!("{count} {name}s"),
    }
}

pub fn render(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}
