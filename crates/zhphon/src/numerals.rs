//! Numeral substitution and Chinese cardinal spell-out.

use {once_cell::sync::Lazy, regex::Regex, std::borrow::Cow};

static NUMERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?[0-9]+(?:\.[0-9]+)?").expect("valid regex"));

const DIGITS: [char; 10] = ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// Place units inside a four-digit group, from the ones upward.
const SMALL_UNITS: [&str; 4] = ["", "十", "百", "千"];

/// Units for successive four-digit groups.
const LARGE_UNITS: [&str; 4] = ["", "万", "亿", "兆"];

/// Turns a numeral string (`"-12.5"`) into words.
pub trait NumberFormatter: Send + Sync {
    fn format_number(&self, numeral: &str) -> String;
}

/// Replace every numeral in `sentence` with its spoken form.
///
/// Only the numeral spans change. Trailing letters stay as they are, so
/// `5G` becomes `五G`.
pub fn substitute_numerals<'a>(sentence: &'a str, numbers: &dyn NumberFormatter) -> Cow<'a, str> {
    // TODO: dates, times and ordinals are read as plain cardinals
    NUMERAL.replace_all(sentence, |caps: &regex::Captures| numbers.format_number(&caps[0]))
}

/// Spells numerals as Mandarin cardinals: `123` → 一百二十三, `-5` → 负五,
/// `12.5` → 十二点五.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChineseNumerals;

impl NumberFormatter for ChineseNumerals {
    fn format_number(&self, numeral: &str) -> String {
        let (negative, unsigned) = match numeral.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, numeral),
        };
        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (unsigned, None),
        };

        let mut words = String::new();
        if negative {
            words.push('负');
        }
        words.push_str(&spell_integer(integer));
        if let Some(fraction) = fraction {
            words.push('点');
            words.extend(fraction.chars().filter_map(spell_digit));
        }
        words
    }
}

fn spell_digit(c: char) -> Option<char> {
    c.to_digit(10).map(|d| DIGITS[d as usize])
}

fn spell_integer(integer: &str) -> String {
    let trimmed = integer.trim_start_matches('0');
    if trimmed.is_empty() {
        return DIGITS[0].to_string();
    }
    if trimmed.len() > 4 * LARGE_UNITS.len() {
        return trimmed.chars().filter_map(spell_digit).collect();
    }

    let digits: Vec<usize> = trimmed
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as usize)
        .collect();
    let lead = digits.len() % 4;
    let mut groups: Vec<&[usize]> = Vec::new();
    if lead > 0 {
        groups.push(&digits[..lead]);
    }
    groups.extend(digits[lead..].chunks(4));

    let mut words = String::new();
    let mut pending_zero = false;
    for (index, group) in groups.iter().enumerate() {
        let unit = LARGE_UNITS[groups.len() - 1 - index];
        if group.iter().all(|&d| d == 0) {
            pending_zero = true;
            continue;
        }
        // a gap before this group, either inside it or from skipped groups
        let leading_gap = group.len() == 4 && group[0] == 0;
        if !words.is_empty() && (pending_zero || leading_gap) {
            words.push(DIGITS[0]);
        }
        spell_group(group, &mut words);
        words.push_str(unit);
        pending_zero = false;
    }

    // 10..19 and their multiples read as 十, 十一, 十万 rather than 一十
    match words.strip_prefix("一十") {
        Some(rest) => format!("十{}", rest),
        None => words,
    }
}

/// Spell one group of up to four digits, with interior zeros collapsed to one 零.
fn spell_group(group: &[usize], words: &mut String) {
    let mut zero_run = false;
    let mut started = false;
    for (i, &d) in group.iter().enumerate() {
        let place = group.len() - 1 - i;
        if d == 0 {
            zero_run = started;
            continue;
        }
        if zero_run {
            words.push(DIGITS[0]);
            zero_run = false;
        }
        words.push(DIGITS[d]);
        words.push_str(SMALL_UNITS[place]);
        started = true;
    }
}

#[cfg(test)]
#[path = "tests/numerals_test.rs"]
mod numerals_test;
