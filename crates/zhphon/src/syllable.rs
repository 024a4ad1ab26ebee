//! Pinyin syllable normalization and initial/final/tone decomposition.

use {once_cell::sync::Lazy, regex::Regex, std::borrow::Cow};

/// Pinyin initials in match order. The retroflex digraphs come first so that
/// `zhang1` is never read as `z` + `hang`.
pub const PINYIN_INITIALS: [&str; 23] = [
    "zh", "ch", "sh", "b", "p", "m", "f", "d", "t", "n", "l", "g", "k", "h", "j", "q", "x", "r",
    "z", "c", "s", "y", "w",
];

static RAW_SYLLABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-züv:]+?)([1-5])$").expect("valid regex"));

static CANONICAL_SYLLABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-zvü]+?)([1-5])$").expect("valid regex"));

/// One syllable split into its parts. `initial` is `None` for zero-initial
/// syllables; `final_part` may be empty when the base is only an initial (`m2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable<'a> {
    pub initial: Option<&'static str>,
    pub final_part: &'a str,
    pub tone: &'a str,
}

/// Rewrite the ü family (`u:`, `ü`) to `v` in a tone-numbered syllable.
///
/// ```text
/// nu:3   -> nv3
/// lu:e4  -> lve4
/// ju:an3 -> jvan3
/// lü4    -> lv4
/// ```
///
/// Anything that is not letters followed by a single tone digit is returned unchanged.
pub fn normalize_syllable(token: &str) -> Cow<'_, str> {
    let Some(caps) = RAW_SYLLABLE.captures(token) else {
        return Cow::Borrowed(token);
    };
    let base = &caps[1];
    if !base.contains(['ü', ':']) {
        return Cow::Borrowed(token);
    }
    let base = base.replace("u:", "v").replace('ü', "v");
    Cow::Owned(format!("{}{}", base, &caps[2]))
}

/// Split a canonical syllable (`hang2`) into initial, final and tone.
///
/// Returns `None` when `syllable` is not letters followed by one tone digit.
pub fn split_syllable(syllable: &str) -> Option<Syllable<'_>> {
    let caps = CANONICAL_SYLLABLE.captures(syllable)?;
    let base = caps.get(1)?.as_str();
    let tone = caps.get(2)?.as_str();

    let initial = PINYIN_INITIALS
        .iter()
        .copied()
        .find(|initial| base.starts_with(initial));
    let final_part = match initial {
        Some(initial) => &base[initial.len()..],
        None => base,
    };

    Some(Syllable {
        initial,
        final_part,
        tone,
    })
}

#[cfg(test)]
#[path = "tests/syllable_test.rs"]
mod syllable_test;
