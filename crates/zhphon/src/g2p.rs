//! Grapheme-to-pinyin conversion.

use {crate::error::Result, pinyin::ToPinyin};

/// Converts a sentence into one entry per character: a tone-numbered pinyin
/// syllable (`zhong1`), or `None` when the character has no reading.
pub trait Converter: Send + Sync {
    fn convert(&self, sentence: &str) -> Result<Vec<Option<String>>>;
}

/// Dictionary converter backed by the `pinyin` crate.
///
/// Uses each character's most common reading, so polyphones and tone sandhi are
/// not resolved from context. Neutral tone is written as `5`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinConverter;

impl Converter for PinyinConverter {
    fn convert(&self, sentence: &str) -> Result<Vec<Option<String>>> {
        Ok(sentence
            .chars()
            .map(|c| c.to_pinyin().map(|p| with_tone_digit(p.with_tone_num_end())))
            .collect())
    }
}

fn with_tone_digit(syllable: &str) -> String {
    if syllable.ends_with(|c: char| c.is_ascii_digit()) {
        syllable.to_string()
    } else {
        format!("{syllable}5")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_aligns_with_characters() {
        let syllables = PinyinConverter.convert("中文，OK。").unwrap();
        assert_eq!(syllables.len(), 6);
        assert_eq!(syllables[0].as_deref(), Some("zhong1"));
        assert_eq!(syllables[1].as_deref(), Some("wen2"));
        assert!(syllables[2..].iter().all(Option::is_none));
    }

    #[test]
    fn test_neutral_tone_gets_digit() {
        assert_eq!(with_tone_digit("de"), "de5");
        assert_eq!(with_tone_digit("ma3"), "ma3");
    }

    #[test]
    fn test_convert_empty() {
        assert!(PinyinConverter.convert("").unwrap().is_empty());
    }
}
