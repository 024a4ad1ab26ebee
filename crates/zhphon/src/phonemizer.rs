use crate::{
    config::PhonemizerConfig,
    error::Result,
    g2p::{Converter, PinyinConverter},
    numerals::{ChineseNumerals, NumberFormatter, substitute_numerals},
    segment::{PunctuationSplitter, SentenceSplitter},
    symbols::{PhonemeIdMap, ZERO_INITIAL},
    syllable::{normalize_syllable, split_syllable},
};

const QUOTES: &[char] = &['“', '”', '"'];

/// Turns Chinese text into pinyin initial/final/tone symbols, one list per sentence.
///
/// Holds no per-call state, so one instance can be shared across threads.
pub struct ChinesePhonemizer {
    converter: Box<dyn Converter>,
    numbers: Box<dyn NumberFormatter>,
    splitter: Box<dyn SentenceSplitter>,
    strip_quotes: bool,
}

impl ChinesePhonemizer {
    pub fn new(
        converter: Box<dyn Converter>,
        numbers: Box<dyn NumberFormatter>,
        splitter: Box<dyn SentenceSplitter>,
    ) -> Self {
        Self {
            converter,
            numbers,
            splitter,
            strip_quotes: true,
        }
    }

    /// Use `converter` with Chinese numerals and punctuation-based sentence splitting.
    pub fn with_converter(converter: impl Converter + 'static) -> Self {
        Self::new(
            Box::new(converter),
            Box::new(ChineseNumerals),
            Box::new(PunctuationSplitter),
        )
    }

    /// Build a `PinyinConverter` phonemizer from configuration.
    ///
    /// The dictionary converter needs no model files, so nothing is fetched
    /// here. Converters backed by the g2pW model call [`ensure_model`] with
    /// `model_dir` and `model_url` themselves.
    ///
    /// [`ensure_model`]: crate::model::ensure_model
    pub fn from_config(config: &PhonemizerConfig) -> Self {
        let mut phonemizer = Self::with_converter(PinyinConverter);
        phonemizer.strip_quotes = config.strip_quotes;
        phonemizer
    }

    /// Phonemes for each sentence of `text`, in order.
    pub fn phonemize(&self, text: &str) -> Result<Vec<Vec<String>>> {
        let text = if self.strip_quotes {
            text.replace(QUOTES, "")
        } else {
            text.to_string()
        };

        self.splitter
            .split(&text)
            .iter()
            .map(|sentence| self.phonemize_sentence(sentence))
            .collect()
    }

    fn phonemize_sentence(&self, sentence: &str) -> Result<Vec<String>> {
        let sentence = substitute_numerals(sentence, &*self.numbers);
        let syllables = self.converter.convert(&sentence)?;

        let char_count = sentence.chars().count();
        if syllables.len() != char_count {
            log::warn!(
                "Converter returned {} entries for {} characters: {}",
                syllables.len(),
                char_count,
                sentence
            );
        }

        let id_map = PhonemeIdMap::default_map();
        let mut phonemes = Vec::new();

        for (syllable, c) in syllables.iter().zip(sentence.chars()) {
            let Some(syllable) = syllable else {
                // punctuation, kept only when it has an id
                let mut buf = [0u8; 4];
                let symbol = c.encode_utf8(&mut buf);
                if id_map.contains(symbol) {
                    phonemes.push(symbol.to_string());
                }
                continue;
            };

            let normalized = normalize_syllable(syllable);
            let split = split_syllable(&normalized).filter(|s| !s.final_part.is_empty());
            let Some(split) = split else {
                phonemes.push(normalized.into_owned());
                continue;
            };

            let initial = split.initial.unwrap_or(ZERO_INITIAL);
            for symbol in [initial, split.final_part, split.tone] {
                assert!(!symbol.is_empty(), "empty phoneme splitting {:?}", syllable);
                phonemes.push(symbol.to_string());
            }
        }

        Ok(phonemes)
    }
}

#[cfg(test)]
#[path = "tests/phonemizer_test.rs"]
mod phonemizer_test;
