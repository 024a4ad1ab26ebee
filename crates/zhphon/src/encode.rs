//! Phoneme symbols to model input ids.

use crate::symbols::{BOS, EOS, PAD, PhonemeIdMap, is_group_end};

impl PhonemeIdMap {
    /// Encode one sentence's phonemes.
    ///
    /// The output starts with BOS and ends with EOS. A PAD follows every group
    /// end (tone, pause, space) rather than every symbol, which marks syllable
    /// and punctuation boundaries for the acoustic model. Symbols missing from
    /// the map are logged and skipped.
    pub fn encode<S: AsRef<str>>(&self, phonemes: &[S]) -> Vec<i64> {
        let pad = self.control(PAD);
        let mut ids = Vec::with_capacity(phonemes.len() * 2 + 2);
        ids.extend_from_slice(self.control(BOS));

        for phoneme in phonemes {
            let phoneme = phoneme.as_ref();
            match self.lookup(phoneme) {
                Ok(phoneme_ids) => ids.extend_from_slice(phoneme_ids),
                Err(_) => {
                    log::warn!("Missing phoneme from id map: {}", phoneme);
                    continue;
                }
            }
            if is_group_end(phoneme) {
                ids.extend_from_slice(pad);
            }
        }

        ids.extend_from_slice(self.control(EOS));
        ids
    }
}

/// Encode phonemes with the built-in table.
pub fn phonemes_to_ids<S: AsRef<str>>(phonemes: &[S]) -> Vec<i64> {
    PhonemeIdMap::default_map().encode(phonemes)
}

#[cfg(test)]
#[path = "tests/encode_test.rs"]
mod encode_test;
