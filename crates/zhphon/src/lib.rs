//! Chinese text to pinyin phoneme symbols and model input ids.
//!
//! ```no_run
//! use zhphon::{ChinesePhonemizer, PinyinConverter, phonemes_to_ids};
//!
//! let phonemizer = ChinesePhonemizer::with_converter(PinyinConverter);
//! for sentence in phonemizer.phonemize("你好。再见！")? {
//!     let ids = phonemes_to_ids(&sentence);
//!     println!("{:?} -> {:?}", sentence, ids);
//! }
//! # Ok::<(), zhphon::PhonemeError>(())
//! ```

pub mod config;
pub mod encode;
pub mod error;
pub mod g2p;
pub mod model;
pub mod numerals;
pub mod phonemizer;
pub mod segment;
pub mod symbols;
pub mod syllable;

pub use config::PhonemizerConfig;
pub use encode::phonemes_to_ids;
pub use error::{PhonemeError, Result};
pub use g2p::{Converter, PinyinConverter};
pub use model::{G2PW_URL, MODEL_FILE, ensure_model, extract_archive};
pub use numerals::{ChineseNumerals, NumberFormatter, substitute_numerals};
pub use phonemizer::ChinesePhonemizer;
pub use segment::{PunctuationSplitter, SentenceSplitter};
pub use symbols::{BOS, EOS, PAD, PhonemeIdMap, ZERO_INITIAL, is_group_end};
pub use syllable::{PINYIN_INITIALS, Syllable, normalize_syllable, split_syllable};
