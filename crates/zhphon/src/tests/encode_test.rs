use super::*;

const PAD_ID: i64 = 0;
const BOS_ID: i64 = 1;
const EOS_ID: i64 = 2;

#[test]
fn test_encode_empty() {
    let empty: [&str; 0] = [];
    assert_eq!(phonemes_to_ids(&empty), vec![BOS_ID, EOS_ID]);
}

#[test]
fn test_encode_syllable_then_pause() {
    let ids = phonemes_to_ids(&["k", "a", "3", "。"]);
    assert_eq!(ids, vec![BOS_ID, 13, 27, 66, PAD_ID, 69, PAD_ID, EOS_ID]);
}

#[test]
fn test_encode_pads_only_after_group_ends() {
    let phonemes = ["zh", "ong", "1", "，", "Ø", "ai", "4", " ", "！"];
    let ids = phonemes_to_ids(&phonemes);
    assert_eq!(
        ids,
        vec![
            BOS_ID, 18, 38, 64, PAD_ID, 72, PAD_ID, 3, 30, 67, PAD_ID, 72, PAD_ID, 71, PAD_ID,
            EOS_ID
        ]
    );
}

#[test]
fn test_encode_skips_unknown_symbol() {
    let with_unknown = phonemes_to_ids(&["k", "a", "3", "qq", "。"]);
    let without = phonemes_to_ids(&["k", "a", "3", "。"]);
    assert_eq!(with_unknown, without);
}

#[test]
fn test_encode_unknown_tone_like_symbol_adds_no_pad() {
    // "m2" is an undecomposable syllable, not a group end
    let ids = phonemes_to_ids(&["m2"]);
    assert_eq!(ids, vec![BOS_ID, EOS_ID]);
}

#[test]
fn test_encode_owned_strings() {
    let phonemes = vec!["t".to_string(), "i".to_string(), "1".to_string()];
    assert_eq!(phonemes_to_ids(&phonemes), vec![BOS_ID, 9, 39, 64, PAD_ID, EOS_ID]);
}

#[test]
fn test_encode_custom_map_multi_id() {
    let map = PhonemeIdMap::from_entries([
        ("_".to_string(), vec![9]),
        ("^".to_string(), vec![7, 7]),
        ("$".to_string(), vec![8]),
        ("a".to_string(), vec![100, 101]),
        ("1".to_string(), vec![200]),
    ])
    .unwrap();

    let ids = map.encode(&["a", "1", "b"]);
    assert_eq!(ids, vec![7, 7, 100, 101, 200, 9, 8]);
}
