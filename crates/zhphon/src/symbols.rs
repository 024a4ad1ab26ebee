//! Phoneme symbol vocabulary and the symbol to id table.

use {
    crate::error::{PhonemeError, Result},
    once_cell::sync::Lazy,
    std::{borrow::Cow, collections::HashMap, fs::File, io::BufReader, path::Path},
};

/// Padding inserted after every group.
pub const PAD: &str = "_";
/// Begin-of-sequence marker.
pub const BOS: &str = "^";
/// End-of-sequence marker.
pub const EOS: &str = "$";
/// Stands in for the initial of a syllable that has none (`ai3`, `er3`).
pub const ZERO_INITIAL: &str = "Ø";

/// Default table. Every symbol maps to a single id today.
const DEFAULT_ENTRIES: &[(&str, &[i64])] = &[
    (PAD, &[0]),
    (BOS, &[1]),
    (EOS, &[2]),
    // initials
    (ZERO_INITIAL, &[3]),
    ("b", &[4]),
    ("p", &[5]),
    ("m", &[6]),
    ("f", &[7]),
    ("d", &[8]),
    ("t", &[9]),
    ("n", &[10]),
    ("l", &[11]),
    ("g", &[12]),
    ("k", &[13]),
    ("h", &[14]),
    ("j", &[15]),
    ("q", &[16]),
    ("x", &[17]),
    ("zh", &[18]),
    ("ch", &[19]),
    ("sh", &[20]),
    ("r", &[21]),
    ("z", &[22]),
    ("c", &[23]),
    ("s", &[24]),
    ("y", &[25]),
    ("w", &[26]),
    // finals
    ("a", &[27]),
    ("o", &[28]),
    ("e", &[29]),
    ("ai", &[30]),
    ("ei", &[31]),
    ("ao", &[32]),
    ("ou", &[33]),
    ("an", &[34]),
    ("en", &[35]),
    ("ang", &[36]),
    ("eng", &[37]),
    ("ong", &[38]),
    ("i", &[39]),
    ("ia", &[40]),
    ("ie", &[41]),
    ("iao", &[42]),
    ("iu", &[43]),
    ("ian", &[44]),
    ("in", &[45]),
    ("iang", &[46]),
    ("ing", &[47]),
    ("iong", &[48]),
    ("u", &[49]),
    ("ua", &[50]),
    ("uo", &[51]),
    ("uai", &[52]),
    ("ui", &[53]),
    ("uan", &[54]),
    ("un", &[55]),
    ("uang", &[56]),
    ("ueng", &[57]),
    // ü family, written with v
    ("v", &[58]),
    ("ve", &[59]),
    ("van", &[60]),
    ("vn", &[61]),
    ("er", &[62]),
    ("ue", &[63]),
    // tones, 5 is neutral
    ("1", &[64]),
    ("2", &[65]),
    ("3", &[66]),
    ("4", &[67]),
    ("5", &[68]),
    // long pauses, one id per intonation
    ("。", &[69]),
    (".", &[69]),
    ("？", &[70]),
    ("?", &[70]),
    ("！", &[71]),
    ("!", &[71]),
    // short pauses all share one id
    ("—", &[72]),
    ("…", &[72]),
    ("、", &[72]),
    ("，", &[72]),
    (",", &[72]),
    ("：", &[72]),
    (":", &[72]),
    ("；", &[72]),
    (";", &[72]),
    (" ", &[72]),
];

/// Symbols that close a group and are followed by a PAD in the id sequence.
const GROUP_END: &[&str] = &[
    "1", "2", "3", "4", "5", // tones
    "。", "？", "！", ".", "?", "!", // long pauses
    "—", "…", "、", "，", "：", "；", ",", ":", ";", // short pauses
    " ",
];

static DEFAULT_MAP: Lazy<PhonemeIdMap> = Lazy::new(|| PhonemeIdMap {
    map: DEFAULT_ENTRIES
        .iter()
        .map(|&(symbol, ids)| (symbol.to_string(), Cow::Borrowed(ids)))
        .collect(),
});

/// Returns true if `symbol` terminates a group (tones, pauses, space).
pub fn is_group_end(symbol: &str) -> bool {
    GROUP_END.contains(&symbol)
}

/// Mapping from phoneme symbol to its id sequence.
#[derive(Debug, Clone)]
pub struct PhonemeIdMap {
    map: HashMap<String, Cow<'static, [i64]>>,
}

impl PhonemeIdMap {
    /// The built-in table shared by every caller.
    pub fn default_map() -> &'static PhonemeIdMap {
        &DEFAULT_MAP
    }

    /// Build a table from owned entries. PAD, BOS and EOS must be present.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<i64>)>,
    {
        let map: HashMap<String, Cow<'static, [i64]>> = entries
            .into_iter()
            .map(|(symbol, ids)| (symbol, Cow::Owned(ids)))
            .collect();

        for control in [PAD, BOS, EOS] {
            match map.get(control) {
                None => {
                    return Err(PhonemeError::IdMap(format!(
                        "missing control symbol {control:?}"
                    )));
                }
                Some(ids) if ids.is_empty() => {
                    return Err(PhonemeError::IdMap(format!(
                        "control symbol {control:?} has no ids"
                    )));
                }
                Some(_) => {}
            }
        }

        Ok(Self { map })
    }

    /// Parse a flat JSON object of the form `{ "symbol": [id, ...], ... }`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: HashMap<String, Vec<i64>> =
            serde_json::from_str(json).map_err(|e| PhonemeError::IdMap(e.to_string()))?;
        Self::from_entries(entries)
    }

    /// Load a table from a JSON file in the same shape as [`PhonemeIdMap::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| PhonemeError::IdMap(format!("{}: {}", path.display(), e)))?;
        let entries: HashMap<String, Vec<i64>> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| PhonemeError::IdMap(format!("{}: {}", path.display(), e)))?;
        Self::from_entries(entries)
    }

    /// Ids for `symbol`, or `UnknownSymbol` when the table has no entry.
    pub fn lookup(&self, symbol: &str) -> Result<&[i64]> {
        self.map
            .get(symbol)
            .map(|ids| &**ids)
            .ok_or_else(|| PhonemeError::UnknownSymbol(symbol.to_string()))
    }

    /// Whether `symbol` has an entry.
    pub fn contains(&self, symbol: &str) -> bool {
        self.map.contains_key(symbol)
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when the table has no symbols.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Ids of a control symbol. Construction guarantees they exist.
    pub(crate) fn control(&self, symbol: &str) -> &[i64] {
        self.map.get(symbol).map(|ids| &**ids).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_map_size() {
        // 3 control + 24 initials + 37 finals + 5 tones + 6 long + 10 short
        assert_eq!(PhonemeIdMap::default_map().len(), 85);
    }

    #[test]
    fn test_control_ids() {
        let map = PhonemeIdMap::default_map();
        assert_eq!(map.lookup(PAD).unwrap(), &[0]);
        assert_eq!(map.lookup(BOS).unwrap(), &[1]);
        assert_eq!(map.lookup(EOS).unwrap(), &[2]);
    }

    #[test]
    fn test_short_pauses_share_id() {
        let map = PhonemeIdMap::default_map();
        for symbol in ["—", "…", "、", "，", ",", "：", ":", "；", ";", " "] {
            assert_eq!(map.lookup(symbol).unwrap(), &[72], "symbol {symbol:?}");
        }
    }

    #[test]
    fn test_long_pauses_keep_intonation() {
        let map = PhonemeIdMap::default_map();
        assert_eq!(map.lookup("。").unwrap(), map.lookup(".").unwrap());
        assert_eq!(map.lookup("？").unwrap(), &[70]);
        assert_eq!(map.lookup("!").unwrap(), &[71]);
    }

    #[test]
    fn test_group_end_members_are_in_table() {
        let map = PhonemeIdMap::default_map();
        for symbol in GROUP_END {
            assert!(map.contains(symbol), "group end {symbol:?} missing");
        }
    }

    #[test]
    fn test_unknown_symbol() {
        match PhonemeIdMap::default_map().lookup("xyz") {
            Err(PhonemeError::UnknownSymbol(symbol)) => assert_eq!(symbol, "xyz"),
            other => panic!("Expected UnknownSymbol, got {:?}", other),
        }
    }

    #[test]
    fn test_initials_and_finals_are_not_group_ends() {
        assert!(is_group_end("3"));
        assert!(is_group_end("，"));
        assert!(is_group_end(" "));
        assert!(!is_group_end("zh"));
        assert!(!is_group_end("ang"));
        assert!(!is_group_end(ZERO_INITIAL));
        assert!(!is_group_end(PAD));
    }
}
