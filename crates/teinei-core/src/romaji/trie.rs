use std::collections::BTreeMap;
use std::sync::OnceLock;

use lexime_trie::{DoubleArray, TrieSearch};

use super::config::{parse_kana_toml, parse_romaji_toml, TableError};
use super::table::{DEFAULT_KANA_TOML, DEFAULT_ROMAJI_TOML};

static CUSTOM_ROMAJI_TOML: OnceLock<String> = OnceLock::new();
static CUSTOM_KANA_TOML: OnceLock<String> = OnceLock::new();

#[derive(Debug, PartialEq)]
enum TrieLookupResult<'a> {
    None,
    Prefix,
    Exact(&'a str),
    ExactAndPrefix(&'a str),
}

/// Double-array trie over the UTF-8 bytes of the keys, with values by id.
struct PrefixTable {
    da: DoubleArray<u8>,
    values: Vec<String>,
}

impl PrefixTable {
    fn from_map(map: BTreeMap<String, String>) -> Self {
        // BTreeMap is already sorted by bytes, as DoubleArray::build requires
        let keys: Vec<&[u8]> = map.keys().map(|k| k.as_bytes()).collect();
        let da = DoubleArray::<u8>::build(&keys);
        let values = map.into_values().collect();
        Self { da, values }
    }

    fn lookup(&self, key: &str) -> TrieLookupResult<'_> {
        let pr = self.da.probe(key.as_bytes());
        match (pr.value, pr.has_children) {
            (None, false) => TrieLookupResult::None,
            (None, true) => TrieLookupResult::Prefix,
            (Some(id), false) => TrieLookupResult::Exact(&self.values[id as usize]),
            (Some(id), true) => TrieLookupResult::ExactAndPrefix(&self.values[id as usize]),
        }
    }

    /// Longest key that is a prefix of `input`, as (byte length, value).
    fn longest_match<'a>(&'a self, input: &str) -> Option<(usize, &'a str)> {
        let mut best = None;
        let ends = input
            .char_indices()
            .map(|(i, c)| i + c.len_utf8());
        for end in ends {
            match self.lookup(&input[..end]) {
                TrieLookupResult::None => break,
                TrieLookupResult::Prefix => {}
                TrieLookupResult::Exact(v) => {
                    best = Some((end, v));
                    break;
                }
                TrieLookupResult::ExactAndPrefix(v) => best = Some((end, v)),
            }
        }
        best
    }
}

/// Romaji keystrokes → hiragana.
pub struct RomajiTrie {
    table: PrefixTable,
}

impl RomajiTrie {
    pub fn from_toml(toml_str: &str) -> Result<Self, TableError> {
        Ok(Self {
            table: PrefixTable::from_map(parse_romaji_toml(toml_str)?),
        })
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableError> {
        // Validate eagerly
        parse_romaji_toml(&toml_content)?;
        CUSTOM_ROMAJI_TOML
            .set(toml_content)
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static RomajiTrie {
        static INSTANCE: OnceLock<RomajiTrie> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_ROMAJI_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_ROMAJI_TOML);
            RomajiTrie::from_toml(toml_str).expect("romaji TOML must be valid")
        })
    }

    pub fn longest_match<'a>(&'a self, romaji: &str) -> Option<(usize, &'a str)> {
        self.table.longest_match(romaji)
    }
}

/// Hiragana → Hepburn romaji.
pub struct KanaTable {
    table: PrefixTable,
}

impl KanaTable {
    pub fn from_toml(toml_str: &str) -> Result<Self, TableError> {
        Ok(Self {
            table: PrefixTable::from_map(parse_kana_toml(toml_str)?),
        })
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableError> {
        parse_kana_toml(&toml_content)?;
        CUSTOM_KANA_TOML
            .set(toml_content)
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static KanaTable {
        static INSTANCE: OnceLock<KanaTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_KANA_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_KANA_TOML);
            KanaTable::from_toml(toml_str).expect("kana TOML must be valid")
        })
    }

    pub fn longest_match<'a>(&'a self, kana: &str) -> Option<(usize, &'a str)> {
        self.table.longest_match(kana)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_exact() {
        let trie = RomajiTrie::global();
        assert_eq!(trie.table.lookup("a"), TrieLookupResult::Exact("あ"));
    }

    #[test]
    fn test_prefix_k() {
        let trie = RomajiTrie::global();
        assert_eq!(trie.table.lookup("k"), TrieLookupResult::Prefix);
    }

    #[test]
    fn test_youon_sha() {
        let trie = RomajiTrie::global();
        assert_eq!(trie.table.lookup("sha"), TrieLookupResult::Exact("しゃ"));
    }

    #[test]
    fn test_chi_exact() {
        let trie = RomajiTrie::global();
        match trie.table.lookup("chi") {
            TrieLookupResult::Exact(k) | TrieLookupResult::ExactAndPrefix(k) => {
                assert_eq!(k, "ち");
            }
            other => panic!("expected Exact or ExactAndPrefix, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_sokuon_spelling_is_prefix() {
        let trie = RomajiTrie::global();
        assert_eq!(trie.table.lookup("xts"), TrieLookupResult::Prefix);
        assert_eq!(trie.table.lookup("xtsu"), TrieLookupResult::Exact("っ"));
        assert_eq!(trie.table.lookup("n"), TrieLookupResult::Prefix);
    }

    #[test]
    fn test_none_for_unknown() {
        let trie = RomajiTrie::global();
        assert_eq!(trie.table.lookup("xyz"), TrieLookupResult::None);
        assert_eq!(trie.table.lookup("q"), TrieLookupResult::None);
    }

    #[test]
    fn test_romaji_longest_match() {
        let trie = RomajiTrie::global();
        assert_eq!(trie.longest_match("kyoto"), Some((3, "きょ")));
        assert_eq!(trie.longest_match("xtsu"), Some((4, "っ")));
        assert_eq!(trie.longest_match("xtux"), Some((3, "っ")));
        assert_eq!(trie.longest_match("k"), None);
        assert_eq!(trie.longest_match(""), None);
    }

    #[test]
    fn test_kana_lookup() {
        let table = KanaTable::global();
        assert_eq!(table.table.lookup("し"), TrieLookupResult::ExactAndPrefix("shi"));
        assert_eq!(table.table.lookup("か"), TrieLookupResult::Exact("ka"));
        assert_eq!(table.table.lookup("ー"), TrieLookupResult::Exact("-"));
        assert_eq!(table.table.lookup("っ"), TrieLookupResult::None);
    }

    #[test]
    fn test_kana_longest_match_prefers_youon() {
        let table = KanaTable::global();
        assert_eq!(table.longest_match("しゃしん"), Some(("しゃ".len(), "sha")));
        assert_eq!(table.longest_match("しかし"), Some(("し".len(), "shi")));
        assert_eq!(table.longest_match("漢"), None);
    }

    #[test]
    fn test_all_kana_mappings_resolve() {
        let table = KanaTable::global();
        let map = parse_kana_toml(DEFAULT_KANA_TOML).unwrap();
        for (kana, romaji) in &map {
            match table.table.lookup(kana) {
                TrieLookupResult::Exact(r) | TrieLookupResult::ExactAndPrefix(r) => {
                    assert_eq!(r, romaji, "mapping mismatch for kana={kana}");
                }
                other => panic!("expected Exact/ExactAndPrefix for {kana}, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_from_toml_is_independent_of_global() {
        let table = KanaTable::from_toml("[mappings]\n\"か\" = \"ca\"\n").unwrap();
        assert_eq!(table.table.lookup("か"), TrieLookupResult::Exact("ca"));
        assert_eq!(KanaTable::global().table.lookup("か"), TrieLookupResult::Exact("ka"));
    }

    #[test]
    fn test_custom_table_longest_match_walks_trie() {
        let table = KanaTable::from_toml(
            "[mappings]\n\"き\" = \"ki\"\n\"きゃ\" = \"kya\"\n\"きゃう\" = \"kyau\"\n",
        )
        .unwrap();
        assert_eq!(table.longest_match("きゃく"), Some(("きゃ".len(), "kya")));
        assert_eq!(table.longest_match("きゃう"), Some(("きゃう".len(), "kyau")));
        assert_eq!(table.longest_match("きき"), Some(("き".len(), "ki")));
        assert_eq!(table.longest_match("く"), None);
    }
}
