//! Kana ⇄ romaji conversion.
//!
//! Both directions are driven by embedded TOML tables that can be replaced
//! once at startup: kana → Hepburn romaji for annotating readings, and
//! romaji → hiragana for text typed in Latin letters.

mod config;
mod convert;
mod romanize;
mod table;
mod trie;

pub use config::{parse_kana_toml, parse_romaji_toml, TableError};
pub use convert::{romaji_to_kana, romaji_to_kana_with};
pub use romanize::{kana_to_romaji, romanize_with};
pub use table::{default_kana_toml, default_romaji_toml};
pub use trie::{KanaTable, RomajiTrie};
