/// Part-of-speech tag → category resolution.
use std::collections::HashMap;

use crate::settings::{settings, PosSettings};
use crate::token::{PartOfSpeech, PosCategory};

/// Maps an analyzer's first part-of-speech field to a [`PosCategory`].
///
/// Only the first field is inspected: SudachiDict, IPADIC and UniDic all put
/// the coarse class there (動詞, 名詞, 助詞, ...).
#[derive(Debug, Clone)]
pub struct PosMap {
    table: HashMap<String, PosCategory>,
}

impl PosMap {
    pub fn new(pos: &PosSettings) -> Self {
        Self {
            table: pos.tag_table(),
        }
    }

    /// Map built from the global settings.
    pub fn from_settings() -> Self {
        Self::new(&settings().pos)
    }

    pub fn classify(&self, tags: &[String]) -> PosCategory {
        tags.first()
            .and_then(|first| self.table.get(first.as_str()))
            .copied()
            .unwrap_or_default()
    }

    /// Build a [`PartOfSpeech`] from raw tags, skipping "*" placeholders at the tail.
    pub fn part_of_speech(&self, tags: Vec<String>) -> PartOfSpeech {
        let mut tags = tags;
        while tags.last().is_some_and(|t| t == "*") {
            tags.pop();
        }
        let category = self.classify(&tags);
        PartOfSpeech::new(tags, category)
    }
}

impl Default for PosMap {
    fn default() -> Self {
        Self::from_settings()
    }
}
