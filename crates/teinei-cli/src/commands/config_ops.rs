use std::fs;

use teinei_core::{romaji, settings};

use crate::die;

pub fn kana_table_export() {
    print!("{}", romaji::default_kana_toml());
}

pub fn kana_table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(romaji::parse_kana_toml(&content), "Error: {}");
    println!("OK: {} mappings", map.len());
}

pub fn romaji_table_export() {
    print!("{}", romaji::default_romaji_toml());
}

pub fn romaji_table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(romaji::parse_romaji_toml(&content), "Error: {}");
    println!("OK: {} mappings", map.len());
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: pos.verb={:?}, politeness.rules={}, romanize.separator={:?}",
        s.pos.verb,
        s.politeness.rules.len(),
        s.romanize.separator
    );
}

/// Install custom settings and tables before any command touches the globals.
pub fn init_overrides(settings_file: Option<&str>, kana_table: Option<&str>, romaji_table: Option<&str>) {
    if let Some(file) = settings_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(settings::init_custom(content), "Error in {file}: {}");
    }
    if let Some(file) = kana_table {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(romaji::KanaTable::init_custom(content), "Error in {file}: {}");
    }
    if let Some(file) = romaji_table {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(romaji::RomajiTrie::init_custom(content), "Error in {file}: {}");
    }
}
