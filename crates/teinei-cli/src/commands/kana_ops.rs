use teinei_core::romaji::{kana_to_romaji, romaji_to_kana};
use teinei_core::unicode::katakana_to_hiragana;
use teinei_core::is_numeric;

pub fn romanize_cmd(kana: &str) {
    println!("{}\t{}", katakana_to_hiragana(kana), kana_to_romaji(kana));
}

pub fn kana_cmd(romaji: &str) {
    println!("{}", romaji_to_kana(romaji));
}

pub fn numeric_cmd(text: &str) {
    println!("{}", is_numeric(text));
}
