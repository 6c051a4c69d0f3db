use std::path::Path;

use unicode_width::UnicodeWidthStr;

use teinei_core::tokenizer::{self, PosMap};
use teinei_core::{assemble, normalize, Pipeline, TextOrigin, Token, TransliterationResult};

use crate::die;
use crate::input::read_input;
use crate::process_tokenizer::ProcessTokenizer;

fn load_tokens(format: &str, file: Option<&str>) -> Vec<Token> {
    let parser = die!(tokenizer::from_name(format), "Error: {}");
    let content = die!(read_input(file.map(Path::new)), "Error reading input: {}");
    die!(parser.parse(&content, &PosMap::from_settings()), "Error: {}")
}

pub fn annotate_cmd(format: &str, file: Option<&str>, text: bool) {
    let tokens = load_tokens(format, file);
    let result = assemble(&tokens);
    if text {
        print!("{}", format_text(&result));
    } else {
        let json = die!(serde_json::to_string_pretty(&result), "Error: {}");
        println!("{json}");
    }
}

pub fn normalize_cmd(format: &str, file: Option<&str>) {
    let tokens = load_tokens(format, file);
    println!("{}", normalize(&tokens));
}

pub fn analyze_cmd(analyzer: &str, format: &str, translated: bool, text: &str) {
    let parser = die!(tokenizer::from_name(format), "Error: {}");
    let tokenizer = die!(
        ProcessTokenizer::new(analyzer, parser, PosMap::from_settings()),
        "Error: {}"
    );
    let origin = if translated {
        TextOrigin::Translated
    } else {
        TextOrigin::Japanese
    };
    let analysis = die!(Pipeline::new(&tokenizer).analyze(text, origin), "Error: {}");
    let json = die!(serde_json::to_string_pretty(&analysis), "Error: {}");
    println!("{json}");
}

/// Render a breakdown as three aligned columns followed by the joined romaji.
pub fn format_text(result: &TransliterationResult) -> String {
    let surface_w = column_width(result.breakdown.iter().map(|e| e.surface.as_str()), "surface");
    let furigana_w = column_width(result.breakdown.iter().map(|e| e.furigana.as_str()), "furigana");

    let mut out = String::new();
    push_row(&mut out, &[("surface", surface_w), ("furigana", furigana_w)], "romaji");
    for entry in &result.breakdown {
        push_row(
            &mut out,
            &[(&entry.surface, surface_w), (&entry.furigana, furigana_w)],
            &entry.romaji,
        );
    }
    out.push('\n');
    out.push_str(&result.romaji_joined);
    out.push('\n');
    out
}

fn column_width<'a>(cells: impl Iterator<Item = &'a str>, header: &str) -> usize {
    cells.map(UnicodeWidthStr::width).chain([header.width()]).max().unwrap_or(0)
}

fn push_row(out: &mut String, padded: &[(&str, usize)], last: &str) {
    for &(cell, width) in padded {
        out.push_str(cell);
        out.push_str(&" ".repeat(width - cell.width() + 2));
    }
    out.push_str(last);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use teinei_core::BreakdownEntry;

    fn entry(surface: &str, furigana: &str, romaji: &str) -> BreakdownEntry {
        BreakdownEntry {
            surface: surface.to_string(),
            furigana: furigana.to_string(),
            romaji: romaji.to_string(),
        }
    }

    #[test]
    fn test_format_text_aligns_wide_chars() {
        let result = TransliterationResult {
            breakdown: vec![entry("猫", "ねこ", "neko"), entry("15", "", "")],
            romaji_joined: "neko 15".to_string(),
        };
        let text = format_text(&result);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "surface  furigana  romaji");
        assert_eq!(lines[1], "猫       ねこ      neko");
        assert_eq!(lines[2], "15                 ");
        assert_eq!(lines[4], "neko 15");
    }

    #[test]
    fn test_format_text_empty() {
        let text = format_text(&TransliterationResult::default());
        assert_eq!(text, "surface  furigana  romaji\n\n\n");
    }
}
