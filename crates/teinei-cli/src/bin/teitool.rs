use std::path::PathBuf;

use clap::{Parser, Subcommand};

use teinei_cli::commands::{annotate_ops, config_ops, kana_ops};
use teinei_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "teitool", about = "Polite rewriting and reading annotation for tokenized Japanese")]
struct Cli {
    /// Custom settings TOML (replaces the embedded defaults)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Custom kana → romaji table TOML
    #[arg(long, global = true)]
    kana_table: Option<String>,
    /// Custom romaji → kana table TOML
    #[arg(long, global = true)]
    romaji_table: Option<String>,
    /// Directory for JSON trace logs (requires the `trace` feature)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Annotate analyzer output with furigana and romaji
    Annotate {
        /// Analyzer output format: sudachi, mecab or jsonl
        #[arg(long, default_value = "sudachi")]
        format: String,
        /// Print an aligned table instead of JSON
        #[arg(long)]
        text: bool,
        /// Analyzer output file (stdin when omitted or `-`)
        file: Option<String>,
    },
    /// Rewrite analyzer output into the polite register
    Normalize {
        /// Analyzer output format: sudachi, mecab or jsonl
        #[arg(long, default_value = "sudachi")]
        format: String,
        /// Analyzer output file (stdin when omitted or `-`)
        file: Option<String>,
    },
    /// Run the full pipeline through an external analyzer
    Analyze {
        /// Analyzer command line, e.g. "sudachi -a"
        #[arg(long)]
        analyzer: String,
        /// Analyzer output format: sudachi, mecab or jsonl
        #[arg(long, default_value = "sudachi")]
        format: String,
        /// Treat the text as a translation and rewrite it politely first
        #[arg(long)]
        translated: bool,
        /// Text to analyze
        text: String,
    },
    /// Romanize a kana string
    Romanize {
        /// Hiragana or katakana
        kana: String,
    },
    /// Convert romaji to hiragana
    Kana {
        /// Romaji input
        romaji: String,
    },
    /// Report whether a surface is a numeric literal
    Numeric {
        /// Surface to test
        text: String,
    },
    /// Export the default kana → romaji table as TOML
    KanaTableExport,
    /// Validate a custom kana → romaji table TOML file
    KanaTableValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export the default romaji → kana table as TOML
    RomajiTableExport,
    /// Validate a custom romaji → kana table TOML file
    RomajiTableValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export the default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let _guard = cli.log_dir.as_deref().map(init_tracing);
    config_ops::init_overrides(
        cli.settings.as_deref(),
        cli.kana_table.as_deref(),
        cli.romaji_table.as_deref(),
    );

    match cli.command {
        Command::Annotate { format, text, file } => {
            annotate_ops::annotate_cmd(&format, file.as_deref(), text)
        }
        Command::Normalize { format, file } => annotate_ops::normalize_cmd(&format, file.as_deref()),
        Command::Analyze {
            analyzer,
            format,
            translated,
            text,
        } => annotate_ops::analyze_cmd(&analyzer, &format, translated, &text),
        Command::Romanize { kana } => kana_ops::romanize_cmd(&kana),
        Command::Kana { romaji } => kana_ops::kana_cmd(&romaji),
        Command::Numeric { text } => kana_ops::numeric_cmd(&text),
        Command::KanaTableExport => config_ops::kana_table_export(),
        Command::KanaTableValidate { file } => config_ops::kana_table_validate(&file),
        Command::RomajiTableExport => config_ops::romaji_table_export(),
        Command::RomajiTableValidate { file } => config_ops::romaji_table_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
