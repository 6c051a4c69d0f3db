pub mod annotate_ops;
pub mod config_ops;
pub mod kana_ops;
