//! Utility modules: save-file persistence.

pub mod persistence;

pub use persistence::{default_save_dir, load_json_or_default, save_json, SAVE_DIR_ENV};
