//! 存档相关功能

pub mod finder;

pub use finder::{
    find_latest_save, find_latest_save_file, SaveFile,
};
