//! 通用小部件

pub mod status;
