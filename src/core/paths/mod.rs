//! 首次运行时的路径猜测

pub mod guesser;

pub use guesser::{PathGuesser, PathGuesses};
