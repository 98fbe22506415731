//! Appender implementations

pub mod console;
pub mod file;
pub mod stream;

pub use console::{ConsoleAppender, ConsoleStream};
pub use file::{FileAppender, FileMode};
pub use stream::{SharedBuffer, StreamAppender};

pub use crate::core::Appender;
