pub mod render;

pub use render::{ConsoleRenderer, OutputFormat};
