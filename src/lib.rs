//! Color palettes: hex/HSL conversion, harmonious generation, image
//! sampling and color psychology.

pub mod catalog;
pub mod cli;
pub mod color;
pub mod mood;
pub mod pipeline;
pub mod psychology;
pub mod report;
pub mod store;
pub mod tui;

pub use color::{hex_to_hsl, hsl_to_hex, Color, ColorError, Hsl};
pub use mood::{analyze_mood, PaletteMood};
pub use psychology::{classify, PsychologyRecord};
