use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::Color;
use crate::pipeline::generate::DEFAULT_PALETTE_SIZE;
use crate::pipeline::pick::DEFAULT_GRID_SIZE;

/// Generate, extract and explore color palettes.
#[derive(Parser, Debug)]
#[command(name = "paletteer", version, about)]
pub struct Args {
    /// Directory for saved favorites
    #[arg(long, global = true, env = "PALETTEER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Print JSON instead of colored swatches
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a harmonious palette from a random base hue
    Generate {
        /// Number of colors
        #[arg(short = 'n', long = "colors", default_value_t = DEFAULT_PALETTE_SIZE)]
        count: usize,

        /// Seed for a reproducible palette
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Extract the most frequent colors from an image
    Extract {
        /// Path to the input image
        image: PathBuf,

        /// Number of colors
        #[arg(short = 'n', long = "colors", default_value_t = DEFAULT_PALETTE_SIZE)]
        count: usize,
    },

    /// Sample the pixel grid around one image coordinate
    Sample {
        /// Path to the input image
        image: PathBuf,

        #[arg(short, long, allow_negative_numbers = true)]
        x: i64,

        #[arg(short, long, allow_negative_numbers = true)]
        y: i64,

        /// Grid side length
        #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
        grid: usize,
    },

    /// Pick colors from an image interactively
    Pick {
        /// Path to the input image
        image: PathBuf,
    },

    /// Describe the psychology of individual colors
    Classify {
        #[arg(required = true, value_parser = parse_color)]
        colors: Vec<Color>,
    },

    /// Analyze the overall mood of a palette
    Mood {
        #[arg(required = true, value_parser = parse_color)]
        colors: Vec<Color>,
    },

    /// Search curated palettes by keyword, tag or category
    Search { query: String },

    /// List categories, or the palettes in one category
    Category { id: Option<String> },

    /// List theme presets, or show one
    Theme { name: Option<String> },

    /// Suggest random curated palettes
    Suggest {
        #[arg(short = 'n', long, default_value_t = 3)]
        count: usize,
    },

    /// Manage saved favorites
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum FavoritesAction {
    /// List saved palettes, newest first
    List,
    /// Save a palette
    Add {
        #[arg(required = true, value_parser = parse_color)]
        colors: Vec<Color>,

        /// Theme the palette came from
        #[arg(long)]
        theme: Option<String>,
    },
    /// Remove a saved palette by id
    Remove { id: String },
    /// Remove all saved palettes
    Clear,
}

fn parse_color(s: &str) -> Result<Color, String> {
    Color::from_hex(s).map_err(|e| e.to_string())
}
