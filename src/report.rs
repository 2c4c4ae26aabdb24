//! Plain-terminal rendering of palettes and analyses.

use std::fmt::Write;

use crossterm::style::{Color as TermColor, Stylize};

use crate::catalog::KeywordPalette;
use crate::color::Color;
use crate::mood::analyze_mood;
use crate::pipeline::pick::GridSample;
use crate::psychology::classify;
use crate::store::ColorPalette;

fn term(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

fn swatch(c: Color, width: usize) -> String {
    " ".repeat(width).on(term(c)).to_string()
}

/// One row of wide swatches followed by the hex codes under them.
pub fn swatches(colors: &[Color]) -> String {
    let mut out = String::from("  ");
    for &c in colors {
        out.push_str(&swatch(c, 9));
        out.push(' ');
    }
    out.push_str("\n  ");
    for c in colors {
        let _ = write!(out, "{:^9} ", c.to_hex());
    }
    out.push('\n');
    out
}

/// One line per color with its psychology record.
pub fn psychology(colors: &[Color]) -> String {
    let mut out = String::new();
    for &c in colors {
        let record = classify(c);
        let _ = writeln!(
            out,
            "  {} {}  {} {}",
            swatch(c, 4),
            c.to_hex(),
            record.icon,
            record.emotion.bold()
        );
        let _ = writeln!(out, "      {}", record.meaning);
        let _ = writeln!(out, "      {}", record.description.dim());
    }
    out
}

/// Overall mood block for a palette.
pub fn mood(colors: &[Color]) -> String {
    let mood = analyze_mood(colors);
    let mut out = String::new();
    let _ = writeln!(out, "  {} {}", mood.icon, mood.overall_mood.bold());
    let _ = writeln!(
        out,
        "  energy: {:?}  warmth: {:?}",
        mood.energy, mood.warmth
    );
    let _ = writeln!(out, "  {}", mood.description.dim());
    out
}

/// Swatches plus mood: what every palette-producing command shows.
pub fn palette(colors: &[Color]) -> String {
    format!("{}\n{}", swatches(colors), mood(colors))
}

pub fn grid(sample: &GridSample) -> String {
    let mut out = String::new();
    for row in &sample.grid {
        out.push_str("  ");
        for &c in row {
            out.push_str(&swatch(c, 2));
        }
        out.push_str("   ");
        let hexes: Vec<String> = row.iter().map(|c| c.to_hex()).collect();
        out.push_str(&hexes.join(" "));
        out.push('\n');
    }
    let _ = writeln!(
        out,
        "\n  center {} {}",
        swatch(sample.center, 4),
        sample.center
    );
    out
}

pub fn keyword_palette(p: &KeywordPalette) -> String {
    format!(
        "{} ({})\n  {}\n  tags: {}\n{}",
        p.keyword.bold(),
        p.category,
        p.description,
        p.tags.join(", "),
        swatches(&p.colors)
    )
}

pub fn favorite(f: &ColorPalette) -> String {
    let mut header = format!("{} {}", f.id.as_str().bold(), f.created_at.format("%Y-%m-%d %H:%M"));
    if let Some(theme) = &f.theme {
        let _ = write!(header, " [{theme}]");
    }
    format!("{header}\n{}", swatches(&f.colors))
}
