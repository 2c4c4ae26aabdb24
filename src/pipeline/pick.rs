use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::color::Color;
use crate::pipeline::extract::PixelBuffer;

/// Side length of the magnifier grid used while picking.
pub const DEFAULT_GRID_SIZE: usize = 6;

/// A manual palette is complete at this many picks.
pub const MAX_PICKS: usize = 5;

/// Square neighbourhood sampled around a pointer position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridSample {
    /// `grid[row][col]`, row 0 at the top.
    pub grid: Vec<Vec<Color>>,
    /// The pixel under the pointer itself.
    pub center: Color,
}

/// Sample a `grid_size` x `grid_size` block centred on `(x, y)`.
///
/// Coordinates past an edge are clamped, so near the borders the edge
/// pixels repeat. Alpha is ignored. A center coordinate outside the image
/// is clamped into it before reading the center preview.
pub fn sample_grid(pixels: &PixelBuffer<'_>, x: i64, y: i64, grid_size: usize) -> GridSample {
    let max_x = pixels.width() as i64 - 1;
    let max_y = pixels.height() as i64 - 1;
    let offset = (grid_size / 2) as i64;

    let grid: Vec<Vec<Color>> = (0..grid_size as i64)
        .map(|row| {
            let sy = (y - offset + row).clamp(0, max_y) as u32;
            (0..grid_size as i64)
                .map(|col| {
                    let sx = (x - offset + col).clamp(0, max_x) as u32;
                    pixels.pixel(sx, sy)
                })
                .collect::<Vec<Color>>()
        })
        .collect();

    let center = pixels.pixel(x.clamp(0, max_x) as u32, y.clamp(0, max_y) as u32);
    GridSample { grid, center }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PickError {
    #[error("{0} is already in the palette")]
    Duplicate(Color),
    #[error("palette already has {} colors", MAX_PICKS)]
    Full,
}

/// What a successful pick did to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    Added,
    /// This pick filled the last free slot.
    Complete,
}

/// Colors picked by hand, in pick order, capped at [`MAX_PICKS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickList {
    colors: Vec<Color>,
}

impl PickList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, color: Color) -> Result<PickOutcome, PickError> {
        if self.colors.contains(&color) {
            return Err(PickError::Duplicate(color));
        }
        if self.is_complete() {
            return Err(PickError::Full);
        }
        self.colors.push(color);
        debug!("picked {color} ({}/{MAX_PICKS})", self.colors.len());
        if self.is_complete() {
            Ok(PickOutcome::Complete)
        } else {
            Ok(PickOutcome::Added)
        }
    }

    /// Remove and return the most recent pick.
    pub fn undo(&mut self) -> Option<Color> {
        self.colors.pop()
    }

    pub fn clear(&mut self) {
        self.colors.clear();
    }

    pub fn is_complete(&self) -> bool {
        self.colors.len() >= MAX_PICKS
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn into_colors(self) -> Vec<Color> {
        self.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 10x8 image where every pixel encodes its own coordinate.
    fn coordinate_image() -> (Vec<u8>, u32, u32) {
        let (w, h) = (10u32, 8u32);
        let mut data = Vec::new();
        for y in 0..h {
            for x in 0..w {
                data.extend_from_slice(&[x as u8, y as u8, 0, 255]);
            }
        }
        (data, w, h)
    }

    fn at(x: u8, y: u8) -> Color {
        Color::new(x, y, 0)
    }

    #[test]
    fn grid_has_requested_shape() {
        let (data, w, h) = coordinate_image();
        let buf = PixelBuffer::new(&data, w, h).unwrap();
        let sample = sample_grid(&buf, 5, 4, DEFAULT_GRID_SIZE);
        assert_eq!(sample.grid.len(), 6);
        assert!(sample.grid.iter().all(|row| row.len() == 6));
    }

    #[test]
    fn interior_grid_is_offset_by_half() {
        let (data, w, h) = coordinate_image();
        let buf = PixelBuffer::new(&data, w, h).unwrap();
        let sample = sample_grid(&buf, 5, 4, 6);
        assert_eq!(sample.grid[0][0], at(2, 1));
        assert_eq!(sample.grid[3][3], at(5, 4));
        assert_eq!(sample.grid[5][5], at(7, 6));
        assert_eq!(sample.center, at(5, 4));
    }

    #[test]
    fn corner_grid_repeats_edge_pixels() {
        let (data, w, h) = coordinate_image();
        let buf = PixelBuffer::new(&data, w, h).unwrap();
        let sample = sample_grid(&buf, 0, 0, 6);

        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(sample.grid[row][col], at(0, 0), "cell ({row}, {col})");
            }
        }
        assert_eq!(sample.grid[0][5], at(2, 0));
        assert_eq!(sample.grid[5][0], at(0, 2));
        assert_eq!(sample.grid[5][5], at(2, 2));
        assert_eq!(sample.center, at(0, 0));
    }

    #[test]
    fn far_corner_grid_clamps_to_last_pixel() {
        let (data, w, h) = coordinate_image();
        let buf = PixelBuffer::new(&data, w, h).unwrap();
        let sample = sample_grid(&buf, 9, 7, 6);
        assert_eq!(sample.grid[0][0], at(6, 4));
        assert_eq!(sample.grid[5][5], at(9, 7));
        assert_eq!(sample.grid[3][4], at(9, 7));
    }

    #[test]
    fn odd_grid_is_centred() {
        let (data, w, h) = coordinate_image();
        let buf = PixelBuffer::new(&data, w, h).unwrap();
        let sample = sample_grid(&buf, 5, 4, 3);
        assert_eq!(sample.grid[1][1], sample.center);
        assert_eq!(sample.grid[0][0], at(4, 3));
    }

    #[test]
    fn out_of_range_center_is_clamped() {
        let (data, w, h) = coordinate_image();
        let buf = PixelBuffer::new(&data, w, h).unwrap();
        let sample = sample_grid(&buf, -20, 100, 6);
        assert_eq!(sample.center, at(0, 7));
        assert!(sample.grid.iter().flatten().all(|&c| c == at(0, 7)));
    }

    #[test]
    fn grid_ignores_alpha() {
        let data = [9u8, 8, 7, 0];
        let buf = PixelBuffer::new(&data, 1, 1).unwrap();
        let sample = sample_grid(&buf, 0, 0, 2);
        assert_eq!(sample.center, Color::new(9, 8, 7));
    }

    // --- PickList tests ---

    #[test]
    fn fifth_pick_completes_once() {
        let mut picks = PickList::new();
        let mut completions = 0;
        for i in 0..5u8 {
            if picks.push(Color::new(i, 0, 0)).unwrap() == PickOutcome::Complete {
                completions += 1;
                assert_eq!(picks.len(), 5);
            }
        }
        assert_eq!(completions, 1);
        assert!(picks.is_complete());
        assert_eq!(picks.push(Color::new(99, 0, 0)), Err(PickError::Full));
        assert_eq!(picks.len(), 5);
    }

    #[test]
    fn duplicate_pick_is_rejected() {
        let mut picks = PickList::new();
        picks.push(Color::new(1, 2, 3)).unwrap();
        assert_eq!(
            picks.push(Color::new(1, 2, 3)),
            Err(PickError::Duplicate(Color::new(1, 2, 3)))
        );
        assert_eq!(picks.colors(), &[Color::new(1, 2, 3)]);
    }

    #[test]
    fn undo_reopens_the_palette() {
        let mut picks = PickList::new();
        for i in 0..5u8 {
            picks.push(Color::new(0, i, 0)).unwrap();
        }
        assert_eq!(picks.undo(), Some(Color::new(0, 4, 0)));
        assert_eq!(
            picks.push(Color::new(0, 9, 0)),
            Ok(PickOutcome::Complete)
        );
        picks.clear();
        assert!(picks.is_empty());
    }
}
