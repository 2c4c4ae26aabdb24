use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::color::Color as AppColor;
use crate::mood::analyze_mood;
use crate::pipeline::extract::PixelBuffer;
use crate::pipeline::pick::{GridSample, MAX_PICKS};
use crate::psychology::classify;

fn to_color(c: AppColor) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

fn contrast_fg(c: AppColor) -> Color {
    to_color(c.readable_text())
}

/// Maps terminal cells inside a preview area to image pixels. Each cell
/// shows two vertically stacked pixels using a half block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewMap {
    pub area: Rect,
    pub img_width: u32,
    pub img_height: u32,
}

impl PreviewMap {
    /// Image coordinate under terminal cell `(col, row)`, upper half.
    pub fn to_image(&self, col: u16, row: u16) -> Option<(u32, u32)> {
        if !self.area.contains(Position::new(col, row)) {
            return None;
        }
        let cx = (col - self.area.x) as u64;
        let cy = (row - self.area.y) as u64;
        let x = cx * self.img_width as u64 / self.area.width.max(1) as u64;
        let y = cy * 2 * self.img_height as u64 / (self.area.height.max(1) as u64 * 2);
        Some((x as u32, y as u32))
    }

    /// Terminal cell showing image pixel `(x, y)`.
    pub fn to_cell(&self, x: u32, y: u32) -> (u16, u16) {
        let col = x as u64 * self.area.width as u64 / self.img_width.max(1) as u64;
        let row = y as u64 * self.area.height as u64 / self.img_height.max(1) as u64;
        (
            self.area.x + (col as u16).min(self.area.width.saturating_sub(1)),
            self.area.y + (row as u16).min(self.area.height.saturating_sub(1)),
        )
    }

    /// Image pixels per terminal column, at least one.
    pub fn step(&self) -> u32 {
        (self.img_width / self.area.width.max(1) as u32).max(1)
    }
}

/// Downscaled image with a cursor marker.
pub struct ImageWidget<'a> {
    pixels: &'a PixelBuffer<'a>,
    cursor: (u32, u32),
}

impl<'a> ImageWidget<'a> {
    pub fn new(pixels: &'a PixelBuffer<'a>, cursor: (u32, u32)) -> Self {
        Self { pixels, cursor }
    }
}

impl Widget for ImageWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let map = PreviewMap {
            area,
            img_width: self.pixels.width(),
            img_height: self.pixels.height(),
        };
        let rows = area.height as u64 * 2;
        for row in 0..area.height {
            for col in 0..area.width {
                let x = (col as u64 * map.img_width as u64 / area.width as u64) as u32;
                let top = (row as u64 * 2 * map.img_height as u64 / rows) as u32;
                let bottom = ((row as u64 * 2 + 1) * map.img_height as u64 / rows) as u32;
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char('▀')
                        .set_fg(to_color(self.pixels.pixel(x, top)))
                        .set_bg(to_color(self.pixels.pixel(x, bottom)));
                }
            }
        }

        let (cx, cy) = map.to_cell(self.cursor.0, self.cursor.1);
        if let Some(cell) = buf.cell_mut((cx, cy)) {
            let under = self.pixels.pixel(self.cursor.0, self.cursor.1);
            cell.set_char('+')
                .set_fg(contrast_fg(under))
                .set_bg(to_color(under))
                .set_style(Style::default().add_modifier(Modifier::BOLD));
        }
    }
}

/// Magnified neighbourhood of the cursor with the center cell marked.
pub struct GridWidget<'a> {
    sample: &'a GridSample,
}

impl<'a> GridWidget<'a> {
    pub fn new(sample: &'a GridSample) -> Self {
        Self { sample }
    }
}

impl Widget for GridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title("Magnifier");
        let inner = block.inner(area);
        block.render(area, buf);

        let size = self.sample.grid.len();
        let mid = size / 2;
        let lines: Vec<Line> = self
            .sample
            .grid
            .iter()
            .enumerate()
            .map(|(r, row)| {
                let spans: Vec<Span> = row
                    .iter()
                    .enumerate()
                    .map(|(c, &color)| {
                        let label = if r == mid && c == mid { "[]" } else { "  " };
                        Span::styled(
                            label,
                            Style::default().bg(to_color(color)).fg(contrast_fg(color)),
                        )
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

/// Hex, swatch and psychology of the color under the cursor.
pub struct CenterWidget {
    color: AppColor,
}

impl CenterWidget {
    pub fn new(color: AppColor) -> Self {
        Self { color }
    }
}

impl Widget for CenterWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let record = classify(self.color);
        let block = Block::bordered().title("Under cursor");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("  {}  ", self.color.to_hex()),
                    Style::default()
                        .bg(to_color(self.color))
                        .fg(contrast_fg(self.color)),
                ),
                Span::raw(format!("  {} ", record.icon)),
                Span::styled(record.emotion, Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(record.meaning),
            Line::from(Span::styled(
                record.description,
                Style::default().fg(Color::DarkGray),
            )),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

/// Picked colors as swatches, followed by the palette mood.
pub struct PicksWidget<'a> {
    picks: &'a [AppColor],
}

impl<'a> PicksWidget<'a> {
    pub fn new(picks: &'a [AppColor]) -> Self {
        Self { picks }
    }
}

impl Widget for PicksWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!("Palette {}/{}", self.picks.len(), MAX_PICKS);
        let block = Block::bordered().title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut swatches = vec![Span::raw(" ")];
        for &c in self.picks {
            swatches.push(Span::styled(
                format!("{:^9}", c.to_hex()),
                Style::default().bg(to_color(c)).fg(contrast_fg(c)),
            ));
            swatches.push(Span::raw(" "));
        }
        for _ in self.picks.len()..MAX_PICKS {
            swatches.push(Span::styled(
                format!("{:^9}", "·"),
                Style::default().fg(Color::DarkGray),
            ));
            swatches.push(Span::raw(" "));
        }

        let mood = analyze_mood(self.picks);
        let lines = vec![
            Line::from(swatches),
            Line::from(""),
            Line::from(vec![
                Span::raw(format!(" {} ", mood.icon)),
                Span::styled(mood.overall_mood, Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("  energy {:?}, warmth {:?}", mood.energy, mood.warmth),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(format!(" {}", mood.description)),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> PreviewMap {
        PreviewMap {
            area: Rect::new(2, 1, 40, 20),
            img_width: 400,
            img_height: 400,
        }
    }

    #[test]
    fn cells_map_into_image() {
        let m = map();
        assert_eq!(m.to_image(2, 1), Some((0, 0)));
        assert_eq!(m.to_image(41, 20), Some((390, 380)));
        assert_eq!(m.to_image(1, 1), None);
        assert_eq!(m.to_image(42, 1), None);
    }

    #[test]
    fn image_maps_back_to_cells() {
        let m = map();
        assert_eq!(m.to_cell(0, 0), (2, 1));
        assert_eq!(m.to_cell(399, 399), (41, 20));
        assert_eq!(m.step(), 10);
    }

    #[test]
    fn image_widget_fills_area() {
        let data: Vec<u8> = [255u8, 0, 0, 255].repeat(16);
        let pixels = PixelBuffer::new(&data, 4, 4).unwrap();
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        ImageWidget::new(&pixels, (3, 3)).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "▀");
        assert_eq!(buf[(0, 0)].fg, Color::Rgb(255, 0, 0));
        assert_eq!(buf[(3, 1)].symbol(), "+");
    }

    #[test]
    fn picks_widget_shows_count() {
        let picks = [AppColor::new(255, 0, 0)];
        let area = Rect::new(0, 0, 60, 6);
        let mut buf = Buffer::empty(area);
        PicksWidget::new(&picks).render(area, &mut buf);
        let top: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(top.contains("Palette 1/5"), "title row was {top:?}");
    }
}
