pub mod widgets;

use std::io::stdout;

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use log::LevelFilter;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use ratatui::{DefaultTerminal, Frame};

use crate::color::Color as AppColor;
use crate::pipeline::extract::PixelBuffer;
use crate::pipeline::pick::{sample_grid, GridSample, PickError, PickList, PickOutcome, DEFAULT_GRID_SIZE};
use widgets::{CenterWidget, GridWidget, ImageWidget, PicksWidget, PreviewMap};

/// State for the interactive picker.
pub struct TuiApp<'a> {
    pub pixels: PixelBuffer<'a>,
    pub cursor: (u32, u32),
    pub picks: PickList,
    pub sample: GridSample,
    pub status: String,
    /// Where the image was last drawn, for mouse hit-testing.
    preview: Option<PreviewMap>,
    quit: bool,
}

impl<'a> TuiApp<'a> {
    pub fn new(pixels: PixelBuffer<'a>) -> Self {
        let cursor = (pixels.width() / 2, pixels.height() / 2);
        let sample = sample_grid(&pixels, cursor.0 as i64, cursor.1 as i64, DEFAULT_GRID_SIZE);
        Self {
            pixels,
            cursor,
            picks: PickList::new(),
            sample,
            status: "arrows/hjkl move, enter pick, backspace undo, c clear, q done".into(),
            preview: None,
            quit: false,
        }
    }

    /// Move the cursor and resample around it.
    pub fn move_to(&mut self, x: u32, y: u32) {
        self.cursor = (
            x.min(self.pixels.width() - 1),
            y.min(self.pixels.height() - 1),
        );
        self.sample = sample_grid(
            &self.pixels,
            self.cursor.0 as i64,
            self.cursor.1 as i64,
            DEFAULT_GRID_SIZE,
        );
    }

    fn nudge(&mut self, dx: i64, dy: i64) {
        let step = self.preview.map(|p| p.step()).unwrap_or(1) as i64;
        let x = (self.cursor.0 as i64 + dx * step).max(0) as u32;
        let y = (self.cursor.1 as i64 + dy * step * 2).max(0) as u32;
        self.move_to(x, y);
    }

    /// Pick the color under the cursor.
    pub fn pick(&mut self) {
        let color = self.sample.center;
        self.status = match self.picks.push(color) {
            Ok(PickOutcome::Added) => format!("picked {color}"),
            Ok(PickOutcome::Complete) => {
                format!("picked {color}, palette complete! q to finish")
            }
            Err(e @ PickError::Duplicate(_)) => e.to_string(),
            Err(e @ PickError::Full) => format!("{e}, backspace to undo"),
        };
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Left | KeyCode::Char('h') => self.nudge(-1, 0),
            KeyCode::Right | KeyCode::Char('l') => self.nudge(1, 0),
            KeyCode::Up | KeyCode::Char('k') => self.nudge(0, -1),
            KeyCode::Down | KeyCode::Char('j') => self.nudge(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.pick(),
            KeyCode::Backspace => {
                self.status = match self.picks.undo() {
                    Some(c) => format!("removed {c}"),
                    None => "nothing to undo".into(),
                }
            }
            KeyCode::Char('c') => {
                self.picks.clear();
                self.status = "cleared".into();
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(map) = self.preview else { return };
        let Some((x, y)) = map.to_image(mouse.column, mouse.row) else {
            return;
        };
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => self.move_to(x, y),
            MouseEventKind::Down(MouseButton::Left) => {
                self.move_to(x, y);
                self.pick();
            }
            _ => {}
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let [main, status] =
            Layout::vertical([Constraint::Min(8), Constraint::Length(1)]).areas(frame.area());
        let [image_area, side] =
            Layout::horizontal([Constraint::Min(20), Constraint::Length(58)]).areas(main);
        let grid_height = DEFAULT_GRID_SIZE as u16 + 2;
        let [grid_area, center_area, picks_area] = Layout::vertical([
            Constraint::Length(grid_height),
            Constraint::Length(6),
            Constraint::Min(6),
        ])
        .areas(side);

        let image_block = Block::bordered().title(format!(
            "Image {}x{}  cursor {},{}",
            self.pixels.width(),
            self.pixels.height(),
            self.cursor.0,
            self.cursor.1
        ));
        let image_inner = fit_aspect(
            image_block.inner(image_area),
            self.pixels.width(),
            self.pixels.height(),
        );
        frame.render_widget(image_block, image_area);
        frame.render_widget(ImageWidget::new(&self.pixels, self.cursor), image_inner);
        self.preview = Some(PreviewMap {
            area: image_inner,
            img_width: self.pixels.width(),
            img_height: self.pixels.height(),
        });

        let grid_width = DEFAULT_GRID_SIZE as u16 * 2 + 2;
        let [grid_area, _] =
            Layout::horizontal([Constraint::Length(grid_width), Constraint::Min(0)])
                .areas(grid_area);
        frame.render_widget(GridWidget::new(&self.sample), grid_area);
        frame.render_widget(CenterWidget::new(self.sample.center), center_area);
        frame.render_widget(PicksWidget::new(self.picks.colors()), picks_area);
        frame.render_widget(
            Paragraph::new(self.status.as_str()).style(Style::default().fg(Color::Yellow)),
            status,
        );
    }
}

/// Largest rect inside `area` with the image's aspect ratio, given that a
/// terminal cell holds two pixels vertically.
fn fit_aspect(area: Rect, width: u32, height: u32) -> Rect {
    if area.width == 0 || area.height == 0 {
        return area;
    }
    let by_width = (area.width as u64 * height as u64 / width.max(1) as u64 / 2).max(1);
    if by_width <= area.height as u64 {
        Rect::new(area.x, area.y, area.width, by_width as u16)
    } else {
        let by_height = (area.height as u64 * 2 * width as u64 / height.max(1) as u64).max(1);
        Rect::new(area.x, area.y, by_height.min(area.width as u64) as u16, area.height)
    }
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut TuiApp<'_>) -> Result<()> {
    while !app.quit {
        terminal.draw(|frame| app.draw(frame))?;
        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
    Ok(())
}

/// Holds the log level at `Error` while alive, restoring the previous
/// level on drop.
struct QuietLogs(LevelFilter);

impl QuietLogs {
    fn new() -> Self {
        let previous = log::max_level();
        log::set_max_level(LevelFilter::Error);
        Self(previous)
    }
}

impl Drop for QuietLogs {
    fn drop(&mut self) {
        log::set_max_level(self.0);
    }
}

/// Leaves the alternate screen and mouse capture on drop, however `run`
/// exits.
struct TerminalSession;

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
    }
}

/// Launch the picker and return the colors picked when the user quits.
pub fn run(pixels: PixelBuffer<'_>) -> Result<Vec<AppColor>> {
    let mut app = TuiApp::new(pixels);

    let _quiet = QuietLogs::new();
    let mut terminal = ratatui::init();
    let _session = TerminalSession;
    execute!(stdout(), EnableMouseCapture)?;

    event_loop(&mut terminal, &mut app)?;
    Ok(app.picks.into_colors())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEvent};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn striped() -> Vec<u8> {
        // 8x4, each column its own shade
        let mut data = Vec::new();
        for _ in 0..4 {
            for x in 0..8u8 {
                data.extend_from_slice(&[x * 30, 0, 0, 255]);
            }
        }
        data
    }

    #[test]
    fn starts_centred() {
        let data = striped();
        let app = TuiApp::new(PixelBuffer::new(&data, 8, 4).unwrap());
        assert_eq!(app.cursor, (4, 2));
        assert_eq!(app.sample.center, AppColor::new(120, 0, 0));
    }

    #[test]
    fn keys_move_pick_and_undo() {
        let data = striped();
        let mut app = TuiApp::new(PixelBuffer::new(&data, 8, 4).unwrap());
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.cursor.0, 5);
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.picks.colors(), &[AppColor::new(150, 0, 0)]);
        assert!(app.status.contains("already"));

        app.handle_key(key(KeyCode::Backspace));
        assert!(app.picks.is_empty());
    }

    #[test]
    fn cursor_stays_inside_image() {
        let data = striped();
        let mut app = TuiApp::new(PixelBuffer::new(&data, 8, 4).unwrap());
        for _ in 0..20 {
            app.handle_key(key(KeyCode::Left));
            app.handle_key(key(KeyCode::Up));
        }
        assert_eq!(app.cursor, (0, 0));
        for _ in 0..20 {
            app.handle_key(key(KeyCode::Right));
            app.handle_key(key(KeyCode::Down));
        }
        assert_eq!(app.cursor, (7, 3));
    }

    #[test]
    fn five_picks_complete_the_palette() {
        let data = striped();
        let mut app = TuiApp::new(PixelBuffer::new(&data, 8, 4).unwrap());
        app.move_to(0, 0);
        for _ in 0..5 {
            app.pick();
            app.handle_key(key(KeyCode::Right));
        }
        assert!(app.picks.is_complete());
        assert!(app.status.contains("complete"));
        app.pick();
        assert_eq!(app.picks.len(), 5);
        assert!(app.status.contains("already has 5"));
    }

    #[test]
    fn mouse_outside_preview_is_ignored() {
        let data = striped();
        let mut app = TuiApp::new(PixelBuffer::new(&data, 8, 4).unwrap());
        app.preview = Some(PreviewMap {
            area: Rect::new(10, 10, 8, 2),
            img_width: 8,
            img_height: 4,
        });
        let click = |column, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click(0, 0));
        assert!(app.picks.is_empty());
        app.handle_mouse(click(11, 10));
        assert_eq!(app.cursor, (1, 0));
        assert_eq!(app.picks.colors(), &[AppColor::new(30, 0, 0)]);
    }

    #[test]
    fn quiet_logs_restores_level_on_early_exit() {
        fn fails_while_quiet() -> Result<()> {
            let _quiet = QuietLogs::new();
            assert_eq!(log::max_level(), LevelFilter::Error);
            anyhow::bail!("mouse capture unavailable")
        }

        log::set_max_level(LevelFilter::Info);
        assert!(fails_while_quiet().is_err());
        assert_eq!(log::max_level(), LevelFilter::Info);
    }

    #[test]
    fn fit_aspect_keeps_ratio() {
        let area = Rect::new(0, 0, 100, 50);
        assert_eq!(fit_aspect(area, 200, 100), Rect::new(0, 0, 100, 25));
        assert_eq!(fit_aspect(area, 100, 400), Rect::new(0, 0, 25, 50));
    }
}
