use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor, execute, queue,
    style::{self, Color as CColor},
    terminal,
};

use crate::board::{BLACK, Frame, HEIGHT, Rgb, WIDTH};
use crate::clock::Clock;
use crate::error::GameError;
use crate::font;

/// An LED matrix that can show whole frames, single pixels and scrolling text.
pub trait Display {
    fn show_frame(&mut self, frame: &Frame) -> Result<(), GameError>;
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb) -> Result<(), GameError>;
    /// Blocks until the message has scrolled all the way across.
    fn show_text(&mut self, message: &str, color: Rgb, scroll_speed: Duration) -> Result<(), GameError>;
    fn clear(&mut self, color: Rgb) -> Result<(), GameError>;
}

// ── LED canvas with half-block rendering ────────────────────────────────────

const LED_SIZE: usize = 3;
const LED_PITCH: usize = LED_SIZE + 1; // one pixel of bezel between LEDs
const BEZEL: Rgb = Rgb(24, 24, 28);

const CANVAS_W: usize = WIDTH * LED_PITCH + 1;
// Half blocks pack two pixel rows per terminal row, so keep the height even.
const CANVAS_H: usize = (HEIGHT * LED_PITCH + 1).next_multiple_of(2);

struct LedCanvas {
    px: Vec<Rgb>,
}

impl LedCanvas {
    fn new() -> Self {
        Self {
            px: vec![BEZEL; CANVAS_W * CANVAS_H],
        }
    }

    fn set(&mut self, x: usize, y: usize, c: Rgb) {
        if x < CANVAS_W && y < CANVAS_H {
            self.px[y * CANVAS_W + x] = c;
        }
    }

    fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * CANVAS_W + x]
    }

    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, c: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, c);
            }
        }
    }

    /// Paints every LED: a dimmed rim around a full-brightness center.
    fn paint(&mut self, leds: &Frame) {
        for (i, &color) in leds.iter().enumerate() {
            let x = 1 + (i % WIDTH) * LED_PITCH;
            let y = 1 + (i / WIDTH) * LED_PITCH;
            self.fill_rect(x, y, LED_SIZE, LED_SIZE, Rgb::lerp(color, BEZEL, 96));
            self.set(x + LED_SIZE / 2, y + LED_SIZE / 2, color);
        }
    }

    fn render(&self, out: &mut impl Write, left: u16, top: u16) -> io::Result<()> {
        let rows = CANVAS_H / 2;
        let mut prev_fg = BLACK;
        let mut prev_bg = BLACK;

        for row in 0..rows {
            queue!(out, cursor::MoveTo(left, top + row as u16))?;
            let mut need_fg = true;
            let mut need_bg = true;
            for col in 0..CANVAS_W {
                let upper = self.get(col, row * 2);
                let lower = self.get(col, row * 2 + 1);

                if need_bg || prev_bg != lower {
                    queue!(out, style::SetBackgroundColor(term_color(lower)))?;
                    prev_bg = lower;
                    need_bg = false;
                }
                if upper == lower {
                    queue!(out, style::Print(' '))?;
                } else {
                    if need_fg || prev_fg != upper {
                        queue!(out, style::SetForegroundColor(term_color(upper)))?;
                        prev_fg = upper;
                        need_fg = false;
                    }
                    queue!(out, style::Print('\u{2580}'))?; // ▀
                }
            }
            queue!(out, style::ResetColor)?;
        }
        out.flush()
    }
}

fn term_color(c: Rgb) -> CColor {
    CColor::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

// ── Terminal display ────────────────────────────────────────────────────────

/// Draws the matrix centered in the terminal's alternate screen.
pub struct TerminalDisplay<W: Write, C: Clock> {
    out: W,
    clock: C,
    term_size: fn() -> io::Result<(u16, u16)>,
    leds: Frame,
    canvas: LedCanvas,
    last_size: Option<(u16, u16)>,
}

impl<W: Write, C: Clock> TerminalDisplay<W, C> {
    fn new(out: W, clock: C) -> Self {
        Self {
            out,
            clock,
            term_size: terminal::size,
            leds: [BLACK; WIDTH * HEIGHT],
            canvas: LedCanvas::new(),
            last_size: None,
        }
    }

    /// Switches the terminal to raw mode on the alternate screen.
    pub fn enter(mut out: W, clock: C) -> Result<Self, GameError> {
        terminal::enable_raw_mode()?;
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
        )?;
        Ok(Self::new(out, clock))
    }

    /// Restores the terminal. Call on every exit path.
    pub fn leave(&mut self) -> Result<(), GameError> {
        execute!(
            self.out,
            style::ResetColor,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), GameError> {
        let size = (self.term_size)()?;
        if self.last_size != Some(size) {
            queue!(self.out, style::ResetColor, terminal::Clear(terminal::ClearType::All))?;
            self.last_size = Some(size);
        }
        let (cols, rows) = size;
        let left = cols.saturating_sub(CANVAS_W as u16) / 2;
        let top = rows.saturating_sub((CANVAS_H / 2) as u16) / 2;

        self.canvas.paint(&self.leds);
        self.canvas.render(&mut self.out, left, top)?;
        Ok(())
    }
}

impl<W: Write, C: Clock> Display for TerminalDisplay<W, C> {
    fn show_frame(&mut self, frame: &Frame) -> Result<(), GameError> {
        self.leds = *frame;
        self.draw()
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb) -> Result<(), GameError> {
        assert!(x < WIDTH && y < HEIGHT, "pixel ({x}, {y}) is off the matrix");
        self.leds[y * WIDTH + x] = color;
        self.draw()
    }

    fn show_text(&mut self, message: &str, color: Rgb, scroll_speed: Duration) -> Result<(), GameError> {
        for frame in font::text_frames(message, color) {
            self.show_frame(&frame)?;
            self.clock.sleep(scroll_speed);
        }
        Ok(())
    }

    fn clear(&mut self, color: Rgb) -> Result<(), GameError> {
        self.leds = [color; WIDTH * HEIGHT];
        self.draw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BLUE, RED, WHITE};
    use crate::testing::FakeClock;

    fn offscreen(clock: FakeClock) -> TerminalDisplay<Vec<u8>, FakeClock> {
        let mut display = TerminalDisplay::new(Vec::new(), clock);
        display.term_size = || Ok((80, 24));
        display
    }

    #[test]
    fn led_centers_carry_the_frame_color() {
        let mut leds = [BLUE; WIDTH * HEIGHT];
        leds[WIDTH + 2] = RED;
        let mut canvas = LedCanvas::new();
        canvas.paint(&leds);

        let center = |col: usize, row: usize| {
            canvas.get(1 + col * LED_PITCH + LED_SIZE / 2, 1 + row * LED_PITCH + LED_SIZE / 2)
        };
        assert_eq!(center(2, 1), RED);
        assert_eq!(center(0, 0), BLUE);
        assert_eq!(canvas.get(0, 0), BEZEL);
        assert_ne!(canvas.get(1, 1), BLUE);
    }

    #[test]
    fn render_emits_every_terminal_row() {
        let mut canvas = LedCanvas::new();
        canvas.paint(&[BLUE; WIDTH * HEIGHT]);
        let mut out = Vec::new();
        canvas.render(&mut out, 4, 2).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('\u{2580}'));
        // One cursor move per terminal row, 1-based in the escape sequence.
        assert!(text.contains("\u{1b}[3;5H"));
        assert!(text.contains(&format!("\u{1b}[{};5H", 2 + CANVAS_H / 2)));
    }

    #[test]
    fn text_scrolls_on_the_display_clock() {
        let clock = FakeClock::default();
        let mut display = offscreen(clock.clone());
        let speed = Duration::from_millis(70);
        let frames = font::text_frames("Hi", WHITE).len() as u32;

        display.show_text("Hi", WHITE, speed).unwrap();

        assert_eq!(clock.now(), speed * frames);
        assert!(display.leds.iter().all(|&c| c == BLACK));
        assert!(!display.out.is_empty());
    }

    #[test]
    fn set_pixel_lights_one_led() {
        let mut display = offscreen(FakeClock::default());
        display.set_pixel(WIDTH - 1, 2, RED).unwrap();

        assert_eq!(display.leds[2 * WIDTH + WIDTH - 1], RED);
        assert_eq!(display.leds.iter().filter(|&&c| c == RED).count(), 1);
    }

    #[test]
    #[should_panic(expected = "off the matrix")]
    fn set_pixel_rejects_columns_past_the_edge() {
        let mut display = offscreen(FakeClock::default());
        let _ = display.set_pixel(WIDTH, 0, RED);
    }
}
