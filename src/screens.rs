use std::time::Duration;

use crate::board::{BLACK, BLUE, WHITE, WIDTH, YELLOW};
use crate::clock::Clock;
use crate::display::Display;
use crate::error::GameError;

const INTRO_PAUSE: Duration = Duration::from_millis(500);
const INTRO_LINE_STEP: Duration = Duration::from_millis(100);
const INTRO_LINE_ROWS: [usize; 2] = [3, 4];

/// Blue screen, a white stripe drawn left to right, then "Ready?".
pub fn start_screen(display: &mut impl Display, clock: &mut impl Clock, scroll_speed: Duration) -> Result<(), GameError> {
    display.clear(BLUE)?;
    clock.sleep(INTRO_PAUSE);
    for x in 0..WIDTH {
        for y in INTRO_LINE_ROWS {
            display.set_pixel(x, y, WHITE)?;
        }
        clock.sleep(INTRO_LINE_STEP);
    }
    clock.sleep(INTRO_PAUSE);
    display.show_text("Ready?", YELLOW, scroll_speed)?;
    display.clear(BLACK)
}

pub fn game_over_screen(display: &mut impl Display, total_score: u64, scroll_speed: Duration) -> Result<(), GameError> {
    display.clear(BLACK)?;
    display.show_text(&format!("Game Over! Score: {total_score}"), WHITE, scroll_speed)
}
