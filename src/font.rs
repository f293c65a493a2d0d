use crate::board::{BLACK, Frame, HEIGHT, Rgb, WIDTH};

pub const GLYPH_W: usize = 3;
pub const GLYPH_H: usize = 5;
/// Matrix row the top of each glyph sits on.
const TEXT_TOP: usize = (HEIGHT - GLYPH_H) / 2;

// ── 3x5 bitmap glyphs ───────────────────────────────────────────────────────

#[rustfmt::skip]
const DIGITS: [[u8; 15]; 10] = [
    [1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1], // 0
    [0,1,0, 1,1,0, 0,1,0, 0,1,0, 1,1,1], // 1
    [1,1,1, 0,0,1, 1,1,1, 1,0,0, 1,1,1], // 2
    [1,1,1, 0,0,1, 0,1,1, 0,0,1, 1,1,1], // 3
    [1,0,1, 1,0,1, 1,1,1, 0,0,1, 0,0,1], // 4
    [1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1], // 5
    [1,1,1, 1,0,0, 1,1,1, 1,0,1, 1,1,1], // 6
    [1,1,1, 0,0,1, 0,1,0, 0,1,0, 0,1,0], // 7
    [1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,1,1], // 8
    [1,1,1, 1,0,1, 1,1,1, 0,0,1, 1,1,1], // 9
];

#[rustfmt::skip]
const LETTERS: [[u8; 15]; 26] = [
    [0,1,0, 1,0,1, 1,1,1, 1,0,1, 1,0,1], // A
    [1,1,0, 1,0,1, 1,1,0, 1,0,1, 1,1,0], // B
    [0,1,1, 1,0,0, 1,0,0, 1,0,0, 0,1,1], // C
    [1,1,0, 1,0,1, 1,0,1, 1,0,1, 1,1,0], // D
    [1,1,1, 1,0,0, 1,1,0, 1,0,0, 1,1,1], // E
    [1,1,1, 1,0,0, 1,1,0, 1,0,0, 1,0,0], // F
    [0,1,1, 1,0,0, 1,0,1, 1,0,1, 0,1,1], // G
    [1,0,1, 1,0,1, 1,1,1, 1,0,1, 1,0,1], // H
    [1,1,1, 0,1,0, 0,1,0, 0,1,0, 1,1,1], // I
    [0,0,1, 0,0,1, 0,0,1, 1,0,1, 0,1,0], // J
    [1,0,1, 1,0,1, 1,1,0, 1,0,1, 1,0,1], // K
    [1,0,0, 1,0,0, 1,0,0, 1,0,0, 1,1,1], // L
    [1,0,1, 1,1,1, 1,1,1, 1,0,1, 1,0,1], // M
    [1,1,0, 1,0,1, 1,0,1, 1,0,1, 1,0,1], // N
    [0,1,0, 1,0,1, 1,0,1, 1,0,1, 0,1,0], // O
    [1,1,0, 1,0,1, 1,1,0, 1,0,0, 1,0,0], // P
    [0,1,0, 1,0,1, 1,0,1, 1,1,0, 0,1,1], // Q
    [1,1,0, 1,0,1, 1,1,0, 1,0,1, 1,0,1], // R
    [0,1,1, 1,0,0, 0,1,0, 0,0,1, 1,1,0], // S
    [1,1,1, 0,1,0, 0,1,0, 0,1,0, 0,1,0], // T
    [1,0,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1], // U
    [1,0,1, 1,0,1, 1,0,1, 1,0,1, 0,1,0], // V
    [1,0,1, 1,0,1, 1,1,1, 1,1,1, 1,0,1], // W
    [1,0,1, 1,0,1, 0,1,0, 1,0,1, 1,0,1], // X
    [1,0,1, 1,0,1, 0,1,0, 0,1,0, 0,1,0], // Y
    [1,1,1, 0,0,1, 0,1,0, 1,0,0, 1,1,1], // Z
];

const BLANK: [u8; 15] = [0; 15];
#[rustfmt::skip]
const BANG: [u8; 15] = [0,1,0, 0,1,0, 0,1,0, 0,0,0, 0,1,0];
#[rustfmt::skip]
const QUESTION: [u8; 15] = [1,1,0, 0,0,1, 0,1,0, 0,0,0, 0,1,0];
#[rustfmt::skip]
const COLON: [u8; 15] = [0,0,0, 0,1,0, 0,0,0, 0,1,0, 0,0,0];
#[rustfmt::skip]
const PERIOD: [u8; 15] = [0,0,0, 0,0,0, 0,0,0, 0,0,0, 0,1,0];

/// Lowercase folds to uppercase; anything unknown shows as `?`.
fn glyph(ch: char) -> &'static [u8; 15] {
    match ch.to_ascii_uppercase() {
        d @ '0'..='9' => &DIGITS[(d as u8 - b'0') as usize],
        l @ 'A'..='Z' => &LETTERS[(l as u8 - b'A') as usize],
        ' ' => &BLANK,
        '!' => &BANG,
        ':' => &COLON,
        '.' => &PERIOD,
        _ => &QUESTION,
    }
}

// ── Scrolling text ──────────────────────────────────────────────────────────

/// One lit/unlit flag per glyph row.
type Column = [bool; GLYPH_H];

/// The message as a strip of columns with one blank column between glyphs.
fn columns(message: &str) -> Vec<Column> {
    let mut strip = Vec::new();
    for ch in message.chars() {
        let g = glyph(ch);
        for col in 0..GLYPH_W {
            let mut column = [false; GLYPH_H];
            for (row, lit) in column.iter_mut().enumerate() {
                *lit = g[row * GLYPH_W + col] == 1;
            }
            strip.push(column);
        }
        strip.push([false; GLYPH_H]);
    }
    strip
}

/// Every frame of `message` sliding in from the right edge and out the left.
pub fn text_frames(message: &str, color: Rgb) -> Vec<Frame> {
    let mut strip = vec![[false; GLYPH_H]; WIDTH];
    strip.extend(columns(message));
    strip.extend(std::iter::repeat_n([false; GLYPH_H], WIDTH));

    strip
        .windows(WIDTH)
        .map(|window| {
            let mut frame = [BLACK; WIDTH * HEIGHT];
            for (x, column) in window.iter().enumerate() {
                for (y, &lit) in column.iter().enumerate() {
                    if lit {
                        frame[(TEXT_TOP + y) * WIDTH + x] = color;
                    }
                }
            }
            frame
        })
        .collect()
}
