//! Segmented score display: a 5x3 grid of independently toggleable cells.

use thiserror::Error;

pub const ROWS: usize = 5;
pub const COLS: usize = 3;
pub const CELL_COUNT: usize = ROWS * COLS;

/// On/off pattern per digit, row-major, top row first. 1 = lit.
#[rustfmt::skip]
const DIGITS: [[u8; CELL_COUNT]; 10] = [
    // 0
    [1, 1, 1,
     1, 0, 1,
     1, 0, 1,
     1, 0, 1,
     1, 1, 1],
    // 1
    [0, 0, 1,
     0, 0, 1,
     0, 0, 1,
     0, 0, 1,
     0, 0, 1],
    // 2
    [1, 1, 1,
     0, 0, 1,
     1, 1, 1,
     1, 0, 0,
     1, 1, 1],
    // 3
    [1, 1, 1,
     0, 0, 1,
     1, 1, 1,
     0, 0, 1,
     1, 1, 1],
    // 4
    [1, 0, 1,
     1, 0, 1,
     1, 1, 1,
     0, 0, 1,
     0, 0, 1],
    // 5
    [1, 1, 1,
     1, 0, 0,
     1, 1, 1,
     0, 0, 1,
     1, 1, 1],
    // 6
    [1, 1, 1,
     1, 0, 0,
     1, 1, 1,
     1, 0, 1,
     1, 1, 1],
    // 7
    [1, 1, 1,
     0, 0, 1,
     0, 0, 1,
     0, 1, 0,
     1, 0, 0],
    // 8
    [1, 1, 1,
     1, 0, 1,
     1, 1, 1,
     1, 0, 1,
     1, 1, 1],
    // 9
    [1, 1, 1,
     1, 0, 1,
     1, 1, 1,
     0, 0, 1,
     1, 1, 1],
];

/// A single digit display holds one column of three cells per row; nothing
/// above 9 is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("digit {0} cannot be shown on a 5x3 display")]
pub struct DigitOutOfRange(pub u8);

/// One cell of the grid: an on/off flag and its absolute pixel position,
/// fixed at layout time.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    pub on: bool,
    pub pos_x: f32,
    pub pos_y: f32,
}

/// One score widget.
///
/// The anchor is in pixel space relative to the screen center; the top-left
/// cell sits half a pitch inside it and the grid steps right and down from
/// there. The alignment flag records which edge the caller anchored against;
/// it does not change the grid math.
#[derive(Debug, Clone)]
pub struct Display {
    pub anchor_x: i32,
    pub anchor_y: i32,
    pub left_aligned: bool,
    value: u8,
    cells: [Cell; CELL_COUNT],
}

impl Display {
    /// Largest value one board can show.
    pub const MAX_DIGIT: u8 = 9;

    /// Lay out the cell grid from the anchor. `pitch_w`/`pitch_h` is the
    /// cell spacing in pixels (the ball's measurements, in this game).
    pub fn new(anchor_x: i32, anchor_y: i32, left_aligned: bool, pitch_w: i32, pitch_h: i32) -> Self {
        let base_x = anchor_x as f32 + pitch_w as f32 / 2.0;
        let base_y = anchor_y as f32 - pitch_h as f32 / 2.0;

        let mut cells = [Cell { on: true, pos_x: 0.0, pos_y: 0.0 }; CELL_COUNT];
        for row in 0..ROWS {
            for col in 0..COLS {
                cells[col + row * COLS] = Cell {
                    on: true,
                    pos_x: base_x + (pitch_w * col as i32) as f32,
                    pos_y: base_y - (pitch_h * row as i32) as f32,
                };
            }
        }

        Self {
            anchor_x,
            anchor_y,
            left_aligned,
            value: 0,
            cells,
        }
    }

    /// Re-encode the shown value into the cell flags.
    ///
    /// Digits above 9 are rejected and the prior state is left unchanged.
    pub fn set_value(&mut self, digit: u8) -> Result<(), DigitOutOfRange> {
        if digit > Self::MAX_DIGIT {
            return Err(DigitOutOfRange(digit));
        }
        let pattern = &DIGITS[digit as usize];
        for (cell, &on) in self.cells.iter_mut().zip(pattern.iter()) {
            cell.on = on != 0;
        }
        self.value = digit;
        Ok(())
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Pixel positions of the lit cells, in array order. Restartable.
    pub fn active_cells(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.cells
            .iter()
            .filter(|cell| cell.on)
            .map(|cell| (cell.pos_x, cell.pos_y))
    }
}
