use crate::error::MoveError;

use super::board::COLS;

/// Where the board is drawn along the horizontal axis, used to turn a pointer
/// position into a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    pub origin_x: u16,
    pub slot_width: u16,
}

impl BoardGeometry {
    pub fn new(origin_x: u16, slot_width: u16) -> Self {
        BoardGeometry {
            origin_x,
            slot_width,
        }
    }

    /// Total drawn width of the slot area
    pub fn width(&self) -> u16 {
        self.slot_width.saturating_mul(COLS as u16)
    }

    /// 0-based column under the pointer. The right edge is exclusive.
    pub fn column_at(&self, x: u16) -> Result<usize, MoveError> {
        if self.slot_width == 0 {
            return Err(MoveError::OutOfBoardBounds);
        }
        let offset = x
            .checked_sub(self.origin_x)
            .ok_or(MoveError::OutOfBoardBounds)?;
        if offset >= self.width() {
            return Err(MoveError::OutOfBoardBounds);
        }
        Ok(usize::from(offset / self.slot_width))
    }
}
