//! The braille cell as an 8-bit dot mask.
//!
//! Bit layout (dot number on the left, bit value on the right):
//! ```text
//! 1 = 0x01   4 = 0x08
//! 2 = 0x02   5 = 0x10
//! 3 = 0x04   6 = 0x20
//! 7 = 0x40   8 = 0x80
//! ```

/// Mask covering dots 7 and 8.
pub const DOTS_78: u8 = 0xC0;

/// One braille cell. Dot `n` (1..=8) is raised when bit `n - 1` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Cell(u8);

impl Cell {
    /// The blank cell (no dots raised).
    pub const BLANK: Cell = Cell(0);

    /// Cell with every dot raised.
    pub const FULL: Cell = Cell(0xFF);

    pub const fn from_mask(mask: u8) -> Self {
        Cell(mask)
    }

    pub const fn mask(self) -> u8 {
        self.0
    }

    /// Build a cell from dot numbers. Numbers outside 1..=8 are ignored.
    pub fn from_dots<I: IntoIterator<Item = u8>>(dots: I) -> Self {
        dots.into_iter()
            .fold(Cell::BLANK, |cell, dot| cell.with_dot(dot))
    }

    /// Whether dot `n` is raised. Always false for `n` outside 1..=8.
    pub const fn dot(self, n: u8) -> bool {
        match n {
            1..=8 => self.0 & (1 << (n - 1)) != 0,
            _ => false,
        }
    }

    /// Copy of this cell with dot `n` raised.
    #[must_use]
    pub const fn with_dot(self, n: u8) -> Self {
        match n {
            1..=8 => Cell(self.0 | (1 << (n - 1))),
            _ => self,
        }
    }

    /// Raised dot numbers in ascending order.
    pub fn raised_dots(self) -> impl Iterator<Item = u8> {
        (1..=8u8).filter(move |&n| self.dot(n))
    }

    pub const fn is_blank(self) -> bool {
        self.0 == 0
    }

    /// True when neither dot 7 nor dot 8 is raised.
    pub const fn is_six_dot(self) -> bool {
        self.0 & DOTS_78 == 0
    }

    /// Clear dots 7 and 8, leaving dots 1-6 untouched.
    #[must_use]
    pub const fn strip_dots78(self) -> Self {
        Cell(self.0 & !DOTS_78)
    }
}

impl From<u8> for Cell {
    fn from(mask: u8) -> Self {
        Cell(mask)
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.0
    }
}

/// True iff every cell is six-dot. An empty slice is six-dot.
pub fn is_six_dot(cells: &[Cell]) -> bool {
    cells.iter().all(|c| c.is_six_dot())
}

/// Clear dots 7 and 8 on every cell, preserving order.
pub fn strip_dots78(cells: &[Cell]) -> Vec<Cell> {
    cells.iter().map(|c| c.strip_dots78()).collect()
}
