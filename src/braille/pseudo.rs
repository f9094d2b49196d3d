//! Pseudo-braille: cells drawn as a grid of `o` (raised) and `.` (flat) markers.
//!
//! ```text
//! o .  o .  o .  . o
//! o .  o o  . .  o .
//! . .  o .  . .  . .
//! ```
//!
//! Each cell is three characters wide, cells are separated by two spaces.
//! Six-dot blocks have three rows, eight-dot blocks add a fourth row for
//! dots 7 and 8.

use super::cell::Cell;
use super::error::BrailleError;

pub const RAISED: char = 'o';
pub const FLAT: char = '.';

/// Drawn in place of a unit that is not a braille cell.
pub const ERROR_GLYPH: [&str; 4] = ["INV", "ALI", "D!!", "CHR"];

const CELL_WIDTH: usize = 3;
const CELL_GAP: &str = "  ";
const STRIDE: usize = CELL_WIDTH + CELL_GAP.len();

/// Dot numbers shown on each row as (left column, right column).
const ROW_DOTS: [(u8, u8); 4] = [(1, 4), (2, 5), (3, 6), (7, 8)];

pub const fn row_count(eight_dot: bool) -> usize {
    if eight_dot {
        4
    } else {
        3
    }
}

fn marker(raised: bool) -> char {
    if raised {
        RAISED
    } else {
        FLAT
    }
}

/// Draw cells side by side. `None` draws the error glyph for that position.
///
/// Every row ends with a newline, including the last. With `eight_dot`
/// unset dots 7 and 8 are not drawn at all.
pub fn render<I>(cells: I, eight_dot: bool) -> String
where
    I: IntoIterator<Item = Option<Cell>>,
{
    let mut rows = vec![String::new(); row_count(eight_dot)];
    for (i, cell) in cells.into_iter().enumerate() {
        for (r, row) in rows.iter_mut().enumerate() {
            if i > 0 {
                row.push_str(CELL_GAP);
            }
            match cell {
                Some(cell) => {
                    let (left, right) = ROW_DOTS[r];
                    row.push(marker(cell.dot(left)));
                    row.push(' ');
                    row.push(marker(cell.dot(right)));
                }
                None => row.push_str(ERROR_GLYPH[r]),
            }
        }
    }

    let mut out = String::with_capacity(rows.iter().map(|r| r.len() + 1).sum());
    for row in rows {
        out.push_str(&row);
        out.push('\n');
    }
    out
}

fn read_marker(ch: char) -> Option<bool> {
    match ch {
        RAISED => Some(true),
        FLAT => Some(false),
        _ => None,
    }
}

/// Read a pseudo-braille block back into cells.
///
/// The outer error covers the block's shape (row count). Each inner result
/// is one cell column; a column whose markers are not `o`/`.` yields
/// [`BrailleError::InvalidPseudoCell`] carrying its text, rows concatenated.
pub fn parse(text: &str) -> Result<Vec<Result<Cell, BrailleError>>, BrailleError> {
    let mut rows: Vec<Vec<char>> = text
        .lines()
        .map(|line| line.trim_end().chars().collect())
        .collect();
    while rows.last().is_some_and(|row| row.is_empty()) {
        rows.pop();
    }
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    if !(3..=4).contains(&rows.len()) {
        return Err(BrailleError::MalformedGrid { rows: rows.len() });
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let columns = width.div_ceil(STRIDE);

    let cells = (0..columns)
        .map(|column| {
            let start = column * STRIDE;
            let mut cell = Cell::BLANK;
            let mut glyph = String::new();
            let mut valid = true;

            for (row, (left, right)) in rows.iter().zip(ROW_DOTS) {
                let slice: Vec<char> = (start..start + CELL_WIDTH)
                    .map(|i| row.get(i).copied().unwrap_or(' '))
                    .collect();
                glyph.extend(&slice);

                match (read_marker(slice[0]), read_marker(slice[2])) {
                    (Some(l), Some(r)) => {
                        if l {
                            cell = cell.with_dot(left);
                        }
                        if r {
                            cell = cell.with_dot(right);
                        }
                    }
                    _ => valid = false,
                }
            }

            if valid {
                Ok(cell)
            } else {
                Err(BrailleError::InvalidPseudoCell { column, glyph })
            }
        })
        .collect();
    Ok(cells)
}
