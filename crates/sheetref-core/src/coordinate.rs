//! Single-cell coordinates in `ST_Ref` notation

use crate::error::{Error, FormatError, Result};
use crate::limits::SheetLimits;
use std::fmt;
use std::str::FromStr;

/// Most letters any `u16` column renders to (`CRXO` = 65535)
const MAX_COLUMN_LETTERS: usize = 4;

/// Most decimal digits any `u32` row renders to
const MAX_ROW_DIGITS: usize = 10;

/// Anything that can report a 1-based row and column
///
/// This is the seam through which cell types owned by other layers
/// (worksheet cells, pivot anchors, formula targets) enter this crate.
pub trait CellAddress {
    /// 1-based row number
    fn row(&self) -> u32;
    /// 1-based column number
    fn column(&self) -> u16;
}

/// A 1-based (row, column) position, e.g. `C7`
///
/// Ordering is by row, then column. [`Coordinate::new`] does not validate;
/// only [`Coordinate::parse`] checks values against sheet limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Row number (1 = first row)
    pub row: u32,
    /// Column number (1 = `A`, 26 = `Z`, 27 = `AA`)
    pub column: u16,
}

impl Coordinate {
    /// Buffer size that fits the A1 text of any coordinate
    pub const MAX_LEN: usize = MAX_COLUMN_LETTERS + MAX_ROW_DIGITS;

    /// Create a coordinate without checking it against sheet limits
    #[inline]
    pub const fn new(row: u32, column: u16) -> Self {
        Self { row, column }
    }

    /// Project any [`CellAddress`] into a coordinate
    #[inline]
    pub fn from_address<A: CellAddress + ?Sized>(address: &A) -> Self {
        Self::new(address.row(), address.column())
    }

    /// Parse a cell reference against the Excel limits
    ///
    /// Only bare uppercase references are accepted: no `$` markers, sheet
    /// prefixes, whitespace or lowercase letters.
    ///
    /// # Examples
    /// ```
    /// use sheetref_core::Coordinate;
    ///
    /// let c = Coordinate::parse("AB27").unwrap();
    /// assert_eq!(c.row, 27);
    /// assert_eq!(c.column, 28);
    ///
    /// assert!(Coordinate::parse("$A$1").is_err());
    /// assert!(Coordinate::parse("a1").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        Self::parse_in(s, &SheetLimits::EXCEL)
    }

    /// Parse a cell reference against explicit sheet limits
    pub fn parse_in(s: &str, limits: &SheetLimits) -> Result<Self> {
        scan(s.as_bytes(), limits).map_err(|e| {
            tracing::trace!(input = s, error = %e, "rejected cell reference");
            Error::Format(e)
        })
    }

    /// Whether both components lie inside `limits`
    pub fn is_within(&self, limits: &SheetLimits) -> bool {
        limits.contains_row(self.row) && limits.contains_col(self.column)
    }

    /// Number of bytes [`Coordinate::write_a1`] will produce
    pub fn a1_len(&self) -> usize {
        letter_count(self.column) + digit_count(self.row)
    }

    /// Write the A1 text into `buf`, returning the number of bytes written
    ///
    /// # Panics
    ///
    /// Panics if `buf` is shorter than [`Coordinate::a1_len`]. A buffer of
    /// [`Coordinate::MAX_LEN`] bytes always suffices.
    pub fn write_a1(&self, buf: &mut [u8]) -> usize {
        let letters = column_letters(self.column, buf);
        letters + row_digits(self.row, &mut buf[letters..])
    }

    /// Format as an owned A1-style string
    pub fn to_a1_string(&self) -> String {
        self.to_string()
    }
}

impl CellAddress for Coordinate {
    fn row(&self) -> u32 {
        self.row
    }

    fn column(&self) -> u16 {
        self.column
    }
}

impl CellAddress for (u32, u16) {
    fn row(&self) -> u32 {
        self.0
    }

    fn column(&self) -> u16 {
        self.1
    }
}

impl<A: CellAddress + ?Sized> CellAddress for &A {
    fn row(&self) -> u32 {
        (**self).row()
    }

    fn column(&self) -> u16 {
        (**self).column()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; Self::MAX_LEN];
        let len = self.write_a1(&mut buf);
        f.pad(std::str::from_utf8(&buf[..len]).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<(u32, u16)> for Coordinate {
    fn from((row, column): (u32, u16)) -> Self {
        Self::new(row, column)
    }
}

pub(crate) fn scan(bytes: &[u8], limits: &SheetLimits) -> std::result::Result<Coordinate, FormatError> {
    if bytes.is_empty() {
        return Err(FormatError::Empty);
    }

    let column_overflow = FormatError::ColumnOutOfBounds {
        column: u32::MAX,
        min: limits.min_col,
        max: limits.max_col,
    };
    let row_overflow = FormatError::RowOutOfBounds {
        row: u32::MAX,
        min: limits.min_row,
        max: limits.max_row,
    };

    let mut pos = 0;
    let mut column: u32 = 0;
    while let Some(&b) = bytes.get(pos).filter(|b| b.is_ascii_uppercase()) {
        column = column
            .checked_mul(26)
            .and_then(|c| c.checked_add(u32::from(b - b'A') + 1))
            .ok_or(column_overflow)?;
        pos += 1;
    }
    if pos == 0 {
        return Err(if bytes[0].is_ascii_digit() {
            FormatError::MissingColumn
        } else {
            FormatError::UnexpectedCharacter { position: 0 }
        });
    }

    let row_start = pos;
    let mut row: u32 = 0;
    while let Some(&b) = bytes.get(pos).filter(|b| b.is_ascii_digit()) {
        row = row
            .checked_mul(10)
            .and_then(|r| r.checked_add(u32::from(b - b'0')))
            .ok_or(row_overflow)?;
        pos += 1;
    }
    if pos == row_start {
        return Err(if pos == bytes.len() {
            FormatError::MissingRow
        } else {
            FormatError::UnexpectedCharacter { position: pos }
        });
    }
    if pos != bytes.len() {
        return Err(FormatError::UnexpectedCharacter { position: pos });
    }

    let column = match u16::try_from(column) {
        Ok(c) if limits.contains_col(c) => c,
        _ => {
            return Err(FormatError::ColumnOutOfBounds {
                column,
                min: limits.min_col,
                max: limits.max_col,
            })
        }
    };
    if !limits.contains_row(row) {
        return Err(FormatError::RowOutOfBounds {
            row,
            min: limits.min_row,
            max: limits.max_row,
        });
    }

    Ok(Coordinate { row, column })
}

/// Write the letters of a 1-based column number (1 = `A`, 27 = `AA`)
///
/// Column 0 has no letters and writes nothing. Returns the number of bytes
/// written; `buf` must hold at least four bytes for arbitrary input.
pub fn column_letters(column: u16, buf: &mut [u8]) -> usize {
    let len = letter_count(column);
    let mut n = u32::from(column);
    for slot in buf[..len].iter_mut().rev() {
        n -= 1;
        *slot = b'A' + (n % 26) as u8;
        n /= 26;
    }
    len
}

/// Column letters as an owned string, for diagnostics
pub fn column_name(column: u16) -> String {
    let mut buf = [0u8; MAX_COLUMN_LETTERS];
    let len = column_letters(column, &mut buf);
    buf[..len].iter().map(|&b| char::from(b)).collect()
}

fn row_digits(row: u32, buf: &mut [u8]) -> usize {
    let len = digit_count(row);
    let mut n = row;
    for slot in buf[..len].iter_mut().rev() {
        *slot = b'0' + (n % 10) as u8;
        n /= 10;
    }
    len
}

fn letter_count(column: u16) -> usize {
    let mut n = u32::from(column);
    let mut len = 0;
    while n > 0 {
        n = (n - 1) / 26;
        len += 1;
    }
    len
}

fn digit_count(row: u32) -> usize {
    let mut n = row / 10;
    let mut len = 1;
    while n > 0 {
        n /= 10;
        len += 1;
    }
    len
}
