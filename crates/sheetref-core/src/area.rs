//! Rectangular areas (`A1:B2`) and the geometry derived from them

use crate::coordinate::{self, CellAddress, Coordinate};
use crate::error::{Error, FormatError, Result};
use crate::limits::{SheetLimits, MAX_COL, MAX_ROW, MIN_COL, MIN_ROW};
use std::fmt;
use std::str::FromStr;

/// An axis-aligned rectangle of cells, stored as its top-left and
/// bottom-right corners
///
/// Areas are values: every derivation (`below_range`, `slice_from_right`, ...)
/// returns a new `Area` and leaves the receiver untouched.
///
/// # Examples
/// ```
/// use sheetref_core::Area;
///
/// let area = Area::parse("A1:C5").unwrap();
/// assert_eq!(area.height(), 5);
/// assert_eq!(area.slice_from_bottom(2).unwrap().to_string(), "A4:C5");
/// assert_eq!(area.below_range_rows(3).unwrap().to_string(), "A6:C8");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Area {
    first: Coordinate,
    last: Coordinate,
}

impl Area {
    /// Buffer size that fits the A1 text of any area
    pub const MAX_LEN: usize = 2 * Coordinate::MAX_LEN + 1;

    /// The whole Excel sheet, `A1:XFD1048576`
    pub const FULL_SHEET: Area = Area {
        first: Coordinate::new(MIN_ROW, MIN_COL),
        last: Coordinate::new(MAX_ROW, MAX_COL),
    };

    /// Create an area from its top-left and bottom-right corners
    ///
    /// Fails if `first` lies below or to the right of `last`.
    pub fn new(first: Coordinate, last: Coordinate) -> Result<Self> {
        if first.row > last.row || first.column > last.column {
            return Err(Error::invalid_argument(
                "area",
                "corners",
                "first corner is not the top-left one",
            ));
        }
        Ok(Self { first, last })
    }

    /// Create an area from 1-based row/column numbers
    pub fn from_indices(first_row: u32, first_col: u16, last_row: u32, last_col: u16) -> Result<Self> {
        Self::new(
            Coordinate::new(first_row, first_col),
            Coordinate::new(last_row, last_col),
        )
    }

    /// Create a single-cell area
    pub const fn single(cell: Coordinate) -> Self {
        Self {
            first: cell,
            last: cell,
        }
    }

    /// The whole sheet described by `limits`
    pub const fn full_sheet_in(limits: &SheetLimits) -> Self {
        Self {
            first: Coordinate::new(limits.min_row, limits.min_col),
            last: Coordinate::new(limits.max_row, limits.max_col),
        }
    }

    /// Create an area from two addresses given in either order
    ///
    /// If `a` lies below or to the right of `b`, the two points are swapped
    /// as a whole. Rows and columns are not ordered independently, so for a
    /// crossed pair such as `E1` then `A3` the result keeps `A3` as its first
    /// corner and `E1` as its last; [`Area::is_normalized`] reports `false`
    /// for such areas. Use [`Area::bounding`] for a true bounding box.
    pub fn from_addresses<A, B>(a: &A, b: &B) -> Self
    where
        A: CellAddress + ?Sized,
        B: CellAddress + ?Sized,
    {
        let a = Coordinate::from_address(a);
        let b = Coordinate::from_address(b);
        if a.row > b.row || a.column > b.column {
            Self { first: b, last: a }
        } else {
            Self { first: a, last: b }
        }
    }

    /// The smallest area containing both addresses
    pub fn bounding<A, B>(a: &A, b: &B) -> Self
    where
        A: CellAddress + ?Sized,
        B: CellAddress + ?Sized,
    {
        Self {
            first: Coordinate::new(a.row().min(b.row()), a.column().min(b.column())),
            last: Coordinate::new(a.row().max(b.row()), a.column().max(b.column())),
        }
    }

    /// Parse `A1` or `A1:B2` against the Excel limits
    ///
    /// The first reference of a two-part range must already be the top-left
    /// corner: `B2:A1` is rejected, not reordered.
    pub fn parse(s: &str) -> Result<Self> {
        Self::parse_in(s, &SheetLimits::EXCEL)
    }

    /// Parse `A1` or `A1:B2` against explicit sheet limits
    pub fn parse_in(s: &str, limits: &SheetLimits) -> Result<Self> {
        scan(s, limits).map_err(|e| {
            tracing::trace!(input = s, error = %e, "rejected area reference");
            Error::Format(e)
        })
    }

    /// Top-left corner
    #[inline]
    pub const fn first(&self) -> Coordinate {
        self.first
    }

    /// Bottom-right corner
    #[inline]
    pub const fn last(&self) -> Coordinate {
        self.last
    }

    /// Whether `first` is above and left of (or equal to) `last`
    ///
    /// Only [`Area::from_addresses`] can produce an area for which this is
    /// `false`.
    #[inline]
    pub const fn is_normalized(&self) -> bool {
        self.first.row <= self.last.row && self.first.column <= self.last.column
    }

    /// Number of columns
    #[inline]
    pub const fn width(&self) -> u16 {
        self.last.column.abs_diff(self.first.column) + 1
    }

    /// Number of rows
    #[inline]
    pub const fn height(&self) -> u32 {
        self.last.row.abs_diff(self.first.row) + 1
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> u64 {
        self.height() as u64 * self.width() as u64
    }

    #[inline]
    pub fn is_single_cell(&self) -> bool {
        self.first == self.last
    }

    /// Check if a cell is within this area, edges included
    pub fn contains(&self, cell: Coordinate) -> bool {
        cell.row >= self.first.row
            && cell.row <= self.last.row
            && cell.column >= self.first.column
            && cell.column <= self.last.column
    }

    /// Check if this area shares at least one cell with another
    pub fn overlaps(&self, other: &Area) -> bool {
        self.first.row <= other.last.row
            && self.last.row >= other.first.row
            && self.first.column <= other.last.column
            && self.last.column >= other.first.column
    }

    /// The cells shared by two areas, if any
    pub fn intersect(&self, other: &Area) -> Option<Area> {
        if !self.is_normalized() || !other.is_normalized() || !self.overlaps(other) {
            return None;
        }
        Some(Area {
            first: Coordinate::new(
                self.first.row.max(other.first.row),
                self.first.column.max(other.first.column),
            ),
            last: Coordinate::new(
                self.last.row.min(other.last.row),
                self.last.column.min(other.last.column),
            ),
        })
    }

    /// The area from the row under this one down to the last sheet row,
    /// spanning the same columns
    pub fn below_range(&self) -> Result<Area> {
        self.below_range_in(&SheetLimits::EXCEL)
    }

    pub fn below_range_in(&self, limits: &SheetLimits) -> Result<Area> {
        let top = self.row_below(limits)?;
        Ok(self.rows_between(top, limits.max_row))
    }

    /// The `rows` rows directly under this area, clamped at the last sheet row
    pub fn below_range_rows(&self, rows: u32) -> Result<Area> {
        self.below_range_rows_in(rows, &SheetLimits::EXCEL)
    }

    pub fn below_range_rows_in(&self, rows: u32, limits: &SheetLimits) -> Result<Area> {
        if rows == 0 {
            return Err(Error::invalid_argument("below range", "rows", "must be at least 1"));
        }
        let top = self.row_below(limits)?;
        let bottom = top.saturating_add(rows - 1).min(limits.max_row);
        Ok(self.rows_between(top, bottom))
    }

    /// The area from the column after this one to the last sheet column,
    /// spanning the same rows
    pub fn right_range(&self) -> Result<Area> {
        self.right_range_in(&SheetLimits::EXCEL)
    }

    pub fn right_range_in(&self, limits: &SheetLimits) -> Result<Area> {
        let left = self.column_right(limits)?;
        Ok(self.columns_between(left, limits.max_col))
    }

    /// The `cols` columns directly right of this area, clamped at the last
    /// sheet column
    pub fn right_range_cols(&self, cols: u16) -> Result<Area> {
        self.right_range_cols_in(cols, &SheetLimits::EXCEL)
    }

    pub fn right_range_cols_in(&self, cols: u16, limits: &SheetLimits) -> Result<Area> {
        if cols == 0 {
            return Err(Error::invalid_argument("right range", "columns", "must be at least 1"));
        }
        let left = self.column_right(limits)?;
        let right = left.saturating_add(cols - 1).min(limits.max_col);
        Ok(self.columns_between(left, right))
    }

    /// The bottom `rows` rows of this area
    ///
    /// `rows` must be between 1 and [`Area::height`]. Fails for an area that
    /// is not normalized.
    pub fn slice_from_bottom(&self, rows: u32) -> Result<Area> {
        const OP: &str = "slice from bottom";
        if !self.is_normalized() {
            return Err(Error::invalid_operation(OP, "area corners are crossed"));
        }
        if rows == 0 {
            return Err(Error::invalid_argument(OP, "rows", "must be at least 1"));
        }
        match self.last.row.checked_sub(rows - 1) {
            Some(top) if rows <= self.height() => Ok(self.rows_between(top, self.last.row)),
            _ => Err(Error::invalid_argument(OP, "rows", "exceeds area height")),
        }
    }

    /// The rightmost `cols` columns of this area
    ///
    /// `cols` must be between 1 and [`Area::width`]. Fails for an area that
    /// is not normalized.
    pub fn slice_from_right(&self, cols: u16) -> Result<Area> {
        const OP: &str = "slice from right";
        if !self.is_normalized() {
            return Err(Error::invalid_operation(OP, "area corners are crossed"));
        }
        if cols == 0 {
            return Err(Error::invalid_argument(OP, "columns", "must be at least 1"));
        }
        match self.last.column.checked_sub(cols - 1) {
            Some(left) if cols <= self.width() => Ok(self.columns_between(left, self.last.column)),
            _ => Err(Error::invalid_argument(OP, "columns", "exceeds area width")),
        }
    }

    /// Iterate over all cells in row-major order
    ///
    /// Yields nothing for an area that is not normalized.
    pub fn cells(&self) -> Cells {
        let remaining = if self.is_normalized() {
            self.cell_count()
        } else {
            0
        };
        Cells {
            area: *self,
            next: self.first,
            remaining,
        }
    }

    /// Number of bytes [`Area::write_a1`] will produce
    pub fn a1_len(&self) -> usize {
        if self.is_single_cell() {
            self.first.a1_len()
        } else {
            self.first.a1_len() + 1 + self.last.a1_len()
        }
    }

    /// Write `A1` (single cell) or `A1:B2` into `buf`, returning the number
    /// of bytes written
    ///
    /// # Panics
    ///
    /// Panics if `buf` is shorter than [`Area::a1_len`]. A buffer of
    /// [`Area::MAX_LEN`] bytes always suffices.
    pub fn write_a1(&self, buf: &mut [u8]) -> usize {
        let mut len = self.first.write_a1(buf);
        if !self.is_single_cell() {
            buf[len] = b':';
            len += 1;
            len += self.last.write_a1(&mut buf[len..]);
        }
        len
    }

    /// Format as an owned A1-style string
    pub fn to_a1_string(&self) -> String {
        self.to_string()
    }

    fn row_below(&self, limits: &SheetLimits) -> Result<u32> {
        if self.last.row >= limits.max_row {
            return Err(Error::invalid_operation(
                "below range",
                "area already reaches the last sheet row",
            ));
        }
        Ok(self.last.row + 1)
    }

    fn column_right(&self, limits: &SheetLimits) -> Result<u16> {
        if self.last.column >= limits.max_col {
            return Err(Error::invalid_operation(
                "right range",
                "area already reaches the last sheet column",
            ));
        }
        Ok(self.last.column + 1)
    }

    fn rows_between(&self, top: u32, bottom: u32) -> Area {
        Area {
            first: Coordinate::new(top, self.first.column),
            last: Coordinate::new(bottom, self.last.column),
        }
    }

    fn columns_between(&self, left: u16, right: u16) -> Area {
        Area {
            first: Coordinate::new(self.first.row, left),
            last: Coordinate::new(self.last.row, right),
        }
    }
}

impl Default for Area {
    fn default() -> Self {
        Self::FULL_SHEET
    }
}

impl From<Coordinate> for Area {
    fn from(cell: Coordinate) -> Self {
        Self::single(cell)
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; Self::MAX_LEN];
        let len = self.write_a1(&mut buf);
        f.pad(std::str::from_utf8(&buf[..len]).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for Area {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Area {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Area {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Area::parse(&text).map_err(serde::de::Error::custom)
    }
}

fn scan(s: &str, limits: &SheetLimits) -> std::result::Result<Area, FormatError> {
    match s.split_once(':') {
        None => coordinate::scan(s.as_bytes(), limits).map(Area::single),
        Some((left, right)) => {
            let first = coordinate::scan(left.as_bytes(), limits)?;
            let last = coordinate::scan(right.as_bytes(), limits).map_err(|e| match e {
                FormatError::UnexpectedCharacter { position } => FormatError::UnexpectedCharacter {
                    position: position + left.len() + 1,
                },
                other => other,
            })?;
            if first.column > last.column || first.row > last.row {
                return Err(FormatError::Unordered);
            }
            Ok(Area { first, last })
        }
    }
}

/// Iterator over the cells of an [`Area`], row by row
#[derive(Debug, Clone)]
pub struct Cells {
    area: Area,
    next: Coordinate,
    remaining: u64,
}

impl Iterator for Cells {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let cell = self.next;
        if cell.column < self.area.last.column {
            self.next.column += 1;
        } else if self.remaining > 0 {
            self.next = Coordinate::new(cell.row + 1, self.area.first.column);
        }
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for Cells {}

impl std::iter::FusedIterator for Cells {}
