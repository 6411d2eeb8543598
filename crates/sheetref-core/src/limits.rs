//! Sheet boundary limits

use crate::error::{Error, Result};

/// Smallest legal row number
pub const MIN_ROW: u32 = 1;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROW: u32 = 1_048_576;

/// Smallest legal column number
pub const MIN_COL: u16 = 1;

/// Maximum number of columns in a worksheet (Excel limit, `XFD`)
pub const MAX_COL: u16 = 16_384;

/// Largest column number expressible with three letters (`ZZZ`)
pub(crate) const MAX_THREE_LETTER_COL: u16 = 18_278;

/// The legal coordinate space of a sheet, all bounds inclusive and 1-based
///
/// Parsing and the bound-sensitive [`Area`](crate::Area) derivations accept
/// explicit limits through their `*_in` variants; everything else uses
/// [`SheetLimits::EXCEL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetLimits {
    pub min_row: u32,
    pub max_row: u32,
    pub min_col: u16,
    pub max_col: u16,
}

impl SheetLimits {
    /// OOXML limits: `A1:XFD1048576`
    pub const EXCEL: SheetLimits = SheetLimits {
        min_row: MIN_ROW,
        max_row: MAX_ROW,
        min_col: MIN_COL,
        max_col: MAX_COL,
    };

    /// Create custom limits
    ///
    /// Both axes must satisfy `1 <= min <= max`, and `max_col` must be
    /// representable in at most three column letters.
    pub fn new(min_row: u32, max_row: u32, min_col: u16, max_col: u16) -> Result<Self> {
        if min_row == 0 || min_row > max_row {
            return Err(Error::InvalidLimits(format!(
                "row range {}..={} is not 1-based and ordered",
                min_row, max_row
            )));
        }
        if min_col == 0 || min_col > max_col {
            return Err(Error::InvalidLimits(format!(
                "column range {}..={} is not 1-based and ordered",
                min_col, max_col
            )));
        }
        if max_col > MAX_THREE_LETTER_COL {
            return Err(Error::InvalidLimits(format!(
                "max column {} needs more than three letters",
                max_col
            )));
        }
        Ok(Self {
            min_row,
            max_row,
            min_col,
            max_col,
        })
    }

    /// Limits starting at `A1` with the given maximum row and column
    pub fn with_max(max_row: u32, max_col: u16) -> Result<Self> {
        Self::new(MIN_ROW, max_row, MIN_COL, max_col)
    }

    #[inline]
    pub fn contains_row(&self, row: u32) -> bool {
        row >= self.min_row && row <= self.max_row
    }

    #[inline]
    pub fn contains_col(&self, col: u16) -> bool {
        col >= self.min_col && col <= self.max_col
    }
}

impl Default for SheetLimits {
    fn default() -> Self {
        Self::EXCEL
    }
}
