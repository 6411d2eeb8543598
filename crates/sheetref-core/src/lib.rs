//! # sheetref-core
//!
//! Cell and range references in the OOXML `ST_Ref` grammar, and the sheet
//! geometry built on them.
//!
//! This crate provides:
//! - [`Coordinate`] - a 1-based (row, column) cell position (`C7`)
//! - [`Area`] - a rectangle of cells (`A1:B2`) with containment, adjacency
//!   and slicing operations
//! - [`SheetLimits`] - the legal row/column space, Excel's by default
//!
//! Parsing and formatting never allocate: text is scanned byte by byte and
//! written into caller-supplied buffers sized by [`Coordinate::MAX_LEN`] and
//! [`Area::MAX_LEN`].
//!
//! ## Example
//!
//! ```rust
//! use sheetref_core::{Area, Coordinate};
//!
//! let source = Area::parse("A1:C5").unwrap();
//! assert!(source.contains(Coordinate::new(2, 2)));
//!
//! // Room for a three-row total block under the data
//! let totals = source.below_range_rows(3).unwrap();
//! assert_eq!(totals.to_string(), "A6:C8");
//!
//! let mut buf = [0u8; Area::MAX_LEN];
//! let len = totals.write_a1(&mut buf);
//! assert_eq!(&buf[..len], b"A6:C8");
//! ```

pub mod area;
pub mod coordinate;
pub mod error;
pub mod limits;

pub use area::{Area, Cells};
pub use coordinate::{column_letters, column_name, CellAddress, Coordinate};
pub use error::{Error, FormatError, Result};
pub use limits::{SheetLimits, MAX_COL, MAX_ROW, MIN_COL, MIN_ROW};
