//! Placement scenarios driven through the public API only.

use pretty_assertions::assert_eq;
use sheetref_core::{Area, CellAddress, Coordinate, Error, FormatError, SheetLimits, MAX_ROW};

/// A cell type owned by some other layer.
struct AnchorCell {
    row: u32,
    col: u16,
}

impl CellAddress for AnchorCell {
    fn row(&self) -> u32 {
        self.row
    }

    fn column(&self) -> u16 {
        self.col
    }
}

/// Lay out a `height` x `width` report with its top-left at `anchor`.
fn report_area(anchor: &AnchorCell, height: u32, width: u16) -> Area {
    let end = AnchorCell {
        row: anchor.row + height - 1,
        col: anchor.col + width - 1,
    };
    Area::from_addresses(&end, anchor)
}

#[test]
fn report_placed_beside_source_data() {
    let source = Area::parse("A1:D20").unwrap();
    let free = source.right_range().unwrap();
    assert_eq!(free.first(), Coordinate::new(1, 5));

    let anchor = AnchorCell {
        row: free.first().row,
        col: free.first().column + 1,
    };
    let report = report_area(&anchor, 6, 3);
    assert_eq!(report.to_string(), "F1:H6");
    assert_eq!(free.intersect(&report), Some(report));
    assert!(!source.overlaps(&report));
}

#[test]
fn header_and_body_split() {
    let report = Area::parse("F1:H6").unwrap();
    let body = report.slice_from_bottom(report.height() - 1).unwrap();
    assert_eq!(body.to_string(), "F2:H6");

    let values = report.slice_from_right(2).unwrap();
    assert_eq!(values.to_string(), "G1:H6");
    assert!(values.contains(Coordinate::new(6, 8)));
    assert!(!values.contains(Coordinate::new(6, 6)));
}

#[test]
fn growing_a_table_downwards_stops_at_sheet_end() {
    let table = Area::parse("B1048570:C1048575").unwrap();
    let grown = table.below_range_rows(10).unwrap();
    assert_eq!(grown.to_string(), "B1048576:C1048576");
    assert_eq!(grown.last().row, MAX_ROW);

    let err = grown.below_range_rows(1).unwrap_err();
    assert!(matches!(err, Error::InvalidOperation { .. }));
}

#[test]
fn references_from_a_file_are_validated_strictly() {
    assert!(Area::parse("A1:B2").is_ok());
    assert_eq!(
        Area::parse("B2:A1").unwrap_err().as_format(),
        Some(FormatError::Unordered)
    );
    assert!(Area::parse("Sheet1!A1:B2").is_err());
    assert!(Area::parse("$A$1:$B$2").is_err());
}

#[test]
fn legacy_sheet_limits() {
    let xls = SheetLimits::with_max(65_536, 256).unwrap();
    let whole = Area::full_sheet_in(&xls);
    assert_eq!(whole.to_string(), "A1:IV65536");

    let tail = Area::parse_in("A65530:IV65536", &xls).unwrap();
    assert!(tail.below_range_in(&xls).is_err());
    assert!(tail.right_range_in(&xls).is_err());
    // The same area still has room under the Excel limits
    assert_eq!(tail.below_range_rows(1).unwrap().to_string(), "A65537:IV65537");
}

#[test]
fn display_and_buffer_formatting_agree() {
    for text in ["A1", "Z26", "AA27:AB28", "A1:XFD1048576"] {
        let area: Area = text.parse().unwrap();
        let mut buf = [0u8; Area::MAX_LEN];
        let len = area.write_a1(&mut buf);
        assert_eq!(std::str::from_utf8(&buf[..len]).unwrap(), area.to_string());
        assert_eq!(area.to_string(), text);
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_a1_text() {
    let area = Area::parse("B2:D4").unwrap();
    let json = serde_json::to_string(&area).unwrap();
    assert_eq!(json, "\"B2:D4\"");
    assert_eq!(serde_json::from_str::<Area>(&json).unwrap(), area);
    assert!(serde_json::from_str::<Area>("\"D4:B2\"").is_err());

    let cell: Coordinate = serde_json::from_str(r#"{"row":3,"column":2}"#).unwrap();
    assert_eq!(cell, Coordinate::new(3, 2));
}
