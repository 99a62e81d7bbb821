//! Row classification and package accumulation.
//!
//! The heart of the extraction: a single left-to-right pass over the
//! sheet rows with one piece of state, the package block the scan is
//! currently inside. Header rows open a block; well-formed item rows
//! accumulate into the open block; everything else is ignored.

use crate::model::{Catalog, LineItem};
use crate::xlsx::SheetRow;

/// Column positions in a price-list sheet (0-based, columns A–D).
const COL_PART_NUM: usize = 0;
const COL_DESC: usize = 1;
const COL_COST: usize = 2;
const COL_QTY: usize = 3;

/// Marker in the quantity column of a package's trailing summary row.
const SUMMARY_MARKER: &str = "Total:";

/// How a single row is handled by the scan.
#[derive(Debug)]
enum RowClass {
    /// Column A names a declared package: switch the accumulation context.
    Header(usize),
    /// Blank separator, summary row, or malformed data: ignore.
    Skip,
    /// Well-formed line item for the package at the given index.
    Item(usize, LineItem),
}

/// Stateful left-to-right row scanner.
///
/// Rows must be fed in sheet order: an item binds to the most recently
/// seen package header, so reordering rows changes the result. The
/// scanner owns its catalog; [`RowScanner::finish`] returns it.
#[derive(Debug)]
pub struct RowScanner {
    catalog: Catalog,
    current: Option<usize>,
}

impl RowScanner {
    /// Create a scanner accumulating into `catalog`.
    ///
    /// No package block is open until the first header row is seen;
    /// item rows before that point are dropped.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            current: None,
        }
    }

    /// Classification rules, in priority order; first match wins.
    fn classify(&self, row: &SheetRow) -> RowClass {
        let part_num = row.cell(COL_PART_NUM);
        let desc = row.cell(COL_DESC);
        let cost = row.cell(COL_COST);
        let qty = row.cell(COL_QTY);

        // 1. A non-empty column A that exactly names a declared package
        //    opens a new block. Header rows never emit an item.
        if !part_num.is_empty() {
            if let Some(index) = self.catalog.position(&part_num.to_display_string()) {
                return RowClass::Header(index);
            }
        }

        // 2. Blank separator rows and trailing summary rows. The marker
        //    is only ever checked against the quantity column.
        if part_num.is_empty() || desc.is_empty() || qty.to_display_string() == SUMMARY_MARKER {
            return RowClass::Skip;
        }

        // 3. Items accumulate only inside an open block. A cost or
        //    quantity that does not read as a number drops the whole row.
        if let Some(current) = self.current {
            if !cost.is_empty() && !qty.is_empty() {
                if let (Some(cost), Some(qty)) = (cost.to_f64(), qty.to_f64()) {
                    return RowClass::Item(
                        current,
                        LineItem {
                            part_num: part_num.to_display_string(),
                            desc: desc.to_display_string(),
                            cost,
                            qty,
                        },
                    );
                }
            }
        }

        RowClass::Skip
    }

    /// Feed one row, updating the catalog or the current-block pointer.
    pub fn feed(&mut self, row: &SheetRow) {
        match self.classify(row) {
            RowClass::Header(index) => self.current = Some(index),
            RowClass::Item(index, item) => self.catalog.push_item(index, item),
            RowClass::Skip => {}
        }
    }

    /// Consume the scanner and return the accumulated catalog.
    pub fn finish(self) -> Catalog {
        self.catalog
    }
}

/// Scan sheet rows into a catalog declared over `packages`.
///
/// Sheet row 1 is the column-header row and is skipped unconditionally;
/// extraction starts at row 2.
pub fn scan_rows(packages: &[impl AsRef<str>], rows: &[SheetRow]) -> Catalog {
    let mut scanner = RowScanner::new(Catalog::with_packages(packages));
    for row in rows {
        if row.index == 1 {
            continue;
        }
        scanner.feed(row);
    }
    scanner.finish()
}
