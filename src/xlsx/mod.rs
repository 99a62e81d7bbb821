//! XLSX (Excel) workbook reading.
//!
//! This module provides just enough Office Open XML parsing to read the
//! cell grid of a workbook's first worksheet: the ZIP container is
//! handled by [`crate::container`], the shared-string table and sheet
//! XML are parsed here.
//!
//! # Example
//!
//! ```no_run
//! use pricebook::xlsx::SheetReader;
//!
//! let reader = SheetReader::open("pricelist.xlsx")?;
//! for row in reader.first_sheet_rows()? {
//!     println!("row {}: {} cells", row.index, row.cells.len());
//! }
//! # Ok::<(), pricebook::Error>(())
//! ```

mod cell;
mod reader;
mod shared_strings;

pub use cell::CellValue;
pub use reader::{SheetReader, SheetRow};
pub use shared_strings::SharedStrings;
