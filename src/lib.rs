//! # pricebook
//!
//! Extraction of package/line-item pricing from XLSX price lists into
//! normalized JSON.
//!
//! A price list is a single-sheet workbook laid out as named package
//! blocks: a header row whose column A names the package, followed by
//! item rows (part number, description, unit price, quantity) and an
//! optional trailing summary row marked `Total:` in the quantity
//! column. This crate walks the rows once and groups the well-formed
//! items under the most recently seen package header.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pricebook::{extract_catalog, render, JsonFormat};
//!
//! let packages = ["Forecourt Island Equipment", "Tank Equipment"];
//! let catalog = extract_catalog("pricelist.xlsx", &packages)?;
//!
//! println!("{}", render::to_json(&catalog, JsonFormat::Pretty)?);
//! # Ok::<(), pricebook::Error>(())
//! ```
//!
//! ## Lower-level access
//!
//! ```no_run
//! use pricebook::xlsx::SheetReader;
//!
//! let reader = SheetReader::open("pricelist.xlsx")?;
//! let rows = reader.first_sheet_rows()?;
//! println!("{} rows", rows.len());
//! # Ok::<(), pricebook::Error>(())
//! ```
//!
//! Malformed rows never fail an extraction: a row whose cost or
//! quantity does not read as a number is silently dropped and the scan
//! continues. Only workbook-level problems (missing file, corrupt
//! archive, no worksheet) surface as [`Error`].

pub mod container;
pub mod error;
pub mod model;
pub mod render;
pub mod scan;
pub mod xlsx;

// Re-exports
pub use container::XlsxContainer;
pub use error::{Error, Result};
pub use model::{Catalog, LineItem, Package};
pub use render::{to_json, JsonFormat};
pub use scan::RowScanner;
pub use xlsx::{CellValue, SheetReader, SheetRow};

use std::path::Path;

/// Extract a catalog from a price-list workbook on disk.
///
/// `packages` declares the recognized package names; the returned
/// catalog contains exactly these keys, in this order, whether or not
/// the sheet assigned items to them.
///
/// # Example
///
/// ```no_run
/// use pricebook::extract_catalog;
///
/// let catalog = extract_catalog("pricelist.xlsx", &["Tank Equipment"])?;
/// println!("{} items", catalog.item_count());
/// # Ok::<(), pricebook::Error>(())
/// ```
pub fn extract_catalog(
    path: impl AsRef<Path>,
    packages: &[impl AsRef<str>],
) -> Result<Catalog> {
    let reader = SheetReader::open(path)?;
    let rows = reader.first_sheet_rows()?;
    Ok(scan::scan_rows(packages, &rows))
}

/// Extract a catalog from workbook bytes already in memory.
///
/// # Example
///
/// ```no_run
/// use pricebook::extract_catalog_from_bytes;
///
/// let data = std::fs::read("pricelist.xlsx")?;
/// let catalog = extract_catalog_from_bytes(&data, &["Tank Equipment"])?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn extract_catalog_from_bytes(
    data: &[u8],
    packages: &[impl AsRef<str>],
) -> Result<Catalog> {
    let reader = SheetReader::from_bytes(data.to_vec())?;
    let rows = reader.first_sheet_rows()?;
    Ok(scan::scan_rows(packages, &rows))
}
