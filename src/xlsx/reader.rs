//! Worksheet grid reading.
//!
//! Resolves the first worksheet of a workbook and materializes its rows
//! as positioned [`CellValue`]s for the scan.

use crate::container::XlsxContainer;
use crate::error::{Error, Result};
use quick_xml::events::Event;
use std::collections::HashMap;
use std::path::Path;

use super::cell::CellValue;
use super::shared_strings::SharedStrings;

const EMPTY_CELL: CellValue = CellValue::Empty;

/// A single sheet row.
#[derive(Debug, Clone, Default)]
pub struct SheetRow {
    /// 1-based sheet row number, from the row's `r` attribute.
    pub index: u32,
    /// Cells positioned by 0-based column, gaps padded with `Empty`.
    pub cells: Vec<CellValue>,
}

impl SheetRow {
    /// Cell at a 0-based column position; absent cells read as empty.
    pub fn cell(&self, col: usize) -> &CellValue {
        self.cells.get(col).unwrap_or(&EMPTY_CELL)
    }
}

/// Sheet info from workbook.xml.
#[derive(Debug, Clone)]
struct SheetInfo {
    name: String,
    rel_id: String,
}

/// Reader for the worksheets of an XLSX workbook.
pub struct SheetReader {
    container: XlsxContainer,
    shared_strings: SharedStrings,
    sheets: Vec<SheetInfo>,
    relationships: HashMap<String, String>,
}

impl SheetReader {
    /// Open an XLSX file for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let container = XlsxContainer::open(path)?;
        Self::from_container(container)
    }

    /// Create a reader from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let container = XlsxContainer::from_bytes(data)?;
        Self::from_container(container)
    }

    fn from_container(container: XlsxContainer) -> Result<Self> {
        // Shared strings are optional; workbooks without string cells omit them.
        let shared_strings = if let Ok(xml) = container.read_xml("xl/sharedStrings.xml") {
            SharedStrings::parse(&xml)?
        } else {
            SharedStrings::default()
        };

        let relationships = Self::parse_workbook_rels(&container)?;
        let sheets = Self::parse_workbook(&container)?;

        Ok(Self {
            container,
            shared_strings,
            sheets,
            relationships,
        })
    }

    /// Parse workbook relationships (`rId` → part path).
    fn parse_workbook_rels(container: &XlsxContainer) -> Result<HashMap<String, String>> {
        let mut rels = HashMap::new();

        if let Ok(xml) = container.read_xml("xl/_rels/workbook.xml.rels") {
            let mut reader = quick_xml::Reader::from_str(&xml);
            reader.config_mut().trim_text(true);

            let mut buf = Vec::new();

            loop {
                match reader.read_event_into(&mut buf) {
                    Ok(Event::Empty(e)) | Ok(Event::Start(e)) => {
                        if e.name().as_ref() == b"Relationship" {
                            let mut id = String::new();
                            let mut target = String::new();

                            for attr in e.attributes().flatten() {
                                match attr.key.as_ref() {
                                    b"Id" => {
                                        id = String::from_utf8_lossy(&attr.value).to_string();
                                    }
                                    b"Target" => {
                                        target = String::from_utf8_lossy(&attr.value).to_string();
                                    }
                                    _ => {}
                                }
                            }

                            if !id.is_empty() && !target.is_empty() {
                                rels.insert(id, target);
                            }
                        }
                    }
                    Ok(Event::Eof) => break,
                    Err(e) => return Err(Error::XmlParse(e.to_string())),
                    _ => {}
                }
                buf.clear();
            }
        }

        Ok(rels)
    }

    /// Parse workbook.xml for the sheet list, in workbook order.
    fn parse_workbook(container: &XlsxContainer) -> Result<Vec<SheetInfo>> {
        let mut sheets = Vec::new();

        let xml = container.read_xml("xl/workbook.xml")?;
        let mut reader = quick_xml::Reader::from_str(&xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e)) => {
                    if e.name().as_ref() == b"sheet" {
                        let mut name = String::new();
                        let mut rel_id = String::new();

                        for attr in e.attributes().flatten() {
                            match attr.key.as_ref() {
                                b"name" => {
                                    name = String::from_utf8_lossy(&attr.value).to_string();
                                }
                                b"r:id" => {
                                    rel_id = String::from_utf8_lossy(&attr.value).to_string();
                                }
                                _ => {}
                            }
                        }

                        if !name.is_empty() {
                            sheets.push(SheetInfo { name, rel_id });
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(Error::XmlParse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok(sheets)
    }

    /// Number of sheets in the workbook.
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Sheet names, in workbook order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    /// Read the rows of the first worksheet, in sheet order.
    ///
    /// Only the first sheet is ever read; price lists are single-sheet
    /// documents and any other sheets are ignored.
    pub fn first_sheet_rows(&self) -> Result<Vec<SheetRow>> {
        let sheet = self
            .sheets
            .first()
            .ok_or_else(|| Error::MissingComponent("workbook has no sheets".to_string()))?;

        let target = self
            .relationships
            .get(&sheet.rel_id)
            .ok_or_else(|| Error::MissingComponent(format!("sheet target for {}", sheet.rel_id)))?;

        let sheet_path = if let Some(stripped) = target.strip_prefix('/') {
            stripped.to_string()
        } else {
            format!("xl/{}", target)
        };

        let xml = self.container.read_xml(&sheet_path)?;
        self.parse_sheet(&xml)
    }

    /// Parse a worksheet XML document into rows.
    fn parse_sheet(&self, xml: &str) -> Result<Vec<SheetRow>> {
        let mut rows = Vec::new();
        let mut reader = quick_xml::Reader::from_str(xml);

        let mut buf = Vec::new();
        let mut current_row: Option<SheetRow> = None;
        let mut next_row_index: u32 = 1;
        let mut next_col: usize = 0;

        let mut in_cell = false;
        let mut in_value = false;
        let mut cell_col: usize = 0;
        let mut cell_type: Option<String> = None;
        let mut cell_value = String::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => match e.name().as_ref() {
                    b"row" => {
                        let index = row_index(e).unwrap_or(next_row_index);
                        next_row_index = index + 1;
                        next_col = 0;
                        current_row = Some(SheetRow {
                            index,
                            cells: Vec::new(),
                        });
                    }
                    b"c" if current_row.is_some() => {
                        in_cell = true;
                        cell_type = None;
                        cell_value.clear();
                        cell_col = next_col;

                        for attr in e.attributes().flatten() {
                            match attr.key.as_ref() {
                                b"r" => {
                                    let cell_ref = String::from_utf8_lossy(&attr.value);
                                    if let Some(col) = column_of_ref(&cell_ref) {
                                        cell_col = col;
                                    }
                                }
                                b"t" => {
                                    cell_type =
                                        Some(String::from_utf8_lossy(&attr.value).to_string());
                                }
                                _ => {}
                            }
                        }
                    }
                    // <v> holds the stored value, <t> the inline string text.
                    b"v" | b"t" if in_cell => {
                        in_value = true;
                    }
                    _ => {}
                },
                Ok(Event::Empty(ref e)) => {
                    // A self-closing <c/> carries no value: empty cell.
                    if e.name().as_ref() == b"c" {
                        if let Some(ref mut row) = current_row {
                            let mut col = next_col;
                            for attr in e.attributes().flatten() {
                                if attr.key.as_ref() == b"r" {
                                    let cell_ref = String::from_utf8_lossy(&attr.value);
                                    if let Some(c) = column_of_ref(&cell_ref) {
                                        col = c;
                                    }
                                }
                            }
                            place_cell(row, col, CellValue::Empty);
                            next_col = col + 1;
                        }
                    }
                }
                Ok(Event::Text(ref e)) => {
                    if in_value {
                        let text = e.unescape().unwrap_or_default();
                        cell_value.push_str(&text);
                    }
                }
                Ok(Event::End(ref e)) => match e.name().as_ref() {
                    b"row" => {
                        if let Some(row) = current_row.take() {
                            rows.push(row);
                        }
                    }
                    b"c" => {
                        let value = self.resolve_cell_value(&cell_value, cell_type.as_deref());
                        if let Some(ref mut row) = current_row {
                            place_cell(row, cell_col, value);
                        }
                        next_col = cell_col + 1;
                        in_cell = false;
                    }
                    b"v" | b"t" => {
                        in_value = false;
                    }
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(Error::XmlParse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok(rows)
    }

    /// Resolve a stored cell value based on its `t` type attribute.
    fn resolve_cell_value(&self, value: &str, cell_type: Option<&str>) -> CellValue {
        match cell_type {
            // Shared string index
            Some("s") => {
                if let Ok(idx) = value.trim().parse::<usize>() {
                    match self.shared_strings.get(idx) {
                        Some(s) => CellValue::Text(s.to_string()),
                        None => CellValue::Text(value.to_string()),
                    }
                } else {
                    CellValue::Text(value.to_string())
                }
            }
            Some("b") => CellValue::Bool(value == "1"),
            Some("e") => CellValue::Error(value.to_string()),
            Some("str") | Some("inlineStr") => CellValue::Text(value.to_string()),
            // Number or general: degrade to text when the value does not parse.
            _ => {
                if value.is_empty() {
                    CellValue::Empty
                } else if let Ok(n) = value.trim().parse::<f64>() {
                    CellValue::Number(n)
                } else {
                    CellValue::Text(value.to_string())
                }
            }
        }
    }
}

/// Place a cell at its column position, padding gaps with empty cells.
fn place_cell(row: &mut SheetRow, col: usize, value: CellValue) {
    while row.cells.len() < col {
        row.cells.push(CellValue::Empty);
    }
    if row.cells.len() == col {
        row.cells.push(value);
    } else {
        row.cells[col] = value;
    }
}

/// Row index from a `<row r="..">` attribute.
fn row_index(e: &quick_xml::events::BytesStart<'_>) -> Option<u32> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"r" {
            return String::from_utf8_lossy(&attr.value).parse::<u32>().ok();
        }
    }
    None
}

/// 0-based column of an `A1`-style cell reference.
fn column_of_ref(cell_ref: &str) -> Option<usize> {
    let letters: String = cell_ref
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();
    if letters.is_empty() {
        return None;
    }

    let mut col: usize = 0;
    for c in letters.chars() {
        col = col * 26 + (c.to_ascii_uppercase() as usize - 'A' as usize + 1);
    }
    Some(col - 1)
}
