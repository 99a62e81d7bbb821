//! Utility to explore workbook structure for development
use pricebook::container::XlsxContainer;

fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("usage: explore <pricelist.xlsx>");
    let container = XlsxContainer::open(&path).expect("Failed to open file");

    println!("=== Files in archive ===");
    for file in container.list_files() {
        println!("  {}", file);
    }

    println!("\n=== xl/workbook.xml ===");
    if let Ok(content) = container.read_xml("xl/workbook.xml") {
        println!("{}", &content[..content.len().min(2000)]);
    }

    println!("\n=== xl/_rels/workbook.xml.rels ===");
    if let Ok(content) = container.read_xml("xl/_rels/workbook.xml.rels") {
        println!("{}", content);
    }

    println!("\n=== xl/sharedStrings.xml (first 2000 chars) ===");
    if let Ok(content) = container.read_xml("xl/sharedStrings.xml") {
        println!("{}", &content[..content.len().min(2000)]);
    }

    println!("\n=== xl/worksheets/sheet1.xml (first 3000 chars) ===");
    if let Ok(content) = container.read_xml("xl/worksheets/sheet1.xml") {
        println!("{}", &content[..content.len().min(3000)]);
    }
}
