//! Benchmarks for price-list extraction performance.
//!
//! Run with: cargo bench
//!
//! Builds synthetic workbooks of increasing row counts and measures the
//! full container + XML + scan path.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io::{Cursor, Write};

const PACKAGES: &[&str] = &[
    "Forecourt Island Equipment",
    "Forecourt Submerged Pump Package",
    "Tank Equipment",
];

/// Creates a synthetic price-list workbook with the given number of item
/// rows, spread across the three reference packages.
fn create_test_xlsx(item_count: usize) -> Vec<u8> {
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));

    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    // [Content_Types].xml
    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
</Types>"#,
    )
    .unwrap();

    // _rels/.rels
    zip.start_file("_rels/.rels", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#,
    )
    .unwrap();

    // xl/workbook.xml
    zip.start_file("xl/workbook.xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <sheets>
    <sheet name="Price List" sheetId="1" r:id="rId1"/>
  </sheets>
</workbook>"#,
    )
    .unwrap();

    // xl/_rels/workbook.xml.rels
    zip.start_file("xl/_rels/workbook.xml.rels", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
</Relationships>"#,
    )
    .unwrap();

    // Generate the sheet: column headers, then package blocks.
    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <sheetData>
    <row r="1"><c r="A1" t="inlineStr"><is><t>Part #</t></is></c><c r="B1" t="inlineStr"><is><t>Description</t></is></c><c r="C1" t="inlineStr"><is><t>List Price</t></is></c><c r="D1" t="inlineStr"><is><t>Qty</t></is></c></row>
"#,
    );

    let per_package = item_count / PACKAGES.len() + 1;
    let mut row = 2;
    let mut emitted = 0;
    for package in PACKAGES {
        content.push_str(&format!(
            "    <row r=\"{r}\"><c r=\"A{r}\" t=\"inlineStr\"><is><t>{package}</t></is></c></row>\n",
            r = row
        ));
        row += 1;

        for i in 0..per_package {
            if emitted == item_count {
                break;
            }
            content.push_str(&format!(
                "    <row r=\"{r}\"><c r=\"A{r}\" t=\"inlineStr\"><is><t>PN-{i}</t></is></c><c r=\"B{r}\" t=\"inlineStr\"><is><t>Part {i}</t></is></c><c r=\"C{r}\"><v>{price}</v></c><c r=\"D{r}\"><v>2</v></c></row>\n",
                r = row,
                i = i,
                price = 10.0 + i as f64
            ));
            row += 1;
            emitted += 1;
        }

        content.push_str(&format!(
            "    <row r=\"{r}\"><c r=\"D{r}\" t=\"inlineStr\"><is><t>Total:</t></is></c></row>\n",
            r = row
        ));
        row += 1;
    }

    content.push_str("  </sheetData>\n</worksheet>");

    zip.start_file("xl/worksheets/sheet1.xml", options).unwrap();
    zip.write_all(content.as_bytes()).unwrap();

    zip.finish().unwrap();
    buffer
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_catalog");

    for size in [100, 1_000, 5_000] {
        let data = create_test_xlsx(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let catalog =
                    pricebook::extract_catalog_from_bytes(black_box(data), PACKAGES).unwrap();
                black_box(catalog)
            })
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let data = create_test_xlsx(1_000);
    let catalog = pricebook::extract_catalog_from_bytes(&data, PACKAGES).unwrap();

    c.bench_function("render_json_pretty", |b| {
        b.iter(|| {
            pricebook::render::to_json(black_box(&catalog), pricebook::JsonFormat::Pretty).unwrap()
        })
    });
}

criterion_group!(benches, bench_extract, bench_render);
criterion_main!(benches);
