//! Common test utilities: scratch files and minimal document builders.
#![allow(dead_code)]

use anyhow::Result;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::fs::{self, File};
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Writes `contents` to `dir/name` and returns the full path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write test file");
    path
}

/// Builds a minimal but valid `.docx` archive at `path` with one
/// paragraph per entry in `paragraphs`.
pub fn build_docx(path: &Path, paragraphs: &[&str]) -> Result<()> {
    let mut body = String::new();
    for paragraph in paragraphs {
        body.push_str("<w:p><w:r><w:t>");
        body.push_str(paragraph);
        body.push_str("</w:t></w:r></w:p>");
    }

    let document = format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
            "<w:body>{}</w:body></w:document>"
        ),
        body
    );

    let file = File::create(path)?;
    let mut zip = ZipWriter::new(file);
    zip.start_file("word/document.xml", SimpleFileOptions::default())?;
    zip.write_all(document.as_bytes())?;
    zip.finish()?;
    Ok(())
}

/// Builds a one-page PDF at `path`, drawing each line of `lines` as
/// Helvetica text top to bottom.
pub fn build_pdf(path: &Path, lines: &[&str]) -> Result<()> {
    let (doc, page, layer) = PdfDocument::new("Test Document", Mm(210.0), Mm(297.0), "Layer 1");
    let current_layer = doc.get_page(page).get_layer(layer);
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    let mut y = 270.0;
    for line in lines {
        current_layer.use_text(*line, 12.0, Mm(20.0), Mm(y), &font);
        y -= 10.0;
    }

    doc.save(&mut BufWriter::new(File::create(path)?))?;
    Ok(())
}

/// Builds a minimal `.xlsx` workbook at `path` with inline-string
/// cells, one worksheet per `(name, rows)` entry, in workbook order.
pub fn build_xlsx(path: &Path, sheets: &[(&str, &[&[&str]])]) -> Result<()> {
    let mut sheet_entries = String::new();
    let mut rel_entries = String::new();
    let mut override_entries = String::new();
    for (index, (name, _)) in sheets.iter().enumerate() {
        let id = index + 1;
        sheet_entries.push_str(&format!(
            r#"<sheet name="{name}" sheetId="{id}" r:id="rId{id}"/>"#
        ));
        rel_entries.push_str(&format!(
            r#"<Relationship Id="rId{id}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{id}.xml"/>"#
        ));
        override_entries.push_str(&format!(
            r#"<Override PartName="/xl/worksheets/sheet{id}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#
        ));
    }

    let file = File::create(path)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    zip.start_file("[Content_Types].xml", options)?;
    write!(
        zip,
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
            r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
            r#"<Default Extension="xml" ContentType="application/xml"/>"#,
            r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
            "{}</Types>"
        ),
        override_entries
    )?;

    zip.start_file("_rels/.rels", options)?;
    write!(
        zip,
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
            r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>"#,
            "</Relationships>"
        )
    )?;

    zip.start_file("xl/workbook.xml", options)?;
    write!(
        zip,
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
            "<sheets>{}</sheets></workbook>"
        ),
        sheet_entries
    )?;

    zip.start_file("xl/_rels/workbook.xml.rels", options)?;
    write!(
        zip,
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
            "{}</Relationships>"
        ),
        rel_entries
    )?;

    for (index, (_, rows)) in sheets.iter().enumerate() {
        zip.start_file(format!("xl/worksheets/sheet{}.xml", index + 1), options)?;
        write!(zip, "{}", worksheet_xml(rows))?;
    }

    zip.finish()?;
    Ok(())
}

fn worksheet_xml(rows: &[&[&str]]) -> String {
    let mut data = String::new();
    for (row_index, row) in rows.iter().enumerate() {
        let row_number = row_index + 1;
        data.push_str(&format!(r#"<row r="{row_number}">"#));
        for (cell_index, cell) in row.iter().enumerate() {
            let column = (b'A' + cell_index as u8) as char;
            data.push_str(&format!(
                r#"<c r="{column}{row_number}" t="inlineStr"><is><t>{cell}</t></is></c>"#
            ));
        }
        data.push_str("</row>");
    }

    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
            "<sheetData>{}</sheetData></worksheet>"
        ),
        data
    )
}
