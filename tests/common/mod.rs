use attrgen::test_utils::load_configuration_for_tests;
use std::io::{Cursor, Read};

// Ensure configuration is loaded once for all tests in a module
static INIT: std::sync::Once = std::sync::Once::new();

#[allow(dead_code)]
pub fn ensure_config() {
    INIT.call_once(|| {
        load_configuration_for_tests().expect("Failed to load configuration for tests");
    });
}

/// Read one part of an XLSX package as text
#[allow(dead_code)]
pub fn read_xlsx_part(bytes: &[u8], name: &str) -> String {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).expect("workbook is not a ZIP package");
    let mut part = archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("workbook has no part named {}", name));
    let mut content = String::new();
    part.read_to_string(&mut content)
        .expect("workbook part is not UTF-8");
    content
}

/// Texts of the `<si>` entries of `xl/sharedStrings.xml`, in index order
#[allow(dead_code)]
pub fn shared_strings(xml: &str) -> Vec<String> {
    xml.split("<si>")
        .skip(1)
        .map(|item| {
            let text = item.split("</si>").next().unwrap_or_default();
            let start = text.find('>').map(|idx| idx + 1).unwrap_or(0);
            let end = text.rfind("</t>").unwrap_or(text.len());
            text[start..end].to_string()
        })
        .collect()
}

/// Raw `<v>` content of a cell in a worksheet part, if the cell exists
#[allow(dead_code)]
pub fn cell_value(sheet_xml: &str, reference: &str) -> Option<String> {
    let marker = format!("<c r=\"{}\"", reference);
    let cell = &sheet_xml[sheet_xml.find(&marker)?..];
    let cell = &cell[..cell.find("</c>")?];
    let start = cell.find("<v>")? + 3;
    let end = cell.find("</v>")?;
    Some(cell[start..end].to_string())
}
