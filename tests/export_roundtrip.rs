use std::fs::File;
use std::io::Read;
use std::path::Path;

use calamine::{Reader, Xlsx, open_workbook};
use tempfile::TempDir;

use stocklist::{
    export::{ExportConfig, ExportError, HEADERS, xlsx::ensure_xlsx_extension},
    persist::{StoreConfig, memory::MemoryRecordStore},
    sync::{SyncError, synchronizer::Synchronizer},
};

fn read_sheet(path: &Path, sheet: &str) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("open xlsx");
    let range = workbook.worksheet_range(sheet).expect("sheet");
    range
        .rows()
        .map(|cells| cells.iter().map(|c| c.to_string()).collect())
        .collect()
}

fn header() -> Vec<String> {
    HEADERS.iter().map(|h| h.to_string()).collect()
}

#[test]
fn export_round_trips_projection_in_order() {
    let tmp = TempDir::new().expect("tmp");
    let mut sync = Synchronizer::new(
        MemoryRecordStore::new(StoreConfig::default()),
        ExportConfig::default(),
    )
    .expect("sync");

    sync.add("Widget", "10").expect("add");
    sync.add("Gadget", "-4").expect("add");
    sync.add("Left Handed Spanner", "0").expect("add");

    let written = sync.export(tmp.path().join("stock.xlsx")).expect("export");
    assert_eq!(written, tmp.path().join("stock.xlsx"));

    let rows = read_sheet(&written, "Inventory");
    let mut expected = vec![header()];
    for r in sync.projection().rows() {
        expected.push(vec![r.name.clone(), r.quantity.to_string()]);
    }
    assert_eq!(rows, expected);
}

#[test]
fn empty_projection_exports_header_only() {
    let tmp = TempDir::new().expect("tmp");
    let sync = Synchronizer::new(
        MemoryRecordStore::new(StoreConfig::default()),
        ExportConfig::default(),
    )
    .expect("sync");

    let written = sync.export(tmp.path().join("empty")).expect("export");
    assert_eq!(written, tmp.path().join("empty.xlsx"));
    assert_eq!(read_sheet(&written, "Inventory"), vec![header()]);
}

#[test]
fn configured_sheet_name_is_used() {
    let tmp = TempDir::new().expect("tmp");
    let config = ExportConfig {
        sheet_name: "Stock".to_string(),
        ..ExportConfig::default()
    };
    let mut sync =
        Synchronizer::new(MemoryRecordStore::new(StoreConfig::default()), config).expect("sync");
    sync.add("Widget", "1").expect("add");

    let written = sync.export(tmp.path().join("custom")).expect("export");
    let workbook: Xlsx<_> = open_workbook(&written).expect("open");
    assert_eq!(workbook.sheet_names(), vec!["Stock".to_string()]);
}

#[test]
fn extension_is_enforced() {
    assert_eq!(ensure_xlsx_extension("list"), Path::new("list.xlsx"));
    assert_eq!(ensure_xlsx_extension("list.xlsx"), Path::new("list.xlsx"));
    assert_eq!(ensure_xlsx_extension("LIST.XLSX"), Path::new("LIST.XLSX"));
    assert_eq!(ensure_xlsx_extension("list.csv"), Path::new("list.csv.xlsx"));
    assert_eq!(ensure_xlsx_extension("dir/list.v2"), Path::new("dir/list.v2.xlsx"));
}

#[test]
fn unwritable_destination_is_an_export_error() {
    let tmp = TempDir::new().expect("tmp");
    let sync = Synchronizer::new(
        MemoryRecordStore::new(StoreConfig::default()),
        ExportConfig::default(),
    )
    .expect("sync");

    let missing_dir = tmp.path().join("no").join("such").join("dir").join("list");
    let err = sync.export(missing_dir).expect_err("missing dir");
    assert!(matches!(err, SyncError::Export(ExportError::Io(_))));
    assert!(err.notice().message.starts_with("Failed to save the list. Error: "));
}

fn read_part(path: &Path, part: &str) -> String {
    let file = File::open(path).expect("open file");
    let mut archive = zip::ZipArchive::new(file).expect("zip");
    let mut entry = archive.by_name(part).expect("part");
    let mut xml = String::new();
    entry.read_to_string(&mut xml).expect("read part");
    xml
}

fn element<'a>(xml: &'a str, tag: &str, marker: &str) -> &'a str {
    xml.split(tag)
        .skip(1)
        .map(|rest| &rest[..rest.find('>').unwrap_or(rest.len())])
        .find(|attrs| attrs.contains(marker))
        .unwrap_or_else(|| panic!("no {tag} element with {marker}"))
}

fn col_width(sheet_xml: &str, col: u16) -> f64 {
    let marker = format!("min=\"{col}\" max=\"{col}\"");
    let attrs = element(sheet_xml, "<col ", &marker);
    let start = attrs.find("width=\"").expect("width attr") + "width=\"".len();
    let len = attrs[start..].find('"').expect("width end");
    attrs[start..start + len].parse().expect("width value")
}

#[test]
fn export_sets_column_widths_and_bold_header() {
    let tmp = TempDir::new().expect("tmp");
    let mut sync = Synchronizer::new(
        MemoryRecordStore::new(StoreConfig::default()),
        ExportConfig::default(),
    )
    .expect("sync");
    sync.add("Widget", "10").expect("add");

    let written = sync.export(tmp.path().join("layout")).expect("export");
    let sheet = read_part(&written, "xl/worksheets/sheet1.xml");

    // Excel stores widths with a small padding on top of the character count.
    let name_width = col_width(&sheet, 1);
    let quantity_width = col_width(&sheet, 2);
    assert!((17.0..18.0).contains(&name_width), "name width {name_width}");
    assert!((10.0..11.0).contains(&quantity_width), "quantity width {quantity_width}");
    assert!(name_width > quantity_width);

    for cell in ["A1", "B1"] {
        let attrs = element(&sheet, "<c ", &format!("r=\"{cell}\""));
        assert!(attrs.contains(" s=\""), "{cell} has no style: {attrs}");
    }
    let data = element(&sheet, "<c ", "r=\"A2\"");
    assert!(!data.contains(" s=\""), "data cell is styled: {data}");

    let styles = read_part(&written, "xl/styles.xml");
    assert!(styles.contains("<b/>"));
}
