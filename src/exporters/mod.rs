pub mod xlsx;

pub use xlsx::{EXPORT_FILE_NAME, XLSX_CONTENT_TYPE, XlsxConverter};
