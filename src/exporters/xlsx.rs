use crate::datamodel::ResultTable;
use crate::error::CombinationError;
use rust_xlsxwriter::{Format, FormatBorder, Workbook, Worksheet, XlsxError};

/// Download file name of the exported workbook.
pub const EXPORT_FILE_NAME: &str = "attribute_combinations.xlsx";
/// MIME type of XLSX workbooks.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Sheet1";

/// Excel worksheet maximum row count, header included.
pub const EXCEL_MAX_ROWS: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const EXCEL_MAX_COLUMNS: usize = 16_384;
/// Excel maximum number of characters in a cell.
pub const EXCEL_MAX_STRING_CHARS: usize = 32_767;

const WIDTH_CELL_MIN: usize = 8;
const WIDTH_CELL_MAX: usize = 255;
const WIDTH_CELL_PADDING: usize = 2;
// Body rows inspected when estimating column widths
const AUTOFIT_ROWS_MAX: usize = 10_000;

/// Converter for ResultTable to an XLSX workbook
pub struct XlsxConverter;

impl XlsxConverter {
    /// Serialize the table into an in-memory workbook.
    ///
    /// One sheet, header row from the column names, no index column.
    pub fn to_xlsx(table: &ResultTable) -> Result<Vec<u8>, CombinationError> {
        Self::check_table(table)?;

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        let header = table.header();
        let fmt_header = Format::new().set_bold().set_border(FormatBorder::Thin);
        let mut widths: Vec<usize> = header
            .iter()
            .map(|name| estimate_unicode_string_width(name))
            .collect();

        for (col_idx, name) in header.iter().enumerate() {
            worksheet.write_string_with_format(0, cast_col_num(col_idx)?, *name, &fmt_header)?;
        }
        worksheet.set_freeze_panes(1, 0)?;

        for (row_idx, record) in table.records().enumerate() {
            let row_num = cast_row_num(row_idx + 1)?;
            for (col_idx, value) in record.iter().enumerate() {
                worksheet.write_string(row_num, cast_col_num(col_idx)?, *value)?;
                if row_idx < AUTOFIT_ROWS_MAX {
                    widths[col_idx] = usize::max(widths[col_idx], estimate_unicode_string_width(value));
                }
            }
        }

        apply_column_widths(worksheet, &widths)?;

        Ok(workbook.save_to_buffer()?)
    }

    /// Reject tables a worksheet cannot hold, before any encoding work.
    pub fn check_table(table: &ResultTable) -> Result<(), CombinationError> {
        check_sheet_limits(table.row_count() + 1, table.column_count())?;

        let header = table.header();
        let too_long = |value: &str| value.chars().count() > EXCEL_MAX_STRING_CHARS;
        let column = header
            .iter()
            .position(|name| too_long(name))
            .or_else(|| {
                table
                    .records()
                    .find_map(|record| record.iter().position(|value| too_long(value)))
            });

        match column {
            Some(col_idx) => Err(CombinationError::CellTooLong {
                column: header[col_idx].to_string(),
                limit: EXCEL_MAX_STRING_CHARS,
            }),
            None => Ok(()),
        }
    }

    /// `content-disposition` header value for the download.
    pub fn content_disposition() -> String {
        format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME)
    }
}

/// `n_rows` counts the header row.
fn check_sheet_limits(n_rows: usize, n_columns: usize) -> Result<(), CombinationError> {
    if n_rows > EXCEL_MAX_ROWS || n_columns > EXCEL_MAX_COLUMNS {
        return Err(CombinationError::SheetLimitExceeded {
            rows: n_rows,
            columns: n_columns,
        });
    }
    Ok(())
}

fn apply_column_widths(worksheet: &mut Worksheet, widths: &[usize]) -> Result<(), XlsxError> {
    for (col_idx, width) in widths.iter().enumerate() {
        let width = usize::min(
            WIDTH_CELL_MAX,
            usize::max(WIDTH_CELL_MIN, width + WIDTH_CELL_PADDING),
        );
        worksheet.set_column_width(cast_col_num(col_idx)?, width as f64)?;
    }
    Ok(())
}

/// Estimate displayed width units of a string; non-ASCII glyphs count wider.
fn estimate_unicode_string_width(s: &str) -> usize {
    let n_ascii = s.chars().filter(|chr| chr.is_ascii()).count();
    let n_non_ascii = s.chars().count().saturating_sub(n_ascii);
    n_ascii + (n_non_ascii as f64 * 1.6).round() as usize
}

fn cast_row_num(value: usize) -> Result<u32, XlsxError> {
    u32::try_from(value).map_err(|_| XlsxError::RowColumnLimitError)
}

fn cast_col_num(value: usize) -> Result<u16, XlsxError> {
    u16::try_from(value).map_err(|_| XlsxError::RowColumnLimitError)
}
