//! Attendance report export to spreadsheet, CSV and JSON files.
//!
//! Serializes an [`AttendanceSheet`] into a file that can be handed to
//! payroll or management. The Excel output mirrors the on-screen report:
//! a two-row header (date over `Scan Time` / `Hour` / `Remark`), one row per
//! employee, and merged, red-marked cells for absences.
//!
//! ## Features
//!
//! - **Export Formats**: Excel with merged headers and cell styling, CSV and JSON
//! - **Remark Cleaning**: Normalizes lateness text before it is written
//! - **File Naming**: `Employee_Attendance_{start}_to_{end}_{HH-mm-ss}.xlsx`
//! - **Empty Reports**: Logged as a warning, nothing is written
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hrdesk::libs::attendance::{AttendanceSheet, DateRange, ReportRules};
//! use hrdesk::libs::export::{ExportFormat, Exporter};
//!
//! # fn run(sheet: AttendanceSheet, range: DateRange) -> anyhow::Result<()> {
//! let exporter = Exporter::new(ExportFormat::Excel, None);
//! if let Some(path) = exporter.export(&sheet, &range)? {
//!     println!("written to {}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

use crate::{
    libs::{
        attendance::{date_label, AttendanceSheet, DateRange, DayCell, SheetRow, ABSENCE_MARKER},
        messages::Message,
    },
    msg_warning,
};
use anyhow::Result;
use chrono::{Local, NaiveTime};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Columns used by every date group.
pub const SUB_HEADERS: [&str; 3] = ["Scan Time", "Hour", "Remark"];

const SHEET_NAME: &str = "Employee Attendance";
const FIXED_COLUMNS: u16 = 2;

const HEADER_FONT: u32 = 0x008080;
const HEADER_FILL: u32 = 0xF8F9FA;
const LATE_FONT: u32 = 0xFF9800;
const ABSENT_FONT: u32 = 0xFF0000;

/// Enumeration of supported export output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Styled workbook with merged headers.
    Excel,
    /// The same grid as plain comma-separated values.
    Csv,
    /// Sheet rows as structured JSON.
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Normalizes a lateness remark for export.
///
/// - A doubled `late late` prefix collapses to one
/// - Text starting with `early` is dropped
/// - A leading `late` is capitalized
pub fn clean_remark(remark: &str) -> String {
    let mut text = remark.trim().to_string();
    if text.is_empty() {
        return text;
    }

    if let Some(rest) = strip_word_ci(&text, "late") {
        if strip_word_ci(rest.trim_start(), "late").is_some() && rest.starts_with(char::is_whitespace) {
            text = rest.trim_start().to_string();
        }
    }

    if text.to_lowercase().starts_with("early") {
        return String::new();
    }

    if let Some(rest) = strip_word_ci(&text, "late") {
        text = format!("Late{}", rest);
    }

    text
}

fn strip_word_ci<'a>(text: &'a str, word: &str) -> Option<&'a str> {
    let head = text.get(..word.len())?;
    head.eq_ignore_ascii_case(word).then(|| &text[word.len()..])
}

/// Default export file name for `range`, stamped with `now`.
pub fn export_file_name(range: &DateRange, now: NaiveTime, format: ExportFormat) -> String {
    let bound = |date: Option<chrono::NaiveDate>| {
        date.map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "unknown".to_string())
    };
    format!(
        "Employee_Attendance_{}_to_{}_{}.{}",
        bound(range.start),
        bound(range.end),
        now.format("%H-%M-%S"),
        format.extension()
    )
}

impl AttendanceSheet {
    /// Cell values of the exported sheet, headers included.
    ///
    /// Absent days occupy their three columns as the marker followed by two
    /// blanks. Remarks pass through [`clean_remark`].
    pub fn to_grid(&self) -> Vec<Vec<String>> {
        let mut header = vec!["No.".to_string(), "Employee Name".to_string()];
        let mut sub_header = vec![String::new(), String::new()];
        for date in &self.dates {
            header.extend([date_label(date), String::new(), String::new()]);
            sub_header.extend(SUB_HEADERS.iter().map(|s| s.to_string()));
        }

        let mut grid = vec![header, sub_header];
        for row in &self.rows {
            let mut line = vec![row.no.to_string(), row.name.clone()];
            for date in &self.dates {
                match row.cell(date).texts() {
                    Some([scan_time, hour, remark]) => {
                        line.extend([scan_time.to_string(), hour.to_string(), clean_remark(remark)]);
                    }
                    None => line.extend([ABSENCE_MARKER.to_string(), String::new(), String::new()]),
                }
            }
            grid.push(line);
        }
        grid
    }

    /// The sheet as written to JSON: one cell per header date, in header
    /// order, with remarks passed through [`clean_remark`].
    pub fn export_view(&self) -> AttendanceSheet {
        let rows = self
            .rows
            .iter()
            .map(|row| SheetRow {
                no: row.no,
                name: row.name.clone(),
                cells: self
                    .dates
                    .iter()
                    .map(|date| (*date, cleaned(row.cell(date))))
                    .collect(),
            })
            .collect();

        AttendanceSheet {
            dates: self.dates.clone(),
            rows,
        }
    }

    /// Merged ranges of the Excel sheet.
    ///
    /// `No.` and `Employee Name` span both header rows, each date label spans
    /// its three sub-columns, and each absence spans the three cells of its day.
    pub fn merge_ranges(&self) -> Vec<MergeRange> {
        let mut ranges = vec![
            MergeRange::header(0, 0, 1, 0, "No."),
            MergeRange::header(0, 1, 1, 1, "Employee Name"),
        ];
        for (index, date) in self.dates.iter().enumerate() {
            let col = group_column(index);
            ranges.push(MergeRange::header(0, col, 0, col + 2, &date_label(date)));
        }

        for (index, row) in self.rows.iter().enumerate() {
            let excel_row = index as u32 + 2;
            for (date_index, date) in self.dates.iter().enumerate() {
                if row.cell(date).is_absent() {
                    let col = group_column(date_index);
                    ranges.push(MergeRange {
                        first_row: excel_row,
                        first_col: col,
                        last_row: excel_row,
                        last_col: col + 2,
                        text: ABSENCE_MARKER.to_string(),
                        kind: MergeKind::Absence,
                    });
                }
            }
        }
        ranges
    }
}

fn cleaned(cell: DayCell) -> DayCell {
    if cell.is_absent() {
        return DayCell::Absent;
    }
    match cell {
        DayCell::Present { scan_time, hour, remark } => DayCell::Present {
            scan_time,
            hour,
            remark: clean_remark(&remark),
        },
        DayCell::Absent => DayCell::Absent,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeKind {
    Header,
    Absence,
}

/// A rectangular cell range written as one merged cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRange {
    pub first_row: u32,
    pub first_col: u16,
    pub last_row: u32,
    pub last_col: u16,
    pub text: String,
    pub kind: MergeKind,
}

impl MergeRange {
    fn header(first_row: u32, first_col: u16, last_row: u32, last_col: u16, text: &str) -> Self {
        Self {
            first_row,
            first_col,
            last_row,
            last_col,
            text: text.to_string(),
            kind: MergeKind::Header,
        }
    }
}

/// Writes attendance sheets to disk in the configured format.
pub struct Exporter {
    format: ExportFormat,
    output_path: Option<PathBuf>,
}

impl Exporter {
    /// Creates an exporter. Without `output_path` the file is created in the
    /// working directory under [`export_file_name`].
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        Self { format, output_path }
    }

    /// Exports `sheet` and returns the written path.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the sheet has no employees or no dates; a warning is
    /// emitted and no file is touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the workbook cannot be built or the file cannot be written.
    pub fn export(&self, sheet: &AttendanceSheet, range: &DateRange) -> Result<Option<PathBuf>> {
        if sheet.rows.is_empty() {
            tracing::warn!("attendance export skipped: no employees in report");
            msg_warning!(Message::ExportNoData);
            return Ok(None);
        }
        if sheet.dates.is_empty() {
            tracing::warn!("attendance export skipped: report has no dates");
            msg_warning!(Message::ExportNoDates);
            return Ok(None);
        }

        let path = self
            .output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(export_file_name(range, Local::now().time(), self.format)));

        match self.format {
            ExportFormat::Excel => self.export_excel(sheet, &path)?,
            ExportFormat::Csv => self.export_csv(sheet, &path)?,
            ExportFormat::Json => self.export_json(sheet, &path)?,
        }

        tracing::debug!(path = %path.display(), rows = sheet.rows.len(), dates = sheet.dates.len(), "attendance exported");
        Ok(Some(path))
    }

    fn export_csv(&self, sheet: &AttendanceSheet, path: &Path) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)?;
        for line in sheet.to_grid() {
            wtr.write_record(&line)?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, sheet: &AttendanceSheet, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&sheet.export_view())?;
        File::create(path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, sheet: &AttendanceSheet, path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        let styles = SheetStyles::new();
        let grid = sheet.to_grid();

        for range in sheet.merge_ranges() {
            let format = match range.kind {
                MergeKind::Header => &styles.header,
                MergeKind::Absence => &styles.absent,
            };
            worksheet.merge_range(
                range.first_row,
                range.first_col,
                range.last_row,
                range.last_col,
                &range.text,
                format,
            )?;
        }
        for index in 0..sheet.dates.len() {
            let col = group_column(index);
            for (offset, title) in SUB_HEADERS.iter().enumerate() {
                worksheet.write_string_with_format(1, col + offset as u16, *title, &styles.header)?;
            }
        }

        for (index, row) in sheet.rows.iter().enumerate() {
            let excel_row = index as u32 + 2;
            let line = &grid[index + 2];
            worksheet.write_number_with_format(excel_row, 0, row.no as f64, &styles.body)?;
            worksheet.write_string_with_format(excel_row, 1, &row.name, &styles.name)?;

            for (date_index, date) in sheet.dates.iter().enumerate() {
                if row.cell(date).is_absent() {
                    continue;
                }
                let col = group_column(date_index);
                for offset in 0..3u16 {
                    let value = &line[(col + offset) as usize];
                    write_body_cell(worksheet, excel_row, col + offset, value, &styles)?;
                }
            }
        }

        worksheet.set_column_width(0, 8)?;
        worksheet.set_column_width(1, 20)?;
        for index in 0..sheet.dates.len() {
            let col = group_column(index);
            worksheet.set_column_width(col, 15)?;
            worksheet.set_column_width(col + 1, 12)?;
            worksheet.set_column_width(col + 2, 15)?;
        }

        workbook.save(path)?;
        Ok(())
    }
}

fn group_column(date_index: usize) -> u16 {
    FIXED_COLUMNS + (date_index as u16) * 3
}

fn write_body_cell(worksheet: &mut Worksheet, row: u32, col: u16, value: &str, styles: &SheetStyles) -> Result<()> {
    let format = if value.contains("Late") { &styles.late } else { &styles.body };
    worksheet.write_string_with_format(row, col, value, format)?;
    Ok(())
}

struct SheetStyles {
    header: Format,
    body: Format,
    name: Format,
    late: Format,
    absent: Format,
}

impl SheetStyles {
    fn new() -> Self {
        let base = Format::new()
            .set_font_name("Arial")
            .set_font_size(10.0)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap()
            .set_border(FormatBorder::Thin)
            .set_border_color(Color::Black);

        Self {
            header: base
                .clone()
                .set_bold()
                .set_font_color(Color::RGB(HEADER_FONT))
                .set_background_color(Color::RGB(HEADER_FILL)),
            name: base.clone().set_align(FormatAlign::Left),
            late: base.clone().set_bold().set_font_color(Color::RGB(LATE_FONT)),
            absent: base
                .clone()
                .set_bold()
                .set_font_size(12.0)
                .set_font_color(Color::RGB(ABSENT_FONT)),
            body: base,
        }
    }
}
