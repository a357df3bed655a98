#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use hrdesk::libs::attendance::{
        AttendanceSheet, DailyAttendance, DateRange, DayCell, Employee, EmployeeAttendanceReport, ReportRules,
        SheetRow,
    };
    use hrdesk::libs::export::{clean_remark, export_file_name, ExportFormat, Exporter, MergeKind, MergeRange};
    use hrdesk::libs::time::DisplayZone;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        range: DateRange,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                range: DateRange::new(Some(date(3)), Some(date(4))),
            }
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    fn sheet() -> AttendanceSheet {
        let reports = vec![
            EmployeeAttendanceReport {
                employee: Employee {
                    id: 1,
                    name: "Aye Aye".to_string(),
                },
                attendance_list: vec![
                    DailyAttendance {
                        date: date(3),
                        times: vec!["08:05".to_string(), "17:10".to_string()],
                    },
                    DailyAttendance {
                        date: date(4),
                        times: vec![],
                    },
                ],
            },
            EmployeeAttendanceReport {
                employee: Employee {
                    id: 2,
                    name: "Bo Bo".to_string(),
                },
                attendance_list: vec![DailyAttendance {
                    date: date(4),
                    times: vec!["09:30".to_string()],
                }],
            },
        ];
        let rules = ReportRules {
            late_threshold: "09:15".to_string(),
            zone: DisplayZone::utc(),
        };
        AttendanceSheet::build(&reports, &rules)
    }

    #[test]
    fn test_clean_remark() {
        assert_eq!(clean_remark("late late (5min)"), "Late (5min)");
        assert_eq!(clean_remark("LATE (1h 0min)"), "Late (1h 0min)");
        assert_eq!(clean_remark("Late (15min)"), "Late (15min)");
        assert_eq!(clean_remark("Early (10min)"), "");
        assert_eq!(clean_remark("  "), "");
        assert_eq!(clean_remark("Sick leave"), "Sick leave");
    }

    #[test]
    fn test_export_file_name() {
        let range = DateRange::new(Some(date(1)), Some(date(31)));
        let now = NaiveTime::from_hms_opt(14, 5, 9).unwrap();
        assert_eq!(
            export_file_name(&range, now, ExportFormat::Excel),
            "Employee_Attendance_2025-03-01_to_2025-03-31_14-05-09.xlsx"
        );
        assert_eq!(
            export_file_name(&DateRange::default(), now, ExportFormat::Csv),
            "Employee_Attendance_unknown_to_unknown_14-05-09.csv"
        );
    }

    #[test]
    fn test_grid_layout() {
        let grid = sheet().to_grid();
        assert_eq!(grid.len(), 4);
        assert_eq!(grid[0][..5], ["No.", "Employee Name", "Mar 03 (Mon)", "", ""]);
        assert_eq!(grid[1][2..5], ["Scan Time", "Hour", "Remark"]);

        // Aye Aye: present on the 3rd, absent on the 4th
        assert_eq!(grid[2][2..5], ["08:05 AM,\n05:10 PM", "9h 5m", ""]);
        assert_eq!(grid[2][5..8], ["❌", "", ""]);
        // Bo Bo: no entry for the 3rd
        assert_eq!(grid[3][2..5], ["❌", "", ""]);
        assert_eq!(grid[3][5..8], ["09:30 AM", "0h 0m", "Late (15min)"]);

        assert!(grid.iter().all(|line| line.len() == 2 + 3 * 2));
    }

    #[test]
    fn test_grid_is_stable() {
        let sheet = sheet();
        assert_eq!(sheet.to_grid(), sheet.to_grid());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_empty_sheet_writes_nothing(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("empty.xlsx");
        let exporter = Exporter::new(ExportFormat::Excel, Some(path.clone()));

        let empty = AttendanceSheet::build(&[], &ReportRules::default());
        assert_eq!(exporter.export(&empty, &ctx.range).unwrap(), None);

        let no_dates = sheet().with_dates(Vec::new());
        assert_eq!(exporter.export(&no_dates, &ctx.range).unwrap(), None);
        assert!(!path.exists());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_excel_export(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("attendance.xlsx");
        let written = Exporter::new(ExportFormat::Excel, Some(path.clone()))
            .export(&sheet(), &ctx.range)
            .unwrap();

        assert_eq!(written, Some(path.clone()));
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK"));

        // Exporting again overwrites the same file with the same layout
        let sheet = sheet();
        assert_eq!(sheet.merge_ranges(), sheet.merge_ranges());
        Exporter::new(ExportFormat::Excel, Some(path.clone()))
            .export(&sheet, &ctx.range)
            .unwrap();
        assert!(fs::read(&path).unwrap().starts_with(b"PK"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_csv_export(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("attendance.csv");
        Exporter::new(ExportFormat::Csv, Some(path.clone()))
            .export(&sheet(), &ctx.range)
            .unwrap();

        let mut reader = csv::ReaderBuilder::new().has_headers(false).from_path(&path).unwrap();
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 4);
        assert_eq!(&records[0][1], "Employee Name");
        assert_eq!(&records[3][1], "Bo Bo");
        assert_eq!(&records[3][7], "Late (15min)");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_json_export(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("attendance.json");
        Exporter::new(ExportFormat::Json, Some(path.clone()))
            .export(&sheet(), &ctx.range)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["dates"], serde_json::json!(["2025-03-03", "2025-03-04"]));
        assert_eq!(value["rows"][0]["name"], "Aye Aye");
        assert_eq!(value["rows"][0]["cells"]["2025-03-04"]["status"], "absent");
        assert_eq!(value["rows"][1]["cells"]["2025-03-04"]["hour"], "0h 0m");
        // Bo Bo has no entry for the 3rd at all
        assert_eq!(value["rows"][1]["cells"]["2025-03-03"]["status"], "absent");
        for row in value["rows"].as_array().unwrap() {
            assert_eq!(row["cells"].as_object().unwrap().len(), 2);
        }
    }

    #[test]
    fn test_export_view_matches_grid() {
        let mut cells = std::collections::BTreeMap::new();
        cells.insert(
            date(3),
            DayCell::Present {
                scan_time: "09:20 AM".to_string(),
                hour: "0h 0m".to_string(),
                remark: "late late (5min)".to_string(),
            },
        );
        cells.insert(date(9), DayCell::Absent);
        let sheet = AttendanceSheet {
            dates: vec![date(3), date(4)],
            rows: vec![SheetRow {
                no: 1,
                name: "Aye Aye".to_string(),
                cells,
            }],
        };

        let view = sheet.export_view();
        let row = &view.rows[0];
        assert_eq!(row.cells.keys().copied().collect::<Vec<_>>(), vec![date(3), date(4)]);
        assert_eq!(row.cells[&date(4)], DayCell::Absent);
        assert_eq!(row.cells[&date(3)].texts().unwrap()[2], "Late (5min)");
        assert_eq!(row.cells[&date(3)].texts().unwrap()[2], sheet.to_grid()[2][4]);
    }

    fn merge(first_row: u32, first_col: u16, last_row: u32, last_col: u16, text: &str, kind: MergeKind) -> MergeRange {
        MergeRange {
            first_row,
            first_col,
            last_row,
            last_col,
            text: text.to_string(),
            kind,
        }
    }

    #[test]
    fn test_excel_merge_ranges() {
        let ranges = sheet().merge_ranges();
        assert_eq!(
            ranges,
            vec![
                merge(0, 0, 1, 0, "No.", MergeKind::Header),
                merge(0, 1, 1, 1, "Employee Name", MergeKind::Header),
                merge(0, 2, 0, 4, "Mar 03 (Mon)", MergeKind::Header),
                merge(0, 5, 0, 7, "Mar 04 (Tue)", MergeKind::Header),
                // Aye Aye absent on the 4th, Bo Bo on the 3rd
                merge(2, 5, 2, 7, "❌", MergeKind::Absence),
                merge(3, 2, 3, 4, "❌", MergeKind::Absence),
            ]
        );
    }
}
