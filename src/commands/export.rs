//! Attendance report export.
//!
//! Fetches the same report as `hrdesk report` and writes it to a file. Every
//! date in the response is exported, not only the current month.

use super::{connect, report::fetch_sheet, ReportFilterArgs};
use crate::{
    libs::{
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    filter: ReportFilterArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "excel")]
    format: ExportFormat,

    /// Output file; defaults to `Employee_Attendance_{start}_to_{end}_{HH-mm-ss}` in the working directory
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let conn = connect()?;
    let range = args.filter.range()?;
    let sheet = fetch_sheet(&conn, &range, args.filter.search.as_deref()).await?;

    let exporter = Exporter::new(args.format, args.output);
    if let Some(path) = exporter.export(&sheet, &range)? {
        msg_success!(Message::ExportCompleted(path.display().to_string()));
    }
    Ok(())
}
