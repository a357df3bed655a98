//! Check-in and check-out recording.

use super::connect;
use crate::{
    api::attendance::CreateAttendanceRequest,
    libs::{attendance::AttendanceType, messages::Message},
    msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use sysinfo::System;

#[derive(Debug, Args)]
pub struct AttendArgs {
    /// Whether this scan starts or ends the working day
    #[arg(value_enum)]
    kind: AttendanceType,

    /// Latitude of the scan location
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Longitude of the scan location
    #[arg(long, allow_negative_numbers = true)]
    lng: f64,

    /// Device description sent with the scan; defaults to this host
    #[arg(long)]
    device: Option<String>,
}

pub async fn cmd(args: AttendArgs) -> Result<()> {
    let conn = connect()?;
    let ctx = conn.session.context()?;

    let request = CreateAttendanceRequest {
        kind: args.kind,
        latitude: args.lat,
        longitude: args.lng,
        device_info: args.device.or_else(device_info),
    };
    let response = conn.session.guard(conn.client.create_attendance(&ctx, &request).await)?;
    tracing::debug!(message = %response.message, "attendance recorded");

    let label = match args.kind {
        AttendanceType::CheckIn => "Check-in",
        AttendanceType::CheckOut => "Check-out",
    };
    msg_success!(Message::AttendanceRecorded(
        label.to_string(),
        Local::now().format("%I:%M %p").to_string()
    ));
    Ok(())
}

fn device_info() -> Option<String> {
    let host = System::host_name()?;
    let os = System::long_os_version().unwrap_or_default();
    Some(format!("{} {}", host, os).trim().to_string())
}
