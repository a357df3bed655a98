//! Command-line interface of hrdesk.
//!
//! Each subcommand lives in its own module with an `Args` struct and an
//! async `cmd` entry point. Commands that talk to the backend share
//! [`connect`], which resolves the configuration, builds the client and opens
//! the cached session.

pub mod attend;
pub mod export;
pub mod history;
pub mod init;
pub mod leave_types;
pub mod leaves;
pub mod login;
pub mod logout;
pub mod password;
pub mod positions;
pub mod report;
pub mod today;
pub mod users;

use crate::{
    api::ApiClient,
    libs::{attendance::DateRange, config::Config, messages::Message, session::SessionManager},
    msg_bail_anyhow, msg_error_anyhow,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Sign in to the HR backend")]
    Login(login::LoginArgs),
    #[command(about = "Sign out and forget the cached session")]
    Logout,
    #[command(about = "Change your password")]
    Password,
    #[command(about = "Record a check-in or check-out", arg_required_else_help = true)]
    Attend(attend::AttendArgs),
    #[command(about = "Show today's check-in and check-out")]
    Today,
    #[command(about = "Show your attendance history")]
    History(history::HistoryArgs),
    #[command(about = "Employee attendance report")]
    Report(report::ReportArgs),
    #[command(about = "Export the employee attendance report to a file")]
    Export(export::ExportArgs),
    #[command(about = "Manage users", arg_required_else_help = true)]
    Users(users::UsersArgs),
    #[command(about = "Manage positions", arg_required_else_help = true)]
    Positions(positions::PositionsArgs),
    #[command(about = "List leave types")]
    LeaveTypes(leave_types::LeaveTypesArgs),
    #[command(about = "Review leave requests", arg_required_else_help = true)]
    Leaves(leaves::LeavesArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Login(args) => login::cmd(args).await,
            Commands::Logout => logout::cmd().await,
            Commands::Password => password::cmd().await,
            Commands::Attend(args) => attend::cmd(args).await,
            Commands::Today => today::cmd().await,
            Commands::History(args) => history::cmd(args).await,
            Commands::Report(args) => report::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
            Commands::Users(args) => users::cmd(args).await,
            Commands::Positions(args) => positions::cmd(args).await,
            Commands::LeaveTypes(args) => leave_types::cmd(args).await,
            Commands::Leaves(args) => leaves::cmd(args).await,
        }
    }
}

/// Everything a backend command needs.
pub struct Connection {
    pub config: Config,
    pub client: ApiClient,
    pub session: SessionManager,
}

pub fn connect() -> Result<Connection> {
    let config = Config::read()?;
    let client = ApiClient::from_config(&config)?;
    tracing::debug!(base_url = client.base_url(), "api client ready");
    Ok(Connection {
        config,
        client,
        session: SessionManager::open()?,
    })
}

/// Date bounds and name filter shared by `report` and `export`.
#[derive(Debug, Args)]
pub struct ReportFilterArgs {
    /// First day of the report, `YYYY-MM-DD` or `today`
    #[arg(short, long)]
    pub start: Option<String>,

    /// Last day of the report, `YYYY-MM-DD` or `today`
    #[arg(short, long)]
    pub end: Option<String>,

    /// Only employees whose name contains this text
    #[arg(long)]
    pub search: Option<String>,
}

impl ReportFilterArgs {
    pub fn range(&self) -> Result<DateRange> {
        let start = self.start.as_deref().map(parse_date).transpose()?;
        let end = self.end.as_deref().map(parse_date).transpose()?;
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                msg_bail_anyhow!(Message::InvalidDateRange(start.to_string(), end.to_string()));
            }
        }
        Ok(DateRange::new(start, end))
    }
}

/// Parses `today` or `YYYY-MM-DD`.
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.trim().eq_ignore_ascii_case("today") {
        Ok(Local::now().date_naive())
    } else {
        NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
            .map_err(|_| msg_error_anyhow!(Message::InvalidDate(date_str.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_today_and_iso() {
        assert_eq!(parse_date("Today").unwrap(), Local::now().date_naive());
        assert_eq!(parse_date("2025-03-03").unwrap(), NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
        assert!(parse_date("03/03/2025").is_err());
    }

    #[test]
    fn reversed_range_is_rejected() {
        let args = ReportFilterArgs {
            start: Some("2025-03-10".to_string()),
            end: Some("2025-03-01".to_string()),
            search: None,
        };
        assert!(args.range().is_err());
    }
}
