//! # hrdesk - HR attendance and leave client
//!
//! A command-line client for the HR backend. It keeps an authenticated
//! session between invocations, records check-ins and check-outs, and builds
//! the employee attendance report with spreadsheet export.
//!
//! ## Features
//!
//! - **Attendance**: Check-in/out with location, today's status, history
//! - **Reports**: Per-employee, per-day scan times, worked hours and lateness
//! - **Export**: Styled Excel workbook, CSV and JSON
//! - **Administration**: Users, positions, leave types and leave approval
//! - **Sessions**: Encrypted token cache, automatic sign-out on `401`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hrdesk::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
