//! Core library modules of hrdesk.
//!
//! ## Features
//!
//! - **Reporting Engine**: Time parsing, duration and lateness formatting, aggregation
//! - **Export**: Excel, CSV and JSON files of the attendance report
//! - **Session**: Token cache and the sign-in/sign-out state machine
//! - **Infrastructure**: Configuration, data storage, encrypted secrets, messages
//! - **Presentation**: Console tables and pagination
//!
//! ## Usage
//!
//! ```rust
//! use hrdesk::libs::formatter::calc_work_duration;
//!
//! assert_eq!(calc_work_duration(Some("08:05"), Some("17:10")), "9h 5m");
//! ```

pub mod attendance;
pub mod config;
pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod optimistic;
pub mod pagination;
pub mod secret;
pub mod session;
pub mod time;
pub mod view;
