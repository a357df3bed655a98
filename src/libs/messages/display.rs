//! Display implementation for application messages.
//!
//! All user-facing wording is kept here so that commands only pick a
//! [`Message`] variant and never format text themselves.
//!
//! ```rust
//! use hrdesk::libs::messages::Message;
//!
//! assert_eq!(Message::WrongPassword(3).to_string(), "You entered the wrong password 3 times!");
//! ```

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration and cached session removed".to_string(),
            Message::ConfigModuleApi => "API settings".to_string(),
            Message::ConfigModuleAttendance => "Attendance settings".to_string(),
            Message::InvalidApiMode(mode) => {
                format!("Unknown API mode '{}'. Expected development, uat or production", mode)
            }
            Message::InvalidLateThreshold(value) => format!("Invalid late threshold '{}'. Expected HH:mm", value),

            // === SESSION MESSAGES ===
            Message::LoginSuccess(name) => format!("Logged in as {}", name),
            Message::LoggedOut => "Logged out".to_string(),
            Message::NotLoggedIn => "You are not logged in. Run 'hrdesk login' first".to_string(),
            Message::SessionExpired => "Your session has expired. Run 'hrdesk login' to sign in again".to_string(),
            Message::AccountInactive => "Your account is inactive. Please contact admin.".to_string(),
            Message::WrongPassword(count) => format!("You entered the wrong password {} times!", count),
            Message::InvalidCredentials => "Invalid username or password".to_string(),
            Message::ManagementOnly => "This command is available to management accounts only".to_string(),
            Message::PasswordChanged => "Password changed".to_string(),
            Message::PasswordMismatch => "Passwords do not match".to_string(),
            Message::SessionCacheCorrupted => "Cached session could not be read and was discarded".to_string(),

            // === ATTENDANCE MESSAGES ===
            Message::AttendanceRecorded(kind, time) => format!("{} recorded at {}", kind, time),
            Message::TodayHeader(date) => format!("Attendance for {}", date),
            Message::NoAttendanceToday => "No attendance recorded today".to_string(),
            Message::HistoryHeader(name) => format!("Attendance history of {}", name),
            Message::ReportHeader(start, end) => format!("Employee attendance from {} to {}", start, end),
            Message::NoAttendanceRecords => "No attendance records found".to_string(),
            Message::InvalidDate(value) => format!("Invalid date '{}'. Expected YYYY-MM-DD or 'today'", value),
            Message::InvalidDateRange(start, end) => format!("Start date {} is after end date {}", start, end),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::ExportNoData => "No data to export".to_string(),
            Message::ExportNoDates => "No attendance dates in the selected range".to_string(),

            // === ADMINISTRATION MESSAGES ===
            Message::UserStatusChanged(name, active) => {
                format!("User {} is now {}", name, if *active { "active" } else { "inactive" })
            }
            Message::PositionStatusChanged(name, active) => {
                format!("Position {} is now {}", name, if *active { "active" } else { "inactive" })
            }
            Message::PasswordReset(name) => format!("Password of {} has been reset", name),
            Message::LeaveStatusChanged(id, status) => format!("Leave #{} {}", id, status),
            Message::NothingFound => "Nothing found".to_string(),
            Message::PageInfo(page, total) => format!("Page {} of {}", page, total),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptApiMode => "API mode (development, uat, production)".to_string(),
            Message::PromptApiBaseUrl => "Custom API base URL (leave empty to use the mode default)".to_string(),
            Message::PromptApiTimeout => "Request timeout in seconds (0 disables)".to_string(),
            Message::PromptLateThreshold => "Work start time used for lateness (HH:mm)".to_string(),
            Message::PromptTimezone => "Display time zone (local, utc or an offset like +06:30)".to_string(),
            Message::PromptUsername => "Username".to_string(),
            Message::PromptPassword => "Password".to_string(),
            Message::PromptCurrentPassword => "Current password".to_string(),
            Message::PromptNewPassword => "New password".to_string(),
            Message::PromptConfirmPassword => "Confirm new password".to_string(),
        };

        write!(f, "{}", text)
    }
}
