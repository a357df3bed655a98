/// Every user-facing text of the application.
///
/// Variants carry the dynamic parts of a message; the wording lives in
/// `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleApi,
    ConfigModuleAttendance,
    InvalidApiMode(String),
    InvalidLateThreshold(String),

    // === SESSION MESSAGES ===
    LoginSuccess(String), // name
    LoggedOut,
    NotLoggedIn,
    SessionExpired,
    AccountInactive,
    WrongPassword(i32),
    InvalidCredentials,
    ManagementOnly,
    PasswordChanged,
    PasswordMismatch,
    SessionCacheCorrupted,

    // === ATTENDANCE MESSAGES ===
    AttendanceRecorded(String, String), // type, time
    TodayHeader(String),                // date
    NoAttendanceToday,
    HistoryHeader(String),              // name
    ReportHeader(String, String),       // start, end
    NoAttendanceRecords,
    InvalidDate(String),
    InvalidDateRange(String, String),

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    ExportNoData,
    ExportNoDates,

    // === ADMINISTRATION MESSAGES ===
    UserStatusChanged(String, bool),     // name, active
    PositionStatusChanged(String, bool), // name, active
    PasswordReset(String),               // name
    LeaveStatusChanged(i64, String),     // id, status
    NothingFound,
    PageInfo(usize, usize),              // page, total pages

    // === PROMPTS ===
    PromptSelectModules,
    PromptApiMode,
    PromptApiBaseUrl,
    PromptApiTimeout,
    PromptLateThreshold,
    PromptTimezone,
    PromptUsername,
    PromptPassword,
    PromptCurrentPassword,
    PromptNewPassword,
    PromptConfirmPassword,
}
