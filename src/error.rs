use thiserror::Error;

/// Errors raised by user-triggered actions.
///
/// Every variant is caught at the handler that triggered it and surfaced as
/// a transient banner; none propagates further and none is fatal to the app.
/// The carried string is the user-facing message shown in the banner.
#[derive(Error, Debug)]
pub enum StudioError {
    /// Missing or malformed form input (empty fields, password rules).
    #[error("{0}")]
    Validation(String),

    /// Username collision at registration time.
    #[error("{0}")]
    DuplicateUser(String),

    /// No stored account matches the submitted credentials.
    #[error("{0}")]
    Auth(String),

    /// The selected file is not a decodable raster image.
    #[error("{0}")]
    Decode(String),

    /// Underlying key-value store failure. Reads degrade to empty defaults
    /// and writes are logged instead, so this surfaces only from callers
    /// that explicitly choose to report it.
    #[error("Помилка сховища: {0}")]
    Store(String),
}
