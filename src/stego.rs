use crate::error::StudioError;

/// Placeholder texts shown by the unimplemented steganography feature.
/// No encoding algorithm exists behind these; that is deliberate.
pub const HIDE_PLACEHOLDER: &str = "Функція приховування повідомлення буде реалізована пізніше";
pub const EXTRACT_PLACEHOLDER: &str = "Функція витягування буде реалізована пізніше";

const EMPTY_MESSAGE: &str = "Будь ласка, введіть повідомлення для приховування";

/// Validate the input and report the placeholder status text.
pub fn hide_message(message: &str) -> Result<&'static str, StudioError> {
    if message.trim().is_empty() {
        return Err(StudioError::Validation(EMPTY_MESSAGE.into()));
    }
    tracing::info!("hide message requested ({} chars)", message.chars().count());
    Ok(HIDE_PLACEHOLDER)
}

/// Report the placeholder shown in the output panel.
pub fn extract_message() -> &'static str {
    tracing::info!("extract message requested");
    EXTRACT_PLACEHOLDER
}
