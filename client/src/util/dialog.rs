//! Native browser dialogs.

/// Ask the user to confirm a destructive action.
///
/// Returns `false` when the dialog cannot be shown. Outside the browser there
/// is nobody to ask and the answer is always `true`.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.confirm_with_message(message).ok()).unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        true
    }
}
