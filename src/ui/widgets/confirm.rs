use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Native OK/Cancel confirmation; returns true when the user accepts.
pub fn confirm(title: &str, content: &str) -> bool {
    let result = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(title)
        .set_description(content)
        .set_buttons(MessageButtons::OkCancel)
        .show();
    matches!(result, MessageDialogResult::Ok)
}
