/// Interactive yes/no prompt shown before destructive actions
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// `window.confirm`; a missing window or a blocked dialog counts as "no".
#[derive(Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|win| win.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
