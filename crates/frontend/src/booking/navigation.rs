use super::submission::Navigator;

/// Navigates by assigning `window.location.href`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window, cannot navigate to {}", path);
            return;
        };
        if let Err(e) = window.location().set_href(path) {
            log::warn!("Failed to navigate to {}: {:?}", path, e);
        }
    }
}
