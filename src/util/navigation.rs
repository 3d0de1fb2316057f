//! Full-page navigation after a successful sign-in.
//!
//! The backend sets the session cookie on `/login` and `/register`, so the
//! redirect must be a real page load rather than a client-side route change.

pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Navigator that assigns `window.location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn navigate(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                leptos::logging::warn!("navigation to {path} skipped: no window");
                return;
            };
            if let Err(err) = window.location().set_href(path) {
                leptos::logging::warn!("navigation to {path} failed: {err:?}");
            }
        }
    }
}
