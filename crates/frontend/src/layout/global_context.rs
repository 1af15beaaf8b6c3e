use crate::shared::config::MOBILE_BREAKPOINT_PX;
use leptos::prelude::*;
use leptos::prelude::window_event_listener;

/// Page-wide UI flags shared by the explore page components.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// A similar-artist card is currently being dragged
    pub drag_active: RwSignal<bool>,
    /// Viewport is narrower than [`MOBILE_BREAKPOINT_PX`]
    pub is_mobile: RwSignal<bool>,
}

pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT_PX
}

fn current_window_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            drag_active: RwSignal::new(false),
            is_mobile: RwSignal::new(false),
        }
    }

    /// Seed `is_mobile` from the window and keep it in sync on resize.
    pub fn init_viewport_tracking(&self) {
        if let Some(width) = current_window_width() {
            self.is_mobile.set(is_mobile_width(width));
        }

        let is_mobile = self.is_mobile;
        let _ = window_event_listener(leptos::ev::resize, move |_ev| {
            if let Some(width) = current_window_width() {
                let mobile = is_mobile_width(width);
                if is_mobile.get_untracked() != mobile {
                    log::debug!("viewport switched, mobile={}", mobile);
                    is_mobile.set(mobile);
                }
            }
        });
    }

    pub fn start_drag(&self) {
        self.drag_active.set(true);
    }

    pub fn end_drag(&self) {
        self.drag_active.set(false);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_mobile_width() {
        assert!(is_mobile_width(375.0));
        assert!(is_mobile_width(767.9));
        assert!(!is_mobile_width(768.0));
        assert!(!is_mobile_width(1440.0));
    }

    #[test]
    fn test_drag_flag() {
        let ctx = AppGlobalContext::new();
        assert!(!ctx.drag_active.get_untracked());
        ctx.start_drag();
        assert!(ctx.drag_active.get_untracked());
        ctx.end_drag();
        assert!(!ctx.drag_active.get_untracked());
    }
}
