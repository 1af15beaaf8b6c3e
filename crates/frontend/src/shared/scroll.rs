//! Scroll helpers used after an artist is chosen

use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

/// Where the page should move once results are ready
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollTarget {
    Top,
    Anchor { offset: f64 },
}

/// Decide the post-selection scroll. Nothing happens while results are still loading.
pub fn scroll_target(is_mobile: bool, results_loading: bool, anchor_offset: f64) -> Option<ScrollTarget> {
    if results_loading {
        return None;
    }
    if is_mobile {
        Some(ScrollTarget::Top)
    } else {
        Some(ScrollTarget::Anchor {
            offset: anchor_offset,
        })
    }
}

/// Absolute document Y for an element whose viewport top is `element_top`
pub fn scroll_target_y(element_top: f64, page_y_offset: f64, offset: f64) -> f64 {
    (element_top + page_y_offset + offset).max(0.0)
}

fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

pub fn scroll_to_top() {
    smooth_scroll_to(0.0);
}

/// Scroll so that `element` sits `offset` pixels below the top of the viewport
/// (a negative offset leaves room above it).
pub fn scroll_to_ref(element: &HtmlElement, offset: f64) {
    let page_y_offset = web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0);
    let element_top = element.get_bounding_client_rect().top();
    smooth_scroll_to(scroll_target_y(element_top, page_y_offset, offset));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_target_mobile() {
        assert_eq!(scroll_target(true, false, -50.0), Some(ScrollTarget::Top));
    }

    #[test]
    fn test_scroll_target_desktop() {
        assert_eq!(
            scroll_target(false, false, -50.0),
            Some(ScrollTarget::Anchor { offset: -50.0 })
        );
    }

    #[test]
    fn test_no_scroll_while_loading() {
        assert_eq!(scroll_target(true, true, -50.0), None);
        assert_eq!(scroll_target(false, true, -50.0), None);
    }

    #[test]
    fn test_scroll_target_y() {
        assert_eq!(scroll_target_y(300.0, 1200.0, -50.0), 1450.0);
        assert_eq!(scroll_target_y(-20.0, 10.0, -50.0), 0.0);
    }
}
