use leptos::ev;
use leptos::prelude::*;
use leptos_use::{use_event_listener, use_window};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::sections::sections;

/// Height of the fixed header, subtracted from scroll targets so section
/// headings land below it.
pub const NAV_HEIGHT_PX: f64 = 80.0;

/// The horizontal reference line sections are tested against, measured from
/// the viewport top. Sits just below the fixed header.
pub const REFERENCE_LINE_PX: f64 = 100.0;

/// Scroll offset past which the header switches to its opaque style.
pub const SCROLLED_THRESHOLD_PX: f64 = 20.0;

/// Vertical extent of one section's landmark, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub id: &'static str,
    pub top: f64,
    pub bottom: f64,
}

/// First span (in document order) straddling the reference line. `None` when
/// nothing straddles it, e.g. scrolled above the first landmark; callers keep
/// their previous answer in that case.
pub fn active_span(
    spans: impl IntoIterator<Item = SectionSpan>,
    reference_line: f64,
) -> Option<&'static str> {
    spans
        .into_iter()
        .find(|span| span.top <= reference_line && span.bottom >= reference_line)
        .map(|span| span.id)
}

/// Document-relative scroll position that puts `landmark_top` (a viewport
/// coordinate) right below the fixed header. Clamped at the document top.
pub fn scroll_target(landmark_top: f64, page_offset: f64, nav_height: f64) -> f64 {
    (landmark_top + page_offset - nav_height).max(0.0)
}

/// Derives the active section from the viewport scroll position by sampling
/// landmark bounding boxes on every scroll and resize event. Sampling (rather
/// than an intersection observer) keeps the first-match-in-order rule exact
/// and deterministic.
#[derive(Clone, Copy)]
pub struct ScrollTracker {
    active: ReadSignal<&'static str>,
    offset: ReadSignal<f64>,
}

impl ScrollTracker {
    /// Registers the window listeners and takes an initial sample. Must be
    /// called during component setup; starts out reporting the first section.
    pub fn mount() -> Self {
        let (active, set_active) = signal(sections()[0].id);
        let (offset, set_offset) = signal(0.0_f64);

        let sample = move || {
            let doc = document();
            // Registry entries without a DOM landmark are skipped.
            let spans = sections().iter().filter_map(|section| {
                doc.get_element_by_id(section.id).map(|el| {
                    let rect = el.get_bounding_client_rect();
                    SectionSpan {
                        id: section.id,
                        top: rect.top(),
                        bottom: rect.bottom(),
                    }
                })
            });
            if let Some(id) = active_span(spans, REFERENCE_LINE_PX) {
                if active.get_untracked() != id {
                    set_active(id);
                }
            }
            let y = window().scroll_y().unwrap_or(0.0);
            if offset.get_untracked() != y {
                set_offset(y);
            }
        };

        // A new event simply re-runs the sample; there is no in-flight work
        // to cancel. Coalesced events are fine, only the settled state counts.
        let _ = use_event_listener(use_window(), ev::scroll, move |_| sample());
        let _ = use_event_listener(use_window(), ev::resize, move |_| sample());
        Effect::new(move |_| sample());

        Self { active, offset }
    }

    pub fn active_section(&self) -> ReadSignal<&'static str> {
        self.active
    }

    pub fn scroll_offset(&self) -> ReadSignal<f64> {
        self.offset
    }
}

/// Programmatic navigation to a section, with the fixed-header offset
/// applied. Also owns the mobile menu overlay state, which every navigation
/// closes.
#[derive(Clone, Copy)]
pub struct PageScroller {
    menu_open: RwSignal<bool>,
}

impl PageScroller {
    pub fn new() -> Self {
        Self {
            menu_open: RwSignal::new(false),
        }
    }

    pub fn menu_open(&self) -> RwSignal<bool> {
        self.menu_open
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    /// Smooth-scrolls so `id`'s landmark sits below the header. A registry id
    /// without a landmark in the DOM is a silent no-op; the menu overlay is
    /// closed either way. The tracker converges on `id` by itself once the
    /// animation settles.
    pub fn scroll_to(&self, id: &str) {
        self.menu_open.set(false);
        let Some(el) = document().get_element_by_id(id) else {
            return;
        };
        let page_offset = window().scroll_y().unwrap_or(0.0);
        let top = scroll_target(el.get_bounding_client_rect().top(), page_offset, NAV_HEIGHT_PX);
        Self::animate_to(top);
    }

    /// Back-to-top control for the brand link and footer.
    pub fn scroll_to_top(&self) {
        self.menu_open.set(false);
        Self::animate_to(0.0);
    }

    fn animate_to(top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&opts);
    }
}

impl Default for PageScroller {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(id: &'static str, top: f64, bottom: f64) -> SectionSpan {
        SectionSpan { id, top, bottom }
    }

    #[test]
    fn test_first_straddling_section_wins() {
        // Adjacent sections both touch the line at a shared boundary; the
        // earlier one in document order must win.
        let spans = vec![
            span("hero", -500.0, 100.0),
            span("about", 100.0, 700.0),
            span("skills", 700.0, 1300.0),
        ];
        assert_eq!(active_span(spans, REFERENCE_LINE_PX), Some("hero"));
    }

    #[test]
    fn test_section_straddling_reference_line_is_active() {
        let spans = vec![
            span("hero", -900.0, -300.0),
            span("about", -300.0, 80.0),
            span("skills", 80.0, 680.0),
        ];
        assert_eq!(active_span(spans, REFERENCE_LINE_PX), Some("skills"));
    }

    #[test]
    fn test_no_straddling_section_yields_none() {
        // Above the first landmark: previous state is retained by the caller.
        let spans = vec![span("about", 300.0, 900.0), span("contact", 900.0, 1500.0)];
        assert_eq!(active_span(spans, REFERENCE_LINE_PX), None);
        assert_eq!(active_span(Vec::new(), REFERENCE_LINE_PX), None);
    }

    #[test]
    fn test_exact_boundary_counts_as_straddling() {
        let spans = vec![span("about", 100.0, 100.0)];
        assert_eq!(active_span(spans, 100.0), Some("about"));
    }

    #[test]
    fn test_scroll_target_subtracts_nav_height() {
        // Landmark 2000px below the document top, viewport currently at 500.
        assert_eq!(scroll_target(1500.0, 500.0, NAV_HEIGHT_PX), 1920.0);
    }

    #[test]
    fn test_scroll_target_clamps_at_document_top() {
        assert_eq!(scroll_target(10.0, 0.0, NAV_HEIGHT_PX), 0.0);
        assert_eq!(scroll_target(-200.0, 50.0, NAV_HEIGHT_PX), 0.0);
    }

    #[test]
    fn test_scroll_target_is_stable_once_settled() {
        // After scrolling to a section, its landmark top sits at NAV_HEIGHT;
        // recomputing the target from there must not move the viewport.
        let settled = scroll_target(900.0, 0.0, NAV_HEIGHT_PX);
        assert_eq!(
            scroll_target(NAV_HEIGHT_PX, settled, NAV_HEIGHT_PX),
            settled
        );
    }
}
