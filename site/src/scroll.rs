//! Header backdrop state driven by the window scroll offset.
//!
//! The fixed header sits transparent over the hero visual and gains a
//! filled backdrop once the page scrolls past the fold. The rule is a
//! pure threshold comparison; [`HeaderScrollState`] wraps it in a small
//! reducer the page controller can feed raw scroll events.
//!
//! The reducer also owns the two lifecycle guarantees the page needs:
//! repaint only on an actual flip (scroll events arrive far more often
//! than the flag changes), and a hard stop after [`detach`] so a listener
//! that fires during teardown can't touch state the view no longer owns.
//!
//! [`detach`]: HeaderScrollState::detach

/// Scroll offset, in pixels, at which the header backdrop switches on.
pub const HEADER_BG_THRESHOLD_PX: f64 = 300.0;

/// Whether the header shows its filled backdrop at the given offset.
pub fn header_shows_backdrop(scroll_y: f64) -> bool {
    scroll_y >= HEADER_BG_THRESHOLD_PX
}

/// Reducer for the header backdrop flag.
///
/// One instance per mounted page: created from the offset at mount time,
/// fed every scroll event, detached on cleanup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderScrollState {
    shows_backdrop: bool,
    detached: bool,
}

impl HeaderScrollState {
    /// State for a freshly mounted page at the given scroll offset.
    ///
    /// Callers that can't read the offset yet pass `0.0`.
    pub fn new(scroll_y: f64) -> Self {
        Self {
            shows_backdrop: header_shows_backdrop(scroll_y),
            detached: false,
        }
    }

    /// Current backdrop flag.
    pub fn shows_backdrop(&self) -> bool {
        self.shows_backdrop
    }

    /// Feed one scroll event.
    ///
    /// Returns the new flag when the event flipped it, `None` when the
    /// state is unchanged or the reducer is detached. Callers repaint
    /// only on `Some`.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<bool> {
        if self.detached {
            return None;
        }

        let next = header_shows_backdrop(scroll_y);
        if next == self.shows_backdrop {
            return None;
        }

        self.shows_backdrop = next;
        Some(next)
    }

    /// Stop accepting scroll events. Idempotent.
    pub fn detach(&mut self) {
        self.detached = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_edge() {
        assert!(header_shows_backdrop(HEADER_BG_THRESHOLD_PX));
        assert!(!header_shows_backdrop(HEADER_BG_THRESHOLD_PX - 1.0));

        assert!(HeaderScrollState::new(300.0).shows_backdrop());
        assert!(!HeaderScrollState::new(299.0).shows_backdrop());
        assert!(!HeaderScrollState::new(0.0).shows_backdrop());
    }

    /// The shipped 2018 frontend updated the flag through a guarded
    /// toggle: compute `over_scroll = (threshold > offset)` and flip the
    /// stored flag to `!over_scroll` only when the two are equal. That
    /// rule is extensionally the direct assignment this reducer performs.
    /// Whenever stored and `over_scroll` differ, stored already equals
    /// `!over_scroll`, so all four combinations land on `!over_scroll`.
    #[test]
    fn matches_guarded_toggle_rule() {
        for stored in [false, true] {
            for over_scroll in [false, true] {
                let scroll_y = if over_scroll {
                    0.0
                } else {
                    HEADER_BG_THRESHOLD_PX
                };

                let toggled = if stored == over_scroll {
                    !over_scroll
                } else {
                    stored
                };
                assert_eq!(toggled, !over_scroll);

                let mut state = HeaderScrollState {
                    shows_backdrop: stored,
                    detached: false,
                };
                state.on_scroll(scroll_y);
                assert_eq!(state.shows_backdrop(), toggled);
            }
        }
    }

    #[test]
    fn reports_only_actual_flips() {
        let mut state = HeaderScrollState::new(0.0);

        assert_eq!(state.on_scroll(10.0), None);
        assert_eq!(state.on_scroll(299.9), None);
        assert_eq!(state.on_scroll(300.0), Some(true));
        assert_eq!(state.on_scroll(450.0), None);
        assert_eq!(state.on_scroll(120.0), Some(false));
        assert_eq!(state.on_scroll(0.0), None);
    }

    #[test]
    fn detached_ignores_scrolls() {
        let mut state = HeaderScrollState::new(0.0);
        state.detach();

        assert_eq!(state.on_scroll(1000.0), None);
        assert!(!state.shows_backdrop());

        // Idempotent
        state.detach();
        assert_eq!(state.on_scroll(1000.0), None);
    }

    #[test]
    fn detach_preserves_last_flag() {
        let mut state = HeaderScrollState::new(500.0);
        state.detach();

        assert_eq!(state.on_scroll(0.0), None);
        assert!(state.shows_backdrop());
    }
}
