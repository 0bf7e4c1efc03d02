#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

/// Disclaimer overlay visibility for the current page view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Shown,
    /// Dismissed; the fade-out animation is running.
    FadingOut,
    Hidden,
}

impl OverlayState {
    /// Initial state from the stored acknowledgement.
    pub fn at_load(acknowledged: bool) -> Self {
        if acknowledged { Self::Hidden } else { Self::Shown }
    }

    /// Dismiss for this page view.
    ///
    /// Returns whether the acknowledgement must be persisted, which depends
    /// only on the "don't show again" checkbox.
    pub fn acknowledge(&mut self, dont_show_again: bool) -> bool {
        if *self == Self::Shown {
            *self = Self::FadingOut;
        }
        dont_show_again
    }

    /// The fade-out animation has completed.
    pub fn finish_fade(&mut self) {
        if *self == Self::FadingOut {
            *self = Self::Hidden;
        }
    }

    /// Whether the overlay occupies layout (`display: flex`).
    pub fn is_displayed(self) -> bool {
        self != Self::Hidden
    }

    pub fn is_fading(self) -> bool {
        self == Self::FadingOut
    }
}
