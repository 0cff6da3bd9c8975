/// Wheel and trackpad input for the gallery viewport
///
/// Two conventions reach us: signed deltas in fixed notches (or raw
/// pixels from a trackpad), and a pair of discrete wheel buttons.
/// Both end up as a change of the vertical offset.
use iced::mouse::ScrollDelta;
use iced::widget::scrollable::Viewport;

/// Discrete wheel buttons (X11 buttons 4 and 5)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelButton {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollInput {
    /// Signed wheel notches, positive means up
    Notches(f32),
    /// Pixel-precise delta, positive means up
    Pixels(f32),
    Button(WheelButton),
}

impl ScrollInput {
    pub fn from_delta(delta: ScrollDelta) -> Self {
        match delta {
            ScrollDelta::Lines { y, .. } => ScrollInput::Notches(y),
            ScrollDelta::Pixels { y, .. } => ScrollInput::Pixels(y),
        }
    }

    /// Map an X11 style wheel button number; other buttons are not wheel input
    pub fn from_button(number: u16) -> Option<Self> {
        match number {
            4 => Some(ScrollInput::Button(WheelButton::Up)),
            5 => Some(ScrollInput::Button(WheelButton::Down)),
            _ => None,
        }
    }

    /// Change of the vertical offset, positive moves the content up
    pub fn offset_change(self, step: f32) -> f32 {
        match self {
            ScrollInput::Notches(n) => -n * step,
            ScrollInput::Pixels(p) => -p,
            ScrollInput::Button(WheelButton::Up) => -step,
            ScrollInput::Button(WheelButton::Down) => step,
        }
    }
}

/// Last known scroll position of the gallery
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    pub offset: f32,
    pub max_offset: f32,
}

impl ScrollState {
    /// Track what the scrollable reported
    pub fn sync(&mut self, viewport: Viewport) {
        self.offset = viewport.absolute_offset().y;
        self.max_offset = (viewport.content_bounds().height - viewport.bounds().height).max(0.0);
    }

    /// Apply a change and return the new, clamped offset
    pub fn apply(&mut self, change: f32) -> f32 {
        self.offset = (self.offset + change).clamp(0.0, self.max_offset);
        self.offset
    }
}
