//! Message types exchanged between the input, controller, and viewer tasks.

/// A discrete transition request for the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    /// Jump straight to a slide index. Not bounds-checked; see
    /// [`crate::carousel::Carousel::goto`].
    Goto(usize),
    StartAutoplay,
    StopAutoplay,
    ToggleAutoplay,
}

/// Raw pointer input as delivered by the host, fed to the gesture dispatcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    TouchStart { x: f64 },
    TouchMove { x: f64 },
    TouchEnd,
    MouseDown { x: f64 },
    MouseMove { x: f64 },
    MouseUp,
    /// The pointer left the widget bounds mid-drag. Treated like `MouseUp`.
    MouseLeave,
}

/// Arrow keys the carousel reacts to when keyboard control is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Right,
}

/// A click on one of the widget's chrome elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlClick {
    Previous,
    Next,
    /// Click on the indicator at this position.
    Indicator(usize),
}

/// Presentation state published after every transition.
///
/// `translate_percent` positions the slide strip (`-100` per slide index);
/// `indicators` carries one active flag per slide, position-matched.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub translate_percent: f64,
    pub indicators: Vec<bool>,
}
