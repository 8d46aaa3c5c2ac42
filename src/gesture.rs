//! Translates raw input into transition commands.
//!
//! Touch and mouse drags share one tracker; the only difference is that
//! mouse moves are ignored unless a press is active, because hosts deliver
//! hover moves with no button held. Discrete inputs (clicks, arrow keys) are
//! routed directly.

use crate::events::{ArrowKey, Command, ControlClick, PointerEvent};

/// Horizontal distance a drag must cover to commit one slide step.
pub const DRAG_THRESHOLD_PX: f64 = 50.0;

/// Direction of a committed drag step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

/// Per-gesture state for one input source.
#[derive(Debug)]
struct DragTracker {
    require_press: bool,
    dragging: bool,
    anchor_x: f64,
}

impl DragTracker {
    fn new(require_press: bool) -> Self {
        Self {
            require_press,
            dragging: false,
            anchor_x: 0.0,
        }
    }

    fn begin(&mut self, x: f64) {
        self.dragging = true;
        self.anchor_x = x;
    }

    /// Commits at most one step per move event, however far the pointer
    /// traveled. After a commit the anchor resnaps to the current position,
    /// so a continued drag fires one step per threshold crossed.
    fn update(&mut self, x: f64) -> Option<Step> {
        if self.require_press && !self.dragging {
            return None;
        }
        let diff = self.anchor_x - x;
        if diff.abs() <= DRAG_THRESHOLD_PX {
            return None;
        }
        self.anchor_x = x;
        Some(if diff > 0.0 {
            Step::Forward
        } else {
            Step::Backward
        })
    }

    fn end(&mut self) {
        self.dragging = false;
        self.anchor_x = 0.0;
    }
}

/// Routes pointer, key, and click input to carousel commands.
#[derive(Debug)]
pub struct GestureDispatcher {
    keyboard_control: bool,
    touch: DragTracker,
    mouse: DragTracker,
}

impl GestureDispatcher {
    pub fn new(keyboard_control: bool) -> Self {
        Self {
            keyboard_control,
            touch: DragTracker::new(false),
            mouse: DragTracker::new(true),
        }
    }

    /// Feed one raw pointer event; yields a command when a drag crosses the
    /// threshold. Sub-threshold moves and all start/end events yield nothing.
    pub fn pointer(&mut self, event: PointerEvent) -> Option<Command> {
        use PointerEvent::*;
        let step = match event {
            TouchStart { x } => {
                self.touch.begin(x);
                None
            }
            TouchMove { x } => self.touch.update(x),
            TouchEnd => {
                self.touch.end();
                None
            }
            MouseDown { x } => {
                self.mouse.begin(x);
                None
            }
            MouseMove { x } => self.mouse.update(x),
            // A drag that leaves the widget is cancelled, not completed.
            MouseUp | MouseLeave => {
                self.mouse.end();
                None
            }
        };
        step.map(|step| match step {
            Step::Forward => Command::Next,
            Step::Backward => Command::Previous,
        })
    }

    /// Arrow-key routing. Inert unless keyboard control was enabled.
    pub fn key(&self, key: ArrowKey) -> Option<Command> {
        if !self.keyboard_control {
            return None;
        }
        Some(match key {
            ArrowKey::Right => Command::Next,
            ArrowKey::Left => Command::Previous,
        })
    }

    pub fn click(&self, click: ControlClick) -> Command {
        match click {
            ControlClick::Previous => Command::Previous,
            ControlClick::Next => Command::Next,
            ControlClick::Indicator(i) => Command::Goto(i),
        }
    }
}
