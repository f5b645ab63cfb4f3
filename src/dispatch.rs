// Interaction dispatcher - decides whether a pointer event draws on its cell

use crate::mode::Mode;
use log::trace;

/// Pointer events delivered to a cell (or, for `PointerUp`, to the whole surface)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    PointerEnter,
    PointerLeave,
    Click,
    PointerDown,
    PointerUp,
}

/// Whether the primary pointer button is currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerState {
    pub pressed: bool,
}

/// Outcome of dispatching one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawDecision {
    Draw,
    Skip,
}

impl DrawDecision {
    pub fn should_draw(self) -> bool {
        self == DrawDecision::Draw
    }

    fn when(condition: bool) -> Self {
        if condition {
            DrawDecision::Draw
        } else {
            DrawDecision::Skip
        }
    }
}

/// Apply `event` to the pointer state and decide whether it draws in `mode`
pub fn dispatch(event: PointerEvent, mode: Mode, pointer: &mut PointerState) -> DrawDecision {
    let decision = match event {
        PointerEvent::PointerEnter => {
            DrawDecision::when(mode.draws_on_hover() || pointer.pressed)
        }
        // No transient hover effect to remove
        PointerEvent::PointerLeave => DrawDecision::Skip,
        PointerEvent::Click => DrawDecision::Draw,
        PointerEvent::PointerDown => {
            pointer.pressed = true;
            DrawDecision::when(mode == Mode::Click)
        }
        PointerEvent::PointerUp => {
            pointer.pressed = false;
            DrawDecision::Skip
        }
    };

    trace!(
        "{:?} in {:?} (pressed={}) -> {:?}",
        event,
        mode,
        pointer.pressed,
        decision
    );
    decision
}
