// Pointer tracking - turns raw terminal mouse reports into per-cell pointer events

use crate::dispatch::PointerEvent;
use crate::tui::layout::GridGeometry;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Remembers which cell the pointer is over and where the button went down
#[derive(Debug, Default, Clone)]
pub struct PointerTracker {
    hovered: Option<usize>,
    pressed_on: Option<usize>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget cell indices, e.g. after the grid was rebuilt
    pub fn forget(&mut self) {
        self.hovered = None;
        self.pressed_on = None;
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Translate one mouse report into the pointer events it implies, in order
    pub fn translate(
        &mut self,
        mouse: MouseEvent,
        geometry: Option<&GridGeometry>,
    ) -> Vec<(PointerEvent, Option<usize>)> {
        let target = geometry.and_then(|g| g.index_at(mouse.column, mouse.row));
        let mut events = Vec::new();

        match mouse.kind {
            // Hover follows the pointer whichever button is held
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.move_to(target, &mut events);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.move_to(target, &mut events);
                // Presses outside the grid do not arm drag drawing
                if target.is_some() {
                    events.push((PointerEvent::PointerDown, target));
                }
                self.pressed_on = target;
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.move_to(target, &mut events);
                events.push((PointerEvent::PointerUp, target));
                if target.is_some() && target == self.pressed_on {
                    events.push((PointerEvent::Click, target));
                }
                self.pressed_on = None;
            }
            _ => {}
        }

        events
    }

    fn move_to(&mut self, target: Option<usize>, events: &mut Vec<(PointerEvent, Option<usize>)>) {
        if target == self.hovered {
            return;
        }
        if let Some(previous) = self.hovered {
            events.push((PointerEvent::PointerLeave, Some(previous)));
        }
        if let Some(next) = target {
            events.push((PointerEvent::PointerEnter, Some(next)));
        }
        self.hovered = target;
    }
}
