// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/selection.rs
//
// Crop selection controller: pointer events to selector mutations.

use crate::domain::selection::{resize, BoundedRect, Handle, HitZone, Ratio, Rect};

/// Current pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    #[default]
    Idle,
    Dragging,
    Resizing(Handle),
}

/// Owns the selector and the gesture state driving it.
///
/// Positions are surface-local. Every move event is applied relative to the
/// previous one, so clamping at an edge never makes the selector jump when
/// the pointer comes back.
#[derive(Debug, Clone)]
pub struct SelectionController {
    rect: BoundedRect,
    mode: DragMode,
    anchor: Option<(f64, f64)>,
    hover: HitZone,
}

impl SelectionController {
    pub fn new(rect: BoundedRect) -> Self {
        Self {
            rect,
            mode: DragMode::Idle,
            anchor: None,
            hover: HitZone::Outside,
        }
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        let zone = self.rect.hit_test(x, y);
        self.hover = zone;
        self.mode = match zone {
            HitZone::Handle(handle) => DragMode::Resizing(handle),
            HitZone::Inside => DragMode::Dragging,
            HitZone::Outside => DragMode::Idle,
        };

        match zone.handle() {
            Some(handle) => log::debug!(
                "Resize via {} {} from {x},{y}",
                handle.compass(),
                if handle.is_corner() { "corner" } else { "edge" }
            ),
            None if zone == HitZone::Inside => log::debug!("Drag started at {x},{y}"),
            None => {}
        }
        self.anchor = (self.mode != DragMode::Idle).then_some((x, y));
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        match self.mode {
            DragMode::Idle => {
                self.hover = self.rect.hit_test(x, y);
            }
            DragMode::Dragging => {
                if let Some((ax, ay)) = self.anchor {
                    let (rx, ry) = self.rect.position();
                    self.rect.move_to(rx + (x - ax), ry + (y - ay));
                }
                self.anchor = Some((x, y));
            }
            DragMode::Resizing(handle) => {
                resize(&mut self.rect, handle, x, y);
                self.anchor = Some((x, y));
            }
        }
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) {
        self.end_gesture();
        self.hover = self.rect.hit_test(x, y);
    }

    /// Pointer left the surface: drop the gesture and any hover hint.
    pub fn pointer_leave(&mut self) {
        self.end_gesture();
        self.hover = HitZone::Outside;
    }

    /// Forget the hover hint without touching the gesture.
    pub fn clear_hover(&mut self) {
        self.hover = HitZone::Outside;
    }

    fn end_gesture(&mut self) {
        if self.mode != DragMode::Idle {
            log::debug!("Selection gesture ended: {:?}", self.rect.rect());
        }
        self.mode = DragMode::Idle;
        self.anchor = None;
    }

    pub fn rect(&self) -> Rect {
        self.rect.rect()
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.mode != DragMode::Idle
    }

    /// Zone the cursor should reflect: the active gesture while one is
    /// running, the last idle hit test otherwise.
    pub fn hover_zone(&self) -> HitZone {
        match self.mode {
            DragMode::Idle => self.hover,
            DragMode::Dragging => HitZone::Inside,
            DragMode::Resizing(handle) => HitZone::Handle(handle),
        }
    }

    pub fn bounded_rect(&self) -> &BoundedRect {
        &self.rect
    }

    pub fn bounded_rect_mut(&mut self) -> &mut BoundedRect {
        &mut self.rect
    }

    pub fn set_ratio(&mut self, ratio: Ratio) {
        self.rect.set_ratio(ratio.width(), ratio.height());
        self.rect.check_ratio();
    }

    /// Locking re-derives the size from the ratio; unlocking keeps it.
    pub fn set_ratio_locked(&mut self, locked: bool) {
        self.rect.set_ratio_locked(locked);
        if locked {
            self.rect.check_ratio();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(x: f64, y: f64, w: f64, h: f64) -> SelectionController {
        let mut rect = BoundedRect::new(800.0, 600.0, Ratio::default(), false);
        assert!(rect.place(x, y, w, h));
        SelectionController::new(rect)
    }

    #[test]
    fn press_inside_starts_drag() {
        let mut ctl = controller(100.0, 100.0, 200.0, 200.0);
        ctl.pointer_down(200.0, 200.0);
        assert_eq!(ctl.mode(), DragMode::Dragging);
        assert_eq!(ctl.hover_zone(), HitZone::Inside);
    }

    #[test]
    fn press_on_border_starts_resize() {
        let mut ctl = controller(100.0, 100.0, 200.0, 200.0);
        ctl.pointer_down(102.0, 102.0);
        assert_eq!(ctl.mode(), DragMode::Resizing(Handle::TopLeft));
    }

    #[test]
    fn press_outside_stays_idle() {
        let mut ctl = controller(100.0, 100.0, 200.0, 200.0);
        ctl.pointer_down(10.0, 10.0);
        assert_eq!(ctl.mode(), DragMode::Idle);
        ctl.pointer_move(50.0, 50.0);
        assert_eq!(ctl.rect(), Rect::new(100.0, 100.0, 200.0, 200.0));
    }

    #[test]
    fn drag_moves_incrementally() {
        let mut ctl = controller(100.0, 100.0, 200.0, 200.0);
        ctl.pointer_down(200.0, 200.0);
        ctl.pointer_move(230.0, 210.0);
        assert_eq!(ctl.rect(), Rect::new(130.0, 110.0, 200.0, 200.0));

        // Push past the left edge, then come back: no jump.
        ctl.pointer_move(0.0, 210.0);
        assert_eq!(ctl.rect().x, 0.0);
        ctl.pointer_move(20.0, 210.0);
        assert_eq!(ctl.rect().x, 20.0);
    }

    #[test]
    fn resize_follows_pointer() {
        let mut ctl = controller(0.0, 0.0, 50.0, 50.0);
        ctl.pointer_down(50.0, 50.0);
        assert_eq!(ctl.mode(), DragMode::Resizing(Handle::BottomRight));
        ctl.pointer_move(120.0, 80.0);
        assert_eq!(ctl.rect(), Rect::new(0.0, 0.0, 120.0, 80.0));
        ctl.pointer_up(120.0, 80.0);
        assert_eq!(ctl.mode(), DragMode::Idle);
        assert_eq!(ctl.hover_zone(), HitZone::Handle(Handle::BottomRight));
    }

    #[test]
    fn leave_cancels_gesture() {
        let mut ctl = controller(100.0, 100.0, 200.0, 200.0);
        ctl.pointer_down(200.0, 200.0);
        ctl.pointer_leave();
        assert!(!ctl.is_active());
        assert_eq!(ctl.hover_zone(), HitZone::Outside);
        ctl.pointer_move(400.0, 400.0);
        assert_eq!(ctl.rect(), Rect::new(100.0, 100.0, 200.0, 200.0));
    }

    #[test]
    fn idle_move_updates_hover_only() {
        let mut ctl = controller(100.0, 100.0, 200.0, 200.0);
        ctl.pointer_move(200.0, 103.0);
        assert_eq!(ctl.hover_zone(), HitZone::Handle(Handle::Top));
        assert_eq!(ctl.mode(), DragMode::Idle);
        assert_eq!(ctl.rect(), Rect::new(100.0, 100.0, 200.0, 200.0));
    }

    #[test]
    fn locking_ratio_reshapes() {
        let mut ctl = controller(0.0, 0.0, 200.0, 100.0);
        ctl.set_ratio(Ratio::new(1, 1).unwrap());
        assert_eq!(ctl.rect().width, 200.0);
        assert_eq!(ctl.rect().height, 100.0);

        ctl.set_ratio_locked(true);
        assert_eq!(ctl.rect(), Rect::new(0.0, 0.0, 200.0, 200.0));

        ctl.set_ratio_locked(false);
        assert_eq!(ctl.rect(), Rect::new(0.0, 0.0, 200.0, 200.0));
    }
}
