use glyphsea_geom::Vec2;
use glyphsea_interact::ModalState;
use raylib::prelude::*;

use super::App;
use crate::event::Event;
use crate::view::ViewTransform;

impl App {
    /// Translates raw raylib input into queued intents. Pointer position is
    /// source-agnostic downstream of here; confirm/cancel are discrete
    /// signals whatever produced them (mouse click, key press).
    pub fn gather_input(&mut self, rl: &RaylibHandle, vt: &ViewTransform) {
        let mouse = rl.get_mouse_position();
        let screen = Vec2::new(mouse.x, mouse.y);
        if screen != self.session.pointer_screen {
            let world = vt.to_world(screen);
            self.queue.emit_now(Event::PointerMoved {
                x: world.x,
                y: world.y,
            });
            self.session.pointer_screen = screen;
        }

        // Keyboard: discrete confirm/cancel plus the size-scale control
        if rl.is_key_pressed(KeyboardKey::KEY_ENTER) {
            self.queue.emit_now(Event::ConfirmPressed);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
            self.queue.emit_now(Event::CancelPressed);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT_BRACKET) {
            self.queue.emit_now(Event::SizeScaleChanged { delta: -0.1 });
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT_BRACKET) {
            self.queue.emit_now(Event::SizeScaleChanged { delta: 0.1 });
        }
        if rl.is_key_pressed(KeyboardKey::KEY_F3) {
            self.queue.emit_now(Event::DebugToggled);
        }

        // Mouse: route clicks through last frame's modal geometry
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            match self.controller.state() {
                ModalState::Prompt(_) => {
                    use glyphsea_ui::HitRegion;
                    match self.prompt_layout.hit(mouse) {
                        HitRegion::Confirm => {
                            self.queue.emit_now(Event::ConfirmPressed);
                        }
                        HitRegion::Cancel => {
                            self.queue.emit_now(Event::CancelPressed);
                        }
                        _ => {}
                    }
                }
                ModalState::Detail(_) => {
                    if !self.close_bounds.is_degenerate() && self.close_bounds.contains(mouse) {
                        self.queue.emit_now(Event::CancelPressed);
                    }
                }
                ModalState::Idle => {}
            }
        }

        // Content watcher channel, drained once per tick. Reload a few
        // ticks later so editors that write twice trigger one pass.
        if self.content_event_rx.try_iter().next().is_some() {
            self.queue.emit_after(6, Event::ContentDirChanged);
        }
    }
}
