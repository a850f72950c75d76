//! Interaction arbitration: the single-slot modal state machine that
//! decides which creature owns the screen, and the popup keyword callouts
//! shown while a detail view is open.
#![forbid(unsafe_code)]

mod modal;
mod popup;

pub use modal::{
    CreatureId, InteractionController, ModalEffect, ModalState, ProximityCandidate,
};
pub use popup::{PopupConfig, PopupDraw, PopupKeyword, PopupKeywordManager};
