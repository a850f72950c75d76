pub mod panel;
pub mod text;

pub use panel::{
    HitRegion, IRect, ModalChrome, ModalTheme, PromptLayout,
};
pub use text::{UiTextMeasure, UiTextRenderer};
