//! Modal panel chrome: the centered prompt box, the detail view's title
//! and close affordance, and the dim overlay behind both.

use raylib::prelude::{Color, RaylibDraw, RaylibDrawHandle, Rectangle, Vector2};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl IRect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.x as f32
            && point.x <= (self.x + self.w) as f32
            && point.y >= self.y as f32
            && point.y <= (self.y + self.h) as f32
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    fn as_rl(&self) -> Rectangle {
        Rectangle::new(self.x as f32, self.y as f32, self.w as f32, self.h as f32)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitRegion {
    None,
    Confirm,
    Cancel,
    Close,
}

#[derive(Clone, Copy, Debug)]
pub struct ModalTheme {
    pub panel_w: i32,
    pub panel_h: i32,
    pub padding_top: i32,
    pub padding_bottom: i32,
    pub button_w: i32,
    pub button_h: i32,
    pub close_w: i32,
    pub close_h: i32,
    pub message_font: i32,
    pub button_font: i32,
    pub title_font: i32,
    pub panel_fill: Color,
    pub panel_border: Color,
    pub message_text: Color,
    pub confirm_fill: Color,
    pub cancel_fill: Color,
    pub button_text: Color,
    pub close_fill: Color,
    pub close_border: Color,
    pub title_text: Color,
    pub title_outline: Color,
    pub dim_overlay: Color,
    pub dim_overlay_detail: Color,
}

impl Default for ModalTheme {
    fn default() -> Self {
        Self {
            panel_w: 300,
            panel_h: 160,
            padding_top: 35,
            padding_bottom: 40,
            button_w: 100,
            button_h: 30,
            close_w: 140,
            close_h: 35,
            message_font: 16,
            button_font: 12,
            title_font: 24,
            panel_fill: Color::new(20, 40, 60, 240),
            panel_border: Color::new(100, 150, 200, 255),
            message_text: Color::new(200, 220, 255, 255),
            confirm_fill: Color::new(60, 120, 180, 255),
            cancel_fill: Color::new(80, 100, 120, 255),
            button_text: Color::WHITE,
            close_fill: Color::new(0, 208, 255, 240),
            close_border: Color::new(0, 208, 255, 255),
            title_text: Color::new(200, 220, 255, 255),
            title_outline: Color::new(20, 40, 80, 200),
            dim_overlay: Color::new(0, 0, 0, 150),
            dim_overlay_detail: Color::new(0, 0, 0, 180),
        }
    }
}

/// Prompt geometry for one screen size: panel plus both buttons.
#[derive(Clone, Copy, Debug, Default)]
pub struct PromptLayout {
    pub panel: IRect,
    pub confirm: IRect,
    pub cancel: IRect,
}

impl PromptLayout {
    pub fn hit(&self, point: Vector2) -> HitRegion {
        if self.confirm.contains(point) {
            HitRegion::Confirm
        } else if self.cancel.contains(point) {
            HitRegion::Cancel
        } else {
            HitRegion::None
        }
    }
}

pub struct ModalChrome;

impl ModalChrome {
    pub fn layout_prompt(theme: &ModalTheme, screen_w: i32, screen_h: i32) -> PromptLayout {
        let panel = IRect::new(
            (screen_w - theme.panel_w) / 2,
            (screen_h - theme.panel_h) / 2,
            theme.panel_w,
            theme.panel_h,
        );
        let btn_y = panel.y + panel.h - theme.padding_bottom - 20;
        let confirm = IRect::new(
            panel.x + panel.w / 2 - theme.button_w - 10,
            btn_y,
            theme.button_w,
            theme.button_h,
        );
        let cancel = IRect::new(
            panel.x + panel.w / 2 + 10,
            btn_y,
            theme.button_w,
            theme.button_h,
        );
        PromptLayout {
            panel,
            confirm,
            cancel,
        }
    }

    /// Dim layer between the scene and any modal surface.
    pub fn draw_dim_overlay(
        d: &mut RaylibDrawHandle,
        theme: &ModalTheme,
        screen_w: i32,
        screen_h: i32,
        detail: bool,
    ) {
        let tint = if detail {
            theme.dim_overlay_detail
        } else {
            theme.dim_overlay
        };
        d.draw_rectangle(0, 0, screen_w, screen_h, tint);
    }

    pub fn draw_prompt(
        d: &mut RaylibDrawHandle,
        theme: &ModalTheme,
        layout: &PromptLayout,
        message: &str,
        hover: HitRegion,
    ) {
        let p = layout.panel;
        d.draw_rectangle(p.x, p.y, p.w, p.h, theme.panel_fill);
        d.draw_rectangle_lines(p.x, p.y, p.w, p.h, theme.panel_border);

        let mut line_y = p.y + theme.padding_top;
        for line in message.lines() {
            let w = d.measure_text(line, theme.message_font);
            d.draw_text(
                line,
                p.x + (p.w - w) / 2,
                line_y,
                theme.message_font,
                theme.message_text,
            );
            line_y += theme.message_font + 6;
        }

        Self::draw_button(d, theme, layout.confirm, "View more", theme.confirm_fill, hover == HitRegion::Confirm);
        Self::draw_button(d, theme, layout.cancel, "Pass by", theme.cancel_fill, hover == HitRegion::Cancel);
    }

    fn draw_button(
        d: &mut RaylibDrawHandle,
        theme: &ModalTheme,
        rect: IRect,
        label: &str,
        fill: Color,
        hovered: bool,
    ) {
        let fill = if hovered {
            Color::new(
                fill.r.saturating_add(30),
                fill.g.saturating_add(30),
                fill.b.saturating_add(30),
                fill.a,
            )
        } else {
            fill
        };
        d.draw_rectangle(rect.x, rect.y, rect.w, rect.h, fill);
        d.draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, theme.panel_border);
        let w = d.measure_text(label, theme.button_font);
        d.draw_text(
            label,
            rect.x + (rect.w - w) / 2,
            rect.y + (rect.h - theme.button_font) / 2,
            theme.button_font,
            theme.button_text,
        );
    }

    /// Detail view title with a one-pixel outline for legibility.
    pub fn draw_title(d: &mut RaylibDrawHandle, theme: &ModalTheme, text: &str, cx: i32, y: i32) {
        let w = d.measure_text(text, theme.title_font);
        let x = cx - w / 2;
        for (ox, oy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            d.draw_text(text, x + ox, y + oy, theme.title_font, theme.title_outline);
        }
        d.draw_text(text, x, y, theme.title_font, theme.title_text);
    }

    /// Close affordance under a detail view; returns its bounds for
    /// hit-testing.
    pub fn draw_close_button(
        d: &mut RaylibDrawHandle,
        theme: &ModalTheme,
        cx: i32,
        center_y: i32,
        hovered: bool,
    ) -> IRect {
        let rect = IRect::new(
            cx - theme.close_w / 2,
            center_y - theme.close_h / 2,
            theme.close_w,
            theme.close_h,
        );
        let fill = if hovered {
            Color::new(90, 228, 255, 250)
        } else {
            theme.close_fill
        };
        d.draw_rectangle_rounded(rect.as_rl(), 0.35, 8, fill);
        d.draw_rectangle_rounded_lines(rect.as_rl(), 0.35, 8, theme.close_border);
        let label = "Collect & close";
        let w = d.measure_text(label, 14);
        d.draw_text(
            label,
            rect.x + (rect.w - w) / 2,
            rect.y + (rect.h - 14) / 2,
            14,
            theme.button_text,
        );
        rect
    }

    /// Rounded chip behind a popup phrase.
    pub fn draw_popup_chip(
        d: &mut RaylibDrawHandle,
        center: Vector2,
        text: &str,
        scale: f32,
        opacity: f32,
    ) {
        if opacity <= 0.0 || scale <= 0.0 {
            return;
        }
        let font = (14.0 * scale).max(1.0) as i32;
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0) as u8;
        let text_w = d.measure_text(text, font);
        let chip_w = text_w as f32 + 20.0 * scale;
        let chip_h = 24.0 * scale;
        let chip = Rectangle::new(
            center.x - chip_w / 2.0,
            center.y - chip_h / 2.0,
            chip_w,
            chip_h,
        );
        d.draw_rectangle_rounded(chip, 0.4, 8, Color::new(255, 255, 255, alpha));
        d.draw_text(
            text,
            (center.x - text_w as f32 / 2.0) as i32,
            (center.y - font as f32 / 2.0) as i32,
            font,
            Color::new(50, 100, 200, alpha),
        );
    }
}
