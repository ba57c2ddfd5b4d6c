// ── UI layout & pure helpers ─────────────────────────────────────────────────
//
// Only geometry lives here: where buttons sit and what a click hits. Drawing
// is the renderer's job.

use glam::Vec2;

use crate::config::GameConfig;
use crate::geometry::Vector2;

/// Height of the bitmap font in source pixels, before `ui_zoom`.
pub const FONT_HEIGHT: f32 = 8.0;

/// Returns `true` if pixel point `(px, py)` falls inside the rectangle
/// defined by origin `(rx, ry)` and size `(rw, rh)` using half-open intervals.
pub fn rect_contains(rx: f32, ry: f32, rw: f32, rh: f32, px: f32, py: f32) -> bool {
    px >= rx && px < rx + rw && py >= ry && py < ry + rh
}

/// Width in pixels of the filled part of a health bar. `health` is clamped
/// to `0..=max`; a zero `max` gives an empty bar.
pub fn health_bar_fill(health: u32, max: u32, bar_width: f32) -> f32 {
    if max == 0 {
        return 0.0;
    }
    health.min(max) as f32 / max as f32 * bar_width
}

// ── Menu actions ─────────────────────────────────────────────────────────────

/// What a pause-menu button does when pressed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Resume,
    Save,
    Load,
    Quit,
}

impl MenuAction {
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Resume => "Resume",
            MenuAction::Save => "Save",
            MenuAction::Load => "Load",
            MenuAction::Quit => "Quit",
        }
    }
}

// ── ButtonStack ──────────────────────────────────────────────────────────────

/// Screen rectangle of one laid-out button.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ButtonRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl ButtonRect {
    pub fn contains(&self, p: Vec2) -> bool {
        rect_contains(self.x, self.y, self.w, self.h, p.x, p.y)
    }
}

/// Vertical stack of equally sized buttons centred on `center`, separated by
/// `gap` pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonStack<A> {
    pub buttons: Vec<A>,
    pub center: Vec2,
    pub button_w: f32,
    pub button_h: f32,
    pub gap: f32,
    /// Scale applied to label text.
    pub ui_zoom: f32,
}

impl<A: Copy> ButtonStack<A> {
    pub fn new(buttons: Vec<A>, center: Vec2, config: &GameConfig) -> Self {
        Self {
            buttons,
            center,
            button_w: config.button_width,
            button_h: config.button_height,
            gap: config.button_gap,
            ui_zoom: config.ui_zoom,
        }
    }

    /// Total height of the stack; no trailing gap.
    pub fn height(&self) -> f32 {
        let n = self.buttons.len() as f32;
        if n == 0.0 {
            return 0.0;
        }
        n * self.button_h + (n - 1.0) * self.gap
    }

    pub fn layout(&self) -> Vec<ButtonRect> {
        let top = self.center.y - self.height() / 2.0;
        let left = self.center.x - self.button_w / 2.0;
        (0..self.buttons.len())
            .map(|i| ButtonRect {
                x: left,
                y: top + i as f32 * (self.button_h + self.gap),
                w: self.button_w,
                h: self.button_h,
            })
            .collect()
    }

    /// Index of the button under `point`. Gaps between buttons hit nothing.
    pub fn hit_test(&self, point: Vec2) -> Option<usize> {
        self.layout().iter().position(|r| r.contains(point))
    }

    /// The action bound to the button under `point`.
    pub fn action_at(&self, point: Vec2) -> Option<A> {
        self.hit_test(point).map(|i| self.buttons[i])
    }

    /// Where the label of button `index` goes: text `text_width` source
    /// pixels wide, scaled by `ui_zoom` and centred in the button.
    pub fn label_rect(&self, index: usize, text_width: f32) -> Option<ButtonRect> {
        let button = *self.layout().get(index)?;
        let w = text_width * self.ui_zoom;
        let h = FONT_HEIGHT * self.ui_zoom;
        Some(ButtonRect {
            x: button.x + (button.w - w) / 2.0,
            y: button.y + (button.h - h) / 2.0,
            w,
            h,
        })
    }
}

/// The pause menu: Resume, Save, Load, Quit centred on the window.
pub fn pause_menu(config: &GameConfig) -> ButtonStack<MenuAction> {
    let (w, h) = config.resolution;
    ButtonStack::new(
        vec![MenuAction::Resume, MenuAction::Save, MenuAction::Load, MenuAction::Quit],
        Vec2::new(w as f32 / 2.0, h as f32 / 2.0),
        config,
    )
}

// ── Speed lines overlay ──────────────────────────────────────────────────────

pub const OVERLAY_FRAMES: usize = 29;
pub const OVERLAY_ASSET_DIR: &str = "assets/overlays";

/// Opacity of the speed lines for a ship moving at `velocity` with a
/// per-axis cap of `max_velocity`: the speed as a fraction of the fastest
/// diagonal, minus 0.4. `None` when the lines should not be drawn.
pub fn overlay_opacity(velocity: Vector2, max_velocity: f64) -> Option<f32> {
    let top_speed = Vector2::new(max_velocity, max_velocity).length();
    if top_speed.is_nan() || top_speed <= 0.0 {
        return None;
    }
    let opacity = velocity.length() / top_speed - 0.4;
    (opacity > 0.0).then(|| opacity.min(1.0) as f32)
}

/// What to draw over the screen this frame.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayFrame {
    pub sprite: String,
    pub opacity: f32,
}

/// Animated full-screen speed lines, cycling through [`OVERLAY_FRAMES`]
/// sprites.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinesOverlay {
    frame: usize,
}

impl LinesOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Step to the next frame, wrapping after the last one.
    pub fn advance(&mut self) -> usize {
        self.frame = (self.frame + 1) % OVERLAY_FRAMES;
        self.frame
    }

    /// Sprite of the current frame; files are numbered from 1.
    pub fn sprite(&self) -> String {
        format!("{OVERLAY_ASSET_DIR}/lines-{:03}.png", self.frame + 1)
    }

    pub fn current(&self, velocity: Vector2, max_velocity: f64) -> Option<OverlayFrame> {
        let opacity = overlay_opacity(velocity, max_velocity)?;
        Some(OverlayFrame { sprite: self.sprite(), opacity })
    }
}
