use glam::Vec2;
use tilegame::config::GameConfig;
use tilegame::geometry::Vector2;
use tilegame::ui::*;

// ── rect_contains ────────────────────────────────────────────────────────────

#[test]
fn rect_contains_is_half_open() {
    assert!(rect_contains(10.0, 10.0, 5.0, 5.0, 10.0, 10.0));
    assert!(rect_contains(10.0, 10.0, 5.0, 5.0, 14.9, 14.9));
    assert!(!rect_contains(10.0, 10.0, 5.0, 5.0, 15.0, 12.0));
    assert!(!rect_contains(10.0, 10.0, 5.0, 5.0, 12.0, 15.0));
    assert!(!rect_contains(10.0, 10.0, 5.0, 5.0, 9.9, 12.0));
}

// ── health_bar_fill ──────────────────────────────────────────────────────────

#[test]
fn health_bar_is_proportional() {
    assert_eq!(health_bar_fill(10, 20, 300.0), 150.0);
    assert_eq!(health_bar_fill(20, 20, 300.0), 300.0);
    assert_eq!(health_bar_fill(0, 20, 300.0), 0.0);
}

#[test]
fn health_bar_clamps_overflow_and_zero_max() {
    assert_eq!(health_bar_fill(50, 20, 300.0), 300.0);
    assert_eq!(health_bar_fill(5, 0, 300.0), 0.0);
}

// ── ButtonStack ──────────────────────────────────────────────────────────────

#[test]
fn pause_menu_has_four_actions_in_order() {
    let menu = pause_menu(&GameConfig::default());
    assert_eq!(
        menu.buttons,
        vec![MenuAction::Resume, MenuAction::Save, MenuAction::Load, MenuAction::Quit]
    );
    let labels: Vec<_> = menu.buttons.iter().map(|a| a.label()).collect();
    assert_eq!(labels, vec!["Resume", "Save", "Load", "Quit"]);
}

#[test]
fn stack_is_centered_on_window() {
    let cfg = GameConfig::default();
    let menu = pause_menu(&cfg);
    // 4 × 50 + 3 × 4 = 212
    assert_eq!(menu.height(), 212.0);
    let rects = menu.layout();
    assert_eq!(rects.len(), 4);
    assert_eq!(rects[0], ButtonRect { x: 300.0, y: 194.0, w: 200.0, h: 50.0 });
    assert_eq!(rects[1].y, 248.0);
    assert_eq!(rects[3].y + rects[3].h, 406.0);
}

#[test]
fn hit_test_finds_button_and_skips_gaps() {
    let menu = pause_menu(&GameConfig::default());
    assert_eq!(menu.hit_test(Vec2::new(400.0, 200.0)), Some(0));
    assert_eq!(menu.action_at(Vec2::new(400.0, 260.0)), Some(MenuAction::Save));
    // Gap between first and second button: y in [244, 248).
    assert_eq!(menu.hit_test(Vec2::new(400.0, 246.0)), None);
    assert_eq!(menu.hit_test(Vec2::new(10.0, 200.0)), None);
}

#[test]
fn empty_stack_has_no_height() {
    let stack: ButtonStack<MenuAction> = ButtonStack::new(vec![], Vec2::ZERO, &GameConfig::default());
    assert_eq!(stack.height(), 0.0);
    assert!(stack.layout().is_empty());
}

#[test]
fn labels_scale_with_ui_zoom_and_stay_centred() {
    let menu = pause_menu(&GameConfig::default());
    // 30 source pixels at ui_zoom 2 → 60 × 16 inside a 200 × 50 button.
    let label = menu.label_rect(0, 30.0).unwrap();
    assert_eq!(label, ButtonRect { x: 370.0, y: 211.0, w: 60.0, h: 16.0 });

    let big = pause_menu(&GameConfig { ui_zoom: 3.0, ..GameConfig::default() });
    assert_eq!(big.label_rect(0, 30.0).unwrap().w, 90.0);
    assert!(menu.label_rect(4, 30.0).is_none());
}

// ── LinesOverlay ─────────────────────────────────────────────────────────────

#[test]
fn overlay_hidden_when_slow() {
    assert_eq!(overlay_opacity(Vector2::ZERO, 3.0), None);
    // 1 / |(3, 3)| ≈ 0.24, under the 0.4 cut-off.
    assert_eq!(overlay_opacity(Vector2::new(1.0, 0.0), 3.0), None);
    assert_eq!(overlay_opacity(Vector2::new(5.0, 0.0), 0.0), None);
}

#[test]
fn overlay_opacity_grows_with_speed() {
    let full = overlay_opacity(Vector2::new(3.0, 3.0), 3.0).unwrap();
    assert!((full - 0.6).abs() < 1e-6, "got {full}");
    let half = overlay_opacity(Vector2::new(3.0, 0.0), 3.0).unwrap();
    assert!(half > 0.0 && half < full);
}

#[test]
fn overlay_cycles_through_frames() {
    let mut overlay = LinesOverlay::new();
    assert_eq!(overlay.sprite(), "assets/overlays/lines-001.png");
    assert_eq!(overlay.advance(), 1);
    for _ in 1..OVERLAY_FRAMES - 1 {
        overlay.advance();
    }
    assert_eq!(overlay.frame(), OVERLAY_FRAMES - 1);
    assert_eq!(overlay.sprite(), "assets/overlays/lines-029.png");
    assert_eq!(overlay.advance(), 0);

    let frame = overlay.current(Vector2::new(3.0, 3.0), 3.0).unwrap();
    assert_eq!(frame.sprite, "assets/overlays/lines-001.png");
    assert!(overlay.current(Vector2::ZERO, 3.0).is_none());
}
