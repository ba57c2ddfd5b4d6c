// Headless demo: paints a pond with the editor, flies the ship around for a
// few seconds, prints the autotiled map and round-trips the save slot.
//
// Usage: tilegame [config.json]
use glam::Vec2;

use tilegame::config::GameConfig;
use tilegame::game::Game;
use tilegame::input::{Action, InputState, Key};
use tilegame::tiles::autotile::BorderVariant;
use tilegame::{GameResult, TileRegistry};

fn variant_glyph(variant: BorderVariant) -> char {
    match variant {
        BorderVariant::Center => '.',
        BorderVariant::CornerNw | BorderVariant::CornerNwWrap => '┘',
        BorderVariant::CornerNe => '└',
        BorderVariant::CornerSe => '┌',
        BorderVariant::CornerSw => '┐',
        BorderVariant::EdgeN | BorderVariant::EdgeNWide => '‾',
        BorderVariant::EdgeS | BorderVariant::EdgeSWide => '_',
        BorderVariant::EdgeE | BorderVariant::EdgeEWide => '[',
        BorderVariant::EdgeW => ']',
    }
}

/// One row per level row: `~` for water, `#` for stone, otherwise the
/// border glyph the grass tile resolved to.
fn draw_map(game: &Game) -> Vec<String> {
    let level = &game.level;
    (0..level.height() as i32)
        .map(|y| {
            (0..level.width() as i32)
                .map(|x| {
                    let Some(tile) = level.get(x, y).and_then(|id| game.registry.get(id)) else {
                        return ' ';
                    };
                    match tile.name.as_str() {
                        "base:water" => '~',
                        "base:earth" => ',',
                        "base:stone_wall" | "base:rock" => '#',
                        _ => {
                            let neighbors = level.surrounding_categories(&game.registry, x, y);
                            variant_glyph(tile.border_for(&neighbors).variant)
                        }
                    }
                })
                .collect()
        })
        .collect()
}

fn run() -> GameResult<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig {
            save_path: std::env::temp_dir().join("tilegame").join("save1.save"),
            ..GameConfig::default()
        },
    };
    log::info!("resolution {:?}, aspect {:.3}", config.resolution, config.aspect_ratio());

    let dt = config.tick_seconds();
    let mut game = Game::new(config, TileRegistry::builtin());

    // Paint a 3×2 pond plus a patch of earth through the editor, the same
    // way mouse clicks would.
    game.apply(Action::ToggleEditor)?;
    let tile_screen = |game: &Game, x: f64, y: f64| {
        game.camera.world_to_screen(tilegame::Vector2::new(x + 0.5, y + 0.5), &game.config)
    };
    game.apply(Action::SelectSlot(1))?;
    for (x, y) in [(3, 3), (4, 3), (5, 3), (3, 4), (4, 4), (5, 4)] {
        let at: Vec2 = tile_screen(&game, x as f64, y as f64);
        game.click(at)?;
    }
    game.apply(Action::SelectSlot(2))?;
    for (x, y) in [(7, 7), (8, 7)] {
        let at = tile_screen(&game, x as f64, y as f64);
        game.click(at)?;
    }
    game.apply(Action::ToggleEditor)?;
    let dirty = game.take_dirty();
    log::info!("{} cells need redrawing", dirty.len());

    for row in draw_map(&game) {
        println!("{row}");
    }

    // Fly for two seconds: thrust while turning, fire once a second.
    let mut input = InputState::new();
    input.press(Key::Up);
    input.press(Key::Right);
    for tick in 0..(2 * game.config.fps) {
        if tick % game.config.fps == 0 {
            input.press(Key::Space);
        }
        game.handle_input(&input)?;
        game.update(dt);
        input.release(Key::Space);
        input.clear_frame_state();
    }
    for message in game.take_messages() {
        println!("{message}");
    }
    if let Some(frame) = game.overlay_frame() {
        println!("speed lines {} at {:.2} opacity", frame.sprite, frame.opacity);
    }
    let pos = game.player.coords.pos;
    println!(
        "ship at ({:.2}, {:.2}) heading {:.1}°, {} bullets in flight",
        pos.x,
        pos.y,
        game.player.coords.rotation.to_degrees(),
        game.bullets.len()
    );

    game.save()?;
    game.load()?;
    println!("save slot {} round-tripped", game.config.save_path.display());
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
