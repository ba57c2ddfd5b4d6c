// =============================================================================
// GAME.RS — Headless game state
//
// Owns the level, the player, the camera and the editor, and advances them
// one tick at a time. Windowing, drawing and audio live outside this crate:
// a front end feeds `InputState` in, calls `update`, then draws
// `render_list()` through `Camera::world_to_screen`.
// =============================================================================

use glam::Vec2;

use crate::camera::Camera;
use crate::config::GameConfig;
use crate::editor::MapEditor;
use crate::entity::{Bullet, Ship};
use crate::error::{GameResult, LevelError};
use crate::geometry::{Coords, Vector2};
use crate::input::{Action, ActionMap, InputState, default_bindings};
use crate::level::{Level, ResolvedTile};
use crate::save::SaveData;
use crate::starfield::Starfield;
use crate::tiles::TileRegistry;
use crate::ui::{LinesOverlay, MenuAction, OverlayFrame, pause_menu};

/// Name of the tile a fresh level is covered with.
pub const DEFAULT_GROUND: &str = "base:grass";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    /// Frozen with no overlay.
    Paused,
    /// Frozen with the pause menu open.
    Menu,
}

pub struct Game {
    pub config: GameConfig,
    pub registry: TileRegistry,
    pub level: Level,
    pub camera: Camera,
    pub player: Ship,
    pub bullets: Vec<Bullet>,
    pub editor: MapEditor,
    pub bindings: ActionMap<Action>,
    pub starfield: Starfield,
    pub overlay: LinesOverlay,
    state: GameState,
    /// Last known mouse position in screen pixels.
    cursor: Vec2,
    /// Cells whose sprites changed since the last `take_dirty`.
    dirty: Vec<(u32, u32)>,
    /// Tile the player stood on last tick, for walk messages.
    last_tile: Option<(i32, i32)>,
    /// Walk messages not yet collected by `take_messages`.
    messages: Vec<String>,
    quit_requested: bool,
}

impl Game {
    /// A game on a fresh level of `config.level_size`, covered in
    /// [`DEFAULT_GROUND`] when the registry has it.
    pub fn new(config: GameConfig, registry: TileRegistry) -> Self {
        let (w, h) = config.level_size;
        let mut level = Level::new(w, h);
        level.fill(registry.id_of(DEFAULT_GROUND));
        Self::with_level(config, registry, level)
    }

    /// A game on an existing level. The player starts at its centre.
    pub fn with_level(config: GameConfig, registry: TileRegistry, level: Level) -> Self {
        let center = Vector2::new(level.width() as f64 / 2.0, level.height() as f64 / 2.0);
        let editor = MapEditor::from_registry(&registry);
        let starfield = Starfield::new(config.star_seed.unwrap_or_else(rand::random), config.resolution);
        Self {
            config,
            registry,
            level,
            camera: Camera::new(center),
            player: Ship::new(Coords::at(center)),
            bullets: Vec::new(),
            editor,
            bindings: default_bindings(),
            starfield,
            overlay: LinesOverlay::new(),
            state: GameState::Playing,
            cursor: Vec2::ZERO,
            dirty: Vec::new(),
            last_tile: None,
            messages: Vec::new(),
            quit_requested: false,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn pause(&mut self) {
        if self.state == GameState::Playing {
            self.set_state(GameState::Paused);
        }
    }

    pub fn resume(&mut self) {
        self.set_state(GameState::Playing);
    }

    fn set_state(&mut self, state: GameState) {
        if self.state != state {
            log::info!("state {:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }

    /// Escape toggles between playing and the pause menu.
    pub fn toggle_menu(&mut self) {
        match self.state {
            GameState::Playing => self.set_state(GameState::Menu),
            GameState::Menu | GameState::Paused => self.set_state(GameState::Playing),
        }
    }

    // ── Input ────────────────────────────────────────────────────────────────

    /// Apply every bound action triggered in `input`. Held actions repeat
    /// each call; the rest fire once per press. A failing action (say, a
    /// load with no save yet) does not stop the others; the first error is
    /// returned once all have run.
    pub fn handle_input(&mut self, input: &InputState) -> GameResult<()> {
        self.cursor = Vec2::from(input.mouse_pos);

        let mut actions: Vec<Action> = self.bindings.actions().collect();
        actions.sort();

        if !self.bindings.is_held(Action::Thrust, input) {
            self.player.release_throttle();
        }

        let mut first_error = None;
        for action in actions {
            let fired = if action.is_continuous() {
                self.bindings.is_held(action, input)
            } else {
                self.bindings.is_pressed(action, input)
            };
            if !fired {
                continue;
            }
            if let Err(e) = self.apply(action) {
                log::warn!("{action:?} failed: {e}");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Perform one action. Gameplay actions are ignored unless playing;
    /// menu, editor and save actions always work.
    pub fn apply(&mut self, action: Action) -> GameResult<()> {
        let playing = self.state == GameState::Playing;
        match action {
            Action::Thrust if playing => self.player.thrust(self.config.thrust),
            Action::TurnLeft if playing => self.player.turn(-self.config.turn_rate),
            Action::TurnRight if playing => self.player.turn(self.config.turn_rate),
            Action::Shoot if playing => self.bullets.extend(self.player.shoot()),
            Action::Thrust | Action::TurnLeft | Action::TurnRight | Action::Shoot => {}
            Action::ToggleMenu => self.toggle_menu(),
            Action::ToggleEditor => {
                self.editor.toggle();
            }
            Action::SelectSlot(slot) => self.editor.select(slot as usize),
            Action::Save => self.save()?,
            Action::Load => self.load()?,
            Action::Click => {
                self.click(self.cursor)?;
            }
            Action::Erase => self.erase_at(self.cursor)?,
            Action::Pick => self.pick_at(self.cursor),
        }
        Ok(())
    }

    /// Left click at a screen position. With the menu open this presses the
    /// button underneath (returned); in edit mode it paints the selected tile.
    pub fn click(&mut self, screen: Vec2) -> GameResult<Option<MenuAction>> {
        self.cursor = screen;
        if self.state == GameState::Menu {
            let action = pause_menu(&self.config).action_at(screen);
            if let Some(action) = action {
                self.run_menu_action(action)?;
            }
            return Ok(action);
        }
        if self.editor.enabled {
            let Some((x, y)) = self.camera.screen_to_tile(screen, &self.config) else {
                return Ok(None);
            };
            let dirty = ignore_off_grid(self.editor.paint(&mut self.level, x, y))?;
            self.dirty.extend(dirty);
        }
        Ok(None)
    }

    /// Right click in edit mode: clear the cell under the cursor.
    pub fn erase_at(&mut self, screen: Vec2) -> GameResult<()> {
        if self.state == GameState::Menu || !self.editor.enabled {
            return Ok(());
        }
        let Some((x, y)) = self.camera.screen_to_tile(screen, &self.config) else {
            return Ok(());
        };
        let dirty = ignore_off_grid(self.editor.erase(&mut self.level, x, y))?;
        self.dirty.extend(dirty);
        Ok(())
    }

    /// Middle click in edit mode: put the tile under the cursor into the
    /// selected hotbar slot.
    pub fn pick_at(&mut self, screen: Vec2) {
        if self.state == GameState::Menu || !self.editor.enabled {
            return;
        }
        if let Some((x, y)) = self.camera.screen_to_tile(screen, &self.config) {
            self.editor.pick(&self.level, x, y);
        }
    }

    fn run_menu_action(&mut self, action: MenuAction) -> GameResult<()> {
        match action {
            MenuAction::Resume => self.resume(),
            MenuAction::Save => self.save()?,
            MenuAction::Load => self.load()?,
            MenuAction::Quit => {
                log::info!("quit requested");
                self.quit_requested = true;
            }
        }
        Ok(())
    }

    // ── Simulation ───────────────────────────────────────────────────────────

    /// Advance one tick of `dt` seconds. Entities only move while playing;
    /// the camera and the overlay animation keep going regardless.
    pub fn update(&mut self, dt: f32) {
        if self.state == GameState::Playing {
            self.player.update(self.config.max_velocity);
            for bullet in &mut self.bullets {
                bullet.update();
            }
            self.bullets.retain(|b| !b.dead);
            self.announce_tile();
        }
        self.camera.follow(self.player.coords.pos, dt as f64);
        self.camera.tick(dt);
        self.overlay.advance();
    }

    fn announce_tile(&mut self) {
        let here = self.player.tile_position();
        if self.last_tile == Some(here) {
            return;
        }
        self.last_tile = Some(here);
        let message = self
            .level
            .get(here.0, here.1)
            .and_then(|id| self.registry.get(id))
            .and_then(|t| t.walk_message.as_deref());
        if let Some(message) = message {
            log::info!("{message}");
            self.messages.push(message.to_owned());
        }
    }

    /// Drain the walk messages produced since the last call, oldest first.
    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    // ── Rendering hand-off ───────────────────────────────────────────────────

    /// Every occupied cell with its chosen sprites, row-major.
    pub fn render_list(&self) -> Vec<ResolvedTile> {
        self.level.resolve_all(&self.registry)
    }

    /// Where to draw the nine star textures behind the level.
    pub fn starfield_offsets(&self) -> [Vec2; 9] {
        self.starfield.blit_offsets(self.camera.position)
    }

    /// Speed lines for the current frame, if the ship is fast enough.
    pub fn overlay_frame(&self) -> Option<OverlayFrame> {
        self.overlay.current(self.player.velocity, self.config.max_velocity)
    }

    /// Drain the cells that need redrawing since the last call.
    pub fn take_dirty(&mut self) -> Vec<(u32, u32)> {
        let mut dirty = std::mem::take(&mut self.dirty);
        dirty.sort_unstable();
        dirty.dedup();
        dirty
    }

    // ── Save / load ──────────────────────────────────────────────────────────

    /// Write the single save slot at `config.save_path`.
    pub fn save(&self) -> GameResult<()> {
        let data = SaveData::capture(&self.level, &self.registry, self.camera.position, &self.player);
        data.write(&self.config.save_path)?;
        Ok(())
    }

    /// Replace the level, player and camera with the saved slot. On error
    /// the running game is left untouched.
    pub fn load(&mut self) -> GameResult<()> {
        let restored = SaveData::read(&self.config.save_path)
            .and_then(|data| Ok((data.restore_level(&self.registry)?, data)));
        let (level, data) = match restored {
            Ok(pair) => pair,
            Err(e) => {
                log::warn!("load failed, keeping current game: {e}");
                return Err(e.into());
            }
        };
        self.level = level;
        data.restore_player(&mut self.player);
        self.camera.jump_to(data.camera());
        self.bullets.clear();
        self.last_tile = None;
        self.messages.clear();
        self.dirty = (0..self.level.height())
            .flat_map(|y| (0..self.level.width()).map(move |x| (x, y)))
            .collect();
        Ok(())
    }
}

/// Clicks off the map are not errors; they just hit nothing.
fn ignore_off_grid(result: Result<Vec<(u32, u32)>, LevelError>) -> Result<Vec<(u32, u32)>, LevelError> {
    match result {
        Err(LevelError::OutOfBounds { x, y, .. }) => {
            log::debug!("click at ({x}, {y}) is off the map");
            Ok(Vec::new())
        }
        other => other,
    }
}
