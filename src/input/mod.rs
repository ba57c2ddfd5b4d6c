use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Keys the game listens to. The windowing layer translates its own key
/// codes into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Digit(u8),
    S,
    L,
    E,
    Space,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// A key or mouse button that can trigger an [`ActionMap`] action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Key(Key),
    Mouse(MouseButton),
}

impl InputSource {
    /// Went down during the current frame.
    fn fired(self, input: &InputState) -> bool {
        match self {
            InputSource::Key(k) => input.is_key_pressed(k),
            InputSource::Mouse(b) => input.is_mouse_pressed(b),
        }
    }

    fn down(self, input: &InputState) -> bool {
        match self {
            InputSource::Key(k) => input.is_key_held(k),
            InputSource::Mouse(b) => input.is_mouse_held(b),
        }
    }
}

/// Keyboard and mouse state as of the current tick.
///
/// The windowing layer feeds events in through `press`/`release`/`click`
/// and calls [`InputState::clear_frame_state`] once the tick has consumed
/// them. "Pressed" and "released" sets only live for one tick; "held"
/// persists until the matching release.
#[derive(Debug, Default)]
pub struct InputState {
    keys_held: HashSet<Key>,
    keys_pressed: HashSet<Key>,
    keys_released: HashSet<Key>,
    buttons_held: HashSet<MouseButton>,
    buttons_pressed: HashSet<MouseButton>,
    /// Cursor in window pixels, top-left origin.
    pub mouse_pos: [f32; 2],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key down. Auto-repeat of an already held key is not a new press.
    pub fn press(&mut self, key: Key) {
        if self.keys_held.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    pub fn release(&mut self, key: Key) {
        if self.keys_held.remove(&key) {
            self.keys_released.insert(key);
        }
    }

    /// Mouse button down at `pos`.
    pub fn click(&mut self, button: MouseButton, pos: [f32; 2]) {
        self.mouse_pos = pos;
        if self.buttons_held.insert(button) {
            self.buttons_pressed.insert(button);
        }
    }

    pub fn unclick(&mut self, button: MouseButton) {
        self.buttons_held.remove(&button);
    }

    pub fn clear_frame_state(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
    }

    pub fn is_key_held(&self, key: Key) -> bool {
        self.keys_held.contains(&key)
    }

    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn is_key_released(&self, key: Key) -> bool {
        self.keys_released.contains(&key)
    }

    pub fn is_mouse_held(&self, button: MouseButton) -> bool {
        self.buttons_held.contains(&button)
    }

    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }
}

/// Binds game actions to any number of physical inputs.
#[derive(Debug, Clone)]
pub struct ActionMap<A> {
    bindings: HashMap<A, Vec<InputSource>>,
}

impl<A: Hash + Eq + Copy> ActionMap<A> {
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    pub fn bind(&mut self, action: A, source: InputSource) {
        let sources = self.bindings.entry(action).or_default();
        if !sources.contains(&source) {
            sources.push(source);
        }
    }

    fn any_source(&self, action: A, test: impl Fn(InputSource) -> bool) -> bool {
        self.bindings
            .get(&action)
            .is_some_and(|sources| sources.iter().copied().any(&test))
    }

    /// One of the action's inputs went down this tick.
    pub fn is_pressed(&self, action: A, input: &InputState) -> bool {
        self.any_source(action, |s| s.fired(input))
    }

    /// One of the action's inputs is down right now.
    pub fn is_held(&self, action: A, input: &InputState) -> bool {
        self.any_source(action, |s| s.down(input))
    }

    /// Every action with at least one binding, in no particular order.
    pub fn actions(&self) -> impl Iterator<Item = A> + '_ {
        self.bindings.keys().copied()
    }
}

impl<A: Hash + Eq + Copy> Default for ActionMap<A> {
    fn default() -> Self {
        Self::new()
    }
}

// ── Game actions ─────────────────────────────────────────────────────────────

/// Everything the player can ask the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// Held: accelerate forward.
    Thrust,
    /// Held: rotate.
    TurnLeft,
    TurnRight,
    Shoot,
    ToggleMenu,
    ToggleEditor,
    /// Pick hotbar slot 0–7.
    SelectSlot(u8),
    Save,
    Load,
    /// Left click: paint in edit mode or press a menu button.
    Click,
    /// Right click: erase in edit mode.
    Erase,
    /// Middle click: copy the tile under the cursor into the hotbar.
    Pick,
}

impl Action {
    /// Actions that repeat every tick while held rather than once per press.
    pub fn is_continuous(self) -> bool {
        matches!(self, Action::Thrust | Action::TurnLeft | Action::TurnRight)
    }
}

/// Arrow keys steer, Space shoots, 1–8 pick hotbar slots, S/L save and
/// load, E toggles the editor, Escape opens the menu. Mouse buttons paint,
/// pick and erase.
pub fn default_bindings() -> ActionMap<Action> {
    let mut map = ActionMap::new();
    map.bind(Action::Thrust, InputSource::Key(Key::Up));
    map.bind(Action::TurnLeft, InputSource::Key(Key::Left));
    map.bind(Action::TurnRight, InputSource::Key(Key::Right));
    map.bind(Action::Shoot, InputSource::Key(Key::Space));
    map.bind(Action::ToggleMenu, InputSource::Key(Key::Escape));
    map.bind(Action::ToggleEditor, InputSource::Key(Key::E));
    map.bind(Action::Save, InputSource::Key(Key::S));
    map.bind(Action::Load, InputSource::Key(Key::L));
    map.bind(Action::Click, InputSource::Mouse(MouseButton::Left));
    map.bind(Action::Erase, InputSource::Mouse(MouseButton::Right));
    map.bind(Action::Pick, InputSource::Mouse(MouseButton::Middle));
    for slot in 0..8u8 {
        map.bind(Action::SelectSlot(slot), InputSource::Key(Key::Digit(slot + 1)));
    }
    map
}
