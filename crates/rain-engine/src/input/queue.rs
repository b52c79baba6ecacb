use serde::{Deserialize, Serialize};

/// Raw input from the host page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key was pressed. `key_code` follows DOM `keyCode` values.
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
    /// The drawable area changed size (window resize, fullscreen toggle).
    Resize { width: f32, height: f32 },
}

/// What the simulation is asked to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Restart the crossing at walking pace.
    Walk,
    /// Restart the crossing at running pace.
    Run,
    /// Stop the simulation.
    Terminate,
    /// Rebuild everything that depends on the viewport.
    Resize { width: f32, height: f32 },
}

/// Key codes for the discrete triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub walk: u32,
    pub run: u32,
    pub terminate: u32,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            walk: 87,      // W
            run: 82,       // R
            terminate: 27, // Escape
        }
    }
}

impl KeyBindings {
    /// Translate an input event. Unbound keys and key releases map to nothing.
    pub fn command_for(&self, event: &InputEvent) -> Option<Command> {
        match *event {
            InputEvent::KeyDown { key_code } if key_code == self.walk => Some(Command::Walk),
            InputEvent::KeyDown { key_code } if key_code == self.run => Some(Command::Run),
            InputEvent::KeyDown { key_code } if key_code == self.terminate => Some(Command::Terminate),
            InputEvent::Resize { width, height } => Some(Command::Resize { width, height }),
            _ => None,
        }
    }
}

/// A queue of input events.
/// The host pushes events as they arrive; the driver drains them once per frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
