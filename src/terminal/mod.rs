pub mod backend;

pub use backend::{
    CursorPos, Frame, KeyCode, KeyEvent, KeyModifiers, Terminal, TerminalEvent, TerminalSize,
};
