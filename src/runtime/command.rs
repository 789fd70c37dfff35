use crate::state::highlight::Direction;
use crate::terminal::KeyEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAction {
    DeleteWordLeft,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Cancel,
    Submit,
    Move(Direction),
    InputKey(KeyEvent),
    TextAction(TextAction),
}
