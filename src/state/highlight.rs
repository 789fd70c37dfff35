#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Keyboard highlight over the current match list: nothing, or one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    None,
    Row(usize),
}

impl Highlight {
    pub fn index(self) -> Option<usize> {
        match self {
            Highlight::None => None,
            Highlight::Row(idx) => Some(idx),
        }
    }

    /// `-1` for no highlight, the row index otherwise.
    pub fn as_signed(self) -> isize {
        match self {
            Highlight::None => -1,
            Highlight::Row(idx) => idx as isize,
        }
    }

    /// Moves one row within `[0, len - 1]` without wrapping.
    ///
    /// Down from nothing lands on the first row; Up from nothing stays at the
    /// first row as well, since the move is clamped at zero.
    pub fn step(self, direction: Direction, len: usize) -> Self {
        if len == 0 {
            return Highlight::None;
        }
        let last = len - 1;
        let next = match (self.valid_for(len), direction) {
            (None, _) => 0,
            (Some(idx), Direction::Down) => (idx + 1).min(last),
            (Some(idx), Direction::Up) => idx.saturating_sub(1),
        };
        Highlight::Row(next)
    }

    /// The row if it addresses a list of `len` entries; out-of-range rows
    /// degrade to nothing.
    pub fn valid_for(self, len: usize) -> Option<usize> {
        self.index().filter(|idx| *idx < len)
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, Highlight};

    #[test]
    fn down_from_none_selects_first_row() {
        assert_eq!(Highlight::None.step(Direction::Down, 3), Highlight::Row(0));
    }

    #[test]
    fn up_from_none_clamps_at_first_row() {
        assert_eq!(Highlight::None.step(Direction::Up, 3), Highlight::Row(0));
    }

    #[test]
    fn does_not_wrap_at_either_end() {
        assert_eq!(Highlight::Row(2).step(Direction::Down, 3), Highlight::Row(2));
        assert_eq!(Highlight::Row(0).step(Direction::Up, 3), Highlight::Row(0));
    }

    #[test]
    fn empty_list_has_no_highlight() {
        assert_eq!(Highlight::Row(1).step(Direction::Down, 0), Highlight::None);
    }

    #[test]
    fn stale_row_degrades_to_none() {
        assert_eq!(Highlight::Row(4).valid_for(2), None);
        assert_eq!(Highlight::Row(4).step(Direction::Down, 2), Highlight::Row(0));
        assert_eq!(Highlight::None.as_signed(), -1);
        assert_eq!(Highlight::Row(3).as_signed(), 3);
    }
}
