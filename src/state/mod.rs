pub mod highlight;
pub mod session;

pub use highlight::{Direction, Highlight};
pub use session::{
    COMMIT_KEY, Router, SearchPhase, SearchSession, Selection, SessionConfig,
};
