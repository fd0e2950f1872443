// module declaration
pub mod core;
pub mod compose;
pub mod tip_sheet;
pub mod ui_state;

// export App and related types
pub use self::core::{App, Focus};
