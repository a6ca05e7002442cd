//! Terminal front end.
//!
//! `view` reduces `App` to a plain description of what is visible, `ui`
//! paints that with ratatui, and `input` maps crossterm keys onto screen
//! actions.

pub mod view;
pub mod ui;
pub mod input;

pub use view::*;
pub use ui::*;
pub use input::*;
