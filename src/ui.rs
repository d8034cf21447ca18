// UI module root: split implementation into focused submodules under `ui/`

pub mod model;
pub mod render;
pub mod style;
pub mod update;

pub use model::{initial_model, Model, Source, Stage};
pub use render::{render, view};
pub use update::handle_update;

// Messages consumed by the update logic
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    KeyUp,
    KeyDown,
    KeyEnter,
    KeyBackspace,
    Rune(char),
}
