/// User interface components
///
/// Views are plain functions from state to `Element`; all events come
/// back as `Message`s handled in `main.rs`.

pub mod grid;
pub mod menu;
pub mod scroll;
pub mod tile;
pub mod toolbar;
