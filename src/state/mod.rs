/// State management module
///
/// This module holds all gallery state, independent of any widget:
/// - Tiles and their visibility (tile.rs)
/// - Grid geometry (layout.rs)
/// - The selection dropdown (menu.rs)
/// - The gallery that ties them together (gallery.rs)

pub mod gallery;
pub mod layout;
pub mod menu;
pub mod tile;
