use iced::Rectangle;
use log::{debug, info};

use super::layout::{layout, GridLayout};
use super::menu::{MenuEntry, SelectionMenu};
use super::tile::{ImageTile, TileId};
use crate::config::{MENU_WIDTH, SELECT_PLACEHOLDER};

/// The ordered tile collection plus its layout and selection state
#[derive(Debug)]
pub struct Gallery {
    /// Tiles in import order; only ever appended to
    tiles: Vec<ImageTile>,
    container_width: f32,
    layout: GridLayout,
    selected_name: String,
    /// The dropdown, while it is open
    menu: Option<SelectionMenu>,
}

impl Gallery {
    pub fn new(container_width: f32) -> Self {
        Gallery {
            tiles: Vec::new(),
            container_width,
            layout: layout(0, container_width),
            selected_name: SELECT_PLACEHOLDER.to_string(),
            menu: None,
        }
    }

    /// Append freshly imported tiles, renumbered after the existing ones,
    /// and relayout. Returns the number of tiles added.
    pub fn append(&mut self, tiles: Vec<ImageTile>) -> usize {
        let added = tiles.len();

        for tile in tiles {
            let tile = tile.with_id(TileId(self.tiles.len()));
            debug!("Added {} from {}", tile.display_name(), tile.source_path().display());
            self.tiles.push(tile);
        }

        self.relayout(self.container_width);
        added
    }

    /// Recompute the grid for a new container width
    pub fn relayout(&mut self, container_width: f32) {
        let previous = self.layout.columns;

        self.container_width = container_width;
        self.layout = layout(self.tiles.len(), container_width);

        if self.layout.columns != previous {
            info!("📐 Grid now {} columns wide", self.layout.columns);
        }
    }

    /// Hide or unhide one tile. Placement does not change, so no relayout.
    /// Returns false if no tile has that id.
    pub fn toggle(&mut self, id: TileId) -> bool {
        match self.tiles.iter_mut().find(|tile| tile.id() == id) {
            Some(tile) => {
                tile.toggle_visibility();
                true
            }
            None => false,
        }
    }

    /// Names of the tiles that are currently visible, in tile order
    #[cfg(test)]
    pub fn visible_names(&self) -> Vec<&str> {
        self.tiles
            .iter()
            .filter(|tile| !tile.is_hidden())
            .map(|tile| tile.display_name())
            .collect()
    }

    /// Rebuild the dropdown from the visible tiles and open it under `trigger`
    pub fn open_selection_menu(&mut self, trigger: Rectangle) -> &SelectionMenu {
        let menu = SelectionMenu::build(&self.tiles, trigger, MENU_WIDTH);
        debug!("Opening selection menu with {} entries", menu.entries.len());
        self.menu.insert(menu)
    }

    /// Pick an entry of the open menu and close it.
    /// Tile visibility is left untouched.
    pub fn select(&mut self, id: TileId) {
        let Some(menu) = self.menu.take() else {
            return;
        };

        let picked = menu.entries.into_iter().find_map(|entry| match entry {
            MenuEntry::Image { id: entry_id, name } if entry_id == id => Some(name),
            _ => None,
        });

        if let Some(name) = picked {
            debug!("Selected {}", name);
            self.selected_name = name;
        }
    }

    pub fn dismiss_menu(&mut self) {
        self.menu = None;
    }

    pub fn tiles(&self) -> &[ImageTile] {
        &self.tiles
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    #[cfg(test)]
    pub fn column_count(&self) -> usize {
        self.layout.columns
    }

    pub fn selected_name(&self) -> &str {
        &self.selected_name
    }

    pub fn menu(&self) -> Option<&SelectionMenu> {
        self.menu.as_ref()
    }
}
