use iced::{Point, Rectangle};

use super::tile::{ImageTile, TileId};

/// One line of the selection menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// A visible tile that can be picked
    Image { id: TileId, name: String },
    /// Disabled line shown when nothing is visible
    Placeholder,
}

/// Transient dropdown listing the currently visible tiles.
/// Built fresh every time it opens, never kept in sync afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionMenu {
    pub entries: Vec<MenuEntry>,
    /// Top-left corner of the menu in window coordinates
    pub origin: Point,
}

impl SelectionMenu {
    pub fn build(tiles: &[ImageTile], trigger: Rectangle, menu_width: f32) -> Self {
        let mut entries: Vec<MenuEntry> = tiles
            .iter()
            .filter(|tile| !tile.is_hidden())
            .map(|tile| MenuEntry::Image {
                id: tile.id(),
                name: tile.display_name().to_string(),
            })
            .collect();

        if entries.is_empty() {
            entries.push(MenuEntry::Placeholder);
        }

        SelectionMenu {
            entries,
            origin: menu_origin(trigger, menu_width),
        }
    }

    #[cfg(test)]
    pub fn names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                MenuEntry::Image { name, .. } => Some(name.as_str()),
                MenuEntry::Placeholder => None,
            })
            .collect()
    }
}

/// Where to put a `menu_width` wide menu so its right edge lines up
/// with the trigger's right edge, directly below the trigger.
pub fn menu_origin(trigger: Rectangle, menu_width: f32) -> Point {
    Point::new(
        (trigger.x + trigger.width - menu_width).max(0.0),
        trigger.y + trigger.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    #[test]
    fn test_origin_right_aligns() {
        let trigger = Rectangle::new(Point::new(215.0, 5.0), Size::new(200.0, 32.0));
        assert_eq!(menu_origin(trigger, 150.0), Point::new(265.0, 37.0));
    }

    #[test]
    fn test_origin_stays_inside_window() {
        let trigger = Rectangle::new(Point::new(10.0, 0.0), Size::new(100.0, 20.0));
        assert_eq!(menu_origin(trigger, 150.0), Point::new(0.0, 20.0));
    }

    #[test]
    fn test_empty_gallery_gets_placeholder() {
        let trigger = Rectangle::new(Point::ORIGIN, Size::new(200.0, 30.0));
        let menu = SelectionMenu::build(&[], trigger, 150.0);

        assert_eq!(menu.entries, vec![MenuEntry::Placeholder]);
        assert!(menu.names().is_empty());
    }
}
