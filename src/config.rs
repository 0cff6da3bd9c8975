/// Application-wide constants
///
/// There is no configuration file and nothing is persisted between
/// sessions; every tunable lives here.

use iced::Color;

/// Horizontal space reserved per tile, including its margins
pub const SLOT_WIDTH: f32 = 180.0;

/// Margin around a tile inside its slot
pub const SLOT_MARGIN: f32 = 10.0;

/// Thumbnails are shrunk to fit inside a square of this size
pub const THUMBNAIL_BOX: u32 = 150;

/// Width the selection menu is drawn with (also used to right-align it)
pub const MENU_WIDTH: f32 = 150.0;

/// Pixels scrolled per wheel notch or button event
pub const SCROLL_STEP: f32 = 40.0;

/// Width reserved for the gallery's vertical scrollbar
pub const SCROLLBAR_WIDTH: f32 = 10.0;

/// Window size at startup
pub const WINDOW_SIZE: (f32, f32) = (800.0, 600.0);

/// Label shown on the dropdown before anything is picked
pub const SELECT_PLACEHOLDER: &str = "Select Image";

/// Disabled entry shown when every tile is hidden
pub const NO_VISIBLE_IMAGES: &str = "No visible images";

// Toolbar geometry. The widgets are given these exact sizes so the
// dropdown trigger position can be derived without measuring.
pub const TOOLBAR_PADDING_X: f32 = 10.0;
pub const TOOLBAR_PADDING_Y: f32 = 5.0;
pub const ADD_BUTTON_WIDTH: f32 = 110.0;
pub const CHOOSE_LABEL_GAP: f32 = 20.0;
pub const CHOOSE_LABEL_WIDTH: f32 = 70.0;
pub const CHOOSE_LABEL_SPACING: f32 = 5.0;
pub const TRIGGER_WIDTH: f32 = 200.0;
pub const TOOLBAR_CONTROL_HEIGHT: f32 = 32.0;

/// Window chrome and toolbar background (#1F1F1F)
pub const CHROME_COLOR: Color = Color {
    r: 0x1F as f32 / 255.0,
    g: 0x1F as f32 / 255.0,
    b: 0x1F as f32 / 255.0,
    a: 1.0,
};

/// Gallery background (#00ADB5)
pub const GALLERY_COLOR: Color = Color {
    r: 0x00 as f32 / 255.0,
    g: 0xAD as f32 / 255.0,
    b: 0xB5 as f32 / 255.0,
    a: 1.0,
};

/// Tile background
pub const TILE_COLOR: Color = Color {
    r: 0.94,
    g: 0.94,
    b: 0.94,
    a: 1.0,
};
