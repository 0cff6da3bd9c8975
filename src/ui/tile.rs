use iced::widget::{button, container, image, text, Column};
use iced::{Alignment, Border, Color, Element, Theme};

use crate::config::TILE_COLOR;
use crate::state::tile::ImageTile;
use crate::Message;

/// One tile: thumbnail (unless hidden), name, and the Hide/Unhide toggle
pub fn view(tile: &ImageTile) -> Element<'_, Message> {
    let mut content = Column::new().spacing(4).align_x(Alignment::Center);

    if !tile.is_hidden() {
        let thumb = tile.thumbnail();
        content = content.push(
            image(thumb.handle.clone())
                .width(thumb.width as f32)
                .height(thumb.height as f32),
        );
    }

    content = content
        .push(text(tile.display_name()).size(14).color(Color::BLACK))
        .push(
            button(text(tile.toggle_label()).size(13))
                .padding([2, 10])
                .on_press(Message::ToggleTile(tile.id())),
        );

    container(content).padding(5).style(framed).into()
}

fn framed(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(TILE_COLOR.into()),
        border: Border {
            color: Color::BLACK,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..container::Style::default()
    }
}
