use iced::alignment::Horizontal;
use iced::widget::{container, horizontal_space, text, Column, Row, Space};
use iced::{Alignment, Color, Element, Length};

use super::tile;
use crate::config::{SCROLLBAR_WIDTH, SLOT_MARGIN, SLOT_WIDTH};
use crate::state::gallery::Gallery;
use crate::Message;

/// Width left for the grid inside a window `window_width` wide,
/// once the embedded scrollbar has taken its share
pub fn viewport_width(window_width: f32) -> f32 {
    (window_width - SCROLLBAR_WIDTH).max(0.0)
}

/// The centred tile grid.
///
/// Every row is framed by two fill-width spacers (the outer columns of
/// the layout), and short last rows are padded with empty slots so the
/// columns stay aligned.
pub fn view<'a>(gallery: &'a Gallery) -> Element<'a, Message> {
    let tiles = gallery.tiles();

    if tiles.is_empty() {
        return container(text("Add a folder to see its images here.").size(16).color(Color::WHITE))
            .width(Length::Fill)
            .padding(40)
            .align_x(Horizontal::Center)
            .into();
    }

    let rows = gallery.layout().rows().into_iter().map(|cells| -> Element<'a, Message> {
        let mut line = Row::new().align_y(Alignment::Start).push(horizontal_space());

        for cell in cells {
            line = line.push(match cell {
                Some(index) => slot(tile::view(&tiles[index])),
                None => Space::with_width(SLOT_WIDTH).into(),
            });
        }

        line.push(horizontal_space()).into()
    });

    Column::with_children(rows).width(Length::Fill).into()
}

fn slot(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(SLOT_WIDTH)
        .padding(SLOT_MARGIN)
        .align_x(Horizontal::Center)
        .into()
}
