use iced::widget::{button, container, mouse_area, text, Column};
use iced::{Border, Color, Element, Length, Padding, Theme};

use crate::config::{CHROME_COLOR, MENU_WIDTH, NO_VISIBLE_IMAGES};
use crate::state::menu::{MenuEntry, SelectionMenu};
use crate::Message;

/// The open dropdown, drawn over the whole window.
/// A press anywhere outside an entry dismisses it.
pub fn overlay(menu: &SelectionMenu) -> Element<'_, Message> {
    let entries = menu.entries.iter().map(entry);

    let panel = container(Column::with_children(entries).width(MENU_WIDTH)).style(panel_style);

    let positioned = container(panel)
        .padding(Padding {
            top: menu.origin.y,
            right: 0.0,
            bottom: 0.0,
            left: menu.origin.x,
        })
        .width(Length::Fill)
        .height(Length::Fill);

    mouse_area(positioned).on_press(Message::DismissMenu).into()
}

fn entry(entry: &MenuEntry) -> Element<'_, Message> {
    match entry {
        MenuEntry::Image { id, name } => button(text(name.as_str()).size(14))
            .width(Length::Fill)
            .style(button::text)
            .on_press(Message::EntrySelected(*id))
            .into(),
        // No on_press: rendered disabled
        MenuEntry::Placeholder => button(text(NO_VISIBLE_IMAGES).size(14))
            .width(Length::Fill)
            .style(button::text)
            .into(),
    }
}

fn panel_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(CHROME_COLOR.into()),
        border: Border {
            color: Color::from_rgb(0.5, 0.5, 0.5),
            width: 1.0,
            radius: 2.0.into(),
        },
        ..container::Style::default()
    }
}
