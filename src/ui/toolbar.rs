use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, horizontal_space, row, text, Space};
use iced::{Color, Element, Length, Point, Rectangle, Size, Theme};

use crate::config::{
    ADD_BUTTON_WIDTH, CHOOSE_LABEL_GAP, CHOOSE_LABEL_SPACING, CHOOSE_LABEL_WIDTH, CHROME_COLOR,
    TOOLBAR_CONTROL_HEIGHT, TOOLBAR_PADDING_X, TOOLBAR_PADDING_Y, TRIGGER_WIDTH,
};
use crate::Message;

/// Window-space bounds of the dropdown trigger.
/// Derived from the fixed toolbar geometry `view` lays out.
pub fn trigger_bounds() -> Rectangle {
    let x = TOOLBAR_PADDING_X
        + ADD_BUTTON_WIDTH
        + CHOOSE_LABEL_GAP
        + CHOOSE_LABEL_WIDTH
        + CHOOSE_LABEL_SPACING;

    Rectangle::new(
        Point::new(x, TOOLBAR_PADDING_Y),
        Size::new(TRIGGER_WIDTH, TOOLBAR_CONTROL_HEIGHT),
    )
}

/// Top bar: Add Folder, "Choosing:" and the dropdown trigger, then the status text.
/// "Add Folder" is disabled while an import is running.
pub fn view<'a>(selected_name: &'a str, status: &'a str, importing: bool) -> Element<'a, Message> {
    let add_folder = button(centered_label("Add Folder"))
        .width(ADD_BUTTON_WIDTH)
        .height(TOOLBAR_CONTROL_HEIGHT)
        .on_press_maybe((!importing).then_some(Message::AddFolder));

    let choosing = container(text("Choosing:").size(14).color(Color::WHITE))
        .width(CHOOSE_LABEL_WIDTH)
        .height(TOOLBAR_CONTROL_HEIGHT)
        .align_y(Vertical::Center);

    let trigger = button(centered_label(selected_name))
        .width(TRIGGER_WIDTH)
        .height(TOOLBAR_CONTROL_HEIGHT)
        .style(button::secondary)
        .on_press(Message::OpenSelectionMenu);

    let status = container(text(status).size(13).color(Color::from_rgb(0.7, 0.7, 0.7)))
        .height(TOOLBAR_CONTROL_HEIGHT)
        .align_y(Vertical::Center);

    let bar = row![
        add_folder,
        Space::with_width(CHOOSE_LABEL_GAP),
        choosing,
        Space::with_width(CHOOSE_LABEL_SPACING),
        trigger,
        horizontal_space(),
        status,
    ];

    container(bar)
        .padding([TOOLBAR_PADDING_Y, TOOLBAR_PADDING_X])
        .width(Length::Fill)
        .style(chrome)
        .into()
}

fn centered_label(label: &str) -> Element<'_, Message> {
    text(label)
        .size(14)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn chrome(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(CHROME_COLOR.into()),
        ..container::Style::default()
    }
}
