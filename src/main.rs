use std::path::PathBuf;

use iced::widget::scrollable::{AbsoluteOffset, Direction, Scrollbar, Viewport};
use iced::widget::{column, container, scrollable, stack};
use iced::{event, keyboard, mouse, window};
use iced::{Element, Event, Length, Size, Subscription, Task, Theme};
use log::{error, info, warn};
use rfd::FileDialog;

mod config;
mod error;
mod media;
mod state;
mod ui;

#[cfg(test)]
mod test_support;

use config::{CHROME_COLOR, GALLERY_COLOR, SCROLLBAR_WIDTH, SCROLL_STEP, WINDOW_SIZE};
use media::import::{load_folder, ImportReport};
use state::gallery::Gallery;
use state::tile::TileId;
use ui::grid::viewport_width;
use ui::scroll::{ScrollInput, ScrollState};
use ui::toolbar;

/// Main application state
struct ImageOrganizer {
    /// Tiles, layout and selection
    gallery: Gallery,
    /// Where the gallery viewport is scrolled to
    scroll: ScrollState,
    /// Status message to display to the user
    status: String,
    /// A folder import is in flight; only one runs at a time so tiles
    /// keep the order the folders were picked in
    importing: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the "Add Folder" button
    AddFolder,
    /// Background import finished
    ImportComplete(Result<ImportReport, String>),
    /// Window size changed; the grid follows its width
    WindowResized(Size),
    /// Hide/Unhide pressed on a tile
    ToggleTile(TileId),
    /// Dropdown trigger pressed
    OpenSelectionMenu,
    /// An entry of the dropdown was picked
    EntrySelected(TileId),
    /// Click outside the dropdown, or Escape
    DismissMenu,
    /// The gallery scrollable moved
    GridScrolled(Viewport),
    /// Wheel input the scrollable did not handle itself
    WheelScrolled(ScrollInput),
}

impl ImageOrganizer {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        info!("🎨 Image Organizer started");

        (
            ImageOrganizer {
                gallery: Gallery::new(viewport_width(WINDOW_SIZE.0)),
                scroll: ScrollState::default(),
                status: "Ready.".to_string(),
                importing: false,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AddFolder => {
                if self.importing {
                    return Task::none();
                }

                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select Folder with Images")
                    .pick_folder();

                // Cancelled
                let Some(folder_path) = folder else {
                    return Task::none();
                };

                return self.start_import(folder_path);
            }
            Message::ImportComplete(Ok(report)) => {
                self.importing = false;
                let failed = report.failed.len();
                let added = self.gallery.append(report.images);

                self.status = if failed == 0 {
                    format!("Imported {} images from {}.", added, report.folder.display())
                } else {
                    format!(
                        "Imported {} images from {}, skipped {} unreadable.",
                        added,
                        report.folder.display(),
                        failed
                    )
                };

                info!("📊 Import summary: {} added, {} skipped", added, failed);
            }
            Message::ImportComplete(Err(e)) => {
                self.importing = false;
                error!("❌ Import failed: {}", e);
                self.status = format!("Import failed: {}", e);
            }
            Message::WindowResized(size) => {
                self.gallery.relayout(viewport_width(size.width));
            }
            Message::ToggleTile(id) => {
                self.gallery.toggle(id);
            }
            Message::OpenSelectionMenu => {
                self.gallery.open_selection_menu(toolbar::trigger_bounds());
            }
            Message::EntrySelected(id) => {
                self.gallery.select(id);
            }
            Message::DismissMenu => {
                self.gallery.dismiss_menu();
            }
            Message::GridScrolled(viewport) => {
                self.scroll.sync(viewport);
            }
            Message::WheelScrolled(input) => {
                let y = self.scroll.apply(input.offset_change(SCROLL_STEP));
                return scrollable::scroll_to(gallery_scroll_id(), AbsoluteOffset { x: 0.0, y });
            }
        }

        Task::none()
    }

    /// Kick off the background import of `folder`.
    /// Refused while another import is still running.
    fn start_import(&mut self, folder: PathBuf) -> Task<Message> {
        if self.importing {
            warn!("Import already running, ignoring {}", folder.display());
            return Task::none();
        }

        self.importing = true;
        self.status = format!("Importing from {}...", folder.display());

        Task::perform(load_folder(folder), Message::ImportComplete)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let grid = scrollable(ui::grid::view(&self.gallery))
            .id(gallery_scroll_id())
            // Embedded, so the grid never sits under the scrollbar
            .direction(Direction::Vertical(
                Scrollbar::new()
                    .width(SCROLLBAR_WIDTH)
                    .scroller_width(SCROLLBAR_WIDTH)
                    .spacing(0.0),
            ))
            .on_scroll(Message::GridScrolled)
            .width(Length::Fill)
            .height(Length::Fill);

        let gallery = container(grid)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(GALLERY_COLOR.into()),
                ..container::Style::default()
            });

        let page = container(column![
            toolbar::view(self.gallery.selected_name(), &self.status, self.importing),
            gallery,
        ])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(CHROME_COLOR.into()),
            ..container::Style::default()
        });

        match self.gallery.menu() {
            Some(menu) => stack![page, ui::menu::overlay(menu)].into(),
            None => page.into(),
        }
    }

    /// Window resizes, stray wheel input and Escape
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, status, _window| match event {
            Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
            // The scrollable handles the wheel itself while hovered
            Event::Mouse(mouse::Event::WheelScrolled { delta }) if status == event::Status::Ignored => {
                Some(Message::WheelScrolled(ScrollInput::from_delta(delta)))
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Other(number))) => {
                ScrollInput::from_button(number).map(Message::WheelScrolled)
            }
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::DismissMenu),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn gallery_scroll_id() -> scrollable::Id {
    scrollable::Id::new("gallery")
}

fn main() -> iced::Result {
    env_logger::init();

    iced::application(
        "Image Organizer",
        ImageOrganizer::update,
        ImageOrganizer::view,
    )
    .subscription(ImageOrganizer::subscription)
    .theme(ImageOrganizer::theme)
    .window_size(Size::new(WINDOW_SIZE.0, WINDOW_SIZE.1))
    .centered()
    .run_with(ImageOrganizer::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tile::ImageTile;
    use crate::test_support::TempDir;
    use pretty_assertions::assert_eq;

    fn report(dir: &TempDir, folder: &str, names: &[&str]) -> ImportReport {
        let folder = dir.mkdir(folder);
        let images = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let path = folder.join(format!("{name}.png"));
                image::RgbImage::new(4, 4).save(&path).unwrap();
                ImageTile::create(TileId(i), path).unwrap()
            })
            .collect();

        ImportReport {
            folder,
            images,
            failed: Vec::new(),
        }
    }

    fn names(app: &ImageOrganizer) -> Vec<&str> {
        app.gallery.tiles().iter().map(|t| t.display_name()).collect()
    }

    #[test]
    fn test_second_import_waits_for_the_first() {
        let dir = TempDir::new("app-order");
        let (mut app, _) = ImageOrganizer::new();

        let _ = app.start_import(dir.path().join("big"));
        assert!(app.importing);

        // A second folder while the first is loading is refused
        let _ = app.start_import(dir.path().join("small"));
        assert!(app.status.contains("big"));

        // Pressing Add Folder again never reaches the dialog
        let _ = app.update(Message::AddFolder);
        assert!(app.importing);

        let _ = app.update(Message::ImportComplete(Ok(report(&dir, "big", &["a1", "a2"]))));
        assert!(!app.importing);
        assert_eq!(names(&app), vec!["a1", "a2"]);

        let _ = app.start_import(dir.path().join("small"));
        assert!(app.importing);
        let _ = app.update(Message::ImportComplete(Ok(report(&dir, "small", &["b1"]))));
        assert_eq!(names(&app), vec!["a1", "a2", "b1"]);
        assert_eq!(app.gallery.tiles()[2].id(), TileId(2));
    }

    #[test]
    fn test_failed_import_releases_the_guard() {
        let dir = TempDir::new("app-failed");
        let (mut app, _) = ImageOrganizer::new();

        let _ = app.start_import(dir.path().join("gone"));
        let _ = app.update(Message::ImportComplete(Err("cannot list folder".to_string())));

        assert!(!app.importing);
        assert!(app.status.starts_with("Import failed"));
    }

    #[test]
    fn test_resize_lays_out_inside_the_viewport() {
        let (mut app, _) = ImageOrganizer::new();

        let _ = app.update(Message::WindowResized(Size::new(720.0, 600.0)));
        assert_eq!(app.gallery.layout().columns, 3);

        let _ = app.update(Message::WindowResized(Size::new(730.0, 600.0)));
        assert_eq!(app.gallery.layout().columns, 4);
    }
}
