use iced::widget::{button, column, container, row, text, text_input, Column};
use iced::{event, window, Alignment, Element, Event, Length, Subscription, Task, Theme};
use rfd::AsyncFileDialog;
use std::path::PathBuf;

mod allocator;
mod ingest;
mod session;
mod state;
mod ui;

use ingest::{BatchOutcome, PendingBatch};
use session::Session;
use state::data::ImageFile;
use state::style::StyleConfig;
use ui::drop_zone::{self, DragDropZone, DropTarget};
use ui::grid::GridRenderer;
use ui::style_panel::{self, StyleChange};
use ui::Section;

/// Extensions offered by the slot file dialog
const IMAGE_EXTENSIONS: [&str; 9] = [
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff", "ico",
];

/// Main application state
struct CollageStudio {
    /// Photo slots and the grid that draws them
    session: Session<GridRenderer>,
    /// Drag-and-drop tracking for the window
    drop_zone: DragDropZone,
    /// Slideshow style settings
    style: StyleConfig,
    /// Active sidebar section
    section: Section,
    /// Text in the slot count field
    count_input: String,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked a sidebar entry
    SelectSection(Section),
    /// "−" next to the slot count
    Decrement,
    /// "+" next to the slot count, or "Add more"
    Increment,
    /// Slot count field edited
    CountInputChanged(String),
    /// Slot count field committed (Enter)
    CountInputSubmitted,
    /// User clicked a slot
    BrowseSlot(usize),
    /// File dialog for a slot closed
    FilesPicked(usize, Vec<PathBuf>),
    /// Cursor entered a slot
    SlotEntered(usize),
    /// Cursor left a slot
    SlotExited(usize),
    /// Files are being dragged over the window
    FileHovered,
    /// Drag left the window without dropping
    FilesHoveredLeft,
    /// One file of a drop gesture arrived
    FileDropped(PathBuf),
    /// The drop gesture is complete
    DropSettled,
    /// Background reads of a batch finished
    BatchRead(BatchOutcome),
    /// Style panel edit
    Style(StyleChange),
    /// Copy the style settings as JSON
    CopyStyle,
    /// Read style settings from the clipboard
    PasteStyle,
    /// Clipboard contents arrived
    StylePasted(Option<String>),
    /// Back to the default style
    ResetStyle,
}

impl CollageStudio {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let session = Session::new(GridRenderer::default());
        let count_input = session.store().count().to_string();

        log::info!("🎨 Collage Studio ready with {} slots", session.store().count());

        (
            CollageStudio {
                session,
                drop_zone: DragDropZone::new(),
                style: StyleConfig::default(),
                section: Section::default(),
                count_input,
                status: "Drop photos anywhere or click a slot.".to_string(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectSection(section) => {
                log::debug!("📑 Section: {}", section);
                self.section = section;
                Task::none()
            }
            Message::Decrement => {
                self.session.decrement();
                self.sync_count_input();
                Task::none()
            }
            Message::Increment => {
                self.session.increment();
                self.sync_count_input();
                Task::none()
            }
            Message::CountInputChanged(value) => {
                self.count_input = value;
                Task::none()
            }
            Message::CountInputSubmitted => {
                self.session.set_count_from_text(&self.count_input);
                self.sync_count_input();
                Task::none()
            }
            Message::BrowseSlot(index) => Task::perform(pick_images(), move |paths| {
                Message::FilesPicked(index, paths)
            }),
            Message::FilesPicked(index, paths) => {
                let files = image_files(paths);
                let batch = self.session.drop_at(index, files);
                self.begin(batch)
            }
            Message::SlotEntered(index) => {
                self.drop_zone.enter_slot(index);
                Task::none()
            }
            Message::SlotExited(index) => {
                self.drop_zone.leave_slot(index);
                Task::none()
            }
            Message::FileHovered => {
                self.drop_zone.drag_entered();
                Task::none()
            }
            Message::FilesHoveredLeft => {
                self.drop_zone.drag_left();
                Task::none()
            }
            Message::FileDropped(path) => {
                if self.drop_zone.file_dropped(path) {
                    // First file of the gesture: wait for the rest
                    Task::perform(drop_zone::settle_delay(), |_| Message::DropSettled)
                } else {
                    Task::none()
                }
            }
            Message::DropSettled => match self.drop_zone.settle() {
                Some(drop) => {
                    let batch = match drop.target {
                        DropTarget::Slot(index) => self.session.drop_at(index, drop.files),
                        DropTarget::Page => self.session.drop_anywhere(drop.files),
                    };
                    self.begin(batch)
                }
                None => {
                    self.status = "Only image files can be dropped.".to_string();
                    Task::none()
                }
            },
            Message::BatchRead(outcome) => {
                let summary = self.session.finish(outcome);
                self.status = if summary.failed > 0 {
                    format!(
                        "⚠️  Loaded {} images, {} could not be read.",
                        summary.loaded, summary.failed
                    )
                } else {
                    format!("✅ Loaded {} images.", summary.loaded)
                };
                Task::none()
            }
            Message::Style(change) => {
                style_panel::apply(&mut self.style, change);
                Task::none()
            }
            Message::CopyStyle => match self.style.to_json() {
                Ok(json) => {
                    self.status = "📋 Style settings copied to clipboard.".to_string();
                    iced::clipboard::write(json)
                }
                Err(e) => {
                    log::error!("❌ Failed to serialize style: {}", e);
                    self.status = format!("Could not copy settings: {}", e);
                    Task::none()
                }
            },
            Message::PasteStyle => iced::clipboard::read().map(Message::StylePasted),
            Message::StylePasted(contents) => {
                match contents.as_deref().map(StyleConfig::from_json) {
                    Some(Ok(style)) => {
                        self.style = style;
                        self.status = "📋 Style settings pasted.".to_string();
                    }
                    Some(Err(e)) => {
                        log::warn!("⚠️  Clipboard is not a style config: {}", e);
                        self.status = "Clipboard does not hold style settings.".to_string();
                    }
                    None => self.status = "Clipboard is empty.".to_string(),
                }
                Task::none()
            }
            Message::ResetStyle => {
                self.style = StyleConfig::default();
                Task::none()
            }
        }
    }

    /// Start the reads of an allocation, if it has any
    fn begin(&mut self, batch: Option<PendingBatch>) -> Task<Message> {
        // Batches may grow the slot count before any read finishes
        self.sync_count_input();

        match batch {
            Some(batch) => {
                self.status = format!("⏳ Loading {} images...", batch.len());
                Task::perform(batch.read(), Message::BatchRead)
            }
            None => Task::none(),
        }
    }

    fn sync_count_input(&mut self) {
        self.count_input = self.session.store().count().to_string();
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let sidebar: Column<Message> = Section::ALL
            .into_iter()
            .fold(column![text("Collage").size(28)], |col, section| {
                let style: fn(&Theme, button::Status) -> button::Style =
                    if section == self.section {
                        button::primary
                    } else {
                        button::secondary
                    };
                col.push(
                    button(text(section.to_string()))
                        .on_press(Message::SelectSection(section))
                        .style(style)
                        .width(Length::Fill)
                        .padding(10),
                )
            })
            .spacing(10)
            .padding(20)
            .width(Length::Fixed(180.0));

        let content = match self.section {
            Section::Images => self.images_view(),
            Section::Style => style_panel::view(&self.style),
        };

        row![
            sidebar,
            container(column![content, text(&self.status).size(16)].spacing(20))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(30),
        ]
        .into()
    }

    fn images_view(&self) -> Element<Message> {
        let count_controls = row![
            text("Photos").size(18),
            button(text("−")).on_press(Message::Decrement).padding(8),
            text_input("1-10", &self.count_input)
                .on_input(Message::CountInputChanged)
                .on_submit(Message::CountInputSubmitted)
                .width(Length::Fixed(60.0)),
            button(text("+")).on_press(Message::Increment).padding(8),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        column![
            text("Images").size(24),
            count_controls,
            self.session.renderer().view(self.drop_zone.highlighted()),
            button("Add more").on_press(Message::Increment).padding(10),
        ]
        .spacing(20)
        .into()
    }

    /// Window drag-and-drop events
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    env_logger::init();

    iced::application("Collage Studio", CollageStudio::update, CollageStudio::view)
        .subscription(CollageStudio::subscription)
        .theme(CollageStudio::theme)
        .centered()
        .run_with(CollageStudio::new)
}

/// Show the native image picker for a slot
async fn pick_images() -> Vec<PathBuf> {
    AsyncFileDialog::new()
        .set_title("Select Photos")
        .add_filter("Images", &IMAGE_EXTENSIONS)
        .pick_files()
        .await
        .map(|files| files.iter().map(|f| f.path().to_path_buf()).collect())
        .unwrap_or_default()
}

/// Keep only paths whose media type is an image type
fn image_files(paths: Vec<PathBuf>) -> Vec<ImageFile> {
    paths.into_iter().filter_map(ImageFile::from_path).collect()
}
