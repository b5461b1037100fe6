/// Photo slot grid
///
/// The grid only redraws from a snapshot taken in `render_all`, so
/// slots written mid-batch never show up before the batch completes.
use iced::widget::image::Handle;
use iced::widget::{column, container, image, mouse_area, text};
use iced::{Alignment, Background, Border, Color, ContentFit, Element, Length, Theme};
use iced_aw::Wrap;

use crate::state::slots::SlotStore;
use crate::Message;

/// Side length of a slot box in logical pixels
const SLOT_SIZE: f32 = 160.0;

/// Receives the render signal after every completed allocation
pub trait Renderer {
    /// Redraw all visible slots from `store`
    fn render_all(&mut self, store: &SlotStore);
}

/// What one slot shows
#[derive(Debug, Clone)]
pub enum SlotView {
    /// Upload placeholder
    Empty,
    /// A loaded photo
    Filled(Handle),
}

/// Renders the slots as a wrapping grid of boxes
#[derive(Debug, Default)]
pub struct GridRenderer {
    slots: Vec<SlotView>,
}

impl Renderer for GridRenderer {
    fn render_all(&mut self, store: &SlotStore) {
        self.slots = store
            .visible()
            .map(|slot| match slot {
                Some(data) => SlotView::Filled(data.handle.clone()),
                None => SlotView::Empty,
            })
            .collect();
    }
}

impl GridRenderer {
    /// Slots as of the last render
    pub fn slots(&self) -> &[SlotView] {
        &self.slots
    }

    /// Build the grid. `highlighted` is the slot files are dragged over.
    pub fn view(&self, highlighted: Option<usize>) -> Element<'_, Message> {
        let boxes: Vec<Element<'_, Message>> = self
            .slots()
            .iter()
            .enumerate()
            .map(|(index, slot)| slot_box(index, slot, highlighted == Some(index)))
            .collect();

        Wrap::with_elements(boxes)
            .spacing(12.0)
            .line_spacing(12.0)
            .into()
    }
}

/// One clickable drop target
fn slot_box(index: usize, slot: &SlotView, highlighted: bool) -> Element<'_, Message> {
    let content: Element<'_, Message> = match slot {
        SlotView::Filled(handle) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        SlotView::Empty => column![
            text("🖼️").size(32),
            text("Drop image here or click to upload").size(12),
        ]
        .spacing(8)
        .align_x(Alignment::Center)
        .into(),
    };

    let filled = matches!(slot, SlotView::Filled(_));
    let boxed = container(content)
        .width(SLOT_SIZE)
        .height(SLOT_SIZE)
        .center_x(SLOT_SIZE)
        .center_y(SLOT_SIZE)
        .style(move |theme: &Theme| slot_style(theme, filled, highlighted));

    mouse_area(boxed)
        .on_press(Message::BrowseSlot(index))
        .on_enter(Message::SlotEntered(index))
        .on_exit(Message::SlotExited(index))
        .into()
}

fn slot_style(theme: &Theme, filled: bool, highlighted: bool) -> container::Style {
    let palette = theme.extended_palette();

    let background = if highlighted {
        // Drag-over tint
        Color::from_rgb8(0x3a, 0x3a, 0x3a)
    } else {
        palette.background.weak.color
    };

    let border_color = if filled {
        palette.primary.strong.color
    } else {
        palette.background.strong.color
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: border_color,
            width: if filled { 1.0 } else { 2.0 },
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}
