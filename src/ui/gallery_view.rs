use iced::widget::{container, scrollable, text, Column};
use iced::{Element, Length};
use iced_aw::Wrap;
use std::collections::HashMap;

use super::{card, ImageState};
use crate::config::AppConfig;
use crate::state::data::{Picture, ViewMode};
use crate::Message;

const SPACING: f32 = 8.0;

/// Lay out `pictures` as a single column or as a wrapping grid
pub fn view<'a>(
    pictures: Vec<&'a Picture>,
    view_mode: ViewMode,
    images: &'a HashMap<String, ImageState>,
    config: &AppConfig,
) -> Element<'a, Message> {
    let card_width = match view_mode {
        ViewMode::List => Length::Fill,
        ViewMode::Grid => Length::Fixed(config.grid_tile_width),
    };

    let cards: Vec<Element<'a, Message>> = pictures
        .into_iter()
        .map(|picture| {
            card::view(
                picture,
                images.get(&picture.url),
                config.image_height,
                card_width,
            )
        })
        .collect();

    let content: Element<'a, Message> = match view_mode {
        ViewMode::List => Column::with_children(cards).spacing(SPACING).into(),
        // Column count follows the window width
        ViewMode::Grid => Wrap::with_elements(cards)
            .spacing(SPACING)
            .line_spacing(SPACING)
            .into(),
    };

    scrollable(container(content).padding(SPACING).width(Length::Fill))
        .height(Length::Fill)
        .into()
}

/// Shown instead of the cards when nothing is visible
pub fn empty(store_is_empty: bool) -> Element<'static, Message> {
    let label = if store_is_empty {
        "No pictures"
    } else {
        "No matches"
    };

    container(text(label).size(18))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
