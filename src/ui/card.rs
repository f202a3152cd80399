use iced::widget::{column, container, image, mouse_area, text};
use iced::{Alignment, ContentFit, Element, Length};

use super::ImageState;
use crate::state::data::Picture;
use crate::Message;

/// A picture above its author caption.
///
/// The whole card is the press target; pressing it deletes the picture.
pub fn view<'a>(
    picture: &'a Picture,
    image_state: Option<&'a ImageState>,
    image_height: f32,
    width: Length,
) -> Element<'a, Message> {
    let picture_area: Element<'a, Message> = match image_state {
        Some(ImageState::Ready(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(image_height))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(ImageState::Failed) => placeholder("Failed to load", image_height),
        Some(ImageState::Loading) | None => placeholder("Loading...", image_height),
    };

    let body = column![picture_area, text(picture.author.as_str()).size(16)]
        .spacing(8)
        .padding(8)
        .align_x(Alignment::Center);

    mouse_area(
        container(body)
            .width(width)
            .style(container::rounded_box),
    )
    .on_press(Message::Delete(picture.clone()))
    .into()
}

fn placeholder(label: &str, height: f32) -> Element<'_, Message> {
    container(text(label).size(14))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(height))
        .into()
}
