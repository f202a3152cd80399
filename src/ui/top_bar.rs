use iced::widget::{button, column, horizontal_space, row, text_input};
use iced::{Alignment, Element, Length};

use crate::state::data::ViewMode;
use crate::Message;

/// Search field above a row with the layout toggle and the clear button
pub fn view(search_text: &str, view_mode: ViewMode) -> Element<'_, Message> {
    let search = text_input("Search by author", search_text)
        .on_input(Message::SearchChanged)
        .padding(10);

    // Label names the layout the button switches to
    let toggle_label = match view_mode {
        ViewMode::List => "Grid",
        ViewMode::Grid => "List",
    };

    let controls = row![
        button(toggle_label)
            .on_press(Message::ToggleViewMode)
            .padding(8),
        horizontal_space(),
        button("Clear all")
            .on_press(Message::ClearAll)
            .padding(8),
    ]
    .align_y(Alignment::Center);

    column![search, controls]
        .spacing(8)
        .padding(8)
        .width(Length::Fill)
        .into()
}
