/// Widgets for the gallery screen
///
/// - The search field and layout/clear controls (top_bar.rs)
/// - One picture with its caption (card.rs)
/// - List and grid layouts of cards (gallery_view.rs)

pub mod card;
pub mod gallery_view;
pub mod top_bar;

use iced::widget::image::Handle;

/// Load state of one picture URL
#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Ready(Handle),
    Failed,
}
