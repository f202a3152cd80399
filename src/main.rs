use iced::widget::image::Handle;
use iced::widget::{button, column, container, stack, text};
use iced::{alignment, Element, Length, Size, Task, Theme};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod loader;
mod state;
mod ui;

use config::AppConfig;
use loader::ImageLoader;
use state::data::Picture;
use state::gallery::GalleryStore;
use ui::ImageState;

/// Main application state
struct Gallery {
    /// Pictures plus search text and layout
    store: GalleryStore,
    /// Load state per picture URL
    images: HashMap<String, ImageState>,
    loader: ImageLoader,
    config: AppConfig,
    /// Source for the add button's random pictures
    rng: StdRng,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Search field edited
    SearchChanged(String),
    /// Switch between list and grid
    ToggleViewMode,
    /// Remove every picture
    ClearAll,
    /// Add button pressed
    AddRandom,
    /// A card was pressed
    Delete(Picture),
    /// Background load finished for a URL
    ImageLoaded(String, Result<PathBuf, String>),
}

impl Gallery {
    /// Create a new instance of the application
    fn new(config: AppConfig) -> (Self, Task<Message>) {
        let loader = ImageLoader::new(loader::thumbnail::default_cache_dir(), config.thumbnail_size);
        let store = GalleryStore::new();

        tracing::info!(
            pictures = store.len(),
            cache_dir = %loader.cache_dir().display(),
            "gallery initialized"
        );

        let mut gallery = Gallery {
            store,
            images: HashMap::new(),
            loader,
            config,
            rng: StdRng::from_entropy(),
        };
        let task = gallery.request_images();

        (gallery, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchChanged(search_text) => {
                self.store.set_search_text(search_text);
            }
            Message::ToggleViewMode => {
                self.store.toggle_view_mode();
                tracing::debug!(mode = ?self.store.view_mode(), "view mode changed");
            }
            Message::ClearAll => {
                let removed = self.store.len();
                self.store.clear_all();
                tracing::info!(removed, "gallery cleared");
            }
            Message::AddRandom => {
                let candidate = state::generator::random_picture(&mut self.rng);
                let (id, url) = (candidate.id, candidate.url.clone());

                if self.store.add(candidate) {
                    tracing::info!(id, %url, "picture added");
                    return self.request_images();
                }
                tracing::info!(id, %url, "picture rejected, id or url already present");
            }
            Message::Delete(picture) => {
                if self.store.delete(&picture) {
                    tracing::info!(id = picture.id, author = %picture.author, "picture deleted");
                }
            }
            Message::ImageLoaded(url, result) => {
                let image_state = match result {
                    Ok(path) => ImageState::Ready(Handle::from_path(path)),
                    Err(error) => {
                        tracing::warn!(%url, %error, "failed to load picture");
                        ImageState::Failed
                    }
                };
                self.images.insert(url, image_state);
            }
        }

        Task::none()
    }

    /// Start a load for every picture URL not seen before.
    ///
    /// Pictures often share a URL, so each URL is fetched once per session;
    /// failed URLs stay failed.
    fn request_images(&mut self) -> Task<Message> {
        let mut tasks = Vec::new();

        for picture in self.store.pictures() {
            if self.images.contains_key(&picture.url) {
                continue;
            }
            self.images
                .insert(picture.url.clone(), ImageState::Loading);

            let url = picture.url.clone();
            tasks.push(Task::perform(
                self.loader.clone().load(url.clone()),
                move |result| Message::ImageLoaded(url.clone(), result.map_err(|e| e.to_string())),
            ));
        }

        Task::batch(tasks)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let top_bar = ui::top_bar::view(self.store.search_text(), self.store.view_mode());

        let visible = self.store.visible();
        let body = if visible.is_empty() {
            ui::gallery_view::empty(self.store.is_empty())
        } else {
            ui::gallery_view::view(visible, self.store.view_mode(), &self.images, &self.config)
        };

        let add_button = container(
            button(text("+").size(28))
                .on_press(Message::AddRandom)
                .padding([6, 18]),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(16);

        stack![column![top_bar, body], add_button].into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.config.theme.to_theme()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("picture_gallery=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    init_tracing();

    let config = AppConfig::load();
    let window_size = Size::new(config.window_width, config.window_height);

    iced::application("Gallery", Gallery::update, Gallery::view)
        .theme(Gallery::theme)
        .window_size(window_size)
        .centered()
        .run_with(move || Gallery::new(config))
}
