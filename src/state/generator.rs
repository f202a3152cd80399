use rand::Rng;

use super::data::Picture;

/// Image used for every generated picture
pub const GENERATED_URL: &str = "https://avatarzo.ru/wp-content/uploads/podsolnuh.jpg";

/// Prefix of a generated author name, followed by a number
pub const GENERATED_AUTHOR_PREFIX: &str = "New author ";

/// Largest generated id (inclusive)
pub const MAX_GENERATED_ID: i64 = 1000;

/// Largest generated author number (inclusive)
pub const MAX_AUTHOR_NUMBER: u32 = 100;

/// Build a candidate picture for the add button.
///
/// The url never varies, so once one generated picture is in the gallery
/// every later candidate collides with it and `GalleryStore::add` rejects it.
pub fn random_picture<R: Rng + ?Sized>(rng: &mut R) -> Picture {
    let id = rng.gen_range(0..=MAX_GENERATED_ID);
    let number = rng.gen_range(0..=MAX_AUTHOR_NUMBER);

    Picture::new(
        id,
        format!("{}{}", GENERATED_AUTHOR_PREFIX, number),
        GENERATED_URL,
    )
}
