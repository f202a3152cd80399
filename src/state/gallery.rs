use super::data::{Picture, ViewMode};
use super::filter::filter_by_author;

/// Image shared by every sample picture
pub const SAMPLE_URL: &str = "https://avatarzo.ru/wp-content/uploads/sinij-mak.jpg";

/// Number of pictures the gallery starts with
pub const SAMPLE_COUNT: i64 = 5;

/// The GalleryStore owns the picture collection and the UI state around it.
///
/// Insertion order is display order. Nothing here is persisted; a new store
/// starts from the sample set every session.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryStore {
    pictures: Vec<Picture>,
    search_text: String,
    view_mode: ViewMode,
}

impl Default for GalleryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryStore {
    /// Create a store holding the sample pictures, an empty search and list mode
    pub fn new() -> Self {
        Self {
            pictures: sample_pictures(),
            search_text: String::new(),
            view_mode: ViewMode::default(),
        }
    }

    /// All pictures in display order, ignoring the search text
    pub fn pictures(&self) -> &[Picture] {
        &self.pictures
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn len(&self) -> usize {
        self.pictures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pictures.is_empty()
    }

    /// Pictures matching the current search text
    pub fn visible(&self) -> Vec<&Picture> {
        filter_by_author(&self.pictures, &self.search_text)
    }

    /// Insert `picture` at the front unless an entry already uses its id or url.
    ///
    /// Returns `true` when the picture was inserted.
    pub fn add(&mut self, picture: Picture) -> bool {
        let exists = self
            .pictures
            .iter()
            .any(|p| p.url == picture.url || p.id == picture.id);
        if exists {
            return false;
        }

        self.pictures.insert(0, picture);
        true
    }

    /// Remove the first entry equal to `picture`.
    ///
    /// Returns `true` when something was removed.
    pub fn delete(&mut self, picture: &Picture) -> bool {
        match self.pictures.iter().position(|p| p == picture) {
            Some(index) => {
                self.pictures.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear_all(&mut self) {
        self.pictures.clear();
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }
}

/// The pictures a fresh gallery starts with
pub fn sample_pictures() -> Vec<Picture> {
    (0..SAMPLE_COUNT)
        .map(|i| Picture::new(i, format!("Author {}", i), SAMPLE_URL))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picture(id: i64, url: &str) -> Picture {
        Picture::new(id, format!("Someone {}", id), url)
    }

    #[test]
    fn test_new_store_has_samples() {
        let store = GalleryStore::new();

        assert_eq!(store.len(), 5);
        let ids: Vec<i64> = store.pictures().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        assert!(store.pictures().iter().all(|p| !p.author.is_empty()));
        assert!(store.pictures().iter().all(|p| p.url == SAMPLE_URL));
        assert_eq!(store.search_text(), "");
        assert_eq!(store.view_mode(), ViewMode::List);
    }

    #[test]
    fn test_add_inserts_at_front() {
        let mut store = GalleryStore::new();
        let new = picture(42, "https://example.com/42.jpg");

        assert!(store.add(new.clone()));
        assert_eq!(store.len(), 6);
        assert_eq!(store.pictures()[0], new);
    }

    #[test]
    fn test_add_same_picture_twice() {
        let mut store = GalleryStore::new();
        let new = picture(42, "https://example.com/42.jpg");

        assert!(store.add(new.clone()));
        let after_first = store.clone();

        assert!(!store.add(new));
        assert_eq!(store, after_first);
    }

    #[test]
    fn test_add_rejects_duplicate_url() {
        let mut store = GalleryStore::new();
        let before = store.len();

        assert!(store.add(picture(100, "https://example.com/x.jpg")));
        assert!(!store.add(picture(101, "https://example.com/x.jpg")));
        assert_eq!(store.len(), before + 1);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut store = GalleryStore::new();

        assert!(!store.add(picture(3, "https://example.com/other.jpg")));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_add_rejects_sample_url() {
        let mut store = GalleryStore::new();

        assert!(!store.add(picture(500, SAMPLE_URL)));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_add_to_empty_store() {
        let mut store = GalleryStore::new();
        store.clear_all();

        assert!(store.add(picture(3, SAMPLE_URL)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_removes_one_occurrence() {
        let mut store = GalleryStore::new();
        let target = store.pictures()[2].clone();

        assert!(store.delete(&target));
        assert_eq!(store.len(), 4);
        assert!(!store.pictures().contains(&target));

        assert!(!store.delete(&target));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_delete_only_first_equal_entry() {
        let mut store = GalleryStore::new();
        store.clear_all();
        // Bypass the add check to get value-equal entries
        let twin = picture(9, "https://example.com/9.jpg");
        store.pictures = vec![twin.clone(), picture(1, "u"), twin.clone()];

        assert!(store.delete(&twin));
        assert_eq!(store.pictures(), &[picture(1, "u"), twin]);
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut store = GalleryStore::new();
        let before = store.clone();

        assert!(!store.delete(&picture(999, "https://example.com/none.jpg")));
        assert_eq!(store, before);
    }

    #[test]
    fn test_clear_all() {
        let mut store = GalleryStore::new();
        store.clear_all();
        assert!(store.is_empty());

        store.clear_all();
        assert!(store.is_empty());
    }

    #[test]
    fn test_toggle_view_mode_twice() {
        let mut store = GalleryStore::new();
        let original = store.view_mode();

        store.toggle_view_mode();
        assert_eq!(store.view_mode(), ViewMode::Grid);

        store.toggle_view_mode();
        assert_eq!(store.view_mode(), original);
    }

    #[test]
    fn test_search_then_clear() {
        let mut store = GalleryStore::new();

        store.set_search_text("Author 2");
        let visible = store.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].author, "Author 2");

        store.clear_all();
        assert!(store.visible().is_empty());

        store.set_search_text("");
        assert!(store.visible().is_empty());
    }

    #[test]
    fn test_search_does_not_mutate_collection() {
        let mut store = GalleryStore::new();
        store.set_search_text("nobody");

        assert!(store.visible().is_empty());
        assert_eq!(store.len(), 5);
    }
}
