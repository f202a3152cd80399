/// Shared data structures for the gallery state
/// 
/// These structs represent the data model that flows between
/// the gallery store and the UI layer.

/// Represents a single picture in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Picture {
    /// Identifier, unique only as far as `GalleryStore::add` checks it
    pub id: i64,
    /// Author name shown as the card caption and matched by search
    pub author: String,
    /// Remote image location
    pub url: String,
}

impl Picture {
    pub fn new(id: i64, author: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            author: author.into(),
            url: url.into(),
        }
    }
}

/// How the visible pictures are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Single column, one card per row
    #[default]
    List,
    /// Adaptive multi-column grid
    Grid,
}

impl ViewMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::List => ViewMode::Grid,
            ViewMode::Grid => ViewMode::List,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_mode_is_list() {
        assert_eq!(ViewMode::default(), ViewMode::List);
    }

    #[test]
    fn test_toggled_flips_mode() {
        assert_eq!(ViewMode::List.toggled(), ViewMode::Grid);
        assert_eq!(ViewMode::Grid.toggled(), ViewMode::List);
    }

    #[test]
    fn test_pictures_compare_by_value() {
        let a = Picture::new(1, "Author 1", "https://example.com/a.jpg");
        let b = Picture::new(1, "Author 1", "https://example.com/a.jpg");
        let c = Picture::new(1, "Author 2", "https://example.com/a.jpg");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
