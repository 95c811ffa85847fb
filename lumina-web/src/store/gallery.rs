//! In-memory gallery store
//!
//! An ordered collection of published photos, newest first. The only
//! mutator is the upload workflow's publish step; filtering is pure.

use chrono::Utc;
use lumina_common::{Category, CategoryFilter, Photo};
use std::collections::VecDeque;
use uuid::Uuid;

/// Ordered photo collection, newest first
#[derive(Debug, Default)]
pub struct GalleryStore {
    photos: VecDeque<Photo>,
}

impl GalleryStore {
    /// Create an empty gallery
    pub fn new() -> Self {
        Self {
            photos: VecDeque::new(),
        }
    }

    /// Create a gallery seeded with the starter portfolio collection
    pub fn with_seed_photos() -> Self {
        let mut store = Self::new();
        // Prepend in reverse so the first seed ends up newest
        for (url, title, description, category) in SEED_PHOTOS.iter().rev() {
            store.insert(Photo {
                id: Uuid::new_v4(),
                url: (*url).to_string(),
                title: (*title).to_string(),
                description: (*description).to_string(),
                category: *category,
                date_added: Utc::now(),
            });
        }
        store
    }

    /// Prepend a photo (O(1))
    pub fn insert(&mut self, photo: Photo) {
        self.photos.push_front(photo);
    }

    /// Photos matching the filter, in stored (newest-first) order
    ///
    /// `All` returns the full contents. Does not mutate the store.
    pub fn filter(&self, filter: CategoryFilter) -> Vec<Photo> {
        match filter {
            CategoryFilter::All => self.photos.iter().cloned().collect(),
            CategoryFilter::Only(category) => self
                .photos
                .iter()
                .filter(|photo| photo.category == category)
                .cloned()
                .collect(),
        }
    }

    /// Number of photos in the gallery
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Iterate photos newest-first
    pub fn iter(&self) -> impl Iterator<Item = &Photo> {
        self.photos.iter()
    }
}

/// Starter collection shown before any upload
const SEED_PHOTOS: [(&str, &str, &str, Category); 6] = [
    (
        "https://picsum.photos/id/64/800/600",
        "Urban Solitude",
        "A quiet moment in the bustling city center, capturing the interplay of light and shadow.",
        Category::Portraits,
    ),
    (
        "https://picsum.photos/id/28/800/1200",
        "Misty Forest Path",
        "Morning fog rolling through the ancient pines.",
        Category::Landscapes,
    ),
    (
        "https://picsum.photos/id/250/800/600",
        "Geometric Waves",
        "Abstract patterns found in modern architecture.",
        Category::Abstract,
    ),
    (
        "https://picsum.photos/id/453/800/800",
        "The Concert",
        "Electric energy from the crowd during the summer festival.",
        Category::Events,
    ),
    (
        "https://picsum.photos/id/338/800/1000",
        "Fading Ember",
        "Close up abstract textures of autumn leaves.",
        Category::Abstract,
    ),
    (
        "https://picsum.photos/id/177/800/600",
        "The Traveler",
        "A candid shot during a backpacking trip across Europe.",
        Category::Portraits,
    ),
];
