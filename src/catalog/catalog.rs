// The catalog owns every document for the life of the process.
// Documents are never removed, so a MediaId stays valid once issued.

use std::cmp::Ordering;

use thiserror::Error;

use crate::document::{compare_media, Media, MediaError};
use crate::types::identifiers::MediaId;
use crate::types::listing::ListedMedia;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("No media with id {0}")]
    UnknownMedia(MediaId),
    #[error("Catalog is full at {0} entries")]
    Full(usize),
    #[error(transparent)]
    Media(#[from] MediaError),
}

#[derive(Debug, Default)]
pub struct Catalog {
    items: Vec<Box<dyn Media>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from documents in the given order.
    pub fn from_media<M: Media + 'static>(
        media: impl IntoIterator<Item = M>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Catalog::new();
        for item in media {
            catalog.push(Box::new(item))?;
        }
        Ok(catalog)
    }

    /// Fails once every `MediaId` is taken.
    pub fn push(&mut self, media: Box<dyn Media>) -> Result<MediaId, CatalogError> {
        let id = MediaId::try_from(self.items.len())
            .map_err(|_| CatalogError::Full(self.items.len()))?;
        self.items.push(media);
        Ok(id)
    }

    pub fn get(&self, id: MediaId) -> Option<&dyn Media> {
        self.items.get(id.index()).map(|m| m.as_ref())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Documents in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (MediaId, &dyn Media)> {
        self.items
            .iter()
            .zip(0u32..)
            .map(|(m, i)| (MediaId::new(i), m.as_ref()))
    }

    /// Add one rating to a document. Index membership is unaffected since
    /// ratings never touch content.
    pub fn rate(&mut self, id: MediaId, score: i32) -> Result<(), CatalogError> {
        let media = self
            .items
            .get_mut(id.index())
            .ok_or(CatalogError::UnknownMedia(id))?;
        media.add_rating(score)?;
        Ok(())
    }

    /// Strict ranking order: `compare_media`, then insertion order.
    ///
    /// Unknown ids sort after known ones.
    pub fn compare(&self, a: MediaId, b: MediaId) -> Ordering {
        let by_media = match (self.get(a), self.get(b)) {
            (Some(ma), Some(mb)) => compare_media(ma, mb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_media.then_with(|| a.cmp(&b))
    }

    pub fn sort_ids(&self, ids: &mut [MediaId]) {
        ids.sort_by(|a, b| self.compare(*a, *b));
    }

    /// Every document in insertion order, for picking one by id.
    pub fn listing(&self) -> Vec<ListedMedia> {
        self.iter()
            .map(|(id, media)| ListedMedia::from_media(id, media))
            .collect()
    }

    /// Every document, best ranked first.
    pub fn ranked(&self) -> Vec<ListedMedia> {
        let mut ids: Vec<MediaId> = self.iter().map(|(id, _)| id).collect();
        self.sort_ids(&mut ids);
        self.list(&ids)
    }

    pub(crate) fn list(&self, ids: &[MediaId]) -> Vec<ListedMedia> {
        ids.iter()
            .filter_map(|id| self.get(*id).map(|m| ListedMedia::from_media(*id, m)))
            .collect()
    }
}
