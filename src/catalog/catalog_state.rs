//! Catalog controller state
//!
//! Holds the uploaded songs and the cards rendered for them. A new song
//! can only be submitted once the current one has a comment, and a
//! successful submission replaces the whole catalog with the new song.

use super::song::{MAX_RATING, SongId, SongIdGenerator, SongRecord};
use crate::error::CatalogError;

/// Catalog-wide submission state, derived from the records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogState {
    Empty,
    /// The latest song has no comment yet; submissions are blocked
    OpenSlotUncommented,
    /// The latest song has a comment; the next submission replaces it
    OpenSlotCommented,
}

/// Rendered view of one song
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongCard {
    pub id: SongId,
    pub title: String,
    pub artist: String,
    /// Selected marks for stars 1..=5
    pub stars: [bool; MAX_RATING as usize],
    pub comment: String,
}

impl SongCard {
    fn from_record(song: &SongRecord) -> Self {
        let mut card = Self {
            id: song.id,
            title: song.title.clone(),
            artist: song.artist.clone(),
            stars: [false; MAX_RATING as usize],
            comment: song.comment.clone(),
        };
        update_stars(&mut card, song.rating);
        card
    }

    /// Number of selected stars
    pub fn selected_stars(&self) -> usize {
        self.stars.iter().filter(|selected| **selected).count()
    }
}

/// Clear every selected mark, then mark stars 1..=rating
fn update_stars(card: &mut SongCard, rating: u8) {
    card.stars = [false; MAX_RATING as usize];
    for star in card.stars.iter_mut().take(rating as usize) {
        *star = true;
    }
}

#[derive(Debug, Default)]
pub struct CatalogController {
    songs: Vec<SongRecord>,
    cards: Vec<SongCard>,
    ids: SongIdGenerator,
}

impl CatalogController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CatalogState {
        match self.songs.last() {
            None => CatalogState::Empty,
            Some(song) if song.is_uncommented() => CatalogState::OpenSlotUncommented,
            Some(_) => CatalogState::OpenSlotCommented,
        }
    }

    pub fn songs(&self) -> &[SongRecord] {
        &self.songs
    }

    /// The most recently submitted song
    pub fn current(&self) -> Option<&SongRecord> {
        self.songs.last()
    }

    pub fn cards(&self) -> &[SongCard] {
        &self.cards
    }

    pub fn card(&self, id: SongId) -> Option<&SongCard> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Add a new song, replacing the catalog
    ///
    /// Both fields are trimmed and must be non-blank, and the current song
    /// (if any) must already have a comment. A rejection leaves the
    /// catalog untouched.
    pub fn submit(&mut self, title: &str, artist: &str) -> Result<SongId, CatalogError> {
        let title = title.trim();
        let artist = artist.trim();
        if title.is_empty() || artist.is_empty() {
            return Err(CatalogError::Validation);
        }

        if self.state() == CatalogState::OpenSlotUncommented {
            return Err(CatalogError::PendingComment);
        }

        let id = self.ids.next_id();
        self.songs.clear();
        self.songs.push(SongRecord::new(id, title, artist));
        log::debug!("Added song {} ({} - {})", id, title, artist);

        self.render_songs();
        Ok(id)
    }

    /// Rate a song and refresh only its star widget
    ///
    /// `value` is expected in 1..=5. Returns false for an unknown id.
    pub fn set_rating(&mut self, id: SongId, value: u8) -> bool {
        debug_assert!((1..=MAX_RATING).contains(&value), "rating out of range");
        let value = value.min(MAX_RATING);

        let Some(song) = self.songs.iter_mut().find(|song| song.id == id) else {
            return false;
        };
        song.rating = value;

        if let Some(card) = self.cards.iter_mut().find(|card| card.id == id) {
            update_stars(card, value);
        }
        true
    }

    /// Store `text` verbatim as the song's comment
    ///
    /// A blank comment reopens the uncommented state. Returns false for
    /// an unknown id.
    pub fn set_comment(&mut self, id: SongId, text: &str) -> bool {
        let Some(song) = self.songs.iter_mut().find(|song| song.id == id) else {
            return false;
        };
        song.comment = text.to_string();

        if let Some(card) = self.cards.iter_mut().find(|card| card.id == id) {
            card.comment = text.to_string();
        }
        true
    }

    /// Rebuild every card from the records
    pub fn render_songs(&mut self) {
        self.cards.clear();
        self.cards.extend(self.songs.iter().map(SongCard::from_record));
    }
}

#[cfg(test)]
#[path = "catalog_state_tests.rs"]
mod catalog_state_tests;
