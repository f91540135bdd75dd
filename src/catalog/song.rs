//! Song records and id assignment

use std::fmt;

use chrono::Utc;

/// Highest star rating; 0 means unrated
pub const MAX_RATING: u8 = 5;

/// Identifier of a song record, unique and increasing within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SongId(pub u64);

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One uploaded song with its rating and comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRecord {
    pub id: SongId,
    pub title: String,
    pub artist: String,
    /// 0 (unrated) to `MAX_RATING`
    pub rating: u8,
    pub comment: String,
}

impl SongRecord {
    pub fn new(id: SongId, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            rating: 0,
            comment: String::new(),
        }
    }

    /// Whether the record still needs a comment
    pub fn is_uncommented(&self) -> bool {
        self.comment.trim().is_empty()
    }
}

/// Hands out song ids seeded from the wall clock in milliseconds
///
/// Two ids created within the same millisecond (or after the clock steps
/// back) are bumped so ids never repeat or decrease.
#[derive(Debug, Default)]
pub struct SongIdGenerator {
    last: u64,
}

impl SongIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> SongId {
        let now_ms = Utc::now().timestamp_millis().max(0) as u64;
        self.next_at(now_ms)
    }

    fn next_at(&mut self, now_ms: u64) -> SongId {
        let id = now_ms.max(self.last + 1);
        self.last = id;
        SongId(id)
    }
}
