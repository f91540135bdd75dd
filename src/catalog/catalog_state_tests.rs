//! Tests for the catalog controller

use super::*;
use proptest::prelude::*;

fn with_song(title: &str, artist: &str) -> (CatalogController, SongId) {
    let mut catalog = CatalogController::new();
    let id = catalog.submit(title, artist).unwrap();
    (catalog, id)
}

// =========================================================================
// Submission
// =========================================================================

#[test]
fn test_new_catalog_is_empty() {
    let catalog = CatalogController::new();
    assert_eq!(catalog.state(), CatalogState::Empty);
    assert!(catalog.songs().is_empty());
    assert!(catalog.cards().is_empty());
    assert!(catalog.current().is_none());
}

#[test]
fn test_blank_title_is_rejected() {
    let mut catalog = CatalogController::new();
    assert_eq!(catalog.submit("", "x"), Err(CatalogError::Validation));
    assert_eq!(catalog.state(), CatalogState::Empty);
}

#[test]
fn test_blank_artist_is_rejected() {
    let mut catalog = CatalogController::new();
    assert_eq!(catalog.submit("x", ""), Err(CatalogError::Validation));
    assert_eq!(catalog.submit("x", "   "), Err(CatalogError::Validation));
    assert_eq!(catalog.state(), CatalogState::Empty);
}

#[test]
fn test_submit_creates_open_record() {
    let (catalog, id) = with_song("  Imagine ", "John Lennon  ");

    assert_eq!(catalog.state(), CatalogState::OpenSlotUncommented);
    let song = catalog.current().unwrap();
    assert_eq!(song.id, id);
    assert_eq!(song.title, "Imagine");
    assert_eq!(song.artist, "John Lennon");
    assert_eq!(song.rating, 0);
    assert_eq!(song.comment, "");
    assert_eq!(catalog.cards().len(), 1);
}

#[test]
fn test_submit_while_uncommented_is_rejected() {
    let (mut catalog, id) = with_song("Imagine", "John Lennon");

    assert_eq!(catalog.submit("x", "y"), Err(CatalogError::PendingComment));
    assert_eq!(catalog.songs().len(), 1);
    assert_eq!(catalog.current().unwrap().id, id);
    assert_eq!(catalog.state(), CatalogState::OpenSlotUncommented);
}

#[test]
fn test_blank_fields_checked_before_pending_comment() {
    let (mut catalog, _) = with_song("Imagine", "John Lennon");
    assert_eq!(catalog.submit("", "y"), Err(CatalogError::Validation));
}

#[test]
fn test_comment_opens_next_submission_and_replaces_catalog() {
    let (mut catalog, first) = with_song("Imagine", "John Lennon");

    assert!(catalog.set_comment(first, "ok"));
    assert_eq!(catalog.state(), CatalogState::OpenSlotCommented);

    let second = catalog.submit("a", "b").unwrap();
    assert_ne!(first, second);
    assert_eq!(catalog.songs().len(), 1);
    assert_eq!(catalog.current().unwrap().title, "a");
    assert_eq!(catalog.state(), CatalogState::OpenSlotUncommented);
    assert!(catalog.card(first).is_none());
    assert!(catalog.card(second).is_some());
}

#[test]
fn test_blank_comment_reopens_slot() {
    let (mut catalog, id) = with_song("Imagine", "John Lennon");
    catalog.set_comment(id, "great");
    catalog.set_comment(id, "");

    assert_eq!(catalog.state(), CatalogState::OpenSlotUncommented);
    assert_eq!(catalog.submit("a", "b"), Err(CatalogError::PendingComment));
}

#[test]
fn test_whitespace_comment_does_not_close_slot() {
    let (mut catalog, id) = with_song("Imagine", "John Lennon");
    catalog.set_comment(id, "   ");
    assert_eq!(catalog.state(), CatalogState::OpenSlotUncommented);
}

#[test]
fn test_comment_stored_verbatim() {
    let (mut catalog, id) = with_song("Imagine", "John Lennon");
    catalog.set_comment(id, "  line one\nline two ");

    assert_eq!(catalog.current().unwrap().comment, "  line one\nline two ");
    assert_eq!(catalog.card(id).unwrap().comment, "  line one\nline two ");
}

#[test]
fn test_unknown_ids_are_ignored() {
    let (mut catalog, id) = with_song("Imagine", "John Lennon");
    let other = SongId(id.0 + 100);

    assert!(!catalog.set_comment(other, "x"));
    assert!(!catalog.set_rating(other, 3));
    assert_eq!(catalog.current().unwrap().rating, 0);
    assert_eq!(catalog.state(), CatalogState::OpenSlotUncommented);
}

// =========================================================================
// Rating
// =========================================================================

#[test]
fn test_rating_marks_exactly_first_stars() {
    let (mut catalog, id) = with_song("Imagine", "John Lennon");

    assert!(catalog.set_rating(id, 3));
    assert_eq!(catalog.current().unwrap().rating, 3);
    assert_eq!(
        catalog.card(id).unwrap().stars,
        [true, true, true, false, false]
    );
}

#[test]
fn test_lowering_rating_clears_higher_stars() {
    let (mut catalog, id) = with_song("Imagine", "John Lennon");
    catalog.set_rating(id, 5);
    catalog.set_rating(id, 2);

    assert_eq!(
        catalog.card(id).unwrap().stars,
        [true, true, false, false, false]
    );
}

#[test]
fn test_rating_survives_full_render() {
    let (mut catalog, id) = with_song("Imagine", "John Lennon");
    catalog.set_rating(id, 4);
    catalog.set_comment(id, "nice");
    catalog.render_songs();

    let card = catalog.card(id).unwrap();
    assert_eq!(card.selected_stars(), 4);
    assert_eq!(card.comment, "nice");
}

#[test]
fn test_rating_does_not_touch_comment_state() {
    let (mut catalog, id) = with_song("Imagine", "John Lennon");
    catalog.set_rating(id, 5);
    assert_eq!(catalog.state(), CatalogState::OpenSlotUncommented);
}

// =========================================================================
// Rendering contract
// =========================================================================

#[test]
fn test_render_songs_is_idempotent() {
    let (mut catalog, id) = with_song("Imagine", "John Lennon");
    catalog.set_rating(id, 2);

    catalog.render_songs();
    let once = catalog.cards().to_vec();
    catalog.render_songs();
    assert_eq!(catalog.cards(), once.as_slice());
    assert_eq!(catalog.cards().len(), 1);
}

#[test]
fn test_render_songs_on_empty_catalog() {
    let mut catalog = CatalogController::new();
    catalog.render_songs();
    assert!(catalog.cards().is_empty());
}

// =========================================================================
// Properties
// =========================================================================

// Whatever the previous rating, rating with `value` selects exactly the
// first `value` stars.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_rating_selects_prefix(previous in 1u8..=5, value in 1u8..=5) {
        let (mut catalog, id) = with_song("Song", "Artist");
        catalog.set_rating(id, previous);
        catalog.set_rating(id, value);

        let card = catalog.card(id).unwrap();
        for (i, selected) in card.stars.iter().enumerate() {
            prop_assert_eq!(*selected, i < value as usize);
        }
    }
}

#[derive(Debug, Clone)]
enum Op {
    Submit(String, String),
    Comment(String),
    Rate(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        ("[a-z ]{0,4}", "[a-z ]{0,4}").prop_map(|(t, a)| Op::Submit(t, a)),
        "[a-z ]{0,4}".prop_map(Op::Comment),
        (1u8..=5).prop_map(Op::Rate),
    ]
}

// Under any sequence of operations the catalog holds at most one song,
// and a submission succeeds exactly when both fields are non-blank and no
// uncommented song is open.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_open_slot_invariant(ops in prop::collection::vec(op_strategy(), 1..30)) {
        let mut catalog = CatalogController::new();

        for op in ops {
            match op {
                Op::Submit(title, artist) => {
                    let before = catalog.state();
                    let result = catalog.submit(&title, &artist);
                    let blank = title.trim().is_empty() || artist.trim().is_empty();
                    if blank {
                        prop_assert_eq!(result, Err(CatalogError::Validation));
                        prop_assert_eq!(catalog.state(), before);
                    } else if before == CatalogState::OpenSlotUncommented {
                        prop_assert_eq!(result, Err(CatalogError::PendingComment));
                        prop_assert_eq!(catalog.state(), before);
                    } else {
                        prop_assert!(result.is_ok());
                        prop_assert_eq!(catalog.state(), CatalogState::OpenSlotUncommented);
                    }
                }
                Op::Comment(text) => {
                    if let Some(id) = catalog.current().map(|s| s.id) {
                        catalog.set_comment(id, &text);
                    }
                }
                Op::Rate(value) => {
                    if let Some(id) = catalog.current().map(|s| s.id) {
                        catalog.set_rating(id, value);
                    }
                }
            }

            prop_assert!(catalog.songs().len() <= 1);
            prop_assert_eq!(catalog.cards().len(), catalog.songs().len());
            let uncommented = catalog.songs().iter().filter(|s| s.is_uncommented()).count();
            prop_assert!(uncommented <= 1);
        }
    }
}
