//! Playlist integration tests
//!
//! Real-world scenarios: building a playlist, navigating with next/previous,
//! editing it while playing, shuffling and restoring order.

use cue_playlist::{
    order::is_permutation, Cursor, Playlist, PlaylistError, PlaylistEvent, RecordingSink,
    RepeatMode, SeededRng, Selection, Selector,
};

// ===== Test Helpers =====

fn composers() -> Playlist {
    Playlist::new(["Andersen", "Beethoven", "Chaplin", "Dvorak"]).with_rng(SeededRng::seeded(0))
}

fn names(view: &[&str]) -> Vec<String> {
    view.iter().map(|s| (*s).to_string()).collect()
}

// ===== Read Access Tests =====

#[test]
fn test_len_and_contains() {
    let playlist = composers();
    assert_eq!(playlist.len(), 4);
    assert!(playlist.contains("Andersen"));
    assert!(!playlist.contains("X"));
    assert!(Playlist::empty().is_empty());
}

#[test]
fn test_find_and_get() {
    let playlist = composers();
    assert_eq!(playlist.find("Beethoven"), Some(1));
    assert_eq!(playlist.find("X"), None);

    assert_eq!(playlist.get(0), Ok("Andersen"));
    assert_eq!(playlist.get(1), Ok("Beethoven"));
    assert_eq!(playlist.get(-1), Ok("Dvorak"));
}

#[test]
fn test_get_out_of_range() {
    let playlist = composers();
    assert_eq!(
        playlist.get(10),
        Err(PlaylistError::IndexOutOfRange { index: 10, len: 4 })
    );
    assert_eq!(
        playlist.get(-10),
        Err(PlaylistError::IndexOutOfRange { index: -10, len: 4 })
    );
    assert_eq!(Playlist::empty().get(0), Err(PlaylistError::Empty));
}

#[test]
fn test_select_ranges() {
    let playlist = composers();

    let selector: Selector = "1:3".parse().unwrap();
    assert_eq!(
        playlist.select(&selector),
        Ok(Selection::Many(vec!["Beethoven", "Chaplin"]))
    );

    let selector: Selector = "::-1".parse().unwrap();
    assert_eq!(
        playlist.select(&selector),
        Ok(Selection::Many(vec!["Dvorak", "Chaplin", "Beethoven", "Andersen"]))
    );

    assert_eq!(
        playlist.select(&Selector::Index(-1)),
        Ok(Selection::One("Dvorak"))
    );
}

#[test]
fn test_select_with_step_past_isize_bounds() {
    let playlist = composers();

    let selector: Selector = "1::9223372036854775807".parse().unwrap();
    assert_eq!(
        playlist.select(&selector),
        Ok(Selection::Many(vec!["Beethoven"]))
    );

    let selector: Selector = "2::-9223372036854775808".parse().unwrap();
    assert_eq!(
        playlist.select(&selector),
        Ok(Selection::Many(vec!["Chaplin"]))
    );
}

#[test]
fn test_select_rejects_non_integer_keys() {
    assert!(matches!(
        "1.0".parse::<Selector>(),
        Err(PlaylistError::InvalidSelector(_))
    ));

    let zero_step = Selector::Range {
        start: None,
        stop: None,
        step: 0,
    };
    assert!(matches!(
        composers().select(&zero_step),
        Err(PlaylistError::InvalidSelector(_))
    ));
}

#[test]
fn test_iteration_ignores_shuffle() {
    let mut playlist = Playlist::new(["Andersen", "Beethoven", "Chaplin"]);
    let before: Vec<&String> = playlist.iter().collect();
    assert_eq!(before, ["Andersen", "Beethoven", "Chaplin"]);

    playlist.shuffle(Some(0));
    let after: Vec<String> = (&playlist).into_iter().cloned().collect();
    assert_eq!(after, ["Andersen", "Beethoven", "Chaplin"]);
}

#[test]
fn test_collect_into_playlist() {
    let playlist: Playlist = ["x", "y"].iter().map(|s| (*s).to_string()).collect();
    assert_eq!(playlist.tracks(), &["x", "y"]);
    assert_eq!(playlist.order(), &[0, 1]);
}

// ===== Add Tests =====

#[test]
fn test_add_appends_in_canonical_mode() {
    let mut playlist = Playlist::new(["Andersen"]);
    assert!(playlist.add("Beethoven"));
    assert_eq!(playlist.tracks(), &["Andersen", "Beethoven"]);
    assert_eq!(playlist.order(), &[0, 1]);
}

#[test]
fn test_add_duplicate_notifies_and_changes_nothing() {
    let sink = RecordingSink::new();
    let mut playlist = Playlist::new(["A"]).with_sink(sink.clone());

    assert!(!playlist.add("A"));

    assert_eq!(playlist.len(), 1);
    assert_eq!(playlist.order(), &[0]);
    assert_eq!(
        sink.events(),
        vec![PlaylistEvent::DuplicateTrack {
            track: "A".to_string()
        }]
    );
}

#[test]
fn test_add_in_shuffle_after_started() {
    let mut playlist = Playlist::new(["Andersen", "Beethoven", "Chaplin"]);
    playlist.next();
    playlist.next();
    let before = playlist.current().map(str::to_string);

    playlist.shuffle(Some(123));
    assert_eq!(playlist.current().map(str::to_string), before);

    playlist.reseed(9);
    assert!(playlist.add("Dvorak"));
    assert!(playlist.contains("Dvorak"));
    assert_eq!(playlist.current().map(str::to_string), before);
    assert!(playlist.order().contains(&3));
    assert_eq!(playlist.order().len(), 4);
}

#[test]
fn test_add_in_shuffle_before_start() {
    let mut playlist = Playlist::new(["Andersen", "Beethoven", "Chaplin"]);
    playlist.shuffle(Some(0));
    playlist.reseed(1);
    playlist.add("Dvorak");

    assert!(playlist.contains("Dvorak"));
    assert_eq!(playlist.order().len(), 4);
    assert!(is_permutation(playlist.order(), 4));
    assert_eq!(playlist.current(), None);
}

#[test]
fn test_add_to_empty_shuffled_playlist_appends() {
    let mut playlist = Playlist::empty();
    playlist.shuffle(None);
    playlist.add("Andersen");
    assert_eq!(playlist.order(), &[0]);
}

#[test]
fn test_add_while_shuffled_is_reproducible() {
    let build = || {
        let mut playlist = composers();
        playlist.shuffle(Some(4));
        playlist.add("Elgar");
        playlist.add("Faure");
        playlist.order().to_vec()
    };
    assert_eq!(build(), build());
}

// ===== Navigation Tests =====

#[test]
fn test_next_three_times_then_stop() {
    let mut playlist = composers();
    assert_eq!(playlist.next(), Some("Andersen"));
    assert_eq!(playlist.next(), Some("Beethoven"));
    assert_eq!(playlist.next(), Some("Chaplin"));
    assert_eq!(playlist.next(), Some("Dvorak"));
    assert_eq!(playlist.next(), None);
    // Cursor stays on the last track
    assert_eq!(playlist.current(), Some("Dvorak"));
}

#[test]
fn test_next_previous_repeat_off() {
    let mut playlist = Playlist::new(["Andersen", "Beethoven"]);
    assert_eq!(playlist.current(), None);
    assert_eq!(playlist.next(), Some("Andersen"));
    assert_eq!(playlist.next(), Some("Beethoven"));
    assert_eq!(playlist.next(), None);

    playlist.play_at(0).unwrap();
    assert_eq!(playlist.previous(), None);
    assert_eq!(playlist.cursor(), Cursor::At(0));
}

#[test]
fn test_repeat_all_wraps_both_ways() {
    let mut playlist = composers();
    playlist.set_repeat(RepeatMode::All);

    playlist.play_at(-1).unwrap();
    assert_eq!(playlist.current(), Some("Dvorak"));
    assert_eq!(playlist.next(), Some("Andersen"));

    assert_eq!(playlist.previous(), Some("Dvorak"));
}

#[test]
fn test_repeat_one_sticks() {
    let mut playlist = Playlist::new(["Andersen", "Beethoven"]);
    playlist.set_repeat_code("one").unwrap();
    assert_eq!(playlist.next(), Some("Andersen"));
    assert_eq!(playlist.next(), Some("Andersen"));
    assert_eq!(playlist.previous(), Some("Andersen"));
}

#[test]
fn test_single_track_all_modes() {
    let mut playlist = Playlist::new(["Andersen"]);

    assert_eq!(playlist.next(), Some("Andersen"));
    assert_eq!(playlist.next(), None);

    playlist.stop();
    playlist.set_repeat(RepeatMode::One);
    assert_eq!(playlist.next(), Some("Andersen"));
    assert_eq!(playlist.next(), Some("Andersen"));
    assert_eq!(playlist.previous(), Some("Andersen"));

    playlist.set_repeat(RepeatMode::All);
    assert_eq!(playlist.next(), Some("Andersen"));
    assert_eq!(playlist.previous(), Some("Andersen"));
    assert_eq!(playlist.previous(), Some("Andersen"));
}

#[test]
fn test_previous_from_not_started() {
    let mut playlist = Playlist::new(["Andersen", "Beethoven"]);
    playlist.set_repeat(RepeatMode::All);
    assert_eq!(playlist.previous(), Some("Beethoven"));

    let mut playlist = Playlist::new(["Andersen", "Beethoven"]);
    playlist.set_repeat(RepeatMode::One);
    assert_eq!(playlist.previous(), Some("Andersen"));
    assert_eq!(playlist.current(), Some("Andersen"));

    let mut playlist = Playlist::new(["Andersen", "Beethoven"]);
    assert_eq!(playlist.previous(), None);
    assert_eq!(playlist.cursor(), Cursor::NotStarted);
}

#[test]
fn test_navigation_on_empty() {
    let mut playlist = Playlist::empty();
    for mode in RepeatMode::ALL_MODES {
        playlist.set_repeat(mode);
        assert_eq!(playlist.next(), None);
        assert_eq!(playlist.previous(), None);
        assert_eq!(playlist.current(), None);
    }
}

// ===== Repeat Mode Tests =====

#[test]
fn test_set_repeat_variants() {
    let sink = RecordingSink::new();
    let mut playlist = Playlist::new(["Andersen"]).with_sink(sink.clone());

    playlist.set_repeat_code("all").unwrap();
    assert_eq!(playlist.repeat_mode(), RepeatMode::All);

    playlist.set_repeat(RepeatMode::One);
    assert_eq!(playlist.repeat_mode(), RepeatMode::One);

    assert_eq!(
        playlist.set_repeat_code("weird"),
        Err(PlaylistError::InvalidRepeatMode("weird".to_string()))
    );
    assert_eq!(playlist.repeat_mode(), RepeatMode::One);
    // Repeat changes are not notices
    assert!(sink.events().is_empty());
}

// ===== Shuffle Tests =====

#[test]
fn test_shuffle_same_seed_same_order() {
    let mut a = composers();
    let mut b = composers();
    a.shuffle(Some(42));
    b.shuffle(Some(42));
    assert_eq!(a.order(), b.order());
    assert!(is_permutation(a.order(), 4));
    assert_eq!(a.current(), None);
}

#[test]
fn test_shuffle_after_started_keeps_current_slot() {
    let mut playlist = composers();
    playlist.next();
    playlist.next();

    playlist.shuffle(Some(7));

    assert_eq!(playlist.current(), Some("Beethoven"));
    assert_eq!(playlist.cursor(), Cursor::At(1));
    assert_eq!(playlist.order()[1], 1);
    assert!(is_permutation(playlist.order(), 4));
}

#[test]
fn test_unshuffle_preserves_current() {
    let mut playlist = Playlist::new(["Andersen", "Beethoven", "Chaplin"]);
    playlist.next();
    playlist.next();
    let before = playlist.current().map(str::to_string);

    playlist.shuffle(Some(1));
    playlist.unshuffle();

    assert_eq!(playlist.order(), &[0, 1, 2]);
    assert_eq!(playlist.current().map(str::to_string), before);
}

#[test]
fn test_unshuffle_after_navigating_shuffled_order() {
    let mut playlist = composers();
    playlist.shuffle(Some(3));
    playlist.next();
    playlist.next();
    let playing = playlist.current().map(str::to_string);

    playlist.unshuffle();

    assert_eq!(playlist.current().map(str::to_string), playing);
    let id = playlist.find(playing.as_deref().unwrap()).unwrap();
    assert_eq!(playlist.cursor(), Cursor::At(id));
}

#[test]
fn test_shuffle_flags_on_small_playlists() {
    let mut one = Playlist::new(["Andersen"]);
    one.shuffle(None);
    assert!(one.is_shuffled());
    one.unshuffle();
    assert!(!one.is_shuffled());

    let mut empty = Playlist::empty();
    empty.shuffle(None);
    assert!(empty.is_shuffled());
    empty.unshuffle();
    assert!(!empty.is_shuffled());
    assert!(empty.order().is_empty());
    assert_eq!(empty.current(), None);
}

// ===== Remove Tests =====

#[test]
fn test_remove_current_middle() {
    let mut playlist = composers();
    playlist.next();
    playlist.next();
    assert_eq!(playlist.current(), Some("Beethoven"));

    assert_eq!(playlist.remove(1).unwrap(), "Beethoven");

    assert_eq!(playlist.current(), Some("Chaplin"));
    assert_eq!(
        names(&playlist.order_view()),
        ["Andersen", "Chaplin", "Dvorak"]
    );
}

#[test]
fn test_remove_current_when_last() {
    let mut playlist = Playlist::new(["Andersen", "Beethoven", "Chaplin"]);
    playlist.next();
    playlist.next();
    playlist.next();

    assert_eq!(playlist.remove(2).unwrap(), "Chaplin");

    assert_eq!(playlist.current(), Some("Beethoven"));
    assert_eq!(names(&playlist.order_view()), ["Andersen", "Beethoven"]);
}

#[test]
fn test_remove_before_and_after_current() {
    let mut playlist = composers();
    playlist.next();
    playlist.next();

    assert_eq!(playlist.remove(0).unwrap(), "Andersen");
    assert_eq!(playlist.current(), Some("Beethoven"));

    assert_eq!(playlist.remove(2).unwrap(), "Dvorak");
    assert_eq!(playlist.current(), Some("Beethoven"));
}

#[test]
fn test_remove_in_shuffled_order_follows_current() {
    let mut playlist = composers();
    playlist.shuffle(Some(8));
    playlist.next();
    playlist.next();
    let playing = playlist.current().unwrap().to_string();

    let victim = (0..4)
        .map(|i| playlist.get(i).unwrap().to_string())
        .find(|name| *name != playing)
        .unwrap();
    let victim_pos = playlist.find(&victim).unwrap();

    playlist.remove(isize::try_from(victim_pos).unwrap()).unwrap();

    assert_eq!(playlist.current(), Some(playing.as_str()));
    assert!(is_permutation(playlist.order(), 3));
}

#[test]
fn test_remove_when_not_started_stays_idle() {
    let mut playlist = composers();
    playlist.remove(0).unwrap();
    assert_eq!(playlist.cursor(), Cursor::NotStarted);
}

#[test]
fn test_remove_on_empty() {
    let mut playlist = Playlist::empty();
    assert_eq!(playlist.remove(0), Err(PlaylistError::Empty));
}

#[test]
fn test_remove_last_remaining() {
    let mut playlist = Playlist::new(["Andersen"]);
    playlist.next();

    assert_eq!(playlist.remove(0).unwrap(), "Andersen");

    assert!(playlist.is_empty());
    assert!(playlist.order().is_empty());
    assert_eq!(playlist.current(), None);
    assert_eq!(playlist.cursor(), Cursor::NotStarted);
}

#[test]
fn test_remove_negative_index() {
    let mut playlist = Playlist::new(["Andersen", "Beethoven", "Chaplin"]);
    assert_eq!(playlist.remove(-1).unwrap(), "Chaplin");
    assert_eq!(playlist.tracks(), &["Andersen", "Beethoven"]);
    assert_eq!(playlist.order(), &[0, 1]);
}

#[test]
fn test_remove_reindexes_shuffled_order() {
    let mut playlist = composers();
    playlist.shuffle(Some(2));
    let before = playlist.order().to_vec();

    playlist.remove(1).unwrap();

    let expected: Vec<usize> = before
        .into_iter()
        .filter(|&id| id != 1)
        .map(|id| if id > 1 { id - 1 } else { id })
        .collect();
    assert_eq!(playlist.order(), expected.as_slice());
}

// ===== Move Tests =====

#[test]
fn test_move_preserves_play_order() {
    let mut playlist = composers();
    playlist.shuffle(Some(7));
    let before = names(&playlist.order_view());

    playlist.move_track(0, 2).unwrap();

    assert_eq!(playlist.tracks(), &["Beethoven", "Chaplin", "Andersen", "Dvorak"]);
    assert_eq!(names(&playlist.order_view()), before);
}

#[test]
fn test_move_canonical_view_unchanged() {
    let mut playlist = composers();
    playlist.move_track(0, 2).unwrap();
    assert_eq!(playlist.tracks(), &["Beethoven", "Chaplin", "Andersen", "Dvorak"]);
    assert_eq!(
        names(&playlist.order_view()),
        ["Andersen", "Beethoven", "Chaplin", "Dvorak"]
    );
}

#[test]
fn test_move_with_negative_indices_preserves_current() {
    let mut playlist = composers();
    playlist.next();
    playlist.next();
    let before = playlist.current().map(str::to_string);

    playlist.move_track(-4, -2).unwrap();

    assert_eq!(playlist.tracks(), &["Beethoven", "Chaplin", "Andersen", "Dvorak"]);
    assert_eq!(playlist.current().map(str::to_string), before);
    assert!(is_permutation(playlist.order(), 4));
}

#[test]
fn test_move_same_position_is_noop() {
    let mut playlist = composers();
    playlist.shuffle(Some(1));
    let before = playlist.order().to_vec();
    playlist.move_track(2, -2).unwrap();
    assert_eq!(playlist.order(), before.as_slice());
    assert_eq!(playlist.tracks(), &["Andersen", "Beethoven", "Chaplin", "Dvorak"]);
}

#[test]
fn test_move_invalid_positions_and_empty() {
    let mut playlist = Playlist::new(["Andersen"]);
    assert_eq!(
        playlist.move_track(0, 5),
        Err(PlaylistError::IndexOutOfRange { index: 5, len: 1 })
    );
    assert_eq!(
        playlist.move_track(2, 0),
        Err(PlaylistError::IndexOutOfRange { index: 2, len: 1 })
    );
    assert_eq!(Playlist::empty().move_track(0, 0), Err(PlaylistError::Empty));
}
