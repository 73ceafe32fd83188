use std::time::Duration;

use listplay::{
    EngineObserver, FAST_FORWARD_RATE, MemoryEngine, PAUSED_RATE, PLAY_RATE, PlaybackController,
    REWIND_RATE, TrackRef, TransportState,
};

fn audio1() -> TrackRef {
    TrackRef::from("fixtures/audio1.mp3")
}

fn audio2() -> TrackRef {
    TrackRef::from("fixtures/audio2.mp3")
}

fn movie1() -> TrackRef {
    TrackRef::from("fixtures/movie1.mp4")
}

fn playlist() -> Vec<TrackRef> {
    vec![audio1(), audio2(), movie1()]
}

fn empty_controller() -> PlaybackController<MemoryEngine> {
    PlaybackController::new(MemoryEngine::new())
}

fn loaded_controller() -> PlaybackController<MemoryEngine> {
    let mut controller = empty_controller();
    controller.set_playlist(playlist()).unwrap();
    controller
}

#[test]
fn test_transport_rates() {
    assert_eq!(PAUSED_RATE, 0.0);
    assert_eq!(PLAY_RATE, 1.0);
    assert_eq!(FAST_FORWARD_RATE, 2.0);
    assert_eq!(REWIND_RATE, -2.0);
}

#[test]
fn test_set_playlist_loads_first_track_paused() {
    let controller = loaded_controller();

    assert!(controller.has_playlist());
    assert_eq!(controller.playlist().tracks(), playlist().as_slice());
    assert_eq!(controller.playlist().current_index(), 0);
    assert_eq!(controller.current_track_url(), Some(&audio1()));
    assert_eq!(controller.engine().loaded_item(), Some(&audio1()));
    assert_eq!(controller.engine().rate(), PAUSED_RATE);
    assert!(!controller.is_playing());
}

#[test]
fn test_set_empty_playlist_unloads_engine() {
    let mut controller = loaded_controller();
    controller.play().unwrap();

    controller.set_playlist(vec![]).unwrap();

    assert!(!controller.has_playlist());
    assert!(controller.current_track_url().is_none());
    assert!(controller.engine().loaded_item().is_none());
    assert!(!controller.is_playing());
}

#[test]
fn test_set_current_index_within_range() {
    let mut controller = loaded_controller();

    for index in [2, 0, 1] {
        assert!(controller.set_current_index(index).unwrap());
        assert_eq!(controller.playlist().current_index(), index);
        assert_eq!(controller.current_track_url(), Some(&playlist()[index]));
        assert_eq!(controller.engine().loaded_item(), Some(&playlist()[index]));
        assert_eq!(controller.engine().position(), Duration::ZERO);
        assert!(!controller.is_playing());
    }
}

#[test]
fn test_set_current_index_beyond_range_changes_nothing() {
    let mut controller = loaded_controller();
    controller.set_current_index(1).unwrap();
    controller.play().unwrap();

    assert!(!controller.set_current_index(3).unwrap());
    assert!(!controller.set_current_index(usize::MAX).unwrap());

    assert_eq!(controller.playlist().current_index(), 1);
    assert_eq!(controller.engine().loaded_item(), Some(&audio2()));
    assert_eq!(controller.engine().rate(), PLAY_RATE);
}

#[test]
fn test_set_current_index_without_playlist() {
    let mut controller = empty_controller();

    assert!(!controller.set_current_index(0).unwrap());
    assert!(controller.engine().loaded_item().is_none());
}

#[test]
fn test_engine_starts_empty() {
    let controller = empty_controller();

    assert!(controller.engine().loaded_item().is_none());
    assert_eq!(controller.engine().rate(), PAUSED_RATE);
}

#[test]
fn test_has_playlist() {
    assert!(!empty_controller().has_playlist());
    assert!(loaded_controller().has_playlist());
}

#[test]
fn test_current_track_url() {
    assert!(empty_controller().current_track_url().is_none());
    assert_eq!(loaded_controller().current_track_url(), Some(&audio1()));
}

#[test]
fn test_is_playing_tracks_rate() {
    let mut controller = loaded_controller();
    assert!(!controller.is_playing());

    controller.play().unwrap();
    assert!(controller.is_playing());

    controller.pause().unwrap();
    assert!(!controller.is_playing());

    controller.begin_fast_forwarding().unwrap();
    assert!(controller.is_playing());

    controller.begin_rewinding().unwrap();
    assert!(controller.is_playing());

    assert_eq!(controller.is_playing(), controller.engine().rate() != PAUSED_RATE);
}

#[test]
fn test_play_sets_normal_rate() {
    let mut controller = loaded_controller();

    controller.play().unwrap();

    assert_eq!(controller.engine().rate(), PLAY_RATE);
    assert_eq!(controller.current_track_url(), Some(&audio1()));
}

#[test]
fn test_pause_sets_zero_rate() {
    let mut controller = loaded_controller();
    controller.play().unwrap();
    assert_eq!(controller.engine().rate(), PLAY_RATE);

    controller.pause().unwrap();

    assert_eq!(controller.engine().rate(), PAUSED_RATE);
    assert_eq!(controller.current_track_url(), Some(&audio1()));
    assert_eq!(controller.status(), TransportState::Paused);
}

#[test]
fn test_fast_forward_then_release() {
    let mut controller = loaded_controller();

    controller.begin_fast_forwarding().unwrap();
    assert_eq!(controller.engine().rate(), FAST_FORWARD_RATE);
    assert_eq!(controller.current_track_url(), Some(&audio1()));

    controller.end_fast_forwarding().unwrap();
    assert_eq!(controller.engine().rate(), PLAY_RATE);
}

#[test]
fn test_end_fast_forwarding_always_resumes_play() {
    let mut controller = loaded_controller();

    controller.end_fast_forwarding().unwrap();

    assert_eq!(controller.engine().rate(), PLAY_RATE);
    assert_eq!(controller.current_track_url(), Some(&audio1()));
}

#[test]
fn test_rewind_then_release() {
    let mut controller = loaded_controller();

    controller.begin_rewinding().unwrap();
    assert_eq!(controller.engine().rate(), REWIND_RATE);
    assert_eq!(controller.current_track_url(), Some(&audio1()));

    controller.end_rewinding().unwrap();
    assert_eq!(controller.engine().rate(), PLAY_RATE);
}

#[test]
fn test_end_rewinding_from_pause_resumes_play() {
    let mut controller = loaded_controller();
    controller.pause().unwrap();

    controller.end_rewinding().unwrap();

    assert_eq!(controller.engine().rate(), PLAY_RATE);
}

#[test]
fn test_skip_to_next_track_plays_next() {
    let mut controller = loaded_controller();

    controller.skip_to_next_track().unwrap();

    assert!(controller.is_playing());
    assert_eq!(controller.playlist().current_index(), 1);
    assert_eq!(controller.current_track_url(), Some(&audio2()));
    assert_eq!(controller.engine().loaded_item(), Some(&audio2()));
    assert_eq!(controller.engine().position(), Duration::ZERO);
}

#[test]
fn test_skip_to_next_track_at_last_pauses_at_start() {
    let mut controller = loaded_controller();
    controller.set_current_index(2).unwrap();
    controller.play().unwrap();

    controller.skip_to_next_track().unwrap();

    assert!(!controller.is_playing());
    assert_eq!(controller.playlist().current_index(), 2);
    assert_eq!(controller.engine().position(), Duration::ZERO);
    assert_eq!(controller.current_track_url(), Some(&movie1()));
}

#[test]
fn test_jump_to_previous_track_plays_previous() {
    let mut controller = loaded_controller();
    controller.set_current_index(2).unwrap();

    controller.jump_to_previous_track().unwrap();

    assert!(controller.is_playing());
    assert_eq!(controller.playlist().current_index(), 1);
    assert_eq!(controller.engine().position(), Duration::ZERO);
    assert_eq!(controller.current_track_url(), Some(&audio2()));
}

#[test]
fn test_jump_to_previous_track_at_first_replays() {
    let mut controller = loaded_controller();

    controller.jump_to_previous_track().unwrap();

    assert!(controller.is_playing());
    assert_eq!(controller.playlist().current_index(), 0);
    assert_eq!(controller.engine().position(), Duration::ZERO);
    assert_eq!(controller.current_track_url(), Some(&audio1()));
}

#[test]
fn test_transport_commands_without_playlist_are_noops() {
    type Command = fn(&mut PlaybackController<MemoryEngine>) -> Result<(), listplay::EngineError>;

    let commands: [(&str, Command); 8] = [
        ("play", PlaybackController::play),
        ("pause", PlaybackController::pause),
        ("begin_fast_forwarding", PlaybackController::begin_fast_forwarding),
        ("end_fast_forwarding", PlaybackController::end_fast_forwarding),
        ("begin_rewinding", PlaybackController::begin_rewinding),
        ("end_rewinding", PlaybackController::end_rewinding),
        ("skip_to_next_track", PlaybackController::skip_to_next_track),
        ("jump_to_previous_track", PlaybackController::jump_to_previous_track),
    ];

    for (name, command) in commands {
        let mut controller = empty_controller();

        assert!(command(&mut controller).is_ok(), "{} failed", name);
        assert!(!controller.is_playing(), "{} started playback", name);
        assert!(controller.engine().loaded_item().is_none(), "{} loaded a track", name);
        assert_eq!(controller.status(), TransportState::Idle);
    }
}

#[test]
fn test_transport_commands_after_clearing_playlist_are_noops() {
    let mut controller = loaded_controller();
    controller.set_playlist(vec![]).unwrap();

    controller.play().unwrap();
    controller.begin_fast_forwarding().unwrap();
    controller.skip_to_next_track().unwrap();
    controller.jump_to_previous_track().unwrap();

    assert!(!controller.is_playing());
    assert!(controller.engine().loaded_item().is_none());
}
