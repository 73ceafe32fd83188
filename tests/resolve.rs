use std::fs;

use listplay::{ResolveError, TrackRef, resolve::resolve_inputs};
use tempfile::TempDir;

fn extensions() -> Vec<String> {
    vec!["mp3".to_string(), "flac".to_string()]
}

fn create_library() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("b_album")).unwrap();
    fs::create_dir_all(dir.path().join("a_album")).unwrap();
    fs::write(dir.path().join("a_album/02.mp3"), b"").unwrap();
    fs::write(dir.path().join("a_album/01.FLAC"), b"").unwrap();
    fs::write(dir.path().join("a_album/cover.jpg"), b"").unwrap();
    fs::write(dir.path().join("b_album/01.mp3"), b"").unwrap();
    dir
}

#[test]
fn test_directory_is_walked_in_order() {
    let dir = create_library();

    let tracks = resolve_inputs(&[dir.path().to_str().unwrap()], &extensions()).unwrap();

    let expected: Vec<TrackRef> = ["a_album/01.FLAC", "a_album/02.mp3", "b_album/01.mp3"]
        .iter()
        .map(|name| TrackRef::from(dir.path().join(name).as_path()))
        .collect();
    assert_eq!(tracks, expected);
}

#[test]
fn test_m3u_entries_resolve_against_playlist_dir() {
    let dir = create_library();
    let playlist = dir.path().join("mix.m3u");
    fs::write(
        &playlist,
        "#EXTM3U\n#EXTINF:123,First\nb_album/01.mp3\n\nhttp://radio.example/stream\n/abs/track.ogg\n",
    )
    .unwrap();

    let tracks = resolve_inputs(&[playlist.to_str().unwrap()], &extensions()).unwrap();

    assert_eq!(
        tracks,
        vec![
            TrackRef::from(dir.path().join("b_album/01.mp3").as_path()),
            TrackRef::from("http://radio.example/stream"),
            TrackRef::from("/abs/track.ogg"),
        ]
    );
}

#[test]
fn test_inputs_keep_their_order() {
    let dir = create_library();
    let single = dir.path().join("b_album/01.mp3");

    let tracks = resolve_inputs(
        &[
            "http://radio.example/live".to_string(),
            single.to_string_lossy().into_owned(),
        ],
        &extensions(),
    )
    .unwrap();

    assert_eq!(
        tracks,
        vec![TrackRef::from("http://radio.example/live"), TrackRef::from(single.as_path())]
    );
}

#[test]
fn test_missing_input_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.mp3");

    let result = resolve_inputs(&[missing.to_str().unwrap()], &extensions());

    match result {
        Err(ResolveError::NotFound(path)) => assert_eq!(path, missing),
        other => panic!("unexpected result: {:?}", other),
    }
}
