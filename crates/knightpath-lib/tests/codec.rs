use knightpath_lib::{decode, encode, BoardConfig, Coord, Error};

#[test]
fn round_trip_covers_every_square_on_default_board() {
    let board = BoardConfig::default().build().expect("default config is valid");
    let (min_x, max_x) = board.files();
    let (min_y, max_y) = board.ranks();

    for x in min_x..=max_x {
        for y in min_y..=max_y {
            let coord = Coord::new(x, y);
            assert_eq!(decode(&encode(coord)).expect("decodes"), coord);
        }
    }
}

#[test]
fn round_trip_covers_full_alphabet() {
    for x in 0..26 {
        for y in 0..=9 {
            let coord = Coord::new(x, y);
            assert_eq!(decode(&encode(coord)).expect("decodes"), coord);
        }
    }
}

#[test]
fn known_notation() {
    assert_eq!(decode("a1").unwrap(), Coord::new(0, 1));
    assert_eq!(decode("h8").unwrap(), Coord::new(7, 8));
    assert_eq!(decode("I0").unwrap(), Coord::new(8, 0));
    assert_eq!(encode(Coord::new(3, 4)), "d4");
}

#[test]
fn malformed_text_reports_the_offending_input() {
    let error = decode("a").expect_err("too short");
    assert!(format!("{error}").contains("malformed coordinate 'a'"));

    match decode("ax") {
        Err(Error::MalformedCoordinate { text, reason }) => {
            assert_eq!(text, "ax");
            assert!(reason.contains("rank digit"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
