// Test fixtures with known inputs and expected outputs
// WHY: table-driven cases shared by the public API tests

/// (input, expected last dip start)
pub const DIP_CASES: &[(&[i32], Option<usize>)] = &[
    (&[], None),
    (&[8], None),
    (&[8, 5], None),
    (&[8, 5, 8], Some(0)),
    (&[8, 5, 8, 1, 1, 1], Some(0)),
    (&[8, 5, 8, 9, 4, 9], Some(3)),
    (&[8, 8, 8], None),
    (&[1, 8, 5, 8, 9, 3, 9], Some(4)),
    (&[-1, -2, -1], Some(0)),
    (&[0, 0, -1, 0, 5], Some(1)),
];

/// (input, expected span bounds)
pub const BALANCED_CASES: &[(&[i32], Option<(usize, usize)>)] = &[
    (&[], None),
    (&[1, 2, 3], None),
    (&[5, -8, 2, 1], Some((0, 4))),
    (&[0, 0, 0], Some((0, 3))),
    (&[1, -1, 2, -2], Some((0, 4))),
    (&[3, -3, 8, 5, -5], Some((3, 5))),
    (&[3, -3, 0, 5, -5], Some((0, 5))),
    (&[7, 0, 7], Some((1, 2))),
    (&[4, 1, -1, 6, 2, -2], Some((4, 6))),
];

/// (input, expected telegraph-style output)
pub const TELEGRAPH_CASES: &[(&str, &str)] = &[
    ("", "STOP."),
    ("hello!!  world", "HELLO.. WORLDSTOP."),
    ("already ends STOP.", "ALREADY ENDS STOP."),
    ("already ends stop.", "ALREADY ENDS STOP."),
    ("a#b  c", "AB CSTOP."),
    ("@@@", "STOP."),
    ("Meet at 5; bring 2 maps?", "MEET AT 5. BRING 2 MAPS.STOP."),
    ("line one\nline two", "LINE ONELINE TWOSTOP."),
    ("caf\u{e9} au lait", "CAF AU LAITSTOP."),
    ("st#op.", "STOP."),
];
