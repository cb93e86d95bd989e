use crate::{Offset, Orientation, Point3, BOARD_DEPTH, BOARD_WIDTH, TIER_COUNT};

impl quickcheck::Arbitrary for Point3 {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Point3::new(
            (u8::arbitrary(g) % BOARD_WIDTH as u8) as i8,
            (u8::arbitrary(g) % BOARD_DEPTH as u8) as i8,
            (u8::arbitrary(g) % TIER_COUNT as u8) as i8,
        )
    }
}

impl quickcheck::Arbitrary for Offset {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let span = 2 * BOARD_WIDTH as u8 - 1;
        Offset::new(
            (u8::arbitrary(g) % span) as i8 - (BOARD_WIDTH - 1),
            (u8::arbitrary(g) % span) as i8 - (BOARD_DEPTH - 1),
        )
    }
}

impl quickcheck::Arbitrary for Orientation {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Orientation::Positive, Orientation::Negative])
            .unwrap()
    }
}
