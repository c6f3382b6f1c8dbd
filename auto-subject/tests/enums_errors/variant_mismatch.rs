use auto_subject::{Subject, assert_about};

#[derive(Subject)]
pub enum Direction {
    North,
    SouthWest,
}

pub fn test_case() {
    let direction = Direction::North;

    assert_about(AutoDirection::direction())
        .that(&direction)
        .is_south_west();
}
