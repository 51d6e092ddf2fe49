use heaps::closest::{k_closest, Point};
use quickcheck_macros::quickcheck;

use crate::init_logger;

#[quickcheck]
fn nearest_first(coordinates: Vec<(i32, i32)>, k: u8) -> bool {
    init_logger();
    let points: Vec<_> = coordinates.into_iter().map(Point::from).collect();
    let closest = k_closest(&points, usize::from(k));

    closest.len() == points.len().min(usize::from(k))
        && closest
            .windows(2)
            .all(|pair| pair[0].squared_distance() <= pair[1].squared_distance())
}

#[quickcheck]
fn nothing_closer_was_left_out(coordinates: Vec<(i32, i32)>, k: u8) -> bool {
    let points: Vec<_> = coordinates.into_iter().map(Point::from).collect();
    let closest = k_closest(&points, usize::from(k));

    let Some(farthest) = closest.last().map(Point::squared_distance) else {
        return true;
    };
    let strictly_closer = points
        .iter()
        .filter(|p| p.squared_distance() < farthest)
        .count();
    strictly_closer < closest.len()
}

#[quickcheck]
fn display_round_trips(x: i32, y: i32) -> bool {
    let point = Point::new(x, y);
    point.to_string().parse() == Ok(point)
}
