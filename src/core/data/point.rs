/// Integer pixel coordinate, `x` to the right and `y` downwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
