/// the held state of the two keys controlling a single paddle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

/// a snapshot of the keyboard, taken once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: PaddleInput,
    pub right: PaddleInput,
}

impl PaddleInput {
    pub const UP: Self = Self {
        up: true,
        down: false,
    };
    pub const DOWN: Self = Self {
        up: false,
        down: true,
    };
}
