use std::fmt::Display;

use rand::Rng;

pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;
pub const PADDLE_WIDTH: i32 = 15;
pub const PADDLE_HEIGHT: i32 = 100;
/// gap between each paddle and the wall behind it.
pub const PADDLE_MARGIN: i32 = 10;
pub const BALL_SIZE: i32 = 15;
pub const PADDLE_SPEED: i32 = 10;
pub const BALL_SPEED: i32 = 5;
pub const TARGET_FPS: u32 = 60;
/// milliseconds per frame.
pub const FRAME_DELAY: u64 = 1000 / TARGET_FPS as u64;

const _CHECKS: () = {
    assert!(
        PADDLE_HEIGHT < WINDOW_HEIGHT,
        "paddles must be shorter than the playfield so they have room to move"
    );
    assert!(
        2 * (PADDLE_MARGIN + PADDLE_WIDTH) + BALL_SIZE < WINDOW_WIDTH,
        "the ball must fit between the two paddles"
    );
    assert!(
        BALL_SPEED < PADDLE_WIDTH,
        "the ball would be able to skip over a paddle in a single frame"
    );
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => Display::fmt("left", f),
            Side::Right => Display::fmt("right", f),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Paddle {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Paddle {
    /// a paddle vertically centred against the given wall.
    pub fn starting(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_MARGIN,
            Side::Right => WINDOW_WIDTH - PADDLE_MARGIN - PADDLE_WIDTH,
        };
        Self {
            x,
            y: (WINDOW_HEIGHT - PADDLE_HEIGHT) / 2,
            w: PADDLE_WIDTH,
            h: PADDLE_HEIGHT,
        }
    }
}

/// the ball is a [`BALL_SIZE`] square with its top-left corner at `(x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub vx: i32,
    pub vy: i32,
}

impl Ball {
    /// a ball in the middle of the playfield heading in one of the four diagonal directions.
    pub fn centred<R: Rng>(rng: &mut R) -> Self {
        Self {
            x: WINDOW_WIDTH / 2,
            y: WINDOW_HEIGHT / 2,
            vx: random_direction(rng) * BALL_SPEED,
            vy: random_direction(rng) * BALL_SPEED,
        }
    }
}

fn random_direction<R: Rng>(rng: &mut R) -> i32 {
    if rng.gen_bool(0.5) {
        1
    } else {
        -1
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {}", self.left, self.right)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub score: Score,
}

impl GameState {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            left_paddle: Paddle::starting(Side::Left),
            right_paddle: Paddle::starting(Side::Right),
            ball: Ball::centred(rng),
            score: Score::default(),
        }
    }
}
