pub mod game_state;
pub mod input;
pub mod physics;
pub mod scene;

pub const GAME_TITLE: &str = "CPong - Yet another Pong Clone";

#[cfg(test)]
#[macro_export]
macro_rules! assert_ball {
    ($ball:expr, ($x:expr, $y:expr), ($vx:expr, $vy:expr) $(,)?) => {
        assert_eq!(
            ($ball.x, $ball.y, $ball.vx, $ball.vy),
            ($x, $y, $vx, $vy),
            "ball position and velocity"
        )
    };
}
