use crate::game_state::{GameState, Paddle, BALL_SIZE};

/// vertical offset of the score text from the top of the playfield.
pub const SCORE_TOP: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl From<&Paddle> for Rect {
    fn from(paddle: &Paddle) -> Self {
        Self {
            x: paddle.x,
            y: paddle.y,
            w: paddle.w,
            h: paddle.h,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    /// fill the whole surface with the background colour.
    Clear,
    /// fill a rectangle with the foreground colour.
    FillRect(Rect),
    /// draw a line of text horizontally centred at the given height.
    Text { text: String, y: i32 },
}

/// everything that is drawn during a single frame, in draw order.
pub type Scene = Vec<DrawCommand>;

impl GameState {
    pub fn scene(&self) -> Scene {
        vec![
            DrawCommand::Clear,
            DrawCommand::FillRect(Rect::from(&self.left_paddle)),
            DrawCommand::FillRect(Rect::from(&self.right_paddle)),
            DrawCommand::FillRect(Rect {
                x: self.ball.x,
                y: self.ball.y,
                w: BALL_SIZE,
                h: BALL_SIZE,
            }),
            DrawCommand::Text {
                text: self.score.to_string(),
                y: SCORE_TOP,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::{
        game_state::{Ball, GameState, Side},
        scene::{DrawCommand, Rect, SCORE_TOP},
    };

    #[test]
    fn scene_draw_order() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = GameState::new(&mut rng);
        state.ball = Ball {
            x: 120,
            y: 45,
            vx: 5,
            vy: -5,
        };
        state.score.award(Side::Left);
        assert_eq!(
            state.scene(),
            vec![
                DrawCommand::Clear,
                DrawCommand::FillRect(Rect {
                    x: 10,
                    y: 250,
                    w: 15,
                    h: 100
                }),
                DrawCommand::FillRect(Rect {
                    x: 775,
                    y: 250,
                    w: 15,
                    h: 100
                }),
                DrawCommand::FillRect(Rect {
                    x: 120,
                    y: 45,
                    w: 15,
                    h: 15
                }),
                DrawCommand::Text {
                    text: "1 | 0".to_owned(),
                    y: SCORE_TOP
                },
            ]
        );
    }
}
