use rand::Rng;

use crate::{
    game_state::{
        Ball, GameState, Paddle, Side, BALL_SIZE, PADDLE_HEIGHT, PADDLE_SPEED, PADDLE_WIDTH,
        WINDOW_HEIGHT, WINDOW_WIDTH,
    },
    input::{FrameInput, PaddleInput},
};

impl GameState {
    /// advances the game by a single frame.
    /// returns the side that scored, if the ball left the playfield during this frame.
    pub fn step<R: Rng>(&mut self, input: &FrameInput, rng: &mut R) -> Option<Side> {
        move_paddle(&mut self.left_paddle, input.left);
        move_paddle(&mut self.right_paddle, input.right);

        let ball = &mut self.ball;
        ball.x += ball.vx;
        ball.y += ball.vy;

        if ball.y <= 0 || ball.y >= WINDOW_HEIGHT - BALL_SIZE {
            ball.vy = -ball.vy;
        }

        // any overlap flips the ball, whichever way it is already heading.
        if hits_left_paddle(ball, &self.left_paddle)
            || hits_right_paddle(ball, &self.right_paddle)
        {
            ball.vx = -ball.vx;
        }

        let scorer = if ball.x < 0 {
            Some(Side::Right)
        } else if ball.x > WINDOW_WIDTH {
            Some(Side::Left)
        } else {
            None
        };
        if let Some(side) = scorer {
            self.score.award(side);
            self.ball = Ball::centred(rng);
        }
        scorer
    }
}

fn move_paddle(paddle: &mut Paddle, input: PaddleInput) {
    if input.up && paddle.y > 0 {
        paddle.y -= PADDLE_SPEED;
    }
    if input.down && paddle.y < WINDOW_HEIGHT - PADDLE_HEIGHT {
        paddle.y += PADDLE_SPEED;
    }
    paddle.y = paddle.y.clamp(0, WINDOW_HEIGHT - PADDLE_HEIGHT);
}

fn overlaps_vertically(ball: &Ball, paddle: &Paddle) -> bool {
    ball.y + BALL_SIZE >= paddle.y && ball.y <= paddle.y + PADDLE_HEIGHT
}

fn hits_left_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.x <= paddle.x + PADDLE_WIDTH && overlaps_vertically(ball, paddle)
}

fn hits_right_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.x + BALL_SIZE >= paddle.x && overlaps_vertically(ball, paddle)
}
