//! 2D canvas rendering
//!
//! A pure view of the session state: given the current `GameState`, draw
//! the frame plus the overlay matching the phase (idle prompt, nothing, or
//! the game-over screen). Never mutates the simulation.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::sim::{GamePhase, GameState};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    /// Draw one frame of the current state
    pub fn render(&self, state: &GameState) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        self.draw_background();
        self.draw_paddle(state);
        self.draw_items(state);
        self.draw_hud(state);

        match state.phase {
            GamePhase::Idle => self.draw_idle_prompt(),
            GamePhase::GameOver => self.draw_game_over(state),
            GamePhase::Running | GamePhase::Paused => {}
        }
    }

    fn draw_background(&self) {
        let gradient = self
            .ctx
            .create_linear_gradient(0.0, 0.0, 0.0, self.height);
        let _ = gradient.add_color_stop(0.0, "rgba(255,255,255,0.65)");
        let _ = gradient.add_color_stop(1.0, "rgba(200,230,255,0.3)");
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_paddle(&self, state: &GameState) {
        let p = &state.paddle;
        self.ctx.set_fill_style_str("#0d47a1");
        self.ctx
            .fill_rect(p.x as f64, p.y as f64, p.width as f64, p.height as f64);
        self.ctx.set_stroke_style_str("rgba(0,0,0,0.12)");
        self.ctx
            .stroke_rect(p.x as f64, p.y as f64, p.width as f64, p.height as f64);
    }

    fn draw_items(&self, state: &GameState) {
        for item in &state.items {
            let (x, y, r) = (item.pos.x as f64, item.pos.y as f64, item.radius as f64);

            self.ctx.begin_path();
            self.ctx
                .set_fill_style_str(&format!("hsl({:.0} 80% 50%)", item.hue));
            let _ = self.ctx.arc(x, y, r, 0.0, std::f64::consts::TAU);
            self.ctx.fill();
            self.ctx.close_path();

            // Specular highlight, offset toward the upper left
            self.ctx.begin_path();
            self.ctx.set_fill_style_str("rgba(255,255,255,0.25)");
            let _ = self
                .ctx
                .arc(x - r * 0.35, y - r * 0.35, r * 0.35, 0.0, std::f64::consts::TAU);
            self.ctx.fill();
            self.ctx.close_path();
        }
    }

    fn draw_hud(&self, state: &GameState) {
        self.ctx.set_fill_style_str("rgba(0,0,0,0.45)");
        self.ctx.set_font("14px Roboto, sans-serif");
        let _ = self
            .ctx
            .fill_text(&format!("Score: {}", state.score), 10.0, 22.0);
        let _ = self
            .ctx
            .fill_text(&format!("Lives: {}", state.lives), self.width - 80.0, 22.0);
    }

    fn draw_idle_prompt(&self) {
        self.ctx.set_fill_style_str("rgba(13,71,161,0.9)");
        self.ctx.set_font("20px Roboto, sans-serif");
        let _ = self.ctx.fill_text(
            "Press START to play",
            self.width / 2.0 - 95.0,
            self.height / 2.0,
        );
    }

    fn draw_game_over(&self, state: &GameState) {
        self.ctx.set_fill_style_str("rgba(0,0,0,0.5)");
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);

        self.ctx.set_fill_style_str("#fff");
        self.ctx.set_font("28px Roboto, sans-serif");
        let _ = self.ctx.fill_text(
            "GAME OVER",
            self.width / 2.0 - 80.0,
            self.height / 2.0 - 10.0,
        );

        self.ctx.set_font("16px Roboto, sans-serif");
        let _ = self.ctx.fill_text(
            &format!("Final score: {}", state.score),
            self.width / 2.0 - 60.0,
            self.height / 2.0 + 20.0,
        );
        let _ = self.ctx.fill_text(
            "Press RESTART to play again",
            self.width / 2.0 - 105.0,
            self.height / 2.0 + 50.0,
        );
    }
}
