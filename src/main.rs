//! Skycatch entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use skycatch::GameLoop;
    use skycatch::consts::{FIELD_HEIGHT, FIELD_WIDTH};
    use skycatch::render::CanvasRenderer;
    use skycatch::sim::{GameEvent, GamePhase};
    use skycatch::tuning::Tuning;

    /// Browser-side game instance: loop driver plus renderer
    struct Game {
        game_loop: GameLoop,
        renderer: CanvasRenderer,
        /// Guards against double-scheduling animation frames
        frame_pending: bool,
    }

    impl Game {
        fn new(renderer: CanvasRenderer, seed: u64) -> Self {
            Self {
                game_loop: GameLoop::new(Tuning::default(), FIELD_WIDTH, FIELD_HEIGHT, seed),
                renderer,
                frame_pending: false,
            }
        }

        fn render(&self) {
            self.renderer.render(&self.game_loop.state);
        }

        /// Log pending simulation events. Returns true if any fired, which
        /// means the HUD needs a refresh.
        fn drain_events(&mut self) -> bool {
            let events = self.game_loop.state.take_events();
            for event in &events {
                match event {
                    GameEvent::SpawnRateIncreased { interval } => {
                        log::info!("Spawn interval now {:.1}s", interval);
                    }
                    GameEvent::GameOver { score } => {
                        log::info!("Game over with score {}", score);
                    }
                    GameEvent::ItemCaught { .. } | GameEvent::ItemMissed { .. } => {}
                }
            }
            !events.is_empty()
        }

        /// Update score/lives elements in the DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&format!("Score: {}", self.game_loop.state.score)));
            }
            if let Some(el) = document.get_element_by_id("lives") {
                el.set_text_content(Some(&format!("Lives: {}", self.game_loop.state.lives)));
            }
        }

        /// Flip the pause button label to match the phase
        fn update_pause_label(&self) {
            let label = match self.game_loop.state.phase {
                GamePhase::Paused => "Resume",
                _ => "Pause",
            };
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                if let Some(btn) = document.get_element_by_id("pause-btn") {
                    btn.set_text_content(Some(label));
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Skycatch starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(FIELD_WIDTH as u32);
        canvas.set_height(FIELD_HEIGHT as u32);

        let renderer = CanvasRenderer::new(&canvas).expect("2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(renderer, seed)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());
        setup_buttons(game.clone());
        setup_auto_pause(game.clone());

        // First paint: HUD plus the idle prompt. Frames are only scheduled
        // once the start command arrives.
        {
            let g = game.borrow();
            g.update_hud();
            g.render();
        }

        log::info!("Skycatch ready");
    }

    fn schedule_frame(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.frame_pending {
                return;
            }
            g.frame_pending = true;
        }

        let window = web_sys::window().unwrap();
        let game_clone = game.clone();
        let closure = Closure::once(move |time: f64| {
            frame(game_clone, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(game: Rc<RefCell<Game>>, time: f64) {
        let reschedule = {
            let mut g = game.borrow_mut();
            g.frame_pending = false;

            let reschedule = g.game_loop.frame(time);
            if g.drain_events() {
                g.update_hud();
            }
            g.render();
            reschedule
        };

        // Scheduling is withheld outside the Running phase; a command
        // handler kicks the loop back off.
        if reschedule {
            schedule_frame(game);
        }
    }

    /// Pause/resume shared by the button, Escape, and auto-pause
    fn toggle_pause(game: &Rc<RefCell<Game>>) {
        let resumed = {
            let mut g = game.borrow_mut();
            let resumed = g.game_loop.toggle_pause();
            g.update_pause_label();
            resumed
        };
        if resumed {
            schedule_frame(game.clone());
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Keyboard: held movement keys, Escape for pause
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                match event.key().as_str() {
                    "ArrowLeft" | "a" => game.borrow_mut().game_loop.input.move_left = true,
                    "ArrowRight" | "d" => game.borrow_mut().game_loop.input.move_right = true,
                    "Escape" => toggle_pause(&game),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                match event.key().as_str() {
                    "ArrowLeft" | "a" => game.borrow_mut().game_loop.input.move_left = false,
                    "ArrowRight" | "d" => game.borrow_mut().game_loop.input.move_right = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse: absolute pointer position steers the paddle
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let scale = FIELD_WIDTH as f64 / rect.width();
                let x = (event.client_x() as f64 - rect.left()) * scale;
                game.borrow_mut().game_loop.input.pointer_x = Some(x as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let scale = FIELD_WIDTH as f64 / rect.width();
                    let x = (touch.client_x() as f64 - rect.left()) * scale;
                    game.borrow_mut().game_loop.input.pointer_x = Some(x as f32);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let started = game.borrow_mut().game_loop.start();
                if started {
                    log::info!("Session started");
                    schedule_frame(game.clone());
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("pause-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                toggle_pause(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let seed = js_sys::Date::now() as u64;
                let mut g = game.borrow_mut();
                g.game_loop.restart(seed);
                g.update_pause_label();
                g.update_hud();
                g.render();
                log::info!("Game restarted with seed: {}", seed);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden
                    && game.borrow().game_loop.state.phase == GamePhase::Running
                {
                    toggle_pause(&game);
                    log::info!("Auto-paused (tab hidden)");
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                if game.borrow().game_loop.state.phase == GamePhase::Running {
                    toggle_pause(&game);
                    log::info!("Auto-paused (window blur)");
                }
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use skycatch::consts::{FIELD_HEIGHT, FIELD_WIDTH};
    use skycatch::{GameLoop, Tuning};

    env_logger::init();
    log::info!("Skycatch (native) starting headless demo...");

    let mut game = GameLoop::new(Tuning::default(), FIELD_WIDTH, FIELD_HEIGHT, 0xD00D);
    game.start();

    // Drive the loop with a synthetic 60 Hz clock until the run ends
    let mut now_ms = 0.0;
    while game.frame(now_ms) && now_ms < 120_000.0 {
        now_ms += 1000.0 / 60.0;
        for event in game.state.take_events() {
            log::debug!("{:?}", event);
        }
    }

    log::info!(
        "Demo finished after {:.1}s: score {}, lives {}",
        now_ms / 1000.0,
        game.state.score,
        game.state.lives
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
