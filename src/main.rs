//! Stack Drop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use stack_drop::HighScores;
    use stack_drop::consts::*;
    use stack_drop::renderer::CanvasRenderer;
    use stack_drop::sim::{GameState, Mode, Scene, TickInput, scene, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: TickInput,
        renderer: CanvasRenderer,
        highscores: HighScores,
        /// Pending frame-callback handle; None while the loop is stopped
        raf_id: Option<i32>,
        score_recorded: bool,
    }

    impl Game {
        fn new(seed: u64, renderer: CanvasRenderer) -> Self {
            Self {
                state: GameState::new(seed),
                input: TickInput::default(),
                renderer,
                highscores: HighScores::load(),
                raf_id: None,
                score_recorded: false,
            }
        }

        /// Run one tick and redraw. One-shot inputs are cleared by the take.
        fn frame(&mut self) {
            let input = std::mem::take(&mut self.input);
            tick(&mut self.state, &input);

            let scene = scene(&self.state);
            self.renderer.draw(&scene);
            self.update_hud(&scene);

            if self.state.mode == Mode::GameOver && !self.score_recorded {
                self.score_recorded = true;
                if self
                    .highscores
                    .add_score(scene.score, js_sys::Date::now())
                    .is_some()
                {
                    self.highscores.save();
                }
            }
        }

        /// Mirror score and session state into the DOM
        fn update_hud(&self, scene: &Scene) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&scene.score.to_string()));
            }

            if let Some(el) = document.get_element_by_id("best") {
                let best = self.highscores.top_score().unwrap_or(0).max(scene.score);
                el.set_text_content(Some(&best.to_string()));
            }

            if let Some(el) = document.get_element_by_id("game-over") {
                let class = if self.state.mode == Mode::GameOver {
                    ""
                } else {
                    "hidden"
                };
                let _ = el.set_attribute("class", class);
            }
        }

        /// Reset game state for a new session
        fn restart(&mut self, seed: u64) {
            self.state.reset(seed);
            self.input = TickInput::default();
            self.score_recorded = false;
        }
    }

    type FrameClosure = Closure<dyn FnMut(f64)>;

    /// Frame scheduler with idempotent, leak-free cancellation: one
    /// persistent closure, at most one pending callback at a time.
    #[derive(Clone)]
    struct GameLoop {
        game: Rc<RefCell<Game>>,
        frame_cb: Rc<RefCell<Option<FrameClosure>>>,
    }

    impl GameLoop {
        fn new(game: Rc<RefCell<Game>>) -> Self {
            Self {
                game,
                frame_cb: Rc::new(RefCell::new(None)),
            }
        }

        /// Begin scheduling frames. A no-op while already running.
        fn start(&self) {
            if self.game.borrow().raf_id.is_some() {
                return;
            }
            if self.frame_cb.borrow().is_none() {
                let this = self.clone();
                let closure = Closure::new(move |_time: f64| {
                    let mut game = this.game.borrow_mut();
                    if game.raf_id.is_none() {
                        // Canceled after this callback was already queued
                        return;
                    }
                    game.frame();
                    game.raf_id = this.schedule();
                });
                *self.frame_cb.borrow_mut() = Some(closure);
            }
            let id = self.schedule();
            self.game.borrow_mut().raf_id = id;
        }

        /// Cancel the pending frame, if any. Safe to call repeatedly.
        fn stop(&self) {
            if let Some(id) = self.game.borrow_mut().raf_id.take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(id);
                }
            }
        }

        fn schedule(&self) -> Option<i32> {
            let window = web_sys::window()?;
            let cb = self.frame_cb.borrow();
            let closure = cb.as_ref()?;
            window
                .request_animation_frame(closure.as_ref().unchecked_ref())
                .ok()
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Stack Drop starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(PLAYFIELD_WIDTH as u32);
        canvas.set_height(VIEW_HEIGHT as u32);

        let renderer = CanvasRenderer::new(&canvas).expect("Failed to get 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, renderer)));
        log::info!("Game initialized with seed: {seed}");

        let game_loop = GameLoop::new(game.clone());

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(game);
        setup_auto_stop(game_loop.clone());

        game_loop.start();

        log::info!("Stack Drop running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard: space drops, R restarts
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    " " => g.input.drop = true,
                    "r" | "R" => {
                        let seed = js_sys::Date::now() as u64;
                        g.restart(seed);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch: tap drops
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().input.drop = true;
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let seed = js_sys::Date::now() as u64;
                game.borrow_mut().restart(seed);
                log::info!("Game restarted with seed: {seed}");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Stop ticking while the page cannot be seen; resume when it can.
    /// Both directions are idempotent, so repeated events are harmless.
    fn setup_auto_stop(game_loop: GameLoop) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Tab switch / minimize
        {
            let game_loop = game_loop.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    game_loop.stop();
                    log::info!("Loop stopped (tab hidden)");
                } else {
                    game_loop.start();
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur/focus
        {
            let game_loop = game_loop.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game_loop.stop();
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game_loop.start();
            });
            let _ =
                window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
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
    env_logger::init();
    log::info!("Stack Drop (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    println!("\nRunning headless session...");
    demo_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_session() {
    use stack_drop::sim::{GameState, Mode, TickInput, tick};

    let mut state = GameState::new(7);
    let idle = TickInput::default();

    // Bounce from the left wall until the box lines up with the base
    for _ in 0..30 {
        tick(&mut state, &idle);
    }
    tick(&mut state, &TickInput { drop: true });
    while state.mode == Mode::Fall {
        tick(&mut state, &idle);
    }

    assert_eq!(state.score, 1, "aligned drop should stack");
    println!("✓ Stacked one box (score {})", state.score);
}
