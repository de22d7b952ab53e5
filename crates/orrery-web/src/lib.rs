pub mod canvas;
pub mod error;
pub mod images;
pub mod runner;

pub use canvas::CanvasPainter;
pub use error::WebError;
pub use images::ImageLoader;
pub use runner::GameRunner;

/// Seed for a fresh session, drawn from `Math.random`.
pub fn random_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64 + 1
}

/// Expands to the browser-facing API for one `Game` type.
///
/// wasm-bindgen cannot export a generic runner, so the macro pins a
/// `GameRunner<$game_type>` in a thread-local and wraps each entry point
/// around it. The calling crate must have `wasm_bindgen::prelude::*`,
/// `orrery_engine::*`, `log`, `console_log` and `console_error_panic_hook`
/// in scope.
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_engine::*;
///
/// orrery_web::export_game!(game::Orrery, "solar-system");
/// ```
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("game_init() must run before any other export");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init(canvas_id: &str) -> Result<(), JsValue> {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let mut runner = $crate::GameRunner::with_seed(game, $crate::random_seed());
            runner.init();
            runner.attach_canvas(canvas_id)?;

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            log::info!("{}: initialized on #{}", $game_name, canvas_id);
            Ok(())
        }

        #[wasm_bindgen]
        pub fn game_tick(now_ms: f64) {
            with_runner(|r| r.tick(now_ms));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        #[wasm_bindgen]
        pub fn game_command(kind: u32, text: &str) {
            with_runner(|r| r.push_input(InputEvent::Command { kind, text: text.to_string() }));
        }

        #[wasm_bindgen]
        pub fn game_load_manifest(json: &str, base_url: &str) {
            with_runner(|r| r.load_manifest(json, base_url));
        }

        /// Events from the last tick as `[kind, a, b, c]*`.
        #[wasm_bindgen]
        pub fn game_events() -> Vec<f32> {
            with_runner(|r| r.events())
        }
    };
}
