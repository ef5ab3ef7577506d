//! Animated wireframe sphere drawn behind a multi-page site.
//!
//! The core (scene, uniforms, transitions, frame clock) is plain Rust and
//! runs anywhere; the browser side only exists on `wasm32`.

pub mod animator;
pub mod config;
pub mod error;
pub mod geometry;
pub mod navigation;
pub mod scene;
pub mod stage;
pub mod tween;
pub mod uniforms;
pub mod viewport;

pub use animator::{Animator, AnimatorState, Pose, Transition};
pub use config::SceneConfig;
pub use error::{BackdropError, Result};
pub use stage::Stage;
pub use viewport::Viewport;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub use wasm::{install_link_guard, replace_head, Backdrop};

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::config::SceneConfig;
    use crate::error::BackdropError;
    use crate::navigation::PageView;
    use crate::stage::Stage;
    use crate::viewport::Viewport;

    mod gl;
    mod head;
    mod links;
    mod render;

    impl From<BackdropError> for JsValue {
        fn from(e: BackdropError) -> JsValue {
            js_sys::Error::new(&e.to_string()).into()
        }
    }

    fn js_err(e: JsValue) -> BackdropError {
        BackdropError::Js(format!("{e:?}"))
    }

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("wave_backdrop loaded");
    }

    /// Page-owned handle: holds the stage and its frame loop. Navigation
    /// hooks call [`Backdrop::before_enter`].
    #[wasm_bindgen]
    pub struct Backdrop {
        window: web_sys::Window,
        stage: Rc<RefCell<Stage>>,
        render_loop: render::RenderLoop,
    }

    #[wasm_bindgen]
    impl Backdrop {
        #[wasm_bindgen(constructor)]
        pub fn new(selector: Option<String>) -> Result<Backdrop, JsValue> {
            let mut config = SceneConfig::default();
            if let Some(selector) = selector {
                config = config.with_canvas_selector(selector);
            }

            let window = web_sys::window().ok_or("no window")?;
            let document = window.document().ok_or("no document")?;
            let canvas = document
                .query_selector(&config.canvas_selector)?
                .ok_or_else(|| BackdropError::CanvasNotFound(config.canvas_selector.clone()))?
                .dyn_into::<web_sys::HtmlCanvasElement>()
                .map_err(|_| BackdropError::CanvasNotFound(config.canvas_selector.clone()))?;
            let context = canvas
                .get_context("webgl2")
                .map_err(js_err)?
                .ok_or(BackdropError::ContextUnavailable)?
                .dyn_into::<web_sys::WebGl2RenderingContext>()
                .map_err(|_| BackdropError::ContextUnavailable)?;

            let width = window.inner_width()?.as_f64().unwrap_or(1.0) as u32;
            let height = window.inner_height()?.as_f64().unwrap_or(1.0) as u32;
            let stage = Stage::new(Viewport::new(width, height), config);
            let program = gl::WaveProgram::new(context, &stage.scene.group.mesh.geometry)?;

            let stage = Rc::new(RefCell::new(stage));
            let mut render_loop =
                render::RenderLoop::new(window.clone(), canvas, stage.clone(), program);
            render_loop.start()?;
            Ok(Backdrop {
                window,
                stage,
                render_loop,
            })
        }

        /// Runs the transition for `namespace`, scrolls to the top and leaves
        /// the page class as the only class on `<body>`.
        #[wasm_bindgen(js_name = beforeEnter)]
        pub fn before_enter(&self, namespace: &str) -> Result<(), JsValue> {
            let view = PageView::for_namespace(namespace)?;
            self.stage.borrow_mut().run_transition(view.transition);
            self.window.scroll_to_with_x_and_y(0.0, 0.0);
            let body = self
                .window
                .document()
                .and_then(|d| d.body())
                .ok_or("no body")?;
            body.set_class_name(view.body_class);
            Ok(())
        }

        #[wasm_bindgen(getter)]
        pub fn running(&self) -> bool {
            self.render_loop.is_running()
        }

        pub fn stop(&mut self) {
            self.render_loop.stop();
        }

        /// Restarts a stopped loop, e.g. when the page returns from the
        /// back/forward cache.
        pub fn resume(&mut self) -> Result<(), JsValue> {
            self.render_loop.start()
        }
    }

    impl Drop for Backdrop {
        fn drop(&mut self) {
            self.render_loop.stop();
        }
    }

    /// Suppresses navigation for links targeting the current location.
    #[wasm_bindgen(js_name = installLinkGuard)]
    pub fn install_link_guard() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        links::install(&document, window.location())
    }

    /// Brings the entered page's title and description into the document.
    #[wasm_bindgen(js_name = replaceHead)]
    pub fn replace_head(next_html: &str) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document")?;
        head::replace(&document, next_html)
    }
}
