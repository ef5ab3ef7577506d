use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{HtmlCanvasElement, Window};

use super::gl::WaveProgram;
use crate::stage::Stage;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Owned animation-frame loop plus the resize listener feeding it. Can be
/// stopped and started again; the stage and GL program outlive both.
pub struct RenderLoop {
    window: Window,
    canvas: HtmlCanvasElement,
    stage: Rc<RefCell<Stage>>,
    program: Rc<WaveProgram>,
    frame: FrameSlot,
    frame_id: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
    resize: Option<Closure<dyn FnMut()>>,
}

/// Sizes the canvas to the window in device pixels and returns the CSS size.
fn fit_canvas(window: &Window, canvas: &HtmlCanvasElement) -> Result<(u32, u32), JsValue> {
    let w = window.inner_width()?.as_f64().unwrap_or(1.0);
    let h = window.inner_height()?.as_f64().unwrap_or(1.0);
    let ratio = window.device_pixel_ratio();
    canvas.set_width((w * ratio) as u32);
    canvas.set_height((h * ratio) as u32);
    let style = canvas.style();
    style.set_property("width", &format!("{w}px"))?;
    style.set_property("height", &format!("{h}px"))?;
    Ok((w as u32, h as u32))
}

impl RenderLoop {
    pub fn new(
        window: Window,
        canvas: HtmlCanvasElement,
        stage: Rc<RefCell<Stage>>,
        program: WaveProgram,
    ) -> Self {
        Self {
            window,
            canvas,
            stage,
            program: Rc::new(program),
            frame: Rc::new(RefCell::new(None)),
            frame_id: Rc::new(Cell::new(None)),
            running: Rc::new(Cell::new(false)),
            resize: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Refits the canvas and draws `stage` every animation frame until
    /// [`RenderLoop::stop`]. No-op while already running.
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.running.get() {
            return Ok(());
        }
        // The window may have changed size while stopped.
        let (w, h) = fit_canvas(&self.window, &self.canvas)?;
        self.stage.borrow_mut().resize(w, h);

        let resize = {
            let window = self.window.clone();
            let canvas = self.canvas.clone();
            let stage = self.stage.clone();
            Closure::wrap(Box::new(move || match fit_canvas(&window, &canvas) {
                Ok((w, h)) => stage.borrow_mut().resize(w, h),
                Err(e) => log::error!("resize failed: {e:?}"),
            }) as Box<dyn FnMut()>)
        };
        self.window
            .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;
        self.resize = Some(resize);

        // The frame closure reschedules itself through `frame`, so it has to be
        // created first and stored before it can reference itself.
        {
            let slot = self.frame.clone();
            let frame_id = self.frame_id.clone();
            let running = self.running.clone();
            let window = self.window.clone();
            let stage = self.stage.clone();
            let program = self.program.clone();
            *self.frame.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
                frame_id.set(None);
                if !running.get() {
                    return;
                }
                stage.borrow_mut().tick(now);
                program.draw(&stage.borrow());

                if let Some(next) = slot.borrow().as_ref() {
                    match window.request_animation_frame(next.as_ref().unchecked_ref()) {
                        Ok(id) => frame_id.set(Some(id)),
                        Err(e) => log::error!("request_animation_frame failed: {e:?}"),
                    }
                }
            }) as Box<dyn FnMut(f64)>));
        }

        let id = match self.frame.borrow().as_ref() {
            Some(first) => self
                .window
                .request_animation_frame(first.as_ref().unchecked_ref())?,
            None => return Err("frame closure missing".into()),
        };
        self.frame_id.set(Some(id));
        self.running.set(true);
        log::info!("render loop started");
        Ok(())
    }

    /// Cancels the pending frame, detaches the resize listener and drops both
    /// closures. Safe to call more than once.
    pub fn stop(&mut self) {
        if !self.running.replace(false) {
            return;
        }
        if let Some(id) = self.frame_id.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::error!("cancel_animation_frame failed: {e:?}");
            }
        }
        if let Some(resize) = self.resize.take() {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
            {
                log::error!("removing resize listener failed: {e:?}");
            }
        }
        self.frame.borrow_mut().take();
        log::info!("render loop stopped");
    }
}
