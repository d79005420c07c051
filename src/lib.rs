use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{LevelFilter, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent};

pub mod animation;
pub mod data;
pub mod engine;
pub mod error;
pub mod growth;
pub mod interaction;
pub mod logging;
pub mod math;
pub mod particles;
pub mod render;
pub mod scene;
pub mod visual;

pub use error::{Error, Result};

use data::LifeCycleConfig;
use engine::Animation;
use interaction::KeyQueue;
use render::{RecordingCanvas, WebCanvas};
use visual::{analyze_commands, generate_frame_report};

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    logging::init(LevelFilter::Info);
}

/// Tree life cycle animation bound to a browser canvas
#[wasm_bindgen]
pub struct TreeLifeCycle {
    animation: Animation<WebCanvas>,
    keys: KeyQueue,
    frame_interval_ms: u32,
}

#[wasm_bindgen]
impl TreeLifeCycle {
    /// Create an animation with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> std::result::Result<TreeLifeCycle, JsValue> {
        Ok(Self::with_parsed_config(canvas, LifeCycleConfig::default())?)
    }

    /// Create an animation configured from a YAML string
    #[wasm_bindgen]
    pub fn with_config(
        canvas: HtmlCanvasElement,
        yaml: &str,
    ) -> std::result::Result<TreeLifeCycle, JsValue> {
        let config = LifeCycleConfig::from_yaml(yaml).map_err(|e| {
            warn!("rejected config: {}", e);
            e
        })?;
        Ok(Self::with_parsed_config(canvas, config)?)
    }

    /// Queue a key press by its DOM `KeyboardEvent.key` name.
    /// Returns true if the key is bound.
    #[wasm_bindgen]
    pub fn key_down(&self, key: &str) -> bool {
        self.keys.push_dom_key(key)
    }

    /// Poll keys, update and render one frame.
    /// Returns false once ESC has stopped the animation.
    #[wasm_bindgen]
    pub fn step(&mut self) -> bool {
        self.animation.step_keys(&self.keys)
    }

    #[wasm_bindgen]
    pub fn restart(&mut self) {
        self.animation.restart();
    }

    #[wasm_bindgen]
    pub fn is_running(&self) -> bool {
        self.animation.is_running()
    }

    /// 1-based number of the current phase
    #[wasm_bindgen]
    pub fn phase_number(&self) -> u32 {
        self.animation.life_cycle().phase().number()
    }

    #[wasm_bindgen]
    pub fn phase_title(&self) -> String {
        self.animation.life_cycle().phase().to_string()
    }

    /// Current tree growth scale (0.0 to 1.0)
    #[wasm_bindgen]
    pub fn growth_scale(&self) -> f32 {
        self.animation.life_cycle().growth_scale()
    }

    /// Suggested delay between `step` calls
    #[wasm_bindgen]
    pub fn frame_interval_ms(&self) -> u32 {
        self.frame_interval_ms
    }
}

impl TreeLifeCycle {
    fn with_parsed_config(canvas: HtmlCanvasElement, config: LifeCycleConfig) -> Result<Self> {
        let web_canvas = WebCanvas::new(canvas, config.screen.width, config.screen.height)?;
        let frame_interval_ms = config.timing.frame_interval_ms;
        info!(
            "tree life cycle on {}x{} canvas, {} ms per frame",
            config.screen.width, config.screen.height, frame_interval_ms
        );
        Ok(Self {
            animation: Animation::new(config, web_canvas),
            keys: KeyQueue::new(),
            frame_interval_ms,
        })
    }
}

/// Attach the animation to the canvas with id `canvas_id` and run it on a
/// timer until ESC is pressed.
#[wasm_bindgen]
pub fn run(canvas_id: &str, config_yaml: Option<String>) -> std::result::Result<(), JsValue> {
    Ok(start_loop(canvas_id, config_yaml.as_deref())?)
}

fn start_loop(canvas_id: &str, config_yaml: Option<&str>) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| Error::Dom("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| Error::Dom("no document".to_string()))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| Error::Dom(format!("no element with id '{}'", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| Error::Dom(format!("'{}' is not a canvas", canvas_id)))?;

    let config = match config_yaml {
        Some(yaml) => LifeCycleConfig::from_yaml(yaml)?,
        None => LifeCycleConfig::default(),
    };

    let app = TreeLifeCycle::with_parsed_config(canvas, config)?;
    let keys = app.keys.clone();
    let interval_ms = app.frame_interval_ms as i32;
    let app = Rc::new(RefCell::new(app));

    let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if keys.push_dom_key(&event.key()) {
            event.prevent_default();
        }
    });
    window
        .add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())
        .map_err(|e| Error::dom("adding keydown listener", e))?;

    let interval: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick_interval = interval.clone();
    // The key listener lives until the tick that sees ESC removes it
    let mut on_key = Some(on_key);
    let on_tick = Closure::<dyn FnMut()>::new(move || {
        if app.borrow_mut().step() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(handle) = tick_interval.take() {
            window.clear_interval_with_handle(handle);
        }
        if let Some(listener) = on_key.take() {
            if let Err(e) = window
                .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
            {
                warn!("removing keydown listener failed: {:?}", e);
            }
        }
    });
    let handle = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            on_tick.as_ref().unchecked_ref(),
            interval_ms,
        )
        .map_err(|e| Error::dom("starting frame timer", e))?;
    interval.set(Some(handle));
    on_tick.forget();

    Ok(())
}

/// Simulate `frames` frames headlessly and report on the last one
#[wasm_bindgen]
pub fn analyze_frames(config_yaml: &str, frames: u32) -> std::result::Result<String, JsValue> {
    Ok(simulate_report(config_yaml, frames)?)
}

fn simulate_report(config_yaml: &str, frames: u32) -> Result<String> {
    let config = LifeCycleConfig::from_yaml(config_yaml)?;
    let mut animation = Animation::new(config, RecordingCanvas::new());
    for _ in 0..frames {
        animation.canvas_mut().clear_history();
        animation.step(&[]);
    }

    let metrics = analyze_commands(animation.canvas().last_frame());
    let lc = animation.life_cycle();
    Ok(format!(
        "After {} frames: {} (frame {} of phase, growth {:.2}, zoom {:.2})\n\n{}",
        frames,
        lc.phase(),
        lc.phase_timer(),
        lc.growth_scale(),
        lc.camera().zoom,
        generate_frame_report(&metrics)
    ))
}
