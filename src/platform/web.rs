//! Browser bindings
//!
//! A thin `wasm_bindgen` wrapper around [`Session`] and [`FrameDriver`].
//! Everything crosses the boundary as numbers or JSON strings; rendering and
//! input capture stay on the JavaScript side.

use glam::Vec2;
use wasm_bindgen::prelude::*;

use super::driver::FrameDriver;
use crate::settings::Settings;
use crate::sim::{Character, Playfield, Session, TickInput};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) is harmless
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Spike Storm core loaded");
}

#[wasm_bindgen]
pub struct WebSession {
    session: Session,
    driver: FrameDriver,
}

#[wasm_bindgen]
impl WebSession {
    /// Create an idle session. Bad tuning or settings JSON falls back to defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: f32,
        height: f32,
        tuning_json: Option<String>,
        settings_json: Option<String>,
    ) -> WebSession {
        let tuning = Tuning::load_or_default(tuning_json.as_deref());
        let settings = settings_json
            .as_deref()
            .map(Settings::from_json)
            .unwrap_or_default();
        let seed = js_sys::Date::now() as u64;
        WebSession {
            session: Session::new(tuning, settings, Playfield::new(width, height), seed),
            driver: FrameDriver::new(),
        }
    }

    /// Start a run as `edgar`, `hank` or `fang`
    pub fn start(&mut self, character: &str) -> Result<(), JsValue> {
        let character = Character::parse(character)
            .ok_or_else(|| JsValue::from_str(&format!("unknown character: {}", character)))?;
        self.driver.reset_clock();
        self.session.start_session(character);
        Ok(())
    }

    /// Advance one animation frame; returns the snapshot JSON, or `undefined` while hidden
    pub fn frame(
        &mut self,
        now_ms: f64,
        visible: bool,
        intent_x: f32,
        intent_y: f32,
    ) -> Option<String> {
        let input = TickInput {
            intent: Vec2::new(intent_x, intent_y),
            ability: false,
        };
        let snapshot = self
            .driver
            .frame(&mut self.session, now_ms, visible, &input)?;
        match snapshot.to_json() {
            Ok(json) => Some(json),
            Err(e) => {
                log::error!("Snapshot serialization failed: {}", e);
                None
            }
        }
    }

    /// Queue an ability press for the next frame
    pub fn press_ability(&mut self) {
        self.driver.press_ability();
    }

    pub fn reset(&mut self) {
        self.driver.reset_clock();
        self.session.reset();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.session.resize(Playfield::new(width, height));
    }

    pub fn set_settings(&mut self, settings_json: &str) {
        self.session.set_settings(Settings::from_json(settings_json));
    }

    /// Events from the latest frame as a JSON array
    pub fn drain_events(&mut self) -> String {
        let events = self.session.drain_events();
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    pub fn high_score(&self) -> f64 {
        self.session.high_scores().best() as f64
    }

    /// Run history as JSON
    pub fn history(&self) -> String {
        serde_json::to_string(&self.session.high_scores().runs).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn fps(&self) -> u32 {
        self.driver.fps()
    }
}
