//! WebAssembly draw engine for number and list raffles.
//!
//! The engine is pure Rust and runs headless: `sampler` draws, `mask` redacts,
//! `validate` turns form input into requests, and `session` ties them to a
//! caller-owned history. The wasm exports below are a thin layer the page
//! calls from its event handlers; the rolling animation stays in JS and only
//! asks for preview picks.

pub mod config;
pub mod error;
pub mod history;
pub mod ingest;
pub mod mask;
pub mod preview;
pub mod rng;
pub mod sampler;
pub mod session;
pub mod types;
pub mod validate;

pub use config::RaffleConfig;
pub use error::DrawError;
pub use history::{DrawOutcome, History, HistoryEntry, RequestSnapshot};
pub use mask::{mask, mask_with, MaskPolicy};
pub use preview::RollingPreview;
pub use rng::{SequenceRng, UniformSource, WasmRng};
pub use sampler::{draw_items, draw_range, ExclusionSet};
pub use session::RaffleSession;
pub use types::{ItemRequest, RangeRequest};

// ─── WASM Exports (only compiled for wasm32 target) ─────────────────────────

#[cfg(target_arch = "wasm32")]
mod wasm_exports {
    use serde::Serialize;
    use wasm_bindgen::prelude::*;

    use crate::config::RaffleConfig;
    use crate::preview::RollingPreview;
    use crate::rng::WasmRng;
    use crate::types::ItemRequest;
    use crate::{ingest, mask, sampler, session, validate};

    fn now_ms() -> u64 {
        js_sys::Date::now() as u64
    }

    fn config_from_js(config: JsValue) -> Result<RaffleConfig, JsError> {
        if config.is_undefined() || config.is_null() {
            return Ok(RaffleConfig::default());
        }
        Ok(serde_wasm_bindgen::from_value(config)?)
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct PreviewSchedule {
        interval_ms: u32,
        frame_count: u32,
    }

    /// Mask sensitive characters with the default redaction character.
    #[wasm_bindgen(js_name = "maskSensitive")]
    pub fn wasm_mask_sensitive(text: &str) -> String {
        mask::mask(text)
    }

    /// Mask sensitive characters with a caller-chosen redaction character.
    #[wasm_bindgen(js_name = "maskSensitiveWith")]
    pub fn wasm_mask_sensitive_with(text: &str, redaction: char) -> String {
        mask::mask_with(text, redaction)
    }

    /// Parse pasted or uploaded text into an item list (`string[]`).
    #[wasm_bindgen(js_name = "parseItems")]
    pub fn wasm_parse_items(file_name: &str, text: &str) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&ingest::parse_upload(file_name, text))?)
    }

    /// A single throwaway pick for the rolling number animation.
    #[wasm_bindgen(js_name = "previewNumber")]
    pub fn wasm_preview_number(min: f64, max: f64) -> Option<f64> {
        let mut rng = WasmRng::new();
        sampler::preview_number(min as i64, max as i64, &mut rng).map(|v| v as f64)
    }

    /// A single throwaway pick for the rolling list animation.
    #[wasm_bindgen(js_name = "previewItem")]
    pub fn wasm_preview_item(items: JsValue) -> Result<Option<String>, JsError> {
        let items: Vec<String> = serde_wasm_bindgen::from_value(items)?;
        let mut rng = WasmRng::new();
        Ok(sampler::preview_item(&items, &mut rng).map(str::to_owned))
    }

    /// Session state held by the page: config, history and exclusion set.
    #[wasm_bindgen(js_name = "RaffleSession")]
    pub struct WasmSession {
        inner: session::RaffleSession,
        rng: WasmRng,
    }

    #[wasm_bindgen(js_class = "RaffleSession")]
    impl WasmSession {
        /// `config` may be `undefined` for defaults.
        #[wasm_bindgen(constructor)]
        pub fn new(config: JsValue) -> Result<WasmSession, JsError> {
            Ok(Self {
                inner: session::RaffleSession::new(config_from_js(config)?),
                rng: WasmRng::new(),
            })
        }

        /// Deterministic session for replays and demos.
        #[wasm_bindgen(js_name = "withSeed")]
        pub fn with_seed(config: JsValue, seed: u32) -> Result<WasmSession, JsError> {
            Ok(Self {
                inner: session::RaffleSession::new(config_from_js(config)?),
                rng: WasmRng::from_seed(seed as u64),
            })
        }

        /// Draw numbers from raw form fields. Returns `number[]`.
        #[wasm_bindgen(js_name = "drawNumbers")]
        pub fn draw_numbers(
            &mut self,
            min: &str,
            max: &str,
            quantity: &str,
            avoid_repeats: bool,
        ) -> Result<JsValue, JsError> {
            let request = validate::parse_range_input(min, max, quantity, avoid_repeats)?;
            let values = self.inner.draw_numbers(&request, &mut self.rng, now_ms())?;
            Ok(serde_wasm_bindgen::to_value(&values)?)
        }

        /// Draw from an `ItemRequest` object
        /// (`{ items, quantity, avoidRepeats, excludeDrawn?, mask? }`).
        /// Returns `string[]`.
        #[wasm_bindgen(js_name = "drawItems")]
        pub fn draw_items(&mut self, request: JsValue) -> Result<JsValue, JsError> {
            let request: ItemRequest = serde_wasm_bindgen::from_value(request)?;
            let values = self.inner.draw_items(&request, &mut self.rng, now_ms())?;
            Ok(serde_wasm_bindgen::to_value(&values)?)
        }

        /// Draw from pasted text, one entry per line.
        #[wasm_bindgen(js_name = "drawItemsFromText")]
        pub fn draw_items_from_text(
            &mut self,
            text: &str,
            quantity: u32,
            avoid_repeats: bool,
            exclude_drawn: bool,
            mask: bool,
        ) -> Result<JsValue, JsError> {
            let request = ItemRequest::new(ingest::parse_list(text), quantity as usize, avoid_repeats)
                .excluding_drawn(exclude_drawn)
                .masked(mask);
            let values = self.inner.draw_items(&request, &mut self.rng, now_ms())?;
            Ok(serde_wasm_bindgen::to_value(&values)?)
        }

        /// `HistoryEntry[]`, oldest first.
        pub fn history(&self) -> Result<JsValue, JsError> {
            Ok(serde_wasm_bindgen::to_value(self.inner.history())?)
        }

        /// Text for the copy button, or `undefined` before the first draw.
        #[wasm_bindgen(js_name = "clipboardText")]
        pub fn clipboard_text(&self) -> Option<String> {
            self.inner.clipboard_text()
        }

        /// `{ intervalMs, frameCount }` for the host's animation timer.
        #[wasm_bindgen(js_name = "previewSchedule")]
        pub fn preview_schedule(&self) -> Result<JsValue, JsError> {
            let preview = RollingPreview::from_config(self.inner.config());
            let schedule = PreviewSchedule {
                interval_ms: preview.interval_ms(),
                frame_count: preview.frame_count(),
            };
            Ok(serde_wasm_bindgen::to_value(&schedule)?)
        }

        pub fn reset(&mut self) {
            self.inner.reset();
        }
    }

    /// Ping function to verify WASM is loaded.
    #[wasm_bindgen(js_name = "ping")]
    pub fn wasm_ping() -> String {
        "WASM raffle ready".to_string()
    }
}
