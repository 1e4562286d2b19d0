//! Browser bindings. The page owns all widgets and calls in here for results.
//!
//! Results cross the boundary as JSON built from the types' `Serialize`
//! impls, so field names match what native callers serialize.

use crate::input::{self, Limits};
use crate::{export, jump, queens};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_time::Instant;

struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&msg),
            log::Level::Warn => web_sys::console::warn_1(&msg),
            log::Level::Info => web_sys::console::info_1(&msg),
            log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Debug);
    }
}

fn err_value(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(err_value)?;
    js_sys::JSON::parse(&json)
}

/// The input bounds enforced by the parsers, as `{ maxValue, maxLen, minBoard, maxBoard }`.
#[wasm_bindgen]
pub fn limits() -> Result<JsValue, JsValue> {
    to_js(&Limits::default())
}

#[wasm_bindgen(js_name = parseJumpInput)]
pub fn parse_jump_input(text: &str) -> Result<Vec<u32>, JsValue> {
    input::parse_jump_input(text, &Limits::default()).map_err(err_value)
}

#[wasm_bindgen(js_name = parseBoardSize)]
pub fn parse_board_size(text: &str) -> Result<usize, JsValue> {
    input::parse_board_size(text, &Limits::default()).map_err(err_value)
}

/// Returns `{ jumps, trace, path, reachesEnd }`.
#[wasm_bindgen(js_name = computeMinJumps)]
pub fn compute_min_jumps(nums: &[u32]) -> Result<JsValue, JsValue> {
    to_js(&jump::compute_min_jumps(nums))
}

#[wasm_bindgen(js_name = solveAll)]
pub fn solve_all(n: usize) -> Result<JsValue, JsValue> {
    let start = Instant::now();
    let solutions = queens::solve_all(n);
    log::debug!("solveAll({}) took {:?}", n, start.elapsed());
    to_js(&solutions)
}

#[wasm_bindgen(js_name = countAll)]
pub fn count_all(n: usize) -> f64 {
    let start = Instant::now();
    let count = queens::count_all(n);
    log::debug!("countAll({}) took {:?}", n, start.elapsed());
    count as f64
}

#[wasm_bindgen(js_name = uniqueSolutions)]
pub fn unique_solutions(n: usize) -> Result<JsValue, JsValue> {
    to_js(&queens::unique_solutions(n))
}

/// Offers every solution for `n` as a CSV download.
#[wasm_bindgen(js_name = downloadSolutionsCsv)]
pub fn download_solutions_csv(n: usize) -> Result<(), JsValue> {
    let csv_content = export::solutions_csv_string(&queens::solve_all(n)).map_err(err_value)?;

    let window = web_sys::window().ok_or_else(|| err_value("no window"))?;
    let document = window.document().ok_or_else(|| err_value("no document"))?;
    let parts = js_sys::Array::of1(&JsValue::from_str(&csv_content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    let a = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| err_value("anchor element expected"))?;
    a.set_href(&url);
    a.set_download(&export::file_name(n));
    a.click();
    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}
