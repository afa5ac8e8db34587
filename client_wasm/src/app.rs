//! JS bindings: one client per page, driven by the page script

use crate::fsm::ScreenAction;
use crate::renderer::Renderer;
use crate::scene::Scene;
use crate::session::Session;
use game_core::Config;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

struct Client {
    canvas: HtmlCanvasElement,
    renderer: Renderer,
    session: Session,
}

impl Client {
    async fn new(canvas: HtmlCanvasElement, config: Config) -> Result<Self, JsValue> {
        let renderer = Renderer::new(canvas.clone(), &config)
            .await
            .map_err(|e| JsValue::from_str(&e))?;

        // Only used when the config asks for random serves
        let seed = js_sys::Date::now() as u64;
        let session = Session::new(config, seed);

        Ok(Self {
            canvas,
            renderer,
            session,
        })
    }

    fn render(&mut self) -> Result<(), JsValue> {
        self.renderer
            .resize(self.canvas.width(), self.canvas.height());

        let scene = Scene::build(&self.session.snapshot(), self.session.config());
        self.renderer
            .draw(&scene)
            .map_err(|e| JsValue::from_str(&e))
    }
}

thread_local! {
    static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
}

fn with_client<T>(f: impl FnOnce(&mut Client) -> T) -> Result<T, JsValue> {
    CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
        Some(client) => Ok(f(client)),
        None => Err(JsValue::from_str("Client not initialized")),
    })
}

/// Set up logging, WebGPU and the game. `config_json` overrides any of the
/// default field and physics settings.
#[wasm_bindgen]
pub fn init_client(canvas: HtmlCanvasElement, config_json: Option<String>) -> js_sys::Promise {
    console_error_panic_hook::set_once();
    // A second init on the same page finds the logger already installed
    let _ = console_log::init_with_level(log::Level::Info);

    wasm_bindgen_futures::future_to_promise(async move {
        let config = match config_json {
            Some(json) => Config::from_json(&json)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?,
            None => Config::new(),
        };

        let client = Client::new(canvas, config).await?;
        CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
        log::info!("client initialized");
        Ok(JsValue::UNDEFINED)
    })
}

/// Returns true when the key was handled, so the page can prevent scrolling
#[wasm_bindgen]
pub fn key_down(key: &str) -> Result<bool, JsValue> {
    with_client(|client| client.session.key_down(key))
}

#[wasm_bindgen]
pub fn key_up(key: &str) -> Result<bool, JsValue> {
    with_client(|client| client.session.key_up(key))
}

#[wasm_bindgen]
pub fn release_keys() -> Result<(), JsValue> {
    with_client(|client| client.session.release_keys())
}

/// Start (or restart) button
#[wasm_bindgen]
pub fn start_game() -> Result<bool, JsValue> {
    with_client(|client| client.session.start())
}

#[wasm_bindgen]
pub fn quit_game() -> Result<bool, JsValue> {
    with_client(|client| client.session.quit())
}

/// Apply a screen action by name: START, RESTART or QUIT
#[wasm_bindgen]
pub fn screen_action(name: &str) -> Result<bool, JsValue> {
    let action = ScreenAction::parse(name)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown action: {}", name)))?;
    with_client(|client| client.session.apply_action(action))
}

/// Advance the simulation to `now_ms` and draw
#[wasm_bindgen]
pub fn frame(now_ms: f64) -> Result<(), JsValue> {
    with_client(|client| {
        client.session.frame(now_ms);
        client.render()
    })?
}

/// Current screen: "Title", "Playing" or "GameOver"
#[wasm_bindgen]
pub fn screen() -> Result<String, JsValue> {
    with_client(|client| client.session.screen_string())
}

#[wasm_bindgen]
pub fn score_player() -> Result<u32, JsValue> {
    with_client(|client| client.session.score_player())
}

#[wasm_bindgen]
pub fn score_computer() -> Result<u32, JsValue> {
    with_client(|client| client.session.score_computer())
}

#[wasm_bindgen]
pub fn rally_hits() -> Result<u32, JsValue> {
    with_client(|client| client.session.rally_hits())
}
