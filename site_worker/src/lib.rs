//! Cloudflare Worker for the Pong site
//!
//! Serves a plain greeting at `/`, the game page at `/play` and the game
//! settings at `/config`. The client bundle under `/pkg` comes from the
//! static assets directory.

use game_core::Config;
use worker::*;

mod page;

pub use page::play_page_html;

const GREETING: &str = "Hello from the Pong site worker!";

#[event(fetch)]
pub async fn main(req: Request, env: Env, _ctx: worker::Context) -> Result<Response> {
    console_log!("{:?} {}", req.method(), req.path());

    let router = Router::new();

    router
        .get_async("/", handle_index)
        .get_async("/play", handle_play)
        .get_async("/config", handle_config)
        .run(req, env)
        .await
}

/// Text returned at the site root
pub fn greeting() -> &'static str {
    GREETING
}

/// Settings handed to the client at start-up
pub fn config_json(config: &Config) -> serde_json::Result<String> {
    serde_json::to_string(config)
}

async fn handle_index(_req: Request, _ctx: RouteContext<()>) -> Result<Response> {
    Response::ok(greeting())
}

async fn handle_play(_req: Request, _ctx: RouteContext<()>) -> Result<Response> {
    Response::from_html(play_page_html(&Config::new()))
}

async fn handle_config(_req: Request, _ctx: RouteContext<()>) -> Result<Response> {
    match config_json(&Config::new()) {
        Ok(json) => {
            let mut headers = Headers::new();
            headers.set("Content-Type", "application/json")?;
            Ok(Response::ok(json)?.with_headers(headers))
        }
        Err(e) => {
            console_log!("Failed to serialize config: {}", e);
            Response::error("Failed to serialize config", 500)
        }
    }
}
