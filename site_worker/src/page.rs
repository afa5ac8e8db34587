//! The game page served at `/play`

use game_core::Config;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Pong</title>
    <style>
        body { margin: 0; padding: 0; display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; background: #1a1a1a; color: #fff; font-family: monospace; }
        h1 { letter-spacing: 0.3em; }
        #stage { position: relative; }
        #canvas { display: block; background: #000; }
        #overlay { position: absolute; inset: 0; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 12px; background: rgba(0, 0, 0, 0.6); }
        #overlay[hidden] { display: none; }
        #hud { margin-top: 12px; display: flex; gap: 24px; }
        #status { margin-top: 10px; color: #888; font-size: 12px; }
        button { padding: 8px 16px; font-family: monospace; font-size: 16px; background: #4a9eff; color: white; border: none; border-radius: 4px; cursor: pointer; }
        button:hover { background: #5aaeff; }
        button:disabled { background: #666; cursor: not-allowed; }
    </style>
</head>
<body>
    <h1>PONG</h1>
    <div id="stage">
        <canvas id="canvas" width="{{WIDTH}}" height="{{HEIGHT}}"></canvas>
        <div id="overlay">
            <div id="message"></div>
            <button id="startBtn" disabled>Start Game</button>
            <div>Press Enter to play. Arrow keys or W/S move your paddle, Escape quits.</div>
        </div>
    </div>
    <div id="hud">
        <span id="score">You 0 : 0 Computer</span>
        <span id="rally">Rally 0</span>
    </div>
    <div id="status">Loading WASM...</div>
    <script type="module">
        import init, { init_client, key_down, key_up, release_keys, start_game, frame, screen, score_player, score_computer, rally_hits } from './pkg/client_wasm.js';

        const canvas = document.getElementById('canvas');
        const overlay = document.getElementById('overlay');
        const message = document.getElementById('message');
        const startBtn = document.getElementById('startBtn');
        const scoreEl = document.getElementById('score');
        const rallyEl = document.getElementById('rally');
        let lastScreen = null;

        async function main() {
            try {
                await init();
                const config = await fetch('/config')
                    .then((r) => (r.ok ? r.text() : undefined))
                    .catch(() => undefined);
                await init_client(canvas, config);
                updateStatus('Ready');
                startBtn.disabled = false;
                setupInputHandlers();
                startRenderLoop();
            } catch (error) {
                console.error('Error:', error);
                updateStatus('Error: ' + (error.message || error));
            }
        }

        function updateStatus(msg) {
            document.getElementById('status').textContent = msg;
        }

        function updateHud() {
            const current = screen();
            if (current !== lastScreen) {
                lastScreen = current;
                overlay.hidden = current === 'Playing';
                startBtn.textContent = current === 'GameOver' ? 'Restart Game' : 'Start Game';
                message.textContent = current === 'GameOver' ? 'Game Over' : '';
            }
            scoreEl.textContent = `You ${score_player()} : ${score_computer()} Computer`;
            rallyEl.textContent = `Rally ${rally_hits()}`;
        }

        function setupInputHandlers() {
            window.addEventListener('keydown', (e) => {
                if (key_down(e.key)) e.preventDefault();
            });
            window.addEventListener('keyup', (e) => {
                if (key_up(e.key)) e.preventDefault();
            });
            window.addEventListener('blur', () => release_keys());
            startBtn.addEventListener('click', () => {
                start_game();
                startBtn.blur();
            });
        }

        function startRenderLoop() {
            function render(now) {
                try {
                    frame(now);
                    updateHud();
                } catch (e) {
                    console.error('Render error:', e);
                }
                requestAnimationFrame(render);
            }
            requestAnimationFrame(render);
        }

        main();
    </script>
</body>
</html>"#;

/// The game page with a canvas sized to the play field
pub fn play_page_html(config: &Config) -> String {
    PAGE_TEMPLATE
        .replace("{{WIDTH}}", &(config.field_width as u32).to_string())
        .replace("{{HEIGHT}}", &(config.field_height as u32).to_string())
}
