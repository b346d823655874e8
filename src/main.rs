use heart_hud::{BitmapFont, HudConfig, LivesHud, LivesTracker, SdlAssets};
use log::{info, warn};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

// Game resolution constants
const GAME_WIDTH: u32 = 320;
const GAME_HEIGHT: u32 = 180;
const WINDOW_SCALE: u32 = 3;

/// Game state for the lives demo
#[derive(Debug, Clone, Copy, PartialEq)]
enum GameState {
    Playing,
    GameOver,
}

fn render_game_over(canvas: &mut Canvas<Window>, font: &BitmapFont) -> Result<(), String> {
    let scale = 3;
    let title = "GAME OVER";
    let x = (GAME_WIDTH - font.text_width(title, scale)) as i32 / 2;
    let y = GAME_HEIGHT as i32 / 2 - 20;
    font.draw_text::<Texture, _>(&mut *canvas, title, x, y, Color::RGB(255, 50, 50), scale)?;

    let hint = "R to restart";
    let x = (GAME_WIDTH - font.text_width(hint, 1)) as i32 / 2;
    font.draw_text::<Texture, _>(canvas, hint, x, y + 30, Color::RGB(150, 150, 160), 1)
}

fn main() -> Result<(), String> {
    env_logger::init();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window("Lives HUD", GAME_WIDTH * WINDOW_SCALE, GAME_HEIGHT * WINDOW_SCALE)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Set logical size for automatic pixel-perfect scaling
    canvas
        .set_logical_size(GAME_WIDTH, GAME_HEIGHT)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let assets = SdlAssets::new(&texture_creator);
    let config = HudConfig::load_or_default();

    // Leave an editable copy of the defaults for the next run
    if let Some(path) = HudConfig::user_config_path() {
        if !path.exists() {
            match config.save_to_file(&path) {
                Ok(()) => info!("Wrote default HUD config to {}", path.display()),
                Err(e) => warn!("Could not write HUD config {}: {}", path.display(), e),
            }
        }
    }

    let lives = LivesTracker::new();

    // No HUD at all if the heart assets are missing
    let mut hud = LivesHud::new(&lives, &assets, config)?;
    let overlay_font = BitmapFont::builtin();
    let mut game_state = GameState::Playing;

    info!("Up: gain a life, Down: lose a life, R: restart, Esc: quit");

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::KeyDown {
                    keycode: Some(Keycode::Up),
                    repeat: false,
                    ..
                } if game_state == GameState::Playing => {
                    hud.add_life(&assets)?;
                }
                Event::KeyDown {
                    keycode: Some(Keycode::Down),
                    repeat: false,
                    ..
                } if game_state == GameState::Playing => {
                    hud.remove_life();
                }
                Event::KeyDown {
                    keycode: Some(Keycode::R),
                    repeat: false,
                    ..
                } if game_state == GameState::GameOver => {
                    hud.reinitialize(&assets)?;
                    game_state = GameState::Playing;
                }
                _ => {}
            }
        }

        if game_state == GameState::Playing && !hud.has_lives_remaining() {
            info!("Out of lives, game over");
            game_state = GameState::GameOver;
        }

        hud.update();

        canvas.set_draw_color(Color::RGB(20, 20, 30));
        canvas.clear();

        hud.render(&mut canvas)?;

        if game_state == GameState::GameOver {
            render_game_over(&mut canvas, &overlay_font)?;
        }

        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}
