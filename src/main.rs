// main.rs
use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rustcaster::core::game::Game;
use rustcaster::core::hud::{visible_lines, Hud, Overlay};
use rustcaster::core::map::Map;
use rustcaster::core::process_events::process_events;
use rustcaster::core::scores::{InMemoryScoreStore, ScoreClient};
use rustcaster::render::framebuffer::Framebuffer;
use rustcaster::render::renderer::{render_scene, NUM_RAYS, STRIP_WIDTH};

const WINDOW_WIDTH: u32 = NUM_RAYS * STRIP_WIDTH;
const WINDOW_HEIGHT: u32 = 400;
const MAP_FILE: &str = "map.txt";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let map = if Path::new(MAP_FILE).exists() {
        Map::load(MAP_FILE).with_context(|| format!("loading {MAP_FILE}"))?
    } else {
        Map::sample()
    };
    info!(rows = map.rows(), cols = map.cols(), "map loaded");

    let (mut window, raylib_thread) = raylib::init()
        .size(WINDOW_WIDTH as i32, WINDOW_HEIGHT as i32)
        .title("Rustcaster")
        .build();

    // ESC cancels the name prompt, so it must not double as the quit key.
    window.set_exit_key(None);

    let mut framebuffer = Framebuffer::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let frame_image = Image::gen_image_color(WINDOW_WIDTH as i32, WINDOW_HEIGHT as i32, Color::BLACK);
    let mut frame_texture = window
        .load_texture_from_image(&raylib_thread, &frame_image)
        .map_err(anyhow::Error::msg)
        .context("creating frame texture")?;

    let mut game = Game::new(map);
    let scores = ScoreClient::spawn(InMemoryScoreStore::default());

    let mut hud = Hud::new();

    while !window.window_should_close() {
        let dt = window.get_frame_time();

        match &mut hud.overlay {
            Overlay::None => {
                if window.is_key_pressed(KeyboardKey::KEY_ENTER) {
                    hud.open_prompt();
                } else if window.is_key_pressed(KeyboardKey::KEY_H) {
                    scores.fetch();
                }
            }
            Overlay::NameEntry(name) => {
                while let Some(ch) = window.get_char_pressed() {
                    if !ch.is_control() {
                        name.push(ch);
                    }
                }
                if window.is_key_pressed(KeyboardKey::KEY_BACKSPACE) {
                    name.pop();
                }
                if window.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
                    hud.close_overlay();
                } else if window.is_key_pressed(KeyboardKey::KEY_ENTER) && !name.is_empty() {
                    scores.submit(name, game.score);
                    hud.close_overlay();
                }
            }
            Overlay::Listing(_) => {
                if window.is_key_pressed(KeyboardKey::KEY_H) {
                    hud.close_overlay();
                }
            }
        }

        process_events(&window, &mut game.player);
        game.tick(dt);
        render_scene(&mut framebuffer, &game.map, &game.player);
        framebuffer.upload_to_texture(&mut frame_texture);

        // The worker answers whenever it answers; the loop never waits.
        if let Some(event) = scores.poll() {
            hud.handle_event(event);
        }
        hud.tick(dt);

        {
            let mut d = window.begin_drawing(&raylib_thread);
            d.clear_background(Color::BLACK);
            d.draw_texture(&frame_texture, 0, 0, Color::WHITE);
            d.draw_text(&format!("Score: {}", game.score), 10, 10, 20, Color::WHITE);
            if let Some((text, _)) = &hud.notice {
                d.draw_text(text, 10, 40, 20, Color::YELLOW);
            }
            match &hud.overlay {
                Overlay::None => {}
                Overlay::NameEntry(name) => {
                    d.draw_text("Enter your name:", 10, 70, 20, Color::WHITE);
                    d.draw_text(&format!("{name}_"), 10, 100, 20, Color::GREEN);
                }
                Overlay::Listing(listing) => {
                    for (i, line) in visible_lines(listing).enumerate() {
                        d.draw_text(line, 10, 70 + i as i32 * 24, 20, Color::WHITE);
                    }
                }
            }
        }

        // ~60 FPS (16 ms)
        thread::sleep(Duration::from_millis(16));
    }

    Ok(())
}
