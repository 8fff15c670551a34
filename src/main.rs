// Allow unused code for designed-but-not-yet-used APIs
// Remove these as the codebase matures
#![allow(dead_code)]

mod body;
mod colorize;
mod config;
mod display;
mod entity;
mod geometry;
mod math2d;
mod sprite;
mod swarm;
mod texture;
mod util;

use std::rc::Rc;

use colorize::Colorizer;
use config::{Settings, ShipSkin};
use display::{Display, InputEvent, MouseButtonKind, PixelBuffer, RenderTarget};
use entity::Player;
use geometry::Viewport;
use math2d::Vec2;
use sdl2::keyboard::Keycode;
use sprite::SpriteBatch;
use swarm::Swarm;
use texture::Texture;
use util::{FpsCounter, Rng};

const SETTINGS_PATH: &str = "settings.json";

/// Player thrust in px/s² and turn rate in deg/s (dt is in seconds)
const PLAYER_ACCEL: f32 = 300.0;
const PLAYER_TURN_RATE: f32 = 180.0;

/// Parse command line arguments and return (width, height, vsync)
fn parse_args(default_width: u32, default_height: u32) -> (u32, u32, bool) {
    let args: Vec<String> = std::env::args().collect();
    let mut width = default_width;
    let mut height = default_height;
    let mut vsync = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => vsync = false,
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    if let Ok(w) = args[i + 1].parse::<u32>() {
                        width = w;
                    }
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if i + 1 < args.len() {
                    if let Ok(h) = args[i + 1].parse::<u32>() {
                        height = h;
                    }
                    i += 1;
                }
            },
            "--resolution" | "-r" => {
                if i + 1 < args.len() {
                    // Parse WxH format (e.g., 1920x1080)
                    let parts: Vec<&str> = args[i + 1].split('x').collect();
                    if parts.len() == 2 {
                        if let (Ok(w), Ok(h)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                            width = w;
                            height = h;
                        }
                    }
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: driftswarm [OPTIONS]");
                println!();
                println!("Options:");
                println!(
                    "  --width W, -w W       Set window width (default: {})",
                    default_width
                );
                println!(
                    "  --height H, -h H      Set window height (default: {})",
                    default_height
                );
                println!("  --resolution WxH, -r WxH  Set resolution (e.g., 1920x1080)");
                println!("  --no-vsync            Disable VSync for uncapped framerate");
                println!("  --help                Show this help message");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }

    (width, height, vsync)
}

const STAR_COUNT: usize = 120;
const STAR_PARALLAX: f32 = 0.3;

/// Backdrop of dim stars drifting against the camera at a fraction of its
/// speed. Star positions regenerate from a fixed seed every frame, so the
/// field is stable without being stored.
fn draw_starfield(buffer: &mut PixelBuffer, camera_offset: Vec2) {
    let w = buffer.width() as f32;
    let h = buffer.height() as f32;
    let mut rng = Rng::new(0x57A5);

    for _ in 0..STAR_COUNT {
        let base_x = rng.range_f32(0.0, w);
        let base_y = rng.range_f32(0.0, h);
        let v = 60 + (rng.next_u64() % 120) as u8;

        let x = (base_x - camera_offset.x * STAR_PARALLAX).rem_euclid(w);
        let y = (base_y - camera_offset.y * STAR_PARALLAX).rem_euclid(h);
        // y-up world to y-down buffer rows
        buffer.set_pixel(x as i32, (h - 1.0 - y) as i32, v, v, v);
    }
}

/// Colorized skin textures for one faction, all from the shared gray art.
struct SkinSet {
    ship: Rc<Texture>,
    shield: Rc<Texture>,
    pointer: Rc<Texture>,
}

/// Load-time asset setup. A colorize failure aborts here, before the frame
/// loop ever runs.
fn build_skins(
    colorizer: &mut Colorizer,
    ship_gray: &Texture,
    shield_gray: &Texture,
    pointer_gray: &Texture,
    skin: &ShipSkin,
) -> Result<SkinSet, String> {
    Ok(SkinSet {
        ship: colorizer.get(ship_gray, skin.base, skin.low, skin.high)?,
        shield: colorizer.get(shield_gray, skin.base, skin.low, skin.high)?,
        pointer: colorizer.get(pointer_gray, skin.base, skin.low, skin.high)?,
    })
}

fn main() -> Result<(), String> {
    let settings = Settings::load(SETTINGS_PATH).unwrap_or_else(|_| Settings::default());
    let (width, height, vsync) = parse_args(settings.width, settings.height);

    let (mut display, texture_creator) = Display::with_options("driftswarm", width, height, vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, width, height)?;
    let mut buffer = PixelBuffer::with_size(width, height);

    let mut fps_counter = FpsCounter::new(60);

    // Shared grayscale art; colorized once per faction, cached after that
    let ship_gray = Texture::ship_gray(48);
    let shield_gray = Texture::shield_gray(64);
    let pointer_gray = Texture::pointer_gray(24);

    let mut colorizer = Colorizer::with_mid_value(settings.mid_value);
    let player_skins = build_skins(
        &mut colorizer,
        &ship_gray,
        &shield_gray,
        &pointer_gray,
        &settings.player_skin,
    )?;
    let alien_skins = build_skins(
        &mut colorizer,
        &ship_gray,
        &shield_gray,
        &pointer_gray,
        &settings.alien_skin,
    )?;

    let mut batch = SpriteBatch::new();
    let mut rng = Rng::new(0x5EED);

    let mut player = Player::new(
        &mut batch,
        Rc::clone(&player_skins.ship),
        Rc::clone(&player_skins.shield),
        Vec2::zero(),
    );

    // Spawn the swarm just past the right viewport edge so pointers show up
    let mut swarm = Swarm::new(
        settings.swarm_size,
        &mut batch,
        &alien_skins.ship,
        &alien_skins.shield,
        &alien_skins.pointer,
        Vec2::new(width as f32, 0.0),
        &mut rng,
    );

    let viewport = Viewport::new(width as f32, height as f32, settings.pointer_spacing);
    let screen_center = Vec2::new(width as f32 / 2.0, height as f32 / 2.0);

    println!("=== driftswarm ===");
    println!("Resolution: {}x{}", width, height);
    if vsync {
        println!("VSync: ON (60fps locked). Use --no-vsync for uncapped.");
    } else {
        println!("VSync: OFF (uncapped framerate)");
    }
    println!("Controls:");
    println!("  Up         - Thrust");
    println!("  Left/Right - Turn");
    println!("  LMB (hold) - Steer the swarm toward the cursor");
    println!("  F          - Print FPS");
    println!("  S          - Save settings");
    println!("  Escape     - Quit");

    let mut thrusting = false;
    let mut turning_left = false;
    let mut turning_right = false;
    let mut steering = false;
    let mut mouse_screen = (0i32, 0i32);

    'main: loop {
        let (dt, _current_fps, avg_fps) = fps_counter.tick();

        for event in display.poll_events() {
            match event {
                InputEvent::Quit => break 'main,
                InputEvent::KeyDown(key) => match key {
                    Keycode::Escape => break 'main,
                    Keycode::Up => thrusting = true,
                    Keycode::Left => turning_left = true,
                    Keycode::Right => turning_right = true,
                    Keycode::F => println!("FPS: {:.1}", avg_fps),
                    Keycode::S => {
                        if let Err(e) = settings.save(SETTINGS_PATH) {
                            eprintln!("Failed to save: {}", e);
                        } else {
                            println!("Settings saved to {}", SETTINGS_PATH);
                        }
                    },
                    _ => {},
                },
                InputEvent::KeyUp(key) => match key {
                    Keycode::Up => thrusting = false,
                    Keycode::Left => turning_left = false,
                    Keycode::Right => turning_right = false,
                    _ => {},
                },
                InputEvent::MouseMove { x, y } => mouse_screen = (x, y),
                InputEvent::MouseDown { x, y, button } => {
                    if button == MouseButtonKind::Left {
                        steering = true;
                        mouse_screen = (x, y);
                    }
                },
                InputEvent::MouseUp { button, .. } => {
                    if button == MouseButtonKind::Left {
                        steering = false;
                    }
                },
            }
        }

        // Camera stays centered on the player
        let camera_offset = player.position() - screen_center;

        // Player steering: explicit rotation deltas, thrust along the facing
        if turning_left {
            player.rotate_by(-PLAYER_TURN_RATE * dt, &mut batch);
        }
        if turning_right {
            player.rotate_by(PLAYER_TURN_RATE * dt, &mut batch);
        }
        if thrusting {
            let heading = (-player.rotation()).to_radians();
            player.set_acceleration(Vec2::new(heading.cos(), heading.sin()) * PLAYER_ACCEL);
        } else {
            player.set_acceleration(Vec2::zero());
        }

        // Swarm steering: thrust toward the cursor while LMB is held
        if steering {
            // SDL mouse y is top-down; world y is up
            let world = Vec2::new(
                mouse_screen.0 as f32,
                height as f32 - mouse_screen.1 as f32,
            ) + camera_offset;
            swarm.set_accelerations_toward(world);
        } else {
            swarm.clear_accelerations();
        }

        player.update(dt);
        swarm.update(dt, &mut batch);

        let camera_offset = player.position() - screen_center;
        player.reposition_for_camera(camera_offset, &mut batch);
        swarm.reposition_for_camera(camera_offset, &mut batch);
        swarm.set_pointer_positions(player.position(), &viewport, &mut batch);

        buffer.clear(4, 4, 12);
        draw_starfield(&mut buffer, camera_offset);
        batch.draw(&mut buffer);
        display.present(&mut target, &buffer)?;
    }

    Ok(())
}
