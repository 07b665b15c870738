// main.rs
use raylib::prelude::*;

use fog_maze::audio_manager::AudioManager;
use fog_maze::core::maze::{level_available, level_layout};
use fog_maze::core::process_events::process_events;
use fog_maze::render::frame::draw_session;
use fog_maze::render::menu::{draw_level_select, slot_at, LevelSlot, LEVEL_COUNT};
use fog_maze::render::surface::RaylibSurface;
use fog_maze::render::textures::SpriteSheet;
use fog_maze::{LevelSession, Player, Progress, Settings, TickOutcome};

/// Every level starts the avatar on this cell.
const START_CELL: (i32, i32) = (1, 1);

enum Screen {
    LevelSelect { slots: Vec<LevelSlot>, hovered: Option<u32> },
    Playing(LevelSession),
}

fn level_select(settings: &Settings, progress: &Progress) -> Screen {
    let slots = (1..=LEVEL_COUNT)
        .map(|level| LevelSlot {
            level,
            unlocked: progress.is_unlocked(level),
            available: level_available(&settings.levels_dir, level),
        })
        .collect();
    Screen::LevelSelect { slots, hovered: None }
}

fn start_level(settings: &Settings, level: u32) -> Option<Screen> {
    let grid = level_layout(&settings.levels_dir, level)?;
    let (row, col) = START_CELL;
    let player = Player::at_cell(row, col).with_speed(settings.player_speed);
    log::info!("starting level {}", level);
    Some(Screen::Playing(LevelSession::new(level, grid, player)))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load(Settings::default_path());
    let mut progress = Progress::load(&settings.progress_file);

    let (mut window, raylib_thread) = raylib::init()
        .size(settings.window_width, settings.window_height)
        .title(&settings.title)
        .resizable()
        .build();
    window.set_target_fps(settings.target_fps);
    // Escape leaves a level instead of closing the window.
    window.set_exit_key(None);

    let sheet = SpriteSheet::load(&mut window, &raylib_thread, &settings.assets_dir);
    let audio = if settings.audio {
        AudioManager::new(&settings.assets_dir, settings.sfx_volume)
    } else {
        None
    };

    let mut screen = level_select(&settings, &progress);

    while !window.window_should_close() {
        let dt = settings.frame_dt(window.get_frame_time());
        let mut next: Option<Screen> = None;

        match &mut screen {
            Screen::LevelSelect { slots, hovered } => {
                let mouse = window.get_mouse_position();
                *hovered = slot_at(mouse.x, mouse.y);

                let clicked = if window.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
                    *hovered
                } else if window.is_key_pressed(KeyboardKey::KEY_ENTER) {
                    slots.iter().filter(|s| s.playable()).map(|s| s.level).max()
                } else {
                    None
                };
                if let Some(level) = clicked {
                    if slots.iter().any(|s| s.level == level && s.playable()) {
                        next = start_level(&settings, level);
                    }
                }
            }
            Screen::Playing(session) => {
                if window.is_window_focused() {
                    process_events(&window, session);
                } else {
                    // Key releases are lost while unfocused.
                    session.clear_intent();
                }
                if window.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
                    next = Some(level_select(&settings, &progress));
                } else {
                    let sign_before = session.sign_shown();
                    let outcome = session.tick(dt, &mut progress);
                    if let Some(audio) = &audio {
                        if session.sign_shown() && !sign_before {
                            audio.play_sign();
                        }
                        if outcome == TickOutcome::Completed {
                            audio.play_exit();
                        }
                    }
                    if outcome == TickOutcome::Completed {
                        next = Some(level_select(&settings, &progress));
                    }
                }
            }
        }
        if let Some(s) = next {
            screen = s;
        }

        let (w, h) = (window.get_screen_width(), window.get_screen_height());
        let mut d = window.begin_drawing(&raylib_thread);
        d.clear_background(Color::BLACK);
        let mut surface = RaylibSurface::new(&mut d, &sheet, w, h);
        match &screen {
            Screen::LevelSelect { slots, hovered } => {
                draw_level_select(&mut surface, &settings.title, slots, *hovered);
            }
            Screen::Playing(session) => draw_session(&mut surface, session),
        }
    }

    Ok(())
}
