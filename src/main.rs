//! Ravine Despoiler entry point
//!
//! Runs the game on the headless platform: boots, waits out the logo, starts
//! a game from the title card and flies a scripted pattern, logging screen
//! changes as it goes.

use ravine_despoiler::Settings;
use ravine_despoiler::consts::LOGO_FRAMES;
use ravine_despoiler::platform::{Button, ButtonSet, HeadlessPlatform};
use ravine_despoiler::sim::{GameState, setup, tick};

/// Settings file path override
const SETTINGS_ENV: &str = "RAVINE_SETTINGS";

/// Button script: idle through the logo, tap A on the title, then weave
fn queue_demo_input(platform: &mut HeadlessPlatform, frames: u32) {
    let title_wait = LOGO_FRAMES as usize + 30;
    platform.push_idle(title_wait);
    platform.push_buttons(ButtonSet::of(&[Button::A]));

    let remaining = (frames as usize).saturating_sub(title_wait + 1);
    for i in 0..remaining {
        let buttons = match (i / 45) % 4 {
            0 => ButtonSet::of(&[Button::Right]),
            2 => ButtonSet::of(&[Button::Left]),
            _ => ButtonSet::EMPTY,
        };
        platform.push_buttons(buttons);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::var(SETTINGS_ENV).unwrap_or_else(|_| Settings::FILE_NAME.to_string());
    let settings = Settings::load(&path);

    let mut platform = HeadlessPlatform::new(settings.seed).with_frame_rate(settings.frame_rate);
    queue_demo_input(&mut platform, settings.headless_frames);

    let mut state = GameState::new(&settings);
    setup(&mut state, &mut platform);

    let mut frames = 0;
    while frames < settings.headless_frames {
        if tick(&mut state, &mut platform) {
            frames += 1;
        }
    }

    log::info!(
        "Ran {} frames: {:?} at frame {}, plane at ({}, {}) heading {}",
        frames,
        state.phase,
        state.frame_count,
        state.plane.body.x,
        state.plane.body.y,
        state.plane.body.x_vel,
    );
}
