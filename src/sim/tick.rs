//! Fixed timestep simulation tick
//!
//! One call to `tick` is one frame: pace, poll buttons, run the active
//! screen, commit the frame buffer.

use super::state::{GameState, GamePhase};
use crate::consts::*;
use crate::platform::{Button, Color, Platform, Sprite};

/// Jingle played when a level is completed: (frequency Hz, duration ms)
pub const LEVEL_COMPLETE_TONE: (u16, u16) = (880, 500);

/// Boot: start at the studio logo
pub fn setup<P: Platform + ?Sized>(state: &mut GameState, platform: &mut P) {
    enter_state(state, platform, GamePhase::InitialLogo);
}

/// Switch screens. The frame counter restarts, any tone stops, and the new
/// screen's entry actions run before its first update.
pub fn enter_state<P: Platform + ?Sized>(state: &mut GameState, platform: &mut P, phase: GamePhase) {
    log::info!("{:?} -> {:?} after {} frames", state.phase, phase, state.frame_count);
    state.frame_count = 0;
    platform.stop_tone();
    state.phase = phase;

    match phase {
        GamePhase::TitleScreen => state.zeppelin.reset(),
        GamePhase::GameActive => {
            let seed = platform.generate_seed();
            state.reseed(seed);
            state.plane.reset();
        }
        GamePhase::InitialLogo | GamePhase::ObjectiveScreen | GamePhase::LevelComplete => {}
    }
}

/// End the current level: enter `LevelComplete` and start its jingle
pub fn complete_level<P: Platform + ?Sized>(state: &mut GameState, platform: &mut P) {
    enter_state(state, platform, GamePhase::LevelComplete);
    if state.sound {
        let (freq, duration) = LEVEL_COMPLETE_TONE;
        platform.play_tone(freq, duration);
    }
}

/// Advance the game by one frame. Returns false, leaving everything
/// untouched, when the pacer says no frame is due.
pub fn tick<P: Platform + ?Sized>(state: &mut GameState, platform: &mut P) -> bool {
    if !platform.next_frame() {
        return false;
    }
    platform.poll();
    state.frame_count = state.frame_count.saturating_add(1);

    match state.phase {
        GamePhase::InitialLogo => initial_logo(state, platform),
        GamePhase::TitleScreen => title_screen(state, platform),
        GamePhase::ObjectiveScreen => objective_screen(state, platform),
        GamePhase::GameActive => game_active(state, platform),
        GamePhase::LevelComplete => level_complete(state, platform),
    }

    platform.display();
    true
}

fn initial_logo<P: Platform + ?Sized>(state: &mut GameState, platform: &mut P) {
    if state.frame_count == 1 {
        platform.clear();
        platform.draw_compressed(0, 0, Sprite::StudioLogo);
    }
    if state.frame_count > LOGO_FRAMES {
        enter_state(state, platform, GamePhase::TitleScreen);
    }
}

fn title_screen<P: Platform + ?Sized>(state: &mut GameState, platform: &mut P) {
    if state.frame_count == 1 {
        platform.clear();
        state.ravine.draw(platform);
        platform.draw_sprite(LOGO_X, LOGO_Y, Sprite::TitleLogo, 0);
    }
    if state.frame_count == PROMPT_FRAME {
        let (w, h) = Sprite::PressA.size();
        platform.fill_rect(PROMPT_X, PROMPT_Y, w, h, Color::Black);
        platform.draw_compressed(PROMPT_X, PROMPT_Y, Sprite::PressA);
    }

    state.zeppelin.erase(platform);
    state.zeppelin.integrate_horizontal(&state.tuning);
    state.zeppelin.draw(platform);

    if platform.just_pressed(Button::A) {
        let next = if state.show_objective {
            GamePhase::ObjectiveScreen
        } else {
            GamePhase::GameActive
        };
        enter_state(state, platform, next);
    }
}

fn objective_screen<P: Platform + ?Sized>(state: &mut GameState, platform: &mut P) {
    if state.frame_count == 1 {
        platform.clear();
    }
    if state.frame_count > OBJECTIVE_FRAMES {
        enter_state(state, platform, GamePhase::GameActive);
    }
}

fn game_active<P: Platform + ?Sized>(state: &mut GameState, platform: &mut P) {
    state
        .plane
        .steer(platform.pressed(Button::Left), platform.pressed(Button::Right));
    state.plane.integrate_horizontal(&state.tuning, &mut state.rng);

    platform.clear();
    state.ravine.draw(platform);
    state.plane.draw(platform);

    // Hold A and tap B to go back to the logo
    if platform.pressed(Button::A) && platform.just_pressed(Button::B) {
        enter_state(state, platform, GamePhase::InitialLogo);
    }
}

fn level_complete<P: Platform + ?Sized>(state: &mut GameState, platform: &mut P) {
    if state.frame_count > LEVEL_COMPLETE_FRAMES && !platform.is_playing() {
        enter_state(state, platform, GamePhase::TitleScreen);
    }
}
