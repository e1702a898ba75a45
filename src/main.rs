//! Corridor Chase entry point
//!
//! Headless demo: drives the game loop with a scripted swerve pattern and
//! logs what the display/audio boundaries would show. Real hosts plug a
//! renderer and UI into the same traits.

use corridor_chase::host::{AudioSink, Display, GameLoop, NullRenderer, Sound};
use corridor_chase::sim::Phase;
use corridor_chase::{Key, Tuning};

/// Display that narrates prompts and score changes to the log
#[derive(Debug, Default)]
struct ConsoleDisplay {
    last_score: Option<u64>,
}

impl Display for ConsoleDisplay {
    fn show_start_prompt(&mut self, label: &str) {
        log::info!("[display] start prompt: {label}");
    }
    fn hide_start_prompt(&mut self) {
        log::info!("[display] start prompt hidden");
    }
    fn set_score_text(&mut self, score: u64) {
        if self.last_score != Some(score) {
            log::debug!("[display] score {score}");
            self.last_score = Some(score);
        }
    }
    fn show_end_prompt(&mut self, score: u64) {
        log::info!("[display] game over, score {score}");
    }
}

/// Audio sink that narrates playback to the log
#[derive(Debug, Default)]
struct LogAudio;

impl AudioSink for LogAudio {
    fn play_loop(&mut self, sound: Sound) {
        log::info!("[audio] loop {sound:?}");
    }
    fn stop(&mut self, sound: Sound) {
        log::info!("[audio] stop {sound:?}");
    }
    fn play_once(&mut self, sound: Sound) {
        log::info!("[audio] play {sound:?}");
    }
}

fn main() {
    env_logger::init();

    let tuning = Tuning::load();
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0xC0FFEE);
    log::info!("Corridor Chase (headless demo), seed {seed}");

    let mut game = GameLoop::new(
        tuning,
        seed,
        NullRenderer,
        ConsoleDisplay::default(),
        LogAudio,
    );
    game.start();

    // Swerve between the road edges until the pursuer connects
    for frame in 0u64..5000 {
        let steer_right = (frame / 40) % 2 == 0;
        game.input.set_pressed(Key::Right, steer_right);
        game.input.set_pressed(Key::Left, !steer_right);
        game.frame();

        if game.session().phase == Phase::Ended {
            break;
        }
    }

    println!(
        "survived {} ticks, final score {}",
        game.session().score,
        game.session().display_score()
    );
}
