//! Host boundaries and the frame-driving game loop
//!
//! The simulation never touches the renderer, display, or audio directly.
//! [`GameLoop`] owns the session, drains the input buffer once per frame,
//! advances the sim, and maps emitted events onto the boundary traits. All
//! boundaries are fire-and-forget and best-effort: a host that has nothing
//! to show or play plugs in the null implementations.

use glam::Vec3;

use crate::input::{InputState, Key};
use crate::sim::{self, GameEvent, Phase, Prop, Session, TickInput};
use crate::tuning::Tuning;

/// Sounds the core can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// Looping engine hum while a session runs
    EngineLoop,
    /// One-shot crash on game over
    Crash,
}

/// Audio output boundary. Every call is best-effort: an unloaded or missing
/// buffer is a silent no-op, never an error.
pub trait AudioSink {
    fn play_loop(&mut self, sound: Sound);
    fn stop(&mut self, sound: Sound);
    fn play_once(&mut self, sound: Sound);
}

/// UI boundary for prompts and the score readout
pub trait Display {
    fn show_start_prompt(&mut self, label: &str);
    fn hide_start_prompt(&mut self);
    fn set_score_text(&mut self, score: u64);
    fn show_end_prompt(&mut self, score: u64);
}

/// What the renderer gets to draw each frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub player_pos: Vec3,
    pub pursuer_pos: Vec3,
    /// Both vehicles are hidden together after a crash
    pub vehicles_visible: bool,
    /// Draw the stand-in box until the real vehicle model is loaded
    pub standin: bool,
    pub props: &'a [Prop],
}

/// Rendering boundary; consumes positions and visibility, returns nothing
pub trait Renderer {
    fn draw(&mut self, frame: &FrameView<'_>);
}

/// Renderer that draws nothing (headless hosts, tests)
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _frame: &FrameView<'_>) {}
}

/// Display that shows nothing
#[derive(Debug, Default)]
pub struct NullDisplay;

impl Display for NullDisplay {
    fn show_start_prompt(&mut self, _label: &str) {}
    fn hide_start_prompt(&mut self) {}
    fn set_score_text(&mut self, _score: u64) {}
    fn show_end_prompt(&mut self, _score: u64) {}
}

/// Audio sink that plays nothing
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_loop(&mut self, _sound: Sound) {}
    fn stop(&mut self, _sound: Sound) {}
    fn play_once(&mut self, _sound: Sound) {}
}

/// Outcome of the asynchronous vehicle model load. The simulation never
/// waits on this; until `Loaded` the renderer draws the stand-in box, which
/// shares the collision half extents from tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelSlot {
    #[default]
    Pending,
    Loaded,
    Failed,
}

/// The orchestrator: owns the session and all boundaries, driven by the
/// host's display-refresh callback via [`GameLoop::frame`]
pub struct GameLoop<R, D, A> {
    tuning: Tuning,
    session: Session,
    /// Written by host event callbacks between frames, read once per tick
    pub input: InputState,
    renderer: R,
    display: D,
    audio: A,
    model: ModelSlot,
    prev_pause_level: bool,
    prev_start_level: bool,
    events: Vec<GameEvent>,
}

impl<R: Renderer, D: Display, A: AudioSink> GameLoop<R, D, A> {
    pub fn new(tuning: Tuning, seed: u64, renderer: R, mut display: D, audio: A) -> Self {
        let session = Session::new(seed, &tuning);
        display.show_start_prompt("Start");
        Self {
            tuning,
            session,
            input: InputState::new(),
            renderer,
            display,
            audio,
            model: ModelSlot::default(),
            prev_pause_level: false,
            prev_start_level: false,
            events: Vec::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Explicit start/restart (UI button, start key)
    pub fn start(&mut self) {
        if sim::start_session(&mut self.session, &self.tuning) {
            self.on_event(GameEvent::Started);
        }
    }

    /// The vehicle model finished loading
    pub fn model_loaded(&mut self) {
        self.model = ModelSlot::Loaded;
        log::info!("vehicle model loaded");
    }

    /// The vehicle model load failed; the stand-in stays on duty
    pub fn model_failed(&mut self) {
        self.model = ModelSlot::Failed;
        log::warn!("vehicle model failed to load, using stand-in");
    }

    /// One host frame callback: read input, advance the sim, dispatch side
    /// effects, draw. Non-Running frames are render-only.
    pub fn frame(&mut self) {
        let input = self.drain_input();

        let mut events = std::mem::take(&mut self.events);
        events.clear();
        sim::tick(&mut self.session, &input, &self.tuning, &mut events);
        for event in events.drain(..) {
            self.on_event(event);
        }
        self.events = events;

        if self.session.phase == Phase::Running {
            self.display.set_score_text(self.session.display_score());
        }

        self.renderer.draw(&FrameView {
            player_pos: self.session.player.pos,
            pursuer_pos: self.session.pursuer.pos,
            vehicles_visible: self.session.vehicles_visible(),
            standin: self.model != ModelSlot::Loaded,
            props: self.session.field.props(),
        });
    }

    /// Snapshot the input buffer into tick intent. Steering is level-based;
    /// pause and start fire once per key press.
    fn drain_input(&mut self) -> TickInput {
        let pause_level = self.input.is_pressed(Key::PauseToggle);
        let start_level = self.input.is_pressed(Key::Start);
        let input = TickInput {
            left: self.input.is_pressed(Key::Left),
            right: self.input.is_pressed(Key::Right),
            pause: pause_level && !self.prev_pause_level,
            start: start_level && !self.prev_start_level,
            drag_delta: self.input.consume_lateral_drag(),
        };
        self.prev_pause_level = pause_level;
        self.prev_start_level = start_level;
        input
    }

    fn on_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::Started => {
                self.display.hide_start_prompt();
                self.audio.play_loop(Sound::EngineLoop);
            }
            GameEvent::Crashed { final_score } => {
                self.audio.stop(Sound::EngineLoop);
                self.audio.play_once(Sound::Crash);
                self.display.show_end_prompt(final_score);
                self.display.show_start_prompt("Restart");
            }
            GameEvent::Paused | GameEvent::Resumed | GameEvent::Wrapped => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingDisplay {
        calls: Vec<String>,
    }

    impl Display for RecordingDisplay {
        fn show_start_prompt(&mut self, label: &str) {
            self.calls.push(format!("start_prompt:{label}"));
        }
        fn hide_start_prompt(&mut self) {
            self.calls.push("hide_start_prompt".into());
        }
        fn set_score_text(&mut self, score: u64) {
            self.calls.push(format!("score:{score}"));
        }
        fn show_end_prompt(&mut self, score: u64) {
            self.calls.push(format!("end_prompt:{score}"));
        }
    }

    #[derive(Debug, Default)]
    struct RecordingAudio {
        calls: Vec<String>,
    }

    impl AudioSink for RecordingAudio {
        fn play_loop(&mut self, sound: Sound) {
            self.calls.push(format!("loop:{sound:?}"));
        }
        fn stop(&mut self, sound: Sound) {
            self.calls.push(format!("stop:{sound:?}"));
        }
        fn play_once(&mut self, sound: Sound) {
            self.calls.push(format!("once:{sound:?}"));
        }
    }

    /// Renderer capturing the last frame it was handed
    #[derive(Debug, Default)]
    struct CapturingRenderer {
        frames: usize,
        last_visible: bool,
        last_standin: bool,
        last_prop_count: usize,
    }

    impl Renderer for CapturingRenderer {
        fn draw(&mut self, frame: &FrameView<'_>) {
            self.frames += 1;
            self.last_visible = frame.vehicles_visible;
            self.last_standin = frame.standin;
            self.last_prop_count = frame.props.len();
        }
    }

    fn test_loop() -> GameLoop<CapturingRenderer, RecordingDisplay, RecordingAudio> {
        GameLoop::new(
            Tuning::default(),
            42,
            CapturingRenderer::default(),
            RecordingDisplay::default(),
            RecordingAudio::default(),
        )
    }

    #[test]
    fn test_start_side_effects() {
        let mut game = test_loop();
        assert_eq!(game.display().calls, vec!["start_prompt:Start"]);

        game.start();
        assert!(game.display().calls.contains(&"hide_start_prompt".into()));
        assert_eq!(game.audio().calls, vec!["loop:EngineLoop"]);
        assert_eq!(game.session().phase, Phase::Running);
    }

    #[test]
    fn test_crash_side_effects() {
        let mut game = test_loop();
        game.start();
        game.session_mut().pursuer.pos = game.session().player.pos;

        game.frame();
        assert_eq!(game.session().phase, Phase::Ended);

        let audio = &game.audio().calls;
        assert_eq!(
            audio,
            &vec![
                "loop:EngineLoop".to_string(),
                "stop:EngineLoop".into(),
                "once:Crash".into()
            ]
        );
        let display = &game.display().calls;
        assert!(display.contains(&"end_prompt:0".into()));
        assert_eq!(display.last().unwrap(), "start_prompt:Restart");

        // Vehicles hidden from rendering after the crash
        assert!(!game.renderer().last_visible);
    }

    #[test]
    fn test_pause_key_fires_once_per_press() {
        let mut game = test_loop();
        game.start();

        // Hold the key across several frames: exactly one transition
        game.input.set_pressed(Key::PauseToggle, true);
        for _ in 0..5 {
            game.frame();
        }
        assert_eq!(game.session().phase, Phase::Paused);

        // Release and press again: resumes
        game.input.set_pressed(Key::PauseToggle, false);
        game.frame();
        game.input.set_pressed(Key::PauseToggle, true);
        game.frame();
        assert_eq!(game.session().phase, Phase::Running);
    }

    #[test]
    fn test_score_text_every_running_frame() {
        let mut game = test_loop();
        game.start();
        for _ in 0..12 {
            game.frame();
        }
        // 12 running ticks: raw score 12, displayed 1
        let display = &game.display().calls;
        assert_eq!(display.last().unwrap(), "score:1");
        let score_updates = display.iter().filter(|c| c.starts_with("score:")).count();
        assert_eq!(score_updates, 12);
    }

    #[test]
    fn test_renders_even_when_idle() {
        let mut game = test_loop();
        game.frame();
        game.frame();
        assert_eq!(game.renderer().frames, 2);
        assert!(game.renderer().last_visible);
        assert_eq!(game.renderer().last_prop_count, game.session().field.len());
        assert_eq!(game.session().phase, Phase::Idle);
    }

    #[test]
    fn test_standin_until_model_loads() {
        let mut game = test_loop();
        game.frame();
        assert!(game.renderer().last_standin);

        game.model_failed();
        game.frame();
        assert!(game.renderer().last_standin);

        game.model_loaded();
        game.frame();
        assert!(!game.renderer().last_standin);
    }

    #[test]
    fn test_drag_consumed_once() {
        let mut game = test_loop();
        game.start();
        game.input.add_drag(200.0);

        game.frame();
        let x_after_drag = game.session().player.pos.x;
        assert!(x_after_drag > 0.0);

        // Next frame sees no drag; velocity only damps
        game.frame();
        let vel = game.session().player.lateral_vel;
        assert!((vel - 200.0 * game.tuning().touch_sensitivity * game.tuning().damping).abs() < 1e-6);
    }
}
