//! Frame loop
//!
//! One frame: poll keys -> quit check -> simulate (while running) -> render.
//! Everything happens on the calling thread, in that order.

use crate::error::Result;
use crate::platform::{Clock, FixedStep, FrameTimer, KeyboardState, quit_requested, tick_input};
use crate::renderer::{Renderer, SceneTextures, TextureLoader, render_frame};
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, TickInput, tick};

/// Whether the process should keep looping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppStatus {
    Running,
    Terminated,
}

/// Game instance holding all state and collaborators
pub struct App<C: Clock, K: KeyboardState, R: Renderer> {
    pub settings: Settings,
    pub state: GameState,
    pub textures: SceneTextures,
    pub status: AppStatus,
    clock: C,
    keys: K,
    renderer: R,
    timer: FrameTimer,
    fixed: Option<FixedStep>,
    frames: u64,
}

impl<C: Clock, K: KeyboardState, R: Renderer> App<C, K, R> {
    /// Load textures and build a fresh session
    pub fn new(
        settings: Settings,
        loader: &mut impl TextureLoader,
        clock: C,
        keys: K,
        renderer: R,
    ) -> Result<Self> {
        let textures = SceneTextures::load(loader)?;
        let state = GameState::new(&settings, textures.entity_textures());
        let fixed = settings
            .fixed_timestep
            .map(|step| FixedStep::new(step, settings.max_substeps));

        Ok(Self {
            settings,
            state,
            textures,
            status: AppStatus::Running,
            clock,
            keys,
            renderer,
            timer: FrameTimer::new(),
            fixed,
            frames: 0,
        })
    }

    /// Run one frame
    pub fn frame(&mut self) {
        self.keys.poll();
        if quit_requested(&self.keys) {
            log::info!("Quit requested after {} frames", self.frames);
            self.status = AppStatus::Terminated;
            return;
        }

        let input = tick_input(&self.keys);
        self.update(&input);
        render_frame(&self.state, &self.textures, &mut self.renderer);
        self.frames += 1;
    }

    /// Loop until quit or `max_frames`, returning the final phase
    pub fn run(&mut self, max_frames: Option<u64>) -> GamePhase {
        while self.status == AppStatus::Running {
            if max_frames.is_some_and(|max| self.frames >= max) {
                break;
            }
            self.frame();
        }
        log::info!(
            "Shutting down after {} frames: {:?}",
            self.frames,
            self.state.phase
        );
        self.state.phase
    }

    fn update(&mut self, input: &TickInput) {
        let dt = self.timer.delta(&self.clock);
        if self.state.is_terminal() {
            return;
        }

        match &mut self.fixed {
            None => tick(&mut self.state, input, dt, &self.settings),
            Some(fixed) => {
                for _ in 0..fixed.advance(dt) {
                    tick(&mut self.state, input, fixed.step, &self.settings);
                }
            }
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn keys_mut(&mut self) -> &mut K {
        &mut self.keys
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
