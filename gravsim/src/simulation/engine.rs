//! Runtime engine and its control surface
//!
//! The engine owns a scenario, the body registry built from it, and the
//! play/pause state. A rendering or timer loop drives it with [`Engine::tick`]
//! once per frame and sends [`Command`]s for user input; it never touches the
//! registry directly.

use crate::error::SimError;
use super::integrator::euler_step;
use super::scenario::Scenario;
use super::states::System;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play,
    Pause,
    Toggle,
    /// Rebuild the registry from the scenario and stop
    Reset,
}

#[derive(Debug, Clone)]
pub struct Engine<const D: usize> {
    scenario: Scenario<D>,
    system: System<D>,
    state: RunState,
}

impl<const D: usize> Engine<D> {
    /// A stopped engine at the scenario's initial condition
    pub fn new(scenario: Scenario<D>) -> Self {
        let system = System::create(&scenario);
        Self {
            scenario,
            system,
            state: RunState::Stopped,
        }
    }

    pub fn apply(&mut self, command: Command) {
        self.state = match (command, self.state) {
            (Command::Play, _) => RunState::Running,
            (Command::Pause, _) => RunState::Stopped,
            (Command::Toggle, RunState::Stopped) => RunState::Running,
            (Command::Toggle, RunState::Running) => RunState::Stopped,
            (Command::Reset, _) => {
                self.system.reset(&self.scenario);
                RunState::Stopped
            }
        };
        log::debug!("{command:?} -> {:?}", self.state);
    }

    /// Advance one step if running. Returns whether a step was taken.
    ///
    /// A failed step leaves the registry as it was and stops the engine.
    pub fn tick(&mut self) -> Result<bool, SimError> {
        if self.state == RunState::Stopped {
            return Ok(false);
        }
        if let Err(e) = self.step() {
            self.state = RunState::Stopped;
            return Err(e);
        }
        Ok(true)
    }

    /// Advance one step regardless of the run state
    pub fn step(&mut self) -> Result<(), SimError> {
        euler_step(
            &mut self.system,
            self.scenario.law(),
            self.scenario.parameters(),
        )
    }

    pub fn system(&self) -> &System<D> {
        &self.system
    }

    pub fn scenario(&self) -> &Scenario<D> {
        &self.scenario
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }
}
