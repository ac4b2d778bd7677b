//! Animation sink: fire-and-forget commands for the animation layer.
//!
//! Core never reads animation state back. ECS side buffers commands in an
//! `AnimationRecorder` during the tick and forwards them as
//! `AnimationCommandEvent`s (см. `player_core::systems`).

use bevy::prelude::*;

use crate::action::CharacterState;
use crate::direction::Direction;

/// Animator parameter flags driven by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationFlag {
    /// Alternates which foot a walk cycle starts with
    OddStep,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationCommand {
    SetState(CharacterState),
    SetDirection(Direction),
    SetTime(f32),
    SetBool(AnimationFlag, bool),
}

pub trait AnimationSink {
    fn set_state(&mut self, state: CharacterState);
    fn set_direction(&mut self, direction: Direction);
    fn set_time(&mut self, time: f32);
    fn set_bool(&mut self, flag: AnimationFlag, value: bool);
}

/// Buffering sink (one per character per tick)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationRecorder {
    pub commands: Vec<AnimationCommand>,
}

impl AnimationRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, AnimationCommand> {
        self.commands.drain(..)
    }
}

impl AnimationSink for AnimationRecorder {
    fn set_state(&mut self, state: CharacterState) {
        self.commands.push(AnimationCommand::SetState(state));
    }

    fn set_direction(&mut self, direction: Direction) {
        self.commands.push(AnimationCommand::SetDirection(direction));
    }

    fn set_time(&mut self, time: f32) {
        self.commands.push(AnimationCommand::SetTime(time));
    }

    fn set_bool(&mut self, flag: AnimationFlag, value: bool) {
        self.commands.push(AnimationCommand::SetBool(flag, value));
    }
}

/// Animation command addressed to a character's animator (ECS → animation layer)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct AnimationCommandEvent {
    pub entity: Entity,
    pub command: AnimationCommand,
}
