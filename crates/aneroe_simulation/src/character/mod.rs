//! Player character state machine.
//!
//! `PlayerCharacter`: контекст одного персонажа: очередь state actions,
//! direction registers, combat buffer и текущее состояние
//! {Still, Walking, Attacking, Blocking}.
//!
//! # Fixed tick
//!
//! ```text
//! fixed_update():
//!   1. state_queue_update(): drain queue in priority order
//!        Still      → deferred until gate + direction + link lock allow
//!        Walking    → always applied
//!        Attacking  → applied or DROPPED (one-shot)
//!        Blocking   → applied or DROPPED (one-shot)
//!   2. tap buffer / link timers tick
//! ```
//!
//! External collaborators come in as arguments (gate, inventory, animation
//! sink), so the context has no hidden globals and is testable without ECS.

use bevy::prelude::*;

use crate::action::{ActionQueue, CharacterState, StateAction};
use crate::animation::{AnimationFlag, AnimationSink};
use crate::components::{Inventory, MovementGate, SpeedFactor, SpeedModifiers};
use crate::config::CharacterConfig;
use crate::direction::{CombatDirectionBuffer, Direction, DirectionInput, DirectionResolver};
use crate::item_system::{CombatCapable, ItemId};
use crate::logger;

pub mod builder;
pub mod events;
pub mod interaction;
pub mod persistence;

#[cfg(test)]
mod state_machine_tests;

pub use builder::{CharacterBuilder, CharacterBundle, DefaultItems};
pub use events::CharacterEvent;
pub use interaction::{InteractCandidate, InteractLayer, InteractionShape, OverlapQuery, INTERACT_LAYERS};
pub use persistence::CharacterSaveData;

/// Per-character context (owned queue, registers and timers).
#[derive(Component, Debug, Clone)]
pub struct PlayerCharacter {
    pub name: String,
    config: CharacterConfig,
    state: CharacterState,
    facing: Direction,
    odd_step: bool,
    speed_factor: SpeedFactor,
    queue: ActionQueue,
    directions: DirectionResolver,
    combat: CombatDirectionBuffer,
    interaction: InteractionShape,
    equipped: Option<ItemId>,
}

impl PlayerCharacter {
    /// Prefer `CharacterBuilder`, which validates collaborators.
    pub fn new(name: impl Into<String>, config: CharacterConfig, interaction: InteractionShape) -> Self {
        let combat = CombatDirectionBuffer::new(config.direction_tap_buffer, config.link_attacks_buffer);
        Self {
            name: name.into(),
            config,
            state: CharacterState::Still,
            facing: Direction::default(),
            odd_step: false,
            speed_factor: SpeedFactor::Normal,
            queue: ActionQueue::new(),
            directions: DirectionResolver::new(),
            combat,
            interaction,
            equipped: None,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn state(&self) -> CharacterState {
        self.state
    }

    /// Last committed facing direction (movement or combat)
    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn odd_step(&self) -> bool {
        self.odd_step
    }

    pub fn speed_factor(&self) -> SpeedFactor {
        self.speed_factor
    }

    pub fn queue(&self) -> &ActionQueue {
        &self.queue
    }

    pub fn directions(&self) -> &DirectionResolver {
        &self.directions
    }

    pub fn combat(&self) -> &CombatDirectionBuffer {
        &self.combat
    }

    pub fn config(&self) -> &CharacterConfig {
        &self.config
    }

    pub fn interaction(&self) -> &InteractionShape {
        &self.interaction
    }

    pub fn equipped(&self) -> Option<&ItemId> {
        self.equipped.as_ref()
    }

    /// Effective movement speed (units/sec)
    pub fn speed(&self, modifiers: &SpeedModifiers) -> f32 {
        self.config.base_walk_speed
            * self.speed_factor.multiplier(&self.config)
            * modifiers.multiplier(&self.config)
    }

    // ------------------------------------------------------------------
    // Intents (input side)
    // ------------------------------------------------------------------

    /// Queue a walk step. Only from Still; not de-duplicated.
    pub fn try_walk(&mut self) {
        if self.state != CharacterState::Still {
            return;
        }
        self.queue.enqueue(StateAction::new(CharacterState::Walking));
    }

    pub fn try_attacking(&mut self) {
        self.enqueue_once(CharacterState::Attacking);
    }

    pub fn try_blocking(&mut self) {
        self.enqueue_once(CharacterState::Blocking);
    }

    fn enqueue_once(&mut self, state: CharacterState) {
        let action = StateAction::new(state);
        if !self.queue.contains_by_compare(&action) {
            self.queue.enqueue(action);
        }
    }

    /// Process 4-way direction input.
    ///
    /// Ignored unless the character can act out of movement or is mid-attack.
    /// Order: combat tap buffer → held registers → one pending Still intent.
    pub fn set_directions(&mut self, held: &DirectionInput, tapped: &DirectionInput, gate: &impl MovementGate) {
        if !gate.can_act_out_of_movement() && !gate.in_attack() {
            return;
        }

        self.combat.register_taps(tapped);
        self.directions.update(held);
        self.enqueue_once(CharacterState::Still);
    }

    // ------------------------------------------------------------------
    // Fixed tick
    // ------------------------------------------------------------------

    /// One fixed simulation step: resolve the queue, then tick timers.
    pub fn fixed_update(
        &mut self,
        gate: &impl MovementGate,
        inventory: &Inventory,
        sink: &mut impl AnimationSink,
        rate: f32,
    ) -> Vec<CharacterEvent> {
        let events = self.state_queue_update(gate, inventory, sink);
        self.combat.tick(rate);
        events
    }

    /// Drain the queue in priority order into a fresh residual queue.
    pub fn state_queue_update(
        &mut self,
        gate: &impl MovementGate,
        inventory: &Inventory,
        sink: &mut impl AnimationSink,
    ) -> Vec<CharacterEvent> {
        let mut events = Vec::new();
        let mut residual = ActionQueue::new();
        let mut pending = std::mem::take(&mut self.queue);

        while let Some(action) = pending.dequeue() {
            match action.state {
                CharacterState::Still => {
                    let primary = self.directions.primary();
                    match primary {
                        Some(direction)
                            if gate.can_act_out_of_movement() && self.combat.can_switch() =>
                        {
                            self.facing = direction;
                            sink.set_direction(direction);
                        }
                        _ => residual.enqueue(action),
                    }
                }
                CharacterState::Walking => {
                    // Чередуем ногу, с которой начинается шаг
                    self.odd_step = !self.odd_step;
                    sink.set_time(0.0);
                    sink.set_state(CharacterState::Walking);
                    sink.set_bool(AnimationFlag::OddStep, self.odd_step);
                    self.state = CharacterState::Walking;
                    self.speed_factor = SpeedFactor::Normal;
                }
                CharacterState::Attacking => {
                    let item = inventory.active_item().filter(|item| item.can_attack());
                    let Some(item) = item.filter(|_| gate.can_act_out_of_movement()) else {
                        logger::log(&format!("🗑️ {}: attack dropped (gate closed or no weapon)", self.name));
                        continue;
                    };

                    sink.set_time(0.0);
                    sink.set_state(CharacterState::Attacking);
                    self.state = CharacterState::Attacking;
                    let direction = self.switch_to_combat_direction(sink);
                    if let Some(weapon_use) = item.try_start_attack(direction) {
                        events.push(CharacterEvent::WeaponUseStarted(weapon_use));
                    }
                    self.speed_factor = SpeedFactor::Attack;
                    logger::log(&format!("⚔️ {}: attack started ({:?})", self.name, direction));
                }
                CharacterState::Blocking => {
                    let item = inventory.active_item().filter(|item| item.can_block());
                    let Some(item) = item.filter(|_| gate.can_act_out_of_movement()) else {
                        logger::log(&format!("🗑️ {}: block dropped (gate closed or no weapon)", self.name));
                        continue;
                    };

                    sink.set_time(0.0);
                    sink.set_state(CharacterState::Blocking);
                    self.state = CharacterState::Blocking;
                    let direction = self.switch_to_combat_direction(sink);
                    if let Some(weapon_use) = item.try_start_block(direction) {
                        events.push(CharacterEvent::WeaponUseStarted(weapon_use));
                    }
                    self.speed_factor = SpeedFactor::Block;
                    logger::log(&format!("🛡️ {}: block started ({:?})", self.name, direction));
                }
            }
        }

        self.queue = residual;
        events
    }

    // ------------------------------------------------------------------
    // Combat direction
    // ------------------------------------------------------------------

    pub fn can_switch_combat_direction(&self) -> bool {
        self.combat.can_switch()
    }

    /// Commit the buffered combat direction (if allowed) and return the
    /// direction the attack/block should face.
    pub fn switch_to_combat_direction(&mut self, sink: &mut impl AnimationSink) -> Direction {
        let (direction, switched) = self.combat.switch_to_combat_direction(self.facing);
        if switched {
            self.facing = direction;
            sink.set_direction(direction);
        }
        direction
    }

    // ------------------------------------------------------------------
    // Animation callbacks
    // ------------------------------------------------------------------

    /// Attack/block animation finished: back to Still, start the link lock.
    pub fn end_weapon_use_anim(&mut self, sink: &mut impl AnimationSink) {
        sink.set_state(CharacterState::Still);
        self.state = CharacterState::Still;
        self.speed_factor = SpeedFactor::Normal;
        self.combat.start_link();
    }

    /// Walk cycle finished: back to Still so the next walk step can queue.
    pub fn end_walk_anim(&mut self, sink: &mut impl AnimationSink) {
        if self.state != CharacterState::Walking {
            return;
        }
        sink.set_state(CharacterState::Still);
        self.state = CharacterState::Still;
    }

    /// Party may switch away from this character.
    pub fn can_switch_from(&self, gate: &impl MovementGate) -> bool {
        self.state == CharacterState::Still
            && gate.can_act_out_of_movement()
            && !self.queue.contains_by_compare(&CharacterState::Attacking.into())
            && !self.queue.contains_by_compare(&CharacterState::Blocking.into())
    }

    // ------------------------------------------------------------------
    // Equipment
    // ------------------------------------------------------------------

    /// Re-equip whatever sits in the inventory's equipped slot.
    pub fn reset_active_item(&mut self, inventory: &Inventory) -> Vec<CharacterEvent> {
        let mut events = Vec::new();

        if let Some(previous) = self.equipped.take() {
            events.push(CharacterEvent::ItemEquipChanged {
                item: previous,
                equipped: false,
            });
        }

        if let Some(item) = inventory.active_item() {
            self.equipped = Some(item.id.clone());
            events.push(CharacterEvent::ItemEquipChanged {
                item: item.id.clone(),
                equipped: true,
            });
        }

        events
    }
}
