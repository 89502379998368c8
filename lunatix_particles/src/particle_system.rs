use lunatix_physics::FloatingBox;
use thiserror::Error;

use crate::particle::Particle;

pub type Result<T> = std::result::Result<T, ParticleError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParticleError {
    #[error("Particle system is full ({capacity} particles)")]
    Full { capacity: usize },
}

/// A fixed number of particle slots.
///
/// Slots are reused: a particle that dies during [`ParticleSystem::update_particles`]
/// frees its slot for the next [`ParticleSystem::add_particle`].
#[derive(Clone, Debug)]
pub struct ParticleSystem {
    slots: Vec<Option<Particle>>,
}

impl ParticleSystem {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    /// Puts `p` in the first free slot.
    pub fn add_particle(&mut self, p: Particle) -> Result<()> {
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(p);
                Ok(())
            }
            None => Err(ParticleError::Full {
                capacity: self.slots.len(),
            }),
        }
    }

    /// Empties slot `index`. Returns `false` if the slot was already empty or
    /// does not exist.
    pub fn remove_particle(&mut self, index: usize) -> bool {
        self.slots
            .get_mut(index)
            .and_then(Option::take)
            .is_some()
    }

    /// Removes dead particles and moves the others one step.
    pub fn update_particles(&mut self) {
        let mut removed = 0usize;
        for slot in &mut self.slots {
            let dead = match slot {
                Some(p) if !p.is_dead() => {
                    p.update();
                    false
                }
                Some(_) => true,
                None => false,
            };
            if dead {
                *slot = None;
                removed += 1;
            }
        }
        if removed > 0 {
            log::trace!(
                "removed {removed} dead particles, {} still active",
                self.nb_active_particles()
            );
        }
    }

    /// Areas of the particles to show this frame: a particle blinks, it is
    /// only visible when its remaining delay is even.
    pub fn visible_particles(&self) -> impl Iterator<Item = &FloatingBox> + '_ {
        self.slots
            .iter()
            .flatten()
            .filter(|p| p.delay() % 2 == 0)
            .map(Particle::area)
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> + '_ {
        self.slots.iter().flatten()
    }

    pub fn nb_empty_particles(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    pub fn nb_active_particles(&self) -> usize {
        self.slots.len() - self.nb_empty_particles()
    }

    pub fn nb_total_particles(&self) -> usize {
        self.slots.len()
    }
}
