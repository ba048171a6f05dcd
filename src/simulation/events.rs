//! Deferred population changes.
//!
//! Deaths and births found while scanning the population are queued and
//! applied once the scan is over, so the population is never resized while
//! it is being iterated.

use tracing::debug;

use super::ecosystem::Member;
use super::organism::Organism;
use super::stage::Stage;
use super::stats::PopulationStats;

/// A change to apply to the population.
#[derive(Debug, Clone)]
pub enum PopulationEvent {
    /// The member at this index ran out of life.
    Died {
        /// Index in the member list at the time of the scan.
        index: usize,
    },
    /// A newborn to append.
    Born(Organism),
}

/// Queue for collecting population events during a scan.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<PopulationEvent>,
}

impl EventQueue {
    /// Creates an empty event queue.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Adds an event to the queue.
    pub fn push(&mut self, event: PopulationEvent) {
        self.events.push(event);
    }

    /// Number of queued births.
    pub fn births(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, PopulationEvent::Born(_)))
            .count()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drains all events from the queue.
    pub fn drain(&mut self) -> std::vec::Drain<'_, PopulationEvent> {
        self.events.drain(..)
    }
}

/// Applies queued events: removals first, highest index first, then births.
pub fn apply_events<S: Stage>(
    members: &mut Vec<Member<S::Handle>>,
    stage: &mut S,
    stats: &mut PopulationStats,
    mut queue: EventQueue,
) {
    let mut dead = Vec::new();
    let mut born = Vec::new();

    for event in queue.drain() {
        match event {
            PopulationEvent::Died { index } => dead.push(index),
            PopulationEvent::Born(organism) => born.push(organism),
        }
    }

    dead.sort_unstable();
    dead.dedup();
    for index in dead.into_iter().rev() {
        if index < members.len() {
            let member = members.remove(index);
            debug!(id = member.organism.id, age = member.organism.time, "organism died");
            stage.destroy_visual(member.handle);
            stats.deaths += 1;
        }
    }

    for organism in born {
        debug!(id = organism.id, x = organism.x, y = organism.y, "organism born");
        let handle = stage.create_visual(&organism);
        members.push(Member { organism, handle });
        stats.births += 1;
    }
}
