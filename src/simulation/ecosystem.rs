//! Per-tick population driver.
//!
//! Each tick the ecosystem:
//! - animates every organism and culls the dead
//! - pushes organisms away from the canvas edges
//! - repels pairs that come too close (brute force, the population is small)
//! - lets mature organisms clone themselves
//! - reseeds the canvas if everything died
//!
//! Pointer attraction is applied separately through [`Ecosystem::attract`].

use std::f32::consts::{FRAC_PI_2, PI};
use tracing::{debug, info, trace};

use super::events::{self, EventQueue, PopulationEvent};
use super::gene::Gene;
use super::geometric_utils::{distance_sq, heading_to};
use super::organism::Organism;
use super::params::{Params, SeedingPolicy};
use super::random::Random;
use super::stage::Stage;
use super::stats::PopulationStats;

/// A live organism together with its visual node.
#[derive(Debug, Clone)]
pub struct Member<H> {
    /// The simulated organism.
    pub organism: Organism,
    /// Handle returned by [`Stage::create_visual`].
    pub handle: H,
}

/// The population and everything needed to advance it.
#[derive(Debug, Clone)]
pub struct Ecosystem<H = ()> {
    /// Living organisms and their visuals.
    pub members: Vec<Member<H>>,
    /// Random source for every stochastic decision.
    pub random: Random,
    /// Running counters.
    pub stats: PopulationStats,
    next_id: usize,
}

impl<H> Ecosystem<H> {
    /// Creates an ecosystem and seeds its first batch of organisms.
    pub fn new<S: Stage<Handle = H>>(params: &Params, random: Random, stage: &mut S) -> Self {
        let mut ecosystem = Self {
            members: Vec::with_capacity(params.max_population),
            random,
            stats: PopulationStats::default(),
            next_id: 0,
        };
        ecosystem.seed(params, stage);
        ecosystem
    }

    /// Number of living organisms.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the population died out.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates over the living organisms.
    pub fn organisms(&self) -> impl Iterator<Item = &Organism> {
        self.members.iter().map(|m| &m.organism)
    }

    /// Iterates mutably over the living organisms.
    pub fn organisms_mut(&mut self) -> impl Iterator<Item = &mut Organism> {
        self.members.iter_mut().map(|m| &mut m.organism)
    }

    /// Adds a batch of organisms at random positions, at rest.
    ///
    /// Stillborn seeds are skipped, so fewer than `seed_population` may
    /// appear.
    pub fn seed<S: Stage<Handle = H>>(&mut self, params: &Params, stage: &mut S) {
        let mut queue = EventQueue::new();
        let shared = match params.seeding {
            SeedingPolicy::Independent => None,
            SeedingPolicy::Siblings => Some(Gene::random(&mut self.random)),
        };

        for _ in 0..params.seed_population {
            let gene = match &shared {
                Some(gene) => gene.mutate(&mut self.random),
                None => Gene::random(&mut self.random),
            };
            let pos = (
                self.random.uniform() * params.canvas_width,
                self.random.uniform() * params.canvas_height,
            );
            let angle = self.random.heading();
            let id = self.allocate_id();
            match Organism::from_gene(id, gene, pos, 0.0, angle, &mut self.random) {
                Some(organism) => queue.push(PopulationEvent::Born(organism)),
                None => self.stats.stillbirths += 1,
            }
        }

        info!(
            seeded = queue.births(),
            policy = ?params.seeding,
            "seeding population"
        );
        self.stats.reseeds += 1;
        events::apply_events(&mut self.members, stage, &mut self.stats, queue);
    }

    /// Advances the simulation by one tick.
    pub fn step<S: Stage<Handle = H>>(&mut self, params: &Params, stage: &mut S) {
        self.animate(stage);
        self.push_from_edges(params);
        self.interact(params);
        self.reproduce(params, stage);

        if self.members.is_empty() {
            self.seed(params, stage);
        }

        self.stats.record_tick(self.members.len());
        trace!(tick = self.stats.ticks, population = self.members.len(), "tick");
    }

    /// Pulls every organism towards `(x, y)`, proportionally to its mass.
    ///
    /// Organisms sitting exactly on the point are left alone.
    pub fn attract(&mut self, params: &Params, x: f32, y: f32) {
        let target = (x, y);
        for organism in self.organisms_mut() {
            if distance_sq(organism.pos(), target) > 0.0 {
                let t = heading_to(organism.pos(), target);
                let f = params.mouse_force * organism.mass();
                organism.apply_force(f, t);
            }
        }
        debug!(x, y, "pointer attraction");
    }

    fn animate<S: Stage<Handle = H>>(&mut self, stage: &mut S) {
        let mut queue = EventQueue::new();
        for (index, member) in self.members.iter_mut().enumerate() {
            if member.organism.animate(&mut self.random) {
                stage.update_visual(&mut member.handle, &member.organism.visual());
            } else {
                queue.push(PopulationEvent::Died { index });
            }
        }
        if !queue.is_empty() {
            events::apply_events(&mut self.members, stage, &mut self.stats, queue);
        }
    }

    fn push_from_edges(&mut self, params: &Params) {
        let right = params.canvas_width - params.edge;
        let bottom = params.canvas_height - params.edge;
        for organism in self.organisms_mut() {
            if organism.x < params.edge {
                organism.apply_force(params.edge_force * (params.edge - organism.x), 0.0);
            } else if organism.x >= right {
                organism.apply_force(params.edge_force * (organism.x - right), PI);
            }
            // y grows downward: +π/2 pushes towards the bottom
            if organism.y < params.edge {
                organism.apply_force(params.edge_force * (params.edge - organism.y), FRAC_PI_2);
            } else if organism.y >= bottom {
                organism.apply_force(params.edge_force * (organism.y - bottom), -FRAC_PI_2);
            }
        }
    }

    fn interact(&mut self, params: &Params) {
        let radius_sq = params.interaction_radius.powi(2);
        let n = self.members.len();
        for i in 0..n {
            for j in i + 1..n {
                let (head, tail) = self.members.split_at_mut(j);
                let a = &mut head[i].organism;
                let b = &mut tail[0].organism;
                let dist_sq = distance_sq(a.pos(), b.pos());
                if 0.0 < dist_sq && dist_sq < radius_sq {
                    let f = (params.interaction_force / dist_sq).min(1.0);
                    let t = heading_to(b.pos(), a.pos());
                    a.apply_force(f, t);
                    b.apply_force(f, t + PI);
                }
            }
        }
    }

    fn reproduce<S: Stage<Handle = H>>(&mut self, params: &Params, stage: &mut S) {
        let population = self.members.len();
        if population >= params.max_population {
            return;
        }

        let mut queue = EventQueue::new();
        let mut room = params.max_population - population;
        // newborns are queued, so only this tick's parents are scanned
        for index in 0..population {
            if room == 0 {
                break;
            }
            if !self.members[index].organism.is_reproducible()
                || !self.random.chance(params.clone_rate)
            {
                continue;
            }
            let id = self.allocate_id();
            match self.members[index]
                .organism
                .clone_mutated(id, &mut self.random)
            {
                Some(clone) => {
                    queue.push(PopulationEvent::Born(clone));
                    room -= 1;
                }
                None => {
                    debug!(parent = self.members[index].organism.id, "stillborn clone");
                    self.stats.stillbirths += 1;
                }
            }
        }

        if !queue.is_empty() {
            events::apply_events(&mut self.members, stage, &mut self.stats, queue);
        }
    }

    fn allocate_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
