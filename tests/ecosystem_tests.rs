#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use plankton::simulation::ecosystem::{Ecosystem, Member};
use plankton::simulation::expression::Expression;
use plankton::simulation::gene::{BLOCK_COUNT, Gene};
use plankton::simulation::geometric_utils::cycle;
use plankton::simulation::organism::{Organism, Visual};
use plankton::simulation::params::{Params, SeedingPolicy};
use plankton::simulation::random::Random;
use plankton::simulation::stage::{Headless, Stage};
use std::collections::HashSet;
use std::f32::consts::{FRAC_PI_2, PI};

fn create_test_params() -> Params {
    Params {
        clone_rate: 0.0,
        ..Params::default()
    }
}

fn empty_ecosystem(params: &Params, seed: u64) -> Ecosystem {
    let params = Params {
        seed_population: 0,
        ..params.clone()
    };
    Ecosystem::new(&params, Random::seeded(seed), &mut Headless)
}

/// An immortal organism whose blocks all sit in column 0: it never swims on
/// its own, so only external forces move it.
fn anchored(ecosystem: &mut Ecosystem, id: usize, pos: (f32, f32)) {
    let mut blocks = [false; BLOCK_COUNT];
    for i in (0..BLOCK_COUNT).step_by(3) {
        blocks[i] = true;
    }
    let expression = Expression::new(0x0080_8080, blocks, 0.0).expect("column 0 is grown");
    let gene = Gene::new(0.5, [0.5; BLOCK_COUNT], 0.0);
    let mut organism = Organism::new(id, gene, expression, pos, 0.0, 0.0, &mut ecosystem.random);
    organism.life = 1_000_000.0;
    ecosystem.members.push(Member {
        organism,
        handle: (),
    });
}

#[derive(Default)]
struct RecordingStage {
    live: HashSet<usize>,
    created: usize,
    destroyed: usize,
    updates: usize,
}

impl Stage for RecordingStage {
    type Handle = usize;

    fn create_visual(&mut self, organism: &Organism) -> usize {
        assert!(self.live.insert(organism.id), "visual created twice");
        self.created += 1;
        organism.id
    }

    fn update_visual(&mut self, handle: &mut usize, visual: &Visual) {
        assert!(self.live.contains(handle));
        assert!(visual.x.is_finite() && visual.y.is_finite());
        assert!((0.0..=1.0).contains(&visual.opacity));
        self.updates += 1;
    }

    fn destroy_visual(&mut self, handle: usize) {
        assert!(self.live.remove(&handle), "visual destroyed twice");
        self.destroyed += 1;
    }
}

#[test]
fn test_ecosystem_creation() {
    let params = create_test_params();
    let ecosystem = Ecosystem::new(&params, Random::seeded(1), &mut Headless);

    assert!(ecosystem.len() <= params.seed_population);
    assert!(!ecosystem.is_empty());
    assert_eq!(ecosystem.stats.reseeds, 1);
    assert_eq!(
        ecosystem.stats.births + ecosystem.stats.stillbirths,
        params.seed_population as u64
    );

    for organism in ecosystem.organisms() {
        assert_eq!(organism.v, 0.0);
        assert_eq!(organism.time, 0);
        assert!((0.0..params.canvas_width).contains(&organism.x));
        assert!((0.0..params.canvas_height).contains(&organism.y));
    }
}

#[test]
fn test_growth_completes_after_500_ticks() {
    let params = create_test_params();
    let mut ecosystem = Ecosystem::new(&params, Random::seeded(2), &mut Headless);
    for organism in ecosystem.organisms_mut() {
        organism.life = 10_000.0;
    }
    let count = ecosystem.len();

    for _ in 0..500 {
        ecosystem.step(&params, &mut Headless);
    }

    assert_eq!(ecosystem.len(), count);
    assert_eq!(ecosystem.stats.ticks, 500);
    for organism in ecosystem.organisms() {
        assert_eq!(organism.time, 500);
        assert_eq!(organism.scale(), organism.max_size());
    }
}

#[test]
fn test_coincident_organisms_do_not_interact() {
    let params = create_test_params();
    let mut ecosystem = empty_ecosystem(&params, 3);
    anchored(&mut ecosystem, 100, (240.0, 240.0));
    anchored(&mut ecosystem, 101, (240.0, 240.0));

    ecosystem.step(&params, &mut Headless);

    assert_eq!(ecosystem.len(), 2);
    for organism in ecosystem.organisms() {
        assert_eq!(organism.v, 0.0);
        assert!(organism.angle.is_finite());
        assert_eq!(organism.pos(), (240.0, 240.0));
    }
}

#[test]
fn test_close_organisms_repel_each_other() {
    let params = create_test_params();
    let mut ecosystem = empty_ecosystem(&params, 4);
    anchored(&mut ecosystem, 100, (240.0, 240.0));
    anchored(&mut ecosystem, 101, (244.0, 240.0));

    ecosystem.step(&params, &mut Headless);

    // 64 / 4^2 caps at 1, divided by a mass of 5
    let a = &ecosystem.members[0].organism;
    let b = &ecosystem.members[1].organism;
    assert!((a.v - 0.2).abs() < 1e-5);
    assert!((b.v - 0.2).abs() < 1e-5);
    assert!((a.angle.abs() - PI).abs() < 1e-5);
    assert!(b.angle.abs() < 1e-5);
}

#[test]
fn test_far_organisms_do_not_interact() {
    let params = create_test_params();
    let mut ecosystem = empty_ecosystem(&params, 5);
    anchored(&mut ecosystem, 100, (200.0, 240.0));
    anchored(&mut ecosystem, 101, (240.0, 240.0));

    ecosystem.step(&params, &mut Headless);

    assert!(ecosystem.organisms().all(|o| o.v == 0.0));
}

#[test]
fn test_edges_push_inward() {
    let params = create_test_params();
    let mut ecosystem = empty_ecosystem(&params, 6);
    anchored(&mut ecosystem, 100, (10.0, 240.0));
    anchored(&mut ecosystem, 101, (470.0, 240.0));
    anchored(&mut ecosystem, 102, (240.0, 10.0));
    anchored(&mut ecosystem, 103, (240.0, 470.0));

    ecosystem.step(&params, &mut Headless);

    // 0.1 * 22 penetration / mass 5
    let expected = [0.0, PI, FRAC_PI_2, -FRAC_PI_2];
    for (member, angle) in ecosystem.members.iter().zip(expected) {
        let organism = &member.organism;
        assert!((organism.v - 0.44).abs() < 1e-5, "v was {}", organism.v);
        assert!(
            (cycle(organism.angle - angle + PI, 0.0, 2.0 * PI) - PI).abs() < 1e-5,
            "organism {} heads {}",
            organism.id,
            organism.angle
        );
    }
}

#[test]
fn test_pointer_attraction() {
    let params = create_test_params();
    let mut ecosystem = empty_ecosystem(&params, 7);
    anchored(&mut ecosystem, 100, (100.0, 100.0));
    anchored(&mut ecosystem, 101, (200.0, 100.0));

    ecosystem.attract(&params, 200.0, 100.0);

    let pulled = &ecosystem.members[0].organism;
    assert!((pulled.v - 1.0).abs() < 1e-5);
    assert!(pulled.angle.abs() < 1e-5);

    let on_target = &ecosystem.members[1].organism;
    assert_eq!(on_target.v, 0.0);
}

#[test]
fn test_population_cap() {
    let params = Params {
        clone_rate: 1.0,
        ..Params::default()
    };
    let mut ecosystem = Ecosystem::new(&params, Random::seeded(8), &mut Headless);
    for organism in ecosystem.organisms_mut() {
        organism.time = 600;
        organism.life = 10_000.0;
    }
    let parents = ecosystem.len();

    ecosystem.step(&params, &mut Headless);
    // newborns cannot clone in the tick they were born
    assert!(ecosystem.len() <= parents * 2);

    for _ in 0..100 {
        ecosystem.step(&params, &mut Headless);
        assert!(ecosystem.len() <= params.max_population);
    }
    assert_eq!(ecosystem.len(), params.max_population);
    assert_eq!(ecosystem.stats.peak, params.max_population);
}

#[test]
fn test_extinction_triggers_reseed() {
    let params = create_test_params();
    let mut ecosystem = Ecosystem::new(&params, Random::seeded(9), &mut Headless);
    let initial = ecosystem.len();
    for organism in ecosystem.organisms_mut() {
        organism.life = 0.0;
    }

    ecosystem.step(&params, &mut Headless);

    assert_eq!(ecosystem.stats.deaths, initial as u64);
    assert_eq!(ecosystem.stats.reseeds, 2);
    assert!(ecosystem.organisms().all(|o| o.time == 0));
}

#[test]
fn test_stage_lifecycle_is_balanced() {
    let params = Params {
        clone_rate: 0.05,
        ..Params::default()
    };
    let mut stage = RecordingStage::default();
    let mut ecosystem = Ecosystem::new(&params, Random::seeded(10), &mut stage);
    for organism in ecosystem.organisms_mut() {
        organism.time = 600;
        organism.life = 150.0;
    }

    for _ in 0..400 {
        ecosystem.step(&params, &mut stage);
        assert_eq!(stage.created - stage.destroyed, ecosystem.len());
    }

    assert!(stage.destroyed > 0);
    assert!(stage.updates > 0);
    assert_eq!(stage.live.len(), ecosystem.len());
    for member in &ecosystem.members {
        assert_eq!(member.handle, member.organism.id);
    }
}

#[test]
fn test_same_seed_same_simulation() {
    let params = Params {
        clone_rate: 0.01,
        ..Params::default()
    };
    let mut a = Ecosystem::new(&params, Random::seeded(11), &mut Headless);
    let mut b = Ecosystem::new(&params, Random::seeded(11), &mut Headless);

    for _ in 0..300 {
        a.step(&params, &mut Headless);
        b.step(&params, &mut Headless);
    }

    assert_eq!(a.len(), b.len());
    for (x, y) in a.organisms().zip(b.organisms()) {
        assert_eq!(x.id, y.id);
        assert_eq!(x.pos(), y.pos());
        assert_eq!(x.angle, y.angle);
    }
}

#[test]
fn test_sibling_seeding_shares_hue() {
    let params = Params {
        seeding: SeedingPolicy::Siblings,
        seed_population: 10,
        ..create_test_params()
    };
    let ecosystem = Ecosystem::new(&params, Random::seeded(12), &mut Headless);

    let hues: Vec<f32> = ecosystem.organisms().map(|o| o.gene().hue()).collect();
    assert!(hues.len() > 1);
    for h in &hues {
        let d = (h - hues[0]).abs();
        assert!(d.min(1.0 - d) < 0.4);
    }
}
