#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use plankton::simulation::expression::Expression;
use plankton::simulation::gene::{BLOCK_COUNT, Gene};
use plankton::simulation::random::Random;

fn in_unit_range(gene: &Gene) -> bool {
    (0.0..=1.0).contains(&gene.hue())
        && gene.hue() < 1.0
        && (0.0..=1.0).contains(&gene.size())
        && gene.blocks().iter().all(|b| (0.0..=1.0).contains(b))
}

fn uniform_gene(block: f32) -> Gene {
    Gene::new(0.5, [block; BLOCK_COUNT], 0.25)
}

#[test]
fn test_random_gene_ranges() {
    let mut random = Random::seeded(11);
    for _ in 0..500 {
        let gene = Gene::random(&mut random);
        assert_eq!(gene.blocks().len(), BLOCK_COUNT);
        assert!(in_unit_range(&gene));
    }
}

#[test]
fn test_new_wraps_hue_and_clips_traits() {
    let gene = Gene::new(1.5, [3.0; BLOCK_COUNT], -2.0);
    assert!((gene.hue() - 0.5).abs() < 1e-6);
    assert!(gene.blocks().iter().all(|&b| b == 1.0));
    assert_eq!(gene.size(), 0.0);
}

#[test]
fn test_mutation_stays_in_range() {
    let mut random = Random::seeded(5);
    let mut gene = Gene::new(0.999, [1.0; BLOCK_COUNT], 0.0);

    for _ in 0..2000 {
        let parent = gene.clone();
        gene = gene.mutate(&mut random);
        assert!(in_unit_range(&gene));
        assert_ne!(gene, parent);
    }
}

#[test]
fn test_mutation_leaves_parent_untouched() {
    let mut random = Random::seeded(8);
    let parent = Gene::random(&mut random);
    let snapshot = parent.clone();

    let child = parent.mutate(&mut random);

    assert_eq!(parent, snapshot);
    assert_ne!(child, parent);
}

#[test]
fn test_crossover_inherits_from_either_parent() {
    let mut random = Random::seeded(21);
    let x = Gene::new(0.2, [0.0; BLOCK_COUNT], 0.0);
    let y = Gene::new(0.8, [1.0; BLOCK_COUNT], 1.0);

    let mut from_x = 0;
    let mut from_y = 0;
    for _ in 0..200 {
        let child = Gene::cross(&x, &y, &mut random);
        assert!(in_unit_range(&child));
        assert!((child.hue() - 0.2).abs() < 0.3 || (child.hue() - 0.8).abs() < 0.3);
        for &b in child.blocks() {
            if b < 0.3 {
                from_x += 1;
            } else if b > 0.7 {
                from_y += 1;
            } else {
                panic!("block {b} is far from both parents");
            }
        }
    }

    assert!(from_x > 0 && from_y > 0);
}

#[test]
fn test_expression_of_full_gene_is_viable() {
    let mut random = Random::seeded(2);
    let gene = uniform_gene(1.0);
    for _ in 0..1000 {
        let expression = Expression::from_gene(&gene, &mut random);
        let expression = expression.expect("a gene with every block at 1.0 is viable");
        assert_eq!(expression.block_count(), BLOCK_COUNT);
        assert!(expression.color() <= 0x00FF_FFFF);
        assert!((0.0..=1.0).contains(&expression.size()));
    }
}

#[test]
fn test_expression_of_empty_gene_is_stillborn() {
    let mut random = Random::seeded(3);
    let gene = uniform_gene(0.0);
    for _ in 0..1000 {
        assert!(Expression::from_gene(&gene, &mut random).is_none());
    }
}

#[test]
fn test_expression_thresholds_each_block() {
    let mut random = Random::seeded(4);
    let mut blocks = [0.0; BLOCK_COUNT];
    blocks[4] = 1.0;
    let gene = Gene::new(0.1, blocks, 0.5);

    for _ in 0..200 {
        let expression = Expression::from_gene(&gene, &mut random).expect("block 4 is grown");
        assert_eq!(expression.block_count(), 1);
        assert!(expression.blocks()[4]);
        assert!((expression.size() - 0.5).abs() < 0.1);
    }
}

#[test]
fn test_expression_color_follows_hue() {
    let mut random = Random::seeded(6);
    // hue 0 is red: the red channel dominates
    let gene = Gene::new(0.0, [1.0; BLOCK_COUNT], 0.25);
    for _ in 0..100 {
        let color = Expression::from_gene(&gene, &mut random).expect("viable").color();
        let r = color >> 16;
        let b = color & 0xFF;
        assert!(r > b, "color {color:06x}");
    }
}
