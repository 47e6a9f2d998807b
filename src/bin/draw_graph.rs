//! Graph-drawing demonstration driver.
//!
//! Lays out a small dense graph by simulated annealing and renders the
//! placement before and after, so the two images can be compared side
//! by side.

use quench::anneal::{AnnealConfig, AnnealRunner, Schedule};
use quench::problem::Problem;
use quench::problems::GraphLayout;
use quench::render::draw_layout;
use quench::report::SearchReport;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// A 13-vertex graph with a tight 6-clique around H and I; hard enough
/// that a random placement looks like spaghetti.
fn demo_graph() -> GraphLayout {
    let labels: Vec<String> = "ABCDEFGHIJKLM".chars().map(String::from).collect();
    let edge_labels = [
        ('B', 'G'),
        ('E', 'F'),
        ('H', 'E'),
        ('D', 'B'),
        ('H', 'G'),
        ('A', 'E'),
        ('C', 'F'),
        ('H', 'B'),
        ('F', 'A'),
        ('C', 'B'),
        ('H', 'F'),
        ('H', 'I'),
        ('H', 'J'),
        ('H', 'K'),
        ('H', 'L'),
        ('H', 'M'),
        ('I', 'J'),
        ('I', 'K'),
        ('I', 'L'),
        ('I', 'M'),
        ('J', 'K'),
        ('J', 'L'),
        ('J', 'M'),
        ('K', 'L'),
        ('K', 'M'),
        ('L', 'M'),
        ('M', 'A'),
    ];
    let index = |c: char| c as usize - 'A' as usize;
    let edges = edge_labels
        .iter()
        .map(|&(a, b)| (index(a), index(b)))
        .collect();
    GraphLayout::new(labels, edges, 400).expect("demo graph is well-formed")
}

fn main() -> image::ImageResult<()> {
    let layout = demo_graph();

    let mut rng = StdRng::seed_from_u64(rand::random());
    let initial = layout.random_state(&mut rng);
    println!("random placement cost: {}", layout.cost(&initial));
    draw_layout(&layout, &initial, "layout_initial.png")?;

    let config = AnnealConfig::default()
        .with_schedule(Schedule::Logarithmic)
        .with_tolerance(4e-4);
    let started = Instant::now();
    let result = AnnealRunner::run(&layout, &config);
    draw_layout(&layout, &result.best, "layout_final.png")?;

    println!(
        "{}",
        SearchReport::new(
            "annealing, logarithmic schedule",
            result.best_cost,
            started.elapsed()
        )
    );
    println!("{} iterations, final temperature {:.6}", result.iterations, result.final_temperature);
    println!("wrote layout_initial.png and layout_final.png");
    Ok(())
}
