//! Graph drawing as a local-search problem.
//!
//! Optimization is not how production graph drawing works, but it makes
//! a nice exercise: a state is a flat vector of vertex coordinates on a
//! square canvas, and the cost is a weighted sum of aesthetic penalties
//! (edge crossings, cramped vertices, tight edge angles, an off-center
//! hub).

use crate::problem::Problem;
use rand::Rng;
use std::f64::consts::PI;

/// Canvas border, in pixels, that vertices keep clear.
const MARGIN: i32 = 10;

/// Vertex pairs closer than this are penalized by the separation term.
const MIN_SEPARATION: f64 = 50.0;

/// Incident-edge pairs tighter than this angle are penalized.
const ANGLE_THRESHOLD: f64 = 24.0 * PI / 180.0;

/// How far, per axis, the hub vertex may sit from the canvas center
/// before the centering term charges for it.
const CENTER_SLACK: f64 = 21.0;

/// One aesthetic penalty term of the layout cost.
///
/// The cost is a linear combination of named terms, so each term and its
/// weight stay independently testable and tunable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AestheticTerm {
    /// Number of edge pairs that properly cross.
    Crossings,
    /// Penalty for vertex pairs drawn closer than a minimum distance.
    Separation,
    /// Penalty for pairs of incident edges meeting at a tight angle.
    Angles,
    /// Penalty for the highest-degree vertex sitting off-center.
    Centering,
}

impl AestheticTerm {
    /// Evaluates this term on a state, unweighted.
    pub fn evaluate(&self, layout: &GraphLayout, state: &[i32]) -> f64 {
        match self {
            AestheticTerm::Crossings => layout.crossings(state),
            AestheticTerm::Separation => layout.separation_penalty(state),
            AestheticTerm::Angles => layout.angle_penalty(state),
            AestheticTerm::Centering => layout.centering_penalty(state),
        }
    }
}

/// Default term weights, tuned on the demonstration graph.
fn default_terms() -> Vec<(AestheticTerm, f64)> {
    vec![
        (AestheticTerm::Crossings, 2.0),
        (AestheticTerm::Separation, 4.0),
        (AestheticTerm::Angles, 3.0),
        (AestheticTerm::Centering, 1.0),
    ]
}

/// An undirected graph to be drawn on a square canvas.
///
/// A state is a `Vec<i32>` of `2 * vertex_count()` coordinates,
/// `[x0, y0, x1, y1, ...]`, each within `[MARGIN, dim - MARGIN]`.
///
/// # Examples
///
/// ```
/// use quench::problems::GraphLayout;
///
/// let layout = GraphLayout::new(
///     vec!["A".into(), "B".into(), "C".into()],
///     vec![(0, 1), (1, 2)],
///     400,
/// )
/// .unwrap();
/// assert_eq!(layout.vertex_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct GraphLayout {
    labels: Vec<String>,
    edges: Vec<(usize, usize)>,
    dim: i32,
    max_step: i32,
    terms: Vec<(AestheticTerm, f64)>,
}

impl GraphLayout {
    /// Creates a layout problem for the given graph on a `dim`-by-`dim`
    /// pixel canvas.
    pub fn new(
        labels: Vec<String>,
        edges: Vec<(usize, usize)>,
        dim: i32,
    ) -> Result<Self, String> {
        if labels.is_empty() {
            return Err("graph needs at least one vertex".into());
        }
        if dim <= 2 * MARGIN {
            return Err(format!("canvas dimension {dim} leaves no room inside the margin"));
        }
        for &(a, b) in &edges {
            if a >= labels.len() || b >= labels.len() {
                return Err(format!("edge ({a}, {b}) references a missing vertex"));
            }
            if a == b {
                return Err(format!("self-loop on vertex {a} cannot be drawn"));
            }
        }
        Ok(Self {
            labels,
            edges,
            dim,
            max_step: 10,
            terms: default_terms(),
        })
    }

    /// Maximum per-coordinate jitter, in pixels, of a neighbor move.
    pub fn with_max_step(mut self, pixels: i32) -> Self {
        assert!(pixels >= 1, "max_step must be at least 1 pixel");
        self.max_step = pixels;
        self
    }

    /// Replaces the cost terms and their weights.
    pub fn with_terms(mut self, terms: Vec<(AestheticTerm, f64)>) -> Self {
        self.terms = terms;
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Canvas dimension in pixels (square).
    pub fn dim(&self) -> i32 {
        self.dim
    }

    /// Position of vertex `v` in `state`.
    pub fn position(&self, state: &[i32], v: usize) -> (i32, i32) {
        (state[2 * v], state[2 * v + 1])
    }

    fn position_f64(&self, state: &[i32], v: usize) -> (f64, f64) {
        let (x, y) = self.position(state, v);
        (x as f64, y as f64)
    }

    /// Number of edge pairs that properly cross when drawn as straight
    /// segments.
    ///
    /// Pairs with a zero determinant (parallel or coincident lines)
    /// contribute nothing rather than dividing by zero.
    pub fn crossings(&self, state: &[i32]) -> f64 {
        let mut total = 0.0;
        for (idx, &(a0, a1)) in self.edges.iter().enumerate() {
            for &(b0, b1) in &self.edges[idx + 1..] {
                let (x0a, y0a) = self.position_f64(state, a0);
                let (xfa, yfa) = self.position_f64(state, a1);
                let (x0b, y0b) = self.position_f64(state, b0);
                let (xfb, yfb) = self.position_f64(state, b1);

                let den = (xfa - x0a) * (yfb - y0b) - (xfb - x0b) * (yfa - y0a);
                if den == 0.0 {
                    continue;
                }

                // Intersection parameters along each segment; a proper
                // crossing has both strictly inside (0, 1), which also
                // excludes shared endpoints.
                let ta = ((xfb - x0b) * (y0a - y0b) - (yfb - y0b) * (x0a - x0b)) / den;
                let tb = ((xfa - x0a) * (y0a - y0b) - (yfa - y0a) * (x0a - x0b)) / den;
                if 0.0 < ta && ta < 1.0 && 0.0 < tb && tb < 1.0 {
                    total += 1.0;
                }
            }
        }
        total
    }

    /// Penalty for vertex pairs drawn closer than the 50-pixel minimum
    /// separation, growing linearly from 0 at the threshold to 1 at
    /// coincidence.
    pub fn separation_penalty(&self, state: &[i32]) -> f64 {
        let n = self.vertex_count();
        let mut total = 0.0;
        for v1 in 0..n {
            for v2 in (v1 + 1)..n {
                let (x1, y1) = self.position_f64(state, v1);
                let (x2, y2) = self.position_f64(state, v2);
                let dist = (x1 - x2).hypot(y1 - y2);
                if dist < MIN_SEPARATION {
                    total += 1.0 - dist / MIN_SEPARATION;
                }
            }
        }
        total
    }

    /// Penalty for pairs of edges at a shared vertex meeting tighter
    /// than 24 degrees, growing linearly as the angle closes.
    ///
    /// Angles come from `atan2` line directions folded into `[0, pi)`,
    /// so vertical edges are an ordinary case instead of a slope
    /// division hazard; only a zero-length edge contributes nothing.
    pub fn angle_penalty(&self, state: &[i32]) -> f64 {
        let mut total = 0.0;
        for v in 0..self.vertex_count() {
            let incident: Vec<&(usize, usize)> = self
                .edges
                .iter()
                .filter(|&&(a, b)| a == v || b == v)
                .collect();
            for (idx, &&ea) in incident.iter().enumerate() {
                for &&eb in &incident[idx + 1..] {
                    let (Some(ta), Some(tb)) =
                        (self.line_angle(state, ea), self.line_angle(state, eb))
                    else {
                        continue;
                    };
                    let mut diff = (ta - tb).abs();
                    if diff > PI / 2.0 {
                        diff = PI - diff;
                    }
                    if diff < ANGLE_THRESHOLD {
                        total += 1.0 - diff / ANGLE_THRESHOLD;
                    }
                }
            }
        }
        total
    }

    /// Direction of an edge as a line angle in `[0, pi)`, or `None` for
    /// a zero-length edge.
    fn line_angle(&self, state: &[i32], (a, b): (usize, usize)) -> Option<f64> {
        let (xa, ya) = self.position_f64(state, a);
        let (xb, yb) = self.position_f64(state, b);
        let (dx, dy) = (xb - xa, yb - ya);
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        let mut theta = dy.atan2(dx);
        if theta < 0.0 {
            theta += PI;
        }
        if theta >= PI {
            theta -= PI;
        }
        Some(theta)
    }

    /// Penalty of 1 per axis on which the highest-degree vertex sits
    /// more than 21 pixels from the canvas center.
    ///
    /// Pulling the busiest hub toward the middle spreads its fan of
    /// edges across the canvas.
    pub fn centering_penalty(&self, state: &[i32]) -> f64 {
        let Some(hub) = self.hub_vertex() else {
            return 0.0;
        };
        let center = self.dim as f64 / 2.0;
        let (x, y) = self.position_f64(state, hub);
        let mut total = 0.0;
        if (x - center).abs() > CENTER_SLACK {
            total += 1.0;
        }
        if (y - center).abs() > CENTER_SLACK {
            total += 1.0;
        }
        total
    }

    /// The first vertex of maximum degree, or `None` for an edgeless
    /// graph.
    fn hub_vertex(&self) -> Option<usize> {
        if self.edges.is_empty() {
            return None;
        }
        let mut degree = vec![0usize; self.vertex_count()];
        for &(a, b) in &self.edges {
            degree[a] += 1;
            degree[b] += 1;
        }
        (0..self.vertex_count()).max_by_key(|&v| (degree[v], std::cmp::Reverse(v)))
    }
}

impl Problem for GraphLayout {
    type State = Vec<i32>;

    fn random_state<R: Rng>(&self, rng: &mut R) -> Vec<i32> {
        (0..2 * self.vertex_count())
            .map(|_| rng.random_range(MARGIN..=self.dim - MARGIN))
            .collect()
    }

    fn random_neighbor<R: Rng>(&self, state: &Vec<i32>, rng: &mut R) -> Vec<i32> {
        let mut neighbor = state.clone();
        let i = rng.random_range(0..neighbor.len());
        // Clamping can cancel a jitter at the canvas border; redraw
        // until the coordinate actually moves.
        loop {
            let jitter = rng.random_range(-self.max_step..=self.max_step);
            let moved = (state[i] + jitter).clamp(MARGIN, self.dim - MARGIN);
            if moved != state[i] {
                neighbor[i] = moved;
                return neighbor;
            }
        }
    }

    fn cost(&self, state: &Vec<i32>) -> f64 {
        self.terms
            .iter()
            .map(|&(term, weight)| weight * term.evaluate(self, state))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square_graph() -> GraphLayout {
        // 4-cycle plus one diagonal.
        GraphLayout::new(
            vec!["A".into(), "B".into(), "C".into(), "D".into()],
            vec![(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)],
            400,
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_bad_edges() {
        assert!(GraphLayout::new(vec!["A".into()], vec![(0, 1)], 400).is_err());
        assert!(GraphLayout::new(vec!["A".into(), "B".into()], vec![(0, 0)], 400).is_err());
        assert!(GraphLayout::new(vec![], vec![], 400).is_err());
        assert!(GraphLayout::new(vec!["A".into()], vec![], 15).is_err());
    }

    #[test]
    fn test_single_edge_never_crosses() {
        // One edge cannot cross itself, whatever the placement.
        let layout =
            GraphLayout::new(vec!["A".into(), "B".into()], vec![(0, 1)], 400).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let state = layout.random_state(&mut rng);
            assert_eq!(layout.crossings(&state), 0.0);
        }
    }

    #[test]
    fn test_crossings_detects_an_x() {
        // Two edges drawn as an X cross once.
        let layout = GraphLayout::new(
            vec!["A".into(), "B".into(), "C".into(), "D".into()],
            vec![(0, 1), (2, 3)],
            400,
        )
        .unwrap();
        let x = vec![100, 100, 300, 300, 100, 300, 300, 100];
        assert_eq!(layout.crossings(&x), 1.0);

        // Side by side, they do not.
        let flat = vec![100, 100, 200, 100, 100, 300, 200, 300];
        assert_eq!(layout.crossings(&flat), 0.0);
    }

    #[test]
    fn test_crossings_ignores_parallel_edges() {
        let layout = GraphLayout::new(
            vec!["A".into(), "B".into(), "C".into(), "D".into()],
            vec![(0, 1), (2, 3)],
            400,
        )
        .unwrap();
        // Collinear overlapping segments: zero determinant, defined as
        // not crossing.
        let collinear = vec![100, 100, 300, 100, 150, 100, 250, 100];
        assert_eq!(layout.crossings(&collinear), 0.0);
    }

    #[test]
    fn test_shared_endpoint_is_not_a_crossing() {
        let layout = square_graph();
        // Edges (0,1) and (1,2) meet at vertex 1 only.
        let state = vec![100, 100, 200, 100, 200, 200, 100, 200];
        assert_eq!(layout.crossings(&state), 0.0);
    }

    #[test]
    fn test_separation_penalty_kicks_in_below_threshold() {
        let layout =
            GraphLayout::new(vec!["A".into(), "B".into()], vec![(0, 1)], 400).unwrap();

        let far = vec![100, 100, 300, 300];
        assert_eq!(layout.separation_penalty(&far), 0.0);

        let near = vec![100, 100, 110, 100]; // 10 px apart
        let expected = 1.0 - 10.0 / MIN_SEPARATION;
        assert!((layout.separation_penalty(&near) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_angle_penalty_tight_pair() {
        // Two edges from vertex A at a ~5.7 degree angle.
        let layout = GraphLayout::new(
            vec!["A".into(), "B".into(), "C".into()],
            vec![(0, 1), (0, 2)],
            400,
        )
        .unwrap();
        let state = vec![100, 100, 300, 100, 300, 120];
        let penalty = layout.angle_penalty(&state);
        assert!(penalty > 0.0, "5.7 degrees is under the 24 degree threshold");
        assert!(penalty < 1.0);

        // Perpendicular edges carry no penalty.
        let wide = vec![100, 100, 300, 100, 100, 300];
        assert_eq!(layout.angle_penalty(&wide), 0.0);
    }

    #[test]
    fn test_angle_penalty_handles_vertical_edges() {
        // Both edges exactly vertical: equal x-coordinates used to be a
        // divide-by-zero hazard in slope form; the direction-angle form
        // treats them as a zero-degree pair.
        let layout = GraphLayout::new(
            vec!["A".into(), "B".into(), "C".into()],
            vec![(0, 1), (0, 2)],
            400,
        )
        .unwrap();
        let state = vec![100, 100, 100, 300, 100, 50];
        let penalty = layout.angle_penalty(&state);
        assert!((penalty - 1.0).abs() < 1e-12, "parallel pair is maximally tight");

        // Vertical against horizontal: 90 degrees, no penalty.
        let perpendicular = vec![100, 100, 100, 300, 300, 100];
        assert_eq!(layout.angle_penalty(&perpendicular), 0.0);
    }

    #[test]
    fn test_angle_penalty_skips_zero_length_edges() {
        let layout = GraphLayout::new(
            vec!["A".into(), "B".into(), "C".into()],
            vec![(0, 1), (0, 2)],
            400,
        )
        .unwrap();
        // Edge (0,1) has coincident endpoints; the pair contributes 0.
        let state = vec![100, 100, 100, 100, 300, 100];
        assert_eq!(layout.angle_penalty(&state), 0.0);
    }

    #[test]
    fn test_centering_penalty_charges_per_axis() {
        let layout = square_graph();
        // Vertex 0 has degree 3: the hub. Center is (200, 200).
        let centered = vec![200, 200, 50, 50, 350, 350, 50, 350];
        assert_eq!(layout.centering_penalty(&centered), 0.0);

        let off_x = vec![300, 200, 50, 50, 350, 350, 50, 350];
        assert_eq!(layout.centering_penalty(&off_x), 1.0);

        let off_both = vec![300, 80, 50, 50, 350, 350, 50, 350];
        assert_eq!(layout.centering_penalty(&off_both), 2.0);
    }

    #[test]
    fn test_cost_is_weighted_sum_of_terms() {
        let layout = square_graph();
        let mut rng = StdRng::seed_from_u64(42);
        let state = layout.random_state(&mut rng);

        let expected = 2.0 * layout.crossings(&state)
            + 4.0 * layout.separation_penalty(&state)
            + 3.0 * layout.angle_penalty(&state)
            + 1.0 * layout.centering_penalty(&state);
        assert!((layout.cost(&state) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_with_terms_overrides_weights() {
        let layout = square_graph().with_terms(vec![(AestheticTerm::Crossings, 1.0)]);
        let x = vec![100, 100, 300, 300, 100, 300, 300, 100];
        assert_eq!(layout.cost(&x), layout.crossings(&x));
    }

    proptest! {
        #[test]
        fn prop_random_state_within_bounds(seed in 0u64..500) {
            let layout = square_graph();
            let mut rng = StdRng::seed_from_u64(seed);
            let state = layout.random_state(&mut rng);

            prop_assert_eq!(state.len(), 2 * layout.vertex_count());
            for &coord in &state {
                prop_assert!((MARGIN..=layout.dim() - MARGIN).contains(&coord));
            }
        }

        #[test]
        fn prop_neighbor_differs_and_stays_in_bounds(seed in 0u64..500) {
            let layout = square_graph();
            let mut rng = StdRng::seed_from_u64(seed);
            let state = layout.random_state(&mut rng);
            let neighbor = layout.random_neighbor(&state, &mut rng);

            prop_assert_ne!(&neighbor, &state);
            let changed = state
                .iter()
                .zip(&neighbor)
                .filter(|(a, b)| a != b)
                .count();
            prop_assert_eq!(changed, 1, "one coordinate moves per step");
            for &coord in &neighbor {
                prop_assert!((MARGIN..=layout.dim() - MARGIN).contains(&coord));
            }
        }

        #[test]
        fn prop_cost_non_negative(seed in 0u64..500) {
            let layout = square_graph();
            let mut rng = StdRng::seed_from_u64(seed);
            let state = layout.random_state(&mut rng);
            prop_assert!(layout.cost(&state) >= 0.0);
        }
    }
}
