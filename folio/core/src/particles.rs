//! Particle Field - the drifting "neural network" background
//!
//! A fixed number of nodes drift at constant velocity inside a rectangle and
//! bounce off its edges. Any two nodes closer than the connection distance
//! are linked, fading out linearly with distance.
//!
//! The field is surface-agnostic: coordinates are abstract units. The TUI
//! maps them onto cells.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Peak opacity of a link between two coincident nodes
pub const MAX_LINK_OPACITY: f32 = 0.15;

/// Opacity used when drawing nodes
pub const NODE_OPACITY: f32 = 0.4;

/// Tunables for the particle field
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of nodes
    pub node_count: usize,
    /// Nodes closer than this are linked
    pub connection_distance: f32,
    /// Per-axis velocity bound (units per step)
    pub max_speed: f32,
    /// Smallest node radius
    pub min_radius: f32,
    /// Largest node radius (exclusive)
    pub max_radius: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            node_count: 60,
            connection_distance: 150.0,
            max_speed: 0.25,
            min_radius: 0.5,
            max_radius: 2.0,
        }
    }
}

/// A single drifting node
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
}

/// A link between two nodes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub opacity: f32,
}

/// The particle simulation
#[derive(Clone, Debug)]
pub struct ParticleField {
    width: f32,
    height: f32,
    config: FieldConfig,
    nodes: Vec<Node>,
}

impl ParticleField {
    /// Create a field and seed its nodes
    pub fn new<R: Rng + ?Sized>(width: f32, height: f32, config: FieldConfig, rng: &mut R) -> Self {
        let mut field = Self {
            width,
            height,
            config,
            nodes: Vec::new(),
        };
        field.seed(rng);
        field
    }

    /// Create a field from explicit nodes (no randomness)
    pub fn with_nodes(width: f32, height: f32, config: FieldConfig, nodes: Vec<Node>) -> Self {
        Self {
            width,
            height,
            config,
            nodes,
        }
    }

    fn seed<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let c = &self.config;
        let speed = c.max_speed.max(f32::EPSILON);
        let (r_min, r_max) = if c.max_radius > c.min_radius {
            (c.min_radius, c.max_radius)
        } else {
            (c.min_radius, c.min_radius + f32::EPSILON)
        };

        self.nodes = (0..c.node_count)
            .map(|_| Node {
                x: rng.gen_range(0.0..=self.width.max(0.0)),
                y: rng.gen_range(0.0..=self.height.max(0.0)),
                vx: rng.gen_range(-speed..speed),
                vy: rng.gen_range(-speed..speed),
                radius: rng.gen_range(r_min..r_max),
            })
            .collect();
    }

    /// Change the bounds and re-seed every node
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f32, height: f32, rng: &mut R) {
        self.width = width;
        self.height = height;
        self.seed(rng);
        tracing::debug!(width, height, nodes = self.nodes.len(), "Particle field reseeded");
    }

    /// Advance every node by one step
    ///
    /// Position is updated first; a node that ends up outside the bounds has
    /// the offending velocity component reversed so it drifts back in.
    pub fn step(&mut self) {
        for node in &mut self.nodes {
            node.x += node.vx;
            node.y += node.vy;

            if node.x < 0.0 || node.x > self.width {
                node.vx = -node.vx;
            }
            if node.y < 0.0 || node.y > self.height {
                node.vy = -node.vy;
            }
        }
    }

    /// Every pair of nodes within the connection distance
    pub fn links(&self) -> Vec<Link> {
        let max = self.config.connection_distance;
        let mut links = Vec::new();

        for (i, a) in self.nodes.iter().enumerate() {
            for (j, b) in self.nodes.iter().enumerate().skip(i + 1) {
                let dx = a.x - b.x;
                let dy = a.y - b.y;
                let distance = (dx * dx + dy * dy).sqrt();
                if distance < max {
                    links.push(Link {
                        a: i,
                        b: j,
                        distance,
                        opacity: (1.0 - distance / max) * MAX_LINK_OPACITY,
                    });
                }
            }
        }

        links
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn node(x: f32, y: f32, vx: f32, vy: f32) -> Node {
        Node {
            x,
            y,
            vx,
            vy,
            radius: 1.0,
        }
    }

    #[test]
    fn test_seeded_nodes_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = FieldConfig::default();
        let field = ParticleField::new(800.0, 600.0, config.clone(), &mut rng);

        assert_eq!(field.nodes().len(), 60);
        for n in field.nodes() {
            assert!((0.0..=800.0).contains(&n.x));
            assert!((0.0..=600.0).contains(&n.y));
            assert!(n.vx.abs() <= config.max_speed);
            assert!(n.vy.abs() <= config.max_speed);
            assert!(n.radius >= config.min_radius && n.radius < config.max_radius);
        }
    }

    #[test]
    fn test_step_moves_by_velocity() {
        let mut field = ParticleField::with_nodes(
            100.0,
            100.0,
            FieldConfig::default(),
            vec![node(10.0, 20.0, 0.5, -0.25)],
        );
        field.step();
        let n = field.nodes()[0];
        assert_eq!((n.x, n.y), (10.5, 19.75));
        assert_eq!((n.vx, n.vy), (0.5, -0.25));
    }

    #[test]
    fn test_bounce_reverses_velocity() {
        let mut field = ParticleField::with_nodes(
            10.0,
            10.0,
            FieldConfig::default(),
            vec![node(9.8, 0.1, 0.5, -0.5)],
        );
        field.step();
        let n = field.nodes()[0];
        assert!(n.vx < 0.0);
        assert!(n.vy > 0.0);

        // Next step heads back inside
        field.step();
        let n = field.nodes()[0];
        assert!(n.x < 10.3);
        assert!(n.y > -0.4);
    }

    #[test]
    fn test_links_fade_with_distance() {
        let config = FieldConfig {
            connection_distance: 100.0,
            ..FieldConfig::default()
        };
        let field = ParticleField::with_nodes(
            500.0,
            500.0,
            config,
            vec![
                node(0.0, 0.0, 0.0, 0.0),
                node(50.0, 0.0, 0.0, 0.0),
                node(300.0, 300.0, 0.0, 0.0),
            ],
        );

        let links = field.links();
        assert_eq!(links.len(), 1);
        let link = links[0];
        assert_eq!((link.a, link.b), (0, 1));
        assert!((link.distance - 50.0).abs() < 1e-4);
        assert!((link.opacity - 0.075).abs() < 1e-4);
    }

    #[test]
    fn test_resize_reseeds() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ParticleField::new(10.0, 10.0, FieldConfig::default(), &mut rng);
        field.resize(1000.0, 5.0, &mut rng);
        assert_eq!(field.bounds(), (1000.0, 5.0));
        assert_eq!(field.nodes().len(), 60);
        assert!(field.nodes().iter().all(|n| n.y <= 5.0));
    }

    #[test]
    fn test_zero_nodes() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = FieldConfig {
            node_count: 0,
            ..FieldConfig::default()
        };
        let mut field = ParticleField::new(10.0, 10.0, config, &mut rng);
        field.step();
        assert!(field.links().is_empty());
    }
}
