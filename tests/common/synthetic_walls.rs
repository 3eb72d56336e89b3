use fatline_merge::Line2;

/// Thick segment with a label, as produced by a floor-plan generator.
#[derive(Clone, Debug)]
pub struct Wall {
    pub label: String,
    pub line: Line2,
    pub thickness: f64,
}

/// Tiny deterministic LCG so fixtures do not depend on a RNG crate.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed.wrapping_mul(6364136223846793005).wrapping_add(1))
    }

    /// Uniform value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    pub fn coin(&mut self) -> bool {
        self.next_f64() < 0.5
    }
}

/// Axis-aligned walls laid out along a few grid lines, with overlapping
/// extents, mixed thicknesses, small perpendicular jitter and random
/// endpoint order. Coordinates are multiples of 1/64 so projections are exact.
pub fn grid_walls(seed: u64, per_line: usize) -> Vec<Wall> {
    let mut rng = Lcg::new(seed);
    let snap = |v: f64| (v * 64.0).round() / 64.0;
    let thicknesses = [0.0625, 0.125, 0.1875, 0.25];
    let mut walls = Vec::new();
    for (axis, horizontal) in [(0usize, true), (1usize, false)] {
        for k in 0..4 {
            let base = k as f64 * 3.0;
            for i in 0..per_line {
                let a = snap(rng.range(0.0, 10.0));
                let len = snap(rng.range(0.25, 4.0));
                let jitter = snap(rng.range(-0.0625, 0.0625));
                let t = thicknesses[(rng.next_f64() * thicknesses.len() as f64) as usize % 4];
                let (mut p0, mut p1) = if horizontal {
                    ([a, base + jitter], [a + len, base + jitter])
                } else {
                    ([base + jitter, a], [base + jitter, a + len])
                };
                if rng.coin() {
                    std::mem::swap(&mut p0, &mut p1);
                }
                walls.push(Wall {
                    label: format!("{axis}-{k}-{i}"),
                    line: Line2::from_coords(p0[0], p0[1], p1[0], p1[1]),
                    thickness: t,
                });
            }
        }
    }
    walls
}
