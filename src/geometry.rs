//! Subdivided icosahedron ("icosphere") used as the wave mesh.

use glam::Vec3;

const T: f32 = 1.618_034; // golden ratio

const BASE_VERTICES: [[f32; 3]; 12] = [
    [-1.0, T, 0.0],
    [1.0, T, 0.0],
    [-1.0, -T, 0.0],
    [1.0, -T, 0.0],
    [0.0, -1.0, T],
    [0.0, 1.0, T],
    [0.0, -1.0, -T],
    [0.0, 1.0, -T],
    [T, 0.0, -1.0],
    [T, 0.0, 1.0],
    [-T, 0.0, -1.0],
    [-T, 0.0, 1.0],
];

const BASE_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Non-indexed triangle list: every three consecutive positions form a face.
#[derive(Debug, Clone)]
pub struct Icosphere {
    pub radius: f32,
    pub detail: u32,
    pub positions: Vec<Vec3>,
}

impl Icosphere {
    pub fn new(radius: f32, detail: u32) -> Self {
        let cols = detail as usize + 1;
        let mut positions = Vec::with_capacity(BASE_FACES.len() * cols * cols * 3);
        for face in BASE_FACES {
            let [a, b, c] = face.map(|i| Vec3::from_array(BASE_VERTICES[i]));
            subdivide(a, b, c, cols, &mut positions);
        }
        for p in &mut positions {
            *p = p.normalize() * radius;
        }
        Self {
            radius,
            detail,
            positions,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn flat_positions(&self) -> Vec<f32> {
        self.positions.iter().flat_map(|p| p.to_array()).collect()
    }

    /// Three edges per triangle, as pairs of vertex indices.
    pub fn edge_indices(&self) -> Vec<u32> {
        let mut lines = Vec::with_capacity(self.positions.len() * 2);
        for tri in 0..self.triangle_count() as u32 {
            let (a, b, c) = (tri * 3, tri * 3 + 1, tri * 3 + 2);
            lines.extend_from_slice(&[a, b, b, c, c, a]);
        }
        lines
    }
}

// Splits triangle abc into a grid of `cols` rows, walking from edge ab towards c.
fn subdivide(a: Vec3, b: Vec3, c: Vec3, cols: usize, out: &mut Vec<Vec3>) {
    let mut grid: Vec<Vec<Vec3>> = Vec::with_capacity(cols + 1);
    for i in 0..=cols {
        let t = i as f32 / cols as f32;
        let aj = a.lerp(c, t);
        let bj = b.lerp(c, t);
        let rows = cols - i;
        let row = (0..=rows)
            .map(|j| {
                if rows == 0 {
                    aj
                } else {
                    aj.lerp(bj, j as f32 / rows as f32)
                }
            })
            .collect();
        grid.push(row);
    }

    for i in 0..cols {
        for j in 0..2 * (cols - i) - 1 {
            let k = j / 2;
            if j % 2 == 0 {
                out.extend_from_slice(&[grid[i][k + 1], grid[i + 1][k], grid[i][k]]);
            } else {
                out.extend_from_slice(&[grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k]]);
            }
        }
    }
}
