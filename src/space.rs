use crate::config::F;
use ndarray::prelude::*;
use ndarray::Array1;

/// Прямоугольная сетка выборки поля на плоскости
#[derive(Debug, Clone)]
pub struct Xspace {
    pub x0: [F; 2],
    pub dx: [F; 2],
    pub n: [usize; 2],
    pub grid: [Array1<F>; 2],
}

impl Xspace {
    pub const DIM: usize = 2;

    pub fn new(x0: [F; Self::DIM], dx: [F; Self::DIM], n: [usize; Self::DIM]) -> Self {
        assert_eq!(x0.len(), dx.len(), "Dimension Error");
        assert_eq!(n.len(), dx.len(), "Dimension Error");
        let mut grid: [Array1<F>; 2] = [Array1::default(0), Array1::default(0)];
        for i in 0..Self::DIM {
            grid[i] = Array::linspace(x0[i], x0[i] + dx[i] * (n[i] - 1) as F, n[i]);
        }
        Self { x0, dx, n, grid }
    }

    /// Сетка по границам: n точек от start до stop, обе границы включены
    pub fn span(start: [F; Self::DIM], stop: [F; Self::DIM], n: [usize; Self::DIM]) -> Self {
        let mut dx: [F; Self::DIM] = [0.0, 0.0];
        for i in 0..Self::DIM {
            assert!(n[i] > 1, "Dimension Error");
            dx[i] = (stop[i] - start[i]) / (n[i] - 1) as F;
        }
        Self::new(start, dx, n)
    }

    pub fn point(&self, index: [usize; Self::DIM]) -> [F; Self::DIM] {
        [self.grid[0][index[0]], self.grid[1][index[1]]]
    }
}

#[test]
fn test_new() {
    let dx = 10.0 / 24.0;
    let x = Xspace::new([-5.0, -5.0], [dx, dx], [25, 25]);
    assert_eq!(x.n, [25, 25]);
    for i in 0..Xspace::DIM {
        assert!((x.grid[i][0] + 5.0).abs() < 1e-12);
        assert!((x.grid[i][24] - 5.0).abs() < 1e-12);
    }

    // сетка по границам совпадает с сеткой по шагу
    let s = Xspace::span([-5.0, -5.0], [5.0, 5.0], [25, 25]);
    for i in 0..Xspace::DIM {
        assert_eq!(x.dx[i], s.dx[i]);
        assert_eq!(x.grid[i], s.grid[i]);
    }
}

#[test]
fn test_span() {
    let x = Xspace::span([-5.0, -5.0], [5.0, 5.0], [25, 25]);
    assert_eq!(x.n, [25, 25]);
    for i in 0..Xspace::DIM {
        assert_eq!(x.grid[i].len(), 25);
        assert!((x.grid[i][0] + 5.0).abs() < 1e-12);
        assert!((x.grid[i][24] - 5.0).abs() < 1e-12);
        assert!((x.dx[i] - 10.0 / 24.0).abs() < 1e-12);
    }
    assert_eq!(x.point([0, 24]), [x.grid[0][0], x.grid[1][24]]);
}
