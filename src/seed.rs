use crate::config::{F, PI};
use ndarray::Array;

/// Кольцо стартовых точек вокруг заряда: n углов на отрезке [0, 2*pi]
pub fn ring(center: [F; 2], radius: F, n: usize) -> Vec<[F; 2]> {
    Array::linspace(0.0, 2.0 * PI, n)
        .iter()
        .map(|a| {
            [
                center[0] + radius * a.cos(),
                center[1] + radius * a.sin(),
            ]
        })
        .collect()
}

#[test]
fn test_ring() {
    let center = [-2.0, 0.0];
    let points = ring(center, 0.2, 16);
    assert_eq!(points.len(), 16);
    for p in &points {
        let r = ((p[0] - center[0]).powi(2) + (p[1] - center[1]).powi(2)).sqrt();
        assert!((r - 0.2).abs() < 1e-12);
    }
    // отрезок углов замкнут, первая и последняя точки совпадают
    assert!((points[0][0] - points[15][0]).abs() < 1e-12);
    assert!((points[0][1] - points[15][1]).abs() < 1e-12);
}
