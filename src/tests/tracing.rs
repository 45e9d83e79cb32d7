use crate::config::F;
use crate::field::{Charge, Field, Field2D};
use crate::trace::Tracer;

/// Однородное поле для проверки интегратора
struct Uniform([F; 2]);

impl Field for Uniform {
    fn electric_field(&self, _x: F, _y: F) -> [F; 2] {
        self.0
    }
}

#[test]
fn straight_line_in_uniform_field() {
    let tracer = Tracer::default();
    let field = Uniform([3.0, 4.0]);

    let path = tracer.trace(&field, [0.0, 0.0], 1.0);
    assert_eq!(path.len(), tracer.steps + 1);

    // каждый шаг длины dr вдоль направления (0.6, 0.8)
    let total = tracer.dr * tracer.steps as F;
    let last = path[path.len() - 1];
    assert!((last[0] - 0.6 * total).abs() < 1e-6);
    assert!((last[1] - 0.8 * total).abs() < 1e-6);

    // против поля - в противоположную сторону
    let back = tracer.trace(&field, [0.0, 0.0], -1.0);
    let last = back[back.len() - 1];
    assert!((last[0] + 0.6 * total).abs() < 1e-6);
    assert!((last[1] + 0.8 * total).abs() < 1e-6);
}

#[test]
fn path_starts_at_seed_and_is_bounded() {
    let tracer = Tracer::default();
    let field = Field2D::new(vec![
        Charge::new(4.0, [-2.0, 0.0]),
        Charge::new(-4.0, [2.0, 0.0]),
    ]);

    for start in [[-1.8, 0.0], [0.0, 4.9], [4.9, -4.9], [-2.0, 0.0]] {
        for direction in [1.0, -1.0] {
            let path = tracer.trace(&field, start, direction);
            assert_eq!(path[0], start);
            assert!(!path.is_empty());
            assert!(path.len() <= tracer.steps + 1);
        }
    }
}

#[test]
fn stops_at_null_between_like_charges() {
    // посередине между равными одноименными зарядами поле нулевое
    let tracer = Tracer::default();
    let field = Field2D::new(vec![
        Charge::new(4.0, [-2.0, 0.0]),
        Charge::new(4.0, [2.0, 0.0]),
    ]);

    let path = tracer.trace(&field, [0.0, 0.0], 1.0);
    assert_eq!(path.len(), 1);
    assert_eq!(path[0], [0.0, 0.0]);
}

#[test]
fn step_length_is_constant() {
    let tracer = Tracer::new(0.05, 50, 1e-6);
    let field = Field2D::new(vec![Charge::new(4.0, [0.0, 0.0])]);

    let path = tracer.trace(&field, [1.0, 1.0], 1.0);
    assert_eq!(path.len(), 51);
    for pair in path.windows(2) {
        let step = ((pair[1][0] - pair[0][0]).powi(2) + (pair[1][1] - pair[0][1]).powi(2)).sqrt();
        assert!((step - tracer.dr).abs() < 1e-9);
    }
}
