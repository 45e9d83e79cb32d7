use crate::config::F;
use crate::field::Field;

/// Интегратор линии поля: шаг Эйлера вдоль нормированного направления
#[derive(Debug, Clone)]
pub struct Tracer {
    pub dr: F,
    pub steps: usize,
    // при меньшей напряженности линия обрывается
    pub e_min: F,
}

impl Default for Tracer {
    fn default() -> Self {
        Self {
            dr: 0.05,
            steps: 400,
            e_min: 1e-6,
        }
    }
}

impl Tracer {
    pub fn new(dr: F, steps: usize, e_min: F) -> Self {
        Self { dr, steps, e_min }
    }

    /// Линия поля из точки start: direction = 1.0 по полю, -1.0 против
    pub fn trace<Fld: Field>(&self, field: &Fld, start: [F; 2], direction: F) -> Vec<[F; 2]> {
        let [mut x, mut y] = start;
        let mut path: Vec<[F; 2]> = Vec::with_capacity(self.steps + 1);
        path.push(start);

        for _ in 0..self.steps {
            let e = field.electric_field(x, y);
            let e_abs = (e[0].powi(2) + e[1].powi(2)).sqrt() + 1e-9;
            if e_abs < self.e_min {
                break;
            }
            x += direction * e[0] / e_abs * self.dr;
            y += direction * e[1] / e_abs * self.dr;
            path.push([x, y]);
        }
        path
    }
}
