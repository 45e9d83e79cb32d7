use crate::config::{F, K};
use crate::space::Xspace;
use itertools::multizip;
use ndarray::prelude::*;

/// Точечный заряд на плоскости
#[derive(Debug, Clone, Copy)]
pub struct Charge {
    pub q: F,
    pub pos: [F; 2],
}

impl Charge {
    pub fn new(q: F, pos: [F; 2]) -> Self {
        Self { q, pos }
    }
}

/// Векторное поле на плоскости
pub trait Field {
    fn electric_field(&self, x: F, y: F) -> [F; 2];
}

/// Электростатическое поле набора точечных зарядов
pub struct Field2D {
    pub charges: Vec<Charge>,
    pub k: F,
    // вклад заряда ближе этого радиуса (в квадрате) отбрасывается
    pub r2_min: F,
}

impl Field2D {
    pub fn new(charges: Vec<Charge>) -> Self {
        Self {
            charges,
            k: K,
            r2_min: 1e-6,
        }
    }

    /// Поле на всей сетке: массивы Ex и Ey размерности сетки
    pub fn electric_field_as_array(&self, x: &Xspace) -> [Array2<F>; 2] {
        let mut ex: Array2<F> = Array::zeros((x.n[0], x.n[1]));
        let mut ey: Array2<F> = Array::zeros((x.n[0], x.n[1]));
        multizip((
            ex.axis_iter_mut(Axis(0)),
            ey.axis_iter_mut(Axis(0)),
            x.grid[0].iter(),
        ))
        .for_each(|(mut ex_row, mut ey_row, x_point)| {
            multizip((ex_row.iter_mut(), ey_row.iter_mut(), x.grid[1].iter())).for_each(
                |(ex_elem, ey_elem, y_point)| {
                    let e = self.electric_field(*x_point, *y_point);
                    *ex_elem = e[0];
                    *ey_elem = e[1];
                },
            );
        });
        [ex, ey]
    }
}

impl Field for Field2D {
    fn electric_field(&self, x: F, y: F) -> [F; 2] {
        // Возвращает напряженность поля в точке (x, y): сумму
        // кулоновских вкладов k*q*r/|r|^3 по всем зарядам.
        // Заряд, в который попала сама точка, из суммы выпадает.

        let mut electric_field: [F; 2] = [0., 0.];

        for charge in &self.charges {
            let dx = x - charge.pos[0];
            let dy = y - charge.pos[1];
            let r2 = dx.powi(2) + dy.powi(2);
            if r2 < self.r2_min {
                continue;
            }
            let r = r2.sqrt();
            electric_field[0] += self.k * charge.q * dx / r.powi(3);
            electric_field[1] += self.k * charge.q * dy / r.powi(3);
        }
        electric_field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotly::common::Title;
    use plotly::layout::Layout;
    use plotly::{Plot, Scatter};

    #[test]
    fn test_plot_field_profile() {
        // профиль |E| вдоль оси x для диполя 4 и -4
        let field = Field2D::new(vec![
            Charge::new(4.0, [-2.0, 0.0]),
            Charge::new(-4.0, [2.0, 0.0]),
        ]);
        let x = Xspace::span([-5.0, -5.0], [5.0, 5.0], [300, 300]);
        let mut xs: Vec<F> = Vec::new();
        let mut es: Vec<F> = Vec::new();

        for i in 0..x.n[0] {
            let e = field.electric_field(x.grid[0][i], 0.0);
            xs.push(x.grid[0][i]);
            es.push((e[0].powi(2) + e[1].powi(2)).sqrt());
        }

        let layout = Layout::new()
            .width(800)
            .height(800)
            .title(Title::from("electric field"));
        let trace = Scatter::new(xs, es);
        let mut plot = Plot::new();
        plot.add_trace(trace);
        plot.set_layout(layout);
        std::fs::create_dir_all("tests_out").unwrap();
        plot.write_html("tests_out/field_profile.html");
    }
}
