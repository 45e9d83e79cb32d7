use crate::config::F;
use crate::controls::Controls;
use crate::field::{Charge, Field2D};
use crate::macros::check_path;
use crate::seed;
use crate::space::Xspace;
use crate::trace::Tracer;
use ndarray::Array2;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

// границы картинки по обеим осям
const LIM: [F; 2] = [-5.0, 5.0];
// узлов сетки стрелок вдоль каждой оси
const N_GRID: usize = 25;
// стартовых точек вокруг каждого заряда
const N_SEEDS: usize = 16;
const SEED_RADIUS: F = 0.2;
// длина стрелки в долях ячейки сетки
const ARROW_LEN: F = 0.8;
// вектор короче этого не имеет направления и не рисуется
const E_DRAW_MIN: F = 1e-12;

/// Все содержимое картинки: сетка, поле на ней, линии, заряды
pub struct Scene {
    pub x: Xspace,
    pub ex: Array2<F>,
    pub ey: Array2<F>,
    pub lines: Vec<Vec<[F; 2]>>,
    pub charges: Vec<Charge>,
}

impl Scene {
    /// Собирает сцену: поле на сетке и пучок линий от каждого заряда
    pub fn build(field: &Field2D, tracer: &Tracer) -> Self {
        let x = Xspace::span([LIM[0], LIM[0]], [LIM[1], LIM[1]], [N_GRID, N_GRID]);
        let [ex, ey] = field.electric_field_as_array(&x);

        // линии уходят от положительного заряда и приходят в отрицательный
        let mut lines: Vec<Vec<[F; 2]>> = Vec::with_capacity(field.charges.len() * N_SEEDS);
        for charge in &field.charges {
            let direction = if charge.q > 0.0 { 1.0 } else { -1.0 };
            for start in seed::ring(charge.pos, SEED_RADIUS, N_SEEDS) {
                lines.push(tracer.trace(field, start, direction));
            }
        }

        Self {
            x,
            ex,
            ey,
            lines,
            charges: field.charges.clone(),
        }
    }
}

fn in_box(p: &[F; 2]) -> bool {
    p[0] >= LIM[0] && p[0] <= LIM[1] && p[1] >= LIM[0] && p[1] <= LIM[1]
}

// доля отрезка от a к b, лежащая внутри рамки; точка a внутри рамки
fn box_fraction(a: (F, F), b: (F, F)) -> F {
    let mut t: F = 1.0;
    for (p, d) in [(a.0, b.0 - a.0), (a.1, b.1 - a.1)] {
        if d > 0.0 {
            t = t.min((LIM[1] - p) / d);
        } else if d < 0.0 {
            t = t.min((LIM[0] - p) / d);
        }
    }
    t
}

fn draw<DB: DrawingBackend>(
    scene: &Scene,
    caption: &str,
    root: &DrawingArea<DB, Shift>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption(caption, ("sans-serif", 20).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(LIM[0]..LIM[1], LIM[0]..LIM[1])?;

    chart
        .configure_mesh()
        .x_labels(11)
        .y_labels(11)
        .bold_line_style(BLACK.mix(0.2))
        .light_line_style(TRANSPARENT)
        .x_desc("x")
        .y_desc("y")
        .draw()?;

    // Стрелки направления поля в узлах сетки
    let cell = scene.x.dx[0].min(scene.x.dx[1]);
    let arrow_style = BLACK.mix(0.3);
    for i in 0..scene.x.n[0] {
        for j in 0..scene.x.n[1] {
            let [px, py] = scene.x.point([i, j]);
            let e = [scene.ex[[i, j]], scene.ey[[i, j]]];
            let e_abs = (e[0].powi(2) + e[1].powi(2)).sqrt();
            if e_abs < E_DRAW_MIN {
                continue;
            }
            let u = [e[0] / e_abs, e[1] / e_abs];
            let len = ARROW_LEN * cell;
            let tip = (px + u[0] * len, py + u[1] * len);

            // стрелка у края обрезается по рамке, наконечник за рамкой не рисуется
            let t = box_fraction((px, py), tip);
            if t < 1.0 {
                let cut = (px + u[0] * len * t, py + u[1] * len * t);
                chart.draw_series(std::iter::once(PathElement::new(
                    vec![(px, py), cut],
                    arrow_style,
                )))?;
                continue;
            }

            let head = 0.3 * len;
            let half = 0.4 * head;
            // перпендикуляр к направлению стрелки
            let norm = [-u[1], u[0]];
            let left = (
                tip.0 - u[0] * head + norm[0] * half,
                tip.1 - u[1] * head + norm[1] * half,
            );
            let right = (
                tip.0 - u[0] * head - norm[0] * half,
                tip.1 - u[1] * head - norm[1] * half,
            );

            chart.draw_series(std::iter::once(PathElement::new(
                vec![(px, py), tip],
                arrow_style,
            )))?;
            chart.draw_series(std::iter::once(Polygon::new(
                vec![tip, left, right],
                arrow_style.filled(),
            )))?;
        }
    }

    // Линии поля; кусок линии за рамкой не рисуется, каждый заход в рамку отдельной серией
    for line in &scene.lines {
        for run in line.split(|p| !in_box(p)) {
            if run.len() < 2 {
                continue;
            }
            chart.draw_series(LineSeries::new(
                run.iter().map(|p| (p[0], p[1])),
                BLUE.stroke_width(1),
            ))?;
        }
    }

    // Маркеры зарядов: положительный красный, отрицательный синий
    for charge in &scene.charges {
        let fill = if charge.q > 0.0 { RED } else { BLUE };
        let center = (charge.pos[0], charge.pos[1]);
        chart.draw_series(std::iter::once(Circle::new(center, 8, fill.filled())))?;
        chart.draw_series(std::iter::once(Circle::new(center, 8, BLACK.stroke_width(1))))?;
    }

    Ok(())
}

/// Рисует картину поля для заданных параметров и сохраняет ее в файл
pub fn plot_fieldmap(
    controls: &Controls,
    save_path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let field = Field2D::new(controls.charges());
    let tracer = Tracer::default();
    let scene = Scene::build(&field, &tracer);

    //=========================================================
    // Вычисляем соотношение сторон
    let x_range = LIM[1] - LIM[0];
    let y_range = LIM[1] - LIM[0];
    let aspect_ratio = x_range / y_range;

    // Базовые размеры
    let base_width = 800.0;
    let base_height = 700.0;

    // Вычисляем размеры изображения с учетом соотношения сторон
    let (width, height) = if aspect_ratio > 1.0 {
        (base_width, base_width / aspect_ratio)
    } else {
        (base_height * aspect_ratio, base_height)
    };
    //=========================================================

    check_path!(save_path);
    let root = SVGBackend::new(save_path, (width.round() as u32, height.round() as u32))
        .into_drawing_area();

    let caption = format!(
        "q1={} x1={} q2={} x2={}",
        controls.q1, controls.x1, controls.q2, controls.x2
    );
    draw(&scene, &caption, &root)?;
    root.present()?;

    Ok(())
}

#[test]
fn test_fieldmap() {
    let controls = Controls::default();
    plot_fieldmap(&controls, "tests_out/fieldmap.svg").expect("failure while drawing fieldmap");
    assert!(std::path::Path::new("tests_out/fieldmap.svg").exists());
}
