use crate::config::F;
use crate::controls::Controls;
use crate::field::Field2D;
use crate::fieldmap::{plot_fieldmap, Scene};
use crate::trace::Tracer;

fn dist(a: [F; 2], b: [F; 2]) -> F {
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt()
}

#[test]
fn dipole_line_reaches_negative_charge() {
    // линия, выпущенная между зарядами диполя, приходит к отрицательному
    let controls = Controls::default();
    let field = Field2D::new(controls.charges());
    let tracer = Tracer::default();

    let path = tracer.trace(&field, [-1.8, 0.0], 1.0);
    let last = path[path.len() - 1];
    assert!(dist(last, [2.0, 0.0]) < 0.2, "line ended at {:?}", last);
}

#[test]
fn controls_snap_to_slider_lattice() {
    let c = Controls::new(3.0, -1.4, -11.0, 9.0);
    assert_eq!(c.q1, 4.0);
    assert_eq!(c.x1, -1.0);
    assert_eq!(c.q2, -10.0);
    assert_eq!(c.x2, 4.0);
}

#[test]
fn default_controls_give_dipole_on_axis() {
    let charges = Controls::default().charges();
    assert_eq!(charges.len(), 2);
    assert_eq!(charges[0].q, 4.0);
    assert_eq!(charges[0].pos, [-2.0, 0.0]);
    assert_eq!(charges[1].q, -4.0);
    assert_eq!(charges[1].pos, [2.0, 0.0]);
}

#[test]
fn scene_collects_grid_and_lines() {
    let field = Field2D::new(Controls::default().charges());
    let scene = Scene::build(&field, &Tracer::default());

    // сетка 25x25 на [-5, 5] и по 16 линий от каждого заряда
    assert_eq!(scene.ex.dim(), (25, 25));
    assert_eq!(scene.ey.dim(), (25, 25));
    assert_eq!(scene.lines.len(), 32);
    assert_eq!(scene.charges.len(), 2);
    assert!((scene.x.grid[0][0] + 5.0).abs() < 1e-12);
    assert!((scene.x.grid[0][24] - 5.0).abs() < 1e-12);

    for line in &scene.lines {
        assert!(!line.is_empty());
        assert!(line.len() <= 401);
    }
}

#[test]
fn render_default_controls() {
    let controls = Controls::default();
    plot_fieldmap(&controls, "tests_out/fieldmap_default.svg")
        .expect("failure while drawing fieldmap");
    let meta = std::fs::metadata("tests_out/fieldmap_default.svg").expect("no output file");
    assert!(meta.len() > 0);
}

#[test]
fn render_like_charges_with_null_on_grid_node() {
    // два одинаковых заряда: ноль поля попадает точно в узел сетки (0, 0)
    let controls = Controls::new(4.0, -2.0, 4.0, 2.0);
    plot_fieldmap(&controls, "tests_out/fieldmap_like.svg")
        .expect("failure while drawing fieldmap");
}
