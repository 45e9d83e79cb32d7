use efield::controls::Controls;
use efield::fieldmap::plot_fieldmap;
use efield::{measure_time, print_and_log};

fn main() {
    // префикс для сохранения
    let out_prefix = "out";

    // параметры по умолчанию: диполь 4 и -4 на оси x
    let controls = Controls::default();
    print_and_log!(
        "fieldmap: q1={}, x1={}, q2={}, x2={}",
        controls.q1,
        controls.x1,
        controls.q2,
        controls.x2
    );

    measure_time!("fieldmap", {
        plot_fieldmap(&controls, format!("{out_prefix}/fieldmap.svg").as_str())
            .expect("failure while drawing fieldmap");
    });
}
