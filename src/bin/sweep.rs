use efield::config::F;
use efield::controls::Controls;
use efield::fieldmap::plot_fieldmap;
use efield::{measure_time, print_and_log};

fn main() {
    // префикс для сохранения
    let out_prefix = "out/sweep";

    // скан по величине второго заряда, остальные параметры по умолчанию
    let slider = Controls::Q2;
    let n = ((slider.max - slider.min) / slider.step).round() as usize + 1;

    measure_time!("sweep", {
        for i in 0..n {
            let controls = Controls::new(
                Controls::Q1.default,
                Controls::X1.default,
                slider.min + slider.step * i as F,
                Controls::X2.default,
            );
            print_and_log!("STEP {}/{}, q2={}", i, n, controls.q2);
            plot_fieldmap(
                &controls,
                format!("{out_prefix}/fieldmap_q2_{i}.svg").as_str(),
            )
            .expect("failure while drawing fieldmap");
        }
    });
}
