use efield::config::F;
use efield::controls::Controls;
use efield::fieldmap::plot_fieldmap;
use efield::print_and_log;
use std::io;

/// Читает значение ползунка: пустая строка или не число - значение по умолчанию
fn read_slider(prompt: &str, default: F) -> F {
    println!("{} [{}]:", prompt, default);
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .expect("Не удалось прочитать строку");
    line.trim().parse().unwrap_or(default)
}

fn main() {
    // перерисовка картинки при каждом изменении параметров
    loop {
        let q1 = read_slider("q1 (-10..10, шаг 2)", Controls::Q1.default);
        let x1 = read_slider("x1 (-4..0, шаг 1)", Controls::X1.default);
        let q2 = read_slider("q2 (-10..10, шаг 2)", Controls::Q2.default);
        let x2 = read_slider("x2 (0..4, шаг 1)", Controls::X2.default);

        let controls = Controls::new(q1, x1, q2, x2);
        print_and_log!(
            "fieldmap: q1={}, x1={}, q2={}, x2={}",
            controls.q1,
            controls.x1,
            controls.q2,
            controls.x2
        );
        plot_fieldmap(&controls, "out/fieldmap.svg").expect("failure while drawing fieldmap");
        println!("Сохранено в out/fieldmap.svg");

        println!("Изменить параметры? (пустая строка - выход)");
        let mut again = String::new();
        io::stdin()
            .read_line(&mut again)
            .expect("Не удалось прочитать строку");
        if again.trim().is_empty() {
            break;
        }
    }
}
