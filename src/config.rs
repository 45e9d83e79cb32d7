// тип данных: f64 или f32
pub type F = f64;

// константы
pub const PI: F = std::f64::consts::PI;

// электростатическая постоянная, Н*м^2/Кл^2
pub const K: F = 9e9;
