use crate::config::F;
use crate::field::Charge;

/// Ползунок параметра: диапазон [min, max] с шагом step
#[derive(Debug, Clone, Copy)]
pub struct Slider {
    pub min: F,
    pub max: F,
    pub step: F,
    pub default: F,
}

impl Slider {
    pub const fn new(min: F, max: F, step: F, default: F) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    /// Прижимает значение к диапазону и округляет к решетке шага
    pub fn snap(&self, value: F) -> F {
        if !value.is_finite() {
            return self.default;
        }
        let v = value.clamp(self.min, self.max);
        self.min + ((v - self.min) / self.step).round() * self.step
    }
}

/// Параметры картинки: величины и абсциссы двух зарядов
#[derive(Debug, Clone, Copy)]
pub struct Controls {
    pub q1: F,
    pub x1: F,
    pub q2: F,
    pub x2: F,
}

impl Controls {
    pub const Q1: Slider = Slider::new(-10.0, 10.0, 2.0, 4.0);
    pub const X1: Slider = Slider::new(-4.0, 0.0, 1.0, -2.0);
    pub const Q2: Slider = Slider::new(-10.0, 10.0, 2.0, -4.0);
    pub const X2: Slider = Slider::new(0.0, 4.0, 1.0, 2.0);

    /// Снимает значения с ползунков, выход за диапазон прижимается к границе
    pub fn new(q1: F, x1: F, q2: F, x2: F) -> Self {
        Self {
            q1: Self::Q1.snap(q1),
            x1: Self::X1.snap(x1),
            q2: Self::Q2.snap(q2),
            x2: Self::X2.snap(x2),
        }
    }

    /// Оба заряда лежат на горизонтальной оси
    pub fn charges(&self) -> Vec<Charge> {
        vec![
            Charge::new(self.q1, [self.x1, 0.0]),
            Charge::new(self.q2, [self.x2, 0.0]),
        ]
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::new(
            Self::Q1.default,
            Self::X1.default,
            Self::Q2.default,
            Self::X2.default,
        )
    }
}

#[test]
fn test_snap() {
    let slider = Slider::new(-10.0, 10.0, 2.0, 4.0);
    assert_eq!(slider.snap(3.0), 4.0);
    assert_eq!(slider.snap(-10.0), -10.0);
    assert_eq!(slider.snap(25.0), 10.0);
    assert_eq!(slider.snap(-25.0), -10.0);
    assert_eq!(slider.snap(F::NAN), 4.0);
}
