//! State for the traffic-light screen.

use crate::ui::mvi::UiState;

/// The lamp that is currently lit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightColor {
    #[default]
    Red,
    Green,
    Orange,
}

impl LightColor {
    /// Cyclic successor: Red → Green → Orange → Red.
    pub fn next(self) -> Self {
        match self {
            LightColor::Red => LightColor::Green,
            LightColor::Green => LightColor::Orange,
            LightColor::Orange => LightColor::Red,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LightColor::Red => "red",
            LightColor::Green => "green",
            LightColor::Orange => "orange",
        }
    }
}

impl std::fmt::Display for LightColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A traffic light with exactly one lamp lit.
///
/// Holding a single `LightColor` rather than three flags makes the
/// "zero or two lamps lit" states unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrafficLightState {
    color: LightColor,
}

impl UiState for TrafficLightState {}

impl TrafficLightState {
    pub fn new(color: LightColor) -> Self {
        Self { color }
    }

    pub fn color(&self) -> LightColor {
        self.color
    }

    pub fn red(&self) -> bool {
        self.color == LightColor::Red
    }

    pub fn orange(&self) -> bool {
        self.color == LightColor::Orange
    }

    pub fn green(&self) -> bool {
        self.color == LightColor::Green
    }

    /// Lamp flags top to bottom: red, orange, green.
    pub fn lamps(&self) -> [bool; 3] {
        [self.red(), self.orange(), self.green()]
    }

    pub fn name(&self) -> &'static str {
        self.color.name()
    }
}
