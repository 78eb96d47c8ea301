use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficLightIntent {
    /// Move to the next color in the cycle.
    Advance,
    /// Back to red, whatever the current color.
    Reset,
}

impl Intent for TrafficLightIntent {}
