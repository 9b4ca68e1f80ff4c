use std::time::Duration;

use crate::mcts::SelectionPolicy;

// adversarial search
pub const DEPTH: u32 = 4;
pub const HERO_DISCOUNT: f64 = 30.0;

// mcts
pub const THINK_TIME: Duration = Duration::from_secs(3);
pub const EXPLORATION: f64 = std::f64::consts::SQRT_2;
pub const SELECTION: SelectionPolicy = SelectionPolicy::Robust;
