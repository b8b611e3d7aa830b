pub mod controller;
pub mod engine;
pub mod states;

pub use controller::FormController;
pub use engine::{transition, ModeTransitionError};
pub use states::{FormEvent, FormMode, TransitionOutcome};
