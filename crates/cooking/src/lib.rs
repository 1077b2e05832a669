pub mod clock;
pub mod progress;

pub use clock::format_clock;
pub use progress::{CookingProgress, Encouragement, StepStatus};
