//! Time-driven animation: easing, tweens, the slide transition sequencer and
//! per-slide entrance choreography.

pub mod animator;
pub mod choreography;
pub mod counter;
pub mod ease;
pub mod sequencer;
pub mod tween;

pub use animator::{Part, SlideAnimator};
pub use choreography::Choreography;
pub use sequencer::TransitionConfig;
pub use tween::Pose;
