pub mod animation;
pub mod assets;
pub mod html;
pub mod item;
pub mod page;
pub mod section;

pub use animation::{AnimationSettings, AnimationState, RevealSpec, RevealTrigger};
pub use page::{PageShell, RenderedPage, SectionCounts};
pub use section::SectionRenderer;
