mod accordion;
mod filter;
mod loaders;
mod nav;
mod rating;
mod scroll_top;
mod tooltip;

pub use accordion::*;
pub use filter::*;
pub use loaders::*;
pub use nav::*;
pub use rating::*;
pub use scroll_top::*;
pub use tooltip::*;
