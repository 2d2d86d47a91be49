pub mod cursor;
pub mod events;
pub mod size_class;
pub mod spawner;
pub mod tap;

pub use cursor::{make_cursor, CursorState, CursorTracker};
pub use events::{FrameEvents, Subscription};
pub use size_class::{status_message, SizeClass};
pub use spawner::{HiddenCursorPolicy, InstanceCounter, Placement, Spawner, SpawnerSettings};
pub use tap::{resolve_tap, TapTarget};
