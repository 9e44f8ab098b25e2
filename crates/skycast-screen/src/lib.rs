//! Screen state for skycast: which place is chosen, which rows are open, and
//! the rows a daily-forecast view renders.

pub mod screen;
pub mod selection;

pub use screen::{ForecastRow, ForecastScreen, ScreenSnapshot};
pub use selection::{ExpandPolicy, PlaceChangePolicy, SelectionPolicy, SelectionState};
