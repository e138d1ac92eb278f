mod progress;
mod spinner;
mod theme;

pub use progress::RowProgress;
pub use spinner::Spinner;
pub use theme::Style;
