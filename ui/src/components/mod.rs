mod app_header;
mod slider;

pub use app_header::AppHeader;
pub use slider::RangeSlider;
