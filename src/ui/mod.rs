pub mod app;
pub mod icons;
pub mod util;
pub mod view;
