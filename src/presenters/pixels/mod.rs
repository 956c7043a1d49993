pub mod frame;
#[cfg(feature = "gui")]
pub mod surface;
