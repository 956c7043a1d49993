pub mod export;
pub mod hud;
pub mod ports;
