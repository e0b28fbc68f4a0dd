use log::Level;

pub const BRAND_NAME: &str = "Doculab";
pub const CONTACT_EMAIL: &str = "info@doculab.ae";
pub const OFFICE_LOCATION: &str = "Dubai, UAE";

pub const ABOUT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1664575602276-acd073f104c1?q=80&w=2940&auto=format&fit=crop";

/// Fraction of the wrapper that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_DURATION_SECS: f64 = 0.6;
/// Downward displacement of unrevealed content, in px.
pub const REVEAL_OFFSET_PX: f64 = 20.0;
pub const STAGGER_SECS: f64 = 0.1;

pub const HOVER_DURATION_SECS: f64 = 0.2;
pub const HOVER_SCALE: f64 = 1.03;
pub const HOVER_LIFT_PX: f64 = 5.0;

pub const ACCORDION_DURATION_SECS: f64 = 0.2;
pub const MENU_DURATION_SECS: f64 = 0.3;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
