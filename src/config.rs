use log::Level;

pub const BRAND: &str = "SellSmart";

/// Every call-to-action on the page leads here.
pub const BOT_URL: &str = "https://t.me/SellSmart_Bot";

pub const LOGO_URL: &str =
    "https://drive.google.com/uc?export=download&id=1jLdzD3YUwRv_q4eSG783gUuFp8FO1xIg";
pub const PORTRAIT_URL: &str =
    "https://drive.google.com/uc?export=download&id=1Sxd3kQx6O5DQnMCD4UtOcf4TqvHLoSmq";

// Header switches to its solid background past this many pixels
pub const HEADER_SCROLL_THRESHOLD: f64 = 24.0;

// Reveal animation timings
pub const REVEAL_STAGGER_MS: u32 = 60;
pub const MOUNT_REVEAL_DELAY_MS: u32 = 16;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
