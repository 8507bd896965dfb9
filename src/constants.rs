use std::time::Duration;

pub const RENDER_WIDTH: i32 = 1920;           // Width of the window render target
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the window render target
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const PRE_ROLL_DURATION: Duration = Duration::from_secs(9); // Hidden surface renders before the flip
pub const SETTLE_DURATION: Duration = Duration::from_secs(1);   // Pause after a flip before the next pre-load
pub const PAGE_INTERVAL: Duration = Duration::from_secs(12);    // Time between page turns

pub const SURFACE_COUNT: usize = 2;           // Crossfade surfaces
pub const SLOT_COUNT: usize = 6;              // Pager slots
pub const MIN_POOL_LEN: usize = 6;            // Smallest watchlist that activates rotation
pub const TURN_HISTORY: usize = 64;           // Page turns the pager keeps for inspection

pub const COMMENT_MARKER: &str = "###";       // Watchlist entries starting with this are skipped
pub const DELIMITER: char = ',';              // Watchlist entry separator (newlines always separate too)

pub const FADE_DURATION: f32 = 1.0;           // Opacity transition in the window (seconds)
pub const SCROLL_DURATION: f32 = 0.5;         // Page scroll in the window (seconds)
