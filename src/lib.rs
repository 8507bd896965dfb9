//! Rotates a watchlist of chart symbols across a bounded display.
//!
//! Two engines are available: [`crossfade::engine::CrossfadeEngine`] cycles the pool across two
//! stacked surfaces, and [`pager::engine::PagerEngine`] keeps six paged slots stocked from a
//! replenishment queue. Both are driven by elapsed frame time through the [`engine::Engine`]
//! trait and report what to draw through a [`sink::RenderSink`].

pub mod config;
pub mod constants;
pub mod crossfade;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod pager;
pub mod schedule;
pub mod sink;
pub mod state;
pub mod symbol;
pub mod watchlist_loader;
#[cfg(feature = "window")]
pub mod window;
