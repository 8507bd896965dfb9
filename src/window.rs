//! Raylib window that projects engine state onto the screen.
//!
//! Each surface or slot is drawn as a chart card showing its symbol. The engine decides what is
//! visible; this module only animates the change, fading opacity for the crossfader and
//! scrolling horizontally for the pager.

use std::time::Duration;
use anyhow::Result;
use raylib::prelude::*;
use crate::constants::*;
use crate::engine::{Engine, EngineKind};
use crate::sink::RenderSink;
use crate::symbol::{Pool, Symbol};

const CARD_BACKGROUND: Color = Color::new(15, 15, 15, 255);
const LABEL_SIZE: i32 = 96;

struct Card {
    symbol: Option<Symbol>,
    opacity: f32,
    fade: Option<(ease::Tween, f32)>,
}

impl Card {
    fn new(opacity: f32) -> Self {
        Self { symbol: None, opacity, fade: None }
    }

    fn fade_to(&mut self, target: f32) {
        self.fade = Some((ease::Tween::new(ease::cubic_in_out, self.opacity, target, FADE_DURATION), 0.0));
    }

    fn update(&mut self, dt: f32) {
        if let Some((tween, timer)) = self.fade.as_mut() {
            self.opacity = tween.apply(dt);
            *timer += dt;
            if *timer >= FADE_DURATION {
                self.fade = None;
            }
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle, x: f32, width: f32, height: f32) {
        if self.opacity <= 0.0 {
            return;
        }
        let Some(symbol) = &self.symbol else {
            return;
        };

        d.draw_rectangle(x as i32, 0, width as i32, height as i32, CARD_BACKGROUND.fade(self.opacity));

        let label = symbol.as_str();
        let label_width = measure_text(label, LABEL_SIZE);
        d.draw_text(
            label,
            (x + width * 0.5) as i32 - label_width / 2,
            (height * 0.5) as i32 - LABEL_SIZE / 2,
            LABEL_SIZE,
            Color::WHITE.fade(self.opacity),
        );
    }
}

/// Sink that keeps one card per engine target and animates between the states it is told about.
pub struct WindowSink {
    kind: EngineKind,
    cards: Vec<Card>,
    scroll: f32,
    scroll_tween: Option<(ease::Tween, f32)>,
}

impl WindowSink {
    pub fn new(kind: EngineKind) -> Self {
        let cards = match kind {
            EngineKind::Crossfade => (0..SURFACE_COUNT).map(|_| Card::new(0.0)).collect(),
            EngineKind::Pager => (0..SLOT_COUNT).map(|_| Card::new(1.0)).collect(),
        };
        Self { kind, cards, scroll: 0.0, scroll_tween: None }
    }

    pub fn update(&mut self, dt: f32) {
        for card in self.cards.iter_mut() {
            card.update(dt);
        }
        if let Some((tween, timer)) = self.scroll_tween.as_mut() {
            self.scroll = tween.apply(dt);
            *timer += dt;
            if *timer >= SCROLL_DURATION {
                self.scroll_tween = None;
            }
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let width = d.get_screen_width() as f32;
        let height = d.get_screen_height() as f32;
        match self.kind {
            // Both surfaces cover the whole screen; the hidden one is fully transparent.
            EngineKind::Crossfade => {
                for card in self.cards.iter() {
                    card.draw(d, 0.0, width, height);
                }
            }
            EngineKind::Pager => {
                for (position, card) in self.cards.iter().enumerate() {
                    let x = (position as f32 - self.scroll) * width;
                    if x > -width && x < width {
                        card.draw(d, x, width, height);
                    }
                }
            }
        }
    }
}

impl RenderSink for WindowSink {
    fn render(&mut self, target: usize, symbol: &Symbol) {
        if let Some(card) = self.cards.get_mut(target) {
            card.symbol = Some(symbol.clone());
        }
    }

    fn set_visible(&mut self, target: usize, visible: bool) {
        if let Some(card) = self.cards.get_mut(target) {
            card.fade_to(if visible { 1.0 } else { 0.0 });
        }
    }

    fn set_page(&mut self, page: usize) {
        self.scroll_tween = Some((
            ease::Tween::new(ease::cubic_out, self.scroll, page as f32, SCROLL_DURATION),
            0.0,
        ));
    }
}

/// Opens the window and runs `engine` until it is closed or `run_for` elapses.
pub fn run(mut engine: Box<dyn Engine>, kind: EngineKind, pool: Pool, run_for: Option<Duration>) -> Result<()> {
    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Ticker Wall")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut sink = WindowSink::new(kind);
    engine.initialize(pool, &mut sink)?;

    let mut elapsed = Duration::ZERO;
    while !rl.window_should_close() && run_for.is_none_or(|limit| elapsed < limit) {
        let dt = rl.get_frame_time();
        let frame = Duration::from_secs_f32(dt);

        engine.update(frame, &mut sink)?;
        sink.update(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        sink.draw(&mut d);

        elapsed += frame;
    }

    engine.teardown();
    Ok(())
}
