//! Rotation state of the featured-events carousel
//!
//! The controller owns its index; nothing is shared between carousels. All
//! modulo arithmetic is skipped on an empty list.

use std::time::Duration;
use tokio::time::{interval_at, Instant};
use tokio_util::sync::CancellationToken;

pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    Idle,
    Showing(usize),
    Animating(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselController<T> {
    items: Vec<T>,
    index: usize,
    animating: bool,
}

impl<T> Default for CarouselController<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: 0,
            animating: false,
        }
    }
}

impl<T> CarouselController<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the list wholesale and restarts at the first item
    pub fn load(&mut self, items: Vec<T>) {
        self.items = items;
        self.index = 0;
        self.animating = false;
    }

    /// Timer advance; same transition as [`next`](Self::next)
    pub fn tick(&mut self) {
        self.next();
    }

    pub fn next(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.index = (self.index + 1) % len;
        self.animating = true;
    }

    pub fn prev(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.index = (self.index + len - 1) % len;
        self.animating = true;
    }

    /// Signal from the view that the slide animation ended
    pub fn animation_finished(&mut self) {
        self.animating = false;
    }

    pub fn phase(&self) -> CarouselPhase {
        if self.items.is_empty() {
            CarouselPhase::Idle
        } else if self.animating {
            CarouselPhase::Animating(self.index)
        } else {
            CarouselPhase::Showing(self.index)
        }
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Calls `on_tick` every `period` until `cancel` fires
///
/// The first tick happens one full period after the start.
pub async fn run_rotation(period: Duration, cancel: CancellationToken, mut on_tick: impl FnMut()) {
    let mut interval = interval_at(Instant::now() + period, period);
    log::debug!("Carousel rotation started ({}s)", period.as_secs());

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                log::debug!("Carousel rotation stopped");
                break;
            }
            _ = interval.tick() => on_tick(),
        }
    }
}
