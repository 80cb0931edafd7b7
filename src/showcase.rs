use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::models::{format_rupees, Property};
use crate::render::{RenderSink, Scene, ViewMode};

pub const DEFAULT_ROTATION_PERIOD: Duration = Duration::from_secs(5);

/// Which plot the hero section is featuring
///
/// `animating` is set by each advance and cleared by `settle`; an advance
/// requested while it is still set is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedCarousel {
    index: usize,
    len: usize,
    animating: bool,
}

impl FeaturedCarousel {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            animating: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Timer fired; returns whether the featured plot changed
    pub fn tick(&mut self) -> bool {
        if self.animating || self.len == 0 {
            return false;
        }
        self.animating = true;
        self.index = (self.index + 1) % self.len;
        true
    }

    pub fn settle(&mut self) {
        self.animating = false;
    }

    /// Jump straight to a plot from the dot navigation
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }
}

/// Rotate the featured plot every `period` until `shutdown` flips to true
/// or `max_advances` is reached. Returns how many advances happened.
pub async fn run_carousel(
    properties: Arc<[Property]>,
    period: Duration,
    sink: Arc<dyn RenderSink>,
    max_advances: Option<usize>,
    mut shutdown: watch::Receiver<bool>,
) -> usize {
    if properties.is_empty() {
        warn!("Nothing to feature, carousel not started");
        return 0;
    }

    let mut carousel = FeaturedCarousel::new(properties.len());
    let mut interval = tokio::time::interval(period);
    // the first tick completes immediately
    interval.tick().await;

    let mut advances = 0;
    info!("🎬 Featured carousel started ({}s period)", period.as_secs_f32());

    loop {
        if max_advances.is_some_and(|max| advances >= max) {
            break;
        }

        tokio::select! {
            _ = interval.tick() => {
                if !carousel.tick() {
                    debug!("Carousel advance skipped");
                    continue;
                }
                advances += 1;

                let featured = &properties[carousel.index()];
                info!(
                    "✨ Featuring {} ({}, {})",
                    featured.title,
                    featured.size,
                    format_rupees(featured.price)
                );
                if let Err(e) = sink.render(&Scene::model(featured, ViewMode::House)) {
                    warn!("Featured render failed: {}", e);
                }
                carousel.settle();
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    info!("Featured carousel stopped after {} advance(s)", advances);
    advances
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::seed_properties;
    use crate::render::LogSink;

    #[test]
    fn wraps_around() {
        let mut carousel = FeaturedCarousel::new(3);
        let mut seen = Vec::new();
        for _ in 0..4 {
            assert!(carousel.tick());
            seen.push(carousel.index());
            carousel.settle();
        }
        assert_eq!(seen, [1, 2, 0, 1]);
    }

    #[test]
    fn skips_while_animating() {
        let mut carousel = FeaturedCarousel::new(6);
        assert!(carousel.tick());
        assert!(carousel.is_animating());
        assert!(!carousel.tick());
        assert_eq!(carousel.index(), 1);

        carousel.settle();
        assert!(carousel.tick());
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn select_and_empty() {
        let mut carousel = FeaturedCarousel::new(6);
        assert!(carousel.select(5));
        assert!(!carousel.select(6));
        assert_eq!(carousel.index(), 5);

        let mut empty = FeaturedCarousel::new(0);
        assert!(!empty.tick());
    }

    #[tokio::test]
    async fn runs_requested_advances() {
        let (_tx, rx) = watch::channel(false);
        let advances = run_carousel(
            seed_properties().into(),
            Duration::from_millis(5),
            Arc::new(LogSink),
            Some(3),
            rx,
        )
        .await;
        assert_eq!(advances, 3);
    }

    #[tokio::test]
    async fn stops_on_shutdown() {
        let (tx, rx) = watch::channel(false);
        let handle = tokio::spawn(run_carousel(
            seed_properties().into(),
            Duration::from_secs(60),
            Arc::new(LogSink),
            None,
            rx,
        ));

        tx.send(true).unwrap();
        let advances = handle.await.unwrap();
        assert_eq!(advances, 0);
    }
}
