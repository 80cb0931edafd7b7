use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{Coordinates, Property};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    House,
    Plot,
}

/// Everything a decorative widget is handed. Nothing flows back.
#[derive(Debug, Clone, PartialEq)]
pub enum Scene<'a> {
    Map {
        coordinates: Coordinates,
        width: u32,
        height: u32,
    },
    Model {
        size: &'a str,
        facing: &'a str,
        view: ViewMode,
    },
}

impl<'a> Scene<'a> {
    pub fn map(property: &Property) -> Self {
        Scene::Map {
            coordinates: property.coordinates,
            width: 600,
            height: 450,
        }
    }

    pub fn model(property: &'a Property, view: ViewMode) -> Self {
        Scene::Model {
            size: &property.size,
            facing: &property.facing,
            view,
        }
    }
}

/// Rendering sink for the map and 3D widgets
pub trait RenderSink: Send + Sync {
    fn render(&self, scene: &Scene<'_>) -> anyhow::Result<()>;
}

/// Sink that only records what would have been drawn
pub struct LogSink;

impl RenderSink for LogSink {
    fn render(&self, scene: &Scene<'_>) -> anyhow::Result<()> {
        match scene {
            Scene::Map {
                coordinates,
                width,
                height,
            } => info!(
                "🗺️  Map at {:.4},{:.4} ({}x{})",
                coordinates.lat, coordinates.lng, width, height
            ),
            Scene::Model { size, facing, view } => {
                info!("🏗️  {:?} model, {} facing {}", view, size, facing)
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::seed_properties;
    use std::sync::Mutex;

    /// Collects scenes so tests can see what was sent
    #[derive(Default)]
    struct RecordingSink {
        scenes: Mutex<Vec<String>>,
    }

    impl RenderSink for RecordingSink {
        fn render(&self, scene: &Scene<'_>) -> anyhow::Result<()> {
            self.scenes.lock().unwrap().push(format!("{:?}", scene));
            Ok(())
        }
    }

    #[test]
    fn scenes_carry_property_inputs() {
        let properties = seed_properties();
        let plot = &properties[4];

        assert_eq!(
            Scene::model(plot, ViewMode::Plot),
            Scene::Model {
                size: "2800 sq.ft",
                facing: "North-East",
                view: ViewMode::Plot
            }
        );
        match Scene::map(plot) {
            Scene::Map { coordinates, .. } => assert_eq!(coordinates, plot.coordinates),
            other => panic!("unexpected scene {:?}", other),
        }
    }

    #[test]
    fn sinks_accept_every_scene() {
        let properties = seed_properties();
        let recorder = RecordingSink::default();
        for property in &properties {
            for scene in [
                Scene::model(property, ViewMode::House),
                Scene::model(property, ViewMode::Plot),
                Scene::map(property),
            ] {
                LogSink.render(&scene).unwrap();
                recorder.render(&scene).unwrap();
            }
        }
        assert_eq!(recorder.scenes.lock().unwrap().len(), 18);
    }
}
