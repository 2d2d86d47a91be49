use glam::{Mat4, Vec2};
use log::{debug, error};

use crate::config::{Config, ScaleRange};
use crate::core::{
    make_cursor, resolve_tap, CursorTracker, FrameEvents, Placement, Spawner, Subscription,
    TapTarget,
};
use crate::error::{ConfigError, SpawnError};
use crate::frame::FrameInfo;
use crate::library::TemplateLibrary;
use crate::scene::{NodeId, Scene};
use crate::session::{PlaneDetection, TrackingSession};
use crate::traits::EntityQuery;

/// Everything the frame callbacks may touch
#[derive(Debug)]
pub struct World {
    pub scene: Scene,
    pub session: TrackingSession,
    /// Fixed reference frame at the session origin
    pub anchor: NodeId,
}

impl EntityQuery for World {
    fn entity_at(&self, screen_point: Vec2) -> Option<NodeId> {
        let ray = self
            .session
            .camera
            .ray_through(screen_point, &self.session.viewport);
        self.scene.pick(&ray).map(|(id, _)| id)
    }
}

/// Continuous control clamped to its configured range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleControl {
    range: ScaleRange,
    value: f32,
}

impl ScaleControl {
    pub fn new(range: ScaleRange) -> Self {
        Self {
            range,
            value: range.initial.clamp(range.min, range.max),
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set(&mut self, value: f32) -> f32 {
        if value.is_finite() {
            self.value = value.clamp(self.range.min, self.range.max);
        }
        self.value
    }
}

/// The placement screen: tracked cursor, spawn button, scale control and
/// status label wired to one world.
pub struct PlacementApp {
    world: World,
    library: TemplateLibrary,
    cursor: NodeId,
    frames: FrameEvents<World>,
    cursor_updates: Option<Subscription>,
    spawner: Spawner,
    scale: ScaleControl,
    status_label: Option<String>,
    spawn_button_title: String,
}

impl PlacementApp {
    /// Builds the world and validates configuration. Fails loudly when the
    /// template cannot be found.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut scene = Scene::new();
        let library = TemplateLibrary::load(&mut scene, &config.templates)?;
        let anchor = scene.add_anchor("Origin", Mat4::IDENTITY);
        let cursor = make_cursor(&mut scene, anchor)?;

        let mut session = TrackingSession::new(
            config.camera.to_camera(),
            config.viewport,
            PlaneDetection::from_alignments(&config.plane_detection),
        );
        for plane in &config.planes {
            session.add_plane(plane.to_plane());
        }

        let spawner = Spawner::new(
            &library,
            &config.template_name,
            anchor,
            cursor,
            config.spawner_settings(),
        )?;

        let mut app = Self {
            world: World {
                scene,
                session,
                anchor,
            },
            library,
            cursor,
            frames: FrameEvents::new(),
            cursor_updates: None,
            spawner,
            scale: ScaleControl::new(config.scale),
            status_label: None,
            spawn_button_title: format!("Number of {}: 0", config.display_name),
        };
        app.start_tracking();
        Ok(app)
    }

    /// Subscribe the cursor tracker to frame updates. No-op when already running.
    pub fn start_tracking(&mut self) {
        if self.cursor_updates.is_some() {
            return;
        }
        let tracker = CursorTracker::new(self.cursor, self.world.anchor, self.world.session.viewport.center());
        let subscription = self.frames.subscribe(move |world: &mut World, frame: &FrameInfo| {
            if let Err(err) = tracker.update(&world.session, &mut world.scene) {
                error!("frame {}: cursor update failed: {err}", frame.number);
            }
        });
        self.cursor_updates = Some(subscription);
    }

    /// Drop the frame subscription; the cursor keeps its last state
    pub fn stop_tracking(&mut self) {
        self.cursor_updates = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.cursor_updates.as_ref().is_some_and(Subscription::is_active)
    }

    pub fn on_frame(&mut self, frame: &FrameInfo) {
        self.frames.publish(&mut self.world, frame);
    }

    pub fn set_scale(&mut self, value: f32) -> f32 {
        self.scale.set(value)
    }

    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    /// Spawn button handler
    pub fn press_spawn(&mut self) -> Result<Placement, SpawnError> {
        let placement = self.spawner.spawn(&mut self.world.scene, self.scale.value())?;
        self.spawn_button_title = format!(
            "Number of {}: {}",
            self.spawner.settings().display_name,
            self.spawner.counter().value()
        );
        self.status_label = Some(placement.status.clone());
        Ok(placement)
    }

    /// Screen tap handler. Only instance hits touch the label.
    pub fn tap(&mut self, screen_point: Vec2) -> TapTarget {
        let target = resolve_tap(&self.world, &self.world.scene, screen_point);
        let status = target.status(
            &self.spawner.settings().display_name,
            self.spawner.counter().value(),
            self.scale.value(),
        );
        if let (Some(status), TapTarget::Instance { name, index, .. }) = (status, &target) {
            debug!("tapped {name} (#{index}), label -> {status}");
            self.status_label = Some(status);
        }
        target
    }

    pub fn status_label(&self) -> Option<&str> {
        self.status_label.as_deref()
    }

    pub fn spawn_button_title(&self) -> &str {
        &self.spawn_button_title
    }

    pub fn instance_count(&self) -> u64 {
        self.spawner.counter().value()
    }

    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    pub fn library(&self) -> &TemplateLibrary {
        &self.library
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
