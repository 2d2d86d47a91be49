#![allow(dead_code)]

use std::cell::RefCell;

use glam::{Mat4, Quat, Vec2, Vec3};
use surface_placer::core::{make_cursor, CursorTracker, Spawner, SpawnerSettings};
use surface_placer::library::{TemplateLibrary, TemplateSpec};
use surface_placer::scene::{NodeId, Scene};
use surface_placer::traits::{RaycastAlignment, RaycastResult, RaycastTarget, SurfaceQuery};

pub const SCREEN_CENTER: Vec2 = Vec2::new(200.0, 400.0);

/// Surface query answering with a fixed list of hits and recording calls
#[derive(Default)]
pub struct ScriptedSurfaces {
    pub hits: Vec<RaycastResult>,
    pub calls: RefCell<Vec<(Vec2, RaycastTarget, RaycastAlignment)>>,
}

impl ScriptedSurfaces {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn single(world_transform: Mat4) -> Self {
        Self {
            hits: vec![hit(world_transform, 1.0, 0)],
            ..Self::default()
        }
    }
}

impl SurfaceQuery for ScriptedSurfaces {
    fn raycast(
        &self,
        screen_point: Vec2,
        target: RaycastTarget,
        alignment: RaycastAlignment,
    ) -> Vec<RaycastResult> {
        self.calls.borrow_mut().push((screen_point, target, alignment));
        self.hits.clone()
    }
}

pub fn hit(world_transform: Mat4, distance: f32, plane: usize) -> RaycastResult {
    RaycastResult {
        world_transform,
        distance,
        plane,
    }
}

pub fn floor_pose(x: f32, z: f32) -> Mat4 {
    Mat4::from_rotation_translation(Quat::IDENTITY, Vec3::new(x, 0.0, z))
}

pub fn wall_pose(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_rotation_translation(Quat::from_rotation_arc(Vec3::Y, Vec3::Z), Vec3::new(x, y, z))
}

pub struct Fixture {
    pub scene: Scene,
    pub library: TemplateLibrary,
    pub anchor: NodeId,
    pub cursor: NodeId,
    pub tracker: CursorTracker,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_anchor(Mat4::IDENTITY)
    }

    pub fn with_anchor(anchor_world: Mat4) -> Self {
        let mut scene = Scene::new();
        let library = TemplateLibrary::load(&mut scene, &[TemplateSpec::white_bird()]).unwrap();
        let anchor = scene.add_anchor("Origin", anchor_world);
        let cursor = make_cursor(&mut scene, anchor).unwrap();
        let tracker = CursorTracker::new(cursor, anchor, SCREEN_CENTER);
        Self {
            scene,
            library,
            anchor,
            cursor,
            tracker,
        }
    }

    pub fn spawner(&self, settings: SpawnerSettings) -> Spawner {
        Spawner::new(&self.library, "White Bird", self.anchor, self.cursor, settings).unwrap()
    }

    /// Run one tracking step against a single surface hit
    pub fn track(&mut self, pose: Mat4) {
        let surfaces = ScriptedSurfaces::single(pose);
        self.tracker.update(&surfaces, &mut self.scene).unwrap();
    }

    pub fn lose_tracking(&mut self) {
        self.tracker.update(&ScriptedSurfaces::none(), &mut self.scene).unwrap();
    }
}

pub fn assert_mat_eq(a: Mat4, b: Mat4) {
    assert!(a.abs_diff_eq(b, 1e-4), "matrices differ:\n{a:?}\n{b:?}");
}
