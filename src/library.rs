use std::collections::HashMap;

use glam::Vec3;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::scene::{box_part, Node, NodeId, Scene};
use crate::traits::{ObjectLibrary, SceneGraph};

/// One box-shaped mesh part of a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartSpec {
    pub name: String,
    #[serde(default)]
    pub offset: Vec3,
    pub half_extents: Vec3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSpec {
    pub name: String,
    pub parts: Vec<PartSpec>,
}

impl TemplateSpec {
    /// The bird shipped with the default configuration
    pub fn white_bird() -> Self {
        let part = |name: &str, offset: [f32; 3], half: [f32; 3]| PartSpec {
            name: name.to_string(),
            offset: Vec3::from_array(offset),
            half_extents: Vec3::from_array(half),
        };
        Self {
            name: "White Bird".to_string(),
            parts: vec![
                part("Body", [0.0, 0.06, 0.0], [0.05, 0.04, 0.08]),
                part("Head", [0.0, 0.12, 0.07], [0.03, 0.03, 0.03]),
                part("Left Wing", [-0.09, 0.08, 0.0], [0.05, 0.005, 0.04]),
                part("Right Wing", [0.09, 0.08, 0.0], [0.05, 0.005, 0.04]),
            ],
        }
    }
}

/// Detached subtree of prototype objects inside a [`Scene`].
/// Never reachable from an anchor, so templates are never rendered or picked.
#[derive(Debug)]
pub struct TemplateLibrary {
    root: NodeId,
    by_name: HashMap<String, NodeId>,
}

impl TemplateLibrary {
    /// Specs are expected to have passed [`Config::validate`](crate::config::Config::validate).
    /// A repeated name resolves to its first definition.
    pub fn load(scene: &mut Scene, specs: &[TemplateSpec]) -> Result<Self, ConfigError> {
        let root = scene.insert(Node::new("Library"));

        for spec in specs {
            let template = scene.insert(Node::new(spec.name.as_str()));
            scene.add_child(root, template)?;
            for part in &spec.parts {
                let node = scene.insert(box_part(part.name.as_str(), part.offset, part.half_extents));
                scene.add_child(template, node)?;
            }
            debug!("loaded template `{}` with {} parts", spec.name, spec.parts.len());
        }

        // First match in depth-first order wins, parts included
        let mut by_name = HashMap::new();
        for id in scene.descendants(root).unwrap_or_default().into_iter().skip(1) {
            if let Some(node) = scene.node(id) {
                by_name.entry(node.name.clone()).or_insert(id);
            }
        }

        Ok(Self { root, by_name })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl ObjectLibrary for TemplateLibrary {
    fn find_template(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }
}
