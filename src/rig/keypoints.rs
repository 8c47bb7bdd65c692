use std::collections::HashMap;

use glam::Vec3;

/// Named control points for the freeform/stick-figure mode, independent of
/// the bone-graph type the chain solver works on. Graphs may be partial
/// while a character is being set up; lookups are total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeypointMap {
    points: HashMap<String, Vec3>,
}

impl KeypointMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Vec3> {
        self.points.get(name).copied()
    }

    pub fn set(&mut self, name: &str, position: Vec3) {
        match self.points.get_mut(name) {
            Some(p) => *p = position,
            None => {
                self.points.insert(name.to_string(), position);
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec3> {
        self.points.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.points.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Vec3)> {
        self.points.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.points.keys().map(String::as_str)
    }
}

impl FromIterator<(String, Vec3)> for KeypointMap {
    fn from_iter<T: IntoIterator<Item = (String, Vec3)>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
