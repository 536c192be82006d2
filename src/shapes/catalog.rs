//! Shape catalog: the template registry and random draws.
//!
//! The catalog stores every available template and deals hands by sampling
//! uniformly, with replacement, across templates. Each drawn instance gets a
//! fresh unique id and the caller's spawn-batch tag.

use rustc_hash::FxHashMap;

use crate::core::{GameRng, ShapeIdSource};

use super::instance::{Shape, SpawnBatch};
use super::template::{ShapeTemplate, TemplateId};

/// Registry of shape templates.
///
/// ## Example
///
/// ```
/// use nexel_core::core::{GameRng, ShapeIdSource};
/// use nexel_core::shapes::{ShapeCatalog, SpawnBatch};
///
/// let catalog = ShapeCatalog::standard();
/// let mut rng = GameRng::new(42);
/// let mut ids = ShapeIdSource::new();
///
/// let hand = catalog.draw_random(3, &mut rng, &mut ids, SpawnBatch::new(0));
/// assert_eq!(hand.len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ShapeCatalog {
    templates: Vec<ShapeTemplate>,
    by_id: FxHashMap<TemplateId, usize>,
}

impl ShapeCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard piece set.
    ///
    /// Every orientation is its own template: the single cell, straight
    /// lines of 2-5 in both orientations, the 2x2 and 3x3 squares, the four
    /// 3-cell corners, and the four 4-cell Ls.
    #[must_use]
    pub fn standard() -> Self {
        let defs: &[(&str, &[(i8, i8)])] = &[
            ("mono", &[(0, 0)]),
            ("duo-h", &[(0, 0), (0, 1)]),
            ("duo-v", &[(0, 0), (1, 0)]),
            ("tri-h", &[(0, 0), (0, 1), (0, 2)]),
            ("tri-v", &[(0, 0), (1, 0), (2, 0)]),
            ("quad-h", &[(0, 0), (0, 1), (0, 2), (0, 3)]),
            ("quad-v", &[(0, 0), (1, 0), (2, 0), (3, 0)]),
            ("penta-h", &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]),
            ("penta-v", &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]),
            ("square-2", &[(0, 0), (0, 1), (1, 0), (1, 1)]),
            (
                "square-3",
                &[
                    (0, 0),
                    (0, 1),
                    (0, 2),
                    (1, 0),
                    (1, 1),
                    (1, 2),
                    (2, 0),
                    (2, 1),
                    (2, 2),
                ],
            ),
            ("corner-nw", &[(0, 0), (0, 1), (1, 0)]),
            ("corner-ne", &[(0, 0), (0, 1), (1, 1)]),
            ("corner-sw", &[(0, 0), (1, 0), (1, 1)]),
            ("corner-se", &[(0, 1), (1, 0), (1, 1)]),
            ("ell-n", &[(0, 0), (1, 0), (2, 0), (2, 1)]),
            ("ell-e", &[(0, 0), (0, 1), (0, 2), (1, 0)]),
            ("ell-s", &[(0, 0), (0, 1), (1, 1), (2, 1)]),
            ("ell-w", &[(0, 2), (1, 0), (1, 1), (1, 2)]),
        ];

        let mut catalog = Self::new();
        for (index, (name, cells)) in defs.iter().enumerate() {
            catalog.register(ShapeTemplate::new(TemplateId::new(index as u16), *name, cells));
        }
        catalog
    }

    /// Register a template.
    ///
    /// Panics if a template with the same id already exists.
    pub fn register(&mut self, template: ShapeTemplate) {
        if self.by_id.contains_key(&template.id) {
            panic!("Template with id {:?} already registered", template.id);
        }
        self.by_id.insert(template.id, self.templates.len());
        self.templates.push(template);
    }

    /// Get a template by id.
    #[must_use]
    pub fn get(&self, id: TemplateId) -> Option<&ShapeTemplate> {
        self.by_id.get(&id).map(|&index| &self.templates[index])
    }

    /// Number of registered templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterate over all templates in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ShapeTemplate> {
        self.templates.iter()
    }

    /// Deal `n` shapes: independent uniform samples with replacement across
    /// templates, each with a fresh unique id and the given spawn batch.
    ///
    /// Panics on an empty catalog.
    pub fn draw_random(
        &self,
        n: usize,
        rng: &mut GameRng,
        ids: &mut ShapeIdSource,
        batch: SpawnBatch,
    ) -> Vec<Shape> {
        assert!(!self.is_empty(), "cannot draw from an empty catalog");

        (0..n)
            .map(|_| {
                let template = &self.templates[rng.gen_range_usize(0..self.templates.len())];
                Shape::new(ids.alloc(), template, batch)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = ShapeCatalog::standard();

        assert_eq!(catalog.len(), 19);
        assert!(catalog.get(TemplateId::new(0)).is_some());
        assert!(catalog.get(TemplateId::new(99)).is_none());

        // Ids are dense and match registration order.
        for (index, template) in catalog.iter().enumerate() {
            assert_eq!(template.id, TemplateId::new(index as u16));
        }
    }

    #[test]
    fn test_standard_shapes_fit_the_board() {
        for template in ShapeCatalog::standard().iter() {
            for &(dr, dc) in template.cells() {
                assert!((0..9).contains(&dr), "{} row offset {dr}", template.name);
                assert!((0..9).contains(&dc), "{} col offset {dc}", template.name);
            }
        }
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut catalog = ShapeCatalog::new();
        catalog.register(ShapeTemplate::new(TemplateId::new(1), "a", &[(0, 0)]));
        catalog.register(ShapeTemplate::new(TemplateId::new(1), "b", &[(0, 0)]));
    }

    #[test]
    fn test_draw_random_assigns_ids_and_batch() {
        let catalog = ShapeCatalog::standard();
        let mut rng = GameRng::new(7);
        let mut ids = ShapeIdSource::new();

        let first = catalog.draw_random(3, &mut rng, &mut ids, SpawnBatch::new(0));
        let second = catalog.draw_random(3, &mut rng, &mut ids, SpawnBatch::new(1));

        let mut seen: Vec<_> = first.iter().chain(&second).map(|s| s.id).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 6, "ids must be unique across draws");

        assert!(first.iter().all(|s| s.spawn_batch == SpawnBatch::new(0)));
        assert!(second.iter().all(|s| s.spawn_batch == SpawnBatch::new(1)));
    }

    #[test]
    fn test_draw_random_deterministic_per_seed() {
        let catalog = ShapeCatalog::standard();

        let mut rng1 = GameRng::new(42);
        let mut ids1 = ShapeIdSource::new();
        let mut rng2 = GameRng::new(42);
        let mut ids2 = ShapeIdSource::new();

        let a = catalog.draw_random(3, &mut rng1, &mut ids1, SpawnBatch::new(0));
        let b = catalog.draw_random(3, &mut rng2, &mut ids2, SpawnBatch::new(0));

        let templates_a: Vec<_> = a.iter().map(|s| s.template).collect();
        let templates_b: Vec<_> = b.iter().map(|s| s.template).collect();
        assert_eq!(templates_a, templates_b);
    }

    #[test]
    fn test_draw_random_covers_catalog() {
        // With replacement and enough draws, every template should appear.
        let catalog = ShapeCatalog::standard();
        let mut rng = GameRng::new(3);
        let mut ids = ShapeIdSource::new();

        let drawn = catalog.draw_random(2000, &mut rng, &mut ids, SpawnBatch::new(0));
        let mut templates: Vec<_> = drawn.iter().map(|s| s.template).collect();
        templates.sort();
        templates.dedup();

        assert_eq!(templates.len(), catalog.len());
    }
}
