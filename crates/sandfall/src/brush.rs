//! User brush: square stamp of one material, resized by scroll input.

use crate::cell::Material;
use crate::Grid;

/// Square region a brush covers, inclusive on all sides, unclipped.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BrushRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Brush {
    radius: i32,
    material: Material,
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RADIUS, Material::Sand)
    }
}

impl Brush {
    pub const DEFAULT_RADIUS: i32 = 32;

    /// Radius is clamped to at least 1.
    #[must_use]
    pub fn new(radius: i32, material: Material) -> Self {
        Self {
            radius: radius.max(1),
            material,
        }
    }

    #[must_use]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    #[must_use]
    pub fn material(&self) -> Material {
        self.material
    }

    pub fn set_radius(&mut self, radius: i32) {
        self.radius = radius.max(1);
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    /// Grow or shrink by one step per scroll event; the sign of `delta` is all that matters.
    pub fn scroll(&mut self, delta: f64) -> i32 {
        if delta > 0.0 {
            self.radius = self.radius.saturating_add(1);
        } else if delta < 0.0 {
            self.radius = (self.radius - 1).max(1);
        } else {
            return self.radius;
        }
        log::debug!("brush radius {}", self.radius);
        self.radius
    }

    #[must_use]
    pub fn outline(&self, cx: i32, cy: i32) -> BrushRect {
        BrushRect {
            left: cx.saturating_sub(self.radius),
            top: cy.saturating_sub(self.radius),
            right: cx.saturating_add(self.radius),
            bottom: cy.saturating_add(self.radius),
        }
    }

    pub fn paint(&self, grid: &mut Grid, cx: i32, cy: i32) {
        grid.paint_square(cx, cy, self.radius, self.material);
    }
}
