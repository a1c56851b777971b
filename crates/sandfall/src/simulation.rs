//! Owned simulation core: grid, rules, brush, run/pause state and random source.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use crate::brush::Brush;
use crate::cell::{Cell, Material};
use crate::config::SimConfig;
use crate::controller::{Controller, SimulationState};
use crate::elements::RuleTable;
use crate::error::ConfigError;
use crate::rng::CellRng;
use crate::Grid;

/// Per-frame order is fixed: input (paint / toggle), then `tick`, then the
/// renderer reads `grid`.
#[derive(Debug)]
pub struct Simulation<R> {
    grid: Grid,
    rules: RuleTable,
    brush: Brush,
    controller: Controller,
    rng: R,
}

impl Simulation<Xoshiro256StarStar> {
    pub fn from_config(config: &SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut sim = Self::new(
            config.width,
            config.height,
            Xoshiro256StarStar::seed_from_u64(config.seed),
        );
        sim.brush = Brush::new(config.brush_radius, config.brush_material);
        Ok(sim)
    }
}

impl<R: CellRng> Simulation<R> {
    pub fn new(width: usize, height: usize, rng: R) -> Self {
        log::info!("created {width}x{height} simulation");
        Self {
            grid: Grid::new(width, height),
            rules: RuleTable::default(),
            brush: Brush::default(),
            controller: Controller::new(),
            rng,
        }
    }

    #[must_use]
    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.rules = rules;
        self
    }

    /// Read-only view for the renderer.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    #[must_use]
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn brush_mut(&mut self) -> &mut Brush {
        &mut self.brush
    }

    #[must_use]
    pub fn state(&self) -> SimulationState {
        self.controller.state()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.controller.is_running()
    }

    /// Stamp a square of `material`; radius below 1 is treated as 1.
    pub fn paint_at(&mut self, x: i32, y: i32, radius: i32, material: Material) {
        self.grid.paint_square(x, y, radius.max(1), material);
    }

    /// Stamp with the current brush settings.
    pub fn paint(&mut self, x: i32, y: i32) {
        self.brush.paint(&mut self.grid, x, y);
    }

    pub fn toggle_running(&mut self) -> SimulationState {
        self.controller.toggle()
    }

    /// Edge-triggered toggle, fed with the key level every frame.
    pub fn key_input(&mut self, pressed: bool) -> bool {
        self.controller.key_input(pressed)
    }

    /// Advance one tick if running; paused leaves the grid untouched.
    pub fn tick(&mut self) -> bool {
        if !self.controller.is_running() {
            return false;
        }
        self.step();
        true
    }

    /// Advance one tick regardless of the run/pause state.
    pub fn step(&mut self) {
        self.grid.tick(&self.rules, &mut self.rng);
    }

    /// Direct cell write for tooling; out-of-range coordinates are ignored.
    pub fn set_cell(&mut self, x: i32, y: i32, material: Material) -> bool {
        if !self.grid.in_bounds(x, y) {
            return false;
        }
        self.grid.set(x, y, Cell::new(material));
        true
    }
}
