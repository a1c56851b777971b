//! Falling sand cellular automaton engine.

pub mod api;
pub mod brush;
pub mod cell;
pub mod config;
pub mod controller;
pub mod elements;
pub mod error;
pub mod rng;
pub mod simulation;

use api::SandApi;
use cell::{Cell, Material};
use config::SimConfig;
use elements::RuleTable;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use rng::CellRng;
use simulation::Simulation;
use wasm_bindgen::prelude::*;

/// 2D grid of cells, row-major, origin top-left with +y pointing down.
///
/// Dimensions are fixed at construction. Direct `get`/`set` outside the grid
/// is a caller bug and panics; callers bounds-check with [`Grid::in_bounds`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::empty(); width * height],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> usize {
        assert!(
            self.in_bounds(x, y),
            "cell ({x}, {y}) is outside the {}x{} grid",
            self.width,
            self.height
        );
        y as usize * self.width + x as usize
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` is off the grid.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.cells[self.index(x, y)]
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` is off the grid.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        let i = self.index(x, y);
        self.cells[i] = cell;
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Raw material tags, row-major, one byte per cell.
    #[must_use]
    pub fn cells_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }

    #[must_use]
    pub fn count(&self, material: Material) -> usize {
        self.cells.iter().filter(|c| c.material == material).count()
    }

    /// Overwrite every on-grid cell of the square
    /// `[cx - radius, cx + radius] x [cy - radius, cy + radius]` with `material`.
    ///
    /// The parts of the square that fall off the grid are skipped.
    pub fn paint_square(&mut self, cx: i32, cy: i32, radius: i32, material: Material) {
        let max_x = i32::try_from(self.width).unwrap_or(i32::MAX) - 1;
        let max_y = i32::try_from(self.height).unwrap_or(i32::MAX) - 1;
        let x0 = cx.saturating_sub(radius).max(0);
        let x1 = cx.saturating_add(radius).min(max_x);
        let y0 = cy.saturating_sub(radius).max(0);
        let y1 = cy.saturating_add(radius).min(max_y);

        let cell = Cell::new(material);
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.set(x, y, cell);
            }
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// Scans from the second-to-last row up to the top, left to right within
    /// a row. Rules only move cells downward, so a destination row has always
    /// been visited already and no cell moves twice. The bottom row is never
    /// a source.
    pub fn tick(&mut self, rules: &RuleTable, rng: &mut dyn CellRng) {
        let w = i32::try_from(self.width).unwrap_or(i32::MAX);
        let h = i32::try_from(self.height).unwrap_or(i32::MAX);

        for y in (0..h - 1).rev() {
            for x in 0..w {
                let Some(rule) = rules.rule(self.get(x, y).material) else {
                    continue;
                };
                let mut api = SandApi::new(self, x, y, rng);
                rule(&mut api);
            }
        }
    }
}

/// Browser-facing handle: owns the simulation and exposes the per-frame entry points.
#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    sim: Simulation<Xoshiro256StarStar>,
}

#[wasm_bindgen]
impl Universe {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(width: u32, height: u32, seed: u64) -> Universe {
        Universe {
            sim: Simulation::new(
                width as usize,
                height as usize,
                Xoshiro256StarStar::seed_from_u64(seed),
            ),
        }
    }

    /// Build from a RON [`SimConfig`] document.
    pub fn from_ron(src: &str) -> Result<Universe, JsError> {
        let config = SimConfig::from_ron(src)?;
        Ok(Universe {
            sim: Simulation::from_config(&config)?,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.sim.grid().width() as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.sim.grid().height() as u32
    }

    /// Pointer to `width * height` tag bytes for a zero-copy view from JS.
    #[must_use]
    pub fn cells_ptr(&self) -> *const u8 {
        self.sim.grid().cells_bytes().as_ptr()
    }

    /// Flat RGB triples indexed by material tag.
    #[must_use]
    pub fn palette() -> Vec<u8> {
        Material::ALL.iter().flat_map(|m| m.rgb()).collect()
    }

    pub fn set_cell(&mut self, x: i32, y: i32, tag: u8) -> bool {
        match Material::try_from(tag) {
            Ok(material) => self.sim.set_cell(x, y, material),
            Err(err) => {
                log::warn!("set_cell: {err}");
                false
            }
        }
    }

    pub fn paint(&mut self, x: i32, y: i32) {
        self.sim.paint(x, y);
    }

    pub fn set_brush_material(&mut self, tag: u8) -> bool {
        match Material::try_from(tag) {
            Ok(material) => {
                self.sim.brush_mut().set_material(material);
                true
            }
            Err(err) => {
                log::warn!("set_brush_material: {err}");
                false
            }
        }
    }

    #[must_use]
    pub fn brush_material(&self) -> u8 {
        self.sim.brush().material() as u8
    }

    pub fn scroll_brush(&mut self, delta: f64) -> i32 {
        self.sim.brush_mut().scroll(delta)
    }

    #[must_use]
    pub fn brush_radius(&self) -> i32 {
        self.sim.brush().radius()
    }

    pub fn toggle_running(&mut self) -> bool {
        self.sim.toggle_running();
        self.sim.is_running()
    }

    pub fn key_input(&mut self, pressed: bool) -> bool {
        self.sim.key_input(pressed)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.sim.is_running()
    }

    /// Once per frame: ticks only while running.
    pub fn tick(&mut self) -> bool {
        self.sim.tick()
    }

    pub fn step(&mut self) {
        self.sim.step();
    }
}
