//! Cell and Material types for the simulation grid.

use std::fmt;

use bytemuck::NoUninit;
use serde::{Deserialize, Serialize};

use crate::error::UnknownMaterial;

/// Discriminant values are the bytes the renderer reads — do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, NoUninit)]
pub enum Material {
    Empty = 0,
    Sand = 1,
    Water = 2,
    Stone = 3,
    Fire = 4,
}

/// 8-bit palette, indexed by material tag.
const PALETTE: [[u8; 3]; Material::COUNT] = [
    [0, 0, 0],
    [194, 178, 128],
    [64, 120, 220],
    [128, 128, 128],
    [230, 90, 30],
];

impl Material {
    pub const COUNT: usize = 5;

    pub const ALL: [Material; Self::COUNT] = [
        Self::Empty,
        Self::Sand,
        Self::Water,
        Self::Stone,
        Self::Fire,
    ];

    #[must_use]
    pub fn rgb(self) -> [u8; 3] {
        PALETTE[self as usize]
    }
}

impl TryFrom<u8> for Material {
    type Error = UnknownMaterial;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(tag as usize)
            .copied()
            .ok_or(UnknownMaterial(tag))
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Sand => write!(f, "Sand"),
            Self::Water => write!(f, "Water"),
            Self::Stone => write!(f, "Stone"),
            Self::Fire => write!(f, "Fire"),
        }
    }
}

/// One grid position. The material tag is the whole state: no velocity,
/// no lifetime, no update clock.
///
/// `#[repr(transparent)]` + `NoUninit` so a `[Cell]` casts to raw tag bytes for the renderer.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, NoUninit)]
pub struct Cell {
    pub material: Material,
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.material)
    }
}

impl Cell {
    #[must_use]
    pub const fn new(material: Material) -> Self {
        Self { material }
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Material::Empty)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.material == Material::Empty
    }
}
