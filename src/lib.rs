//! Shared helpers for Advent of Code puzzles: integer vectors and bounding boxes, a configurable
//! grid, generic graph searches, a circular buffer and assorted math, parsing and input utilities.

pub mod bounds;
pub mod bounds3d;
pub mod circular;
pub mod collections;
pub mod error;
pub mod grid;
pub mod input;
pub mod math;
pub mod parallel;
pub mod parse;
pub mod pathfinding;
pub mod vector2;
pub mod vector3;

pub use bounds::Bounds;
pub use bounds3d::Bounds3D;
pub use circular::CircularArray;
pub use error::{Error, Result};
pub use grid::{Grid, Heuristic, Node};
pub use input::InputConfig;
pub use pathfinding::{a_star, dijkstra, flood_fill, FnGraph, Graph, Path};
pub use vector2::{Vector2, Vector2Int, Vector2Long};
pub use vector3::{Vector3, Vector3Int, Vector3Long};
