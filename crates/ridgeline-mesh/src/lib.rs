//! Mesh sink for heightfield buffers.
//!
//! Consumes the generator's flat position/color buffers and produces a
//! renderable indexed surface: grid triangulation and recomputed vertex
//! normals, with byte views for GPU upload. The generator itself never
//! touches connectivity; everything derived from neighboring vertices
//! happens here.

mod terrain_mesh;

pub use terrain_mesh::{MeshError, TerrainMesh};
