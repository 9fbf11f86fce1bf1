//! Per-cell environmental attributes stored beside the lattice.
//!
//! Site layers are owned and populated by the driver (for example from a
//! terrain heightmap). They share the lattice's `x + y·W + z·W·H`
//! indexing but are not part of [`Cell`](sprawl_core::Cell) and are never
//! read by growth rules.

use sprawl_core::{Coord3, Dims};

use crate::error::LatticeError;
use crate::lattice::Lattice;

/// Which environmental attribute a layer holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SiteLayer {
    /// Terrain class (water, plain, hill, ...), driver-defined codes.
    TerrainType = 0,
    /// Quantised altitude.
    Altitude = 1,
    /// Crime level.
    Crime = 2,
    /// Economic activity.
    Economy = 3,
    /// Pollution level.
    Pollution = 4,
}

impl SiteLayer {
    /// Number of layers.
    pub const COUNT: usize = 5;

    /// Every layer in storage order.
    pub const ALL: [SiteLayer; Self::COUNT] = [
        Self::TerrainType,
        Self::Altitude,
        Self::Crime,
        Self::Economy,
        Self::Pollution,
    ];
}

/// A set of `i8` layers, each with one value per lattice cell.
#[derive(Clone, Debug)]
pub struct SiteLayers {
    dims: Dims,
    layers: [Vec<i8>; SiteLayer::COUNT],
}

impl SiteLayers {
    /// Zero-filled layers for a lattice of extent `dims`.
    ///
    /// Applies the same extent validation as
    /// [`Lattice::new`](crate::Lattice::new).
    pub fn new(dims: Dims) -> Result<Self, LatticeError> {
        let count = Lattice::validate_dims(dims)?;
        Ok(Self {
            dims,
            layers: std::array::from_fn(|_| vec![0; count]),
        })
    }

    /// The extent these layers cover.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Read one value. Same in-bounds contract as
    /// [`Lattice::cell_at`](crate::Lattice::cell_at).
    #[inline]
    pub fn get(&self, layer: SiteLayer, x: i32, y: i32, z: i32) -> i8 {
        self.layers[layer as usize][self.dims.index(x, y, z)]
    }

    /// Write one value, checking bounds.
    pub fn set(&mut self, layer: SiteLayer, x: i32, y: i32, z: i32, value: i8) -> Result<(), LatticeError> {
        if !self.dims.contains(x, y, z) {
            return Err(LatticeError::CoordOutOfBounds {
                coord: Coord3::new(x, y, z),
                dims: self.dims,
            });
        }
        let i = self.dims.index(x, y, z);
        self.layers[layer as usize][i] = value;
        Ok(())
    }

    /// A whole layer in lattice index order.
    pub fn layer(&self, layer: SiteLayer) -> &[i8] {
        &self.layers[layer as usize]
    }

    /// Load one `z` slice of a layer from a row-major `width × height`
    /// buffer (`values[x + y·width]`), e.g. a terrain class map or a
    /// quantised heightmap.
    pub fn load_surface(&mut self, layer: SiteLayer, z: i32, values: &[i8]) -> Result<(), LatticeError> {
        if !self.dims.contains(0, 0, z) {
            return Err(LatticeError::CoordOutOfBounds {
                coord: Coord3::new(0, 0, z),
                dims: self.dims,
            });
        }
        let plane = self.dims.width as usize * self.dims.height as usize;
        if values.len() != plane {
            return Err(LatticeError::LayerSizeMismatch {
                expected: plane,
                actual: values.len(),
            });
        }
        let start = self.dims.index(0, 0, z);
        self.layers[layer as usize][start..start + plane].copy_from_slice(values);
        Ok(())
    }

    /// Zero every layer.
    pub fn clear(&mut self) {
        for layer in &mut self.layers {
            layer.fill(0);
        }
    }
}
