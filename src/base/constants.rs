/// Number of space dimensions
pub const NDIM: usize = 3;

/// Number of nodes in a hexahedral (hex8) element
pub const N_NODE_HEX: usize = 8;

/// Number of displacement DOFs per node (ux, uy, uz)
pub const NDOF_PER_NODE: usize = 3;

/// Number of DOFs in a hexahedral element
pub const NDOF_HEX: usize = N_NODE_HEX * NDOF_PER_NODE;

/// Number of Gauss integration points in a hexahedral element (2 x 2 x 2)
pub const N_GAUSS_HEX: usize = 8;
