// Adapters layer: concrete implementations for external systems.
// Currently only the legacy WebAlgo HTTP integration lives here.

pub mod legacy;
