pub use chimera_core::{GeneticsEngine, PopulationBatch, TickReport, TraitVectorLogic};
pub mod analysis {
    pub use chimera_core::analysis::*;
}
pub mod batch {
    pub use chimera_core::batch::*;
}
pub mod cache {
    pub use chimera_core::cache::*;
}
pub mod config {
    pub use chimera_core::config::*;
}
pub mod engine {
    pub use chimera_core::engine::*;
}
pub mod metrics {
    pub use chimera_core::metrics::*;
}
pub mod prediction {
    pub use chimera_core::prediction::*;
}
pub mod tables {
    pub use chimera_core::tables::*;
}
pub mod traits {
    pub use chimera_core::traits::*;
}

pub mod state {
    pub use chimera_data::*;
}
