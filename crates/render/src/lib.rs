pub mod bokeh;
pub mod camera;
pub mod color;
pub mod gpu_types;
pub mod mesh;
pub mod pipeline;
pub mod ramp;
pub mod run;
pub mod state;

pub use run::run;
