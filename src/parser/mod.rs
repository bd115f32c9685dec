// Chart pipeline DSL parser module

pub mod ast;
pub mod geom;
pub mod labels;
pub mod legend;
pub mod lexer;
pub mod pipeline;
pub mod scale;

// Public API re-exports
pub use ast::{Geom, PlotSpec};
pub use pipeline::{parse_pipeline, parse_plot_spec};
