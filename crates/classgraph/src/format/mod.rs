//! Display formatting
//!
//! Label text for class rows and a plain-text preview of a whole graph.

pub mod label;
mod preview;

pub use label::{
    method_label, parameter_list, property_label, visibility_glyph, ClassLabels,
};
pub use preview::{PreviewStyle, TextPreview};
