//! WebAssembly bindings for Classgraph
//!
//! A browser page holds one [`Diagram`] per diagram it shows and routes its
//! button handlers through it, so no page-level global is needed.

use wasm_bindgen::prelude::*;

use crate::format::{ClassLabels, PreviewStyle, TextPreview};
use crate::model::{actions, key_from_f64, sample, ClassGraphModel, GraphRecords, ModelConfig};

/// Initialize WASM module
///
/// Sets up panic hooks and logging for better error messages in the browser.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use crate::core::logging::init_logging;
    let _ = init_logging(Some("info"), None);
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// A class graph owned by the page
#[wasm_bindgen]
pub struct Diagram {
    model: ClassGraphModel,
}

#[wasm_bindgen]
impl Diagram {
    /// An empty diagram
    #[wasm_bindgen(constructor)]
    pub fn new() -> Diagram {
        Diagram {
            model: ClassGraphModel::new(),
        }
    }

    /// The demo diagram with its startup classes
    pub fn sample() -> Diagram {
        let (model, _) = ClassGraphModel::load(&sample::sample_records());
        Diagram { model }
    }

    /// Load records; rejected records are returned as a JSON array of messages
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(input: &str, permissive: bool) -> Result<Diagram, JsValue> {
        let config = if permissive {
            ModelConfig::permissive()
        } else {
            ModelConfig::default()
        };
        let records = GraphRecords::from_json(input).map_err(js_error)?;
        let (model, report) = ClassGraphModel::load_with_config(&records, config);
        if !report.is_clean() {
            let messages: Vec<String> = report.errors.iter().map(|e| e.to_string()).collect();
            let payload = serde_json::to_string(&messages).map_err(js_error)?;
            return Err(JsValue::from_str(&payload));
        }
        Ok(Diagram { model })
    }

    /// Current records as JSON
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.model.to_records().to_json().map_err(js_error)
    }

    /// Add the stock "Person" class; returns its key
    #[wasm_bindgen(js_name = addPerson)]
    pub fn add_person(&mut self) -> Result<f64, JsValue> {
        let key = actions::add_person(&mut self.model).map_err(js_error)?;
        Ok(key as f64)
    }

    /// Display lines of one class box as a JSON array, header first
    pub fn labels(&self, key: f64) -> Result<String, JsValue> {
        let key = key_from_f64(key).map_err(js_error)?;
        let node = self
            .model
            .node(key)
            .ok_or_else(|| js_error(format!("no node with key {}", key)))?;
        let labels = ClassLabels::for_node(node);
        serde_json::to_string(&labels.lines().collect::<Vec<_>>()).map_err(js_error)
    }

    /// Text preview of the whole graph
    pub fn preview(&self, ascii: bool) -> String {
        let style = if ascii {
            PreviewStyle::Ascii
        } else {
            PreviewStyle::Unicode
        };
        TextPreview::with_style(style).render(&self.model)
    }

    #[wasm_bindgen(js_name = nodeCount)]
    pub fn node_count(&self) -> usize {
        self.model.node_count()
    }

    #[wasm_bindgen(js_name = linkCount)]
    pub fn link_count(&self) -> usize {
        self.model.link_count()
    }
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new()
    }
}
