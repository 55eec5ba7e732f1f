use crate::types::{Edge, LayoutConfig, Node};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn wasm_init() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub struct WasmLayoutResult {
    nodes_json: String,
    edges_json: String,
}

#[wasm_bindgen]
impl WasmLayoutResult {
    #[wasm_bindgen(getter)]
    pub fn nodes(&self) -> String {
        self.nodes_json.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn edges(&self) -> String {
        self.edges_json.clone()
    }
}

#[wasm_bindgen]
pub fn validate_wasm(nodes_json: &str, edges_json: &str) -> Result<String, JsValue> {
    let nodes: Vec<Node> =
        serde_json::from_str(nodes_json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let edges: Vec<Edge> =
        serde_json::from_str(edges_json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let report = crate::validate::validate(&nodes, &edges)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&report).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn layout_wasm(
    nodes_json: &str,
    edges_json: &str,
    config_json: Option<String>,
) -> Result<WasmLayoutResult, JsValue> {
    let nodes: Vec<Node> =
        serde_json::from_str(nodes_json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let edges: Vec<Edge> =
        serde_json::from_str(edges_json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let config = if let Some(config_str) = config_json {
        serde_json::from_str(&config_str).map_err(|e| JsValue::from_str(&e.to_string()))?
    } else {
        LayoutConfig::default()
    };

    let result = crate::layout::layout_with_config(&nodes, &edges, &config)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let nodes_json =
        serde_json::to_string(&result.nodes).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let edges_json =
        serde_json::to_string(&result.edges).map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(WasmLayoutResult {
        nodes_json,
        edges_json,
    })
}

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
