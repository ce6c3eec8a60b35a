//! Chart.js binding for the risk donut.
//!
//! The library is loaded globally from the CDN bundle; the extern block
//! below binds just the pieces the donut needs. [`RiskChart`] implements the
//! renderer trait the controller crate's chart slot drives.

use std::cell::Cell;

use controller::chart::{self, DonutRenderer, DonutSpec};
use serde::Serialize;
use serde_json::json;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

#[wasm_bindgen]
extern "C" {
    type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method)]
    fn update(this: &Chart);

    #[wasm_bindgen(method)]
    fn destroy(this: &Chart);

    #[wasm_bindgen(method, setter)]
    fn set_data(this: &Chart, data: JsValue);
}

fn to_js(value: &serde_json::Value) -> JsValue {
    // Chart.js wants plain objects; the default serializer would emit ES maps.
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap()
}

fn dataset(spec: &DonutSpec) -> serde_json::Value {
    json!({
        "labels": chart::SLICE_LABELS,
        "datasets": [{
            "data": spec.values,
            "backgroundColor": chart::SLICE_COLORS,
            "borderWidth": 0,
        }],
    })
}

fn install_tooltip(config: &JsValue, callback: &JsValue) -> Result<(), JsValue> {
    let options = js_sys::Reflect::get(config, &JsValue::from_str("options"))?;
    let plugins = js_sys::Reflect::get(&options, &JsValue::from_str("plugins"))?;
    let tooltip = js_sys::Reflect::get(&plugins, &JsValue::from_str("tooltip"))?;
    let callbacks = js_sys::Object::new();
    js_sys::Reflect::set(&callbacks, &JsValue::from_str("label"), callback)?;
    js_sys::Reflect::set(&tooltip, &JsValue::from_str("callbacks"), &callbacks)?;
    Ok(())
}

/// A live donut widget plus the tooltip closure Chart.js calls into. The
/// closure must stay alive as long as the chart instance.
pub struct RiskChart {
    chart: Chart,
    destroyed: Cell<bool>,
    _tooltip: Closure<dyn Fn(JsValue) -> String>,
}

impl RiskChart {
    /// Mount a donut on the canvas. Returns `None` when the Chart global is
    /// missing or its constructor throws.
    pub fn mount(canvas: &HtmlCanvasElement, spec: &DonutSpec) -> Option<Self> {
        let tooltip = Closure::<dyn Fn(JsValue) -> String>::new(|context: JsValue| {
            let label = js_sys::Reflect::get(&context, &JsValue::from_str("label"))
                .ok()
                .and_then(|value| value.as_string())
                .unwrap_or_default();
            let fraction = js_sys::Reflect::get(&context, &JsValue::from_str("parsed"))
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(0.0);
            chart::tooltip_label(&label, fraction)
        });

        let config = to_js(&json!({
            "type": "doughnut",
            "data": dataset(spec),
            "options": {
                "responsive": true,
                "cutout": chart::CUTOUT,
                "plugins": {
                    "legend": {"position": "bottom"},
                    "tooltip": {},
                },
            },
        }));
        if let Err(error) = install_tooltip(&config, tooltip.as_ref()) {
            log::error!("Failed to attach chart tooltip: {:?}", error);
        }

        match Chart::new(canvas, &config) {
            Ok(instance) => Some(Self {
                chart: instance,
                destroyed: Cell::new(false),
                _tooltip: tooltip,
            }),
            Err(error) => {
                log::error!("Chart constructor failed: {:?}", error);
                None
            }
        }
    }

    fn teardown(&self) {
        if !self.destroyed.replace(true) {
            self.chart.destroy();
        }
    }
}

impl DonutRenderer for RiskChart {
    fn update(&self, spec: &DonutSpec) {
        self.chart.set_data(to_js(&dataset(spec)));
        self.chart.update();
    }

    fn destroy(&self) {
        self.teardown();
    }
}

impl Drop for RiskChart {
    fn drop(&mut self) {
        self.teardown();
    }
}
