use gloo_events::EventListener;
use gloo_storage::{LocalStorage, Storage};
use shared::PredictionResponse;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

mod api;
mod components;

use components::{canvas, handlers, header, results, theme_toggle};

// Models
/// What the last classifier round-trip produced.
#[derive(Clone, PartialEq)]
pub enum PredictionOutcome {
    Received(PredictionResponse),
    Failed(String),
}

// Yew msg components
pub enum Msg {
    // Stroke lifecycle
    StrokeStart(f64, f64),
    StrokeMove(f64, f64),
    StrokeEnd,

    // Actions
    Predict,
    Clear,

    // Prediction round-trip
    PredictionReady(PredictionResponse),
    PredictionFailed(String),
    ExportEmpty,

    // UI states
    ToggleTheme,
}

// Main component
pub struct Model {
    pub canvas_ref: NodeRef,
    pub drawing: bool,
    pub prediction: Option<PredictionOutcome>,
    pub pending_requests: usize,
    pub theme: String,
    pub touch_listeners: Vec<EventListener>,
}

// Yew component implementation
impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let theme: String = LocalStorage::get("theme").unwrap_or_else(|_| "light".to_string());
        if theme == "dark" {
            if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body())
            {
                let _ = body.class_list().add_1("dark-mode");
            }
        }

        Self {
            canvas_ref: NodeRef::default(),
            drawing: false,
            prediction: None,
            pending_requests: 0,
            theme,
            touch_listeners: Vec::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Stroke lifecycle
            Msg::StrokeStart(x, y) => handlers::handle_stroke_start(self, x, y),
            Msg::StrokeMove(x, y) => handlers::handle_stroke_move(self, x, y),
            Msg::StrokeEnd => handlers::handle_stroke_end(self),

            // Actions
            Msg::Predict => handlers::handle_predict(self, ctx),
            Msg::Clear => handlers::handle_clear(self),

            // Prediction round-trip
            Msg::PredictionReady(response) => handlers::handle_prediction_ready(self, response),
            Msg::PredictionFailed(message) => handlers::handle_prediction_failed(self, message),
            Msg::ExportEmpty => handlers::handle_export_empty(self),

            // UI states
            Msg::ToggleTheme => handlers::handle_toggle_theme(self),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render_header() }
                { theme_toggle::render_theme_toggle(&self.theme, ctx.link()) }

                <main class="main-content">
                    { canvas::render_canvas(self, ctx) }
                    { canvas::render_controls(self, ctx) }
                    { results::render_results(self) }
                </main>

                <footer class="app-footer">
                    <p>{"Digit Sketch Demo | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            handlers::attach_touch_listeners(self, ctx);
        }
    }
}

impl Model {
    /// 2D context of the drawing canvas, if it is mounted and usable.
    pub fn drawing_context(&self) -> Option<CanvasRenderingContext2d> {
        let element = self.canvas_ref.cast::<HtmlCanvasElement>()?;
        canvas::drawing_context(&element)
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
