use super::super::Model;
use super::super::Msg;
use super::super::PredictionOutcome;
use super::{canvas, export};
use crate::api;
use gloo_events::{EventListener, EventListenerOptions};
use gloo_storage::{LocalStorage, Storage};
use shared::PredictionResponse;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlCanvasElement, TouchEvent};
use yew::prelude::*;

pub fn handle_stroke_start(model: &mut Model, x: f64, y: f64) -> bool {
    let Some(context) = model.drawing_context() else {
        return false;
    };
    canvas::begin_stroke(&context, x, y);
    model.drawing = true;
    false
}

pub fn handle_stroke_move(model: &mut Model, x: f64, y: f64) -> bool {
    if !model.drawing {
        return false;
    }
    if let Some(context) = model.drawing_context() {
        canvas::extend_stroke(&context, x, y);
    }
    false
}

pub fn handle_stroke_end(model: &mut Model) -> bool {
    model.drawing = false;
    false
}

/// Clears the surface back to uniform white and drops any displayed outcome.
pub fn handle_clear(model: &mut Model) -> bool {
    if let Some(context) = model.drawing_context() {
        canvas::paint_white(&context, canvas::CANVAS_WIDTH, canvas::CANVAS_HEIGHT);
    }
    model.drawing = false;
    model.prediction = None;
    true
}

/// Exports the current drawing and sends it off. Stays clickable while a
/// request is outstanding; responses land in arrival order and the last one
/// wins.
pub fn handle_predict(model: &mut Model, ctx: &Context<Model>) -> bool {
    let Some(element) = model.canvas_ref.cast::<HtmlCanvasElement>() else {
        return false;
    };

    model.pending_requests += 1;
    let link = ctx.link().clone();
    spawn_local(async move {
        match export::flattened_png(&element).await {
            Some(image) => api::send_prediction(&link, image).await,
            None => {
                log::warn!("Canvas export produced no image data, skipping request.");
                link.send_message(Msg::ExportEmpty);
            }
        }
    });

    true
}

pub fn handle_prediction_ready(model: &mut Model, response: PredictionResponse) -> bool {
    model.prediction = Some(PredictionOutcome::Received(response));
    model.pending_requests = model.pending_requests.saturating_sub(1);
    true
}

pub fn handle_prediction_failed(model: &mut Model, message: String) -> bool {
    model.prediction = Some(PredictionOutcome::Failed(message));
    model.pending_requests = model.pending_requests.saturating_sub(1);
    true
}

pub fn handle_export_empty(model: &mut Model) -> bool {
    model.pending_requests = model.pending_requests.saturating_sub(1);
    true
}

pub fn handle_toggle_theme(model: &mut Model) -> bool {
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();

    if model.theme == "light" {
        model.theme = "dark".to_string();
        body.class_list().add_1("dark-mode").unwrap();
    } else {
        model.theme = "light".to_string();
        body.class_list().remove_1("dark-mode").unwrap();
    }
    let _ = LocalStorage::set("theme", &model.theme);

    true
}

/// Registers touch listeners on the canvas once it is mounted. They must be
/// non-passive so `prevent_default` can suppress the platform's
/// scroll/gesture handling while sketching.
pub fn attach_touch_listeners(model: &mut Model, ctx: &Context<Model>) {
    let Some(element) = model.canvas_ref.cast::<HtmlCanvasElement>() else {
        return;
    };
    let start = {
        let surface = element.clone();
        let link = ctx.link().clone();
        let options = EventListenerOptions::enable_prevent_default();
        EventListener::new_with_options(&element, "touchstart", options, move |event| {
            if let Some(touch_event) = event.dyn_ref::<TouchEvent>() {
                touch_event.prevent_default();
                if let Some((x, y)) = canvas::touch_point(&surface, touch_event) {
                    link.send_message(Msg::StrokeStart(x, y));
                }
            }
        })
    };

    let moved = {
        let surface = element.clone();
        let link = ctx.link().clone();
        let options = EventListenerOptions::enable_prevent_default();
        EventListener::new_with_options(&element, "touchmove", options, move |event| {
            if let Some(touch_event) = event.dyn_ref::<TouchEvent>() {
                touch_event.prevent_default();
                if let Some((x, y)) = canvas::touch_point(&surface, touch_event) {
                    link.send_message(Msg::StrokeMove(x, y));
                }
            }
        })
    };

    let end = {
        let link = ctx.link().clone();
        EventListener::new(&element, "touchend", move |_| {
            link.send_message(Msg::StrokeEnd);
        })
    };

    let cancel = {
        let link = ctx.link().clone();
        EventListener::new(&element, "touchcancel", move |_| {
            link.send_message(Msg::StrokeEnd);
        })
    };

    model.touch_listeners = vec![start, moved, end, cancel];
}
