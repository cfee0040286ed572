use super::super::Model;
use super::super::Msg;
use super::utils::{debounce, surface_local};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, TouchEvent};
use yew::prelude::*;

pub const CANVAS_WIDTH: u32 = 280;
pub const CANVAS_HEIGHT: u32 = 280;

const STROKE_WIDTH: f64 = 15.0;
const STROKE_COLOR: &str = "#000000";
const SURFACE_COLOR: &str = "#ffffff";

/// 2D context of a canvas element. `None` means the context is unavailable
/// and every drawing operation quietly becomes a no-op.
pub fn drawing_context(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

/// Opens a new stroke path at a surface-local coordinate.
pub fn begin_stroke(context: &CanvasRenderingContext2d, x: f64, y: f64) {
    context.set_stroke_style_str(STROKE_COLOR);
    context.set_line_width(STROKE_WIDTH);
    context.set_line_cap("round");
    context.begin_path();
    context.move_to(x, y);
}

/// Extends the current stroke with a line segment. Coordinates outside the
/// surface are tolerated; the canvas clips them.
pub fn extend_stroke(context: &CanvasRenderingContext2d, x: f64, y: f64) {
    context.line_to(x, y);
    context.stroke();
}

/// Repaints the whole surface opaque white.
pub fn paint_white(context: &CanvasRenderingContext2d, width: u32, height: u32) {
    context.set_fill_style_str(SURFACE_COLOR);
    context.fill_rect(0.0, 0.0, width as f64, height as f64);
}

/// First active touch of the event, translated from viewport coordinates to
/// the canvas's local frame.
pub fn touch_point(canvas: &HtmlCanvasElement, event: &TouchEvent) -> Option<(f64, f64)> {
    let touch = event.touches().get(0)?;
    let rect = canvas.get_bounding_client_rect();
    Some(surface_local(
        touch.client_x() as f64,
        touch.client_y() as f64,
        rect.left(),
        rect.top(),
    ))
}

pub fn render_canvas(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let on_mouse_down = link.callback(|event: MouseEvent| {
        Msg::StrokeStart(event.offset_x() as f64, event.offset_y() as f64)
    });
    let on_mouse_move = link.callback(|event: MouseEvent| {
        Msg::StrokeMove(event.offset_x() as f64, event.offset_y() as f64)
    });
    let on_mouse_up = link.callback(|_| Msg::StrokeEnd);
    let on_mouse_leave = link.callback(|_| Msg::StrokeEnd);

    html! {
        <canvas
            ref={model.canvas_ref.clone()}
            id="drawing-canvas"
            class="drawing-canvas"
            width={CANVAS_WIDTH.to_string()}
            height={CANVAS_HEIGHT.to_string()}
            onmousedown={on_mouse_down}
            onmousemove={on_mouse_move}
            onmouseup={on_mouse_up}
            onmouseleave={on_mouse_leave}
        />
    }
}

pub fn render_controls(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();

    html! {
        <div class="button-container">
            <button
                id="predict-button"
                class="analyze-btn"
                onclick={debounce(300, {
                    let link = link.clone();
                    move || link.callback(|_| Msg::Predict).emit(())
                })}
            >
                { render_predict_button_content(model) }
            </button>
            <button
                id="clear-button"
                class="analyze-btn"
                style="background-color: var(--danger-color);"
                onclick={debounce(300, {
                    let link = link.clone();
                    move || link.callback(|_| Msg::Clear).emit(())
                })}
            >
                <i class="fa-solid fa-eraser"></i>{" Clear"}
            </button>
        </div>
    }
}

fn render_predict_button_content(model: &Model) -> Html {
    if model.pending_requests > 0 {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Predicting..."}</> }
    } else {
        html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Predict"}</> }
    }
}
