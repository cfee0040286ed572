use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-pen-nib"></i> {" Digit Sketch & Predict"}</h1>
            <p class="subtitle">{"Draw a digit with mouse or touch, then let the classifier guess it"}</p>
        </header>
    }
}
