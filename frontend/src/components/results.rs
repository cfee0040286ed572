use super::super::Model;
use super::super::PredictionOutcome;
use super::utils::class_color;
use serde_json::to_string_pretty;
use shared::PredictionResponse;
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    match &model.prediction {
        None => html! {},
        Some(PredictionOutcome::Failed(message)) => render_error(message),
        Some(PredictionOutcome::Received(response)) => render_received(response),
    }
}

fn render_error(message: &str) -> Html {
    html! {
        <div class="error-message">
            <i class="fa-solid fa-circle-exclamation"></i>
            <p>{ format!("Failed to fetch prediction: {}", message) }</p>
        </div>
    }
}

fn render_received(response: &PredictionResponse) -> Html {
    let label = response.predicted_label();
    let probabilities = response.probabilities();

    // Unrecognized payloads stay visible rather than vanishing.
    if label.is_none() && probabilities.is_none() {
        return html! {
            <div class="results-container">
                <h2><i class="fa-solid fa-wand-magic-sparkles"></i>{" Prediction"}</h2>
                <pre class="raw-payload">{ to_string_pretty(response.raw()).unwrap_or_default() }</pre>
            </div>
        };
    }

    html! {
        <div class="results-container">
            <div class="result-header">
                <h2><i class="fa-solid fa-wand-magic-sparkles"></i>{" Prediction"}</h2>
                {
                    if let Some(label) = &label {
                        html! { <div class="predicted-digit">{ label.clone() }</div> }
                    } else {
                        html! {}
                    }
                }
                { render_confidence_meter(response) }
            </div>
            { render_probability_bars(response, probabilities.as_deref()) }
        </div>
    }
}

fn render_confidence_meter(response: &PredictionResponse) -> Html {
    let Some(probabilities) = response.probabilities() else {
        return html! {};
    };
    let Some(top) = response.top_class() else {
        return html! {};
    };
    let confidence = probabilities[top] * 100.0;

    html! {
        <div class="confidence-meter">
            <div class="meter-label">{"Confidence:"}</div>
            <div class="meter">
                <div class="meter-fill" style={format!("width: {}%", confidence)}></div>
            </div>
            <div class="meter-value">{format!("{:.1}%", confidence)}</div>
        </div>
    }
}

fn render_probability_bars(response: &PredictionResponse, probabilities: Option<&[f64]>) -> Html {
    let Some(probabilities) = probabilities else {
        return html! {};
    };
    let top = response.top_class();

    html! {
        <div class="detailed-results">
            <h3>{"Class Probabilities"}</h3>
            <div class="result-bars">
                { for probabilities.iter().enumerate().map(|(i, &p)| {
                    let percentage = p * 100.0;
                    let is_top = top == Some(i);
                    html! {
                        <div class={classes!("result-item", is_top.then_some("top-class"))}>
                            <div class="result-label">{ i }</div>
                            <div class="result-bar-container">
                                <div
                                    class="result-bar"
                                    style={format!(
                                        "width: {}%; background-color: {};",
                                        percentage,
                                        class_color(i)
                                    )}
                                ></div>
                            </div>
                            <div class="result-value">{ format!("{:.1}%", percentage) }</div>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
