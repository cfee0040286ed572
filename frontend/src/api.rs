use crate::Model;
use crate::Msg;
use gloo_console::error;
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use serde_json::Value;
use shared::PredictionResponse;
use web_sys::Blob;
use yew::html::Scope;

/// The classifier service is reached at a fixed local address; there is no
/// configuration surface for it.
const PREDICT_ENDPOINT: &str = "http://127.0.0.1:8000/predict/";

/// Uploads one flattened PNG as the `file` field of a multipart form and
/// delivers the parsed payload back to the component. Every failure branch
/// becomes `Msg::PredictionFailed`; the caller never sees a rejection.
pub async fn send_prediction(link: &Scope<Model>, image: Blob) {
    let blob = gloo_file::Blob::from(image);
    let file = GlooFile::new_with_options("digit.png", blob, Some("image/png"), None);
    let form_data = web_sys::FormData::new().unwrap();
    form_data.append_with_blob("file", file.as_ref()).unwrap();

    let request = match Request::post(PREDICT_ENDPOINT).body(form_data) {
        Ok(request) => request,
        Err(e) => {
            error!(format!("Failed to build prediction request: {:?}", e));
            link.send_message(Msg::PredictionFailed(format!("Request error: {}", e)));
            return;
        }
    };

    match request.send().await {
        Ok(response) if response.ok() => match response.json::<Value>().await {
            Ok(payload) => {
                link.send_message(Msg::PredictionReady(PredictionResponse::from(payload)))
            }
            Err(e) => {
                error!(format!("Failed to parse prediction response: {:?}", e));
                link.send_message(Msg::PredictionFailed(format!(
                    "Failed to parse response: {}",
                    e
                )));
            }
        },
        Ok(response) => {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(format!("Prediction request rejected: {} - {}", status, body));
            link.send_message(Msg::PredictionFailed(format!(
                "Server error: {} - {}",
                status, body
            )));
        }
        Err(e) => {
            error!(format!("Prediction request failed: {:?}", e));
            link.send_message(Msg::PredictionFailed(format!("Network error: {}", e)));
        }
    }
}
