use controller::sample;
use controller::validate::{self, FormInput};
use controller::view::ScoreView;
use yew::prelude::*;

use crate::api_client::predict::predict;

use super::form::{InputMode, PredictForm};
use super::results::ResultsCard;

/// The prediction page: owns the form state, the submit lifecycle and the
/// scored outcome.
#[function_component(PredictPage)]
pub fn predict_page() -> Html {
    let mode = use_state(|| InputMode::Manual);
    let amount = use_state(String::new);
    let json_text = use_state(String::new);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let outcome = use_state(|| None::<ScoreView>);

    // Switching panes only clears the error, field contents survive.
    let on_mode = {
        let mode = mode.clone();
        let error_message = error_message.clone();
        Callback::from(move |next: InputMode| {
            mode.set(next);
            error_message.set(None);
        })
    };

    let on_amount = {
        let amount = amount.clone();
        Callback::from(move |value: String| amount.set(value))
    };
    let on_json = {
        let json_text = json_text.clone();
        Callback::from(move |value: String| json_text.set(value))
    };

    let on_fill_sample = {
        let amount = amount.clone();
        let error_message = error_message.clone();
        Callback::from(move |_| {
            let random_amount = sample::sample_amount(js_sys::Math::random());
            amount.set(format!("{:.2}", random_amount));
            error_message.set(None);
        })
    };

    let on_clear = {
        let amount = amount.clone();
        let json_text = json_text.clone();
        let error_message = error_message.clone();
        let outcome = outcome.clone();
        Callback::from(move |_| {
            amount.set(String::new());
            json_text.set(String::new());
            error_message.set(None);
            outcome.set(None);
        })
    };

    let on_submit = {
        let amount = amount.clone();
        let json_text = json_text.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let outcome = outcome.clone();

        Callback::from(move |_| {
            if *is_submitting {
                return;
            }
            error_message.set(None);

            let input = FormInput {
                amount: (*amount).clone(),
                json_text: (*json_text).clone(),
            };
            let payload = match validate::validate(&input) {
                Ok(payload) => payload,
                Err(error) => {
                    log::warn!("Validation failed: {}", error);
                    error_message.set(Some(error.to_string()));
                    return;
                }
            };

            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let outcome = outcome.clone();

            is_submitting.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                log::info!("Submitting prediction request");
                match predict(&payload).await {
                    Ok(reply) => {
                        log::info!(
                            "Prediction received: fraud probability {:.3}",
                            reply.fraud_probability
                        );
                        outcome.set(Some(ScoreView::from_response(&reply)));
                        is_submitting.set(false);
                    }
                    Err(error) => {
                        log::error!("Prediction request failed: {}", error);
                        error_message.set(Some(error.to_string()));
                        is_submitting.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow-md">
                <div class="container mx-auto">
                    <span class="text-xl font-bold">{"Fraud Detection"}</span>
                    <span class="ml-2 opacity-60">{"credit card transaction scoring"}</span>
                </div>
            </div>
            <div class="container mx-auto p-4">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                    <PredictForm
                        mode={*mode}
                        amount={(*amount).clone()}
                        json_text={(*json_text).clone()}
                        submitting={*is_submitting}
                        error={(*error_message).clone()}
                        on_mode={on_mode}
                        on_amount={on_amount}
                        on_json={on_json}
                        on_submit={on_submit}
                        on_fill_sample={on_fill_sample}
                        on_clear={on_clear}
                    />
                    <ResultsCard outcome={(*outcome).clone()} />
                </div>
            </div>
        </div>
    }
}
