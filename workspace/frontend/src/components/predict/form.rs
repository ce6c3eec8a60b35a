use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Which entry pane is shown. Validation keys off the JSON text content,
/// so a payload left in the JSON box wins regardless of the active pane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Manual,
    Json,
}

#[derive(Properties, PartialEq)]
pub struct PredictFormProps {
    pub mode: InputMode,
    pub amount: String,
    pub json_text: String,
    pub submitting: bool,
    pub error: Option<String>,
    pub on_mode: Callback<InputMode>,
    pub on_amount: Callback<String>,
    pub on_json: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_fill_sample: Callback<()>,
    pub on_clear: Callback<()>,
}

#[function_component(PredictForm)]
pub fn predict_form(props: &PredictFormProps) -> Html {
    let on_manual_tab = {
        let on_mode = props.on_mode.clone();
        Callback::from(move |_| on_mode.emit(InputMode::Manual))
    };
    let on_json_tab = {
        let on_mode = props.on_mode.clone();
        Callback::from(move |_| on_mode.emit(InputMode::Json))
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };
    let on_fill_sample = {
        let on_fill_sample = props.on_fill_sample.clone();
        Callback::from(move |_| on_fill_sample.emit(()))
    };
    let on_clear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_| on_clear.emit(()))
    };

    let on_amount_input = {
        let on_amount = props.on_amount.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            on_amount.emit(value);
        })
    };
    let on_json_input = {
        let on_json = props.on_json.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            on_json.emit(value);
        })
    };

    html! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body space-y-4">
                <h2 class="card-title">{"Transaction Details"}</h2>

                {if let Some(error) = props.error.as_ref() {
                    html! {
                        <div class="alert alert-error" id="error-alert">
                            <span id="error-message">{error}</span>
                        </div>
                    }
                } else {
                    html! {}
                }}

                <div role="tablist" class="tabs tabs-bordered">
                    <a
                        role="tab"
                        class={classes!("tab", if props.mode == InputMode::Manual { "tab-active" } else { "" })}
                        onclick={on_manual_tab}
                    >
                        {"Manual Entry"}
                    </a>
                    <a
                        role="tab"
                        class={classes!("tab", if props.mode == InputMode::Json { "tab-active" } else { "" })}
                        onclick={on_json_tab}
                    >
                        {"Raw JSON"}
                    </a>
                </div>

                <form onsubmit={on_submit} class="space-y-4">
                    {if props.mode == InputMode::Manual {
                        html! {
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">{"Amount"}</span>
                                </label>
                                <input
                                    id="field-Amount"
                                    type="number"
                                    step="0.01"
                                    class="input input-bordered w-full"
                                    placeholder="e.g. 149.62"
                                    value={props.amount.clone()}
                                    oninput={on_amount_input}
                                    disabled={props.submitting}
                                />
                                <label class="label">
                                    <span class="label-text-alt opacity-70">
                                        {"Remaining features are filled from a bundled sample transaction."}
                                    </span>
                                </label>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">{"Feature payload (JSON object)"}</span>
                                </label>
                                <textarea
                                    id="json-input"
                                    rows="10"
                                    class="textarea textarea-bordered w-full font-mono"
                                    placeholder={r#"{"V1": -1.359807, "V2": -0.072781, ..., "Amount": 149.62}"#}
                                    value={props.json_text.clone()}
                                    oninput={on_json_input}
                                    disabled={props.submitting}
                                />
                            </div>
                        }
                    }}

                    <div class="card-actions justify-end">
                        <button
                            type="button"
                            class="btn"
                            onclick={on_fill_sample}
                            disabled={props.submitting}
                        >
                            {"Use Sample"}
                        </button>
                        <button
                            type="button"
                            class="btn"
                            onclick={on_clear}
                            disabled={props.submitting}
                        >
                            {"Clear"}
                        </button>
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled={props.submitting}
                        >
                            {if props.submitting {
                                html! { <><span class="loading loading-spinner loading-sm"></span>{" Scoring..."}</> }
                            } else {
                                html! { "Check Transaction" }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
