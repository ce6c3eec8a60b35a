use controller::chart::{ChartSlot, DonutSpec};
use controller::view::ScoreView;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::chart::RiskChart;

#[derive(Properties, PartialEq)]
pub struct ResultsCardProps {
    pub outcome: Option<ScoreView>,
}

/// Right-hand card: placeholder until a prediction arrives, then the
/// probability, risk badge and donut. The chart slot lives across renders so
/// a repeat prediction updates the donut in place, while clearing the
/// outcome destroys it.
#[function_component(ResultsCard)]
pub fn results_card(props: &ResultsCardProps) -> Html {
    let canvas_ref = use_node_ref();
    let chart_slot = use_mut_ref(ChartSlot::<RiskChart>::default);

    {
        let canvas_ref = canvas_ref.clone();
        let chart_slot = chart_slot.clone();
        use_effect_with(props.outcome.clone(), move |outcome| {
            let mut slot = chart_slot.borrow_mut();
            match outcome {
                Some(view) => {
                    let spec = DonutSpec::for_probability(view.probability);
                    slot.render_with(&spec, |spec| {
                        canvas_ref
                            .cast::<HtmlCanvasElement>()
                            .and_then(|canvas| RiskChart::mount(&canvas, spec))
                    });
                }
                None => slot.clear(),
            }
            || ()
        });
    }

    html! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">{"Prediction Result"}</h2>
                {match props.outcome.as_ref() {
                    Some(view) => html! {
                        <div class="space-y-4" id="results">
                            <div class="flex items-center justify-between">
                                <div>
                                    <div class="text-sm opacity-70">{"Fraud Probability"}</div>
                                    <div class="text-4xl font-bold" id="probability">
                                        {&view.probability_text}
                                    </div>
                                </div>
                                <span
                                    id="risk-badge"
                                    class={classes!("badge", "badge-lg", view.badge_class)}
                                >
                                    {&view.badge_text}
                                </span>
                            </div>
                            <canvas ref={canvas_ref.clone()} id="risk-chart"></canvas>
                        </div>
                    },
                    None => html! {
                        <div class="py-16 text-center opacity-60" id="placeholder">
                            <p>{"Submit a transaction to see its fraud score."}</p>
                        </div>
                    },
                }}
            </div>
        </div>
    }
}
