use yew::prelude::*;

use crate::stats::StatsManager;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPopupProps {
    pub show: bool,
    pub stats: StatsManager,
    pub on_close: Callback<()>,
}

fn stat_card(value: String, label: &'static str) -> Html {
    html! {
        <div style="background:#0e1116; border:1px solid #30363d; border-radius:8px; padding:10px; text-align:center;">
            <div style="font-size:20px; font-weight:600; font-variant-numeric:tabular-nums;">{ value }</div>
            <div style="font-size:11px; opacity:0.7;">{ label }</div>
        </div>
    }
}

#[function_component]
pub fn StatsPopup(props: &StatsPopupProps) -> Html {
    // bumped after clearing so the popup re-reads the store
    let revision = use_state(|| 0u32);
    if !props.show {
        return html! {};
    }
    let stats = props.stats.get_stats();

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let clear_cb = {
        let manager = props.stats.clone();
        let revision = revision.clone();
        Callback::from(move |_| {
            let confirmed = web_sys::window()
                .and_then(|win| {
                    win.confirm_with_message(
                        "Are you sure you want to clear all statistics? This cannot be undone.",
                    )
                    .ok()
                })
                .unwrap_or(false);
            if confirmed {
                manager.clear_all();
                revision.set(*revision + 1);
            }
        })
    };

    let grid = "display:grid; grid-template-columns:repeat(4, 1fr); gap:8px;";
    let section_title = "margin:0 0 8px 0; font-size:14px; opacity:0.85;";
    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:60;" onclick={close_cb.clone()}>
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:420px; max-width:560px; max-height:85vh; overflow-y:auto; display:flex; flex-direction:column; gap:14px;"
            onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Game Statistics"}</h3>
                <button onclick={close_cb} style="padding:4px 8px;">{"✕"}</button>
            </div>
            <div>
                <h4 style={section_title}>{"Overall Performance"}</h4>
                <div style={grid}>
                    { stat_card(stats.total_games_played.to_string(), "Games Played") }
                    { stat_card(stats.highest_level.to_string(), "Highest Level") }
                    { stat_card(stats.highest_score.to_string(), "High Score") }
                    { stat_card(props.stats.average_score_per_game().to_string(), "Avg Score") }
                </div>
            </div>
            <div>
                <h4 style={section_title}>{"Accuracy & Progress"}</h4>
                <div style={grid}>
                    { stat_card(format!("{}%", props.stats.average_accuracy()), "Avg Accuracy") }
                    { stat_card(stats.total_words_destroyed.to_string(), "Words Destroyed") }
                    { stat_card(stats.total_score.to_string(), "Total Score") }
                    { stat_card(props.stats.total_play_time(), "Play Time") }
                </div>
            </div>
            { if stats.level_stats.is_empty() { html!{} } else { html!{
                <div>
                    <h4 style={section_title}>{"Level Performance"}</h4>
                    <div style="display:flex; flex-direction:column; gap:6px;">
                        { for stats.level_stats.iter().map(|(level, ls)| html!{
                            <div style="display:flex; justify-content:space-between; font-size:12px; background:#0e1116; border:1px solid #30363d; border-radius:6px; padding:6px 10px;">
                                <span style="font-weight:600;">{ format!("Level {}", level) }</span>
                                <span>{ format!("Played {}x", ls.times_played) }</span>
                                <span>{ format!("Best: {}", ls.best_score) }</span>
                                <span>{ format!("Acc: {}%", ls.average_accuracy.round()) }</span>
                                <span>{ format!("Words: {}", ls.words_destroyed) }</span>
                            </div>
                        }) }
                    </div>
                </div>
            } } }
            <button onclick={clear_cb} style="background:#f85149; border:1px solid #b62324; color:#fff;">{"Clear All Statistics"}</button>
        </div>
    </div>}
}
