use crate::util::format_time;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverOverlayProps {
    pub show: bool,
    pub score: u32,
    pub level: u32,
    pub accuracy: u32,
    pub seconds_played: u64,
    pub restart: Callback<()>,
    pub to_menu: Callback<()>,
}

#[function_component]
pub fn GameOverOverlay(props: &GameOverOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let restart_cb = props.restart.clone();
    let restart_btn = Callback::from(move |_| restart_cb.emit(()));
    let menu_btn = {
        let cb = props.to_menu.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.85); border:2px solid #f85149; padding:24px 32px; border-radius:12px; text-align:center; min-width:320px;">
            <h2 style="margin:0 0 12px 0; color:#f85149;">{"Game Over!"}</h2>
            <p style="margin:4px 0; opacity:0.85;">{"A mine reached the finish line!"}</p>
            <p style="margin:4px 0;">{ format!("Score: {}", props.score) }</p>
            <p style="margin:4px 0;">{ format!("Level: {}", props.level) }</p>
            <p style="margin:4px 0;">{ format!("Accuracy: {}%", props.accuracy) }</p>
            <p style="margin:4px 0;">{ format!("Time Played: {}", format_time(props.seconds_played)) }</p>
            <div style="margin-top:16px; display:flex; gap:12px; justify-content:center;">
                <button onclick={restart_btn}>{"Try Again"}</button>
                <button onclick={menu_btn}>{"Menu"}</button>
            </div>
            <div style="margin-top:10px; font-size:11px; opacity:0.6;">{"Press Enter to try again"}</div>
        </div>
    }
}
