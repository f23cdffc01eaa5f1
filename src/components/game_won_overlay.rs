use crate::model::MAX_LEVEL;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameWonOverlayProps {
    pub show: bool,
    pub score: u32,
    pub restart: Callback<()>,
}

#[function_component]
pub fn GameWonOverlay(props: &GameWonOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let restart_btn = {
        let cb = props.restart.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.85); border:2px solid #d4af37; padding:24px 32px; border-radius:12px; text-align:center; min-width:320px;">
            <h2 style="margin:0 0 12px 0; color:#d4af37;">{"You Won!"}</h2>
            <p style="margin:4px 0;">{ format!("Final Score: {}", props.score) }</p>
            <p style="margin:4px 0; opacity:0.85;">{ format!("You've completed all {} levels! 🎉", MAX_LEVEL) }</p>
            <div style="margin-top:16px;">
                <button onclick={restart_btn}>{"Play Again"}</button>
            </div>
        </div>
    }
}
