use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LevelCompleteOverlayProps {
    pub show: bool,
    pub level: u32,
    pub score: u32,
    pub next_level: Callback<()>,
}

#[function_component]
pub fn LevelCompleteOverlay(props: &LevelCompleteOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let next_btn = {
        let cb = props.next_level.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.85); border:2px solid #2ea043; padding:24px 32px; border-radius:12px; text-align:center; min-width:320px;">
            <h2 style="margin:0 0 12px 0; color:#2ea043;">{ format!("Level {} Complete!", props.level) }</h2>
            <p style="margin:4px 0;">{ format!("Score: {}", props.score) }</p>
            <div style="margin-top:16px;">
                <button onclick={next_btn}>{ format!("Start Level {}", props.level + 1) }</button>
            </div>
            <div style="margin-top:10px; font-size:11px; opacity:0.6;">{"Press Enter to continue"}</div>
        </div>
    }
}
