use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct InputDisplayProps {
    pub target_word: Option<String>,
    pub typed: String,
    pub errored: bool,
    pub paused: bool,
}

#[function_component]
pub fn InputDisplay(props: &InputDisplayProps) -> Html {
    let hint = if props.paused {
        "⏸ GAME PAUSED"
    } else if props.target_word.is_some() {
        "Type the word to blast the mine!"
    } else {
        "Start typing to target the next mine"
    };
    let typed_color = if props.errored { "#f85149" } else { "#2ea043" };
    html! {<div style="position:absolute; bottom:16px; left:50%; transform:translateX(-50%); background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 18px; min-width:280px; text-align:center; display:flex; flex-direction:column; gap:4px;">
        <div style="font-size:18px; letter-spacing:2px; min-height:22px; opacity:0.8;">{ props.target_word.clone().unwrap_or_default() }</div>
        <div style={format!("font-size:22px; font-weight:600; letter-spacing:2px; min-height:26px; color:{};", typed_color)}>{ props.typed.clone() }</div>
        <div style="font-size:11px; opacity:0.7;">{ hint }</div>
    </div>}
}
