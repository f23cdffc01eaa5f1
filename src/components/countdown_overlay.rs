use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CountdownOverlayProps {
    pub remaining_ms: u32,
}

#[function_component]
pub fn CountdownOverlay(props: &CountdownOverlayProps) -> Html {
    if props.remaining_ms == 0 {
        return html! {};
    }
    let secs = props.remaining_ms.div_ceil(1000);
    html! {
        <div style="position:absolute; top:40%; left:50%; transform:translate(-50%, -50%); font-size:96px; font-weight:700; color:#58a6ff; text-shadow:0 0 18px rgba(88,166,255,0.6); pointer-events:none;">
            { secs }
        </div>
    }
}
