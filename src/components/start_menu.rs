use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StartMenuProps {
    pub on_start: Callback<()>,
    pub on_show_stats: Callback<()>,
}

#[function_component(StartMenu)]
pub fn start_menu(props: &StartMenuProps) -> Html {
    let start_btn = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let stats_btn = {
        let cb = props.on_show_stats.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.87); border:2px solid #30363d; padding:28px 36px; border-radius:14px; max-width:520px; width:90%; box-shadow:0 0 0 1px #1a1f24, 0 6px 18px rgba(0,0,0,0.6); font-size:14px; line-height:1.4;">
            <h2 style="margin:0 0 12px 0; font-size:28px; color:#58a6ff; text-align:center;">{"Type Strike"}</h2>
            <p style="margin:4px 0 10px 0; text-align:center; opacity:0.85;">{"Master your typing skills. Accuracy is your best weapon."}</p>
            <ul style="margin:0 0 12px 18px; padding:0; list-style:disc; display:flex; flex-direction:column; gap:4px;">
                <li>{"Words fall as mines; type a mine's word to blast it before it reaches the finish line."}</li>
                <li>{"Mines are targeted in the order they launch; the current target is highlighted."}</li>
                <li>{"Each destroyed mine scores 50. Each wrong letter costs 5 and resets your input."}</li>
                <li>{"Esc clears your input, Backspace removes the last letter."}</li>
                <li>{"Press Space to Pause/Resume."}</li>
                <li>{"Clear all 30 levels to win."}</li>
            </ul>
            <div style="display:flex; gap:12px; justify-content:center; margin-top:8px;">
                <button onclick={start_btn}>{"Start Game ▶"}</button>
                <button onclick={stats_btn}>{"Statistics"}</button>
            </div>
            <div style="margin-top:12px; font-size:11px; opacity:0.6; text-align:center;">{"Tip: mines appear one by one, so focus on accuracy over speed."}</div>
        </div>
    }
}
