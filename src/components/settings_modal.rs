use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub countdown: bool,
    pub on_toggle_countdown: Callback<()>,
    pub show_level_picker: bool,
    pub on_toggle_level_picker: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_countdown_cb = {
        let cb = props.on_toggle_countdown.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_picker_cb = {
        let cb = props.on_toggle_level_picker.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; max-width:480px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.countdown} onclick={toggle_countdown_cb} />
                    <span>{"Countdown before each wave"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.show_level_picker} onclick={toggle_picker_cb} />
                    <span>{"Show level picker (debug)"}</span>
                </label>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"The countdown also runs when resuming from pause."}</div>
            <div style="display:flex; gap:8px;">
                <button onclick={close_cb} style="flex:1;">{"Done"}</button>
            </div>
        </div>
    </div>}
}
