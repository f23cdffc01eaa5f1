use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::util::parse_level;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub on_restart: Callback<()>,
    pub on_show_stats: Callback<()>,
    pub on_open_settings: Callback<()>,
    pub to_menu: Callback<()>,
    pub show_level_picker: bool,
    pub on_jump_level: Callback<u32>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let level_input = use_node_ref();
    let restart_cb = {
        let cb = props.on_restart.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let stats_cb = {
        let cb = props.on_show_stats.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let settings_cb = {
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let menu_cb = {
        let cb = props.to_menu.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let jump_cb = {
        let cb = props.on_jump_level.clone();
        let level_input = level_input.clone();
        Callback::from(move |_| {
            if let Some(input) = level_input.cast::<HtmlInputElement>() {
                match parse_level(&input.value()) {
                    Some(level) => cb.emit(level),
                    None => log::debug!("ignoring level input '{}'", input.value()),
                }
            }
        })
    };
    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:200px; display:flex; flex-direction:column; gap:6px;">
        <button onclick={restart_cb}>{"🔄 Restart"}</button>
        <button onclick={stats_cb}>{"Statistics"}</button>
        <button onclick={settings_cb}>{"Settings"}</button>
        <button onclick={menu_cb}>{"Menu"}</button>
        { if props.show_level_picker { html!{
            <div style="display:flex; gap:6px; align-items:center; font-size:12px;">
                <input ref={level_input} type="number" min="1" max="30" placeholder="Level" style="width:64px;" />
                <button onclick={jump_cb}>{"Jump"}</button>
            </div>
        } } else { html!{} } }
        <div style="font-size:11px; opacity:0.7;">{"Space: pause · Esc: clear input"}</div>
    </div>}
}
