use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub level: u32,
    pub score: u32,
    pub accuracy: u32,
    pub words_destroyed: u32,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // icon | label | value
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:200px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", icon_style)}>{"🏁"}</span>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Level"}</span>
                <span style={format!("{} color:#58a6ff;", value_style)}>{ props.level }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#d4af37;", icon_style)}>{"★"}</span>
                <span style={format!("{} color:#d4af37;", label_style)}>{"Score"}</span>
                <span style={format!("{} color:#d4af37;", value_style)}>{ props.score }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#2ea043;", icon_style)}>{"🎯"}</span>
                <span style={format!("{} color:#2ea043;", label_style)}>{"Accuracy"}</span>
                <span style={format!("{} color:#2ea043;", value_style)}>{ format!("{}%", props.accuracy) }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#f85149;", icon_style)}>{"💥"}</span>
                <span style={format!("{} color:#f85149;", label_style)}>{"Destroyed"}</span>
                <span style={format!("{} color:#f85149;", value_style)}>{ props.words_destroyed }</span>
            </div>
        </div>
    }
}
