use crate::model::GameStatus;
use crate::util::format_time;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TimeDisplayProps {
    pub seconds_played: u64,
    pub status: GameStatus,
    pub countdown_ms: u32,
    pub on_toggle_pause: Callback<()>,
}

/// Caption under the clock while it is not counting.
fn clock_badge(status: GameStatus, countdown_ms: u32) -> Option<&'static str> {
    match status {
        GameStatus::Paused => Some("PAUSED"),
        GameStatus::Playing if countdown_ms > 0 => Some("GET READY"),
        _ => None,
    }
}

/// Pause button text; `None` hides the button outside a live run.
fn pause_label(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Playing => Some("⏸ Pause"),
        GameStatus::Paused => Some("▶ Resume"),
        GameStatus::GameOver | GameStatus::LevelComplete | GameStatus::GameWon => None,
    }
}

#[function_component(TimeDisplay)]
pub fn time_display(props: &TimeDisplayProps) -> Html {
    let pause_cb = {
        let cb = props.on_toggle_pause.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let badge = clock_badge(props.status, props.countdown_ms);
    let clock_color = if badge.is_some() { "#8b949e" } else { "#e6edf3" };
    html! {<div style="position:absolute; top:12px; left:50%; transform:translateX(-50%); display:flex; flex-direction:column; align-items:center; gap:6px;">
        <div style={format!("font-size:20px; font-weight:600; font-variant-numeric:tabular-nums; color:{};", clock_color)}>
            { format_time(props.seconds_played) }
        </div>
        { match badge {
            Some(text) => html!{ <div style="font-size:11px; letter-spacing:1px; color:#d29922;">{ text }</div> },
            None => html!{},
        } }
        { match pause_label(props.status) {
            Some(label) => html!{ <button onclick={pause_cb} style="padding:4px 10px; font-size:12px;">{ label }</button> },
            None => html!{},
        } }
    </div>}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_marks_stopped_clock() {
        assert_eq!(clock_badge(GameStatus::Playing, 0), None);
        assert_eq!(clock_badge(GameStatus::Playing, 1200), Some("GET READY"));
        assert_eq!(clock_badge(GameStatus::Paused, 0), Some("PAUSED"));
        assert_eq!(clock_badge(GameStatus::GameOver, 0), None);
    }

    #[test]
    fn pause_button_only_during_live_run() {
        assert_eq!(pause_label(GameStatus::Playing), Some("⏸ Pause"));
        assert_eq!(pause_label(GameStatus::Paused), Some("▶ Resume"));
        assert_eq!(pause_label(GameStatus::LevelComplete), None);
        assert_eq!(pause_label(GameStatus::GameWon), None);
    }
}
