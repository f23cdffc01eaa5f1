use super::{game_view::GameView, start_menu::StartMenu, stats_popup::StatsPopup};
use crate::model::{RunAction, RunState};
use crate::settings::Settings;
use crate::stats::StatsManager;
use crate::storage::open_store;
use yew::prelude::*;

#[derive(PartialEq, Clone, Copy)]
enum View {
    Menu,
    Game,
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Menu);
    let show_stats = use_state(|| false);
    let store = use_memo((), |_| open_store());
    let stats = StatsManager::new((*store).clone());
    let settings = {
        let store = store.clone();
        use_state(move || Settings::load(&**store))
    };
    let run_state = {
        let config = settings.game_config();
        use_reducer(move || RunState::from_entropy(config))
    };

    // Finished runs are recorded once, right before the reset.
    let restart = {
        let run_state = run_state.clone();
        let stats = stats.clone();
        Callback::from(move |()| {
            if let Some(report) = run_state.report_on_restart() {
                stats.record_game_end(&report, js_sys::Date::now());
            }
            run_state.dispatch(RunAction::Restart);
        })
    };
    let start = {
        let restart = restart.clone();
        let view = view.clone();
        let show_stats = show_stats.clone();
        Callback::from(move |()| {
            show_stats.set(false);
            restart.emit(());
            view.set(View::Game);
        })
    };
    let to_menu = {
        let run_state = run_state.clone();
        let view = view.clone();
        Callback::from(move |()| {
            run_state.dispatch(RunAction::Pause);
            view.set(View::Menu);
        })
    };

    let update_settings = {
        let settings = settings.clone();
        let store = store.clone();
        let run_state = run_state.clone();
        move |next: Settings| {
            next.save(&**store);
            log::info!("settings changed: {:?}", next);
            run_state.dispatch(RunAction::SetConfig(next.game_config()));
            settings.set(next);
        }
    };
    let toggle_countdown = {
        let settings = settings.clone();
        let update = update_settings.clone();
        Callback::from(move |()| {
            update(Settings { countdown: !settings.countdown, ..*settings })
        })
    };
    let toggle_level_picker = {
        let settings = settings.clone();
        let update = update_settings;
        Callback::from(move |()| {
            update(Settings { show_level_picker: !settings.show_level_picker, ..*settings })
        })
    };

    match *view {
        View::Menu => {
            let open_stats = {
                let show_stats = show_stats.clone();
                Callback::from(move |()| show_stats.set(true))
            };
            let close_stats = {
                let show_stats = show_stats.clone();
                Callback::from(move |()| show_stats.set(false))
            };
            html! {<div style="position:relative; width:100vw; height:100vh; background:#0e1116;">
                <StartMenu on_start={start} on_show_stats={open_stats} />
                <StatsPopup show={*show_stats} stats={stats} on_close={close_stats} />
            </div>}
        }
        View::Game => html! { <GameView
            run_state={run_state.clone()}
            stats={stats}
            settings={*settings}
            on_restart={restart}
            to_menu={to_menu}
            on_toggle_countdown={toggle_countdown}
            on_toggle_level_picker={toggle_level_picker}
        /> },
    }
}
