use anyhow::{Context, Result, anyhow};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::model::{GameStatus, OverlayKey, RunAction, RunState, SHOT_TTL_MS, TICK_MS};
use crate::settings::Settings;
use crate::state::{FieldLayout, IntervalGuard, ListenerGuard};
use crate::stats::StatsManager;
use crate::typing::KeyInput;

use super::{
    controls_panel::ControlsPanel, countdown_overlay::CountdownOverlay,
    game_over_overlay::GameOverOverlay, game_won_overlay::GameWonOverlay,
    input_display::InputDisplay, level_complete_overlay::LevelCompleteOverlay,
    settings_modal::SettingsModal, stats_panel::StatsPanel, stats_popup::StatsPopup,
    time_display::TimeDisplay,
};

#[derive(Properties, PartialEq, Clone)]
pub struct GameViewProps {
    pub run_state: UseReducerHandle<RunState>,
    pub stats: StatsManager,
    pub settings: Settings,
    /// Records a finished run (if any) and starts over at level 1.
    pub on_restart: Callback<()>,
    pub to_menu: Callback<()>,
    pub on_toggle_countdown: Callback<()>,
    pub on_toggle_level_picker: Callback<()>,
}

/// Keys typed into the level picker must not reach the game.
fn typing_into_field(e: &KeyboardEvent) -> bool {
    e.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .is_some()
}

fn draw_field(canvas: &HtmlCanvasElement, rs: &RunState) -> Result<()> {
    let w = canvas.client_width().max(1) as u32;
    let h = canvas.client_height().max(1) as u32;
    if canvas.width() != w {
        canvas.set_width(w);
    }
    if canvas.height() != h {
        canvas.set_height(h);
    }
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext failed: {:?}", e))?
        .context("2d context unavailable")?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| anyhow!("unexpected canvas context type"))?;
    let field = FieldLayout::new(f64::from(w), f64::from(h));

    ctx.set_fill_style_str("#0e1116");
    ctx.fill_rect(0.0, 0.0, field.width, field.height);

    // danger zone below the finish line
    let fy = field.finish_line_px();
    ctx.set_fill_style_str("rgba(248,81,73,0.10)");
    ctx.fill_rect(0.0, fy, field.width, field.height - fy);
    ctx.set_stroke_style_str("#f85149");
    ctx.set_line_width(2.0);
    ctx.begin_path();
    ctx.move_to(0.0, fy);
    ctx.line_to(field.width, fy);
    ctx.stroke();

    // cannon
    let cannon_x = field.width / 2.0;
    let cannon_y = field.height - 6.0;
    ctx.set_fill_style_str("#58a6ff");
    ctx.begin_path();
    ctx.move_to(cannon_x - 14.0, field.height);
    ctx.line_to(cannon_x, cannon_y - 14.0);
    ctx.line_to(cannon_x + 14.0, field.height);
    ctx.close_path();
    ctx.fill();

    for shot in &rs.shots {
        let (tx, ty) = field.to_px(f64::from(shot.x), shot.y);
        let alpha = f64::from(shot.ttl_ms) / f64::from(SHOT_TTL_MS);
        ctx.set_stroke_style_str(&format!("rgba(0,234,255,{:.3})", alpha));
        ctx.set_line_width(2.0);
        ctx.begin_path();
        ctx.move_to(cannon_x, cannon_y - 14.0);
        ctx.line_to(tx, ty);
        ctx.stroke();
    }

    let font = field.font_px();
    let advance = field.char_advance();
    let box_h = font + 12.0;
    ctx.set_font(&format!("600 {}px monospace", font));
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");
    for m in rs.mine_views() {
        if m.destroyed {
            continue;
        }
        let (cx, cy) = field.to_px(f64::from(m.x), m.y);
        let len = m.word.chars().count();
        let left = field.label_left(cx, len);
        let top = cy.max(0.0);
        ctx.set_global_alpha(if m.started { 1.0 } else { 0.35 });

        let (fill, stroke) = if m.errored {
            ("#35090b", "#f85149")
        } else if m.targeted {
            ("#082235", "#58a6ff")
        } else {
            ("#161b22", "#3c4454")
        };
        ctx.set_fill_style_str(fill);
        ctx.fill_rect(left, top, field.label_width(len), box_h);
        ctx.set_stroke_style_str(stroke);
        ctx.set_line_width(if m.targeted { 2.0 } else { 1.0 });
        ctx.stroke_rect(left, top, field.label_width(len), box_h);

        let text_y = top + box_h / 2.0;
        let typed = if m.targeted { rs.input.len().min(m.word.len()) } else { 0 };
        let (done, rest) = m.word.split_at(typed);
        if !done.is_empty() {
            ctx.set_fill_style_str("#2ea043");
            ctx.fill_text(done, left + 8.0, text_y).ok();
        }
        ctx.set_fill_style_str("#e6edf3");
        ctx.fill_text(rest, left + 8.0 + advance * typed as f64, text_y).ok();
    }
    ctx.set_global_alpha(1.0);
    Ok(())
}

#[function_component]
pub fn GameView(props: &GameViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let run_state_ref = use_mut_ref(|| props.run_state.clone());
    *run_state_ref.borrow_mut() = props.run_state.clone();
    let open_settings = use_state(|| false);
    let show_stats = use_state(|| false);

    // redraw after every committed state
    {
        let canvas_ref = canvas_ref.clone();
        let rs = props.run_state.clone();
        use_effect(move || {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                if let Err(e) = draw_field(&canvas, &rs) {
                    log::warn!("draw skipped: {:#}", e);
                }
            }
            || ()
        });
    }

    // Timers and the gameplay keyboard listener exist only while the run is live;
    // overlays get an Enter listener instead.
    {
        let run_state_ref = run_state_ref.clone();
        let on_restart = props.on_restart.clone();
        use_effect_with(props.run_state.is_live(), move |live| {
            let mut intervals: Vec<IntervalGuard> = Vec::new();
            let mut listener: Option<ListenerGuard> = None;
            if let Some(window) = web_sys::window() {
                if *live {
                    let tick_ref = run_state_ref.clone();
                    let second_ref = run_state_ref.clone();
                    let started = [
                        IntervalGuard::start(&window, TICK_MS, move || {
                            let handle = tick_ref.borrow().clone();
                            handle.dispatch(RunAction::Tick { dt_ms: TICK_MS });
                        }),
                        IntervalGuard::start(&window, 1000, move || {
                            let handle = second_ref.borrow().clone();
                            handle.dispatch(RunAction::TickSecond);
                        }),
                    ];
                    for guard in started {
                        match guard {
                            Ok(g) => intervals.push(g),
                            Err(e) => log::error!("{:#}", e),
                        }
                    }
                    let key_ref = run_state_ref.clone();
                    let keys = ListenerGuard::keydown(&window, move |e: KeyboardEvent| {
                        if e.ctrl_key() || e.meta_key() || e.alt_key() || typing_into_field(&e) {
                            return;
                        }
                        let handle = key_ref.borrow().clone();
                        let key = e.key();
                        if key == " " || key == "Spacebar" {
                            e.prevent_default();
                            handle.dispatch(RunAction::TogglePause);
                            return;
                        }
                        if let Some(input) = KeyInput::from_key(&key) {
                            e.prevent_default();
                            handle.dispatch(RunAction::Key(input));
                        }
                    });
                    match keys {
                        Ok(g) => listener = Some(g),
                        Err(e) => log::error!("{:#}", e),
                    }
                } else {
                    let key_ref = run_state_ref.clone();
                    let keys = ListenerGuard::keydown(&window, move |e: KeyboardEvent| {
                        if e.key() != "Enter" || typing_into_field(&e) {
                            return;
                        }
                        let handle = key_ref.borrow().clone();
                        let Some(intent) = handle.overlay_enter() else {
                            return;
                        };
                        // a focused button would otherwise also get Enter's click
                        e.prevent_default();
                        match intent {
                            OverlayKey::NextLevel => {
                                handle.dispatch(RunAction::AcknowledgeLevelComplete)
                            }
                            OverlayKey::Restart => on_restart.emit(()),
                        }
                    });
                    match keys {
                        Ok(g) => listener = Some(g),
                        Err(e) => log::error!("{:#}", e),
                    }
                }
            } else {
                log::error!("no window; game loop not started");
            }
            move || {
                drop(intervals);
                drop(listener);
            }
        });
    }

    let rs = &*props.run_state;
    let paused = rs.status == GameStatus::Paused;

    let toggle_pause_cb = {
        let run_state = props.run_state.clone();
        Callback::from(move |()| run_state.dispatch(RunAction::TogglePause))
    };
    let next_level_cb = {
        let run_state = props.run_state.clone();
        Callback::from(move |()| run_state.dispatch(RunAction::AcknowledgeLevelComplete))
    };
    let jump_level_cb = {
        let run_state = props.run_state.clone();
        Callback::from(move |level: u32| run_state.dispatch(RunAction::JumpToLevel(level)))
    };
    let open_settings_cb = {
        let open_settings = open_settings.clone();
        let run_state = props.run_state.clone();
        Callback::from(move |()| {
            run_state.dispatch(RunAction::Pause);
            open_settings.set(true)
        })
    };
    let close_settings_cb = {
        let open_settings = open_settings.clone();
        Callback::from(move |()| open_settings.set(false))
    };
    let show_stats_cb = {
        let show_stats = show_stats.clone();
        let run_state = props.run_state.clone();
        Callback::from(move |()| {
            run_state.dispatch(RunAction::Pause);
            show_stats.set(true)
        })
    };
    let close_stats_cb = {
        let show_stats = show_stats.clone();
        Callback::from(move |()| show_stats.set(false))
    };

    html! {<div style="position:relative; width:100vw; height:100vh;">
        <canvas ref={canvas_ref} id="game-canvas" style="display:block; width:100%; height:100%;"></canvas>
        <StatsPanel level={rs.level} score={rs.score} accuracy={rs.accuracy_percent()} words_destroyed={rs.stats.words_destroyed} />
        <TimeDisplay seconds_played={rs.stats.seconds_played} status={rs.status} countdown_ms={rs.countdown_ms} on_toggle_pause={toggle_pause_cb} />
        <ControlsPanel
            on_restart={props.on_restart.clone()}
            on_show_stats={show_stats_cb}
            on_open_settings={open_settings_cb}
            to_menu={props.to_menu.clone()}
            show_level_picker={props.settings.show_level_picker}
            on_jump_level={jump_level_cb}
        />
        <InputDisplay
            target_word={rs.targeted_mine().map(|m| m.word.to_string())}
            typed={rs.input.clone()}
            errored={rs.errored.is_some()}
            paused={paused}
        />
        { if rs.status == GameStatus::Playing { html!{ <CountdownOverlay remaining_ms={rs.countdown_ms} /> } } else { html!{} } }
        <LevelCompleteOverlay show={rs.status == GameStatus::LevelComplete} level={rs.level} score={rs.score} next_level={next_level_cb} />
        <GameOverOverlay
            show={rs.status == GameStatus::GameOver}
            score={rs.score}
            level={rs.level}
            accuracy={rs.accuracy_percent()}
            seconds_played={rs.stats.seconds_played}
            restart={props.on_restart.clone()}
            to_menu={props.to_menu.clone()}
        />
        <GameWonOverlay show={rs.status == GameStatus::GameWon} score={rs.score} restart={props.on_restart.clone()} />
        <SettingsModal
            show={*open_settings}
            on_close={close_settings_cb}
            countdown={props.settings.countdown}
            on_toggle_countdown={props.on_toggle_countdown.clone()}
            show_level_picker={props.settings.show_level_picker}
            on_toggle_level_picker={props.on_toggle_level_picker.clone()}
        />
        <StatsPopup show={*show_stats} stats={props.stats.clone()} on_close={close_stats_cb} />
    </div>}
}
