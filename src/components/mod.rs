pub mod app;
pub mod controls_panel;
pub mod countdown_overlay;
pub mod game_over_overlay;
pub mod game_view;
pub mod game_won_overlay;
pub mod input_display;
pub mod level_complete_overlay;
pub mod settings_modal;
pub mod start_menu;
pub mod stats_panel;
pub mod stats_popup;
pub mod time_display;
