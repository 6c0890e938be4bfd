//! Main application for the Caro GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::{BoardFrame, BoardView};
use super::game_state::GameState;
use super::theme::*;
use crate::config::AppConfig;
use crate::rules::Outcome;
use crate::Mark;

/// Main Caro application
pub struct CaroApp {
    state: GameState,
    board_view: BoardView,
    dark_mode: bool,
}

impl CaroApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
            dark_mode: config.ui.dark_mode,
        }
    }

    fn palette(&self) -> Palette {
        Palette::for_mode(self.dark_mode)
    }

    fn new_game(&mut self) {
        self.state.reset();
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    if ui.button("Hint (H)").clicked() {
                        self.state.request_hint();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.dark_mode, "Dark Mode (T)");
                });
            });
        });
    }

    /// Render the side panel with turn, stats and actions
    fn render_side_panel(&mut self, ctx: &Context) {
        let palette = self.palette();
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(palette.panel_bg).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui, palette);
                ui.add_space(12.0);

                self.render_turn_card(ui, palette);
                ui.add_space(10.0);

                self.render_stats_card(ui, palette);
                ui.add_space(10.0);

                self.render_actions_card(ui, palette);

                if let Some(outcome) = self.state.game.outcome().cloned() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, palette, &outcome);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, palette, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame(palette: Palette) -> Frame {
        Frame::new()
            .fill(palette.card_bg)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui, palette: Palette) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X").size(20.0).strong().color(X_MARK));
            ui.label(RichText::new("O").size(20.0).strong().color(O_MARK));
            ui.add_space(4.0);
            ui.label(RichText::new("CARO").size(22.0).strong().color(palette.text_primary));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Five in a row on a 15x15 board").size(11.0).color(palette.text_muted));
        });
    }

    /// Which side is to move
    fn render_turn_card(&self, ui: &mut egui::Ui, palette: Palette) {
        let human = self.state.game.human_mark();
        Self::card_frame(palette).show(ui, |ui| {
            ui.label(RichText::new("TURN").size(10.0).color(palette.text_muted));
            ui.add_space(6.0);

            for (mark, name) in [(human, "You"), (human.opponent(), "Computer")] {
                let active = self.state.game.current_turn() == mark && !self.state.game.is_over();
                ui.horizontal(|ui| {
                    ui.label(RichText::new(mark.symbol().to_string()).size(20.0).strong().color(mark_color(mark)));
                    ui.add_space(6.0);
                    let text = RichText::new(name).size(14.0);
                    let text = if active {
                        text.strong().color(palette.text_primary)
                    } else {
                        text.color(palette.text_secondary)
                    };
                    ui.label(text);

                    if active {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let status = if self.state.is_bot_thinking() {
                                let secs = self
                                    .state
                                    .bot_thinking_elapsed()
                                    .map_or(0.0, |d| d.as_secs_f32());
                                (format!("thinking {secs:.1}s"), STATUS_WAIT)
                            } else {
                                ("to move".to_string(), STATUS_OK)
                            };
                            ui.label(RichText::new(status.0).size(11.0).color(status.1));
                        });
                    }
                });
            }
        });
    }

    /// Session wins, losses and draws
    fn render_stats_card(&self, ui: &mut egui::Ui, palette: Palette) {
        let stats = self.state.game.stats();
        Self::card_frame(palette).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("SESSION").size(10.0).color(palette.text_muted));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("{} played", stats.games()))
                            .size(10.0)
                            .color(palette.text_muted),
                    );
                });
            });
            ui.add_space(8.0);

            ui.columns(3, |cols| {
                for (col, (label, value, color)) in cols.iter_mut().zip([
                    ("Wins", stats.wins, STATUS_OK),
                    ("Losses", stats.losses, STATUS_LOSS),
                    ("Draws", stats.draws, palette.text_secondary),
                ]) {
                    col.vertical_centered(|ui| {
                        ui.label(RichText::new(value.to_string()).size(22.0).strong().color(color));
                        ui.label(RichText::new(label).size(10.0).color(palette.text_muted));
                    });
                }
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui, palette: Palette) {
        Self::card_frame(palette).show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(palette.text_muted));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("New Game").clicked() {
                    self.new_game();
                }
                if ui.button("Hint").clicked() {
                    self.state.request_hint();
                }
                let theme_label = if self.dark_mode { "Light" } else { "Dark" };
                if ui.button(theme_label).clicked() {
                    self.dark_mode = !self.dark_mode;
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.game.history().len()))
                    .size(11.0)
                    .color(palette.text_secondary),
            );
            if let Some(result) = &self.state.last_bot_result {
                ui.label(
                    RichText::new(format!(
                        "Computer: {:?}, {} candidates, {}us",
                        result.reason, result.candidates, result.time_us
                    ))
                    .size(10.0)
                    .color(palette.text_muted),
                );
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, palette: Palette, outcome: &Outcome) {
        let human = self.state.game.human_mark();
        let (title, subtitle, accent) = match outcome.winner() {
            Some(mark) if mark == human => ("You win!", "Sharp play. Try another round?", STATUS_OK),
            Some(_) => ("Computer wins!", "Don't give up, try a new plan.", STATUS_LOSS),
            None => ("Draw!", "Nobody got five this time.", palette.text_secondary),
        };

        Self::card_frame(palette).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("GAME OVER").size(10.0).color(palette.text_muted));
                ui.add_space(6.0);
                ui.label(RichText::new(title).size(20.0).strong().color(accent));
                ui.label(RichText::new(subtitle).size(11.0).color(palette.text_secondary));
                ui.add_space(10.0);
                if ui.button(RichText::new("Play again").size(14.0).strong()).clicked() {
                    self.new_game();
                }
            });
        });
    }

    fn render_message_card(&self, ui: &mut egui::Ui, palette: Palette, msg: &str) {
        Self::card_frame(palette).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("!").size(14.0).strong().color(STATUS_WAIT));
                ui.add_space(4.0);
                ui.label(RichText::new(msg).size(11.0).color(palette.text_primary));
            });
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        let palette = self.palette();
        CentralPanel::default()
            .frame(Frame::new().fill(palette.panel_bg).inner_margin(10.0))
            .show(ctx, |ui| {
                let frame = BoardFrame {
                    board: self.state.game.board(),
                    palette,
                    last_move: self.state.game.last_move(),
                    hint: self.state.hint,
                    winning_line: self.state.game.winning_line(),
                    interactive: self.state.accepts_clicks(),
                };
                let clicked = self.board_view.show(ui, &frame);

                if let Some(pos) = clicked {
                    if let Err(err) = self.state.try_place(pos) {
                        self.state.message = Some(err.to_string());
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, toggle_theme, hint) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::T),
                i.key_pressed(egui::Key::H),
            )
        });

        if new_game {
            self.new_game();
        }
        if toggle_theme {
            self.dark_mode = !self.dark_mode;
        }
        if hint {
            self.state.request_hint();
        }
    }
}

fn mark_color(mark: Mark) -> egui::Color32 {
    match mark {
        Mark::X => X_MARK,
        Mark::O => O_MARK,
        Mark::Empty => egui::Color32::GRAY,
    }
}

impl eframe::App for CaroApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Check bot result
        self.state.check_bot_result();

        // Start the computer once it is its turn
        if self.state.game.is_bot_turn() && !self.state.is_bot_thinking() {
            self.state.start_bot_thinking();
        }

        ctx.set_visuals(if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep polling while the computer is thinking
        if self.state.is_bot_thinking() {
            ctx.request_repaint();
        }
    }
}
