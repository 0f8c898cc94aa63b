//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};
use log::warn;

use super::board_view::BoardView;
use super::theme::*;
use crate::{Difficulty, Game, GameConfig, GameStatus, Mark, MoveResult, SearchType};

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    game: Game,
    board_view: BoardView,
    difficulty: Option<Difficulty>,
    show_debug: bool,
    message: Option<String>,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self::with_config(&GameConfig::default())
    }
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &GameConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            game: Game::from_config(config),
            board_view: BoardView::default(),
            difficulty: config.difficulty(),
            show_debug: true,
            message: None,
        }
    }

    fn new_game(&mut self) {
        self.game.reset();
        self.message = None;
    }

    fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = Some(difficulty);
        self.game.set_budget(difficulty.budget());
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
                });

                ui.menu_button("Difficulty", |ui| {
                    for difficulty in Difficulty::ALL {
                        let selected = self.difficulty == Some(difficulty);
                        let label = format!("{} ({} nodes)", difficulty, difficulty.nodes());
                        if ui.radio(selected, label).clicked() {
                            self.set_difficulty(difficulty);
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let text = match self.difficulty {
                        Some(difficulty) => format!("Difficulty: {difficulty}"),
                        None => "Difficulty: custom".to_string(),
                    };
                    ui.label(text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if self.game.is_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("TIC-TAC-TOE").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("4x4, four in a row").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            let color = match self.game.status() {
                GameStatus::InProgress { to_move } => mark_color(to_move),
                GameStatus::Won { winner, .. } => mark_color(winner),
                GameStatus::Draw => TEXT_SECONDARY,
            };
            ui.label(RichText::new(self.game.status_text()).size(18.0).strong().color(color));
            ui.add_space(4.0);
            for player in self.game.players() {
                let role = if player.is_human() { "you" } else { "AI" };
                ui.label(
                    RichText::new(format!("{} {} ({})", player.mark().symbol(), player.name(), role))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            if ui.button("New Game (swap first move)").clicked() {
                self.new_game();
            }
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!(
                    "Move #{}  Game #{}",
                    self.game.board().move_count(),
                    self.game.games_played() + 1
                ))
                .size(11.0)
                .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(DEBUG_CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                match self.game.last_ai_result() {
                    Some(result) => Self::render_result(ui, result),
                    None => {
                        ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                    }
                }
            });
    }

    fn render_result(ui: &mut egui::Ui, result: &MoveResult) {
        let stats = &result.stats;
        ui.label(
            RichText::new(format!("Turn {} - {:?}", result.turn, result.search_type))
                .size(11.0)
                .strong()
                .color(ACCENT),
        );
        if let Some(cell) = result.best_move {
            ui.label(RichText::new(format!("-> {cell}")).size(12.0).strong().color(WIN_HIGHLIGHT));
        }
        if result.search_type == SearchType::Opening {
            return;
        }

        let lines = [
            format!("Score: {}", result.score),
            format!("Cutoff: {}", if stats.cutoff { "yes" } else { "no" }),
            format!("Max depth: {}", stats.depth),
            format!("Nodes: {}", stats.nodes),
            format!("Max prunings: {}", stats.max_prunes),
            format!("Min prunings: {}", stats.min_prunes),
            format!("{}ms", result.time_ms),
        ];
        for line in lines {
            ui.label(RichText::new(line).size(10.0).color(TEXT_SECONDARY));
        }
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_PRIMARY));
                    ui.add_space(6.0);
                    ui.label(RichText::new(self.game.status_text()).size(18.0).strong().color(WIN_HIGHLIGHT));
                    ui.add_space(8.0);
                    if ui.button("Play again").clicked() {
                        self.new_game();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let (to_move, winning_line) = match self.game.status() {
                GameStatus::InProgress { to_move } => (to_move, None),
                GameStatus::Won { winner, line } => (winner, Some(line)),
                GameStatus::Draw => (Mark::Empty, None),
            };

            let clicked = self.board_view.show(
                ui,
                self.game.board(),
                to_move,
                winning_line,
                self.game.is_human_turn(),
            );

            if let Some(cell) = clicked {
                match self.game.submit_input(cell) {
                    Ok(()) => self.message = None,
                    Err(err) => self.message = Some(err.to_string()),
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (toggle_debug, new_game) =
            ctx.input(|i| (i.key_pressed(egui::Key::D), i.key_pressed(egui::Key::N)));
        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if new_game {
            self.new_game();
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // One poll per frame; a computer move is decided synchronously here
        if let Err(err) = self.game.tick() {
            warn!("move rejected: {err}");
            self.message = Some(err.to_string());
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if !self.game.is_over() && !self.game.is_human_turn() {
            ctx.request_repaint();
        }
    }
}
