// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Nav,
    Edit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub mode: AppMode,
    pub current_screen: Screen,
    pub history: Vec<Screen>,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Nav,
            current_screen: Screen::Home,
            history: Vec::new(),
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    NavigateTo(Screen),
    NavigateBack,
    EnterEditMode,
    ExitToNav,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ScreenChanged(Screen),
    ModeChanged(AppMode),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::NavigateTo(screen) => {
                // The current screen goes into history; history never
                // contains the screen currently shown.
                self.history.push(self.current_screen);
                self.current_screen = screen;
                self.mode = AppMode::Nav;
                vec![AppEvent::ScreenChanged(self.current_screen)]
            }
            AppCommand::NavigateBack => {
                // Pop-or-default: running out of history lands on home.
                self.current_screen = self.history.pop().unwrap_or(Screen::Home);
                self.mode = AppMode::Nav;
                vec![AppEvent::ScreenChanged(self.current_screen)]
            }
            AppCommand::EnterEditMode => {
                self.mode = AppMode::Edit;
                vec![AppEvent::ModeChanged(self.mode)]
            }
            AppCommand::ExitToNav => {
                self.mode = AppMode::Nav;
                vec![AppEvent::ModeChanged(self.mode), self.set_status("nav")]
            }
            AppCommand::SetStatus(message) => {
                vec![self.set_status(&message)]
            }
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn set_status(&mut self, message: &str) -> AppEvent {
        self.status_line = Some(message.to_owned());
        AppEvent::StatusUpdated(message.to_owned())
    }
}
