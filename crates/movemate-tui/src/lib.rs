// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use movemate_app::{
    AppCommand, AppEvent, AppMode, AppState, Category, Screen, SearchEntry, Shipment,
    ShipmentStatus, StatusCounts, filter_by_status, search_entries, status_counts, toggle_category,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

const ESTIMATED_AMOUNT: i64 = 1460;
const TRACKING_NUMBER: &str = "NEJ200889341222231";

const VEHICLES: [(&str, &str, &str); 3] = [
    (
        "Ocean freight",
        "International",
        "An international shipping service",
    ),
    (
        "Cargo freight",
        "Reliable",
        "Fast and reliable cargo service",
    ),
    (
        "Air freight",
        "International",
        "Express air shipping service",
    ),
];

const PACKAGING_OPTIONS: [(&str, &str); 4] = [
    ("Box", "📦"),
    ("Bag", "👜"),
    ("Envelope", "✉️"),
    ("Tube", "🪈"),
];

const DESTINATION_FIELDS: [&str; 3] = ["Sender location", "Receiver location", "Approx Weight"];

const PROFILE_STATS: [(&str, &str); 3] = [
    ("Total Orders", "24"),
    ("Pending", "3"),
    ("Delivered", "21"),
];

const PROFILE_MENU: [(&str, &str, bool); 8] = [
    ("Personal Information", "Update your personal details", false),
    ("Address Book", "Manage delivery address", false),
    ("Notifications", "Configure your preferences", false),
    ("Privacy and Security", "Manage your account security", false),
    ("Rate Us", "Share your experience", false),
    ("Help and support", "Get help and contact support", false),
    ("Settings", "App preferences and configurations", false),
    ("Logout", "", true),
];

/// Data seam between the UI and whatever supplies the screen collections.
/// The binary implements it over the bundled sample catalog; tests implement
/// it over fixtures.
pub trait AppRuntime {
    fn load_search_entries(&mut self) -> Result<Vec<SearchEntry>>;
    fn load_shipments(&mut self) -> Result<Vec<Shipment>>;
    fn load_categories(&mut self) -> Result<Vec<Category>>;
}

/// Display label and colors for a shipment status. The status enum itself
/// carries no presentation; this table is the only place the mapping lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StatusPresentation {
    label: &'static str,
    color: Color,
    background: Color,
}

const fn status_presentation(status: ShipmentStatus) -> StatusPresentation {
    match status {
        ShipmentStatus::All => StatusPresentation {
            label: "All",
            color: Color::White,
            background: Color::Magenta,
        },
        ShipmentStatus::Completed => StatusPresentation {
            label: "Completed",
            color: Color::Green,
            background: Color::DarkGray,
        },
        ShipmentStatus::InProgress => StatusPresentation {
            label: "In progress",
            color: Color::Blue,
            background: Color::DarkGray,
        },
        ShipmentStatus::Pending => StatusPresentation {
            label: "Pending",
            color: Color::Yellow,
            background: Color::DarkGray,
        },
        ShipmentStatus::Cancelled => StatusPresentation {
            label: "Cancelled",
            color: Color::Red,
            background: Color::DarkGray,
        },
    }
}

/// Timing knobs the event loop honors; the binary fills it from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiTiming {
    pub tick_rate: Duration,
    pub status_clear_after: Duration,
    pub estimate_reveal: Duration,
}

impl Default for UiTiming {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(120),
            status_clear_after: Duration::from_secs(4),
            estimate_reveal: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
struct HomeUiState {
    vehicle_cursor: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct SearchUiState {
    query: String,
    cursor: usize,
    entries: Vec<SearchEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct EstimateUiState {
    visible: bool,
    opened_at: Option<Instant>,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct CalculateUiState {
    sender_location: String,
    receiver_location: String,
    approx_weight: String,
    field_index: usize,
    packaging_index: usize,
    category_cursor: usize,
    categories: Vec<Category>,
    estimate: EstimateUiState,
}

#[derive(Debug, Clone, PartialEq)]
struct ShipmentUiState {
    selected_status: ShipmentStatus,
    cursor: usize,
    shipments: Vec<Shipment>,
}

impl Default for ShipmentUiState {
    fn default() -> Self {
        Self {
            selected_status: ShipmentStatus::All,
            cursor: 0,
            shipments: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
struct ProfileUiState {
    menu_cursor: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, PartialEq, Default)]
struct ViewData {
    timing: UiTiming,
    home: HomeUiState,
    search: SearchUiState,
    calculate: CalculateUiState,
    shipment: ShipmentUiState,
    profile: ProfileUiState,
    help_visible: bool,
    status_token: u64,
}

pub fn run_app<R: AppRuntime>(state: &mut AppState, runtime: &mut R, timing: UiTiming) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData {
        timing,
        ..ViewData::default()
    };
    let (internal_tx, internal_rx) = mpsc::channel();

    if let Err(error) = enter_screen(state.current_screen, runtime, &mut view_data) {
        state.dispatch(AppCommand::SetStatus(format!("load failed: {error}")));
    }

    let mut result = Ok(());
    loop {
        process_internal_events(state, &mut view_data, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(view_data.timing.tick_rate).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &mut ViewData,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            // A newer status replaced this one before its timer fired.
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64, after: Duration) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(after);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(
        internal_tx,
        view_data.status_token,
        view_data.timing.status_clear_after,
    );
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
        }
        return false;
    }

    if view_data.calculate.estimate.visible {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('d')) {
            view_data.calculate.estimate = EstimateUiState::default();
        }
        return false;
    }

    match state.mode {
        AppMode::Nav => handle_nav_key(state, runtime, view_data, internal_tx, key),
        AppMode::Edit => handle_edit_key(state, runtime, view_data, internal_tx, key),
    }

    false
}

fn handle_nav_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('?'), _) => {
            view_data.help_visible = true;
        }
        (KeyCode::Esc, _) => {
            // Back is disabled while home is showing, matching the root
            // back handler of the screen flow.
            if state.current_screen != Screen::Home {
                dispatch_and_sync(state, runtime, view_data, AppCommand::NavigateBack, internal_tx);
            }
        }
        (KeyCode::Char('b'), KeyModifiers::NONE) => {
            navigate_adjacent(state, runtime, view_data, internal_tx, -1);
        }
        (KeyCode::Char('f'), KeyModifiers::NONE) => {
            navigate_adjacent(state, runtime, view_data, internal_tx, 1);
        }
        (KeyCode::Char('/'), _) => {
            dispatch_and_sync(
                state,
                runtime,
                view_data,
                AppCommand::NavigateTo(Screen::Search),
                internal_tx,
            );
        }
        (KeyCode::Char(digit @ '1'..='5'), KeyModifiers::NONE) => {
            let index = digit as usize - '1' as usize;
            dispatch_and_sync(
                state,
                runtime,
                view_data,
                AppCommand::NavigateTo(Screen::ALL[index]),
                internal_tx,
            );
        }
        _ => match state.current_screen {
            Screen::Home => handle_home_nav_key(view_data, key),
            Screen::Search => handle_search_nav_key(state, view_data, key),
            Screen::Calculate => handle_calculate_nav_key(state, view_data, internal_tx, key),
            Screen::Shipment => handle_shipment_nav_key(state, view_data, internal_tx, key),
            Screen::Profile => handle_profile_nav_key(view_data, key),
        },
    }
}

fn handle_home_nav_key(view_data: &mut ViewData, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if view_data.home.vehicle_cursor + 1 < VEHICLES.len() {
                view_data.home.vehicle_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            view_data.home.vehicle_cursor = view_data.home.vehicle_cursor.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_search_nav_key(state: &mut AppState, view_data: &mut ViewData, key: KeyEvent) {
    match key.code {
        KeyCode::Char('i') => {
            state.dispatch(AppCommand::EnterEditMode);
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let len = search_results(&view_data.search).len();
            if view_data.search.cursor + 1 < len {
                view_data.search.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            view_data.search.cursor = view_data.search.cursor.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_calculate_nav_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('i'), KeyModifiers::NONE) => {
            state.dispatch(AppCommand::EnterEditMode);
        }
        (KeyCode::Tab, KeyModifiers::NONE) => {
            cycle_destination_field(&mut view_data.calculate, 1);
        }
        (KeyCode::BackTab, _) => {
            cycle_destination_field(&mut view_data.calculate, -1);
        }
        (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::Left, _) => {
            cycle_packaging(state, view_data, internal_tx, -1);
        }
        (KeyCode::Char('l'), KeyModifiers::NONE) | (KeyCode::Right, _) => {
            cycle_packaging(state, view_data, internal_tx, 1);
        }
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
            let len = view_data.calculate.categories.len();
            if view_data.calculate.category_cursor + 1 < len {
                view_data.calculate.category_cursor += 1;
            }
        }
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
            view_data.calculate.category_cursor =
                view_data.calculate.category_cursor.saturating_sub(1);
        }
        (KeyCode::Char(' '), _) => {
            toggle_category_under_cursor(state, view_data, internal_tx);
        }
        (KeyCode::Enter, _) => {
            open_estimate(&mut view_data.calculate);
        }
        _ => {}
    }
}

fn handle_shipment_nav_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => {
            cycle_status_filter(state, view_data, internal_tx, -1);
        }
        KeyCode::Char('l') | KeyCode::Right => {
            cycle_status_filter(state, view_data, internal_tx, 1);
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let len = visible_shipments(&view_data.shipment).len();
            if view_data.shipment.cursor + 1 < len {
                view_data.shipment.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            view_data.shipment.cursor = view_data.shipment.cursor.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_profile_nav_key(view_data: &mut ViewData, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if view_data.profile.menu_cursor + 1 < PROFILE_MENU.len() {
                view_data.profile.menu_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            view_data.profile.menu_cursor = view_data.profile.menu_cursor.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_edit_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match state.current_screen {
        Screen::Search => handle_search_edit_key(state, runtime, view_data, internal_tx, key),
        Screen::Calculate => handle_calculate_edit_key(state, runtime, view_data, internal_tx, key),
        // Edit mode is only entered on search and calculate; anywhere else
        // falls straight back to nav.
        _ => {
            dispatch_and_sync(state, runtime, view_data, AppCommand::ExitToNav, internal_tx);
        }
    }
}

fn handle_search_edit_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Enter, _) => {
            dispatch_and_sync(state, runtime, view_data, AppCommand::ExitToNav, internal_tx);
        }
        (KeyCode::Backspace, _) => {
            view_data.search.query.pop();
        }
        (KeyCode::Char('u'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            view_data.search.query.clear();
        }
        (KeyCode::Char(ch), modifiers)
            if modifiers.is_empty() || modifiers == KeyModifiers::SHIFT =>
        {
            view_data.search.query.push(ch);
        }
        _ => {}
    }
    clamp_search_cursor(&mut view_data.search);
}

fn handle_calculate_edit_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            dispatch_and_sync(state, runtime, view_data, AppCommand::ExitToNav, internal_tx);
        }
        (KeyCode::Enter, _) => {
            open_estimate(&mut view_data.calculate);
        }
        (KeyCode::Tab, KeyModifiers::NONE) => {
            cycle_destination_field(&mut view_data.calculate, 1);
        }
        (KeyCode::BackTab, _) => {
            cycle_destination_field(&mut view_data.calculate, -1);
        }
        (KeyCode::Backspace, _) => {
            focused_destination_field_mut(&mut view_data.calculate).pop();
        }
        (KeyCode::Char('u'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            focused_destination_field_mut(&mut view_data.calculate).clear();
        }
        (KeyCode::Char(ch), modifiers)
            if modifiers.is_empty() || modifiers == KeyModifiers::SHIFT =>
        {
            focused_destination_field_mut(&mut view_data.calculate).push(ch);
        }
        _ => {}
    }
}

fn navigate_adjacent<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    delta: isize,
) {
    let position = Screen::ALL
        .iter()
        .position(|screen| *screen == state.current_screen)
        .unwrap_or(0) as isize;
    let len = Screen::ALL.len() as isize;
    let next = (position + delta).rem_euclid(len) as usize;
    dispatch_and_sync(
        state,
        runtime,
        view_data,
        AppCommand::NavigateTo(Screen::ALL[next]),
        internal_tx,
    );
}

fn cycle_destination_field(calculate: &mut CalculateUiState, delta: isize) {
    let len = DESTINATION_FIELDS.len() as isize;
    let position = calculate.field_index as isize;
    calculate.field_index = (position + delta).rem_euclid(len) as usize;
}

fn focused_destination_field_mut(calculate: &mut CalculateUiState) -> &mut String {
    match calculate.field_index {
        0 => &mut calculate.sender_location,
        1 => &mut calculate.receiver_location,
        _ => &mut calculate.approx_weight,
    }
}

fn cycle_packaging(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    delta: isize,
) {
    let len = PACKAGING_OPTIONS.len() as isize;
    let position = view_data.calculate.packaging_index as isize;
    view_data.calculate.packaging_index = (position + delta).rem_euclid(len) as usize;
    let (name, _) = PACKAGING_OPTIONS[view_data.calculate.packaging_index];
    emit_status(state, view_data, internal_tx, format!("packaging: {name}"));
}

fn toggle_category_under_cursor(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let Some(name) = view_data
        .calculate
        .categories
        .get(view_data.calculate.category_cursor)
        .map(|category| category.name.clone())
    else {
        return;
    };
    toggle_category(&mut view_data.calculate.categories, &name);
    let selected = view_data
        .calculate
        .categories
        .iter()
        .find(|category| category.name == name)
        .is_some_and(|category| category.selected);
    let status = if selected {
        format!("{name} selected")
    } else {
        format!("{name} cleared")
    };
    emit_status(state, view_data, internal_tx, status);
}

fn cycle_status_filter(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    delta: isize,
) {
    let position = ShipmentStatus::ALL
        .iter()
        .position(|status| *status == view_data.shipment.selected_status)
        .unwrap_or(0) as isize;
    let len = ShipmentStatus::ALL.len() as isize;
    let next = (position + delta).rem_euclid(len) as usize;
    view_data.shipment.selected_status = ShipmentStatus::ALL[next];
    view_data.shipment.cursor = 0;
    let label = status_presentation(view_data.shipment.selected_status).label;
    emit_status(state, view_data, internal_tx, format!("filter: {label}"));
}

fn open_estimate(calculate: &mut CalculateUiState) {
    calculate.estimate.visible = true;
    calculate.estimate.opened_at = Some(Instant::now());
}

fn search_results(search: &SearchUiState) -> Vec<SearchEntry> {
    search_entries(&search.entries, &search.query)
}

fn clamp_search_cursor(search: &mut SearchUiState) {
    let len = search_entries(&search.entries, &search.query).len();
    search.cursor = search.cursor.min(len.saturating_sub(1));
}

fn visible_shipments(shipment: &ShipmentUiState) -> Vec<Shipment> {
    filter_by_status(&shipment.shipments, shipment.selected_status)
}

fn dispatch_and_sync<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    command: AppCommand,
    internal_tx: &Sender<InternalEvent>,
) {
    let events = state.dispatch(command);
    if let Some(screen) = entered_screen(&events)
        && let Err(error) = enter_screen(screen, runtime, view_data)
    {
        emit_status(
            state,
            view_data,
            internal_tx,
            format!("load failed: {error}"),
        );
    }
    if events
        .iter()
        .any(|event| matches!(event, AppEvent::StatusUpdated(_)))
    {
        view_data.status_token = view_data.status_token.saturating_add(1);
        schedule_status_clear(
            internal_tx,
            view_data.status_token,
            view_data.timing.status_clear_after,
        );
    }
}

fn entered_screen(events: &[AppEvent]) -> Option<Screen> {
    events.iter().find_map(|event| match event {
        AppEvent::ScreenChanged(screen) => Some(*screen),
        _ => None,
    })
}

/// Rebuilds the entered screen's transient state from the runtime. Screens
/// always come up with fresh defaults; nothing carries over from the last
/// visit.
fn enter_screen<R: AppRuntime>(
    screen: Screen,
    runtime: &mut R,
    view_data: &mut ViewData,
) -> Result<()> {
    match screen {
        Screen::Home => {
            view_data.home = HomeUiState::default();
        }
        Screen::Search => {
            view_data.search = SearchUiState {
                entries: runtime.load_search_entries()?,
                ..SearchUiState::default()
            };
        }
        Screen::Calculate => {
            view_data.calculate = CalculateUiState {
                categories: runtime.load_categories()?,
                ..CalculateUiState::default()
            };
        }
        Screen::Shipment => {
            view_data.shipment = ShipmentUiState {
                shipments: runtime.load_shipments()?,
                ..ShipmentUiState::default()
            };
        }
        Screen::Profile => {
            view_data.profile = ProfileUiState::default();
        }
    }
    Ok(())
}

/// Linear count-up toward `target`: zero at the start, the exact target at
/// or past `total` (including a zero `total`), scaled in between.
fn animated_amount(target: i64, elapsed: Duration, total: Duration) -> i64 {
    if elapsed >= total {
        return target;
    }
    let total_ms = total.as_millis().max(1) as i64;
    let elapsed_ms = elapsed.as_millis() as i64;
    target.saturating_mul(elapsed_ms) / total_ms
}

fn current_estimate_amount(view_data: &ViewData) -> i64 {
    match view_data.calculate.estimate.opened_at {
        Some(opened_at) => animated_amount(
            ESTIMATED_AMOUNT,
            opened_at.elapsed(),
            view_data.timing.estimate_reveal,
        ),
        None => 0,
    }
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let selected = Screen::ALL
        .iter()
        .position(|screen| *screen == state.current_screen)
        .unwrap_or(0);
    let screen_titles = Screen::ALL
        .iter()
        .map(|screen| format!(" {} ", screen.label()))
        .collect::<Vec<String>>();
    let tabs = Tabs::new(screen_titles)
        .block(Block::default().title("movemate").borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .select(selected);
    frame.render_widget(tabs, layout[0]);

    match state.current_screen {
        Screen::Shipment => render_shipment_history(frame, layout[1], view_data),
        Screen::Profile => render_profile(frame, layout[1], view_data),
        screen => {
            let text = match screen {
                Screen::Home => render_home_text(view_data),
                Screen::Search => render_search_text(state, view_data),
                _ => render_calculate_text(view_data),
            };
            let body = Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(body_title(screen)),
            );
            frame.render_widget(body, layout[1]);
        }
    }

    let status_widget = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_widget, layout[2]);

    if view_data.calculate.estimate.visible {
        let area = centered_rect(52, 45, frame.area());
        frame.render_widget(Clear, area);
        let estimate =
            Paragraph::new(render_estimate_overlay_text(current_estimate_amount(view_data))).block(
                Block::default()
                    .title("MoveMate")
                    .borders(Borders::ALL)
                    .style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(estimate, area);
    }

    if view_data.help_visible {
        let area = centered_rect(80, 62, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

const fn body_title(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => "Home",
        Screen::Search => "Search",
        Screen::Calculate => "Calculate",
        Screen::Shipment => "Shipment history",
        Screen::Profile => "Profile",
    }
}

fn render_home_text(view_data: &ViewData) -> String {
    let mut lines = vec![
        "Your location".to_owned(),
        "Wertheimer, Illinois".to_owned(),
        String::new(),
        "Enter the receipt number...".to_owned(),
        String::new(),
        "Tracking".to_owned(),
        format!("Shipment Number: {TRACKING_NUMBER}"),
        "Sender: Atlanta, 5243".to_owned(),
        "Receiver: Chicago, 6342".to_owned(),
        "Time: • 2 day -3 days".to_owned(),
        "Status: Waiting to collect".to_owned(),
        "+ Add Stop".to_owned(),
        String::new(),
        "Available vehicles".to_owned(),
    ];
    for (index, (title, subtitle, description)) in VEHICLES.iter().enumerate() {
        let prefix = if index == view_data.home.vehicle_cursor {
            "> "
        } else {
            "  "
        };
        lines.push(format!("{prefix}{title} | {subtitle} | {description}"));
    }
    lines.join("\n")
}

fn render_search_text(state: &AppState, view_data: &ViewData) -> String {
    let mut lines = Vec::new();
    if view_data.search.query.is_empty() && state.mode != AppMode::Edit {
        lines.push("query: Search shipments...".to_owned());
    } else {
        lines.push(format!("query: {}", view_data.search.query));
    }
    lines.push(String::new());

    let results = search_results(&view_data.search);
    if results.is_empty() {
        lines.push("(no matches)".to_owned());
    } else {
        for (index, entry) in results.iter().enumerate() {
            let prefix = if index == view_data.search.cursor {
                "> "
            } else {
                "  "
            };
            lines.push(format!(
                "{prefix}{} | {} | {}",
                entry.title, entry.tracking_number, entry.route
            ));
        }
    }
    lines.join("\n")
}

fn render_calculate_text(view_data: &ViewData) -> String {
    let calculate = &view_data.calculate;
    let mut lines = vec!["Destination".to_owned()];
    for (index, label) in DESTINATION_FIELDS.iter().enumerate() {
        let prefix = if index == calculate.field_index {
            "> "
        } else {
            "  "
        };
        let value = match index {
            0 => &calculate.sender_location,
            1 => &calculate.receiver_location,
            _ => &calculate.approx_weight,
        };
        lines.push(format!("{prefix}{label}: {value}"));
    }

    lines.push(String::new());
    lines.push("Packaging".to_owned());
    lines.push("What are you sending?".to_owned());
    let mut packaging = String::from("  ");
    for (index, (name, glyph)) in PACKAGING_OPTIONS.iter().enumerate() {
        if index == calculate.packaging_index {
            packaging.push_str(&format!("[{glyph} {name}] "));
        } else {
            packaging.push_str(&format!(" {glyph} {name}  "));
        }
    }
    lines.push(packaging);

    lines.push(String::new());
    lines.push("Categories".to_owned());
    lines.push("What are you sending?".to_owned());
    for (index, category) in calculate.categories.iter().enumerate() {
        let prefix = if index == calculate.category_cursor {
            "> "
        } else {
            "  "
        };
        let mark = if category.selected { "[x]" } else { "[ ]" };
        lines.push(format!("{prefix}{mark} {}", category.name));
    }

    lines.push(String::new());
    lines.push("[ Calculate ]".to_owned());
    lines.join("\n")
}

fn render_shipment_history(frame: &mut ratatui::Frame<'_>, area: Rect, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let counts = status_counts(&view_data.shipment.shipments);
    let chip_cells = ShipmentStatus::ALL
        .iter()
        .map(|status| {
            let presentation = status_presentation(*status);
            let style = if *status == view_data.shipment.selected_status {
                Style::default()
                    .fg(presentation.color)
                    .bg(presentation.background)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Cell::from(chip_label(*status, &counts)).style(style)
        })
        .collect::<Vec<_>>();
    let chip_widths = vec![Constraint::Min(12); chip_cells.len()];
    let chips = Table::new([Row::new(chip_cells)], chip_widths)
        .column_spacing(1)
        .block(
            Block::default()
                .title("Shipment history")
                .borders(Borders::ALL),
        );
    frame.render_widget(chips, layout[0]);

    let visible = visible_shipments(&view_data.shipment);
    let header = Row::new(["Shipment", "Details", "Status", "Amount", "Date"].map(|label| {
        Cell::from(label).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    }));
    let rows = visible.iter().enumerate().map(|(row_index, shipment)| {
        let base = if row_index == view_data.shipment.cursor {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };
        let presentation = status_presentation(shipment.status);
        Row::new(vec![
            Cell::from(shipment.title.clone()).style(base),
            Cell::from(shipment.description.clone()).style(base),
            Cell::from(presentation.label).style(base.fg(presentation.color)),
            Cell::from(shipment.amount.clone()).style(base),
            Cell::from(shipment.date.clone()).style(base),
        ])
    });
    let widths = vec![
        Constraint::Min(16),
        Constraint::Min(30),
        Constraint::Min(11),
        Constraint::Min(10),
        Constraint::Min(12),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .title(format!(
                    "{} ({})",
                    status_presentation(view_data.shipment.selected_status).label,
                    visible.len()
                ))
                .borders(Borders::ALL),
        );
    frame.render_widget(table, layout[1]);
}

fn chip_label(status: ShipmentStatus, counts: &StatusCounts) -> String {
    let presentation = status_presentation(status);
    let count = match status {
        ShipmentStatus::All => counts.total(),
        concrete => counts.count_for(concrete),
    };
    format!("{} {count}", presentation.label)
}

fn render_profile(frame: &mut ratatui::Frame<'_>, area: Rect, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(1)])
        .split(area);

    let header = Paragraph::new(render_profile_header_text())
        .block(Block::default().title("Profile").borders(Borders::ALL));
    frame.render_widget(header, layout[0]);

    let rows = PROFILE_MENU
        .iter()
        .enumerate()
        .map(|(index, (title, subtitle, logout))| {
            let mut style = Style::default();
            if *logout {
                style = style.fg(Color::Red);
            }
            if index == view_data.profile.menu_cursor {
                style = style.bg(Color::DarkGray);
            }
            Row::new(vec![
                Cell::from(*title).style(style),
                Cell::from(*subtitle).style(style),
            ])
        });
    let widths = vec![Constraint::Min(22), Constraint::Min(32)];
    let menu = Table::new(rows, widths).column_spacing(1).block(
        Block::default()
            .title("Account Settings")
            .borders(Borders::ALL),
    );
    frame.render_widget(menu, layout[1]);
}

fn render_profile_header_text() -> String {
    [
        "John Doe".to_owned(),
        "john.doe@gmail.com".to_owned(),
        "+1 (555) 123-4567".to_owned(),
        String::new(),
        PROFILE_STATS
            .iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<String>>()
            .join(" | "),
        String::new(),
        "Edit Profile".to_owned(),
    ]
    .join("\n")
}

fn render_estimate_overlay_text(amount: i64) -> String {
    [
        "🚛".to_owned(),
        String::new(),
        "Total Estimated Amount".to_owned(),
        format!("${amount} USD"),
        String::new(),
        "This amount is estimated, this will vary of you".to_owned(),
        "change your location or weight".to_owned(),
        String::new(),
        "[enter] Done".to_owned(),
    ]
    .join("\n")
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    // Overlays suppress the status/keybinding bar.
    if status_hidden_by_overlay(view_data) {
        return String::new();
    }

    let mode = match state.mode {
        AppMode::Nav => "NAV",
        AppMode::Edit => "EDIT",
    };
    let mut default = format!(
        "1-5 screens | b/f cycle | / search | esc back | {} | ? help | ctrl+q quit",
        screen_hint(state.current_screen)
    );
    if state.mode == AppMode::Edit && state.current_screen == Screen::Calculate {
        default = format!(
            "field: {} | {default}",
            DESTINATION_FIELDS[view_data.calculate.field_index]
        );
    }
    match &state.status_line {
        Some(status) => format!("{mode} | {status} | {default}"),
        None => format!("{mode} | {default}"),
    }
}

fn status_hidden_by_overlay(view_data: &ViewData) -> bool {
    view_data.help_visible || view_data.calculate.estimate.visible
}

fn screen_hint(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => "j/k vehicles",
        Screen::Search => "i type j/k results",
        Screen::Calculate => "i type tab field h/l pack j/k+space categories enter calc",
        Screen::Shipment => "h/l filter j/k rows",
        Screen::Profile => "j/k menu",
    }
}

fn help_overlay_text() -> &'static str {
    "global: ctrl+q quit | ? help | esc back (ignored on home)\n\
nav: 1-5 home/search/calculate/shipment/profile | b/f prev/next screen | / search\n\
home: j/k vehicles\n\
search: i edit query | j/k results\n\
calculate: i edit field | tab/shift+tab field | h/l packaging | j/k categories | space toggle | enter calculate\n\
estimate: enter/esc/d done\n\
shipment: h/l status filter | j/k rows\n\
profile: j/k menu\n\
edit: type/backspace | ctrl+u clear | enter/esc back to nav"
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::{
        AppRuntime, DESTINATION_FIELDS, EstimateUiState, InternalEvent, PACKAGING_OPTIONS,
        PROFILE_MENU, VEHICLES, ViewData, animated_amount, chip_label, handle_key_event,
        help_overlay_text, process_internal_events, render_calculate_text,
        render_estimate_overlay_text, render_home_text, render_search_text, search_results,
        status_presentation, status_text, visible_shipments,
    };
    use anyhow::{Result, bail};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use movemate_app::{
        AppCommand, AppMode, AppState, Category, Screen, SearchEntry, Shipment, ShipmentStatus,
        sample_categories, sample_search_entries, sample_shipments, status_counts,
    };
    use ratatui::style::Color;
    use std::sync::mpsc;
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct TestRuntime {
        fail_search: bool,
    }

    impl AppRuntime for TestRuntime {
        fn load_search_entries(&mut self) -> Result<Vec<SearchEntry>> {
            if self.fail_search {
                bail!("search entries unavailable");
            }
            Ok(sample_search_entries())
        }

        fn load_shipments(&mut self) -> Result<Vec<Shipment>> {
            Ok(sample_shipments())
        }

        fn load_categories(&mut self) -> Result<Vec<Category>> {
            Ok(sample_categories())
        }
    }

    fn internal_tx() -> mpsc::Sender<InternalEvent> {
        let (tx, _rx) = mpsc::channel();
        tx
    }

    fn press(
        state: &mut AppState,
        runtime: &mut TestRuntime,
        view_data: &mut ViewData,
        tx: &mpsc::Sender<InternalEvent>,
        code: KeyCode,
    ) -> bool {
        handle_key_event(state, runtime, view_data, tx, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_chars(
        state: &mut AppState,
        runtime: &mut TestRuntime,
        view_data: &mut ViewData,
        tx: &mpsc::Sender<InternalEvent>,
        text: &str,
    ) {
        for ch in text.chars() {
            press(state, runtime, view_data, tx, KeyCode::Char(ch));
        }
    }

    #[test]
    fn ctrl_q_requests_quit() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        let should_quit = handle_key_event(
            &mut state,
            &mut runtime,
            &mut view_data,
            &tx,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        assert!(should_quit);
    }

    #[test]
    fn esc_on_home_is_ignored() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Esc);
        assert_eq!(state.current_screen, Screen::Home);
        assert!(state.history.is_empty());
    }

    #[test]
    fn esc_returns_to_the_previous_screen() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('3'));
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('4'));
        assert_eq!(state.current_screen, Screen::Shipment);

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Esc);
        assert_eq!(state.current_screen, Screen::Calculate);
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Esc);
        assert_eq!(state.current_screen, Screen::Home);
    }

    #[test]
    fn number_keys_push_navigation_history() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('2'));
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('5'));
        assert_eq!(state.current_screen, Screen::Profile);
        assert_eq!(state.history, vec![Screen::Home, Screen::Search]);
    }

    #[test]
    fn repeat_navigation_keeps_pushing_duplicates() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        for _ in 0..10 {
            press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('2'));
        }
        assert_eq!(state.history.len(), 10);
        assert!(state.history[1..].iter().all(|screen| *screen == Screen::Search));
    }

    #[test]
    fn slash_opens_search_from_any_screen() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('5'));
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('/'));
        assert_eq!(state.current_screen, Screen::Search);
        assert_eq!(view_data.search.entries.len(), 6);
    }

    #[test]
    fn cycle_keys_wrap_around_the_screen_order() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('b'));
        assert_eq!(state.current_screen, Screen::Profile);
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('f'));
        assert_eq!(state.current_screen, Screen::Home);
    }

    #[test]
    fn typing_narrows_search_results() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('2'));
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('i'));
        assert_eq!(state.mode, AppMode::Edit);

        type_chars(&mut state, &mut runtime, &mut view_data, &tx, "macbook");
        let results = search_results(&view_data.search);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Macbook pro M2");
    }

    #[test]
    fn search_cursor_clamps_when_results_shrink() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('2'));
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('j'));
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('j'));
        assert_eq!(view_data.search.cursor, 2);

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('i'));
        type_chars(&mut state, &mut runtime, &mut view_data, &tx, "dell");
        assert_eq!(search_results(&view_data.search).len(), 1);
        assert_eq!(view_data.search.cursor, 0);
    }

    #[test]
    fn ctrl_u_clears_the_query() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('2'));
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('i'));
        type_chars(&mut state, &mut runtime, &mut view_data, &tx, "sony");
        handle_key_event(
            &mut state,
            &mut runtime,
            &mut view_data,
            &tx,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        );
        assert!(view_data.search.query.is_empty());
        assert_eq!(search_results(&view_data.search).len(), 6);
    }

    #[test]
    fn reentering_search_starts_from_a_clean_query() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('2'));
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('i'));
        type_chars(&mut state, &mut runtime, &mut view_data, &tx, "lenovo");
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Esc);
        assert_eq!(state.mode, AppMode::Nav);
        assert_eq!(view_data.search.query, "lenovo");

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Esc);
        assert_eq!(state.current_screen, Screen::Home);
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('2'));
        assert!(view_data.search.query.is_empty());
        assert_eq!(view_data.search.cursor, 0);
    }

    #[test]
    fn navigation_leaves_edit_mode() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('2'));
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('i'));
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Esc);
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Esc);
        assert_eq!(state.mode, AppMode::Nav);
        assert_eq!(state.current_screen, Screen::Home);
    }

    #[test]
    fn tab_cycles_destination_fields_and_wraps() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('3'));
        assert_eq!(view_data.calculate.field_index, 0);
        for _ in 0..DESTINATION_FIELDS.len() {
            press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Tab);
        }
        assert_eq!(view_data.calculate.field_index, 0);

        handle_key_event(
            &mut state,
            &mut runtime,
            &mut view_data,
            &tx,
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
        );
        assert_eq!(view_data.calculate.field_index, DESTINATION_FIELDS.len() - 1);
    }

    #[test]
    fn edit_mode_types_into_the_focused_field() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('3'));
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('i'));
        type_chars(&mut state, &mut runtime, &mut view_data, &tx, "Chicago");
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Tab);
        type_chars(&mut state, &mut runtime, &mut view_data, &tx, "Dallas");
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Tab);
        type_chars(&mut state, &mut runtime, &mut view_data, &tx, "25");

        assert_eq!(view_data.calculate.sender_location, "Chicago");
        assert_eq!(view_data.calculate.receiver_location, "Dallas");
        assert_eq!(view_data.calculate.approx_weight, "25");
    }

    #[test]
    fn packaging_cycles_with_wraparound() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('3'));
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('h'));
        assert_eq!(view_data.calculate.packaging_index, PACKAGING_OPTIONS.len() - 1);
        assert_eq!(state.status_line.as_deref(), Some("packaging: Tube"));

        for _ in 0..PACKAGING_OPTIONS.len() {
            press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('l'));
        }
        assert_eq!(view_data.calculate.packaging_index, PACKAGING_OPTIONS.len() - 1);
    }

    #[test]
    fn space_toggles_the_category_under_the_cursor() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('3'));
        for _ in 0..3 {
            press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('j'));
        }
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char(' '));
        assert!(view_data.calculate.categories[3].selected);
        assert_eq!(view_data.calculate.categories[3].name, "Food");
        assert_eq!(state.status_line.as_deref(), Some("Food selected"));

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char(' '));
        assert!(!view_data.calculate.categories[3].selected);
        assert_eq!(state.status_line.as_deref(), Some("Food cleared"));
    }

    #[test]
    fn enter_opens_the_estimate_dialog() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('3'));
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Enter);
        assert!(view_data.calculate.estimate.visible);
        assert!(view_data.calculate.estimate.opened_at.is_some());
    }

    #[test]
    fn estimate_dialog_swallows_keys_until_closed() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('3'));
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Enter);
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('1'));
        assert_eq!(state.current_screen, Screen::Calculate);
        assert!(view_data.calculate.estimate.visible);

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Esc);
        assert_eq!(view_data.calculate.estimate, EstimateUiState::default());
        assert_eq!(state.current_screen, Screen::Calculate);
    }

    #[test]
    fn estimate_submits_from_edit_mode_too() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('3'));
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('i'));
        type_chars(&mut state, &mut runtime, &mut view_data, &tx, "Boston");
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Enter);
        assert!(view_data.calculate.estimate.visible);
        assert_eq!(view_data.calculate.sender_location, "Boston");
    }

    #[test]
    fn animated_amount_is_zero_at_start_and_target_at_completion() {
        let total = Duration::from_secs(1);
        assert_eq!(animated_amount(1460, Duration::ZERO, total), 0);
        assert_eq!(animated_amount(1460, Duration::from_millis(500), total), 730);
        assert_eq!(animated_amount(1460, total, total), 1460);
        assert_eq!(animated_amount(1460, Duration::from_secs(2), total), 1460);
        assert_eq!(animated_amount(1460, Duration::ZERO, Duration::ZERO), 1460);
    }

    #[test]
    fn animated_amount_is_monotone() {
        let total = Duration::from_millis(800);
        let mut last = 0;
        for step in 0..=10 {
            let amount = animated_amount(1460, Duration::from_millis(step * 100), total);
            assert!(amount >= last);
            last = amount;
        }
        assert_eq!(last, 1460);
    }

    #[test]
    fn chip_cycle_filters_the_shipment_list() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('4'));
        assert_eq!(visible_shipments(&view_data.shipment).len(), 8);

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('l'));
        assert_eq!(view_data.shipment.selected_status, ShipmentStatus::Completed);
        assert_eq!(state.status_line.as_deref(), Some("filter: Completed"));
        let visible = visible_shipments(&view_data.shipment);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|shipment| shipment.status == ShipmentStatus::Completed));
    }

    #[test]
    fn chip_cycle_wraps_and_resets_the_cursor() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('4'));
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('j'));
        assert_eq!(view_data.shipment.cursor, 1);

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('h'));
        assert_eq!(view_data.shipment.selected_status, ShipmentStatus::Cancelled);
        assert_eq!(view_data.shipment.cursor, 0);
    }

    #[test]
    fn shipment_cursor_stays_inside_the_filtered_list() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('4'));
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('l'));
        for _ in 0..5 {
            press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('j'));
        }
        assert_eq!(view_data.shipment.cursor, 1);
    }

    #[test]
    fn chip_label_uses_total_for_all_and_zero_for_missing() {
        let counts = status_counts(&sample_shipments());
        assert_eq!(chip_label(ShipmentStatus::All, &counts), "All 8");
        assert_eq!(chip_label(ShipmentStatus::Pending, &counts), "Pending 2");

        let empty = status_counts(&[]);
        assert_eq!(chip_label(ShipmentStatus::All, &empty), "All 0");
        assert_eq!(chip_label(ShipmentStatus::Cancelled, &empty), "Cancelled 0");
    }

    #[test]
    fn help_overlay_toggles_and_blocks_other_keys() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('?'));
        assert!(view_data.help_visible);

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('4'));
        assert!(view_data.help_visible);
        assert_eq!(state.current_screen, Screen::Home);

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('?'));
        assert!(!view_data.help_visible);
    }

    #[test]
    fn load_failure_surfaces_on_the_status_line() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime { fail_search: true };
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('2'));
        assert_eq!(state.current_screen, Screen::Search);
        let status = state.status_line.as_deref().unwrap_or_default();
        assert!(status.contains("load failed"));
        assert!(status.contains("search entries unavailable"));
    }

    #[test]
    fn stale_status_clears_are_dropped() {
        let mut state = AppState::default();
        let mut view_data = ViewData::default();
        let (tx, rx) = mpsc::channel();

        state.dispatch(AppCommand::SetStatus("filter: Pending".to_owned()));
        view_data.status_token = 2;

        tx.send(InternalEvent::ClearStatus { token: 1 }).expect("send");
        process_internal_events(&mut state, &mut view_data, &rx);
        assert_eq!(state.status_line.as_deref(), Some("filter: Pending"));

        tx.send(InternalEvent::ClearStatus { token: 2 }).expect("send");
        process_internal_events(&mut state, &mut view_data, &rx);
        assert_eq!(state.status_line, None);
    }

    #[test]
    fn status_text_shows_mode_status_and_hints() {
        let state = AppState {
            status_line: Some("filter: All".to_owned()),
            ..AppState::default()
        };
        let view_data = ViewData::default();

        let text = status_text(&state, &view_data);
        assert!(text.starts_with("NAV | filter: All | "));
        assert!(text.contains("j/k vehicles"));
        assert!(text.contains("ctrl+q quit"));
    }

    #[test]
    fn status_text_names_the_focused_field_in_edit_mode() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('3'));
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('i'));
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Tab);

        let text = status_text(&state, &view_data);
        assert!(text.starts_with("EDIT | "));
        assert!(text.contains("field: Receiver location"));
    }

    #[test]
    fn status_bar_is_hidden_while_an_overlay_is_open() {
        let state = AppState::default();
        let mut view_data = ViewData {
            help_visible: true,
            ..ViewData::default()
        };
        assert_eq!(status_text(&state, &view_data), "");

        view_data.help_visible = false;
        view_data.calculate.estimate.visible = true;
        assert_eq!(status_text(&state, &view_data), "");
    }

    #[test]
    fn render_home_text_lists_vehicles_with_cursor() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        let text = render_home_text(&view_data);
        assert!(text.contains("Wertheimer, Illinois"));
        assert!(text.contains("NEJ200889341222231"));
        assert!(text.contains("> Ocean freight"));

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('j'));
        let text = render_home_text(&view_data);
        assert!(text.contains("> Cargo freight"));
        assert!(!text.contains("> Ocean freight"));
        assert_eq!(VEHICLES.len(), 3);
    }

    #[test]
    fn render_search_text_shows_placeholder_until_typed() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('2'));
        let text = render_search_text(&state, &view_data);
        assert!(text.contains("Search shipments..."));
        assert!(text.contains("Macbook pro M2"));

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('i'));
        type_chars(&mut state, &mut runtime, &mut view_data, &tx, "sony");
        let text = render_search_text(&state, &view_data);
        assert!(text.contains("query: sony"));
        assert!(!text.contains("Search shipments..."));
        assert!(text.contains("Paris -> India"));
    }

    #[test]
    fn render_calculate_text_marks_packaging_and_categories() {
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let tx = internal_tx();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('3'));
        let text = render_calculate_text(&view_data);
        assert!(text.contains("[📦 Box]"));
        assert!(text.contains("[ ] Food"));
        assert!(text.contains("> Sender location:"));

        for _ in 0..3 {
            press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('j'));
        }
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char(' '));
        let text = render_calculate_text(&view_data);
        assert!(text.contains("[x] Food"));
    }

    #[test]
    fn render_estimate_overlay_text_shows_the_amount() {
        let text = render_estimate_overlay_text(1460);
        assert!(text.contains("Total Estimated Amount"));
        assert!(text.contains("$1460 USD"));
        assert!(text.contains("this will vary of you"));
        assert!(text.contains("Done"));
    }

    #[test]
    fn status_presentation_keeps_labels_and_palette_out_of_the_data_model() {
        assert_eq!(status_presentation(ShipmentStatus::All).label, "All");
        assert_eq!(status_presentation(ShipmentStatus::InProgress).label, "In progress");
        assert_eq!(status_presentation(ShipmentStatus::All).background, Color::Magenta);
        assert_eq!(status_presentation(ShipmentStatus::Completed).color, Color::Green);
        assert_eq!(status_presentation(ShipmentStatus::Cancelled).color, Color::Red);
    }

    #[test]
    fn help_overlay_text_covers_every_screen() {
        let help = help_overlay_text();
        assert!(help.contains("ctrl+q quit"));
        assert!(help.contains("h/l status filter"));
        assert!(help.contains("space toggle"));
        assert!(help.contains("j/k menu"));
        assert_eq!(PROFILE_MENU.len(), 8);
    }
}
