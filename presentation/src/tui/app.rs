//! TUI application — main loop with background tasks
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                 advisor_task (tokio::spawn)
//!   ├─ crossterm EventStream              ├─ request_rx.recv()
//!   ├─ event_rx (AdvisorEvent)            ├─ gateway.ask()
//!   ├─ catalog_rx (CatalogLoad)           └─ event_tx.send(...)
//!   └─ tick_interval
//!        └── request_tx ──────────────>──┘
//! ```
//!
//! The loop is the only writer of [`TuiState`]; background tasks report
//! through channels and their results are applied here, epoch-checked.

use super::mode::{Action, InputMode, KeyHandler};
use super::nav::{ChatEntry, NavTarget, Screen};
use super::screens;
use super::state::TuiState;
use super::widgets::{
    header::HeaderWidget, input::InputWidget, status_bar::StatusBarWidget, MainLayout,
};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, EventStream, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::stream::StreamExt;
use poliscope_application::{
    advisor_task, AdvisorEvent, AdvisorGateway, AdvisorRequest, CatalogLoad, CatalogSource,
    LoadCatalogUseCase,
};
use poliscope_domain::{Policy, PolicyType};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

/// Main loop tick, drives carousel rotation and flash expiry
const TICK_MS: u64 = 250;

/// Budget step for +/- on the home screen
const BUDGET_STEP: u32 = 500;

/// Main TUI application
pub struct TuiApp {
    request_tx: mpsc::UnboundedSender<AdvisorRequest>,
    event_rx: mpsc::UnboundedReceiver<AdvisorEvent>,
    catalog_rx: mpsc::UnboundedReceiver<CatalogLoad>,
    initial_policies: Vec<Policy>,
    rotation_ticks: u32,
    _advisor_handle: tokio::task::JoinHandle<()>,
    _catalog_handle: tokio::task::JoinHandle<()>,
}

impl TuiApp {
    /// Wire the app to its background tasks and kick off the catalog load.
    pub fn new<G, S>(
        gateway: Arc<G>,
        source: Arc<S>,
        fallback: Vec<Policy>,
        question_rotation_secs: u64,
    ) -> Self
    where
        G: AdvisorGateway + 'static,
        S: CatalogSource + 'static,
    {
        let (request_tx, request_rx) = mpsc::unbounded_channel::<AdvisorRequest>();
        let (event_tx, event_rx) = mpsc::unbounded_channel::<AdvisorEvent>();
        let (catalog_tx, catalog_rx) = mpsc::unbounded_channel::<CatalogLoad>();

        let advisor_handle = tokio::spawn(advisor_task(gateway, request_rx, event_tx));

        let use_case = LoadCatalogUseCase::new(source, fallback.clone());
        let catalog_handle = tokio::spawn(async move {
            let load = use_case.execute().await;
            let _ = catalog_tx.send(load);
        });

        let rotation_ticks = ((question_rotation_secs.max(1) * 1000) / TICK_MS) as u32;

        Self {
            request_tx,
            event_rx,
            catalog_rx,
            initial_policies: fallback,
            rotation_ticks,
            _advisor_handle: advisor_handle,
            _catalog_handle: catalog_handle,
        }
    }

    /// Run the TUI main loop.
    pub async fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Restore the terminal even when rendering panics
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(info);
        }));

        let mut state = TuiState::new(std::mem::take(&mut self.initial_policies), true, self.rotation_ticks);
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(TICK_MS));

        loop {
            terminal.draw(|frame| render(frame, &state))?;

            if state.should_quit {
                break;
            }

            tokio::select! {
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(&mut state, term_event);
                }

                Some(event) = self.event_rx.recv() => {
                    if !state.apply_advisor_event(event) {
                        debug!("discarded stale advisor reply");
                    }
                }

                Some(load) = self.catalog_rx.recv() => {
                    debug!(
                        policies = load.policies.len(),
                        from_fallback = load.from_fallback,
                        "catalog ready"
                    );
                    state.apply_catalog(load.policies, load.from_fallback);
                }

                _ = tick.tick() => {
                    if state.screen == Screen::PolicyAdvisorChat {
                        state.carousel.tick();
                    }
                    state.expire_flash(Duration::from_secs(5));
                }
            }
        }

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn handle_terminal_event(&self, state: &mut TuiState, event: crossterm::event::Event) {
        match event {
            crossterm::event::Event::Key(key) => {
                if state.show_help {
                    state.show_help = false;
                    return;
                }
                let action = KeyHandler::handle(state.mode, key);
                self.handle_action(state, action);
            }
            crossterm::event::Event::Mouse(mouse) => {
                handle_mouse(state, mouse);
            }
            _ => {}
        }
    }

    fn handle_action(&self, state: &mut TuiState, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => state.should_quit = true,
            Action::ShowHelp => state.show_help = true,
            Action::Back => state.go_back(),
            Action::EnterInsert => {
                if accepts_text(state.screen) {
                    state.mode = InputMode::Insert;
                }
            }
            Action::ExitToNormal => state.mode = InputMode::Normal,

            Action::InsertChar(c) => insert_char(state, c),
            Action::DeleteChar => delete_char(state),
            Action::CursorLeft => state.cursor_left(),
            Action::CursorRight => state.cursor_right(),
            Action::CursorStart => state.input_cursor = 0,
            Action::CursorEnd => state.input_cursor = state.input.len(),
            Action::NextField => state.form.next_field(),

            Action::Up => handle_up(state),
            Action::Down => handle_down(state),
            Action::Left => {
                if state.screen == Screen::PolicyAdvisorChat {
                    state.carousel.prev();
                }
            }
            Action::Right => {
                if state.screen == Screen::PolicyAdvisorChat {
                    state.carousel.next();
                }
            }

            Action::Submit => self.handle_submit(state),
            Action::Key(c) => self.handle_screen_key(state, c),
        }
    }

    fn handle_submit(&self, state: &mut TuiState) {
        match state.screen {
            Screen::PolicyAdvisorChat => {
                if state.mode == InputMode::Normal {
                    if state.show_history_sidebar {
                        // Enter on the sidebar switches sessions
                        let ids = state.sessions.ids().to_vec();
                        if let Some(id) = ids.get(state.history_cursor) {
                            state.sessions.set_current(id);
                        }
                    } else {
                        state.mode = InputMode::Insert;
                    }
                    return;
                }
                let text = state.take_input();
                if !text.trim().is_empty() {
                    if let Some(request) = state.submit_question(text.trim()) {
                        let _ = self.request_tx.send(request);
                    }
                }
            }
            Screen::Home => {
                if state.selected_type.is_some() {
                    let policy_type = state.selected_type.unwrap_or(PolicyType::Health);
                    state.navigate(NavTarget::Listing(policy_type));
                }
            }
            Screen::PolicyListing => {
                let policies = state.visible_policies();
                if let Some(policy) = policies.get(state.list_cursor) {
                    let policy_id = policy.id.clone();
                    state.navigate(NavTarget::Details { policy_id });
                }
            }
            Screen::SignUp | Screen::Login => {
                if state.form.all_filled() {
                    let name = state.form.values[0].trim().to_string();
                    state.logged_in_user = Some(name);
                    state.set_flash("Welcome! You are signed in.");
                    state.navigate(NavTarget::Home);
                } else if state.mode == InputMode::Insert {
                    state.form.next_field();
                } else {
                    state.set_flash("Please fill in every field.");
                }
            }
            Screen::UploadDocument => {
                let name = state
                    .form
                    .values
                    .first()
                    .map(|v| v.trim().to_string())
                    .unwrap_or_default();
                if name.is_empty() {
                    state.set_flash("Enter a document name first.");
                } else {
                    state.uploaded_document = Some(name);
                    state.navigate(NavTarget::Chat(ChatEntry::Direct));
                }
            }
            Screen::Payment => state.confirm_payment(),
            Screen::PolicyDetails => {}
        }
    }

    fn handle_screen_key(&self, state: &mut TuiState, c: char) {
        match state.screen {
            Screen::Home => match c {
                '1' => state.selected_type = Some(PolicyType::Health),
                '2' => state.selected_type = Some(PolicyType::Term),
                '3' => state.selected_type = Some(PolicyType::Motor),
                '+' | '=' => state.budget = state.budget.saturating_add(BUDGET_STEP),
                '-' => state.budget = state.budget.saturating_sub(BUDGET_STEP).max(BUDGET_STEP),
                'c' => {
                    let entry = if state.selected_type.is_some() {
                        ChatEntry::FromHome
                    } else {
                        ChatEntry::Direct
                    };
                    state.navigate(NavTarget::Chat(entry));
                }
                'u' => state.navigate(NavTarget::UploadDocument),
                's' => state.navigate(NavTarget::SignUp),
                'l' => state.navigate(NavTarget::Login),
                _ => {}
            },
            Screen::PolicyListing => match c {
                ' ' => {
                    let policies = state.visible_policies();
                    if let Some(policy) = policies.get(state.list_cursor) {
                        let policy_id = policy.id.clone();
                        state.toggle_compare(&policy_id);
                    }
                }
                'o' => state.sort = state.sort.next(),
                'a' => {
                    let policies = state.visible_policies();
                    if let Some(policy) = policies.get(state.list_cursor) {
                        let policy_id = policy.id.clone();
                        state.navigate(NavTarget::Chat(ChatEntry::WithPolicy(policy_id)));
                    }
                }
                'C' => {
                    if state.comparison.is_empty() {
                        state.set_flash("Select policies to compare first.");
                    } else {
                        let ids: Vec<String> = state
                            .comparison
                            .policies()
                            .iter()
                            .map(|p| p.id.clone())
                            .collect();
                        state.navigate(NavTarget::Chat(ChatEntry::WithComparison(ids)));
                    }
                }
                'p' => state.navigate(NavTarget::Payment),
                _ => {}
            },
            Screen::PolicyDetails => match c {
                ' ' => {
                    if let Some(policy_id) = state.selected_policy_id.clone() {
                        state.toggle_compare(&policy_id);
                    }
                }
                'a' => {
                    if let Some(policy_id) = state.selected_policy_id.clone() {
                        state.navigate(NavTarget::Chat(ChatEntry::WithPolicy(policy_id)));
                    }
                }
                _ => {}
            },
            Screen::PolicyAdvisorChat => match c {
                's' => {
                    if let Some(question) = state.carousel.current().map(str::to_string) {
                        state.input = question;
                        state.input_cursor = state.input.len();
                        state.mode = InputMode::Insert;
                    }
                }
                'n' => state.open_new_session(),
                'h' => state.show_history_sidebar = !state.show_history_sidebar,
                'u' => state.navigate(NavTarget::UploadDocument),
                'p' => state.navigate(NavTarget::Payment),
                _ => {}
            },
            _ => {}
        }
    }
}

/// Screens whose Insert mode edits form fields rather than the chat input
fn is_form_screen(screen: Screen) -> bool {
    matches!(
        screen,
        Screen::SignUp | Screen::Login | Screen::UploadDocument
    )
}

fn accepts_text(screen: Screen) -> bool {
    screen == Screen::PolicyAdvisorChat || is_form_screen(screen)
}

fn insert_char(state: &mut TuiState, c: char) {
    if is_form_screen(state.screen) {
        if let Some(value) = state.form.active_value_mut() {
            value.push(c);
        }
    } else {
        state.insert_char(c);
    }
}

fn delete_char(state: &mut TuiState) {
    if is_form_screen(state.screen) {
        if let Some(value) = state.form.active_value_mut() {
            value.pop();
        }
    } else {
        state.delete_char();
    }
}

fn handle_up(state: &mut TuiState) {
    match state.screen {
        Screen::PolicyListing => {
            state.list_cursor = state.list_cursor.saturating_sub(1);
        }
        Screen::PolicyAdvisorChat if state.show_history_sidebar => {
            state.history_cursor = state.history_cursor.saturating_sub(1);
        }
        _ => state.scroll = state.scroll.saturating_sub(1),
    }
}

fn handle_down(state: &mut TuiState) {
    match state.screen {
        Screen::PolicyListing => {
            let max = state.visible_policies().len().saturating_sub(1);
            state.list_cursor = (state.list_cursor + 1).min(max);
        }
        Screen::PolicyAdvisorChat if state.show_history_sidebar => {
            let max = state.sessions.len().saturating_sub(1);
            state.history_cursor = (state.history_cursor + 1).min(max);
        }
        _ => state.scroll = state.scroll.saturating_add(1),
    }
}

fn handle_mouse(state: &mut TuiState, mouse: MouseEvent) {
    if state.screen != Screen::PolicyAdvisorChat {
        return;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => state.carousel.begin_drag(mouse.column),
        MouseEventKind::Drag(MouseButton::Left) => state.carousel.update_drag(mouse.column),
        MouseEventKind::Up(MouseButton::Left) => state.carousel.end_drag(),
        MouseEventKind::ScrollUp => state.scroll = state.scroll.saturating_sub(2),
        MouseEventKind::ScrollDown => state.scroll = state.scroll.saturating_add(2),
        _ => {}
    }
}

/// Render the current screen into the main layout.
fn render(frame: &mut ratatui::Frame, state: &TuiState) {
    let with_input = state.screen == Screen::PolicyAdvisorChat;
    let layout = MainLayout::compute(frame.area(), with_input);

    frame.render_widget(HeaderWidget::new(state), layout.header);

    match state.screen {
        Screen::Home => screens::home::render(frame, layout.body, state),
        Screen::SignUp => {
            screens::auth::render(frame, layout.body, state, &screens::auth::SIGN_UP_FIELDS, "Sign Up")
        }
        Screen::Login => {
            screens::auth::render(frame, layout.body, state, &screens::auth::LOGIN_FIELDS, "Log In")
        }
        Screen::PolicyAdvisorChat => screens::chat::render(frame, layout.body, state),
        Screen::PolicyListing => screens::listing::render(frame, layout.body, state),
        Screen::PolicyDetails => screens::detail::render(frame, layout.body, state),
        Screen::UploadDocument => screens::upload::render(frame, layout.body, state),
        Screen::Payment => screens::payment::render(frame, layout.body, state),
    }

    if let Some(input_area) = layout.input {
        frame.render_widget(InputWidget::new(state, "Ask the advisor"), input_area);
    }

    frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

    if state.show_help {
        let help_area = MainLayout::centered_overlay(70, 70, frame.area());
        frame.render_widget(ratatui::widgets::Clear, help_area);
        render_help(frame, help_area);
    }
}

fn render_help(frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
    use ratatui::style::{Color, Modifier, Style};
    use ratatui::text::{Line, Span};
    use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

    let lines = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Everywhere:"),
        Line::from("  Esc    Back one screen"),
        Line::from("  q      Quit (Normal mode)"),
        Line::from("  Ctrl+C Quit"),
        Line::from("  ?      Toggle this help"),
        Line::from(""),
        Line::from("Home:"),
        Line::from("  1/2/3  Choose Health / Term / Motor"),
        Line::from("  +/-    Adjust budget"),
        Line::from("  Enter  Browse policies of the chosen type"),
        Line::from("  c      Chat with the advisor"),
        Line::from("  u      Upload a document   s/l  Sign up / log in"),
        Line::from(""),
        Line::from("Listing:"),
        Line::from("  j/k    Move    Enter  Details    space  Compare"),
        Line::from("  o      Cycle sort    a  Ask about selection"),
        Line::from("  C      Chat about comparison    p  Payment"),
        Line::from(""),
        Line::from("Chat:"),
        Line::from("  i      Type a question    Enter  Send"),
        Line::from("  s      Use suggested question    Left/Right  Browse them"),
        Line::from("  n      New chat    h  History sidebar"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().fg(Color::Cyan));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
