//! App — component-based event loop.
//!
//! Architecture:
//! - `App` owns all components and `AppState` (the session plus UI data).
//! - A `tokio::mpsc` channel carries `AppMessage`s in from the terminal
//!   reader and from the settle timer.
//! - The loop draws a frame, then awaits the next message or UI tick.
//! - Components return `Vec<Action>`; App applies each Action to the session
//!   synchronously, so every intent runs to completion before the next.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use ratatui::crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Terminal,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use tv_core::config::Config;
use tv_core::navigator::Navigator;
use tv_core::selection::SettleTicket;
use tv_core::{Display, Session};

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
    components::{
        category_bar::CategoryBar,
        channel_list::{ChannelList, ListMode},
        header::Header,
        help_overlay::HelpOverlay,
        player_panel::PlayerPanel,
        shelves::Shelves,
    },
    focus::FocusRing,
    settle::SettleTimer,
    widgets::{status_bar, status_bar::InputMode, toast::ToastManager},
};

/// Messages flowing into the event loop.
#[derive(Debug)]
pub enum AppMessage {
    Event(Event),
    Settled(SettleTicket),
}

const BROWSE_PANES: [ComponentId; 2] = [ComponentId::ChannelList, ComponentId::Shelves];
const WATCH_PANES: [ComponentId; 2] = [ComponentId::Player, ComponentId::ChannelList];

/// Where each pane was drawn last frame, for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default)]
struct PaneAreas {
    header: Rect,
    category_bar: Rect,
    left: Rect,
    right: Rect,
}

pub struct App {
    state: AppState,
    header: Header,
    category_bar: CategoryBar,
    channel_list: ChannelList,
    shelves: Shelves,
    player: PlayerPanel,
    help_overlay: HelpOverlay,
    focus: FocusRing,
    toast: ToastManager,
    settle: SettleTimer,
    settle_delay: Duration,
    navigator: Arc<dyn Navigator>,
    msg_tx: mpsc::Sender<AppMessage>,
    msg_rx: Option<mpsc::Receiver<AppMessage>>,
    pane_areas: PaneAreas,
    show_keys_bar: bool,
    should_quit: bool,
    /// Where theme changes are persisted; `None` keeps them in memory.
    config_path: Option<PathBuf>,
}

impl App {
    pub fn new(
        session: Session,
        config: Config,
        config_path: Option<PathBuf>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(256);
        Self {
            state: AppState::new(session, config.ui.dark_mode),
            header: Header::new(),
            category_bar: CategoryBar::new(),
            channel_list: ChannelList::new(),
            shelves: Shelves::new(),
            player: PlayerPanel::new(),
            help_overlay: HelpOverlay::new(),
            focus: FocusRing::new(BROWSE_PANES.to_vec()),
            toast: ToastManager::new(),
            settle: SettleTimer::new(),
            settle_delay: config.player.settle_delay(),
            navigator,
            msg_tx,
            msg_rx: Some(msg_rx),
            pane_areas: PaneAreas::default(),
            show_keys_bar: config.ui.show_keys_bar,
            should_quit: false,
            config_path,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        let mut rx = self
            .msg_rx
            .take()
            .context("event loop is already running")?;

        debug!("run(): enabling raw mode");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        debug!("run(): terminal created, size={:?}", terminal.size());

        // ── Background task: keyboard/mouse events ────────────────────────────
        let event_tx = self.msg_tx.clone();
        tokio::task::spawn_blocking(move || loop {
            match event::read() {
                Ok(ev) => {
                    if event_tx.blocking_send(AppMessage::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        });

        // Toast expiry + spinner animation.
        let mut ui_tick = tokio::time::interval(Duration::from_millis(100));
        ui_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        info!(
            "livetv started: {} channels, settle delay {:?}",
            self.state.session.catalog().len(),
            self.settle_delay
        );

        // ── Main loop ─────────────────────────────────────────────────────────
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal.draw(|f| self.draw(f))?;
            }
            needs_redraw = false;

            if self.should_quit {
                break;
            }

            tokio::select! {
                msg = rx.recv() => {
                    match msg {
                        Some(msg) => needs_redraw = self.handle_message(msg),
                        None => break,
                    }
                }
                _ = ui_tick.tick() => {
                    needs_redraw = self.on_tick();
                }
            }
        }

        // ── Teardown ──────────────────────────────────────────────────────────
        self.settle.cancel();
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        info!("livetv exiting");

        Ok(())
    }

    fn on_tick(&mut self) -> bool {
        let toasts_changed = self.toast.tick();
        let loading = self.state.session.selection().is_loading();
        if loading {
            self.state.spinner_frame = self.state.spinner_frame.wrapping_add(1);
        }
        toasts_changed || loading
    }

    /// Returns whether the screen needs a redraw.
    fn handle_message(&mut self, msg: AppMessage) -> bool {
        match msg {
            AppMessage::Event(Event::Key(key)) => {
                if key.kind == KeyEventKind::Release {
                    return false;
                }
                let actions = self.handle_key(key);
                for action in actions {
                    self.dispatch(action);
                }
                true
            }
            AppMessage::Event(Event::Mouse(event)) => {
                let actions = self.handle_mouse(event);
                let redraw = !actions.is_empty()
                    || matches!(
                        event.kind,
                        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown
                    );
                for action in actions {
                    self.dispatch(action);
                }
                redraw
            }
            AppMessage::Event(Event::Resize(_, _)) => true,
            AppMessage::Event(_) => false,
            AppMessage::Settled(ticket) => {
                let settled = self.state.session.settle(&ticket);
                if !settled {
                    debug!(
                        "ignoring stale settle ticket for {} (gen {})",
                        ticket.channel_id, ticket.generation
                    );
                }
                settled
            }
        }
    }

    // ── Key handling ──────────────────────────────────────────────────────────

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Action> {
        if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
            return vec![Action::Quit];
        }

        // Help overlay captures all keys when visible
        if self.help_overlay.visible {
            return self.help_overlay.handle_key(key, &self.state);
        }

        match key.code {
            KeyCode::Tab => {
                if self.state.input_mode == InputMode::Filter {
                    return vec![Action::CloseFilter, Action::FocusNext];
                }
                return vec![Action::FocusNext];
            }
            KeyCode::BackTab => {
                if self.state.input_mode == InputMode::Filter {
                    return vec![Action::CloseFilter, Action::FocusPrev];
                }
                return vec![Action::FocusPrev];
            }
            _ => {}
        }

        // The search input belongs to the channel list; it gets every key.
        if self.state.input_mode == InputMode::Filter {
            return self.channel_list.handle_key(key, &self.state);
        }

        match key.code {
            KeyCode::Char('q') if key.modifiers == KeyModifiers::NONE => {
                return vec![Action::Quit]
            }
            KeyCode::Char('?') => return vec![Action::ToggleHelp],
            KeyCode::Char('t') => return vec![Action::ToggleTheme],
            KeyCode::Char('K') => return vec![Action::ToggleKeys],
            KeyCode::Char('a') => return vec![Action::ResetCategory],
            KeyCode::Char('[') | KeyCode::Left => return vec![Action::CycleCategory(-1)],
            KeyCode::Char(']') | KeyCode::Right => return vec![Action::CycleCategory(1)],
            KeyCode::Char('/') => {
                return vec![Action::FocusPane(ComponentId::ChannelList), Action::OpenFilter]
            }
            KeyCode::Char(c @ '1'..='9') => {
                let digit = c.to_digit(10).unwrap_or(0);
                return match CategoryBar::by_digit(&self.state, digit) {
                    Some(id) => vec![Action::SetCategory(id)],
                    None => vec![],
                };
            }
            _ => {}
        }

        let s = &self.state;
        match self.focus.current() {
            Some(ComponentId::ChannelList) => self.channel_list.handle_key(key, s),
            Some(ComponentId::Shelves) => self.shelves.handle_key(key, s),
            Some(ComponentId::Player) => self.player.handle_key(key, s),
            _ => vec![],
        }
    }

    // ── Mouse handling ────────────────────────────────────────────────────────

    fn handle_mouse(&mut self, event: MouseEvent) -> Vec<Action> {
        let is_click = matches!(
            event.kind,
            MouseEventKind::Down(_) | MouseEventKind::ScrollUp | MouseEventKind::ScrollDown
        );
        if !is_click {
            return vec![];
        }

        let col = event.column;
        let row = event.row;

        fn hit(r: Rect, col: u16, row: u16) -> bool {
            r.width > 0
                && r.height > 0
                && col >= r.x
                && col < r.x + r.width
                && row >= r.y
                && row < r.y + r.height
        }

        let areas = self.pane_areas;
        let s = &self.state;

        if self.help_overlay.visible {
            return self.help_overlay.handle_mouse(event, areas.left, s);
        }
        if hit(areas.header, col, row) {
            return self.header.handle_mouse(event, areas.header, s);
        }
        if hit(areas.category_bar, col, row) {
            return self.category_bar.handle_mouse(event, areas.category_bar, s);
        }

        let watching = !matches!(s.session.display(), Display::List);
        let (id, area) = if hit(areas.left, col, row) {
            let id = if watching {
                ComponentId::Player
            } else {
                ComponentId::ChannelList
            };
            (id, areas.left)
        } else if hit(areas.right, col, row) {
            let id = if watching {
                ComponentId::ChannelList
            } else {
                ComponentId::Shelves
            };
            (id, areas.right)
        } else {
            return vec![];
        };

        let mut actions = match id {
            ComponentId::ChannelList => self.channel_list.handle_mouse(event, area, s),
            ComponentId::Shelves => self.shelves.handle_mouse(event, area, s),
            ComponentId::Player => self.player.handle_mouse(event, area, s),
            _ => vec![],
        };
        if !self.focus.is_focused(id) && matches!(event.kind, MouseEventKind::Down(_)) {
            actions.insert(0, Action::FocusPane(id));
        }
        actions
    }

    // ── Action dispatcher ─────────────────────────────────────────────────────

    fn dispatch(&mut self, action: Action) {
        self.apply_action(action.clone());

        let secondary: Vec<Action> = {
            let s = &self.state;
            let mut out = Vec::new();
            out.extend(self.channel_list.on_action(&action, s));
            out.extend(self.shelves.on_action(&action, s));
            out.extend(self.player.on_action(&action, s));
            out.extend(self.help_overlay.on_action(&action, s));
            out
        };
        // Depth-limited to one level.
        for a in secondary {
            self.apply_action(a);
        }

        self.sync_layout();
    }

    fn apply_action(&mut self, action: Action) {
        if action != Action::Noop {
            debug!("apply_action: {:?}", action);
        }
        let session = &mut self.state.session;
        match action {
            // ── Channels ──────────────────────────────────────────────────────
            Action::SelectChannel(id) => {
                if let Some(ticket) = session.select_channel(&id) {
                    let tx = self.msg_tx.clone();
                    self.settle
                        .schedule(self.settle_delay, AppMessage::Settled(ticket), tx);
                }
            }
            Action::ToggleFavorite(id) => {
                let Some(name) = session.catalog().channel(&id).map(|c| c.name.clone()) else {
                    return;
                };
                if session.toggle_favorite(&id) {
                    self.toast.info(format!("★ {} added to favorites", name));
                } else {
                    self.toast.info(format!("{} removed from favorites", name));
                }
            }
            Action::OpenExternal(id) => {
                let name = session
                    .catalog()
                    .channel(&id)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| id.clone());
                match session.open_external(&id, self.navigator.as_ref()) {
                    Ok(()) => self.toast.success(format!("opened {} externally", name)),
                    Err(e) => {
                        warn!("open externally failed for {}: {:#}", id, e);
                        self.toast.error(format!("could not open {}: {}", name, e));
                    }
                }
            }
            Action::CopyUrl(text) => {
                match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text.clone())) {
                    Ok(()) => {
                        let display = if text.chars().count() > 40 {
                            format!("{}…", text.chars().take(40).collect::<String>())
                        } else {
                            text
                        };
                        self.toast.success(format!("copied: {}", display));
                    }
                    Err(e) => {
                        warn!("clipboard error: {}", e);
                        self.toast.warning(format!("clipboard unavailable: {}", e));
                    }
                }
            }
            Action::BackToList => {
                if session.back_to_list() {
                    self.settle.cancel();
                }
            }

            // ── Filter/search ─────────────────────────────────────────────────
            Action::SetCategory(id) => {
                session.set_category(&id);
            }
            Action::CycleCategory(offset) => {
                if let Some(id) = CategoryBar::cycled(&self.state, offset) {
                    self.state.session.set_category(&id);
                }
            }
            Action::ResetCategory => {
                session.reset_category();
            }
            Action::OpenFilter => {
                self.state.input_mode = InputMode::Filter;
                self.focus.set(ComponentId::ChannelList);
            }
            Action::CloseFilter => {
                self.state.input_mode = InputMode::Normal;
            }
            Action::SearchChanged(q) => {
                session.set_search(&q);
            }

            // ── Navigation ────────────────────────────────────────────────────
            Action::FocusNext => {
                self.focus.next();
            }
            Action::FocusPrev => {
                self.focus.prev();
            }
            Action::FocusPane(id) => self.focus.set(id),

            // ── UI toggles ────────────────────────────────────────────────────
            Action::ToggleTheme => {
                let dark = !self.state.dark_mode;
                self.state.set_dark_mode(dark);
                if let Some(path) = &self.config_path {
                    if let Err(e) = persist_dark_mode(path, dark) {
                        warn!("failed to save theme to {:?}: {:#}", path, e);
                    }
                }
            }
            Action::ToggleKeys => self.show_keys_bar = !self.show_keys_bar,
            // The overlay toggles itself in `on_action`.
            Action::ToggleHelp => {}

            Action::Quit => self.should_quit = true,
            Action::Noop => {}
        }
    }

    /// Switch panes when the session moves between browsing and watching.
    fn sync_layout(&mut self) {
        let watching = !matches!(self.state.session.display(), Display::List);
        if watching {
            self.channel_list.set_mode(ListMode::Others);
            self.focus.set_items(WATCH_PANES.to_vec());
        } else {
            self.channel_list.set_mode(ListMode::Organized);
            self.focus.set_items(BROWSE_PANES.to_vec());
        }
    }

    // ── Drawing ───────────────────────────────────────────────────────────────

    fn draw(&mut self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(self.state.palette.bg)),
            area,
        );

        let keys_h = if self.show_keys_bar { 1u16 } else { 0 };
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(keys_h),
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(outer[2]);

        self.pane_areas = PaneAreas {
            header: outer[0],
            category_bar: outer[1],
            left: body[0],
            right: body[1],
        };

        self.header.draw(frame, outer[0], false, &self.state);
        self.category_bar.draw(frame, outer[1], false, &self.state);

        let watching = !matches!(self.state.session.display(), Display::List);
        let list_focused = self.focus.is_focused(ComponentId::ChannelList);
        if watching {
            let player_focused = self.focus.is_focused(ComponentId::Player);
            self.player.draw(frame, body[0], player_focused, &self.state);
            self.channel_list
                .draw(frame, body[1], list_focused, &self.state);
        } else {
            let shelves_focused = self.focus.is_focused(ComponentId::Shelves);
            self.channel_list
                .draw(frame, body[0], list_focused, &self.state);
            self.shelves
                .draw(frame, body[1], shelves_focused, &self.state);
        }

        if self.show_keys_bar {
            status_bar::draw_keys_bar(
                frame,
                outer[3],
                self.state.input_mode,
                watching,
                &self.state.palette,
            );
        }

        self.help_overlay.draw(frame, area, false, &self.state);
        self.toast.draw(frame, outer[2], &self.state.palette);
    }
}

/// Write only `ui.dark_mode` back, leaving the rest of the file (and any
/// command-line overrides, which never reach it) untouched.
fn persist_dark_mode(path: &Path, dark: bool) -> anyhow::Result<()> {
    let mut config = if path.exists() {
        Config::load_from(path)?
    } else {
        Config::default()
    };
    config.ui.dark_mode = dark;
    config.save_to(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::MouseButton;
    use tv_core::selection::Phase;
    use tv_core::Catalog;

    #[derive(Default)]
    struct RecordingNavigator {
        opened: std::sync::Mutex<Vec<String>>,
    }

    impl RecordingNavigator {
        fn new() -> Self {
            Self::default()
        }

        fn opened(&self) -> Vec<String> {
            self.opened.lock().unwrap().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn open(&self, url: &str) -> anyhow::Result<()> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    fn app_with(navigator: Arc<RecordingNavigator>) -> App {
        let session = Session::new(Arc::new(Catalog::builtin()));
        App::new(session, Config::default(), None, navigator)
    }

    fn app() -> App {
        app_with(Arc::new(RecordingNavigator::new()))
    }

    fn key(code: KeyCode) -> AppMessage {
        AppMessage::Event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    async fn next_message(app: &mut App) -> AppMessage {
        app.msg_rx
            .as_mut()
            .expect("receiver present")
            .recv()
            .await
            .expect("channel open")
    }

    fn render(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn selection_settles_after_delay() {
        let mut app = app();
        app.dispatch(Action::SelectChannel("espn".into()));
        assert!(matches!(app.state.session.display(), Display::Loading(c) if c.id == "espn"));
        assert_eq!(app.focus.current(), Some(ComponentId::Player));

        let msg = next_message(&mut app).await;
        assert!(app.handle_message(msg));
        assert!(matches!(app.state.session.display(), Display::Ready(c) if c.id == "espn"));
    }

    #[tokio::test(start_paused = true)]
    async fn reselecting_before_settle_only_readies_the_latest() {
        let mut app = app();
        app.dispatch(Action::SelectChannel("espn".into()));
        tokio::time::sleep(Duration::from_millis(500)).await;
        app.dispatch(Action::SelectChannel("sportv".into()));

        let msg = next_message(&mut app).await;
        match &msg {
            AppMessage::Settled(ticket) => assert_eq!(ticket.channel_id, "sportv"),
            other => panic!("unexpected message {:?}", other),
        }
        app.handle_message(msg);
        assert!(matches!(app.state.session.display(), Display::Ready(c) if c.id == "sportv"));
        assert_eq!(
            app.state
                .session
                .preferences()
                .recently_watched
                .iter()
                .collect::<Vec<_>>(),
            vec!["sportv", "espn"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn back_to_list_cancels_pending_settle() {
        let mut app = app();
        app.dispatch(Action::SelectChannel("espn".into()));
        app.handle_message(key(KeyCode::Esc));
        assert!(matches!(app.state.session.display(), Display::List));
        assert!(!app.settle.is_pending());
        assert_eq!(app.focus.current(), Some(ComponentId::ChannelList));

        tokio::time::sleep(Duration::from_secs(5)).await;
        let rx = app.msg_rx.as_mut().expect("receiver present");
        assert!(rx.try_recv().is_err());
        assert_eq!(app.state.session.selection().phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn star_click_in_rendered_list_does_not_select() {
        let mut app = app();
        render(&mut app);
        let list = app.pane_areas.left;
        let click = AppMessage::Event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: list.x + 2,
            row: list.y + 1,
            modifiers: KeyModifiers::NONE,
        }));
        app.handle_message(click);

        assert!(app.state.session.is_favorite("discovery"));
        assert!(matches!(app.state.session.display(), Display::List));
        assert!(app.state.session.preferences().recently_watched.is_empty());
    }

    #[tokio::test]
    async fn search_keys_go_to_the_filter_not_global_bindings() {
        let mut app = app();
        app.handle_message(key(KeyCode::Char('/')));
        assert_eq!(app.state.input_mode, InputMode::Filter);
        app.handle_message(key(KeyCode::Char('q')));
        app.handle_message(key(KeyCode::Char('t')));
        assert!(!app.should_quit);
        assert!(app.state.dark_mode);
        assert_eq!(app.state.session.filter().search_term, "qt");

        app.handle_message(key(KeyCode::Esc));
        assert_eq!(app.state.session.filter().search_term, "");
        app.handle_message(key(KeyCode::Esc));
        assert_eq!(app.state.input_mode, InputMode::Normal);
        app.handle_message(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn category_keys_and_reset() {
        let mut app = app();
        app.handle_message(key(KeyCode::Char('2')));
        assert_eq!(app.state.session.filter().active_category, "sports");
        app.handle_message(key(KeyCode::Char(']')));
        assert_eq!(app.state.session.filter().active_category, "entertainment");
        app.handle_message(key(KeyCode::Char('a')));
        assert_eq!(app.state.session.filter().active_category, "all");
    }

    #[tokio::test]
    async fn open_external_goes_through_the_navigator() {
        let nav = Arc::new(RecordingNavigator::new());
        let mut app = app_with(nav.clone());
        app.dispatch(Action::OpenExternal("history".into()));
        app.dispatch(Action::OpenExternal("nope".into()));
        assert_eq!(nav.opened(), vec!["https://embedcanaistv.com/history/"]);
        assert!(matches!(app.state.session.display(), Display::List));
    }

    #[tokio::test(start_paused = true)]
    async fn draws_every_phase() {
        let mut app = app();
        render(&mut app);
        app.dispatch(Action::ToggleHelp);
        render(&mut app);
        app.dispatch(Action::ToggleHelp);
        app.dispatch(Action::SelectChannel("globors".into()));
        render(&mut app);
        let msg = next_message(&mut app).await;
        app.handle_message(msg);
        app.dispatch(Action::ToggleTheme);
        render(&mut app);
        assert!(!app.state.dark_mode);
    }

    #[tokio::test]
    async fn theme_toggle_persists_only_dark_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut on_disk = Config::default();
        on_disk.player.settle_delay_ms = 250;
        on_disk.save_to(&path).unwrap();

        let mut effective = Config::load_from(&path).unwrap();
        effective.player.settle_delay_ms = 10;
        let session = Session::new(Arc::new(Catalog::builtin()));
        let mut app = App::new(
            session,
            effective,
            Some(path.clone()),
            Arc::new(RecordingNavigator::new()),
        );
        app.handle_message(key(KeyCode::Char('t')));

        let saved = Config::load_from(&path).unwrap();
        assert!(!saved.ui.dark_mode);
        assert_eq!(saved.player.settle_delay_ms, 250);
    }
}
