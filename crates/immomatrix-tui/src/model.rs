//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use immomatrix_copy::{CampaignDraftRequest, DraftSession, DEFAULT_MODEL};
use immomatrix_core::{
    CalcError, Calculator, InputModel, LiveCalculation, RoiCalculator, RoiInput,
    VacancyCalculator, VacancyInput,
};

use crate::chart::{render_breakdown, render_funnel};
use crate::dashboard::{render_dashboard, DraftPanel};
use crate::footer::render_footer;
use crate::form::{render_fields, EntryBuffer};
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::logs::{render_logs, LogBuffer};
use crate::messages::{TuiMessage, View};
use crate::results::{render_roi_result, render_vacancy_result};

const LOG_PAGE: usize = 5;

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Active view.
    pub view: View,
    /// Cost-of-vacancy calculator.
    pub vacancy: LiveCalculation<VacancyCalculator>,
    /// ROI calculator.
    pub roi: LiveCalculation<RoiCalculator>,
    /// Selected field in the vacancy view.
    pub vacancy_selected: usize,
    /// Selected field in the ROI view.
    pub roi_selected: usize,
    /// Value being typed, if any.
    pub entry: Option<EntryBuffer>,
    /// Facts sent with every draft request.
    pub draft_request: CampaignDraftRequest,
    /// Draft request lifecycle and last text.
    pub draft: DraftSession,
    /// Model named in the draft panel.
    pub draft_model: String,
    /// Log lines.
    pub logs: LogBuffer,
    /// Message receiver.
    rx: Receiver<TuiMessage>,
    /// Draft request sender; `None` when no worker is running.
    draft_tx: Option<Sender<CampaignDraftRequest>>,
}

impl TuiApp {
    /// Create a new TUI app with default inputs.
    #[must_use]
    pub fn new(rx: Receiver<TuiMessage>) -> Self {
        Self {
            should_quit: false,
            view: View::Dashboard,
            vacancy: LiveCalculation::new(VacancyCalculator::new()),
            roi: LiveCalculation::new(RoiCalculator::new()),
            vacancy_selected: 0,
            roi_selected: 0,
            entry: None,
            draft_request: CampaignDraftRequest::default(),
            draft: DraftSession::new(),
            draft_model: DEFAULT_MODEL.to_string(),
            logs: LogBuffer::new(),
            rx,
            draft_tx: None,
        }
    }

    /// Connect a draft worker.
    #[must_use]
    pub fn with_draft_worker(
        mut self,
        tx: Sender<CampaignDraftRequest>,
        model: impl Into<String>,
    ) -> Self {
        self.draft_tx = Some(tx);
        self.draft_model = model.into();
        self
    }

    /// Use different campaign facts for drafts.
    #[must_use]
    pub fn with_draft_request(mut self, request: CampaignDraftRequest) -> Self {
        self.draft_request = request;
        self
    }

    /// Whether a field value is being typed.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.entry.is_some()
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Log(line) => self.logs.push(line),
            TuiMessage::DraftReady { text, fallback } => {
                if fallback {
                    self.logs.push(format!("[WARN] Entwurf: {text}"));
                } else {
                    self.logs
                        .push(format!("Entwurf erhalten ({} Zeichen)", text.chars().count()));
                }
                self.draft.finish(text);
            }
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::NextView => self.show_view(self.view.next()),
            KeyAction::PrevView => self.show_view(self.view.prev()),
            KeyAction::ShowView(view) => self.show_view(view),
            KeyAction::SelectPrev => self.move_selection(false),
            KeyAction::SelectNext => self.move_selection(true),
            KeyAction::Decrease => self.step_selected(-1.0),
            KeyAction::Increase => self.step_selected(1.0),
            KeyAction::BeginEntry => self.begin_entry(),
            KeyAction::Input(c) => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.text.push(c);
                }
            }
            KeyAction::Backspace => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.text.pop();
                }
            }
            KeyAction::Commit => self.commit_entry(),
            KeyAction::Abort => self.entry = None,
            KeyAction::Reset => self.reset_view(),
            KeyAction::Generate => self.request_draft(),
            KeyAction::ScrollUp => self.logs.scroll_up(LOG_PAGE),
            KeyAction::ScrollDown => self.logs.scroll_down(LOG_PAGE),
            KeyAction::None => {}
        }
    }

    fn show_view(&mut self, view: View) {
        self.entry = None;
        self.view = view;
    }

    /// Key of the selected field in the active calculator view.
    #[must_use]
    pub fn selected_key(&self) -> Option<&'static str> {
        match self.view {
            View::Dashboard => None,
            View::Vacancy => VacancyInput::fields().get(self.vacancy_selected),
            View::Roi => RoiInput::fields().get(self.roi_selected),
        }
        .map(|f| f.key)
    }

    fn move_selection(&mut self, down: bool) {
        let (selected, count) = match self.view {
            View::Dashboard => return,
            View::Vacancy => (&mut self.vacancy_selected, VacancyInput::fields().len()),
            View::Roi => (&mut self.roi_selected, RoiInput::fields().len()),
        };
        *selected = if down {
            (*selected + 1) % count
        } else {
            (*selected + count - 1) % count
        };
    }

    fn step_selected(&mut self, direction: f64) {
        let Some(key) = self.selected_key() else {
            return;
        };
        let result = match self.view {
            View::Dashboard => return,
            View::Vacancy => step_field(&mut self.vacancy, key, direction),
            View::Roi => step_field(&mut self.roi, key, direction),
        };
        if let Err(err) = result {
            self.logs.push(format!("[ERROR] {err}"));
        }
    }

    fn begin_entry(&mut self) {
        if let Some(key) = self.selected_key() {
            self.entry = Some(EntryBuffer::new(key));
        }
    }

    fn commit_entry(&mut self) {
        let Some(entry) = self.entry.take() else {
            return;
        };
        let result = match self.view {
            View::Dashboard => return,
            View::Vacancy => self.vacancy.set_text(entry.key, &entry.text).map(|_| ()),
            View::Roi => self.roi.set_text(entry.key, &entry.text).map(|_| ()),
        };
        match result {
            Ok(()) => self.logs.push(format!("{} = {}", entry.key, entry.text)),
            Err(err) => self.logs.push(format!("[ERROR] {err}")),
        }
    }

    fn reset_view(&mut self) {
        match self.view {
            View::Dashboard => return,
            View::Vacancy => {
                self.vacancy.reset();
            }
            View::Roi => {
                self.roi.reset();
            }
        }
        self.logs
            .push(format!("{}: Standardwerte geladen", self.view.title()));
    }

    fn request_draft(&mut self) {
        if self.view != View::Dashboard {
            return;
        }
        let Some(tx) = self.draft_tx.as_ref() else {
            self.logs
                .push("[ERROR] Kein Text-Dienst konfiguriert".to_string());
            return;
        };
        if self.draft.try_begin().is_err() {
            self.logs
                .push("[WARN] Anfrage läuft bereits, bitte warten".to_string());
            return;
        }
        if tx.send(self.draft_request.clone()).is_err() {
            self.draft.finish(immomatrix_copy::FALLBACK_ERROR.to_string());
            self.logs.push("[ERROR] Text-Dienst nicht erreichbar".to_string());
            return;
        }
        tracing::info!(model = %self.draft_model, "draft requested from TUI");
        self.logs.push(format!("Anfrage an {} gesendet", self.draft_model));
    }

    /// Compute the outer layout.
    ///
    /// Returns (header, main, logs, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(8),    // view
                Constraint::Length(6), // logs
                Constraint::Length(2), // footer
            ])
            .split(area);
        (outer[0], outer[1], outer[2], outer[3])
    }

    /// Split a calculator view into (form, result, chart).
    #[must_use]
    pub fn compute_calculator_layout(area: Rect) -> (Rect, Rect, Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);
        (columns[0], right[0], right[1])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, main_area, logs_area, footer_area) = Self::compute_layout(frame.area());

        render_header(frame, header_area, self.view);

        match self.view {
            View::Dashboard => {
                let last_text = self.draft.last_text();
                let panel = DraftPanel {
                    request: &self.draft_request,
                    model: &self.draft_model,
                    requesting: self.draft.is_requesting(),
                    text: last_text.as_deref(),
                };
                render_dashboard(frame, main_area, &panel);
            }
            View::Vacancy => {
                let (form, result, chart) = Self::compute_calculator_layout(main_area);
                render_fields(
                    frame,
                    form,
                    "Eingaben",
                    self.vacancy.input(),
                    self.vacancy_selected,
                    self.entry.as_ref(),
                );
                render_vacancy_result(frame, result, self.vacancy.result());
                render_breakdown(frame, chart, &self.vacancy.result().breakdown());
            }
            View::Roi => {
                let (form, result, chart) = Self::compute_calculator_layout(main_area);
                render_fields(
                    frame,
                    form,
                    "Budget & Funnel",
                    self.roi.input(),
                    self.roi_selected,
                    self.entry.as_ref(),
                );
                render_roi_result(frame, result, self.roi.result());
                render_funnel(frame, chart, &self.roi.result().funnel());
            }
        }

        render_logs(frame, logs_area, &self.logs);
        render_footer(frame, footer_area, self.view, self.is_editing());
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// Sets up the terminal, runs the main loop (poll events, update,
    /// render), and tears down on exit.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        let action = map_key(key, self.is_editing());
                        self.handle_key_action(action);
                    }
                    // Resizes are picked up by the next `draw`.
                    _ => {}
                }
            }

            self.update();
        }
    }
}

fn step_field<C>(live: &mut LiveCalculation<C>, key: &str, direction: f64) -> Result<(), CalcError>
where
    C: Calculator,
    C::Input: InputModel,
{
    let step = <C::Input as InputModel>::field(key)
        .map(|f| f.step)
        .ok_or_else(|| CalcError::UnknownField(key.to_string()))?;
    live.step(key, step * direction).map(|_| ())
}
