use std::time::Duration;

use chrono::{DateTime, Utc};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use mental_auth::{
    Control, Dispatch, Key, Page, PageConfig, PageController, PageEvent, Panel, TimerQueue,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::{DefaultTerminal, Frame};
use tui_input::backend::crossterm::EventHandler;

use crate::data::{first_field, focus_ring, highlight, FieldInputs, Focus};
use crate::extension::{centered_column, centered_rect, Splittable};
use crate::login::LoginPanelWidget;
use crate::popup::{ModalNotifier, NoticePopup};
use crate::signup::SignupPanelWidget;

type Controller = PageController<ModalNotifier, TimerQueue>;

pub struct App {
    /// Is the application running?
    running: bool,
    controller: Controller,
    inputs: FieldInputs,
    focus: Focus,
    last_tick: DateTime<Utc>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: PageConfig) -> Self {
        let controller = PageController::new(
            Page::default(),
            config,
            ModalNotifier::default(),
            TimerQueue::default(),
        );
        Self {
            running: true,
            controller,
            inputs: FieldInputs::default(),
            focus: first_field(Panel::Login),
            last_tick: Utc::now(),
        }
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_crossterm_events().await?;
            self.tick();
        }
        Ok(())
    }

    fn tick(&mut self) {
        let now = Utc::now();
        let elapsed = (now - self.last_tick).to_std().unwrap_or(Duration::ZERO);
        self.last_tick = now;
        self.controller.tick(elapsed);
    }

    /// Renders the user interface.
    fn draw(&mut self, frame: &mut Frame) {
        let column = centered_column(frame.area(), 64);
        let [title, tabs, panel, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(column);

        frame.render_widget(
            Paragraph::new(self.controller.config().brand.as_str())
                .style(Style::default().add_modifier(Modifier::BOLD))
                .centered(),
            title,
        );
        self.draw_tabs(frame, tabs);

        self.inputs.cursor_position = None;
        let page = self.controller.page();
        match self.controller.active_panel() {
            Panel::Login => frame.render_stateful_widget(
                LoginPanelWidget {
                    page,
                    focus: self.focus,
                },
                panel,
                &mut self.inputs,
            ),
            Panel::Signup => frame.render_stateful_widget(
                SignupPanelWidget {
                    page,
                    focus: self.focus,
                },
                panel,
                &mut self.inputs,
            ),
        }
        frame.render_widget(
            Paragraph::new("←/→ switch panel · Tab move · Enter submit · Esc quit")
                .style(Style::default().add_modifier(Modifier::ITALIC))
                .centered(),
            hints,
        );

        if let Some(message) = self.controller.notifier().current() {
            let area = centered_rect(frame.area(), 50, 7);
            frame.render_widget(NoticePopup { message }, area);
        } else if let Some(position) = self.inputs.cursor_position {
            frame.set_cursor_position(position);
        }
    }

    fn draw_tabs(&self, frame: &mut Frame, area: Rect) {
        let page = self.controller.page();
        let [login, signup] = Layout::split_equal(area, Direction::Horizontal);
        let tabs = [
            (login, "Login", page.login_button.is_selected(), Control::LoginTab),
            (signup, "Signup", page.signup_button.is_selected(), Control::SignupTab),
        ];
        for (tab_area, label, selected, control) in tabs {
            let block = if selected {
                Block::bordered().border_style(Style::default().fg(Color::Cyan))
            } else {
                Block::bordered()
            };
            let label = highlight(label, self.focus == Focus::Control(control));
            let label = if selected {
                label.patch_style(Style::default().add_modifier(Modifier::BOLD))
            } else {
                label
            };
            frame.render_widget(
                Paragraph::new(Line::from(label)).centered().block(block),
                tab_area,
            );
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    async fn handle_crossterm_events(&mut self) -> Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key_event) = event::read()? {
                self.on_key_event(key_event);
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }
        if self.controller.notifier().is_blocking() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.controller.notifier_mut().dismiss();
            }
            return;
        }
        // the page-wide listener sees every key before the focused widget does
        if self.dispatch(PageEvent::KeyDown(page_key(key.code))) == Dispatch::Handled {
            return;
        }
        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Tab => self.move_focus(1),
            KeyCode::BackTab => self.move_focus(-1),
            KeyCode::Enter => self.activate_focus(),
            _ => self.edit_focused(key),
        }
    }

    fn dispatch(&mut self, event: PageEvent) -> Dispatch {
        let dispatch = self.controller.dispatch(event);
        if dispatch == Dispatch::Handled {
            debug!("handled {:?}", event);
            self.inputs.sync_from(self.controller.page());
            self.normalize_focus();
        }
        dispatch
    }

    fn activate_focus(&mut self) {
        let event = match self.focus {
            Focus::Field(field) => PageEvent::Submit(field.form()),
            Focus::Control(control) => PageEvent::Click(control),
            Focus::Submit(form) => PageEvent::Submit(form),
        };
        self.dispatch(event);
    }

    fn edit_focused(&mut self, key: KeyEvent) {
        let Focus::Field(field) = self.focus else {
            return;
        };
        let input = self.inputs.get_mut(field);
        if input.handle_event(&Event::Key(key)).is_some() {
            let value = input.value().to_string();
            field.write(self.controller.page_mut(), &value);
        }
    }

    fn move_focus(&mut self, step: isize) {
        let ring = focus_ring(self.controller.active_panel(), self.controller.page());
        let len = ring.len() as isize;
        let current = ring
            .iter()
            .position(|focus| *focus == self.focus)
            .map_or(0, |index| index as isize);
        let next = (current + step).rem_euclid(len) as usize;
        self.focus = ring[next];
    }

    /// Keeps focus inside the visible panel after a switch.
    fn normalize_focus(&mut self) {
        let panel = self.controller.active_panel();
        if !focus_ring(panel, self.controller.page()).contains(&self.focus) {
            self.focus = first_field(panel);
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

fn page_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Left => Key::ArrowLeft,
        KeyCode::Right => Key::ArrowRight,
        _ => Key::Other,
    }
}
