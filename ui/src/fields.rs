use std::borrow::Cow;

use mental_auth::domain::password::Visibility;
use mental_auth::{Control, Page, PasswordSlot};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::prelude::{Color, Masked, Span, Style, Widget};
use ratatui::widgets::{Block, Paragraph};

use crate::data::{highlight, Field, FieldInputs, Focus};

#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    pub page: &'a Page,
    pub focus: Focus,
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let block = Block::bordered().title(title);
    if focused {
        block.border_style(Style::default().fg(Color::Yellow))
    } else {
        block
    }
}

/// Draws one text field and records the cursor when it holds focus.
pub fn render_field(
    field: Field,
    ctx: FieldContext,
    area: Rect,
    buf: &mut Buffer,
    inputs: &mut FieldInputs,
) {
    let focused = ctx.focus == Focus::Field(field);
    let input = inputs.get(field);
    let cursor = input.visual_cursor() as u16;
    let value = input.value();
    let text = match visibility(field, ctx.page) {
        Some(Visibility::Masked) => Span::styled(Masked::new(value, '*'), Color::White),
        _ => Span::raw(value),
    };
    Paragraph::new(text)
        .block(field_block(field.title(), focused))
        .render(area, buf);
    if focused {
        inputs.cursor_position = Some(Position::new(area.x + cursor + 1, area.y + 1));
    }
}

fn visibility(field: Field, page: &Page) -> Option<Visibility> {
    match field.password_slot()? {
        PasswordSlot::Login => Some(page.login_form.password.visibility),
        PasswordSlot::Signup => Some(page.signup_form.password.visibility),
    }
}

pub fn toggle_control_for(slot: PasswordSlot) -> Control {
    match slot {
        PasswordSlot::Login => Control::LoginPasswordToggle,
        PasswordSlot::Signup => Control::SignupPasswordToggle,
    }
}

/// A password field with its reveal button to the right, when the page has one.
pub fn render_password_row(
    field: Field,
    ctx: FieldContext,
    area: Rect,
    buf: &mut Buffer,
    inputs: &mut FieldInputs,
) {
    let control = match field.password_slot() {
        Some(PasswordSlot::Login) => ctx.page.login_password_toggle.as_ref(),
        Some(PasswordSlot::Signup) => ctx.page.signup_password_toggle.as_ref(),
        None => None,
    };
    let (Some(slot), Some(control)) = (field.password_slot(), control) else {
        render_field(field, ctx, area, buf, inputs);
        return;
    };
    let [input_area, toggle_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(19)]).areas(area);
    render_field(field, ctx, input_area, buf, inputs);
    render_button(
        format!("{} {}", control.icon, control.title),
        ctx.focus == Focus::Control(toggle_control_for(slot)),
        toggle_area,
        buf,
    );
}

pub fn render_button<'a>(
    label: impl Into<Cow<'a, str>>,
    focused: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    Paragraph::new(highlight(label, focused))
        .centered()
        .block(Block::bordered())
        .render(area, buf);
}
