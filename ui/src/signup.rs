use mental_auth::{Control, FormKind, Page};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, StatefulWidget, Style, Widget};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::data::{Field, FieldInputs, Focus};
use crate::extension::Splittable;
use crate::fields::{render_button, render_field, render_password_row, FieldContext};

pub struct SignupPanelWidget<'a> {
    pub page: &'a Page,
    pub focus: Focus,
}

impl StatefulWidget for SignupPanelWidget<'_> {
    type State = FieldInputs;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::bordered().title(" Create account ");
        let inner = block.inner(area);
        block.render(area, buf);

        let [names, email, password, helper, actions] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(3),
        ])
        .areas(inner);
        let ctx = FieldContext {
            page: self.page,
            focus: self.focus,
        };
        let [first, last] = Layout::split_equal(names, Direction::Horizontal);
        render_field(Field::FirstName, ctx, first, buf, state);
        render_field(Field::LastName, ctx, last, buf, state);
        render_field(Field::SignupEmail, ctx, email, buf, state);
        render_password_row(Field::SignupPassword, ctx, password, buf, state);

        if self.page.signup_helper.visible {
            Paragraph::new(self.page.signup_helper.text.as_str())
                .style(
                    Style::default()
                        .fg(Color::LightRed)
                        .add_modifier(Modifier::ITALIC),
                )
                .wrap(Wrap { trim: true })
                .centered()
                .render(helper, buf);
        }

        let [submit, cancel] = Layout::split_equal(actions, Direction::Horizontal);
        render_button(
            "Sign up",
            self.focus == Focus::Submit(FormKind::Signup),
            submit,
            buf,
        );
        render_button(
            "Cancel",
            self.focus == Focus::Control(Control::CancelSignup),
            cancel,
            buf,
        );
    }
}
