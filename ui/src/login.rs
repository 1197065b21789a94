use mental_auth::{Control, FormKind, Page};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{StatefulWidget, Widget};
use ratatui::widgets::Block;

use crate::data::{Field, FieldInputs, Focus};
use crate::extension::Splittable;
use crate::fields::{render_button, render_field, render_password_row, FieldContext};

pub struct LoginPanelWidget<'a> {
    pub page: &'a Page,
    pub focus: Focus,
}

impl StatefulWidget for LoginPanelWidget<'_> {
    type State = FieldInputs;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::bordered().title(" Log in ");
        let inner = block.inner(area);
        block.render(area, buf);

        let [email, password, actions] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .areas(inner);
        let ctx = FieldContext {
            page: self.page,
            focus: self.focus,
        };
        render_field(Field::LoginEmail, ctx, email, buf, state);
        render_password_row(Field::LoginPassword, ctx, password, buf, state);

        let [submit, forgot] = Layout::split_equal(actions, Direction::Horizontal);
        render_button(
            "Log in",
            self.focus == Focus::Submit(FormKind::Login),
            submit,
            buf,
        );
        render_button(
            "Forgot password?",
            self.focus == Focus::Control(Control::ForgotPassword),
            forgot,
            buf,
        );
    }
}
