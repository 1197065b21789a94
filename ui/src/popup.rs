use std::collections::VecDeque;

use log::info;
use mental_auth::Notifier;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph, Widget, Wrap};

/// Queues notifications and shows them one at a time as a modal popup.
/// While one is pending the app swallows every key except dismissal.
#[derive(Debug, Default)]
pub struct ModalNotifier {
    queue: VecDeque<String>,
}

impl ModalNotifier {
    pub fn current(&self) -> Option<&str> {
        self.queue.front().map(String::as_str)
    }

    pub fn is_blocking(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn dismiss(&mut self) {
        self.queue.pop_front();
    }
}

impl Notifier for ModalNotifier {
    fn notify(&mut self, message: &str) {
        info!("showing notice: {}", message);
        self.queue.push_back(message.to_string());
    }
}

pub struct NoticePopup<'a> {
    pub message: &'a str,
}

impl Widget for NoticePopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Clear.render(area, buf);
        Paragraph::new(self.message)
            .block(
                Block::bordered()
                    .title("Notice")
                    .title_bottom(
                        Line::from("Press Enter to close")
                            .centered()
                            .style(Style::default().add_modifier(Modifier::ITALIC)),
                    )
                    .style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_shown_in_order() {
        let mut notifier = ModalNotifier::default();
        assert!(!notifier.is_blocking());
        notifier.notify("first");
        notifier.notify("second");
        assert_eq!(notifier.current(), Some("first"));
        notifier.dismiss();
        assert_eq!(notifier.current(), Some("second"));
        notifier.dismiss();
        assert!(!notifier.is_blocking());
        notifier.dismiss();
        assert_eq!(notifier.current(), None);
    }
}
