/// Presents a blocking message to the user.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Keeps every message, for hosts without a dialog to show.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingNotifier {
    pub messages: Vec<String>,
}

impl RecordingNotifier {
    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
