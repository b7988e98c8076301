use std::io::{self, Write};

use auto_flows::WindowReport;

const SPINNER_FRAMES: &[char] = &['|', '/', '-', '\\'];

/// One status line per window plus a pause banner, redrawn in place with
/// ANSI cursor moves. Pure formatting; the loop owns when to render.
pub struct StatusView {
    lines: Vec<WindowLine>,
    paused: bool,
    frame: usize,
    last_height: usize,
}

#[derive(Default)]
struct WindowLine {
    url: Option<String>,
    message_count: usize,
    last_assistant_len: usize,
}

impl StatusView {
    pub fn new(windows: usize) -> Self {
        Self {
            lines: (0..windows).map(|_| WindowLine::default()).collect(),
            paused: false,
            frame: 0,
            last_height: 0,
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn update(&mut self, index: usize, report: &WindowReport) {
        let Some(line) = self.lines.get_mut(index) else {
            return;
        };
        line.url = report.chat_url.as_ref().map(|url| url.to_string());
        line.message_count = report.message_count;
        line.last_assistant_len = report.last_assistant_len;
    }

    fn spinner(&self) -> char {
        if self.paused {
            '\u{25CB}' // static circle while paused
        } else {
            SPINNER_FRAMES[self.frame % SPINNER_FRAMES.len()]
        }
    }

    fn format_lines(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.lines.len() + 1);
        if self.paused {
            out.push("[PAUSED] press ENTER to resume".to_string());
        } else {
            out.push("press ENTER to pause".to_string());
        }
        for line in &self.lines {
            let spinner = self.spinner();
            match &line.url {
                Some(url) if line.message_count > 0 => out.push(format!(
                    "{spinner} {url} [{}m, {}c]",
                    line.message_count, line.last_assistant_len
                )),
                Some(url) => out.push(format!("{spinner} {url} [no content]")),
                None => out.push(format!("{spinner} Not a Claude chat")),
            }
        }
        out
    }

    /// Redraw over the previous frame.
    pub fn render(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.last_height > 0 {
            write!(out, "\x1b[{}A", self.last_height)?;
        }
        let lines = self.format_lines();
        for line in &lines {
            writeln!(out, "\r\x1b[2K{line}")?;
        }
        self.last_height = lines.len();
        self.frame = self.frame.wrapping_add(1);
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatpilot_core_types::ChatUrl;

    fn report(url: Option<&str>, count: usize, len: usize) -> WindowReport {
        WindowReport {
            chat_url: url.map(|u| ChatUrl::new(u, "id")),
            message_count: count,
            last_assistant_len: len,
            ..WindowReport::default()
        }
    }

    #[test]
    fn lines_show_url_and_counters() {
        let mut view = StatusView::new(2);
        view.update(0, &report(Some("https://claude.ai/chat/id"), 12, 345));
        view.update(1, &report(None, 0, 0));
        let lines = view.format_lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("https://claude.ai/chat/id [12m, 345c]"));
        assert!(lines[2].contains("Not a Claude chat"));
    }

    #[test]
    fn chat_without_messages_reads_no_content() {
        let mut view = StatusView::new(1);
        view.update(0, &report(Some("https://claude.ai/chat/id"), 0, 0));
        assert!(view.format_lines()[1].contains("[no content]"));
    }

    #[test]
    fn pause_banner_replaces_the_hint() {
        let mut view = StatusView::new(1);
        view.set_paused(true);
        assert!(view.format_lines()[0].contains("PAUSED"));
    }

    #[test]
    fn render_is_stable_over_repeated_frames() {
        let mut view = StatusView::new(1);
        let mut buf = Vec::new();
        view.render(&mut buf).unwrap();
        view.render(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        // Second frame rewinds over the first two lines.
        assert!(text.contains("\x1b[2A"));
    }
}
