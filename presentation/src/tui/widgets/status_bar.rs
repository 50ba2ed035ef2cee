//! Status bar widget — mode indicator + key hints + flash messages

use crate::tui::mode::InputMode;
use crate::tui::nav::Screen;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static str {
        match (self.state.mode, self.state.screen) {
            (InputMode::Insert, _) => "Enter:send  Tab:next field  Esc:normal  Ctrl+C:quit",
            (_, Screen::Home) => {
                "1/2/3:type  +/-:budget  Enter:listing  c:chat  u:upload  s:sign up  l:log in  ?:help"
            }
            (_, Screen::PolicyListing) => {
                "j/k:move  Enter:details  space:compare  o:sort  a:ask  C:compare chat  p:payment  Esc:back"
            }
            (_, Screen::PolicyDetails) => "j/k:scroll  space:compare  a:ask advisor  Esc:back",
            (_, Screen::PolicyAdvisorChat) => {
                "i:type  s:use suggestion  Left/Right:questions  n:new chat  h:history  j/k:scroll  Esc:back"
            }
            (_, Screen::Payment) => "Enter:pay  Esc:back",
            (_, Screen::SignUp | Screen::Login | Screen::UploadDocument) => {
                "i:edit  Tab:next field  Enter:submit  Esc:back"
            }
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let mode = self.state.mode;
        let mode_text = mode.indicator();
        let mode_span = Span::styled(
            format!(" {} ", mode_text),
            Style::default()
                .fg(Color::Black)
                .bg(mode.color())
                .add_modifier(Modifier::BOLD),
        );
        let mode_width = mode_text.len() as u16 + 2;
        buf.set_line(area.x, area.y, &Line::from(vec![mode_span]), mode_width);

        let right_text = match &self.state.flash {
            Some((flash, _)) => flash.clone(),
            None => self.hints().to_string(),
        };
        let right_width = right_text.len() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + mode_width {
            let right_span = Span::styled(right_text, bg_style);
            buf.set_line(right_x, area.y, &Line::from(vec![right_span]), right_width + 1);
        }
    }
}
