use chrono::{DateTime, Local, NaiveTime};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use drowse::time_picker::{PickerField, TimePicker};
use drowse::tracker::SleepSummary;

use crate::{App, AppState};

const HORIZONTAL_MARGIN: u16 = 4;

// Palette lifted from the app's night theme
const ACCENT: Color = Color::Rgb(245, 134, 83);
const DIVIDER: Color = Color::Rgb(121, 145, 157);
const BUTTON_BG: Color = Color::Rgb(52, 152, 219);

pub fn clock_label(t: DateTime<Local>) -> String {
    t.format("%-I:%M %p").to_string()
}

pub fn alarm_label(t: NaiveTime) -> String {
    t.format("%-I:%M %p").to_string()
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(backdrop) = &self.backdrop {
            backdrop.render(area, buf);
        }

        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let accent_bold_style = Style::default().patch(bold_style).fg(ACCENT);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints(
                [
                    Constraint::Percentage(25), // greeting
                    Constraint::Min(3),         // clock
                    Constraint::Length(4),      // alarm
                    Constraint::Length(3),      // toggle button
                    Constraint::Length(1),      // legend
                ]
                .as_ref(),
            )
            .split(area);

        let greeting = Paragraph::new(Span::styled(
            format!("{}, {}", self.greeting, self.config.name),
            bold_style.fg(Color::White),
        ))
        .alignment(Alignment::Center);
        greeting.render(chunks[0], buf);

        let clock = Paragraph::new(Span::styled(clock_label(Local::now()), accent_bold_style))
            .alignment(Alignment::Center);
        clock.render(chunks[1], buf);

        let alarm_value = match self.tracker.alarm() {
            Some(t) => Span::styled(alarm_label(t), accent_bold_style),
            None => Span::styled("Set Alarm", Style::default().fg(DIVIDER)),
        };
        let alarm = Paragraph::new(vec![
            Line::from(Span::styled("Alarm", bold_style.fg(Color::White))),
            Line::from(alarm_value),
        ])
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(DIVIDER)),
        )
        .alignment(Alignment::Center);
        alarm.render(chunks[2], buf);

        let button_label = if self.tracker.is_tracking() {
            "Stop Tracking"
        } else {
            "Start Tracking"
        };
        let mut button_lines = vec![Line::from(Span::styled(
            button_label,
            bold_style.fg(Color::White).bg(BUTTON_BG),
        ))];
        if let Some(start) = self.tracker.started_at() {
            button_lines.push(Line::from(Span::styled(
                format!("sleeping since {}", clock_label(start)),
                italic_style.fg(DIVIDER),
            )));
        }
        let button = Paragraph::new(button_lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        button.render(chunks[3], buf);

        let legend = Paragraph::new(Span::styled(
            "(s)leep toggle / (a)larm / (esc)ape",
            italic_style,
        ))
        .alignment(Alignment::Center);
        legend.render(chunks[4], buf);

        match self.state {
            AppState::Home => {}
            AppState::AlarmPicker => render_picker(&self.picker, area, buf),
            AppState::Summary => {
                if let Some(summary) = &self.summary {
                    render_summary(summary, area, buf);
                }
            }
        }
    }
}

/// Centered rect for modal overlays, clamped to the available area
fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}

fn render_picker(picker: &TimePicker, area: Rect, buf: &mut Buffer) {
    let modal = centered_rect(56, 6, area);
    Clear.render(modal, buf);

    let focused = Style::default()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD);
    let idle = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let style_for = |field: PickerField| {
        if picker.field() == field {
            focused
        } else {
            idle
        }
    };

    let time_line = Line::from(vec![
        Span::styled(
            format!(" {} ", picker.hour_label()),
            style_for(PickerField::Hour),
        ),
        Span::raw(":"),
        Span::styled(
            format!(" {} ", picker.minute_label()),
            style_for(PickerField::Minute),
        ),
        Span::raw(" "),
        Span::styled(
            format!(" {} ", picker.meridiem_label()),
            style_for(PickerField::Meridiem),
        ),
    ]);

    let body = Paragraph::new(vec![
        time_line,
        Line::from(""),
        Line::from(Span::styled(
            "(↑/↓) adjust  (tab) field  (enter) set  (esc) cancel",
            Style::default().add_modifier(Modifier::ITALIC),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DIVIDER))
            .title("Set Alarm"),
    )
    .alignment(Alignment::Center);
    body.render(modal, buf);
}

fn render_summary(summary: &SleepSummary, area: Rect, buf: &mut Buffer) {
    let modal = centered_rect(50, 6, area);
    Clear.render(modal, buf);

    let body = Paragraph::new(vec![
        Line::from(Span::raw(summary.message())),
        Line::from(""),
        Line::from(Span::styled(
            "(enter) ok",
            Style::default().add_modifier(Modifier::ITALIC),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DIVIDER))
            .title("Sleep Summary"),
    )
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    body.render(modal, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_clock_label_format() {
        let morning = Local.with_ymd_and_hms(2024, 3, 4, 7, 5, 0).unwrap();
        assert_eq!(clock_label(morning), "7:05 AM");

        let night = Local.with_ymd_and_hms(2024, 3, 4, 23, 59, 0).unwrap();
        assert_eq!(clock_label(night), "11:59 PM");
    }

    #[test]
    fn test_alarm_label_format() {
        let t = NaiveTime::from_hms_opt(6, 30, 0).unwrap();
        assert_eq!(alarm_label(t), "6:30 AM");

        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        assert_eq!(alarm_label(noon), "12:00 PM");

        let midnight = NaiveTime::from_hms_opt(0, 15, 0).unwrap();
        assert_eq!(alarm_label(midnight), "12:15 AM");
    }

    #[test]
    fn test_centered_rect_is_contained() {
        let outer = Rect::new(0, 0, 80, 24);
        let modal = centered_rect(34, 6, outer);
        assert!(modal.width <= outer.width);
        assert!(modal.height <= outer.height);
        assert!(modal.x >= outer.x && modal.y >= outer.y);
    }

    #[test]
    fn test_centered_rect_clamps_to_small_areas() {
        let tiny = Rect::new(0, 0, 10, 3);
        let modal = centered_rect(50, 6, tiny);
        assert_eq!(modal.width, 10);
        assert_eq!(modal.height, 3);
    }
}
