/// Hero section
///
/// Headline with an accent fragment, subtitle, the three big stats, and the
/// two calls to action. Fills the scroll viewport.

use iced::widget::{button, column, container, row, text, Column};
use iced::{Alignment, Element, Length};

use crate::content::Profile;
use crate::state::section::Section;
use crate::ui::theme;
use crate::Message;

pub fn view(profile: &Profile, height: f32) -> Element<'_, Message> {
    let headline = column![
        text(&profile.headline).size(46),
        text(&profile.headline_highlight)
            .size(46)
            .style(theme::accent_text),
    ]
    .spacing(2)
    .align_x(Alignment::Center);

    let mut stats = row![].spacing(56).align_y(Alignment::Center);
    for stat in &profile.stats {
        stats = stats.push(
            column![
                text(&stat.figure).size(36).style(theme::accent_text),
                text(&stat.label).size(14).style(theme::dim),
            ]
            .spacing(4)
            .align_x(Alignment::Center),
        );
    }

    let actions = row![
        button(text("View Projects").size(16))
            .style(theme::primary)
            .on_press(Message::NavClicked(Section::Projects))
            .padding([12.0, 22.0]),
        button(text(profile.linkedin.label.as_str()).size(16))
            .style(theme::secondary)
            .on_press(Message::LinkClicked(profile.linkedin.clone()))
            .padding([12.0, 22.0]),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let content: Column<Message> = column![
        headline,
        text(&profile.subtitle).size(17).style(theme::dim),
        stats,
        actions,
    ]
    .spacing(30)
    .max_width(860)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fixed(height))
        .into()
}
