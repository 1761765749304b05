/// Contact section and footer

use chrono::{Datelike, Utc};
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::content::Contact;
use crate::ui::theme;
use crate::Message;

pub fn view<'a>(contact: &'a Contact, brand: &'a str, height: f32) -> Element<'a, Message> {
    let mut links = row![].spacing(16).align_y(Alignment::Center);
    for link in &contact.links {
        links = links.push(
            button(text(link.label.as_str()).size(15))
                .style(theme::secondary)
                .on_press(Message::LinkClicked(link.clone()))
                .padding([10.0, 18.0]),
        );
    }

    let seeking = format!("Currently seeking: {}", contact.seeking.join(" • "));

    let footer = text(format!(
        "© {} {}. Built with Rust & iced",
        Utc::now().year(),
        brand,
    ))
    .size(12)
    .style(theme::dim);

    let content = column![
        text(&contact.heading).size(34),
        text(&contact.subtitle).size(16).style(theme::dim),
        links,
        text(seeking).size(15),
        text(&contact.location).size(14).style(theme::dim),
        footer,
    ]
    .spacing(22)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fixed(height))
        .into()
}
