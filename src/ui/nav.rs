/// Navigation bar
///
/// Brand on the left, one button per section in the middle, the transient
/// status line on the right. The entry matching the active section is
/// highlighted; clicking an entry asks the update loop to glide there.

use iced::widget::{button, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use crate::state::section::Section;
use crate::ui::{layout, theme};
use crate::Message;

pub fn navbar<'a>(brand: &'a str, active: Section, status: &'a str) -> Element<'a, Message> {
    let mut links = row![].spacing(4).align_y(Alignment::Center);

    for section in Section::ALL {
        links = links.push(
            button(text(section.label()).size(15))
                .style(theme::nav_link(active == section))
                .on_press(Message::NavClicked(section))
                .padding([8.0, 14.0]),
        );
    }

    let bar = row![
        text(brand).size(20),
        horizontal_space(),
        links,
        horizontal_space(),
        text(status).size(12).style(theme::dim),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    container(bar)
        .style(theme::navbar)
        .width(Length::Fill)
        .center_y(Length::Fixed(layout::NAV_HEIGHT))
        .padding([0.0, 24.0])
        .into()
}
