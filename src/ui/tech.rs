/// Technology stack section
///
/// Titled category cards, each a wrap of tag chips.

use iced::widget::{column, container, row, text};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::content::{SectionCopy, TechCategory};
use crate::ui::{layout, theme};
use crate::Message;

pub fn view<'a>(
    intro: &'a SectionCopy,
    categories: &'a [TechCategory],
    viewport_width: f32,
    height: f32,
) -> Element<'a, Message> {
    let header = container(
        column![
            text(&intro.heading).size(34),
            text(&intro.subtitle).size(16).style(theme::dim),
        ]
        .spacing(10)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .height(Length::Fixed(layout::SECTION_HEADER));

    let columns = layout::tech_columns(viewport_width);
    let mut grid = column![].spacing(layout::CATEGORY_GAP);

    for chunk in categories.chunks(columns) {
        let mut cards = row![].spacing(layout::CATEGORY_GAP);
        for category in chunk {
            cards = cards.push(card(category));
        }
        grid = grid.push(cards);
    }

    container(column![header, grid])
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding([layout::SECTION_PADDING, 48.0])
        .into()
}

fn card(category: &TechCategory) -> Element<'_, Message> {
    let items: Vec<Element<'_, Message>> = category
        .items
        .iter()
        .map(|item| {
            container(text(item.as_str()).size(13))
                .style(theme::tag)
                .padding([5.0, 11.0])
                .into()
        })
        .collect();

    container(
        column![
            text(&category.title).size(18).style(theme::accent_text),
            Wrap::with_elements(items).spacing(8.0).line_spacing(8.0),
        ]
        .spacing(14),
    )
    .style(theme::card)
    .padding(20)
    .width(Length::FillPortion(1))
    .height(Length::Fixed(layout::CATEGORY_HEIGHT))
    .into()
}
