/// Projects showcase
///
/// A responsive grid of project cards. Each card carries the badge,
/// description, a strip of gallery tiles (click to enlarge), metric rows,
/// the technology tags, and the outbound links.

use std::collections::HashMap;

use iced::widget::{button, column, container, horizontal_space, image, row, text};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::assets::GalleryImage;
use crate::content::{Project, SectionCopy};
use crate::ui::{layout, theme};
use crate::Message;

/// On-screen size of one gallery tile.
const TILE_WIDTH: f32 = 150.0;
const TILE_HEIGHT: f32 = 106.0;

pub fn view<'a>(
    intro: &'a SectionCopy,
    projects: &'a [Project],
    gallery: &'a HashMap<String, GalleryImage>,
    viewport_width: f32,
    height: f32,
) -> Element<'a, Message> {
    let header = section_header(intro);

    let per_row = layout::cards_per_row(viewport_width);
    let mut grid = column![].spacing(layout::CARD_GAP);

    for chunk in projects.chunks(per_row) {
        let mut cards = row![].spacing(layout::CARD_GAP);
        for project in chunk {
            cards = cards.push(card(project, gallery));
        }
        grid = grid.push(cards);
    }

    container(column![header, grid].spacing(0))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding([layout::SECTION_PADDING, 48.0])
        .into()
}

fn section_header(intro: &SectionCopy) -> Element<'_, Message> {
    container(
        column![
            text(&intro.heading).size(34),
            text(&intro.subtitle).size(16).style(theme::dim),
        ]
        .spacing(10)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .height(Length::Fixed(layout::SECTION_HEADER))
    .into()
}

fn card<'a>(
    project: &'a Project,
    gallery: &'a HashMap<String, GalleryImage>,
) -> Element<'a, Message> {
    let header = row![
        text(&project.name).size(24),
        horizontal_space(),
        container(text(&project.badge).size(12)).style(theme::badge).padding([4.0, 12.0]),
    ]
    .align_y(Alignment::Center);

    let tiles: Vec<Element<'a, Message>> = project
        .gallery
        .iter()
        .map(|reference| tile(reference, gallery.get(reference)))
        .collect();
    let strip = Wrap::with_elements(tiles).spacing(10.0).line_spacing(10.0);

    let mut metrics = column![].spacing(8);
    for metric in &project.metrics {
        metrics = metrics.push(
            row![
                text(&metric.icon).size(14),
                text(&metric.label).size(14).style(theme::dim),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        );
    }

    let tags: Vec<Element<'a, Message>> = project
        .stack
        .iter()
        .map(|tag| {
            container(text(tag.as_str()).size(12))
                .style(theme::tag)
                .padding([4.0, 10.0])
                .into()
        })
        .collect();
    let tags = Wrap::with_elements(tags).spacing(8.0).line_spacing(8.0);

    let mut links = row![].spacing(12);
    for link in &project.links {
        links = links.push(
            button(text(link.label.as_str()).size(14))
                .style(theme::secondary)
                .on_press(Message::LinkClicked(link.clone()))
                .padding([8.0, 14.0]),
        );
    }

    container(
        column![
            header,
            text(&project.description).size(15).style(theme::dim),
            strip,
            metrics,
            tags,
            links,
        ]
        .spacing(16),
    )
    .style(theme::card)
    .padding(24)
    .width(Length::FillPortion(1))
    .height(Length::Fixed(layout::CARD_HEIGHT))
    .into()
}

/// One clickable gallery tile. Assets that have not loaded (or never will)
/// render as a placeholder; clicking still opens the lightbox, which shows
/// its own fallback.
fn tile<'a>(reference: &'a str, loaded: Option<&GalleryImage>) -> Element<'a, Message> {
    let preview: Element<'a, Message> = match loaded {
        Some(entry) => image(entry.tile.clone())
            .width(Length::Fixed(TILE_WIDTH))
            .height(Length::Fixed(TILE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(text("…").size(22).style(theme::dim))
            .style(theme::tag)
            .center_x(Length::Fixed(TILE_WIDTH))
            .center_y(Length::Fixed(TILE_HEIGHT))
            .into(),
    };

    button(preview)
        .style(theme::tile)
        .on_press(Message::OpenLightbox(reference.to_string()))
        .padding(2)
        .into()
}
