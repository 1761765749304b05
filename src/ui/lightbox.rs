/// Lightbox overlay
///
/// A modal stacked over the page: a dimmed backdrop that closes on click,
/// and the enlarged image card on top. The card is wrapped in `opaque`, so
/// presses inside it are consumed before they can reach the backdrop's
/// close handler; only the backdrop and the close button dismiss it.

use iced::widget::{button, center, column, container, horizontal_space, image, mouse_area, opaque, row, stack, text};
use iced::{ContentFit, Element, Length};

use crate::assets::GalleryImage;
use crate::ui::theme;
use crate::Message;

/// Largest footprint of the enlarged image.
const IMAGE_WIDTH: f32 = 960.0;
const IMAGE_HEIGHT: f32 = 600.0;

/// Stack the overlay over the page. Clicking the dimmed area closes.
pub fn modal<'a>(
    base: Element<'a, Message>,
    overlay: Element<'a, Message>,
) -> Element<'a, Message> {
    stack![
        base,
        opaque(
            mouse_area(
                center(opaque(overlay)).style(theme::backdrop)
            )
            .on_press(Message::CloseLightbox)
        )
    ]
    .into()
}

/// The enlarged image card with its close control.
pub fn overlay<'a>(
    reference: &'a str,
    loaded: Option<&GalleryImage>,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match loaded {
        Some(entry) => image(entry.full.clone())
            .width(Length::Fixed(IMAGE_WIDTH))
            .height(Length::Fixed(IMAGE_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into(),
        // The asset never decoded; show the reference instead of a broken
        // frame and let the user close as usual.
        None => container(text(reference).size(15).style(theme::dim))
            .center_x(Length::Fixed(IMAGE_WIDTH))
            .center_y(Length::Fixed(IMAGE_HEIGHT / 2.0))
            .into(),
    };

    let close = button(text("×").size(22))
        .style(theme::close)
        .on_press(Message::CloseLightbox)
        .padding([2.0, 10.0]);

    container(column![row![horizontal_space(), close], picture].spacing(6))
        .style(theme::overlay_card)
        .padding(14)
        .into()
}
