use iced::event::{self, Event};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{column, container, scrollable};
use iced::{time, window};
use iced::{Element, Length, Size, Subscription, Task, Theme};
use std::collections::HashMap;
use std::time::{Duration, Instant};

mod assets;
mod content;
mod state;
mod ui;

use assets::GalleryImage;
use content::{Content, Link};
use state::lightbox::Lightbox;
use state::scroll::ScrollAnimation;
use state::section::{Section, SectionTracker};

/// Main application state
struct Portfolio {
    /// The page content, fixed at startup
    content: Content,
    /// Which section is currently in view
    tracker: SectionTracker,
    /// The image overlay state
    lightbox: Lightbox,
    /// Loaded gallery assets, keyed by asset reference
    gallery: HashMap<String, GalleryImage>,
    /// Current scroll offset of the page
    scroll_offset: f32,
    /// Size of the scroll viewport (window minus the navigation bar)
    viewport: Size,
    /// In-flight smooth scroll, if any
    animation: Option<ScrollAnimation>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The page scrolled (user input or programmatic)
    Scrolled(scrollable::Viewport),
    /// User clicked a navigation entry
    NavClicked(Section),
    /// Frame tick while a smooth scroll is in flight
    AnimationTick(Instant),
    /// The window changed size, so section offsets moved
    WindowResized(Size),
    /// User clicked a gallery tile
    OpenLightbox(String),
    /// User clicked the lightbox backdrop or close control
    CloseLightbox,
    /// Background gallery load completed
    GalleryLoaded(Vec<(String, GalleryImage)>),
    /// User activated an outbound link
    LinkClicked(Link),
}

impl Portfolio {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // The content document is compiled in; if it does not parse, the app
        // cannot render anything meaningful
        let content = Content::load()
            .expect("Embedded content is invalid. Fix content/portfolio.json and rebuild.");

        let root = assets::find_asset_root();
        let on_disk = root
            .as_deref()
            .map(|dir| assets::scan_screenshots(dir).len())
            .unwrap_or(0);

        println!(
            "🎨 Portfolio initialized: {} projects, {} screenshots on disk",
            content.projects.len(),
            on_disk
        );

        let status = format!("Ready. {} screenshots available.", on_disk);
        let references = content.gallery_references();

        (
            Portfolio {
                content,
                tracker: SectionTracker::new(),
                lightbox: Lightbox::default(),
                gallery: HashMap::new(),
                scroll_offset: 0.0,
                viewport: Size::new(1280.0, 860.0 - ui::layout::NAV_HEIGHT),
                animation: None,
                status,
            },
            Task::perform(assets::load_gallery(root, references), Message::GalleryLoaded),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Scrolled(viewport) => {
                self.scroll_offset = viewport.absolute_offset().y;
                self.viewport = viewport.bounds().size();

                let layout = ui::layout::resolve(&self.content, self.viewport);
                self.tracker.track(self.scroll_offset, &layout.section_tops());

                Task::none()
            }
            Message::NavClicked(section) => {
                let layout = ui::layout::resolve(&self.content, self.viewport);

                match layout.top_of(section) {
                    Some(top) => {
                        let target = top.min(layout.max_scroll(self.viewport.height));
                        self.animation = Some(ScrollAnimation::new(
                            self.scroll_offset,
                            target,
                            Instant::now(),
                        ));
                    }
                    // Benign miss: nothing to scroll to, nothing to report
                    None => eprintln!("⚠️  No anchor for section {:?}, ignoring", section),
                }

                Task::none()
            }
            Message::AnimationTick(now) => {
                let Some(animation) = self.animation else {
                    return Task::none();
                };

                let (offset, finished) = animation.sample(now);
                self.scroll_offset = offset;

                if finished {
                    self.animation = None;
                }

                // Programmatic movement updates the highlight the same way
                // user scrolling does
                let layout = ui::layout::resolve(&self.content, self.viewport);
                self.tracker.track(offset, &layout.section_tops());

                scrollable::scroll_to(page_scroll_id(), AbsoluteOffset { x: 0.0, y: offset })
            }
            Message::WindowResized(size) => {
                self.viewport = Size::new(
                    size.width,
                    (size.height - ui::layout::NAV_HEIGHT).max(0.0),
                );

                let layout = ui::layout::resolve(&self.content, self.viewport);
                self.tracker.track(self.scroll_offset, &layout.section_tops());

                Task::none()
            }
            Message::OpenLightbox(reference) => {
                self.lightbox.open(reference);
                Task::none()
            }
            Message::CloseLightbox => {
                self.lightbox.close();
                Task::none()
            }
            Message::GalleryLoaded(loaded) => {
                let count = loaded.len();
                self.gallery.extend(loaded);

                self.status = format!("✅ Loaded {} gallery images.", count);
                println!("📸 Prepared {} gallery tiles", count);

                Task::none()
            }
            Message::LinkClicked(link) => {
                // A native window has no browser to hand the URL to, so put
                // it on the clipboard and say so
                self.status = format!("🔗 Copied {} to clipboard", link.url);
                iced::clipboard::write(link.url)
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let layout = ui::layout::resolve(&self.content, self.viewport);
        let active = self.tracker.active();

        let page = column![
            ui::hero::view(&self.content.profile, layout.height_of(Section::Home)),
            ui::projects::view(
                &self.content.projects_intro,
                &self.content.projects,
                &self.gallery,
                self.viewport.width,
                layout.height_of(Section::Projects),
            ),
            ui::tech::view(
                &self.content.tech_intro,
                &self.content.tech,
                self.viewport.width,
                layout.height_of(Section::Tech),
            ),
            ui::contact::view(
                &self.content.contact,
                &self.content.profile.name,
                layout.height_of(Section::Contact),
            ),
        ];

        let page = scrollable(page)
            .id(page_scroll_id())
            .on_scroll(Message::Scrolled)
            .width(Length::Fill)
            .height(Length::Fill);

        let base: Element<Message> = container(column![
            ui::nav::navbar(&self.content.profile.name, active, &self.status),
            page,
        ])
        .style(ui::theme::page)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

        match self.lightbox.image() {
            Some(reference) => ui::lightbox::modal(
                base,
                ui::lightbox::overlay(reference, self.gallery.get(reference)),
            ),
            None => base,
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let resized = event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
            _ => None,
        });

        // The frame timer only runs while a smooth scroll is in flight
        match self.animation {
            Some(_) => Subscription::batch([
                resized,
                time::every(Duration::from_millis(16)).map(Message::AnimationTick),
            ]),
            None => resized,
        }
    }
}

/// The one scrollable holding the page, addressable for programmatic scrolls
fn page_scroll_id() -> scrollable::Id {
    scrollable::Id::new("page")
}

fn main() -> iced::Result {
    iced::application("Jay Javier | Portfolio", Portfolio::update, Portfolio::view)
        .subscription(Portfolio::subscription)
        .theme(Portfolio::theme)
        .window_size(Size::new(1280.0, 860.0))
        .centered()
        .run_with(Portfolio::new)
}
