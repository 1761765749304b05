/// Palette and widget styles
///
/// One dark palette for the whole page. Styles live here as plain functions
/// so view modules stay declarative.

use iced::widget::{button, container, text};
use iced::{Background, Border, Color, Shadow, Theme};

pub const BACKGROUND: Color = Color {
    r: 0.055,
    g: 0.067,
    b: 0.086,
    a: 1.0,
};

pub const SURFACE: Color = Color {
    r: 0.090,
    g: 0.110,
    b: 0.149,
    a: 1.0,
};

pub const SURFACE_RAISED: Color = Color {
    r: 0.133,
    g: 0.161,
    b: 0.220,
    a: 1.0,
};

pub const ACCENT: Color = Color {
    r: 0.486,
    g: 0.424,
    b: 0.941,
    a: 1.0,
};

pub const TEXT: Color = Color {
    r: 0.910,
    g: 0.918,
    b: 0.949,
    a: 1.0,
};

pub const TEXT_DIM: Color = Color {
    r: 0.604,
    g: 0.639,
    b: 0.710,
    a: 1.0,
};

const BACKDROP: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.82,
};

// ========== Containers ==========

pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKGROUND)),
        text_color: Some(TEXT),
        ..container::Style::default()
    }
}

pub fn navbar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        text_color: Some(TEXT),
        ..container::Style::default()
    }
}

pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        border: Border {
            color: SURFACE_RAISED,
            width: 1.0,
            radius: 14.0.into(),
        },
        ..container::Style::default()
    }
}

/// Small pill next to a project title.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color { a: 0.18, ..ACCENT })),
        text_color: Some(ACCENT),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 999.0.into(),
        },
        ..container::Style::default()
    }
}

/// Technology tag chip.
pub fn tag(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE_RAISED)),
        text_color: Some(TEXT),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

/// Dimmed full-window layer behind the lightbox.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKDROP)),
        ..container::Style::default()
    }
}

/// The card holding the enlarged lightbox image.
pub fn overlay_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        border: Border {
            color: SURFACE_RAISED,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

// ========== Text ==========

pub fn dim(_theme: &Theme) -> text::Style {
    text::Style { color: Some(TEXT_DIM) }
}

pub fn accent_text(_theme: &Theme) -> text::Style {
    text::Style { color: Some(ACCENT) }
}

// ========== Buttons ==========

/// A navigation entry; the active section gets the accent color.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let color = if active || matches!(status, button::Status::Hovered) {
            ACCENT
        } else {
            TEXT_DIM
        };

        button::Style {
            background: None,
            text_color: color,
            border: Border::default(),
            shadow: Shadow::default(),
        }
    }
}

/// Filled call-to-action button.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => lighten(ACCENT, 0.08),
        _ => ACCENT,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 10.0.into(),
        },
        shadow: Shadow::default(),
    }
}

/// Outlined button for secondary actions and external links.
pub fn secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => lighten(ACCENT, 0.12),
        _ => ACCENT,
    };

    button::Style {
        background: None,
        text_color,
        border: Border {
            color: text_color,
            width: 1.0,
            radius: 10.0.into(),
        },
        shadow: Shadow::default(),
    }
}

/// Invisible button wrapping a gallery tile; hover shows an accent frame.
pub fn tile(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => ACCENT,
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: None,
        text_color: TEXT,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: 8.0.into(),
        },
        shadow: Shadow::default(),
    }
}

/// The lightbox close control.
pub fn close(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => ACCENT,
        _ => TEXT,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
    }
}

fn lighten(color: Color, amount: f32) -> Color {
    Color {
        r: (color.r + amount).min(1.0),
        g: (color.g + amount).min(1.0),
        b: (color.b + amount).min(1.0),
        a: color.a,
    }
}
