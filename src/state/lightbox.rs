/// Lightbox state machine
///
/// The lightbox shows a single enlarged gallery image over the page. It is
/// either closed or open on one asset reference; opening over an already
/// open image simply replaces it.
///
/// The controller does not validate references. Whether the asset behind a
/// reference actually decoded is the overlay view's concern, which falls
/// back to a placeholder.

/// Overlay state: closed, or open on one asset reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(String),
}

impl Lightbox {
    /// Show the overlay on the given asset. Last write wins.
    pub fn open(&mut self, reference: impl Into<String>) {
        *self = Lightbox::Open(reference.into());
    }

    /// Hide the overlay and discard the reference. Idempotent when closed.
    pub fn close(&mut self) {
        *self = Lightbox::Closed;
    }

    /// The asset on display, if the overlay is open.
    pub fn image(&self) -> Option<&str> {
        match self {
            Lightbox::Closed => None,
            Lightbox::Open(reference) => Some(reference),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let lightbox = Lightbox::default();
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.image(), None);
    }

    #[test]
    fn test_open_exposes_reference() {
        let mut lightbox = Lightbox::default();
        lightbox.open("screenshots/pse-1_result.png");

        assert!(lightbox.is_open());
        assert_eq!(lightbox.image(), Some("screenshots/pse-1_result.png"));
    }

    #[test]
    fn test_close_discards_reference() {
        let mut lightbox = Lightbox::default();
        lightbox.open("screenshots/ml1.jpeg");
        lightbox.close();

        assert_eq!(lightbox, Lightbox::Closed);
        assert_eq!(lightbox.image(), None);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut lightbox = Lightbox::default();
        lightbox.close();
        lightbox.close();
        assert_eq!(lightbox, Lightbox::Closed);
    }

    #[test]
    fn test_reopen_replaces_image() {
        let mut lightbox = Lightbox::default();
        lightbox.open("screenshots/ml1.jpeg");
        lightbox.open("screenshots/ml2.jpeg");

        assert_eq!(lightbox.image(), Some("screenshots/ml2.jpeg"));
    }
}
