/// View modules
///
/// One module per page region, plus the shared palette (theme.rs) and the
/// layout arithmetic (layout.rs) the section tracker depends on. Everything
/// here is a pure function of content and interaction state.

pub mod contact;
pub mod hero;
pub mod layout;
pub mod lightbox;
pub mod nav;
pub mod projects;
pub mod tech;
pub mod theme;
