//! HTML, CSS and favicon rendering.

mod favicon;
mod page;
mod stylesheet;

pub use favicon::{Favicons, render_favicon};
pub use page::{
    DEFAULT_HTMX_SRC, render_index, render_input, render_messages, render_name, render_name_edit,
};
pub use stylesheet::render_stylesheet;

/// RGBA color
pub type Rgba = [u8; 4];

/// Visual themes a user can pick from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Brutal,
    Milky,
}

/// Colors of a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub accent: Rgba,
}

impl Theme {
    /// Order in which themes are offered to the user
    pub const ALL: [Theme; 2] = [Theme::Milky, Theme::Brutal];

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Brutal => "brutal",
            Theme::Milky => "milky",
        }
    }

    /// Theme for a stored preference; unknown values fall back to the default
    pub fn from_preference(preference: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|theme| theme.name() == preference)
            .unwrap_or_default()
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Brutal => Palette {
                primary: [0, 0, 0, 255],
                secondary: [0, 255, 0, 255],
                accent: [255, 255, 255, 255],
            },
            Theme::Milky => Palette {
                primary: [0, 0, 255, 255],
                secondary: [0, 255, 255, 255],
                accent: [255, 255, 255, 255],
            },
        }
    }
}

fn css_color(color: Rgba) -> String {
    format!("#{:02x}{:02x}{:02x}", color[0], color[1], color[2])
}
