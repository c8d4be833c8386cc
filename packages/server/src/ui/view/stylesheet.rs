//! Theme stylesheets.

use super::{Theme, css_color};

/// Stylesheet for `theme`
pub fn render_stylesheet(theme: Theme) -> String {
    let palette = theme.palette();
    let background = css_color(palette.primary);
    let foreground = css_color(palette.secondary);
    let highlight = css_color(palette.accent);
    let (font, radius) = match theme {
        Theme::Brutal => ("monospace", "0"),
        Theme::Milky => ("sans-serif", "0.75rem"),
    };

    format!(
        r#"body {{
  margin: 0 auto;
  max-width: 48rem;
  padding: 1rem;
  background: {background};
  color: {foreground};
  font-family: {font};
}}
header {{
  display: flex;
  justify-content: space-between;
  align-items: center;
  border-bottom: 2px solid {foreground};
  padding-bottom: 0.5rem;
}}
#name {{
  cursor: pointer;
  font-weight: bold;
}}
input, select, button {{
  background: {background};
  color: {foreground};
  border: 2px solid {foreground};
  border-radius: {radius};
  font-family: inherit;
  padding: 0.25rem 0.5rem;
}}
button:hover {{
  background: {foreground};
  color: {background};
}}
#input {{
  display: flex;
  gap: 0.5rem;
  margin: 1rem 0;
}}
#input input {{
  flex: 1;
}}
.messages {{
  list-style: none;
  padding: 0;
}}
.message {{
  border: 1px solid {foreground};
  border-radius: {radius};
  margin-bottom: 0.5rem;
  padding: 0.5rem;
}}
.message.system {{
  color: {highlight};
  font-style: italic;
}}
.message time {{
  float: right;
  font-size: 0.75rem;
  opacity: 0.7;
}}
.message p {{
  margin: 0.25rem 0 0;
  overflow-wrap: anywhere;
}}
"#
    )
}
