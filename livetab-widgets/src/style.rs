//! Styling vocabulary shared by every widget
//!
//! Colors and font sizes map onto Shoelace design tokens, so rendered
//! styles read `var(--sl-color-primary-500)` rather than literal values.

use std::fmt;

/// How a widget asks its parent layout to size it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizePolicy {
    /// Width and height in pixels
    Fixed,
    /// Width in pixels, height follows the layout
    FixedWidth,
    /// Width as a percentage of the parent
    FixedRatioWidth,
    /// Height in pixels, width follows the layout
    FixedHeight,
    /// Height as a percentage of the parent
    FixedRatioHeight,
    /// Share the remaining space evenly
    #[default]
    Expanding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub policy: SizePolicy,
    pub width: u32,
    pub height: u32,
}

/// Main axis of a flex layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Row,
    Column,
}

impl Direction {
    /// Style of the container itself.
    pub fn container_style(self) -> &'static str {
        match self {
            Direction::Row => "display: flex; flex-direction: row;",
            Direction::Column => {
                "display: flex; flex-direction: column; flex: 1 1 0; width: 100%; height: 100%;"
            }
        }
    }

    /// Style a layout in this direction assigns to a child of `size`.
    pub fn child_style(self, size: Size) -> String {
        let Size { policy, width: w, height: h } = size;
        match (self, policy) {
            (_, SizePolicy::Expanding) => "flex: 1 1 0; width: 100%; height: 100%;".to_string(),

            (Direction::Row, SizePolicy::Fixed) => format!("flex: 0 0 {w}px; height: {h}px;"),
            (Direction::Row, SizePolicy::FixedWidth) => {
                format!("flex: 0 0 {w}px; height: 100%; width: {w}px;")
            }
            (Direction::Row, SizePolicy::FixedRatioWidth) => {
                format!("flex: 0 0 {w}%; height: 100%; width: {w}%;")
            }
            (Direction::Row, SizePolicy::FixedHeight) => {
                format!("flex: 1 1 0; width: 100%; height: {h}px;")
            }
            (Direction::Row, SizePolicy::FixedRatioHeight) => {
                format!("flex: 1 1 0; width: 100%; height: {h}%;")
            }

            (Direction::Column, SizePolicy::Fixed) => format!("flex: 0 0 {h}px; width: {w}px;"),
            (Direction::Column, SizePolicy::FixedWidth) => {
                format!("flex: 1 1 0; width: {w}px; height: 100%;")
            }
            (Direction::Column, SizePolicy::FixedRatioWidth) => {
                format!("flex: 1 1 0; width: {w}%; height: 100%;")
            }
            (Direction::Column, SizePolicy::FixedHeight) => {
                format!("flex: 0 0 {h}px; width: 100%;")
            }
            (Direction::Column, SizePolicy::FixedRatioHeight) => {
                format!("flex: 0 0 {h}%; width: 100%;")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Center,
    Start,
    End,
    Justify,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Center => "center",
            TextAlign::Start => "start",
            TextAlign::End => "end",
            TextAlign::Justify => "justify",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    #[default]
    Middle,
    Baseline,
    Top,
    Bottom,
    Sub,
    TextTop,
}

impl VerticalAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            VerticalAlign::Middle => "middle",
            VerticalAlign::Baseline => "baseline",
            VerticalAlign::Top => "top",
            VerticalAlign::Bottom => "bottom",
            VerticalAlign::Sub => "sub",
            VerticalAlign::TextTop => "text-top",
        }
    }
}

/// A swatch of the Shoelace palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    name: &'static str,
    swatch: u16,
}

impl Color {
    pub const fn new(name: &'static str, swatch: u16) -> Self {
        Self { name, swatch }
    }

    pub const PRIMARY: Color = Color::new("primary", 500);
    pub const SUCCESS: Color = Color::new("success", 500);
    pub const WARNING: Color = Color::new("warning", 500);
    pub const DANGER: Color = Color::new("danger", 500);
    pub const NEUTRAL: Color = Color::new("neutral", 500);
    pub const BLACK: Color = Color::new("neutral", 0);
    pub const WHITE: Color = Color::new("neutral", 1000);
    pub const GRAY: Color = Color::new("gray", 500);
    pub const RED: Color = Color::new("red", 500);
    pub const ORANGE: Color = Color::new("orange", 500);
    pub const AMBER: Color = Color::new("amber", 500);
    pub const YELLOW: Color = Color::new("yellow", 500);
    pub const LIME: Color = Color::new("lime", 500);
    pub const GREEN: Color = Color::new("green", 500);
    pub const EMERALD: Color = Color::new("emerald", 500);
    pub const TEAL: Color = Color::new("teal", 500);
    pub const CYAN: Color = Color::new("cyan", 500);
    pub const SKY: Color = Color::new("sky", 500);
    pub const BLUE: Color = Color::new("blue", 500);
    pub const INDIGO: Color = Color::new("indigo", 500);
    pub const VIOLET: Color = Color::new("violet", 500);
    pub const PURPLE: Color = Color::new("purple", 500);
    pub const FUCHSIA: Color = Color::new("fuchsia", 500);
    pub const PINK: Color = Color::new("pink", 500);
    pub const ROSE: Color = Color::new("rose", 500);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--sl-color-{}-{}", self.name, self.swatch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSize(&'static str);

impl FontSize {
    pub const XX_SMALL: FontSize = FontSize("2x-small");
    pub const X_SMALL: FontSize = FontSize("x-small");
    pub const SMALL: FontSize = FontSize("small");
    pub const MEDIUM: FontSize = FontSize("medium");
    pub const LARGE: FontSize = FontSize("large");
    pub const X_LARGE: FontSize = FontSize("x-large");
    pub const XX_LARGE: FontSize = FontSize("2x-large");
    pub const XXX_LARGE: FontSize = FontSize("3x-large");
    pub const XXXX_LARGE: FontSize = FontSize("4x-large");
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--sl-font-size-{}", self.0)
    }
}

/// Text and box decoration applied to a widget's content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub align: TextAlign,
    pub vertical_align: VerticalAlign,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub border: Option<Color>,
    pub border_radius: u32,
    pub font_size: Option<FontSize>,
    pub padding: u32,
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "text-align: {}; vertical-align: {};",
            self.align.as_str(),
            self.vertical_align.as_str()
        )?;
        if let Some(fg) = self.fg {
            write!(f, " color: var({fg});")?;
        }
        if let Some(bg) = self.bg {
            write!(f, " background-color: var({bg});")?;
        }
        if let Some(border) = self.border {
            write!(f, " border-color: var({border});")?;
        }
        write!(f, " border-radius: {}px;", self.border_radius)?;
        if let Some(size) = self.font_size {
            write!(f, " font-size: var({size});")?;
        }
        write!(f, " padding: {}px;", self.padding)
    }
}

/// Everything a widget knows about how it looks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Style {
    pub size: Size,
    /// Assigned by the parent layout on each render.
    pub size_style: String,
    pub text: TextStyle,
    pub margin: u32,
}

impl Style {
    pub fn margin_style(&self) -> String {
        format!("margin: {}px;", self.margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_tokens() {
        assert_eq!(Color::PRIMARY.to_string(), "--sl-color-primary-500");
        assert_eq!(Color::WHITE.to_string(), "--sl-color-neutral-1000");
        assert_eq!(FontSize::XX_LARGE.to_string(), "--sl-font-size-2x-large");
    }

    #[test]
    fn test_default_text_style() {
        assert_eq!(
            TextStyle::default().to_string(),
            "text-align: center; vertical-align: middle; border-radius: 0px; padding: 0px;"
        );
    }

    #[test]
    fn test_text_style_with_colors() {
        let style = TextStyle {
            fg: Some(Color::RED),
            font_size: Some(FontSize::LARGE),
            padding: 4,
            ..TextStyle::default()
        };
        assert_eq!(
            style.to_string(),
            "text-align: center; vertical-align: middle; color: var(--sl-color-red-500); \
             border-radius: 0px; font-size: var(--sl-font-size-large); padding: 4px;"
        );
    }

    #[test]
    fn test_vertical_align_bottom() {
        assert_eq!(VerticalAlign::Bottom.as_str(), "bottom");
    }

    #[test]
    fn test_child_styles_follow_direction() {
        let fixed_width = Size {
            policy: SizePolicy::FixedWidth,
            width: 120,
            height: 0,
        };
        assert_eq!(
            Direction::Row.child_style(fixed_width),
            "flex: 0 0 120px; height: 100%; width: 120px;"
        );
        assert_eq!(
            Direction::Column.child_style(fixed_width),
            "flex: 1 1 0; width: 120px; height: 100%;"
        );

        let ratio_height = Size {
            policy: SizePolicy::FixedRatioHeight,
            width: 0,
            height: 30,
        };
        assert_eq!(
            Direction::Column.child_style(ratio_height),
            "flex: 0 0 30%; width: 100%;"
        );
        assert_eq!(
            Direction::Row.child_style(Size::default()),
            "flex: 1 1 0; width: 100%; height: 100%;"
        );
    }
}
