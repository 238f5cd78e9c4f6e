//! The Documentation design system
//!
//! Denser theme for reference and help surfaces: tighter spacing, serif
//! headings, and a fixed light palette so rendered documentation looks
//! identical regardless of the platform appearance.

use uni_core::{Color, Gradient};

use crate::system::DesignSystem;
use crate::tokens::{
    AssetToken, ColorToken, DurationToken, FontDescription, FontFamily, FontToken, FontWeight,
    GradientToken, RadiusToken, SpacingToken,
};

/// Documentation palette
mod palette {
    use uni_core::Color;

    pub const PURPLE: Color = Color::from_hex(0xBF5AF2);
    pub const PURPLE_DEEP: Color = Color::from_hex(0xA849E0);
    pub const PURPLE_PRESSED: Color = Color::from_hex(0x8F35C4);
    pub const PINK: Color = Color::from_hex(0xFF375F);
    pub const INK: Color = Color::from_hex(0x1D1D1F);
    pub const INK_MUTED: Color = Color::from_hex(0x6E6E73);
    pub const PAPER: Color = Color::from_hex(0xFFFFFF);
    pub const PAPER_SHADED: Color = Color::from_hex(0xF6F6F8);
    pub const HAIRLINE: Color = Color::from_hex(0xE5E5EA);
    pub const RULE: Color = Color::from_hex(0xD2D2D7);
    pub const GREEN: Color = Color::from_hex(0x2DA44E);
    pub const AMBER: Color = Color::from_hex(0xBF8700);
    pub const RED: Color = Color::from_hex(0xCF222E);
    pub const BLUE: Color = Color::from_hex(0x0969DA);
}

pub fn documentation_system() -> DesignSystem {
    DesignSystem::builder("Documentation")
        // Brand
        .color(ColorToken::Primary, palette::PURPLE)
        .color(ColorToken::PrimaryHover, palette::PURPLE_DEEP)
        .color(ColorToken::PrimaryActive, palette::PURPLE_PRESSED)
        .color(ColorToken::Secondary, palette::PINK)
        .color(ColorToken::Accent, palette::PURPLE)
        // Surfaces (fixed light)
        .color(ColorToken::Background, palette::PAPER)
        .color(ColorToken::Surface, palette::PAPER_SHADED)
        .color(ColorToken::SurfaceElevated, palette::PAPER)
        // Text
        .color(ColorToken::TextPrimary, palette::INK)
        .color(ColorToken::TextSecondary, palette::INK_MUTED)
        .color(ColorToken::TextInverse, palette::PAPER)
        .color(ColorToken::Link, palette::PURPLE)
        // Borders
        .color(ColorToken::Border, palette::HAIRLINE)
        .color(ColorToken::BorderFocus, palette::PURPLE)
        .color(ColorToken::Separator, palette::RULE)
        // Status
        .color(ColorToken::Success, palette::GREEN)
        .color(ColorToken::Warning, palette::AMBER)
        .color(ColorToken::Error, palette::RED)
        .color(ColorToken::Info, palette::BLUE)
        // Spacing scale (denser than Default)
        .spacing(SpacingToken::Xs, 2.0)
        .spacing(SpacingToken::Small, 6.0)
        .spacing(SpacingToken::Medium, 10.0)
        .spacing(SpacingToken::Large, 16.0)
        .spacing(SpacingToken::Xl, 24.0)
        // Radii
        .radius(RadiusToken::None, 0.0)
        .radius(RadiusToken::Small, 3.0)
        .radius(RadiusToken::Medium, 6.0)
        .radius(RadiusToken::Large, 10.0)
        .radius(RadiusToken::Full, 9999.0)
        // Durations (seconds) - documentation keeps motion short
        .duration(DurationToken::Fast, 0.1)
        .duration(DurationToken::Normal, 0.2)
        .duration(DurationToken::Slow, 0.3)
        // Assets
        .asset(AssetToken::Logo, "docs/logo")
        .asset(AssetToken::LogoMark, "docs/logo-mark")
        .asset(AssetToken::Placeholder, "docs/placeholder")
        // Gradients
        .gradient(
            GradientToken::Hero,
            Gradient::linear(
                90.0,
                [
                    uni_core::GradientStop::new(palette::PURPLE, 0.0),
                    uni_core::GradientStop::new(palette::PINK, 1.0),
                ],
            ),
        )
        .gradient(
            GradientToken::AccentWash,
            Gradient::simple(palette::PURPLE.with_alpha(0.18), Color::TRANSPARENT),
        )
        // Fonts - serif headings, sans body, mono for code samples
        .font(
            FontToken::Headline,
            FontDescription::new(FontFamily::Serif, 26.0, FontWeight::Bold),
        )
        .font(
            FontToken::Title,
            FontDescription::new(FontFamily::Serif, 19.0, FontWeight::Semibold),
        )
        .font(
            FontToken::Body,
            FontDescription::new(FontFamily::SansSerif, 15.0, FontWeight::Regular),
        )
        .font(
            FontToken::Caption,
            FontDescription::new(FontFamily::SansSerif, 12.0, FontWeight::Regular),
        )
        .font(
            FontToken::Mono,
            FontDescription::new(FontFamily::Monospace, 13.0, FontWeight::Regular),
        )
        .build()
}
