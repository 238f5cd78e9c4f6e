//! The Default design system
//!
//! General-purpose application theme. Text, separators, and background
//! surfaces use semantic color roles so they track the platform
//! appearance; brand and status colors are fixed values.

use uni_core::{Color, Gradient};

use crate::system::DesignSystem;
use crate::tokens::{
    AssetToken, ColorToken, DurationToken, FontDescription, FontFamily, FontToken, FontWeight,
    GradientToken, RadiusToken, SemanticColor, SpacingToken,
};

/// Default palette
mod palette {
    use uni_core::Color;

    pub const BLUE: Color = Color::from_hex(0x0A84FF);
    pub const BLUE_DEEP: Color = Color::from_hex(0x0071E3);
    pub const BLUE_PRESSED: Color = Color::from_hex(0x0060BF);
    pub const INDIGO: Color = Color::from_hex(0x5E5CE6);
    pub const GREEN: Color = Color::from_hex(0x34C759);
    pub const ORANGE: Color = Color::from_hex(0xFF9F0A);
    pub const RED: Color = Color::from_hex(0xFF3B30);
    pub const CYAN: Color = Color::from_hex(0x5AC8FA);
    pub const BORDER_GRAY: Color = Color::from_hex(0xD1D1D6);
}

pub fn default_system() -> DesignSystem {
    DesignSystem::builder("Default")
        // Brand
        .color(ColorToken::Primary, palette::BLUE)
        .color(ColorToken::PrimaryHover, palette::BLUE_DEEP)
        .color(ColorToken::PrimaryActive, palette::BLUE_PRESSED)
        .color(ColorToken::Secondary, palette::INDIGO)
        .color(ColorToken::Accent, palette::BLUE)
        // Surfaces track the platform appearance
        .semantic_color(ColorToken::Background, SemanticColor::SystemBackground)
        .semantic_color(ColorToken::Surface, SemanticColor::SecondarySystemBackground)
        .color(ColorToken::SurfaceElevated, Color::WHITE)
        // Text
        .semantic_color(ColorToken::TextPrimary, SemanticColor::Label)
        .semantic_color(ColorToken::TextSecondary, SemanticColor::SecondaryLabel)
        .color(ColorToken::TextInverse, Color::WHITE)
        .semantic_color(ColorToken::Link, SemanticColor::Link)
        // Borders
        .color(ColorToken::Border, palette::BORDER_GRAY)
        .color(ColorToken::BorderFocus, palette::BLUE)
        .semantic_color(ColorToken::Separator, SemanticColor::Separator)
        // Status
        .color(ColorToken::Success, palette::GREEN)
        .color(ColorToken::Warning, palette::ORANGE)
        .color(ColorToken::Error, palette::RED)
        .color(ColorToken::Info, palette::CYAN)
        // Spacing scale (4pt base)
        .spacing(SpacingToken::Xs, 4.0)
        .spacing(SpacingToken::Small, 8.0)
        .spacing(SpacingToken::Medium, 16.0)
        .spacing(SpacingToken::Large, 24.0)
        .spacing(SpacingToken::Xl, 32.0)
        // Radii
        .radius(RadiusToken::None, 0.0)
        .radius(RadiusToken::Small, 4.0)
        .radius(RadiusToken::Medium, 8.0)
        .radius(RadiusToken::Large, 16.0)
        .radius(RadiusToken::Full, 9999.0)
        // Durations (seconds)
        .duration(DurationToken::Fast, 0.15)
        .duration(DurationToken::Normal, 0.25)
        .duration(DurationToken::Slow, 0.4)
        // Assets
        .asset(AssetToken::Logo, "uni/logo")
        .asset(AssetToken::LogoMark, "uni/logo-mark")
        .asset(AssetToken::Placeholder, "uni/placeholder")
        // Gradients
        .gradient(
            GradientToken::Hero,
            Gradient::simple(palette::BLUE, palette::INDIGO),
        )
        .gradient(
            GradientToken::AccentWash,
            Gradient::radial(
                [0.5, 0.3],
                0.8,
                [
                    uni_core::GradientStop::new(palette::BLUE.with_alpha(0.25), 0.0),
                    uni_core::GradientStop::new(Color::TRANSPARENT, 1.0),
                ],
            ),
        )
        // Fonts
        .font(
            FontToken::Headline,
            FontDescription::new(FontFamily::SansSerif, 28.0, FontWeight::Bold),
        )
        .font(
            FontToken::Title,
            FontDescription::new(FontFamily::SansSerif, 20.0, FontWeight::Semibold),
        )
        .font(
            FontToken::Body,
            FontDescription::new(FontFamily::SansSerif, 17.0, FontWeight::Regular),
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
