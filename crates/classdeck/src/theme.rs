use eframe::egui::Color32;

use crate::deck::Module;

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_tertiary: Color32,
    pub accent: Color32,
    pub glass: Color32,
    pub glass_border: Color32,
    pub h1_size: f32,
    pub h2_size: f32,
    pub h3_size: f32,
    pub body_size: f32,
    pub small_size: f32,
    pub stat_size: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::masterclass()
    }
}

impl Theme {
    pub fn masterclass() -> Self {
        Self {
            background: Color32::from_rgb(0x0A, 0x0A, 0x0F),
            text_primary: Color32::from_rgb(0xF5, 0xF5, 0xF7),
            text_secondary: Color32::from_rgb(0xA1, 0xA1, 0xAA),
            text_tertiary: Color32::from_rgb(0x71, 0x71, 0x7A),
            accent: Color32::from_rgb(0x00, 0xD4, 0xAA),
            glass: Color32::from_rgba_unmultiplied(0xFF, 0xFF, 0xFF, 8),
            glass_border: Color32::from_rgba_unmultiplied(0xFF, 0xFF, 0xFF, 20),
            h1_size: 92.0,
            h2_size: 64.0,
            h3_size: 44.0,
            body_size: 32.0,
            small_size: 22.0,
            stat_size: 112.0,
        }
    }

    /// Apply opacity to a color, keeping its own alpha as the ceiling.
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        let f = opacity.clamp(0.0, 1.0);
        let scale = |c: u8| (c as f32 * f) as u8;
        Color32::from_rgba_premultiplied(
            scale(color.r()),
            scale(color.g()),
            scale(color.b()),
            scale(color.a()),
        )
    }

    /// Accent for a slide: the module color when there is one.
    pub fn module_accent(&self, module: Option<&Module>) -> Color32 {
        module
            .and_then(|m| parse_hex(&m.color))
            .unwrap_or(self.accent)
    }
}

/// Parse `#rrggbb` (leading `#` optional).
pub fn parse_hex(s: &str) -> Option<Color32> {
    let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(
            parse_hex("#00d4aa"),
            Some(Color32::from_rgb(0x00, 0xD4, 0xAA))
        );
        assert_eq!(
            parse_hex("3B82F6"),
            Some(Color32::from_rgb(0x3B, 0x82, 0xF6))
        );
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#gg0000"), None);
        assert_eq!(parse_hex("teal"), None);
    }

    #[test]
    fn test_with_opacity_scales_existing_alpha() {
        let c = Theme::with_opacity(Color32::from_rgb(10, 20, 30), 0.5);
        assert_eq!(c.a(), 127);
        let glass = Theme::masterclass().glass;
        assert!(Theme::with_opacity(glass, 1.0).a() <= glass.a());
        assert_eq!(Theme::with_opacity(glass, 0.0).a(), 0);
    }

    #[test]
    fn test_module_accent_falls_back() {
        let theme = Theme::masterclass();
        assert_eq!(theme.module_accent(None), theme.accent);
        let module = Module {
            number: 2,
            title: "Strategy".into(),
            color: "#3b82f6".into(),
            duration: None,
        };
        assert_eq!(
            theme.module_accent(Some(&module)),
            Color32::from_rgb(0x3B, 0x82, 0xF6)
        );
    }
}
