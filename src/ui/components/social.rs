//! Social-login button
//!
//! Stateless control parameterized by a provider identifier. The visual
//! variant comes from a fixed lookup over known providers; anything else
//! falls back to a capitalized generic label with no icon. Activation is
//! the enclosing page's job; this module only renders.

use super::button::render_button;
use ratatui::{layout::Rect, Frame};

/// Icon stand-in for a known provider (brand glyphs don't exist in
/// terminal fonts, mirroring the Chrome-for-Google stand-in upstream)
pub fn provider_icon(provider: &str) -> Option<&'static str> {
    match provider.to_lowercase().as_str() {
        "google" => Some("◎"),
        "github" => Some("⑂"),
        _ => None,
    }
}

/// Display label for a provider
pub fn provider_label(provider: &str) -> String {
    match provider.to_lowercase().as_str() {
        "google" => "Sign in with Google".to_string(),
        "github" => "Sign in with GitHub".to_string(),
        other => {
            let mut chars = other.chars();
            let capitalized = match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            };
            format!("Sign in with {capitalized}")
        }
    }
}

/// Render a social-login button for a provider
pub fn render_social_button(
    frame: &mut Frame,
    area: Rect,
    provider: &str,
    is_selected: bool,
    is_loading: bool,
    busy_frame: &str,
) {
    let content = if is_loading {
        format!("{busy_frame} Processing...")
    } else {
        match provider_icon(provider) {
            Some(icon) => format!("{icon} {}", provider_label(provider)),
            None => provider_label(provider),
        }
    };
    render_button(frame, area, &content, is_selected, !is_loading);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_providers_have_icons() {
        assert!(provider_icon("google").is_some());
        assert!(provider_icon("github").is_some());
        assert!(provider_icon("GitHub").is_some());
    }

    #[test]
    fn test_unknown_provider_has_no_icon() {
        assert!(provider_icon("facebook").is_none());
        assert!(provider_icon("").is_none());
    }

    #[test]
    fn test_known_provider_labels() {
        assert_eq!(provider_label("google"), "Sign in with Google");
        assert_eq!(provider_label("github"), "Sign in with GitHub");
    }

    #[test]
    fn test_unknown_provider_falls_back_to_generic_label() {
        assert_eq!(provider_label("facebook"), "Sign in with Facebook");
        assert_eq!(provider_label("x"), "Sign in with X");
    }
}
