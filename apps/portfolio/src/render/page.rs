use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::models::Profile;
use crate::render::sections;
use crate::render::styles::{NOSCRIPT_STYLESHEET, PAGE_SCRIPT, STYLESHEET};
use crate::render::RenderOptions;

/// Renders the complete document. Same inputs, same bytes.
pub fn render_page(profile: &Profile, options: &RenderOptions) -> Markup {
    let personal = &profile.personal;
    html! {
        (DOCTYPE)
        html lang="en" class=(options.theme.class()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="description" content=(personal.summary);
                title { (personal.name) " | " (personal.role) }
                style { (PreEscaped(STYLESHEET)) }
                noscript { style { (PreEscaped(NOSCRIPT_STYLESHEET)) } }
            }
            body {
                (sections::body(profile, &options.avatar, options.year, &options.typing_endpoint))
                script { (PreEscaped(PAGE_SCRIPT)) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::default_profile;
    use crate::render::{AvatarSource, Theme};

    fn options(avatar: AvatarSource) -> RenderOptions {
        RenderOptions {
            theme: Theme::Dark,
            avatar,
            year: 2026,
            typing_endpoint: "/api/v1/typing".to_string(),
        }
    }

    fn photo() -> AvatarSource {
        AvatarSource::Image {
            src: "/assets/thihlinn.png".to_string(),
            initials: "TL".to_string(),
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let profile = default_profile();
        let opts = options(photo());
        assert_eq!(
            render_page(&profile, &opts).into_string(),
            render_page(&profile, &opts).into_string()
        );
    }

    #[test]
    fn test_theme_is_on_root_element() {
        let profile = default_profile();
        let mut opts = options(photo());
        assert!(render_page(&profile, &opts).0.contains("<html lang=\"en\" class=\"dark\">"));
        opts.theme = Theme::Light;
        assert!(render_page(&profile, &opts).0.contains("class=\"light\""));
    }

    #[test]
    fn test_sections_in_page_order() {
        let html = render_page(&default_profile(), &options(photo())).into_string();
        let order: Vec<usize> = [
            "id=\"summary\"",
            "id=\"skills\"",
            "id=\"experience\"",
            "id=\"education\"",
            "id=\"certifications\"",
            "<footer",
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]), "order: {order:?}");
    }

    #[test]
    fn test_variants_differ_only_in_avatar() {
        let profile = default_profile();
        let with_photo = render_page(&profile, &options(photo())).into_string();
        let with_initials =
            render_page(&profile, &options(AvatarSource::Initials("TL".into()))).into_string();
        assert!(with_photo.contains("<img"));
        assert!(!with_initials.contains("<img"));

        let head_len = with_photo.find("<div class=\"avatar\"").unwrap();
        assert_eq!(with_photo[..head_len], with_initials[..head_len]);
    }

    #[test]
    fn test_title_and_script_present() {
        let html = render_page(&default_profile(), &options(photo())).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Thiha Linn | Fullstack Developer</title>"));
        assert!(html.contains("EventSource"));
    }
}
