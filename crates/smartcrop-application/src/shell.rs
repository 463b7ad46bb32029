//! Header and footer drawn around every view.

use smartcrop_core::{Dictionary, Language, Session};

use crate::screen::Line;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    pub header: Vec<Line>,
    pub footer: Vec<Line>,
}

impl Shell {
    pub fn compose(dict: &Dictionary, active: Language, session: &Session) -> Self {
        let languages = Language::all()
            .map(|lang| {
                if lang == active {
                    format!("[{}]", lang.native_name())
                } else {
                    format!("{} ({})", lang.native_name(), lang.code())
                }
            })
            .collect::<Vec<_>>()
            .join("  ");

        let mut header = vec![
            Line::Heading(dict.app_title.to_string()),
            Line::Muted(dict.app_subtitle.to_string()),
            Line::Text(format!("{}: {}", dict.language, languages)),
        ];

        if session.is_authenticated() {
            if let Some(farmer_id) = session.farmer_display() {
                header.push(Line::Text(format!("{}: {}", dict.farmer_id, farmer_id)));
            }
            header.push(Line::Link {
                label: dict.logout.to_string(),
                path: "logout".to_string(),
            });
        } else {
            header.push(Line::Link {
                label: dict.login.to_string(),
                path: "/login".to_string(),
            });
        }

        let mut footer = vec![Line::Muted(dict.services.to_string())];
        footer.extend(dict.service_list().iter().map(|s| Line::Bullet(s.to_string())));
        footer.extend([
            Line::Muted(dict.contact.to_string()),
            Line::Muted(dict.location.to_string()),
            Line::Muted(dict.faq.to_string()),
        ]);

        Self { header, footer }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartcrop_core::locale::dictionary;

    #[test]
    fn test_logged_out_header_offers_login() {
        let shell = Shell::compose(dictionary(Language::En), Language::En, &Session::empty());
        assert!(shell.header.contains(&Line::Link {
            label: "Login".into(),
            path: "/login".into()
        }));
        assert!(shell.header.iter().any(|l| matches!(
            l,
            Line::Text(t) if t.contains("[English]") && t.contains("हिन्दी (hi)")
        )));
        assert_eq!(shell.footer.len(), 8);
    }

    #[test]
    fn test_footer_lists_services_and_faq_topics() {
        let shell = Shell::compose(dictionary(Language::En), Language::En, &Session::empty());
        assert!(shell.footer.contains(&Line::Bullet("Soil testing consultation".into())));
        assert!(shell.footer.contains(&Line::Muted(
            "FAQ: OTP login, change language, offline use".into()
        )));
    }

    #[test]
    fn test_logged_in_header_shows_farmer() {
        let dict = dictionary(Language::Hi);
        let shell = Shell::compose(dict, Language::Hi, &Session::new("tok", "F-1"));
        assert!(shell.header.contains(&Line::Text(format!("{}: F-1", dict.farmer_id))));
        assert!(
            shell
                .header
                .iter()
                .any(|l| matches!(l, Line::Link { label, .. } if label == "लॉगआउट"))
        );
    }

    #[test]
    fn test_degraded_session_hides_farmer_line() {
        let dict = dictionary(Language::En);
        let shell = Shell::compose(dict, Language::En, &Session::new("tok", ""));
        assert!(
            !shell
                .header
                .iter()
                .any(|l| matches!(l, Line::Text(t) if t.starts_with("Farmer ID")))
        );
    }
}
