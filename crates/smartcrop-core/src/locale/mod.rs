//! Interface languages and their string catalogs.

mod dictionary;
mod en;
mod hi;
mod language;
mod pa;
pub mod store;
mod ta;

pub use dictionary::Dictionary;
pub use language::Language;
pub use store::LocaleStore;

/// Returns the complete catalog for a language.
pub fn dictionary(language: Language) -> &'static Dictionary {
    match language {
        Language::En => &en::EN,
        Language::Hi => &hi::HI,
        Language::Pa => &pa::PA,
        Language::Ta => &ta::TA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalog_is_complete() {
        for lang in Language::all() {
            let dict = dictionary(lang);
            assert!(
                dict.blank_keys().is_empty(),
                "{} has blank keys: {:?}",
                lang,
                dict.blank_keys()
            );
        }
    }

    #[test]
    fn test_catalogs_share_key_set_and_feature_count() {
        let reference = dictionary(Language::En);
        let keys: Vec<_> = reference.entries().into_iter().map(|(k, _)| k).collect();
        for lang in Language::all() {
            let dict = dictionary(lang);
            let other: Vec<_> = dict.entries().into_iter().map(|(k, _)| k).collect();
            assert_eq!(keys, other);
            assert_eq!(dict.features().len(), reference.features().len(), "{lang}");
            assert_eq!(
                dict.service_list().len(),
                reference.service_list().len(),
                "{lang}"
            );
        }
    }

    #[test]
    fn test_catalogs_are_actually_translated() {
        let en = dictionary(Language::En);
        for lang in Language::all().filter(|l| *l != Language::En) {
            assert_ne!(dictionary(lang).app_title, en.app_title, "{lang}");
            assert_ne!(dictionary(lang).please_login, en.please_login, "{lang}");
        }
    }

    #[test]
    fn test_lookup_by_key() {
        let dict = dictionary(Language::Hi);
        assert_eq!(dict.get("login"), Some("लॉगिन"));
        assert_eq!(dict.get("cropCalendar"), Some(dict.crop_calendar));
        assert_eq!(dict.get("noSuchKey"), None);
    }
}
