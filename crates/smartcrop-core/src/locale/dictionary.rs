//! Localized interface strings.

/// Every string the interface renders, for one language.
///
/// One field per key so that a catalog missing a translation does not compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    // Shell
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub language: &'static str,
    pub login: &'static str,
    pub logout: &'static str,

    // Login
    pub farmer_id: &'static str,
    pub phone: &'static str,
    pub aadhaar: &'static str,
    pub request_otp: &'static str,
    pub enter_otp: &'static str,
    pub verify_otp: &'static str,
    /// Prefix shown before the demo code, e.g. "OTP sent. Demo OTP:".
    pub otp_sent: &'static str,
    pub otp_request_failed: &'static str,
    pub otp_verify_failed: &'static str,

    // Navigation cards and page titles
    pub recommendations: &'static str,
    pub weather: &'static str,
    pub soil: &'static str,
    pub irrigation: &'static str,
    pub pests: &'static str,
    pub market: &'static str,
    pub crop_calendar: &'static str,
    pub schemes: &'static str,
    pub chatbot: &'static str,
    pub offline: &'static str,
    pub features: &'static [&'static str],

    // Placeholders
    pub please_login: &'static str,
    pub loading: &'static str,
    pub unavailable: &'static str,
    pub not_found: &'static str,

    // Dashboard
    pub crop_suggestions: &'static str,
    pub score: &'static str,
    pub soil_health: &'static str,
    pub weather_risks: &'static str,
    pub notifications: &'static str,
    pub update: &'static str,
    pub disease_detection: &'static str,
    pub analyze: &'static str,
    pub choose_image: &'static str,

    // Scheme finder
    pub scheme_finder: &'static str,
    pub state: &'static str,
    pub crop: &'static str,
    pub search: &'static str,
    pub no_results: &'static str,

    // Passthrough pages
    pub run: &'static str,
    pub json_placeholder: &'static str,
    pub invalid_json: &'static str,

    // Chat
    pub chat_placeholder: &'static str,
    pub send: &'static str,
    pub you: &'static str,
    pub bot: &'static str,

    // Footer
    pub services: &'static str,
    pub service_list: &'static [&'static str],
    pub contact: &'static str,
    pub location: &'static str,
    pub faq: &'static str,
}

impl Dictionary {
    /// All scalar entries as `(key, value)` pairs, in declaration order.
    ///
    /// `features` is list-valued and reported separately by [`Dictionary::features`].
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("appTitle", self.app_title),
            ("appSubtitle", self.app_subtitle),
            ("language", self.language),
            ("login", self.login),
            ("logout", self.logout),
            ("farmerId", self.farmer_id),
            ("phone", self.phone),
            ("aadhaar", self.aadhaar),
            ("requestOtp", self.request_otp),
            ("enterOtp", self.enter_otp),
            ("verifyOtp", self.verify_otp),
            ("otpSent", self.otp_sent),
            ("otpRequestFailed", self.otp_request_failed),
            ("otpVerifyFailed", self.otp_verify_failed),
            ("recommendations", self.recommendations),
            ("weather", self.weather),
            ("soil", self.soil),
            ("irrigation", self.irrigation),
            ("pests", self.pests),
            ("market", self.market),
            ("cropCalendar", self.crop_calendar),
            ("schemes", self.schemes),
            ("chatbot", self.chatbot),
            ("offline", self.offline),
            ("pleaseLogin", self.please_login),
            ("loading", self.loading),
            ("unavailable", self.unavailable),
            ("notFound", self.not_found),
            ("cropSuggestions", self.crop_suggestions),
            ("score", self.score),
            ("soilHealth", self.soil_health),
            ("weatherRisks", self.weather_risks),
            ("notifications", self.notifications),
            ("update", self.update),
            ("diseaseDetection", self.disease_detection),
            ("analyze", self.analyze),
            ("chooseImage", self.choose_image),
            ("schemeFinder", self.scheme_finder),
            ("state", self.state),
            ("crop", self.crop),
            ("search", self.search),
            ("noResults", self.no_results),
            ("run", self.run),
            ("jsonPlaceholder", self.json_placeholder),
            ("invalidJson", self.invalid_json),
            ("chatPlaceholder", self.chat_placeholder),
            ("send", self.send),
            ("you", self.you),
            ("bot", self.bot),
            ("services", self.services),
            ("contact", self.contact),
            ("location", self.location),
            ("faq", self.faq),
        ]
    }

    pub fn features(&self) -> &'static [&'static str] {
        self.features
    }

    pub fn service_list(&self) -> &'static [&'static str] {
        self.service_list
    }

    /// Looks up a scalar entry by its key.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Keys whose value is blank. Empty for every shipped catalog.
    pub fn blank_keys(&self) -> Vec<&'static str> {
        let mut blank: Vec<&'static str> = self
            .entries()
            .into_iter()
            .filter(|(_, v)| v.trim().is_empty())
            .map(|(k, _)| k)
            .collect();
        if self.features.is_empty() || self.features.iter().any(|f| f.trim().is_empty()) {
            blank.push("features");
        }
        if self.service_list.is_empty() || self.service_list.iter().any(|s| s.trim().is_empty()) {
            blank.push("serviceList");
        }
        blank
    }
}
