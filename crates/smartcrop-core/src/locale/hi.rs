use super::Dictionary;

pub(super) static HI: Dictionary = Dictionary {
    app_title: "स्मार्ट फसल सलाह",
    app_subtitle: "छोटे और सीमांत किसानों के लिए सरल, बहुभाषी सलाह",
    language: "भाषा",
    login: "लॉगिन",
    logout: "लॉगआउट",

    farmer_id: "किसान आईडी",
    phone: "फ़ोन नंबर",
    aadhaar: "आधार (वैकल्पिक)",
    request_otp: "ओटीपी भेजें",
    enter_otp: "ओटीपी दर्ज करें",
    verify_otp: "ओटीपी सत्यापित करें",
    otp_sent: "ओटीपी भेजा गया। डेमो ओटीपी:",
    otp_request_failed: "ओटीपी भेजने में विफल",
    otp_verify_failed: "ओटीपी सत्यापन विफल",

    recommendations: "एआई फसल सिफारिशें",
    weather: "मौसम चेतावनी",
    soil: "मिट्टी स्वास्थ्य विश्लेषण",
    irrigation: "सिंचाई योजना",
    pests: "कीट और रोग चेतावनी",
    market: "मंडी भाव",
    crop_calendar: "फसल कैलेंडर",
    schemes: "सरकारी योजनाएँ",
    chatbot: "24/7 एआई चैटबॉट",
    offline: "कम इंटरनेट पर भी चलता है। चुनी गई भाषा और लॉगिन ऑफ़लाइन भी बने रहते हैं।",
    features: &[
        "एआई फसल सिफारिशें",
        "मौसम जोखिम चेतावनी",
        "मिट्टी स्वास्थ्य जानकारी",
        "कीट और रोग पहचान",
        "मंडी भाव अपडेट",
        "सरकारी योजना खोज",
        "फसल कैलेंडर",
        "अपनी भाषा में बातचीत",
    ],

    please_login: "कृपया लॉगिन करें",
    loading: "लोड हो रहा है...",
    unavailable: "यह जानकारी अभी उपलब्ध नहीं है।",
    not_found: "पृष्ठ नहीं मिला",

    crop_suggestions: "आपके लिए फसल सुझाव",
    score: "स्कोर",
    soil_health: "मिट्टी का स्वास्थ्य",
    weather_risks: "मौसम जोखिम",
    notifications: "सूचनाएँ",
    update: "अपडेट",
    disease_detection: "एआई फोटो आधारित रोग पहचान",
    analyze: "जाँचें",
    choose_image: "पत्ती या फसल की फोटो चुनें",

    scheme_finder: "सरकारी योजना खोजक",
    state: "राज्य",
    crop: "फसल",
    search: "खोजें",
    no_results: "कोई मेल खाती योजना नहीं",

    run: "चलाएँ",
    json_placeholder: "{\"key\": \"value\"}",
    invalid_json: "इनपुट मान्य JSON होना चाहिए",

    chat_placeholder: "अपना प्रश्न लिखें...",
    send: "भेजें",
    you: "आप",
    bot: "बॉट",

    services: "सेवाएँ",
    service_list: &[
        "एआई फसल परामर्श",
        "मिट्टी परीक्षण परामर्श",
        "सिंचाई योजना सहायता",
        "मौसमी सलाह",
    ],
    contact: "संपर्क: हेल्पलाइन 1800-180-1551",
    location: "स्थान: भारत",
    faq: "सामान्य प्रश्न: ओटीपी लॉगिन, भाषा बदलें, ऑफ़लाइन उपयोग",
};
