use super::Dictionary;

pub(super) static EN: Dictionary = Dictionary {
    app_title: "Smart Crop Advisory",
    app_subtitle: "Simple, multilingual advice for small and marginal farmers",
    language: "Language",
    login: "Login",
    logout: "Logout",

    farmer_id: "Farmer ID",
    phone: "Phone number",
    aadhaar: "Aadhaar (optional)",
    request_otp: "Request OTP",
    enter_otp: "Enter OTP",
    verify_otp: "Verify OTP",
    otp_sent: "OTP sent. Demo OTP:",
    otp_request_failed: "Failed to request OTP",
    otp_verify_failed: "Failed to verify OTP",

    recommendations: "AI Crop Recommendations",
    weather: "Weather Alerts",
    soil: "Soil Health Analysis",
    irrigation: "Irrigation Planning",
    pests: "Pest & Disease Alerts",
    market: "Market Updates",
    crop_calendar: "Crop Calendar",
    schemes: "Government Schemes",
    chatbot: "24/7 AI Chatbot",
    offline: "Works on low bandwidth. Saved language and login stay available offline.",
    features: &[
        "AI crop recommendations",
        "Weather risk alerts",
        "Soil health insights",
        "Pest and disease detection",
        "Market price updates",
        "Government scheme finder",
        "Crop calendar",
        "Chat in your language",
    ],

    please_login: "Please login",
    loading: "Loading...",
    unavailable: "This information is unavailable right now.",
    not_found: "Page not found",

    crop_suggestions: "Personalized Crop Suggestions",
    score: "Score",
    soil_health: "Soil Health",
    weather_risks: "Weather Risks",
    notifications: "Notifications",
    update: "Update",
    disease_detection: "AI Image-Based Disease Detection",
    analyze: "Analyze",
    choose_image: "Choose a leaf or crop photo",

    scheme_finder: "Government Scheme Finder",
    state: "State",
    crop: "Crop",
    search: "Search",
    no_results: "No matching schemes",

    run: "Run",
    json_placeholder: "{\"key\": \"value\"}",
    invalid_json: "Input must be valid JSON",

    chat_placeholder: "Type your question...",
    send: "Send",
    you: "You",
    bot: "Bot",

    services: "Services",
    service_list: &[
        "AI crop consultation",
        "Soil testing consultation",
        "Irrigation planning support",
        "Seasonal advisory",
    ],
    contact: "Contact: helpline 1800-180-1551",
    location: "Location: India",
    faq: "FAQ: OTP login, change language, offline use",
};
