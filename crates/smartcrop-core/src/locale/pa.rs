use super::Dictionary;

pub(super) static PA: Dictionary = Dictionary {
    app_title: "ਸਮਾਰਟ ਫ਼ਸਲ ਸਲਾਹ",
    app_subtitle: "ਛੋਟੇ ਅਤੇ ਸੀਮਾਂਤ ਕਿਸਾਨਾਂ ਲਈ ਸੌਖੀ, ਬਹੁ-ਭਾਸ਼ੀ ਸਲਾਹ",
    language: "ਭਾਸ਼ਾ",
    login: "ਲੌਗਇਨ",
    logout: "ਲੌਗਆਊਟ",

    farmer_id: "ਕਿਸਾਨ ਆਈਡੀ",
    phone: "ਫ਼ੋਨ ਨੰਬਰ",
    aadhaar: "ਆਧਾਰ (ਵਿਕਲਪਿਕ)",
    request_otp: "ਓਟੀਪੀ ਭੇਜੋ",
    enter_otp: "ਓਟੀਪੀ ਦਰਜ ਕਰੋ",
    verify_otp: "ਓਟੀਪੀ ਪੁਸ਼ਟੀ ਕਰੋ",
    otp_sent: "ਓਟੀਪੀ ਭੇਜਿਆ ਗਿਆ। ਡੈਮੋ ਓਟੀਪੀ:",
    otp_request_failed: "ਓਟੀਪੀ ਭੇਜਣ ਵਿੱਚ ਅਸਫਲ",
    otp_verify_failed: "ਓਟੀਪੀ ਪੁਸ਼ਟੀ ਅਸਫਲ",

    recommendations: "ਏਆਈ ਫ਼ਸਲ ਸਿਫ਼ਾਰਸ਼ਾਂ",
    weather: "ਮੌਸਮ ਚੇਤਾਵਨੀਆਂ",
    soil: "ਮਿੱਟੀ ਸਿਹਤ ਵਿਸ਼ਲੇਸ਼ਣ",
    irrigation: "ਸਿੰਚਾਈ ਯੋਜਨਾ",
    pests: "ਕੀੜੇ ਅਤੇ ਰੋਗ ਚੇਤਾਵਨੀਆਂ",
    market: "ਮੰਡੀ ਭਾਅ",
    crop_calendar: "ਫ਼ਸਲ ਕੈਲੰਡਰ",
    schemes: "ਸਰਕਾਰੀ ਯੋਜਨਾਵਾਂ",
    chatbot: "24/7 ਏਆਈ ਚੈਟਬੋਟ",
    offline: "ਘੱਟ ਇੰਟਰਨੈੱਟ 'ਤੇ ਵੀ ਚੱਲਦਾ ਹੈ। ਚੁਣੀ ਭਾਸ਼ਾ ਅਤੇ ਲੌਗਇਨ ਆਫ਼ਲਾਈਨ ਵੀ ਬਣੇ ਰਹਿੰਦੇ ਹਨ।",
    features: &[
        "ਏਆਈ ਫ਼ਸਲ ਸਿਫ਼ਾਰਸ਼ਾਂ",
        "ਮੌਸਮ ਖ਼ਤਰਾ ਚੇਤਾਵਨੀਆਂ",
        "ਮਿੱਟੀ ਸਿਹਤ ਜਾਣਕਾਰੀ",
        "ਕੀੜੇ ਅਤੇ ਰੋਗ ਪਛਾਣ",
        "ਮੰਡੀ ਭਾਅ ਅੱਪਡੇਟ",
        "ਸਰਕਾਰੀ ਯੋਜਨਾ ਖੋਜ",
        "ਫ਼ਸਲ ਕੈਲੰਡਰ",
        "ਆਪਣੀ ਭਾਸ਼ਾ ਵਿੱਚ ਗੱਲਬਾਤ",
    ],

    please_login: "ਕਿਰਪਾ ਕਰਕੇ ਲੌਗਇਨ ਕਰੋ",
    loading: "ਲੋਡ ਹੋ ਰਿਹਾ ਹੈ...",
    unavailable: "ਇਹ ਜਾਣਕਾਰੀ ਹਾਲੇ ਉਪਲਬਧ ਨਹੀਂ ਹੈ।",
    not_found: "ਪੰਨਾ ਨਹੀਂ ਮਿਲਿਆ",

    crop_suggestions: "ਤੁਹਾਡੇ ਲਈ ਫ਼ਸਲ ਸੁਝਾਅ",
    score: "ਸਕੋਰ",
    soil_health: "ਮਿੱਟੀ ਦੀ ਸਿਹਤ",
    weather_risks: "ਮੌਸਮ ਖ਼ਤਰੇ",
    notifications: "ਸੂਚਨਾਵਾਂ",
    update: "ਅੱਪਡੇਟ",
    disease_detection: "ਏਆਈ ਫ਼ੋਟੋ ਅਧਾਰਿਤ ਰੋਗ ਪਛਾਣ",
    analyze: "ਜਾਂਚ ਕਰੋ",
    choose_image: "ਪੱਤੇ ਜਾਂ ਫ਼ਸਲ ਦੀ ਫ਼ੋਟੋ ਚੁਣੋ",

    scheme_finder: "ਸਰਕਾਰੀ ਯੋਜਨਾ ਖੋਜਕ",
    state: "ਰਾਜ",
    crop: "ਫ਼ਸਲ",
    search: "ਖੋਜੋ",
    no_results: "ਕੋਈ ਮਿਲਦੀ ਯੋਜਨਾ ਨਹੀਂ",

    run: "ਚਲਾਓ",
    json_placeholder: "{\"key\": \"value\"}",
    invalid_json: "ਇਨਪੁੱਟ ਸਹੀ JSON ਹੋਣਾ ਚਾਹੀਦਾ ਹੈ",

    chat_placeholder: "ਆਪਣਾ ਸਵਾਲ ਲਿਖੋ...",
    send: "ਭੇਜੋ",
    you: "ਤੁਸੀਂ",
    bot: "ਬੋਟ",

    services: "ਸੇਵਾਵਾਂ",
    service_list: &[
        "ਏਆਈ ਫਸਲ ਸਲਾਹ",
        "ਮਿੱਟੀ ਜਾਂਚ ਸਲਾਹ",
        "ਸਿੰਚਾਈ ਯੋਜਨਾ ਸਹਾਇਤਾ",
        "ਮੌਸਮੀ ਸਲਾਹ",
    ],
    contact: "ਸੰਪਰਕ: ਹੈਲਪਲਾਈਨ 1800-180-1551",
    location: "ਸਥਾਨ: ਭਾਰਤ",
    faq: "ਆਮ ਸਵਾਲ: ਓਟੀਪੀ ਲੌਗਇਨ, ਭਾਸ਼ਾ ਬਦਲੋ, ਔਫਲਾਈਨ ਵਰਤੋਂ",
};
