use super::Dictionary;

pub(super) static TA: Dictionary = Dictionary {
    app_title: "ஸ்மார்ட் பயிர் ஆலோசனை",
    app_subtitle: "சிறு மற்றும் குறு விவசாயிகளுக்கான எளிய, பன்மொழி ஆலோசனை",
    language: "மொழி",
    login: "உள்நுழை",
    logout: "வெளியேறு",

    farmer_id: "விவசாயி அடையாள எண்",
    phone: "தொலைபேசி எண்",
    aadhaar: "ஆதார் (விருப்பம்)",
    request_otp: "OTP கோரு",
    enter_otp: "OTP உள்ளிடவும்",
    verify_otp: "OTP சரிபார்",
    otp_sent: "OTP அனுப்பப்பட்டது. டெமோ OTP:",
    otp_request_failed: "OTP கோர முடியவில்லை",
    otp_verify_failed: "OTP சரிபார்க்க முடியவில்லை",

    recommendations: "AI பயிர் பரிந்துரைகள்",
    weather: "வானிலை எச்சரிக்கைகள்",
    soil: "மண் வள பகுப்பாய்வு",
    irrigation: "நீர்ப்பாசன திட்டமிடல்",
    pests: "பூச்சி மற்றும் நோய் எச்சரிக்கைகள்",
    market: "சந்தை விலை நிலவரம்",
    crop_calendar: "பயிர் நாட்காட்டி",
    schemes: "அரசு திட்டங்கள்",
    chatbot: "24/7 AI அரட்டை உதவி",
    offline: "குறைந்த இணைய வேகத்திலும் இயங்கும். தேர்ந்த மொழியும் உள்நுழைவும் இணையமின்றியும் நிலைக்கும்.",
    features: &[
        "AI பயிர் பரிந்துரைகள்",
        "வானிலை அபாய எச்சரிக்கைகள்",
        "மண் வள தகவல்கள்",
        "பூச்சி மற்றும் நோய் கண்டறிதல்",
        "சந்தை விலை நிலவரம்",
        "அரசு திட்ட தேடல்",
        "பயிர் நாட்காட்டி",
        "உங்கள் மொழியில் உரையாடல்",
    ],

    please_login: "தயவுசெய்து உள்நுழையவும்",
    loading: "ஏற்றப்படுகிறது...",
    unavailable: "இந்த தகவல் தற்போது கிடைக்கவில்லை.",
    not_found: "பக்கம் கிடைக்கவில்லை",

    crop_suggestions: "உங்களுக்கான பயிர் பரிந்துரைகள்",
    score: "மதிப்பெண்",
    soil_health: "மண் வளம்",
    weather_risks: "வானிலை அபாயங்கள்",
    notifications: "அறிவிப்புகள்",
    update: "புதுப்பிப்பு",
    disease_detection: "AI படம் மூலம் நோய் கண்டறிதல்",
    analyze: "பகுப்பாய்வு செய்",
    choose_image: "இலை அல்லது பயிர் படத்தைத் தேர்ந்தெடுக்கவும்",

    scheme_finder: "அரசு திட்ட தேடல்",
    state: "மாநிலம்",
    crop: "பயிர்",
    search: "தேடு",
    no_results: "பொருந்தும் திட்டங்கள் இல்லை",

    run: "இயக்கு",
    json_placeholder: "{\"key\": \"value\"}",
    invalid_json: "உள்ளீடு சரியான JSON ஆக இருக்க வேண்டும்",

    chat_placeholder: "உங்கள் கேள்வியை தட்டச்சு செய்யவும்...",
    send: "அனுப்பு",
    you: "நீங்கள்",
    bot: "உதவியாளர்",

    services: "சேவைகள்",
    service_list: &[
        "செயற்கை நுண்ணறிவு பயிர் ஆலோசனை",
        "மண் பரிசோதனை ஆலோசனை",
        "நீர்ப்பாசன திட்டமிடல் உதவி",
        "பருவகால ஆலோசனை",
    ],
    contact: "தொடர்பு: உதவி எண் 1800-180-1551",
    location: "இடம்: இந்தியா",
    faq: "அடிக்கடி கேட்கப்படும் கேள்விகள்: ஓடிபி உள்நுழைவு, மொழி மாற்றம், இணையமில்லா பயன்பாடு",
};
