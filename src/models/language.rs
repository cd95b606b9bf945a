//! Kiosk languages and their translation tables.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Interface language chosen on the landing screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "mr")]
    Marathi,
}

/// User-facing strings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    pub welcome: &'static str,
    pub select_language: &'static str,
    pub login_title: &'static str,
    pub enter_mobile: &'static str,
    pub get_otp: &'static str,
    pub verify_otp: &'static str,
    pub home_title: &'static str,
    pub track_status: &'static str,
    pub file_complaint: &'static str,
    pub admin_login: &'static str,
    pub back: &'static str,
    pub submit: &'static str,
    pub close: &'static str,
    pub complaint_success: &'static str,
    pub request_id: &'static str,
}

const ENGLISH: Translation = Translation {
    welcome: "Welcome to SUVIDHA",
    select_language: "Please Select Your Language",
    login_title: "Citizen Authentication",
    enter_mobile: "Enter 10-Digit Mobile Number",
    get_otp: "Get OTP",
    verify_otp: "Verify & Login",
    home_title: "How can we help you today?",
    track_status: "Track Application Status",
    file_complaint: "New Service Request",
    admin_login: "Official Login",
    back: "Go Back",
    submit: "Submit",
    close: "Close",
    complaint_success: "Request Submitted Successfully",
    request_id: "Request ID",
};

const HINDI: Translation = Translation {
    welcome: "सुविधा में आपका स्वागत है",
    select_language: "कृपया अपनी भाषा चुनें",
    login_title: "नागरिक प्रमाणीकरण",
    enter_mobile: "10-अंकीय मोबाइल नंबर दर्ज करें",
    get_otp: "ओटीपी प्राप्त करें",
    verify_otp: "सत्यापित करें और लॉगिन करें",
    home_title: "आज हम आपकी क्या मदद कर सकते हैं?",
    track_status: "आवेदन की स्थिति ट्रैक करें",
    file_complaint: "नई सेवा अनुरोध",
    admin_login: "आधिकारिक लॉगिन",
    back: "पीछे जाएं",
    submit: "जमा करें",
    close: "बंद करें",
    complaint_success: "अनुरोध सफलतापूर्वक जमा किया गया",
    request_id: "अनुरोध आईडी",
};

const MARATHI: Translation = Translation {
    welcome: "सुविधा मध्ये आपले स्वागत आहे",
    select_language: "कृपया तुमची भाषा निवडा",
    login_title: "नागरिक प्रमाणीकरण",
    enter_mobile: "10-अंकी मोबाईल नंबर प्रविष्ट करा",
    get_otp: "ओटीपी मिळवा",
    verify_otp: "सत्यापित करा आणि लॉगिन करा",
    home_title: "आज आम्ही तुम्हाला कशी मदत करू शकतो?",
    track_status: "अर्जाची स्थिती तपासा",
    file_complaint: "नवीन सेवा विनंती",
    admin_login: "शासकीय लॉगिन",
    back: "परत जा",
    submit: "सबमिट करा",
    close: "बंद करा",
    complaint_success: "विनंती यशस्वीरित्या सबमिट केली",
    request_id: "विनंती आयडी",
};

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Marathi];

    /// ISO 639-1 code, also the persisted tag
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Marathi => "mr",
        }
    }

    /// Name of the language written in that language
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Marathi => "मराठी",
        }
    }

    pub fn translation(&self) -> &'static Translation {
        match self {
            Language::English => &ENGLISH,
            Language::Hindi => &HINDI,
            Language::Marathi => &MARATHI,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == lower || lang.native_name().to_ascii_lowercase() == lower)
            .ok_or_else(|| format!("unsupported language: {s}"))
    }
}
