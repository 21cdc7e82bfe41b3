// Fixed copy shown on the main screen

pub const BRAND: &str = "SonBarsa";
pub const HEADER_TITLE: &str = "Hindi SEO Title Generator by ";
pub const HEADER_TAGLINE: &str = "Powered by ";

pub const HERO_BADGE: &str = " AI-Powered SEO Optimization";
pub const HERO_HEADING_LEAD: &str = "हिंदी न्यूज़ टाइटल को ";
pub const HERO_HEADING_HIGHLIGHT: &str = "SEO-फ्रेंडली";
pub const HERO_HEADING_TAIL: &str = " बनाएं";
pub const HERO_DESCRIPTION: &str = "अपना हिंदी न्यूज़ टाइटल डालें और AI की मदद से Google-optimized SEO टाइटल पाएं। Ideal character count: 50-60.";

pub const INPUT_PLACEHOLDER: &str = "अपना हिंदी न्यूज़ टाइटल यहाँ लिखें...";

pub struct Tip {
    pub title: &'static str,
    pub description: &'static str,
}

pub const TIPS: [Tip; 3] = [
    Tip {
        title: "Optimizes for Google Discover and Search",
        description: "generates SEO-friendly, keyword-rich titles",
    },
    Tip {
        title: "Editorial integrity",
        description: "fully maintaining the ethos of responsible journalism maintains consistent headline quality",
    },
    Tip {
        title: "Compelling & Clear",
        description: "Saves desk time and Improves CTR, impressions, and overall engagement",
    },
];
