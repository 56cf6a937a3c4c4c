//! 静态主题表
//!
//! 每位家庭成员对应一套页面主题（配色、字体、欢迎语、寄语）。
//! 主题是编译期数据，不落库；人员记录通过 theme 键引用，
//! slug 前缀作为后备映射。

use serde::Serialize;

/// 页面主题
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub theme_id: &'static str,
    pub name: &'static str,
    pub personal_message: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub background_gradient: &'static str,
    pub text_color: &'static str,
    pub card_bg: &'static str,
    pub welcome_message: &'static str,
    pub icon: &'static str,
    pub font_family: &'static str,
    pub display_font: &'static str,
    pub glow_color: &'static str,
    pub pattern_opacity: f32,
    /// 高对比度无障碍主题（配合读屏与语音反馈使用）
    pub is_accessible: bool,
}

/// 全部主题
pub static THEMES: &[Theme] = &[
    Theme {
        theme_id: "aviation",
        name: "Riley",
        personal_message: "Riley, I'm proud to be your uncle! It's fun watching you grow into adulthood and see your passions develop. Can't wait for more adventures together!",
        primary: "#38bdf8",
        secondary: "#475569",
        accent: "#fb923c",
        background: "#0a1628",
        background_gradient: "radial-gradient(ellipse at top, #1e3a5f 0%, #0a1628 50%, #030712 100%)",
        text_color: "#e0f2fe",
        card_bg: "rgba(15, 35, 60, 0.85)",
        welcome_message: "Ready for takeoff, Riley?",
        icon: "✈️",
        font_family: "'Exo 2', sans-serif",
        display_font: "'Orbitron', sans-serif",
        glow_color: "rgba(56, 189, 248, 0.4)",
        pattern_opacity: 0.15,
        is_accessible: false,
    },
    Theme {
        theme_id: "theater",
        name: "Ella",
        personal_message: "Ella, your love for books, theater, and travel inspires everyone around you. You have such a beautiful creative spirit and I'm so proud of the young woman you're becoming. Here's to many more adventures!",
        primary: "#fbbf24",
        secondary: "#991b1b",
        accent: "#fef3c7",
        background: "#1a0a0a",
        background_gradient: "radial-gradient(ellipse at center top, #3d1515 0%, #1a0a0a 60%, #0d0505 100%)",
        text_color: "#fef3c7",
        card_bg: "rgba(61, 21, 21, 0.8)",
        welcome_message: "The spotlight awaits, Ella!",
        icon: "🎭",
        font_family: "'Cormorant Garamond', serif",
        display_font: "'Playfair Display', serif",
        glow_color: "rgba(251, 191, 36, 0.5)",
        pattern_opacity: 0.12,
        is_accessible: false,
    },
    Theme {
        theme_id: "adventure",
        name: "Abby",
        personal_message: "Abby, you have a special ability to make friends, love others and lead! I'm excited for your future and can't wait to see what you do. I look forward to 2026 with you!",
        primary: "#4ade80",
        secondary: "#a16207",
        accent: "#fde047",
        background: "#0a1a10",
        background_gradient: "linear-gradient(180deg, #1a3d25 0%, #0a1a10 40%, #050d08 100%)",
        text_color: "#d9f99d",
        card_bg: "rgba(20, 50, 30, 0.85)",
        welcome_message: "The wild calls, Abby!",
        icon: "🏹",
        font_family: "'Nunito', sans-serif",
        display_font: "'Bebas Neue', sans-serif",
        glow_color: "rgba(74, 222, 128, 0.3)",
        pattern_opacity: 0.2,
        is_accessible: false,
    },
    Theme {
        theme_id: "science",
        name: "Colton",
        personal_message: "Colton, your curiosity and love for science is amazing! Never stop asking questions and exploring how things work. The world needs more curious minds like yours. Let's discover something awesome together!",
        primary: "#818cf8",
        secondary: "#4f46e5",
        accent: "#22d3ee",
        background: "#0a0a1a",
        background_gradient: "radial-gradient(ellipse at bottom, #1e1b4b 0%, #0a0a1a 60%, #050510 100%)",
        text_color: "#c7d2fe",
        card_bg: "rgba(30, 27, 75, 0.8)",
        welcome_message: "Let's experiment, Colton!",
        icon: "🔬",
        font_family: "'Space Mono', monospace",
        display_font: "'Audiowide', sans-serif",
        glow_color: "rgba(129, 140, 248, 0.4)",
        pattern_opacity: 0.25,
        is_accessible: false,
    },
    Theme {
        theme_id: "music",
        name: "Claire",
        personal_message: "Claire, your musical talent and love for mountain biking show what a well-rounded person you are! Whether you're playing the guitar or popping another tire, you bring so much energy to everything you do!",
        primary: "#c084fc",
        secondary: "#7e22ce",
        accent: "#f472b6",
        background: "#120a1a",
        background_gradient: "linear-gradient(135deg, #2d1b4e 0%, #120a1a 50%, #0a0510 100%)",
        text_color: "#f5d0fe",
        card_bg: "rgba(45, 27, 78, 0.8)",
        welcome_message: "Let's rock, Claire!",
        icon: "🎸",
        font_family: "'Poppins', sans-serif",
        display_font: "'Righteous', sans-serif",
        glow_color: "rgba(192, 132, 252, 0.4)",
        pattern_opacity: 0.18,
        is_accessible: false,
    },
    Theme {
        theme_id: "sports",
        name: "Jake",
        personal_message: "Jake, even though you are a warriors fan, I love that we share a passion for basketball together. You remind me of me when I was younger. Keep pursuing your passions!",
        primary: "#fb923c",
        secondary: "#1c1917",
        accent: "#facc15",
        background: "#0f0a05",
        background_gradient: "radial-gradient(ellipse at top right, #3d2610 0%, #0f0a05 60%, #050302 100%)",
        text_color: "#fff7ed",
        card_bg: "rgba(60, 35, 15, 0.85)",
        welcome_message: "Game on, Jake!",
        icon: "🏀",
        font_family: "'Barlow Condensed', sans-serif",
        display_font: "'Black Ops One', sans-serif",
        glow_color: "rgba(251, 146, 60, 0.4)",
        pattern_opacity: 0.2,
        is_accessible: false,
    },
    Theme {
        theme_id: "accessible",
        name: "Ezra",
        personal_message: "Ezra, you truly inspire me! You don't let anything hold you back and you face the world with courage. Excited for more adventures together!",
        primary: "#fbbf24",
        secondary: "#000000",
        accent: "#ffffff",
        background: "#000000",
        background_gradient: "linear-gradient(180deg, #1a1a1a 0%, #000000 100%)",
        text_color: "#ffffff",
        card_bg: "rgba(30, 30, 30, 0.95)",
        welcome_message: "Hey Ezra! Your adventures are ready!",
        icon: "🎸",
        font_family: "system-ui, -apple-system, sans-serif",
        display_font: "system-ui, -apple-system, sans-serif",
        glow_color: "rgba(251, 191, 36, 0.6)",
        pattern_opacity: 0.1,
        is_accessible: true,
    },
    Theme {
        theme_id: "parents",
        name: "Mom & Dad",
        personal_message: "Mom and Dad, what a lucky guy I am to be born into this family! I love and cherish our time together always. Looking forward to more of it.",
        primary: "#dc2626",
        secondary: "#166534",
        accent: "#fef3c7",
        background: "#0f0805",
        background_gradient: "radial-gradient(ellipse at top, #2d1810 0%, #0f0805 50%, #050302 100%)",
        text_color: "#fef7ed",
        card_bg: "rgba(45, 24, 16, 0.85)",
        welcome_message: "Merry Christmas, Mom & Dad!",
        icon: "🎄",
        font_family: "'Lora', serif",
        display_font: "'Playfair Display', serif",
        glow_color: "rgba(220, 38, 38, 0.35)",
        pattern_opacity: 0.15,
        is_accessible: false,
    },
    Theme {
        theme_id: "scottmelissa",
        name: "Scott, Melissa & Linda",
        personal_message: "Scott, Meliss, and Linda I'm glad you are back! Thanks for always being there for me. I'm excited for all that awaits us in the next year!",
        primary: "#0ea5e9",
        secondary: "#0369a1",
        accent: "#bae6fd",
        background: "#030a10",
        background_gradient: "linear-gradient(180deg, #0c2940 0%, #030a10 60%, #010408 100%)",
        text_color: "#e0f2fe",
        card_bg: "rgba(12, 41, 64, 0.8)",
        welcome_message: "Welcome home, Scott, Melissa and Linda!",
        icon: "⛵",
        font_family: "'Source Sans 3', sans-serif",
        display_font: "'Josefin Sans', sans-serif",
        glow_color: "rgba(14, 165, 233, 0.4)",
        pattern_opacity: 0.18,
        is_accessible: false,
    },
    Theme {
        theme_id: "jennymatt",
        name: "Jenny & Matt",
        personal_message: "Matt and Jen, thank you for being such great examples to me! One day I hope to emulate the family you've created :)",
        primary: "#a78bfa",
        secondary: "#6d28d9",
        accent: "#fcd34d",
        background: "#0d0a12",
        background_gradient: "radial-gradient(ellipse at bottom left, #1e1530 0%, #0d0a12 50%, #050308 100%)",
        text_color: "#ede9fe",
        card_bg: "rgba(30, 21, 48, 0.85)",
        welcome_message: "Merry Christmas, Jenny & Matt!",
        icon: "✨",
        font_family: "'Quicksand', sans-serif",
        display_font: "'Italiana', serif",
        glow_color: "rgba(167, 139, 250, 0.4)",
        pattern_opacity: 0.12,
        is_accessible: false,
    },
];

/// 按主题键查找
pub fn theme_by_id(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.theme_id == id)
}

/// 按 slug 前缀查找
///
/// slug 形如 "riley-a8f3k2"，取第一个 '-' 前的段（小写）映射到主题键。
pub fn theme_for_slug(slug: &str) -> Option<&'static Theme> {
    let prefix = slug.split('-').next().unwrap_or_default().to_lowercase();

    let theme_id = match prefix.as_str() {
        "riley" => "aviation",
        "ella" => "theater",
        "abby" => "adventure",
        "colton" => "science",
        "claire" => "music",
        "jake" => "sports",
        "ezra" => "accessible",
        "momdad" | "parents" => "parents",
        "scottmelissa" => "scottmelissa",
        "jennymatt" => "jennymatt",
        _ => return None,
    };

    theme_by_id(theme_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_by_id() {
        let theme = theme_by_id("sports").expect("sports theme");
        assert_eq!(theme.name, "Jake");
        assert_eq!(theme.icon, "🏀");

        assert!(theme_by_id("nonexistent").is_none());
    }

    #[test]
    fn test_theme_for_slug_prefix_mapping() {
        let theme = theme_for_slug("riley-a8f3k2").expect("riley theme");
        assert_eq!(theme.theme_id, "aviation");

        let theme = theme_for_slug("JAKE-xyz").expect("jake theme");
        assert_eq!(theme.theme_id, "sports");

        assert!(theme_for_slug("stranger-123").is_none());
        assert!(theme_for_slug("").is_none());
    }

    #[test]
    fn test_accessible_theme_is_flagged() {
        let theme = theme_for_slug("ezra-55aa").expect("ezra theme");
        assert!(theme.is_accessible);
        // 无障碍主题要求高对比度配色
        assert_eq!(theme.background, "#000000");
    }

    #[test]
    fn test_every_theme_has_distinct_id() {
        let mut ids: Vec<&str> = THEMES.iter().map(|t| t.theme_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), THEMES.len());
    }

    #[test]
    fn test_theme_serializes_camel_case() {
        let theme = theme_by_id("aviation").unwrap();
        let json = serde_json::to_value(theme).unwrap();
        assert_eq!(json["themeId"], "aviation");
        assert_eq!(json["welcomeMessage"], "Ready for takeoff, Riley?");
        assert!(json.get("backgroundGradient").is_some());
    }
}
