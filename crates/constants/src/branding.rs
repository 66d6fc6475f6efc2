//! AAStar community branding.

#![allow(missing_docs)]

/// Community logo.
pub const LOGO: &str =
    "https://raw.githubusercontent.com/jhfnetboy/MarkDownImg/main/img/202505031325963.png";
/// Community icon.
pub const ICON: &str = "https://www.aastar.io/favicon.ico";

/// Brand color palette, as CSS hex colors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Colors {
    pub primary: &'static str,
    pub primary_light: &'static str,
    pub secondary: &'static str,
    pub secondary_dark: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub gray50: &'static str,
    pub gray100: &'static str,
    pub gray700: &'static str,
    pub gray800: &'static str,
    pub gray900: &'static str,
}

/// The AAStar palette.
pub const COLORS: Colors = Colors {
    primary: "#FF6B35",
    primary_light: "#FF8C42",
    secondary: "#4A90E2",
    secondary_dark: "#357ABD",
    success: "#4CAF50",
    warning: "#FFC107",
    error: "#F44336",
    gray50: "#F9FAFB",
    gray100: "#F3F4F6",
    gray700: "#374151",
    gray800: "#1F2937",
    gray900: "#111827",
};

/// External links.
#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Links {
    pub main: &'static str,
    pub air_account: &'static str,
    pub super_paymaster: &'static str,
    pub demo: &'static str,
    pub github: &'static str,
    pub discord: &'static str,
    pub twitter: &'static str,
}

/// AAStar links.
pub const LINKS: Links = Links {
    main: "https://aastar.io",
    air_account: "https://airAccount.aastar.io",
    super_paymaster: "https://superpaymaster.aastar.io",
    demo: "https://aastar.io/demo",
    github: "https://github.com/AAStarCommunity",
    discord: "https://discord.gg/aastar",
    twitter: "https://twitter.com/AAStarCommunity",
};
