//! Concrete colors for category color tokens.
//!
//! Tokens resolve through a fixed table into inline style values. Class names
//! are never assembled from the token string.

use contracts::enums::ColorToken;

/// Resolved colors for one token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryPalette {
    /// Fill for the active filter button
    pub solid_bg: &'static str,
    pub solid_fg: &'static str,
    /// Soft fill for category badges on cards
    pub soft_bg: &'static str,
    pub soft_fg: &'static str,
}

const BLUE: CategoryPalette = CategoryPalette {
    solid_bg: "#2563eb",
    solid_fg: "#ffffff",
    soft_bg: "#dbeafe",
    soft_fg: "#1e40af",
};
const GREEN: CategoryPalette = CategoryPalette {
    solid_bg: "#16a34a",
    solid_fg: "#ffffff",
    soft_bg: "#dcfce7",
    soft_fg: "#166534",
};
const PURPLE: CategoryPalette = CategoryPalette {
    solid_bg: "#9333ea",
    solid_fg: "#ffffff",
    soft_bg: "#f3e8ff",
    soft_fg: "#6b21a8",
};
const YELLOW: CategoryPalette = CategoryPalette {
    solid_bg: "#ca8a04",
    solid_fg: "#ffffff",
    soft_bg: "#fef9c3",
    soft_fg: "#854d0e",
};
const RED: CategoryPalette = CategoryPalette {
    solid_bg: "#dc2626",
    solid_fg: "#ffffff",
    soft_bg: "#fee2e2",
    soft_fg: "#991b1b",
};
const CYAN: CategoryPalette = CategoryPalette {
    solid_bg: "#0891b2",
    solid_fg: "#ffffff",
    soft_bg: "#cffafe",
    soft_fg: "#155e75",
};
const PINK: CategoryPalette = CategoryPalette {
    solid_bg: "#db2777",
    solid_fg: "#ffffff",
    soft_bg: "#fce7f3",
    soft_fg: "#9d174d",
};
const INDIGO: CategoryPalette = CategoryPalette {
    solid_bg: "#4f46e5",
    solid_fg: "#ffffff",
    soft_bg: "#e0e7ff",
    soft_fg: "#3730a3",
};
const GRAY: CategoryPalette = CategoryPalette {
    solid_bg: "#4b5563",
    solid_fg: "#ffffff",
    soft_bg: "#f3f4f6",
    soft_fg: "#374151",
};
const SLATE: CategoryPalette = CategoryPalette {
    solid_bg: "#475569",
    solid_fg: "#ffffff",
    soft_bg: "#f1f5f9",
    soft_fg: "#334155",
};

pub fn palette(token: ColorToken) -> CategoryPalette {
    match token {
        ColorToken::Blue => BLUE,
        ColorToken::Green => GREEN,
        ColorToken::Purple => PURPLE,
        ColorToken::Yellow => YELLOW,
        ColorToken::Red => RED,
        ColorToken::Cyan => CYAN,
        ColorToken::Pink => PINK,
        ColorToken::Indigo => INDIGO,
        ColorToken::Gray => GRAY,
        ColorToken::Slate => SLATE,
    }
}

/// Inline style for a selected filter button
pub fn active_button_style(token: ColorToken) -> String {
    let p = palette(token);
    format!(
        "background-color: {}; color: {}; border-color: {};",
        p.solid_bg, p.solid_fg, p.solid_bg
    )
}

/// Inline style for a category badge on a card
pub fn badge_style(token: ColorToken) -> String {
    let p = palette(token);
    format!("background-color: {}; color: {};", p.soft_bg, p.soft_fg)
}
