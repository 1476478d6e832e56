// DOM hooks and timings shared by the web frontend.

// Hero canvas
pub const CANVAS_ID: &str = "heroCanvas";

// Frame statistics: log the average frame time once per this many frames
pub const FRAME_STATS_INTERVAL: u32 = 600;

// Mobile menu markers
pub const MENU_BUTTON_SELECTOR: &str = "[data-mobile-menu-button]";
pub const MENU_CLOSE_SELECTOR: &str = "[data-close-menu-button]";
pub const MENU_PANEL_SELECTOR: &str = "[data-mobile-menu]";
pub const MENU_BACKDROP_SELECTOR: &str = "[data-backdrop]";
pub const HIDDEN_CLASS: &str = "hidden";
pub const SCROLL_LOCK_CLASS: &str = "overflow-hidden"; // on <body> while the menu is open

// Clipboard feedback
pub const COPY_BUTTON_SELECTOR: &str = ".copy-button";
pub const COPY_FEEDBACK_TEXT: &str = "Copied!";
pub const COPY_FEEDBACK_MS: i32 = 2000;

// In-page anchors
pub const IN_PAGE_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
