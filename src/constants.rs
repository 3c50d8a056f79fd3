/// Page wiring and panel styling constants.
///
/// Element ids the host page must provide, plus the few presentation values
/// the panels compute with.
// Canvas and scene header
pub const CANVAS_ID: &str = "principleCanvas";
pub const VISUAL_TITLE_ID: &str = "visualTitle";
pub const VISUAL_BADGE_ID: &str = "visualBadge";

// Navigation
pub const OUTLINE_ID: &str = "outlineContainer";
pub const LEARNING_PATH_ID: &str = "learningPath";
pub const RANDOM_BUTTON_ID: &str = "randomBtn";
pub const SOUND_BUTTON_ID: &str = "soundToggle";

// Info panes
pub const SLIDERS_ID: &str = "sliderControls";
pub const SUMMARY_ID: &str = "summaryText";
pub const FORMULA_ID: &str = "formulaText";

// Practice card
pub const PRACTICE_PROMPT_ID: &str = "practicePrompt";
pub const PRACTICE_STATUS_ID: &str = "practiceStatus";
pub const PRACTICE_VALUE_ID: &str = "practiceValue";
pub const PRACTICE_RING_ID: &str = "practiceRing";
pub const PRACTICE_RESET_ID: &str = "practiceReset";
pub const PRACTICE_EXPLAIN_ID: &str = "practiceExplain";

// Textbook modal
pub const TEXTBOOK_BUTTON_ID: &str = "textbookBtn";
pub const TEXTBOOK_MODAL_ID: &str = "textbookModal";
pub const TEXTBOOK_CONTENT_ID: &str = "textbookContent";
pub const TEXTBOOK_CLOSE_ID: &str = "textbookClose";

// Practice ring geometry (svg circle radius, px)
pub const PRACTICE_RING_RADIUS: f64 = 34.0;

// Practice status colours
pub const STATUS_OK_COLOR: &str = "#2da44e";
pub const STATUS_PENDING_COLOR: &str = "#56618a";

// How long the random button keeps its pressed look (ms)
pub const RANDOM_FLASH_MS: i32 = 400;
