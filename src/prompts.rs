use crate::models::Mode;

pub const GENERAL_SYSTEM: &str = include_str!("../data/prompts/general_system.txt");
pub const CODE_SYSTEM: &str = include_str!("../data/prompts/code_system.txt");
pub const GENERAL_TEXT_USER: &str = include_str!("../data/prompts/general_text.txt");
pub const CODE_TEXT_USER: &str = include_str!("../data/prompts/code_text.txt");
pub const GENERAL_IMAGE_USER: &str = include_str!("../data/prompts/general_image.txt");
pub const CODE_IMAGE_USER: &str = include_str!("../data/prompts/code_image.txt");

/// Which kind of user input drives the prompt template.
///
/// Text wins when both are supplied; see [`crate::models::AnalysisRequest::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Image,
}

/// Structural/tonal template handed to the model, independent of user content.
pub fn system_instruction(mode: Mode) -> &'static str {
    match mode {
        Mode::General => GENERAL_SYSTEM,
        Mode::Code => CODE_SYSTEM,
    }
}

/// Task instruction for the attached content, by mode and input kind.
pub fn user_instruction(mode: Mode, kind: InputKind) -> &'static str {
    match (mode, kind) {
        (Mode::General, InputKind::Text) => GENERAL_TEXT_USER,
        (Mode::General, InputKind::Image) => GENERAL_IMAGE_USER,
        (Mode::Code, InputKind::Text) => CODE_TEXT_USER,
        (Mode::Code, InputKind::Image) => CODE_IMAGE_USER,
    }
}

/// Replace `{{key}}` placeholders in a template string.
///
/// Substitutions are applied in order, so user-supplied values belong last.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}
