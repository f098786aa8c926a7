use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

pub const COUNTDOWN_CALLBACK: &str = "countdown";

/// Single-button menu that asks for the countdown again.
pub fn main_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "⏳ нажми меня",
        COUNTDOWN_CALLBACK,
    )]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    #[test]
    fn test_single_countdown_button() {
        let menu = main_menu();
        assert_eq!(menu.inline_keyboard.len(), 1);
        assert_eq!(menu.inline_keyboard[0].len(), 1);

        let button = &menu.inline_keyboard[0][0];
        assert_eq!(button.text, "⏳ нажми меня");
        match &button.kind {
            InlineKeyboardButtonKind::CallbackData(data) => assert_eq!(data, COUNTDOWN_CALLBACK),
            other => panic!("unexpected button kind: {:?}", other),
        }
    }
}
