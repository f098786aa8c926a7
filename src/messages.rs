pub const START_TEXT: &str =
    "Привет! Я бот-таймер ⏳\n\nЖмякни кнопку ниже, чтобы узнать, сколько осталось до поездки.";

pub const HELP_TEXT: &str =
    "Я показываю, сколько осталось до поездки.\n\nПросто нажми кнопку под сообщением.";

pub const FALLBACK_TEXT: &str = "Что-то пошло не так, но ты можешь попробовать ещё раз 🙂";
