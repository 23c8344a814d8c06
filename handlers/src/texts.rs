//! Callback tags and user-facing strings.

/// Callback tags. A tag is both the inline button payload and the router selector.
pub mod tags {
    pub const CLICKED: &str = "clicked";
    pub const RESET: &str = "reset";
    pub const GUESS: &str = "guess";
    pub const QUIZ: &str = "quiz";
    pub const RIDDLE: &str = "riddle";
    pub const LIFEHACK: &str = "lifehack";
    pub const FACT: &str = "fact";
    pub const QUOTE: &str = "quote";
    pub const IMAGE: &str = "image";
    pub const DATETIME: &str = "datetime";
    pub const EMOTES: &str = "emotes";
    /// Payload of the emoji buttons. Nothing is registered for it, so presses are ignored.
    pub const EMOTE: &str = "emote";
    pub const RATE: &str = "rate";
    pub const THANKS: &str = "thanks";
    pub const NOT_THANKS: &str = "not-thanks";
    pub const CORRECT: &str = "correct";
    pub const WRONG: &str = "wrong";
}

pub const START_COMMAND: &str = "start";
pub const GREETING: &str = "Вітаю! Обери опцію нижче ⬇ / Hello! Choose an option below ⬇";
pub const SEND_PHONE_LABEL: &str = "📞 Надіслати номер телефону / Send phone number";
/// Reply keyboard entry that opens the inline menu; also its text selector.
pub const INLINE_MENU_LABEL: &str = "ℹ Інлайн кнопки / Inline buttons";
pub const INLINE_MENU_TEXT: &str = "Це інлайн-кнопки / These are inline buttons:";
pub const VISIT_WEBSITE_LABEL: &str = "🌐 Відвідати сайт / Visit website";
pub const CLICK_ME_LABEL: &str = "✅ Натисни мене / Click me";
pub const RESTART_LABEL: &str = "Перезапустити";
pub const CLICKS_RESET: &str = "Натискання стерті.";
pub const SCORE_LABEL: &str = "Кількість очок";

pub const GUESS_PROMPT: &str = "Guess the number";
pub const ANOTHER_LABEL: &str = "Another one";
pub const ANOTHER_LIFEHACK_LABEL: &str = "Інший";
pub const SELECT_EMOTION: &str = "Select emotion";
pub const EMOTIONS: [&str; 3] = ["😭", "🤨", "😂"];
pub const RATE_QUESTION: &str = "Тобі подобається бот? Так / Ні";
pub const RATE_YES: &str = "Так";
pub const RATE_NO: &str = "Ні";
pub const THANKS_REPLY: &str = "Thank you for your fair answer!";
pub const NOT_THANKS_REPLY: &str = "Why did you select that?";
pub const CORRECT_REPLY: &str = "CORRECT!!!";
pub const WRONG_REPLY: &str = "RONG!";

/// Labels of the inline menu, in display order, paired with their tags.
pub const INLINE_MENU: [(&str, &str); 11] = [
    ("Вгадай число", tags::GUESS),
    ("Quiz", tags::QUIZ),
    ("Лайфхаки", tags::LIFEHACK),
    ("Факти", tags::FACT),
    ("Цитати", tags::QUOTE),
    ("Нинішній час", tags::DATETIME),
    ("Емоція", tags::EMOTES),
    ("Питання", tags::RATE),
    ("Загадка", tags::RIDDLE),
    ("Випадкова картинка", tags::IMAGE),
    (CLICK_ME_LABEL, tags::CLICKED),
];

pub fn first_click_greeting(name: &str) -> String {
    format!("Привіт, давай дружить {}!", name)
}

pub fn clicks_reply(clicks: u64) -> String {
    format!(
        "Ви натиснули кнопку {} разів! / You clicked the button {} times!",
        clicks, clicks
    )
}

pub fn contact_thanks(phone_number: &str) -> String {
    format!(
        "Дякуємо! Ваш номер телефону: {} / Thank you! Your phone number: {}",
        phone_number, phone_number
    )
}

pub fn contact_not_saved(phone_number: &str) -> String {
    format!(
        "Дякуємо! Ваш номер телефону: {} отримано, але зберегти його не вдалося / \
         Thank you! Your phone number {} was received but could not be saved",
        phone_number, phone_number
    )
}
