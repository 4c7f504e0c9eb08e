// src/services/chatbot.rs

/// What a message is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Watering,
    Sunlight,
    Fertilizing,
    Unknown,
}

/// Keyword rules in priority order. The first keyword found in the
/// lowercased message decides the topic.
pub const RULES: &[(&str, Topic)] = &[
    ("podlewanie", Topic::Watering),
    ("słońce", Topic::Sunlight),
    ("nawożenie", Topic::Fertilizing),
];

pub const WATERING_REPLY: &str = "Podlewanie zależy od gatunku rośliny. Na przykład sukulentów podlewamy rzadziej, a paprocie potrzebują więcej wilgoci.";
pub const SUNLIGHT_REPLY: &str = "Większość roślin lubi jasne miejsce, ale bez bezpośredniego słońca. Wyjątkiem są kaktusy, które preferują pełne słońce.";
pub const FERTILIZING_REPLY: &str = "Rośliny doniczkowe powinny być nawożone od wiosny do lata co 2-4 tygodnie. Zimą nie jest to konieczne.";
pub const DEFAULT_REPLY: &str = "Podlewanie roślin zależy od ich gatunku.";

impl Topic {
    pub fn reply(self) -> &'static str {
        match self {
            Topic::Watering => WATERING_REPLY,
            Topic::Sunlight => SUNLIGHT_REPLY,
            Topic::Fertilizing => FERTILIZING_REPLY,
            Topic::Unknown => DEFAULT_REPLY,
        }
    }
}

pub fn detect_topic(msg: &str) -> Topic {
    let msg_lower = msg.to_lowercase();

    RULES
        .iter()
        .find(|(keyword, _)| msg_lower.contains(keyword))
        .map(|&(_, topic)| topic)
        .unwrap_or(Topic::Unknown)
}

/// Canned reply for a message. Never empty.
pub fn generate_reply(user_msg: &str) -> &'static str {
    detect_topic(user_msg).reply()
}
