use plant_chatbot::services::chatbot::{
    DEFAULT_REPLY, FERTILIZING_REPLY, RULES, SUNLIGHT_REPLY, Topic, WATERING_REPLY, detect_topic,
    generate_reply,
};

#[test]
fn test_detect_topic() {
    assert_eq!(detect_topic("Jak wygląda podlewanie storczyka?"), Topic::Watering);
    assert_eq!(detect_topic("Czy fikus lubi słońce?"), Topic::Sunlight);
    assert_eq!(detect_topic("nawożenie monstery"), Topic::Fertilizing);
    assert_eq!(detect_topic("Jak przesadzić palmę?"), Topic::Unknown);
}

#[test]
fn test_keyword_anywhere_in_message() {
    assert_eq!(generate_reply("podlewanie"), WATERING_REPLY);
    assert_eq!(generate_reply("xxpodlewaniexx"), WATERING_REPLY);
    assert_eq!(generate_reply("A co z podlewanie?"), WATERING_REPLY);
}

#[test]
fn test_case_insensitive() {
    assert_eq!(generate_reply("PODLEWANIE"), generate_reply("podlewanie"));
    assert_eq!(generate_reply("Podlewanie"), WATERING_REPLY);
    assert_eq!(generate_reply("SŁOŃCE"), SUNLIGHT_REPLY);
    assert_eq!(generate_reply("NawOżEnie"), FERTILIZING_REPLY);
}

#[test]
fn test_priority_order() {
    assert_eq!(generate_reply("słońce i podlewanie"), WATERING_REPLY);
    assert_eq!(generate_reply("nawożenie, słońce"), SUNLIGHT_REPLY);
    assert_eq!(generate_reply("nawożenie słońce podlewanie"), WATERING_REPLY);
}

#[test]
fn test_default_reply() {
    // Stems of the keywords do not match.
    assert_eq!(generate_reply("Jak często podlewać kaktusa?"), DEFAULT_REPLY);
    assert_eq!(generate_reply("slonce"), DEFAULT_REPLY);
    assert_eq!(generate_reply("   "), DEFAULT_REPLY);
    assert_eq!(generate_reply("🌵"), DEFAULT_REPLY);
}

#[test]
fn test_replies_never_empty() {
    for topic in [
        Topic::Watering,
        Topic::Sunlight,
        Topic::Fertilizing,
        Topic::Unknown,
    ] {
        assert!(!topic.reply().is_empty());
    }
}

#[test]
fn test_rules_are_lowercase() {
    for (keyword, _) in RULES {
        assert_eq!(*keyword, keyword.to_lowercase());
    }
}
