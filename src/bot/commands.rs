//! Bot command surface.

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "snake_case", description = "Supported commands:")]
pub enum Command {
    #[command(description = "what this bot does")]
    Start,
    #[command(description = "transcribe in the language spoken")]
    SetTranscribeGivenLanguage,
    #[command(description = "transcribe everything in English")]
    SetTranslateToEnglish,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_parse_from_their_slash_forms() {
        let bot_name = "tgscribe_bot";
        assert_eq!(Command::parse("/start", bot_name).unwrap(), Command::Start);
        assert_eq!(
            Command::parse("/set_transcribe_given_language", bot_name).unwrap(),
            Command::SetTranscribeGivenLanguage
        );
        assert_eq!(
            Command::parse("/set_translate_to_english", bot_name).unwrap(),
            Command::SetTranslateToEnglish
        );
    }

    #[test]
    fn unknown_command_does_not_parse() {
        assert!(Command::parse("/set_volume", "tgscribe_bot").is_err());
    }
}
