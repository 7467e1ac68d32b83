//! Translation tables.
//!
//! Text is looked up by key in the table of the selected [`Language`], falling
//! back to English, and `{name}` placeholders are replaced with the message
//! parameters.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use abduel_game::Message;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown language {value:?}, expected `en` or `zh`")]
pub struct LanguageParseError {
    pub value: String,
}

impl FromStr for Language {
    type Err = LanguageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "zh" | "zh-tw" | "zh_tw" | "tw" => Ok(Self::ZhTw),
            _ => Err(LanguageParseError {
                value: s.to_owned(),
            }),
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::En => f.write_str("en"),
            Self::ZhTw => f.write_str("zh-TW"),
        }
    }
}

impl Language {
    pub fn template(self, key: &str) -> Option<&'static str> {
        match self {
            Self::En => english(key),
            Self::ZhTw => chinese(key),
        }
    }

    /// Renders `key` with `params` substituted.
    ///
    /// Unknown keys render as the key itself so a missing translation is
    /// visible rather than silent.
    pub fn render<S>(self, key: &str, params: &[(&str, S)]) -> String
    where
        S: AsRef<str>,
    {
        let Some(template) = self.template(key).or_else(|| english(key)) else {
            return key.to_owned();
        };
        params
            .iter()
            .fold(template.to_owned(), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), value.as_ref())
            })
    }

    pub fn message(self, message: &Message) -> String {
        self.render(message.key(), &message.params())
    }
}

fn english(key: &str) -> Option<&'static str> {
    let text = match key {
        "game.started" => {
            "New game! I have picked a secret number with 4 different digits. Your turn to guess."
        }
        "turn.guess_result" => "{guess}: {a}A{b}B",
        "turn.final_turn" => {
            "Correct! You found my number in {rounds} guesses. I get one last guess to even the score."
        }
        "result.human_wins" => "You win in {rounds} guesses!",
        "result.computer_wins" => "I win! I found your number in {rounds} guesses.",
        "result.draw" => "Draw! We both found each other's number within {rounds} rounds.",
        "hint.consistent" => "{guess} fits every answer you have received. ({remaining} hints left)",
        "hint.inconsistent" => {
            "{guess} contradicts an answer you have received. ({remaining} hints left)"
        }
        "hint.none_remaining" => "No hints remaining.",
        "guess.wrong_length" => "A guess needs exactly 4 digits (got {len} characters).",
        "guess.not_a_digit" => "'{ch}' is not a digit.",
        "guess.duplicate_digit" => "The digit {digit} is used more than once.",
        "guess.incomplete" => "Enter all 4 digits first.",
        "guess.already_tried" => "You already guessed {guess}.",
        "feedback.out_of_range" => "Feedback values must be between 0 and 4 (got {value}).",
        "feedback.sum_too_large" => "{a}A{b}B is impossible: A + B cannot exceed 4.",
        "feedback.malformed" => "Feedback must look like `1 2` or `1A2B`.",
        "complaint.inconsistent" => {
            "Hmm, {guess} scoring {a}A{b}B contradicts your earlier answers. Re-enter the feedback, or fix an earlier round with `fix <round> <a> <b>`."
        }
        "complaint.no_possible_numbers" => {
            "No number fits your answers. Fix an earlier round with `fix <round> <a> <b>`, or start over with `reset`."
        }
        "state.not_started" => "No game in progress. Type `new` to start.",
        "state.game_over" => "This game is over. Type `new` to play again.",
        "state.not_human_turn" => "I am waiting for your feedback on my guess.",
        "state.not_computer_turn" => "It is your turn to guess.",
        "correction.unavailable" => "There is nothing to correct right now.",
        "correction.round_out_of_range" => {
            "There is no round {round} (I have made {rounds} answered guesses)."
        }
        "app.welcome" => {
            "Abduel: a 1A2B duel. Think of a 4-digit number with different digits and keep it to yourself. Type `help` for commands."
        }
        "app.help" => {
            "Commands:\n  <code> | guess <code>    guess my number, e.g. 0472\n  hint <code>             check a guess against the answers you got\n  <a>A<b>B | fb <a> <b>   answer my guess, e.g. 1A2B\n  fix <round> [<a> <b>]   correct the answer you gave in an earlier round\n  cancel                  close the correction editor\n  status                  show the score sheet\n  records                 list finished games\n  clear-records           delete finished games\n  lang <en|zh>            switch language\n  new | reset             start over\n  quit                    leave"
        }
        "app.thinking" => "Thinking...",
        "app.computer_guess" => "My guess: {guess}. How did I do? (e.g. `1A2B` or `fb 1 2`)",
        "app.your_turn" => "Your turn. Enter a 4-digit guess.",
        "app.secret" => "My number was {secret}.",
        "app.status" => {
            "Round {round} | you: {human} guesses | me: {computer} guesses | hints: {hints} | candidates: {candidates}"
        }
        "app.history_human" => "Your guesses:",
        "app.history_computer" => "My guesses:",
        "app.history_entry" => "  {round}. {guess} {a}A{b}B",
        "app.correction_open" => {
            "Editing round {round}: {guess} is recorded as {a}A{b}B. Enter the corrected feedback, or `cancel`."
        }
        "app.correction_cancelled" => "Correction cancelled.",
        "app.records_empty" => "No finished games yet.",
        "app.record_entry" => "  #{index} {winner}: you {human}, me {computer}, {rounds} rounds",
        "app.records_cleared" => "Match records cleared.",
        "app.language_changed" => "Language set to English.",
        "app.winner.human" => "you won",
        "app.winner.computer" => "I won",
        "app.winner.draw" => "draw",
        "app.winner.none" => "abandoned",
        "app.unknown_command" => "Unknown command `{command}`. Type `help` for a list.",
        "app.missing_argument" => "`{command}` needs more arguments. Type `help` for usage.",
        "app.invalid_number" => "`{value}` is not a number.",
        "app.invalid_language" => "Unknown language `{value}`. Use `en` or `zh`.",
        "app.store_failed" => "Could not save: {error}",
        "app.bye" => "Bye!",
        _ => return None,
    };
    Some(text)
}

fn chinese(key: &str) -> Option<&'static str> {
    let text = match key {
        "game.started" => "新遊戲開始!我已選好一個四位數字都不同的祕密數字。請你先猜。",
        "turn.guess_result" => "{guess}:{a}A{b}B",
        "turn.final_turn" => "答對了!你用 {rounds} 次猜中我的數字。為求公平,我還有最後一次機會。",
        "result.human_wins" => "你贏了!共猜了 {rounds} 次。",
        "result.computer_wins" => "我贏了!我用 {rounds} 次猜中你的數字。",
        "result.draw" => "平手!我們都在 {rounds} 回合內猜中對方的數字。",
        "hint.consistent" => "{guess} 符合你目前得到的所有回饋。(剩餘提示 {remaining} 次)",
        "hint.inconsistent" => "{guess} 與你得到的回饋矛盾。(剩餘提示 {remaining} 次)",
        "hint.none_remaining" => "提示次數已用完。",
        "guess.wrong_length" => "請輸入剛好 4 個數字(目前 {len} 個字元)。",
        "guess.not_a_digit" => "「{ch}」不是數字。",
        "guess.duplicate_digit" => "數字 {digit} 重複了。",
        "guess.incomplete" => "請先輸入完整的 4 個數字。",
        "guess.already_tried" => "你已經猜過 {guess} 了。",
        "feedback.out_of_range" => "回饋數值必須介於 0 到 4 之間(收到 {value})。",
        "feedback.sum_too_large" => "{a}A{b}B 不可能:A 與 B 的和不能超過 4。",
        "feedback.malformed" => "回饋格式應為 `1 2` 或 `1A2B`。",
        "complaint.inconsistent" => {
            "嗯……{guess} 得到 {a}A{b}B 和你之前的回答矛盾。請重新輸入回饋,或用 `fix <回合> <a> <b>` 修正之前的回答。"
        }
        "complaint.no_possible_numbers" => {
            "沒有任何數字符合你的回答。請用 `fix <回合> <a> <b>` 修正,或輸入 `reset` 重新開始。"
        }
        "state.not_started" => "目前沒有進行中的遊戲。輸入 `new` 開始。",
        "state.game_over" => "本局已結束。輸入 `new` 再玩一局。",
        "state.not_human_turn" => "我正在等你對我的猜測給出回饋。",
        "state.not_computer_turn" => "現在輪到你猜。",
        "correction.unavailable" => "目前沒有需要修正的內容。",
        "correction.round_out_of_range" => "沒有第 {round} 回合(我已有 {rounds} 次得到回饋的猜測)。",
        "app.welcome" => {
            "Abduel:1A2B 對決。請想好一個四位數字都不同的數字,不要說出來。輸入 `help` 查看指令。"
        }
        "app.help" => {
            "指令:\n  <數字> | guess <數字>    猜我的數字,例如 0472\n  hint <數字>             檢查猜測是否符合你得到的回饋\n  <a>A<b>B | fb <a> <b>   回答我的猜測,例如 1A2B\n  fix <回合> [<a> <b>]    修正之前某回合的回答\n  cancel                  關閉修正編輯\n  status                  顯示記分表\n  records                 列出已結束的對局\n  clear-records           刪除對局紀錄\n  lang <en|zh>            切換語言\n  new | reset             重新開始\n  quit                    離開"
        }
        "app.thinking" => "思考中……",
        "app.computer_guess" => "我猜:{guess}。結果如何?(例如 `1A2B` 或 `fb 1 2`)",
        "app.your_turn" => "輪到你了,請輸入四位數字。",
        "app.secret" => "我的數字是 {secret}。",
        "app.status" => {
            "第 {round} 回合 | 你:{human} 次 | 我:{computer} 次 | 提示:{hints} | 候選數:{candidates}"
        }
        "app.history_human" => "你的猜測:",
        "app.history_computer" => "我的猜測:",
        "app.history_entry" => "  {round}. {guess} {a}A{b}B",
        "app.correction_open" => {
            "修正第 {round} 回合:{guess} 目前記錄為 {a}A{b}B。請輸入正確的回饋,或輸入 `cancel`。"
        }
        "app.correction_cancelled" => "已取消修正。",
        "app.records_empty" => "尚無已結束的對局。",
        "app.record_entry" => "  #{index} {winner}:你 {human} 次,我 {computer} 次,共 {rounds} 回合",
        "app.records_cleared" => "已清除對局紀錄。",
        "app.language_changed" => "已切換為繁體中文。",
        "app.winner.human" => "你贏",
        "app.winner.computer" => "我贏",
        "app.winner.draw" => "平手",
        "app.winner.none" => "中途放棄",
        "app.unknown_command" => "未知的指令 `{command}`。輸入 `help` 查看指令。",
        "app.missing_argument" => "`{command}` 缺少參數。輸入 `help` 查看用法。",
        "app.invalid_number" => "`{value}` 不是數字。",
        "app.invalid_language" => "未知的語言 `{value}`。請使用 `en` 或 `zh`。",
        "app.store_failed" => "無法儲存:{error}",
        "app.bye" => "再見!",
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use abduel_core::Feedback;

    use super::*;

    const MESSAGES: &[Message] = &[
        Message::GameStarted,
        Message::NoHintsRemaining,
        Message::GuessIncomplete,
        Message::FeedbackMalformed,
        Message::NoPossibleNumbers,
        Message::NotStarted,
        Message::GameOver,
        Message::NotHumanTurn,
        Message::NotComputerTurn,
        Message::CorrectionUnavailable,
        Message::FinalTurn { rounds: 1 },
        Message::HumanWins { rounds: 1 },
        Message::ComputerWins { rounds: 1 },
        Message::Draw { rounds: 1 },
        Message::GuessWrongLength { len: 3 },
        Message::GuessNotADigit { ch: 'x' },
        Message::FeedbackOutOfRange { value: 5 },
        Message::FeedbackSumTooLarge { a: 3, b: 2 },
        Message::RoundOutOfRange {
            round: 3,
            rounds: 1,
        },
    ];

    #[test]
    fn test_every_message_is_translated() {
        for message in MESSAGES {
            for language in [Language::En, Language::ZhTw] {
                assert!(
                    language.template(message.key()).is_some(),
                    "{language} lacks {}",
                    message.key()
                );
                let text = language.message(message);
                assert!(!text.contains('{'), "{language} left a placeholder in {text}");
            }
        }
    }

    #[test]
    fn test_render_substitutes_params() {
        let message = Message::GuessResult {
            guess: "0472".parse().unwrap(),
            feedback: Feedback::new(1, 2).unwrap(),
        };
        assert_eq!(Language::En.message(&message), "0472: 1A2B");
        assert_eq!(Language::ZhTw.message(&message), "0472:1A2B");
    }

    #[test]
    fn test_unknown_key_renders_key() {
        assert_eq!(Language::ZhTw.render::<&str>("no.such.key", &[]), "no.such.key");
    }

    #[test]
    fn test_parse_language() {
        assert_eq!("zh".parse(), Ok(Language::ZhTw));
        assert_eq!("EN".parse(), Ok(Language::En));
        assert_eq!(Language::ZhTw.to_string(), "zh-TW");
        assert!("fr".parse::<Language>().is_err());
    }
}
