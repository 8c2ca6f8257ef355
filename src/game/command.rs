/// A player command parsed from one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Buy(Option<String>),
    Sell(Option<String>),
    Explore,
    Move,
    LookForTrouble,
    Hunt,
    Dig,
    Exit,
    Invalid(String),
}

impl Command {
    /// Parse a line. The first token picks the command (case-insensitive); for
    /// buy/sell the rest of the line names the item.
    pub fn parse(raw: &str) -> Self {
        let lower = raw.trim().to_lowercase();
        let mut it = lower.splitn(2, char::is_whitespace);
        let op = it.next().unwrap_or("");
        let arg = it
            .next()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string);
        match (op, arg) {
            ("b", item) => Command::Buy(item),
            ("s", item) => Command::Sell(item),
            ("e", None) => Command::Explore,
            ("m", None) => Command::Move,
            ("l", None) => Command::LookForTrouble,
            ("h", None) => Command::Hunt,
            ("d", None) => Command::Dig,
            ("x", None) => Command::Exit,
            _ => Command::Invalid(raw.trim().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letters_ignore_case_and_padding() {
        assert_eq!(Command::parse("E"), Command::Explore);
        assert_eq!(Command::parse("  m "), Command::Move);
        assert_eq!(Command::parse("L"), Command::LookForTrouble);
        assert_eq!(Command::parse("h"), Command::Hunt);
        assert_eq!(Command::parse("D"), Command::Dig);
        assert_eq!(Command::parse("x"), Command::Exit);
        assert_eq!(Command::parse("b"), Command::Buy(None));
    }

    #[test]
    fn shop_commands_take_an_item() {
        assert_eq!(Command::parse("B Rope"), Command::Buy(Some("rope".into())));
        assert_eq!(
            Command::parse("s   water  "),
            Command::Sell(Some("water".into()))
        );
    }

    #[test]
    fn anything_else_is_invalid() {
        for raw in ["q", "", "move", "hh", "x now", "?"] {
            assert!(
                matches!(Command::parse(raw), Command::Invalid(_)),
                "{:?} should be invalid",
                raw
            );
        }
    }
}
