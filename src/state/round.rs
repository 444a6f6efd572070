use serde::{Deserialize, Serialize};

/// One round's text: what each player was asked and what they answered.
///
/// Fields pair up positionally only; nothing ties an answer to its
/// question beyond the names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    player_one_question: String,
    player_two_question: String,
    player_one_answer: String,
    player_two_answer: String,
}

impl Round {
    /// Builds a round from the two questions followed by the two answers.
    pub fn new(
        player_one_question: String,
        player_two_question: String,
        player_one_answer: String,
        player_two_answer: String,
    ) -> Self {
        Self {
            player_one_question,
            player_two_question,
            player_one_answer,
            player_two_answer,
        }
    }

    pub fn player_one_question(&self) -> &str {
        &self.player_one_question
    }

    pub fn player_two_question(&self) -> &str {
        &self.player_two_question
    }

    pub fn player_one_answer(&self) -> &str {
        &self.player_one_answer
    }

    pub fn player_two_answer(&self) -> &str {
        &self.player_two_answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_round() -> Round {
        Round::new(
            "Q1?".to_string(),
            "Q2?".to_string(),
            "A1".to_string(),
            "A2".to_string(),
        )
    }

    #[test]
    fn fields_follow_argument_order() {
        let round = make_round();

        assert_eq!(round.player_one_question(), "Q1?");
        assert_eq!(round.player_two_question(), "Q2?");
        assert_eq!(round.player_one_answer(), "A1");
        assert_eq!(round.player_two_answer(), "A2");
    }

    #[test]
    fn empty_text_makes_a_valid_round() {
        let round = Round::new(String::new(), String::new(), String::new(), String::new());

        assert_eq!(round.player_one_question(), "");
        assert_eq!(round.player_two_answer(), "");
        assert_eq!(round, Round::default());
    }
}
